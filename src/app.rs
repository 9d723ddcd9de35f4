use adw::Application;
use gtk4 as gtk;

use agenda_gtk::config::AppConfig;

const STYLE: &str = "
.chat-message { padding: 6px 10px; border-radius: 10px; }
.user-message { background-color: alpha(@accent_bg_color, 0.25); }
.assistant-message { background-color: alpha(@card_bg_color, 0.9); }
";

fn load_css() {
    let Some(display) = gtk::gdk::Display::default() else {
        log::warn!("No display available, skipping styles");
        return;
    };
    let provider = gtk::CssProvider::new();
    provider.load_from_data(STYLE);
    gtk::style_context_add_provider_for_display(
        &display,
        &provider,
        gtk::STYLE_PROVIDER_PRIORITY_APPLICATION,
    );
}

pub fn build_ui(app: &Application) {
    load_css();
    let config = AppConfig::load();
    log::info!("Using API at {}", config.api_url);
    crate::ui::main_window::show_main_window(app, config);
}

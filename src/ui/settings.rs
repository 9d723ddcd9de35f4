use adw::Application;
use adw::prelude::*;
use gtk4 as gtk;
use std::rc::Rc;

use agenda_gtk::api::ApiClient;
use agenda_gtk::config::AppConfig;
use agenda_gtk::utils::{normalize_url, spawn_local};

/// Lets the user point the client at another API and reopens the main
/// window against it.
pub fn show_settings_window(app: &Application, parent: &adw::ApplicationWindow, config: AppConfig) {
    let window = adw::ApplicationWindow::builder()
        .application(app)
        .transient_for(parent)
        .modal(true)
        .title("Servidor")
        .default_width(420)
        .default_height(220)
        .resizable(false)
        .build();

    let toast_overlay = adw::ToastOverlay::new();

    let root = gtk::Box::new(gtk::Orientation::Vertical, 12);
    root.set_margin_top(24);
    root.set_margin_bottom(24);
    root.set_margin_start(24);
    root.set_margin_end(24);

    let title = gtk::Label::new(Some("Conectar con la Agenda"));
    title.add_css_class("title-2");
    title.set_halign(gtk::Align::Start);
    root.append(&title);

    let url_entry = gtk::Entry::new();
    url_entry.set_placeholder_text(Some("URL de la API (p. ej. http://127.0.0.1:8000)"));
    url_entry.set_text(&config.api_url);
    url_entry.set_hexpand(true);
    root.append(&url_entry);

    let status = gtk::Label::new(None);
    status.add_css_class("dim-label");
    status.set_halign(gtk::Align::Start);
    root.append(&status);

    let save_btn = gtk::Button::with_label("Probar y guardar");
    save_btn.add_css_class("suggested-action");
    save_btn.set_halign(gtk::Align::End);
    root.append(&save_btn);

    toast_overlay.set_child(Some(&root));
    let container = gtk::Box::new(gtk::Orientation::Vertical, 0);
    let header = adw::HeaderBar::new();
    header.set_title_widget(Some(&gtk::Label::new(Some("Servidor"))));
    container.append(&header);
    container.append(&toast_overlay);
    window.set_content(Some(&container));

    let on_save = {
        let app = app.clone();
        let parent = parent.clone();
        let window = window.clone();
        let overlay = toast_overlay.clone();
        let url_entry = url_entry.clone();
        let save_btn = save_btn.clone();
        move || {
            let url = normalize_url(&url_entry.text());
            if url.is_empty() {
                overlay.add_toast(adw::Toast::new("Introduce la URL de la API."));
                return;
            }
            let api = match ApiClient::new(&url) {
                Ok(api) => api,
                Err(e) => {
                    overlay.add_toast(adw::Toast::new(&format!("URL no válida: {e}")));
                    return;
                }
            };

            status.set_label("Conectando…");
            save_btn.set_sensitive(false);

            let mut config = config.clone();
            let app = app.clone();
            let parent = parent.clone();
            let window = window.clone();
            let overlay = overlay.clone();
            let status = status.clone();
            let save_btn = save_btn.clone();
            spawn_local(async move {
                // The URL is kept even when the server does not answer yet.
                let message = match api.ping().await {
                    Ok(_) => "Conectado",
                    Err(e) => {
                        log::warn!("Server check for {url} failed: {e}");
                        "Guardado (servidor no disponible)"
                    }
                };
                status.set_label(message);
                save_btn.set_sensitive(true);

                config.api_url = url;
                if let Err(e) = config.save() {
                    log::error!("Failed to save config: {e}");
                    let text = format!("No se pudo guardar la configuración: {e}");
                    overlay.add_toast(adw::Toast::new(&text));
                    return;
                }
                crate::ui::main_window::show_main_window(&app, config);
                window.close();
                parent.close();
            });
        }
    };

    let on_save: Rc<dyn Fn()> = Rc::new(on_save);
    {
        let on_save = on_save.clone();
        save_btn.connect_clicked(move |_| (on_save)());
    }
    {
        let on_save = on_save.clone();
        url_entry.connect_activate(move |_| (on_save)());
    }

    window.present();
}

use adw::Application;
use adw::prelude::*;
use std::future::Future;
use std::rc::Rc;

use agenda_gtk::api::ApiClient;
use agenda_gtk::config::AppConfig;
use agenda_gtk::utils::spawn_local;
use agenda_gtk::ContactClient;

use crate::ui::contact_panel::RowAction;
use crate::ui::gtk_view::GtkContactView;

type Client = ContactClient<GtkContactView>;

/// Turn a client operation into a widget callback. Holds the client weakly
/// so the window can be closed and rebuilt.
fn bind<F, Fut>(client: &Rc<Client>, op: F) -> impl Fn() + 'static
where
    F: Fn(Rc<Client>) -> Fut + 'static,
    Fut: Future<Output = ()> + 'static,
{
    let weak = Rc::downgrade(client);
    move || {
        if let Some(client) = weak.upgrade() {
            spawn_local(op(client));
        }
    }
}

pub fn show_main_window(app: &Application, config: AppConfig) {
    let window = adw::ApplicationWindow::builder()
        .application(app)
        .title("Agenda")
        .default_width(1100)
        .default_height(700)
        .build();

    let overlay = adw::ToastOverlay::new();
    let view = GtkContactView::new(&window);

    let split = gtk4::Paned::new(gtk4::Orientation::Horizontal);
    split.set_start_child(Some(&view.contacts.widget()));
    split.set_end_child(Some(&view.chat.widget()));
    split.set_position(560);
    overlay.set_child(Some(&split));

    let container = gtk4::Box::new(gtk4::Orientation::Vertical, 0);
    let header = adw::HeaderBar::new();
    let titles = gtk4::Box::new(gtk4::Orientation::Vertical, 0);
    let title = gtk4::Label::new(Some("Agenda"));
    title.add_css_class("title");
    let status = gtk4::Label::new(Some(config.api_url.as_str()));
    status.add_css_class("dim-label");
    titles.append(&title);
    titles.append(&status);
    header.set_title_widget(Some(&titles));

    let settings_btn = gtk4::Button::with_label("Servidor");
    header.pack_end(&settings_btn);
    container.append(&header);
    container.append(&overlay);
    window.set_content(Some(&container));
    window.present();

    {
        let app = app.clone();
        let window = window.clone();
        let config = config.clone();
        settings_btn.connect_clicked(move |_| {
            crate::ui::settings::show_settings_window(&app, &window, config.clone());
        });
    }

    let api = match ApiClient::from_config(&config) {
        Ok(api) => api,
        Err(e) => {
            log::error!("Invalid API URL {}: {e}", config.api_url);
            status.set_label("URL de la API no válida");
            overlay.add_toast(adw::Toast::new(&format!("URL de la API no válida: {e}")));
            return;
        }
    };
    let client = Rc::new(ContactClient::new(api, view));
    wire_contacts(&client);
    wire_chat(&client);

    // The window owns the client; widget callbacks only hold it weakly.
    {
        let client = client.clone();
        window.connect_destroy(move |_| {
            log::debug!("Main window for {} closed", client.api().base_url());
        });
    }

    let load = bind(&client, |c| async move { c.list_contacts().await });
    load();

    let overlay_for_ping = overlay.clone();
    let ping = bind(&client, move |c| {
        let status = status.clone();
        let overlay = overlay_for_ping.clone();
        async move {
            match c.check_server().await {
                Ok(message) if !message.is_empty() => status.set_label(&message),
                Ok(_) => status.set_label("Conectado"),
                Err(e) => {
                    log::warn!("API root unreachable: {e}");
                    status.set_label("Sin conexión con la API");
                    let text = format!("No se pudo conectar con la API: {e}");
                    overlay.add_toast(adw::Toast::new(&text));
                }
            }
        }
    });
    ping();
}

fn wire_contacts(client: &Rc<Client>) {
    let panel = &client.view().contacts;

    let save = bind(client, |c| async move {
        let form = c.view().contacts.read_form();
        c.save_contact(form).await;
    });
    panel.save_btn.connect_clicked(move |_| save());

    {
        let weak = Rc::downgrade(client);
        panel.clear_btn.connect_clicked(move |_| {
            if let Some(c) = weak.upgrade() {
                c.clear_form();
            }
        });
    }

    let search: Rc<dyn Fn()> = Rc::new(bind(client, |c| async move {
        let id = c.view().contacts.search_text();
        c.search_contact(&id).await;
    }));
    {
        let search = search.clone();
        panel.search_btn.connect_clicked(move |_| (search)());
    }
    {
        let search = search.clone();
        panel.search_entry.connect_activate(move |_| (search)());
    }

    let reset = bind(client, |c| async move { c.list_contacts().await });
    panel.reset_btn.connect_clicked(move |_| reset());

    let weak = Rc::downgrade(client);
    panel.set_row_handler(Rc::new(move |action| {
        let Some(c) = weak.upgrade() else { return };
        spawn_local(async move {
            match action {
                RowAction::Edit(id) => c.edit_contact(&id).await,
                RowAction::Delete(id) => c.delete_contact(&id).await,
            }
        });
    }));
}

fn wire_chat(client: &Rc<Client>) {
    let chat = &client.view().chat;
    let send: Rc<dyn Fn()> = Rc::new(bind(client, |c| async move {
        let prompt = c.view().chat.prompt();
        c.send_chat_message(&prompt).await;
    }));
    {
        let send = send.clone();
        chat.send_btn.connect_clicked(move |_| (send)());
    }
    {
        let send = send.clone();
        let send_btn = chat.send_btn.clone();
        chat.entry.connect_activate(move |_| {
            // Enter must not bypass the disabled button while a reply is pending.
            if send_btn.is_sensitive() {
                (send)();
            }
        });
    }
}

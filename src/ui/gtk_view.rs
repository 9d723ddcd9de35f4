use adw::prelude::*;
use gtk4 as gtk;

use agenda_gtk::api::models::Contact;
use agenda_gtk::view::CONFIRM_DELETE;
use agenda_gtk::{ChatMessage, ContactForm, ContactView};

use crate::ui::chat_view::ChatView;
use crate::ui::contact_panel::ContactPanel;

const CANCEL: &str = "cancel";
const DELETE: &str = "delete";

/// The main window's widgets, as driven by the contact client.
pub struct GtkContactView {
    window: gtk::Window,
    pub contacts: ContactPanel,
    pub chat: ChatView,
}

impl GtkContactView {
    pub fn new(window: &impl IsA<gtk::Window>) -> Self {
        Self {
            window: window.clone().upcast(),
            contacts: ContactPanel::new(),
            chat: ChatView::new(),
        }
    }
}

impl ContactView for GtkContactView {
    fn render_contacts(&self, contacts: &[Contact]) {
        self.contacts.set_items(contacts);
    }

    fn render_notice(&self, message: &str) {
        self.contacts.set_notice(message);
    }

    fn fill_form(&self, form: &ContactForm) {
        self.contacts.fill_form(form);
    }

    fn clear_form(&self) {
        self.contacts.clear_form();
    }

    async fn confirm_delete(&self, id: &str) -> bool {
        let dialog = adw::MessageDialog::new(
            Some(&self.window),
            Some(CONFIRM_DELETE),
            Some(&format!("Contacto #{id}")),
        );
        dialog.add_responses(&[(CANCEL, "Cancelar"), (DELETE, "Eliminar")]);
        dialog.set_response_appearance(DELETE, adw::ResponseAppearance::Destructive);
        dialog.set_default_response(Some(CANCEL));
        dialog.set_close_response(CANCEL);
        dialog.choose_future().await.as_str() == DELETE
    }

    fn append_chat_message(&self, message: &ChatMessage) {
        self.chat.append(message);
    }

    fn clear_chat_input(&self) {
        self.chat.clear_input();
    }

    fn set_chat_enabled(&self, enabled: bool) {
        self.chat.set_enabled(enabled);
    }
}

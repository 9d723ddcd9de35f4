use std::future::Future;

use crate::api::models::Contact;

pub const NOT_FOUND_NOTICE: &str = "Contacto no encontrado.";
pub const SEARCH_ERROR_NOTICE: &str = "Error al buscar el contacto.";
pub const CHAT_ERROR_REPLY: &str = "Error al conectar con el asistente.";
pub const CONFIRM_DELETE: &str = "¿Estás seguro de que quieres eliminar este contacto?";

/// Contents of the contact form, as typed. `id` is the hidden field that
/// puts the form in edit mode.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub id: String,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub city: String,
    pub country: String,
    pub birth_date: String,
}

impl ContactForm {
    pub fn is_editing(&self) -> bool {
        !self.id.trim().is_empty()
    }

    /// Request body for this form. Optional fields go out as typed, empty
    /// strings included.
    pub fn to_contact(&self) -> Contact {
        Contact {
            id: None,
            name: self.name.clone(),
            phone: self.phone.clone(),
            email: Some(self.email.clone()),
            address: Some(self.address.clone()),
            city: Some(self.city.clone()),
            country: Some(self.country.clone()),
            birth_date: Some(self.birth_date.clone()),
        }
    }
}

/// Whether nombre and teléfono hold anything at all. Whitespace counts,
/// matching an HTML `required` field.
pub fn required_fields_filled(name: &str, phone: &str) -> bool {
    !name.is_empty() && !phone.is_empty()
}

impl From<&Contact> for ContactForm {
    fn from(c: &Contact) -> Self {
        Self {
            id: c.id.map(|id| id.to_string()).unwrap_or_default(),
            name: c.name.clone(),
            phone: c.phone.clone(),
            email: c.email.clone().unwrap_or_default(),
            address: c.address.clone().unwrap_or_default(),
            city: c.city.clone().unwrap_or_default(),
            country: c.country.clone().unwrap_or_default(),
            birth_date: c.birth_date.clone().unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatSender {
    User,
    Assistant,
}

impl ChatSender {
    pub fn css_class(self) -> &'static str {
        match self {
            ChatSender::User => "user-message",
            ChatSender::Assistant => "assistant-message",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub sender: ChatSender,
    pub text: String,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            sender: ChatSender::User,
            text: text.into(),
        }
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            sender: ChatSender::Assistant,
            text: text.into(),
        }
    }
}

/// Widgets the contact client drives. Implementations only touch their own
/// widgets; every method is called from the thread that owns them.
pub trait ContactView {
    /// Replace the whole list with `contacts`.
    fn render_contacts(&self, contacts: &[Contact]);

    /// Replace the whole list with a single message.
    fn render_notice(&self, message: &str);

    fn fill_form(&self, form: &ContactForm);

    fn clear_form(&self);

    /// Ask the user before deleting contact `id`.
    fn confirm_delete(&self, id: &str) -> impl Future<Output = bool>;

    fn append_chat_message(&self, message: &ChatMessage);

    fn clear_chat_input(&self);

    fn set_chat_enabled(&self, enabled: bool);
}

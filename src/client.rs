use crate::api::models::reply_text;
use crate::api::{ApiClient, ApiError};
use crate::view::{
    CHAT_ERROR_REPLY, ChatMessage, ContactForm, ContactView, NOT_FOUND_NOTICE, SEARCH_ERROR_NOTICE,
};

/// Keeps a [`ContactView`] in sync with the contacts API and relays chat
/// prompts to the assistant.
///
/// Every operation catches its own failures. Search and chat failures are
/// shown in the view; the others are only logged.
pub struct ContactClient<V> {
    api: ApiClient,
    view: V,
}

impl<V: ContactView> ContactClient<V> {
    pub fn new(api: ApiClient, view: V) -> Self {
        Self { api, view }
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    pub async fn list_contacts(&self) {
        match self.api.list_contacts().await {
            Ok(contacts) => self.view.render_contacts(&contacts),
            Err(e) => log::error!("Error al cargar contactos: {e}"),
        }
    }

    pub async fn search_contact(&self, id: &str) {
        let id = id.trim();
        if id.is_empty() {
            return self.list_contacts().await;
        }
        match self.api.get_contact(id).await {
            Ok(contact) => self.view.render_contacts(std::slice::from_ref(&contact)),
            Err(e) if e.is_rejection() => {
                log::info!("Contact {id} not found: {e}");
                self.view.render_notice(NOT_FOUND_NOTICE);
            }
            Err(e) => {
                log::error!("Error al buscar contacto: {e}");
                self.view.render_notice(SEARCH_ERROR_NOTICE);
            }
        }
    }

    /// Create or update depending on whether the form carries an id.
    pub async fn save_contact(&self, form: ContactForm) {
        let body = form.to_contact();
        let result = if form.is_editing() {
            self.api.update_contact(form.id.trim(), &body).await
        } else {
            self.api.create_contact(&body).await
        };
        match result {
            Ok(saved) => {
                log::debug!("Saved contact {:?}", saved.and_then(|c| c.id));
                self.clear_form();
                self.list_contacts().await;
            }
            Err(e) => log::error!("Error al guardar el contacto: {e}"),
        }
    }

    pub async fn edit_contact(&self, id: &str) {
        match self.api.get_contact(id).await {
            Ok(contact) => {
                let mut form = ContactForm::from(&contact);
                if form.id.is_empty() {
                    form.id = id.to_string();
                }
                self.view.fill_form(&form);
            }
            Err(e) => log::error!("Error al cargar contacto para editar: {e}"),
        }
    }

    pub async fn delete_contact(&self, id: &str) {
        if !self.view.confirm_delete(id).await {
            log::debug!("Delete of contact {id} cancelled");
            return;
        }
        match self.api.delete_contact(id).await {
            Ok(()) => self.list_contacts().await,
            Err(e) => log::error!("Error al eliminar el contacto: {e}"),
        }
    }

    pub fn clear_form(&self) {
        self.view.clear_form();
    }

    pub async fn send_chat_message(&self, prompt: &str) {
        let prompt = prompt.trim();
        if prompt.is_empty() {
            return;
        }

        self.view.append_chat_message(&ChatMessage::user(prompt));
        self.view.clear_chat_input();
        self.view.set_chat_enabled(false);
        let _enable = ChatSubmitGuard(&self.view);

        let reply = match self.api.chat(prompt).await {
            Ok(payload) => reply_text(&payload),
            Err(e) => {
                log::error!("Error en el chat: {e}");
                CHAT_ERROR_REPLY.to_string()
            }
        };
        self.view.append_chat_message(&ChatMessage::assistant(reply));
    }

    /// Welcome message from the API root.
    pub async fn check_server(&self) -> Result<String, ApiError> {
        self.api.ping().await
    }
}

/// Re-enables the chat submit control when the send completes or unwinds.
struct ChatSubmitGuard<'a, V: ContactView>(&'a V);

impl<V: ContactView> Drop for ChatSubmitGuard<'_, V> {
    fn drop(&mut self) {
        self.0.set_chat_enabled(true);
    }
}

pub mod chat_view;
pub mod contact_panel;
pub mod gtk_view;
pub mod main_window;
pub mod settings;

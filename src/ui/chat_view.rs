use gtk4 as gtk;
use gtk4::prelude::*;

use agenda_gtk::ChatMessage;
use agenda_gtk::ChatSender;

/// Assistant transcript with its input row.
pub struct ChatView {
    root: gtk::Box,
    scroller: gtk::ScrolledWindow,
    transcript: gtk::Box,
    pub entry: gtk::Entry,
    pub send_btn: gtk::Button,
}

impl ChatView {
    pub fn new() -> Self {
        let root = gtk::Box::new(gtk::Orientation::Vertical, 6);
        root.set_margin_top(8);
        root.set_margin_bottom(8);
        root.set_margin_start(8);
        root.set_margin_end(8);

        let title = gtk::Label::new(Some("Asistente"));
        title.add_css_class("heading");
        title.set_halign(gtk::Align::Start);
        root.append(&title);

        let scroller = gtk::ScrolledWindow::builder()
            .vexpand(true)
            .hexpand(true)
            .build();
        let transcript = gtk::Box::new(gtk::Orientation::Vertical, 6);
        scroller.set_child(Some(&transcript));
        root.append(&scroller);

        let input_row = gtk::Box::new(gtk::Orientation::Horizontal, 6);
        let entry = gtk::Entry::new();
        entry.set_hexpand(true);
        entry.set_placeholder_text(Some("Escribe un mensaje…"));
        let send_btn = gtk::Button::with_label("Enviar");
        send_btn.add_css_class("suggested-action");
        input_row.append(&entry);
        input_row.append(&send_btn);
        root.append(&input_row);

        Self {
            root,
            scroller,
            transcript,
            entry,
            send_btn,
        }
    }

    pub fn widget(&self) -> gtk::Widget {
        self.root.clone().upcast()
    }

    pub fn prompt(&self) -> String {
        self.entry.text().to_string()
    }

    pub fn append(&self, message: &ChatMessage) {
        let lbl = gtk::Label::new(Some(&message.text));
        lbl.set_wrap(true);
        lbl.set_selectable(true);
        lbl.set_xalign(0.0);
        lbl.add_css_class("chat-message");
        lbl.add_css_class(message.sender.css_class());
        lbl.set_halign(match message.sender {
            ChatSender::User => gtk::Align::End,
            ChatSender::Assistant => gtk::Align::Start,
        });
        self.transcript.append(&lbl);

        // The adjustment only grows after the next layout pass.
        let scroller = self.scroller.clone();
        glib::idle_add_local_once(move || {
            let adj = scroller.vadjustment();
            adj.set_value(adj.upper());
        });
    }

    pub fn clear_input(&self) {
        self.entry.set_text("");
    }

    pub fn set_enabled(&self, enabled: bool) {
        self.send_btn.set_sensitive(enabled);
    }
}

use gtk4 as gtk;
use gtk4::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;

use agenda_gtk::ContactForm;
use agenda_gtk::view::required_fields_filled;
use agenda_gtk::api::models::Contact;

#[derive(Debug, Clone)]
pub enum RowAction {
    Edit(String),
    Delete(String),
}

pub type RowHandler = Rc<dyn Fn(RowAction)>;

struct FormFields {
    name: gtk::Entry,
    phone: gtk::Entry,
    email: gtk::Entry,
    address: gtk::Entry,
    city: gtk::Entry,
    country: gtk::Entry,
    birth_date: gtk::Entry,
}

impl FormFields {
    fn all(&self) -> [&gtk::Entry; 7] {
        [
            &self.name,
            &self.phone,
            &self.email,
            &self.address,
            &self.city,
            &self.country,
            &self.birth_date,
        ]
    }
}

/// Contact form, search row and the contact list.
pub struct ContactPanel {
    root: gtk::Box,
    mode_label: gtk::Label,
    editing_id: RefCell<String>,
    fields: FormFields,
    pub save_btn: gtk::Button,
    pub clear_btn: gtk::Button,
    pub search_entry: gtk::Entry,
    pub search_btn: gtk::Button,
    pub reset_btn: gtk::Button,
    list: gtk::ListBox,
    on_row: RefCell<Option<RowHandler>>,
}

impl ContactPanel {
    pub fn new() -> Self {
        let root = gtk::Box::new(gtk::Orientation::Vertical, 8);
        root.set_margin_top(8);
        root.set_margin_bottom(8);
        root.set_margin_start(8);
        root.set_margin_end(8);

        let mode_label = gtk::Label::new(None);
        mode_label.add_css_class("heading");
        mode_label.set_halign(gtk::Align::Start);
        root.append(&mode_label);

        let grid = gtk::Grid::builder().row_spacing(6).column_spacing(8).build();
        let fields = FormFields {
            name: form_row(&grid, 0, "Nombre *", ""),
            phone: form_row(&grid, 1, "Teléfono *", ""),
            email: form_row(&grid, 2, "Email", ""),
            address: form_row(&grid, 3, "Dirección", ""),
            city: form_row(&grid, 4, "Ciudad", ""),
            country: form_row(&grid, 5, "País", ""),
            birth_date: form_row(&grid, 6, "Fecha de nacimiento", "AAAA-MM-DD"),
        };
        root.append(&grid);

        let actions = gtk::Box::new(gtk::Orientation::Horizontal, 6);
        actions.set_halign(gtk::Align::End);
        let clear_btn = gtk::Button::with_label("Limpiar");
        let save_btn = gtk::Button::with_label("Guardar");
        save_btn.add_css_class("suggested-action");
        actions.append(&clear_btn);
        actions.append(&save_btn);
        root.append(&actions);

        root.append(&gtk::Separator::new(gtk::Orientation::Horizontal));

        let search_row = gtk::Box::new(gtk::Orientation::Horizontal, 6);
        let search_entry = gtk::Entry::new();
        search_entry.set_placeholder_text(Some("Buscar por ID"));
        search_entry.set_hexpand(true);
        let search_btn = gtk::Button::with_label("Buscar");
        let reset_btn = gtk::Button::with_label("Mostrar todos");
        search_row.append(&search_entry);
        search_row.append(&search_btn);
        search_row.append(&reset_btn);
        root.append(&search_row);

        let title = gtk::Label::new(Some("Contactos"));
        title.add_css_class("heading");
        title.set_halign(gtk::Align::Start);
        root.append(&title);

        let scroller = gtk::ScrolledWindow::builder()
            .vexpand(true)
            .hexpand(true)
            .build();
        let list = gtk::ListBox::new();
        list.set_selection_mode(gtk::SelectionMode::None);
        scroller.set_child(Some(&list));
        root.append(&scroller);

        // Nombre and teléfono are required before saving.
        {
            let save_btn = save_btn.clone();
            let name = fields.name.clone();
            let phone = fields.phone.clone();
            let update = Rc::new(move || {
                save_btn.set_sensitive(required_fields_filled(&name.text(), &phone.text()));
            });
            update();
            for entry in [&fields.name, &fields.phone] {
                let update = update.clone();
                entry.connect_changed(move |_| update());
            }
        }

        let panel = Self {
            root,
            mode_label,
            editing_id: RefCell::new(String::new()),
            fields,
            save_btn,
            clear_btn,
            search_entry,
            search_btn,
            reset_btn,
            list,
            on_row: RefCell::new(None),
        };
        panel.update_mode();
        panel
    }

    pub fn widget(&self) -> gtk::Widget {
        self.root.clone().upcast()
    }

    pub fn set_row_handler(&self, handler: RowHandler) {
        *self.on_row.borrow_mut() = Some(handler);
    }

    pub fn search_text(&self) -> String {
        self.search_entry.text().to_string()
    }

    pub fn read_form(&self) -> ContactForm {
        let f = &self.fields;
        ContactForm {
            id: self.editing_id.borrow().clone(),
            name: f.name.text().to_string(),
            phone: f.phone.text().to_string(),
            email: f.email.text().to_string(),
            address: f.address.text().to_string(),
            city: f.city.text().to_string(),
            country: f.country.text().to_string(),
            birth_date: f.birth_date.text().to_string(),
        }
    }

    pub fn fill_form(&self, form: &ContactForm) {
        let f = &self.fields;
        *self.editing_id.borrow_mut() = form.id.clone();
        f.name.set_text(&form.name);
        f.phone.set_text(&form.phone);
        f.email.set_text(&form.email);
        f.address.set_text(&form.address);
        f.city.set_text(&form.city);
        f.country.set_text(&form.country);
        f.birth_date.set_text(&form.birth_date);
        self.update_mode();
    }

    pub fn clear_form(&self) {
        self.editing_id.borrow_mut().clear();
        for entry in self.fields.all() {
            entry.set_text("");
        }
        self.update_mode();
    }

    fn update_mode(&self) {
        let id = self.editing_id.borrow();
        if id.is_empty() {
            self.mode_label.set_label("Nuevo contacto");
        } else {
            self.mode_label.set_label(&format!("Editando contacto #{id}"));
        }
    }

    fn clear_list(&self) {
        while let Some(child) = self.list.first_child() {
            self.list.remove(&child);
        }
    }

    pub fn set_items(&self, contacts: &[Contact]) {
        self.clear_list();
        let handler = self.on_row.borrow().clone();
        for contact in contacts {
            let row = gtk::ListBoxRow::new();
            row.set_activatable(false);
            let line = gtk::Box::new(gtk::Orientation::Horizontal, 6);
            line.set_margin_top(6);
            line.set_margin_bottom(6);
            line.set_margin_start(8);
            line.set_margin_end(8);

            let label = gtk::Label::new(Some(&contact.summary()));
            label.set_halign(gtk::Align::Start);
            label.set_hexpand(true);
            line.append(&label);

            if let (Some(id), Some(handler)) = (contact.id, handler.as_ref()) {
                let id = id.to_string();
                let edit_btn = gtk::Button::with_label("Editar");
                let delete_btn = gtk::Button::with_label("Eliminar");
                delete_btn.add_css_class("destructive-action");
                {
                    let handler = handler.clone();
                    let id = id.clone();
                    edit_btn.connect_clicked(move |_| handler(RowAction::Edit(id.clone())));
                }
                {
                    let handler = handler.clone();
                    delete_btn.connect_clicked(move |_| handler(RowAction::Delete(id.clone())));
                }
                line.append(&edit_btn);
                line.append(&delete_btn);
            }

            row.set_child(Some(&line));
            self.list.append(&row);
        }
    }

    pub fn set_notice(&self, message: &str) {
        self.clear_list();
        let label = gtk::Label::new(Some(message));
        label.add_css_class("dim-label");
        label.set_margin_top(12);
        label.set_margin_bottom(12);
        self.list.append(&label);
    }
}

fn form_row(grid: &gtk::Grid, row: i32, title: &str, placeholder: &str) -> gtk::Entry {
    let label = gtk::Label::new(Some(title));
    label.set_halign(gtk::Align::Start);
    let entry = gtk::Entry::new();
    entry.set_hexpand(true);
    if !placeholder.is_empty() {
        entry.set_placeholder_text(Some(placeholder));
    }
    grid.attach(&label, 0, row, 1, 1);
    grid.attach(&entry, 1, row, 1, 1);
    entry
}

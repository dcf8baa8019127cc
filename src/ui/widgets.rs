use eframe::egui::{self, RichText, Ui};

/// Top-level section heading.
pub fn section(ui: &mut Ui, title: &str) {
    ui.add_space(12.0);
    ui.heading(title);
    ui.separator();
}

/// Smaller heading inside a section.
pub fn subsection(ui: &mut Ui, title: &str) {
    ui.add_space(6.0);
    ui.label(RichText::new(title).strong().size(16.0));
}

/// Labelled dropdown over `options`. Picking an entry stores it in `current`.
pub fn select_one(
    ui: &mut Ui,
    id: &str,
    label: &str,
    options: &[&str],
    current: &mut Option<String>,
) {
    ui.label(label);
    let shown = current.clone().unwrap_or_default();
    egui::ComboBox::from_id_salt(id)
        .selected_text(&shown)
        .width(260.0)
        .show_ui(ui, |ui: &mut Ui| {
            for opt in options {
                if ui.selectable_label(shown == *opt, *opt).clicked() {
                    *current = Some(opt.to_string());
                }
            }
        });
}

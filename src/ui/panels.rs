use eframe::egui::{self, Color32, RichText, Ui};

use crate::state::{AppState, View};

// ---------------------------------------------------------------------------
// Left side panel – logo and navigation
// ---------------------------------------------------------------------------

/// Render the left navigation panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    // ---- Logo (centered) ----
    if let Some(path) = &state.logo {
        let uri = format!("file://{}", path.display());
        ui.vertical_centered(|ui: &mut Ui| {
            ui.add(
                egui::Image::new(uri)
                    .max_width(ui.available_width() * 0.8)
                    .max_height(120.0)
                    .corner_radius(4.0),
            );
        });
        ui.add_space(4.0);
    }

    ui.heading("Navigation");
    ui.separator();

    ui.label("Go to");
    let mut selected = state.view;
    for view in View::ALL {
        ui.radio_value(&mut selected, view, view.label());
    }
    state.set_view(selected);
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the title bar with a summary of what was loaded.
pub fn top_bar(ui: &mut Ui, state: &AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.heading("Olympics 2024 Medal Analysis");

        ui.separator();

        let ds = &state.dataset;
        ui.label(format!(
            "{} teams, {} competition results",
            ds.medals.len(),
            ds.competitions.len()
        ));

        if ds.inconsistent_rows > 0 {
            ui.separator();
            ui.label(
                RichText::new(format!(
                    "{} rows where gold + silver + bronze ≠ total",
                    ds.inconsistent_rows
                ))
                .color(Color32::RED),
            );
        }
    });
}

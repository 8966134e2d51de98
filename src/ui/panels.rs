use eframe::egui::{self, Color32, RichText, Ui};

use crate::data::model::{ProductType, Segment};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – filter widgets
// ---------------------------------------------------------------------------

/// Render the left filter panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filters");
    ui.separator();

    ui.strong("Segment");
    let current_segment = state.criteria.segment.clone();
    egui::ComboBox::from_id_salt("segment")
        .selected_text(current_segment.label())
        .show_ui(ui, |ui: &mut Ui| {
            for segment in Segment::ALL {
                if ui
                    .selectable_label(current_segment == segment, segment.label())
                    .clicked()
                {
                    state.set_segment(segment);
                }
            }
        });
    ui.add_space(8.0);

    ui.strong("Product Type");
    let current_product = state.criteria.product_type.clone();
    egui::ComboBox::from_id_salt("product_type")
        .selected_text(current_product.label())
        .show_ui(ui, |ui: &mut Ui| {
            for product_type in ProductType::ALL {
                if ui
                    .selectable_label(current_product == product_type, product_type.label())
                    .clicked()
                {
                    state.set_product_type(product_type);
                }
            }
        });

    ui.separator();
    if state.plans.is_ok() {
        ui.label(format!("{} matching plans", state.visible_plans.len()));
    }
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open data folder…").clicked() {
                open_data_dialog(state);
                ui.close_menu();
            }
            if ui.button("Reload data").clicked() {
                state.reload();
                ui.close_menu();
            }
        });

        ui.separator();

        let (shares, plans, competitors) = state.row_counts();
        let count = |n: Option<usize>| n.map_or_else(|| "–".to_string(), |n| n.to_string());
        ui.label(format!(
            "{} carriers, {} plans, {} competitor profiles",
            count(shares),
            count(plans),
            count(competitors)
        ));

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// Folder dialog
// ---------------------------------------------------------------------------

pub fn open_data_dialog(state: &mut AppState) {
    let mut dialog = rfd::FileDialog::new().set_title("Open data folder");
    if let Some(dir) = state.data.sources().plans.parent() {
        dialog = dialog.set_directory(dir);
    }

    if let Some(dir) = dialog.pick_folder() {
        state.open_data_dir(&dir);
    }
}

use eframe::egui::Ui;
use egui_extras::{Column, TableBuilder};

use crate::data::model::PlanRecord;
use crate::data::projection::{plan_table, PLAN_COLUMNS};

// ---------------------------------------------------------------------------
// Plan comparison table
// ---------------------------------------------------------------------------

/// Render the filtered plans, one row per plan, columns in fixed order.
pub fn plan_comparison(ui: &mut Ui, plans: &[PlanRecord]) {
    let rows = plan_table(plans);

    TableBuilder::new(ui)
        .striped(true)
        .vscroll(false)
        .columns(Column::auto().resizable(true), PLAN_COLUMNS.len())
        .header(20.0, |mut header| {
            for name in PLAN_COLUMNS {
                header.col(|ui| {
                    ui.strong(name);
                });
            }
        })
        .body(|mut body| {
            for cells in &rows {
                body.row(18.0, |mut row| {
                    for cell in cells {
                        row.col(|ui| {
                            ui.label(cell.as_str());
                        });
                    }
                });
            }
        });

    if rows.is_empty() {
        ui.weak("No plans match the selected segment and product type.");
    }
}

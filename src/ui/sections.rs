use eframe::egui::{Color32, RichText, Ui};

use crate::data::error::DataLoadError;
use crate::data::projection::{
    competitor_blocks, COMPETITOR_HEADING, INSIGHTS_HEADING, INTRO, KEY_INSIGHTS,
    MARKET_SHARE_HEADING, PAGE_TITLE, PLAN_HEADING,
};
use crate::state::AppState;
use crate::ui::{chart, table};

// ---------------------------------------------------------------------------
// Central panel – dashboard body
// ---------------------------------------------------------------------------

/// Render every section top to bottom. A section whose source failed to
/// load shows the error instead of its content.
pub fn dashboard(ui: &mut Ui, state: &AppState) {
    ui.heading(RichText::new(PAGE_TITLE).size(26.0));
    ui.label(INTRO);
    ui.add_space(12.0);

    ui.heading(MARKET_SHARE_HEADING);
    match &state.market_share {
        Ok(rows) => chart::market_share_pie(ui, rows),
        Err(e) => load_error(ui, e),
    }
    ui.add_space(12.0);

    ui.heading(PLAN_HEADING);
    match &state.plans {
        Ok(_) => table::plan_comparison(ui, &state.visible_plans),
        Err(e) => load_error(ui, e),
    }
    ui.add_space(12.0);

    ui.heading(COMPETITOR_HEADING);
    match &state.competitors {
        Ok(profiles) => {
            for block in competitor_blocks(profiles) {
                ui.label(RichText::new(&block.heading).strong().size(18.0));
                bullet(ui, "Strengths", &block.strengths);
                bullet(ui, "Weaknesses", &block.weaknesses);
                ui.add_space(6.0);
            }
        }
        Err(e) => load_error(ui, e),
    }
    ui.add_space(12.0);

    ui.heading(INSIGHTS_HEADING);
    for insight in KEY_INSIGHTS {
        ui.label(format!("• {insight}"));
    }
}

fn bullet(ui: &mut Ui, title: &str, text: &str) {
    ui.horizontal_wrapped(|ui: &mut Ui| {
        ui.label("•");
        ui.strong(format!("{title}:"));
        ui.label(text);
    });
}

fn load_error(ui: &mut Ui, err: &DataLoadError) {
    let text = if err.is_schema() {
        format!("Data file has an unexpected shape: {err}")
    } else {
        format!("Could not load data: {err}")
    };
    ui.label(RichText::new(text).color(Color32::RED));
}

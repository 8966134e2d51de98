use std::collections::HashMap;
use std::f64::consts::TAU;

use eframe::egui::{Color32, RichText, Stroke, Ui};
use egui_plot::{Legend, Plot, PlotPoints, Polygon};

use crate::color::slice_colors;
use crate::data::model::MarketShareRow;
use crate::data::projection::{pie_slices, PieSlice, MARKET_SHARE_CHART_TITLE};

/// Maximum angle covered by one straight edge of a wedge's arc.
const ARC_STEP: f64 = TAU / 180.0;

// ---------------------------------------------------------------------------
// Market share pie (central panel)
// ---------------------------------------------------------------------------

/// Render the market-share pie chart with a carrier legend.
///
/// egui_plot merges legend entries by name, so a carrier listed more than
/// once gets a numbered label per row (see [`legend_labels`]).
pub fn market_share_pie(ui: &mut Ui, rows: &[MarketShareRow]) {
    let slices = pie_slices(rows);
    let colors = slice_colors(&slices);
    let labels = legend_labels(&slices);

    ui.label(RichText::new(MARKET_SHARE_CHART_TITLE).strong());
    if slices.iter().all(|s| s.fraction == 0.0) {
        ui.label("No market share to show.");
        return;
    }

    Plot::new("market_share_pie")
        .legend(Legend::default())
        .height(320.0)
        .data_aspect(1.0)
        .show_axes(false)
        .show_grid(false)
        .show_x(false)
        .show_y(false)
        .allow_boxed_zoom(false)
        .allow_drag(false)
        .allow_scroll(false)
        .allow_zoom(false)
        .show(ui, |plot_ui| {
            for ((slice, color), label) in slices.iter().zip(colors).zip(labels) {
                if slice.fraction <= 0.0 {
                    continue;
                }
                let points: PlotPoints = wedge_outline(slice.start, slice.fraction)
                    .into_iter()
                    .collect();
                let wedge = Polygon::new(points)
                    .name(label)
                    .fill_color(color)
                    .stroke(Stroke::new(1.0, Color32::WHITE));

                plot_ui.polygon(wedge);
            }
        });
}

/// Legend text per slice: `carrier (share%)`, with `#n` appended to the
/// second and later rows of a repeated carrier.
pub fn legend_labels(slices: &[PieSlice]) -> Vec<String> {
    let mut seen: HashMap<&str, usize> = HashMap::new();
    slices
        .iter()
        .map(|slice| {
            let n = seen.entry(slice.carrier.as_str()).or_insert(0);
            *n += 1;
            if *n == 1 {
                format!("{} ({}%)", slice.carrier, slice.value)
            } else {
                format!("{} #{n} ({}%)", slice.carrier, slice.value)
            }
        })
        .collect()
}

/// Closed outline of a unit-radius wedge: the centre followed by the arc.
///
/// `start` and `fraction` are portions of a full turn; angles run clockwise
/// from twelve o'clock.
pub fn wedge_outline(start: f64, fraction: f64) -> Vec<[f64; 2]> {
    let sweep = fraction * TAU;
    let steps = ((sweep / ARC_STEP).ceil() as usize).max(1);

    let mut points = Vec::with_capacity(steps + 2);
    points.push([0.0, 0.0]);
    for i in 0..=steps {
        let angle = start * TAU + sweep * (i as f64 / steps as f64);
        points.push([angle.sin(), angle.cos()]);
    }
    points
}

use std::ops::RangeInclusive;

use eframe::egui::Ui;
use egui_plot::{Corner, GridMark, Legend, Line, Plot, PlotPoint, PlotPoints, Points};

use crate::chart::LegendPosition;
use crate::state::AppState;

/// Frequencies are proportions; the y axis is labelled in percent.
const PERCENT: f64 = 100.0;

// ---------------------------------------------------------------------------
// Trend chart (central panel)
// ---------------------------------------------------------------------------

/// Render the chart for the last search, or a prompt before the first one.
///
/// `reset` drops any zoom/pan left over from the previous chart.
pub fn trend_plot(ui: &mut Ui, state: &AppState, reset: bool) {
    let Some(display) = state.display() else {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.label("Enter some words and press Search to see their trends.");
        });
        return;
    };

    let options = &display.options;
    let chart = &display.chart;

    ui.vertical_centered(|ui: &mut Ui| {
        ui.heading(&options.title);
    });

    let mut plot = Plot::new("trend_plot")
        .x_axis_label(options.axis_titles.x.as_str())
        .y_axis_label(options.axis_titles.y.as_str())
        .x_axis_formatter(year_tick)
        .label_formatter(|name: &str, value: &PlotPoint| {
            if name.is_empty() {
                String::new()
            } else {
                format!("{name}\n{}: {:.4} %", value.x.round() as i64, value.y)
            }
        })
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true);

    if reset {
        plot = plot.reset();
    }
    if options.legend.visible {
        plot = plot.legend(Legend::default().position(legend_corner(options.legend.position)));
    }

    plot.show(ui, |plot_ui| {
        for dataset in &chart.datasets {
            let xy: Vec<[f64; 2]> = chart
                .labels
                .iter()
                .zip(dataset.data.iter())
                .map(|(&year, &freq)| [year as f64, freq * PERCENT])
                .collect();

            plot_ui.line(
                Line::new(PlotPoints::from(xy.clone()))
                    .name(&dataset.label)
                    .color(dataset.border_color)
                    .width(2.0),
            );
            plot_ui.points(
                Points::new(PlotPoints::from(xy))
                    .name(&dataset.label)
                    .color(dataset.border_color)
                    .radius(3.0),
            );
        }
    });
}

/// Years are whole numbers; hide fractional grid marks when zoomed in.
fn year_tick(mark: GridMark, _range: &RangeInclusive<f64>) -> String {
    if mark.value.fract().abs() < f64::EPSILON {
        format!("{}", mark.value as i64)
    } else {
        String::new()
    }
}

fn legend_corner(position: LegendPosition) -> Corner {
    match position {
        LegendPosition::Top | LegendPosition::Left => Corner::LeftTop,
        LegendPosition::Right => Corner::RightTop,
        LegendPosition::Bottom => Corner::LeftBottom,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn legend_positions_map_to_corners() {
        assert_eq!(legend_corner(LegendPosition::Bottom), Corner::LeftBottom);
        assert_eq!(legend_corner(LegendPosition::Right), Corner::RightTop);
        assert_eq!(legend_corner(LegendPosition::Top), Corner::LeftTop);
        assert_eq!(legend_corner(LegendPosition::Left), Corner::LeftTop);
    }
}

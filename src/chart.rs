use eframe::egui::Color32;
use serde::Serialize;

use crate::color::{serialize_css, ColorSource};
use crate::data::model::AlignedChartData;

// ---------------------------------------------------------------------------
// Chart options
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AxisTitles {
    pub x: String,
    pub y: String,
}

/// Legend placements the chart options recognise. Searches always place the
/// legend at the bottom; the plot maps every variant to a corner.
#[allow(dead_code)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LegendPosition {
    Top,
    Bottom,
    Left,
    Right,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegendOptions {
    pub visible: bool,
    pub position: LegendPosition,
}

/// Everything the plot needs besides the data itself.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartOptions {
    pub axis_titles: AxisTitles,
    pub legend: LegendOptions,
    pub title: String,
}

impl ChartOptions {
    /// Options for a chart produced by searching `query`. The query is
    /// interpolated verbatim.
    pub fn for_query(query: &str) -> Self {
        Self {
            axis_titles: AxisTitles {
                x: "Year".to_string(),
                y: "Frequency (%)".to_string(),
            },
            legend: LegendOptions {
                visible: true,
                position: LegendPosition::Bottom,
            },
            title: format!("Ngram Trends for: {query}"),
        }
    }
}

// ---------------------------------------------------------------------------
// ChartSpec – labels + coloured datasets handed to the plot
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub label: String,
    pub data: Vec<f64>,
    #[serde(serialize_with = "serialize_css")]
    pub border_color: Color32,
    #[serde(serialize_with = "serialize_css")]
    pub background_color: Color32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSpec {
    pub labels: Vec<i32>,
    pub datasets: Vec<Dataset>,
}

impl ChartSpec {
    /// Attach one colour per aligned series, drawn from `colors` in series order.
    pub fn build(data: &AlignedChartData, colors: &mut dyn ColorSource) -> Self {
        let datasets = data
            .series
            .iter()
            .map(|s| Dataset {
                label: s.name.clone(),
                data: s.values.clone(),
                border_color: colors.next_color(),
                background_color: Color32::TRANSPARENT,
            })
            .collect();

        ChartSpec {
            labels: data.axis.clone(),
            datasets,
        }
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;
    use crate::color::FixedColors;
    use crate::data::model::AlignedSeries;

    fn aligned() -> AlignedChartData {
        AlignedChartData {
            axis: vec![1900, 2020],
            series: vec![
                AlignedSeries {
                    name: "early".into(),
                    values: vec![0.1, 0.0],
                },
                AlignedSeries {
                    name: "late".into(),
                    values: vec![0.0, 0.2],
                },
            ],
        }
    }

    #[test]
    fn options_for_query() {
        let opts = ChartOptions::for_query("apple, banana");
        assert_eq!(opts.title, "Ngram Trends for: apple, banana");
        assert_eq!(opts.axis_titles.x, "Year");
        assert_eq!(opts.axis_titles.y, "Frequency (%)");
        assert_eq!(
            opts.legend,
            LegendOptions {
                visible: true,
                position: LegendPosition::Bottom
            }
        );
    }

    #[test]
    fn build_assigns_colours_in_series_order() {
        let red = Color32::from_rgb(200, 0, 0);
        let blue = Color32::from_rgb(0, 0, 200);
        let spec = ChartSpec::build(&aligned(), &mut FixedColors::new(vec![red, blue]));

        assert_eq!(spec.labels, vec![1900, 2020]);
        assert_eq!(spec.datasets.len(), 2);
        assert_eq!(spec.datasets[0].label, "early");
        assert_eq!(spec.datasets[0].border_color, red);
        assert_eq!(spec.datasets[1].border_color, blue);
        assert_eq!(spec.datasets[1].data, vec![0.0, 0.2]);
        assert!(spec
            .datasets
            .iter()
            .all(|d| d.background_color == Color32::TRANSPARENT));
    }

    #[test]
    fn serialises_as_chart_object() {
        let spec = ChartSpec::build(
            &aligned(),
            &mut FixedColors::new(vec![Color32::from_rgb(1, 2, 3)]),
        );
        let value = serde_json::to_value(&spec).unwrap();
        assert_eq!(
            value,
            json!({
                "labels": [1900, 2020],
                "datasets": [
                    {
                        "label": "early",
                        "data": [0.1, 0.0],
                        "borderColor": "rgb(1, 2, 3)",
                        "backgroundColor": "rgba(0,0,0,0)"
                    },
                    {
                        "label": "late",
                        "data": [0.0, 0.2],
                        "borderColor": "rgb(1, 2, 3)",
                        "backgroundColor": "rgba(0,0,0,0)"
                    }
                ]
            })
        );
    }

    #[test]
    fn options_serialise_with_camel_case_keys() {
        let value = serde_json::to_value(ChartOptions::for_query("x")).unwrap();
        assert_eq!(value["axisTitles"]["y"], "Frequency (%)");
        assert_eq!(value["legend"]["position"], "bottom");
    }

    #[test]
    fn empty_data_builds_empty_spec() {
        let mut colors = FixedColors::new(vec![Color32::BLACK]);
        let spec = ChartSpec::build(&AlignedChartData::default(), &mut colors);
        assert!(spec.labels.is_empty());
        assert!(spec.datasets.is_empty());
        assert!(spec.to_json_pretty().unwrap().contains("\"datasets\": []"));
    }
}

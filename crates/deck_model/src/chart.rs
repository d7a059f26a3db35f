//! Chart model types
//!
//! Charts carry their own typed data payload. The factory seeds a sample
//! dataset at creation; real data entry happens elsewhere in the editor.

use crate::Color;
use serde::{Deserialize, Serialize};

/// Kind of chart rendered for a chart element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ChartType {
    #[default]
    Pie,
    Doughnut,
    Bar,
    Line,
}

impl ChartType {
    /// Resolve a user-entered selector.
    ///
    /// Accepts the numeric menu choice (`"1"`..`"4"`) or a type name;
    /// anything unrecognized falls back to `Pie` rather than failing.
    pub fn from_selector(selector: &str) -> Self {
        match selector.trim().to_ascii_lowercase().as_str() {
            "1" | "pie" => ChartType::Pie,
            "2" | "doughnut" => ChartType::Doughnut,
            "3" | "bar" => ChartType::Bar,
            "4" | "line" => ChartType::Line,
            _ => ChartType::Pie,
        }
    }
}

/// One data series of a chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries {
    pub label: String,
    pub color: Color,
    pub data: Vec<f64>,
}

/// Labels and series for a chart element.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<ChartSeries>,
}

impl ChartData {
    /// The placeholder dataset seeded by the factory: four quarterly points.
    pub fn sample() -> Self {
        Self {
            labels: vec!["Q1".into(), "Q2".into(), "Q3".into(), "Q4".into()],
            datasets: vec![ChartSeries {
                label: "Sample Data".into(),
                color: Color::rgb(0x3B, 0x82, 0xF6),
                data: vec![30.0, 45.0, 60.0, 40.0],
            }],
        }
    }
}

/// Display options for a chart element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartOptions {
    pub legend: bool,
    pub data_labels: bool,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            legend: true,
            data_labels: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selector_maps_menu_choices() {
        assert_eq!(ChartType::from_selector("1"), ChartType::Pie);
        assert_eq!(ChartType::from_selector("2"), ChartType::Doughnut);
        assert_eq!(ChartType::from_selector("3"), ChartType::Bar);
        assert_eq!(ChartType::from_selector("4"), ChartType::Line);
    }

    #[test]
    fn selector_accepts_names() {
        assert_eq!(ChartType::from_selector("Bar"), ChartType::Bar);
        assert_eq!(ChartType::from_selector(" line "), ChartType::Line);
    }

    #[test]
    fn unrecognized_selector_defaults_to_pie() {
        assert_eq!(ChartType::from_selector("7"), ChartType::Pie);
        assert_eq!(ChartType::from_selector("scatter"), ChartType::Pie);
        assert_eq!(ChartType::from_selector(""), ChartType::Pie);
    }

    #[test]
    fn sample_data_has_four_points() {
        let data = ChartData::sample();
        assert_eq!(data.labels.len(), 4);
        assert_eq!(data.datasets.len(), 1);
        assert_eq!(data.datasets[0].data, vec![30.0, 45.0, 60.0, 40.0]);
    }
}

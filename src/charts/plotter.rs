//! Chart Plotter Module
//! Builds the interactive aging charts with Plotly and writes each one
//! to a standalone HTML file.

use crate::data::{DataProcessor, ProcessorError, COL_CHARGE_TRANSFER, COL_IMPEDANCE};
use log::info;
use plotly::color::NamedColor;
use plotly::common::{Line, Mode, Title};
use plotly::layout::themes::PLOTLY_WHITE;
use plotly::layout::{Axis, Layout};
use plotly::{Plot, Scatter};
use polars::prelude::DataFrame;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Fixed output filenames, one per chart.
pub const IMPEDANCE_CHART_FILE: &str = "battery_impedance_vs_cycles.html";
pub const CHARGE_TRANSFER_CHART_FILE: &str = "charge_transfer_resistance_vs_cycles.html";
pub const COMBINED_CHART_FILE: &str = "combined_resistance_vs_cycles.html";

/// Series colors
const IMPEDANCE_COLOR: NamedColor = NamedColor::Blue;
const CHARGE_TRANSFER_COLOR: NamedColor = NamedColor::Red;

const X_AXIS_TITLE: &str = "Cycle Number";
const Y_AXIS_TITLE: &str = "Resistance (Ohms)";

#[derive(Error, Debug)]
pub enum ChartError {
    #[error("Failed to extract chart data: {0}")]
    DataError(#[from] ProcessorError),
    #[error("Failed to write chart '{path}': {source}")]
    WriteError {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Aligned resistance series extracted from the cleaned table.
#[derive(Debug, Clone)]
pub struct ResistanceSeries {
    pub cycles: Vec<i64>,
    pub impedance: Vec<f64>,
    pub charge_transfer: Vec<f64>,
}

impl ResistanceSeries {
    /// Pull the cycle index and both resistance columns out of a table
    /// that has already had incomplete rows dropped, preserving row
    /// order so the three vectors stay aligned.
    pub fn from_dataframe(df: &DataFrame) -> Result<Self, ChartError> {
        Ok(Self {
            cycles: DataProcessor::cycle_values(df)?,
            impedance: DataProcessor::column_values(df, COL_IMPEDANCE)?,
            charge_transfer: DataProcessor::column_values(df, COL_CHARGE_TRANSFER)?,
        })
    }
}

/// Builds the three aging charts and writes them to disk.
pub struct AgingChartPlotter;

impl AgingChartPlotter {
    /// Battery impedance (Re) vs cycle number.
    pub fn impedance_chart(series: &ResistanceSeries) -> Plot {
        let trace = Scatter::new(series.cycles.clone(), series.impedance.clone())
            .mode(Mode::LinesMarkers)
            .name("Estimated Electrolyte Resistance (Re)")
            .line(Line::new().color(IMPEDANCE_COLOR));

        let mut plot = Plot::new();
        plot.add_trace(trace);
        plot.set_layout(Self::layout("Battery Electrolyte Resistance (Re) During Aging"));
        plot
    }

    /// Charge transfer resistance (Rct) vs cycle number.
    pub fn charge_transfer_chart(series: &ResistanceSeries) -> Plot {
        let trace = Scatter::new(series.cycles.clone(), series.charge_transfer.clone())
            .mode(Mode::LinesMarkers)
            .name("Estimated Charge Transfer Resistance (Rct)")
            .line(Line::new().color(CHARGE_TRANSFER_COLOR));

        let mut plot = Plot::new();
        plot.add_trace(trace);
        plot.set_layout(Self::layout("Charge Transfer Resistance (Rct) During Aging"));
        plot
    }

    /// Both resistance parameters overlaid on one chart.
    pub fn combined_chart(series: &ResistanceSeries) -> Plot {
        let impedance = Scatter::new(series.cycles.clone(), series.impedance.clone())
            .mode(Mode::LinesMarkers)
            .name("Electrolyte Resistance (Re)")
            .line(Line::new().color(IMPEDANCE_COLOR));
        let charge_transfer = Scatter::new(series.cycles.clone(), series.charge_transfer.clone())
            .mode(Mode::LinesMarkers)
            .name("Charge Transfer Resistance (Rct)")
            .line(Line::new().color(CHARGE_TRANSFER_COLOR));

        let mut plot = Plot::new();
        plot.add_trace(impedance);
        plot.add_trace(charge_transfer);
        plot.set_layout(Self::layout("Battery Resistance Parameters During Aging"));
        plot
    }

    /// Shared layout: title, axis labels, white theme.
    fn layout(title: &str) -> Layout {
        Layout::new()
            .title(Title::with_text(title))
            .x_axis(Axis::new().title(Title::with_text(X_AXIS_TITLE)))
            .y_axis(Axis::new().title(Title::with_text(Y_AXIS_TITLE)))
            .template(&*PLOTLY_WHITE)
    }

    /// Serialize a chart to a self-contained interactive HTML file.
    pub fn write_chart(plot: &Plot, path: &Path) -> Result<(), ChartError> {
        fs::write(path, plot.to_html()).map_err(|source| ChartError::WriteError {
            path: path.to_path_buf(),
            source,
        })?;
        info!("Wrote {}", path.display());
        Ok(())
    }

    /// Build and write all three charts to their fixed filenames, in
    /// order. A write failure aborts the remaining charts; files already
    /// written stay on disk.
    pub fn write_all(series: &ResistanceSeries, out_dir: &Path) -> Result<(), ChartError> {
        Self::write_chart(
            &Self::impedance_chart(series),
            &out_dir.join(IMPEDANCE_CHART_FILE),
        )?;
        Self::write_chart(
            &Self::charge_transfer_chart(series),
            &out_dir.join(CHARGE_TRANSFER_CHART_FILE),
        )?;
        Self::write_chart(
            &Self::combined_chart(series),
            &out_dir.join(COMBINED_CHART_FILE),
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::df;
    use serde_json::Value;

    fn fixture_series() -> ResistanceSeries {
        ResistanceSeries {
            cycles: vec![0, 1, 2],
            impedance: vec![0.05, 0.06, 0.07],
            charge_transfer: vec![0.11, 0.12, 0.13],
        }
    }

    fn plot_json(plot: &Plot) -> Value {
        serde_json::from_str(&plot.to_json()).unwrap()
    }

    #[test]
    fn series_extraction_preserves_row_alignment() {
        let df = df!(
            "cycle" => [0i64, 1],
            "Battery_impedance" => [0.05, 0.06],
            "Charge_transfer_resistance" => [0.11, 0.12],
        )
        .unwrap();

        let series = ResistanceSeries::from_dataframe(&df).unwrap();
        assert_eq!(series.cycles, vec![0, 1]);
        assert_eq!(series.impedance, vec![0.05, 0.06]);
        assert_eq!(series.charge_transfer, vec![0.11, 0.12]);
    }

    #[test]
    fn impedance_chart_has_one_blue_lines_markers_trace() {
        let json = plot_json(&AgingChartPlotter::impedance_chart(&fixture_series()));
        let data = json["data"].as_array().unwrap();
        assert_eq!(data.len(), 1);
        assert_eq!(data[0]["name"], "Estimated Electrolyte Resistance (Re)");
        assert_eq!(data[0]["mode"], "lines+markers");
        assert_eq!(data[0]["line"]["color"], "blue");
        assert_eq!(data[0]["x"].as_array().unwrap().len(), 3);
    }

    #[test]
    fn combined_chart_overlays_both_series_with_matching_colors() {
        let json = plot_json(&AgingChartPlotter::combined_chart(&fixture_series()));
        let data = json["data"].as_array().unwrap();
        assert_eq!(data.len(), 2);
        assert_eq!(data[0]["name"], "Electrolyte Resistance (Re)");
        assert_eq!(data[0]["line"]["color"], "blue");
        assert_eq!(data[1]["name"], "Charge Transfer Resistance (Rct)");
        assert_eq!(data[1]["line"]["color"], "red");
    }

    #[test]
    fn charts_carry_titles_and_axis_labels() {
        let json = plot_json(&AgingChartPlotter::charge_transfer_chart(&fixture_series()));
        let layout = &json["layout"];
        assert_eq!(
            layout["title"]["text"],
            "Charge Transfer Resistance (Rct) During Aging"
        );
        assert_eq!(layout["xaxis"]["title"]["text"], "Cycle Number");
        assert_eq!(layout["yaxis"]["title"]["text"], "Resistance (Ohms)");
    }

    #[test]
    fn empty_series_still_produces_charts() {
        let empty = ResistanceSeries {
            cycles: vec![],
            impedance: vec![],
            charge_transfer: vec![],
        };

        let json = plot_json(&AgingChartPlotter::combined_chart(&empty));
        let data = json["data"].as_array().unwrap();
        assert_eq!(data.len(), 2);
        assert_eq!(data[0]["x"].as_array().unwrap().len(), 0);
    }

    #[test]
    fn write_all_creates_the_three_html_artifacts() {
        let out_dir = std::env::temp_dir().join("battery_aging_charts_test");
        fs::create_dir_all(&out_dir).unwrap();

        AgingChartPlotter::write_all(&fixture_series(), &out_dir).unwrap();

        for file in [
            IMPEDANCE_CHART_FILE,
            CHARGE_TRANSFER_CHART_FILE,
            COMBINED_CHART_FILE,
        ] {
            let html = fs::read_to_string(out_dir.join(file)).unwrap();
            assert!(html.contains("<html"));
            assert!(html.contains("Plotly.newPlot"));
        }

        fs::remove_dir_all(&out_dir).ok();
    }

    #[test]
    fn unwritable_destination_is_fatal() {
        let missing = Path::new("does_not_exist_dir");
        let err = AgingChartPlotter::write_all(&fixture_series(), missing).unwrap_err();
        assert!(matches!(err, ChartError::WriteError { .. }));
    }
}

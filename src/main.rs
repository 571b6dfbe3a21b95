//! Battery Aging Analysis - Impedance Trend Charts
//!
//! Loads a battery-test dataset, extracts the impedance measurements,
//! and renders the resistance-vs-cycle aging charts as interactive HTML
//! files alongside console statistics.

mod charts;
mod data;
mod stats;

use anyhow::Context;
use charts::{AgingChartPlotter, ResistanceSeries};
use data::{DataLoader, DataProcessor, COL_CHARGE_TRANSFER, COL_IMPEDANCE};
use stats::StatsCalculator;
use std::path::Path;

/// Fixed input dataset location.
const INPUT_PATH: &str = "cleaned_dataset/metadata.csv";

fn main() -> anyhow::Result<()> {
    env_logger::init();
    run(Path::new(INPUT_PATH), Path::new("."))
}

/// The whole pipeline: load, preprocess, drop missing, plot, report.
fn run(input: &Path, out_dir: &Path) -> anyhow::Result<()> {
    let mut loader = DataLoader::new();
    let raw = loader
        .load_csv(input)
        .with_context(|| format!("loading dataset from {}", input.display()))?;

    let processed = DataProcessor::preprocess(raw).context("preprocessing battery data")?;
    let cleaned = DataProcessor::drop_missing_resistance(&processed)
        .context("dropping rows with missing resistance values")?;

    let series = ResistanceSeries::from_dataframe(&cleaned)?;
    AgingChartPlotter::write_all(&series, out_dir).context("writing chart files")?;

    println!("Visualization files have been saved.");

    let impedance_stats = StatsCalculator::compute_descriptive_stats(&series.impedance);
    let charge_transfer_stats =
        StatsCalculator::compute_descriptive_stats(&series.charge_transfer);

    println!("\nDataset Statistics:");
    print!(
        "{}",
        StatsCalculator::format_describe(&[
            (COL_IMPEDANCE, &impedance_stats),
            (COL_CHARGE_TRANSFER, &charge_transfer_stats),
        ])
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn pipeline_runs_end_to_end_on_a_small_dataset() {
        let dir = std::env::temp_dir().join("battery_aging_pipeline_test");
        fs::create_dir_all(&dir).unwrap();
        let input = dir.join("metadata.csv");
        fs::write(
            &input,
            "type,Re,Rct\n\
             charge,1.0,0.5\n\
             impedance,10.0,5.0\n\
             impedance,12.0,6.0\n\
             discharge,2.0,0.6\n\
             impedance,,7.0\n",
        )
        .unwrap();

        run(&input, &dir).unwrap();

        for file in [
            "battery_impedance_vs_cycles.html",
            "charge_transfer_resistance_vs_cycles.html",
            "combined_resistance_vs_cycles.html",
        ] {
            assert!(dir.join(file).exists());
        }

        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn pipeline_handles_a_dataset_with_no_impedance_rows() {
        let dir = std::env::temp_dir().join("battery_aging_empty_test");
        fs::create_dir_all(&dir).unwrap();
        let input = dir.join("metadata.csv");
        fs::write(&input, "type,Re,Rct\ncharge,1.0,0.5\ndischarge,2.0,0.6\n").unwrap();

        run(&input, &dir).unwrap();
        assert!(dir.join("combined_resistance_vs_cycles.html").exists());

        fs::remove_dir_all(&dir).ok();
    }
}

//! Charts module - Interactive chart construction and HTML output

mod plotter;

pub use plotter::{AgingChartPlotter, ChartError, ResistanceSeries};

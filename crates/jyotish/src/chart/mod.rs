pub mod calculator;
pub mod data;
pub mod settings;

pub use calculator::{ChartCalculator, ChartError};
pub use data::{Chart, ChartRow, KETU_LABEL, LAGNA_LABEL, RAHU_LABEL};
pub use settings::ChartSettings;

pub mod dashboard;
pub mod metrics;
pub mod rules;

pub use dashboard::{aggregate, chart_rows, platform_share};
pub use metrics::compute_metrics;
pub use rules::{analyze, recommend, MAX_RECOMMENDATIONS};

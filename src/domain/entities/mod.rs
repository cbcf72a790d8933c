pub mod delta;
pub mod snapshot;

pub use delta::{DiffReport, MetricDelta};
pub use snapshot::MetricSnapshot;

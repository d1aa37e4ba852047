//! Estimator engine: input cleanup, snapshot parsing, rate extrapolation and formatting.
mod error;
mod estimate;
mod format;
mod normalize;
mod snapshot;
mod types;

pub use error::EtaError;
pub use estimate::estimate;
pub use format::{
    format_end_time, format_progress, format_remaining, format_title, COMPLETION_MARKER,
    END_TIME_FORMAT,
};
pub use normalize::normalize;
pub use snapshot::{parse, parse_input};
pub use types::{ProgressEstimate, TaskSnapshot};

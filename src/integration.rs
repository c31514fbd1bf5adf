//! Integration module for connecting detection backends and downstream
//! recognizers with the tracker.
//!
//! Nothing here is needed to drive [`SimpleSort`](crate::SimpleSort)
//! directly; these are the collaborators that usually surround it in a
//! camera loop.

mod builder;
mod detector;
mod history;
mod pipeline;

pub use builder::DetectionBuilder;
pub use detector::{DetectionSource, IntoDetections};
pub use history::{ReadingHistory, ReadingStats};
pub use pipeline::{PipelineConfig, TrackerPipeline};

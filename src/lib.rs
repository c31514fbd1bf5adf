//! A small SORT-style tracker for frame-by-frame detector output.
//!
//! Detections from an external object detector are associated with live
//! tracks by greedy IoU matching. Tracks become visible to callers once they
//! have been matched often enough to be considered stable, and disappear
//! after too many consecutive missed frames.
//!
//! ```
//! use simplesort_rs::{Detection, SimpleSort, TrackerConfig};
//!
//! let mut tracker = SimpleSort::new(TrackerConfig::default()).unwrap();
//! for _ in 0..3 {
//!     let confirmed = tracker.update(&[Detection::new(0.0, 0.0, 10.0, 10.0)]);
//!     println!("{confirmed:?}");
//! }
//! ```

mod error;

pub mod integration;
pub mod tracker;

pub use error::{Result, TrackerError};
pub use integration::{
    DetectionBuilder, DetectionSource, IntoDetections, PipelineConfig, ReadingHistory,
    ReadingStats, TrackerPipeline,
};
pub use tracker::{BBox, ConfirmedTrack, Detection, SimpleSort, Track, TrackId, TrackerConfig};

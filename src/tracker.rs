mod lifecycle;
mod matching;
mod rect;
mod simple_sort;
mod track;
mod track_state;

pub use lifecycle::Lifecycle;
pub use matching::{AssignmentResult, Detection, greedy_assignment};
pub use rect::{BBox, iou_batch};
pub use simple_sort::{ConfirmedTrack, SimpleSort, TrackerConfig};
pub use track::{Track, TrackId};
pub use track_state::TrackState;

//! Single tracked object and its lifecycle counters.

use crate::tracker::rect::BBox;

/// Track identifier, unique for the lifetime of one tracker instance.
pub type TrackId = u64;

/// Single object track.
///
/// The box is always the last matched detection (or the creation box); it is
/// never smoothed or predicted.
#[derive(Debug, Clone, PartialEq)]
pub struct Track {
    /// Unique track identifier
    pub id: TrackId,
    /// Most recently matched bounding box
    pub bbox: BBox,
    /// Frames in which this track was matched, including its creation frame
    pub hits: u32,
    /// Consecutive frames since the last successful match
    pub missing: u32,
}

impl Track {
    /// Create a new track from an unclaimed detection box.
    pub fn new(id: TrackId, bbox: BBox) -> Self {
        Self {
            id,
            bbox,
            hits: 1,
            missing: 0,
        }
    }

    /// Record a successful match with `bbox`.
    pub fn mark_matched(&mut self, bbox: BBox) {
        self.bbox = bbox;
        self.hits = self.hits.saturating_add(1);
        self.missing = 0;
    }

    /// Record a frame without a match. The box is left untouched.
    pub fn mark_missed(&mut self) {
        self.missing = self.missing.saturating_add(1);
    }
}

//! Main SimpleSort algorithm implementation.

use indexmap::IndexMap;
use tracing::{debug, info, trace};

use crate::error::{Result, TrackerError};
use crate::tracker::lifecycle::Lifecycle;
use crate::tracker::matching::{self, AssignmentResult, Detection};
use crate::tracker::rect::{BBox, iou_batch};
use crate::tracker::track::{Track, TrackId};
use crate::tracker::track_state::TrackState;

/// Configuration for the SimpleSort tracker.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackerConfig {
    /// Matched frames needed before a track is reported (>= 1)
    pub min_hits: u32,
    /// Consecutive missed frames tolerated before removal
    pub max_missing: u32,
    /// Minimum IoU a match must strictly exceed, in `[0, 1)`
    pub iou_threshold: f32,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            min_hits: 3,
            max_missing: 5,
            iou_threshold: 0.3,
        }
    }
}

impl TrackerConfig {
    pub fn validate(&self) -> Result<()> {
        if self.min_hits < 1 {
            return Err(TrackerError::InvalidConfig {
                field: "min_hits",
                reason: format!("must be at least 1, got {}", self.min_hits),
            });
        }
        if !self.iou_threshold.is_finite() || !(0.0..1.0).contains(&self.iou_threshold) {
            return Err(TrackerError::InvalidConfig {
                field: "iou_threshold",
                reason: format!("must lie in [0, 1), got {}", self.iou_threshold),
            });
        }
        Ok(())
    }

    fn lifecycle(&self) -> Lifecycle {
        Lifecycle::new(self.min_hits, self.max_missing)
    }
}

/// A confirmed track as reported to callers: a snapshot, not a live view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConfirmedTrack {
    pub id: TrackId,
    pub bbox: BBox,
}

#[derive(Debug)]
pub struct SimpleSort {
    tracks: IndexMap<TrackId, Track>,
    next_id: TrackId,
    config: TrackerConfig,
}

impl SimpleSort {
    pub fn new(config: TrackerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            tracks: IndexMap::new(),
            next_id: 0,
            config,
        })
    }

    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    /// Replace the thresholds. Takes effect on the next `update`; existing
    /// tracks are kept. An invalid config is rejected and the old one stays.
    pub fn set_config(&mut self, config: TrackerConfig) -> Result<()> {
        config.validate()?;
        info!(
            min_hits = config.min_hits,
            max_missing = config.max_missing,
            iou_threshold = config.iou_threshold,
            "tracker reconfigured"
        );
        self.config = config;
        Ok(())
    }

    /// Drop every track, e.g. when the upstream video source changes.
    ///
    /// The id counter keeps running, so ids are never reused by this tracker.
    pub fn reset(&mut self) {
        info!(dropped = self.tracks.len(), "tracker reset");
        self.tracks.clear();
    }

    /// Live tracks, oldest first, including tentative ones.
    pub fn tracks(&self) -> impl Iterator<Item = &Track> {
        self.tracks.values()
    }

    pub fn get(&self, id: TrackId) -> Option<&Track> {
        self.tracks.get(&id)
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    pub fn state(&self, id: TrackId) -> Option<TrackState> {
        let lifecycle = self.config.lifecycle();
        self.tracks.get(&id).map(|t| lifecycle.state(t))
    }

    /// Confirmed tracks currently in the store, oldest first.
    pub fn confirmed_tracks(&self) -> Vec<ConfirmedTrack> {
        let lifecycle = self.config.lifecycle();
        self.tracks
            .values()
            .filter(|t| lifecycle.is_confirmed(t))
            .map(|t| ConfirmedTrack {
                id: t.id,
                bbox: t.bbox,
            })
            .collect()
    }

    /// Associate this frame's detections with the live tracks and return the
    /// confirmed tracks that remain afterwards.
    ///
    /// Detection order only matters for tie-breaking. An empty slice is
    /// valid: every track accrues a miss and nothing is created.
    pub fn update(&mut self, detections: &[Detection]) -> Vec<ConfirmedTrack> {
        let lifecycle = self.config.lifecycle();

        // Step 1: Greedy association, oldest tracks first
        let track_boxes: Vec<BBox> = self.tracks.values().map(|t| t.bbox).collect();
        let det_boxes: Vec<BBox> = detections.iter().map(|d| d.bbox).collect();
        let ious = iou_batch(&track_boxes, &det_boxes);

        let assignment = matching::greedy_assignment(&ious, self.config.iou_threshold);
        let assigned = assignment.per_track(track_boxes.len());
        let AssignmentResult {
            unmatched_detections,
            ..
        } = assignment;

        // Step 2: Advance every existing track into the next store
        let mut next = IndexMap::with_capacity(self.tracks.len() + unmatched_detections.len());
        for (itrack, (id, mut track)) in self.tracks.drain(..).enumerate() {
            let matched = assigned[itrack].map(|idet| {
                trace!(track_id = id, iou = ious[[itrack, idet]], "matched");
                det_boxes[idet]
            });
            let was_confirmed = lifecycle.is_confirmed(&track);

            match lifecycle.advance(&mut track, matched) {
                TrackState::Removed => {
                    debug!(track_id = id, hits = track.hits, "track removed");
                }
                state => {
                    if state == TrackState::Confirmed && !was_confirmed {
                        debug!(track_id = id, hits = track.hits, "track confirmed");
                    }
                    next.insert(id, track);
                }
            }
        }

        // Step 3: Unclaimed detections seed new tracks
        for idet in unmatched_detections {
            let id = self.next_id;
            self.next_id += 1;
            let track = Track::new(id, det_boxes[idet]);
            debug!(track_id = id, bbox = ?track.bbox, "track created");
            next.insert(id, track);
        }

        self.tracks = next;
        self.confirmed_tracks()
    }
}

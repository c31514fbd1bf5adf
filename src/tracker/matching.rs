//! Matching utilities for associating detections with tracks.

use crate::tracker::rect::BBox;
use ndarray::Array2;

/// Detection input for the tracker.
///
/// A single frame's box with no identity; it only lives for one update call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Detection {
    /// Bounding box in TLBR format (x1, y1, x2, y2)
    pub bbox: BBox,
}

impl Detection {
    pub fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self {
            bbox: BBox::new(x1, y1, x2, y2),
        }
    }

    pub fn from_bbox(bbox: BBox) -> Self {
        Self { bbox }
    }
}

impl From<BBox> for Detection {
    fn from(bbox: BBox) -> Self {
        Self { bbox }
    }
}

impl From<[f32; 4]> for Detection {
    fn from(tlbr: [f32; 4]) -> Self {
        Self { bbox: tlbr.into() }
    }
}

impl From<(f32, f32, f32, f32)> for Detection {
    fn from(tlbr: (f32, f32, f32, f32)) -> Self {
        Self { bbox: tlbr.into() }
    }
}

impl From<(i32, i32, i32, i32)> for Detection {
    fn from(tlbr: (i32, i32, i32, i32)) -> Self {
        Self { bbox: tlbr.into() }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssignmentResult {
    /// `(track index, detection index)` pairs, in track order
    pub matches: Vec<(usize, usize)>,
    pub unmatched_tracks: Vec<usize>,
    pub unmatched_detections: Vec<usize>,
}

impl AssignmentResult {
    /// Per-track view of the matches: entry `i` holds the detection bound to
    /// track `i`, if any.
    pub fn per_track(&self, num_tracks: usize) -> Vec<Option<usize>> {
        let mut assigned = vec![None; num_tracks];
        for &(itrack, idet) in &self.matches {
            if let Some(slot) = assigned.get_mut(itrack) {
                *slot = Some(idet);
            }
        }
        assigned
    }
}

/// Greedy, order-dependent assignment over a (tracks x detections) IoU matrix.
///
/// Rows are visited in order. Each row claims the unclaimed column with the
/// highest IoU; ties go to the lowest column index. The claim is kept only if
/// that IoU strictly exceeds `iou_threshold`. There is no backtracking, so an
/// earlier row can take a column that a later row would have matched better.
/// This is not an optimal bipartite assignment.
pub fn greedy_assignment(iou_matrix: &Array2<f32>, iou_threshold: f32) -> AssignmentResult {
    let (num_rows, num_cols) = iou_matrix.dim();

    let mut matches = Vec::new();
    let mut unmatched_tracks = Vec::new();
    let mut claimed = vec![false; num_cols];

    for row in 0..num_rows {
        let mut best_iou = 0.0_f32;
        let mut best_col = None;
        for col in 0..num_cols {
            if claimed[col] {
                continue;
            }
            let iou = iou_matrix[[row, col]];
            if iou > best_iou {
                best_iou = iou;
                best_col = Some(col);
            }
        }

        match best_col {
            Some(col) if best_iou > iou_threshold => {
                claimed[col] = true;
                matches.push((row, col));
            }
            _ => unmatched_tracks.push(row),
        }
    }

    let unmatched_detections = claimed
        .iter()
        .enumerate()
        .filter_map(|(i, &c)| if c { None } else { Some(i) })
        .collect();

    AssignmentResult {
        matches,
        unmatched_tracks,
        unmatched_detections,
    }
}

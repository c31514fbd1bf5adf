//! Builder for creating Detection objects from various input formats.

use crate::tracker::{BBox, Detection};

/// Builder for creating `Detection` objects from various input formats.
///
/// Optionally clamps the box to the frame and drops boxes that end up too
/// small, the way raw detector output is cleaned before tracking.
#[derive(Debug, Clone, Default)]
pub struct DetectionBuilder {
    x1: f32,
    y1: f32,
    x2: f32,
    y2: f32,
    frame: Option<(f32, f32)>,
    min_side: f32,
}

impl DetectionBuilder {
    /// Create a new detection builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set bounding box in TLBR format (x1, y1, x2, y2).
    pub fn tlbr(mut self, x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        self.x1 = x1;
        self.y1 = y1;
        self.x2 = x2;
        self.y2 = y2;
        self
    }

    /// Set bounding box in XYWH format (center_x, center_y, width, height).
    pub fn xywh(mut self, cx: f32, cy: f32, w: f32, h: f32) -> Self {
        self.x1 = cx - w / 2.0;
        self.y1 = cy - h / 2.0;
        self.x2 = cx + w / 2.0;
        self.y2 = cy + h / 2.0;
        self
    }

    /// Set bounding box in TLWH format (left, top, width, height).
    pub fn tlwh(mut self, x: f32, y: f32, w: f32, h: f32) -> Self {
        self.x1 = x;
        self.y1 = y;
        self.x2 = x + w;
        self.y2 = y + h;
        self
    }

    /// Clamp every coordinate into `[0, width] x [0, height]`.
    pub fn clamp_to(mut self, width: u32, height: u32) -> Self {
        self.frame = Some((width as f32, height as f32));
        self
    }

    /// Drop the box if either side is shorter than `min_side` pixels.
    pub fn min_side(mut self, min_side: f32) -> Self {
        self.min_side = min_side;
        self
    }

    /// Build the final `Detection`, or `None` if the box is malformed or
    /// too small after clamping.
    pub fn build(self) -> Option<Detection> {
        let mut bbox = BBox::new(self.x1, self.y1, self.x2, self.y2);
        if let Some((w, h)) = self.frame {
            bbox.x1 = bbox.x1.clamp(0.0, w);
            bbox.y1 = bbox.y1.clamp(0.0, h);
            bbox.x2 = bbox.x2.clamp(0.0, w);
            bbox.y2 = bbox.y2.clamp(0.0, h);
        }

        if !bbox.is_well_formed() || bbox.width() < self.min_side || bbox.height() < self.min_side {
            return None;
        }
        Some(Detection::from_bbox(bbox))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detection_builder() {
        let det = DetectionBuilder::new()
            .tlbr(10.0, 20.0, 50.0, 80.0)
            .build()
            .unwrap();

        assert_eq!(det.bbox.to_tlbr(), [10.0, 20.0, 50.0, 80.0]);
    }

    #[test]
    fn test_xywh_and_tlwh() {
        let a = DetectionBuilder::new().xywh(30.0, 50.0, 40.0, 60.0).build();
        let b = DetectionBuilder::new().tlwh(10.0, 20.0, 40.0, 60.0).build();
        assert_eq!(a, b);
    }

    #[test]
    fn test_clamps_to_frame() {
        let det = DetectionBuilder::new()
            .tlbr(-15.0, -5.0, 700.0, 500.0)
            .clamp_to(640, 480)
            .build()
            .unwrap();
        assert_eq!(det.bbox.to_tlbr(), [0.0, 0.0, 640.0, 480.0]);
    }

    #[test]
    fn test_drops_small_boxes() {
        let narrow = DetectionBuilder::new()
            .tlbr(0.0, 0.0, 9.0, 40.0)
            .min_side(10.0)
            .build();
        assert!(narrow.is_none());

        let ok = DetectionBuilder::new()
            .tlbr(0.0, 0.0, 10.0, 40.0)
            .min_side(10.0)
            .build();
        assert!(ok.is_some());
    }

    #[test]
    fn test_box_outside_frame_collapses() {
        let det = DetectionBuilder::new()
            .tlbr(700.0, 10.0, 800.0, 50.0)
            .clamp_to(640, 480)
            .build();
        assert!(det.is_none());
    }

    #[test]
    fn test_malformed_box_rejected() {
        assert!(DetectionBuilder::new().tlbr(10.0, 10.0, 5.0, 20.0).build().is_none());
    }
}

/// Axis-aligned bounding box in image coordinates.
///
/// Stored in TLBR format (x1, y1, x2, y2). Coordinates are treated as
/// inclusive pixel indices, so a box spanning `0..=10` is 11 pixels wide.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BBox {
    /// Top-left x coordinate
    pub x1: f32,
    /// Top-left y coordinate
    pub y1: f32,
    /// Bottom-right x coordinate
    pub x2: f32,
    /// Bottom-right y coordinate
    pub y2: f32,
}

impl BBox {
    /// Create a box from TLBR coordinates.
    #[inline]
    pub fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Create a box from TLWH format (top-left x, top-left y, width, height).
    #[inline]
    pub fn from_tlwh(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self::new(x, y, x + width, y + height)
    }

    /// Convert to TLBR format: (x1, y1, x2, y2).
    #[inline]
    pub fn to_tlbr(&self) -> [f32; 4] {
        [self.x1, self.y1, self.x2, self.y2]
    }

    /// Width of the box, excluding the inclusive pixel correction.
    #[inline]
    pub fn width(&self) -> f32 {
        self.x2 - self.x1
    }

    /// Height of the box, excluding the inclusive pixel correction.
    #[inline]
    pub fn height(&self) -> f32 {
        self.y2 - self.y1
    }

    /// True when `x1 < x2` and `y1 < y2`.
    #[inline]
    pub fn is_well_formed(&self) -> bool {
        self.x1 < self.x2 && self.y1 < self.y2
    }

    /// Pixel area with the +1 inclusive correction on both axes.
    ///
    /// Malformed boxes may yield zero or a negative value.
    #[inline]
    pub fn area(&self) -> f32 {
        (self.x2 - self.x1 + 1.0) * (self.y2 - self.y1 + 1.0)
    }

    /// Intersection over Union with another box.
    ///
    /// Uses inclusive pixel semantics for both the intersection and the
    /// individual areas. A non-positive union yields 0 instead of a division
    /// fault.
    pub fn iou(&self, other: &BBox) -> f32 {
        let x1 = self.x1.max(other.x1);
        let y1 = self.y1.max(other.y1);
        let x2 = self.x2.min(other.x2);
        let y2 = self.y2.min(other.y2);

        let inter_width = (x2 - x1 + 1.0).max(0.0);
        let inter_height = (y2 - y1 + 1.0).max(0.0);
        let inter_area = inter_width * inter_height;

        let union_area = self.area() + other.area() - inter_area;

        if union_area > 0.0 {
            inter_area / union_area
        } else {
            0.0
        }
    }
}

impl From<[f32; 4]> for BBox {
    fn from([x1, y1, x2, y2]: [f32; 4]) -> Self {
        Self::new(x1, y1, x2, y2)
    }
}

impl From<(f32, f32, f32, f32)> for BBox {
    fn from((x1, y1, x2, y2): (f32, f32, f32, f32)) -> Self {
        Self::new(x1, y1, x2, y2)
    }
}

impl From<(i32, i32, i32, i32)> for BBox {
    fn from((x1, y1, x2, y2): (i32, i32, i32, i32)) -> Self {
        Self::new(x1 as f32, y1 as f32, x2 as f32, y2 as f32)
    }
}

use ndarray::Array2;

/// Calculate IoU matrix between two sets of bounding boxes.
///
/// Returns a matrix of shape (M, N) where M is the length of `boxes_a`
/// and N is the length of `boxes_b`.
pub fn iou_batch(boxes_a: &[BBox], boxes_b: &[BBox]) -> Array2<f32> {
    let mut ious = Array2::zeros((boxes_a.len(), boxes_b.len()));
    for (i, a) in boxes_a.iter().enumerate() {
        for (j, b) in boxes_b.iter().enumerate() {
            ious[[i, j]] = a.iou(b);
        }
    }
    ious
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_tlwh() {
        let bbox = BBox::from_tlwh(10.0, 20.0, 30.0, 40.0);
        assert_eq!(bbox.to_tlbr(), [10.0, 20.0, 40.0, 60.0]);
        assert_eq!(bbox.width(), 30.0);
        assert_eq!(bbox.height(), 40.0);
    }

    #[test]
    fn test_inclusive_area() {
        // 0..=10 on both axes covers 11x11 pixels
        let bbox = BBox::new(0.0, 0.0, 10.0, 10.0);
        assert_eq!(bbox.area(), 121.0);
    }

    #[test]
    fn test_iou() {
        let a = BBox::new(0.0, 0.0, 10.0, 10.0);
        let b = BBox::new(1.0, 1.0, 11.0, 11.0);

        // Intersection: 10x10 = 100
        // Union: 121 + 121 - 100 = 142
        let iou = a.iou(&b);
        assert!((iou - 100.0 / 142.0).abs() < 1e-6);
    }

    #[test]
    fn test_iou_touching_edges_overlap_one_pixel_column() {
        let a = BBox::new(0.0, 0.0, 10.0, 10.0);
        let b = BBox::new(10.0, 0.0, 20.0, 10.0);

        // Shared column x=10: 1x11 = 11, union 121 + 121 - 11 = 231
        assert!((a.iou(&b) - 11.0 / 231.0).abs() < 1e-6);
    }

    #[test]
    fn test_iou_no_overlap() {
        let a = BBox::new(0.0, 0.0, 10.0, 10.0);
        let b = BBox::new(100.0, 100.0, 110.0, 110.0);
        assert_eq!(a.iou(&b), 0.0);
    }

    #[test]
    fn test_iou_same_box() {
        let a = BBox::new(3.0, 7.0, 42.0, 19.0);
        assert_eq!(a.iou(&a), 1.0);
    }

    #[test]
    fn test_iou_degenerate_union_is_zero() {
        // area = 0 * 0 for both, so union collapses to zero
        let a = BBox::new(0.0, 0.0, -1.0, -1.0);
        assert_eq!(a.iou(&a), 0.0);
        assert!(!a.is_well_formed());
    }

    #[test]
    fn test_iou_batch_shape() {
        let a = [BBox::new(0.0, 0.0, 10.0, 10.0)];
        let b = [
            BBox::new(0.0, 0.0, 10.0, 10.0),
            BBox::new(50.0, 50.0, 60.0, 60.0),
        ];
        let ious = iou_batch(&a, &b);
        assert_eq!(ious.dim(), (1, 2));
        assert_eq!(ious[[0, 0]], 1.0);
        assert_eq!(ious[[0, 1]], 0.0);
    }

    #[test]
    fn test_integer_tuple_conversion() {
        let bbox: BBox = (1, 2, 3, 4).into();
        assert_eq!(bbox.to_tlbr(), [1.0, 2.0, 3.0, 4.0]);
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        fn well_formed() -> impl Strategy<Value = BBox> {
            (0i32..500, 0i32..500, 1i32..200, 1i32..200).prop_map(|(x, y, w, h)| {
                BBox::new(x as f32, y as f32, (x + w) as f32, (y + h) as f32)
            })
        }

        proptest! {
            #[test]
            fn prop_iou_symmetric(a in well_formed(), b in well_formed()) {
                prop_assert_eq!(a.iou(&b), b.iou(&a));
            }

            #[test]
            fn prop_iou_in_unit_range(a in well_formed(), b in well_formed()) {
                let iou = a.iou(&b);
                prop_assert!((0.0..=1.0).contains(&iou));
            }

            #[test]
            fn prop_iou_self_is_one(a in well_formed()) {
                prop_assert_eq!(a.iou(&a), 1.0);
            }

            #[test]
            fn prop_iou_disjoint_is_zero(a in well_formed(), gap in 1i32..50) {
                let shift = a.width() + gap as f32;
                let b = BBox::new(a.x1 + shift + 1.0, a.y1, a.x2 + shift + 1.0, a.y2);
                prop_assert_eq!(a.iou(&b), 0.0);
            }
        }
    }
}

//! Trait for object detection backends feeding the tracker.

use crate::tracker::Detection;

/// Trait for object detection backends.
///
/// Implement this trait to connect any detection model to the tracker. The
/// tracker never runs inference itself; it only consumes the boxes returned
/// here.
///
/// # Example
///
/// ```ignore
/// use simplesort_rs::{DetectionSource, Detection};
///
/// struct MyDetector {
///     // Your model here
/// }
///
/// impl DetectionSource for MyDetector {
///     type Error = std::io::Error;
///
///     fn detect(&mut self, input: &[u8], width: u32, height: u32) -> Result<Vec<Detection>, Self::Error> {
///         Ok(vec![])
///     }
/// }
/// ```
pub trait DetectionSource {
    /// Error type for detection failures.
    type Error: std::fmt::Display;

    /// Run inference on raw image data and return detections in TLBR pixel
    /// coordinates.
    fn detect(
        &mut self,
        input: &[u8],
        width: u32,
        height: u32,
    ) -> Result<Vec<Detection>, Self::Error>;
}

/// Helper trait for converting model-specific outputs to `Detection`.
pub trait IntoDetections {
    /// Convert the output into a vector of detections.
    fn into_detections(self) -> Vec<Detection>;
}

impl IntoDetections for Vec<Detection> {
    fn into_detections(self) -> Vec<Detection> {
        self
    }
}

impl IntoDetections for Vec<[f32; 4]> {
    fn into_detections(self) -> Vec<Detection> {
        self.into_iter().map(Detection::from).collect()
    }
}

impl IntoDetections for Vec<(i32, i32, i32, i32)> {
    fn into_detections(self) -> Vec<Detection> {
        self.into_iter().map(Detection::from).collect()
    }
}

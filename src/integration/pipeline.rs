//! TrackerPipeline for combining detection with tracking.

use tracing::{info, warn};

use crate::error::{Result, TrackerError};
use crate::tracker::{ConfirmedTrack, Detection, SimpleSort, TrackerConfig};

use super::{DetectionBuilder, DetectionSource};

/// Frame-level policy applied around the tracker.
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineConfig {
    /// Run the detector on every n-th frame only (>= 1)
    pub scan_frequency: u32,
    /// Detections with a side shorter than this are dropped after clamping
    pub min_box_side: f32,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            scan_frequency: 5,
            min_box_side: 10.0,
        }
    }
}

impl PipelineConfig {
    pub fn validate(&self) -> Result<()> {
        if self.scan_frequency < 1 {
            return Err(TrackerError::InvalidPipelineConfig {
                field: "scan_frequency",
                reason: format!("must be at least 1, got {}", self.scan_frequency),
            });
        }
        if !self.min_box_side.is_finite() || self.min_box_side < 0.0 {
            return Err(TrackerError::InvalidPipelineConfig {
                field: "min_box_side",
                reason: format!("must be a non-negative number, got {}", self.min_box_side),
            });
        }
        Ok(())
    }
}

/// A combined tracker that bundles detection inference with SimpleSort.
///
/// The pipeline owns the frame counter. Frames the detector skips still
/// reach the tracker as empty detection lists, so tracks keep ageing.
pub struct TrackerPipeline<D: DetectionSource> {
    detector: D,
    tracker: SimpleSort,
    config: PipelineConfig,
    frame_count: u64,
}

impl<D: DetectionSource> TrackerPipeline<D> {
    /// Create a new tracking pipeline with the given detector and configs.
    pub fn new(detector: D, tracker_config: TrackerConfig, config: PipelineConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            detector,
            tracker: SimpleSort::new(tracker_config)?,
            config,
            frame_count: 0,
        })
    }

    /// Create a new tracking pipeline with default configuration.
    pub fn with_default_config(detector: D) -> Result<Self> {
        Self::new(detector, TrackerConfig::default(), PipelineConfig::default())
    }

    /// Process a single frame and return confirmed tracks.
    ///
    /// On a detector failure the tracker is not updated for this frame.
    pub fn process_frame(
        &mut self,
        input: &[u8],
        width: u32,
        height: u32,
    ) -> Result<Vec<ConfirmedTrack>> {
        self.frame_count += 1;

        let detections = if self.is_scan_frame() {
            let raw = self.detector.detect(input, width, height).map_err(|e| {
                warn!(frame = self.frame_count, error = %e, "detector failed");
                TrackerError::Detector(e.to_string())
            })?;
            self.sanitize(raw, width, height)
        } else {
            Vec::new()
        };

        Ok(self.tracker.update(&detections))
    }

    fn is_scan_frame(&self) -> bool {
        self.frame_count % u64::from(self.config.scan_frequency) == 0
    }

    fn sanitize(&self, raw: Vec<Detection>, width: u32, height: u32) -> Vec<Detection> {
        raw.into_iter()
            .filter_map(|d| {
                let [x1, y1, x2, y2] = d.bbox.to_tlbr();
                DetectionBuilder::new()
                    .tlbr(x1, y1, x2, y2)
                    .clamp_to(width, height)
                    .min_side(self.config.min_box_side)
                    .build()
            })
            .collect()
    }

    /// Start over on a new video source: drops all tracks and rewinds the
    /// frame counter. Track ids are still never reused.
    pub fn reset(&mut self) {
        info!(frames = self.frame_count, "pipeline reset");
        self.frame_count = 0;
        self.tracker.reset();
    }

    pub fn set_config(&mut self, config: PipelineConfig) -> Result<()> {
        config.validate()?;
        self.config = config;
        Ok(())
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Get a reference to the underlying detector.
    pub fn detector(&self) -> &D {
        &self.detector
    }

    /// Get a mutable reference to the underlying detector.
    pub fn detector_mut(&mut self) -> &mut D {
        &mut self.detector
    }

    /// Get a reference to the underlying tracker.
    pub fn tracker(&self) -> &SimpleSort {
        &self.tracker
    }

    /// Get a mutable reference to the underlying tracker.
    pub fn tracker_mut(&mut self) -> &mut SimpleSort {
        &mut self.tracker
    }
}

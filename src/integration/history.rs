//! Rolling window of recognized strings read off confirmed tracks.
//!
//! A downstream recognizer (e.g. OCR over the first confirmed box) produces
//! one reading per frame. The window answers which reading dominates recent
//! frames, and is cleared once the tracked object is lost.

use std::collections::{HashMap, VecDeque};

use tracing::debug;

use crate::error::{Result, TrackerError};

/// Most frequent reading in the current window.
#[derive(Debug, Clone, PartialEq)]
pub struct ReadingStats {
    pub text: String,
    pub count: usize,
    pub window_len: usize,
    /// `count / window_len` as a percentage
    pub rate: f32,
}

#[derive(Debug, Clone)]
pub struct ReadingHistory {
    readings: VecDeque<String>,
    capacity: usize,
    total: u64,
    current: Option<String>,
}

impl ReadingHistory {
    pub fn new(capacity: usize) -> Result<Self> {
        validate_capacity(capacity)?;
        Ok(Self {
            readings: VecDeque::with_capacity(capacity),
            capacity,
            total: 0,
            current: None,
        })
    }

    /// Uppercase and strip everything that is not alphanumeric.
    pub fn normalize(raw: &str) -> String {
        raw.chars()
            .filter(|c| c.is_alphanumeric())
            .flat_map(char::to_uppercase)
            .collect()
    }

    /// Record one reading. Returns `false` if nothing is left after
    /// normalization, in which case the window is untouched.
    pub fn record(&mut self, raw: &str) -> bool {
        let text = Self::normalize(raw);
        if text.is_empty() {
            return false;
        }
        if self.readings.len() == self.capacity {
            self.readings.pop_front();
        }
        self.readings.push_back(text.clone());
        self.total += 1;
        self.current = Some(text);
        true
    }

    /// The tracked object is gone: forget the window. Returns whether there
    /// was a current reading to forget.
    pub fn mark_lost(&mut self) -> bool {
        let had_current = self.current.take().is_some();
        if had_current {
            debug!(window_len = self.readings.len(), "reading history cleared");
            self.readings.clear();
        }
        had_current
    }

    pub fn clear(&mut self) {
        self.readings.clear();
        self.current = None;
    }

    /// Shrink or grow the window; the oldest readings are dropped first.
    pub fn set_capacity(&mut self, capacity: usize) -> Result<()> {
        validate_capacity(capacity)?;
        while self.readings.len() > capacity {
            self.readings.pop_front();
        }
        self.capacity = capacity;
        Ok(())
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.readings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }

    /// Readings recorded since creation, including ones already evicted.
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Latest reading since the object was last lost.
    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }

    /// Most frequent reading. Ties go to the reading seen first in the window.
    pub fn most_common(&self) -> Option<ReadingStats> {
        let mut counts: HashMap<&str, usize> = HashMap::new();
        for r in &self.readings {
            *counts.entry(r.as_str()).or_default() += 1;
        }

        let mut best: Option<(&str, usize)> = None;
        for r in &self.readings {
            let count = counts[r.as_str()];
            if best.is_none_or(|(_, c)| count > c) {
                best = Some((r.as_str(), count));
            }
        }

        best.map(|(text, count)| {
            let window_len = self.readings.len();
            ReadingStats {
                text: text.to_string(),
                count,
                window_len,
                rate: count as f32 / window_len as f32 * 100.0,
            }
        })
    }
}

fn validate_capacity(capacity: usize) -> Result<()> {
    if capacity == 0 {
        return Err(TrackerError::InvalidPipelineConfig {
            field: "capacity",
            reason: "must be at least 1".to_string(),
        });
    }
    Ok(())
}

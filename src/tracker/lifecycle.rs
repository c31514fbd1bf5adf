//! Hit/miss policy deciding confirmation and expiry.

use crate::tracker::rect::BBox;
use crate::tracker::track::Track;
use crate::tracker::track_state::TrackState;

/// Confirmation and expiry thresholds applied to every track.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lifecycle {
    pub min_hits: u32,
    pub max_missing: u32,
}

impl Lifecycle {
    pub fn new(min_hits: u32, max_missing: u32) -> Self {
        Self {
            min_hits,
            max_missing,
        }
    }

    /// Confirmation is sticky: `hits` never decreases, so once reached it
    /// holds until removal.
    #[inline]
    pub fn is_confirmed(&self, track: &Track) -> bool {
        track.hits >= self.min_hits
    }

    /// A track survives `max_missing` consecutive misses and is removed on
    /// the next one.
    #[inline]
    pub fn is_expired(&self, track: &Track) -> bool {
        track.missing > self.max_missing
    }

    pub fn state(&self, track: &Track) -> TrackState {
        if self.is_expired(track) {
            TrackState::Removed
        } else if self.is_confirmed(track) {
            TrackState::Confirmed
        } else {
            TrackState::Tentative
        }
    }

    /// Apply this frame's outcome to `track` and return its new state.
    pub fn advance(&self, track: &mut Track, matched: Option<BBox>) -> TrackState {
        match matched {
            Some(bbox) => track.mark_matched(bbox),
            None => track.mark_missed(),
        }
        self.state(track)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bbox() -> BBox {
        BBox::new(0.0, 0.0, 10.0, 10.0)
    }

    #[test]
    fn test_confirms_when_hits_reach_min_hits() {
        let lifecycle = Lifecycle::new(3, 2);
        let mut track = Track::new(0, bbox());
        assert_eq!(lifecycle.state(&track), TrackState::Tentative);
        assert_eq!(lifecycle.advance(&mut track, Some(bbox())), TrackState::Tentative);
        assert_eq!(lifecycle.advance(&mut track, Some(bbox())), TrackState::Confirmed);
    }

    #[test]
    fn test_newborn_confirmed_with_min_hits_one() {
        let lifecycle = Lifecycle::new(1, 0);
        let track = Track::new(0, bbox());
        assert_eq!(lifecycle.state(&track), TrackState::Confirmed);
    }

    #[test]
    fn test_confirmation_survives_misses() {
        let lifecycle = Lifecycle::new(2, 3);
        let mut track = Track::new(0, bbox());
        lifecycle.advance(&mut track, Some(bbox()));
        for _ in 0..3 {
            assert_eq!(lifecycle.advance(&mut track, None), TrackState::Confirmed);
        }
    }

    #[test]
    fn test_removed_only_after_exceeding_max_missing() {
        // max_missing = 2 tolerates two misses; the third removes the track.
        let lifecycle = Lifecycle::new(3, 2);
        let mut track = Track::new(0, bbox());
        assert_eq!(lifecycle.advance(&mut track, None), TrackState::Tentative);
        assert_eq!(lifecycle.advance(&mut track, None), TrackState::Tentative);
        assert_eq!(lifecycle.advance(&mut track, None), TrackState::Removed);
    }

    #[test]
    fn test_zero_max_missing_removes_on_first_miss() {
        let lifecycle = Lifecycle::new(1, 0);
        let mut track = Track::new(0, bbox());
        assert_eq!(lifecycle.advance(&mut track, None), TrackState::Removed);
    }

    #[test]
    fn test_match_clears_missing_streak() {
        let lifecycle = Lifecycle::new(5, 1);
        let mut track = Track::new(0, bbox());
        lifecycle.advance(&mut track, None);
        lifecycle.advance(&mut track, Some(bbox()));
        assert_eq!(lifecycle.advance(&mut track, None), TrackState::Tentative);
    }
}

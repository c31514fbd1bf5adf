/// Track state enumeration for the tracking lifecycle.
///
/// Derived from a track's counters on demand; never stored on the track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TrackState {
    /// Matched fewer than `min_hits` times, kept internally but not reported
    #[default]
    Tentative,
    /// Matched at least `min_hits` times, reported until removal
    Confirmed,
    /// Missed more than `max_missing` consecutive frames
    Removed,
}

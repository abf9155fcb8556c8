/// Desired playback state, written by user interaction and read every frame.
///
/// The coordinator never mutates the target; it only compares the indices to
/// its own settled state and asks the catalog about them. `-1` means "no
/// selection", and out-of-range indices are the catalog's concern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaybackTarget {
    pub album: i32,
    pub track: i32,
    pub playing: bool,
}

impl PlaybackTarget {
    /// Sentinel index for "no album/track selected".
    pub const NONE: i32 = -1;

    /// Overwrites the whole target in one step.
    pub fn set(&mut self, album: i32, track: i32, playing: bool) {
        self.album = album;
        self.track = track;
        self.playing = playing;
    }

    /// True when both an album and a track have been chosen.
    pub fn has_selection(&self) -> bool {
        self.album != Self::NONE && self.track != Self::NONE
    }
}

impl Default for PlaybackTarget {
    fn default() -> Self {
        Self {
            album: Self::NONE,
            track: Self::NONE,
            playing: false,
        }
    }
}

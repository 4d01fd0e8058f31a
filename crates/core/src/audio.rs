//! Initial transport state for music releases in the content modal.
//!
//! Every render starts a fresh [`AudioTransport`]: stopped at `0:00`, full
//! volume, unmuted. Interaction after that (play/pause, clamped seek, the
//! volume slider and a mute toggle that remembers the last audible level)
//! runs in `site.js` against the media element.

/// Volume a fresh transport starts at.
pub const FULL_VOLUME: f64 = 1.0;

#[derive(Debug, Clone, PartialEq)]
pub struct AudioTransport {
    playing: bool,
    position: f64,
    duration: f64,
    volume: f64,
    muted: bool,
}

impl Default for AudioTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl AudioTransport {
    /// A stopped transport at position zero, full volume, unmuted.
    pub fn new() -> Self {
        Self {
            playing: false,
            position: 0.0,
            duration: 0.0,
            volume: FULL_VOLUME,
            muted: false,
        }
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn position(&self) -> f64 {
        self.position
    }

    /// Unknown (`0`) until the browser reads the track metadata.
    pub fn duration(&self) -> f64 {
        self.duration
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    /// The level applied to the media element.
    pub fn effective_volume(&self) -> f64 {
        if self.muted {
            0.0
        } else {
            self.volume
        }
    }

    /// Playback progress in percent, `0` when the duration is unknown.
    pub fn progress_percent(&self) -> f64 {
        if self.duration > 0.0 {
            (self.position / self.duration) * 100.0
        } else {
            0.0
        }
    }
}

/// Format seconds as `m:ss`. Zero, negative and non-finite values read `0:00`.
///
/// ```
/// use folio_core::audio::format_time;
///
/// assert_eq!(format_time(0.0), "0:00");
/// assert_eq!(format_time(65.4), "1:05");
/// ```
pub fn format_time(seconds: f64) -> String {
    if !seconds.is_finite() || seconds <= 0.0 {
        return "0:00".to_string();
    }
    let total = seconds.floor() as u64;
    format!("{}:{:02}", total / 60, total % 60)
}

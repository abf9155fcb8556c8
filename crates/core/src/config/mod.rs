use serde::{Deserialize, Serialize};

/// Timing and presentation constants for the turntable animation.
///
/// The timing fields drive the coordinator directly; the presentation fields
/// are consumed by [`Sink`](crate::Sink) implementations through the mapping
/// helpers in [`crate::sink`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationSettings {
    /// Milliseconds for a full needle lift or drop.
    pub needle_duration_ms: f64,
    /// Milliseconds for the record to travel between seated and fully raised.
    pub record_move_duration_ms: f64,
    /// Playback rotation speed in turns per millisecond (33 1/3 rpm).
    pub record_turn_speed: f64,
    /// Seek rotation speed in turns per millisecond (45 rpm).
    pub record_wind_speed: f64,
    /// Milliseconds for one full "now playing" glow pulse.
    pub text_glow_period_ms: f64,
    /// Tonearm angle in degrees when parked.
    pub needle_min_angle: f64,
    /// Tonearm angle in degrees at the innermost groove.
    pub needle_max_angle: f64,
    /// Vertical travel of a raised record, in percent of the platter view.
    pub record_height: f64,
    /// Glow blur radius in pixels at the dimmest point of the pulse.
    pub text_min_glow: f64,
    /// Glow blur radius in pixels at the brightest point of the pulse.
    pub text_max_glow: f64,
}

impl Default for AnimationSettings {
    fn default() -> Self {
        Self {
            needle_duration_ms: 300.0,
            record_move_duration_ms: 600.0,
            record_turn_speed: (100.0 / 3.0) / 60_000.0,
            record_wind_speed: 45.0 / 60_000.0,
            text_glow_period_ms: 1200.0,
            needle_min_angle: 11.0,
            needle_max_angle: 32.0,
            record_height: 120.0,
            text_min_glow: 2.0,
            text_max_glow: 8.0,
        }
    }
}

impl AnimationSettings {
    /// Milliseconds for one full record rotation at playback speed.
    pub fn rotation_period_ms(&self) -> f64 {
        1.0 / self.record_turn_speed
    }
}

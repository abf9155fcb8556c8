use std::f64::consts::TAU;

use crate::AnimationSettings;

/// Capability interface the coordinator drives.
///
/// Implemented by the presentation layer. The coordinator is the sole source
/// of truth for *when* each call fires: the visual setters may be pushed every
/// tick (possibly with an unchanged value), while the audio transport and the
/// sound cues are edge-triggered and delivered at most once per qualifying
/// transition.
pub trait Sink {
    /// Tonearm position, 0 = resting on the record, 1 = fully lifted.
    fn set_needle_lift(&mut self, fraction: f64);
    /// Record position, 0 = seated on the platter, 1 = fully raised.
    fn set_record_lift(&mut self, fraction: f64);
    /// Platter angle in turns, wrapped to `[0, 1)`.
    fn set_rotation(&mut self, turns: f64);
    /// "Now playing" glow pulse phase in `[0, 1)`.
    fn set_glow_phase(&mut self, phase: f64);
    /// The album whose artwork should be shown on the record label.
    fn set_album_art(&mut self, album: i32);
    /// Starts (or keeps) the given track playing. Idempotent.
    fn play_audio(&mut self, album: i32, track: i32);
    /// Pauses whatever is playing. Idempotent.
    fn pause_audio(&mut self);
    /// One-shot cue: the record settling onto the platter.
    fn sound_effect_insert(&mut self);
    /// One-shot cue: the record being pulled off the platter.
    fn sound_effect_remove(&mut self);
}

/// Sink that discards every call. Useful for headless ticking.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl Sink for NullSink {
    fn set_needle_lift(&mut self, _fraction: f64) {}
    fn set_record_lift(&mut self, _fraction: f64) {}
    fn set_rotation(&mut self, _turns: f64) {}
    fn set_glow_phase(&mut self, _phase: f64) {}
    fn set_album_art(&mut self, _album: i32) {}
    fn play_audio(&mut self, _album: i32, _track: i32) {}
    fn pause_audio(&mut self) {}
    fn sound_effect_insert(&mut self) {}
    fn sound_effect_remove(&mut self) {}
}

/// Nonlinear easing for the record lift at the presentation boundary.
///
/// The coordinator stores the lift linearly; presentation applies this power
/// curve so the record appears to accelerate away from the platter.
pub fn record_drop_curve(fraction: f64) -> f64 {
    fraction.clamp(0.0, 1.0).powf(1.5)
}

/// Tonearm angle in degrees for an on-record fraction and a track index.
///
/// Later tracks sit further across the record, so the full-scale angle grows
/// with the track index along a logistic curve. `on_record` is the inverse of
/// the needle lift: 1 when the needle rests in the groove.
pub fn needle_angle(settings: &AnimationSettings, on_record: f64, track: i32) -> f64 {
    let span = settings.needle_max_angle - settings.needle_min_angle;
    let full = settings.needle_min_angle + span / (1.0 + (-0.75 * f64::from(track) + 3.0).exp());
    full * (1.25 * on_record).clamp(0.0, 1.0)
}

/// Record vertical offset, in percent of the platter view, for a lift value.
pub fn record_offset(settings: &AnimationSettings, lift: f64) -> f64 {
    settings.record_height * record_drop_curve(lift)
}

/// Glow blur radius in pixels for a pulse phase.
pub fn glow_blur(settings: &AnimationSettings, phase: f64) -> f64 {
    settings.text_max_glow
        - 0.5 * (settings.text_max_glow - settings.text_min_glow) * (TAU * phase).cos()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drop_curve_is_monotonic_and_clamped() {
        assert_eq!(record_drop_curve(0.0), 0.0);
        assert_eq!(record_drop_curve(1.0), 1.0);
        assert_eq!(record_drop_curve(-3.0), 0.0);
        assert_eq!(record_drop_curve(7.0), 1.0);
        let mut previous = 0.0;
        for i in 1..=10 {
            let value = record_drop_curve(f64::from(i) / 10.0);
            assert!(value > previous);
            previous = value;
        }
    }

    #[test]
    fn needle_angle_grows_with_track_index() {
        let settings = AnimationSettings::default();
        let outer = needle_angle(&settings, 1.0, 0);
        let inner = needle_angle(&settings, 1.0, 9);
        assert!(outer >= settings.needle_min_angle);
        assert!(inner > outer);
        assert!(inner <= settings.needle_max_angle);
    }

    #[test]
    fn needle_angle_saturates_before_full_contact() {
        let settings = AnimationSettings::default();
        // The 1.25 gain means the arm reaches its final angle at 80% contact.
        assert_eq!(
            needle_angle(&settings, 0.8, 3),
            needle_angle(&settings, 1.0, 3)
        );
        assert_eq!(needle_angle(&settings, 0.0, 3), 0.0);
    }

    #[test]
    fn glow_blur_pulses_between_extremes() {
        let settings = AnimationSettings::default();
        let span = settings.text_max_glow - settings.text_min_glow;
        let dim = glow_blur(&settings, 0.0);
        let bright = glow_blur(&settings, 0.5);
        assert!((dim - (settings.text_max_glow - 0.5 * span)).abs() < 1e-9);
        assert!((bright - (settings.text_max_glow + 0.5 * span)).abs() < 1e-9);
        // Mirrored phases produce the same brightness.
        assert!((glow_blur(&settings, 0.3) - glow_blur(&settings, 0.7)).abs() < 1e-9);
    }
}

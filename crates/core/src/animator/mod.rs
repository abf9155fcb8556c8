use crate::{AnimationSettings, PlaybackTarget, Sink, TrackCatalog};

/// Which sub-animation owns the current tick.
///
/// Exactly one phase is active per tick, picked by priority: an album
/// mismatch outranks a track mismatch, which outranks sustained playback.
/// Lower-priority motion resumes on later ticks once the mismatch clears.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    AlbumChange,
    TrackChange,
    Playing,
    Idle,
}

impl Phase {
    /// Picks the active phase for the settled indices and the target.
    pub fn decide(current_album: i32, current_track: i32, target: PlaybackTarget) -> Self {
        if target.album != current_album {
            Phase::AlbumChange
        } else if target.track != current_track {
            Phase::TrackChange
        } else if target.playing {
            Phase::Playing
        } else {
            Phase::Idle
        }
    }
}

/// The animation coordinator.
///
/// Owns every piece of continuous animation state and is the sole source of
/// truth for when a [`Sink`] side effect fires. The host calls
/// [`Turntable::tick`] once per frame with the elapsed wall-clock
/// milliseconds; the coordinator re-evaluates the target from scratch each
/// tick, so a mid-animation [`Turntable::set_target`] redirects motion on the
/// very next frame without special-casing.
///
/// A tick advances at most one sub-animation: the first incomplete stage of
/// the active phase consumes the whole delta and later stages receive none of
/// it. A huge delta therefore completes the current stage early instead of
/// overshooting into the next one; catch-up spreads across subsequent ticks.
#[derive(Debug)]
pub struct Turntable {
    settings: AnimationSettings,
    target: PlaybackTarget,
    current_album: i32,
    current_track: i32,
    needle_lift: f64,
    record_lift: f64,
    rotation: f64,
    glow_phase: f64,
    audio_playing: bool,
}

impl Turntable {
    pub fn new(settings: AnimationSettings) -> Self {
        Self {
            settings,
            target: PlaybackTarget::default(),
            current_album: PlaybackTarget::NONE,
            current_track: PlaybackTarget::NONE,
            needle_lift: 0.0,
            record_lift: 0.0,
            rotation: 0.0,
            glow_phase: 0.0,
            audio_playing: false,
        }
    }

    /// Overwrites the playback target. Honored on the next tick.
    pub fn set_target(&mut self, album: i32, track: i32, playing: bool) {
        self.target.set(album, track, playing);
    }

    pub fn target(&self) -> PlaybackTarget {
        self.target
    }

    pub fn settings(&self) -> &AnimationSettings {
        &self.settings
    }

    /// Album the visuals last fully settled on.
    pub fn current_album(&self) -> i32 {
        self.current_album
    }

    /// Track the visuals last fully settled on.
    pub fn current_track(&self) -> i32 {
        self.current_track
    }

    pub fn needle_lift(&self) -> f64 {
        self.needle_lift
    }

    pub fn record_lift(&self) -> f64 {
        self.record_lift
    }

    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    pub fn glow_phase(&self) -> f64 {
        self.glow_phase
    }

    pub fn is_audio_playing(&self) -> bool {
        self.audio_playing
    }

    /// Advances the animation by `delta_ms` wall-clock milliseconds.
    ///
    /// Non-finite or negative deltas are treated as zero; a zero delta is a
    /// safe no-op that never re-fires edge-triggered effects.
    pub fn tick(&mut self, delta_ms: f64, sink: &mut dyn Sink, catalog: &dyn TrackCatalog) {
        let delta = if delta_ms.is_finite() && delta_ms > 0.0 {
            delta_ms
        } else {
            0.0
        };
        match Phase::decide(self.current_album, self.current_track, self.target) {
            Phase::AlbumChange => self.step_album_change(delta, sink),
            Phase::TrackChange => self.step_track_change(delta, sink, catalog),
            Phase::Playing => self.step_playing(delta, sink),
            Phase::Idle => self.step_idle(delta, sink),
        }
        self.step_glow(delta, sink);
    }

    /// Album swap: needle off, record up, then commit the new album.
    fn step_album_change(&mut self, delta: f64, sink: &mut dyn Sink) {
        self.stop_audio(sink);
        let mut budget = delta;
        if !self.raise_needle(&mut budget, sink) {
            return;
        }
        if !self.raise_record(&mut budget, sink) {
            return;
        }
        self.current_album = self.target.album;
        self.rotation = 0.0;
        sink.set_rotation(self.rotation);
        sink.set_album_art(self.current_album);
    }

    /// Track seek: needle off, record reseated, wind to the groove, commit.
    fn step_track_change(
        &mut self,
        delta: f64,
        sink: &mut dyn Sink,
        catalog: &dyn TrackCatalog,
    ) {
        self.stop_audio(sink);
        let mut budget = delta;
        if !self.raise_needle(&mut budget, sink) {
            return;
        }
        if !self.lower_record(&mut budget, sink) {
            return;
        }
        if !self.wind_to_track(&mut budget, sink, catalog) {
            return;
        }
        self.current_track = self.target.track;
    }

    /// Playback: record reseated, needle settles while the platter spins,
    /// audio starts once the needle touches down.
    fn step_playing(&mut self, delta: f64, sink: &mut dyn Sink) {
        let mut budget = delta;
        if !self.lower_record(&mut budget, sink) {
            return;
        }
        // The platter spins while the needle settles; both share the tick.
        let step = drain(&mut budget);
        self.rotation = (self.rotation + step * self.settings.record_turn_speed).rem_euclid(1.0);
        sink.set_rotation(self.rotation);
        let mut needle_budget = step;
        if self.lower_needle(&mut needle_budget, sink) {
            self.start_audio(sink);
        }
    }

    /// Stopped: the needle returns to rest and the transport stays paused.
    fn step_idle(&mut self, delta: f64, sink: &mut dyn Sink) {
        self.stop_audio(sink);
        let mut budget = delta;
        self.lower_needle(&mut budget, sink);
    }

    /// Returns true once the needle is fully lifted.
    fn raise_needle(&mut self, budget: &mut f64, sink: &mut dyn Sink) -> bool {
        if self.needle_lift < 1.0 {
            let step = drain(budget) / self.settings.needle_duration_ms;
            self.needle_lift = (self.needle_lift + step).min(1.0);
            sink.set_needle_lift(self.needle_lift);
        }
        self.needle_lift >= 1.0
    }

    /// Returns true once the needle rests on the record.
    fn lower_needle(&mut self, budget: &mut f64, sink: &mut dyn Sink) -> bool {
        if self.needle_lift > 0.0 {
            let step = drain(budget) / self.settings.needle_duration_ms;
            self.needle_lift = (self.needle_lift - step).max(0.0);
            sink.set_needle_lift(self.needle_lift);
        }
        self.needle_lift <= 0.0
    }

    /// Returns true once the record is fully raised off the platter. Fires
    /// the remove cue exactly once, when motion starts from a seated record.
    fn raise_record(&mut self, budget: &mut f64, sink: &mut dyn Sink) -> bool {
        if self.record_lift < 1.0 {
            let step = drain(budget);
            if self.record_lift == 0.0 && step > 0.0 {
                sink.sound_effect_remove();
            }
            self.record_lift =
                (self.record_lift + step / self.settings.record_move_duration_ms).min(1.0);
            sink.set_record_lift(self.record_lift);
        }
        self.record_lift >= 1.0
    }

    /// Returns true once the record is seated. Fires the insert cue exactly
    /// once, on the transition that reaches the platter.
    fn lower_record(&mut self, budget: &mut f64, sink: &mut dyn Sink) -> bool {
        if self.record_lift > 0.0 {
            let step = drain(budget);
            self.record_lift =
                (self.record_lift - step / self.settings.record_move_duration_ms).max(0.0);
            sink.set_record_lift(self.record_lift);
            if self.record_lift == 0.0 && step > 0.0 {
                sink.sound_effect_insert();
            }
        }
        self.record_lift <= 0.0
    }

    /// Winds the platter toward the target track's groove at seek speed,
    /// taking the shorter direction, and snaps exactly on arrival. Returns
    /// true once the rotation sits on the groove. An unknown seek position
    /// holds the stage at whatever progress was made.
    fn wind_to_track(
        &mut self,
        budget: &mut f64,
        sink: &mut dyn Sink,
        catalog: &dyn TrackCatalog,
    ) -> bool {
        let Some(groove) = catalog.seek_position(self.target.album, self.target.track) else {
            return false;
        };
        let difference = circular_difference(groove, self.rotation);
        if difference == 0.0 {
            return true;
        }
        let step = drain(budget) * self.settings.record_wind_speed;
        if difference > 0.0 {
            self.rotation = (self.rotation + step).rem_euclid(1.0);
            if circular_difference(groove, self.rotation) <= 0.0 {
                self.rotation = groove;
            }
        } else {
            self.rotation = (self.rotation - step).rem_euclid(1.0);
            if circular_difference(groove, self.rotation) >= 0.0 {
                self.rotation = groove;
            }
        }
        sink.set_rotation(self.rotation);
        self.rotation == groove
    }

    /// Advances or decays the "now playing" glow. While settled on a playing
    /// target the phase cycles; otherwise a pulse caught in its rising half
    /// is mirrored into the falling half so the decay continues from the same
    /// brightness, then runs out and clamps to zero.
    fn step_glow(&mut self, delta: f64, sink: &mut dyn Sink) {
        let settled = self.current_album == self.target.album
            && self.current_track == self.target.track
            && self.target.playing;
        let step = delta / self.settings.text_glow_period_ms;
        if settled {
            self.glow_phase = (self.glow_phase + step).rem_euclid(1.0);
        } else if step > 0.0 && self.glow_phase != 0.0 {
            if self.glow_phase < 0.5 {
                self.glow_phase = 1.0 - self.glow_phase;
            }
            let next = (self.glow_phase + step).rem_euclid(1.0);
            self.glow_phase = if next > self.glow_phase { next } else { 0.0 };
        }
        sink.set_glow_phase(self.glow_phase);
    }

    fn start_audio(&mut self, sink: &mut dyn Sink) {
        if !self.audio_playing {
            sink.play_audio(self.current_album, self.current_track);
            self.audio_playing = true;
        }
    }

    fn stop_audio(&mut self, sink: &mut dyn Sink) {
        if self.audio_playing {
            sink.pause_audio();
            self.audio_playing = false;
        }
    }
}

/// Takes the whole remaining tick budget, leaving zero for later stages.
fn drain(budget: &mut f64) -> f64 {
    std::mem::replace(budget, 0.0)
}

/// Signed circular difference from `rotation` to `target`, in `[-0.5, 0.5)`.
/// Positive means the shorter path winds forward.
fn circular_difference(target: f64, rotation: f64) -> f64 {
    (target - rotation + 1.5).rem_euclid(1.0) - 0.5
}

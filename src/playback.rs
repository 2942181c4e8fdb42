//! Playback state machines.
//!
//! `Playhead` owns the virtual clock and `ControlsState` owns the idle
//! auto-hide logic. Both are plain data mutated only through named
//! transitions and carry no browser types, so they test on the host.
//! The shell wires them to the real timers and the audio element.

/// Clock cadence while playing.
pub const TICK_INTERVAL_MS: u32 = 100;
/// Seconds added to the clock per tick.
pub const TICK_STEP_SECS: f64 = 0.1;
/// Audio drift beyond this is snapped back to the clock. Smaller drift
/// is left alone so the track does not stutter from constant seeks.
pub const AUDIO_DRIFT_TOLERANCE_SECS: f64 = 0.2;
/// Cadence of the controls idle check.
pub const IDLE_CHECK_INTERVAL_MS: u32 = 500;
/// Idle time after which the transport bar hides during playback.
pub const IDLE_HIDE_AFTER_MS: f64 = 2000.0;

/// The virtual clock every reveal and audio decision derives from.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Playhead {
    pub position: f64,
    pub playing: bool,
    pub duration: f64,
}

impl Playhead {
    pub fn new(duration: f64) -> Self {
        Playhead {
            position: 0.0,
            playing: false,
            duration,
        }
    }

    /// One clock tick. Clamps at the end of the timeline and stops
    /// playback there; never moves the clock while paused.
    pub fn tick(&mut self) {
        if !self.playing {
            return;
        }
        let next = self.position + TICK_STEP_SECS;
        if next >= self.duration {
            self.position = self.duration;
            self.playing = false;
        } else {
            self.position = next;
        }
    }

    /// Jump to an arbitrary point without changing the play state.
    pub fn seek(&mut self, position: f64) {
        self.position = position.clamp(0.0, self.duration);
    }

    pub fn toggle(&mut self) {
        self.playing = !self.playing;
    }

    /// Back to the top, paused.
    pub fn reset(&mut self) {
        self.position = 0.0;
        self.playing = false;
    }

    /// The voiceover ran out on its own: stop advancing but leave the
    /// clock where it landed.
    pub fn finish(&mut self) {
        self.playing = false;
    }
}

/// Where the audio element should be moved to, if anywhere.
///
/// While paused the clock is the explicit source of truth (a seek just
/// happened), so the audio follows it exactly. While playing, only
/// drift past the tolerance is corrected.
pub fn sync_target(audio_position: f64, head: &Playhead) -> Option<f64> {
    if !head.playing {
        return Some(head.position);
    }
    if (audio_position - head.position).abs() > AUDIO_DRIFT_TOLERANCE_SECS {
        Some(head.position)
    } else {
        None
    }
}

/// Transport bar visibility, driven by interaction recency.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ControlsState {
    pub visible: bool,
    pub last_interaction_ms: f64,
}

impl ControlsState {
    pub fn new(now_ms: f64) -> Self {
        ControlsState {
            visible: true,
            last_interaction_ms: now_ms,
        }
    }

    /// Any qualifying input: show the bar and restart the idle window.
    pub fn interact(&mut self, now_ms: f64) {
        self.visible = true;
        self.last_interaction_ms = now_ms;
    }

    /// Periodic check: hide only while playing and idle past the
    /// threshold.
    pub fn idle_check(&mut self, now_ms: f64, playing: bool) {
        if playing && now_ms - self.last_interaction_ms > IDLE_HIDE_AFTER_MS {
            self.visible = false;
        }
    }

    /// The floating affordance: bring the bar back without counting as
    /// an interaction.
    pub fn reveal(&mut self) {
        self.visible = true;
    }

    /// Whether the bar renders. Paused always shows it.
    pub fn shown(&self, playing: bool) -> bool {
        self.visible || !playing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play_out(mut head: Playhead, max_ticks: usize) -> Playhead {
        for _ in 0..max_ticks {
            if !head.playing {
                break;
            }
            head.tick();
            assert!(head.position <= head.duration);
        }
        head
    }

    #[test]
    fn starts_paused_at_the_top() {
        let head = Playhead::new(77.0);
        assert_eq!(head.position, 0.0);
        assert!(!head.playing);
    }

    #[test]
    fn tick_advances_by_one_step() {
        let mut head = Playhead::new(77.0);
        head.toggle();
        head.tick();
        assert!((head.position - TICK_STEP_SECS).abs() < 1e-9);
        assert!(head.playing);
    }

    #[test]
    fn tick_does_nothing_while_paused() {
        let mut head = Playhead::new(77.0);
        head.tick();
        assert_eq!(head.position, 0.0);
    }

    #[test]
    fn clock_never_exceeds_duration_and_stops_there() {
        let mut head = Playhead::new(1.0);
        head.toggle();
        let head = play_out(head, 1_000);
        assert_eq!(head.position, 1.0);
        assert!(!head.playing);
    }

    #[test]
    fn final_tick_lands_exactly_on_duration() {
        let mut head = Playhead::new(77.0);
        head.seek(76.95);
        head.toggle();
        head.tick();
        assert_eq!(head.position, 77.0);
        assert!(!head.playing);
    }

    #[test]
    fn seek_clamps_to_the_timeline() {
        let mut head = Playhead::new(77.0);
        head.seek(-3.0);
        assert_eq!(head.position, 0.0);
        head.seek(500.0);
        assert_eq!(head.position, 77.0);
        head.seek(30.0);
        assert_eq!(head.position, 30.0);
        // Seeking never starts playback on its own.
        assert!(!head.playing);
    }

    #[test]
    fn reset_returns_to_the_top_paused() {
        let mut head = Playhead::new(77.0);
        head.seek(42.0);
        head.toggle();
        head.reset();
        assert_eq!(head.position, 0.0);
        assert!(!head.playing);
    }

    #[test]
    fn reset_retargets_audio_to_zero_exactly() {
        let mut head = Playhead::new(77.0);
        head.seek(42.0);
        head.toggle();
        head.reset();
        // Paused after reset, so the audio follows the clock with no
        // tolerance regardless of where the track sat.
        assert_eq!(sync_target(42.0, &head), Some(0.0));
    }

    #[test]
    fn natural_end_stops_without_moving_the_clock() {
        let mut head = Playhead::new(77.0);
        head.seek(33.3);
        head.toggle();
        head.finish();
        assert!(!head.playing);
        assert!((head.position - 33.3).abs() < 1e-9);
    }

    #[test]
    fn paused_seek_targets_audio_exactly() {
        let mut head = Playhead::new(77.0);
        head.seek(30.0);
        assert_eq!(sync_target(11.7, &head), Some(30.0));
    }

    #[test]
    fn small_drift_is_left_alone_while_playing() {
        let mut head = Playhead::new(77.0);
        head.seek(10.0);
        head.toggle();
        assert_eq!(sync_target(10.15, &head), None);
        assert_eq!(sync_target(9.85, &head), None);
    }

    #[test]
    fn large_drift_snaps_back_to_the_clock() {
        let mut head = Playhead::new(77.0);
        head.seek(10.0);
        head.toggle();
        assert_eq!(sync_target(10.5, &head), Some(10.0));
        assert_eq!(sync_target(8.0, &head), Some(10.0));
    }

    #[test]
    fn controls_start_visible() {
        let controls = ControlsState::new(1_000.0);
        assert!(controls.visible);
        assert!(controls.shown(true));
    }

    #[test]
    fn idle_check_hides_only_while_playing() {
        let mut controls = ControlsState::new(0.0);
        controls.idle_check(10_000.0, false);
        assert!(controls.visible);
        controls.idle_check(10_000.0, true);
        assert!(!controls.visible);
    }

    #[test]
    fn idle_threshold_is_strict() {
        let mut controls = ControlsState::new(0.0);
        controls.idle_check(IDLE_HIDE_AFTER_MS, true);
        assert!(controls.visible);
        controls.idle_check(IDLE_HIDE_AFTER_MS + 1.0, true);
        assert!(!controls.visible);
    }

    #[test]
    fn interaction_restores_and_restamps() {
        let mut controls = ControlsState::new(0.0);
        controls.idle_check(5_000.0, true);
        assert!(!controls.visible);

        controls.interact(6_000.0);
        assert!(controls.visible);
        assert_eq!(controls.last_interaction_ms, 6_000.0);

        // The fresh stamp keeps it visible on the next check.
        controls.idle_check(7_000.0, true);
        assert!(controls.visible);
    }

    #[test]
    fn reveal_shows_without_restarting_the_idle_window() {
        let mut controls = ControlsState::new(0.0);
        controls.idle_check(5_000.0, true);
        controls.reveal();
        assert!(controls.visible);
        assert_eq!(controls.last_interaction_ms, 0.0);
    }

    #[test]
    fn bar_always_renders_while_paused() {
        let mut controls = ControlsState::new(0.0);
        controls.idle_check(5_000.0, true);
        assert!(!controls.shown(true));
        assert!(controls.shown(false));
    }
}

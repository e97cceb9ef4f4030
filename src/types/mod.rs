//! Core data types for the interval timer.
//!
//! This module defines:
//! - Workout phases and the timer state record
//! - The pure tick transition and its outcome
//! - Read-only snapshots for presentation

pub mod config;

use serde::{Deserialize, Serialize};

pub use config::{ConfigField, IntervalConfig, SettingPolicy};

/// Length of the preparation countdown in seconds.
pub const COUNTDOWN_SECONDS: u32 = 3;

/// A cue fires on ticks that enter with this many seconds left, or fewer.
pub const CUE_WINDOW_SECONDS: u32 = 3;

/// Returns true if a tick entering with `remaining` seconds should fire the cue.
pub fn cues_at(remaining: u32) -> bool {
    remaining > 0 && remaining <= CUE_WINDOW_SECONDS
}

// ============================================================================
// Phase
// ============================================================================

/// The stage of the workout cycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Idle, waiting for start
    #[default]
    Ready,
    /// Preparation countdown before the first work phase
    Countdown,
    /// Work phase of the current interval
    Working,
    /// Rest phase between intervals
    Resting,
    /// The workout just finished; only ever a transition target
    Complete,
}

impl Phase {
    /// Returns the string representation of the phase.
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Ready => "ready",
            Phase::Countdown => "countdown",
            Phase::Working => "working",
            Phase::Resting => "resting",
            Phase::Complete => "complete",
        }
    }

    /// Returns the phase as seen from outside the engine.
    ///
    /// `Complete` is momentary and reads as `Ready`.
    pub fn external(&self) -> Phase {
        match self {
            Phase::Complete => Phase::Ready,
            other => *other,
        }
    }

    /// Returns true for the phases that receive ticks.
    pub fn is_timed(&self) -> bool {
        matches!(self, Phase::Countdown | Phase::Working | Phase::Resting)
    }
}

// ============================================================================
// TimerState
// ============================================================================

/// The complete state of the timer engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimerState {
    /// Current phase
    pub phase: Phase,
    /// Whole seconds left in the current phase
    pub remaining: u32,
    /// 1-based index of the current interval
    pub current_interval: u32,
    /// Whether the tick source is active
    pub running: bool,
}

impl Default for TimerState {
    fn default() -> Self {
        Self::new()
    }
}

/// A phase transition performed by a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhaseChange {
    /// Phase the tick left
    pub from: Phase,
    /// Phase the tick entered (`Complete` when the workout ended)
    pub to: Phase,
    /// Interval index after the transition
    pub interval: u32,
}

/// Result of applying one tick to a [`TimerState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickOutcome {
    /// State after the tick
    pub state: TimerState,
    /// Whether the cue should fire for this tick
    pub cue: bool,
    /// Set when the tick transitioned instead of counting down
    pub change: Option<PhaseChange>,
}

impl TimerState {
    /// Creates the initial (ready) state.
    pub const fn new() -> Self {
        Self {
            phase: Phase::Ready,
            remaining: COUNTDOWN_SECONDS,
            current_interval: 1,
            running: false,
        }
    }

    /// Returns the state after a start request.
    ///
    /// The interval index is kept; only `reset` and completion rewind it.
    pub fn started(&self) -> Self {
        Self {
            phase: Phase::Countdown,
            remaining: COUNTDOWN_SECONDS,
            running: true,
            ..*self
        }
    }

    /// Returns the state after a reset request.
    pub fn reset(&self) -> Self {
        Self::new()
    }

    /// Advances the state by one tick.
    ///
    /// A tick either counts down one second or, once the phase has reached
    /// zero, performs one transition. Never both.
    pub fn tick(&self, config: &IntervalConfig) -> TickOutcome {
        if !self.running || !self.phase.is_timed() {
            return TickOutcome {
                state: *self,
                cue: false,
                change: None,
            };
        }

        if self.remaining > 0 {
            return TickOutcome {
                state: Self {
                    remaining: self.remaining - 1,
                    ..*self
                },
                cue: cues_at(self.remaining),
                change: None,
            };
        }

        let state = self.transition(config);
        TickOutcome {
            state,
            cue: false,
            change: Some(PhaseChange {
                from: self.phase,
                to: if state.running { state.phase } else { Phase::Complete },
                interval: state.current_interval,
            }),
        }
    }

    fn transition(&self, config: &IntervalConfig) -> Self {
        match self.phase {
            Phase::Countdown if config.interval_count == 0 => self.completed(),
            Phase::Countdown => Self {
                phase: Phase::Working,
                remaining: config.work_duration,
                ..*self
            },
            Phase::Working if self.current_interval < config.interval_count => Self {
                phase: Phase::Resting,
                remaining: config.rest_duration,
                ..*self
            },
            Phase::Working => self.completed(),
            Phase::Resting => Self {
                phase: Phase::Working,
                remaining: config.work_duration,
                current_interval: self.current_interval.saturating_add(1),
                ..*self
            },
            Phase::Ready | Phase::Complete => *self,
        }
    }

    /// The state stored once the workout completes. The exhausted `remaining`
    /// is kept until the next start.
    fn completed(&self) -> Self {
        Self {
            phase: Phase::Ready,
            remaining: self.remaining,
            current_interval: 1,
            running: false,
        }
    }

    /// Returns true if the tick source should be active.
    pub fn is_running(&self) -> bool {
        self.running
    }
}

// ============================================================================
// Snapshot
// ============================================================================

/// Read-only view of the engine for presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub phase: Phase,
    pub remaining: u32,
    pub current_interval: u32,
    pub interval_count: u32,
    pub running: bool,
}

impl Snapshot {
    /// Creates a snapshot from the engine state and configuration.
    pub fn new(state: &TimerState, config: &IntervalConfig) -> Self {
        Self {
            phase: state.phase.external(),
            remaining: state.remaining,
            current_interval: state.current_interval,
            interval_count: config.interval_count,
            running: state.running,
        }
    }

    /// Splits `remaining` into whole minutes and leftover seconds.
    pub fn minutes_seconds(&self) -> (u32, u32) {
        (self.remaining / 60, self.remaining % 60)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn running(phase: Phase, remaining: u32, current_interval: u32) -> TimerState {
        TimerState {
            phase,
            remaining,
            current_interval,
            running: true,
        }
    }

    // ------------------------------------------------------------------------
    // Phase Tests
    // ------------------------------------------------------------------------

    mod phase_tests {
        use super::*;

        #[test]
        fn test_default_is_ready() {
            assert_eq!(Phase::default(), Phase::Ready);
        }

        #[test]
        fn test_external_maps_complete_to_ready() {
            assert_eq!(Phase::Complete.external(), Phase::Ready);
            assert_eq!(Phase::Working.external(), Phase::Working);
        }

        #[test]
        fn test_is_timed() {
            assert!(!Phase::Ready.is_timed());
            assert!(Phase::Countdown.is_timed());
            assert!(Phase::Working.is_timed());
            assert!(Phase::Resting.is_timed());
            assert!(!Phase::Complete.is_timed());
        }

        #[test]
        fn test_serialize() {
            let json = serde_json::to_string(&Phase::Resting).unwrap();
            assert_eq!(json, "\"resting\"");
        }
    }

    // ------------------------------------------------------------------------
    // TimerState Tests
    // ------------------------------------------------------------------------

    mod timer_state_tests {
        use super::*;

        #[test]
        fn test_new_state() {
            let state = TimerState::new();
            assert_eq!(state.phase, Phase::Ready);
            assert_eq!(state.remaining, 3);
            assert_eq!(state.current_interval, 1);
            assert!(!state.running);
        }

        #[test]
        fn test_started_keeps_interval() {
            let state = TimerState {
                current_interval: 4,
                ..TimerState::new()
            };
            let started = state.started();

            assert_eq!(started.phase, Phase::Countdown);
            assert_eq!(started.remaining, 3);
            assert_eq!(started.current_interval, 4);
            assert!(started.running);
        }

        #[test]
        fn test_reset_is_idempotent() {
            let state = running(Phase::Resting, 7, 3);
            let once = state.reset();
            let twice = once.reset();

            assert_eq!(once, TimerState::new());
            assert_eq!(once, twice);
        }

        #[test]
        fn test_tick_ignored_when_not_running() {
            let config = IntervalConfig::default();
            let outcome = TimerState::new().tick(&config);

            assert_eq!(outcome.state, TimerState::new());
            assert!(!outcome.cue);
            assert!(outcome.change.is_none());
        }

        #[test]
        fn test_tick_counts_down_without_cue_above_window() {
            let config = IntervalConfig::default();
            let outcome = running(Phase::Working, 10, 1).tick(&config);

            assert_eq!(outcome.state.remaining, 9);
            assert!(!outcome.cue);
            assert!(outcome.change.is_none());
        }

        #[test]
        fn test_cue_fires_on_last_three_seconds_of_every_phase() {
            let config = IntervalConfig::default();
            for phase in [Phase::Countdown, Phase::Working, Phase::Resting] {
                for remaining in 1..=3 {
                    let outcome = running(phase, remaining, 1).tick(&config);
                    assert!(outcome.cue, "{:?} at {}", phase, remaining);
                    assert_eq!(outcome.state.remaining, remaining - 1);
                }
                assert!(!running(phase, 4, 1).tick(&config).cue);
            }
        }

        #[test]
        fn test_countdown_to_working() {
            let config = IntervalConfig::default().with_work_duration(20);
            let outcome = running(Phase::Countdown, 0, 1).tick(&config);

            assert_eq!(outcome.state.phase, Phase::Working);
            assert_eq!(outcome.state.remaining, 20);
            assert!(!outcome.cue);
            assert_eq!(
                outcome.change,
                Some(PhaseChange {
                    from: Phase::Countdown,
                    to: Phase::Working,
                    interval: 1
                })
            );
        }

        #[test]
        fn test_transition_does_not_charge_new_phase() {
            let config = IntervalConfig::default().with_rest_duration(2);
            let outcome = running(Phase::Working, 0, 1).tick(&config);

            assert_eq!(outcome.state.phase, Phase::Resting);
            assert_eq!(outcome.state.remaining, 2);
        }

        #[test]
        fn test_resting_to_working_advances_interval() {
            let config = IntervalConfig::default().with_work_duration(30);
            let outcome = running(Phase::Resting, 0, 2).tick(&config);

            assert_eq!(outcome.state.phase, Phase::Working);
            assert_eq!(outcome.state.remaining, 30);
            assert_eq!(outcome.state.current_interval, 3);
        }

        #[test]
        fn test_last_work_phase_completes() {
            let config = IntervalConfig::default().with_interval_count(3);
            let outcome = running(Phase::Working, 0, 3).tick(&config);

            assert_eq!(outcome.state.phase, Phase::Ready);
            assert_eq!(outcome.state.current_interval, 1);
            assert!(!outcome.state.running);
            assert_eq!(outcome.state.remaining, 0);
            assert_eq!(outcome.change.map(|c| c.to), Some(Phase::Complete));
        }

        #[test]
        fn test_zero_work_duration_skips_cue() {
            let config = IntervalConfig::default()
                .with_work_duration(0)
                .with_interval_count(2);

            let entered = running(Phase::Countdown, 0, 1).tick(&config);
            assert_eq!(entered.state.phase, Phase::Working);
            assert_eq!(entered.state.remaining, 0);

            let left = entered.state.tick(&config);
            assert!(!left.cue);
            assert_eq!(left.state.phase, Phase::Resting);
        }

        #[test]
        fn test_zero_intervals_completes_after_countdown() {
            let config = IntervalConfig::default().with_interval_count(0);
            let outcome = running(Phase::Countdown, 0, 1).tick(&config);

            assert!(!outcome.state.running);
            assert_eq!(outcome.state.phase, Phase::Ready);
            assert_eq!(outcome.change.map(|c| c.to), Some(Phase::Complete));
        }

        #[test]
        fn test_full_cycle_sequence() {
            let config = IntervalConfig {
                work_duration: 2,
                rest_duration: 1,
                interval_count: 2,
            };
            let mut state = TimerState::new().started();
            let mut seen = vec![(state.phase, state.remaining)];
            let mut cues = 0;

            while state.running {
                let outcome = state.tick(&config);
                if outcome.cue {
                    cues += 1;
                }
                if outcome.state.running && outcome.change.is_some() {
                    assert!(outcome.state.current_interval <= config.interval_count);
                }
                state = outcome.state;
                if state.running && state.remaining > 0 {
                    seen.push((state.phase, state.remaining));
                }
            }

            assert_eq!(
                seen,
                vec![
                    (Phase::Countdown, 3),
                    (Phase::Countdown, 2),
                    (Phase::Countdown, 1),
                    (Phase::Working, 2),
                    (Phase::Working, 1),
                    (Phase::Resting, 1),
                    (Phase::Working, 2),
                    (Phase::Working, 1),
                ]
            );
            // 3 + 2 + 1 + 2 seconds inside the cue window
            assert_eq!(cues, 8);
            assert_eq!(state.phase, Phase::Ready);
            assert_eq!(state.current_interval, 1);
        }
    }

    // ------------------------------------------------------------------------
    // Snapshot Tests
    // ------------------------------------------------------------------------

    mod snapshot_tests {
        use super::*;

        #[test]
        fn test_snapshot_from_state() {
            let config = IntervalConfig::default();
            let snapshot = Snapshot::new(&running(Phase::Working, 95, 2), &config);

            assert_eq!(snapshot.phase, Phase::Working);
            assert_eq!(snapshot.remaining, 95);
            assert_eq!(snapshot.current_interval, 2);
            assert_eq!(snapshot.interval_count, 8);
            assert!(snapshot.running);
            assert_eq!(snapshot.minutes_seconds(), (1, 35));
        }

        #[test]
        fn test_snapshot_hides_complete() {
            let state = TimerState {
                phase: Phase::Complete,
                ..TimerState::new()
            };
            let snapshot = Snapshot::new(&state, &IntervalConfig::default());
            assert_eq!(snapshot.phase, Phase::Ready);
        }

        #[test]
        fn test_snapshot_serialize() {
            let snapshot = Snapshot::new(&TimerState::new(), &IntervalConfig::default());
            let json = serde_json::to_string(&snapshot).unwrap();

            assert!(json.contains("\"phase\":\"ready\""));
            assert!(json.contains("\"currentInterval\":1"));
            assert!(json.contains("\"intervalCount\":8"));
            assert!(json.contains("\"running\":false"));
        }
    }
}

//! Timer engine for the interval timer.
//!
//! This module provides the stateful side of the timer:
//! - Applies the pure tick transition to the stored state
//! - Fires the countdown cue
//! - Guards configuration changes while running
//! - Publishes events for presentation

use tokio::sync::mpsc;
use tracing::{debug, info};

use super::error::TimerError;
use crate::sound::Cue;
use crate::types::{
    ConfigField, IntervalConfig, Phase, PhaseChange, SettingPolicy, Snapshot, TickOutcome,
    TimerState,
};

// ============================================================================
// TimerEvent
// ============================================================================

/// Timer events for presentation and other observers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimerEvent {
    /// The preparation countdown started
    Started {
        /// State right after the start
        snapshot: Snapshot,
    },
    /// The timer was reset to ready
    Reset,
    /// One tick was applied
    Tick {
        /// State after the tick
        snapshot: Snapshot,
    },
    /// The cue fired
    Cue {
        /// Seconds left in the phase when the tick began
        remaining: u32,
    },
    /// A tick moved the timer to another phase
    PhaseChanged(PhaseChange),
    /// The last work phase finished
    Completed,
    /// A configuration field was updated
    ConfigurationChanged {
        /// Updated field
        field: ConfigField,
        /// New value
        value: u32,
    },
}

// ============================================================================
// TimerEngine
// ============================================================================

/// Timer engine that owns the workout state and configuration.
pub struct TimerEngine {
    /// Current timer state
    state: TimerState,
    /// Workout configuration
    config: IntervalConfig,
    /// How raw setting input is parsed
    policy: SettingPolicy,
    /// Countdown cue
    cue: Cue,
    /// Event sender channel
    event_tx: mpsc::UnboundedSender<TimerEvent>,
}

impl TimerEngine {
    /// Creates a new TimerEngine with the given configuration, cue and event channel.
    pub fn new(config: IntervalConfig, cue: Cue, event_tx: mpsc::UnboundedSender<TimerEvent>) -> Self {
        Self {
            state: TimerState::new(),
            config,
            policy: SettingPolicy::default(),
            cue,
            event_tx,
        }
    }

    /// Sets the policy used by [`TimerEngine::update_configuration`].
    pub fn with_policy(mut self, policy: SettingPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Starts the preparation countdown.
    ///
    /// Returns false, changing nothing, if the timer is already running.
    pub fn start(&mut self) -> bool {
        if self.state.is_running() {
            debug!("Start ignored, timer already running");
            return false;
        }

        self.state = self.state.started();
        info!(
            "Workout started: {} x {}s work / {}s rest",
            self.config.interval_count, self.config.work_duration, self.config.rest_duration
        );
        self.emit(TimerEvent::Started {
            snapshot: self.snapshot(),
        });
        true
    }

    /// Stops the timer and returns it to the ready state.
    pub fn reset(&mut self) {
        self.state = self.state.reset();
        debug!("Timer reset");
        self.emit(TimerEvent::Reset);
    }

    /// Resets when running, starts otherwise. Returns whether the timer runs afterwards.
    pub fn toggle(&mut self) -> bool {
        if self.state.is_running() {
            self.reset();
            false
        } else {
            self.start()
        }
    }

    /// Applies one tick.
    ///
    /// The cue fires after the new state is stored, so observers of the cue
    /// event already see the decremented time.
    pub fn tick(&mut self) -> TickOutcome {
        let entered_with = self.state.remaining;
        let outcome = self.state.tick(&self.config);
        self.state = outcome.state;

        if outcome.cue {
            self.cue.play();
            self.emit(TimerEvent::Cue {
                remaining: entered_with,
            });
        }

        if let Some(change) = outcome.change {
            debug!(
                "Phase {} -> {} (interval {})",
                change.from.as_str(),
                change.to.as_str(),
                change.interval
            );
            self.emit(TimerEvent::PhaseChanged(change));
        }

        self.emit(TimerEvent::Tick {
            snapshot: self.snapshot(),
        });

        if outcome.change.is_some_and(|c| c.to == Phase::Complete) {
            info!("Workout complete");
            self.emit(TimerEvent::Completed);
        }

        outcome
    }

    /// Sets one configuration field from raw user input.
    ///
    /// The input is parsed with the engine's [`SettingPolicy`] and stored
    /// through [`TimerEngine::set_configuration`]. Returns the value that
    /// was stored.
    ///
    /// # Errors
    ///
    /// Returns `TimerError::InvalidState` while running and
    /// `TimerError::Validation` when the policy rejects the input. The
    /// previous value is kept in both cases.
    pub fn update_configuration(&mut self, field: ConfigField, raw: &str) -> Result<u32, TimerError> {
        if self.state.is_running() {
            return Err(TimerError::running(field));
        }

        let value = self
            .policy
            .parse(raw)
            .ok_or_else(|| TimerError::Validation {
                field,
                input: raw.to_string(),
            })?;

        self.set_configuration(field, value)?;
        Ok(value)
    }

    /// Sets one configuration field from an already-typed value.
    ///
    /// # Errors
    ///
    /// Returns `TimerError::InvalidState` while running.
    pub fn set_configuration(&mut self, field: ConfigField, value: u32) -> Result<(), TimerError> {
        if self.state.is_running() {
            return Err(TimerError::running(field));
        }

        self.config.set(field, value);
        debug!("Configuration {} = {}", field, value);
        self.emit(TimerEvent::ConfigurationChanged { field, value });
        Ok(())
    }

    /// Returns a read-only view for presentation.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::new(&self.state, &self.config)
    }

    /// Returns a reference to the current timer state.
    pub fn state(&self) -> &TimerState {
        &self.state
    }

    /// Returns a reference to the configuration.
    pub fn config(&self) -> &IntervalConfig {
        &self.config
    }

    /// Returns the active setting policy.
    pub fn policy(&self) -> SettingPolicy {
        self.policy
    }

    /// Returns a mutable reference to the timer state (for testing).
    #[cfg(test)]
    pub fn state_mut(&mut self) -> &mut TimerState {
        &mut self.state
    }

    fn emit(&self, event: TimerEvent) {
        if self.event_tx.send(event).is_err() {
            debug!("Event receiver dropped, event discarded");
        }
    }
}

impl std::fmt::Debug for TimerEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TimerEngine")
            .field("state", &self.state)
            .field("config", &self.config)
            .field("policy", &self.policy)
            .field("cue", &self.cue)
            .finish_non_exhaustive()
    }
}

// ============================================================================
// Tests
// ============================================================================

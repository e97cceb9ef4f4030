//! Tick source for the timer engine.
//!
//! `TimerDriver` owns the shared engine and the task that ticks it once per
//! period. The task is armed on start and cancelled on reset, and it ends
//! itself when the workout completes. At most one tick task exists per driver.

use std::sync::Arc;

use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Duration, Instant, MissedTickBehavior};
use tracing::debug;

use super::error::TimerError;
use super::timer::TimerEngine;
use crate::types::{ConfigField, Snapshot};

/// Default tick period.
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

// ============================================================================
// TimerDriver
// ============================================================================

/// Serializes access to a [`TimerEngine`] and schedules its ticks.
pub struct TimerDriver {
    /// Shared engine; every mutation goes through this lock
    engine: Arc<Mutex<TimerEngine>>,
    /// Time between ticks
    period: Duration,
    /// The live tick task, if any
    ticker: Option<JoinHandle<()>>,
}

impl TimerDriver {
    /// Creates a driver ticking once per second.
    pub fn new(engine: TimerEngine) -> Self {
        Self::with_period(engine, TICK_PERIOD)
    }

    /// Creates a driver with a custom tick period.
    pub fn with_period(engine: TimerEngine, period: Duration) -> Self {
        Self {
            engine: Arc::new(Mutex::new(engine)),
            period,
            ticker: None,
        }
    }

    /// Starts the workout and arms the tick source.
    ///
    /// Returns false if the engine was already running; the live tick source
    /// is left untouched in that case.
    pub async fn start(&mut self) -> bool {
        let engine = Arc::clone(&self.engine);
        let mut engine = engine.lock().await;

        if !engine.start() {
            return false;
        }

        self.disarm();
        self.ticker = Some(tokio::spawn(tick_loop(
            Arc::clone(&self.engine),
            self.period,
        )));
        debug!("Tick source armed ({:?})", self.period);
        true
    }

    /// Resets the engine and cancels the tick source.
    ///
    /// Both happen under the engine lock, so no tick lands after this returns.
    pub async fn reset(&mut self) {
        let engine = Arc::clone(&self.engine);
        let mut engine = engine.lock().await;

        engine.reset();
        self.disarm();
    }

    /// Resets when running, starts otherwise. Returns whether the timer runs afterwards.
    pub async fn toggle(&mut self) -> bool {
        let running = self.engine.lock().await.state().is_running();
        if running {
            self.reset().await;
            false
        } else {
            self.start().await
        }
    }

    /// Sets one configuration field from raw user input.
    ///
    /// # Errors
    ///
    /// See [`TimerEngine::update_configuration`].
    pub async fn update_configuration(&self, field: ConfigField, raw: &str) -> Result<u32, TimerError> {
        self.engine.lock().await.update_configuration(field, raw)
    }

    /// Returns a read-only view of the engine.
    pub async fn snapshot(&self) -> Snapshot {
        self.engine.lock().await.snapshot()
    }

    /// Returns the shared engine.
    pub fn engine(&self) -> Arc<Mutex<TimerEngine>> {
        Arc::clone(&self.engine)
    }

    /// Returns true if a tick task is alive.
    pub fn is_armed(&self) -> bool {
        self.ticker.as_ref().is_some_and(|handle| !handle.is_finished())
    }

    fn disarm(&mut self) {
        if let Some(handle) = self.ticker.take() {
            handle.abort();
            debug!("Tick source cancelled");
        }
    }
}

impl Drop for TimerDriver {
    fn drop(&mut self) {
        self.disarm();
    }
}

/// Ticks the engine once per period until it stops running.
///
/// The first tick lands one full period after arming.
async fn tick_loop(engine: Arc<Mutex<TimerEngine>>, period: Duration) {
    let mut ticker = interval_at(Instant::now() + period, period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        ticker.tick().await;

        let mut engine = engine.lock().await;
        if !engine.state().is_running() {
            break;
        }

        engine.tick();

        if !engine.state().is_running() {
            debug!("Workout finished, tick source stopping");
            break;
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

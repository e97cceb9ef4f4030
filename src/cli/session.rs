//! Workout sessions driven from the terminal.
//!
//! - `run_workout`: start immediately, print every tick, exit on completion
//! - `run_interactive`: read typed commands from an input stream

use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::sync::mpsc;
use tracing::{debug, info};

use super::commands::WorkoutArgs;
use super::console::Intent;
use super::display::Display;
use crate::engine::{TimerDriver, TimerEngine, TimerEvent};
use crate::sound::{try_create_player, Cue, SoundPlayer, SoundSource};
use crate::types::SettingPolicy;

// ============================================================================
// Setup
// ============================================================================

/// Builds the cue for the given flags.
///
/// A missing audio device silences the cue; a bad `--cue-sound` path is an error.
pub fn build_cue(args: &WorkoutArgs) -> Result<Cue> {
    if args.no_sound {
        debug!("Sound disabled by flag");
        return Ok(Cue::silent());
    }

    let source = match &args.cue_sound {
        Some(path) => SoundSource::file_checked(path)
            .with_context(|| format!("invalid --cue-sound '{}'", path.display()))?,
        None => SoundSource::default(),
    };

    let player = try_create_player().map(|player| player as Arc<dyn SoundPlayer>);
    Ok(Cue::from_player(player, source))
}

/// Builds a driver and its event stream from the flags.
pub fn build_driver(
    args: &WorkoutArgs,
    cue: Cue,
    policy: SettingPolicy,
) -> (TimerDriver, mpsc::UnboundedReceiver<TimerEvent>) {
    let (tx, rx) = mpsc::unbounded_channel();
    let engine = TimerEngine::new(args.config(), cue, tx).with_policy(policy);
    (TimerDriver::with_period(engine, args.tick_period()), rx)
}

// ============================================================================
// Run
// ============================================================================

/// Runs one workout to completion, or until Ctrl-C.
pub async fn run_workout(args: &WorkoutArgs) -> Result<()> {
    let cue = build_cue(args)?;
    let (mut driver, mut events) = build_driver(args, cue, SettingPolicy::Lenient);

    info!("Starting workout: {:?}", args.config());
    driver.start().await;

    loop {
        tokio::select! {
            event = events.recv() => match event {
                Some(event) => {
                    Display::show_event(&event, args.json);
                    if event == TimerEvent::Completed {
                        break;
                    }
                }
                None => break,
            },
            result = tokio::signal::ctrl_c() => {
                result.context("failed to listen for Ctrl-C")?;
                driver.reset().await;
                drain_events(&mut events, args.json);
                break;
            }
        }
    }

    Ok(())
}

// ============================================================================
// Interactive
// ============================================================================

/// Reads commands from `input` until `quit`, end of input, or Ctrl-C.
///
/// When input ends while a workout is running, the session stays open
/// until the workout completes.
pub async fn run_interactive<R>(args: &WorkoutArgs, policy: SettingPolicy, input: R) -> Result<()>
where
    R: AsyncBufRead + Unpin,
{
    let cue = build_cue(args)?;
    let (mut driver, mut events) = build_driver(args, cue, policy);
    let mut lines = input.lines();
    let mut input_open = true;

    loop {
        tokio::select! {
            line = lines.next_line(), if input_open => {
                match line.context("failed to read input")? {
                    Some(line) => {
                        // Show what happened so far before answering
                        drain_events(&mut events, args.json);
                        if !handle_line(&mut driver, &line, args.json).await {
                            driver.reset().await;
                            break;
                        }
                    }
                    None => {
                        input_open = false;
                        if !driver.snapshot().await.running {
                            break;
                        }
                        debug!("Input closed, waiting for the workout to finish");
                    }
                }
            }
            event = events.recv() => match event {
                Some(event) => {
                    Display::show_event(&event, args.json);
                    if event == TimerEvent::Completed && !input_open {
                        break;
                    }
                }
                None => break,
            },
            result = tokio::signal::ctrl_c() => {
                result.context("failed to listen for Ctrl-C")?;
                driver.reset().await;
                break;
            }
        }
    }

    drain_events(&mut events, args.json);
    Ok(())
}

/// Applies one input line. Returns false when the session should end.
async fn handle_line(driver: &mut TimerDriver, line: &str, json: bool) -> bool {
    if line.trim().is_empty() {
        return true;
    }

    let intent = match line.parse::<Intent>() {
        Ok(intent) => intent,
        Err(message) => {
            Display::show_error(&message);
            return true;
        }
    };

    match intent {
        Intent::Start => {
            if !driver.start().await {
                Display::show_notice("already running");
            }
        }
        Intent::Reset => driver.reset().await,
        Intent::Toggle => {
            driver.toggle().await;
        }
        Intent::Set { field, value } => {
            if let Err(e) = driver.update_configuration(field, &value).await {
                Display::show_error(&e.to_string());
            }
        }
        Intent::Status => Display::show_snapshot(&driver.snapshot().await, json),
        Intent::Help => Display::show_console_help(),
        Intent::Quit => return false,
    }

    true
}

fn drain_events(events: &mut mpsc::UnboundedReceiver<TimerEvent>, json: bool) {
    while let Ok(event) = events.try_recv() {
        Display::show_event(&event, json);
    }
}

// ============================================================================
// Tests
// ============================================================================

//! Display utilities for the interval timer CLI.
//!
//! This module turns engine snapshots and events into terminal output:
//! - One status line per tick (`Exercise  0:45  Round 1 of 8`)
//! - Short notices for start, reset, phase changes and completion
//! - JSON lines when requested

use crate::engine::TimerEvent;
use crate::types::{Phase, Snapshot};

// ============================================================================
// Display
// ============================================================================

/// Display utilities for CLI output.
pub struct Display;

impl Display {
    /// Returns the heading shown for a phase.
    pub fn phase_label(phase: Phase) -> &'static str {
        match phase {
            Phase::Ready | Phase::Complete => "Ready",
            Phase::Countdown => "Get Ready",
            Phase::Working => "Exercise",
            Phase::Resting => "Rest",
        }
    }

    /// Renders the status line for a snapshot, time as `m:ss`.
    pub fn render_line(snapshot: &Snapshot) -> String {
        let (minutes, seconds) = snapshot.minutes_seconds();
        let time = format!("{}:{:02}", minutes, seconds);
        format!(
            "{:<9}  {:>5}  Round {} of {}",
            Self::phase_label(snapshot.phase),
            time,
            snapshot.current_interval,
            snapshot.interval_count
        )
    }

    /// Renders a snapshot as one JSON line.
    pub fn render_json(snapshot: &Snapshot) -> String {
        serde_json::to_string(snapshot)
            .unwrap_or_else(|e| serde_json::json!({ "error": e.to_string() }).to_string())
    }

    /// Renders an event, or returns None for events with no visible output.
    pub fn render_event(event: &TimerEvent, json: bool) -> Option<String> {
        if json {
            return match event {
                TimerEvent::Started { snapshot } | TimerEvent::Tick { snapshot } => {
                    Some(Self::render_json(snapshot))
                }
                _ => None,
            };
        }

        match event {
            TimerEvent::Started { snapshot } => {
                Some(format!("> Started\n{}", Self::render_line(snapshot)))
            }
            TimerEvent::Tick { snapshot } if snapshot.running => Some(Self::render_line(snapshot)),
            TimerEvent::Tick { .. } | TimerEvent::Cue { .. } => None,
            TimerEvent::PhaseChanged(change) => match change.to {
                Phase::Working => Some(format!("-- Exercise: round {}", change.interval)),
                Phase::Resting => Some("-- Rest".to_string()),
                _ => None,
            },
            TimerEvent::Completed => Some("* Workout complete".to_string()),
            TimerEvent::Reset => Some("[] Timer reset".to_string()),
            TimerEvent::ConfigurationChanged { field, value } => {
                Some(format!("  {} = {}", field, value))
            }
        }
    }

    /// Prints an event.
    pub fn show_event(event: &TimerEvent, json: bool) {
        if let Some(text) = Self::render_event(event, json) {
            println!("{}", text);
        }
    }

    /// Prints the current status.
    pub fn show_snapshot(snapshot: &Snapshot, json: bool) {
        if json {
            println!("{}", Self::render_json(snapshot));
        } else {
            println!("{}", Self::render_line(snapshot));
        }
    }

    /// Prints the interactive command list.
    pub fn show_console_help() {
        println!("Commands:");
        println!("  start                 start the workout");
        println!("  reset | pause | stop  stop and return to ready");
        println!("  toggle                start, or reset when running");
        println!("  set <field> <value>   change work, rest or intervals (while stopped)");
        println!("  status                show the current state");
        println!("  help                  show this list");
        println!("  quit                  exit");
    }

    /// Shows a notice that needs no action.
    pub fn show_notice(message: &str) {
        println!("  {}", message);
    }

    /// Shows an error message.
    pub fn show_error(message: &str) {
        eprintln!("error: {}", message);
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ConfigField, PhaseChange};

    fn snapshot(phase: Phase, remaining: u32, running: bool) -> Snapshot {
        Snapshot {
            phase,
            remaining,
            current_interval: 2,
            interval_count: 8,
            running,
        }
    }

    mod time_format_tests {
        use super::*;

        fn time_of(remaining: u32) -> String {
            let line = Display::render_line(&snapshot(Phase::Working, remaining, true));
            line.split_whitespace().nth(1).unwrap().to_string()
        }

        #[test]
        fn test_time_zero() {
            assert_eq!(time_of(0), "0:00");
        }

        #[test]
        fn test_time_seconds_only() {
            assert_eq!(time_of(45), "0:45");
            assert_eq!(time_of(5), "0:05");
        }

        #[test]
        fn test_time_minutes() {
            assert_eq!(time_of(60), "1:00");
            assert_eq!(time_of(90), "1:30");
            assert_eq!(time_of(125 * 60 + 9), "125:09");
        }
    }

    mod render_tests {
        use super::*;

        #[test]
        fn test_phase_labels() {
            assert_eq!(Display::phase_label(Phase::Countdown), "Get Ready");
            assert_eq!(Display::phase_label(Phase::Working), "Exercise");
            assert_eq!(Display::phase_label(Phase::Resting), "Rest");
            assert_eq!(Display::phase_label(Phase::Complete), "Ready");
        }

        #[test]
        fn test_render_line() {
            let line = Display::render_line(&snapshot(Phase::Working, 75, true));
            assert!(line.starts_with("Exercise"));
            assert!(line.contains("1:15"));
            assert!(line.ends_with("Round 2 of 8"));
        }

        #[test]
        fn test_render_tick_only_while_running() {
            let running = TimerEvent::Tick {
                snapshot: snapshot(Phase::Resting, 3, true),
            };
            let stopped = TimerEvent::Tick {
                snapshot: snapshot(Phase::Ready, 0, false),
            };

            assert!(Display::render_event(&running, false).is_some());
            assert!(Display::render_event(&stopped, false).is_none());
        }

        #[test]
        fn test_render_phase_change() {
            let event = TimerEvent::PhaseChanged(PhaseChange {
                from: Phase::Resting,
                to: Phase::Working,
                interval: 3,
            });
            assert_eq!(
                Display::render_event(&event, false).as_deref(),
                Some("-- Exercise: round 3")
            );
        }

        #[test]
        fn test_render_notices() {
            assert_eq!(
                Display::render_event(&TimerEvent::Completed, false).as_deref(),
                Some("* Workout complete")
            );
            assert_eq!(
                Display::render_event(&TimerEvent::Reset, false).as_deref(),
                Some("[] Timer reset")
            );
            assert!(Display::render_event(&TimerEvent::Cue { remaining: 2 }, false).is_none());

            let changed = TimerEvent::ConfigurationChanged {
                field: ConfigField::IntervalCount,
                value: 3,
            };
            assert_eq!(
                Display::render_event(&changed, false).as_deref(),
                Some("  intervalCount = 3")
            );
        }

        #[test]
        fn test_render_json() {
            let event = TimerEvent::Tick {
                snapshot: snapshot(Phase::Ready, 0, false),
            };
            let line = Display::render_event(&event, true).unwrap();
            let value: serde_json::Value = serde_json::from_str(&line).unwrap();

            assert_eq!(value["phase"], "ready");
            assert_eq!(value["running"], false);
            assert_eq!(value["currentInterval"], 2);
            assert!(Display::render_event(&TimerEvent::Completed, true).is_none());
        }

        #[test]
        fn test_render_json_is_single_valid_line() {
            let line = Display::render_json(&snapshot(Phase::Countdown, 3, true));
            assert!(!line.contains('\n'));

            let value: serde_json::Value = serde_json::from_str(&line).unwrap();
            assert_eq!(value["phase"], "countdown");
            assert_eq!(value["intervalCount"], 8);
        }
    }
}

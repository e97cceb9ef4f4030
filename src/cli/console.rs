//! Typed commands for the interactive session.

use std::str::FromStr;

use crate::types::ConfigField;

/// A user intent read from one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    Start,
    Reset,
    Toggle,
    Set {
        field: ConfigField,
        /// Raw value text; parsed by the engine's setting policy
        value: String,
    },
    Status,
    Help,
    Quit,
}

impl FromStr for Intent {
    type Err = String;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let Some(command) = words.next() else {
            return Err("empty command".to_string());
        };

        match command.to_ascii_lowercase().as_str() {
            "start" => Ok(Intent::Start),
            "reset" | "pause" | "stop" => Ok(Intent::Reset),
            "toggle" => Ok(Intent::Toggle),
            "status" => Ok(Intent::Status),
            "help" | "?" => Ok(Intent::Help),
            "quit" | "exit" | "q" => Ok(Intent::Quit),
            "set" => {
                let field = words
                    .next()
                    .ok_or_else(|| "usage: set <field> <value>".to_string())?
                    .parse()?;
                let value = words.collect::<Vec<_>>().join(" ");
                Ok(Intent::Set { field, value })
            }
            other => Err(format!("unknown command '{}' (try 'help')", other)),
        }
    }
}

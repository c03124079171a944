//! Command enum as the single source of truth for command names.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::ledger::LedgerError;

/// Errors raised while resolving a command and its parameters.
///
/// All of these are fatal before any ledger state is touched.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// The command name is not in the supported set.
    #[error("unknown command \"{name}\"")]
    UnknownCommand { name: String },

    /// The command is declared but not built yet.
    #[error("command \"{name}\" is not yet implemented")]
    Unimplemented { name: String },

    /// A required parameter was absent (or empty).
    #[error("must specify a {param} for the {command} command")]
    MissingParameter {
        command: Command,
        param: &'static str,
    },
}

/// The supported command set.
///
/// Dispatch is a total match over this enum; there is no handler table to
/// fall through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// Close the running entry and open a new one.
    Start,
    /// Record an entry with a fixed duration, already closed.
    StartFixed,
    /// Resume a previous activity by fuzzy label match.
    StartExisting,
    /// Relabel the most recent entry.
    Set,
    /// Print the elapsed-time summary.
    Show,
    /// Close the running entry.
    Stop,
    /// Declared but not yet implemented.
    Remove,
}

impl Command {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::StartFixed => "start_fixed",
            Self::StartExisting => "start_existing",
            Self::Set => "set",
            Self::Show => "show",
            Self::Stop => "stop",
            Self::Remove => "remove",
        }
    }

    /// Returns the label parameter, which this command requires.
    ///
    /// An empty label counts as absent.
    pub fn require_label(self, label: Option<&str>) -> Result<&str, CommandError> {
        match label {
            Some(label) if !label.is_empty() => Ok(label),
            _ => Err(CommandError::MissingParameter {
                command: self,
                param: "label",
            }),
        }
    }

    /// Returns the duration parameter, which this command requires.
    pub fn require_duration(self, duration: Option<&str>) -> Result<&str, CommandError> {
        match duration {
            Some(duration) if !duration.is_empty() => Ok(duration),
            _ => Err(CommandError::MissingParameter {
                command: self,
                param: "duration",
            }),
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "start" => Ok(Self::Start),
            "start_fixed" => Ok(Self::StartFixed),
            "start_existing" | "start_ex" => Ok(Self::StartExisting),
            "set" => Ok(Self::Set),
            "show" => Ok(Self::Show),
            "stop" => Ok(Self::Stop),
            "remove" => Ok(Self::Remove),
            _ => Err(CommandError::UnknownCommand {
                name: s.to_string(),
            }),
        }
    }
}

/// Parses a duration parameter as whole minutes.
pub fn parse_minutes(value: &str) -> Result<i64, LedgerError> {
    value
        .trim()
        .parse()
        .map_err(|_| LedgerError::InvalidDuration {
            value: value.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrip_all_variants() {
        let variants = [
            Command::Start,
            Command::StartFixed,
            Command::StartExisting,
            Command::Set,
            Command::Show,
            Command::Stop,
            Command::Remove,
        ];

        for variant in &variants {
            let s = variant.to_string();
            let parsed: Command = s.parse().expect("should parse");
            assert_eq!(parsed, *variant, "roundtrip failed for {variant:?}");
        }
    }

    #[test]
    fn start_ex_alias_parses() {
        let parsed: Command = "start_ex".parse().expect("should parse");
        assert_eq!(parsed, Command::StartExisting);
    }

    #[test]
    fn unknown_command_errors() {
        let result: Result<Command, _> = "begin".parse();
        let err = result.unwrap_err();
        assert_eq!(err.to_string(), "unknown command \"begin\"");
    }

    #[test]
    fn require_label_rejects_absent_and_empty() {
        let command = Command::StartExisting;
        assert!(command.require_label(None).is_err());
        assert!(command.require_label(Some("")).is_err());
        assert_eq!(command.require_label(Some("work")).unwrap(), "work");
    }

    #[test]
    fn missing_parameter_names_the_command() {
        let err = Command::StartFixed.require_duration(None).unwrap_err();
        assert_eq!(
            err.to_string(),
            "must specify a duration for the start_fixed command"
        );
    }

    #[test]
    fn parse_minutes_accepts_integers() {
        assert_eq!(parse_minutes("90").unwrap(), 90);
        assert_eq!(parse_minutes(" 15 ").unwrap(), 15);
    }

    #[test]
    fn parse_minutes_rejects_non_numeric() {
        let err = parse_minutes("ninety").unwrap_err();
        assert_eq!(
            err,
            LedgerError::InvalidDuration {
                value: "ninety".to_string()
            }
        );
        assert!(parse_minutes("1.5").is_err());
    }
}

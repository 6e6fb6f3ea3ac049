//! Config for the evaluator behaviors
//!
//! This module provides configuration options for controlling how the [`Evaluator`] reports
//! and summarizes matches.
//!
//! Configuration can be created programmatically using [`Configuration::new()`] or by reading
//! environment variables using [`Configuration::from_env()`].
//!
//! # Environment Variables
//!
//! The following environment variables can be used to override configuration values. All
//! values are optional. Flags are case-insensitive: set the value to `"true"` to enable a flag.
//!
//! - `PANTHEON_VERBOSE`: Log a summary of every evaluated match (default: `true`)
//! - `PANTHEON_LOG`: Enable logging to a file (default: `false`)
//! - `PANTHEON_TOP_FACTIONS`: Number of most used factions kept per player (default: `3`)
//! - `PANTHEON_TOP_MATCHUPS`: Number of most frequent matchups kept (default: `5`)
//!
//! [`Evaluator`]: crate::evaluator::Evaluator

/// Default number of most used factions kept per player in a report.
pub const DEFAULT_TOP_FACTIONS: usize = 3;

/// Default number of most frequent matchups kept in a report.
pub const DEFAULT_TOP_MATCHUPS: usize = 5;

/// Configuration for evaluator behaviors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Configuration {
    pub(crate) verbose: bool,
    pub(crate) log: bool,
    pub(crate) top_factions: usize,
    pub(crate) top_matchups: usize,
}

impl Configuration {
    /// Create a new configuration with default parameters.
    ///
    /// By default:
    /// - The evaluator logs an `info` summary of each match.
    /// - Logging to file is disabled.
    /// - Reports keep the 3 most used factions per player.
    /// - Reports keep the 5 most frequent matchups.
    pub fn new() -> Self {
        Self {
            verbose: true,
            log: false,
            top_factions: DEFAULT_TOP_FACTIONS,
            top_matchups: DEFAULT_TOP_MATCHUPS,
        }
    }

    /// Create configuration from environment variables.
    ///
    /// The following environment variables are recognized:
    /// - `PANTHEON_VERBOSE`: if set to `"true"`, enables match summaries (default: `true`)
    /// - `PANTHEON_LOG`: if set to `"true"`, enables logging to file (default: `false`)
    /// - `PANTHEON_TOP_FACTIONS` (usize): most used factions kept per player (default: `3`)
    /// - `PANTHEON_TOP_MATCHUPS` (usize): most frequent matchups kept (default: `5`)
    ///
    /// Unset variables and numbers that fail to parse fall back to the default value.
    pub fn from_env() -> Self {
        fn get_env_flag(var: &str, default: bool) -> bool {
            match std::env::var(var) {
                Ok(val) => val.eq_ignore_ascii_case("true"),
                Err(_) => default,
            }
        }

        fn get_env_usize(var: &str, default: usize) -> usize {
            std::env::var(var)
                .ok()
                .and_then(|val| val.trim().parse().ok())
                .unwrap_or(default)
        }

        Self {
            verbose: get_env_flag("PANTHEON_VERBOSE", true),
            log: get_env_flag("PANTHEON_LOG", false),
            top_factions: get_env_usize("PANTHEON_TOP_FACTIONS", DEFAULT_TOP_FACTIONS),
            top_matchups: get_env_usize("PANTHEON_TOP_MATCHUPS", DEFAULT_TOP_MATCHUPS),
        }
    }

    /// Enable or disable match summaries.
    pub fn with_verbose(mut self, value: bool) -> Self {
        self.verbose = value;
        self
    }

    /// Enable or disable logging to file.
    pub fn with_log(mut self, value: bool) -> Self {
        self.log = value;
        self
    }

    /// Set how many of each player's most used factions a report keeps.
    pub fn with_top_factions(mut self, value: usize) -> Self {
        self.top_factions = value;
        self
    }

    /// Set how many of the most frequent matchups a report keeps.
    pub fn with_top_matchups(mut self, value: usize) -> Self {
        self.top_matchups = value;
        self
    }

    /// Whether match summaries are logged.
    pub fn verbose(&self) -> bool {
        self.verbose
    }

    /// Whether logs are written to a file.
    pub fn log(&self) -> bool {
        self.log
    }

    /// Most used factions kept per player.
    pub fn top_factions(&self) -> usize {
        self.top_factions
    }

    /// Most frequent matchups kept.
    pub fn top_matchups(&self) -> usize {
        self.top_matchups
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Self::new()
    }
}

//! Runs the whole pipeline for one or many matches.
//!
//! This module defines the [`Evaluator`] type. For each [`Match`] it:
//!
//! - scores every round with a [`MatchScorer`]
//! - derives per-faction statistics, round history, streaks and matchups with a
//!   [`StatisticsEngine`]
//! - keeps the most used factions and most frequent matchups, as configured
//! - returns everything as a serializable [`MatchReport`]
//!
//! # Behavior & Configuration
//!
//! Behavior is controlled by a [`Configuration`] object:
//!
//! - When `config.log = true`, a file logger is installed when the evaluator is created.
//! - When `config.verbose = true`, an `info` event summarizing each match is emitted.
//! - `config.top_factions` and `config.top_matchups` bound the ranked lists of the report.
//!
//! Evaluating a match never mutates it, so independent matches can be evaluated from
//! several threads sharing one evaluator.
//!
//! # Example
//!
//! ```
//! use pantheon_tournament::prelude::*;
//!
//! fn main() -> anyhow::Result<()> {
//!     let evaluator = Evaluator::new(Configuration::new().with_verbose(false))?;
//!     let m = Match::new(
//!         Player::new("Achille", ["Zeus", "Athena"]),
//!         Player::new("Hector", ["Ares", "Zeus"]),
//!     );
//!
//!     let report = evaluator.evaluate(&m)?;
//!     assert_eq!(report.result.winner, "Achille");
//!     println!("{}", report.to_json_pretty()?);
//!     Ok(())
//! }
//! ```

use anyhow::Context;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, trace};

use crate::{
    configuration::Configuration,
    dominance::DominanceRelation,
    logger::init_logger,
    match_scorer::{MatchScorer, TournamentResult},
    player::Match,
    statistics::{AdvancedStatistics, StatisticsEngine},
};

/// Everything computed for one match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchReport {
    /// Round tallies, usage counts and win rates.
    pub result: TournamentResult,
    /// Per-faction statistics, round history, streaks and matchups.
    pub statistics: AdvancedStatistics,
    /// Player one's most used tokens, most used first.
    pub player_one_top_factions: Vec<(String, u32)>,
    /// Player two's most used tokens, most used first.
    pub player_two_top_factions: Vec<(String, u32)>,
    /// Most frequent matchups, most frequent first.
    pub top_matchups: Vec<(String, u32)>,
}

impl MatchReport {
    /// Pretty-printed JSON rendering of the report.
    ///
    /// # Errors
    /// Returned if serialization fails.
    pub fn to_json_pretty(&self) -> anyhow::Result<String> {
        serde_json::to_string_pretty(self).context("failed to serialize match report")
    }
}

/// Scores matches and derives their statistics.
#[derive(Debug, Clone)]
pub struct Evaluator {
    scorer: MatchScorer,
    statistics: StatisticsEngine,
    config: Configuration,
}

impl Evaluator {
    /// Create an [`Evaluator`] playing by the standard rules.
    ///
    /// # Errors
    /// Returned if `config` asks for file logging and the logger cannot be installed.
    pub fn new(config: Configuration) -> anyhow::Result<Evaluator> {
        Self::with_relation(config, DominanceRelation::standard())
    }

    /// Create an [`Evaluator`] playing by custom rules.
    ///
    /// # Errors
    /// Returned if `config` asks for file logging and the logger cannot be installed.
    #[instrument(skip_all)]
    pub fn with_relation(
        config: Configuration,
        relation: DominanceRelation,
    ) -> anyhow::Result<Evaluator> {
        if config.log {
            init_logger()?;
        }

        trace!(?config);

        Ok(Evaluator {
            scorer: MatchScorer::new(relation.clone()),
            statistics: StatisticsEngine::new(relation),
            config,
        })
    }

    /// Configuration in use.
    pub fn config(&self) -> &Configuration {
        &self.config
    }

    /// Score `m` and derive its statistics.
    ///
    /// # Errors
    /// Returned if the statistics cannot be derived from the computed result, which indicates
    /// a bug rather than bad input: every well-formed match can be evaluated.
    #[instrument(skip_all, fields(player_one = %m.player_one.name, player_two = %m.player_two.name))]
    pub fn evaluate(&self, m: &Match) -> anyhow::Result<MatchReport> {
        debug!(
            player_one_moves = m.player_one.moves.len(),
            player_two_moves = m.player_two.moves.len(),
            "scoring match"
        );
        let result = self.scorer.score(m);

        debug!("computing advanced statistics");
        let statistics = self.statistics.compute_advanced_statistics(m, &result)?;

        if self.config.verbose {
            info!(
                winner = %result.winner,
                tie = result.is_draw(),
                rounds = result.total_rounds,
                player_one_wins = result.player_one_wins,
                player_two_wins = result.player_two_wins,
                draws = result.draws,
                unscored = result.unscored_rounds,
                "match evaluated"
            );
        }

        Ok(MatchReport {
            player_one_top_factions: MatchScorer::top_used_factions(
                &result.player_one_usage,
                self.config.top_factions,
            ),
            player_two_top_factions: MatchScorer::top_used_factions(
                &result.player_two_usage,
                self.config.top_factions,
            ),
            top_matchups: statistics
                .head_to_head_matchups
                .iter()
                .take(self.config.top_matchups)
                .cloned()
                .collect(),
            result,
            statistics,
        })
    }

    /// Evaluate every match independently, in order.
    ///
    /// # Errors
    /// Returned on the first match that fails to evaluate, naming its index.
    #[instrument(skip_all, fields(matches = matches.len()))]
    pub fn evaluate_all(&self, matches: &[Match]) -> anyhow::Result<Vec<MatchReport>> {
        matches
            .iter()
            .enumerate()
            .map(|(i, m)| {
                self.evaluate(m)
                    .with_context(|| format!("could not evaluate match #{i}"))
            })
            .collect()
    }
}

//! # Pantheon Tournament
//!
//! A scoring and statistics engine for six-faction "dominance" matches: two players each field
//! a sequence of gods, and every round pits the two gods played at the same position against
//! each other. Each god beats exactly two others and loses to exactly two others.
//!
//! It provides:
//! - The fixed beats-graph and pairwise outcome queries ([`DominanceRelation`](crate::dominance::DominanceRelation))
//! - Round-by-round scoring of a match ([`MatchScorer`](crate::match_scorer::MatchScorer))
//! - Derived statistics: per-god performance, round history, longest win streaks and
//!   head-to-head matchups ([`StatisticsEngine`](crate::statistics::StatisticsEngine))
//! - A facade running the whole pipeline with logging and configuration
//!   ([`Evaluator`](crate::evaluator::Evaluator))
//!
//! Every computation is a pure function of its input: the engine performs no I/O (apart from
//! optional file logging) and holds no shared mutable state. Fetching match data and rendering
//! results are left to the caller; all inputs and outputs implement `serde` traits.
//!
//! # Documentation Overview
//!
//! - For the rules of the game, see the [`dominance`] and [`faction`] modules.
//! - For the tallies of a single match, see [`TournamentResult`](crate::match_scorer::TournamentResult).
//! - For derived views, see [`AdvancedStatistics`](crate::statistics::AdvancedStatistics) and
//!   the [`streak`] module.
//! - For configuring the evaluator, see [`Configuration`](crate::configuration::Configuration).
//!
//! # Move tokens
//!
//! Moves are plain strings. A token that does not exactly name a god (names are
//! case-sensitive) is still counted as played, appears in the round history and in matchups,
//! but the round it belongs to is not scored: it adds to neither player's wins nor to draws.
//! Such rounds are reported as [`RoundWinner::Unscored`](crate::match_scorer::RoundWinner::Unscored)
//! and labelled `"Draw"`.
//!
//! # Usage Example
//!
//! ```
//! use pantheon_tournament::prelude::*;
//!
//! fn main() -> anyhow::Result<()> {
//!     let m = Match::new(
//!         Player::new("Achille", ["Zeus", "Athena", "Hades", "Ares", "Poseidon"]),
//!         Player::new("Hector", ["Ares", "Zeus", "Hades", "Athena", "Athena"]),
//!     );
//!
//!     let scorer = MatchScorer::default();
//!     let result = scorer.score(&m);
//!     assert_eq!(result.winner, "Achille");
//!     assert_eq!((result.player_one_wins, result.player_two_wins, result.draws), (3, 1, 1));
//!
//!     let stats = StatisticsEngine::default().compute_advanced_statistics(&m, &result)?;
//!     assert_eq!(stats.longest_player_one_streak.length, 2);
//!
//!     for (god, count) in MatchScorer::top_used_factions(&result.player_two_usage, 3) {
//!         println!("{god}: {count}");
//!     }
//!     Ok(())
//! }
//! ```
#![warn(missing_docs)]

pub use anyhow;
pub mod configuration;
pub mod dominance;
pub mod evaluator;
pub mod faction;
mod logger;
pub mod match_scorer;
pub mod player;
pub mod statistics;
pub mod streak;
pub mod tally;

/// Commonly used types and traits for quick access.
///
/// Import this prelude to get started easily:
/// ```rust
/// use pantheon_tournament::prelude::*;
/// ```
///
/// Includes:
/// - [`Configuration`](crate::configuration::Configuration)
/// - [`Evaluator`](crate::evaluator::Evaluator) and [`MatchReport`](crate::evaluator::MatchReport)
/// - the input types [`Match`](crate::player::Match) and [`Player`](crate::player::Player)
/// - the rules, scorer and statistics engine with their result types
pub mod prelude {
    pub use crate::configuration::Configuration;
    pub use crate::dominance::{DominanceRelation, Outcome};
    pub use crate::evaluator::{Evaluator, MatchReport};
    pub use crate::faction::{Faction, ParsedMove};
    pub use crate::match_scorer::{
        MatchScorer, RoundWinner, TournamentResult, Verdict, DRAW_LABEL,
    };
    pub use crate::player::{Match, Player};
    pub use crate::statistics::{AdvancedStatistics, GodStatistic, RoundDetail, StatisticsEngine};
    pub use crate::streak::WinStreak;
    pub use crate::tally::FrequencyTable;
}

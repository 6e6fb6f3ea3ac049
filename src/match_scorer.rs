//! Round-by-round scoring of a [`Match`].
//!
//! The scorer walks both move sequences in lockstep, up to the shorter one, and tallies:
//! - wins for each player and draws, for rounds where both tokens name a faction
//! - how often each player used each token, whether it names a faction or not
//! - win rates, as a percentage of the total number of rounds
//!
//! Rounds containing an unrecognized token are counted as played but not scored.

use std::{cmp::Ordering, fmt};

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, trace};

use crate::{
    dominance::{DominanceRelation, Outcome},
    faction::ParsedMove,
    player::Match,
    tally::{percentage, FrequencyTable},
};

/// Winner label used when neither player won more rounds, and for drawn rounds.
///
/// A player may be named `"Draw"` too, so never compare a winner label against this constant
/// to detect a tie. Use [`TournamentResult::verdict`] or [`RoundDetail::outcome`] instead.
///
/// [`RoundDetail::outcome`]: crate::statistics::RoundDetail::outcome
pub const DRAW_LABEL: &str = "Draw";

/// Which side took the match.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Verdict {
    /// Player one won more rounds.
    PlayerOne,
    /// Player two won more rounds.
    PlayerTwo,
    /// Both players won the same number of rounds, including an empty match.
    #[default]
    Tie,
}

/// Classification of a single round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundWinner {
    /// Player one's faction beats player two's.
    PlayerOne,
    /// Player two's faction beats player one's.
    PlayerTwo,
    /// Both factions are known and neither beats the other.
    Draw,
    /// At least one token does not name a faction.
    Unscored,
}

impl RoundWinner {
    /// True if the round counts toward the win/loss/draw tallies.
    pub fn is_scored(self) -> bool {
        self != RoundWinner::Unscored
    }
}

impl From<Outcome> for RoundWinner {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::FirstWins => RoundWinner::PlayerOne,
            Outcome::SecondWins => RoundWinner::PlayerTwo,
            Outcome::Draw => RoundWinner::Draw,
        }
    }
}

/// Aggregate result of a match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TournamentResult {
    /// Name of the player with more round wins, or [`DRAW_LABEL`].
    pub winner: String,
    /// Side that took the match. Unlike `winner`, never ambiguous.
    #[serde(default)]
    pub verdict: Verdict,
    /// Rounds won by player one.
    pub player_one_wins: u32,
    /// Rounds won by player two.
    pub player_two_wins: u32,
    /// Scored rounds with no winner.
    pub draws: u32,
    /// Rounds skipped because a token was unrecognized.
    pub unscored_rounds: u32,
    /// Rounds played, i.e. the length of the shorter move sequence.
    pub total_rounds: u32,
    /// How often player one played each token.
    pub player_one_usage: FrequencyTable,
    /// How often player two played each token.
    pub player_two_usage: FrequencyTable,
    /// `player_one_wins` as a percentage of `total_rounds`.
    pub player_one_win_rate: f64,
    /// `player_two_wins` as a percentage of `total_rounds`.
    pub player_two_win_rate: f64,
}

impl Default for TournamentResult {
    fn default() -> Self {
        Self {
            winner: DRAW_LABEL.to_owned(),
            verdict: Verdict::Tie,
            player_one_wins: 0,
            player_two_wins: 0,
            draws: 0,
            unscored_rounds: 0,
            total_rounds: 0,
            player_one_usage: FrequencyTable::new(),
            player_two_usage: FrequencyTable::new(),
            player_one_win_rate: 0.0,
            player_two_win_rate: 0.0,
        }
    }
}

impl TournamentResult {
    /// True if neither player won more rounds than the other.
    ///
    /// Unlike comparing `winner` with [`DRAW_LABEL`], this holds only for a real tie, even
    /// when a player is named `"Draw"`.
    pub fn is_draw(&self) -> bool {
        self.verdict == Verdict::Tie
    }
}

impl fmt::Display for TournamentResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_draw() {
            f.write_str("tie")?;
        } else {
            write!(f, "winner: {}", self.winner)?;
        }
        write!(
            f,
            ", rounds: {}, wins: {}-{}, draws: {}, unscored: {}",
            self.total_rounds,
            self.player_one_wins,
            self.player_two_wins,
            self.draws,
            self.unscored_rounds
        )
    }
}

/// Scores matches against a [`DominanceRelation`].
#[derive(Debug, Clone, Default)]
pub struct MatchScorer {
    relation: DominanceRelation,
}

impl MatchScorer {
    /// Create a scorer using the given rules.
    pub fn new(relation: DominanceRelation) -> Self {
        Self { relation }
    }

    /// Rules used by this scorer.
    pub fn relation(&self) -> &DominanceRelation {
        &self.relation
    }

    /// Classify one round from the two raw tokens.
    pub fn classify_round(&self, player_one_move: &str, player_two_move: &str) -> RoundWinner {
        match ParsedMove::parse_pair(player_one_move, player_two_move) {
            Some((first, second)) => self.relation.determine_winner(first, second).into(),
            None => RoundWinner::Unscored,
        }
    }

    /// Score every playable round of `m`.
    #[instrument(skip_all, fields(player_one = %m.player_one.name, player_two = %m.player_two.name))]
    pub fn score(&self, m: &Match) -> TournamentResult {
        let mut result = TournamentResult::default();

        for (round, first, second) in m.rounds() {
            result.total_rounds += 1;
            result.player_one_usage.increment(first);
            result.player_two_usage.increment(second);

            match self.classify_round(first, second) {
                RoundWinner::PlayerOne => result.player_one_wins += 1,
                RoundWinner::PlayerTwo => result.player_two_wins += 1,
                RoundWinner::Draw => result.draws += 1,
                RoundWinner::Unscored => {
                    debug!(round, first, second, "unrecognized move, round not scored");
                    result.unscored_rounds += 1;
                }
            }
        }

        result.verdict = match result.player_one_wins.cmp(&result.player_two_wins) {
            Ordering::Greater => Verdict::PlayerOne,
            Ordering::Less => Verdict::PlayerTwo,
            Ordering::Equal => Verdict::Tie,
        };
        result.winner = match result.verdict {
            Verdict::PlayerOne => m.player_one.name.clone(),
            Verdict::PlayerTwo => m.player_two.name.clone(),
            Verdict::Tie => DRAW_LABEL.to_owned(),
        };

        result.player_one_win_rate = percentage(result.player_one_wins, result.total_rounds);
        result.player_two_win_rate = percentage(result.player_two_wins, result.total_rounds);

        trace!(%result);
        result
    }

    /// The `n` most used tokens of a usage table, by descending count.
    ///
    /// Ties keep the order in which the tokens were first played.
    pub fn top_used_factions(usage: &FrequencyTable, n: usize) -> Vec<(String, u32)> {
        usage.top(n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::Player;

    fn duel(first: &[&str], second: &[&str]) -> Match {
        Match::new(
            Player::new("Achille", first.iter().copied()),
            Player::new("Hector", second.iter().copied()),
        )
    }

    #[test]
    fn player_one_wins() {
        let result = MatchScorer::default().score(&duel(&["Zeus"; 3], &["Ares"; 3]));
        assert_eq!(result.winner, "Achille");
        assert_eq!(result.player_one_wins, 3);
        assert_eq!(result.player_two_wins, 0);
        assert_eq!(result.draws, 0);
    }

    #[test]
    fn player_two_wins() {
        let result = MatchScorer::default().score(&duel(&["Ares"; 3], &["Zeus"; 3]));
        assert_eq!(result.winner, "Hector");
        assert_eq!(result.player_one_wins, 0);
        assert_eq!(result.player_two_wins, 3);
        assert_eq!(result.draws, 0);
    }

    #[test]
    fn mirror_matches_draw() {
        let result = MatchScorer::default().score(&duel(&["Zeus"; 3], &["Zeus"; 3]));
        assert_eq!(result.winner, DRAW_LABEL);
        assert!(result.is_draw());
        assert_eq!(result.draws, 3);
    }

    #[test]
    fn win_rates() {
        let result = MatchScorer::default().score(&duel(
            &["Zeus", "Zeus", "Ares", "Ares"],
            &["Ares", "Ares", "Zeus", "Zeus"],
        ));
        assert_eq!(result.total_rounds, 4);
        assert_eq!(result.player_one_win_rate, 50.0);
        assert_eq!(result.player_two_win_rate, 50.0);
        assert_eq!(result.winner, DRAW_LABEL);
    }

    #[test]
    fn tracks_usage() {
        let result = MatchScorer::default().score(&duel(
            &["Zeus", "Zeus", "Athena", "Ares"],
            &["Poseidon", "Poseidon", "Poseidon", "Hades"],
        ));
        assert_eq!(result.player_one_usage.get("Zeus"), Some(2));
        assert_eq!(result.player_one_usage.get("Athena"), Some(1));
        assert_eq!(result.player_one_usage.get("Ares"), Some(1));
        assert_eq!(result.player_two_usage.get("Poseidon"), Some(3));
        assert_eq!(result.player_two_usage.get("Hades"), Some(1));
    }

    #[test]
    fn mixed_results() {
        let result = MatchScorer::default().score(&duel(
            &["Zeus", "Athena", "Hades", "Ares", "Poseidon"],
            &["Ares", "Zeus", "Hades", "Athena", "Athena"],
        ));
        assert_eq!(result.total_rounds, 5);
        assert_eq!(result.player_one_wins, 3);
        assert_eq!(result.player_two_wins, 1);
        assert_eq!(result.draws, 1);
        assert_eq!(result.winner, "Achille");
        assert_eq!(result.player_one_win_rate, 60.0);
        assert_eq!(result.player_two_win_rate, 20.0);
    }

    #[test]
    fn truncates_to_shorter_sequence() {
        let result = MatchScorer::default().score(&duel(
            &["Zeus", "Zeus", "Zeus", "Hades", "Hades"],
            &["Ares", "Ares", "Ares"],
        ));
        assert_eq!(result.total_rounds, 3);
        assert_eq!(result.player_one_usage.get("Hades"), None);
        assert_eq!(result.player_one_usage.total(), 3);
    }

    #[test]
    fn empty_match() {
        let result = MatchScorer::default().score(&duel(&[], &["Zeus"]));
        assert_eq!(result.total_rounds, 0);
        assert_eq!(result.player_one_win_rate, 0.0);
        assert_eq!(result.player_two_win_rate, 0.0);
        assert_eq!(result.winner, DRAW_LABEL);
        assert!(result.player_one_usage.is_empty());
    }

    #[test]
    fn unrecognized_tokens_count_as_usage_only() {
        let result = MatchScorer::default().score(&duel(
            &["Zeus", "Thor", "Zeus"],
            &["Ares", "Ares", "zeus"],
        ));
        assert_eq!(result.total_rounds, 3);
        assert_eq!(result.player_one_wins, 1);
        assert_eq!(result.player_two_wins, 0);
        assert_eq!(result.draws, 0);
        assert_eq!(result.unscored_rounds, 2);
        assert_eq!(result.player_one_usage.get("Thor"), Some(1));
        assert_eq!(result.player_two_usage.get("zeus"), Some(1));
        // rates are over all rounds, scored or not
        assert!((result.player_one_win_rate - 100.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn player_named_draw_is_not_a_tie() {
        let m = Match::new(
            Player::new(DRAW_LABEL, ["Zeus", "Zeus"]),
            Player::new("Hector", ["Ares", "Zeus"]),
        );
        let result = MatchScorer::default().score(&m);
        assert_eq!(result.winner, DRAW_LABEL);
        assert_eq!(result.verdict, Verdict::PlayerOne);
        assert!(!result.is_draw());
        assert!(result.to_string().starts_with("winner: Draw,"));

        let tie = MatchScorer::default().score(&duel(&["Zeus"], &["Zeus"]));
        assert!(tie.is_draw());
        assert!(tie.to_string().starts_with("tie,"));
    }

    #[test]
    fn undecided_pairing_is_a_draw() {
        let result = MatchScorer::default().score(&duel(&["Zeus"], &["Artemis"]));
        assert_eq!(result.draws, 1);
        assert_eq!(result.unscored_rounds, 0);
    }

    #[test]
    fn top_used_factions_orders_by_count() {
        let usage: FrequencyTable = vec![
            ("Zeus".to_owned(), 100),
            ("Athena".to_owned(), 200),
            ("Ares".to_owned(), 50),
            ("Poseidon".to_owned(), 150),
        ]
        .into_iter()
        .collect();
        let top = MatchScorer::top_used_factions(&usage, 2);
        assert_eq!(
            top,
            vec![("Athena".to_owned(), 200), ("Poseidon".to_owned(), 150)]
        );
    }

    #[test]
    fn top_used_factions_keeps_first_played_on_ties() {
        let result = MatchScorer::default().score(&duel(
            &["Hades", "Zeus", "Zeus", "Hades", "Ares"],
            &["Ares"; 5],
        ));
        let top = MatchScorer::top_used_factions(&result.player_one_usage, 3);
        assert_eq!(
            top,
            vec![
                ("Hades".to_owned(), 2),
                ("Zeus".to_owned(), 2),
                ("Ares".to_owned(), 1)
            ]
        );
    }

    #[test]
    fn classify_round_flags_unscored() {
        let scorer = MatchScorer::default();
        assert_eq!(scorer.classify_round("Zeus", "Ares"), RoundWinner::PlayerOne);
        assert_eq!(scorer.classify_round("Ares", "Zeus"), RoundWinner::PlayerTwo);
        assert_eq!(scorer.classify_round("Ares", "Ares"), RoundWinner::Draw);
        assert_eq!(scorer.classify_round("Ares", ""), RoundWinner::Unscored);
        assert!(!RoundWinner::Unscored.is_scored());
    }
}

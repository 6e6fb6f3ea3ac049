//! Derived views of a scored match.
//!
//! [`StatisticsEngine`] takes a [`Match`] together with the [`TournamentResult`] produced for it
//! and computes:
//! - per-faction performance for each player ([`GodStatistic`])
//! - the full round-by-round history ([`RoundDetail`])
//! - the longest win streak of each player ([`WinStreak`])
//! - how often each pair of moves met (head-to-head matchups)
//!
//! Unrecognized move tokens are tolerated everywhere: they appear in usage counts, history and
//! matchups, but never in win/loss/draw counts.

use anyhow::bail;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, instrument};

use crate::{
    dominance::{DominanceRelation, Outcome},
    faction::ParsedMove,
    match_scorer::{MatchScorer, RoundWinner, TournamentResult, DRAW_LABEL},
    player::Match,
    streak::{longest_win_streaks, WinStreak},
    tally::{percentage, FirstSeenMap, FrequencyTable},
};

/// How one player fared with one token.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GodStatistic {
    /// The token as played.
    pub god_name: String,
    /// Rounds in which the player used this token.
    pub times_used: u32,
    /// Scored rounds won with this token.
    pub wins: u32,
    /// Scored rounds lost with this token.
    pub losses: u32,
    /// Scored rounds drawn with this token.
    pub draws: u32,
    /// `wins` as a percentage of `times_used`.
    pub win_rate: f64,
    /// `times_used` as a percentage of the rounds played.
    pub usage_rate: f64,
}

impl GodStatistic {
    fn new(god_name: &str) -> Self {
        Self {
            god_name: god_name.to_owned(),
            ..Default::default()
        }
    }
}

/// One round, as played.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundDetail {
    /// 1-based round number.
    pub round_number: usize,
    /// Player one's raw token.
    pub player_one_move: String,
    /// Player two's raw token.
    pub player_two_move: String,
    /// Who won the round, keeping unscored rounds apart from real draws.
    pub outcome: RoundWinner,
    /// Winner's name, or [`DRAW_LABEL`] for drawn and unscored rounds.
    pub winner: String,
}

/// Everything [`StatisticsEngine`] derives from a match.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AdvancedStatistics {
    /// Player one's tokens by descending usage. Ties keep first-played order.
    pub player_one_god_stats: Vec<GodStatistic>,
    /// Player two's tokens by descending usage. Ties keep first-played order.
    pub player_two_god_stats: Vec<GodStatistic>,
    /// Every playable round, in order.
    pub round_history: Vec<RoundDetail>,
    /// Player one's longest run of consecutive wins.
    pub longest_player_one_streak: WinStreak,
    /// Player two's longest run of consecutive wins.
    pub longest_player_two_streak: WinStreak,
    /// `"<player one move> vs <player two move>"` keys by descending count. Ties keep
    /// first-seen order.
    pub head_to_head_matchups: Vec<(String, u32)>,
}

/// Computes [`AdvancedStatistics`].
#[derive(Debug, Clone, Default)]
pub struct StatisticsEngine {
    scorer: MatchScorer,
}

impl StatisticsEngine {
    /// Create an engine using the given rules. Use the same rules the match was scored with.
    pub fn new(relation: DominanceRelation) -> Self {
        Self {
            scorer: MatchScorer::new(relation),
        }
    }

    /// Derive statistics for `m`, given the `result` it was scored to.
    ///
    /// # Errors
    /// Returned if `result` was not produced for `m`: its round count, usage counts or number of
    /// unscored rounds disagree with the rounds of `m`.
    #[instrument(skip_all, fields(player_one = %m.player_one.name, player_two = %m.player_two.name))]
    pub fn compute_advanced_statistics(
        &self,
        m: &Match,
        result: &TournamentResult,
    ) -> anyhow::Result<AdvancedStatistics> {
        let total_rounds = m.round_count();
        if total_rounds != result.total_rounds as usize {
            error!(
                expected = total_rounds,
                got = result.total_rounds,
                "result does not belong to this match"
            );
            bail!(
                "result covers {} rounds but the match has {total_rounds} playable rounds",
                result.total_rounds
            );
        }

        for (side, usage) in [
            ("player one", &result.player_one_usage),
            ("player two", &result.player_two_usage),
        ] {
            if usage.total() != u64::from(result.total_rounds) {
                error!(side, used = usage.total(), "usage does not add up to the round count");
                bail!(
                    "{side} usage adds up to {} moves but the result covers {} rounds",
                    usage.total(),
                    result.total_rounds
                );
            }
        }

        let round_history = self.round_history(m);
        let unscored = round_history
            .iter()
            .filter(|round| !round.outcome.is_scored())
            .count();
        if unscored != result.unscored_rounds as usize {
            error!(
                expected = unscored,
                got = result.unscored_rounds,
                "result does not belong to this match"
            );
            bail!(
                "result has {} unscored rounds but the match has {unscored}",
                result.unscored_rounds
            );
        }
        let (longest_player_one_streak, longest_player_two_streak) = longest_win_streaks(
            round_history
                .iter()
                .map(|round| (round.round_number, round.outcome)),
        );
        debug!(%longest_player_one_streak, %longest_player_two_streak);

        Ok(AdvancedStatistics {
            player_one_god_stats: self.god_statistics(
                &m.player_one.moves,
                &m.player_two.moves,
                result.total_rounds,
            ),
            player_two_god_stats: self.god_statistics(
                &m.player_two.moves,
                &m.player_one.moves,
                result.total_rounds,
            ),
            round_history,
            longest_player_one_streak,
            longest_player_two_streak,
            head_to_head_matchups: head_to_head_matchups(m),
        })
    }

    /// Per-token statistics for one player, against the opponent's move of the same round.
    fn god_statistics(
        &self,
        moves: &[String],
        opponent_moves: &[String],
        total_rounds: u32,
    ) -> Vec<GodStatistic> {
        let relation = self.scorer.relation();
        let mut by_token: FirstSeenMap<GodStatistic> = FirstSeenMap::new();

        for (played, opposed) in moves.iter().zip(opponent_moves) {
            let stat = by_token.get_or_insert_with(played, GodStatistic::new);
            stat.times_used += 1;

            if let Some((mine, theirs)) = ParsedMove::parse_pair(played, opposed) {
                match relation.determine_winner(mine, theirs) {
                    Outcome::FirstWins => stat.wins += 1,
                    Outcome::SecondWins => stat.losses += 1,
                    Outcome::Draw => stat.draws += 1,
                }
            }
        }

        for stat in by_token.values_mut() {
            stat.win_rate = percentage(stat.wins, stat.times_used);
            stat.usage_rate = percentage(stat.times_used, total_rounds);
        }

        let mut stats = by_token.into_values();
        // stable: equal usage keeps first-played order
        stats.sort_by(|a, b| b.times_used.cmp(&a.times_used));
        stats
    }

    fn round_history(&self, m: &Match) -> Vec<RoundDetail> {
        m.rounds()
            .map(|(round_number, first, second)| {
                let outcome = self.scorer.classify_round(first, second);
                let winner = match outcome {
                    RoundWinner::PlayerOne => m.player_one.name.clone(),
                    RoundWinner::PlayerTwo => m.player_two.name.clone(),
                    RoundWinner::Draw | RoundWinner::Unscored => DRAW_LABEL.to_owned(),
                };
                RoundDetail {
                    round_number,
                    player_one_move: first.to_owned(),
                    player_two_move: second.to_owned(),
                    outcome,
                    winner,
                }
            })
            .collect()
    }
}

/// Count each `"<player one move> vs <player two move>"` pairing, most frequent first.
pub fn head_to_head_matchups(m: &Match) -> Vec<(String, u32)> {
    let mut matchups = FrequencyTable::new();
    for (_, first, second) in m.rounds() {
        matchups.increment(&format!("{first} vs {second}"));
    }
    matchups.ranked()
}

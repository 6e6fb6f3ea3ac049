//! Longest runs of consecutive round wins.
//!
//! Each player has a [`StreakAccumulator`] that is advanced one round at a time. A win extends
//! the winner's run and ends the opponent's. A draw, scored or not, ends both runs.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::match_scorer::RoundWinner;

/// A run of consecutive rounds won by one player.
///
/// The default value (all zeros) means the player never won a round.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinStreak {
    /// Number of consecutive wins.
    pub length: usize,
    /// First round of the run, 1-based.
    pub start_round: usize,
    /// Last round of the run, 1-based.
    pub end_round: usize,
}

impl fmt::Display for WinStreak {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} wins (rounds {}-{})",
            self.length, self.start_round, self.end_round
        )
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
enum StreakState {
    #[default]
    Idle,
    Running { length: usize, start: usize },
}

/// Tracks one player's running streak and the best one seen so far.
#[derive(Debug, Clone, Default)]
pub struct StreakAccumulator {
    state: StreakState,
    best: WinStreak,
}

impl StreakAccumulator {
    /// A player with no wins yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// The player won `round`. Rounds must be fed in order, without gaps inside a run.
    pub fn record_win(&mut self, round: usize) {
        let (length, start) = match self.state {
            StreakState::Idle => (1, round),
            StreakState::Running { length, start } => (length + 1, start),
        };
        self.state = StreakState::Running { length, start };

        // strictly greater: the first of equally long runs is kept
        let current = self.current();
        if current.length > self.best.length {
            self.best = current;
        }
    }

    /// The player did not win this round.
    pub fn break_streak(&mut self) {
        self.state = StreakState::Idle;
    }

    /// The run in progress, or the zero streak when idle.
    pub fn current(&self) -> WinStreak {
        match self.state {
            StreakState::Idle => WinStreak::default(),
            StreakState::Running { length, start } => WinStreak {
                length,
                start_round: start,
                end_round: start + length - 1,
            },
        }
    }

    /// Longest run recorded so far.
    pub fn best(&self) -> WinStreak {
        self.best
    }
}

/// Longest streaks of player one and player two over `rounds`, given as
/// `(round_number, winner)` in round order.
pub fn longest_win_streaks(
    rounds: impl IntoIterator<Item = (usize, RoundWinner)>,
) -> (WinStreak, WinStreak) {
    let mut player_one = StreakAccumulator::new();
    let mut player_two = StreakAccumulator::new();

    for (round, winner) in rounds {
        match winner {
            RoundWinner::PlayerOne => {
                player_one.record_win(round);
                player_two.break_streak();
            }
            RoundWinner::PlayerTwo => {
                player_two.record_win(round);
                player_one.break_streak();
            }
            RoundWinner::Draw | RoundWinner::Unscored => {
                player_one.break_streak();
                player_two.break_streak();
            }
        }
    }

    (player_one.best(), player_two.best())
}

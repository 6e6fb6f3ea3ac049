//! Players and matches, the input of the scoring engine.

use serde::{Deserialize, Serialize};

/// A named player and the moves they played, in order.
///
/// Moves are raw tokens. They usually name a [`Faction`](crate::faction::Faction), but any
/// text is accepted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Display name, also used as the winner label.
    pub name: String,
    /// Move tokens, one per round.
    #[serde(default)]
    pub moves: Vec<String>,
}

impl Player {
    /// Create a player from a name and its move tokens.
    pub fn new<S: Into<String>>(
        name: impl Into<String>,
        moves: impl IntoIterator<Item = S>,
    ) -> Self {
        Player {
            name: name.into(),
            moves: moves.into_iter().map(Into::into).collect(),
        }
    }
}

/// Two players facing each other, round after round.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    /// First player. Matchup keys list this player's move first.
    pub player_one: Player,
    /// Second player.
    pub player_two: Player,
}

impl Match {
    /// Pair two players.
    pub fn new(player_one: Player, player_two: Player) -> Self {
        Match {
            player_one,
            player_two,
        }
    }

    /// Number of playable rounds: trailing moves of the longer sequence are ignored.
    pub fn round_count(&self) -> usize {
        self.player_one.moves.len().min(self.player_two.moves.len())
    }

    /// `(round_number, player_one_move, player_two_move)` for every playable round.
    ///
    /// Round numbers start at 1.
    pub fn rounds(&self) -> impl Iterator<Item = (usize, &str, &str)> + '_ {
        self.player_one
            .moves
            .iter()
            .zip(&self.player_two.moves)
            .enumerate()
            .map(|(i, (first, second))| (i + 1, first.as_str(), second.as_str()))
    }
}

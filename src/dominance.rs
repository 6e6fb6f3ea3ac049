//! The fixed beats-graph over the six factions.
//!
//! Each faction beats exactly two others and loses to exactly two others. The relation is
//! stored as a precomputed outcome matrix, built once when a [`DominanceRelation`] is created
//! and never mutated afterwards.
//!
//! Six factions with two targets each give twelve decided pairings out of fifteen. The three
//! remaining pairs (Zeus/Artemis, Athena/Hades, Ares/Poseidon) have no winner and resolve to
//! [`Outcome::Draw`], exactly like a mirror match.

use anyhow::bail;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::faction::Faction;

/// Outcome of one pairing, from the first faction's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// The first faction beats the second.
    FirstWins,
    /// The second faction beats the first.
    SecondWins,
    /// Same faction, or a pairing the graph leaves undecided.
    Draw,
}

impl Outcome {
    /// Same outcome, seen from the other side.
    pub fn flip(self) -> Self {
        match self {
            Outcome::FirstWins => Outcome::SecondWins,
            Outcome::SecondWins => Outcome::FirstWins,
            Outcome::Draw => Outcome::Draw,
        }
    }
}

/// A row of a dominance table: a faction and the two factions it beats.
pub type DominanceEntry = (Faction, [Faction; 2]);

/// The rules of the game.
pub const STANDARD_TABLE: [DominanceEntry; Faction::COUNT] = [
    (Faction::Zeus, [Faction::Ares, Faction::Poseidon]),
    (Faction::Athena, [Faction::Zeus, Faction::Ares]),
    (Faction::Hades, [Faction::Zeus, Faction::Artemis]),
    (Faction::Ares, [Faction::Hades, Faction::Artemis]),
    (Faction::Poseidon, [Faction::Athena, Faction::Hades]),
    (Faction::Artemis, [Faction::Poseidon, Faction::Athena]),
];

/// Answers pairwise outcome queries over the beats-graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DominanceRelation {
    outcomes: [[Outcome; Faction::COUNT]; Faction::COUNT],
    targets: [[Faction; 2]; Faction::COUNT],
}

impl DominanceRelation {
    /// The relation defined by [`STANDARD_TABLE`].
    pub fn standard() -> Self {
        Self::build(&STANDARD_TABLE)
    }

    /// Build a relation from a custom table.
    ///
    /// # Errors
    /// Returned when the table does not describe a valid dominance graph:
    /// - a faction is missing or listed more than once
    /// - a faction beats itself, or lists the same target twice
    /// - two factions beat each other
    /// - a faction is not beaten by exactly two others
    pub fn from_table(table: &[DominanceEntry]) -> anyhow::Result<Self> {
        let mut listed = [false; Faction::COUNT];
        let mut beats = [[false; Faction::COUNT]; Faction::COUNT];

        for &(faction, [first, second]) in table {
            if listed[faction.index()] {
                bail!("{faction} is listed more than once");
            }
            listed[faction.index()] = true;

            if first == faction || second == faction {
                bail!("{faction} cannot beat itself");
            }
            if first == second {
                bail!("{faction} lists {first} twice, it must beat two distinct factions");
            }
            beats[faction.index()][first.index()] = true;
            beats[faction.index()][second.index()] = true;
        }

        if let Some(missing) = Faction::ALL.into_iter().find(|f| !listed[f.index()]) {
            bail!("{missing} is missing from the dominance table");
        }

        for a in Faction::ALL {
            for b in Faction::ALL {
                if a < b && beats[a.index()][b.index()] && beats[b.index()][a.index()] {
                    bail!("{a} and {b} cannot beat each other");
                }
            }
            let beaten_by = Faction::ALL
                .into_iter()
                .filter(|other| beats[other.index()][a.index()])
                .count();
            if beaten_by != 2 {
                bail!("{a} is beaten by {beaten_by} factions, expected 2");
            }
        }

        debug!("custom dominance table accepted");
        Ok(Self::build(table))
    }

    /// Assumes `table` lists every faction once.
    fn build(table: &[DominanceEntry]) -> Self {
        let mut outcomes = [[Outcome::Draw; Faction::COUNT]; Faction::COUNT];
        let mut targets = [[Faction::Zeus; 2]; Faction::COUNT];

        for &(faction, beaten) in table {
            targets[faction.index()] = beaten;
            for target in beaten {
                outcomes[faction.index()][target.index()] = Outcome::FirstWins;
                outcomes[target.index()][faction.index()] = Outcome::SecondWins;
            }
        }

        Self { outcomes, targets }
    }

    /// Who wins when `first` meets `second`.
    pub fn determine_winner(&self, first: Faction, second: Faction) -> Outcome {
        self.outcomes[first.index()][second.index()]
    }

    /// True iff `first` directly beats `second`. Always false for a mirror match.
    pub fn beats(&self, first: Faction, second: Faction) -> bool {
        self.determine_winner(first, second) == Outcome::FirstWins
    }

    /// The two factions `faction` beats.
    pub fn targets(&self, faction: Faction) -> [Faction; 2] {
        self.targets[faction.index()]
    }
}

impl Default for DominanceRelation {
    fn default() -> Self {
        Self::standard()
    }
}

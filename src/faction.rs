//! The six factions of the dominance game and move-token parsing.
//!
//! Players submit moves as plain text. A token either names a [`Faction`] exactly
//! (case-sensitive, as written in [`Faction::name`]) or it is unrecognized. Unrecognized
//! tokens are not errors for the scoring engine: they still count as played, but the round
//! they appear in cannot be scored. See [`ParsedMove`].

use std::{fmt, str::FromStr};

use anyhow::bail;
use serde::{Deserialize, Serialize};

/// One of the six gods a player can field in a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Faction {
    /// Beats Ares and Poseidon.
    Zeus,
    /// Beats Zeus and Ares.
    Athena,
    /// Beats Zeus and Artemis.
    Hades,
    /// Beats Hades and Artemis.
    Ares,
    /// Beats Athena and Hades.
    Poseidon,
    /// Beats Poseidon and Athena.
    Artemis,
}

impl Faction {
    /// Number of factions in the game.
    pub const COUNT: usize = 6;

    /// Every faction, in declaration order.
    pub const ALL: [Faction; Faction::COUNT] = [
        Faction::Zeus,
        Faction::Athena,
        Faction::Hades,
        Faction::Ares,
        Faction::Poseidon,
        Faction::Artemis,
    ];

    /// Canonical token for this faction.
    pub const fn name(self) -> &'static str {
        match self {
            Faction::Zeus => "Zeus",
            Faction::Athena => "Athena",
            Faction::Hades => "Hades",
            Faction::Ares => "Ares",
            Faction::Poseidon => "Poseidon",
            Faction::Artemis => "Artemis",
        }
    }

    /// The faction named exactly `name`, if any.
    pub fn from_name(name: &str) -> Option<Faction> {
        Faction::ALL.into_iter().find(|faction| faction.name() == name)
    }

    /// Dense index in `0..Faction::COUNT`, used to address outcome matrices.
    pub(crate) const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Faction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Faction {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match Faction::from_name(s) {
            Some(faction) => Ok(faction),
            None => bail!("'{s}' is not a known faction"),
        }
    }
}

/// Result of interpreting a raw move token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParsedMove {
    /// The token names a faction.
    Known(Faction),
    /// The token does not name any faction. The round it is played in cannot be scored.
    Unrecognized,
}

impl ParsedMove {
    /// Interpret `token` as a faction. Never fails: unknown tokens become [`ParsedMove::Unrecognized`].
    pub fn parse(token: &str) -> Self {
        Faction::from_name(token).map_or(ParsedMove::Unrecognized, ParsedMove::Known)
    }

    /// The faction, if the token was recognized.
    pub fn faction(self) -> Option<Faction> {
        match self {
            ParsedMove::Known(faction) => Some(faction),
            ParsedMove::Unrecognized => None,
        }
    }

    /// Parse both tokens of a round. `None` if either side is unrecognized.
    pub fn parse_pair(first: &str, second: &str) -> Option<(Faction, Faction)> {
        Some((Self::parse(first).faction()?, Self::parse(second).faction()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_canonical_name() {
        for faction in Faction::ALL {
            assert_eq!(faction.name().parse::<Faction>().unwrap(), faction);
            assert_eq!(faction.to_string(), faction.name());
        }
    }

    #[test]
    fn parsing_is_case_sensitive() {
        assert!("zeus".parse::<Faction>().is_err());
        assert!(" Zeus".parse::<Faction>().is_err());
        assert_eq!(ParsedMove::parse("ZEUS"), ParsedMove::Unrecognized);
    }

    #[test]
    fn from_name_agrees_with_from_str() {
        for token in ["Zeus", "Artemis", "artemis", "Hermes", ""] {
            assert_eq!(Faction::from_name(token), token.parse::<Faction>().ok(), "{token}");
            assert_eq!(ParsedMove::parse(token).faction(), Faction::from_name(token));
        }
        assert_eq!(Faction::from_name("Poseidon"), Some(Faction::Poseidon));
        assert_eq!(Faction::from_name("Thor"), None);
    }

    #[test]
    fn unknown_token_error_names_the_token() {
        let err = "Hermes".parse::<Faction>().unwrap_err();
        assert!(err.to_string().contains("Hermes"));
    }

    #[test]
    fn parse_pair_requires_both_sides() {
        assert_eq!(
            ParsedMove::parse_pair("Zeus", "Ares"),
            Some((Faction::Zeus, Faction::Ares))
        );
        assert_eq!(ParsedMove::parse_pair("Zeus", "Thor"), None);
        assert_eq!(ParsedMove::parse_pair("", "Ares"), None);
    }

    #[test]
    fn indexes_are_dense() {
        for (i, faction) in Faction::ALL.into_iter().enumerate() {
            assert_eq!(faction.index(), i);
        }
    }
}

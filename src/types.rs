/// Shared types used across the application
///
/// This module contains type definitions that are shared between
/// the library (settings, stats) and the binary (main.rs).
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the three competitive divisions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub enum League {
    #[default]
    XBL,
    AAA,
    AA,
}

impl League {
    pub fn all() -> [Self; 3] {
        [Self::XBL, Self::AAA, Self::AA]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::XBL => "XBL",
            Self::AAA => "AAA",
            Self::AA => "AA",
        }
    }
}

impl fmt::Display for League {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for League {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "XBL" => Ok(Self::XBL),
            "AAA" => Ok(Self::AAA),
            "AA" => Ok(Self::AA),
            other => Err(format!("Unknown league '{}'. Use XBL, AAA or AA", other)),
        }
    }
}

/// Which half of the matchup a setting or stat belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Away,
    Home,
}

impl Side {
    pub fn other(&self) -> Self {
        match self {
            Self::Away => Self::Home,
            Self::Home => Self::Away,
        }
    }

    /// Key prefix used by the settings blob ("away" / "home")
    pub fn prefix(&self) -> &'static str {
        match self {
            Self::Away => "away",
            Self::Home => "home",
        }
    }
}

impl FromStr for Side {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "away" => Ok(Self::Away),
            "home" => Ok(Self::Home),
            other => Err(format!("Unknown side '{}'. Use away or home", other)),
        }
    }
}

/// The six labeled stat slots shown in a sidebar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Slot {
    First,
    Second,
    Third,
    Fourth,
    Fifth,
    Sixth,
}

impl Slot {
    pub fn all() -> [Self; 6] {
        [
            Self::First,
            Self::Second,
            Self::Third,
            Self::Fourth,
            Self::Fifth,
            Self::Sixth,
        ]
    }

    pub fn key(&self) -> &'static str {
        match self {
            Self::First => "first",
            Self::Second => "second",
            Self::Third => "third",
            Self::Fourth => "fourth",
            Self::Fifth => "fifth",
            Self::Sixth => "sixth",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::all().into_iter().find(|slot| slot.key() == key)
    }
}

/// Regular season or playoff games
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameKind {
    RegularSeason,
    Playoffs,
}

impl GameKind {
    /// Key of the careers sub-tree for this kind of game
    pub fn careers_key(&self) -> &'static str {
        match self {
            Self::RegularSeason => "regular_season",
            Self::Playoffs => "playoffs",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_league_from_str_is_case_insensitive() {
        assert_eq!("xbl".parse::<League>(), Ok(League::XBL));
        assert_eq!(" AAA ".parse::<League>(), Ok(League::AAA));
        assert_eq!("aa".parse::<League>(), Ok(League::AA));
        assert!("A".parse::<League>().is_err());
    }

    #[test]
    fn test_league_serializes_as_upper_case_name() {
        assert_eq!(serde_json::to_string(&League::AAA).unwrap(), "\"AAA\"");
    }

    #[test]
    fn test_slot_key_round_trip() {
        for slot in Slot::all() {
            assert_eq!(Slot::from_key(slot.key()), Some(slot));
        }
        assert_eq!(Slot::from_key("seventh"), None);
    }

    #[test]
    fn test_side_other() {
        assert_eq!(Side::Away.other(), Side::Home);
        assert_eq!(Side::Home.other(), Side::Away);
    }
}

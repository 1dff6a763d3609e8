//! Game category
//!
//! Sent over the wire as its integer code.

use apicalypse_core::QueryValue;

/// Kind of game entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Category {
    #[default]
    MainGame,
    DlcAddon,
    Expansion,
    Bundle,
    StandaloneExpansion,
    Mod,
    Episode,
    Season,
    Remake,
    Remaster,
    ExpandedGame,
    Port,
    Fork,
}

impl Category {
    /// Wire code
    pub fn code(&self) -> u8 {
        match self {
            Self::MainGame => 0,
            Self::DlcAddon => 1,
            Self::Expansion => 2,
            Self::Bundle => 3,
            Self::StandaloneExpansion => 4,
            Self::Mod => 5,
            Self::Episode => 6,
            Self::Season => 7,
            Self::Remake => 8,
            Self::Remaster => 9,
            Self::ExpandedGame => 10,
            Self::Port => 11,
            Self::Fork => 12,
        }
    }

    /// Parse from wire code
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::MainGame),
            1 => Some(Self::DlcAddon),
            2 => Some(Self::Expansion),
            3 => Some(Self::Bundle),
            4 => Some(Self::StandaloneExpansion),
            5 => Some(Self::Mod),
            6 => Some(Self::Episode),
            7 => Some(Self::Season),
            8 => Some(Self::Remake),
            9 => Some(Self::Remaster),
            10 => Some(Self::ExpandedGame),
            11 => Some(Self::Port),
            12 => Some(Self::Fork),
            _ => None,
        }
    }
}

impl QueryValue for Category {
    fn to_query_value(&self) -> String {
        self.code().to_string()
    }
}

//! Release region

use apicalypse_core::QueryValue;

/// Region a release date applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    Europe,
    NorthAmerica,
    Australia,
    NewZealand,
    Japan,
    China,
    Asia,
    Worldwide,
    Korea,
    Brazil,
}

impl Region {
    /// Wire code (starts at 1)
    pub fn code(&self) -> u8 {
        match self {
            Self::Europe => 1,
            Self::NorthAmerica => 2,
            Self::Australia => 3,
            Self::NewZealand => 4,
            Self::Japan => 5,
            Self::China => 6,
            Self::Asia => 7,
            Self::Worldwide => 8,
            Self::Korea => 9,
            Self::Brazil => 10,
        }
    }
}

impl QueryValue for Region {
    fn to_query_value(&self) -> String {
        self.code().to_string()
    }
}

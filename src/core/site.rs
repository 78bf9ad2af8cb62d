use serde::{Deserialize, Serialize};

/// One of the fixed generation sites.
#[derive(
    Copy,
    Clone,
    Debug,
    Eq,
    PartialEq,
    Hash,
    Ord,
    PartialOrd,
    Deserialize,
    Serialize,
    clap::ValueEnum,
    derive_more::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum Site {
    Southbury,
    Bridgeport,
    Torrington,
}

/// Shape of a site's daily feed.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Schema {
    /// Hour-by-hour readings, split into on-peak and off-peak.
    HourlySplit,

    /// A single recorded total for the whole day, with no peak split.
    ///
    /// The hourly breakdown of such feeds does not add up to their own daily total,
    /// so only the total is trusted.
    DailyTotal,
}

impl Site {
    pub const ALL: [Self; 3] = [Self::Southbury, Self::Bridgeport, Self::Torrington];

    /// Look up a site by its interactive menu id.
    #[must_use]
    pub fn from_id(id: u8) -> Option<Self> {
        Self::ALL.get(usize::from(id)).copied()
    }

    #[must_use]
    pub const fn id(self) -> u8 {
        match self {
            Self::Southbury => 0,
            Self::Bridgeport => 1,
            Self::Torrington => 2,
        }
    }

    #[must_use]
    pub const fn schema(self) -> Schema {
        match self {
            Self::Southbury | Self::Bridgeport => Schema::HourlySplit,
            Self::Torrington => Schema::DailyTotal,
        }
    }
}

use std::fmt;
use serde::{Serialize, Deserialize};
use crate::data_loading::schema::{RADIO_COLUMN, SOCIAL_COLUMN, TV_COLUMN};

/// Reklamný kanál. Poradie `ALL` je pevné a určuje poradie váh v analýze.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    Tv,
    Radio,
    Social,
}

impl Channel {
    pub const ALL: [Channel; 3] = [Channel::Tv, Channel::Radio, Channel::Social];

    /// Názov stĺpca s výdavkami na kanál
    pub fn column(&self) -> &'static str {
        match self {
            Channel::Tv => TV_COLUMN,
            Channel::Radio => RADIO_COLUMN,
            Channel::Social => SOCIAL_COLUMN,
        }
    }

    /// Zobrazovaný názov
    pub fn label(&self) -> &'static str {
        match self {
            Channel::Tv => "TV",
            Channel::Radio => "Radio",
            Channel::Social => "Social Media",
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

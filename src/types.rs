use crate::Error;
use crate::consts::{CENTURY_CYCLE, GREGORIAN_CYCLE, LEAP_YEAR_CYCLE, WEEKDAY_NAMES};
use crate::prelude::*;
use serde::{Deserialize, Serialize};

/// Seconds elapsed since 1970-01-01T00:00:00Z, without leap seconds.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Display,
    From,
    Into,
    Deref,
    FromStr,
    Serialize,
    Deserialize,
)]
#[serde(transparent)]
pub struct EpochSeconds(u64);

impl EpochSeconds {
    /// The Unix epoch itself
    pub const UNIX_EPOCH: Self = Self(0);

    #[inline]
    pub const fn new(secs: u64) -> Self {
        Self(secs)
    }

    /// Returns the raw count of seconds
    #[inline]
    pub const fn get(self) -> u64 {
        self.0
    }
}

/// Day of the week, numbered from Monday = 1 to Sunday = 7.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
pub enum Weekday {
    #[display(fmt = "Mon")]
    Mon = 1,
    #[display(fmt = "Tue")]
    Tue = 2,
    #[display(fmt = "Wed")]
    Wed = 3,
    #[display(fmt = "Thu")]
    Thu = 4,
    #[display(fmt = "Fri")]
    Fri = 5,
    #[display(fmt = "Sat")]
    Sat = 6,
    #[display(fmt = "Sun")]
    Sun = 7,
}

impl Weekday {
    const ALL: [Self; 7] = [
        Self::Mon,
        Self::Tue,
        Self::Wed,
        Self::Thu,
        Self::Fri,
        Self::Sat,
        Self::Sun,
    ];

    /// ISO weekday number, `1..=7`
    #[inline]
    pub const fn number(self) -> u8 {
        self as u8
    }

    /// Looks up a weekday by its ISO number
    ///
    /// # Errors
    /// Returns `Error::InvalidDate` if the value is outside `1..=7`.
    pub fn from_number(value: u8) -> Result<Self, Error> {
        value
            .checked_sub(1)
            .and_then(|index| Self::from_index(usize::from(index)))
            .ok_or(Error::InvalidDate)
    }

    /// Zero-based position, Monday first, used to index the name tables
    #[inline]
    pub(crate) const fn index(self) -> usize {
        self as usize - 1
    }

    #[inline]
    pub(crate) fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Three-letter English abbreviation as ASCII bytes
    #[inline]
    pub const fn abbreviation(self) -> &'static [u8; 3] {
        WEEKDAY_NAMES[self.index()]
    }
}

impl TryFrom<u8> for Weekday {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_number(value)
    }
}

impl From<Weekday> for u8 {
    fn from(weekday: Weekday) -> Self {
        weekday.number()
    }
}

// Helper functions

pub const fn is_leap_year(year: u16) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

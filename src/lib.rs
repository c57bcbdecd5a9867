//! Parsing and formatting of the date format used in HTTP headers.
//!
//! Three grammars are accepted on input: the preferred IMF-fixdate, the
//! obsolete RFC 850 form with a two-digit year, and C's asctime layout.
//! Output is always IMF-fixdate. All dates are GMT with one second
//! resolution, between 1970 and 9999.
//!
//! ```
//! use http_date::{fmt_http_date, parse_http_date, EpochSeconds};
//!
//! let secs = parse_http_date("Sunday, 06-Nov-94 08:49:37 GMT").unwrap();
//! assert_eq!(secs, EpochSeconds::new(784111777));
//! assert_eq!(fmt_http_date(secs).unwrap(), "Sun, 06 Nov 1994 08:49:37 GMT");
//! ```

mod calendar;
mod clock;
mod consts;
mod digits;
mod grammar;
mod prelude;
mod types;

pub use clock::{Clock, FixedClock, SystemClock, current_time};
pub use consts::*;
pub use types::{EpochSeconds, Weekday, is_leap_year};

use crate::consts::IMF_FIXDATE_TEMPLATE;
use crate::grammar::{GRAMMARS, RawDate};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Errors produced by this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum Error {
    /// The input matched none of the accepted grammars, or matched one with a
    /// field out of range.
    #[error("Invalid HTTP date")]
    InvalidDate,

    /// The current time cannot be read on this platform.
    #[error("Current time is not available on this platform")]
    Unsupported,
}

/// A GMT date and time of day, as carried in HTTP headers.
///
/// Every field is within range: year `1970..=9999`, month `1..=12`,
/// day `1..=31`, hour `0..=23`, minute and second `0..=59`. The day is not
/// checked against the length of its month, and a parsed weekday is kept as
/// written rather than recomputed from the date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HttpDate {
    year: u16,
    month: u8,
    day: u8,
    hour: u8,
    min: u8,
    sec: u8,
    weekday: Weekday,
}

impl HttpDate {
    /// Creates a date from its fields, checking each against its range.
    ///
    /// # Errors
    /// Returns `Error::InvalidDate` if any field is out of range.
    pub fn new(
        year: u16,
        month: u8,
        day: u8,
        hour: u8,
        min: u8,
        sec: u8,
        weekday: Weekday,
    ) -> Result<Self, Error> {
        Self::from_raw(RawDate {
            year,
            month,
            day,
            hour,
            min,
            sec,
            weekday,
        })
    }

    fn from_raw(raw: RawDate) -> Result<Self, Error> {
        let valid = (MIN_YEAR..=MAX_YEAR).contains(&raw.year)
            && (1..=MAX_MONTH).contains(&raw.month)
            && (MIN_DAY..=MAX_DAY).contains(&raw.day)
            && raw.hour <= MAX_HOUR
            && raw.min <= MAX_MINUTE
            && raw.sec <= MAX_SECOND;
        if !valid {
            return Err(Error::InvalidDate);
        }
        Ok(Self {
            year: raw.year,
            month: raw.month,
            day: raw.day,
            hour: raw.hour,
            min: raw.min,
            sec: raw.sec,
            weekday: raw.weekday,
        })
    }

    /// Parses any of the three accepted grammars.
    ///
    /// Grammars are tried in the order IMF-fixdate, RFC 850, asctime. The
    /// first one whose layout matches decides the outcome: if its fields are
    /// out of range the input is rejected without trying the others.
    ///
    /// # Errors
    /// Returns `Error::InvalidDate` for anything else.
    pub fn parse_bytes(s: &[u8]) -> Result<Self, Error> {
        let Some(raw) = GRAMMARS.iter().find_map(|grammar| grammar(s)) else {
            log::trace!("no HTTP date grammar matches \"{}\"", s.escape_ascii());
            return Err(Error::InvalidDate);
        };
        Self::from_raw(raw).inspect_err(|_| {
            log::trace!("HTTP date \"{}\" has a field out of range", s.escape_ascii());
        })
    }

    /// Renders the date as a 29 byte IMF-fixdate, e.g.
    /// `Sun, 06 Nov 1994 08:49:37 GMT`.
    #[allow(clippy::cast_possible_truncation)]
    pub fn to_bytes(&self) -> [u8; IMF_FIXDATE_LEN] {
        let mut buf = IMF_FIXDATE_TEMPLATE;
        let weekday = self.weekday.abbreviation();
        let month = consts::MONTH_NAMES[usize::from(self.month) - 1];

        buf[..3].copy_from_slice(weekday);
        buf[5] = b'0' + self.day / 10;
        buf[6] = b'0' + self.day % 10;
        buf[8..11].copy_from_slice(month);
        buf[12] = b'0' + (self.year / 1000) as u8;
        buf[13] = b'0' + (self.year / 100 % 10) as u8;
        buf[14] = b'0' + (self.year / 10 % 10) as u8;
        buf[15] = b'0' + (self.year % 10) as u8;
        buf[17] = b'0' + self.hour / 10;
        buf[18] = b'0' + self.hour % 10;
        buf[20] = b'0' + self.min / 10;
        buf[21] = b'0' + self.min % 10;
        buf[23] = b'0' + self.sec / 10;
        buf[24] = b'0' + self.sec % 10;
        buf
    }

    /// The current time, read from the system clock.
    ///
    /// # Errors
    /// Returns `Error::Unsupported` if the platform has no clock.
    pub fn now() -> Result<Self, Error> {
        Self::now_from(&SystemClock)
    }

    /// The current time according to `clock`.
    ///
    /// # Errors
    /// Propagates the clock's error, or `Error::InvalidDate` past year 9999.
    pub fn now_from<C: Clock + ?Sized>(clock: &C) -> Result<Self, Error> {
        Self::from_epoch(clock.now()?)
    }

    #[inline]
    pub const fn year(&self) -> u16 {
        self.year
    }

    /// Month of the year, `1..=12`
    #[inline]
    pub const fn month(&self) -> u8 {
        self.month
    }

    /// Day of the month, `1..=31`
    #[inline]
    pub const fn day(&self) -> u8 {
        self.day
    }

    #[inline]
    pub const fn hour(&self) -> u8 {
        self.hour
    }

    #[inline]
    pub const fn minute(&self) -> u8 {
        self.min
    }

    #[inline]
    pub const fn second(&self) -> u8 {
        self.sec
    }

    #[inline]
    pub const fn weekday(&self) -> Weekday {
        self.weekday
    }
}

impl FromStr for HttpDate {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_bytes(s.as_bytes())
    }
}

impl fmt::Display for HttpDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let buf = self.to_bytes();
        f.write_str(std::str::from_utf8(&buf).map_err(|_| fmt::Error)?)
    }
}

impl PartialOrd for HttpDate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HttpDate {
    fn cmp(&self, other: &Self) -> Ordering {
        // Chronological first; the weekday only breaks ties between
        // parsed values that disagree on it.
        let key = |d: &Self| (d.year, d.month, d.day, d.hour, d.min, d.sec, d.weekday);
        key(self).cmp(&key(other))
    }
}

impl TryFrom<SystemTime> for HttpDate {
    type Error = Error;

    /// Truncates to whole seconds. Fails for times before the epoch or in
    /// the year 10000 and later.
    fn try_from(time: SystemTime) -> Result<Self, Self::Error> {
        let elapsed = time
            .duration_since(UNIX_EPOCH)
            .map_err(|_| Error::InvalidDate)?;
        Self::from_epoch(EpochSeconds::new(elapsed.as_secs()))
    }
}

impl From<HttpDate> for SystemTime {
    fn from(date: HttpDate) -> Self {
        UNIX_EPOCH + Duration::from_secs(date.to_epoch().get())
    }
}

impl serde::Serialize for HttpDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> serde::Deserialize<'de> for HttpDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = <String as serde::Deserialize>::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Parses an HTTP date header value into seconds since the epoch.
///
/// # Errors
/// Returns `Error::InvalidDate` unless `s` is a well-formed date in one of
/// the accepted grammars.
pub fn parse_http_date(s: &str) -> Result<EpochSeconds, Error> {
    parse_http_date_bytes(s.as_bytes())
}

/// Like [`parse_http_date`], for header values that are not known to be UTF-8.
///
/// # Errors
/// Returns `Error::InvalidDate` on any malformed or out of range input.
pub fn parse_http_date_bytes(s: &[u8]) -> Result<EpochSeconds, Error> {
    HttpDate::parse_bytes(s).map(|date| date.to_epoch())
}

/// Formats seconds since the epoch as an IMF-fixdate.
///
/// # Errors
/// Returns `Error::InvalidDate` for instants in the year 10000 or later.
pub fn fmt_http_date(secs: EpochSeconds) -> Result<String, Error> {
    HttpDate::from_epoch(secs).map(|date| date.to_string())
}

//! Conversion between epoch seconds and broken-down calendar dates.
//!
//! The forward direction re-anchors the day count on 2000-03-01 so that the
//! leap day is always the last day of a cycle, then peels off 400, 100, 4 and
//! 1 year cycles. The reverse direction counts leap years by inclusion and
//! exclusion.

use crate::consts::{
    CUMULATIVE_DAYS, DAYS_PER_4Y, DAYS_PER_100Y, DAYS_PER_400Y, DAYS_PER_YEAR, FEBRUARY, LEAPOCH,
    MIN_YEAR, MONTH_DAYS_FROM_MARCH, SECS_PER_DAY, SECS_PER_HOUR, SECS_PER_MINUTE, YEAR_10000_SECS,
};
use crate::types::{EpochSeconds, Weekday, is_leap_year};
use crate::{Error, HttpDate};

impl HttpDate {
    /// Breaks an epoch timestamp down into its calendar fields.
    ///
    /// # Errors
    /// Returns `Error::InvalidDate` for instants in the year 10000 or later.
    #[allow(
        clippy::cast_possible_wrap,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss
    )]
    pub fn from_epoch(secs: EpochSeconds) -> Result<Self, Error> {
        let v = secs.get();
        if v >= YEAR_10000_SECS {
            return Err(Error::InvalidDate);
        }

        let days = (v / SECS_PER_DAY) as i64 - LEAPOCH;
        let secs_of_day = v % SECS_PER_DAY;

        let mut qc_cycles = days / DAYS_PER_400Y;
        let mut remdays = days % DAYS_PER_400Y;
        if remdays < 0 {
            remdays += DAYS_PER_400Y;
            qc_cycles -= 1;
        }

        let mut c_cycles = remdays / DAYS_PER_100Y;
        if c_cycles == 4 {
            c_cycles -= 1;
        }
        remdays -= c_cycles * DAYS_PER_100Y;

        let mut q_cycles = remdays / DAYS_PER_4Y;
        if q_cycles == 25 {
            q_cycles -= 1;
        }
        remdays -= q_cycles * DAYS_PER_4Y;

        let mut remyears = remdays / DAYS_PER_YEAR;
        if remyears == 4 {
            remyears -= 1;
        }
        remdays -= remyears * DAYS_PER_YEAR;

        let mut year = 2000 + remyears + 4 * q_cycles + 100 * c_cycles + 400 * qc_cycles;

        let mut mon = 0;
        for mon_len in MONTH_DAYS_FROM_MARCH {
            if remdays < mon_len {
                break;
            }
            remdays -= mon_len;
            mon += 1;
        }
        let mday = remdays + 1;
        // Back from a March based offset to a one based month number.
        let mon = if mon >= 10 {
            year += 1;
            mon - 9
        } else {
            mon + 3
        };

        let mut wday = (3 + days) % 7;
        if wday <= 0 {
            wday += 7;
        }

        // Every value below is bounded by the arithmetic above.
        let weekday = Weekday::from_index(wday as usize - 1).ok_or(Error::InvalidDate)?;
        Self::new(
            year as u16,
            mon as u8,
            mday as u8,
            (secs_of_day / SECS_PER_HOUR) as u8,
            ((secs_of_day % SECS_PER_HOUR) / SECS_PER_MINUTE) as u8,
            (secs_of_day % SECS_PER_MINUTE) as u8,
            weekday,
        )
    }

    /// Seconds since the epoch for this date. The weekday is ignored.
    pub fn to_epoch(&self) -> EpochSeconds {
        let year = u64::from(self.year);
        let prior = year - 1;
        let leap_years = (prior - 1968) / 4 - (prior - 1900) / 100 + (prior - 1600) / 400;

        let mut ydays = CUMULATIVE_DAYS[usize::from(self.month) - 1] + u64::from(self.day) - 1;
        if is_leap_year(self.year) && self.month > FEBRUARY {
            ydays += 1;
        }

        let days = (year - u64::from(MIN_YEAR)) * 365 + leap_years + ydays;
        EpochSeconds::new(
            days * SECS_PER_DAY
                + u64::from(self.hour) * SECS_PER_HOUR
                + u64::from(self.min) * SECS_PER_MINUTE
                + u64::from(self.sec),
        )
    }
}

impl TryFrom<EpochSeconds> for HttpDate {
    type Error = Error;

    fn try_from(secs: EpochSeconds) -> Result<Self, Self::Error> {
        Self::from_epoch(secs)
    }
}

impl From<HttpDate> for EpochSeconds {
    fn from(date: HttpDate) -> Self {
        date.to_epoch()
    }
}

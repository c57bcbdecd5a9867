/// Earliest representable year (the Unix epoch)
pub const MIN_YEAR: u16 = 1970;
/// Maximum valid year (inclusive)
pub const MAX_YEAR: u16 = 9999;

/// Maximum valid month (December)
pub const MAX_MONTH: u8 = 12;
/// First day of month, used for lower bounds
pub const MIN_DAY: u8 = 1;
/// Upper bound for any day of month. Not adjusted per month.
pub const MAX_DAY: u8 = 31;

pub const MAX_HOUR: u8 = 23;
pub const MAX_MINUTE: u8 = 59;
pub const MAX_SECOND: u8 = 59;

/// Month number for February
pub const FEBRUARY: u8 = 2;

/// Length of an IMF-fixdate, the only form ever produced
pub const IMF_FIXDATE_LEN: usize = 29;
/// Length of an asctime date
pub const ASCTIME_LEN: usize = 24;
/// Length of an RFC 850 date after the full weekday name and `", "`
pub const RFC850_SUFFIX_LEN: usize = 22;

/// Two-digit RFC 850 years below this belong to the 2000s, the rest to the 1900s
pub const RFC850_PIVOT: u16 = 70;

/// Seconds since the epoch of 10000-01-01T00:00:00Z, the first unrepresentable instant
pub const YEAR_10000_SECS: u64 = 253_402_300_800;

pub(crate) const SECS_PER_MINUTE: u64 = 60;
pub(crate) const SECS_PER_HOUR: u64 = 3600;
pub(crate) const SECS_PER_DAY: u64 = 86400;

/// Days from 1970-01-01 to 2000-03-01, the day after the leap day closing a 400 year cycle
pub(crate) const LEAPOCH: i64 = 11017;
pub(crate) const DAYS_PER_400Y: i64 = 365 * 400 + 97;
pub(crate) const DAYS_PER_100Y: i64 = 365 * 100 + 24;
pub(crate) const DAYS_PER_4Y: i64 = 365 * 4 + 1;
pub(crate) const DAYS_PER_YEAR: i64 = 365;

/// Month lengths starting at March, so the leap day falls at the very end
pub(crate) const MONTH_DAYS_FROM_MARCH: [i64; 12] = [31, 30, 31, 30, 31, 31, 30, 31, 30, 31, 31, 29];

/// Days before the first of each month in a non-leap year
pub(crate) const CUMULATIVE_DAYS: [u64; 12] = [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: u16 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: u16 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: u16 = 400;

pub(crate) const WEEKDAY_NAMES: [&[u8; 3]; 7] = [b"Mon", b"Tue", b"Wed", b"Thu", b"Fri", b"Sat", b"Sun"];

pub(crate) const MONTH_NAMES: [&[u8; 3]; 12] = [
    b"Jan", b"Feb", b"Mar", b"Apr", b"May", b"Jun", b"Jul", b"Aug", b"Sep", b"Oct", b"Nov", b"Dec",
];

// Literal tables for each grammar, indexed by weekday/month ordinal.

pub(crate) const IMF_WEEKDAYS: [&[u8; 5]; 7] = [
    b"Mon, ", b"Tue, ", b"Wed, ", b"Thu, ", b"Fri, ", b"Sat, ", b"Sun, ",
];

pub(crate) const IMF_MONTHS: [&[u8; 5]; 12] = [
    b" Jan ", b" Feb ", b" Mar ", b" Apr ", b" May ", b" Jun ", b" Jul ", b" Aug ", b" Sep ",
    b" Oct ", b" Nov ", b" Dec ",
];

pub(crate) const RFC850_WEEKDAYS: [&[u8]; 7] = [
    b"Monday, ",
    b"Tuesday, ",
    b"Wednesday, ",
    b"Thursday, ",
    b"Friday, ",
    b"Saturday, ",
    b"Sunday, ",
];

pub(crate) const RFC850_MONTHS: [&[u8; 5]; 12] = [
    b"-Jan-", b"-Feb-", b"-Mar-", b"-Apr-", b"-May-", b"-Jun-", b"-Jul-", b"-Aug-", b"-Sep-",
    b"-Oct-", b"-Nov-", b"-Dec-",
];

pub(crate) const ASCTIME_WEEKDAYS: [&[u8; 4]; 7] = [
    b"Mon ", b"Tue ", b"Wed ", b"Thu ", b"Fri ", b"Sat ", b"Sun ",
];

pub(crate) const ASCTIME_MONTHS: [&[u8; 4]; 12] = [
    b"Jan ", b"Feb ", b"Mar ", b"Apr ", b"May ", b"Jun ", b"Jul ", b"Aug ", b"Sep ", b"Oct ",
    b"Nov ", b"Dec ",
];

/// Output template with separators and padding already in place
pub(crate) const IMF_FIXDATE_TEMPLATE: [u8; IMF_FIXDATE_LEN] = *b"   , 00     0000 00:00:00 GMT";

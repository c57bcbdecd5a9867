//! Fixed-layout matchers for the three date grammars accepted in HTTP.
//!
//! Each matcher checks length and separator bytes before decoding any field,
//! and returns `None` on the first mismatch. Field ranges are not checked
//! here.

use crate::consts::{
    ASCTIME_LEN, ASCTIME_MONTHS, ASCTIME_WEEKDAYS, IMF_FIXDATE_LEN, IMF_MONTHS, IMF_WEEKDAYS,
    RFC850_MONTHS, RFC850_PIVOT, RFC850_SUFFIX_LEN, RFC850_WEEKDAYS,
};
use crate::digits::{toint_1, toint_2, toint_4};
use crate::types::Weekday;

/// Fields as they appear in the text, before range validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct RawDate {
    pub(crate) year: u16,
    pub(crate) month: u8,
    pub(crate) day: u8,
    pub(crate) hour: u8,
    pub(crate) min: u8,
    pub(crate) sec: u8,
    pub(crate) weekday: Weekday,
}

/// Grammars in the order they are tried.
pub(crate) const GRAMMARS: [fn(&[u8]) -> Option<RawDate>; 3] =
    [parse_imf_fixdate, parse_rfc850_date, parse_asctime];

fn weekday_in<const N: usize>(table: &[&[u8; N]; 7], token: &[u8]) -> Option<Weekday> {
    table
        .iter()
        .position(|name| name.as_slice() == token)
        .and_then(Weekday::from_index)
}

fn month_in<const N: usize>(table: &[&[u8; N]; 12], token: &[u8]) -> Option<u8> {
    let index = table.iter().position(|name| name.as_slice() == token)?;
    u8::try_from(index + 1).ok()
}

/// `Sun, 06 Nov 1994 08:49:37 GMT`
pub(crate) fn parse_imf_fixdate(s: &[u8]) -> Option<RawDate> {
    if s.len() != IMF_FIXDATE_LEN
        || &s[25..] != b" GMT"
        || s[16] != b' '
        || s[19] != b':'
        || s[22] != b':'
    {
        return None;
    }
    Some(RawDate {
        weekday: weekday_in(&IMF_WEEKDAYS, &s[..5])?,
        day: toint_2(&s[5..7])?,
        month: month_in(&IMF_MONTHS, &s[7..12])?,
        year: toint_4(&s[12..16])?,
        hour: toint_2(&s[17..19])?,
        min: toint_2(&s[20..22])?,
        sec: toint_2(&s[23..25])?,
    })
}

/// `Sunday, 06-Nov-94 08:49:37 GMT`
pub(crate) fn parse_rfc850_date(s: &[u8]) -> Option<RawDate> {
    let (index, prefix) = RFC850_WEEKDAYS
        .iter()
        .enumerate()
        .filter(|(_, name)| s.starts_with(name))
        .max_by_key(|(_, name)| name.len())?;
    let s = &s[prefix.len()..];

    if s.len() != RFC850_SUFFIX_LEN
        || &s[18..] != b" GMT"
        || s[9] != b' '
        || s[12] != b':'
        || s[15] != b':'
    {
        return None;
    }

    let year = u16::from(toint_2(&s[7..9])?);
    Some(RawDate {
        weekday: Weekday::from_index(index)?,
        day: toint_2(&s[..2])?,
        month: month_in(&RFC850_MONTHS, &s[2..7])?,
        year: if year < RFC850_PIVOT {
            year + 2000
        } else {
            year + 1900
        },
        hour: toint_2(&s[10..12])?,
        min: toint_2(&s[13..15])?,
        sec: toint_2(&s[16..18])?,
    })
}

/// `Sun Nov  6 08:49:37 1994`
pub(crate) fn parse_asctime(s: &[u8]) -> Option<RawDate> {
    if s.len() != ASCTIME_LEN || s[10] != b' ' || s[13] != b':' || s[16] != b':' || s[19] != b' '
    {
        return None;
    }
    Some(RawDate {
        weekday: weekday_in(&ASCTIME_WEEKDAYS, &s[..4])?,
        month: month_in(&ASCTIME_MONTHS, &s[4..8])?,
        day: if s[8] == b' ' {
            toint_1(s[9])?
        } else {
            toint_2(&s[8..10])?
        },
        hour: toint_2(&s[11..13])?,
        min: toint_2(&s[14..16])?,
        sec: toint_2(&s[17..19])?,
        year: toint_4(&s[20..24])?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const RFC_EXAMPLE: RawDate = RawDate {
        year: 1994,
        month: 11,
        day: 6,
        hour: 8,
        min: 49,
        sec: 37,
        weekday: Weekday::Sun,
    };

    #[test]
    fn test_imf_fixdate() {
        assert_eq!(
            parse_imf_fixdate(b"Sun, 06 Nov 1994 08:49:37 GMT"),
            Some(RFC_EXAMPLE)
        );
    }

    #[test]
    fn test_imf_fixdate_structure() {
        // Wrong length, wrong zone, misplaced separators.
        assert_eq!(parse_imf_fixdate(b"Sun, 06 Nov 1994 08:49:37 GMT "), None);
        assert_eq!(parse_imf_fixdate(b"Sun, 6 Nov 1994 08:49:37 GMT"), None);
        assert_eq!(parse_imf_fixdate(b"Sun, 06 Nov 1994 08:49:37 UTC"), None);
        assert_eq!(parse_imf_fixdate(b"Sun, 06 Nov 1994T08:49:37 GMT"), None);
        assert_eq!(parse_imf_fixdate(b"Sun, 06 Nov 1994 08.49:37 GMT"), None);
        assert_eq!(parse_imf_fixdate(b"Sun, 06 Nov 1994 08:49.37 GMT"), None);
    }

    #[test]
    fn test_imf_fixdate_tokens() {
        assert_eq!(parse_imf_fixdate(b"sun, 06 Nov 1994 08:49:37 GMT"), None);
        assert_eq!(parse_imf_fixdate(b"Sun, 06 nov 1994 08:49:37 GMT"), None);
        assert_eq!(parse_imf_fixdate(b"Sun; 06 Nov 1994 08:49:37 GMT"), None);
        assert_eq!(parse_imf_fixdate(b"Sun, 06 Nov 19x4 08:49:37 GMT"), None);
        assert_eq!(parse_imf_fixdate(b"Sun, 06 Nov 1994 08:4 :37 GMT"), None);
    }

    #[test]
    fn test_imf_fixdate_does_not_check_ranges() {
        let raw = parse_imf_fixdate(b"Mon, 99 Jan 0000 99:99:99 GMT").unwrap();
        assert_eq!((raw.day, raw.year, raw.hour), (99, 0, 99));
    }

    #[test]
    fn test_rfc850() {
        assert_eq!(
            parse_rfc850_date(b"Sunday, 06-Nov-94 08:49:37 GMT"),
            Some(RFC_EXAMPLE)
        );
    }

    #[test]
    fn test_rfc850_every_weekday_name() {
        let names = [
            "Monday",
            "Tuesday",
            "Wednesday",
            "Thursday",
            "Friday",
            "Saturday",
            "Sunday",
        ];
        for (index, name) in names.iter().enumerate() {
            let text = format!("{name}, 01-Jan-01 00:00:00 GMT");
            let raw = parse_rfc850_date(text.as_bytes()).unwrap();
            assert_eq!(raw.weekday.index(), index, "{text}");
        }
    }

    #[test]
    fn test_rfc850_year_pivot() {
        fn year(text: &[u8]) -> Option<u16> {
            parse_rfc850_date(text).map(|raw| raw.year)
        }
        assert_eq!(year(b"Sunday, 06-Nov-94 08:49:37 GMT"), Some(1994));
        assert_eq!(year(b"Sunday, 06-Nov-05 08:49:37 GMT"), Some(2005));
        assert_eq!(year(b"Sunday, 06-Nov-69 08:49:37 GMT"), Some(2069));
        assert_eq!(year(b"Sunday, 06-Nov-70 08:49:37 GMT"), Some(1970));
        assert_eq!(year(b"Sunday, 06-Nov-00 08:49:37 GMT"), Some(2000));
    }

    #[test]
    fn test_rfc850_structure() {
        assert_eq!(parse_rfc850_date(b"Sunday, 06-Nov-94 08+49:37 GMT"), None);
        assert_eq!(parse_rfc850_date(b"Sunday, 06-Nov-94 08:49+37 GMT"), None);
        assert_eq!(parse_rfc850_date(b"Sunday, 06-Nov-1994 08:49:37 GMT"), None);
        assert_eq!(parse_rfc850_date(b"Sunday, 06 Nov 94 08:49:37 GMT"), None);
        assert_eq!(parse_rfc850_date(b"Sunday, 06-Nov-94T08:49:37 GMT"), None);
        assert_eq!(parse_rfc850_date(b"Sunday,06-Nov-94 08:49:37 GMT"), None);
        assert_eq!(parse_rfc850_date(b"Sun, 06-Nov-94 08:49:37 GMT"), None);
        assert_eq!(parse_rfc850_date(b"Sunday, 06-Nov-94 08:49:37 UTC"), None);
        assert_eq!(parse_rfc850_date(b"Sunday, "), None);
        assert_eq!(parse_rfc850_date(b""), None);
    }

    #[test]
    fn test_asctime() {
        assert_eq!(parse_asctime(b"Sun Nov  6 08:49:37 1994"), Some(RFC_EXAMPLE));
        let raw = parse_asctime(b"Thu Nov 10 08:00:00 2000").unwrap();
        assert_eq!((raw.day, raw.weekday), (10, Weekday::Thu));
    }

    #[test]
    fn test_asctime_structure() {
        assert_eq!(parse_asctime(b"Sun Nov 10 08*00:00 2000"), None);
        assert_eq!(parse_asctime(b"Sun Nov 10 08:00*00 2000"), None);
        assert_eq!(parse_asctime(b"Sun Nov 6 08:49:37 1994"), None);
        assert_eq!(parse_asctime(b"Sun Nov 06 08:49:37 1994 "), None);
        assert_eq!(parse_asctime(b"Sun Nov 06T08:49:37 1994"), None);
        assert_eq!(parse_asctime(b"Sun Nov  x 08:49:37 1994"), None);
        assert_eq!(parse_asctime(b"Sun Nov 6  08:49:37 1994"), None);
        assert_eq!(parse_asctime(b"Sun,Nov  6 08:49:37 1994"), None);
    }

    #[test]
    fn test_grammars_are_disjoint() {
        let inputs: [&[u8]; 3] = [
            b"Sun, 06 Nov 1994 08:49:37 GMT",
            b"Sunday, 06-Nov-94 08:49:37 GMT",
            b"Sun Nov  6 08:49:37 1994",
        ];
        for (i, input) in inputs.iter().enumerate() {
            for (j, grammar) in GRAMMARS.iter().enumerate() {
                assert_eq!(grammar(input).is_some(), i == j, "grammar {j} on input {i}");
            }
        }
    }
}

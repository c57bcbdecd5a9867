//! Strict fixed-width ASCII decimal decoding.
//!
//! Every byte must be an ASCII digit; there is no sign, padding or
//! whitespace handling. Callers turn `None` into a parse failure.

#[inline]
pub(crate) const fn toint_1(byte: u8) -> Option<u8> {
    if byte.is_ascii_digit() {
        Some(byte - b'0')
    } else {
        None
    }
}

#[inline]
pub(crate) fn toint_2(bytes: &[u8]) -> Option<u8> {
    match *bytes {
        [tens, ones] => Some(toint_1(tens)? * 10 + toint_1(ones)?),
        _ => None,
    }
}

#[inline]
pub(crate) fn toint_4(bytes: &[u8]) -> Option<u16> {
    match *bytes {
        [a, b, c, d] => {
            let high = u16::from(toint_2(&[a, b])?);
            let low = u16::from(toint_2(&[c, d])?);
            Some(high * 100 + low)
        }
        _ => None,
    }
}

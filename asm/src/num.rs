use std::num::ParseIntError;

use crate::error::Error;

/// Parses a numeric literal and checks it against an inclusive range.
///
/// The bounds may mix signed and unsigned magnitudes: `li` accepts anything
/// in `[i32::MIN, u32::MAX]`, which is why the result is an `i64`.
pub fn parse_num(s: &str, min: i64, max: i64) -> Result<i64, Error> {
    let val = parse_with_prefix(s).map_err(|_| Error::ParseNum(s.to_string()))?;
    if val < min || val > max {
        return Err(Error::NumOutOfRange(val, min, max));
    }
    Ok(val)
}

fn parse_with_prefix(s: &str) -> Result<i64, ParseIntError> {
    let (sign, body) = match s.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, s),
    };
    let val = if let Some(hex) = body.strip_prefix("0x").or_else(|| body.strip_prefix("0X")) {
        i64::from_str_radix(hex, 16)?
    } else if let Some(oct) = body.strip_prefix("0o") {
        i64::from_str_radix(oct, 8)?
    } else if let Some(bin) = body.strip_prefix("0b") {
        i64::from_str_radix(bin, 2)?
    } else {
        body.parse::<i64>()?
    };
    Ok(sign * val)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_radix_prefixes() {
        assert_eq!(parse_num("42", 0, 100), Ok(42));
        assert_eq!(parse_num("-42", -100, 0), Ok(-42));
        assert_eq!(parse_num("0x1F", 0, 100), Ok(31));
        assert_eq!(parse_num("0o17", 0, 100), Ok(15));
        assert_eq!(parse_num("0b101", 0, 100), Ok(5));
    }

    #[test]
    fn test_range_boundaries() {
        assert_eq!(parse_num("32767", i16::MIN as i64, i16::MAX as i64), Ok(32767));
        assert_eq!(
            parse_num("32768", i16::MIN as i64, i16::MAX as i64),
            Err(Error::NumOutOfRange(32768, -32768, 32767))
        );
        assert_eq!(
            parse_num("-32768", i16::MIN as i64, i16::MAX as i64),
            Ok(-32768)
        );
    }

    #[test]
    fn test_mixed_sign_range() {
        // the li range: [INT_MIN, UINT_MAX]
        let (min, max) = (i32::MIN as i64, u32::MAX as i64);
        assert_eq!(parse_num("4294967295", min, max), Ok(4294967295));
        assert_eq!(parse_num("-2147483648", min, max), Ok(-2147483648));
        assert!(parse_num("4294967296", min, max).is_err());
    }

    #[test]
    fn test_garbage_rejected() {
        assert_eq!(
            parse_num("$t0", 0, 100),
            Err(Error::ParseNum("$t0".to_string()))
        );
        assert!(parse_num("", 0, 100).is_err());
    }
}

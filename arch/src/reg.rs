use num_enum::{IntoPrimitive, TryFromPrimitive};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// The 32 MIPS general purpose registers. The discriminant of each variant
/// is its 5-bit encoding.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    IntoPrimitive,
    TryFromPrimitive,
    EnumString,
    Display,
)]
#[repr(u8)]
pub enum Reg {
    ZERO,
    AT,
    V0,
    V1,
    A0,
    A1,
    A2,
    A3,
    T0,
    T1,
    T2,
    T3,
    T4,
    T5,
    T6,
    T7,
    S0,
    S1,
    S2,
    S3,
    S4,
    S5,
    S6,
    S7,
    T8,
    T9,
    K0,
    K1,
    GP,
    SP,
    FP,
    RA,
}

impl Reg {
    /// Parses `$t0`, `t0` or `$8` style register names (case-insensitive).
    pub fn parse(s: &str) -> Result<Self, String> {
        let name = s.strip_prefix('$').unwrap_or(s);
        if let Ok(a) = name.to_ascii_uppercase().parse::<Self>() {
            return Ok(a);
        }
        if let Ok(idx) = name.parse::<u8>() {
            if let Ok(a) = Reg::try_from(idx) {
                return Ok(a);
            }
        }
        Err(format!("Unknown reg name: {s}"))
    }

    pub fn index(self) -> u8 {
        self.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_names() {
        assert_eq!(Reg::parse("$zero"), Ok(Reg::ZERO));
        assert_eq!(Reg::parse("$at"), Ok(Reg::AT));
        assert_eq!(Reg::parse("$t0"), Ok(Reg::T0));
        assert_eq!(Reg::parse("$T9"), Ok(Reg::T9));
        assert_eq!(Reg::parse("sp"), Ok(Reg::SP));
        assert!(Reg::parse("$hoge").is_err());
    }

    #[test]
    fn test_parse_numeric() {
        assert_eq!(Reg::parse("$0"), Ok(Reg::ZERO));
        assert_eq!(Reg::parse("$8"), Ok(Reg::T0));
        assert_eq!(Reg::parse("$31"), Ok(Reg::RA));
        assert!(Reg::parse("$32").is_err());
    }

    #[test]
    fn test_index() {
        assert_eq!(Reg::ZERO.index(), 0);
        assert_eq!(Reg::T0.index(), 8);
        assert_eq!(Reg::S0.index(), 16);
        assert_eq!(Reg::RA.index(), 31);
    }
}

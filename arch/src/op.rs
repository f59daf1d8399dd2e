use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Real (directly encodable) mnemonics, dispatched in pass two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumString, Display)]
pub enum OpKind {
    ADDU,
    OR,
    SLT,
    SLTU,
    SLL,
    JR,
    ADDIU,
    ORI,
    LUI,
    LB,
    LBU,
    LW,
    SB,
    SW,
    BEQ,
    BNE,
    J,
    JAL,
}

impl OpKind {
    pub fn parse(s: &str) -> Result<Self, String> {
        match s.to_uppercase().parse::<Self>() {
            Ok(a) => Ok(a),
            Err(_) => Err(format!("Undefined Op: {s}")),
        }
    }
}

/// Pseudo mnemonics, rewritten into real instructions in pass one.
///
/// `traddu a, b, c` is a teaching mnemonic with no ISA counterpart: it is
/// defined only by its expansion (`addu $at, b, c; addu a, $at, a`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumString, Display)]
pub enum Psudo {
    LI,
    MOVE,
    BLT,
    BGT,
    TRADDU,
}

impl Psudo {
    pub fn parse(s: &str) -> Result<Self, String> {
        match s.to_uppercase().parse::<Self>() {
            Ok(a) => Ok(a),
            Err(_) => Err(format!("Undefined Psudo Op: {s}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_op() {
        assert_eq!(OpKind::parse("addu"), Ok(OpKind::ADDU));
        assert_eq!(OpKind::parse("j"), Ok(OpKind::J));
        assert_eq!(OpKind::parse("SLL"), Ok(OpKind::SLL));
        assert!(OpKind::parse("li").is_err());
        assert!(OpKind::parse("hoge").is_err());
    }

    #[test]
    fn test_parse_psudo() {
        assert_eq!(Psudo::parse("li"), Ok(Psudo::LI));
        assert_eq!(Psudo::parse("traddu"), Ok(Psudo::TRADDU));
        assert!(Psudo::parse("addu").is_err());
    }
}

use arch::op::Psudo;

use crate::{error::Error, num, parser::Stmt};

/// Rewrites one instruction record for pass one.
///
/// Pseudo mnemonics expand into one or two real instructions; everything
/// else passes through unchanged. The number of real instructions emitted
/// is the length of the returned vector. On `Err` nothing is emitted, so a
/// failed expansion never leaves a partial sequence behind.
///
/// Registers and labels are not validated here; pass two checks them.
pub fn expand_inst(name: &str, args: &[String]) -> Result<Vec<Stmt>, Error> {
    let psudo = match Psudo::parse(name) {
        Ok(p) => p,
        Err(_) => {
            return Ok(vec![Stmt {
                name: name.to_string(),
                args: args.to_vec(),
            }])
        }
    };

    match psudo {
        Psudo::LI => {
            let [rd, imm_str] = args else {
                return Err(Error::InvalidOperands("rd imm"));
            };
            let imm = num::parse_num(imm_str, i32::MIN as i64, u32::MAX as i64)?;
            if imm >= i16::MIN as i64 && imm <= i16::MAX as i64 {
                Ok(vec![Stmt::new("addiu", &[rd.as_str(), "$zero", imm_str.as_str()])])
            } else {
                let upper = (imm >> 16) & 0xFFFF;
                let lower = imm & 0xFFFF;
                Ok(vec![
                    Stmt::new("lui", &["$at", &upper.to_string()]),
                    Stmt::new("ori", &[rd.as_str(), "$at", &lower.to_string()]),
                ])
            }
        }
        Psudo::MOVE => {
            let [rd, rs] = args else {
                return Err(Error::InvalidOperands("rd rs"));
            };
            Ok(vec![Stmt::new("addu", &[rd.as_str(), rs.as_str(), "$zero"])])
        }
        Psudo::BLT => {
            let [a, b, label] = args else {
                return Err(Error::InvalidOperands("rs rt label"));
            };
            Ok(vec![
                Stmt::new("slt", &["$at", a.as_str(), b.as_str()]),
                Stmt::new("bne", &["$at", "$zero", label.as_str()]),
            ])
        }
        Psudo::BGT => {
            let [a, b, label] = args else {
                return Err(Error::InvalidOperands("rs rt label"));
            };
            Ok(vec![
                Stmt::new("slt", &["$at", b.as_str(), a.as_str()]),
                Stmt::new("bne", &["$at", "$zero", label.as_str()]),
            ])
        }
        Psudo::TRADDU => {
            let [a, b, c] = args else {
                return Err(Error::InvalidOperands("rd rs rt"));
            };
            Ok(vec![
                Stmt::new("addu", &["$at", b.as_str(), c.as_str()]),
                Stmt::new("addu", &[a.as_str(), "$at", a.as_str()]),
            ])
        }
    }
}

use crate::reg::Reg;

// ----------------------------------------------------------------------------

pub struct Funct;

impl Funct {
    pub const SLL: u8 = 0x00;
    pub const JR: u8 = 0x08;
    pub const ADDU: u8 = 0x21;
    pub const OR: u8 = 0x25;
    pub const SLT: u8 = 0x2a;
    pub const SLTU: u8 = 0x2b;
}

pub struct Opcode;

impl Opcode {
    pub const J: u8 = 0x02;
    pub const JAL: u8 = 0x03;
    pub const BEQ: u8 = 0x04;
    pub const BNE: u8 = 0x05;
    pub const ADDIU: u8 = 0x09;
    pub const ORI: u8 = 0x0d;
    pub const LUI: u8 = 0x0f;
    pub const LB: u8 = 0x20;
    pub const LW: u8 = 0x23;
    pub const LBU: u8 = 0x24;
    pub const SB: u8 = 0x28;
    pub const SW: u8 = 0x2b;
}

// ----------------------------------------------------------------------------

/// A validated instruction, one variant per bit layout. Field validation
/// happens before construction; `to_bin` only packs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Inst {
    /// `funct | rs<<21 | rt<<16 | rd<<11`
    R { funct: u8, rd: Reg, rs: Reg, rt: Reg },
    /// `funct | shamt<<6 | rd<<11 | rt<<16`
    Shift { funct: u8, rd: Reg, rt: Reg, shamt: u8 },
    /// `funct | rs<<21`
    Jr { funct: u8, rs: Reg },
    /// `opcode<<26 | rs<<21 | rt<<16 | imm`; also carries branch offsets
    I { opcode: u8, rs: Reg, rt: Reg, imm: u16 },
    /// `opcode<<26 | rt<<16 | imm` (no rs field)
    Lui { opcode: u8, rt: Reg, imm: u16 },
    /// `opcode<<26 | target`; target is a 26-bit field, zero until linked
    J { opcode: u8, target: u32 },
}

fn enc_rtype(funct: u8, rd: Reg, rs: Reg, rt: Reg) -> u32 {
    (funct as u32)
        | ((rs.index() as u32) << 21)
        | ((rt.index() as u32) << 16)
        | ((rd.index() as u32) << 11)
}

fn enc_shift(funct: u8, rd: Reg, rt: Reg, shamt: u8) -> u32 {
    (funct as u32)
        | (((shamt & 0x1F) as u32) << 6)
        | ((rd.index() as u32) << 11)
        | ((rt.index() as u32) << 16)
}

fn enc_itype(opcode: u8, rs: Reg, rt: Reg, imm: u16) -> u32 {
    ((opcode as u32) << 26)
        | ((rs.index() as u32) << 21)
        | ((rt.index() as u32) << 16)
        | (imm as u32)
}

fn enc_jtype(opcode: u8, target: u32) -> u32 {
    ((opcode as u32) << 26) | (target & 0x03FF_FFFF)
}

impl Inst {
    pub fn to_bin(&self) -> u32 {
        match *self {
            Inst::R { funct, rd, rs, rt } => enc_rtype(funct, rd, rs, rt),
            Inst::Shift {
                funct,
                rd,
                rt,
                shamt,
            } => enc_shift(funct, rd, rt, shamt),
            Inst::Jr { funct, rs } => (funct as u32) | ((rs.index() as u32) << 21),
            Inst::I {
                opcode,
                rs,
                rt,
                imm,
            } => enc_itype(opcode, rs, rt, imm),
            Inst::Lui { opcode, rt, imm } => {
                ((opcode as u32) << 26) | ((rt.index() as u32) << 16) | (imm as u32)
            }
            Inst::J { opcode, target } => enc_jtype(opcode, target),
        }
    }
}

// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    macro_rules! test_bin {
        ($($name:ident: $inst:expr => $expect:expr,)*) => {
            $(
                #[test]
                fn $name() {
                    let bin = $inst.to_bin();
                    let expect: u32 = $expect;
                    assert_eq!(bin, expect, "got {:08X}, expect {:08X}", bin, expect);
                }
            )*
        }
    }

    test_bin! {
        // addu $t0 $t1 $t2
        test_addu: Inst::R { funct: Funct::ADDU, rd: Reg::T0, rs: Reg::T1, rt: Reg::T2 } => 0x012A4021,
        // or $v0 $a0 $a1
        test_or: Inst::R { funct: Funct::OR, rd: Reg::V0, rs: Reg::A0, rt: Reg::A1 } => 0x00851025,
        // slt $at $t0 $t1
        test_slt: Inst::R { funct: Funct::SLT, rd: Reg::AT, rs: Reg::T0, rt: Reg::T1 } => 0x0109082A,
        // sltu $t0 $t1 $t2
        test_sltu: Inst::R { funct: Funct::SLTU, rd: Reg::T0, rs: Reg::T1, rt: Reg::T2 } => 0x012A402B,
        // sll $t0 $t1 4
        test_sll: Inst::Shift { funct: Funct::SLL, rd: Reg::T0, rt: Reg::T1, shamt: 4 } => 0x00094100,
        // jr $ra
        test_jr: Inst::Jr { funct: Funct::JR, rs: Reg::RA } => 0x03E00008,
        // addiu $t0 $zero 100
        test_addiu: Inst::I { opcode: Opcode::ADDIU, rs: Reg::ZERO, rt: Reg::T0, imm: 100 } => 0x24080064,
        // ori $t0 $at 0xFFFF
        test_ori: Inst::I { opcode: Opcode::ORI, rs: Reg::AT, rt: Reg::T0, imm: 0xFFFF } => 0x3428FFFF,
        // lui $at 0x1234
        test_lui: Inst::Lui { opcode: Opcode::LUI, rt: Reg::AT, imm: 0x1234 } => 0x3C011234,
        // lw $t0 4($sp)
        test_lw: Inst::I { opcode: Opcode::LW, rs: Reg::SP, rt: Reg::T0, imm: 4 } => 0x8FA80004,
        // sw $t0 -4($sp): offset sign-extends from the 16-bit field
        test_sw: Inst::I { opcode: Opcode::SW, rs: Reg::SP, rt: Reg::T0, imm: 0xFFFC } => 0xAFA8FFFC,
        // j with an unresolved (zeroed) target
        test_j: Inst::J { opcode: Opcode::J, target: 0 } => 0x08000000,
        // jal with an unresolved (zeroed) target
        test_jal: Inst::J { opcode: Opcode::JAL, target: 0 } => 0x0C000000,
    }

    #[test]
    fn test_jtype_target_masked() {
        let bin = Inst::J {
            opcode: Opcode::J,
            target: 0xFFFF_FFFF,
        }
        .to_bin();
        assert_eq!(bin, 0x0BFF_FFFF);
    }
}

use arch::{
    inst::{Funct, Inst, Opcode},
    op::OpKind,
    reg::Reg,
};

use crate::{
    error::Error,
    num,
    table::SymbolTable,
};

/// Byte reach of a branch: the signed 16-bit word offset covers
/// `[-(2^17 - 4), 2^17]` around the delay slot.
const TWO_POW_SEVENTEEN: i64 = 131072;

/// Encodes one real instruction at `addr` into a 32-bit word.
///
/// Branch targets are resolved against `symtbl`; absolute jumps leave their
/// target field zero and record `(label, addr)` in `reltbl` for the linker.
/// Any invalid argument yields `Err` with no output and no table mutation.
pub fn translate_inst(
    name: &str,
    args: &[String],
    addr: u32,
    symtbl: &SymbolTable,
    reltbl: &mut SymbolTable,
) -> Result<u32, Error> {
    let kind =
        OpKind::parse(name).map_err(|_| Error::UnknownOperation(name.to_string()))?;
    let inst = match kind {
        OpKind::ADDU => rtype(Funct::ADDU, args)?,
        OpKind::OR => rtype(Funct::OR, args)?,
        OpKind::SLT => rtype(Funct::SLT, args)?,
        OpKind::SLTU => rtype(Funct::SLTU, args)?,
        OpKind::SLL => shift(Funct::SLL, args)?,
        OpKind::JR => jr(Funct::JR, args)?,
        OpKind::ADDIU => itype_signed(Opcode::ADDIU, args)?,
        OpKind::ORI => itype_unsigned(Opcode::ORI, args)?,
        OpKind::LUI => lui(Opcode::LUI, args)?,
        OpKind::LB => mem(Opcode::LB, args)?,
        OpKind::LBU => mem(Opcode::LBU, args)?,
        OpKind::LW => mem(Opcode::LW, args)?,
        OpKind::SB => mem(Opcode::SB, args)?,
        OpKind::SW => mem(Opcode::SW, args)?,
        OpKind::BEQ => branch(Opcode::BEQ, args, addr, symtbl)?,
        OpKind::BNE => branch(Opcode::BNE, args, addr, symtbl)?,
        OpKind::J => jump(Opcode::J, args, addr, reltbl)?,
        OpKind::JAL => jump(Opcode::JAL, args, addr, reltbl)?,
    };
    Ok(inst.to_bin())
}

fn reg(s: &str) -> Result<Reg, Error> {
    Reg::parse(s).map_err(|_| Error::UnknownReg(s.to_string()))
}

fn rtype(funct: u8, args: &[String]) -> Result<Inst, Error> {
    let [rd, rs, rt] = args else {
        return Err(Error::InvalidOperands("rd rs rt"));
    };
    Ok(Inst::R {
        funct,
        rd: reg(rd)?,
        rs: reg(rs)?,
        rt: reg(rt)?,
    })
}

fn shift(funct: u8, args: &[String]) -> Result<Inst, Error> {
    let [rd, rt, shamt] = args else {
        return Err(Error::InvalidOperands("rd rt shamt"));
    };
    let shamt = num::parse_num(shamt, 0, 31)?;
    Ok(Inst::Shift {
        funct,
        rd: reg(rd)?,
        rt: reg(rt)?,
        shamt: shamt as u8,
    })
}

fn jr(funct: u8, args: &[String]) -> Result<Inst, Error> {
    let [rs] = args else {
        return Err(Error::InvalidOperands("rs"));
    };
    Ok(Inst::Jr { funct, rs: reg(rs)? })
}

fn itype_signed(opcode: u8, args: &[String]) -> Result<Inst, Error> {
    let [rt, rs, imm] = args else {
        return Err(Error::InvalidOperands("rt rs imm"));
    };
    let imm = num::parse_num(imm, i16::MIN as i64, i16::MAX as i64)?;
    Ok(Inst::I {
        opcode,
        rs: reg(rs)?,
        rt: reg(rt)?,
        imm: imm as u16,
    })
}

fn itype_unsigned(opcode: u8, args: &[String]) -> Result<Inst, Error> {
    let [rt, rs, imm] = args else {
        return Err(Error::InvalidOperands("rt rs imm"));
    };
    let imm = num::parse_num(imm, 0, u16::MAX as i64)?;
    Ok(Inst::I {
        opcode,
        rs: reg(rs)?,
        rt: reg(rt)?,
        imm: imm as u16,
    })
}

fn lui(opcode: u8, args: &[String]) -> Result<Inst, Error> {
    let [rt, imm] = args else {
        return Err(Error::InvalidOperands("rt imm"));
    };
    let imm = num::parse_num(imm, 0, u16::MAX as i64)?;
    Ok(Inst::Lui {
        opcode,
        rt: reg(rt)?,
        imm: imm as u16,
    })
}

fn mem(opcode: u8, args: &[String]) -> Result<Inst, Error> {
    let [rt, operand] = args else {
        return Err(Error::InvalidOperands("rt imm(rs)"));
    };
    // split `imm(rs)`
    let (imm, rs) = operand
        .split_once('(')
        .and_then(|(imm, rest)| rest.strip_suffix(')').map(|rs| (imm, rs)))
        .ok_or(Error::InvalidOperands("rt imm(rs)"))?;
    let imm = num::parse_num(imm, i16::MIN as i64, i16::MAX as i64)?;
    Ok(Inst::I {
        opcode,
        rs: reg(rs)?,
        rt: reg(rt)?,
        imm: imm as u16,
    })
}

fn branch(
    opcode: u8,
    args: &[String],
    addr: u32,
    symtbl: &SymbolTable,
) -> Result<Inst, Error> {
    let [rs, rt, label] = args else {
        return Err(Error::InvalidOperands("rs rt label"));
    };
    let rs = reg(rs)?;
    let rt = reg(rt)?;
    let target = symtbl
        .get(label)
        .ok_or_else(|| Error::UndefinedLabel(label.to_string()))?;
    // displacement is relative to the delay slot
    let diff = target as i64 - (addr as i64 + 4);
    if diff < -(TWO_POW_SEVENTEEN - 4) || diff > TWO_POW_SEVENTEEN {
        return Err(Error::BranchOutOfRange(label.to_string()));
    }
    let offset = ((diff >> 2) & 0xFFFF) as u16;
    Ok(Inst::I {
        opcode,
        rs,
        rt,
        imm: offset,
    })
}

fn jump(
    opcode: u8,
    args: &[String],
    addr: u32,
    reltbl: &mut SymbolTable,
) -> Result<Inst, Error> {
    let [label] = args else {
        return Err(Error::InvalidOperands("label"));
    };
    // the target stays zero; the linker patches it from the relocation entry
    reltbl.insert(label, addr)?;
    Ok(Inst::J { opcode, target: 0 })
}

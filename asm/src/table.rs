use std::io::Write;

use crate::error::Error;

const INITIAL_CAPACITY: usize = 5;

/// Uniqueness policy of a [`SymbolTable`].
///
/// The label table runs in `UniqueName` mode (a label may be defined only
/// once); the relocation table runs in `NonUnique` mode, since the same
/// external symbol may be referenced from many jump sites.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    NonUnique,
    UniqueName,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Symbol {
    pub name: String,
    pub addr: u32,
}

/// Append-only name -> byte-address table preserving insertion order.
#[derive(Debug)]
pub struct SymbolTable {
    mode: Mode,
    symbols: Vec<Symbol>,
}

impl SymbolTable {
    pub fn new(mode: Mode) -> Self {
        SymbolTable {
            mode,
            symbols: Vec::with_capacity(INITIAL_CAPACITY),
        }
    }

    /// Appends an owned copy of `name` bound to `addr`.
    ///
    /// `addr` must be word-aligned, and in `UniqueName` mode `name` must not
    /// be present yet. On failure the table is left untouched.
    pub fn insert(&mut self, name: &str, addr: u32) -> Result<(), Error> {
        if addr % 4 != 0 {
            return Err(Error::UnalignedAddress(addr));
        }
        if self.mode == Mode::UniqueName && self.symbols.iter().any(|s| s.name == name) {
            return Err(Error::DuplicateName(name.to_string()));
        }
        self.symbols.push(Symbol {
            name: name.to_string(),
            addr,
        });
        Ok(())
    }

    /// Address of the first entry with this name, in insertion order.
    pub fn get(&self, name: &str) -> Option<u32> {
        self.symbols.iter().find(|s| s.name == name).map(|s| s.addr)
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Symbol> {
        self.symbols.iter()
    }

    /// Writes every entry as `<decimal addr>\t<name>\n`, in insertion order.
    pub fn write_to<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        for s in &self.symbols {
            writeln!(out, "{}\t{}", s.addr, s.name)?;
        }
        Ok(())
    }
}

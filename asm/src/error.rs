use color_print::cprintln;
use indexmap::IndexMap;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum Error {
    #[error("Address 0x{0:08X} is not a multiple of 4")]
    UnalignedAddress(u32),

    #[error("Name `{0}` already exists in table")]
    DuplicateName(String),

    #[error("Unknown operation: `{0}`")]
    UnknownOperation(String),

    #[error("Invalid operands: expected [{0}]")]
    InvalidOperands(&'static str),

    #[error("Unknown reg name: {0}")]
    UnknownReg(String),

    #[error("Cannot parse `{0}` as number")]
    ParseNum(String),

    #[error("Number {0} is out of range [{1}, {2}]")]
    NumOutOfRange(i64, i64, i64),

    #[error("Undefined label: `{0}`")]
    UndefinedLabel(String),

    #[error("Branch to `{0}` is out of range")]
    BranchOutOfRange(String),
}

impl Error {
    /// Print the error with diagnostic information showing file location and
    /// line content.
    pub fn print_diag(&self, files: &IndexMap<String, Vec<String>>, file: &str, line_idx: usize) {
        cprintln!("<red,bold>error</>: {}", self);

        // line_idx is 0-based, display as 1-based
        let line_num = line_idx + 1;
        cprintln!("     <blue>--></> <underline>{}:{}</>", file, line_num);
        cprintln!("      <blue>|</>");

        let line_content = files
            .get(file)
            .and_then(|lines| lines.get(line_idx))
            .map(|s| s.as_str())
            .unwrap_or("");

        cprintln!(" <blue>{:>4} |</> {}", line_num, line_content);
        cprintln!("      <blue>|</>");
    }
}

use std::fmt;

use color_print::cformat;

/// A textual instruction record: mnemonic plus raw argument strings.
///
/// This is the currency of both passes: the tokenizer produces them from
/// source lines, pass one rewrites them, pass two encodes them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stmt {
    pub name: String,
    pub args: Vec<String>,
}

impl Stmt {
    pub fn new(name: &str, args: &[&str]) -> Self {
        Stmt {
            name: name.to_string(),
            args: args.iter().map(|a| a.to_string()).collect(),
        }
    }

    pub fn cformat(&self) -> String {
        cformat!("<red>{:<6}</> <blue>{}</>", self.name, self.args.join(" "))
    }
}

impl fmt::Display for Stmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// Splits one source line into an optional `label:` and an optional
/// instruction record. `#` starts a comment; arguments are separated by
/// whitespace and/or commas.
pub fn parse_line(raw: &str) -> (Option<String>, Option<Stmt>) {
    let code = raw.split('#').next().unwrap_or("");

    let (label, rest) = match code.split_once(':') {
        Some((head, tail)) => {
            let head = head.trim();
            if head.is_empty() || head.contains(char::is_whitespace) {
                (None, code)
            } else {
                (Some(head.to_string()), tail)
            }
        }
        None => (None, code),
    };

    let mut tokens = rest
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|t| !t.is_empty());

    let stmt = tokens.next().map(|name| Stmt {
        name: name.to_string(),
        args: tokens.map(|t| t.to_string()).collect(),
    });

    (label, stmt)
}

use color_print::{cformat, cprintln};
use indexmap::IndexMap;

use mipsasm::{
    parser::{self, Stmt},
    pass1, pass2,
    table::{Mode, SymbolTable},
};

const HELP_TEMPLATE: &str = "\
{before-help}{bin} {version}
  {about}

{usage-heading}
{tab}{usage}

{all-args}{after-help}";

#[derive(Debug, clap::Parser)]
#[clap(version, about, help_template = HELP_TEMPLATE)]
struct Args {
    /// Input files
    #[clap(default_value = "main.s")]
    input: Vec<String>,

    /// Output object file
    #[clap(short, long, default_value = "main.out")]
    output: String,

    /// Dump the expanded intermediate program
    #[clap(short, long)]
    dump: bool,
}

/// An expanded instruction plus the source position it came from, for
/// pass-two diagnostics.
struct Expanded {
    stmt: Stmt,
    path: String,
    idx: usize,
}

fn main() {
    use clap::Parser;
    use std::io::{BufRead, Write};

    let args: Args = Args::parse();
    println!("MIPS Assembler");

    let mut files: IndexMap<String, Vec<String>> = IndexMap::new();
    let mut errors = 0;

    println!("1. Read Files and Run Pass One");

    let mut symtbl = SymbolTable::new(Mode::UniqueName);
    let mut intermediate: Vec<Expanded> = Vec::new();
    let mut offset: u32 = 0;

    for path in &args.input {
        println!("  < {}", path);
        let file =
            std::fs::File::open(path).expect(&cformat!("<r,s>Failed to open File</>: {}", path));
        let lines: Vec<String> = std::io::BufReader::new(file)
            .lines()
            .collect::<Result<_, _>>()
            .expect(&cformat!("<r,s>Failed to read File</>: {}", path));
        files.insert(path.clone(), lines);

        for idx in 0..files[path].len() {
            let (label, stmt) = parser::parse_line(&files[path][idx]);

            if let Some(label) = label {
                if let Err(err) = symtbl.insert(&label, offset) {
                    err.print_diag(&files, path, idx);
                    errors += 1;
                }
            }

            if let Some(stmt) = stmt {
                match pass1::expand_inst(&stmt.name, &stmt.args) {
                    Ok(expanded) => {
                        offset += 4 * expanded.len() as u32;
                        intermediate.extend(expanded.into_iter().map(|stmt| Expanded {
                            stmt,
                            path: path.clone(),
                            idx,
                        }));
                    }
                    Err(err) => {
                        err.print_diag(&files, path, idx);
                        errors += 1;
                    }
                }
            }
        }
    }
    println!("  - found #{} labels", symtbl.len());

    println!("2. Run Pass Two");

    let mut reltbl = SymbolTable::new(Mode::NonUnique);
    let mut words: Vec<u32> = Vec::new();

    for (i, rec) in intermediate.iter().enumerate() {
        let addr = 4 * i as u32;
        match pass2::translate_inst(&rec.stmt.name, &rec.stmt.args, addr, &symtbl, &mut reltbl) {
            Ok(bin) => words.push(bin),
            Err(err) => {
                err.print_diag(&files, &rec.path, rec.idx);
                errors += 1;
            }
        }
    }

    if args.dump {
        for (i, rec) in intermediate.iter().enumerate() {
            cprintln!("<green>{:04X}</> | {}", 4 * i, rec.stmt.cformat());
        }
    }

    if errors > 0 {
        cprintln!("<red,bold>{} error(s)</>: no output written", errors);
        std::process::exit(1);
    }

    println!("3. Write Object File");
    println!("  > {}", &args.output);

    let mut out = std::fs::File::create(&args.output)
        .expect(&cformat!("<r,s>Failed to create File</>: {}", &args.output));
    let write_err = cformat!("<r,s>Failed to write File</>: {}", &args.output);
    writeln!(out, ".text").expect(&write_err);
    for word in &words {
        writeln!(out, "{:08x}", word).expect(&write_err);
    }
    writeln!(out, ".symbol").expect(&write_err);
    symtbl.write_to(&mut out).expect(&write_err);
    writeln!(out, ".relocation").expect(&write_err);
    reltbl.write_to(&mut out).expect(&write_err);
}

use anyhow::{Context, Result};

use crate::parser::{parse_program, ParserLine, ProgramLine};
use crate::symbols::SymbolTable;

/// Everything pass two needs: the classified source plus a symbol
/// table already holding every label binding.
#[derive(Debug)]
pub struct PassOne {
    pub parsed_lines: Vec<ParserLine>,
    pub symbols: SymbolTable,
}

/// Walk the source once, binding each label to the address of the
/// next instruction. Labels, blanks, and comments don't consume an
/// address; only address and compute instructions advance the counter.
pub fn pass_one(program: &str) -> Result<PassOne> {
    let parsed_lines = parse_program(program).context("parsing")?;

    let mut symbols = SymbolTable::new();
    let mut instruction_counter: u16 = 0;

    for line in &parsed_lines {
        match &line.data {
            ProgramLine::Label(label) => {
                symbols
                    .define_label(&label.0, instruction_counter)
                    .with_context(|| format!("pass one, line {}", line.line_no))?;
            }
            ProgramLine::Address(_) | ProgramLine::Compute(_) => {
                instruction_counter += 1;
            }
            ProgramLine::Empty | ProgramLine::Comment(_) => {}
        }
    }

    Ok(PassOne {
        parsed_lines,
        symbols,
    })
}

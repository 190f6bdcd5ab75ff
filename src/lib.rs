use anyhow::Result;
use std::fmt::Write;
use thiserror::Error;

pub mod op;
pub mod parser;
pub mod pass_one;
pub mod pass_two;
pub mod symbols;
pub mod word;

/// Largest value an address instruction can carry. Bit 15 is the
/// instruction-class bit and never part of the magnitude.
pub const MAX_ADDRESS: u16 = 0x7F_FF;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum AssembleError {
    #[error("duplicate label {0}")]
    DuplicateLabel(String),
    #[error("unknown {field} mnemonic {text}")]
    UnresolvedMnemonic { field: &'static str, text: String },
    #[error("address {0} doesn't fit in 15 bits")]
    NumericOverflow(u32),
    #[error("couldn't classify line: {0}")]
    MalformedLine(String),
}

/// Assemble a Hack program from text.
///
/// # Errors
///
/// If there's an error in the assembly code
pub fn assemble_program(program_text: &str) -> Result<String> {
    let pass_one = pass_one::pass_one(program_text)?;

    let words = pass_two::pass_two(pass_one)?;

    let mut assembled = String::new();

    for word in words {
        writeln!(&mut assembled, "{}", word)?;
    }

    Ok(assembled)
}

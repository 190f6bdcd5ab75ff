use std::str::FromStr;

use anyhow::{Context, Result};

use crate::op::{Comp, Dest, Jump};
use crate::parser::{AddressValue, ComputeFields, ProgramLine};
use crate::pass_one::PassOne;
use crate::symbols::SymbolTable;
use crate::word::Word;
use crate::{AssembleError, MAX_ADDRESS};

/// Walk the classified lines again, now that every label is bound,
/// and emit one machine word per instruction in source order.
pub fn pass_two(pass_one: PassOne) -> Result<Vec<Word>> {
    let PassOne {
        parsed_lines,
        mut symbols,
    } = pass_one;

    let mut words = Vec::new();

    for line in &parsed_lines {
        let word = match &line.data {
            ProgramLine::Address(value) => encode_address(value, &mut symbols),
            ProgramLine::Compute(fields) => encode_compute(fields),
            ProgramLine::Empty | ProgramLine::Comment(_) | ProgramLine::Label(_) => continue,
        }
        .with_context(|| format!("pass two, line {}: {}", line.line_no, line.text.trim()))?;

        words.push(word);
    }

    Ok(words)
}

fn encode_address(value: &AddressValue, symbols: &mut SymbolTable) -> Result<Word, AssembleError> {
    let address = match value {
        AddressValue::Literal(n) => {
            if *n > u32::from(MAX_ADDRESS) {
                return Err(AssembleError::NumericOverflow(*n));
            }
            *n as u16
        }
        AddressValue::Symbol(label) => symbols.lookup_or_allocate(&label.0),
    };

    Ok(Word::address(address))
}

fn encode_compute(fields: &ComputeFields) -> Result<Word, AssembleError> {
    // An absent dest or jump field encodes like the explicit "0" form.
    let dest = lookup::<Dest>("dest", fields.dest.as_deref().unwrap_or("0"))?;
    let comp = lookup::<Comp>("comp", &fields.comp)?;
    let jump = lookup::<Jump>("jump", fields.jump.as_deref().unwrap_or("0"))?;

    Ok(Word::compute(dest, comp, jump))
}

fn lookup<T: FromStr>(field: &'static str, text: &str) -> Result<T, AssembleError> {
    T::from_str(text).map_err(|_| AssembleError::UnresolvedMnemonic {
        field,
        text: text.to_owned(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pass_one::pass_one;

    fn assemble_words(program: &str) -> Result<Vec<String>> {
        let words = pass_two(pass_one(program)?)?;

        Ok(words.iter().map(ToString::to_string).collect())
    }

    #[test]
    fn encodes_add_program() -> Result<()> {
        let program = "@2\nD=A\n@3\nD=D+A\n@0\nM=D";

        assert_eq!(
            assemble_words(program)?,
            vec![
                "0000000000000010",
                "1110110000010000",
                "0000000000000011",
                "1110000010010000",
                "0000000000000000",
                "1110001100001000",
            ]
        );

        Ok(())
    }

    #[test]
    fn forward_references_resolve() -> Result<()> {
        let program = "(LOOP)\n@LOOP\n0;JMP";
        assert_eq!(
            assemble_words(program)?,
            vec!["0000000000000000", "1110101010000111"]
        );

        // A label used before its definition encodes the same address
        // as one used after it.
        let program = "@END\n0;JMP\n(END)\n@END\n0;JMP";
        assert_eq!(
            assemble_words(program)?,
            vec![
                "0000000000000010",
                "1110101010000111",
                "0000000000000010",
                "1110101010000111",
            ]
        );

        Ok(())
    }

    #[test]
    fn variables_allocate_from_sixteen() -> Result<()> {
        let program = "@first\n@R7\n@second\n@1000\n@first";

        assert_eq!(
            assemble_words(program)?,
            vec![
                "0000000000010000",
                "0000000000000111",
                "0000000000010001",
                "0000001111101000",
                "0000000000010000",
            ]
        );

        Ok(())
    }

    #[test]
    fn labels_win_over_variable_allocation() -> Result<()> {
        // "counter" is a label here, so no variable slot is spent on it.
        let program = "@counter\n0;JMP\n(counter)\n@fresh";

        assert_eq!(
            assemble_words(program)?,
            vec![
                "0000000000000010",
                "1110101010000111",
                "0000000000010000",
            ]
        );

        Ok(())
    }

    #[test]
    fn address_literal_bounds() -> Result<()> {
        assert_eq!(assemble_words("@32767")?, vec!["0111111111111111"]);

        let err = assemble_words("@32768").unwrap_err();
        assert_eq!(
            err.downcast_ref::<AssembleError>(),
            Some(&AssembleError::NumericOverflow(32768))
        );

        Ok(())
    }

    #[test]
    fn unknown_mnemonics_are_fatal() {
        let err = assemble_words("D=B+1").unwrap_err();
        assert_eq!(
            err.downcast_ref::<AssembleError>(),
            Some(&AssembleError::UnresolvedMnemonic {
                field: "comp",
                text: "B+1".to_owned(),
            })
        );

        let err = assemble_words("Q=D").unwrap_err();
        assert!(matches!(
            err.downcast_ref::<AssembleError>(),
            Some(AssembleError::UnresolvedMnemonic { field: "dest", .. })
        ));

        let err = assemble_words("0;JMQ").unwrap_err();
        assert!(matches!(
            err.downcast_ref::<AssembleError>(),
            Some(AssembleError::UnresolvedMnemonic { field: "jump", .. })
        ));
    }

    #[test]
    fn every_dest_row_encodes() -> Result<()> {
        let cases = [
            ("0=1", "1110111111000000"),
            ("M=1", "1110111111001000"),
            ("D=1", "1110111111010000"),
            ("MD=1", "1110111111011000"),
            ("A=1", "1110111111100000"),
            ("AM=1", "1110111111101000"),
            ("AD=1", "1110111111110000"),
            ("AMD=1", "1110111111111000"),
        ];

        for (source, expected) in cases {
            assert_eq!(assemble_words(source)?, vec![expected], "{}", source);
        }

        Ok(())
    }

    #[test]
    fn every_jump_row_encodes() -> Result<()> {
        let cases = [
            ("D;0", "1110001100000000"),
            ("D;JGT", "1110001100000001"),
            ("D;JEQ", "1110001100000010"),
            ("D;JGE", "1110001100000011"),
            ("D;JLT", "1110001100000100"),
            ("D;JNE", "1110001100000101"),
            ("D;JLE", "1110001100000110"),
            ("D;JMP", "1110001100000111"),
        ];

        for (source, expected) in cases {
            assert_eq!(assemble_words(source)?, vec![expected], "{}", source);
        }

        Ok(())
    }
}

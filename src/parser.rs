use anyhow::{Context, Result};
use nom::{
    branch::alt,
    bytes::complete::{tag, take_till, take_until1, take_while1},
    character::complete::digit1,
    combinator::{all_consuming, map, map_res, opt, rest, verify},
    sequence::{delimited, preceded, terminated},
    IResult,
};

use crate::AssembleError;

#[derive(Debug, Eq, PartialEq, Clone)]
pub struct Label(pub String);

/// Operand of an address instruction, `@` already stripped.
#[derive(Debug, Eq, PartialEq, Clone)]
pub enum AddressValue {
    Literal(u32),
    Symbol(Label),
}

/// Raw field texts of a compute instruction. Table lookup happens in
/// pass two; the parser only splits at the `=` and `;` separators.
#[derive(Debug, Eq, PartialEq, Clone)]
pub struct ComputeFields {
    pub dest: Option<String>,
    pub comp: String,
    pub jump: Option<String>,
}

#[derive(Debug)]
pub struct Comment(pub String);

#[derive(Debug)]
pub enum ProgramLine {
    Empty,
    Comment(Comment),
    Label(Label),
    Address(AddressValue),
    Compute(ComputeFields),
}

#[derive(Debug)]
pub struct ParserLine {
    pub data: ProgramLine,
    pub text: String,
    pub line_no: usize,
}

fn is_symbol_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '$' | ':')
}

pub fn symbol(i: &str) -> IResult<&str, Label> {
    let (i, name) = verify(take_while1(is_symbol_char), |name: &str| {
        !name.starts_with(|c: char| c.is_ascii_digit())
    })(i)?;

    Ok((i, Label(name.into())))
}

fn label_definition(i: &str) -> IResult<&str, ProgramLine> {
    map(delimited(tag("("), symbol, tag(")")), ProgramLine::Label)(i)
}

fn address_instruction(i: &str) -> IResult<&str, ProgramLine> {
    // Note that order is important here - a symbol may not start with
    // a digit, so anything opening with one must be a decimal literal.
    let value = alt((
        map(map_res(digit1, |n: &str| n.parse::<u32>()), AddressValue::Literal),
        map(symbol, AddressValue::Symbol),
    ));

    map(preceded(tag("@"), value), ProgramLine::Address)(i)
}

fn compute_instruction(i: &str) -> IResult<&str, ProgramLine> {
    let (i, dest) = opt(terminated(take_until1("="), tag("=")))(i)?;
    let (i, comp) = take_till(|c| c == ';')(i)?;
    let (i, jump) = opt(preceded(tag(";"), rest))(i)?;

    Ok((
        i,
        ProgramLine::Compute(ComputeFields {
            dest: dest.map(str::to_owned),
            comp: comp.to_owned(),
            jump: jump.map(str::to_owned),
        }),
    ))
}

fn classify(code: &str) -> IResult<&str, ProgramLine> {
    match code.chars().next() {
        Some('(') => all_consuming(label_definition)(code),
        Some('@') => all_consuming(address_instruction)(code),
        _ => all_consuming(compute_instruction)(code),
    }
}

fn parse_line(raw: &str) -> Result<ProgramLine, AssembleError> {
    // Whitespace is insignificant everywhere inside a line, so drop it
    // all up front; classification then runs on the dense text.
    let dense: String = raw.chars().filter(|c| !c.is_whitespace()).collect();

    let code = match dense.find("//") {
        Some(0) => return Ok(ProgramLine::Comment(Comment(raw.trim().to_owned()))),
        Some(pos) => &dense[..pos],
        None => dense.as_str(),
    };

    if code.is_empty() {
        return Ok(ProgramLine::Empty);
    }

    let (_, line) =
        classify(code).map_err(|_| AssembleError::MalformedLine(raw.trim().to_owned()))?;

    Ok(line)
}

pub fn parse_program(program: &str) -> Result<Vec<ParserLine>> {
    program
        .lines()
        .enumerate()
        .map(|(num, text)| {
            let data = parse_line(text).with_context(|| format!("parsing line {}", num + 1))?;

            Ok(ParserLine {
                data,
                text: text.to_owned(),
                line_no: num + 1,
            })
        })
        .collect()
}

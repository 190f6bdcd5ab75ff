use anyhow::Result;
use hackasm::assemble_program;
use std::io::Read;
use std::{
    env,
    fs::{self, File},
    path::PathBuf,
};

fn main() -> Result<()> {
    let filename: String = env::args()
        .nth(1)
        .ok_or_else(|| anyhow::Error::msg("Need an input filename"))?;
    let output_name: String = env::args().nth(2).unwrap_or_else(|| {
        PathBuf::from(&filename)
            .with_extension("hack")
            .to_string_lossy()
            .into_owned()
    });

    let mut file = File::open(&filename)?;
    let mut program_text = String::new();
    file.read_to_string(&mut program_text)?;

    let assembled = assemble_program(&program_text)?;

    fs::write(output_name, assembled)?;

    Ok(())
}

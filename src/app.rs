use crate::extensions;
use crate::ruleset::Ruleset;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

/// Fixed input filename, resolved relative to the working directory.
pub const SOURCE_FILE: &str = "forbidden-extensions.txt";

#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("cannot read {path}: {source}")]
    SourceUnavailable { path: String, source: io::Error },
    #[error("failed to serialize ruleset: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("failed to write ruleset: {0}")]
    Io(#[from] io::Error),
}

pub fn run() -> Result<(), AppError> {
    let document = generate_from_file(Path::new(SOURCE_FILE))?;
    io::stdout().write_all(document.as_bytes())?;
    Ok(())
}

pub fn generate_from_file(path: &Path) -> Result<String, AppError> {
    let raw = fs::read_to_string(path).map_err(|source| AppError::SourceUnavailable {
        path: path.display().to_string(),
        source,
    })?;
    generate(&raw)
}

/// Turns a forbidden-extensions listing into the serialized ruleset.
/// Pure function of the input text.
pub fn generate(input: &str) -> Result<String, AppError> {
    let patterns = extensions::glob_patterns(input);
    let ruleset = Ruleset::block_file_patterns(patterns);
    Ok(serde_yaml::to_string(&ruleset)?)
}

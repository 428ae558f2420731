//! Run parameters

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Suffix appended to the input file name when no output path is given
pub const OUTPUT_SUFFIX: &str = ".html";

/// Input and output paths for a single conversion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Params {
    pub input: PathBuf,
    pub output: PathBuf,
}

impl Params {
    /// Resolve parameters from the command line.
    ///
    /// Without an explicit output, the page is written to the current
    /// directory as the input's file name plus `.html`.
    pub fn new(input: PathBuf, output: Option<PathBuf>) -> Result<Self> {
        let output = match output {
            Some(output) => output,
            None => derive_output(&input)?,
        };
        Ok(Self { input, output })
    }
}

fn derive_output(input: &Path) -> Result<PathBuf> {
    let name = input.file_name().ok_or_else(|| {
        Error::Usage(format!(
            "cannot derive an output name from {}",
            input.display()
        ))
    })?;

    let mut output = name.to_os_string();
    output.push(OUTPUT_SUFFIX);
    Ok(PathBuf::from(output))
}

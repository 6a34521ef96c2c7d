use anyhow::{Context, Result, bail};
use std::fs::File;
use std::io::{self, Read};

/// DeepL rejects request bodies over 128 KiB.
pub const MAX_INPUT_SIZE: usize = 128 * 1024;

/// Reads source text for the local `translate` command.
pub struct InputReader;

impl InputReader {
    /// Reads `file_path`, or stdin when no path is given.
    pub fn read(file_path: Option<&str>) -> Result<String> {
        match file_path {
            Some(path) => {
                let file =
                    File::open(path).with_context(|| format!("Failed to open file: {path}"))?;
                read_limited(file).with_context(|| format!("Failed to read file: {path}"))
            }
            None => read_limited(io::stdin().lock()).context("Failed to read from stdin"),
        }
    }
}

/// Reads at most one byte past [`MAX_INPUT_SIZE`] so oversized input is
/// detected without buffering all of it.
fn read_limited(reader: impl Read) -> Result<String> {
    let mut buffer = Vec::new();
    reader
        .take(MAX_INPUT_SIZE as u64 + 1)
        .read_to_end(&mut buffer)?;

    if buffer.len() > MAX_INPUT_SIZE {
        bail!(
            "Input exceeds maximum allowed size ({} KiB).",
            MAX_INPUT_SIZE / 1024
        );
    }

    String::from_utf8(buffer).context("Input is not valid UTF-8")
}

//! Acquisition of the raw JSON document.

use std::io::{self, IsTerminal, Read};

use crate::errors::{LocatorError, Result};

/// Reads the whole of standard input.
///
/// Fails with `NoInput` when stdin is an interactive terminal and with
/// `EmptyInput` when it holds only whitespace.
pub fn read_stdin() -> Result<String> {
    let stdin = io::stdin();
    let interactive = stdin.is_terminal();
    read_input(stdin.lock(), interactive)
}

/// Reads a complete input document from `reader`.
pub fn read_input<R: Read>(mut reader: R, interactive: bool) -> Result<String> {
    if interactive {
        return Err(LocatorError::NoInput);
    }

    let mut raw = String::new();
    reader.read_to_string(&mut raw)?;

    if raw.trim().is_empty() {
        return Err(LocatorError::EmptyInput);
    }

    tracing::debug!("Read {} bytes of input", raw.len());
    Ok(raw)
}

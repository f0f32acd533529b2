//! Line-based prompts used outside the raw-mode selection list.
//!
//! Prompts take their reader and writer as arguments; the binary passes
//! locked stdin and stdout.

use std::io::{BufRead, Write};

use dbshift_core::endpoints::{validate_url, Role};
use dbshift_core::error::{Error, Result};
use log::debug;

/// Prints `prompt` and reads one trimmed line, which may be empty.
///
/// # Errors
///
/// Returns an error if writing or reading fails, or if input has ended.
pub fn read_line_from(
    reader: &mut impl BufRead,
    writer: &mut impl Write,
    prompt: &str,
) -> Result<String> {
    write!(writer, "{prompt}")?;
    writer.flush()?;

    let mut input = String::new();
    if reader.read_line(&mut input)? == 0 {
        return Err(Error::Stdio(std::io::Error::new(
            std::io::ErrorKind::UnexpectedEof,
            "input closed",
        )));
    }

    Ok(input.trim().to_string())
}

/// Prompts until a non-empty value is given; empty input takes `default` if there is one.
///
/// # Errors
///
/// Returns an error if writing or reading fails, or if input has ended.
pub fn prompt_value_from(
    reader: &mut impl BufRead,
    writer: &mut impl Write,
    label: &str,
    default: Option<&str>,
) -> Result<String> {
    let prompt = match default {
        Some(default) => format!("{label} [{default}]: "),
        None => format!("{label}: "),
    };

    loop {
        let read_value = read_line_from(reader, writer, &prompt)?;

        if !read_value.is_empty() {
            return Ok(read_value);
        }

        if let Some(default) = default {
            return Ok(default.to_string());
        }

        // No input and no default - loop again
    }
}

/// Prompts for a connection URL until one valid for `role` is given.
///
/// # Errors
///
/// Returns an error if writing or reading fails, or if input has ended.
pub fn prompt_url_from(
    reader: &mut impl BufRead,
    writer: &mut impl Write,
    role: Role,
    default: Option<&str>,
) -> Result<String> {
    let label = format!("Enter the {role} database URL");

    loop {
        let value = prompt_value_from(reader, writer, &label, default)?;
        match validate_url(role, &value) {
            Ok(url) => return Ok(url),
            Err(e) => {
                debug!("Rejected {role} URL: {e}");
                writeln!(writer, "{e}")?;
            }
        }
    }
}

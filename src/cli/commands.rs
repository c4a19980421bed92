//! Subcommand definitions and their execution

use std::collections::HashMap;
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Subcommand;
use serde_json::{json, Value};

use super::output;
use crate::config::{Config, OutputFormat};
use crate::display::{filter_rows, format_file_size};
use crate::form::validate_form_with_messages;
use crate::input::sanitize_rut_input;
use crate::rut::Rut;
use crate::validation::validate_document;

/// Path argument meaning standard input
const STDIN_PATH: &str = "-";

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Validate one or more RUTs given on the command line
    Check {
        #[arg(required = true)]
        ruts: Vec<String>,
    },
    /// Validate a list with one RUT per line ('-' reads stdin)
    Lint { path: PathBuf },
    /// Print the full RUT for a 7 or 8 digit body
    CheckDigit { body: String },
    /// Strip characters that cannot be part of a RUT
    Sanitize {
        #[arg(allow_hyphen_values = true)]
        text: String,
    },
    /// Validate a JSON form submission against the configured fields
    Form { path: PathBuf },
    /// Format byte counts as human-readable sizes
    Size {
        #[arg(required = true)]
        bytes: Vec<u64>,
    },
    /// Print the rows of a table that contain QUERY, ignoring case
    Filter {
        query: String,
        /// Defaults to stdin
        path: Option<PathBuf>,
    },
}

/// Run `command`, writing results to `out`.
///
/// Returns `false` when the command found invalid input.
pub fn execute(command: &Command, config: &Config, out: &mut impl Write) -> Result<bool> {
    match command {
        Command::Check { ruts } => check(ruts, config.format, out),
        Command::Lint { path } => lint(&read_input(path)?, config.format, out),
        Command::CheckDigit { body } => check_digit(body, config.format, out),
        Command::Sanitize { text } => {
            let sanitized = sanitize_rut_input(text);
            match config.format {
                OutputFormat::Text => writeln!(out, "{}", sanitized)?,
                OutputFormat::Json => output::write_json(out, &json!({ "sanitized": sanitized }))?,
            }
            Ok(true)
        }
        Command::Form { path } => form(&read_input(path)?, config, out),
        Command::Size { bytes } => size(bytes, config.format, out),
        Command::Filter { query, path } => {
            let content = match path {
                Some(path) => read_input(path)?,
                None => read_input(Path::new(STDIN_PATH))?,
            };
            filter(&content, query, config.format, out)
        }
    }
}

fn check(ruts: &[String], format: OutputFormat, out: &mut impl Write) -> Result<bool> {
    let results: Vec<_> = ruts.iter().map(|input| (input, Rut::parse(input))).collect();
    let all_valid = results.iter().all(|(_, result)| result.is_ok());

    match format {
        OutputFormat::Text => {
            for (input, result) in &results {
                match result {
                    Ok(rut) => writeln!(out, "ok      {}", rut)?,
                    Err(err) => writeln!(out, "invalid {}: {}", input, err)?,
                }
            }
        }
        OutputFormat::Json => {
            let items: Vec<Value> = results
                .iter()
                .map(|(input, result)| match result {
                    Ok(rut) => json!({ "input": input, "valid": true, "rut": rut }),
                    Err(err) => json!({ "input": input, "valid": false, "error": err.to_string() }),
                })
                .collect();
            output::write_json(out, &Value::Array(items))?;
        }
    }

    Ok(all_valid)
}

fn lint(content: &str, format: OutputFormat, out: &mut impl Write) -> Result<bool> {
    let result = validate_document(content);

    match format {
        OutputFormat::Text => {
            for diagnostic in &result.diagnostics {
                writeln!(out, "{}", output::format_diagnostic(diagnostic))?;
            }
            writeln!(
                out,
                "{} valid, {} error(s), {} warning(s)",
                result.valid,
                result.error_count(),
                result.diagnostics.len() - result.error_count()
            )?;
        }
        OutputFormat::Json => output::write_json(out, &result)?,
    }

    Ok(result.is_valid())
}

fn check_digit(body: &str, format: OutputFormat, out: &mut impl Write) -> Result<bool> {
    let rut = match Rut::from_body(body) {
        Ok(rut) => rut,
        Err(err) => bail!("Cannot compute check digit for '{}': {}", body, err),
    };

    match format {
        OutputFormat::Text => writeln!(out, "{}", rut)?,
        OutputFormat::Json => output::write_json(
            out,
            &json!({ "body": rut.body(), "check_digit": rut.check_digit().to_string(), "rut": rut }),
        )?,
    }

    Ok(true)
}

fn form(content: &str, config: &Config, out: &mut impl Write) -> Result<bool> {
    let submission = parse_submission(content)?;
    let report = validate_form_with_messages(&config.form, &config.messages, &submission);

    match config.format {
        OutputFormat::Text => {
            if report.is_valid() {
                writeln!(out, "form is valid")?;
            }
            for error in &report.errors {
                writeln!(out, "{}", output::format_field_error(error))?;
            }
        }
        OutputFormat::Json => output::write_json(out, &output::form_report_json(&report))?,
    }

    Ok(report.is_valid())
}

fn size(bytes: &[u64], format: OutputFormat, out: &mut impl Write) -> Result<bool> {
    match format {
        OutputFormat::Text => {
            for &count in bytes {
                writeln!(out, "{}", format_file_size(count))?;
            }
        }
        OutputFormat::Json => {
            let items: Vec<Value> = bytes
                .iter()
                .map(|&count| json!({ "bytes": count, "display": format_file_size(count) }))
                .collect();
            output::write_json(out, &Value::Array(items))?;
        }
    }
    Ok(true)
}

fn filter(content: &str, query: &str, format: OutputFormat, out: &mut impl Write) -> Result<bool> {
    let rows: Vec<&str> = content.lines().collect();
    let matches = filter_rows(&rows, query);
    log::debug!("{} of {} rows match '{}'", matches.len(), rows.len(), query);

    match format {
        OutputFormat::Text => {
            for row in &matches {
                writeln!(out, "{}", row)?;
            }
        }
        OutputFormat::Json => output::write_json(out, &json!(matches))?,
    }
    Ok(true)
}

/// Turn a JSON object into field/value pairs.
///
/// Strings are kept as-is, `null` counts as a missing field and any other
/// value is rendered as JSON text.
pub fn parse_submission(content: &str) -> Result<HashMap<String, String>> {
    let value: Value =
        serde_json::from_str(content).context("Form submission is not valid JSON")?;
    let Value::Object(fields) = value else {
        bail!("Form submission must be a JSON object");
    };

    Ok(fields
        .into_iter()
        .filter_map(|(name, value)| match value {
            Value::Null => None,
            Value::String(s) => Some((name, s)),
            other => Some((name, other.to_string())),
        })
        .collect())
}

/// Read a whole file, or stdin for `-`
fn read_input(path: &Path) -> Result<String> {
    if path == Path::new(STDIN_PATH) {
        let mut content = String::new();
        io::stdin()
            .read_to_string(&mut content)
            .context("Failed to read stdin")?;
        return Ok(content);
    }

    fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

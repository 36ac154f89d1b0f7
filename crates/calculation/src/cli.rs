//! Core logic of the `calc` binary.
//!
//! The binary entry point only wires process arguments and standard streams
//! into [`execute`]; flag parsing, report building and output live here.

use crate::calc::Calculator;
use crate::error::CalcError;
use crate::evaluate::evaluate_postfix;
use crate::options::CalcOptions;
use serde::Serialize;
use std::io::{self, BufRead, Write};
use thiserror::Error;

pub const USAGE: &str =
    "Usage: calc [--json] [--strict-division] [--permissive] [--options JSON] [EXPR...]";

// ── Errors ────────────────────────────────────────────────────────────────

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Unknown flag: {0}")]
    UnknownFlag(String),

    #[error("--options requires a JSON argument")]
    MissingOptions,

    #[error("Invalid options: {0}")]
    InvalidOptions(#[from] serde_json::Error),

    #[error("{0}")]
    Io(#[from] io::Error),
}

// ── Arguments ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub struct CliArgs {
    pub options: CalcOptions,
    pub json: bool,
    /// Expression words joined with spaces; `None` means read stdin.
    pub expression: Option<String>,
}

/// Parses arguments (without the program name).
///
/// `--options` is applied first; `--strict-division` and `--permissive`
/// override it regardless of their position.
pub fn parse_args(args: &[String]) -> Result<CliArgs, CliError> {
    let mut options = CalcOptions::default();
    let mut strict_division = false;
    let mut permissive = false;
    let mut json = false;
    let mut words: Vec<&str> = Vec::new();

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--json" => json = true,
            "--strict-division" => strict_division = true,
            "--permissive" => permissive = true,
            "--options" => {
                i += 1;
                let doc = args.get(i).ok_or(CliError::MissingOptions)?;
                options = serde_json::from_str(doc)?;
            }
            flag if flag.starts_with("--") => {
                return Err(CliError::UnknownFlag(flag.to_string()));
            }
            word => words.push(word),
        }
        i += 1;
    }

    if strict_division {
        options = options.strict_division();
    }
    if permissive {
        options = options.permissive();
    }

    Ok(CliArgs {
        options,
        json,
        expression: if words.is_empty() {
            None
        } else {
            Some(words.join(" "))
        },
    })
}

// ── Reports ───────────────────────────────────────────────────────────────

/// Outcome of one expression, serialized as one JSON line by `--json`.
///
/// `postfix` is present whenever conversion succeeded, including when the
/// evaluation pass failed afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub expression: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postfix: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Report {
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

pub fn report(calculator: &Calculator, expression: &str) -> Report {
    let failed = |postfix: Option<String>, e: CalcError| Report {
        expression: expression.to_string(),
        postfix,
        result: None,
        error: Some(e.to_string()),
    };
    match calculator.postfix(expression) {
        Err(e) => failed(None, e),
        Ok(postfix) => match evaluate_postfix(&postfix, calculator.options()) {
            Ok(value) => Report {
                expression: expression.to_string(),
                postfix: Some(postfix),
                result: Some(value),
                error: None,
            },
            Err(e) => failed(Some(postfix), e),
        },
    }
}

// ── Output ────────────────────────────────────────────────────────────────

/// Evaluates one expression and writes its outcome. Plain results go to
/// `out`, plain errors to `err` as `Error: <message>`; with `json` every
/// report goes to `out`. Returns whether the expression succeeded.
pub fn run(
    calculator: &Calculator,
    expression: &str,
    json: bool,
    out: &mut impl Write,
    err: &mut impl Write,
) -> Result<bool, CliError> {
    let report = report(calculator, expression);
    if json {
        let line = serde_json::to_string(&report).map_err(io::Error::other)?;
        writeln!(out, "{line}")?;
    } else {
        match (&report.result, &report.error) {
            (Some(value), _) => writeln!(out, "{value}")?,
            (_, Some(e)) => writeln!(err, "Error: {e}")?,
            (None, None) => {}
        }
    }
    Ok(report.is_ok())
}

/// Evaluates every non-empty, trimmed line of `input`.
pub fn run_lines(
    calculator: &Calculator,
    input: impl BufRead,
    json: bool,
    out: &mut impl Write,
    err: &mut impl Write,
) -> Result<bool, CliError> {
    let mut all_ok = true;
    for line in input.lines() {
        let line = line?;
        let expression = line.trim();
        if expression.is_empty() {
            continue;
        }
        all_ok &= run(calculator, expression, json, out, err)?;
    }
    Ok(all_ok)
}

/// Runs the command line and returns the process exit status: `0` when every
/// expression evaluated, `1` otherwise or on a usage or I/O error.
pub fn execute(
    args: &[String],
    input: impl BufRead,
    out: &mut impl Write,
    err: &mut impl Write,
) -> i32 {
    let outcome = parse_args(args).and_then(|parsed| {
        log::debug!("options: {:?}", parsed.options);
        let calculator = Calculator::new(parsed.options);
        match &parsed.expression {
            Some(expression) => run(&calculator, expression, parsed.json, out, err),
            None => run_lines(&calculator, input, parsed.json, out, err),
        }
    });

    match outcome {
        Ok(true) => 0,
        Ok(false) => 1,
        Err(e) => {
            let _ = writeln!(err, "{e}");
            if matches!(e, CliError::UnknownFlag(_) | CliError::MissingOptions) {
                let _ = writeln!(err, "{USAGE}");
            }
            1
        }
    }
}

//! Evaluate expressions line by line

use std::io::{BufRead, Write};

use super::{to_report, CliError};
use crate::config::EvalConfig;
use crate::evaluator::Evaluator;
use crate::lexer::tokenize;
use crate::output::NumberPrinter;

/// Options shared by every CLI mode
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Evaluator configuration
    pub config: EvalConfig,
    /// Round results to this many decimal places
    pub precision: Option<u32>,
    /// Print one JSON object per line instead of plain text
    pub json: bool,
    /// Print the token sequence before each result
    pub show_tokens: bool,
}

impl RunOptions {
    /// Validates the configuration and builds an evaluator for it.
    pub fn evaluator(&self) -> Result<Evaluator, CliError> {
        self.config.validate()?;
        Ok(Evaluator::with_config(self.config))
    }
}

/// Evaluate one line and render what should be printed for it.
///
/// Evaluation errors are part of the rendered output, never an `Err`.
pub fn execute_line(
    evaluator: &mut Evaluator,
    line: &str,
    options: &RunOptions,
) -> Result<String, CliError> {
    let line = line.trim_end_matches(['\r', '\n']);
    let mut out = String::new();

    if options.show_tokens {
        match tokenize(line, options.config.sqrt_symbol) {
            Ok(tokens) => out.push_str(&format!(
                "tokens = {}\n",
                tokens.display_with(options.config.sqrt_symbol)
            )),
            Err(e) => out.push_str(&format!("tokens = <{}>\n", e)),
        }
    }

    let outcome = evaluator.evaluate(line);

    if options.json {
        let report = to_report(line, &outcome, options.precision);
        out.push_str(&serde_json::to_string(&report)?);
    } else {
        match outcome {
            Ok(value) => out.push_str(&NumberPrinter::new(options.precision).print(value)),
            Err(e) => out.push_str(e.kind().as_str()),
        }
    }

    Ok(out)
}

/// Evaluate every non-blank line of `reader` with one evaluator, so `a`
/// carries from line to line. Returns the number of lines evaluated.
///
/// When `prompt` is given, `> ` is written to it before each read.
pub fn run_lines<R: BufRead, W: Write>(
    evaluator: &mut Evaluator,
    reader: R,
    writer: &mut W,
    options: &RunOptions,
    mut prompt: Option<&mut dyn Write>,
) -> Result<usize, CliError> {
    let mut count = 0;
    let mut lines = reader.lines();

    loop {
        if let Some(p) = prompt.as_deref_mut() {
            write!(p, "> ")?;
            p.flush()?;
        }

        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        writeln!(writer, "{}", execute_line(evaluator, &line, options)?)?;
        count += 1;
    }

    Ok(count)
}

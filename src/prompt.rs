//! Operator interaction.
//!
//! All prompt rendering and input reading goes through the [`Console`] trait, so the
//! selection protocol can run against a real terminal or a scripted stand-in.

use crate::error::TypecatError;
use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

/// Capability interface for operator-visible output and line input.
pub trait Console {
    /// Writes a single line of output.
    fn say(&mut self, line: &str) -> io::Result<()>;
    /// Writes `prompt` without a trailing newline and reads one line of input,
    /// returned without its line terminator.
    fn ask(&mut self, prompt: &str) -> io::Result<String>;
}

/// [`Console`] bound to the process's stdin and stdout.
pub struct StdConsole;

impl Console for StdConsole {
    fn say(&mut self, line: &str) -> io::Result<()> {
        let mut out = io::stdout().lock();
        writeln!(out, "{line}")
    }
    fn ask(&mut self, prompt: &str) -> io::Result<String> {
        {
            let mut out = io::stdout().lock();
            write!(out, "{prompt}")?;
            out.flush()?;
        }
        let mut line = String::new();
        io::stdin().lock().read_line(&mut line)?;
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }
}

/// Scripted [`Console`] that replays queued input lines and records everything shown.
///
/// Exhausted input reads as an empty line.
#[derive(Default)]
pub struct ScriptedConsole {
    input: VecDeque<String>,
    pub transcript: Vec<String>,
}

impl ScriptedConsole {
    pub fn new<I, S>(input: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            input: input.into_iter().map(Into::into).collect(),
            transcript: Vec::new(),
        }
    }
}

impl Console for ScriptedConsole {
    fn say(&mut self, line: &str) -> io::Result<()> {
        self.transcript.push(line.to_string());
        Ok(())
    }
    fn ask(&mut self, prompt: &str) -> io::Result<String> {
        self.transcript.push(prompt.to_string());
        Ok(self.input.pop_front().unwrap_or_default())
    }
}

/// Presents `options` as a 1-based numbered list and collects the operator's choices.
///
/// The input line is split on commas; each token is trimmed and parsed as a 1-based
/// ordinal. Tokens that fail to parse or fall outside the list are reported and
/// skipped. Choices come back in token order and repeated ordinals are kept. A blank
/// line yields an empty selection.
pub fn select(
    console: &mut dyn Console,
    title: &str,
    options: &[String],
) -> Result<Vec<String>, TypecatError> {
    console.say(title)?;
    for (i, option) in options.iter().enumerate() {
        console.say(&format!("{}. {}", i + 1, option))?;
    }
    let line = console.ask("\nEnter the numbers of your selections (comma-separated): ")?;
    let mut selected = Vec::new();
    if line.trim().is_empty() {
        return Ok(selected);
    }
    for token in line.split(',') {
        match token.trim().parse::<usize>() {
            Ok(n) if n >= 1 && n <= options.len() => selected.push(options[n - 1].clone()),
            _ => console.say(&format!("Invalid selection: {token}"))?,
        }
    }
    Ok(selected)
}

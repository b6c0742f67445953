//! Line-oriented prompts over any reader/writer pair.
//!
//! An empty answer keeps the current value, so walking back through the
//! wizard never loses earlier answers.

use std::fmt::Display;
use std::io::{self, BufRead, Write};

use cw_core::Vocabulary;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PromptError {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),

    /// The input stream ended (Ctrl-D or end of a piped script).
    #[error("input closed")]
    InputClosed,
}

pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    pub fn say(&mut self, line: impl Display) -> Result<(), PromptError> {
        writeln!(self.output, "{line}")?;
        Ok(())
    }

    /// Print `label`, read one line and return it trimmed.
    pub fn ask(&mut self, label: &str) -> Result<String, PromptError> {
        write!(self.output, "{label} ")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(PromptError::InputClosed);
        }
        Ok(line.trim().to_string())
    }

    /// Pick one value of a vocabulary by number or by its model string.
    pub fn choose<V: Vocabulary>(
        &mut self,
        label: &str,
        options: &[V],
        current: Option<V>,
    ) -> Result<V, PromptError> {
        loop {
            self.say(format!("{label}:"))?;
            for (index, option) in options.iter().enumerate() {
                let marker = if Some(*option) == current { "*" } else { " " };
                self.say(format!(" {marker} {}) {}", index + 1, option.as_str()))?;
            }

            let hint = match current {
                Some(value) => format!("Choose 1-{} [{}]:", options.len(), value.as_str()),
                None => format!("Choose 1-{}:", options.len()),
            };
            let answer = self.ask(&hint)?;

            if answer.is_empty() {
                if let Some(value) = current {
                    return Ok(value);
                }
            } else if let Some(value) = pick(options, &answer) {
                return Ok(value);
            }
            self.say("Please pick one of the listed options.")?;
        }
    }

    pub fn confirm(&mut self, label: &str, current: bool) -> Result<bool, PromptError> {
        let hint = if current { "[Y/n]" } else { "[y/N]" };
        loop {
            let answer = self.ask(&format!("{label} {hint}"))?;
            match answer.to_ascii_lowercase().as_str() {
                "" => return Ok(current),
                "y" | "yes" => return Ok(true),
                "n" | "no" => return Ok(false),
                _ => self.say("Please answer y or n.")?,
            }
        }
    }

    /// Whole number in `0..=max`.
    pub fn number(&mut self, label: &str, current: u32, max: u32) -> Result<u32, PromptError> {
        loop {
            let answer = self.ask(&format!("{label} (0-{max}) [{current}]:"))?;
            if answer.is_empty() {
                return Ok(current);
            }
            match answer.parse::<u32>() {
                Ok(value) if value <= max => return Ok(value),
                _ => self.say(format!("Please enter a whole number from 0 to {max}."))?,
            }
        }
    }

    /// Free text; empty keeps `current`.
    pub fn text(&mut self, label: &str, current: &str) -> Result<String, PromptError> {
        let hint = if current.is_empty() {
            format!("{label}:")
        } else {
            format!("{label} [{current}]:")
        };
        let answer = self.ask(&hint)?;
        Ok(if answer.is_empty() {
            current.to_string()
        } else {
            answer
        })
    }
}

fn pick<V: Vocabulary>(options: &[V], answer: &str) -> Option<V> {
    if let Ok(number) = answer.parse::<usize>() {
        return number.checked_sub(1).and_then(|index| options.get(index)).copied();
    }
    options
        .iter()
        .copied()
        .find(|option| option.as_str().eq_ignore_ascii_case(answer))
}

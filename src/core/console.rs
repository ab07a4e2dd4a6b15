//! The line-based IO collaborator.
//!
//! Everything the players read goes through `Console::say`; every decision
//! they make comes back from `Console::ask` as one line of text.

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

use tracing::warn;

/// Answers that accept a purchase offer (compared case-insensitively).
pub const AFFIRMATIVE_ANSWERS: [&str; 4] = ["sim", "s", "yes", "y"];

/// Synchronous request/response channel to the players.
pub trait Console {
    /// Show one message.
    fn say(&mut self, text: &str);

    /// Show `prompt` and block until a line is read.
    ///
    /// Returns `None` once input is closed.
    fn ask(&mut self, prompt: &str) -> Option<String>;
}

impl<C: Console + ?Sized> Console for Box<C> {
    fn say(&mut self, text: &str) {
        (**self).say(text);
    }

    fn ask(&mut self, prompt: &str) -> Option<String> {
        (**self).ask(prompt)
    }
}

/// Does `answer` accept the offer? Anything unrecognised declines.
#[must_use]
pub fn is_affirmative(answer: &str) -> bool {
    let answer = answer.trim();
    AFFIRMATIVE_ANSWERS
        .iter()
        .any(|token| answer.eq_ignore_ascii_case(token))
}

/// Line console over a reader and a writer, stdin and stdout by default.
///
/// Lines that are not valid UTF-8 are decoded lossily rather than treated
/// as closed input. Only end of input (or a read failure) closes it.
#[derive(Debug)]
pub struct StdConsole<R = io::StdinLock<'static>, W = io::Stdout> {
    input: R,
    output: W,
}

impl StdConsole {
    /// Console over the process's stdin and stdout.
    #[must_use]
    pub fn new() -> Self {
        Self::with_io(io::stdin().lock(), io::stdout())
    }
}

impl Default for StdConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: BufRead, W: Write> StdConsole<R, W> {
    /// Console reading answers from `input` and writing to `output`.
    pub fn with_io(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Everything written so far goes here.
    #[must_use]
    pub fn output(&self) -> &W {
        &self.output
    }

    fn read_answer(&mut self) -> Option<String> {
        let mut buf = Vec::new();
        loop {
            match self.input.read_until(b'\n', &mut buf) {
                Ok(0) if buf.is_empty() => return None,
                Ok(_) => break,
                Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
                Err(err) => {
                    warn!(%err, "console input failed");
                    return None;
                }
            }
        }

        let line = String::from_utf8_lossy(&buf);
        Some(line.trim_end_matches(['\r', '\n']).to_string())
    }
}

impl<R: BufRead, W: Write> Console for StdConsole<R, W> {
    fn say(&mut self, text: &str) {
        if let Err(err) = writeln!(self.output, "{text}") {
            warn!(%err, "console output failed");
        }
    }

    fn ask(&mut self, prompt: &str) -> Option<String> {
        if let Err(err) = write!(self.output, "{prompt}").and_then(|()| self.output.flush()) {
            warn!(%err, "console output failed");
        }
        self.read_answer()
    }
}

/// Console that replays queued answers and records everything shown.
///
/// Once the queue is empty it keeps giving the fallback answer, if one was
/// set, or reports closed input.
#[derive(Clone, Debug, Default)]
pub struct ScriptedConsole {
    answers: VecDeque<String>,
    fallback: Option<String>,
    transcript: Vec<String>,
}

impl ScriptedConsole {
    /// Answer with `answers` in order, then report closed input.
    pub fn new<S: Into<String>>(answers: impl IntoIterator<Item = S>) -> Self {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            fallback: None,
            transcript: Vec::new(),
        }
    }

    /// Give the same answer to every prompt.
    pub fn always(answer: impl Into<String>) -> Self {
        Self::new(Vec::<String>::new()).with_fallback(answer)
    }

    /// Keep answering `answer` after the queue runs out.
    #[must_use]
    pub fn with_fallback(mut self, answer: impl Into<String>) -> Self {
        self.fallback = Some(answer.into());
        self
    }

    /// Every message and prompt shown so far, in order.
    #[must_use]
    pub fn transcript(&self) -> &[String] {
        &self.transcript
    }

    /// Does any recorded line contain `needle`?
    #[must_use]
    pub fn saw(&self, needle: &str) -> bool {
        self.transcript.iter().any(|line| line.contains(needle))
    }
}

impl Console for ScriptedConsole {
    fn say(&mut self, text: &str) {
        self.transcript.push(text.to_string());
    }

    fn ask(&mut self, prompt: &str) -> Option<String> {
        self.transcript.push(prompt.to_string());
        self.answers.pop_front().or_else(|| self.fallback.clone())
    }
}

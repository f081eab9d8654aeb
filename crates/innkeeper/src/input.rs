// SPDX-FileCopyrightText: 2026 Innkeeper Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Line-oriented console input.
//!
//! Interactive terminals get a `rustyline` editor with history; piped or
//! redirected stdin is read line by line so scripted sessions work too.

use std::io::{self, BufRead, IsTerminal, Write};

use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

/// A source of operator input, one prompted line at a time.
pub trait InputSource {
    /// Show `prompt` and read one line without its terminator.
    ///
    /// Returns `Ok(None)` at end of input or when the operator interrupts.
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>>;
}

/// Pick the input source for the current stdin.
pub fn stdin_source() -> io::Result<Box<dyn InputSource>> {
    if io::stdin().is_terminal() {
        Ok(Box::new(ReadlineInput::new()?))
    } else {
        Ok(Box::new(LineInput::new(io::stdin().lock(), io::stdout())))
    }
}

/// Readline editor for interactive terminals.
pub struct ReadlineInput {
    editor: DefaultEditor,
}

impl ReadlineInput {
    pub fn new() -> io::Result<Self> {
        let editor = DefaultEditor::new().map_err(|e| match e {
            ReadlineError::Io(e) => e,
            other => io::Error::other(format!("failed to initialize readline: {other}")),
        })?;
        Ok(Self { editor })
    }
}

impl InputSource for ReadlineInput {
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        match self.editor.readline(prompt) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    let _ = self.editor.add_history_entry(line.as_str());
                }
                Ok(Some(line))
            }
            // Ctrl+C / Ctrl+D
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => Ok(None),
            Err(ReadlineError::Io(e)) => Err(e),
            Err(e) => Err(io::Error::other(e.to_string())),
        }
    }
}

/// Plain buffered reader; prompts are written to `prompt_out`.
pub struct LineInput<R, W> {
    reader: R,
    prompt_out: W,
}

impl<R: BufRead, W: Write> LineInput<R, W> {
    pub fn new(reader: R, prompt_out: W) -> Self {
        Self { reader, prompt_out }
    }
}

impl<R: BufRead, W: Write> InputSource for LineInput<R, W> {
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.prompt_out, "{prompt}")?;
        self.prompt_out.flush()?;

        let mut bytes = Vec::new();
        if self.reader.read_until(b'\n', &mut bytes)? == 0 {
            return Ok(None);
        }
        if bytes.ends_with(b"\n") {
            bytes.pop();
            if bytes.ends_with(b"\r") {
                bytes.pop();
            }
        }
        // Undecodable bytes become U+FFFD and the entry is judged like any other.
        let line = String::from_utf8_lossy(&bytes).into_owned();
        Ok(Some(line))
    }
}

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

/// Synchronous line channel to the operator.
pub trait Console {
    /// Reads one line. `Ok(None)` signals end of input.
    fn read_line(&mut self) -> io::Result<Option<String>>;

    fn write(&mut self, text: &str) -> io::Result<()>;

    fn write_line(&mut self, text: &str) -> io::Result<()> {
        self.write(text)?;
        self.write("\n")
    }
}

/// One read from the operator, with undecodable lines kept apart from
/// hard I/O failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Line(String),
    /// The line was consumed but was not valid UTF-8.
    Unreadable,
    End,
}

pub fn read_input<C: Console + ?Sized>(console: &mut C) -> io::Result<Input> {
    match console.read_line() {
        Ok(Some(line)) => Ok(Input::Line(line)),
        Ok(None) => Ok(Input::End),
        Err(e) if e.kind() == io::ErrorKind::InvalidData => Ok(Input::Unreadable),
        Err(e) => Err(e),
    }
}

/// Console over the process stdin/stdout.
pub struct StdConsole {
    stdin: io::StdinLock<'static>,
    stdout: io::StdoutLock<'static>,
}

impl StdConsole {
    pub fn new() -> Self {
        Self {
            stdin: io::stdin().lock(),
            stdout: io::stdout().lock(),
        }
    }
}

impl Default for StdConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl Console for StdConsole {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        // read raw bytes so a bad line is consumed before it is rejected
        let mut buf = Vec::new();
        if self.stdin.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        String::from_utf8(buf)
            .map(Some)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    fn write(&mut self, text: &str) -> io::Result<()> {
        self.stdout.write_all(text.as_bytes())?;
        self.stdout.flush()
    }
}

/// Console fed from a fixed list of lines; everything written is kept in
/// `output`.
#[derive(Debug, Default, Clone)]
pub struct ScriptedConsole {
    lines: VecDeque<String>,
    pub output: String,
}

impl ScriptedConsole {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
            output: String::new(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.lines.len()
    }
}

impl Console for ScriptedConsole {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        Ok(self.lines.pop_front())
    }

    fn write(&mut self, text: &str) -> io::Result<()> {
        self.output.push_str(text);
        Ok(())
    }
}

//! Line-oriented console boundary used by the session

use std::io::{self, BufRead, Write};

/// Where the session prints messages and reads lines from
pub trait Console {
    /// Print one message followed by a newline
    fn print_message(&mut self, message: &str);

    /// Read the next line, or `None` when no line is available
    fn read_line(&mut self) -> Option<String>;

    /// True once the input source can never produce another line
    fn is_exhausted(&self) -> bool {
        false
    }
}

/// Console over any buffered reader and writer; stdin/stdout by default
#[derive(Debug)]
pub struct StdConsole<R = io::StdinLock<'static>, W = io::Stdout> {
    reader: R,
    writer: W,
    exhausted: bool,
}

impl StdConsole {
    /// Console bound to the process's stdin and stdout
    #[must_use]
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> StdConsole<R, W> {
    /// Wrap an arbitrary reader and writer
    pub const fn new(reader: R, writer: W) -> Self {
        Self {
            reader,
            writer,
            exhausted: false,
        }
    }

    /// Give back the writer (used to inspect captured output)
    pub fn into_writer(self) -> W {
        self.writer
    }
}

impl<R: BufRead, W: Write> Console for StdConsole<R, W> {
    fn print_message(&mut self, message: &str) {
        if let Err(e) = writeln!(self.writer, "{message}").and_then(|()| self.writer.flush()) {
            crate::error!("Failed to write to console: {e}");
        }
    }

    /// Bytes that are not UTF-8 are replaced, so such a line still arrives
    /// and fails validation like any other malformed line.
    fn read_line(&mut self) -> Option<String> {
        let mut line = Vec::new();
        match self.reader.read_until(b'\n', &mut line) {
            Ok(0) => {
                self.exhausted = true;
                None
            }
            Ok(_) => Some(String::from_utf8_lossy(&line).into_owned()),
            Err(e) => {
                crate::warn!("Failed to read from console: {e}");
                self.exhausted = true;
                None
            }
        }
    }

    fn is_exhausted(&self) -> bool {
        self.exhausted
    }
}

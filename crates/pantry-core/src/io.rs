//! Line-oriented I/O seam for the interactive flows.
//!
//! The planner and the prompt loops only ever need "one line in, one line
//! out", so that is the whole trait. The CLI binds it to stdin/stdout;
//! tests bind it to scripted input.

use std::io;

/// One-line-at-a-time console abstraction.
pub trait LineIo {
    /// Read the next line of user input, without the trailing newline.
    ///
    /// Blocks until a line is available; there is no timeout.
    fn read_line(&mut self) -> io::Result<String>;

    /// Write one line of output, newline-terminated.
    fn write_line(&mut self, line: &str) -> io::Result<()>;
}

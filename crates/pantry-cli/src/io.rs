//! Stdin/stdout binding for the [`LineIo`] seam.

use std::io::{self, BufRead, Write};

use pantry_core::LineIo;

/// Console I/O over locked stdin/stdout.
pub struct StdinLineIo;

impl LineIo for StdinLineIo {
    fn read_line(&mut self) -> io::Result<String> {
        let mut buf = String::new();
        let bytes = io::stdin().lock().read_line(&mut buf)?;
        if bytes == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed",
            ));
        }
        while buf.ends_with('\n') || buf.ends_with('\r') {
            buf.pop();
        }
        Ok(buf)
    }

    fn write_line(&mut self, line: &str) -> io::Result<()> {
        let mut out = io::stdout().lock();
        writeln!(out, "{line}")?;
        out.flush()
    }
}

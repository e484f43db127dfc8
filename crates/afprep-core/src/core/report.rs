//! Plain-text sequence report produced by the extraction pipeline.
//!
//! The report is written in a single forward pass: a header line per source
//! file, one line per non-empty chain, a blank separator line after each file
//! block, and an error-marker block for files that failed to parse. No line
//! is revisited after being written.

use std::fmt::Display;
use std::io::{self, Write};

pub struct SequenceReport<W: Write> {
    writer: W,
}

impl<W: Write> SequenceReport<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Starts a file block: `--- Sequences from {filename} ---`.
    pub fn write_header(&mut self, filename: &str) -> io::Result<()> {
        writeln!(self.writer, "--- Sequences from {} ---", filename)
    }

    /// Writes one chain line: `Filename: {filename}, Chain {id}: {sequence}`.
    pub fn write_chain(&mut self, filename: &str, chain_id: char, sequence: &str) -> io::Result<()> {
        writeln!(
            self.writer,
            "Filename: {}, Chain {}: {}",
            filename, chain_id, sequence
        )
    }

    /// Closes a file block with the blank separator line.
    pub fn write_separator(&mut self) -> io::Result<()> {
        writeln!(self.writer)
    }

    /// Writes the error-marker block for a file that failed to parse.
    pub fn write_error(&mut self, filename: &str, error: impl Display) -> io::Result<()> {
        writeln!(self.writer, "--- Error processing {}: {} ---", filename, error)?;
        writeln!(self.writer)
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}

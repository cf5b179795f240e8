//! Output handling for PRN

use std::io::{self, Write};

use ls8_spec::Word;

/// Destination for values printed by the machine
pub trait Output {
    fn write(&mut self, value: Word) -> io::Result<()>;
}

impl<T: Output + ?Sized> Output for &mut T {
    fn write(&mut self, value: Word) -> io::Result<()> {
        (**self).write(value)
    }
}

/// Collects printed values in memory
#[derive(Debug, Clone, Default)]
pub struct IOHandler {
    outputs: Vec<Word>,
}

impl IOHandler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn outputs(&self) -> &[Word] {
        &self.outputs
    }

    pub fn take_outputs(&mut self) -> Vec<Word> {
        std::mem::take(&mut self.outputs)
    }
}

impl Output for IOHandler {
    fn write(&mut self, value: Word) -> io::Result<()> {
        self.outputs.push(value);
        Ok(())
    }
}

/// Writes each value as a decimal line, e.g. to stdout
#[derive(Debug)]
pub struct LineWriter<W: Write> {
    inner: W,
}

impl<W: Write> LineWriter<W> {
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: Write> Output for LineWriter<W> {
    fn write(&mut self, value: Word) -> io::Result<()> {
        writeln!(self.inner, "{}", value)
    }
}

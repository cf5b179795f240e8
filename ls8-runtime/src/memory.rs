//! Memory subsystem
//!
//! 256 flat bytes addressed by `u8`, so every read and write through an
//! [`Address`] is in range. Code and stack share the same array.

use ls8_spec::{Address, Word, MEMORY_SIZE};

use crate::error::{Result, RuntimeError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Memory {
    data: [Word; MEMORY_SIZE],
}

impl Memory {
    pub fn new() -> Self {
        Memory {
            data: [0; MEMORY_SIZE],
        }
    }

    #[inline]
    pub fn read(&self, addr: Address) -> Word {
        self.data[addr as usize]
    }

    #[inline]
    pub fn write(&mut self, addr: Address, value: Word) {
        self.data[addr as usize] = value;
    }

    /// Read by wide index; `None` past the end of memory
    #[inline]
    pub fn get(&self, index: usize) -> Option<Word> {
        self.data.get(index).copied()
    }

    /// Copy `bytes` to address 0 onward
    ///
    /// Oversized images are rejected before any byte is written.
    pub fn load(&mut self, bytes: &[u8]) -> Result<()> {
        if bytes.len() > MEMORY_SIZE {
            return Err(RuntimeError::LoadOverflow {
                size: bytes.len(),
                capacity: MEMORY_SIZE,
            });
        }
        self.data[..bytes.len()].copy_from_slice(bytes);
        Ok(())
    }

    pub fn as_slice(&self) -> &[Word] {
        &self.data
    }
}

impl Default for Memory {
    fn default() -> Self {
        Self::new()
    }
}

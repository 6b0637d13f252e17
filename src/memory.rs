use crate::error::SimError;

/// the number of addressable words, addresses are 16 bits wide.
pub const MAX_MEMORY: usize = 65536;

/// word-addressed memory of signed 32-bit integers.
///
/// The populated length is fixed when the program is loaded. Addresses past it but
/// still inside `MAX_MEMORY` read as zero, and storing to them grows the backing
/// vector without changing the populated length.
#[derive(Debug, PartialEq, Eq, Clone, Default)]
pub struct Memory {
    words: Vec<i32>,
    populated: usize,
}

impl Memory {
    pub fn load(words: Vec<i32>) -> Result<Self, SimError> {
        if words.len() > MAX_MEMORY {
            return Err(SimError::CapacityExceeded { words: words.len() });
        }
        Ok(Self {
            populated: words.len(),
            words,
        })
    }

    /// the number of words the program was loaded with (`numMemory`).
    #[must_use]
    pub fn len(&self) -> usize {
        self.populated
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.populated == 0
    }

    /// the loaded region of memory.
    pub fn populated(&self) -> &[i32] {
        &self.words[..self.populated]
    }

    fn index(address: i32) -> Result<usize, SimError> {
        usize::try_from(address)
            .ok()
            .filter(|&index| index < MAX_MEMORY)
            .ok_or(SimError::AddressOutOfRange { address })
    }

    pub fn read(&self, address: i32) -> Result<i32, SimError> {
        let index = Self::index(address)?;
        Ok(self.words.get(index).copied().unwrap_or(0))
    }

    pub fn write(&mut self, address: i32, value: i32) -> Result<(), SimError> {
        let index = Self::index(address)?;
        if index >= self.words.len() {
            self.words.resize(index + 1, 0);
        }
        self.words[index] = value;
        log::debug!("memory {address} is modified to {value}");
        Ok(())
    }
}

//! Reproducible puzzle seeds.

use std::{
    error::Error,
    fmt::{self, Display},
    str::FromStr,
};

use rand::{Rng as _, SeedableRng as _};
use rand_pcg::Pcg64;
use sha2::{Digest as _, Sha256};

/// A 32-byte seed identifying one generated puzzle.
///
/// Seeds print and parse as 64 lowercase hexadecimal characters, so a puzzle
/// can be shared or re-generated exactly by quoting its seed. The generator
/// PRNG is keyed by the SHA-256 of the seed bytes, so even structured seeds
/// (all zeros, counters) produce well-mixed state.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct PuzzleSeed([u8; 32]);

impl PuzzleSeed {
    /// Draws a fresh random seed from the thread RNG.
    #[must_use]
    pub fn random() -> Self {
        let mut bytes = [0; 32];
        rand::rng().fill_bytes(&mut bytes);
        Self(bytes)
    }

    /// Creates a seed from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Returns the raw seed bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Builds the deterministic PRNG this seed keys.
    pub(crate) fn rng(&self) -> Pcg64 {
        Pcg64::from_seed(Sha256::digest(self.0).into())
    }
}

impl Display for PuzzleSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for PuzzleSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PuzzleSeed({self})")
    }
}

/// Error returned when a seed string is not 64 hexadecimal characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseSeedError(());

impl Display for ParseSeedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("seed must be 64 hexadecimal characters")
    }
}

impl Error for ParseSeedError {}

impl FromStr for PuzzleSeed {
    type Err = ParseSeedError;

    fn from_str(s: &str) -> Result<Self, ParseSeedError> {
        fn hex_value(byte: u8) -> Option<u8> {
            match byte {
                b'0'..=b'9' => Some(byte - b'0'),
                b'a'..=b'f' => Some(byte - b'a' + 10),
                b'A'..=b'F' => Some(byte - b'A' + 10),
                _ => None,
            }
        }

        if s.len() != 64 {
            return Err(ParseSeedError(()));
        }
        let mut bytes = [0; 32];
        for (slot, pair) in bytes.iter_mut().zip(s.as_bytes().chunks_exact(2)) {
            let high = hex_value(pair[0]).ok_or(ParseSeedError(()))?;
            let low = hex_value(pair[1]).ok_or(ParseSeedError(()))?;
            *slot = high << 4 | low;
        }
        Ok(Self(bytes))
    }
}

//! Generic `Arbitrary` value generator for cairn tests.

use arbitrary::{Arbitrary, Unstructured};
use rand_core::{OsRng, RngCore};

/// Default entropy buffer size.  Milestone types are small, so this leaves
/// plenty of headroom for nested collections.
const ARB_GEN_LEN: usize = 16_384;

/// Generates structured random values by feeding OS entropy through
/// [`Arbitrary`].
#[derive(Debug)]
pub struct ArbitraryGenerator {
    buf: Vec<u8>,
}

impl Default for ArbitraryGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl ArbitraryGenerator {
    pub fn new() -> Self {
        Self::new_with_size(ARB_GEN_LEN)
    }

    pub fn new_with_size(s: usize) -> Self {
        Self { buf: vec![0u8; s] }
    }

    /// Generates an arbitrary instance of type `T`, retrying with fresh
    /// entropy if the buffer turns out to be insufficient.
    ///
    /// # Panics
    ///
    /// If generation keeps failing, which for our types means the buffer is
    /// simply too small.
    pub fn generate<T>(&mut self) -> T
    where
        T: for<'a> Arbitrary<'a>,
    {
        const MAX_ATTEMPTS: usize = 16;
        let mut last_error = None;

        for _ in 0..MAX_ATTEMPTS {
            OsRng.fill_bytes(&mut self.buf);
            let mut u = Unstructured::new(&self.buf);
            match T::arbitrary(&mut u) {
                Ok(value) => return value,
                Err(err) => last_error = Some(err),
            }
        }

        let error_msg = last_error
            .map(|err| err.to_string())
            .unwrap_or_else(|| "unknown error".to_string());
        panic!("Failed to generate arbitrary instance: {error_msg}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_primitives() {
        let mut ag = ArbitraryGenerator::new();
        let _: u64 = ag.generate();
        let _: Vec<u8> = ag.generate();
        let _: String = ag.generate();
    }
}

//! Fixed-size byte buffer types used for addresses and root hashes.

use std::fmt;

use arbitrary::Arbitrary;
use borsh::{BorshDeserialize, BorshSerialize};
use serde::{Deserialize, Serialize};

macro_rules! impl_buf {
    ($name:ident, $len:expr, $doc:expr) => {
        #[doc = $doc]
        #[derive(
            Copy,
            Clone,
            Default,
            Eq,
            PartialEq,
            Ord,
            PartialOrd,
            Hash,
            Arbitrary,
            BorshDeserialize,
            BorshSerialize,
            Deserialize,
            Serialize,
        )]
        pub struct $name([u8; $len]);

        impl $name {
            pub const LEN: usize = $len;

            pub const fn new(data: [u8; $len]) -> Self {
                Self(data)
            }

            pub const fn zero() -> Self {
                Self([0; $len])
            }

            pub fn is_zero(&self) -> bool {
                self.0.iter().all(|b| *b == 0)
            }

            pub fn as_slice(&self) -> &[u8] {
                &self.0
            }
        }

        impl AsRef<[u8; $len]> for $name {
            fn as_ref(&self) -> &[u8; $len] {
                &self.0
            }
        }

        impl From<[u8; $len]> for $name {
            fn from(data: [u8; $len]) -> Self {
                Self(data)
            }
        }

        impl From<$name> for [u8; $len] {
            fn from(buf: $name) -> Self {
                buf.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&hex::encode(self.0))
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!(stringify!($name), "({})"), self)
            }
        }
    };
}

impl_buf!(Buf20, 20, "20-byte buffer, used for validator addresses.");
impl_buf!(Buf32, 32, "32-byte buffer, used for root hashes.");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero() {
        assert!(Buf32::zero().is_zero());
        assert!(!Buf20::new([1; 20]).is_zero());
    }

    #[test]
    fn test_display_hex() {
        let mut data = [0; 20];
        data[0] = 0xab;
        data[19] = 0x01;
        let buf = Buf20::new(data);
        let s = buf.to_string();
        assert!(s.starts_with("ab"));
        assert!(s.ends_with("01"));
        assert_eq!(s.len(), 40);
    }
}

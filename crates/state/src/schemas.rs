//! Key schema for milestone state.
//!
//! Every namespace gets its own tag byte, and numbered keys append the
//! fixed-width big-endian sequence number.  This makes keys injective by
//! construction: keys from different namespaces differ in the first byte, and
//! within the milestone namespace two keys are equal only if the numbers are.
//! (The obvious alternative of appending the decimal string aliases across
//! numeric boundaries, so we don't do that.)  Big-endian keeps numbered keys
//! ordered in an ordered store.

use cairn_db::{DbError, DbResult};

/// Tag for numbered milestone entries.
const MILESTONE_TAG: u8 = 0x20;

/// Key holding the ledger sequence counter.
pub(crate) const COUNT_KEY: [u8; 1] = [0x30];

/// Tag for per-id no-ack markers.
const NO_ACK_TAG: u8 = 0x40;

/// Key holding the most recent no-ack milestone id.
pub(crate) const LAST_NO_ACK_KEY: [u8; 1] = [0x50];

/// Key holding the last milestone timeout timestamp.
pub(crate) const LAST_TIMEOUT_KEY: [u8; 1] = [0x60];

/// Tag for the processed-milestone-id registry.
const MILESTONE_ID_TAG: u8 = 0x70;

/// Derives the store key for the numbered milestone entry.
pub fn milestone_key(number: u64) -> [u8; 9] {
    let mut key = [0u8; 9];
    key[0] = MILESTONE_TAG;
    key[1..].copy_from_slice(&number.to_be_bytes());
    key
}

/// Derives the store key for a milestone id's no-ack marker.
pub fn no_ack_key(id: &str) -> Vec<u8> {
    tagged_id_key(NO_ACK_TAG, id)
}

/// Derives the store key for a milestone id's registry entry.
pub fn milestone_id_key(id: &str) -> Vec<u8> {
    tagged_id_key(MILESTONE_ID_TAG, id)
}

fn tagged_id_key(tag: u8, id: &str) -> Vec<u8> {
    let mut key = Vec::with_capacity(1 + id.len());
    key.push(tag);
    key.extend_from_slice(id.as_bytes());
    key
}

/// Encodes a stored scalar.
pub(crate) fn encode_u64(value: u64) -> Vec<u8> {
    value.to_be_bytes().to_vec()
}

/// Decodes a stored scalar, failing on anything that isn't exactly 8 bytes.
pub(crate) fn decode_u64(raw: &[u8]) -> DbResult<u64> {
    let arr: [u8; 8] = raw
        .try_into()
        .map_err(|_| DbError::Codec(format!("bad u64 scalar, len {}", raw.len())))?;
    Ok(u64::from_be_bytes(arr))
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_milestone_key_layout() {
        let key = milestone_key(1);
        assert_eq!(key.len(), 9);
        assert_eq!(key[0], MILESTONE_TAG);
        assert_eq!(&key[1..], &1u64.to_be_bytes());
    }

    #[test]
    fn test_namespaces_disjoint() {
        // The id-keyed namespaces take arbitrary suffixes, so the tag byte is
        // what keeps them apart from each other and from numbered keys.
        let tags = [
            milestone_key(42)[0],
            COUNT_KEY[0],
            no_ack_key("42")[0],
            LAST_NO_ACK_KEY[0],
            LAST_TIMEOUT_KEY[0],
            milestone_id_key("42")[0],
        ];
        for (i, a) in tags.iter().enumerate() {
            for b in &tags[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_scalar_roundtrip() {
        for v in [0u64, 1, u64::MAX] {
            assert_eq!(decode_u64(&encode_u64(v)).expect("test: decode"), v);
        }
        assert!(decode_u64(&[0; 7]).is_err());
    }

    proptest! {
        #[test]
        fn prop_milestone_key_injective(a: u64, b: u64) {
            if milestone_key(a) == milestone_key(b) {
                prop_assert_eq!(a, b);
            }
        }

        #[test]
        fn prop_id_keys_injective(a in "[a-z0-9-]{0,32}", b in "[a-z0-9-]{0,32}") {
            if no_ack_key(&a) == no_ack_key(&b) {
                prop_assert_eq!(&a, &b);
            }
            if milestone_id_key(&a) == milestone_id_key(&b) {
                prop_assert_eq!(&a, &b);
            }
        }
    }
}

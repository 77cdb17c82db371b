//! Compact comma-separated serialization for [`IndexedBinaryTree`].
//!
//! The wire form is a single token stream: each token is either a value
//! rendered through `Display` or the literal word `null` for a vacant slot.
//! Trailing vacant slots are trimmed on encode, so the empty tree reads as
//! the empty string. The format carries no length prefix or checksum; it
//! assumes a cooperative producer, and the decoder rejects anything it
//! cannot parse rather than guessing.

use std::fmt::Display;
use std::str::FromStr;

use thiserror::Error;

use crate::binary_tree::IndexedBinaryTree;

/// Token standing in for a vacant slot.
pub const VACANT_TOKEN: &str = "null";

/// Decode failure: explicit rejection of malformed input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// A token that is neither `null` nor parseable as a value. Empty tokens
    /// (from doubled or trailing commas) fail the same way.
    #[error("invalid token {token:?} at position {index}")]
    InvalidToken { token: String, index: usize },
}

/// Serialize a tree, trimming any suffix of vacant slots.
pub fn encode<V: Display>(tree: &IndexedBinaryTree<V>) -> String {
    let slots = tree.slots();
    let keep = slots
        .iter()
        .rposition(|slot| slot.is_some())
        .map_or(0, |i| i + 1);
    let mut out = String::new();
    for (i, slot) in slots[..keep].iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        match slot {
            Some(value) => out.push_str(&value.to_string()),
            None => out.push_str(VACANT_TOKEN),
        }
    }
    out
}

/// Parse a token stream back into a tree. The empty string decodes to the
/// empty tree; `null` tokens become vacant slots; anything else must parse
/// as `V` or the whole decode fails.
pub fn decode<V: FromStr>(data: &str) -> Result<IndexedBinaryTree<V>, DecodeError> {
    if data.is_empty() {
        return Ok(IndexedBinaryTree::new());
    }
    let mut slots = Vec::new();
    for (index, token) in data.split(',').enumerate() {
        if token == VACANT_TOKEN {
            slots.push(None);
            continue;
        }
        match token.parse::<V>() {
            Ok(value) => slots.push(Some(value)),
            Err(_) => {
                return Err(DecodeError::InvalidToken {
                    token: token.to_string(),
                    index,
                })
            }
        }
    }
    Ok(IndexedBinaryTree::from_slots(slots))
}

#[cfg(test)]
mod tests {
    use crate::binary_tree::IndexedBinaryTree;
    use crate::codec::{decode, encode, DecodeError};

    #[test]
    fn test_round_trip_with_gap() {
        let tree = IndexedBinaryTree::from_slots(vec![
            Some(10i64),
            Some(5),
            Some(15),
            Some(3),
            Some(7),
            None,
            Some(20),
        ]);
        let encoded = encode(&tree);
        assert_eq!(encoded, "10,5,15,3,7,null,20");
        let decoded: IndexedBinaryTree<i64> = decode(&encoded).unwrap();
        assert_eq!(decoded, tree);
        assert_eq!(decoded.get(5), None);
    }

    #[test]
    fn test_trailing_vacant_slots_are_trimmed() {
        let tree =
            IndexedBinaryTree::from_slots(vec![Some(1i64), None, Some(3), None, None]);
        assert_eq!(encode(&tree), "1,null,3");

        let all_vacant = IndexedBinaryTree::<i64>::from_slots(vec![None, None]);
        assert_eq!(encode(&all_vacant), "");
    }

    #[test]
    fn test_empty_round_trip() {
        let empty = IndexedBinaryTree::<i64>::new();
        assert_eq!(encode(&empty), "");
        let decoded: IndexedBinaryTree<i64> = decode("").unwrap();
        assert!(decoded.is_empty());
    }

    #[test]
    fn test_negative_values() {
        let tree = IndexedBinaryTree::from_values([-1i64, -2, 3]);
        let encoded = encode(&tree);
        assert_eq!(encoded, "-1,-2,3");
        let decoded: IndexedBinaryTree<i64> = decode(&encoded).unwrap();
        assert_eq!(decoded, tree);
    }

    #[test]
    fn test_malformed_tokens_are_rejected() {
        let err = decode::<i64>("1,abc,3").unwrap_err();
        assert_eq!(
            err,
            DecodeError::InvalidToken {
                token: "abc".to_string(),
                index: 1,
            }
        );

        // Doubled and trailing commas produce empty tokens, which are not
        // valid integers.
        assert!(decode::<i64>("1,,3").is_err());
        assert!(decode::<i64>("1,2,").is_err());
        assert!(decode::<i64>(",").is_err());
    }
}

//! Flat prefix tree (trie) keyed by prefix strings.
//!
//! Rather than a linked node graph, [`PrefixIndex`] maps every prefix of
//! every inserted word to the set of characters that can extend it, plus a
//! terminal flag marking complete words. The layout makes prefix expansion a
//! plain map walk and keeps depth-first collection iterative.

use std::collections::{BTreeSet, HashMap};

/// Continuations and word-end marker for one prefix.
#[derive(Debug, Clone, Default)]
struct PrefixEntry {
    /// Characters that extend this prefix, kept sorted for deterministic
    /// traversal order.
    next: BTreeSet<char>,
    terminal: bool,
}

/// A trie mapping prefix strings to their single-character continuations.
///
/// Invariant: whenever a prefix `p + c` has an entry, `p` has one too and
/// records `c` as a continuation. The terminal flag is set only on the entry
/// whose key is a complete inserted word.
///
/// # Examples
///
/// ```rust
/// use flattree::PrefixIndex;
///
/// let mut trie = PrefixIndex::new();
/// trie.insert("cat");
/// trie.insert("car");
/// trie.insert("dog");
///
/// assert!(trie.contains("cat"));
/// assert!(!trie.contains("ca"));
///
/// let mut words = trie.prefix_search("ca");
/// words.sort();
/// assert_eq!(words, vec!["car", "cat"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct PrefixIndex {
    entries: HashMap<String, PrefixEntry>,
    words: usize,
}

impl PrefixIndex {
    /// Create an empty trie.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of distinct words inserted.
    pub fn len(&self) -> usize {
        self.words
    }

    /// True when no word has been inserted.
    pub fn is_empty(&self) -> bool {
        self.words == 0
    }

    /// Insert a word, materializing an entry for every prefix along the way
    /// and marking the full word terminal. Re-inserting a word is a no-op.
    /// The empty string is a valid word; it marks the root entry terminal.
    pub fn insert(&mut self, word: &str) {
        let mut prefix = String::new();
        for ch in word.chars() {
            self.entries
                .entry(prefix.clone())
                .or_default()
                .next
                .insert(ch);
            prefix.push(ch);
        }
        let entry = self.entries.entry(prefix).or_default();
        if !entry.terminal {
            entry.terminal = true;
            self.words += 1;
        }
    }

    /// Exact-word membership: the whole prefix chain must exist and the final
    /// entry must be terminal.
    pub fn contains(&self, word: &str) -> bool {
        let Some(entry) = self.walk(word) else {
            return false;
        };
        entry.terminal
    }

    /// All inserted words starting with `prefix`, collected by iterative
    /// depth-first traversal over the continuation sets. An unknown prefix
    /// yields an empty vector. Output order is the stack's depth-first order
    /// over sorted continuations, deterministic but not lexicographic.
    pub fn prefix_search(&self, prefix: &str) -> Vec<String> {
        if self.walk(prefix).is_none() {
            return Vec::new();
        }
        let mut words = Vec::new();
        let mut stack = vec![prefix.to_string()];
        while let Some(current) = stack.pop() {
            let Some(entry) = self.entries.get(&current) else {
                continue;
            };
            if entry.terminal {
                words.push(current.clone());
            }
            for &ch in &entry.next {
                let mut extended = current.clone();
                extended.push(ch);
                stack.push(extended);
            }
        }
        words
    }

    /// Follow the continuation chain for `text`, returning its entry when the
    /// whole chain exists.
    fn walk(&self, text: &str) -> Option<&PrefixEntry> {
        let mut prefix = String::new();
        for ch in text.chars() {
            let entry = self.entries.get(&prefix)?;
            if !entry.next.contains(&ch) {
                return None;
            }
            prefix.push(ch);
        }
        self.entries.get(&prefix)
    }
}

#[cfg(test)]
mod tests {
    use crate::trie::PrefixIndex;

    fn sample() -> PrefixIndex {
        let mut trie = PrefixIndex::new();
        trie.insert("cat");
        trie.insert("car");
        trie.insert("dog");
        trie
    }

    #[test]
    fn test_insert_and_search() {
        let trie = sample();
        assert!(trie.contains("cat"));
        assert!(trie.contains("car"));
        assert!(trie.contains("dog"));
        // Prefixes of words are not words themselves.
        assert!(!trie.contains("ca"));
        assert!(!trie.contains("cats"));
        assert!(!trie.contains(""));
        assert_eq!(trie.len(), 3);
    }

    #[test]
    fn test_reinsert_does_not_double_count() {
        let mut trie = sample();
        trie.insert("cat");
        assert_eq!(trie.len(), 3);
    }

    #[test]
    fn test_word_that_is_prefix_of_another() {
        let mut trie = PrefixIndex::new();
        trie.insert("car");
        trie.insert("carpet");
        assert!(trie.contains("car"));
        assert!(trie.contains("carpet"));
        assert!(!trie.contains("carp"));
        assert_eq!(trie.prefix_search("car"), vec!["car", "carpet"]);
    }

    #[test]
    fn test_prefix_search() {
        let trie = sample();
        let mut ca = trie.prefix_search("ca");
        ca.sort();
        assert_eq!(ca, vec!["car", "cat"]);
        assert!(trie.prefix_search("xyz").is_empty());
        // Empty prefix enumerates every word.
        let mut all = trie.prefix_search("");
        all.sort();
        assert_eq!(all, vec!["car", "cat", "dog"]);
    }

    #[test]
    fn test_empty_trie_and_empty_word() {
        let empty = PrefixIndex::new();
        assert!(empty.is_empty());
        assert!(!empty.contains(""));
        assert!(empty.prefix_search("").is_empty());

        let mut trie = PrefixIndex::new();
        trie.insert("");
        assert!(trie.contains(""));
        assert_eq!(trie.len(), 1);
        assert_eq!(trie.prefix_search(""), vec![""]);
    }
}

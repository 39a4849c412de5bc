//! Entry encoding
//!
//! A word `w` is stored as one leaf member `w + SENTINEL` plus one bare member
//! for each strict prefix of `w`, the empty string included. Because every
//! member has the same score the store orders them byte-lexicographically,
//! which turns the flat set into a pre-order walk of the trie.

/// A store member, classified
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entry<'a> {
    /// Leaf for a complete word (marker stripped)
    Leaf(&'a str),
    /// Bare prefix entry
    Prefix(&'a str),
}

/// Converts words to store members and back
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntryCodec {
    sentinel: char,
}

impl EntryCodec {
    pub fn new(sentinel: char) -> Self {
        Self { sentinel }
    }

    pub fn sentinel(&self) -> char {
        self.sentinel
    }

    /// Leaf member for `word`
    pub fn leaf(&self, word: &str) -> String {
        let mut leaf = String::with_capacity(word.len() + self.sentinel.len_utf8());
        leaf.push_str(word);
        leaf.push(self.sentinel);
        leaf
    }

    /// Strict prefixes of `word`, shortest first, cut on char boundaries
    pub fn prefixes<'a>(&self, word: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        word.char_indices().map(move |(end, _)| &word[..end])
    }

    pub fn is_leaf(&self, member: &str) -> bool {
        member.ends_with(self.sentinel)
    }

    /// The word a leaf member stands for
    pub fn decode_leaf<'a>(&self, member: &'a str) -> Option<&'a str> {
        member.strip_suffix(self.sentinel)
    }

    pub fn classify<'a>(&self, member: &'a str) -> Entry<'a> {
        match self.decode_leaf(member) {
            Some(word) => Entry::Leaf(word),
            None => Entry::Prefix(member),
        }
    }
}

/// Byte length of the longest common prefix of `a` and `b`, on char boundaries
pub fn common_prefix_len(a: &str, b: &str) -> usize {
    a.chars()
        .zip(b.chars())
        .take_while(|(x, y)| x == y)
        .map(|(c, _)| c.len_utf8())
        .sum()
}

// Keyflip Mapping Structures
// MappingEntry, MappingTable, ReverseMatch, Collision

use std::fmt;

use indexmap::IndexMap;

/// One row of a layout table: the sequence typed on the source layout and
/// the sequence the same keystroke produces on the target layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappingEntry {
    pub source: String,
    pub target: String,
}

impl MappingEntry {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
        }
    }
}

impl<S: Into<String>, T: Into<String>> From<(S, T)> for MappingEntry {
    fn from((source, target): (S, T)) -> Self {
        Self::new(source, target)
    }
}

/// A reverse-table entry that was dropped because an earlier source already
/// produced the same target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collision {
    /// The target sequence both sources map to
    pub target: String,
    /// Source kept in the reverse table (first writer)
    pub kept: String,
    /// Source that can no longer be recovered by reverse conversion
    pub dropped: String,
}

impl fmt::Display for Collision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:?} <- {:?} (kept), {:?} (unreachable)",
            self.target, self.kept, self.dropped
        )
    }
}

/// Result of a longest-match reverse lookup at a cursor position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReverseMatch<'a> {
    /// Number of codepoints consumed from the input
    pub chars: usize,
    /// Number of bytes consumed from the input
    pub bytes: usize,
    /// Replacement to emit
    pub replacement: &'a str,
}

/// Forward and reverse layout tables.
///
/// Forward keys are overwritten last-writer-wins. The reverse table is
/// derived by walking the forward table in insertion order and keeping the
/// first source seen for each target; every later source with the same
/// target is recorded in [`MappingTable::collisions`].
///
/// Both tables are immutable once built.
#[derive(Debug, Clone, Default)]
pub struct MappingTable {
    forward: IndexMap<String, String>,
    reverse: IndexMap<String, String>,
    collisions: Vec<Collision>,
    /// Longest reverse key, in codepoints
    max_reverse_chars: usize,
}

impl MappingTable {
    /// Build a table from an ordered list of entries
    pub fn build<I, E>(entries: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<MappingEntry>,
    {
        let mut forward: IndexMap<String, String> = IndexMap::new();
        for entry in entries {
            let MappingEntry { source, target } = entry.into();
            if let Some(previous) = forward.insert(source.clone(), target.clone()) {
                log::debug!(
                    "mapping for {:?} overwritten: {:?} -> {:?}",
                    source,
                    previous,
                    target
                );
            }
        }

        let mut reverse: IndexMap<String, String> = IndexMap::with_capacity(forward.len());
        let mut collisions = Vec::new();
        let mut max_reverse_chars = 0;

        for (source, target) in &forward {
            match reverse.get(target) {
                Some(kept) => {
                    log::debug!(
                        "reverse mapping for {:?} keeps {:?}, drops {:?}",
                        target,
                        kept,
                        source
                    );
                    collisions.push(Collision {
                        target: target.clone(),
                        kept: kept.clone(),
                        dropped: source.clone(),
                    });
                }
                None => {
                    max_reverse_chars = max_reverse_chars.max(target.chars().count());
                    reverse.insert(target.clone(), source.clone());
                }
            }
        }

        Self {
            forward,
            reverse,
            collisions,
            max_reverse_chars,
        }
    }

    /// Look up the target sequence for a single source codepoint
    pub fn lookup_forward(&self, c: char) -> Option<&str> {
        let mut buf = [0u8; 4];
        self.forward
            .get(c.encode_utf8(&mut buf) as &str)
            .map(String::as_str)
    }

    /// Longest-match reverse lookup at the start of `text`.
    ///
    /// The longest prefix is tried first (two codepoints for every table
    /// with multi-codepoint targets), then progressively shorter ones down
    /// to a single codepoint. Returns `None` when no prefix matches; the
    /// caller emits the first codepoint unchanged.
    pub fn lookup_reverse(&self, text: &str) -> Option<ReverseMatch<'_>> {
        // Byte offsets after the first, second, ... codepoint
        let ends: Vec<usize> = text
            .char_indices()
            .take(self.max_reverse_chars)
            .map(|(i, c)| i + c.len_utf8())
            .collect();

        for (idx, &end) in ends.iter().enumerate().rev() {
            if let Some(replacement) = self.reverse.get(&text[..end]) {
                return Some(ReverseMatch {
                    chars: idx + 1,
                    bytes: end,
                    replacement: replacement.as_str(),
                });
            }
        }
        None
    }

    /// Reverse-table entries lost to first-writer-wins
    pub fn collisions(&self) -> &[Collision] {
        &self.collisions
    }

    /// Check whether a source sequence survives reverse conversion
    pub fn is_reversible(&self, source: &str) -> bool {
        !self.collisions.iter().any(|c| c.dropped == source)
    }

    /// Iterate forward entries in table order
    pub fn forward_entries(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.forward.iter().map(|(s, t)| (s.as_str(), t.as_str()))
    }

    /// Iterate reverse entries in table order
    pub fn reverse_entries(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.reverse.iter().map(|(t, s)| (t.as_str(), s.as_str()))
    }

    /// Number of forward entries
    pub fn len(&self) -> usize {
        self.forward.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forward.is_empty()
    }

    /// Longest reverse key in codepoints
    pub fn max_reverse_chars(&self) -> usize {
        self.max_reverse_chars
    }
}

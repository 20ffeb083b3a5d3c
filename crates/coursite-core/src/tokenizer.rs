//! Rule-driven tokenizer producing a position-indexed tag table.
//!
//! Rules run in [`RuleSet`] order over a scratch copy of the input. Each
//! match records an opening segment at its first character and a close at
//! its last, then overwrites the matched bytes with [`MASK`] so no later
//! rule can match inside it. That masking is the whole precedence
//! mechanism: a keyword inside an already-claimed string stays untagged.
//!
//! The table is indexed by `char`, one entry per Unicode scalar value of
//! the input.

use std::ops::Range;

use crate::segment::{Category, RuleSet};

/// Byte written over claimed spans in the scratch buffer.
pub const MASK: u8 = 0;

/// A segment opening at some position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    pub category: Category,
    pub class: &'static str,
}

/// Tags attached to a single character position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PositionTags {
    /// Segments opening before this character, in the order they were found
    pub starts: Vec<Segment>,
    /// Number of segments closing after this character
    pub ends: usize,
}

/// One [`PositionTags`] entry per character of the tokenized text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagTable {
    entries: Vec<PositionTags>,
}

impl TagTable {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, position: usize) -> Option<&PositionTags> {
        self.entries.get(position)
    }

    pub fn entries(&self) -> &[PositionTags] {
        &self.entries
    }

    /// Total number of opened segments
    pub fn total_starts(&self) -> usize {
        self.entries.iter().map(|e| e.starts.len()).sum()
    }

    /// Total number of closed segments
    pub fn total_ends(&self) -> usize {
        self.entries.iter().map(|e| e.ends).sum()
    }

    /// Whether every opened segment is closed
    pub fn is_balanced(&self) -> bool {
        self.total_starts() == self.total_ends()
    }

    /// Character ranges covered by segments of `category`, in start order.
    pub fn spans(&self, category: Category) -> Vec<Range<usize>> {
        let mut open: Vec<(Category, usize)> = Vec::new();
        let mut spans = Vec::new();

        for (position, entry) in self.entries.iter().enumerate() {
            open.extend(entry.starts.iter().map(|s| (s.category, position)));
            for _ in 0..entry.ends {
                match open.pop() {
                    Some((closed, start)) if closed == category => {
                        spans.push(start..position + 1);
                    }
                    _ => {}
                }
            }
        }

        spans.sort_by_key(|r| r.start);
        spans
    }
}

/// Tokenize `text` with `rules`.
pub fn tokenize(text: &str, rules: &RuleSet) -> TagTable {
    // Map each byte to the index of the char it belongs to.
    let mut char_at: Vec<usize> = Vec::with_capacity(text.len());
    let mut char_count = 0;
    for ch in text.chars() {
        char_at.resize(char_at.len() + ch.len_utf8(), char_count);
        char_count += 1;
    }

    let mut entries = vec![PositionTags::default(); char_count];
    let mut scratch = text.as_bytes().to_vec();

    for rule in rules.rules() {
        let segment = Segment {
            category: rule.category(),
            class: rule.class(),
        };

        for matcher in rule.matchers() {
            let claimed: Vec<Range<usize>> = matcher
                .find_iter(&scratch)
                .map(|m| m.range())
                .filter(|range| !range.is_empty())
                .collect();

            for range in claimed {
                entries[char_at[range.start]].starts.push(segment);
                entries[char_at[range.end - 1]].ends += 1;
                scratch[range].fill(MASK);
            }
        }
    }

    TagTable { entries }
}

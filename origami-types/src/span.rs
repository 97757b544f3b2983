use serde::{Deserialize, Serialize};
use std::fmt;

/// Byte range of a node in the text the PEG front end parsed.
///
/// The semantic pass never interprets spans; it only carries them from input nodes onto
/// diagnostics and synthesized nodes so that later stages can point back at the source.
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Span {
    start: usize,
    end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Option<Span> {
        if start > end {
            return None;
        }
        Some(Span { start, end })
    }

    /// A span that points nowhere, used for nodes the pass synthesizes itself.
    pub fn dummy() -> Span {
        Span::default()
    }

    pub fn is_dummy(&self) -> bool {
        self.start == 0 && self.end == 0
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn end(&self) -> usize {
        self.end
    }

    /// Deserialized spans are not checked, so an inverted range has length zero.
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Debug for Span {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "{}..{}", self.start, self.end)
    }
}

pub trait Spanned {
    fn span(&self) -> Span;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_inverted_range() {
        assert!(Span::new(4, 2).is_none());
        assert_eq!(Span::new(2, 4).map(|s| s.len()), Some(2));
    }

    #[test]
    fn inverted_range_from_input_has_no_length() {
        let inverted = Span { start: 9, end: 3 };
        assert_eq!(inverted.len(), 0);
        assert!(inverted.is_empty());
        assert!(!inverted.is_dummy());
    }
}

//! Core types for notecards and studysets.

use std::hash::{Hash, Hasher};

/// A term/definition pair.
///
/// Identity is the term alone: two cards with the same term compare equal
/// whatever their definitions say. Use [`Notecard::same_entry`] when both
/// fields matter.
#[derive(Debug, Clone)]
pub struct Notecard {
    term: String,
    definition: String,
}

impl Notecard {
    pub fn new(term: impl Into<String>, definition: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            definition: definition.into(),
        }
    }

    pub fn term(&self) -> &str {
        &self.term
    }

    pub fn definition(&self) -> &str {
        &self.definition
    }

    /// Structural comparison of both fields.
    pub fn same_entry(&self, other: &Notecard) -> bool {
        self.term == other.term && self.definition == other.definition
    }
}

impl PartialEq for Notecard {
    fn eq(&self, other: &Self) -> bool {
        self.term == other.term
    }
}

impl Eq for Notecard {}

impl Hash for Notecard {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.term.hash(state);
    }
}

/// A named, ordered collection of notecards.
#[derive(Debug, Clone)]
pub struct Studyset {
    name: String,
    cards: Vec<Notecard>,
}

impl Studyset {
    /// Create an empty studyset.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            cards: Vec::new(),
        }
    }

    /// Create a studyset from already-parsed cards, keeping their order.
    pub fn with_cards(name: impl Into<String>, cards: Vec<Notecard>) -> Self {
        Self {
            name: name.into(),
            cards,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Append a card. An existing card with the same term is left in place.
    pub fn add_term(&mut self, term: impl Into<String>, definition: impl Into<String>) {
        self.cards.push(Notecard::new(term, definition));
    }

    /// Remove the first card whose term matches, returning it.
    pub fn remove_term(&mut self, term: &str) -> Option<Notecard> {
        let idx = self.cards.iter().position(|card| card.term == term)?;
        Some(self.cards.remove(idx))
    }

    pub fn contains_term(&self, term: &str) -> bool {
        self.cards.iter().any(|card| card.term == term)
    }

    /// Independent copy of the current cards, in order.
    pub fn clone_terms(&self) -> Vec<Notecard> {
        self.cards.clone()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn terms(&self) -> &[Notecard] {
        &self.cards
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vocab() -> Studyset {
        let mut set = Studyset::new("vocab");
        set.add_term("cat", "a small mammal");
        set.add_term("dog", "a loyal mammal");
        set.add_term("owl", "a nocturnal bird");
        set
    }

    #[test]
    fn equality_uses_term_only() {
        let a = Notecard::new("cat", "a small mammal");
        let b = Notecard::new("cat", "a large mammal");
        assert_eq!(a, b);
        assert!(!a.same_entry(&b));
        assert_ne!(a, Notecard::new("dog", "a small mammal"));
    }

    #[test]
    fn add_preserves_insertion_order() {
        let set = vocab();
        let terms: Vec<&str> = set.terms().iter().map(Notecard::term).collect();
        assert_eq!(terms, vec!["cat", "dog", "owl"]);
    }

    #[test]
    fn add_keeps_duplicate_terms() {
        let mut set = vocab();
        set.add_term("cat", "a second definition");
        assert_eq!(set.len(), 4);
    }

    #[test]
    fn remove_present_term() {
        let mut set = vocab();
        let removed = set.remove_term("dog").unwrap();
        assert_eq!(removed.definition(), "a loyal mammal");
        assert_eq!(set.len(), 2);
        assert!(!set.contains_term("dog"));
    }

    #[test]
    fn remove_takes_first_duplicate_only() {
        let mut set = vocab();
        set.add_term("cat", "later");
        set.remove_term("cat");
        assert_eq!(set.len(), 3);
        let remaining = set.terms().iter().find(|c| c.term() == "cat").unwrap();
        assert_eq!(remaining.definition(), "later");
    }

    #[test]
    fn remove_absent_term_is_noop() {
        let mut set = vocab();
        assert!(set.remove_term("emu").is_none());
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn clone_terms_is_independent() {
        let mut set = vocab();
        let mut copy = set.clone_terms();
        assert!(copy.iter().zip(set.terms()).all(|(a, b)| a.same_entry(b)));

        copy.pop();
        copy[0] = Notecard::new("changed", "changed");
        assert_eq!(set.len(), 3);
        assert_eq!(set.terms()[0].term(), "cat");

        set.remove_term("owl");
        assert_eq!(copy.len(), 2);
    }
}

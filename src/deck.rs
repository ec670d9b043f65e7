//! Card Collection Model
//!
//! The cards of one question: an ordered source list and a single-capacity
//! answer slot. Every card lives in exactly one of the two. Each operation
//! either moves one card completely or changes nothing.

use leptos_dragdrop::Commit;

use crate::models::{Answer, Choice};

/// Maximum length of a typed answer
pub const FREE_TEXT_MAX_CHARS: usize = 150;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub id: u32,
    pub label: String,
}

/// Widget configuration built from a question's choices
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeckConfig {
    pub cards: Vec<Card>,
    /// The question offers a "your own answer" entry
    pub allow_free_text: bool,
}

impl DeckConfig {
    /// Physical cards are the fixed choices; a free-text placeholder only
    /// turns on the text entry.
    pub fn from_choices(choices: &[Choice]) -> Self {
        let cards = choices
            .iter()
            .filter(|choice| !choice.free_text)
            .map(|choice| Card {
                id: choice.id,
                label: choice.text.clone(),
            })
            .collect();
        Self {
            cards,
            allow_free_text: choices.iter().any(|choice| choice.free_text),
        }
    }
}

/// Effect of a drop on the question's answer
#[derive(Debug, Clone, PartialEq)]
pub enum DeckChange {
    Answered(Answer),
    Cleared,
    Unchanged,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardDeck {
    source: Vec<Card>,
    slot: Option<Card>,
}

impl CardDeck {
    pub fn new(cards: Vec<Card>) -> Self {
        Self { source: cards, slot: None }
    }

    /// Deck for revisiting a question: a chosen card starts in the slot
    pub fn seeded(cards: Vec<Card>, previous: Option<&Answer>) -> Self {
        let mut deck = Self::new(cards);
        if let Some(id) = previous.and_then(Answer::choice_id) {
            deck.move_to_slot(id);
        }
        deck
    }

    pub fn source(&self) -> &[Card] {
        &self.source
    }

    pub fn slotted(&self) -> Option<&Card> {
        self.slot.as_ref()
    }

    pub fn slotted_id(&self) -> Option<u32> {
        self.slot.as_ref().map(|card| card.id)
    }

    pub fn len(&self) -> usize {
        self.source.len() + usize::from(self.slot.is_some())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Move a source card into the empty slot.
    ///
    /// No-op when the card is already slotted, when another card occupies
    /// the slot, or when the id is unknown.
    pub fn move_to_slot(&mut self, id: u32) -> bool {
        if self.slot.is_some() {
            return false;
        }
        let Some(index) = self.source.iter().position(|card| card.id == id) else {
            return false;
        };
        self.slot = Some(self.source.remove(index));
        true
    }

    /// Put the slotted card back before the first remaining card with a
    /// larger id, or at the end.
    pub fn return_to_source(&mut self, id: u32) -> bool {
        if self.slotted_id() != Some(id) {
            return false;
        }
        let Some(card) = self.slot.take() else {
            return false;
        };
        let index = self
            .source
            .iter()
            .position(|other| other.id > card.id)
            .unwrap_or(self.source.len());
        self.source.insert(index, card);
        true
    }

    /// Apply a committed drop. Returns whether anything moved.
    pub fn apply(&mut self, commit: Commit) -> bool {
        match commit {
            Commit::ToSlot(id) => self.move_to_slot(id),
            Commit::ToSource(id) => self.return_to_source(id),
        }
    }

    /// Apply a committed drop and say what it means for the answer.
    ///
    /// Dropping the slotted card onto the slot again re-confirms it.
    pub fn settle(&mut self, commit: Commit) -> DeckChange {
        let confirms = matches!(commit, Commit::ToSlot(id) if self.slotted_id() == Some(id));
        if !self.apply(commit) && !confirms {
            return DeckChange::Unchanged;
        }
        match self.answer() {
            Some(answer) => DeckChange::Answered(answer),
            None => DeckChange::Cleared,
        }
    }

    /// The answer the slot currently represents
    pub fn answer(&self) -> Option<Answer> {
        self.slot.as_ref().map(|card| Answer::Choice {
            id: card.id,
            text: card.label.clone(),
        })
    }

    /// Turn typed text into an answer. Blank input gives `None`.
    ///
    /// The caller hides the text entry while a card is slotted.
    pub fn submit_free_text(&self, text: &str) -> Option<Answer> {
        debug_assert!(self.slot.is_none(), "free text submitted while a card is slotted");
        let text: String = text.trim().chars().take(FREE_TEXT_MAX_CHARS).collect();
        if text.is_empty() {
            return None;
        }
        Some(Answer::FreeText { text })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cards(ids: &[u32]) -> Vec<Card> {
        ids.iter()
            .map(|id| Card { id: *id, label: format!("Card {}", id) })
            .collect()
    }

    fn source_ids(deck: &CardDeck) -> Vec<u32> {
        deck.source().iter().map(|card| card.id).collect()
    }

    #[test]
    fn test_config_filters_free_text_placeholder() {
        let choices = vec![
            Choice::fixed(1, "Un"),
            Choice::fixed(2, "Deux"),
            Choice::fixed(3, "Trois"),
            Choice::free_text(4),
        ];
        let config = DeckConfig::from_choices(&choices);
        assert_eq!(config.cards.iter().map(|c| c.id).collect::<Vec<_>>(), vec![1, 2, 3]);
        assert!(config.allow_free_text);

        let fixed_only = DeckConfig::from_choices(&choices[..3]);
        assert!(!fixed_only.allow_free_text);
    }

    #[test]
    fn test_move_to_slot_and_back() {
        let mut deck = CardDeck::new(cards(&[1, 2, 3]));
        assert!(deck.move_to_slot(2));
        assert_eq!(source_ids(&deck), vec![1, 3]);
        assert_eq!(deck.slotted_id(), Some(2));

        assert!(deck.return_to_source(2));
        assert_eq!(source_ids(&deck), vec![1, 2, 3]);
        assert_eq!(deck.slotted_id(), None);
    }

    #[test]
    fn test_return_reinserts_by_id_order() {
        let mut deck = CardDeck::new(cards(&[1, 2, 3, 4]));
        deck.move_to_slot(2);
        assert_eq!(source_ids(&deck), vec![1, 3, 4]);
        deck.return_to_source(2);
        assert_eq!(source_ids(&deck), vec![1, 2, 3, 4]);

        deck.move_to_slot(4);
        deck.return_to_source(4);
        assert_eq!(source_ids(&deck), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_occupied_slot_refuses_other_card() {
        let mut deck = CardDeck::new(cards(&[1, 2, 3]));
        deck.move_to_slot(1);
        let before = deck.clone();
        assert!(!deck.move_to_slot(3));
        assert_eq!(deck, before);
    }

    #[test]
    fn test_dropping_slotted_card_again_is_idempotent() {
        let mut deck = CardDeck::new(cards(&[1, 2, 3]));
        deck.apply(Commit::ToSlot(3));
        let before = deck.clone();
        assert!(!deck.apply(Commit::ToSlot(3)));
        assert_eq!(deck, before);
    }

    #[test]
    fn test_settle_reports_answer_changes() {
        let mut deck = CardDeck::new(cards(&[1, 2, 3]));
        assert_eq!(
            deck.settle(Commit::ToSlot(2)),
            DeckChange::Answered(Answer::Choice { id: 2, text: "Card 2".to_string() })
        );
        // Refused: another card is slotted
        assert_eq!(deck.settle(Commit::ToSlot(1)), DeckChange::Unchanged);
        assert_eq!(deck.settle(Commit::ToSource(1)), DeckChange::Unchanged);
        assert_eq!(deck.settle(Commit::ToSource(2)), DeckChange::Cleared);
    }

    #[test]
    fn test_redropping_revisited_choice_confirms_it() {
        let previous = Answer::Choice { id: 3, text: "Card 3".to_string() };
        let mut deck = CardDeck::seeded(cards(&[1, 2, 3]), Some(&previous));
        let before = deck.clone();
        assert_eq!(deck.settle(Commit::ToSlot(3)), DeckChange::Answered(previous));
        assert_eq!(deck, before);
    }

    #[test]
    fn test_unknown_ids_change_nothing() {
        let mut deck = CardDeck::new(cards(&[1, 2]));
        assert!(!deck.move_to_slot(9));
        assert!(!deck.return_to_source(1));
        assert_eq!(deck, CardDeck::new(cards(&[1, 2])));
    }

    #[test]
    fn test_every_card_stays_in_exactly_one_container() {
        let original = cards(&[1, 2, 3, 4, 5]);
        let mut deck = CardDeck::new(original.clone());
        // Deterministic pseudo-random walk over both operations
        let mut seed: u32 = 0x2545_f491;
        for _ in 0..500 {
            seed = seed.wrapping_mul(1_103_515_245).wrapping_add(12_345);
            let id = (seed >> 16) % 6 + 1;
            let commit = if seed & 1 == 0 { Commit::ToSlot(id) } else { Commit::ToSource(id) };
            deck.apply(commit);

            let mut ids = source_ids(&deck);
            if let Some(slotted) = deck.slotted_id() {
                assert!(!ids.contains(&slotted));
                ids.push(slotted);
            }
            ids.sort_unstable();
            assert_eq!(ids, vec![1, 2, 3, 4, 5]);
            assert_eq!(deck.len(), original.len());
        }
    }

    #[test]
    fn test_seeded_deck_restores_choice() {
        let previous = Answer::Choice { id: 2, text: "Card 2".to_string() };
        let deck = CardDeck::seeded(cards(&[1, 2, 3]), Some(&previous));
        assert_eq!(deck.slotted_id(), Some(2));
        assert_eq!(deck.answer(), Some(previous));

        let typed = Answer::FreeText { text: "autre".to_string() };
        let deck = CardDeck::seeded(cards(&[1, 2, 3]), Some(&typed));
        assert_eq!(deck.slotted_id(), None);
    }

    #[test]
    fn test_free_text_is_trimmed_and_capped() {
        let deck = CardDeck::new(cards(&[1]));
        assert_eq!(deck.submit_free_text("   "), None);
        assert_eq!(
            deck.submit_free_text("  monter à l'étage "),
            Some(Answer::FreeText { text: "monter à l'étage".to_string() })
        );
        let long = "é".repeat(400);
        let Some(Answer::FreeText { text }) = deck.submit_free_text(&long) else {
            panic!("expected free text");
        };
        assert_eq!(text.chars().count(), FREE_TEXT_MAX_CHARS);
    }
}

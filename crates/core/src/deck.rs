use crate::{CardDescriptor, CardInstance, CardState, RngState};

/// The shuffled board: every catalog descriptor appears exactly twice.
#[derive(Debug, Default, Clone)]
pub struct Deck {
    pub cards: Vec<CardInstance>,
}

impl Deck {
    pub fn build(catalog: &[CardDescriptor], rng: &mut RngState) -> Self {
        let mut cards = Vec::with_capacity(catalog.len() * 2);
        for descriptor in catalog {
            cards.push(CardInstance::face_down(descriptor.clone()));
            cards.push(CardInstance::face_down(descriptor.clone()));
        }
        rng.shuffle(&mut cards);
        Self { cards }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn card(&self, index: usize) -> Option<&CardInstance> {
        self.cards.get(index)
    }

    pub fn set_state(&mut self, index: usize, state: CardState) {
        if let Some(card) = self.cards.get_mut(index) {
            card.state = state;
        }
    }

    pub fn matched_count(&self) -> usize {
        self.cards.iter().filter(|card| card.is_matched()).count()
    }

    pub fn is_cleared(&self) -> bool {
        !self.is_empty() && self.matched_count() == self.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog(names: &[&str]) -> Vec<CardDescriptor> {
        names
            .iter()
            .map(|name| CardDescriptor {
                name: name.to_string(),
                image: format!("img/{name}.png"),
            })
            .collect()
    }

    #[test]
    fn build_duplicates_every_descriptor() {
        let catalog = catalog(&["cat", "dog", "fox"]);
        let mut rng = RngState::from_seed(7);
        let deck = Deck::build(&catalog, &mut rng);
        assert_eq!(deck.len(), 6);
        for descriptor in &catalog {
            let copies = deck
                .cards
                .iter()
                .filter(|card| card.descriptor == *descriptor)
                .count();
            assert_eq!(copies, 2, "descriptor {} not paired", descriptor.name);
        }
    }

    #[test]
    fn shuffle_is_a_permutation() {
        let catalog = catalog(&["a", "b", "c", "d", "e"]);
        let mut rng = RngState::from_seed(99);
        let deck = Deck::build(&catalog, &mut rng);
        let mut names: Vec<&str> = deck.cards.iter().map(|card| card.name()).collect();
        names.sort_unstable();
        assert_eq!(names, ["a", "a", "b", "b", "c", "c", "d", "d", "e", "e"]);
    }

    #[test]
    fn fresh_deck_is_all_face_down() {
        let catalog = catalog(&["x", "y"]);
        let mut rng = RngState::from_seed(1);
        let deck = Deck::build(&catalog, &mut rng);
        assert!(deck.cards.iter().all(|card| card.is_face_down()));
        assert_eq!(deck.matched_count(), 0);
        assert!(!deck.is_cleared());
    }
}

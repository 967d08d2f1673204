use crate::{Card, Rank, RngState, Suit};

/// Draw pile plus discard pile. Together with the player's hand these
/// always hold the full 52-card universe.
#[derive(Debug, Default, Clone)]
pub struct Deck {
    pub draw: Vec<Card>,
    pub discard: Vec<Card>,
}

impl Deck {
    pub fn standard52() -> Self {
        let mut draw = Vec::with_capacity(52);
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                draw.push(Card::standard(suit, rank));
            }
        }
        Self {
            draw,
            discard: Vec::new(),
        }
    }

    pub fn shuffle(&mut self, rng: &mut RngState) {
        rng.shuffle(&mut self.draw);
    }

    /// Draws up to `count` cards from the top. When the draw pile runs
    /// out mid-draw the discard pile is shuffled in and drawing
    /// continues; with both piles empty the draw comes up short.
    pub fn draw_cards(&mut self, count: usize, rng: &mut RngState) -> Vec<Card> {
        let mut cards = Vec::with_capacity(count);
        while cards.len() < count {
            if self.draw.is_empty() {
                if self.discard.is_empty() {
                    break;
                }
                self.reshuffle_discard(rng);
            }
            match self.draw.pop() {
                Some(card) => cards.push(card),
                None => break,
            }
        }
        cards
    }

    pub fn discard(&mut self, mut cards: Vec<Card>) {
        for card in &mut cards {
            card.selected = false;
        }
        self.discard.append(&mut cards);
    }

    pub fn reshuffle_discard(&mut self, rng: &mut RngState) {
        if self.discard.is_empty() {
            return;
        }
        self.draw.append(&mut self.discard);
        rng.shuffle(&mut self.draw);
    }

    pub fn len(&self) -> usize {
        self.draw.len() + self.discard.len()
    }

    pub fn is_empty(&self) -> bool {
        self.draw.is_empty() && self.discard.is_empty()
    }
}

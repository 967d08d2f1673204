use super::*;
use crate::{score_hand, Deck, JokerView, SessionSnapshot, SessionState};

impl RunState {
    pub fn new(config: GameConfig, seed: u64) -> Self {
        let mut rng = RngState::from_seed(seed);
        let mut deck = Deck::standard52();
        deck.shuffle(&mut rng);
        let state = SessionState::new(&config);
        let mut run = Self {
            config,
            rng,
            deck,
            hand: Vec::new(),
            jokers: Vec::new(),
            state,
            shop: None,
            sort_order: SortOrder::ByRank,
        };
        run.refill_hand();
        run
    }

    /// Toggles one card's selection flag. Selecting past the cap is
    /// rejected; deselection always goes through. Returns the new flag.
    pub fn toggle_selection(&mut self, index: usize) -> Result<bool, RunError> {
        if self.state.phase != Phase::Playing {
            return Err(RunError::InvalidPhase(self.state.phase));
        }
        let selected_now = self.selected_count();
        let cap = self.config.max_selected;
        let card = self
            .hand
            .get_mut(index)
            .ok_or(RunError::InvalidCardIndex)?;
        if !card.selected && selected_now >= cap {
            return Err(RunError::SelectionLimit);
        }
        card.selected = !card.selected;
        Ok(card.selected)
    }

    pub fn clear_selection(&mut self) {
        for card in &mut self.hand {
            card.selected = false;
        }
    }

    pub fn selected_count(&self) -> usize {
        self.hand.iter().filter(|card| card.selected).count()
    }

    pub fn selected_cards(&self) -> Vec<Card> {
        self.hand
            .iter()
            .filter(|card| card.selected)
            .copied()
            .collect()
    }

    /// Non-committing score of the current selection; repeated after
    /// every selection change without touching any `used` flag.
    pub fn preview(&self) -> ScoreBreakdown {
        score_hand(&self.selected_cards(), &self.jokers)
    }

    pub fn set_sort_order(&mut self, order: SortOrder) {
        self.sort_order = order;
        self.sort_hand();
    }

    pub(super) fn sort_hand(&mut self) {
        let order = self.sort_order;
        self.hand.sort_by(|a, b| order.compare(a, b));
    }

    /// Cards across deck, hand and discard pile; 52 in every reachable
    /// state.
    pub fn card_count(&self) -> usize {
        self.deck.len() + self.hand.len()
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            ante: self.state.ante,
            ante_round: self.state.ante_round,
            round: self.state.round,
            phase: self.state.phase,
            target: self.state.target,
            score: self.state.score,
            hands_left: self.state.hands_left,
            discards_left: self.state.discards_left,
            money: self.state.money,
            last_hand: self.state.last_hand,
            round_complete: self.state.round_complete,
            jokers: self
                .jokers
                .iter()
                .map(|joker| JokerView {
                    name: joker.kind.name(),
                    description: joker.kind.description(),
                    cost: joker.kind.cost(),
                    sell_value: joker.sell_value(),
                    used: joker.used,
                })
                .collect(),
        }
    }
}

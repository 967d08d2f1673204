use super::*;
use crate::{score_hand, Event, EventBus, RoundOutcome, ShopState};

impl RunState {
    /// Tops the hand back up to `hand_size`, reshuffling the discard
    /// pile into the deck if the draw pile runs dry. Returns the count
    /// actually dealt (short when the whole universe is in hand).
    pub(super) fn refill_hand(&mut self) -> usize {
        let needed = self.config.hand_size.saturating_sub(self.hand.len());
        if needed == 0 {
            return 0;
        }
        let mut drawn = self.deck.draw_cards(needed, &mut self.rng);
        let count = drawn.len();
        self.hand.append(&mut drawn);
        self.sort_hand();
        count
    }

    fn take_selected(&mut self) -> Vec<Card> {
        let mut taken = Vec::new();
        let mut kept = Vec::with_capacity(self.hand.len());
        for card in self.hand.drain(..) {
            if card.selected {
                taken.push(card);
            } else {
                kept.push(card);
            }
        }
        self.hand = kept;
        taken
    }

    /// Commits the current selection as a scored play. On a win the
    /// session moves to the shop with the money reward applied; on the
    /// last failed attempt the whole session resets.
    pub fn play_selected(&mut self, events: &mut EventBus) -> Result<PlayResult, RunError> {
        if self.state.phase != Phase::Playing {
            return Err(RunError::InvalidPhase(self.state.phase));
        }
        if self.state.hands_left == 0 {
            return Err(RunError::NoHandsLeft);
        }
        let selected = self.selected_cards();
        if selected.is_empty() {
            return Err(RunError::NoSelection);
        }

        let breakdown = score_hand(&selected, &self.jokers);
        for &idx in &breakdown.glass_fired {
            if let Some(joker) = self.jokers.get_mut(idx) {
                joker.used = true;
            }
        }
        self.state.score += breakdown.total.total();
        self.state.hands_left -= 1;
        self.state.last_hand = Some(breakdown.hand);

        let played = self.take_selected();
        self.deck.discard(played);
        let dealt = self.refill_hand();

        events.push(Event::HandScored {
            hand: breakdown.hand,
            chips: breakdown.total.chips,
            mult: breakdown.total.mult,
            total: breakdown.total.total(),
        });
        if dealt > 0 {
            events.push(Event::HandDealt { count: dealt });
        }

        let mut result = PlayResult {
            breakdown,
            outcome: RoundOutcome::Continue,
            hands_left: self.state.hands_left,
            round_complete: false,
        };
        if self.state.score >= self.state.target {
            self.state.round_complete = true;
            let reward = self.reward_for_clear(result.breakdown.hand);
            self.state.money += reward;
            self.state.phase = Phase::Shopping;
            let shop = ShopState::generate(self.config.shop_slots, &mut self.rng);
            events.push(Event::RoundCleared {
                score: self.state.score,
                reward,
                money: self.state.money,
            });
            events.push(Event::ShopEntered {
                offers: shop.offers.len(),
            });
            self.shop = Some(shop);
            self.clear_selection();
            result.outcome = RoundOutcome::Cleared;
            result.round_complete = true;
        } else if self.state.hands_left == 0 {
            self.game_over(events);
            result.outcome = RoundOutcome::Lost;
        }
        Ok(result)
    }

    /// Swaps the selected cards out for fresh ones without scoring and
    /// without consuming a hand attempt.
    pub fn discard_selected(&mut self, events: &mut EventBus) -> Result<(), RunError> {
        if self.state.phase != Phase::Playing {
            return Err(RunError::InvalidPhase(self.state.phase));
        }
        if self.state.discards_left == 0 {
            return Err(RunError::NoDiscardsLeft);
        }
        let taken = self.take_selected();
        if taken.is_empty() {
            return Err(RunError::NoSelection);
        }
        let count = taken.len();
        self.deck.discard(taken);
        self.state.discards_left -= 1;
        let dealt = self.refill_hand();
        events.push(Event::HandDiscarded {
            count,
            discards_left: self.state.discards_left,
        });
        if dealt > 0 {
            events.push(Event::HandDealt { count: dealt });
        }
        Ok(())
    }
}

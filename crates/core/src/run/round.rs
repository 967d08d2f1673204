use super::*;
use crate::{hand_reward, Event, EventBus, HandKind, JokerKind};

impl RunState {
    /// Leaves the shop and starts the next round.
    pub fn advance_round(&mut self, events: &mut EventBus) -> Result<(), RunError> {
        if self.state.phase != Phase::Shopping {
            return Err(RunError::InvalidPhase(self.state.phase));
        }
        self.next_round(events);
        Ok(())
    }

    /// Forfeits the current round and moves straight to the next one,
    /// with no reward and no shop. The final round of an ante cannot
    /// be skipped.
    pub fn skip_round(&mut self, events: &mut EventBus) -> Result<(), RunError> {
        if self.state.phase != Phase::Playing {
            return Err(RunError::InvalidPhase(self.state.phase));
        }
        if self.state.ante_round >= self.config.rounds_per_ante {
            return Err(RunError::SkipNotAllowed);
        }
        events.push(Event::RoundSkipped {
            ante: self.state.ante,
            ante_round: self.state.ante_round,
        });
        self.next_round(events);
        Ok(())
    }

    fn next_round(&mut self, events: &mut EventBus) {
        self.state.ante_round += 1;
        if self.state.ante_round > self.config.rounds_per_ante {
            self.state.ante_round = 1;
            self.state.ante += 1;
            if self.state.ante > self.config.max_ante {
                self.game_over(events);
                return;
            }
        }
        self.state.round += 1;
        self.state.target = self.config.target_for(self.state.ante, self.state.ante_round);
        self.state.score = 0;
        self.state.hands_left = self.config.hands_per_round;
        self.state.discards_left = self.config.discards_per_round;
        self.state.phase = Phase::Playing;
        self.state.last_hand = None;
        self.state.round_complete = false;
        self.shop = None;
        for joker in &mut self.jokers {
            if joker.kind.single_use() {
                joker.used = false;
            }
        }

        // Fresh deck and hand each round.
        self.deck = Deck::standard52();
        self.deck.shuffle(&mut self.rng);
        self.hand.clear();
        let dealt = self.refill_hand();

        events.push(Event::RoundStarted {
            ante: self.state.ante,
            ante_round: self.state.ante_round,
            round: self.state.round,
            target: self.state.target,
            hands: self.state.hands_left,
            discards: self.state.discards_left,
        });
        if dealt > 0 {
            events.push(Event::HandDealt { count: dealt });
        }
    }

    /// Money paid out for clearing a round: category base, one per
    /// held Fool, one per unspent hand, plus interest on the money
    /// held before the reward lands.
    pub(super) fn reward_for_clear(&self, hand: HandKind) -> i64 {
        let base = hand_reward(hand);
        let fools = self
            .jokers
            .iter()
            .filter(|joker| joker.kind == JokerKind::Fool)
            .count() as i64;
        let interest = self.state.money / self.config.interest_step;
        base + fools + self.state.hands_left as i64 + interest
    }

    /// Replaces the session wholesale with a brand-new one, reseeded
    /// from the current RNG stream.
    pub(super) fn game_over(&mut self, events: &mut EventBus) {
        events.push(Event::GameOver {
            ante: self.state.ante.min(self.config.max_ante),
            round: self.state.round,
            score: self.state.score,
            target: self.state.target,
        });
        let seed = self.rng.next_u64();
        *self = RunState::new(self.config.clone(), seed);
    }
}

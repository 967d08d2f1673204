use super::*;
use crate::{Event, EventBus, Joker, JokerKind};

impl RunState {
    pub fn shop_offers(&self) -> &[JokerKind] {
        self.shop
            .as_ref()
            .map(|shop| shop.offers.as_slice())
            .unwrap_or(&[])
    }

    /// Buys the offer at `index` into the held list. Rejected when
    /// underfunded or at the joker cap; the offer stays put on
    /// rejection.
    pub fn buy_joker(&mut self, index: usize, events: &mut EventBus) -> Result<(), RunError> {
        if self.state.phase != Phase::Shopping {
            return Err(RunError::InvalidPhase(self.state.phase));
        }
        let kind = *self
            .shop
            .as_ref()
            .and_then(|shop| shop.offers.get(index))
            .ok_or(RunError::InvalidOfferIndex)?;
        let cost = kind.cost();
        if self.state.money < cost {
            return Err(RunError::NotEnoughMoney);
        }
        if self.jokers.len() >= self.config.joker_slots {
            return Err(RunError::NoJokerSlots);
        }
        self.state.money -= cost;
        if let Some(shop) = self.shop.as_mut() {
            shop.offers.remove(index);
        }
        self.jokers.push(Joker::new(kind));
        events.push(Event::JokerBought {
            kind,
            cost,
            money: self.state.money,
        });
        Ok(())
    }

    /// Sells a held joker for half its original catalog cost.
    pub fn sell_joker(&mut self, index: usize, events: &mut EventBus) -> Result<(), RunError> {
        if self.state.phase != Phase::Shopping {
            return Err(RunError::InvalidPhase(self.state.phase));
        }
        if index >= self.jokers.len() {
            return Err(RunError::InvalidJokerIndex);
        }
        let joker = self.jokers.remove(index);
        let refund = joker.sell_value();
        self.state.money += refund;
        events.push(Event::JokerSold {
            kind: joker.kind,
            refund,
            money: self.state.money,
        });
        Ok(())
    }
}

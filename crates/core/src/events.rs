use crate::{HandKind, JokerKind};
use serde::{Deserialize, Serialize};

/// Engine notifications, drained by the presentation layer after every
/// intent. This is the engine's only reporting channel; it never
/// writes to stdout or a logger itself.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Event {
    RoundStarted {
        ante: u8,
        ante_round: u8,
        round: u32,
        target: i64,
        hands: u8,
        discards: u8,
    },
    HandDealt {
        count: usize,
    },
    HandScored {
        hand: HandKind,
        chips: i64,
        mult: f64,
        total: i64,
    },
    HandDiscarded {
        count: usize,
        discards_left: u8,
    },
    RoundCleared {
        score: i64,
        reward: i64,
        money: i64,
    },
    RoundSkipped {
        ante: u8,
        ante_round: u8,
    },
    ShopEntered {
        offers: usize,
    },
    JokerBought {
        kind: JokerKind,
        cost: i64,
        money: i64,
    },
    JokerSold {
        kind: JokerKind,
        refund: i64,
        money: i64,
    },
    GameOver {
        ante: u8,
        round: u32,
        score: i64,
        target: i64,
    },
}

#[derive(Debug, Default)]
pub struct EventBus {
    queue: Vec<Event>,
}

impl EventBus {
    pub fn push(&mut self, event: Event) {
        self.queue.push(event);
    }

    pub fn drain(&mut self) -> impl Iterator<Item = Event> + '_ {
        self.queue.drain(..)
    }
}

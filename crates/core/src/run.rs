use crate::{
    Card, Deck, GameConfig, Joker, Phase, RngState, ScoreBreakdown, SessionState, ShopState,
    SortOrder,
};
use thiserror::Error;

mod hand;
mod round;
mod shop;
mod state;

/// Every way a user intent can be rejected. Rejections leave the
/// session untouched; there is no unrecoverable engine fault.
#[derive(Debug, Error)]
pub enum RunError {
    #[error("invalid phase: {0:?}")]
    InvalidPhase(Phase),
    #[error("no hands left")]
    NoHandsLeft,
    #[error("no discards left")]
    NoDiscardsLeft,
    #[error("no cards selected")]
    NoSelection,
    #[error("selection limit reached")]
    SelectionLimit,
    #[error("invalid card index")]
    InvalidCardIndex,
    #[error("not enough money")]
    NotEnoughMoney,
    #[error("no joker slots")]
    NoJokerSlots,
    #[error("invalid shop offer index")]
    InvalidOfferIndex,
    #[error("invalid joker index")]
    InvalidJokerIndex,
    #[error("cannot skip the last round of an ante")]
    SkipNotAllowed,
}

/// A full single-player session: deck, hand, held jokers, counters and
/// the optional open shop. Owned by one logic thread; renderers only
/// ever read snapshots.
#[derive(Debug)]
pub struct RunState {
    pub config: GameConfig,
    pub rng: RngState,
    pub deck: Deck,
    pub hand: Vec<Card>,
    pub jokers: Vec<Joker>,
    pub state: SessionState,
    pub shop: Option<ShopState>,
    pub sort_order: SortOrder,
}

/// Where a committed play left the round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundOutcome {
    /// Target not reached yet, attempts remain.
    Continue,
    /// Target reached; the session has moved into the shop.
    Cleared,
    /// Attempts exhausted short of the target; the session was reset.
    Lost,
}

#[derive(Debug, Clone)]
pub struct PlayResult {
    pub breakdown: ScoreBreakdown,
    pub outcome: RoundOutcome,
    pub hands_left: u8,
    pub round_complete: bool,
}

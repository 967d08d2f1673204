use crate::{GameConfig, HandKind};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Phase {
    Playing,
    Shopping,
}

/// Mutable per-session counters. Built fresh by `new` and replaced
/// wholesale on game over; nothing resets field by field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionState {
    pub ante: u8,
    pub ante_round: u8,
    pub round: u32,
    pub phase: Phase,
    pub target: i64,
    pub score: i64,
    pub hands_left: u8,
    pub discards_left: u8,
    pub money: i64,
    pub last_hand: Option<HandKind>,
    pub round_complete: bool,
}

impl SessionState {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            ante: 1,
            ante_round: 1,
            round: 1,
            phase: Phase::Playing,
            target: config.target_for(1, 1),
            score: 0,
            hands_left: config.hands_per_round,
            discards_left: config.discards_per_round,
            money: config.starting_money,
            last_hand: None,
            round_complete: false,
        }
    }
}

/// Render row for one held joker.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct JokerView {
    pub name: &'static str,
    pub description: &'static str,
    pub cost: i64,
    pub sell_value: i64,
    pub used: bool,
}

/// Read-only view handed to the presentation layer every render tick.
#[derive(Debug, Clone, Serialize)]
pub struct SessionSnapshot {
    pub ante: u8,
    pub ante_round: u8,
    pub round: u32,
    pub phase: Phase,
    pub target: i64,
    pub score: i64,
    pub hands_left: u8,
    pub discards_left: u8,
    pub money: i64,
    pub last_hand: Option<HandKind>,
    pub round_complete: bool,
    pub jokers: Vec<JokerView>,
}

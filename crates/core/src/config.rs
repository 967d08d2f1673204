use serde::{Deserialize, Serialize};

/// Session tunables. Defaults match the shipped game balance; tests
/// override individual fields where a scenario needs it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    pub hand_size: usize,
    pub max_selected: usize,
    pub joker_slots: usize,
    pub hands_per_round: u8,
    pub discards_per_round: u8,
    pub rounds_per_ante: u8,
    pub max_ante: u8,
    pub base_target: i64,
    pub ante_growth: f64,
    pub round_growth: f64,
    pub starting_money: i64,
    pub shop_slots: usize,
    pub interest_step: i64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            hand_size: 8,
            max_selected: 5,
            joker_slots: 6,
            hands_per_round: 4,
            discards_per_round: 3,
            rounds_per_ante: 3,
            max_ante: 8,
            base_target: 200,
            ante_growth: 1.5,
            round_growth: 1.2,
            starting_money: 3,
            shop_slots: 3,
            interest_step: 5,
        }
    }
}

impl GameConfig {
    /// Target score for a given ante and round within the ante:
    /// base * ante_growth^(ante-1) * round_growth^(ante_round-1),
    /// floored.
    pub fn target_for(&self, ante: u8, ante_round: u8) -> i64 {
        let ante_scale = self.ante_growth.powi(ante.saturating_sub(1) as i32);
        let round_scale = self.round_growth.powi(ante_round.saturating_sub(1) as i32);
        (self.base_target as f64 * ante_scale * round_scale).floor() as i64
    }
}

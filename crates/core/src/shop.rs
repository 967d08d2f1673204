use crate::{JokerKind, RngState};
use serde::{Deserialize, Serialize};

/// Transient shop inventory, regenerated every time the shop opens.
/// Offers are drawn with replacement, so duplicate slots are normal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShopState {
    pub offers: Vec<JokerKind>,
}

impl ShopState {
    pub fn generate(slots: usize, rng: &mut RngState) -> Self {
        let mut offers = Vec::with_capacity(slots);
        for _ in 0..slots {
            let idx = (rng.next_u64() % JokerKind::ALL.len() as u64) as usize;
            offers.push(JokerKind::ALL[idx]);
        }
        Self { offers }
    }
}

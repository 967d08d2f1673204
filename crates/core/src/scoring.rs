use crate::{evaluate_hand, scoring_cards, Card, HandKind, Joker, JokerKind};
use serde::{Deserialize, Serialize};

/// Chip total and multiplier; the final score is their floored product.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Score {
    pub chips: i64,
    pub mult: f64,
}

impl Score {
    pub fn total_raw(&self) -> f64 {
        self.chips as f64 * self.mult
    }

    pub fn total(&self) -> i64 {
        self.total_raw().floor() as i64
    }
}

/// Base chips and multiplier per hand category.
pub fn hand_base(kind: HandKind) -> (i64, f64) {
    match kind {
        HandKind::HighCard => (10, 1.0),
        HandKind::Pair => (15, 2.0),
        HandKind::TwoPair => (25, 2.0),
        HandKind::ThreeOfAKind => (30, 3.0),
        HandKind::Straight => (30, 4.0),
        HandKind::Flush => (35, 4.0),
        HandKind::FullHouse => (40, 4.0),
        HandKind::FourOfAKind => (60, 7.0),
        HandKind::StraightFlush => (100, 8.0),
        HandKind::RoyalFlush => (100, 10.0),
    }
}

/// Base money reward for winning a round with the given category.
pub fn hand_reward(kind: HandKind) -> i64 {
    match kind {
        HandKind::HighCard => 2,
        HandKind::Pair => 3,
        HandKind::TwoPair => 4,
        HandKind::ThreeOfAKind => 5,
        HandKind::Straight => 6,
        HandKind::Flush => 7,
        HandKind::FullHouse => 8,
        HandKind::FourOfAKind => 10,
        HandKind::StraightFlush => 15,
        HandKind::RoyalFlush => 20,
    }
}

/// Everything a single scoring pass produced. The commit path applies
/// `glass_fired` to the held jokers; the preview path throws it away.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreBreakdown {
    pub hand: HandKind,
    pub base: Score,
    pub card_chips: i64,
    pub scoring_indices: Vec<usize>,
    pub total: Score,
    /// Indices (into the joker list) of single-use jokers that fired.
    pub glass_fired: Vec<usize>,
}

impl ScoreBreakdown {
    pub fn empty() -> Self {
        Self {
            hand: HandKind::HighCard,
            base: Score::default(),
            card_chips: 0,
            scoring_indices: Vec::new(),
            total: Score::default(),
            glass_fired: Vec::new(),
        }
    }
}

/// Scores a selection against the held jokers. Pure: card values and
/// joker `used` flags are read, never written, so preview and commit
/// share this one function.
///
/// Order of operations: category base, chip sum over the scoring
/// subset (+1 per card while a Lucky joker is held), flat chip bonuses
/// per joker instance, additive multipliers, then multiplicative
/// multipliers in joker-list order.
pub fn score_hand(cards: &[Card], jokers: &[Joker]) -> ScoreBreakdown {
    if cards.is_empty() {
        return ScoreBreakdown::empty();
    }

    let hand = evaluate_hand(cards);
    let (base_chips, base_mult) = hand_base(hand);
    let scoring_indices = scoring_cards(cards, hand);

    let value_boost = jokers.iter().any(|joker| joker.kind == JokerKind::Lucky);
    let card_chips: i64 = scoring_indices
        .iter()
        .map(|&idx| {
            let card = &cards[idx];
            if card.filler {
                0
            } else if value_boost {
                card.chip_value() + 1
            } else {
                card.chip_value()
            }
        })
        .sum();

    let mut chips = base_chips + card_chips;
    for joker in jokers {
        chips += match joker.kind {
            JokerKind::Lucky => 10,
            JokerKind::Fool => 5,
            JokerKind::Stone => 3,
            _ => 0,
        };
    }

    let mut mult = base_mult;
    for joker in jokers {
        // Steel is the one additive multiplier effect.
        if joker.kind == JokerKind::Steel {
            mult += joker.kind.multiplier();
        }
    }

    let mut glass_fired = Vec::new();
    for (idx, joker) in jokers.iter().enumerate() {
        let factor = joker.kind.multiplier();
        match joker.kind {
            JokerKind::Glass if !joker.used => {
                mult *= factor;
                glass_fired.push(idx);
            }
            JokerKind::Bronze if hand == HandKind::Pair => mult *= factor,
            JokerKind::Silver if hand == HandKind::ThreeOfAKind => mult *= factor,
            JokerKind::Gold if hand == HandKind::Straight => mult *= factor,
            JokerKind::Diamond if hand == HandKind::Flush => mult *= factor,
            JokerKind::Cosmic => mult *= factor,
            JokerKind::Stone => mult *= factor,
            _ => {}
        }
    }

    ScoreBreakdown {
        hand,
        base: Score {
            chips: base_chips,
            mult: base_mult,
        },
        card_chips,
        scoring_indices,
        total: Score { chips, mult },
        glass_fired,
    }
}

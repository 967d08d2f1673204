use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Suit order only matters for display sorting; gameplay compares suits
/// for equality (flush detection) and nothing else.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Suit {
    Hearts,
    Diamonds,
    Clubs,
    Spades,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Hearts, Suit::Diamonds, Suit::Clubs, Suit::Spades];

    pub fn symbol(self) -> &'static str {
        match self {
            Suit::Hearts => "H",
            Suit::Diamonds => "D",
            Suit::Clubs => "C",
            Suit::Spades => "S",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Rank {
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
}

impl Rank {
    pub const ALL: [Rank; 13] = [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ];

    /// Numeric comparison value, ace high.
    pub fn value(self) -> i64 {
        match self {
            Rank::Two => 2,
            Rank::Three => 3,
            Rank::Four => 4,
            Rank::Five => 5,
            Rank::Six => 6,
            Rank::Seven => 7,
            Rank::Eight => 8,
            Rank::Nine => 9,
            Rank::Ten => 10,
            Rank::Jack => 11,
            Rank::Queen => 12,
            Rank::King => 13,
            Rank::Ace => 14,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
            Rank::Ace => "A",
        }
    }
}

/// A playing card. `filler` marks the non-scoring wildcard card type;
/// it never contributes chips and is skipped by rank/suit counting.
/// Exactly one of deck, hand or discard pile owns a card at any time.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Card {
    pub suit: Suit,
    pub rank: Rank,
    #[serde(default)]
    pub filler: bool,
    #[serde(default)]
    pub selected: bool,
}

impl Card {
    pub fn standard(suit: Suit, rank: Rank) -> Self {
        Self {
            suit,
            rank,
            filler: false,
            selected: false,
        }
    }

    pub fn filler(suit: Suit, rank: Rank) -> Self {
        Self {
            suit,
            rank,
            filler: true,
            selected: false,
        }
    }

    /// Chip contribution when this card lands in the scoring subset.
    pub fn chip_value(&self) -> i64 {
        if self.filler {
            0
        } else {
            self.rank.value()
        }
    }

    pub fn label(&self) -> String {
        if self.filler {
            "JKR".to_string()
        } else {
            format!("{}{}", self.rank.label(), self.suit.symbol())
        }
    }
}

/// The two display orders a hand can be kept in. Both are total and
/// stable, applied to the whole hand after every refill or mode switch.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum SortOrder {
    ByRank,
    BySuit,
}

impl SortOrder {
    pub fn compare(self, a: &Card, b: &Card) -> Ordering {
        match self {
            SortOrder::ByRank => a
                .chip_value()
                .cmp(&b.chip_value())
                .then(a.suit.cmp(&b.suit)),
            SortOrder::BySuit => a
                .suit
                .cmp(&b.suit)
                .then(a.chip_value().cmp(&b.chip_value())),
        }
    }
}

use crate::Card;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Hand categories in evaluation precedence order, weakest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HandKind {
    HighCard,
    Pair,
    TwoPair,
    ThreeOfAKind,
    Straight,
    Flush,
    FullHouse,
    FourOfAKind,
    StraightFlush,
    RoyalFlush,
}

impl HandKind {
    pub const ALL: [HandKind; 10] = [
        HandKind::HighCard,
        HandKind::Pair,
        HandKind::TwoPair,
        HandKind::ThreeOfAKind,
        HandKind::Straight,
        HandKind::Flush,
        HandKind::FullHouse,
        HandKind::FourOfAKind,
        HandKind::StraightFlush,
        HandKind::RoyalFlush,
    ];

    pub fn label(self) -> &'static str {
        match self {
            HandKind::HighCard => "High Card",
            HandKind::Pair => "Pair",
            HandKind::TwoPair => "Two Pair",
            HandKind::ThreeOfAKind => "Three of a Kind",
            HandKind::Straight => "Straight",
            HandKind::Flush => "Flush",
            HandKind::FullHouse => "Full House",
            HandKind::FourOfAKind => "Four of a Kind",
            HandKind::StraightFlush => "Straight Flush",
            HandKind::RoyalFlush => "Royal Flush",
        }
    }
}

/// Classifies a selected set of cards, first match wins. Filler cards
/// never count toward rank or suit totals; an empty (or all-filler)
/// selection degenerates to a high card.
pub fn evaluate_hand(cards: &[Card]) -> HandKind {
    let scored: Vec<&Card> = cards.iter().filter(|card| !card.filler).collect();
    if scored.is_empty() {
        return HandKind::HighCard;
    }

    let mut rank_counts: HashMap<i64, usize> = HashMap::new();
    let mut suits: HashMap<crate::Suit, usize> = HashMap::new();
    for card in &scored {
        *rank_counts.entry(card.rank.value()).or_insert(0) += 1;
        *suits.entry(card.suit).or_insert(0) += 1;
    }

    // Flush and straight both need at least five contributing cards, so
    // neither is reachable under a smaller selection.
    let is_flush = suits.len() == 1 && scored.len() >= 5;
    let mut distinct: Vec<i64> = rank_counts.keys().copied().collect();
    distinct.sort_unstable();
    let span = distinct[distinct.len() - 1] - distinct[0];
    let is_straight = distinct.len() >= 5 && span == distinct.len() as i64 - 1;
    let max_value = distinct[distinct.len() - 1];

    let mut counts: Vec<usize> = rank_counts.values().copied().collect();
    counts.sort_unstable_by(|a, b| b.cmp(a));
    let pair_groups = counts.iter().filter(|&&count| count == 2).count();

    if is_straight && is_flush && max_value == 14 {
        return HandKind::RoyalFlush;
    }
    if is_straight && is_flush {
        return HandKind::StraightFlush;
    }
    if counts.iter().any(|&count| count == 4) {
        return HandKind::FourOfAKind;
    }
    if counts == [3, 2] {
        return HandKind::FullHouse;
    }
    if is_flush {
        return HandKind::Flush;
    }
    if is_straight {
        return HandKind::Straight;
    }
    if counts.iter().any(|&count| count >= 3) {
        return HandKind::ThreeOfAKind;
    }
    if pair_groups == 2 {
        return HandKind::TwoPair;
    }
    if pair_groups >= 1 {
        return HandKind::Pair;
    }
    HandKind::HighCard
}

/// Indices of the cards whose values count toward the chip total for
/// `kind`. Matched-group categories keep only the matched cards; a
/// high card keeps the single highest; everything else keeps every
/// non-filler card. "First-found" follows card order, and a matched
/// three-of-a-kind group is sliced to three cards.
pub fn scoring_cards(cards: &[Card], kind: HandKind) -> Vec<usize> {
    let counts = value_counts(cards);
    match kind {
        HandKind::HighCard => highest_card_index(cards).into_iter().collect(),
        HandKind::Pair => match first_value_where(cards, &counts, |count| count == 2) {
            Some(value) => indices_of_value(cards, value, usize::MAX),
            None => Vec::new(),
        },
        HandKind::TwoPair => cards
            .iter()
            .enumerate()
            .filter(|(_, card)| {
                !card.filler && counts.get(&card.rank.value()).copied().unwrap_or(0) == 2
            })
            .map(|(idx, _)| idx)
            .collect(),
        HandKind::ThreeOfAKind => match first_value_where(cards, &counts, |count| count >= 3) {
            Some(value) => indices_of_value(cards, value, 3),
            None => Vec::new(),
        },
        HandKind::FourOfAKind => match first_value_where(cards, &counts, |count| count == 4) {
            Some(value) => indices_of_value(cards, value, usize::MAX),
            None => Vec::new(),
        },
        HandKind::Straight
        | HandKind::Flush
        | HandKind::FullHouse
        | HandKind::StraightFlush
        | HandKind::RoyalFlush => cards
            .iter()
            .enumerate()
            .filter(|(_, card)| !card.filler)
            .map(|(idx, _)| idx)
            .collect(),
    }
}

fn value_counts(cards: &[Card]) -> HashMap<i64, usize> {
    let mut counts = HashMap::new();
    for card in cards.iter().filter(|card| !card.filler) {
        *counts.entry(card.rank.value()).or_insert(0) += 1;
    }
    counts
}

fn first_value_where(
    cards: &[Card],
    counts: &HashMap<i64, usize>,
    pred: impl Fn(usize) -> bool,
) -> Option<i64> {
    cards
        .iter()
        .filter(|card| !card.filler)
        .map(|card| card.rank.value())
        .find(|value| pred(counts.get(value).copied().unwrap_or(0)))
}

fn indices_of_value(cards: &[Card], value: i64, limit: usize) -> Vec<usize> {
    cards
        .iter()
        .enumerate()
        .filter(|(_, card)| !card.filler && card.rank.value() == value)
        .map(|(idx, _)| idx)
        .take(limit)
        .collect()
}

fn highest_card_index(cards: &[Card]) -> Option<usize> {
    let mut best: Option<(usize, i64)> = None;
    for (idx, card) in cards.iter().enumerate() {
        if card.filler {
            continue;
        }
        let value = card.rank.value();
        if best.map(|(_, v)| value > v).unwrap_or(true) {
            best = Some((idx, value));
        }
    }
    best.map(|(idx, _)| idx)
}

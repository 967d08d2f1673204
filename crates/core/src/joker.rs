use serde::{Deserialize, Serialize};

/// The full joker catalog. Costs, descriptions and multipliers are
/// fixed per kind; effect dispatch lives in the scoring engine.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum JokerKind {
    Steel,
    Glass,
    Lucky,
    Bronze,
    Silver,
    Gold,
    Diamond,
    Cosmic,
    Fool,
    Stone,
}

impl JokerKind {
    pub const ALL: [JokerKind; 10] = [
        JokerKind::Steel,
        JokerKind::Glass,
        JokerKind::Lucky,
        JokerKind::Bronze,
        JokerKind::Silver,
        JokerKind::Gold,
        JokerKind::Diamond,
        JokerKind::Cosmic,
        JokerKind::Fool,
        JokerKind::Stone,
    ];

    pub fn name(self) -> &'static str {
        match self {
            JokerKind::Steel => "Steel Joker",
            JokerKind::Glass => "Glass Joker",
            JokerKind::Lucky => "Lucky Joker",
            JokerKind::Bronze => "Bronze Joker",
            JokerKind::Silver => "Silver Joker",
            JokerKind::Gold => "Gold Joker",
            JokerKind::Diamond => "Diamond Joker",
            JokerKind::Cosmic => "Cosmic Joker",
            JokerKind::Fool => "Fool Joker",
            JokerKind::Stone => "Stone Joker",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            JokerKind::Steel => "Adds +2 to base multiplier",
            JokerKind::Glass => "x4 multiplier but breaks after use",
            JokerKind::Lucky => "Adds +1 to all card values",
            JokerKind::Bronze => "x1.5 multiplier for pairs",
            JokerKind::Silver => "x2 multiplier for three of a kind",
            JokerKind::Gold => "x3 multiplier for straights",
            JokerKind::Diamond => "x2.5 multiplier for flushes",
            JokerKind::Cosmic => "x2 all multipliers",
            JokerKind::Fool => "Adds +5 chips to base",
            JokerKind::Stone => "x1.5 multiplier, +3 chips",
        }
    }

    pub fn cost(self) -> i64 {
        match self {
            JokerKind::Steel => 4,
            JokerKind::Glass => 7,
            JokerKind::Lucky => 3,
            JokerKind::Bronze => 2,
            JokerKind::Silver => 5,
            JokerKind::Gold => 6,
            JokerKind::Diamond => 6,
            JokerKind::Cosmic => 9,
            JokerKind::Fool => 3,
            JokerKind::Stone => 4,
        }
    }

    pub fn multiplier(self) -> f64 {
        match self {
            JokerKind::Steel => 2.0,
            JokerKind::Glass => 4.0,
            JokerKind::Lucky => 1.0,
            JokerKind::Bronze => 1.5,
            JokerKind::Silver => 2.0,
            JokerKind::Gold => 3.0,
            JokerKind::Diamond => 2.5,
            JokerKind::Cosmic => 2.0,
            JokerKind::Fool => 1.0,
            JokerKind::Stone => 1.5,
        }
    }

    /// Kinds whose effect fires once per round and then stays dormant
    /// until the next round boundary.
    pub fn single_use(self) -> bool {
        matches!(self, JokerKind::Glass)
    }
}

/// An owned joker instance. `used` only carries meaning for single-use
/// kinds and is cleared whenever a new round starts.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Joker {
    pub kind: JokerKind,
    pub used: bool,
}

impl Joker {
    pub fn new(kind: JokerKind) -> Self {
        Self { kind, used: false }
    }

    /// Resale value: half the original catalog cost, rounded down,
    /// regardless of wear.
    pub fn sell_value(&self) -> i64 {
        self.kind.cost() / 2
    }
}

use felt_core::{
    Card, Event, EventBus, GameConfig, Phase, RoundOutcome, RunError, RunState, SortOrder,
};
use std::collections::VecDeque;

pub const DEFAULT_RUN_SEED: u64 = 0xC0FFEE;
const MAX_EVENT_LOG: usize = 200;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusPane {
    Hand,
    Shop,
    Jokers,
    Events,
}

pub struct App {
    pub run: RunState,
    pub events: EventBus,
    pub focus: FocusPane,
    pub hand_cursor: usize,
    pub shop_cursor: usize,
    pub joker_cursor: usize,
    pub event_log: VecDeque<String>,
    pub status_line: String,
    pub show_help: bool,
    pub should_quit: bool,
}

impl App {
    pub fn bootstrap(seed: u64) -> Self {
        let run = RunState::new(GameConfig::default(), seed);
        let mut app = Self {
            run,
            events: EventBus::default(),
            focus: FocusPane::Hand,
            hand_cursor: 0,
            shop_cursor: 0,
            joker_cursor: 0,
            event_log: VecDeque::new(),
            status_line: "ready".to_string(),
            show_help: false,
            should_quit: false,
        };
        app.push_event_line(format!("new run, seed {seed}"));
        app
    }

    pub fn on_tick(&mut self) {}

    pub fn focus_label(&self, pane: FocusPane) -> &'static str {
        match pane {
            FocusPane::Hand => "Hand",
            FocusPane::Shop => "Shop",
            FocusPane::Jokers => "Jokers",
            FocusPane::Events => "Events",
        }
    }

    pub fn phase_label(&self) -> &'static str {
        match self.run.state.phase {
            Phase::Playing => "Playing",
            Phase::Shopping => "Shopping",
        }
    }

    pub fn next_hint(&self) -> &'static str {
        match self.run.state.phase {
            Phase::Playing => "select cards, then play or discard",
            Phase::Shopping => "buy/sell jokers, then next round",
        }
    }

    pub fn cycle_focus(&mut self, forward: bool) {
        self.focus = match (self.focus, forward) {
            (FocusPane::Hand, true) => FocusPane::Shop,
            (FocusPane::Shop, true) => FocusPane::Jokers,
            (FocusPane::Jokers, true) => FocusPane::Events,
            (FocusPane::Events, true) => FocusPane::Hand,
            (FocusPane::Hand, false) => FocusPane::Events,
            (FocusPane::Shop, false) => FocusPane::Hand,
            (FocusPane::Jokers, false) => FocusPane::Shop,
            (FocusPane::Events, false) => FocusPane::Jokers,
        };
    }

    pub fn move_cursor(&mut self, down: bool) {
        match self.focus {
            FocusPane::Hand => {
                let len = self.run.hand.len();
                move_index(&mut self.hand_cursor, len, down);
            }
            FocusPane::Shop => {
                let len = self.run.shop_offers().len();
                move_index(&mut self.shop_cursor, len, down);
            }
            FocusPane::Jokers => {
                let len = self.run.jokers.len();
                move_index(&mut self.joker_cursor, len, down);
            }
            FocusPane::Events => {}
        }
    }

    pub fn toggle_at_cursor(&mut self) {
        if self.focus != FocusPane::Hand || self.run.hand.is_empty() {
            return;
        }
        let idx = self.hand_cursor.min(self.run.hand.len() - 1);
        if let Err(err) = self.run.toggle_selection(idx) {
            self.push_error(err);
        }
    }

    pub fn clear_selection(&mut self) {
        self.run.clear_selection();
    }

    pub fn activate_primary(&mut self) {
        if self.show_help {
            self.show_help = false;
            return;
        }
        match self.focus {
            FocusPane::Hand => match self.run.state.phase {
                Phase::Playing => {
                    if self.run.selected_count() == 0 {
                        self.toggle_at_cursor();
                    } else {
                        self.play_selected();
                    }
                }
                Phase::Shopping => self.next_round(),
            },
            FocusPane::Shop => self.buy_selected(),
            FocusPane::Jokers => self.sell_selected(),
            FocusPane::Events => {}
        }
    }

    pub fn play_selected(&mut self) {
        match self.run.play_selected(&mut self.events) {
            Ok(result) => {
                let line = format!(
                    "played {} = {}",
                    result.breakdown.hand.label(),
                    result.breakdown.total.total()
                );
                match result.outcome {
                    RoundOutcome::Continue => self.push_status(line),
                    RoundOutcome::Cleared => {
                        self.push_status(format!("{line}, round cleared"));
                        self.focus = FocusPane::Shop;
                    }
                    RoundOutcome::Lost => {
                        self.push_status(format!("{line}, run over"));
                        self.focus = FocusPane::Hand;
                    }
                }
            }
            Err(err) => self.push_error(err),
        }
        self.flush_events();
        self.normalize_cursors();
    }

    pub fn discard_selected(&mut self) {
        match self.run.discard_selected(&mut self.events) {
            Ok(_) => self.push_status("discarded"),
            Err(err) => self.push_error(err),
        }
        self.flush_events();
        self.normalize_cursors();
    }

    pub fn skip_round(&mut self) {
        match self.run.skip_round(&mut self.events) {
            Ok(_) => self.push_status("round skipped"),
            Err(err) => self.push_error(err),
        }
        self.flush_events();
        self.normalize_cursors();
    }

    pub fn next_round(&mut self) {
        match self.run.advance_round(&mut self.events) {
            Ok(_) => {
                self.push_status("next round");
                self.focus = FocusPane::Hand;
            }
            Err(err) => self.push_error(err),
        }
        self.flush_events();
        self.normalize_cursors();
    }

    pub fn buy_selected(&mut self) {
        let offers = self.run.shop_offers().len();
        if offers == 0 {
            self.push_status("nothing to buy");
            return;
        }
        let idx = self.shop_cursor.min(offers - 1);
        match self.run.buy_joker(idx, &mut self.events) {
            Ok(_) => self.push_status("bought"),
            Err(err) => self.push_error(err),
        }
        self.flush_events();
        self.normalize_cursors();
    }

    pub fn sell_selected(&mut self) {
        if self.run.jokers.is_empty() {
            self.push_status("no jokers to sell");
            return;
        }
        let idx = self.joker_cursor.min(self.run.jokers.len() - 1);
        match self.run.sell_joker(idx, &mut self.events) {
            Ok(_) => self.push_status("sold"),
            Err(err) => self.push_error(err),
        }
        self.flush_events();
        self.normalize_cursors();
    }

    pub fn toggle_sort(&mut self) {
        let next = match self.run.sort_order {
            SortOrder::ByRank => SortOrder::BySuit,
            SortOrder::BySuit => SortOrder::ByRank,
        };
        self.run.set_sort_order(next);
        self.push_status(match next {
            SortOrder::ByRank => "sorted by rank",
            SortOrder::BySuit => "sorted by suit",
        });
    }

    pub fn card_label(&self, index: usize, card: &Card) -> String {
        let marker = if card.selected { "*" } else { " " };
        format!("{marker} {index:>2}: {}", card.label())
    }

    pub fn shop_rows(&self) -> Vec<String> {
        self.run
            .shop_offers()
            .iter()
            .enumerate()
            .map(|(idx, kind)| {
                format!("{idx} {} ${} | {}", kind.name(), kind.cost(), kind.description())
            })
            .collect()
    }

    pub fn joker_rows(&self) -> Vec<String> {
        self.run
            .snapshot()
            .jokers
            .iter()
            .enumerate()
            .map(|(idx, joker)| {
                let worn = if joker.used { " [spent]" } else { "" };
                format!("{idx} {} sell ${}{worn}", joker.name, joker.sell_value)
            })
            .collect()
    }

    pub fn push_status(&mut self, value: impl Into<String>) {
        self.status_line = value.into();
    }

    pub fn push_error(&mut self, err: RunError) {
        self.status_line = format!("error: {err}");
    }

    pub fn normalize_cursors(&mut self) {
        clamp_index(&mut self.hand_cursor, self.run.hand.len());
        clamp_index(&mut self.shop_cursor, self.run.shop_offers().len());
        clamp_index(&mut self.joker_cursor, self.run.jokers.len());
    }

    fn flush_events(&mut self) {
        let drained: Vec<_> = self.events.drain().collect();
        for event in drained {
            self.push_event_line(format_event(&event));
        }
    }

    fn push_event_line(&mut self, line: String) {
        if self.event_log.len() >= MAX_EVENT_LOG {
            let _ = self.event_log.pop_front();
        }
        self.event_log.push_back(line);
    }
}

fn move_index(value: &mut usize, len: usize, down: bool) {
    if len == 0 {
        *value = 0;
        return;
    }
    if down {
        *value = (*value + 1) % len;
    } else if *value == 0 {
        *value = len - 1;
    } else {
        *value -= 1;
    }
}

fn clamp_index(value: &mut usize, len: usize) {
    if len == 0 {
        *value = 0;
    } else if *value >= len {
        *value = len - 1;
    }
}

fn format_event(event: &Event) -> String {
    match event {
        Event::RoundStarted {
            ante,
            ante_round,
            round,
            target,
            hands,
            discards,
        } => format!("round {round} started A{ante}.{ante_round} target {target} H{hands}/D{discards}"),
        Event::HandDealt { count } => format!("dealt {count}"),
        Event::HandScored {
            hand,
            chips,
            mult,
            total,
        } => format!("scored {}: {chips} x{mult:.2} = {total}", hand.label()),
        Event::HandDiscarded {
            count,
            discards_left,
        } => format!("discarded {count}, {discards_left} left"),
        Event::RoundCleared {
            score,
            reward,
            money,
        } => format!("round cleared score {score} reward {reward} money {money}"),
        Event::RoundSkipped { ante, ante_round } => format!("skipped A{ante}.{ante_round}"),
        Event::ShopEntered { offers } => format!("shop opened with {offers} offers"),
        Event::JokerBought { kind, cost, money } => {
            format!("bought {} cost {cost} money {money}", kind.name())
        }
        Event::JokerSold {
            kind,
            refund,
            money,
        } => format!("sold {} refund {refund} money {money}", kind.name()),
        Event::GameOver {
            ante,
            round,
            score,
            target,
        } => format!("run over A{ante} round {round} score {score}/{target}"),
    }
}

use crate::app::{App, FocusPane};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Alignment, Color, Line, Modifier, Style, Stylize};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap};
use ratatui::Frame;

pub fn draw(frame: &mut Frame, app: &App) {
    let root = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6),
            Constraint::Min(12),
            Constraint::Length(10),
        ])
        .split(frame.area());

    draw_header(frame, root[0], app);

    let middle = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(root[1]);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(6), Constraint::Min(6)])
        .split(middle[1]);

    draw_hand(frame, middle[0], app);
    draw_shop(frame, right[0], app);
    draw_jokers(frame, right[1], app);
    draw_events(frame, root[2], app);

    if app.show_help {
        draw_help_popup(frame);
    }
}

fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let state = &app.run.state;
    let title = format!(
        "Felt | Focus: {} | Hint: {}",
        app.focus_label(app.focus),
        app.next_hint()
    );
    let summary = format!(
        "A{}.{} round {} {}  ${}  Score {}/{}  H {}  D {}",
        state.ante,
        state.ante_round,
        state.round,
        app.phase_label(),
        state.money,
        state.score,
        state.target,
        state.hands_left,
        state.discards_left,
    );
    let preview = app.run.preview();
    let seed = app.run.rng.seed();
    let last = state
        .last_hand
        .map(|hand| hand.label())
        .unwrap_or("-");
    let preview_line = if preview.scoring_indices.is_empty() {
        format!("Seed {seed} | last {last} | no cards selected")
    } else {
        format!(
            "Seed {seed} | last {last} | preview {}: {} x{:.2} = {}",
            preview.hand.label(),
            preview.total.chips,
            preview.total.mult,
            preview.total.total()
        )
    };
    let lines = vec![
        Line::from(title.bold()),
        Line::from(summary),
        Line::from(preview_line),
        Line::from(format!("Status: {}", app.status_line)),
    ];
    let block = Block::default().borders(Borders::ALL).title("Overview");
    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: true }).block(block);
    frame.render_widget(paragraph, area);
}

fn draw_hand(frame: &mut Frame, area: Rect, app: &App) {
    let items: Vec<ListItem<'_>> = if app.run.hand.is_empty() {
        vec![ListItem::new("empty")]
    } else {
        app.run
            .hand
            .iter()
            .enumerate()
            .map(|(idx, card)| ListItem::new(app.card_label(idx, card)))
            .collect()
    };
    let block = pane_block("Hand", app.focus == FocusPane::Hand);
    let list = List::new(items)
        .block(block)
        .highlight_style(
            Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol(">> ");
    let mut state = ListState::default();
    if !app.run.hand.is_empty() {
        state.select(Some(app.hand_cursor.min(app.run.hand.len() - 1)));
    }
    frame.render_stateful_widget(list, area, &mut state);
}

fn draw_shop(frame: &mut Frame, area: Rect, app: &App) {
    let rows = app.shop_rows();
    if rows.is_empty() {
        let block = pane_block("Shop", app.focus == FocusPane::Shop);
        let text = if app.run.shop.is_some() {
            "sold out"
        } else {
            "shop opens after clearing the round"
        };
        frame.render_widget(
            Paragraph::new(text)
                .alignment(Alignment::Center)
                .block(block),
            area,
        );
        return;
    }
    let items: Vec<ListItem<'_>> = rows
        .iter()
        .map(|row| ListItem::new(row.clone()))
        .collect();
    let block = pane_block("Shop", app.focus == FocusPane::Shop);
    let list = List::new(items)
        .block(block)
        .highlight_style(
            Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol(">> ");
    let mut state = ListState::default();
    state.select(Some(app.shop_cursor.min(rows.len() - 1)));
    frame.render_stateful_widget(list, area, &mut state);
}

fn draw_jokers(frame: &mut Frame, area: Rect, app: &App) {
    let rows = app.joker_rows();
    let slots = app.run.config.joker_slots;
    let title = format!("Jokers {}/{}", rows.len(), slots);
    let items: Vec<ListItem<'_>> = if rows.is_empty() {
        vec![ListItem::new("empty")]
    } else {
        rows.iter().map(|row| ListItem::new(row.clone())).collect()
    };
    let block = pane_block(title.as_str(), app.focus == FocusPane::Jokers);
    let list = List::new(items)
        .block(block)
        .highlight_style(
            Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol(">> ");
    let mut state = ListState::default();
    if !rows.is_empty() {
        state.select(Some(app.joker_cursor.min(rows.len() - 1)));
    }
    frame.render_stateful_widget(list, area, &mut state);
}

fn draw_events(frame: &mut Frame, area: Rect, app: &App) {
    let capacity = area.height.saturating_sub(2) as usize;
    let start = app.event_log.len().saturating_sub(capacity);
    let lines: Vec<Line<'_>> = app
        .event_log
        .iter()
        .skip(start)
        .map(|line| Line::from(line.clone()))
        .collect();
    let block = pane_block("Events", app.focus == FocusPane::Events);
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn draw_help_popup(frame: &mut Frame) {
    let area = centered_rect(70, 60, frame.area());
    frame.render_widget(Clear, area);
    let lines = vec![
        Line::from("q quit | ? help | tab focus | arrows/jk move"),
        Line::from("space toggle select | esc clear | enter context action"),
        Line::from("p play | x discard | s sort rank/suit"),
        Line::from("b buy | v sell | n next round | Shift+k skip round"),
        Line::from("clear the target score before running out of hands"),
    ];
    let block = Block::default()
        .title("Help")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: true }),
        area,
    );
}

fn pane_block(title: &str, focused: bool) -> Block<'_> {
    let mut block = Block::default().title(title).borders(Borders::ALL);
    if focused {
        block = block.border_style(Style::default().fg(Color::Yellow));
    }
    block
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

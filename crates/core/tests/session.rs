use felt_core::{
    Card, EventBus, Event, GameConfig, HandKind, Joker, JokerKind, Phase, Rank, RoundOutcome,
    RunError, RunState, ShopState, SortOrder, Suit,
};

fn new_run(seed: u64) -> (RunState, EventBus) {
    (RunState::new(GameConfig::default(), seed), EventBus::default())
}

fn card(rank: Rank, suit: Suit) -> Card {
    Card::standard(suit, rank)
}

fn select_first(run: &mut RunState, count: usize) {
    for idx in 0..count {
        run.toggle_selection(idx).expect("toggle");
    }
}

/// Replaces the dealt hand with a fixed one of the same size so the
/// deck/hand/discard total stays at 52 cards.
fn force_hand(run: &mut RunState, mut cards: Vec<Card>) {
    assert_eq!(cards.len(), run.hand.len());
    std::mem::swap(&mut run.hand, &mut cards);
}

fn fixed_pair_hand() -> Vec<Card> {
    vec![
        card(Rank::King, Suit::Spades),
        card(Rank::King, Suit::Hearts),
        card(Rank::Two, Suit::Clubs),
        card(Rank::Four, Suit::Diamonds),
        card(Rank::Six, Suit::Clubs),
        card(Rank::Eight, Suit::Diamonds),
        card(Rank::Ten, Suit::Clubs),
        card(Rank::Queen, Suit::Diamonds),
    ]
}

#[test]
fn fresh_session_matches_defaults() {
    let (run, _) = new_run(1);
    assert_eq!(run.card_count(), 52);
    assert_eq!(run.hand.len(), 8);
    assert_eq!(run.state.money, 3);
    assert_eq!(run.state.target, 200);
    assert_eq!(run.state.hands_left, 4);
    assert_eq!(run.state.discards_left, 3);
    assert_eq!(run.state.phase, Phase::Playing);
    assert!(run.shop.is_none());
}

#[test]
fn card_universe_is_conserved_across_operations() {
    let (mut run, mut events) = new_run(2);
    run.state.target = 1_000_000;

    select_first(&mut run, 2);
    run.discard_selected(&mut events).expect("discard");
    assert_eq!(run.card_count(), 52);
    assert_eq!(run.hand.len(), 8);
    assert_eq!(run.state.discards_left, 2);

    select_first(&mut run, 3);
    run.play_selected(&mut events).expect("play");
    assert_eq!(run.card_count(), 52);
    assert_eq!(run.hand.len(), 8);
    assert_eq!(run.state.hands_left, 3);
}

#[test]
fn selection_never_exceeds_the_cap() {
    let (mut run, _) = new_run(3);
    select_first(&mut run, 5);
    assert!(matches!(
        run.toggle_selection(5),
        Err(RunError::SelectionLimit)
    ));
    assert_eq!(run.selected_count(), 5);
    // Deselecting and reselecting still works at the cap.
    assert!(!run.toggle_selection(0).expect("deselect"));
    assert!(run.toggle_selection(5).expect("reselect"));
    assert_eq!(run.selected_count(), 5);
}

#[test]
fn toggling_out_of_range_is_rejected() {
    let (mut run, _) = new_run(3);
    assert!(matches!(
        run.toggle_selection(99),
        Err(RunError::InvalidCardIndex)
    ));
}

#[test]
fn pair_of_kings_play_scores_eighty_two_and_clears() {
    let (mut run, mut events) = new_run(4);
    run.state.target = 82;
    force_hand(&mut run, fixed_pair_hand());
    run.toggle_selection(0).expect("select");
    run.toggle_selection(1).expect("select");

    let result = run.play_selected(&mut events).expect("play");
    assert_eq!(result.breakdown.hand, HandKind::Pair);
    assert_eq!(result.breakdown.total.total(), 82);
    assert_eq!(result.outcome, RoundOutcome::Cleared);
    assert!(result.round_complete);
    assert_eq!(run.state.last_hand, Some(HandKind::Pair));
    assert_eq!(run.state.phase, Phase::Shopping);
    assert_eq!(run.shop_offers().len(), 3);
    // Reward: pair base 3 + 3 unspent hands + 3/5 interest on starting money.
    assert_eq!(run.state.money, 3 + 3 + 3);
}

#[test]
fn reward_interest_uses_money_before_the_reward() {
    let (mut run, mut events) = new_run(5);
    run.state.target = 1;
    run.state.money = 10;
    force_hand(&mut run, fixed_pair_hand());
    run.toggle_selection(7).expect("select queen");

    run.play_selected(&mut events).expect("play");
    // High card base 2 + 3 unspent hands + 10/5 interest = 7.
    assert_eq!(run.state.money, 17);
}

#[test]
fn fool_jokers_add_to_the_reward() {
    let (mut run, mut events) = new_run(6);
    run.state.target = 1;
    run.jokers.push(Joker::new(JokerKind::Fool));
    run.jokers.push(Joker::new(JokerKind::Fool));
    force_hand(&mut run, fixed_pair_hand());
    run.toggle_selection(7).expect("select");

    run.play_selected(&mut events).expect("play");
    // High card 2 + 2 fools + 3 hands + interest 0, plus the fools'
    // +5 chips each only affect the score, not the payout.
    assert_eq!(run.state.money, 3 + 2 + 2 + 3);
}

#[test]
fn preview_matches_commit_and_stays_pure() {
    let (mut run, mut events) = new_run(7);
    run.state.target = 1_000_000;
    run.jokers.push(Joker::new(JokerKind::Glass));
    run.jokers.push(Joker::new(JokerKind::Steel));
    force_hand(&mut run, fixed_pair_hand());
    run.toggle_selection(0).expect("select");
    run.toggle_selection(1).expect("select");

    let preview = run.preview();
    assert!(!run.jokers[0].used);
    assert_eq!(run.preview(), preview);

    let result = run.play_selected(&mut events).expect("play");
    assert_eq!(result.breakdown.total, preview.total);
    assert_eq!(run.state.score, preview.total.total());
    assert!(run.jokers[0].used);
}

#[test]
fn glass_fires_once_per_round_and_resets_on_advance() {
    let (mut run, mut events) = new_run(8);
    run.state.target = 1_000_000;
    run.jokers.push(Joker::new(JokerKind::Glass));

    select_first(&mut run, 1);
    let first = run.play_selected(&mut events).expect("first play");
    assert_eq!(first.breakdown.glass_fired, vec![0]);
    assert!(run.jokers[0].used);

    select_first(&mut run, 1);
    let second = run.play_selected(&mut events).expect("second play");
    assert!(second.breakdown.glass_fired.is_empty());

    run.state.target = 1;
    select_first(&mut run, 1);
    run.play_selected(&mut events).expect("clearing play");
    assert_eq!(run.state.phase, Phase::Shopping);
    run.advance_round(&mut events).expect("advance");
    assert!(!run.jokers[0].used);
}

#[test]
fn discard_requires_budget_and_selection() {
    let (mut run, mut events) = new_run(9);
    assert!(matches!(
        run.discard_selected(&mut events),
        Err(RunError::NoSelection)
    ));
    run.state.discards_left = 0;
    select_first(&mut run, 1);
    assert!(matches!(
        run.discard_selected(&mut events),
        Err(RunError::NoDiscardsLeft)
    ));
    assert_eq!(run.selected_count(), 1);
}

#[test]
fn play_requires_a_selection() {
    let (mut run, mut events) = new_run(10);
    assert!(matches!(
        run.play_selected(&mut events),
        Err(RunError::NoSelection)
    ));
    assert_eq!(run.state.hands_left, 4);
}

#[test]
fn skip_is_allowed_only_before_the_last_ante_round() {
    let (mut run, mut events) = new_run(11);
    run.skip_round(&mut events).expect("skip round 1");
    assert_eq!(run.state.ante_round, 2);
    assert_eq!(run.state.target, 240);
    assert_eq!(run.state.money, 3);
    assert_eq!(run.state.phase, Phase::Playing);
    assert!(run.shop.is_none());
    assert_eq!(run.card_count(), 52);

    run.state.ante_round = 3;
    assert!(matches!(
        run.skip_round(&mut events),
        Err(RunError::SkipNotAllowed)
    ));
}

#[test]
fn advance_round_restores_play_state() {
    let (mut run, mut events) = new_run(12);
    run.state.target = 1;
    select_first(&mut run, 1);
    run.play_selected(&mut events).expect("play");
    assert_eq!(run.state.phase, Phase::Shopping);

    run.advance_round(&mut events).expect("advance");
    assert_eq!(run.state.ante, 1);
    assert_eq!(run.state.ante_round, 2);
    assert_eq!(run.state.round, 2);
    assert_eq!(run.state.target, 240);
    assert_eq!(run.state.score, 0);
    assert_eq!(run.state.hands_left, 4);
    assert_eq!(run.state.discards_left, 3);
    assert_eq!(run.state.phase, Phase::Playing);
    assert!(run.shop.is_none());
    assert!(!run.state.round_complete);
    assert_eq!(run.card_count(), 52);
    assert_eq!(run.hand.len(), 8);
}

#[test]
fn advance_round_is_rejected_while_playing() {
    let (mut run, mut events) = new_run(13);
    assert!(matches!(
        run.advance_round(&mut events),
        Err(RunError::InvalidPhase(Phase::Playing))
    ));
}

#[test]
fn ante_rolls_over_every_three_rounds() {
    let (mut run, mut events) = new_run(14);
    run.state.ante_round = 3;
    run.state.phase = Phase::Shopping;
    run.advance_round(&mut events).expect("advance");
    assert_eq!(run.state.ante, 2);
    assert_eq!(run.state.ante_round, 1);
    assert_eq!(run.state.target, 300);
}

#[test]
fn passing_the_final_ante_resets_the_session() {
    let (mut run, mut events) = new_run(15);
    run.jokers.push(Joker::new(JokerKind::Cosmic));
    run.state.ante = 8;
    run.state.ante_round = 3;
    run.state.money = 40;
    run.state.phase = Phase::Shopping;

    run.advance_round(&mut events).expect("advance into reset");
    assert_eq!(run.state.ante, 1);
    assert_eq!(run.state.ante_round, 1);
    assert_eq!(run.state.money, 3);
    assert!(run.jokers.is_empty());
    assert_eq!(run.card_count(), 52);
    assert_eq!(run.hand.len(), 8);
    assert!(events.drain().any(|event| matches!(event, Event::GameOver { .. })));
}

#[test]
fn running_out_of_hands_resets_the_session() {
    let (mut run, mut events) = new_run(16);
    run.state.target = 1_000_000;
    run.state.hands_left = 1;
    run.state.money = 25;
    run.jokers.push(Joker::new(JokerKind::Steel));

    select_first(&mut run, 1);
    let result = run.play_selected(&mut events).expect("final play");
    assert_eq!(result.outcome, RoundOutcome::Lost);
    assert_eq!(result.hands_left, 0);
    assert!(!result.round_complete);

    assert_eq!(run.state.ante, 1);
    assert_eq!(run.state.money, 3);
    assert_eq!(run.state.hands_left, 4);
    assert!(run.jokers.is_empty());
    assert_eq!(run.card_count(), 52);
}

#[test]
fn buying_debits_and_moves_the_offer() {
    let (mut run, mut events) = new_run(17);
    run.state.phase = Phase::Shopping;
    run.shop = Some(ShopState {
        offers: vec![JokerKind::Cosmic, JokerKind::Bronze, JokerKind::Glass],
    });
    run.state.money = 9;

    run.buy_joker(0, &mut events).expect("buy cosmic");
    assert_eq!(run.state.money, 0);
    assert_eq!(run.jokers.len(), 1);
    assert_eq!(run.jokers[0].kind, JokerKind::Cosmic);
    assert_eq!(run.shop_offers(), &[JokerKind::Bronze, JokerKind::Glass]);

    assert!(matches!(
        run.buy_joker(0, &mut events),
        Err(RunError::NotEnoughMoney)
    ));
    assert_eq!(run.shop_offers().len(), 2);
    assert!(matches!(
        run.buy_joker(5, &mut events),
        Err(RunError::InvalidOfferIndex)
    ));
}

#[test]
fn joker_cap_blocks_purchases() {
    let (mut run, mut events) = new_run(18);
    run.state.phase = Phase::Shopping;
    run.shop = Some(ShopState {
        offers: vec![JokerKind::Bronze],
    });
    run.state.money = 50;
    for _ in 0..6 {
        run.jokers.push(Joker::new(JokerKind::Fool));
    }
    assert!(matches!(
        run.buy_joker(0, &mut events),
        Err(RunError::NoJokerSlots)
    ));
    assert_eq!(run.state.money, 50);
    assert_eq!(run.shop_offers().len(), 1);
}

#[test]
fn selling_refunds_half_the_catalog_cost() {
    let (mut run, mut events) = new_run(19);
    run.state.phase = Phase::Shopping;
    let mut glass = Joker::new(JokerKind::Glass);
    glass.used = true;
    run.jokers.push(glass);
    run.state.money = 0;

    run.sell_joker(0, &mut events).expect("sell");
    // Half of 7, floored; wear does not change the refund.
    assert_eq!(run.state.money, 3);
    assert!(run.jokers.is_empty());

    assert!(matches!(
        run.sell_joker(0, &mut events),
        Err(RunError::InvalidJokerIndex)
    ));
}

#[test]
fn shop_actions_are_rejected_while_playing() {
    let (mut run, mut events) = new_run(20);
    run.jokers.push(Joker::new(JokerKind::Bronze));
    assert!(matches!(
        run.buy_joker(0, &mut events),
        Err(RunError::InvalidPhase(Phase::Playing))
    ));
    assert!(matches!(
        run.sell_joker(0, &mut events),
        Err(RunError::InvalidPhase(Phase::Playing))
    ));
}

#[test]
fn selection_is_rejected_while_shopping() {
    let (mut run, _) = new_run(21);
    run.state.phase = Phase::Shopping;
    assert!(matches!(
        run.toggle_selection(0),
        Err(RunError::InvalidPhase(Phase::Shopping))
    ));
}

#[test]
fn sort_orders_are_total_and_stable() {
    let (mut run, _) = new_run(22);
    run.set_sort_order(SortOrder::ByRank);
    let values: Vec<i64> = run.hand.iter().map(|c| c.chip_value()).collect();
    assert!(values.windows(2).all(|w| w[0] <= w[1]));

    run.set_sort_order(SortOrder::BySuit);
    let suits: Vec<Suit> = run.hand.iter().map(|c| c.suit).collect();
    assert!(suits.windows(2).all(|w| w[0] <= w[1]));
}

#[test]
fn play_emits_scored_and_dealt_events() {
    let (mut run, mut events) = new_run(23);
    run.state.target = 1_000_000;
    select_first(&mut run, 2);
    run.play_selected(&mut events).expect("play");
    let drained: Vec<Event> = events.drain().collect();
    assert!(drained
        .iter()
        .any(|event| matches!(event, Event::HandScored { .. })));
    assert!(drained
        .iter()
        .any(|event| matches!(event, Event::HandDealt { count: 2 })));
}

#[test]
fn snapshot_mirrors_session_and_jokers() {
    let (mut run, _) = new_run(24);
    run.jokers.push(Joker::new(JokerKind::Diamond));
    let snapshot = run.snapshot();
    assert_eq!(snapshot.ante, 1);
    assert_eq!(snapshot.target, 200);
    assert_eq!(snapshot.money, 3);
    assert!(snapshot.last_hand.is_none());
    assert_eq!(snapshot.jokers.len(), 1);
    assert_eq!(snapshot.jokers[0].name, "Diamond Joker");
    assert_eq!(snapshot.jokers[0].cost, 6);
    assert_eq!(snapshot.jokers[0].sell_value, 3);
    assert!(!snapshot.jokers[0].used);
}

#[test]
fn same_seed_deals_the_same_hand() {
    let (a, _) = new_run(99);
    let (b, _) = new_run(99);
    assert_eq!(a.hand, b.hand);
}

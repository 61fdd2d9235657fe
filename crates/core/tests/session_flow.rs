use pairup_core::{
    CardDescriptor, Event, EventBus, GameConfig, GameOutcome, GameSession, Selection,
};

fn catalog(names: &[&str]) -> Vec<CardDescriptor> {
    names
        .iter()
        .map(|name| CardDescriptor {
            name: name.to_string(),
            image: format!("img/{name}.png"),
        })
        .collect()
}

fn session(names: &[&str], seed: u64) -> GameSession {
    GameSession::new(catalog(names), GameConfig::default(), seed).expect("valid catalog")
}

/// Indices of two cards sharing a name.
fn find_pair(session: &GameSession) -> (usize, usize) {
    let cards = &session.deck.cards;
    for i in 0..cards.len() {
        for j in (i + 1)..cards.len() {
            if cards[i].name() == cards[j].name() {
                return (i, j);
            }
        }
    }
    panic!("deck has no pair");
}

/// Indices of two cards with different names.
fn find_mismatch(session: &GameSession) -> (usize, usize) {
    let cards = &session.deck.cards;
    for j in 1..cards.len() {
        if cards[j].name() != cards[0].name() {
            return (0, j);
        }
    }
    panic!("deck has no mismatch");
}

#[test]
fn deck_holds_every_descriptor_twice() {
    let names = ["cat", "dog", "fox", "owl"];
    let session = session(&names, 42);
    assert_eq!(session.deck.len(), 8);
    for name in names {
        let copies = session
            .deck
            .cards
            .iter()
            .filter(|card| card.name() == name)
            .count();
        assert_eq!(copies, 2);
    }
}

#[test]
fn reselecting_the_held_card_is_a_no_op() {
    let mut session = session(&["a", "b", "c"], 7);
    let mut events = EventBus::default();
    assert_eq!(
        session.select_card(2, 0, &mut events).unwrap(),
        Selection::Flipped
    );
    let score_before = session.score;
    assert_eq!(
        session.select_card(2, 10, &mut events).unwrap(),
        Selection::Ignored
    );
    assert_eq!(session.score, score_before);
    assert_eq!(session.turn.first, Some(2));
    assert_eq!(session.turn.second, None);
}

#[test]
fn third_selection_is_ignored_while_resolving() {
    let mut session = session(&["a", "b", "c"], 7);
    let mut events = EventBus::default();
    let (first, second) = find_mismatch(&session);
    session.select_card(first, 0, &mut events).unwrap();
    session.select_card(second, 10, &mut events).unwrap();
    assert!(session.turn.locked);

    let third = (0..session.deck.len())
        .find(|&idx| idx != first && idx != second)
        .unwrap();
    assert_eq!(
        session.select_card(third, 20, &mut events).unwrap(),
        Selection::Ignored
    );
    assert!(session.deck.card(third).unwrap().is_face_down());

    // Resolution unlocks, and the same card is selectable again.
    session.advance(10 + 1000, &mut events);
    assert!(!session.turn.locked);
    assert_eq!(
        session.select_card(third, 1100, &mut events).unwrap(),
        Selection::Flipped
    );
}

#[test]
fn matching_pair_locks_in_and_unlocks_immediately() {
    let mut session = session(&["a", "b", "c"], 3);
    let mut events = EventBus::default();
    let (first, second) = find_pair(&session);
    session.select_card(first, 0, &mut events).unwrap();
    session.select_card(second, 10, &mut events).unwrap();

    assert_eq!(session.score, 1);
    assert!(!session.turn.locked, "match resolves without a delay");
    assert!(session.deck.card(first).unwrap().is_matched());
    assert!(session.deck.card(second).unwrap().is_matched());
    let drained: Vec<Event> = events.drain().collect();
    assert!(drained.contains(&Event::TurnResolved {
        matched: true,
        score: 1
    }));
}

#[test]
fn mismatch_reverts_only_after_the_delay() {
    let mut session = session(&["a", "b", "c"], 3);
    let mut events = EventBus::default();
    let (first, second) = find_mismatch(&session);
    session.select_card(first, 0, &mut events).unwrap();
    session.select_card(second, 10, &mut events).unwrap();

    assert_eq!(session.score, 1);
    assert!(session.turn.locked);

    // One millisecond early: still face-up, still locked.
    session.advance(10 + 999, &mut events);
    assert!(session.turn.locked);
    assert!(session.deck.card(first).unwrap().is_revealed());

    session.advance(10 + 1000, &mut events);
    assert!(!session.turn.locked);
    assert!(session.deck.card(first).unwrap().is_face_down());
    assert!(session.deck.card(second).unwrap().is_face_down());
    let drained: Vec<Event> = events.drain().collect();
    assert!(drained.contains(&Event::CardsHidden { first, second }));
}

#[test]
fn clearing_the_board_wins_with_timer_stopped() {
    let config = GameConfig {
        min_catalog_size: 1,
        ..GameConfig::default()
    };
    let mut session = GameSession::new(catalog(&["only"]), config, 11).expect("one-pair catalog");
    let mut events = EventBus::default();
    session.select_card(0, 0, &mut events).unwrap();
    session.select_card(1, 10, &mut events).unwrap();

    assert_eq!(session.outcome(), Some(GameOutcome::Won));
    assert_eq!(session.score, 1);
    assert!(!session.timer.running);
    assert!(session.turn.locked);

    // The notice fires after the configured delay, not with the flip.
    let drained: Vec<Event> = events.drain().collect();
    assert!(drained.contains(&Event::GameEnded {
        outcome: GameOutcome::Won
    }));
    assert!(!drained.contains(&Event::NotificationDue {
        outcome: GameOutcome::Won
    }));
    session.advance(10 + 300, &mut events);
    let drained: Vec<Event> = events.drain().collect();
    assert!(drained.contains(&Event::NotificationDue {
        outcome: GameOutcome::Won
    }));
}

#[test]
fn countdown_expiry_loses_and_locks_the_board() {
    let mut session = session(&["a", "b"], 5);
    let mut events = EventBus::default();
    session.select_card(0, 0, &mut events).unwrap();

    // Let all 90 seconds elapse.
    session.advance(90_000, &mut events);
    assert_eq!(session.timer.remaining_seconds, 0);
    assert_eq!(session.outcome(), Some(GameOutcome::Lost));
    assert!(session.turn.locked);

    let ticks = events
        .drain()
        .filter(|event| matches!(event, Event::TimerTick { .. }))
        .count();
    assert_eq!(ticks, 90);

    // No decrement past zero, and selections stay dead.
    session.advance(200_000, &mut events);
    assert_eq!(session.timer.remaining_seconds, 0);
    assert_eq!(
        session.select_card(1, 200_000, &mut events).unwrap(),
        Selection::Ignored
    );
    let drained: Vec<Event> = events.drain().collect();
    assert!(drained.contains(&Event::NotificationDue {
        outcome: GameOutcome::Lost
    }));
}

#[test]
fn restart_rebuilds_a_fresh_board() {
    let mut session = session(&["a", "b", "c"], 9);
    let mut events = EventBus::default();
    let (first, second) = find_pair(&session);
    session.select_card(first, 0, &mut events).unwrap();
    session.select_card(second, 10, &mut events).unwrap();
    session.advance(2000, &mut events);
    assert!(session.score > 0);

    session.restart(&mut events);
    assert_eq!(session.score, 0);
    assert_eq!(session.outcome(), None);
    assert!(!session.turn.locked);
    assert_eq!(session.turn.first, None);
    assert_eq!(session.deck.len(), 6);
    assert!(session.deck.cards.iter().all(|card| card.is_face_down()));
    assert!(!session.timer.running);
    assert_eq!(session.timer.remaining_seconds, 90);
    assert_eq!(session.timer.format_remaining(), "1:30");
}

#[test]
fn restart_invalidates_scheduled_notifications() {
    let config = GameConfig {
        min_catalog_size: 1,
        ..GameConfig::default()
    };
    let mut session = GameSession::new(catalog(&["only"]), config, 2).unwrap();
    let mut events = EventBus::default();
    session.select_card(0, 0, &mut events).unwrap();
    session.select_card(1, 10, &mut events).unwrap();
    assert_eq!(session.outcome(), Some(GameOutcome::Won));

    // Restart lands before the 300 ms notice is due.
    session.restart(&mut events);
    events.drain().count();
    session.advance(10_000, &mut events);
    let drained: Vec<Event> = events.drain().collect();
    assert!(
        !drained
            .iter()
            .any(|event| matches!(event, Event::NotificationDue { .. })),
        "stale notice fired against a fresh session"
    );
    assert!(!session.has_pending_tasks());
}

#[test]
fn pending_unflip_survives_restart_without_firing() {
    let mut session = session(&["a", "b", "c"], 13);
    let mut events = EventBus::default();
    let (first, second) = find_mismatch(&session);
    session.select_card(first, 0, &mut events).unwrap();
    session.select_card(second, 10, &mut events).unwrap();
    assert!(session.turn.locked);

    session.restart(&mut events);
    events.drain().count();
    session.advance(5_000, &mut events);
    let drained: Vec<Event> = events.drain().collect();
    assert!(!drained
        .iter()
        .any(|event| matches!(event, Event::CardsHidden { .. })));
    assert!(session.deck.cards.iter().all(|card| card.is_face_down()));
}

#[test]
fn generation_counter_advances_per_restart() {
    let mut session = session(&["a", "b"], 1);
    let mut events = EventBus::default();
    assert_eq!(session.generation(), 0);
    session.restart(&mut events);
    session.restart(&mut events);
    assert_eq!(session.generation(), 2);
}

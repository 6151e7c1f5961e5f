//! Phase controller tests.
//!
//! These tests drive a whole session through `PhaseController`:
//! - Selection assembles and reorders a hand, Battle plays it
//! - Skipping selection deals the fallback hand to both sides
//! - Departing phases are cleaned up before the next one starts

use std::rc::Rc;

use legal_brawl::battle::{BattleState, EventLog, GameEvent};
use legal_brawl::cards::{CardId, CardRegistry};
use legal_brawl::core::{GameConfig, GameError, Side};
use legal_brawl::phase::{InputEvent, PhaseController, PhaseKind, PhasePayload};

fn new_game() -> PhaseController {
    PhaseController::new(GameConfig::default(), Rc::new(CardRegistry::standard()))
        .expect("default config is valid")
}

/// Test the fallback hand when Battle starts without a selection.
#[test]
fn test_battle_without_selection_uses_fallback() {
    let mut game = new_game();
    game.request_transition(PhaseKind::Battle, Some(PhasePayload::default())).unwrap();

    let battle = game.battle().unwrap();
    let fallback: Vec<_> = (0..7).map(CardId::new).collect();
    for side in Side::ALL {
        assert_eq!(battle.lawyer(side).hand().ids(), fallback);
        assert_eq!(battle.credibility(side), 10);
    }
}

/// Test a full session: select, reorder, battle, finish.
#[test]
fn test_select_reorder_and_battle() {
    let mut game = new_game();
    let log = EventLog::shared();
    game.subscribe(log.clone());

    let offered = game.selection().unwrap().offered().to_vec();
    for id in &offered[..3] {
        game.handle(InputEvent::AddCard(*id)).unwrap();
    }

    // Drag the third card over the first.
    game.handle(InputEvent::SetHeld(Some(offered[2]))).unwrap();
    game.handle(InputEvent::SetHovered(Some(offered[0]))).unwrap();
    game.handle(InputEvent::SetHeld(None)).unwrap();
    let expected = vec![offered[2], offered[1], offered[0]];
    assert_eq!(game.selection().unwrap().hand().ids(), expected);

    game.request_transition(PhaseKind::Battle, None).unwrap();
    assert_eq!(game.battle().unwrap().lawyer(Side::Player).hand().ids(), expected);

    while game.battle().unwrap().state() != BattleState::Finished {
        game.handle(InputEvent::Advance).unwrap();
    }

    let log = log.borrow();
    assert_eq!(log.events().first(), Some(&GameEvent::PhaseChange(PhaseKind::Battle)));
    assert_eq!(log.count(|e| matches!(e, GameEvent::LastCard)), 1);
    assert_eq!(log.count(|e| matches!(e, GameEvent::DeclareWinner(_))), 1);
    assert_eq!(log.events().last(), Some(&GameEvent::FinishBattle));
}

/// Test facing a chosen opponent hand.
#[test]
fn test_battle_against_given_hand() {
    let mut game = new_game();
    let rival = vec![CardId::new(6), CardId::new(2)];

    let payload = PhasePayload::new(vec![CardId::new(1)]).against(rival.clone());
    game.request_transition(PhaseKind::Battle, Some(payload)).unwrap();

    let battle = game.battle().unwrap();
    assert_eq!(battle.lawyer(Side::Opponent).hand().ids(), rival);
    assert_eq!(battle.credibility(Side::Opponent), 10);
}

/// Test that a rematch starts from the fallback, not the finished battle.
#[test]
fn test_battle_hands_nothing_on() {
    let mut game = new_game();
    let payload = PhasePayload::new(vec![CardId::new(8)]).against(vec![CardId::new(9)]);
    game.request_transition(PhaseKind::Battle, Some(payload)).unwrap();
    while game.battle().unwrap().state() != BattleState::Finished {
        game.handle(InputEvent::Advance).unwrap();
    }

    game.request_transition(PhaseKind::Battle, None).unwrap();

    let fallback: Vec<_> = (0..7).map(CardId::new).collect();
    let battle = game.battle().unwrap();
    assert_eq!(battle.lawyer(Side::Player).hand().ids(), fallback);
    assert_eq!(battle.lawyer(Side::Opponent).hand().ids(), fallback);
}

/// Test that motion reports for cards outside the hand are rejected.
#[test]
fn test_motion_for_unknown_card_rejected() {
    let mut game = new_game();
    let offered = game.selection().unwrap().offered().to_vec();
    game.handle(InputEvent::AddCard(offered[0])).unwrap();

    assert_eq!(
        game.handle(InputEvent::MotionStarted(offered[1])),
        Err(GameError::CardNotFound(offered[1]))
    );
    assert!(!game.selection().unwrap().interaction().is_moving(offered[1]));
}

/// Test that inputs for the wrong phase are rejected.
#[test]
fn test_inputs_checked_against_phase() {
    let mut game = new_game();
    assert_eq!(
        game.handle(InputEvent::PlayCard(CardId::new(0))),
        Err(GameError::UnsupportedInput { phase: PhaseKind::Selection, input: "PlayCard" })
    );

    game.request_transition(PhaseKind::Battle, None).unwrap();
    assert_eq!(
        game.handle(InputEvent::RemoveLastCard),
        Err(GameError::UnsupportedInput { phase: PhaseKind::Battle, input: "RemoveLastCard" })
    );
}

/// Test that a finished battle ignores further advances.
#[test]
fn test_finished_battle_then_new_round() {
    let mut game = new_game();
    game.request_transition(PhaseKind::Battle, None).unwrap();
    while game.battle().unwrap().state() != BattleState::Finished {
        game.handle(InputEvent::Advance).unwrap();
    }
    assert_eq!(
        game.handle(InputEvent::Advance),
        Err(GameError::NotAccepting(BattleState::Finished))
    );

    game.request_transition(PhaseKind::Selection, None).unwrap();
    assert_eq!(game.kind(), PhaseKind::Selection);
    assert!(game.selection().unwrap().hand().is_empty());
}

/// Test that the old battle's listeners are detached on transition.
#[test]
fn test_listener_not_duplicated_across_battles() {
    let mut game = new_game();
    let log = EventLog::shared();
    game.subscribe(log.clone());

    game.request_transition(PhaseKind::Battle, None).unwrap();
    game.request_transition(PhaseKind::Battle, None).unwrap();
    log.borrow_mut().drain();

    game.handle(InputEvent::Advance).unwrap();

    assert_eq!(log.borrow().count(|e| matches!(e, GameEvent::NextCard)), 1);
}

/// Test config loaded from JSON.
#[test]
fn test_config_from_json() {
    let config = GameConfig::from_json(
        r#"{
            "battle": { "starting_credibility": 3, "fallback_hand": [9, 8] },
            "selection": { "offer_count": 4, "hand_size": 2, "seed": 99 }
        }"#,
    )
    .unwrap();
    let mut game = PhaseController::new(config, Rc::new(CardRegistry::standard())).unwrap();

    assert_eq!(game.selection().unwrap().offered().len(), 4);

    game.request_transition(PhaseKind::Battle, None).unwrap();
    let battle = game.battle().unwrap();
    assert_eq!(battle.lawyer(Side::Player).hand().ids(), vec![CardId::new(9), CardId::new(8)]);
    assert_eq!(battle.credibility(Side::Player), 3);
}

/// Test a registry loaded from JSON.
#[test]
fn test_registry_from_json() {
    let registry = CardRegistry::from_json(
        r#"[
            { "id": 0, "name": "Alibi", "cost": 1,
              "effect": { "ModifyCredibility": { "value": 3, "on_self": true } } },
            { "id": 1, "name": "Silence" }
        ]"#,
    )
    .unwrap();

    let mut config = GameConfig::default();
    config.battle.fallback_hand = vec![CardId::new(0), CardId::new(1)];
    let mut game = PhaseController::new(config, Rc::new(registry)).unwrap();
    game.request_transition(PhaseKind::Battle, None).unwrap();

    game.handle(InputEvent::PlayCard(CardId::new(0))).unwrap();
    assert_eq!(game.battle().unwrap().credibility(Side::Player), 13);
}

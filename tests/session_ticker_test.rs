//! Elapsed-time ticker lifecycle through the engine.
//!
//! The ticker runs only while a session is Running, stops on finish and on
//! reset, and every tick carries the generation of the session that
//! spawned it.

mod common;

use std::time::Duration;

use common::content;
use stepmatch::engine::Engine;
use stepmatch::events::InputEvent;
use stepmatch::session::{tick_channel, ManualClock, SessionStatus};
use tokio::time::timeout;

const PERIOD: Duration = Duration::from_millis(10);

fn engine(names: &[&str]) -> (Engine, stepmatch::session::TickReceiver) {
    let (tx, rx) = tick_channel();
    let engine = Engine::new(content(names), Box::new(ManualClock::new()), Some(1))
        .with_ticks(tx, PERIOD);
    (engine, rx)
}

fn place_all(engine: &mut Engine) {
    let pairs: Vec<_> = engine
        .board()
        .cards()
        .iter()
        .map(|c| (c.id(), engine.board().find_slot(c.step_name()).unwrap().id()))
        .collect();
    for (card, slot) in pairs {
        engine.dispatch(InputEvent::DropOnSlot { card, slot }).unwrap();
    }
}

#[tokio::test]
async fn test_no_ticks_before_start() {
    let (engine, mut rx) = engine(&["A"]);
    assert!(!engine.session().ticker_active());
    assert!(timeout(PERIOD * 5, rx.recv()).await.is_err());
}

#[tokio::test]
async fn test_ticks_carry_current_generation() {
    let (mut engine, mut rx) = engine(&["A", "B"]);
    engine.dispatch(InputEvent::StartSession).unwrap();
    assert!(engine.session().ticker_active());

    let tick = timeout(Duration::from_secs(1), rx.recv())
        .await
        .expect("tick within a second")
        .expect("channel open");
    assert_eq!(tick.generation, 1);
    assert!(engine.is_current_tick(tick));
}

#[tokio::test]
async fn test_finish_cancels_ticker() {
    let (mut engine, mut rx) = engine(&["A"]);
    engine.dispatch(InputEvent::StartSession).unwrap();
    place_all(&mut engine);
    assert_eq!(engine.status(), SessionStatus::Finished);
    assert!(!engine.session().ticker_active());

    // Drain anything sent before the abort, then expect silence
    tokio::time::sleep(PERIOD * 2).await;
    while rx.try_recv().is_ok() {}
    assert!(timeout(PERIOD * 5, rx.recv()).await.is_err());
}

#[tokio::test]
async fn test_reset_replaces_ticker_and_old_ticks_are_stale() {
    let (mut engine, mut rx) = engine(&["A", "B"]);
    engine.dispatch(InputEvent::StartSession).unwrap();
    let first = timeout(Duration::from_secs(1), rx.recv())
        .await
        .unwrap()
        .unwrap();

    engine.dispatch(InputEvent::ResetSession).unwrap();
    assert_eq!(engine.session().generation(), 2);
    assert!(!engine.is_current_tick(first));

    // Skip ticks still queued from the first session
    loop {
        let tick = timeout(Duration::from_secs(1), rx.recv())
            .await
            .unwrap()
            .unwrap();
        if tick.generation == 2 {
            assert!(engine.is_current_tick(tick));
            break;
        }
        assert_eq!(tick.generation, 1);
    }
}

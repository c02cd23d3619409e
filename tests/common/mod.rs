//! Common test utilities for integration tests.
//!
//! Builds engines over small step sets with a manual clock and a fixed
//! seed, lays slots out on a fake screen so drags can hit them, and checks
//! the board invariants after every input.
//!
//! # Example
//!
//! ```ignore
//! use common::TestGame;
//!
//! let mut game = TestGame::new(&["A", "B", "C"]).started();
//! let outcome = game.drop_card("B", "B");
//! ```

pub mod mocks;

pub use mocks::*;

use std::collections::HashSet;

use stepmatch::board::{CardId, SlotId};
use stepmatch::content::{ContentModel, Step};
use stepmatch::engine::Engine;
use stepmatch::events::{EngineEvent, InputEvent};
use stepmatch::gesture::{HitTarget, Region, ScreenPosition};
use stepmatch::placement::Outcome;
use stepmatch::session::ManualClock;

/// Width of every slot region registered by [`TestGame::lay_out_slots`].
pub const SLOT_WIDTH: u16 = 20;
/// Rows per slot region.
pub const SLOT_HEIGHT: u16 = 3;

/// Content with one step per name; each description is "about <name>".
pub fn content(names: &[&str]) -> ContentModel {
    let steps = names
        .iter()
        .map(|name| Step::new(*name, format!("about {name}")))
        .collect();
    ContentModel::new(Some("Test".to_string()), steps).unwrap()
}

/// An engine plus the clock driving it.
pub struct TestGame {
    pub engine: Engine,
    pub clock: ManualClock,
    /// Every event the engine has emitted, in order.
    pub events: Vec<EngineEvent>,
}

impl TestGame {
    pub fn new(names: &[&str]) -> Self {
        Self::with_seed(names, 7)
    }

    pub fn with_seed(names: &[&str], seed: u64) -> Self {
        let clock = ManualClock::new();
        let engine = Engine::new(content(names), Box::new(clock.clone()), Some(seed));
        Self {
            engine,
            clock,
            events: Vec::new(),
        }
    }

    /// Start the session and lay the slots out.
    pub fn started(mut self) -> Self {
        self.send(InputEvent::StartSession);
        self.lay_out_slots();
        self
    }

    /// Register slot `i` at column 0, rows `i * SLOT_HEIGHT ..`.
    pub fn lay_out_slots(&mut self) {
        let slots: Vec<SlotId> = self.engine.board().slots().iter().map(|s| s.id()).collect();
        let hits = self.engine.hit_areas_mut();
        hits.clear();
        for (i, slot) in slots.into_iter().enumerate() {
            let region = Region::new(0, i as u16 * SLOT_HEIGHT, SLOT_WIDTH, SLOT_HEIGHT);
            hits.register(region, HitTarget::Slot(slot));
        }
    }

    /// A point inside the slot that accepts `name`.
    pub fn point_on_slot(&self, name: &str) -> ScreenPosition {
        let slot = self.slot(name);
        ScreenPosition::new(2, slot.index() as u16 * SLOT_HEIGHT + 1)
    }

    /// A point no slot covers.
    pub fn empty_point(&self) -> ScreenPosition {
        ScreenPosition::new(SLOT_WIDTH + 30, 1)
    }

    pub fn card(&self, name: &str) -> CardId {
        self.engine
            .board()
            .cards()
            .iter()
            .find(|c| c.step_name() == name)
            .unwrap()
            .id()
    }

    pub fn slot(&self, name: &str) -> SlotId {
        self.engine.board().find_slot(name).unwrap().id()
    }

    /// Dispatch one input, record its events and check the invariants.
    pub fn send(&mut self, input: InputEvent) -> Vec<EngineEvent> {
        let events = self.engine.dispatch(input).unwrap();
        self.events.extend(events.iter().cloned());
        assert_board_invariants(&self.engine);
        events
    }

    /// Place the card for `card_name` onto the slot for `slot_name`.
    pub fn drop_card(&mut self, card_name: &str, slot_name: &str) -> Option<Outcome> {
        let card = self.card(card_name);
        let slot = self.slot(slot_name);
        let events = self.send(InputEvent::DropOnSlot { card, slot });
        placement_outcome(&events)
    }

    /// Full pointer drag of `card_name` released at `to`.
    pub fn drag_to(&mut self, card_name: &str, to: ScreenPosition) -> Vec<EngineEvent> {
        let card = self.card(card_name);
        let grab = self.empty_point();
        let mut events = self.send(InputEvent::PointerDragStart {
            card,
            position: grab,
        });
        events.extend(self.send(InputEvent::PointerDragMove { position: to }));
        events.extend(self.send(InputEvent::PointerDragEnd { position: to }));
        events
    }
}

/// The outcome of the placement among `events`, if one was attempted.
pub fn placement_outcome(events: &[EngineEvent]) -> Option<Outcome> {
    events.iter().find_map(EngineEvent::outcome)
}

/// Number of `SessionFinished` events in `events`.
pub fn finish_count(events: &[EngineEvent]) -> usize {
    events
        .iter()
        .filter(|e| matches!(e, EngineEvent::SessionFinished(_)))
        .count()
}

/// One card per slot, one slot per card, `filled` iff the occupant matches,
/// and filled plus remaining equals the step count.
pub fn assert_board_invariants(engine: &Engine) {
    let board = engine.board();
    let mut occupants = HashSet::new();

    for slot in board.slots() {
        match slot.occupant() {
            Some(card) => {
                assert!(occupants.insert(card), "card {card:?} occupies two slots");
                let card = board.find_card(card).expect("occupant exists");
                assert_eq!(card.step_name(), slot.accepts());
                assert!(slot.is_filled());
                assert!(card.is_locked());
            }
            None => assert!(!slot.is_filled()),
        }
    }

    for card in board.cards() {
        assert_eq!(
            card.is_locked(),
            occupants.contains(&card.id()),
            "only placed cards are locked"
        );
    }

    assert_eq!(
        board.filled_count() + engine.session().remaining(),
        board.total(),
        "filled + remaining must equal the step count"
    );
}

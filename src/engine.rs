//! The game engine.
//!
//! [`Engine`] owns every piece of game state: the loaded content, the board,
//! the selection and drag controllers, the session and the per-frame hit
//! areas. Hosts translate device input into [`InputEvent`]s and feed them to
//! [`Engine::dispatch`]; each call runs to completion and returns the
//! [`EngineEvent`]s it produced. Rendering reads a [`Snapshot`].
//!
//! Until a session is running only `StartSession` and `ResetSession` are
//! accepted; every other input is ignored.

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use std::time::Duration;

use crate::board::{Board, CardId, SlotId};
use crate::content::ContentModel;
use crate::error::GameResult;
use crate::events::{EngineEvent, InputEvent};
use crate::gesture::{
    DragGestureController, DragRefusal, HitAreaRegistry, HitTarget, ScreenPosition,
};
use crate::placement::{Outcome, PlacementValidator};
use crate::selection::{SelectionChange, SelectionController};
use crate::session::{
    Clock, SessionController, SessionStatus, SessionSummary, SessionTick, TickSender,
};

pub struct Engine {
    content: ContentModel,
    board: Board,
    selection: SelectionController,
    gesture: DragGestureController,
    session: SessionController,
    hit_areas: HitAreaRegistry,
    rng: StdRng,
}

impl std::fmt::Debug for Engine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Engine")
            .field("title", &self.content.title())
            .field("board", &self.board)
            .field("selection", &self.selection.state())
            .field("gesture", &self.gesture.state())
            .field("session", &self.session)
            .finish()
    }
}

impl Engine {
    /// Build an engine for `content`. The board is laid out immediately; the
    /// session waits for `StartSession`.
    ///
    /// A `seed` makes every shuffle reproducible.
    pub fn new(content: ContentModel, clock: Box<dyn Clock>, seed: Option<u64>) -> Self {
        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let mut board = Board::new();
        board.build(content.steps(), &mut rng);
        let session = SessionController::new(content.len(), clock);

        Self {
            content,
            board,
            selection: SelectionController::new(),
            gesture: DragGestureController::new(),
            session,
            hit_areas: HitAreaRegistry::new(),
            rng,
        }
    }

    /// Deliver elapsed-time ticks to `tx` while a session runs.
    pub fn with_ticks(mut self, tx: TickSender, period: Duration) -> Self {
        self.session = self.session.with_ticks(tx, period);
        self
    }

    pub fn content(&self) -> &ContentModel {
        &self.content
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn selection(&self) -> &SelectionController {
        &self.selection
    }

    pub fn gesture(&self) -> &DragGestureController {
        &self.gesture
    }

    pub fn session(&self) -> &SessionController {
        &self.session
    }

    pub fn status(&self) -> SessionStatus {
        self.session.status()
    }

    pub fn hit_areas(&self) -> &HitAreaRegistry {
        &self.hit_areas
    }

    /// The renderer rewrites this every frame.
    pub fn hit_areas_mut(&mut self) -> &mut HitAreaRegistry {
        &mut self.hit_areas
    }

    /// Whether `tick` belongs to the session currently running.
    pub fn is_current_tick(&self, tick: SessionTick) -> bool {
        self.session.is_running() && tick.generation == self.session.generation()
    }

    /// Apply one input. Errors are invariant violations and are fatal.
    pub fn dispatch(&mut self, input: InputEvent) -> GameResult<Vec<EngineEvent>> {
        tracing::trace!(?input, "Dispatch");
        let mut events = Vec::new();

        match input {
            InputEvent::StartSession => self.start_session(&mut events),
            InputEvent::ResetSession => self.reset(&mut events),
            _ if !self.session.is_running() => {
                tracing::debug!(?input, status = ?self.session.status(), "Input ignored: no running session");
            }
            InputEvent::PointerDragStart { card, position } => {
                self.drag_start(card, position, &mut events)
            }
            InputEvent::PointerDragMove { position } => self.drag_move(position, &mut events),
            InputEvent::PointerDragEnd { position } => self.drag_end(position, &mut events)?,
            InputEvent::DropOnSlot { card, slot } => {
                self.place(card, slot, &mut events)?;
            }
            InputEvent::SelectToggle { card } => self.select_toggle(card, &mut events),
            InputEvent::SlotActivate { slot } => self.slot_activate(slot, &mut events)?,
        }

        Ok(events)
    }

    fn start_session(&mut self, events: &mut Vec<EngineEvent>) {
        match self.session.status() {
            SessionStatus::Running => {
                tracing::debug!("StartSession ignored: already running");
            }
            SessionStatus::Finished => self.reset(events),
            SessionStatus::NotStarted => self.begin(events),
        }
    }

    /// Fresh shuffle of the same content, then start.
    fn reset(&mut self, events: &mut Vec<EngineEvent>) {
        self.board.build(self.content.steps(), &mut self.rng);
        self.selection.clear();
        if let Some(card) = self.gesture.abandon() {
            tracing::debug!(?card, "Drag abandoned by reset");
        }
        self.session.rebuild(self.content.len());
        self.begin(events);
    }

    fn begin(&mut self, events: &mut Vec<EngineEvent>) {
        if let Some(generation) = self.session.start() {
            events.push(EngineEvent::SessionStarted {
                generation,
                total: self.session.total(),
            });
        }
    }

    fn drag_start(&mut self, card: CardId, position: ScreenPosition, events: &mut Vec<EngineEvent>) {
        let origin = self
            .hit_areas
            .region_of(HitTarget::Card(card))
            .map(|region| region.origin());

        match self.gesture.start(card, position, origin, &self.board) {
            Ok(()) => {
                self.selection.arm(card);
                events.push(EngineEvent::DragStarted { card });
            }
            Err(DragRefusal::AlreadyLocked) => {
                tracing::debug!(?card, "Drag refused: card locked");
                events.push(EngineEvent::DragRefused { card });
            }
            Err(DragRefusal::AlreadyDragging) => {
                tracing::warn!(?card, "Drag refused: another drag is in progress");
            }
            Err(DragRefusal::UnknownCard) => {
                tracing::debug!(?card, "Drag refused: unknown card");
            }
        }
    }

    fn drag_move(&mut self, position: ScreenPosition, events: &mut Vec<EngineEvent>) {
        if let Some(change) = self.gesture.move_to(position, &self.board, &self.hit_areas) {
            events.push(EngineEvent::HoverChanged { slot: change.to });
        }
    }

    fn drag_end(&mut self, position: ScreenPosition, events: &mut Vec<EngineEvent>) -> GameResult<()> {
        let Some(release) = self.gesture.end(position, &self.board, &self.hit_areas) else {
            tracing::debug!("Drag end ignored: not dragging");
            return Ok(());
        };

        match release.target {
            Some(slot) => {
                self.place(release.card, slot, events)?;
            }
            None => events.push(EngineEvent::DropOutside { card: release.card }),
        }
        Ok(())
    }

    fn select_toggle(&mut self, card: CardId, events: &mut Vec<EngineEvent>) {
        match self.selection.toggle(card, &self.board) {
            SelectionChange::Made(card) => events.push(EngineEvent::SelectionMade { card }),
            SelectionChange::Cancelled(card) => {
                events.push(EngineEvent::SelectionCancelled { card })
            }
            SelectionChange::Ignored => tracing::debug!(?card, "Selection ignored"),
        }
    }

    fn slot_activate(&mut self, slot: SlotId, events: &mut Vec<EngineEvent>) -> GameResult<()> {
        match self.selection.armed() {
            Some(card) => {
                self.place(card, slot, events)?;
            }
            None => tracing::debug!(?slot, "Slot activated with nothing armed"),
        }
        Ok(())
    }

    fn place(
        &mut self,
        card: CardId,
        slot: SlotId,
        events: &mut Vec<EngineEvent>,
    ) -> GameResult<Outcome> {
        let outcome = PlacementValidator {
            board: &mut self.board,
            selection: &mut self.selection,
            session: &mut self.session,
        }
        .attempt_place(card, slot, events)?;
        Ok(outcome)
    }

    /// Everything the renderer needs for one frame.
    pub fn snapshot(&self) -> Snapshot {
        let dragging = self.gesture.state().map(|g| g.card);
        let hover = self.gesture.hover();

        let cards = self
            .board
            .cards()
            .iter()
            .map(|card| CardView {
                id: card.id(),
                text: card.description().to_string(),
                locked: card.is_locked(),
                placed: card.is_placed(),
                armed: self.selection.is_armed(card.id()),
                dragging: dragging == Some(card.id()),
            })
            .collect();

        let slots = self
            .board
            .slots()
            .iter()
            .map(|slot| SlotView {
                id: slot.id(),
                label: slot.accepts().to_string(),
                occupant_text: slot
                    .occupant()
                    .and_then(|card| self.board.find_card(card))
                    .map(|card| card.description().to_string()),
                filled: slot.is_filled(),
                highlighted: hover == Some(slot.id()),
            })
            .collect();

        let proxy = self.gesture.state().and_then(|g| {
            self.board.find_card(g.card).map(|card| ProxyView {
                card: g.card,
                text: card.description().to_string(),
                position: g.proxy,
            })
        });

        Snapshot {
            title: self.content.title().to_string(),
            status: self.session.status(),
            cards,
            slots,
            proxy,
            score: self.session.score(),
            remaining: self.session.remaining(),
            total: self.session.total(),
            elapsed: self.session.elapsed_display(),
            summary: self.session.summary(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CardView {
    pub id: CardId,
    pub text: String,
    pub locked: bool,
    pub placed: bool,
    pub armed: bool,
    pub dragging: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SlotView {
    pub id: SlotId,
    /// Step name shown on the target.
    pub label: String,
    /// Description of the matched card once filled.
    pub occupant_text: Option<String>,
    pub filled: bool,
    pub highlighted: bool,
}

/// The floating copy of the card being dragged.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProxyView {
    pub card: CardId,
    pub text: String,
    pub position: ScreenPosition,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub title: String,
    pub status: SessionStatus,
    /// Pool order.
    pub cards: Vec<CardView>,
    /// Step order.
    pub slots: Vec<SlotView>,
    pub proxy: Option<ProxyView>,
    pub score: u32,
    pub remaining: usize,
    pub total: usize,
    /// `MM:SS`
    pub elapsed: String,
    pub summary: Option<SessionSummary>,
}

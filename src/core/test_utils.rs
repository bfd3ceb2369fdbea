//=========================================================================
// Test Utilities
//=========================================================================
//
// Shared fixtures for unit tests: journaling scenes, a detached
// completion channel, and a two-scene transition harness.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::cell::RefCell;
use std::rc::Rc;

use crossbeam_channel::{unbounded, Receiver};

//=== Internal Dependencies ===============================================

use crate::core::animation::Tweener;
use crate::core::director::{Completion, Ticket};
use crate::core::display::{DisplayTree, Stage};
use crate::core::scene::{Container, Lifecycle, Scene, SceneHandle};
use crate::core::transition::{Transition, TransitionContext};

//=== Scenes ==============================================================

struct Blank;
impl Scene for Blank {}

/// A scene with no behavior.
pub(crate) fn blank(label: &str) -> SceneHandle {
    SceneHandle::new(label, Blank)
}

/// Lifecycle events in the order they were delivered, tagged by label.
pub(crate) type Journal = Rc<RefCell<Vec<(String, Lifecycle)>>>;

pub(crate) fn journal() -> Journal {
    Rc::new(RefCell::new(Vec::new()))
}

struct Probe {
    label: String,
    journal: Journal,
}

impl Probe {
    fn record(&self, event: Lifecycle) {
        self.journal.borrow_mut().push((self.label.clone(), event));
    }
}

impl Scene for Probe {
    fn on_enter(&mut self, _view: &mut Container) {
        self.record(Lifecycle::Enter);
    }

    fn on_exit(&mut self, _view: &mut Container) {
        self.record(Lifecycle::Exit);
    }

    fn on_pause(&mut self, _view: &mut Container) {
        self.record(Lifecycle::Pause);
    }

    fn on_resume(&mut self, _view: &mut Container) {
        self.record(Lifecycle::Resume);
    }
}

/// A scene that records its lifecycle events into `journal`.
pub(crate) fn probe(label: &str, journal: &Journal) -> SceneHandle {
    SceneHandle::new(
        label,
        Probe {
            label: label.to_string(),
            journal: journal.clone(),
        },
    )
}

/// Builds the `(label, event)` list a journal is compared against.
pub(crate) fn events(expected: &[(&str, Lifecycle)]) -> Vec<(String, Lifecycle)> {
    expected
        .iter()
        .map(|(label, event)| (label.to_string(), *event))
        .collect()
}

//=== Completion ==========================================================

/// A completion token not attached to any director.
pub(crate) fn completion_channel() -> (Completion, Receiver<Ticket>) {
    let (tx, rx) = unbounded();
    (Completion::new(Ticket(1), tx), rx)
}

//=== Handoff =============================================================

/// One transition started between an attached `outgoing` and a fresh
/// `incoming` scene, with its backends kept for inspection.
pub(crate) struct Handoff {
    pub stage: Stage,
    pub tweener: Tweener,
    pub outgoing: SceneHandle,
    pub incoming: SceneHandle,
    rx: Receiver<Ticket>,
}

impl Handoff {
    pub fn start<T: Transition + 'static>(transition: T) -> Self {
        let (done, rx) = completion_channel();
        let mut stage = Stage::new();
        let mut tweener = Tweener::new();
        let (outgoing, incoming) = (blank("out"), blank("in"));
        stage.add_child(&outgoing);

        Box::new(transition).start(
            &mut TransitionContext::new(&mut stage, &mut tweener),
            Some(&outgoing),
            &incoming,
            done,
        );

        Self {
            stage,
            tweener,
            outgoing,
            incoming,
            rx,
        }
    }

    /// True once the completion has been signalled.
    pub fn completed(&self) -> bool {
        self.rx.try_recv().is_ok()
    }

    pub fn incoming_on_top(&self) -> bool {
        let incoming = self.stage.index_of(self.incoming.id());
        let outgoing = self.stage.index_of(self.outgoing.id());
        matches!((incoming, outgoing), (Some(i), Some(o)) if i > o)
    }
}

//! Integration tests for the scene director.
//!
//! These drive a director through its public API only: stack requests,
//! host ticks, and the reference stage and tweener backends.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use aetheric_director::prelude::*;

// ===========================================================================
// Fixtures
// ===========================================================================

type Journal = Rc<RefCell<Vec<(String, Lifecycle)>>>;

struct Probe {
    label: &'static str,
    journal: Journal,
}

impl Probe {
    fn record(&self, event: Lifecycle) {
        self.journal.borrow_mut().push((self.label.to_string(), event));
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

fn probe(label: &'static str, journal: &Journal) -> SceneHandle {
    SceneHandle::new(
        label,
        Probe {
            label,
            journal: journal.clone(),
        },
    )
}

fn count(journal: &Journal, label: &str, event: Lifecycle) -> usize {
    journal
        .borrow()
        .iter()
        .filter(|(l, e)| l == label && *e == event)
        .count()
}

fn ms(millis: u64) -> Duration {
    Duration::from_millis(millis)
}

/// Stashes its completion so the test decides when it finishes.
#[derive(Clone, Default)]
struct Manual {
    held: Rc<RefCell<Option<Completion>>>,
}

impl Manual {
    fn finish(&self) {
        if let Some(done) = self.held.borrow_mut().take() {
            done.complete();
        }
    }
}

impl Transition for Manual {
    fn start(
        self: Box<Self>,
        cx: &mut TransitionContext<'_>,
        outgoing: Option<&SceneHandle>,
        incoming: &SceneHandle,
        done: Completion,
    ) {
        match outgoing {
            Some(outgoing) => cx.stage_pair(outgoing, incoming),
            None => cx.stage.add_child(incoming),
        }
        *self.held.borrow_mut() = Some(done);
    }

    fn name(&self) -> &'static str {
        "manual"
    }
}

// ===========================================================================
// Push with a timed fade
// ===========================================================================

#[test]
fn fade_push_commits_after_duration() {
    let log: Journal = Rc::default();
    let (root, scene) = (probe("R", &log), probe("S", &log));
    let mut director = Director::new();
    director.push(&root).unwrap();

    director.push_with(&scene, FadeTransition::new(ms(1000))).unwrap();

    // Mid-fade: nothing committed, both scenes on stage, S above R.
    director.tick(ms(400));
    assert_eq!(director.state(), DirectorState::Transitioning);
    assert_eq!(director.top(), Some(&root));
    assert_eq!(count(&log, "R", Lifecycle::Pause), 0);
    assert!(director.stage().index_of(scene.id()) > director.stage().index_of(root.id()));
    assert!(root.view().alpha < 1.0);

    director.tick(ms(400));
    director.tick(ms(400));

    assert_eq!(director.state(), DirectorState::Idle);
    assert_eq!(director.scenes(), [root.clone(), scene.clone()]);
    assert_eq!(count(&log, "R", Lifecycle::Pause), 1);
    assert_eq!(count(&log, "S", Lifecycle::Enter), 1);
    assert_eq!(root.view().alpha, 1.0);
    assert_eq!(scene.view().alpha, 1.0);
}

// ===========================================================================
// Instant pop
// ===========================================================================

#[test]
fn instant_pop_is_synchronous() {
    let log: Journal = Rc::default();
    let (root, scene) = (probe("R", &log), probe("S", &log));
    let mut director = Director::new();
    director.push(&root).unwrap();
    director.push(&scene).unwrap();
    log.borrow_mut().clear();

    director.pop_with(InstantTransition::new()).unwrap();

    assert_eq!(director.scenes(), [root.clone()]);
    assert_eq!(
        *log.borrow(),
        vec![
            ("S".to_string(), Lifecycle::Exit),
            ("R".to_string(), Lifecycle::Resume),
        ]
    );
    assert!(!scene.is_managed());
    assert!(director.is_settled());
}

// ===========================================================================
// Queueing
// ===========================================================================

#[test]
fn queued_pushes_run_in_order() {
    let log: Journal = Rc::default();
    let gate = Manual::default();
    let (root, a, b) = (probe("R", &log), probe("A", &log), probe("B", &log));
    let mut director = Director::new();
    director.push(&root).unwrap();

    director.push_with(&a, gate.clone()).unwrap();
    director.push_with(&b, gate.clone()).unwrap();
    assert_eq!(director.pending(), 1);
    assert_eq!(director.projected_depth(), 3);
    assert!(!director.stage().contains(b.id()));

    gate.finish();
    director.pump();
    assert_eq!(director.top(), Some(&a));
    assert_eq!(director.in_flight(), Some(&StackOp::Push(b.clone())));

    gate.finish();
    director.pump();
    assert_eq!(director.scenes(), [root, a, b]);

    let order: Vec<_> = log.borrow().iter().map(|(l, e)| format!("{l}:{e:?}")).collect();
    assert_eq!(
        order,
        ["R:Enter", "R:Pause", "A:Enter", "A:Pause", "B:Enter"]
    );
}

#[test]
fn mixed_queue_settles_through_ticks() {
    let (root, a, b) = (inert("root"), inert("a"), inert("b"));
    let mut director = Director::new();
    director.push(&root).unwrap();

    director
        .push_with(&a, MoveTransition::new(Direction::Left, ms(200)))
        .unwrap();
    director
        .replace_with(&b, ScaleTransition::new(ms(200)))
        .unwrap();
    director.pop_with(FadeTransition::new(ms(200))).unwrap();

    let mut ticks = 0;
    while !director.is_settled() {
        director.tick(ms(50));
        ticks += 1;
        assert!(ticks < 100, "director never settled");
    }

    assert_eq!(director.scenes(), [root.clone()]);
    assert!(root.view().is_at_rest());
    assert!(!a.is_managed());
    assert!(!b.is_managed());
    assert_eq!(director.stage().len(), 1);
}

// ===========================================================================
// Errors
// ===========================================================================

#[test]
fn scene_cannot_join_two_directors() {
    let mut first = Director::new();
    let mut second = Director::new();
    let shared = inert("shared");

    first.push(&shared).unwrap();
    assert_eq!(
        second.push(&shared),
        Err(DirectorError::SceneOwnership {
            scene: shared.id(),
            owner: first.id(),
        })
    );

    drop(first);
    assert!(second.push(&shared).is_ok());
    assert_eq!(shared.director(), Some(second.id()));
}

#[test]
fn popped_scene_can_be_pushed_again() {
    let mut director = Director::new();
    let (root, overlay) = (inert("root"), inert("overlay"));
    director.push(&root).unwrap();
    director.push(&overlay).unwrap();
    director.pop().unwrap();

    assert!(director.push(&overlay).is_ok());
    assert_eq!(director.depth(), 2);
}

#[test]
fn scene_can_return_while_its_pop_is_queued() {
    let log: Journal = Rc::default();
    let (root, menu) = (probe("root", &log), probe("menu", &log));
    let mut director = Director::new();
    director.push(&root).unwrap();

    director.push_with(&menu, FadeTransition::new(ms(100))).unwrap();
    director.pop_with(FadeTransition::new(ms(100))).unwrap();
    assert_eq!(director.push(&menu), Ok(()));
    assert_eq!(director.projected_depth(), 2);

    // A second copy on the projected stack is still refused.
    assert_eq!(
        director.push(&menu),
        Err(DirectorError::SceneOwnership {
            scene: menu.id(),
            owner: director.id(),
        })
    );
    assert_eq!(director.projected_depth(), 2);

    let mut ticks = 0;
    while !director.is_settled() {
        director.tick(ms(50));
        ticks += 1;
        assert!(ticks < 100, "director never settled");
    }

    assert_eq!(director.scenes(), [root.clone(), menu.clone()]);
    assert_eq!(menu.director(), Some(director.id()));
    assert_eq!(count(&log, "menu", Lifecycle::Enter), 2);
    assert_eq!(count(&log, "menu", Lifecycle::Exit), 1);
    assert_eq!(count(&log, "root", Lifecycle::Resume), 1);

    director.pop().unwrap();
    assert!(!menu.is_managed());
}

#[test]
fn rejected_requests_leave_no_trace() {
    let mut director = Director::new();
    let scene = inert("s");

    assert!(matches!(director.pop(), Err(DirectorError::EmptyStack { .. })));
    assert!(matches!(director.replace(&scene), Err(DirectorError::EmptyStack { .. })));

    assert_eq!(director.depth(), 0);
    assert_eq!(director.projected_depth(), 0);
    assert!(director.is_settled());
    assert!(!scene.is_managed());
}

// ===========================================================================
// Stalls
// ===========================================================================

#[test]
fn dropped_completion_stalls_director() {
    struct Abandon;

    impl Transition for Abandon {
        fn start(
            self: Box<Self>,
            cx: &mut TransitionContext<'_>,
            outgoing: Option<&SceneHandle>,
            incoming: &SceneHandle,
            _done: Completion,
        ) {
            if let Some(outgoing) = outgoing {
                cx.stage_pair(outgoing, incoming);
            }
        }
    }

    let mut director = Director::new();
    let (root, next) = (inert("root"), inert("next"));
    director.push(&root).unwrap();
    director.push_with(&next, Abandon).unwrap();
    director.pop().unwrap();

    director.tick(ms(5000));

    assert!(director.is_transitioning());
    assert_eq!(director.transition_age(), Some(ms(5000)));
    assert_eq!(director.top(), Some(&root));
    assert_eq!(director.pending(), 1);
}

// ===========================================================================
// Helpers
// ===========================================================================

struct Inert;
impl Scene for Inert {}

fn inert(label: &str) -> SceneHandle {
    SceneHandle::new(label, Inert)
}

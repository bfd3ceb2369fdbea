//=========================================================================
// Scene Director
//=========================================================================
//
// Owns the scene stack and serializes stack operations against the one
// transition allowed in flight.
//
// Requests are validated against the projected stack (committed stack
// plus everything still queued), so a queued request can never turn
// invalid by the time it is drained. Rejected requests leave no trace.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::fmt;
use std::time::Duration;

use crossbeam_channel::{unbounded, Receiver, Sender};
use log::{debug, info, warn};

//=== Internal Dependencies ===============================================

use super::completion::{Completion, Ticket};
use super::request_queue::{Request, RequestQueue};
use crate::core::animation::{Animator, Tweener};
use crate::core::display::{DisplayTree, Stage};
use crate::core::error::DirectorError;
use crate::core::id::DirectorId;
use crate::core::scene::{Lifecycle, SceneHandle};
use crate::core::transition::{InstantTransition, Transition, TransitionContext};

//=== Stack Operation =====================================================

/// A scene stack operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StackOp {
    /// Pauses the current top and places a new scene above it.
    Push(SceneHandle),

    /// Removes the top scene and resumes the one below it.
    Pop,

    /// Removes the top scene and puts a new scene at the same depth.
    Replace(SceneHandle),
}

impl StackOp {
    /// The scene this operation brings onto the stack, if any.
    pub fn scene(&self) -> Option<&SceneHandle> {
        match self {
            StackOp::Push(scene) | StackOp::Replace(scene) => Some(scene),
            StackOp::Pop => None,
        }
    }

    fn verb(&self) -> &'static str {
        match self {
            StackOp::Push(_) => "push",
            StackOp::Pop => "pop",
            StackOp::Replace(_) => "replace",
        }
    }
}

//=== Director State ======================================================

/// Whether a transition is currently in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectorState {
    Idle,
    Transitioning,
}

/// Builds the transition used when a request does not supply one.
pub type TransitionFactory = Box<dyn Fn() -> Box<dyn Transition>>;

//=== DirectorBuilder =====================================================

/// Builder for configuring and constructing a [`Director`].
///
/// # Default Values
///
/// - **Stage**: in-memory [`Stage`]
/// - **Animator**: [`Tweener`]
/// - **Default transition**: [`InstantTransition`]
/// - **Queue capacity**: 8 requests (grows as needed)
///
/// # Examples
///
/// ```rust
/// use std::time::Duration;
/// use aetheric_director::prelude::*;
///
/// let director = DirectorBuilder::new()
///     .with_default_transition(|| Box::new(FadeTransition::new(Duration::from_millis(250))))
///     .with_queue_capacity(16)
///     .build();
///
/// assert_eq!(director.depth(), 0);
/// ```
pub struct DirectorBuilder {
    stage: Box<dyn DisplayTree>,
    animator: Box<dyn Animator>,
    default_transition: TransitionFactory,
    queue_capacity: usize,
}

impl DirectorBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            stage: Box::new(Stage::new()),
            animator: Box::new(Tweener::new()),
            default_transition: Box::new(|| Box::new(InstantTransition)),
            queue_capacity: 8,
        }
    }

    /// Uses `stage` as the display-tree backend.
    pub fn with_stage<T>(mut self, stage: T) -> Self
    where
        T: DisplayTree + 'static,
    {
        self.stage = Box::new(stage);
        self
    }

    /// Uses `animator` as the animation backend.
    ///
    /// The director advances it from [`Director::tick`].
    pub fn with_animator<T>(mut self, animator: T) -> Self
    where
        T: Animator + 'static,
    {
        self.animator = Box::new(animator);
        self
    }

    /// Sets the factory for requests that do not name a transition.
    pub fn with_default_transition<F>(mut self, factory: F) -> Self
    where
        F: Fn() -> Box<dyn Transition> + 'static,
    {
        self.default_transition = Box::new(factory);
        self
    }

    /// Pre-allocates room for `capacity` queued requests.
    ///
    /// # Panics
    ///
    /// Panics if `capacity == 0`.
    pub fn with_queue_capacity(mut self, capacity: usize) -> Self {
        assert!(capacity > 0, "Queue capacity must be positive");
        self.queue_capacity = capacity;
        self
    }

    /// Builds the director with an empty stack.
    pub fn build(self) -> Director {
        let (sender, receiver) = unbounded();
        let id = DirectorId::next();

        info!("Building {} (queue capacity: {})", id, self.queue_capacity);

        Director {
            id,
            stack: Vec::new(),
            requests: RequestQueue::with_capacity(self.queue_capacity),
            in_flight: None,
            projected_depth: 0,
            stage: self.stage,
            animator: self.animator,
            default_transition: self.default_transition,
            sender,
            receiver,
            next_ticket: 1,
        }
    }
}

impl Default for DirectorBuilder {
    fn default() -> Self {
        Self::new()
    }
}

//=== Director ============================================================

struct InFlight {
    ticket: Ticket,
    op: StackOp,
    age: Duration,
}

/// Stack-based scene navigator.
///
/// The top of the committed stack is the authoritative scene. Stack
/// operations return as soon as they are validated and queued; they
/// complete when their transition signals completion, at which point the
/// stack is mutated and lifecycle hooks fire.
///
/// # Examples
///
/// ```rust
/// use std::time::Duration;
/// use aetheric_director::prelude::*;
///
/// struct Menu;
/// impl Scene for Menu {}
///
/// let mut director = Director::new();
/// let root = SceneHandle::new("root", Menu);
/// let options = SceneHandle::new("options", Menu);
///
/// director.push(&root).unwrap();
/// director
///     .push_with(&options, FadeTransition::new(Duration::from_millis(100)))
///     .unwrap();
/// assert!(director.is_transitioning());
///
/// director.tick(Duration::from_millis(100));
/// assert_eq!(director.top(), Some(&options));
/// assert_eq!(director.depth(), 2);
/// ```
pub struct Director {
    id: DirectorId,
    stack: Vec<SceneHandle>,
    requests: RequestQueue,
    in_flight: Option<InFlight>,
    projected_depth: usize,
    stage: Box<dyn DisplayTree>,
    animator: Box<dyn Animator>,
    default_transition: TransitionFactory,
    sender: Sender<Ticket>,
    receiver: Receiver<Ticket>,
    next_ticket: u64,
}

impl Director {
    //--- Construction -----------------------------------------------------

    /// Creates a director with default backends.
    pub fn new() -> Self {
        DirectorBuilder::new().build()
    }

    pub fn builder() -> DirectorBuilder {
        DirectorBuilder::new()
    }

    //--- Stack Operations -------------------------------------------------

    /// Pushes `scene` using the default transition.
    ///
    /// # Errors
    ///
    /// [`DirectorError::SceneOwnership`] if `scene` is already managed.
    pub fn push(&mut self, scene: &SceneHandle) -> Result<(), DirectorError> {
        self.submit(StackOp::Push(scene.clone()), None)
    }

    /// Pushes `scene` using `transition`.
    pub fn push_with<T>(&mut self, scene: &SceneHandle, transition: T) -> Result<(), DirectorError>
    where
        T: Transition + 'static,
    {
        self.submit(StackOp::Push(scene.clone()), Some(Box::new(transition)))
    }

    /// Pops the top scene using the default transition.
    ///
    /// # Errors
    ///
    /// [`DirectorError::EmptyStack`] if the stack would be left without a root.
    pub fn pop(&mut self) -> Result<(), DirectorError> {
        self.submit(StackOp::Pop, None)
    }

    /// Pops the top scene using `transition`.
    pub fn pop_with<T>(&mut self, transition: T) -> Result<(), DirectorError>
    where
        T: Transition + 'static,
    {
        self.submit(StackOp::Pop, Some(Box::new(transition)))
    }

    /// Replaces the top scene with `scene` using the default transition.
    ///
    /// # Errors
    ///
    /// [`DirectorError::EmptyStack`] if there is nothing to replace, and
    /// [`DirectorError::SceneOwnership`] if `scene` is already managed.
    pub fn replace(&mut self, scene: &SceneHandle) -> Result<(), DirectorError> {
        self.submit(StackOp::Replace(scene.clone()), None)
    }

    /// Replaces the top scene with `scene` using `transition`.
    pub fn replace_with<T>(&mut self, scene: &SceneHandle, transition: T) -> Result<(), DirectorError>
    where
        T: Transition + 'static,
    {
        self.submit(StackOp::Replace(scene.clone()), Some(Box::new(transition)))
    }

    /// Validates and queues `op`, then starts it if the director is idle.
    ///
    /// `None` selects the default transition when the request is started.
    pub fn submit(
        &mut self,
        op: StackOp,
        transition: Option<Box<dyn Transition>>,
    ) -> Result<(), DirectorError> {
        if let Err(err) = self.accept(&op) {
            warn!("{}: rejected {}: {}", self.id, op.verb(), err);
            return Err(err);
        }

        debug!(
            "{}: queued {} (projected depth {}, {} ahead)",
            self.id,
            op.verb(),
            self.projected_depth,
            self.requests.len()
        );
        self.requests.push(Request { op, transition });
        self.pump();
        Ok(())
    }

    //--- Update Loop ------------------------------------------------------

    /// Advances the director by one host tick.
    ///
    /// Advances the animator, commits any finished transition, starts queued
    /// requests, then updates the authoritative scene if nothing is in flight.
    pub fn tick(&mut self, dt: Duration) {
        if let Some(flight) = self.in_flight.as_mut() {
            flight.age += dt;
        }

        self.animator.advance(dt);
        self.pump();

        if self.in_flight.is_none() {
            if let Some(top) = self.stack.last() {
                top.update(dt);
            }
        }
    }

    /// Commits completed transitions and starts queued requests until one
    /// stays in flight or the queue is empty.
    ///
    /// Called by [`tick`](Self::tick) and after every accepted request.
    /// Hosts driving an external animator call it after completions.
    pub fn pump(&mut self) {
        loop {
            self.drain_completions();

            if self.in_flight.is_some() {
                return;
            }

            let Some(request) = self.requests.pop() else {
                return;
            };
            self.begin(request);
        }
    }

    //--- Queries ----------------------------------------------------------

    pub fn id(&self) -> DirectorId {
        self.id
    }

    pub fn state(&self) -> DirectorState {
        if self.in_flight.is_some() {
            DirectorState::Transitioning
        } else {
            DirectorState::Idle
        }
    }

    pub fn is_transitioning(&self) -> bool {
        self.in_flight.is_some()
    }

    /// True when idle with nothing queued.
    pub fn is_settled(&self) -> bool {
        self.in_flight.is_none() && self.requests.is_empty()
    }

    /// The authoritative scene.
    pub fn top(&self) -> Option<&SceneHandle> {
        self.stack.last()
    }

    /// Committed stack depth.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Depth once the in-flight and queued requests have all completed.
    pub fn projected_depth(&self) -> usize {
        self.projected_depth
    }

    /// Committed stack, bottom first.
    pub fn scenes(&self) -> &[SceneHandle] {
        &self.stack
    }

    /// True if `scene` is on the committed stack.
    pub fn contains(&self, scene: &SceneHandle) -> bool {
        self.stack.contains(scene)
    }

    /// Number of queued requests, not counting the one in flight.
    pub fn pending(&self) -> usize {
        self.requests.len()
    }

    /// Queued operations, oldest first.
    pub fn pending_ops(&self) -> impl Iterator<Item = &StackOp> {
        self.requests.iter().map(|request| &request.op)
    }

    /// The operation whose transition is running.
    pub fn in_flight(&self) -> Option<&StackOp> {
        self.in_flight.as_ref().map(|flight| &flight.op)
    }

    /// Tick time accumulated by the running transition.
    ///
    /// A transition that never completes stalls the director; hosts can
    /// watch this value to detect it.
    pub fn transition_age(&self) -> Option<Duration> {
        self.in_flight.as_ref().map(|flight| flight.age)
    }

    pub fn stage(&self) -> &dyn DisplayTree {
        self.stage.as_ref()
    }

    pub fn animator(&self) -> &dyn Animator {
        self.animator.as_ref()
    }

    //--- Internal Helpers -------------------------------------------------

    /// Checks `op` against the projected stack and takes scene claims.
    fn accept(&mut self, op: &StackOp) -> Result<(), DirectorError> {
        match op {
            StackOp::Push(scene) => {
                self.claim(scene)?;
                self.projected_depth += 1;
            }
            StackOp::Pop => {
                if self.projected_depth <= 1 {
                    return Err(DirectorError::EmptyStack {
                        depth: self.projected_depth,
                    });
                }
                self.projected_depth -= 1;
            }
            StackOp::Replace(scene) => {
                if self.projected_depth == 0 {
                    return Err(DirectorError::EmptyStack { depth: 0 });
                }
                self.claim(scene)?;
            }
        }
        Ok(())
    }

    /// Claims `scene`, or keeps this director's claim when a pending pop or
    /// replace has already taken the scene off the projected stack.
    fn claim(&self, scene: &SceneHandle) -> Result<(), DirectorError> {
        if scene.director() == Some(self.id) && !self.projected_contains(scene) {
            return Ok(());
        }
        scene.claim(self.id)
    }

    /// True if `scene` is on the stack once the in-flight and queued
    /// requests have all committed.
    fn projected_contains(&self, scene: &SceneHandle) -> bool {
        let mut projected: Vec<&SceneHandle> = self.stack.iter().collect();
        let in_flight = self.in_flight.as_ref().map(|flight| &flight.op);

        for op in in_flight.into_iter().chain(self.pending_ops()) {
            match op {
                StackOp::Push(pushed) => projected.push(pushed),
                StackOp::Pop => {
                    projected.pop();
                }
                StackOp::Replace(incoming) => {
                    projected.pop();
                    projected.push(incoming);
                }
            }
        }
        projected.contains(&scene)
    }

    /// Drops the claim on a scene that left the stack, unless a queued
    /// request brings it back.
    fn release(&self, scene: &SceneHandle) {
        if !self.projected_contains(scene) {
            scene.release(self.id);
        }
    }

    fn begin(&mut self, request: Request) {
        let Request { op, transition } = request;

        let outgoing = self.stack.last().cloned();
        let incoming = match &op {
            StackOp::Push(scene) | StackOp::Replace(scene) => scene.clone(),
            StackOp::Pop => match self.stack.len().checked_sub(2) {
                Some(below) => self.stack[below].clone(),
                None => {
                    warn!("{}: pop drained at depth {}; dropped", self.id, self.stack.len());
                    return;
                }
            },
        };

        let transition = transition.unwrap_or_else(|| (self.default_transition)());
        let done = Completion::new(Ticket(self.next_ticket), self.sender.clone());
        self.next_ticket += 1;

        info!(
            "{}: {} {:?} -> {:?} via {} ({})",
            self.id,
            op.verb(),
            outgoing.as_ref().map(SceneHandle::label),
            incoming.label(),
            transition.name(),
            done.ticket()
        );

        self.in_flight = Some(InFlight {
            ticket: done.ticket(),
            op,
            age: Duration::ZERO,
        });

        let mut cx = TransitionContext::new(&mut *self.stage, &mut *self.animator);
        transition.start(&mut cx, outgoing.as_ref(), &incoming, done);
    }

    fn drain_completions(&mut self) {
        while let Ok(ticket) = self.receiver.try_recv() {
            match self.in_flight.take() {
                Some(flight) if flight.ticket == ticket => self.commit(flight),
                other => {
                    warn!("{}: ignoring completion of {}; not in flight", self.id, ticket);
                    self.in_flight = other;
                }
            }
        }
    }

    /// Applies the finished operation, then fires loser and winner hooks.
    fn commit(&mut self, flight: InFlight) {
        debug!(
            "{}: {} committed after {:?}",
            self.id,
            flight.ticket,
            flight.age
        );

        match flight.op {
            StackOp::Push(scene) => {
                let paused = self.stack.last().cloned();
                self.stack.push(scene.clone());

                if let Some(paused) = paused {
                    self.stage.remove_child(&paused);
                    paused.dispatch(Lifecycle::Pause);
                }
                scene.dispatch(Lifecycle::Enter);
            }
            StackOp::Pop => {
                let Some(popped) = self.stack.pop() else {
                    return;
                };
                self.stage.remove_child(&popped);
                self.release(&popped);
                popped.dispatch(Lifecycle::Exit);

                if let Some(exposed) = self.stack.last() {
                    exposed.dispatch(Lifecycle::Resume);
                }
            }
            StackOp::Replace(scene) => {
                let replaced = self.stack.pop();
                self.stack.push(scene.clone());

                if let Some(replaced) = replaced {
                    self.stage.remove_child(&replaced);
                    self.release(&replaced);
                    replaced.dispatch(Lifecycle::Exit);
                }
                scene.dispatch(Lifecycle::Enter);
            }
        }
    }
}

impl Default for Director {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Director {
    fn drop(&mut self) {
        // Release every claim this director still holds so the scenes can
        // be pushed elsewhere.
        for scene in &self.stack {
            scene.release(self.id);
        }
        if let Some(scene) = self.in_flight.as_ref().and_then(|flight| flight.op.scene()) {
            scene.release(self.id);
        }
        for request in self.requests.take() {
            if let Some(scene) = request.op.scene() {
                scene.release(self.id);
            }
        }
    }
}

impl fmt::Debug for Director {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Director")
            .field("id", &self.id)
            .field("stack", &self.stack)
            .field("state", &self.state())
            .field("pending", &self.requests.len())
            .finish()
    }
}

//=== Tests ===============================================================

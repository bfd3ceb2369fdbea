//=========================================================================
// Transitions
//=========================================================================
//
// Strategy objects that animate the handoff between the outgoing and
// incoming scene, then signal their director through a `Completion`.
//
// Contract (shared by every variant):
//   1. No outgoing scene: attach incoming at rest, complete immediately.
//   2. Otherwise attach both scenes, incoming directly above outgoing,
//      with start values written before the animation begins.
//   3. When the effect ends, return the outgoing scene to rest, then
//      complete.
//
// Variants differ only in the animated property and in which side
// (incoming, outgoing, or both) takes part.
//
//=========================================================================

//=== Module Declarations =================================================

mod fade;
mod instant;
mod scale;
mod slide;

//=== Public API ==========================================================

pub use fade::FadeTransition;
pub use instant::InstantTransition;
pub use scale::ScaleTransition;
pub use slide::{Direction, MoveTransition};

//=== External Dependencies ===============================================

use std::time::Duration;

//=== Internal Dependencies ===============================================

use crate::core::animation::{Animation, Animator, Easing, Track};
use crate::core::director::Completion;
use crate::core::display::DisplayTree;
use crate::core::scene::SceneHandle;

//=== Transition Trait ====================================================

/// Animates the visual handoff between two scenes.
///
/// A transition is consumed by [`start`](Transition::start); everything it
/// needs afterwards, including the [`Completion`], moves into the
/// animation it schedules. Dropping the completion without calling
/// [`Completion::complete`] stalls the director.
///
/// # Custom Transitions
///
/// ```rust
/// # use std::time::Duration;
/// # use aetheric_director::prelude::*;
/// /// Slides the incoming scene down from above the stage.
/// struct Curtain;
///
/// impl Transition for Curtain {
///     fn start(
///         self: Box<Self>,
///         cx: &mut TransitionContext<'_>,
///         outgoing: Option<&SceneHandle>,
///         incoming: &SceneHandle,
///         done: Completion,
///     ) {
///         let Some(outgoing) = outgoing else {
///             return cx.enter_directly(incoming, done);
///         };
///         let tracks = vec![Track::new(incoming, Property::Y, -600.0, 0.0)];
///         cx.play(outgoing, incoming, tracks, Duration::from_millis(400), Easing::EaseOut, done);
///     }
/// }
/// ```
pub trait Transition {
    /// Begins the handoff from `outgoing` to `incoming`.
    fn start(
        self: Box<Self>,
        cx: &mut TransitionContext<'_>,
        outgoing: Option<&SceneHandle>,
        incoming: &SceneHandle,
        done: Completion,
    );

    /// Short name used in logs.
    fn name(&self) -> &'static str {
        "custom"
    }
}

//=== Side ================================================================

/// Which scenes an effect animates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Side {
    /// Only the incoming scene moves; the outgoing one stays at rest.
    Incoming,
    /// Only the outgoing scene moves; the incoming one stays at rest.
    Outgoing,
    /// Both scenes move together.
    #[default]
    Both,
}

impl Side {
    pub fn animates_incoming(self) -> bool {
        matches!(self, Side::Incoming | Side::Both)
    }

    pub fn animates_outgoing(self) -> bool {
        matches!(self, Side::Outgoing | Side::Both)
    }
}

//=== TransitionContext ===================================================

/// Backends a transition may use while it starts.
pub struct TransitionContext<'a> {
    pub stage: &'a mut dyn DisplayTree,
    pub animator: &'a mut dyn Animator,
}

impl<'a> TransitionContext<'a> {
    pub fn new(stage: &'a mut dyn DisplayTree, animator: &'a mut dyn Animator) -> Self {
        Self { stage, animator }
    }

    /// Attaches `outgoing` if needed and orders `incoming` directly above it.
    pub fn stage_pair(&mut self, outgoing: &SceneHandle, incoming: &SceneHandle) {
        if !self.stage.contains(outgoing.id()) {
            self.stage.add_child(outgoing);
        }
        self.stage.place_above(incoming, outgoing);
    }

    /// Handles the no-outgoing case: attach `incoming` at rest and complete.
    pub fn enter_directly(&mut self, incoming: &SceneHandle, done: Completion) {
        incoming.view_mut().reset();
        self.stage.add_child(incoming);
        done.complete();
    }

    /// Swaps without animating: both scenes present and at rest, then complete.
    pub fn swap_now(&mut self, outgoing: &SceneHandle, incoming: &SceneHandle, done: Completion) {
        incoming.view_mut().reset();
        self.stage_pair(outgoing, incoming);
        outgoing.view_mut().reset();
        done.complete();
    }

    /// Runs `tracks` between two attached scenes.
    ///
    /// Start values are written before either scene is staged; the finish
    /// callback resets `outgoing` to rest and then completes `done`.
    pub fn play(
        &mut self,
        outgoing: &SceneHandle,
        incoming: &SceneHandle,
        tracks: Vec<Track>,
        duration: Duration,
        easing: Easing,
        done: Completion,
    ) {
        incoming.view_mut().reset();
        outgoing.view_mut().reset();
        for track in &tracks {
            track.apply(0.0);
        }

        self.stage_pair(outgoing, incoming);

        let rest = outgoing.clone();
        let animation = tracks
            .into_iter()
            .fold(Animation::new(duration, easing), Animation::track)
            .on_finish(move || {
                rest.view_mut().reset();
                done.complete();
            });

        self.animator.animate(animation);
    }
}

//=== Tests ===============================================================

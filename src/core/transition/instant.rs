//=========================================================================
// Instant Transition
//=========================================================================

//=== Internal Dependencies ===============================================

use super::{Transition, TransitionContext};
use crate::core::director::Completion;
use crate::core::scene::SceneHandle;

//=== InstantTransition ===================================================

/// Swaps scenes without animating; completes inside `start`.
///
/// This is the director's default when no transition is supplied.
#[derive(Debug, Clone, Copy, Default)]
pub struct InstantTransition;

impl InstantTransition {
    pub fn new() -> Self {
        Self
    }
}

impl Transition for InstantTransition {
    fn start(
        self: Box<Self>,
        cx: &mut TransitionContext<'_>,
        outgoing: Option<&SceneHandle>,
        incoming: &SceneHandle,
        done: Completion,
    ) {
        match outgoing {
            Some(outgoing) => cx.swap_now(outgoing, incoming, done),
            None => cx.enter_directly(incoming, done),
        }
    }

    fn name(&self) -> &'static str {
        "instant"
    }
}

//=== Tests ===============================================================

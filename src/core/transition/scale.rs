//=========================================================================
// Scale Transition
//=========================================================================

//=== External Dependencies ===============================================

use std::time::Duration;

//=== Internal Dependencies ===============================================

use super::{Side, Transition, TransitionContext};
use crate::core::animation::{Easing, Property, Track};
use crate::core::config;
use crate::core::director::Completion;
use crate::core::scene::SceneHandle;

//=== ScaleTransition =====================================================

/// Scale transition: incoming grows from nothing, outgoing shrinks away.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleTransition {
    duration: Duration,
    easing: Easing,
    side: Side,
}

impl ScaleTransition {
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            easing: config::settings().easing(),
            side: Side::Both,
        }
    }

    /// Grows only the incoming scene.
    pub fn zoom_in(duration: Duration) -> Self {
        Self::new(duration).with_side(Side::Incoming)
    }

    /// Shrinks only the outgoing scene.
    ///
    /// The incoming scene is attached at rest directly above the outgoing
    /// one, so an opaque incoming scene hides the effect and this acts as a
    /// timed delay. It is only visible when the incoming scene is
    /// translucent or does not cover the stage.
    pub fn zoom_out(duration: Duration) -> Self {
        Self::new(duration).with_side(Side::Outgoing)
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn with_side(mut self, side: Side) -> Self {
        self.side = side;
        self
    }

    fn tracks(&self, outgoing: &SceneHandle, incoming: &SceneHandle) -> Vec<Track> {
        let mut tracks = Vec::with_capacity(4);
        for property in [Property::ScaleX, Property::ScaleY] {
            if self.side.animates_incoming() {
                tracks.push(Track::new(incoming, property, 0.0, 1.0));
            }
            if self.side.animates_outgoing() {
                tracks.push(Track::new(outgoing, property, 1.0, 0.0));
            }
        }
        tracks
    }
}

impl Default for ScaleTransition {
    fn default() -> Self {
        Self::new(config::settings().transition_duration())
    }
}

impl Transition for ScaleTransition {
    fn start(
        self: Box<Self>,
        cx: &mut TransitionContext<'_>,
        outgoing: Option<&SceneHandle>,
        incoming: &SceneHandle,
        done: Completion,
    ) {
        let Some(outgoing) = outgoing else {
            return cx.enter_directly(incoming, done);
        };

        let tracks = self.tracks(outgoing, incoming);
        cx.play(outgoing, incoming, tracks, self.duration, self.easing, done);
    }

    fn name(&self) -> &'static str {
        "scale"
    }
}

//=== Tests ===============================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::animation::Animator;
    use crate::core::scene::Point;
    use crate::core::test_utils::Handoff;

    #[test]
    fn zoom_both_sides() {
        let mut h = Handoff::start(
            ScaleTransition::new(Duration::from_millis(200)).with_easing(Easing::Linear),
        );
        assert_eq!(h.incoming.view().scale, Point::ZERO);
        assert_eq!(h.outgoing.view().scale, Point::ONE);

        h.tweener.advance(Duration::from_millis(100));
        assert!((h.incoming.view().scale.x - 0.5).abs() < 1e-4);
        assert!((h.outgoing.view().scale.y - 0.5).abs() < 1e-4);

        h.tweener.advance(Duration::from_millis(100));
        assert!(h.completed());
        assert_eq!(h.outgoing.view().scale, Point::ONE);
        assert_eq!(h.incoming.view().scale, Point::ONE);
    }

    #[test]
    fn zoom_out_keeps_incoming_full_size_on_top() {
        let h = Handoff::start(ScaleTransition::zoom_out(Duration::from_millis(200)));
        assert_eq!(h.incoming.view().scale, Point::ONE);
        assert!(h.incoming_on_top());
    }
}

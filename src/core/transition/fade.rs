//=========================================================================
// Fade Transition
//=========================================================================
//
// Animates opacity. `Incoming` fades the new scene in over the old one,
// `Outgoing` fades the old scene out, `Both` crossfades.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::time::Duration;

//=== Internal Dependencies ===============================================

use super::{Side, Transition, TransitionContext};
use crate::core::animation::{Easing, Property, Track};
use crate::core::config;
use crate::core::director::Completion;
use crate::core::scene::SceneHandle;

//=== FadeTransition ======================================================

/// Opacity transition.
///
/// # Examples
///
/// ```rust
/// # use std::time::Duration;
/// # use aetheric_director::prelude::*;
/// let crossfade = FadeTransition::new(Duration::from_millis(800));
/// let fade_in = FadeTransition::fade_in(Duration::from_millis(300)).with_easing(Easing::EaseOut);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FadeTransition {
    duration: Duration,
    easing: Easing,
    side: Side,
}

impl FadeTransition {
    /// Crossfade: old scene to transparent, new scene to opaque.
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            easing: config::settings().easing(),
            side: Side::Both,
        }
    }

    /// Fades only the incoming scene in.
    pub fn fade_in(duration: Duration) -> Self {
        Self::new(duration).with_side(Side::Incoming)
    }

    /// Fades only the outgoing scene out.
    ///
    /// The incoming scene is attached at rest directly above the outgoing
    /// one, so an opaque incoming scene hides the effect and this acts as a
    /// timed delay. It is only visible when the incoming scene is
    /// translucent or does not cover the stage.
    pub fn fade_out(duration: Duration) -> Self {
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

    pub fn duration(&self) -> Duration {
        self.duration
    }

    pub fn side(&self) -> Side {
        self.side
    }

    fn tracks(&self, outgoing: &SceneHandle, incoming: &SceneHandle) -> Vec<Track> {
        let mut tracks = Vec::with_capacity(2);
        if self.side.animates_incoming() {
            tracks.push(Track::new(incoming, Property::Alpha, 0.0, 1.0));
        }
        if self.side.animates_outgoing() {
            tracks.push(Track::new(outgoing, Property::Alpha, 1.0, 0.0));
        }
        tracks
    }
}

impl Default for FadeTransition {
    fn default() -> Self {
        Self::new(config::settings().transition_duration())
    }
}

impl Transition for FadeTransition {
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
        "fade"
    }
}

//=== Tests ===============================================================

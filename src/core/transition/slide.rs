//=========================================================================
// Move Transition
//=========================================================================
//
// Slides scenes across the stage. The incoming scene travels from one
// stage-length behind the motion direction to the origin; the outgoing
// scene travels from the origin one stage-length along it.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::time::Duration;

//=== Internal Dependencies ===============================================

use super::{Side, Transition, TransitionContext};
use crate::core::animation::{Easing, Property, Track};
use crate::core::config;
use crate::core::director::Completion;
use crate::core::scene::{Point, SceneHandle};

//=== Direction ===========================================================

/// Direction the scenes travel in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// Displacement of one full stage in this direction (y grows downward).
    pub fn offset(self, stage: Point) -> Point {
        match self {
            Direction::Left => Point::new(-stage.x, 0.0),
            Direction::Right => Point::new(stage.x, 0.0),
            Direction::Up => Point::new(0.0, -stage.y),
            Direction::Down => Point::new(0.0, stage.y),
        }
    }
}

//=== MoveTransition ======================================================

/// Position transition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoveTransition {
    direction: Direction,
    duration: Duration,
    easing: Easing,
    side: Side,
    stage_size: Option<Point>,
}

impl MoveTransition {
    /// Pushes the outgoing scene off while the incoming scene slides in.
    pub fn new(direction: Direction, duration: Duration) -> Self {
        Self {
            direction,
            duration,
            easing: config::settings().easing(),
            side: Side::Both,
            stage_size: None,
        }
    }

    /// Slides only the incoming scene in over a still outgoing scene.
    pub fn move_in(direction: Direction, duration: Duration) -> Self {
        Self::new(direction, duration).with_side(Side::Incoming)
    }

    /// Slides only the outgoing scene away.
    ///
    /// The incoming scene is attached at rest directly above the outgoing
    /// one, so an opaque incoming scene hides the effect and this acts as a
    /// timed delay. It is only visible when the incoming scene is
    /// translucent or does not cover the stage.
    pub fn move_out(direction: Direction, duration: Duration) -> Self {
        Self::new(direction, duration).with_side(Side::Outgoing)
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn with_side(mut self, side: Side) -> Self {
        self.side = side;
        self
    }

    /// Overrides the configured stage size for this transition only.
    pub fn with_stage_size(mut self, width: f32, height: f32) -> Self {
        self.stage_size = Some(Point::new(width, height));
        self
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    fn tracks(&self, outgoing: &SceneHandle, incoming: &SceneHandle) -> Vec<Track> {
        let stage = self
            .stage_size
            .unwrap_or_else(|| config::settings().stage_size());
        let offset = self.direction.offset(stage);

        let mut tracks = Vec::with_capacity(2);
        for (property, distance) in [(Property::X, offset.x), (Property::Y, offset.y)] {
            if distance == 0.0 {
                continue;
            }
            if self.side.animates_incoming() {
                tracks.push(Track::new(incoming, property, -distance, 0.0));
            }
            if self.side.animates_outgoing() {
                tracks.push(Track::new(outgoing, property, 0.0, distance));
            }
        }
        tracks
    }
}

impl Transition for MoveTransition {
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
        "move"
    }
}

//=== Tests ===============================================================

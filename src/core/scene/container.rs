//=========================================================================
// Container
//=========================================================================
//
// The visual node owned by a scene.
//
// Holds only the display properties transitions animate. Drawing the
// scene's content is the host renderer's job; it reads these values
// when compositing the stage.
//
//=========================================================================

//=== Point ===============================================================

/// A 2D value used for positions and scale factors.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };
    pub const ONE: Point = Point { x: 1.0, y: 1.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

//=== Container ===========================================================

/// Display properties of a scene's root node.
///
/// The rest state is fully opaque, at the origin, unscaled and visible.
/// Transitions move away from rest while they run and always leave the
/// outgoing scene back at rest when they finish.
#[derive(Debug, Clone, PartialEq)]
pub struct Container {
    /// Opacity in `0.0..=1.0`.
    pub alpha: f32,
    pub position: Point,
    pub scale: Point,
    pub visible: bool,
}

impl Container {
    /// Creates a container in its rest state.
    pub fn new() -> Self {
        Self {
            alpha: 1.0,
            position: Point::ZERO,
            scale: Point::ONE,
            visible: true,
        }
    }

    /// Restores the rest state.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn is_at_rest(&self) -> bool {
        *self == Self::new()
    }
}

impl Default for Container {
    fn default() -> Self {
        Self::new()
    }
}

//=== Tests ===============================================================

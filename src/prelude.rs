//=========================================================================
// Prelude
//=========================================================================
//
// Convenience module that re-exports commonly used types and traits.
//
// Usage:
//   use aetheric_director::prelude::*;
//
//=========================================================================

//=== Public API ==========================================================

// Director
pub use crate::core::director::{Completion, Director, DirectorBuilder, DirectorState, StackOp};

// Scenes
pub use crate::core::scene::{Container, Lifecycle, Point, Scene, SceneHandle};

// Transitions
pub use crate::core::transition::{
    Direction, FadeTransition, InstantTransition, MoveTransition, ScaleTransition, Side,
    Transition, TransitionContext,
};

// Backends
pub use crate::core::animation::{Animation, Animator, Easing, Property, Track, Tweener};
pub use crate::core::display::{DisplayTree, Stage};

// Configuration and errors
pub use crate::core::config::Settings;
pub use crate::core::error::{ConfigError, DirectorError};
pub use crate::core::id::{DirectorId, SceneId};

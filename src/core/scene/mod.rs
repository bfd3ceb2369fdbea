//=========================================================================
// Scene System
//=========================================================================
//
// Scene behavior, its visual container, and the shared handle the
// director stacks.
//
// Architecture:
//   SceneHandle (Rc)
//     ├─ id / label
//     ├─ director: Option<DirectorId>   (back-reference, claim)
//     ├─ view: Container                (owned visual state)
//     └─ behavior: Box<dyn Scene>       (lifecycle hooks)
//
// Flow:
//   Director commit ──dispatch(Lifecycle)──> Scene::on_*(&mut Container)
//
//=========================================================================

//=== Module Declarations =================================================

mod container;
mod handle;

//=== Public API ==========================================================

pub use container::{Container, Point};
pub use handle::SceneHandle;

//=== External Dependencies ===============================================

use std::time::Duration;

//=== Scene Trait =========================================================

/// Defines scene behavior through lifecycle hooks.
///
/// Scenes are wrapped in a [`SceneHandle`] and moved between stacks by a
/// [`Director`](crate::Director). The director decides when each hook
/// fires; a scene never calls them on itself.
///
/// # Minimal Implementation
///
/// Every hook has an empty default implementation:
///
/// ```rust
/// # use aetheric_director::prelude::*;
/// struct Splash;
///
/// impl Scene for Splash {}
///
/// let handle = SceneHandle::new("splash", Splash);
/// ```
///
/// # Hook Order
///
/// For a single stack operation the scene losing authority is notified
/// first (`on_pause` or `on_exit`), then the scene gaining it (`on_enter`
/// or `on_resume`). Both fire after the transition effect has finished.
pub trait Scene {
    /// Called when the scene becomes the top of a stack for the first time.
    fn on_enter(&mut self, _view: &mut Container) {}

    /// Called when the scene is removed from the stack by a pop or replace.
    fn on_exit(&mut self, _view: &mut Container) {}

    /// Called when another scene is pushed above this one.
    fn on_pause(&mut self, _view: &mut Container) {}

    /// Called when the scene above this one is popped.
    fn on_resume(&mut self, _view: &mut Container) {}

    /// Called every director tick while this scene is authoritative and
    /// no transition is running.
    fn update(&mut self, _view: &mut Container, _dt: Duration) {}
}

//=== Lifecycle ===========================================================

/// The four lifecycle signals a director delivers to scenes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Lifecycle {
    Enter,
    Exit,
    Pause,
    Resume,
}

impl Lifecycle {
    /// True for the signals delivered to the scene that gained authority.
    pub fn is_gain(self) -> bool {
        matches!(self, Lifecycle::Enter | Lifecycle::Resume)
    }
}

//=== Tests ===============================================================

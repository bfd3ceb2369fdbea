//=========================================================================
// Aetheric Director - Library Root
//
// This crate defines the public API surface of the Aetheric Director.
//
// Responsibilities:
// - Expose the scene-stack navigator (`Director`) and its builder
// - Expose the scene lifecycle contract (`Scene`, `SceneHandle`)
// - Expose transition effects and the backend seams they drive
//   (display tree, animator)
//
// Typical usage:
// ```no_run
// use std::time::Duration;
// use aetheric_director::prelude::*;
//
// struct Title;
// impl Scene for Title {}
//
// struct Level;
// impl Scene for Level {}
//
// let mut director = Director::new();
// let title = SceneHandle::new("title", Title);
// let level = SceneHandle::new("level", Level);
//
// director.push(&title).unwrap();
// director
//     .push_with(&level, FadeTransition::new(Duration::from_millis(500)))
//     .unwrap();
//
// // Host loop
// director.tick(Duration::from_millis(16));
// ```
//
//=========================================================================

//--- Public Modules ------------------------------------------------------
//
// `core` contains the director state machine, scenes, transitions and
// the reference backends. Most application code only needs `prelude`.
//
pub mod core;
pub mod prelude;

//--- Public Exports ------------------------------------------------------
//
// Re-exports the `Director` as the main entry point so applications can
// `use aetheric_director::Director;` without knowing the module layout.
//
pub use crate::core::director::{Director, DirectorBuilder};
pub use crate::core::error::DirectorError;

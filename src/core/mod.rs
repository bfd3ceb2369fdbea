//=========================================================================
// Core Systems
//
// All director-side systems and the backend seams they drive.
//
// Architecture:
// ```text
//   Director ──start()──> Transition ──animate()──> Animator
//      │                      │                        │
//      │                      └─ place_above() ──> DisplayTree
//      │                                               │
//      └─< Completion (channel) <── on_finish ─────────┘
// ```
//
// Notes:
// Everything here runs on the host's thread. The host owns the tick
// source and calls `Director::tick` once per frame; the director never
// spawns threads or sleeps.
//
//=========================================================================

//=== Module Declarations =================================================

pub mod animation;
pub mod config;
pub mod director;
pub mod display;
pub mod error;
pub mod id;
pub mod scene;
pub mod transition;

#[cfg(test)]
pub(crate) mod test_utils;

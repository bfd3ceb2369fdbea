//=========================================================================
// Errors
//=========================================================================
//
// Structural errors reported synchronously by director operations, and
// configuration errors reported by `config::init`.
//
// A rejected operation never enters the request queue and never touches
// the stack, scene ownership, or lifecycle state.
//
//=========================================================================

//=== External Dependencies ===============================================

use thiserror::Error;

//=== Internal Dependencies ===============================================

use crate::core::id::{DirectorId, SceneId};

//=== DirectorError =======================================================

/// Errors returned by [`Director`](crate::Director) stack operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DirectorError {
    /// The operation would leave the stack without a root scene.
    ///
    /// `depth` is the stack depth the request was validated against,
    /// which includes requests still waiting in the queue.
    #[error("scene stack too shallow for this operation (depth {depth})")]
    EmptyStack { depth: usize },

    /// The scene is already claimed by a director.
    #[error("{scene} is already managed by {owner}")]
    SceneOwnership { scene: SceneId, owner: DirectorId },
}

//=== ConfigError =========================================================

/// Errors returned while installing process-wide [`Settings`](crate::core::config::Settings).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// Settings can only be installed once, before the first read.
    #[error("settings are already initialized")]
    AlreadyInitialized,

    /// A setting failed validation.
    #[error("invalid setting `{name}`: {reason}")]
    Invalid { name: &'static str, reason: String },
}

//=== Tests ===============================================================

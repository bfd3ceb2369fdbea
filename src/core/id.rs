//=========================================================================
// Identifiers
//=========================================================================
//
// Process-unique identifiers for scenes and directors.
//
// Both are minted from monotonically increasing atomic counters, so two
// handles compare equal only if they refer to the same instance.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

//=== Counters ============================================================

static NEXT_SCENE_ID: AtomicU64 = AtomicU64::new(1);
static NEXT_DIRECTOR_ID: AtomicU64 = AtomicU64::new(1);

//=== SceneId =============================================================

/// Identifies one scene instance for the lifetime of the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SceneId(u64);

impl SceneId {
    pub(crate) fn next() -> Self {
        Self(NEXT_SCENE_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// Returns the raw counter value.
    pub fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for SceneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "scene#{}", self.0)
    }
}

//=== DirectorId ==========================================================

/// Identifies one director instance; stored on scenes it manages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DirectorId(u64);

impl DirectorId {
    pub(crate) fn next() -> Self {
        Self(NEXT_DIRECTOR_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// Returns the raw counter value.
    pub fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for DirectorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "director#{}", self.0)
    }
}

//=== Tests ===============================================================

//=========================================================================
// Display Tree
//=========================================================================
//
// Seam to the host's display-tree backend.
//
// Transitions use it to make both scenes present and to keep the
// incoming scene above the outgoing one; the director uses it to detach
// the scene that lost authority once a transition commits.
//
// `Stage` is an in-memory implementation for headless hosts and tests.
//
//=========================================================================

//=== Module Declarations =================================================

mod stage;

//=== Public API ==========================================================

pub use stage::Stage;

//=== Internal Dependencies ===============================================

use crate::core::id::SceneId;
use crate::core::scene::SceneHandle;

//=== DisplayTree Trait ===================================================

/// Ordered child list of scene roots, bottom to top.
pub trait DisplayTree {
    /// Attaches `scene` on top of every other child.
    ///
    /// An already attached scene is moved to the top.
    fn add_child(&mut self, scene: &SceneHandle);

    /// Detaches `scene`. Returns `false` if it was not attached.
    fn remove_child(&mut self, scene: &SceneHandle) -> bool;

    /// Orders `upper` directly above `lower`, attaching either if needed.
    fn place_above(&mut self, upper: &SceneHandle, lower: &SceneHandle);

    /// Position of `scene` counted from the bottom.
    fn index_of(&self, scene: SceneId) -> Option<usize>;

    /// Number of attached children.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn contains(&self, scene: SceneId) -> bool {
        self.index_of(scene).is_some()
    }
}

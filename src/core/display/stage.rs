//=========================================================================
// Stage
//=========================================================================
//
// In-memory display tree.
//
// Keeps scene handles in z-order (index 0 is the bottom). Hosts that
// render through another toolkit implement `DisplayTree` themselves and
// mirror these operations onto their own scene graph.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::trace;

//=== Internal Dependencies ===============================================

use super::DisplayTree;
use crate::core::id::SceneId;
use crate::core::scene::SceneHandle;

//=== Stage ===============================================================

/// Reference [`DisplayTree`] backed by a `Vec`.
#[derive(Debug, Default)]
pub struct Stage {
    children: Vec<SceneHandle>,
}

impl Stage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attached scenes, bottom first.
    pub fn children(&self) -> &[SceneHandle] {
        &self.children
    }
}

impl DisplayTree for Stage {
    fn add_child(&mut self, scene: &SceneHandle) {
        self.remove_child(scene);
        self.children.push(scene.clone());
        trace!("Stage: attached {:?} at top ({} children)", scene.id(), self.children.len());
    }

    fn remove_child(&mut self, scene: &SceneHandle) -> bool {
        match self.index_of(scene.id()) {
            Some(pos) => {
                self.children.remove(pos);
                trace!("Stage: detached {:?} from position {}", scene.id(), pos);
                true
            }
            None => false,
        }
    }

    fn place_above(&mut self, upper: &SceneHandle, lower: &SceneHandle) {
        if upper == lower {
            if !self.contains(upper.id()) {
                self.add_child(upper);
            }
            return;
        }

        self.remove_child(upper);
        let at = match self.index_of(lower.id()) {
            Some(pos) => pos + 1,
            None => {
                self.children.push(lower.clone());
                self.children.len()
            }
        };
        self.children.insert(at, upper.clone());
        trace!("Stage: {:?} placed above {:?}", upper.id(), lower.id());
    }

    fn index_of(&self, scene: SceneId) -> Option<usize> {
        self.children.iter().position(|child| child.id() == scene)
    }

    fn len(&self) -> usize {
        self.children.len()
    }
}

//=== Tests ===============================================================

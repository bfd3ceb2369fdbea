//=========================================================================
// Scene Handle
//=========================================================================
//
// Shared, cheap-to-clone reference to one scene.
//
// The application keeps its own clone; directors, stages and running
// animations hold further clones while they need the scene. None of them
// ever destroys it.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::any::Any;
use std::cell::{Cell, Ref, RefCell, RefMut};
use std::fmt;
use std::rc::Rc;
use std::time::Duration;

use log::debug;

//=== Internal Dependencies ===============================================

use super::{Container, Lifecycle, Scene};
use crate::core::error::DirectorError;
use crate::core::id::{DirectorId, SceneId};

//=== Behavior ============================================================

/// Type-erased scene behavior that can still be downcast to its concrete type.
trait Behavior {
    fn scene_mut(&mut self) -> &mut dyn Scene;

    fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl<T: Scene + 'static> Behavior for T {
    fn scene_mut(&mut self) -> &mut dyn Scene {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

//=== SceneHandle =========================================================

struct SceneCell {
    id: SceneId,
    label: String,
    director: Cell<Option<DirectorId>>,
    view: RefCell<Container>,
    behavior: RefCell<Box<dyn Behavior>>,
}

/// Shared handle composing a scene's behavior with its [`Container`].
///
/// Handles compare equal when they refer to the same scene instance.
///
/// # Borrowing
///
/// Lifecycle hooks run while the handle's view and behavior are borrowed.
/// A hook must not call [`view`](Self::view) or
/// [`with_scene`](Self::with_scene) on a handle to its own scene; use the
/// `&mut Container` it receives instead.
#[derive(Clone)]
pub struct SceneHandle {
    inner: Rc<SceneCell>,
}

impl SceneHandle {
    //--- Construction -----------------------------------------------------

    /// Wraps `scene` with a fresh container in its rest state.
    pub fn new<T>(label: impl Into<String>, scene: T) -> Self
    where
        T: Scene + 'static,
    {
        Self {
            inner: Rc::new(SceneCell {
                id: SceneId::next(),
                label: label.into(),
                director: Cell::new(None),
                view: RefCell::new(Container::new()),
                behavior: RefCell::new(Box::new(scene)),
            }),
        }
    }

    //--- Accessors --------------------------------------------------------

    pub fn id(&self) -> SceneId {
        self.inner.id
    }

    pub fn label(&self) -> &str {
        &self.inner.label
    }

    /// The director currently managing this scene, if any.
    pub fn director(&self) -> Option<DirectorId> {
        self.inner.director.get()
    }

    pub fn is_managed(&self) -> bool {
        self.director().is_some()
    }

    /// Borrows the scene's container.
    pub fn view(&self) -> Ref<'_, Container> {
        self.inner.view.borrow()
    }

    /// Mutably borrows the scene's container.
    pub fn view_mut(&self) -> RefMut<'_, Container> {
        self.inner.view.borrow_mut()
    }

    /// Runs `f` against the concrete scene type.
    ///
    /// Returns `None` if the scene is not a `T`.
    pub fn with_scene<T, R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R>
    where
        T: Scene + 'static,
    {
        let mut behavior = self.inner.behavior.borrow_mut();
        behavior.as_any_mut().downcast_mut::<T>().map(f)
    }

    //--- Ownership --------------------------------------------------------

    /// Marks this scene as managed by `director`.
    pub(crate) fn claim(&self, director: DirectorId) -> Result<(), DirectorError> {
        if let Some(owner) = self.inner.director.get() {
            return Err(DirectorError::SceneOwnership {
                scene: self.id(),
                owner,
            });
        }
        self.inner.director.set(Some(director));
        Ok(())
    }

    /// Clears the claim if it is held by `director`.
    pub(crate) fn release(&self, director: DirectorId) {
        if self.inner.director.get() == Some(director) {
            self.inner.director.set(None);
        }
    }

    //--- Hook Dispatch ----------------------------------------------------

    pub(crate) fn dispatch(&self, event: Lifecycle) {
        let role = if event.is_gain() { "gains" } else { "loses" };
        debug!("{:?} <- {:?} ({} authority)", self, event, role);

        let mut behavior = self.inner.behavior.borrow_mut();
        let mut view = self.inner.view.borrow_mut();
        let scene = behavior.scene_mut();

        match event {
            Lifecycle::Enter => scene.on_enter(&mut view),
            Lifecycle::Exit => scene.on_exit(&mut view),
            Lifecycle::Pause => scene.on_pause(&mut view),
            Lifecycle::Resume => scene.on_resume(&mut view),
        }
    }

    pub(crate) fn update(&self, dt: Duration) {
        let mut behavior = self.inner.behavior.borrow_mut();
        let mut view = self.inner.view.borrow_mut();
        behavior.scene_mut().update(&mut view, dt);
    }
}

//--- Trait Implementations -----------------------------------------------

impl PartialEq for SceneHandle {
    fn eq(&self, other: &Self) -> bool {
        self.inner.id == other.inner.id
    }
}

impl Eq for SceneHandle {}

impl fmt::Debug for SceneHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SceneHandle")
            .field("id", &self.inner.id)
            .field("label", &self.inner.label)
            .field("director", &self.inner.director.get())
            .finish()
    }
}

//=== Tests ===============================================================

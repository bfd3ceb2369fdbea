//=========================================================================
// Animation
//=========================================================================
//
// Seam to the host's animation backend.
//
// An `Animation` is a set of property tracks on scene containers that
// share one duration, one easing curve and one finish callback. The
// backend interpolates the tracks as the host ticks and runs the
// callback exactly once, after every track has reached its end value.
//
// `Tweener` is a minimal implementation for headless hosts and tests.
//
//=========================================================================

//=== Module Declarations =================================================

mod easing;
mod tweener;

//=== Public API ==========================================================

pub use easing::Easing;
pub use tweener::Tweener;

//=== External Dependencies ===============================================

use std::fmt;
use std::time::Duration;

//=== Internal Dependencies ===============================================

use crate::core::scene::{Container, SceneHandle};

//=== Property ============================================================

/// A single animatable scalar on a [`Container`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Property {
    Alpha,
    X,
    Y,
    ScaleX,
    ScaleY,
}

impl Property {
    pub fn write(self, view: &mut Container, value: f32) {
        match self {
            Property::Alpha => view.alpha = value,
            Property::X => view.position.x = value,
            Property::Y => view.position.y = value,
            Property::ScaleX => view.scale.x = value,
            Property::ScaleY => view.scale.y = value,
        }
    }
}

//=== Track ===============================================================

/// Interpolates one property of one scene from `from` to `to`.
#[derive(Debug, Clone)]
pub struct Track {
    pub target: SceneHandle,
    pub property: Property,
    pub from: f32,
    pub to: f32,
}

impl Track {
    pub fn new(target: &SceneHandle, property: Property, from: f32, to: f32) -> Self {
        Self {
            target: target.clone(),
            property,
            from,
            to,
        }
    }

    /// Writes the value at eased progress `p`.
    pub fn apply(&self, p: f32) {
        let value = self.from + (self.to - self.from) * p;
        self.property.write(&mut self.target.view_mut(), value);
    }
}

//=== Animation ===========================================================

/// Callback run once when an animation finishes.
pub type FinishCallback = Box<dyn FnOnce()>;

/// A group of tracks sharing timing and a finish callback.
///
/// # Examples
///
/// ```rust
/// # use std::time::Duration;
/// # use aetheric_director::prelude::*;
/// # struct Blank;
/// # impl Scene for Blank {}
/// let scene = SceneHandle::new("s", Blank);
/// let fade_in = Animation::new(Duration::from_millis(300), Easing::EaseOut)
///     .track(Track::new(&scene, Property::Alpha, 0.0, 1.0))
///     .on_finish(|| println!("faded in"));
/// ```
pub struct Animation {
    tracks: Vec<Track>,
    duration: Duration,
    easing: Easing,
    on_finish: Option<FinishCallback>,
}

impl Animation {
    pub fn new(duration: Duration, easing: Easing) -> Self {
        Self {
            tracks: Vec::new(),
            duration,
            easing,
            on_finish: None,
        }
    }

    /// Adds a track.
    pub fn track(mut self, track: Track) -> Self {
        self.tracks.push(track);
        self
    }

    /// Sets the callback run after the final values are written.
    pub fn on_finish<F>(mut self, callback: F) -> Self
    where
        F: FnOnce() + 'static,
    {
        self.on_finish = Some(Box::new(callback));
        self
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    pub fn easing(&self) -> Easing {
        self.easing
    }

    /// Writes every track at linear progress `t`, eased.
    pub fn apply(&self, t: f32) {
        let p = self.easing.apply(t);
        for track in &self.tracks {
            track.apply(p);
        }
    }

    /// Writes the end values and runs the finish callback.
    pub fn finish(mut self) {
        for track in &self.tracks {
            track.apply(1.0);
        }
        if let Some(callback) = self.on_finish.take() {
            callback();
        }
    }
}

impl fmt::Debug for Animation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Animation")
            .field("tracks", &self.tracks)
            .field("duration", &self.duration)
            .field("easing", &self.easing)
            .field("on_finish", &self.on_finish.is_some())
            .finish()
    }
}

//=== Animator Trait ======================================================

/// Animation backend driven by the host's tick.
pub trait Animator {
    /// Starts `animation`.
    ///
    /// Implementations must call [`Animation::finish`] exactly once. A zero
    /// duration may finish synchronously inside this call.
    fn animate(&mut self, animation: Animation);

    /// Advances every running animation by `dt`.
    fn advance(&mut self, dt: Duration);

    /// Number of animations still running.
    fn active(&self) -> usize;

    fn is_idle(&self) -> bool {
        self.active() == 0
    }
}

//=== Tests ===============================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::scene::{Point, Scene};
    use std::cell::Cell;
    use std::rc::Rc;

    struct Blank;
    impl Scene for Blank {}

    #[test]
    fn property_write_targets_one_field() {
        let mut view = Container::new();
        Property::Alpha.write(&mut view, 0.3);
        Property::X.write(&mut view, -40.0);
        Property::Y.write(&mut view, 12.0);
        Property::ScaleX.write(&mut view, 2.0);
        Property::ScaleY.write(&mut view, 0.5);

        assert_eq!(view.alpha, 0.3);
        assert_eq!(view.position, Point::new(-40.0, 12.0));
        assert_eq!(view.scale, Point::new(2.0, 0.5));
        assert!(view.visible);
    }

    #[test]
    fn track_interpolates_linearly() {
        let scene = SceneHandle::new("s", Blank);
        let track = Track::new(&scene, Property::X, 100.0, 0.0);

        track.apply(0.25);
        assert_eq!(scene.view().position.x, 75.0);
    }

    #[test]
    fn finish_writes_end_values_then_calls_back() {
        let scene = SceneHandle::new("s", Blank);
        let seen_alpha = Rc::new(Cell::new(-1.0));

        let probe = scene.clone();
        let seen = seen_alpha.clone();
        Animation::new(Duration::from_secs(1), Easing::EaseIn)
            .track(Track::new(&scene, Property::Alpha, 0.0, 0.75))
            .on_finish(move || seen.set(probe.view().alpha))
            .finish();

        assert_eq!(seen_alpha.get(), 0.75);
    }
}

//=========================================================================
// Tweener
//=========================================================================
//
// Reference animation backend.
//
// Flow:
//   animate() → running list → advance(dt) → apply(progress)
//                                  ↓
//                           finished → finish() (callbacks in start order)
//
//=========================================================================

//=== External Dependencies ===============================================

use std::time::Duration;

use log::trace;

//=== Internal Dependencies ===============================================

use super::{Animation, Animator};

//=== Tweener =============================================================

struct Running {
    animation: Animation,
    elapsed: Duration,
}

/// Time-based [`Animator`] advanced by the host tick.
#[derive(Default)]
pub struct Tweener {
    running: Vec<Running>,
}

impl Tweener {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Animator for Tweener {
    fn animate(&mut self, animation: Animation) {
        if animation.duration().is_zero() {
            animation.finish();
            return;
        }

        animation.apply(0.0);
        trace!("Tweener: started {:?}", animation);
        self.running.push(Running {
            animation,
            elapsed: Duration::ZERO,
        });
    }

    fn advance(&mut self, dt: Duration) {
        let mut finished = Vec::new();
        let mut i = 0;

        while i < self.running.len() {
            let run = &mut self.running[i];
            run.elapsed += dt;

            if run.elapsed >= run.animation.duration() {
                finished.push(self.running.remove(i));
            } else {
                let t = run.elapsed.as_secs_f32() / run.animation.duration().as_secs_f32();
                run.animation.apply(t);
                i += 1;
            }
        }

        // Callbacks run after the running list is settled.
        for run in finished {
            run.animation.finish();
        }
    }

    fn active(&self) -> usize {
        self.running.len()
    }
}

//=== Tests ===============================================================

//=========================================================================
// Director
//=========================================================================
//
// Stack-based scene navigator.
//
// Architecture:
//   Director
//     ├─ stack: Vec<SceneHandle>          (committed, bottom → top)
//     ├─ requests: RequestQueue           (validated, FIFO)
//     ├─ in_flight: Option<InFlight>      (at most one transition)
//     ├─ stage: Box<dyn DisplayTree>
//     └─ animator: Box<dyn Animator>
//
// Flow:
//   push/pop/replace → validate → enqueue → pump()
//   pump(): Idle ─start()→ Transitioning ─Completion→ commit + hooks → Idle
//
//=========================================================================

//=== Module Declarations =================================================

mod completion;
mod request_queue;
mod scene_director;

//=== Public API ==========================================================

pub use completion::{Completion, Ticket};
pub use scene_director::{Director, DirectorBuilder, DirectorState, StackOp, TransitionFactory};

//=========================================================================
// Completion
//=========================================================================
//
// One-shot completion signal handed to a transition.
//
// Architecture:
//   Transition ──owns──> Completion ──complete()──> Sender<Ticket>
//                                                        ↓
//   Director::pump() ←──────────── try_recv() ── Receiver<Ticket>
//
// `complete` consumes the token, so a transition can signal at most once.
// A token dropped without completing leaves the director stalled in
// `Transitioning`; the drop is logged.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::fmt;

use crossbeam_channel::Sender;
use log::{trace, warn};

//=== Ticket ==============================================================

/// Identifies one started transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Ticket(pub(crate) u64);

impl fmt::Display for Ticket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "transition#{}", self.0)
    }
}

//=== Completion ==========================================================

/// Token a transition consumes to tell its director it has finished.
pub struct Completion {
    ticket: Ticket,
    sender: Option<Sender<Ticket>>,
}

impl Completion {
    pub(crate) fn new(ticket: Ticket, sender: Sender<Ticket>) -> Self {
        Self {
            ticket,
            sender: Some(sender),
        }
    }

    pub fn ticket(&self) -> Ticket {
        self.ticket
    }

    /// Signals the director that the transition has finished.
    ///
    /// Must be called after the effect has ended and the outgoing scene
    /// has been returned to rest.
    pub fn complete(mut self) {
        if let Some(sender) = self.sender.take() {
            trace!("{} complete", self.ticket);
            if sender.send(self.ticket).is_err() {
                trace!("{} completed after its director was dropped", self.ticket);
            }
        }
    }
}

impl Drop for Completion {
    fn drop(&mut self) {
        if self.sender.is_some() {
            warn!(
                "{} dropped without completing; its director stays in Transitioning",
                self.ticket
            );
        }
    }
}

impl fmt::Debug for Completion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Completion")
            .field("ticket", &self.ticket)
            .field("pending", &self.sender.is_some())
            .finish()
    }
}

//=== Tests ===============================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crossbeam_channel::unbounded;

    #[test]
    fn complete_sends_ticket_once() {
        let (tx, rx) = unbounded();
        let done = Completion::new(Ticket(7), tx);

        done.complete();

        assert_eq!(rx.try_recv(), Ok(Ticket(7)));
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn drop_without_complete_sends_nothing() {
        let (tx, rx) = unbounded();
        drop(Completion::new(Ticket(1), tx));
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn complete_after_receiver_gone_is_silent() {
        let (tx, rx) = unbounded();
        drop(rx);
        Completion::new(Ticket(2), tx).complete();
    }
}

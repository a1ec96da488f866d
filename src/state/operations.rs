//! Simulated asynchronous operations and their staleness guard.
//!
//! Each simulated operation is a spawned task that sleeps and then reports
//! back with the [`OperationTicket`] it was started with. The controller's
//! [`OperationGuard`] only honors the ticket of the latest start of each
//! kind; cancelling or restarting an operation, or leaving a screen, makes
//! every earlier ticket stale.

use std::time::Duration;

use tokio::sync::mpsc;

use super::AppMessage;

/// The simulated operations of the checkout flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationKind {
    /// Conversion started from the conversion screen.
    Conversion,
    /// Account-name lookup on the bank sub-step.
    Verification,
    /// Recipient submission on the contact sub-step.
    Submission,
}

impl OperationKind {
    const ALL: [Self; 3] = [Self::Conversion, Self::Verification, Self::Submission];

    const fn index(self) -> usize {
        match self {
            Self::Conversion => 0,
            Self::Verification => 1,
            Self::Submission => 2,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Conversion => "conversion",
            Self::Verification => "verification",
            Self::Submission => "submission",
        }
    }
}

/// Identifies one start of an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperationTicket {
    pub kind: OperationKind,
    pub generation: u64,
}

/// Generation counters, one per operation kind.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct OperationGuard {
    generations: [u64; 3],
    in_flight: [bool; 3],
}

impl OperationGuard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new run of `kind`, superseding any run still in flight.
    pub fn begin(&mut self, kind: OperationKind) -> OperationTicket {
        let index = kind.index();
        self.generations[index] = self.generations[index].wrapping_add(1);
        self.in_flight[index] = true;
        OperationTicket {
            kind,
            generation: self.generations[index],
        }
    }

    /// Invalidates the run of `kind` in flight, if any.
    pub fn cancel(&mut self, kind: OperationKind) {
        let index = kind.index();
        if self.in_flight[index] {
            self.generations[index] = self.generations[index].wrapping_add(1);
            self.in_flight[index] = false;
        }
    }

    pub fn cancel_all(&mut self) {
        for kind in OperationKind::ALL {
            self.cancel(kind);
        }
    }

    /// Consumes a completion: returns `true` when the ticket is the current
    /// run of its kind, which then stops being in flight.
    pub fn complete(&mut self, ticket: OperationTicket) -> bool {
        let index = ticket.kind.index();
        let current = self.in_flight[index] && self.generations[index] == ticket.generation;
        if current {
            self.in_flight[index] = false;
        }
        current
    }

    #[cfg(test)]
    #[must_use]
    pub const fn is_in_flight(&self, kind: OperationKind) -> bool {
        self.in_flight[kind.index()]
    }
}

/// Spawns the timed stand-in for a real request.
///
/// The task always succeeds; staleness is decided when the message is
/// processed, not here.
pub fn spawn_simulated(
    ticket: OperationTicket,
    delay: Duration,
    message_tx: mpsc::UnboundedSender<AppMessage>,
) {
    tracing::debug!(
        kind = ticket.kind.as_str(),
        generation = ticket.generation,
        delay_ms = delay.as_millis() as u64,
        "simulated operation started"
    );

    tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        // Receiver may be dropped during shutdown - safe to ignore
        let _ = message_tx.send(AppMessage::OperationCompleted(ticket));
    });
}

// ============================================================================
// Tests
// ============================================================================

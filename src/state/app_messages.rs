//! Message processing, simulated operations and wizard transitions.

use chrono::Local;

use super::operations::spawn_simulated;
use super::recipient::VerificationNeed;
use super::{
    App, AppMessage, OperationKind, OperationTicket, RecipientState, Screen, WizardEvent,
};

impl App {
    /// Drains every pending message without blocking.
    pub(crate) fn process_messages(&mut self) {
        while let Ok(message) = self.message_rx.try_recv() {
            self.handle_message(message);
        }
    }

    pub(crate) fn handle_message(&mut self, message: AppMessage) {
        match message {
            AppMessage::OperationCompleted(ticket) => self.complete_operation(ticket),
        }
    }

    fn complete_operation(&mut self, ticket: OperationTicket) {
        if !self.operations.complete(ticket) {
            tracing::debug!(
                kind = ticket.kind.as_str(),
                generation = ticket.generation,
                "dropping stale operation result"
            );
            return;
        }

        match (ticket.kind, &mut self.screen) {
            (OperationKind::Conversion, Screen::Converter(state)) => {
                let summary = state.finish_conversion();
                tracing::info!(
                    tab = summary.tab.id(),
                    pay_amount = %summary.pay_amount,
                    pay_token = %summary.pay_token,
                    "conversion completed"
                );
                let recipient = RecipientState::new(&self.catalog, summary);
                self.transition(WizardEvent::Continue, Screen::Recipient(recipient));
            }
            (OperationKind::Verification, Screen::Recipient(state)) => {
                state.complete_verification(&self.config.verified_account_name);
                tracing::info!("account verified");
            }
            (OperationKind::Submission, Screen::Recipient(state)) => {
                let receipt = state.finish_submission(Local::now());
                tracing::info!(email = %receipt.email, "recipient submitted");
                self.transition(WizardEvent::Complete, Screen::Success(receipt));
            }
            (kind, screen) => {
                tracing::debug!(
                    kind = kind.as_str(),
                    step = screen.step().as_str(),
                    "operation result has no matching screen"
                );
            }
        }
    }

    // ========================================================================
    // Simulated Operations
    // ========================================================================

    /// Starts (or restarts) a simulated operation of `kind`.
    pub(crate) fn start_operation(&mut self, kind: OperationKind) {
        let delay = match kind {
            OperationKind::Conversion => self.config.conversion_delay(),
            OperationKind::Verification => self.config.verification_delay(),
            OperationKind::Submission => self.config.submission_delay(),
        };
        let ticket = self.operations.begin(kind);
        spawn_simulated(ticket, delay, self.message_tx.clone());
    }

    pub(crate) fn apply_verification_need(&mut self, need: VerificationNeed) {
        match need {
            VerificationNeed::Start => self.start_operation(OperationKind::Verification),
            VerificationNeed::Cancel => self.operations.cancel(OperationKind::Verification),
            VerificationNeed::Keep => {}
        }
    }

    // ========================================================================
    // Wizard Transitions
    // ========================================================================

    /// Moves to `next` if `event` is a valid transition from the current
    /// step. Every transition cancels all outstanding operations.
    pub(crate) fn transition(&mut self, event: WizardEvent, next: Screen) -> bool {
        let from = self.screen.step();
        match from.transition(event) {
            Some(to) if to == next.step() => {
                self.operations.cancel_all();
                self.screen = next;
                tracing::info!(from = from.as_str(), to = to.as_str(), "wizard step changed");
                true
            }
            _ => {
                tracing::debug!(from = from.as_str(), ?event, "ignored invalid transition");
                false
            }
        }
    }
}

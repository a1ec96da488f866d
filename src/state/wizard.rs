//! Top-level wizard position and its transitions.

/// Which screen the checkout wizard is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WizardStep {
    /// Conversion parameters.
    #[default]
    Converter,
    /// Recipient bank and contact details.
    Recipient,
    /// Submission confirmation.
    Success,
}

/// Completion and navigation events emitted by the screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardEvent {
    /// The conversion screen finished its simulated conversion.
    Continue,
    /// The recipient screen asked to leave from its first sub-step.
    Back,
    /// The recipient screen finished its simulated submission.
    Complete,
    /// The success screen asked to start over.
    Restart,
}

impl WizardStep {
    /// Returns the step reached by `event`, or `None` when the event is not
    /// a valid transition from this step.
    #[must_use]
    pub const fn transition(self, event: WizardEvent) -> Option<Self> {
        match (self, event) {
            (Self::Converter, WizardEvent::Continue) => Some(Self::Recipient),
            (Self::Recipient, WizardEvent::Back) => Some(Self::Converter),
            (Self::Recipient, WizardEvent::Complete) => Some(Self::Success),
            (Self::Success, WizardEvent::Restart) => Some(Self::Converter),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Converter => "converter",
            Self::Recipient => "recipient",
            Self::Success => "success",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wizard_starts_at_converter() {
        assert_eq!(WizardStep::default(), WizardStep::Converter);
    }

    #[test]
    fn test_only_documented_transitions_are_reachable() {
        use WizardEvent::*;
        use WizardStep::*;

        let steps = [Converter, Recipient, Success];
        let events = [Continue, Back, Complete, Restart];

        for step in steps {
            for event in events {
                let expected = match (step, event) {
                    (Converter, Continue) => Some(Recipient),
                    (Recipient, Back) => Some(Converter),
                    (Recipient, Complete) => Some(Success),
                    (Success, Restart) => Some(Converter),
                    _ => None,
                };
                assert_eq!(
                    step.transition(event),
                    expected,
                    "{} on {:?}",
                    step.as_str(),
                    event
                );
            }
        }
    }
}

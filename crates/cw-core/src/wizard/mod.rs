//! Wizard domain module.
//!
//! Step definitions and the pure state machine behind the three-step
//! prediction wizard.

use std::fmt;

pub mod state_machine;

pub use state_machine::{
    WizardAction, WizardEvent, WizardSnapshot, WizardState, WizardStateMachine,
};

/// Number of steps shown by the step indicator.
pub const TOTAL_STEPS: u8 = 3;

/// Wizard step.
///
/// 向导步骤。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WizardStep {
    PersonalInfo,
    Services,
    Billing,
}

impl WizardStep {
    pub const ALL: [WizardStep; 3] = [Self::PersonalInfo, Self::Services, Self::Billing];

    /// 1-based position.
    pub fn number(&self) -> u8 {
        match self {
            Self::PersonalInfo => 1,
            Self::Services => 2,
            Self::Billing => 3,
        }
    }

    pub fn from_number(number: u8) -> Option<Self> {
        match number {
            1 => Some(Self::PersonalInfo),
            2 => Some(Self::Services),
            3 => Some(Self::Billing),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::PersonalInfo => "Personal Info",
            Self::Services => "Services",
            Self::Billing => "Billing",
        }
    }

    pub fn next(&self) -> Option<Self> {
        Self::from_number(self.number() + 1)
    }

    pub fn previous(&self) -> Option<Self> {
        self.number().checked_sub(1).and_then(Self::from_number)
    }

    pub fn is_last(&self) -> bool {
        self.next().is_none()
    }
}

impl fmt::Display for WizardStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn steps_are_linear() {
        assert_eq!(WizardStep::PersonalInfo.previous(), None);
        assert_eq!(WizardStep::PersonalInfo.next(), Some(WizardStep::Services));
        assert_eq!(WizardStep::Services.next(), Some(WizardStep::Billing));
        assert_eq!(WizardStep::Billing.next(), None);
        assert_eq!(WizardStep::Billing.previous(), Some(WizardStep::Services));
        assert!(WizardStep::Billing.is_last());
    }

    #[test]
    fn numbering_matches_indicator() {
        assert_eq!(WizardStep::ALL.len(), TOTAL_STEPS as usize);
        for step in WizardStep::ALL {
            assert_eq!(WizardStep::from_number(step.number()), Some(step));
        }
        assert_eq!(WizardStep::from_number(0), None);
        assert_eq!(WizardStep::from_number(4), None);
    }
}

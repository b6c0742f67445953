//! Field vocabulary accepted by the churn model.
//! 模型可接受的分类取值。
//!
//! Every categorical attribute the external model understands has a fixed,
//! closed set of string values. Each set is modeled as an enum whose
//! `as_str()` is the exact model string and whose `ALL` lists the values in
//! the model's column order.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A closed set of categorical values with a fixed string form.
pub trait Vocabulary: Sized + Copy + PartialEq + 'static {
    /// Attribute name as used by the model (column prefix).
    const ATTRIBUTE: &'static str;

    /// All values, in the model's one-hot column order.
    const ALL: &'static [Self];

    fn as_str(&self) -> &'static str;

    fn from_vocabulary(value: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|v| v.as_str() == value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {attribute} value {value:?}, expected one of: {expected}")]
pub struct UnknownCategory {
    pub attribute: &'static str,
    pub value: String,
    pub expected: String,
}

/// Parse a model string into a vocabulary value.
pub fn parse_category<V: Vocabulary>(value: &str) -> Result<V, UnknownCategory> {
    V::from_vocabulary(value.trim()).ok_or_else(|| UnknownCategory {
        attribute: V::ATTRIBUTE,
        value: value.to_string(),
        expected: V::ALL
            .iter()
            .map(|v| v.as_str())
            .collect::<Vec<_>>()
            .join(", "),
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

impl Vocabulary for Gender {
    const ATTRIBUTE: &'static str = "gender";
    const ALL: &'static [Self] = &[Self::Male, Self::Female];

    fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
        }
    }
}

/// "Yes"/"No" flag as the model spells binary attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum YesNo {
    Yes,
    No,
}

impl Vocabulary for YesNo {
    const ATTRIBUTE: &'static str = "flag";
    const ALL: &'static [Self] = &[Self::Yes, Self::No];

    fn as_str(&self) -> &'static str {
        match self {
            Self::Yes => "Yes",
            Self::No => "No",
        }
    }
}

impl From<bool> for YesNo {
    fn from(value: bool) -> Self {
        if value {
            Self::Yes
        } else {
            Self::No
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MultipleLines {
    No,
    #[serde(rename = "No phone service")]
    NoPhoneService,
    Yes,
}

impl Vocabulary for MultipleLines {
    const ATTRIBUTE: &'static str = "MultipleLines";
    const ALL: &'static [Self] = &[Self::No, Self::NoPhoneService, Self::Yes];

    fn as_str(&self) -> &'static str {
        match self {
            Self::No => "No",
            Self::NoPhoneService => "No phone service",
            Self::Yes => "Yes",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InternetService {
    #[serde(rename = "DSL")]
    Dsl,
    #[serde(rename = "Fiber optic")]
    FiberOptic,
    No,
}

impl Vocabulary for InternetService {
    const ATTRIBUTE: &'static str = "InternetService";
    const ALL: &'static [Self] = &[Self::Dsl, Self::FiberOptic, Self::No];

    fn as_str(&self) -> &'static str {
        match self {
            Self::Dsl => "DSL",
            Self::FiberOptic => "Fiber optic",
            Self::No => "No",
        }
    }
}

impl InternetService {
    pub fn has_internet(&self) -> bool {
        !matches!(self, Self::No)
    }
}

/// Effective value of an internet add-on (online security, streaming, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AddOnState {
    No,
    #[serde(rename = "No internet service")]
    NoInternetService,
    Yes,
}

impl Vocabulary for AddOnState {
    const ATTRIBUTE: &'static str = "add-on";
    const ALL: &'static [Self] = &[Self::No, Self::NoInternetService, Self::Yes];

    fn as_str(&self) -> &'static str {
        match self {
            Self::No => "No",
            Self::NoInternetService => "No internet service",
            Self::Yes => "Yes",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Contract {
    #[serde(rename = "Month-to-month")]
    MonthToMonth,
    #[serde(rename = "One year")]
    OneYear,
    #[serde(rename = "Two year")]
    TwoYear,
}

impl Vocabulary for Contract {
    const ATTRIBUTE: &'static str = "Contract";
    const ALL: &'static [Self] = &[Self::MonthToMonth, Self::OneYear, Self::TwoYear];

    fn as_str(&self) -> &'static str {
        match self {
            Self::MonthToMonth => "Month-to-month",
            Self::OneYear => "One year",
            Self::TwoYear => "Two year",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaymentMethod {
    #[serde(rename = "Bank transfer (automatic)")]
    BankTransfer,
    #[serde(rename = "Credit card (automatic)")]
    CreditCard,
    #[serde(rename = "Electronic check")]
    ElectronicCheck,
    #[serde(rename = "Mailed check")]
    MailedCheck,
}

impl Vocabulary for PaymentMethod {
    const ATTRIBUTE: &'static str = "PaymentMethod";
    const ALL: &'static [Self] = &[
        Self::BankTransfer,
        Self::CreditCard,
        Self::ElectronicCheck,
        Self::MailedCheck,
    ];

    fn as_str(&self) -> &'static str {
        match self {
            Self::BankTransfer => "Bank transfer (automatic)",
            Self::CreditCard => "Credit card (automatic)",
            Self::ElectronicCheck => "Electronic check",
            Self::MailedCheck => "Mailed check",
        }
    }
}

macro_rules! display_and_parse {
    ($($ty:ty),* $(,)?) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.as_str())
                }
            }

            impl FromStr for $ty {
                type Err = UnknownCategory;

                fn from_str(s: &str) -> Result<Self, Self::Err> {
                    parse_category(s)
                }
            }
        )*
    };
}

display_and_parse!(
    Gender,
    YesNo,
    MultipleLines,
    InternetService,
    AddOnState,
    Contract,
    PaymentMethod,
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serde_names_match_model_strings() {
        fn check<V: Vocabulary + Serialize>() {
            for value in V::ALL {
                let json = serde_json::to_value(value).unwrap();
                assert_eq!(json, serde_json::Value::String(value.as_str().to_string()));
            }
        }

        check::<Gender>();
        check::<YesNo>();
        check::<MultipleLines>();
        check::<InternetService>();
        check::<AddOnState>();
        check::<Contract>();
        check::<PaymentMethod>();
    }

    #[test]
    fn parse_accepts_exact_model_strings() {
        assert_eq!(
            "Fiber optic".parse::<InternetService>().unwrap(),
            InternetService::FiberOptic
        );
        assert_eq!(
            " Credit card (automatic) ".parse::<PaymentMethod>().unwrap(),
            PaymentMethod::CreditCard
        );
        assert_eq!(
            "No phone service".parse::<MultipleLines>().unwrap(),
            MultipleLines::NoPhoneService
        );
    }

    #[test]
    fn parse_rejects_unknown_value_and_lists_choices() {
        let err = "Three year".parse::<Contract>().unwrap_err();
        assert_eq!(err.attribute, "Contract");
        assert!(err.to_string().contains("Month-to-month, One year, Two year"));
    }

    #[test]
    fn yes_no_from_bool() {
        assert_eq!(YesNo::from(true), YesNo::Yes);
        assert_eq!(YesNo::from(false), YesNo::No);
    }
}

use super::form::InputIssue;
use serde::{Deserialize, Serialize};

/// The three mutually exclusive evaluation states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EligibilityStatus {
    Invalid,
    NotEligible,
    Eligible,
}

/// Visual treatment a presentation layer applies to a status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusTone {
    Success,
    Danger,
    Warning,
}

impl StatusTone {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Danger => "danger",
            Self::Warning => "warning",
        }
    }
}

impl EligibilityStatus {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Invalid => "Invalid",
            Self::NotEligible => "Not eligible",
            Self::Eligible => "Eligible",
        }
    }

    pub const fn tone(self) -> StatusTone {
        match self {
            Self::Invalid => StatusTone::Warning,
            Self::NotEligible => StatusTone::Danger,
            Self::Eligible => StatusTone::Success,
        }
    }
}

/// Business-rule rejections. These are outcomes, not errors.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "rule", rename_all = "snake_case")]
pub enum IneligibilityReason {
    AgeOutOfRange {
        age: i64,
        minimum: i64,
        maximum: i64,
    },
    DebtToIncomeTooHigh {
        ratio: f64,
        ceiling: f64,
    },
    LoanExceedsSalaryMultiple {
        requested: f64,
        ceiling: f64,
        multiple: f64,
    },
}

impl IneligibilityReason {
    pub fn message(&self) -> String {
        match self {
            IneligibilityReason::AgeOutOfRange {
                minimum, maximum, ..
            } => format!("Age should be between {minimum} and {maximum}."),
            IneligibilityReason::DebtToIncomeTooHigh { ratio, ceiling } => {
                // A zero salary leaves the ratio unbounded.
                let shown = if ratio.is_finite() {
                    format!("{}%", fixed_two(*ratio))
                } else {
                    "unbounded".to_string()
                };
                format!("High Debt-to-Income Ratio ({shown}). Must be ≤ {ceiling}%.")
            }
            IneligibilityReason::LoanExceedsSalaryMultiple { multiple, .. } => {
                format!("Requested loan exceeds {multiple}× Monthly Salary.")
            }
        }
    }
}

/// Closed result of evaluating one form.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", content = "detail", rename_all = "snake_case")]
pub enum EligibilityDecision {
    Invalid(InputIssue),
    NotEligible(IneligibilityReason),
    Eligible,
}

impl EligibilityDecision {
    pub const fn status(&self) -> EligibilityStatus {
        match self {
            EligibilityDecision::Invalid(_) => EligibilityStatus::Invalid,
            EligibilityDecision::NotEligible(_) => EligibilityStatus::NotEligible,
            EligibilityDecision::Eligible => EligibilityStatus::Eligible,
        }
    }

    pub fn message(&self) -> String {
        match self {
            EligibilityDecision::Invalid(issue) => issue.message().to_string(),
            EligibilityDecision::NotEligible(reason) => reason.message(),
            EligibilityDecision::Eligible => {
                "Congratulations! You are eligible for the loan.".to_string()
            }
        }
    }
}

/// Status paired with the text shown to the applicant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EligibilityResult {
    pub status: EligibilityStatus,
    pub message: String,
}

impl From<&EligibilityDecision> for EligibilityResult {
    fn from(decision: &EligibilityDecision) -> Self {
        Self {
            status: decision.status(),
            message: decision.message(),
        }
    }
}

/// Two-decimal rendering that rounds exact halves away from zero.
///
/// `{:.2}` already rounds every other value to the nearest cent; it differs
/// only on exact ties, where it picks the even digit. A finite `f64` sits
/// exactly on a half-cent only when its fractional part is an odd number of
/// eighths, so those are detected and rounded in integer arithmetic.
pub(crate) fn fixed_two(value: f64) -> String {
    let value = if value == 0.0 { 0.0 } else { value };
    let magnitude = value.abs();
    let eighths = magnitude * 8.0;

    if eighths.fract() == 0.0 && eighths < 9_007_199_254_740_992.0 && eighths % 2.0 == 1.0 {
        let cents = (eighths as u64 * 25 + 1) / 2;
        let sign = if value < 0.0 { "-" } else { "" };
        return format!("{sign}{}.{:02}", cents / 100, cents % 100);
    }

    format!("{value:.2}")
}

mod batch;
mod decision;
mod form;
mod policy;
mod rules;

#[cfg(test)]
mod tests;

pub use batch::{read_forms, read_forms_from_path, BatchImportError};
pub use decision::{
    EligibilityDecision, EligibilityResult, EligibilityStatus, IneligibilityReason, StatusTone,
};
pub use form::{ApplicantFinancials, FormField, InputIssue, LoanApplicationForm};
pub use policy::EligibilityPolicy;
pub use rules::AffordabilityMetrics;

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Stateless evaluator applying an eligibility policy to submitted forms.
#[derive(Debug, Clone, Default)]
pub struct EligibilityEngine {
    policy: EligibilityPolicy,
}

impl EligibilityEngine {
    pub fn new(policy: EligibilityPolicy) -> Self {
        Self { policy }
    }

    pub fn evaluate(&self, form: &LoanApplicationForm) -> EligibilityOutcome {
        let applicant = match form.validate() {
            Ok(applicant) => applicant,
            Err(issue) => {
                debug!(?issue, "eligibility form rejected before rules");
                return EligibilityOutcome {
                    decision: EligibilityDecision::Invalid(issue),
                    metrics: None,
                };
            }
        };

        let metrics = rules::affordability(&applicant, &self.policy);
        let decision = rules::decide(&applicant, &metrics, &self.policy);
        debug!(
            status = ?decision.status(),
            debt_to_income = metrics.debt_to_income,
            "eligibility evaluated"
        );

        EligibilityOutcome {
            decision,
            metrics: Some(metrics),
        }
    }
}

/// Decision plus the figures it was based on, when validation passed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EligibilityOutcome {
    pub decision: EligibilityDecision,
    pub metrics: Option<AffordabilityMetrics>,
}

impl EligibilityOutcome {
    pub fn status(&self) -> EligibilityStatus {
        self.decision.status()
    }

    pub fn result(&self) -> EligibilityResult {
        EligibilityResult::from(&self.decision)
    }
}

/// Evaluate a form against the standard policy.
pub fn evaluate(form: &LoanApplicationForm) -> EligibilityResult {
    EligibilityEngine::default().evaluate(form).result()
}

use super::decision::{EligibilityDecision, IneligibilityReason};
use super::form::ApplicantFinancials;
use super::policy::EligibilityPolicy;
use serde::{Deserialize, Serialize};

/// Intermediate affordability figures, kept at full precision.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AffordabilityMetrics {
    pub proposed_emi: f64,
    /// Percentage of monthly salary consumed by existing debt plus the
    /// proposed installment.
    pub debt_to_income: f64,
}

pub(crate) fn affordability(
    applicant: &ApplicantFinancials,
    policy: &EligibilityPolicy,
) -> AffordabilityMetrics {
    let proposed_emi = applicant.requested_loan_amount * policy.emi_factor;
    let debt_to_income =
        ((applicant.existing_monthly_debt + proposed_emi) / applicant.monthly_salary) * 100.0;

    AffordabilityMetrics {
        proposed_emi,
        debt_to_income,
    }
}

/// First failing rule wins: age, then debt-to-income, then loan size.
pub(crate) fn decide(
    applicant: &ApplicantFinancials,
    metrics: &AffordabilityMetrics,
    policy: &EligibilityPolicy,
) -> EligibilityDecision {
    if !policy.age_within(applicant.age) {
        return EligibilityDecision::NotEligible(IneligibilityReason::AgeOutOfRange {
            age: applicant.age,
            minimum: policy.minimum_age,
            maximum: policy.maximum_age,
        });
    }

    if !policy.debt_to_income_within(metrics.debt_to_income) {
        return EligibilityDecision::NotEligible(IneligibilityReason::DebtToIncomeTooHigh {
            ratio: metrics.debt_to_income,
            ceiling: policy.max_debt_to_income,
        });
    }

    if !policy
        .loan_within_salary_multiple(applicant.requested_loan_amount, applicant.monthly_salary)
    {
        return EligibilityDecision::NotEligible(IneligibilityReason::LoanExceedsSalaryMultiple {
            requested: applicant.requested_loan_amount,
            ceiling: policy.loan_ceiling(applicant.monthly_salary),
            multiple: policy.max_loan_salary_multiple,
        });
    }

    EligibilityDecision::Eligible
}

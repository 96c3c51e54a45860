use crate::eligibility::{EligibilityEngine, EligibilityPolicy, LoanApplicationForm};

pub(super) fn form(
    name: &str,
    age: &str,
    monthly_salary: &str,
    existing_monthly_debt: &str,
    requested_loan_amount: &str,
) -> LoanApplicationForm {
    LoanApplicationForm {
        name: name.to_string(),
        age: age.to_string(),
        monthly_salary: monthly_salary.to_string(),
        existing_monthly_debt: existing_monthly_debt.to_string(),
        requested_loan_amount: requested_loan_amount.to_string(),
    }
}

/// Comfortably eligible applicant: DTI 30%, loan well under ten salaries.
pub(super) fn eligible_form() -> LoanApplicationForm {
    form("Ann", "30", "50000", "5000", "100000")
}

pub(super) fn engine() -> EligibilityEngine {
    EligibilityEngine::new(EligibilityPolicy::STANDARD)
}

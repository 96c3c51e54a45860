use serde::{Deserialize, Serialize};

/// Raw field values exactly as entered on the eligibility form.
///
/// Every field is text so that "left blank" and "typed something that is not
/// a number" stay distinguishable until validation runs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoanApplicationForm {
    pub name: String,
    pub age: String,
    pub monthly_salary: String,
    pub existing_monthly_debt: String,
    pub requested_loan_amount: String,
}

/// Typed applicant figures assembled once the form passes validation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ApplicantFinancials {
    pub age: i64,
    pub monthly_salary: f64,
    pub existing_monthly_debt: f64,
    pub requested_loan_amount: f64,
}

/// Numeric form fields, in the order they are validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormField {
    Age,
    MonthlySalary,
    ExistingMonthlyDebt,
    RequestedLoanAmount,
}

impl FormField {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Age => "Age",
            Self::MonthlySalary => "Monthly Salary",
            Self::ExistingMonthlyDebt => "Existing EMI / Debts",
            Self::RequestedLoanAmount => "Loan Amount Requested",
        }
    }
}

/// Reasons a form never reaches the decision rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum InputIssue {
    MissingFields,
    NonNumeric { field: FormField },
}

impl InputIssue {
    pub const fn message(self) -> &'static str {
        match self {
            Self::MissingFields => "Please fill all fields!",
            Self::NonNumeric { .. } => "Enter valid numeric values!",
        }
    }
}

impl LoanApplicationForm {
    /// Presence is checked across all five fields before any parsing, so a
    /// blank field always wins over a malformed one.
    pub fn validate(&self) -> Result<ApplicantFinancials, InputIssue> {
        let required = [
            &self.name,
            &self.age,
            &self.monthly_salary,
            &self.existing_monthly_debt,
            &self.requested_loan_amount,
        ];
        if required.iter().any(|value| value.is_empty()) {
            return Err(InputIssue::MissingFields);
        }

        let age = parse_whole(&self.age).ok_or(InputIssue::NonNumeric {
            field: FormField::Age,
        })?;
        let monthly_salary = parse_decimal(&self.monthly_salary).ok_or(InputIssue::NonNumeric {
            field: FormField::MonthlySalary,
        })?;
        let existing_monthly_debt =
            parse_decimal(&self.existing_monthly_debt).ok_or(InputIssue::NonNumeric {
                field: FormField::ExistingMonthlyDebt,
            })?;
        let requested_loan_amount =
            parse_decimal(&self.requested_loan_amount).ok_or(InputIssue::NonNumeric {
                field: FormField::RequestedLoanAmount,
            })?;

        Ok(ApplicantFinancials {
            age,
            monthly_salary,
            existing_monthly_debt,
            requested_loan_amount,
        })
    }
}

// Overflowing input ("1e400") is still a number and saturates to infinity;
// only NaN and spelled-out infinities are rejected.
fn parse_decimal(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    let unsigned = trimmed.trim_start_matches(['+', '-']);
    if ["nan", "inf", "infinity"]
        .iter()
        .any(|spelling| unsigned.eq_ignore_ascii_case(spelling))
    {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|value| !value.is_nan())
}

// Ages typed as decimals truncate toward zero ("30.9" is 30); ages beyond the
// i64 range saturate.
fn parse_whole(raw: &str) -> Option<i64> {
    let trimmed = raw.trim();
    if let Ok(value) = trimmed.parse::<i64>() {
        return Some(value);
    }
    parse_decimal(trimmed).map(|value| value.trunc() as i64)
}

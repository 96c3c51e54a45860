use serde::{Deserialize, Serialize};

/// Fixed lending thresholds applied to every applicant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EligibilityPolicy {
    pub minimum_age: i64,
    pub maximum_age: i64,
    /// Share of the requested amount treated as the new monthly installment.
    pub emi_factor: f64,
    /// Debt-to-income ceiling, in percent.
    pub max_debt_to_income: f64,
    /// Largest loan, as a multiple of monthly salary.
    pub max_loan_salary_multiple: f64,
}

impl EligibilityPolicy {
    pub const STANDARD: Self = Self {
        minimum_age: 21,
        maximum_age: 60,
        emi_factor: 0.1,
        max_debt_to_income: 60.0,
        max_loan_salary_multiple: 10.0,
    };

    /// Both age bounds are inclusive.
    pub fn age_within(&self, age: i64) -> bool {
        (self.minimum_age..=self.maximum_age).contains(&age)
    }

    /// A ratio that is not a number (zero salary with zero obligations)
    /// never satisfies the ceiling.
    pub fn debt_to_income_within(&self, ratio: f64) -> bool {
        ratio <= self.max_debt_to_income
    }

    pub fn loan_ceiling(&self, monthly_salary: f64) -> f64 {
        self.max_loan_salary_multiple * monthly_salary
    }

    pub fn loan_within_salary_multiple(&self, requested: f64, monthly_salary: f64) -> bool {
        requested <= self.loan_ceiling(monthly_salary)
    }
}

impl Default for EligibilityPolicy {
    fn default() -> Self {
        Self::STANDARD
    }
}

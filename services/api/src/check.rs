use clap::Args;
use loan_eligibility::eligibility::{
    read_forms_from_path, EligibilityDecision, EligibilityEngine, EligibilityOutcome,
    EligibilityStatus, InputIssue, LoanApplicationForm,
};
use loan_eligibility::error::AppError;
use std::path::PathBuf;

/// Raw form values. Omitted flags stay blank so the form validation applies.
#[derive(Args, Debug, Default)]
pub(crate) struct CheckArgs {
    /// Applicant name
    #[arg(long, default_value = "")]
    pub(crate) name: String,
    /// Applicant age in whole years
    #[arg(long, default_value = "", allow_hyphen_values = true)]
    pub(crate) age: String,
    /// Gross monthly salary
    #[arg(long, default_value = "", allow_hyphen_values = true)]
    pub(crate) monthly_salary: String,
    /// Existing EMIs and other monthly debt payments
    #[arg(long, default_value = "", allow_hyphen_values = true)]
    pub(crate) existing_monthly_debt: String,
    /// Loan amount requested
    #[arg(long, default_value = "", allow_hyphen_values = true)]
    pub(crate) requested_loan_amount: String,
}

impl From<CheckArgs> for LoanApplicationForm {
    fn from(args: CheckArgs) -> Self {
        Self {
            name: args.name,
            age: args.age,
            monthly_salary: args.monthly_salary,
            existing_monthly_debt: args.existing_monthly_debt,
            requested_loan_amount: args.requested_loan_amount,
        }
    }
}

#[derive(Args, Debug)]
pub(crate) struct BatchArgs {
    /// CSV with name, age, monthly_salary, existing_monthly_debt, requested_loan_amount columns
    #[arg(long)]
    pub(crate) input: PathBuf,
}

pub(crate) fn run_check(args: CheckArgs) -> Result<(), AppError> {
    let form = LoanApplicationForm::from(args);
    let outcome = EligibilityEngine::default().evaluate(&form);
    println!("{}", render_check(&outcome));
    Ok(())
}

pub(crate) fn run_batch(args: BatchArgs) -> Result<(), AppError> {
    let forms = read_forms_from_path(&args.input)?;
    let engine = EligibilityEngine::default();
    let evaluated: Vec<(LoanApplicationForm, EligibilityOutcome)> = forms
        .into_iter()
        .map(|form| {
            let outcome = engine.evaluate(&form);
            (form, outcome)
        })
        .collect();

    println!("{}", render_batch(&evaluated));
    Ok(())
}

pub(crate) fn render_check(outcome: &EligibilityOutcome) -> String {
    let result = outcome.result();
    let mut lines = vec![
        "Loan eligibility check".to_string(),
        format!("Status: {}", result.status.label()),
        format!("Message: {}", result.message),
    ];

    if let EligibilityDecision::Invalid(InputIssue::NonNumeric { field }) = outcome.decision {
        lines.push(format!("Field: {}", field.label()));
    }

    if let Some(metrics) = outcome.metrics {
        lines.push(format!("Proposed EMI: {:.2}", metrics.proposed_emi));
        if metrics.debt_to_income.is_finite() {
            lines.push(format!("Debt-to-income: {:.2}%", metrics.debt_to_income));
        }
    }

    lines.join("\n")
}

pub(crate) fn render_batch(evaluated: &[(LoanApplicationForm, EligibilityOutcome)]) -> String {
    let mut lines = vec![format!("Evaluated {} applicant(s)", evaluated.len())];

    for (index, (form, outcome)) in evaluated.iter().enumerate() {
        let result = outcome.result();
        let name = if form.name.is_empty() {
            format!("row {}", index + 1)
        } else {
            form.name.clone()
        };
        lines.push(format!(
            "- {name}: {} | {}",
            result.status.label(),
            result.message
        ));
    }

    let count = |status: EligibilityStatus| {
        evaluated
            .iter()
            .filter(|(_, outcome)| outcome.status() == status)
            .count()
    };
    lines.push(format!(
        "Totals: {} eligible, {} not eligible, {} invalid",
        count(EligibilityStatus::Eligible),
        count(EligibilityStatus::NotEligible),
        count(EligibilityStatus::Invalid)
    ));

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(age: &str) -> CheckArgs {
        CheckArgs {
            name: "Ann".to_string(),
            age: age.to_string(),
            monthly_salary: "50000".to_string(),
            existing_monthly_debt: "5000".to_string(),
            requested_loan_amount: "100000".to_string(),
        }
    }

    #[test]
    fn check_output_lists_metrics_for_valid_forms() {
        let form = LoanApplicationForm::from(args("30"));
        let outcome = EligibilityEngine::default().evaluate(&form);

        let rendered = render_check(&outcome);

        assert!(rendered.contains("Status: Eligible"));
        assert!(rendered.contains("Proposed EMI: 10000.00"));
        assert!(rendered.contains("Debt-to-income: 30.00%"));
    }

    #[test]
    fn check_output_omits_metrics_for_invalid_forms() {
        let form = LoanApplicationForm::from(args(""));
        let outcome = EligibilityEngine::default().evaluate(&form);

        let rendered = render_check(&outcome);

        assert!(rendered.contains("Status: Invalid"));
        assert!(rendered.contains("Message: Please fill all fields!"));
        assert!(!rendered.contains("Proposed EMI"));
    }

    #[test]
    fn check_output_names_the_non_numeric_field() {
        let form = LoanApplicationForm {
            monthly_salary: "plenty".to_string(),
            ..LoanApplicationForm::from(args("30"))
        };
        let outcome = EligibilityEngine::default().evaluate(&form);

        let rendered = render_check(&outcome);

        assert!(rendered.contains("Message: Enter valid numeric values!"));
        assert!(rendered.contains("Field: Monthly Salary"));
    }

    #[test]
    fn batch_output_names_unnamed_rows_and_totals() {
        let engine = EligibilityEngine::default();
        let named = LoanApplicationForm::from(args("19"));
        let unnamed = LoanApplicationForm {
            name: String::new(),
            ..LoanApplicationForm::from(args("30"))
        };
        let evaluated = vec![
            (named.clone(), engine.evaluate(&named)),
            (unnamed.clone(), engine.evaluate(&unnamed)),
        ];

        let rendered = render_batch(&evaluated);

        assert!(rendered.starts_with("Evaluated 2 applicant(s)"));
        assert!(rendered.contains("- Ann: Not eligible | Age should be between 21 and 60."));
        assert!(rendered.contains("- row 2: Invalid | Please fill all fields!"));
        assert!(rendered.ends_with("Totals: 0 eligible, 1 not eligible, 1 invalid"));
    }
}

use crate::eligibility::{evaluate, read_forms, BatchImportError, EligibilityStatus};
use std::io::Cursor;

#[test]
fn reads_one_form_per_row() {
    let csv = "name,age,monthly_salary,existing_monthly_debt,requested_loan_amount\n\
               Ann, 30 ,50000,5000,100000\n\
               Bob,19,50000,0,10000\n";

    let forms = read_forms(Cursor::new(csv)).expect("csv parses");

    assert_eq!(forms.len(), 2);
    assert_eq!(forms[0].name, "Ann");
    assert_eq!(forms[0].age, "30");
    assert_eq!(evaluate(&forms[0]).status, EligibilityStatus::Eligible);
    assert_eq!(evaluate(&forms[1]).status, EligibilityStatus::NotEligible);
}

#[test]
fn missing_columns_become_blank_fields() {
    let csv = "name,age,monthly_salary,existing_monthly_debt\n\
               Cy,30,10000\n";

    let forms = read_forms(Cursor::new(csv)).expect("csv parses");

    assert_eq!(forms[0].existing_monthly_debt, "4000");
    assert_eq!(forms[0].requested_loan_amount, "");
    assert_eq!(evaluate(&forms[0]).message, "Please fill all fields!");
}

#[test]
fn missing_file_surfaces_io_error() {
    let err = crate::eligibility::read_forms_from_path("/nonexistent/applicants.csv")
        .expect_err("file is absent");

    assert!(matches!(err, BatchImportError::Io(_)));
}

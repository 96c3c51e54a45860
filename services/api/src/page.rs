use loan_eligibility::eligibility::{EligibilityResult, LoanApplicationForm, StatusTone};

const FIELDS: [(&str, &str, &str); 5] = [
    ("name", "Name", "text"),
    ("age", "Age", "number"),
    ("monthly_salary", "Monthly Salary (₹)", "number"),
    ("existing_monthly_debt", "Existing EMI / Debts (₹)", "number"),
    ("requested_loan_amount", "Loan Amount Requested (₹)", "number"),
];

/// Render the eligibility form, echoing submitted values and the result.
pub(crate) fn render(form: &LoanApplicationForm, result: Option<&EligibilityResult>) -> String {
    let values = [
        &form.name,
        &form.age,
        &form.monthly_salary,
        &form.existing_monthly_debt,
        &form.requested_loan_amount,
    ];

    let mut inputs = String::new();
    for ((field, label, kind), value) in FIELDS.iter().zip(values) {
        inputs.push_str(&format!(
            "      <div class=\"mb-3\">\n        <label class=\"form-label\" for=\"{field}\">{label}</label>\n        <input type=\"{kind}\" step=\"any\" class=\"form-control\" id=\"{field}\" name=\"{field}\" value=\"{}\">\n      </div>\n",
            escape(value)
        ));
    }

    let outcome = result.map(render_result).unwrap_or_default();

    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n  <meta charset=\"utf-8\">\n  <title>Loan Eligibility Checker</title>\n  <link rel=\"stylesheet\" href=\"https://cdn.jsdelivr.net/npm/bootstrap@5.3.3/dist/css/bootstrap.min.css\">\n</head>\n<body>\n  <div class=\"container mt-5 p-4 border rounded-4 shadow\">\n    <h2 class=\"text-center mb-4\">Loan Eligibility Checker</h2>\n    <form method=\"post\" action=\"/\">\n{inputs}      <button type=\"submit\" class=\"btn btn-primary w-100\">Check Loan Eligibility</button>\n    </form>\n{outcome}  </div>\n</body>\n</html>\n"
    )
}

fn render_result(result: &EligibilityResult) -> String {
    let tone = result.status.tone();
    let icon = match tone {
        StatusTone::Success => "✅",
        StatusTone::Danger => "❌",
        StatusTone::Warning => "⚠️",
    };
    format!(
        "    <div class=\"mt-4 text-center\">\n      <p class=\"text-{} fw-bold\">{icon} {}</p>\n    </div>\n",
        tone.label(),
        escape(&result.message)
    )
}

fn escape(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}

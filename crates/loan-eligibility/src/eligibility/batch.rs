use super::form::LoanApplicationForm;
use std::io::Read;
use std::path::Path;

#[derive(Debug, thiserror::Error)]
pub enum BatchImportError {
    #[error("failed to read applicant export: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid applicant CSV data: {0}")]
    Csv(#[from] csv::Error),
}

pub fn read_forms_from_path<P: AsRef<Path>>(
    path: P,
) -> Result<Vec<LoanApplicationForm>, BatchImportError> {
    let file = std::fs::File::open(path)?;
    read_forms(file)
}

/// Read one form per CSV row. Headers name the form fields; a column that is
/// absent from the header reads as a blank field so validation reports it.
pub fn read_forms<R: Read>(reader: R) -> Result<Vec<LoanApplicationForm>, BatchImportError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut forms = Vec::new();

    for record in csv_reader.deserialize::<LoanApplicationForm>() {
        forms.push(record?);
    }

    Ok(forms)
}

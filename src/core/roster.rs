use serde::Deserialize;
use thiserror::Error;
use crate::models::{Gender, NewParticipant, ParticipantId};

/// Errors that make the whole roster unreadable
#[derive(Debug, Error)]
pub enum RosterError {
    #[error("No file provided")]
    NoFile,

    #[error("No file selected")]
    NoFileSelected,

    #[error("File must be a CSV")]
    NotCsv,

    #[error("File exceeds the {0} byte upload limit")]
    TooLarge(usize),

    #[error("File must be UTF-8 encoded CSV")]
    NotUtf8,

    #[error("Unreadable CSV header: {0}")]
    Header(#[from] csv::Error),
}

/// Raw roster row, every column optional so missing columns surface as row errors
#[derive(Debug, Default, Deserialize)]
struct RosterRow {
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    first_name: Option<String>,
    #[serde(default)]
    gender: Option<String>,
    #[serde(default)]
    email: Option<String>,
}

/// Outcome of reading one data row
pub type RowOutcome = Result<NewParticipant, String>;

/// Generate an unguessable link token for a participant
pub fn issue_token() -> String {
    uuid::Uuid::new_v4().simple().to_string()
}

/// Check the client-side name of an uploaded roster file
pub fn check_file_name(file_name: Option<&str>) -> Result<(), RosterError> {
    match file_name.map(str::trim) {
        None | Some("") => Err(RosterError::NoFileSelected),
        Some(name) if !name.to_lowercase().ends_with(".csv") => Err(RosterError::NotCsv),
        Some(_) => Ok(()),
    }
}

/// Parse an uploaded roster (`id,first_name,gender,email`)
///
/// Returns one outcome per data row, in file order. Rows that fail
/// validation carry the message reported back to the admin; they never
/// abort the import.
pub fn parse_roster(bytes: &[u8]) -> Result<Vec<RowOutcome>, RosterError> {
    let text = std::str::from_utf8(bytes).map_err(|_| RosterError::NotUtf8)?;
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);

    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers = reader.headers()?.clone();

    let outcomes = reader
        .records()
        .enumerate()
        .map(|(index, record)| {
            let row_number = index + 1;
            let row: RosterRow = record
                .and_then(|record| record.deserialize(Some(&headers)))
                .map_err(|e| format!("Invalid row {}: {}", row_number, e))?;
            validate_row(row_number, row)
        })
        .collect();

    Ok(outcomes)
}

fn validate_row(row_number: usize, row: RosterRow) -> RowOutcome {
    let field = |value: Option<String>| value.filter(|v| !v.is_empty());

    let (Some(id), Some(first_name), Some(gender), Some(email)) = (
        field(row.id),
        field(row.first_name),
        field(row.gender),
        field(row.email),
    ) else {
        return Err(format!(
            "Invalid row {}: id, first_name, gender and email are required",
            row_number
        ));
    };

    let id: ParticipantId = match id.parse() {
        Ok(id) if id > 0 => id,
        _ => return Err(format!("Invalid row {}: id must be a positive integer, got {}", row_number, id)),
    };

    let gender: Gender = gender
        .parse()
        .map_err(|g| format!("Invalid gender for ID {}: {}", id, g))?;

    Ok(NewParticipant {
        id,
        first_name,
        gender,
        email,
        unique_token: issue_token(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_roster() {
        let csv = "id,first_name,gender,email\n1, Ann ,FEMALE,ann@example.com\n2,Bob,male,bob@example.com\n";
        let rows = parse_roster(csv.as_bytes()).unwrap();

        assert_eq!(rows.len(), 2);
        let ann = rows[0].as_ref().unwrap();
        assert_eq!(ann.id, 1);
        assert_eq!(ann.first_name, "Ann");
        assert_eq!(ann.gender, Gender::Female);
        assert_eq!(ann.unique_token.len(), 32);
        assert_ne!(ann.unique_token, rows[1].as_ref().unwrap().unique_token);
    }

    #[test]
    fn test_invalid_gender_reported_with_id() {
        let csv = "id,first_name,gender,email\n7,Sam,other,sam@example.com\n";
        let rows = parse_roster(csv.as_bytes()).unwrap();
        assert_eq!(rows[0], Err("Invalid gender for ID 7: other".to_string()));
    }

    #[test]
    fn test_missing_fields_are_row_errors() {
        let csv = "id,first_name,gender,email\n3,,male,x@example.com\n0,Zed,male,z@example.com\nabc,Q,male,q@example.com\n";
        let rows = parse_roster(csv.as_bytes()).unwrap();

        assert_eq!(rows.len(), 3);
        assert!(rows.iter().all(|r| r.as_ref().is_err_and(|e| e.starts_with("Invalid row"))));
    }

    #[test]
    fn test_missing_column_is_row_error() {
        let csv = "id,first_name,gender\n3,Ann,female\n";
        let rows = parse_roster(csv.as_bytes()).unwrap();
        assert!(rows[0].is_err());
    }

    #[test]
    fn test_empty_file_has_no_rows() {
        assert!(parse_roster(b"").unwrap().is_empty());
        assert!(parse_roster(b"id,first_name,gender,email\n").unwrap().is_empty());
    }

    #[test]
    fn test_non_utf8_rejected() {
        assert!(matches!(parse_roster(&[0x69, 0x64, 0xff, 0xfe]), Err(RosterError::NotUtf8)));
    }

    #[test]
    fn test_file_name_checks() {
        assert!(check_file_name(Some("roster.CSV")).is_ok());
        assert!(matches!(check_file_name(None), Err(RosterError::NoFileSelected)));
        assert!(matches!(check_file_name(Some("")), Err(RosterError::NoFileSelected)));
        assert!(matches!(check_file_name(Some("roster.xlsx")), Err(RosterError::NotCsv)));
    }
}

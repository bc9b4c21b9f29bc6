use super::{Error, Result};
use calamine::{Data, Reader, open_workbook_auto_from_rs};
use contactbook_core::{
    ContactRecord, RowSource,
    constants::{SHEET_HEADER_EMAIL, SHEET_HEADER_NAME, SHEET_HEADER_PHONE},
};
use serde_json::Value;
use std::io::Cursor;

/// The input of an import request, resolved once when the request enters the pipeline
#[derive(Debug, Clone, PartialEq)]
pub enum ImportSource {
    /// raw bytes of an uploaded workbook
    SpreadsheetUpload(Vec<u8>),
    /// a JSON array of contact records
    BatchRecords(Vec<ContactRecord>),
    /// a single JSON contact record
    SingleRecord(ContactRecord),
}

impl ImportSource {
    /// An uploaded file takes precedence over the request body. Bodies that are not a non-empty
    /// array or object carry no data.
    pub fn resolve(file: Option<Vec<u8>>, body: Option<Value>) -> Result<Self> {
        if let Some(bytes) = file {
            return Ok(ImportSource::SpreadsheetUpload(bytes));
        }
        match body {
            Some(Value::Array(items)) if !items.is_empty() => Ok(ImportSource::BatchRecords(
                items.iter().map(ContactRecord::from_json).collect(),
            )),
            Some(Value::Object(map)) if !map.is_empty() => Ok(ImportSource::SingleRecord(
                ContactRecord::from_json(&Value::Object(map)),
            )),
            _ => Err(Error::NoFileOrData),
        }
    }

    /// Normalizes the source into candidate rows, tagged with where they came from
    pub fn into_records(self) -> Result<(Vec<ContactRecord>, RowSource)> {
        match self {
            ImportSource::SpreadsheetUpload(bytes) => {
                Ok((read_spreadsheet(bytes)?, RowSource::Spreadsheet))
            }
            ImportSource::BatchRecords(records) => Ok((records, RowSource::Json)),
            ImportSource::SingleRecord(record) => Ok((vec![record], RowSource::Json)),
        }
    }
}

/// Reads the first sheet of a workbook. The first row holds the `Name`, `Email` and `Phone`
/// headers, every following non-blank row is one candidate contact.
pub fn read_spreadsheet(bytes: Vec<u8>) -> Result<Vec<ContactRecord>> {
    let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes))
        .map_err(|e| Error::Spreadsheet(e.to_string()))?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| Error::Spreadsheet(String::from("the workbook has no sheets")))?
        .map_err(|e| Error::Spreadsheet(e.to_string()))?;

    let mut rows = range.rows();
    let header = match rows.next() {
        Some(header) => header,
        None => return Ok(vec![]),
    };
    let column = |name: &str| {
        header
            .iter()
            .position(|cell| cell_to_text(cell).as_deref() == Some(name))
    };
    let name_col = column(SHEET_HEADER_NAME);
    let email_col = column(SHEET_HEADER_EMAIL);
    let phone_col = column(SHEET_HEADER_PHONE);

    let cell_at = |row: &[Data], col: Option<usize>| {
        col.and_then(|c| row.get(c)).and_then(cell_to_text)
    };

    Ok(rows
        .filter(|row| row.iter().any(|cell| cell_to_text(cell).is_some()))
        .map(|row| ContactRecord {
            name: cell_at(row, name_col),
            email: cell_at(row, email_col),
            phone: cell_at(row, phone_col),
        })
        .collect())
}

// numeric cells are rendered without a fraction if they have none, e.g. phone numbers
fn cell_to_text(cell: &Data) -> Option<String> {
    match cell {
        Data::Empty => None,
        other => {
            let text = other.to_string();
            if text.is_empty() { None } else { Some(text) }
        }
    }
}

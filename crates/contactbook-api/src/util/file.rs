use crate::constants::{MAX_FILE_SIZE_BYTES, VALID_SPREADSHEET_EXTENSIONS};
use crate::service::{Error, Result};
use async_trait::async_trait;

#[cfg(test)]
use mockall::automock;

#[cfg_attr(test, automock)]
#[async_trait]
pub trait UploadFileHandler: Send + Sync {
    /// Read the attached uploaded file
    async fn get_contents(&self) -> std::io::Result<Vec<u8>>;
    /// Returns the extension for an uploaded file
    fn extension(&self) -> Option<String>;
    /// Returns the name for an uploaded file
    fn name(&self) -> Option<String>;
    /// Returns the file length for an uploaded file
    fn len(&self) -> u64;
    /// Returns whether it's empty
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Checks that an uploaded file is a non-empty spreadsheet within the size limit
pub fn validate_spreadsheet_file(file: &dyn UploadFileHandler) -> Result<()> {
    if file.is_empty() {
        return Err(Error::Validation(String::from(
            "The uploaded file is empty",
        )));
    }

    if file.len() > MAX_FILE_SIZE_BYTES as u64 {
        return Err(Error::Validation(format!(
            "Maximum file size is {} bytes",
            MAX_FILE_SIZE_BYTES
        )));
    }

    let extension = file
        .extension()
        .map(|ext| ext.to_lowercase())
        .unwrap_or_default();
    if !VALID_SPREADSHEET_EXTENSIONS.contains(&extension.as_str()) {
        return Err(Error::Validation(format!(
            "Invalid file type '{}', expected one of: {}",
            extension,
            VALID_SPREADSHEET_EXTENSIONS.join(", ")
        )));
    }
    Ok(())
}

/// Reads an uploaded spreadsheet after validating it
pub async fn read_spreadsheet_upload(file: &dyn UploadFileHandler) -> Result<Vec<u8>> {
    validate_spreadsheet_file(file)?;
    let bytes = file.get_contents().await?;
    Ok(bytes)
}

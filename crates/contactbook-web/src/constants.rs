pub use contactbook_api::MAX_FILE_SIZE_BYTES;

// Responses
pub const UPLOAD_SUCCESS_MESSAGE: &str = "Contacts uploaded successfully.";
pub const UPDATE_SUCCESS_MESSAGE: &str = "Contact updated successfully.";
pub const DELETE_SUCCESS_MESSAGE: &str = "Contact deleted successfully.";

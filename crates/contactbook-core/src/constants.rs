// Spreadsheet header columns, case-sensitive
pub const SHEET_HEADER_NAME: &str = "Name";
pub const SHEET_HEADER_EMAIL: &str = "Email";
pub const SHEET_HEADER_PHONE: &str = "Phone";

// JSON record fields
pub const FIELD_NAME: &str = "name";
pub const FIELD_EMAIL: &str = "email";
pub const FIELD_PHONE: &str = "phone";

// Validation
pub const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";
pub const PHONE_PATTERN: &str = r"^[0-9]+$";

pub use contactbook_core::contact;
pub use contactbook_core::validation;

pub use contactbook_core::Contact;
pub use contactbook_core::ContactFields;
pub use contactbook_core::ContactRecord;
pub use contactbook_core::RowError;

use super::import::ImportSource;
use super::{Error, Result};
use crate::constants::{DEFAULT_PAGE, DEFAULT_PAGE_SIZE};
use async_trait::async_trait;
use contactbook_core::{
    Contact, ContactRecord,
    validation::{into_valid_batch, validate_record, validate_rows},
};
use contactbook_persistence::{ContactSearch, ContactStoreApi};
use log::info;
use std::sync::Arc;

#[cfg(test)]
use mockall::automock;

/// Pagination and filter parameters for listing contacts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactListQuery {
    /// 1-based
    pub page: u64,
    pub limit: u64,
    pub search: Option<String>,
}

impl Default for ContactListQuery {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_PAGE_SIZE,
            search: None,
        }
    }
}

impl ContactListQuery {
    /// Builds a query from raw request parameters. Missing values fall back to the defaults,
    /// anything that is not a positive integer is rejected.
    pub fn parse(page: Option<&str>, limit: Option<&str>, search: Option<&str>) -> Result<Self> {
        Ok(Self {
            page: parse_positive("page", page, DEFAULT_PAGE)?,
            limit: parse_positive("limit", limit, DEFAULT_PAGE_SIZE)?,
            search: search.filter(|s| !s.is_empty()).map(|s| s.to_owned()),
        })
    }

    pub fn offset(&self) -> Result<u64> {
        (self.page - 1).checked_mul(self.limit).ok_or_else(|| {
            Error::Validation(format!(
                "page {} with limit {} is out of range",
                self.page, self.limit
            ))
        })
    }
}

fn parse_positive(param: &str, value: Option<&str>, default: u64) -> Result<u64> {
    match value {
        None => Ok(default),
        Some(raw) => match raw.trim().parse::<u64>() {
            Ok(parsed) if parsed > 0 => Ok(parsed),
            _ => Err(Error::Validation(format!(
                "Invalid {param} '{raw}', expected a positive integer"
            ))),
        },
    }
}

/// One page of the contact list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactPage {
    pub contacts: Vec<Contact>,
    pub total: u64,
    pub current_page: u64,
    pub total_pages: u64,
}

#[cfg_attr(test, automock)]
#[async_trait]
pub trait ContactServiceApi: Send + Sync {
    /// Validates every row of the import and stores all of them at once. If a single row is
    /// invalid, nothing is stored.
    async fn import_contacts(&self, source: ImportSource) -> Result<Vec<Contact>>;

    /// Validates and stores a single contact
    async fn create_contact(&self, record: ContactRecord) -> Result<Contact>;

    /// Returns a page of contacts whose name or email contain the search term
    async fn list_contacts(&self, query: ContactListQuery) -> Result<ContactPage>;

    /// Returns the contact with the given id
    async fn get_contact(&self, id: &str) -> Result<Contact>;

    /// Overwrites name, email and phone of the contact with the given id
    async fn update_contact(&self, id: &str, record: ContactRecord) -> Result<Contact>;

    /// Deletes the contact with the given id
    async fn delete_contact(&self, id: &str) -> Result<()>;
}

/// The contact service is responsible for importing, querying and managing contacts.
#[derive(Clone)]
pub struct ContactService {
    store: Arc<dyn ContactStoreApi>,
}

impl ContactService {
    pub fn new(store: Arc<dyn ContactStoreApi>) -> Self {
        Self { store }
    }

    /// Fetches the contact, mapping a missing contact and a malformed id to `NotFound`
    async fn find(&self, id: &str) -> Result<Contact> {
        let id = id.parse::<i64>().map_err(|_| Error::NotFound)?;
        match self.store.get(id).await? {
            Some(contact) => Ok(contact),
            None => Err(Error::NotFound),
        }
    }
}

// the contact can vanish between the lookup and the write
fn not_found_if_missing(e: contactbook_persistence::Error) -> Error {
    match e {
        contactbook_persistence::Error::NoSuchEntity(..) => Error::NotFound,
        other => Error::Persistence(other),
    }
}

#[async_trait]
impl ContactServiceApi for ContactService {
    async fn import_contacts(&self, source: ImportSource) -> Result<Vec<Contact>> {
        let (records, origin) = source.into_records()?;
        let batch = into_valid_batch(validate_rows(&records, origin))
            .map_err(Error::RowValidation)?;

        let created = self.store.insert_all(batch).await?;
        info!("Imported {} contacts", created.len());
        Ok(created)
    }

    async fn create_contact(&self, record: ContactRecord) -> Result<Contact> {
        let fields = validate_record(&record).map_err(|e| Error::Validation(e.to_string()))?;
        let created = self.store.insert(fields).await?;
        info!("Created contact {}", created.id);
        Ok(created)
    }

    async fn list_contacts(&self, query: ContactListQuery) -> Result<ContactPage> {
        let result = self
            .store
            .search(ContactSearch {
                search_term: query.search.clone(),
                offset: query.offset()?,
                limit: query.limit,
            })
            .await?;
        Ok(ContactPage {
            total_pages: result.total.div_ceil(query.limit),
            total: result.total,
            current_page: query.page,
            contacts: result.contacts,
        })
    }

    async fn get_contact(&self, id: &str) -> Result<Contact> {
        self.find(id).await
    }

    async fn update_contact(&self, id: &str, record: ContactRecord) -> Result<Contact> {
        let existing = self.find(id).await?;
        let fields = validate_record(&record).map_err(|e| Error::Validation(e.to_string()))?;
        let updated = self
            .store
            .update(existing.id, fields)
            .await
            .map_err(not_found_if_missing)?;
        Ok(updated)
    }

    async fn delete_contact(&self, id: &str) -> Result<()> {
        let existing = self.find(id).await?;
        self.store
            .delete(existing.id)
            .await
            .map_err(not_found_if_missing)?;
        info!("Deleted contact {}", existing.id);
        Ok(())
    }
}

use contactbook_core::contact::{Contact, ContactFields};

use super::Result;
use async_trait::async_trait;

/// A page request against the contact table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSearch {
    /// substring matched against name or email, `None` or empty means no filter
    pub search_term: Option<String>,
    pub offset: u64,
    pub limit: u64,
}

/// One page of contacts and the number of contacts matching the filter overall
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSearchResult {
    pub contacts: Vec<Contact>,
    pub total: u64,
}

#[async_trait]
pub trait ContactStoreApi: Send + Sync {
    /// Stores a single contact, assigning its id and timestamps
    async fn insert(&self, data: ContactFields) -> Result<Contact>;
    /// Stores all given contacts in one atomic statement, either all of them are created, or none
    async fn insert_all(&self, data: Vec<ContactFields>) -> Result<Vec<Contact>>;
    /// Fetches the contact with the given id
    async fn get(&self, id: i64) -> Result<Option<Contact>>;
    /// Returns a page of contacts matching the search, ordered by id
    async fn search(&self, search: ContactSearch) -> Result<ContactSearchResult>;
    /// Overwrites name, email and phone of the given contact
    async fn update(&self, id: i64, data: ContactFields) -> Result<Contact>;
    /// Deletes the given contact
    async fn delete(&self, id: i64) -> Result<()>;
}

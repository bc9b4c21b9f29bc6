use super::super::{Error, Result};
use crate::{
    constants::{DB_COUNT, DB_KEY, DB_LIMIT, DB_OFFSET, DB_SEARCH_TERM, DB_TABLE},
    contact::{ContactSearch, ContactSearchResult, ContactStoreApi},
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use contactbook_core::contact::{Contact, ContactFields};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use surrealdb::{
    Surreal,
    engine::any::Any,
    sql::{Id, Thing},
};

#[derive(Clone)]
pub struct SurrealContactStore {
    db: Surreal<Any>,
}

impl SurrealContactStore {
    const TABLE: &'static str = "contacts";
    const SEQUENCE_TABLE: &'static str = "contact_sequence";

    const SEARCH_FILTER: &'static str = "string::contains(string::lowercase(name), $search_term) \
         OR string::contains(string::lowercase(email), $search_term)";

    pub fn new(db: Surreal<Any>) -> Self {
        Self { db }
    }

    /// Defines the unique indexes for email and phone. Safe to run on every start.
    pub async fn init(&self) -> Result<()> {
        self.db
            .query(format!(
                "DEFINE INDEX IF NOT EXISTS contact_email_unique ON TABLE {table} COLUMNS email UNIQUE;
                 DEFINE INDEX IF NOT EXISTS contact_phone_unique ON TABLE {table} COLUMNS phone UNIQUE;",
                table = Self::TABLE
            ))
            .await?
            .check()?;
        info!("Contact store initialized");
        Ok(())
    }

    /// Bumps the id counter by `count` and returns the reserved ids in ascending order.
    /// Ids of a failed insert are not reused.
    async fn reserve_ids(&self, count: usize) -> Result<Vec<i64>> {
        let count = i64::try_from(count)
            .map_err(|_| Error::InsertFailed(format!("batch of {count} contacts is too large")))?;
        let last_ids: Vec<i64> = self
            .db
            .query(
                "UPSERT type::thing($table, $key) SET last_id = (last_id OR 0) + $count RETURN VALUE last_id",
            )
            .bind((DB_TABLE, Self::SEQUENCE_TABLE))
            .bind((DB_KEY, Self::TABLE))
            .bind((DB_COUNT, count))
            .await?
            .take(0)?;
        let last_id = last_ids.first().copied().ok_or_else(|| {
            Error::InsertFailed(String::from("could not reserve ids for contacts"))
        })?;
        Ok(((last_id - count + 1)..=last_id).collect())
    }
}

#[async_trait]
impl ContactStoreApi for SurrealContactStore {
    async fn insert(&self, data: ContactFields) -> Result<Contact> {
        let id = match self.reserve_ids(1).await?.first() {
            Some(id) => *id,
            None => {
                return Err(Error::InsertFailed(String::from(
                    "could not reserve id for contact",
                )));
            }
        };
        let entity = ContactDb::new(id, data, Utc::now());
        let created: Option<ContactDb> = self
            .db
            .create((Self::TABLE, id))
            .content(entity)
            .await?;
        match created {
            None => Err(Error::InsertFailed(format!("contact {id} was not created"))),
            Some(c) => c.try_into(),
        }
    }

    async fn insert_all(&self, data: Vec<ContactFields>) -> Result<Vec<Contact>> {
        if data.is_empty() {
            return Ok(vec![]);
        }
        let ids = self.reserve_ids(data.len()).await?;
        let now = Utc::now();
        let entities: Vec<ContactDb> = ids
            .into_iter()
            .zip(data)
            .map(|(id, fields)| ContactDb::new(id, fields, now))
            .collect();
        let expected = entities.len();

        let created: Vec<ContactDb> = self.db.insert(Self::TABLE).content(entities).await?;
        if created.len() != expected {
            return Err(Error::InsertFailed(format!(
                "expected {expected} contacts to be created, got {}",
                created.len()
            )));
        }
        debug!("Inserted {expected} contacts");

        let mut contacts = created
            .into_iter()
            .map(|c| c.try_into())
            .collect::<Result<Vec<Contact>>>()?;
        contacts.sort_by_key(|c| c.id);
        Ok(contacts)
    }

    async fn get(&self, id: i64) -> Result<Option<Contact>> {
        let result: Option<ContactDb> = self.db.select((Self::TABLE, id)).await?;
        result.map(|c| c.try_into()).transpose()
    }

    async fn search(&self, search: ContactSearch) -> Result<ContactSearchResult> {
        let search_term = search
            .search_term
            .filter(|t| !t.is_empty())
            .map(|t| t.to_lowercase());
        let limit = i64::try_from(search.limit).unwrap_or(i64::MAX);
        let offset = i64::try_from(search.offset).unwrap_or(i64::MAX);

        let mut response = match search_term {
            Some(term) => {
                self.db
                    .query(format!(
                        "SELECT * FROM type::table($table) WHERE {filter} ORDER BY id LIMIT $limit START $offset;
                         SELECT count() AS total FROM type::table($table) WHERE {filter} GROUP ALL;",
                        filter = Self::SEARCH_FILTER
                    ))
                    .bind((DB_TABLE, Self::TABLE))
                    .bind((DB_SEARCH_TERM, term))
                    .bind((DB_LIMIT, limit))
                    .bind((DB_OFFSET, offset))
                    .await?
            }
            None => {
                self.db
                    .query(
                        "SELECT * FROM type::table($table) ORDER BY id LIMIT $limit START $offset;
                         SELECT count() AS total FROM type::table($table) GROUP ALL;",
                    )
                    .bind((DB_TABLE, Self::TABLE))
                    .bind((DB_LIMIT, limit))
                    .bind((DB_OFFSET, offset))
                    .await?
            }
        };

        let contacts: Vec<ContactDb> = response.take(0)?;
        let total: Option<ContactCountDb> = response.take(1)?;
        Ok(ContactSearchResult {
            contacts: contacts
                .into_iter()
                .map(|c| c.try_into())
                .collect::<Result<Vec<Contact>>>()?,
            total: total.map(|t| t.total).unwrap_or(0),
        })
    }

    async fn update(&self, id: i64, data: ContactFields) -> Result<Contact> {
        let entity = ContactUpdateDb {
            name: data.name,
            email: data.email,
            phone: data.phone,
            updated_at: Utc::now().timestamp_millis(),
        };
        let updated: Option<ContactDb> = self.db.update((Self::TABLE, id)).merge(entity).await?;
        match updated {
            None => Err(Error::NoSuchEntity("contact".to_string(), id.to_string())),
            Some(c) => c.try_into(),
        }
    }

    async fn delete(&self, id: i64) -> Result<()> {
        let deleted: Option<ContactDb> = self.db.delete((Self::TABLE, id)).await?;
        match deleted {
            None => Err(Error::NoSuchEntity("contact".to_string(), id.to_string())),
            Some(_) => Ok(()),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactDb {
    pub id: Thing,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub created_at: i64,
    pub updated_at: i64,
}

impl ContactDb {
    fn new(id: i64, fields: ContactFields, now: DateTime<Utc>) -> Self {
        let timestamp = now.timestamp_millis();
        Self {
            id: Thing::from((SurrealContactStore::TABLE, Id::Number(id))),
            name: fields.name,
            email: fields.email,
            phone: fields.phone,
            created_at: timestamp,
            updated_at: timestamp,
        }
    }
}

impl TryFrom<ContactDb> for Contact {
    type Error = Error;

    fn try_from(value: ContactDb) -> Result<Self> {
        let id = match value.id.id {
            Id::Number(id) => id,
            other => {
                return Err(Error::InvalidRecord(
                    "contact".to_string(),
                    format!("non-numeric id {other}"),
                ));
            }
        };
        Ok(Self {
            id,
            name: value.name,
            email: value.email,
            phone: value.phone,
            created_at: from_timestamp_millis(value.created_at)?,
            updated_at: from_timestamp_millis(value.updated_at)?,
        })
    }
}

fn from_timestamp_millis(millis: i64) -> Result<DateTime<Utc>> {
    DateTime::from_timestamp_millis(millis).ok_or_else(|| {
        Error::InvalidRecord("contact".to_string(), format!("invalid timestamp {millis}"))
    })
}

#[derive(Debug, Clone, Serialize)]
struct ContactUpdateDb {
    name: String,
    email: String,
    phone: String,
    updated_at: i64,
}

#[derive(Debug, Clone, Deserialize)]
struct ContactCountDb {
    total: u64,
}

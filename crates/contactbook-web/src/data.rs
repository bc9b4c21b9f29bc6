use async_trait::async_trait;
use chrono::{DateTime, Utc};
use contactbook_api::data::{Contact, ContactRecord};
use contactbook_api::service::contact_service::ContactPage;
use contactbook_api::util::file::UploadFileHandler;
use rocket::FromForm;
use rocket::fs::TempFile;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::io::AsyncReadExt;
use utoipa::ToSchema;

pub trait IntoWeb<T> {
    fn into_web(self) -> T;
}

pub trait FromWeb<T> {
    fn from_web(value: T) -> Self;
}

#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_owned(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct UploadContactsResponse {
    pub message: String,
    pub contacts: Vec<ContactWeb>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct UpdateContactResponse {
    pub message: String,
    pub contact: ContactWeb,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ContactsPageResponse {
    pub contacts: Vec<ContactWeb>,
    pub total: u64,
    pub current_page: u64,
    pub total_pages: u64,
}

impl IntoWeb<ContactsPageResponse> for ContactPage {
    fn into_web(self) -> ContactsPageResponse {
        ContactsPageResponse {
            contacts: self.contacts.into_iter().map(|c| c.into_web()).collect(),
            total: self.total,
            current_page: self.current_page,
            total_pages: self.total_pages,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ContactWeb {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl IntoWeb<ContactWeb> for Contact {
    fn into_web(self) -> ContactWeb {
        ContactWeb {
            id: self.id,
            name: self.name,
            email: self.email,
            phone: self.phone,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Body of the create and update requests. Fields are optional here so missing ones are
/// reported by the row validation instead of the JSON parser.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct ContactPayload {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl FromWeb<ContactPayload> for ContactRecord {
    fn from_web(value: ContactPayload) -> Self {
        ContactRecord {
            name: value.name,
            email: value.email,
            phone: value.phone,
        }
    }
}

#[derive(Debug, FromForm, ToSchema)]
pub struct UploadContactsForm<'r> {
    #[schema(value_type = Option<String>, format = Binary)]
    pub file: Option<TempFile<'r>>,
}

pub struct TempFileWrapper<'a>(pub &'a TempFile<'a>);

#[async_trait]
impl UploadFileHandler for TempFileWrapper<'_> {
    async fn get_contents(&self) -> std::io::Result<Vec<u8>> {
        let mut opened = self.0.open().await?;
        let mut buf = Vec::with_capacity(self.0.len() as usize);
        opened.read_to_end(&mut buf).await?;
        Ok(buf)
    }

    // the sanitized name drops the extension, so it's taken from the raw file name and falls
    // back to the content type
    fn extension(&self) -> Option<String> {
        self.0
            .raw_name()
            .and_then(|name| {
                Path::new(name.dangerous_unsafe_unsanitized_raw().as_str())
                    .extension()
                    .and_then(|ext| ext.to_str())
                    .map(|ext| ext.to_owned())
            })
            .or_else(|| {
                self.0
                    .content_type()
                    .and_then(|c| c.extension().map(|e| e.to_string()))
            })
    }

    fn name(&self) -> Option<String> {
        self.0.name().map(|s| s.to_owned())
    }

    fn len(&self) -> u64 {
        self.0.len()
    }
}

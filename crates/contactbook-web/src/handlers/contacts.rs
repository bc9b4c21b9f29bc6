use super::Result;
use crate::constants::{DELETE_SUCCESS_MESSAGE, UPDATE_SUCCESS_MESSAGE, UPLOAD_SUCCESS_MESSAGE};
use crate::data::{
    ContactPayload, ContactWeb, ContactsPageResponse, FromWeb, IntoWeb, MessageResponse,
    TempFileWrapper, UpdateContactResponse, UploadContactsForm, UploadContactsResponse,
};
use contactbook_api::data::ContactRecord;
use contactbook_api::service::contact_service::ContactListQuery;
use contactbook_api::service::import::ImportSource;
use contactbook_api::service::{self, ServiceContext};
use contactbook_api::util::file::read_spreadsheet_upload;
use rocket::form::Form;
use rocket::http::Status;
use rocket::serde::json::Json;
use rocket::{State, delete, get, post, put};
use serde_json::Value;

async fn import(
    state: &State<ServiceContext>,
    source: ImportSource,
) -> Result<(Status, Json<UploadContactsResponse>)> {
    let contacts = state.contact_service.import_contacts(source).await?;
    Ok((
        Status::Created,
        Json(UploadContactsResponse {
            message: UPLOAD_SUCCESS_MESSAGE.to_owned(),
            contacts: contacts.into_iter().map(|c| c.into_web()).collect(),
        }),
    ))
}

#[utoipa::path(
    tag = "Contacts",
    path = "/api/contacts/upload",
    description = "Imports contacts from an uploaded spreadsheet (multipart field `file`) or from a JSON object or array. Either all contacts are stored or none.",
    request_body(content = UploadContactsForm, content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "All contacts were stored", body = UploadContactsResponse),
        (status = 400, description = "No data, an invalid file or at least one invalid row")
    )
)]
#[post("/upload", data = "<upload_form>", rank = 1)]
pub async fn upload_contacts_file(
    state: &State<ServiceContext>,
    upload_form: Form<UploadContactsForm<'_>>,
) -> Result<(Status, Json<UploadContactsResponse>)> {
    let file_bytes = match &upload_form.file {
        Some(file) => Some(read_spreadsheet_upload(&TempFileWrapper(file)).await?),
        None => None,
    };
    let source = ImportSource::resolve(file_bytes, None)?;
    import(state, source).await
}

#[post("/upload", format = "json", data = "<body>", rank = 2)]
pub async fn upload_contacts_json(
    state: &State<ServiceContext>,
    body: Option<Json<Value>>,
) -> Result<(Status, Json<UploadContactsResponse>)> {
    let source = ImportSource::resolve(None, body.map(|b| b.into_inner()))?;
    import(state, source).await
}

// neither a form nor a JSON body
#[post("/upload", rank = 3)]
pub async fn upload_contacts_without_data() -> Result<(Status, Json<UploadContactsResponse>)> {
    Err(service::Error::NoFileOrData.into())
}

#[utoipa::path(
    tag = "Contacts",
    path = "/api/contacts",
    description = "Creates a single contact",
    request_body(content = ContactPayload, content_type = "application/json"),
    responses(
        (status = 201, description = "The created contact", body = ContactWeb),
        (status = 400, description = "Missing or invalid fields")
    )
)]
#[post("/", format = "json", data = "<new_contact_payload>")]
pub async fn new_contact(
    state: &State<ServiceContext>,
    new_contact_payload: Json<ContactPayload>,
) -> Result<(Status, Json<ContactWeb>)> {
    let contact = state
        .contact_service
        .create_contact(ContactRecord::from_web(new_contact_payload.into_inner()))
        .await?;
    Ok((Status::Created, Json(contact.into_web())))
}

#[utoipa::path(
    tag = "Contacts",
    path = "/api/contacts",
    description = "Lists contacts page by page, optionally filtered by a search term on name and email",
    params(
        ("page" = Option<u64>, Query, description = "1-based page number, defaults to 1"),
        ("limit" = Option<u64>, Query, description = "Page size, defaults to 10"),
        ("search" = Option<String>, Query, description = "Case-insensitive substring of name or email")
    ),
    responses(
        (status = 200, description = "One page of contacts", body = ContactsPageResponse),
        (status = 400, description = "Invalid page or limit")
    )
)]
#[get("/?<page>&<limit>&<search>")]
pub async fn return_contacts(
    state: &State<ServiceContext>,
    page: Option<&str>,
    limit: Option<&str>,
    search: Option<&str>,
) -> Result<Json<ContactsPageResponse>> {
    let query = ContactListQuery::parse(page, limit, search)?;
    let result = state.contact_service.list_contacts(query).await?;
    Ok(Json(result.into_web()))
}

#[utoipa::path(
    tag = "Contacts",
    path = "/api/contacts/{id}",
    description = "Get contact details by id",
    params(
        ("id" = String, Path, description = "Id of the contact to return")
    ),
    responses(
        (status = 200, description = "The contact with given id", body = ContactWeb),
        (status = 404, description = "Contact not found")
    )
)]
#[get("/<id>")]
pub async fn return_contact(state: &State<ServiceContext>, id: &str) -> Result<Json<ContactWeb>> {
    let contact: ContactWeb = state.contact_service.get_contact(id).await?.into_web();
    Ok(Json(contact))
}

#[utoipa::path(
    tag = "Contacts",
    path = "/api/contacts/{id}",
    description = "Overwrites name, email and phone of a contact",
    params(
        ("id" = String, Path, description = "Id of the contact to update")
    ),
    request_body(content = ContactPayload, content_type = "application/json"),
    responses(
        (status = 200, description = "The updated contact", body = UpdateContactResponse),
        (status = 400, description = "Missing or invalid fields"),
        (status = 404, description = "Contact not found")
    )
)]
#[put("/<id>", format = "json", data = "<edit_contact_payload>")]
pub async fn edit_contact(
    state: &State<ServiceContext>,
    id: &str,
    edit_contact_payload: Json<ContactPayload>,
) -> Result<Json<UpdateContactResponse>> {
    let contact = state
        .contact_service
        .update_contact(
            id,
            ContactRecord::from_web(edit_contact_payload.into_inner()),
        )
        .await?;
    Ok(Json(UpdateContactResponse {
        message: UPDATE_SUCCESS_MESSAGE.to_owned(),
        contact: contact.into_web(),
    }))
}

#[utoipa::path(
    tag = "Contacts",
    path = "/api/contacts/{id}",
    description = "Deletes a contact",
    params(
        ("id" = String, Path, description = "Id of the contact to delete")
    ),
    responses(
        (status = 200, description = "Contact deleted", body = MessageResponse),
        (status = 404, description = "Contact not found")
    )
)]
#[delete("/<id>")]
pub async fn remove_contact(
    state: &State<ServiceContext>,
    id: &str,
) -> Result<Json<MessageResponse>> {
    state.contact_service.delete_contact(id).await?;
    Ok(Json(MessageResponse::new(DELETE_SUCCESS_MESSAGE)))
}

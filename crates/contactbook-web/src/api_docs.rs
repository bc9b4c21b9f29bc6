use crate::handlers;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(title = "contactbook", description = "Contact management and bulk import API"),
    paths(
        handlers::contacts::upload_contacts_file,
        handlers::contacts::new_contact,
        handlers::contacts::return_contacts,
        handlers::contacts::return_contact,
        handlers::contacts::edit_contact,
        handlers::contacts::remove_contact,
    )
)]
pub struct ApiDocs;

use crate::api_docs::ApiDocs;
use crate::config::Config;
use crate::constants::MAX_FILE_SIZE_BYTES;
use crate::handlers;
use contactbook_api::service::ServiceContext;
use log::info;
use rocket::data::ByteUnit;
use rocket::figment::Figment;
use rocket::http::Method;
use rocket::serde::json::Json;
use rocket::{Build, Request, Rocket, catch, catchers, routes};
use rocket_cors::{AllowedHeaders, AllowedOrigins, CorsOptions};
use serde::Serialize;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(Serialize, Debug, Clone)]
pub struct ErrorResponse {
    error: &'static str,
    message: String,
    #[serde(skip)]
    code: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    errors: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    stack: Option<String>,
}

impl ErrorResponse {
    pub fn new(error: &'static str, message: String, code: u16) -> Self {
        Self {
            error,
            message,
            code,
            errors: None,
            stack: None,
        }
    }

    pub fn with_errors(mut self, errors: Vec<String>) -> Self {
        self.errors = Some(errors);
        self
    }

    pub fn with_stack(mut self, stack: String) -> Self {
        self.stack = Some(stack);
        self
    }

    pub fn code(&self) -> u16 {
        self.code
    }

    pub fn to_json_string(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}

pub fn rocket_main(
    conf: Config,
    context: ServiceContext,
) -> Result<Rocket<Build>, rocket_cors::Error> {
    let config = Figment::from(rocket::Config::default())
        .merge(("limits.forms", ByteUnit::Byte(MAX_FILE_SIZE_BYTES as u64)))
        .merge(("limits.file", ByteUnit::Byte(MAX_FILE_SIZE_BYTES as u64)))
        .merge((
            "limits.data-form",
            ByteUnit::Byte(MAX_FILE_SIZE_BYTES as u64),
        ))
        .merge(("limits.json", ByteUnit::Byte(MAX_FILE_SIZE_BYTES as u64)))
        .merge(("port", conf.http_port))
        .merge(("address", conf.http_address.to_owned()));

    let cors = CorsOptions::default()
        .allowed_origins(AllowedOrigins::all())
        .allowed_headers(AllowedHeaders::all())
        .allowed_methods(
            vec![
                Method::Get,
                Method::Post,
                Method::Put,
                Method::Delete,
                Method::Options,
            ]
            .into_iter()
            .map(From::from)
            .collect(),
        )
        .allow_credentials(true)
        .to_cors()?;

    info!("HTTP Server Listening on {}", conf.http_listen_url());

    let rocket = rocket::custom(config)
        .attach(cors.clone())
        // catchers for CORS and API errors
        .mount("/api/", rocket_cors::catch_all_options_routes())
        .register(
            "/api/",
            catchers![not_found, payload_too_large, unprocessable, internal_error],
        )
        .manage(context)
        .manage(cors)
        .manage(conf)
        .mount(
            "/api/contacts",
            routes![
                handlers::contacts::upload_contacts_file,
                handlers::contacts::upload_contacts_json,
                handlers::contacts::upload_contacts_without_data,
                handlers::contacts::new_contact,
                handlers::contacts::return_contacts,
                handlers::contacts::return_contact,
                handlers::contacts::edit_contact,
                handlers::contacts::remove_contact,
            ],
        )
        .mount(
            "/",
            SwaggerUi::new("/api/swagger-ui/<_..>")
                .url("/api/api-docs/openapi.json", ApiDocs::openapi()),
        );

    Ok(rocket)
}

#[catch(404)]
fn not_found(req: &Request) -> Json<ErrorResponse> {
    Json(ErrorResponse::new(
        "not_found",
        format!("We couldn't find the requested path '{}'", req.uri()),
        404,
    ))
}

#[catch(413)]
fn payload_too_large() -> Json<ErrorResponse> {
    Json(ErrorResponse::new(
        "payload_too_large",
        format!("Maximum upload size is {} bytes", MAX_FILE_SIZE_BYTES),
        413,
    ))
}

#[catch(422)]
fn unprocessable(req: &Request) -> Json<ErrorResponse> {
    Json(ErrorResponse::new(
        "unprocessable_entity",
        format!("The request body for '{}' could not be parsed", req.uri()),
        422,
    ))
}

#[catch(500)]
fn internal_error() -> Json<ErrorResponse> {
    Json(ErrorResponse::new(
        "internal_server_error",
        String::from("Internal server error"),
        500,
    ))
}

use crate::config::Config;
use crate::router::ErrorResponse;
use contactbook_api::service::Error;
use log::error;
use rocket::Response;
use rocket::http::ContentType;
use rocket::{http::Status, response::Responder};
use std::io::Cursor;

pub use crate::error::Result;

pub mod contacts;

impl<'r, 'o: 'r> Responder<'r, 'o> for crate::error::Error {
    fn respond_to(self, req: &rocket::Request) -> rocket::response::Result<'o> {
        match self {
            crate::error::Error::Service(e) => ServiceError(e).respond_to(req),
        }
    }
}

pub struct ServiceError(Error);

impl<'r, 'o: 'r> Responder<'r, 'o> for ServiceError {
    fn respond_to(self, req: &rocket::Request) -> rocket::response::Result<'o> {
        let err = self.0;
        match err {
            Error::NotFound => build_response(ErrorResponse::new("not_found", err.to_string(), 404)),
            Error::Validation(msg) => build_validation_response(msg),
            Error::NoFileOrData | Error::Spreadsheet(_) => {
                build_response(ErrorResponse::new("bad_request", err.to_string(), 400))
            }
            Error::RowValidation(errors) => {
                let message = errors.first().map(|e| e.to_string()).unwrap_or_default();
                build_response(
                    ErrorResponse::new("validation_error", message, 400)
                        .with_errors(errors.iter().map(|e| e.to_string()).collect()),
                )
            }
            // for now handle all persistence errors as InternalServerError, there
            // will be cases where we want to handle them differently (eg. 409 Conflict)
            Error::Persistence(e) => {
                error!("{e}");
                build_internal_error_response(req, e.to_string(), format!("{e:?}"))
            }
            Error::Io(e) => {
                error!("{e}");
                build_internal_error_response(req, e.to_string(), format!("{e:?}"))
            }
        }
    }
}

fn build_validation_response<'o>(msg: String) -> rocket::response::Result<'o> {
    build_response(ErrorResponse::new("validation_error", msg, 400))
}

// the debug rendering of the error is only exposed in development
fn build_internal_error_response<'o>(
    req: &rocket::Request,
    msg: String,
    stack: String,
) -> rocket::response::Result<'o> {
    let err_resp = ErrorResponse::new("internal_server_error", msg, 500);
    let is_development = req
        .rocket()
        .state::<Config>()
        .map(|c| c.is_development())
        .unwrap_or(false);
    if is_development {
        build_response(err_resp.with_stack(stack))
    } else {
        build_response(err_resp)
    }
}

fn build_response<'o>(err_resp: ErrorResponse) -> rocket::response::Result<'o> {
    let body = err_resp.to_json_string();
    Response::build()
        .status(Status::from_code(err_resp.code()).unwrap_or(Status::InternalServerError))
        .header(ContentType::JSON)
        .sized_body(body.len(), Cursor::new(body))
        .ok()
}

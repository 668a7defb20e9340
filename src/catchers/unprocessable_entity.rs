use crate::catchers::error_body;
use rocket::http::Status;
use rocket::response::status::Custom;
use rocket::serde::json::{Json, Value};
use rocket::Request;

#[catch(422)]
pub fn unprocessable_entity_to_bad_request(req: &Request) -> Custom<Json<Value>> {
    tracing::warn!("Unprocessable request to {} {}", req.method(), req.uri());
    Custom(
        Status::BadRequest,
        error_body("The request could not be processed."),
    )
}

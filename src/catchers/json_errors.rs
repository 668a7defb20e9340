use crate::catchers::error_body;
use rocket::http::Status;
use rocket::response::status::Custom;
use rocket::serde::json::{Json, Value};
use rocket::Request;

#[catch(404)]
pub fn not_found(req: &Request) -> Json<Value> {
    error_body(&format!("No resource found at {}", req.uri()))
}

#[catch(default)]
pub fn default_json_error(status: Status, req: &Request) -> Custom<Json<Value>> {
    tracing::warn!(
        "Request to {} {} failed with status {}",
        req.method(),
        req.uri(),
        status.code
    );
    Custom(status, error_body(status.reason_lossy()))
}

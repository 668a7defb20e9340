mod json_errors;
mod unprocessable_entity;

pub use json_errors::*;
use rocket::serde::json::{json, Json, Value};
pub use unprocessable_entity::*;

fn error_body(message: &str) -> Json<Value> {
    Json(json!({ "error": message }))
}

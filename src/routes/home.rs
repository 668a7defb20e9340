use rocket::serde::json::{json, Json, Value};

#[get("/")]
pub fn index() -> Json<Value> {
    Json(json!({
        "message": "Financial Subscriptions API",
        "endpoints": {
            "GET /api/subscriptions": "Get all subscriptions",
            "POST /api/subscriptions": "Create subscription",
            "PUT /api/subscriptions/<id>": "Update subscription",
            "DELETE /api/subscriptions/<id>": "Delete subscription"
        }
    }))
}

use crate::domain::{
    Caller, NewSubscriptionDetails, RawAmount, StartDate, SubscriptionAmount, SubscriptionPatch,
};
use crate::models::Subscription;
use crate::routes::ApiError;
use crate::startup::SubscriptionsDbConn;
use crate::store;
use chrono::{NaiveDate, NaiveDateTime};
use rocket::http::Status;
use rocket::response::status::Custom;
use rocket::serde::json::{self, Json};
use uuid::Uuid;

#[derive(serde::Deserialize, Debug)]
pub struct SubscriptionForm {
    name: String,
    amount: RawAmount,
    period: String,
    start_date: String,
}

impl TryFrom<SubscriptionForm> for NewSubscriptionDetails {
    type Error = String;

    fn try_from(form: SubscriptionForm) -> Result<Self, Self::Error> {
        let amount = SubscriptionAmount::parse(form.amount)?;
        let start_date = StartDate::parse(form.start_date)?;
        Ok(NewSubscriptionDetails {
            name: form.name,
            amount,
            period: form.period,
            start_date,
        })
    }
}

#[derive(serde::Serialize, Debug)]
pub struct SubscriptionBody {
    pub id: i32,
    pub name: String,
    pub amount: f64,
    pub period: String,
    pub start_date: NaiveDate,
}

impl From<Subscription> for SubscriptionBody {
    fn from(subscription: Subscription) -> Self {
        Self {
            id: subscription.id,
            name: subscription.name,
            amount: subscription.amount,
            period: subscription.period,
            start_date: subscription.start_date,
        }
    }
}

#[derive(serde::Serialize, Debug)]
pub struct ListedSubscription {
    pub id: i32,
    pub name: String,
    pub amount: f64,
    pub period: String,
    pub start_date: NaiveDate,
    pub created_at: NaiveDateTime,
}

impl From<Subscription> for ListedSubscription {
    fn from(subscription: Subscription) -> Self {
        Self {
            id: subscription.id,
            name: subscription.name,
            amount: subscription.amount,
            period: subscription.period,
            start_date: subscription.start_date,
            created_at: subscription.created_at,
        }
    }
}

fn malformed_body(e: json::Error<'_>) -> ApiError {
    let message = match e {
        json::Error::Io(e) => e.to_string(),
        json::Error::Parse(_, e) => e.to_string(),
    };
    ApiError::Validation(message)
}

#[tracing::instrument(
    name = "Adding a new subscription",
    skip(body, conn),
    fields(request_id = %Uuid::new_v4())
)]
#[post("/subscriptions", data = "<body>")]
pub async fn create_subscription(
    body: Result<Json<SubscriptionForm>, json::Error<'_>>,
    caller: Caller,
    conn: SubscriptionsDbConn,
) -> Result<Custom<Json<SubscriptionBody>>, ApiError> {
    let details: NewSubscriptionDetails = body
        .map_err(malformed_body)?
        .into_inner()
        .try_into()
        .map_err(ApiError::Validation)?;
    let subscription = conn
        .run(move |c| store::create_subscription(c, &caller, details))
        .await?;
    Ok(Custom(Status::Created, Json(subscription.into())))
}

#[tracing::instrument(
    name = "Listing active subscriptions",
    skip(conn),
    fields(request_id = %Uuid::new_v4())
)]
#[get("/subscriptions")]
pub async fn list_subscriptions(
    caller: Caller,
    conn: SubscriptionsDbConn,
) -> Result<Json<Vec<ListedSubscription>>, ApiError> {
    let subscriptions = conn
        .run(move |c| store::active_subscriptions(c, &caller))
        .await
        .map_err(|e| ApiError::unexpected(e, "Failed to fetch active subscriptions.".into()))?;
    Ok(Json(subscriptions.into_iter().map(Into::into).collect()))
}

#[tracing::instrument(
    name = "Updating a subscription",
    skip(body, conn),
    fields(request_id = %Uuid::new_v4())
)]
#[put("/subscriptions/<id>", data = "<body>")]
pub async fn update_subscription(
    id: i32,
    body: Result<Json<json::Value>, json::Error<'_>>,
    caller: Caller,
    conn: SubscriptionsDbConn,
) -> Result<Json<SubscriptionBody>, ApiError> {
    let patch = SubscriptionPatch::from(body.map_err(malformed_body)?.into_inner());
    let subscription = conn
        .run(move |c| store::update_subscription(c, &caller, id, patch))
        .await?;
    Ok(Json(subscription.into()))
}

#[tracing::instrument(
    name = "Deleting a subscription",
    skip(conn),
    fields(request_id = %Uuid::new_v4())
)]
#[delete("/subscriptions/<id>")]
pub async fn delete_subscription(
    id: i32,
    caller: Caller,
    conn: SubscriptionsDbConn,
) -> Result<Json<json::Value>, ApiError> {
    conn.run(move |c| store::deactivate_subscription(c, &caller, id))
        .await
        .map_err(|e| {
            ApiError::unexpected(e, format!("Failed to deactivate subscription {}.", id))
        })?;
    Ok(Json(
        json::json!({ "message": "Subscription deleted successfully" }),
    ))
}

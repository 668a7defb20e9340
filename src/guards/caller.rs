use crate::domain::Caller;
use crate::guards::OrStatus;
use crate::startup::DemoAccount;
use rocket::http::Status;
use rocket::outcome::Outcome;
use rocket::request::{self, FromRequest};
use rocket::Request;

/// Every request acts as the demo account provisioned at ignition.
#[rocket::async_trait]
impl<'r> FromRequest<'r> for Caller {
    type Error = anyhow::Error;

    async fn from_request(request: &'r Request<'_>) -> request::Outcome<Self, Self::Error> {
        match from_request_result(request) {
            Ok(caller) => Outcome::Success(caller),
            Err(failure) => {
                tracing::error!("Failed to resolve the caller: {:?}", failure.1);
                Outcome::Error(failure)
            }
        }
    }
}

fn from_request_result(request: &Request<'_>) -> Result<Caller, (Status, anyhow::Error)> {
    let account = request
        .rocket()
        .state::<DemoAccount>()
        .or_status(
            Status::InternalServerError,
            "No demo account has been provisioned.",
        )?;
    Ok(Caller {
        user_id: account.user_id,
    })
}

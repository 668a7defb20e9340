mod audit_action;
mod caller;
mod new_subscription;
mod start_date;
mod subscription_amount;
mod subscription_patch;

pub use audit_action::AuditAction;
pub use caller::Caller;
pub use new_subscription::NewSubscriptionDetails;
pub use start_date::StartDate;
pub use subscription_amount::{RawAmount, SubscriptionAmount};
pub use subscription_patch::{SubscriptionChanges, SubscriptionPatch};

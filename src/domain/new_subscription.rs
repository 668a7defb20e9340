use crate::domain::{StartDate, SubscriptionAmount};

#[derive(Debug, Clone)]
pub struct NewSubscriptionDetails {
    pub name: String,
    pub amount: SubscriptionAmount,
    pub period: String,
    pub start_date: StartDate,
}

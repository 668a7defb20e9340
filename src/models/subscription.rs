use crate::schema::subscriptions;
use chrono::{NaiveDate, NaiveDateTime};
use diesel::prelude::*;

#[derive(Queryable, Selectable, Identifiable, AsChangeset, Debug, Clone, PartialEq)]
#[diesel(table_name = subscriptions)]
pub struct Subscription {
    pub id: i32,
    pub user_id: i32,
    pub name: String,
    pub amount: f64,
    pub period: String,
    pub start_date: NaiveDate,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = subscriptions)]
pub struct NewSubscription<'a> {
    pub user_id: i32,
    pub name: &'a str,
    pub amount: f64,
    pub period: &'a str,
    pub start_date: NaiveDate,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
}

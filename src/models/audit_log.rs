use crate::schema::audit_logs;
use chrono::NaiveDateTime;
use diesel::prelude::*;

#[derive(Queryable, Selectable, Identifiable, Debug, Clone, PartialEq)]
#[diesel(table_name = audit_logs)]
pub struct AuditEntry {
    pub id: i32,
    pub user_id: i32,
    pub action: String,
    pub subscription_id: i32,
    pub details: String,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = audit_logs)]
pub struct NewAuditEntry<'a> {
    pub user_id: i32,
    pub action: &'a str,
    pub subscription_id: i32,
    pub details: &'a str,
    pub created_at: NaiveDateTime,
}

use crate::domain::{AuditAction, Caller};
use crate::models::{AuditEntry, NewAuditEntry};
use chrono::Utc;
use diesel::prelude::*;
use diesel::SqliteConnection;

#[tracing::instrument(name = "Recording an audit entry", skip(conn, subscription_name))]
pub fn record_audit_entry(
    conn: &mut SqliteConnection,
    caller: &Caller,
    action: AuditAction,
    subscription_id: i32,
    subscription_name: &str,
) -> QueryResult<()> {
    use crate::schema::audit_logs;
    let details = action.describe(subscription_name);
    diesel::insert_into(audit_logs::table)
        .values(NewAuditEntry {
            user_id: caller.user_id,
            action: action.as_str(),
            subscription_id,
            details: &details,
            created_at: Utc::now().naive_utc(),
        })
        .execute(conn)
        .map_err(|e| {
            tracing::error!("Failed to execute query: {:?}", e);
            e
        })
        .map(|_| ())
}

#[tracing::instrument(name = "Fetching the audit trail of a subscription", skip(conn))]
pub fn audit_trail(
    conn: &mut SqliteConnection,
    caller: &Caller,
    subscription: i32,
) -> QueryResult<Vec<AuditEntry>> {
    use crate::schema::audit_logs::dsl::*;
    audit_logs
        .filter(user_id.eq(caller.user_id))
        .filter(subscription_id.eq(subscription))
        .order(id.asc())
        .load::<AuditEntry>(conn)
}

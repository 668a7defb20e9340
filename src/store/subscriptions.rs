use crate::domain::{
    AuditAction, Caller, NewSubscriptionDetails, SubscriptionChanges, SubscriptionPatch,
};
use crate::models::{NewSubscription, Subscription};
use crate::store::{record_audit_entry, write_transaction, StoreError};
use chrono::Utc;
use diesel::prelude::*;
use diesel::SqliteConnection;

#[tracing::instrument(
    name = "Saving a new subscription in the database",
    skip(conn, details),
    fields(subscription_name = %details.name)
)]
pub fn create_subscription(
    conn: &mut SqliteConnection,
    caller: &Caller,
    details: NewSubscriptionDetails,
) -> Result<Subscription, StoreError> {
    use crate::schema::subscriptions;
    write_transaction(conn, |conn| {
        let subscription = diesel::insert_into(subscriptions::table)
            .values(NewSubscription {
                user_id: caller.user_id,
                name: &details.name,
                amount: details.amount.value(),
                period: &details.period,
                start_date: details.start_date.date(),
                is_active: true,
                created_at: Utc::now().naive_utc(),
            })
            .get_result::<Subscription>(conn)
            .map_err(|e| {
                tracing::error!("Failed to execute query: {:?}", e);
                e
            })?;
        record_audit_entry(
            conn,
            caller,
            AuditAction::CreateSubscription,
            subscription.id,
            &subscription.name,
        )?;
        Ok(subscription)
    })
}

#[tracing::instrument(name = "Fetching active subscriptions", skip(conn))]
pub fn active_subscriptions(
    conn: &mut SqliteConnection,
    caller: &Caller,
) -> Result<Vec<Subscription>, StoreError> {
    use crate::schema::subscriptions::dsl::*;
    let rows = subscriptions
        .filter(user_id.eq(caller.user_id))
        .filter(is_active.eq(true))
        .load::<Subscription>(conn)
        .map_err(|e| {
            tracing::error!("Failed to execute query: {:?}", e);
            e
        })?;
    Ok(rows)
}

/// Looks up a subscription owned by `caller`, whether active or not.
#[tracing::instrument(name = "Fetching a subscription", skip(conn))]
pub fn find_subscription(
    conn: &mut SqliteConnection,
    caller: &Caller,
    subscription_id: i32,
) -> Result<Option<Subscription>, StoreError> {
    use crate::schema::subscriptions::dsl::*;
    let row = subscriptions
        .filter(id.eq(subscription_id))
        .filter(user_id.eq(caller.user_id))
        .first::<Subscription>(conn)
        .optional()?;
    Ok(row)
}

#[tracing::instrument(name = "Updating a subscription", skip(conn, patch))]
pub fn update_subscription(
    conn: &mut SqliteConnection,
    caller: &Caller,
    subscription_id: i32,
    patch: SubscriptionPatch,
) -> Result<Subscription, StoreError> {
    write_transaction(conn, |conn| {
        let mut subscription =
            find_subscription(conn, caller, subscription_id)?.ok_or(StoreError::NotFound)?;
        let changes = SubscriptionChanges::try_from(patch).map_err(StoreError::Validation)?;
        changes.apply_to(&mut subscription);

        diesel::update(&subscription)
            .set(&subscription)
            .execute(conn)
            .map_err(|e| {
                tracing::error!("Failed to execute query: {:?}", e);
                e
            })?;
        record_audit_entry(
            conn,
            caller,
            AuditAction::UpdateSubscription,
            subscription.id,
            &subscription.name,
        )?;
        Ok(subscription)
    })
}

/// Marks a subscription inactive. The row itself is kept, and deleting an
/// already inactive subscription is recorded again.
#[tracing::instrument(name = "Deactivating a subscription", skip(conn))]
pub fn deactivate_subscription(
    conn: &mut SqliteConnection,
    caller: &Caller,
    subscription_id: i32,
) -> Result<Subscription, StoreError> {
    write_transaction(conn, |conn| {
        let mut subscription =
            find_subscription(conn, caller, subscription_id)?.ok_or(StoreError::NotFound)?;
        subscription.is_active = false;

        {
            use crate::schema::subscriptions::dsl::*;
            diesel::update(subscriptions.find(subscription.id))
                .set(is_active.eq(false))
                .execute(conn)
                .map_err(|e| {
                    tracing::error!("Failed to execute query: {:?}", e);
                    e
                })?;
        }
        record_audit_entry(
            conn,
            caller,
            AuditAction::DeleteSubscription,
            subscription.id,
            &subscription.name,
        )?;
        Ok(subscription)
    })
}

use crate::models::{NewUser, User};
use diesel::prelude::*;
use diesel::SqliteConnection;

/// Returns the user with `name`, creating it first if it does not exist yet.
#[tracing::instrument(name = "Provisioning a user", skip(conn))]
pub fn ensure_user(conn: &mut SqliteConnection, name: &str) -> QueryResult<User> {
    use crate::schema::users::dsl::*;
    conn.transaction::<_, diesel::result::Error, _>(|conn| {
        let existing = users
            .filter(username.eq(name))
            .first::<User>(conn)
            .optional()?;
        match existing {
            Some(user) => Ok(user),
            None => {
                tracing::info!("Creating user {}", name);
                diesel::insert_into(users)
                    .values(NewUser { username: name })
                    .get_result::<User>(conn)
            }
        }
    })
}

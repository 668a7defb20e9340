use crate::catchers::*;
use crate::configuration::Settings;
use crate::port_saver;
use crate::port_saver::Port;
use crate::routes::*;
use crate::store;
use diesel::connection::SimpleConnection;
use diesel::SqliteConnection;
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use rocket::fairing::AdHoc;
use rocket::figment::util::map;
use rocket::figment::value::{Map, Value};
use rocket::{Build, Ignite, Rocket};
use rocket_sync_db_pools::database;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

#[database("subscriptions")]
pub struct SubscriptionsDbConn(SqliteConnection);

/// The single user every request currently acts as.
#[derive(Debug, Clone)]
pub struct DemoAccount {
    pub user_id: i32,
    pub username: String,
}

pub struct Application {
    pub server: Rocket<Ignite>,
    pub port: Port,
}

impl Application {
    pub async fn build(configuration: &Settings) -> Result<Application, rocket::Error> {
        let (port_saver, port) = port_saver::create_pair();
        let database: Map<_, Value> = map! {
            "url" => configuration.database.connection_string().into(),
            "pool_size" => configuration.database.pool_size.into(),
        };
        let figment = rocket::Config::figment()
            .merge(("address", configuration.application.host))
            .merge(("port", configuration.application.port.unwrap_or(0)))
            .merge(("databases", map!["subscriptions" => database]));

        let demo_username = configuration.demo_user.username.clone();
        let server = rocket::custom(figment)
            .attach(SubscriptionsDbConn::fairing())
            .attach(AdHoc::try_on_ignite("Database preparation", move |rocket| {
                prepare_database(rocket, demo_username)
            }))
            .attach(port_saver)
            .mount("/", routes![index, health_check])
            .mount(
                "/api",
                routes![
                    create_subscription,
                    list_subscriptions,
                    update_subscription,
                    delete_subscription
                ],
            )
            .register(
                "/",
                catchers![
                    unprocessable_entity_to_bad_request,
                    not_found,
                    default_json_error
                ],
            )
            .ignite()
            .await?;
        Ok(Application { server, port })
    }
}

/// Applies pending migrations and makes sure the demo account exists before
/// any request is served. The file is switched to WAL first so readers never
/// wait on a writer.
async fn prepare_database(
    rocket: Rocket<Build>,
    username: String,
) -> Result<Rocket<Build>, Rocket<Build>> {
    let conn = match SubscriptionsDbConn::get_one(&rocket).await {
        Some(conn) => conn,
        None => {
            tracing::error!("Failed to retrieve a connection from the DB pool.");
            return Err(rocket);
        }
    };
    let prepared = conn
        .run(move |c| -> anyhow::Result<DemoAccount> {
            c.batch_execute("PRAGMA journal_mode = WAL;")?;
            c.run_pending_migrations(MIGRATIONS)
                .map_err(|e| anyhow::anyhow!(e))?;
            let user = store::ensure_user(c, &username)?;
            Ok(DemoAccount {
                user_id: user.id,
                username: user.username,
            })
        })
        .await;
    match prepared {
        Ok(account) => {
            tracing::info!(
                user_id = account.user_id,
                username = %account.username,
                "Database is ready"
            );
            Ok(rocket.manage(account))
        }
        Err(e) => {
            tracing::error!("Failed to prepare the database: {:?}", e);
            Err(rocket)
        }
    }
}

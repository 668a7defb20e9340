use diesel::prelude::*;
use diesel::SqliteConnection;
use once_cell::sync::Lazy;
use subscription_tracker::configuration::{get_configuration, Settings};
use subscription_tracker::domain::Caller;
use subscription_tracker::models::{AuditEntry, Subscription, User};
use subscription_tracker::startup::Application;
use subscription_tracker::store;
use subscription_tracker::telemetry::{get_subscriber, init_subscriber};
use uuid::Uuid;

static TRACING: Lazy<()> = Lazy::new(|| {
    let default_filter_level = "info".into();
    let subscriber_name = "test".into();
    if std::env::var("TEST_LOG").is_ok() {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::stdout);
        init_subscriber(subscriber);
    } else {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::sink);
        init_subscriber(subscriber);
    }
});

pub struct TestApp {
    pub address: String,
    pub db_connection: SqliteConnection,
    pub api_client: reqwest::Client,
    pub caller: Caller,
}

impl TestApp {
    pub async fn post_subscriptions(&self, body: &serde_json::Value) -> reqwest::Response {
        self.api_client
            .post(&format!("{}/api/subscriptions", &self.address))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn post_raw_subscriptions(&self, body: &'static str) -> reqwest::Response {
        self.api_client
            .post(&format!("{}/api/subscriptions", &self.address))
            .header("Content-Type", "application/json")
            .body(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn get_subscriptions(&self) -> reqwest::Response {
        self.api_client
            .get(&format!("{}/api/subscriptions", &self.address))
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn put_subscription(&self, id: i64, body: &serde_json::Value) -> reqwest::Response {
        self.api_client
            .put(&format!("{}/api/subscriptions/{}", &self.address, id))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn delete_subscription(&self, id: i64) -> reqwest::Response {
        self.api_client
            .delete(&format!("{}/api/subscriptions/{}", &self.address, id))
            .send()
            .await
            .expect("Failed to execute request.")
    }

    /// Creates a subscription and returns its id.
    pub async fn create_subscription(&self, name: &str, amount: f64) -> i64 {
        let body = serde_json::json!({
            "name": name,
            "amount": amount,
            "period": "monthly",
            "start_date": "2024-01-01"
        });
        let response = self.post_subscriptions(&body).await;
        assert_eq!(201, response.status().as_u16());
        let created: serde_json::Value = response.json().await.unwrap();
        created["id"].as_i64().expect("The created record has no id.")
    }

    pub fn stored_subscription(&mut self, id: i64) -> Option<Subscription> {
        store::find_subscription(&mut self.db_connection, &self.caller, id as i32)
            .expect("Failed to query the subscriptions table.")
    }

    pub fn stored_subscription_count(&mut self) -> i64 {
        use subscription_tracker::schema::subscriptions;
        subscriptions::table
            .count()
            .get_result(&mut self.db_connection)
            .expect("Failed to count subscriptions.")
    }

    pub fn audit_trail(&mut self, id: i64) -> Vec<AuditEntry> {
        store::audit_trail(&mut self.db_connection, &self.caller, id as i32)
            .expect("Failed to query the audit log.")
    }

    pub fn audit_entry_count(&mut self) -> i64 {
        use subscription_tracker::schema::audit_logs;
        audit_logs::table
            .count()
            .get_result(&mut self.db_connection)
            .expect("Failed to count audit entries.")
    }
}

pub async fn spawn_app() -> TestApp {
    Lazy::force(&TRACING);

    let configuration = {
        let mut c = get_configuration().expect("Failed to read configuration.");
        c.application.port = None;
        c.database.path = std::env::temp_dir()
            .join(format!("{}.db", Uuid::new_v4()))
            .to_string_lossy()
            .into_owned();
        c
    };

    let application = Application::build(&configuration)
        .await
        .expect("Failed to build application.");
    let _ = tokio::spawn(application.server.launch());
    let port = application
        .port
        .get()
        .await
        .expect("The server never reported its port.");

    let mut db_connection = connect_to_database(&configuration);
    let caller = demo_caller(&mut db_connection, &configuration);

    TestApp {
        address: format!("http://127.0.0.1:{}", port),
        db_connection,
        api_client: reqwest::Client::new(),
        caller,
    }
}

fn connect_to_database(configuration: &Settings) -> SqliteConnection {
    let connection_string = configuration.database.connection_string();
    SqliteConnection::establish(&connection_string).expect("Failed to connect to SQLite.")
}

fn demo_caller(connection: &mut SqliteConnection, configuration: &Settings) -> Caller {
    use subscription_tracker::schema::users::dsl::*;
    let user = users
        .filter(username.eq(&configuration.demo_user.username))
        .first::<User>(connection)
        .expect("The demo user was not provisioned.");
    Caller { user_id: user.id }
}

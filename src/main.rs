use subscription_tracker::configuration::get_configuration;
use subscription_tracker::startup::Application;
use subscription_tracker::telemetry::{get_subscriber, init_subscriber};

#[rocket::main]
async fn main() -> Result<(), rocket::Error> {
    let subscriber = get_subscriber(
        "subscription-tracker".into(),
        "info".into(),
        std::io::stdout,
    );
    init_subscriber(subscriber);

    let configuration = get_configuration().expect("Failed to read configuration.");
    let application = Application::build(&configuration).await?;
    application.server.launch().await?;
    Ok(())
}

//! main.rs

use estate_admin::configuration::get_configuration;
use estate_admin::startup::Application;
use estate_admin::telemetry::{get_log_subscriber, init_log_subscriber};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let subscriber = get_log_subscriber("estate_admin".into(), "info".into(), std::io::stdout);
    init_log_subscriber(subscriber)?;

    let configuration = get_configuration()?;
    let application = Application::build(configuration).await?;
    application.run_until_stopped().await?;
    Ok(())
}

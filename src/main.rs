use anyhow::Context;

use form_mailer::configuration::get_configuration;
use form_mailer::startup::Application;
use form_mailer::telemetry;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let subscriber = telemetry::get_subscriber(
        "form-mailer".to_string(),
        "info".to_string(),
        std::io::stdout,
    );
    telemetry::init_subscriber(subscriber);

    let configuration = get_configuration().context("Failed to read configuration.")?;
    tracing::info!(
        host = %configuration.application.host,
        port = configuration.application.port,
        relay = %configuration.smtp.host,
        "Starting form mailer"
    );

    let application = Application::build(&configuration).await?;
    application.run_until_stopped().await?;
    Ok(())
}

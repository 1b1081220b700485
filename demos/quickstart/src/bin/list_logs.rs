use api_console_client::prelude::*;
use api_console_client::utils::config::get_env_or_default;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_logger();

    info!("Starting quickstart example");

    let config = Config::new();
    info!("Using API at {}", config.rest_api.base_url);
    let client = Client::new(config)?;

    if !client.session().is_authenticated()? {
        let email = get_env_or_default("CONSOLE_EMAIL", String::from("demo@example.com"));
        let password = get_env_or_default("CONSOLE_PASSWORD", String::from("demo1234"));
        let auth = client
            .auth()
            .login(&LoginRequest::new(email, password))
            .await?;
        info!("✓ Logged in as {}", auth.user.username);
    }

    let api_id: Option<String> = std::env::args().nth(1);
    let logs = client
        .logs()
        .get_all(Some(1), Some(20), api_id.as_deref())
        .await?;
    info!("Logs: {}", serde_json::to_string_pretty(&logs)?);

    let stats = client.logs().get_stats().await?;
    info!("Stats: {}", stats);

    Ok(())
}

use api_console_client::prelude::*;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_logger();

    // session persisted by a previous login, see CREDENTIALS_FILE
    let client = Client::new(Config::new())?;

    let created = client.keys().create(&json!({ "name": "quickstart" })).await?;
    info!("Created key: {}", created);

    if let Some(id) = created.get("_id").and_then(Value::as_str) {
        let toggled = client.keys().toggle(id).await?;
        info!("Toggled key: {}", toggled);
        client.keys().delete(id).await?;
        info!("✓ Deleted key {}", id);
    }

    let keys = client.keys().get_all().await?;
    info!("Remaining keys: {}", keys);

    Ok(())
}

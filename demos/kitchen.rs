//! Prints the kitchen queue and advances the oldest pending order.
//!
//! Run with `POSFLOW_API_URL=http://localhost:8000/api/v1 cargo run --example kitchen`.

use posflow_client::{ErrorKind, OrderStatus, PosFlowClient};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let api = PosFlowClient::from_env().unwrap_or_else(|_| PosFlowClient::localhost());

    if !api.health_check().await {
        anyhow::bail!("backend at {} is not healthy", api.base_url());
    }

    let pending = match api.get_orders(Some(OrderStatus::Pending)).await {
        Ok(envelope) => envelope,
        Err(err) if err.kind() == ErrorKind::ConnectionFailure => {
            anyhow::bail!("kitchen view offline: {err}")
        }
        Err(err) => return Err(err.into()),
    };

    // The backend returns either a bare list or `{ orders, total }`.
    let orders = match pending.data() {
        Some(serde_json::Value::Array(items)) => items.clone(),
        Some(data) => data["orders"].as_array().cloned().unwrap_or_default(),
        None => Vec::new(),
    };
    for order in &orders {
        println!(
            "{} {}",
            order["table_number"].as_str().unwrap_or("?"),
            order["status"].as_str().unwrap_or("?")
        );
    }

    if let Some(id) = orders.first().and_then(|order| order.get("id")) {
        let id = id.as_str().map(str::to_owned).unwrap_or_else(|| id.to_string());
        api.update_order_status(&id, OrderStatus::Preparing).await?;
        println!("order {id} is now preparing");
    }

    Ok(())
}

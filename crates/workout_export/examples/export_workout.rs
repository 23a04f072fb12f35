//! Export one workout from a live store and write the document next to cwd.
//!
//! Usage: `HEALTHSTORE_API_KEY=... cargo run --example export_workout -- <workout-id>`

use healthstore_client::{HealthStore, config::Config, http_client::ReqwestHealthStore};
use workout_export::{build_export, serialize};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let log_env = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into());
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&log_env))
        .init();
    tracing::info!("workout_export:example: log filter = {}", log_env);

    let cfg = match Config::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("config error: {}", e);
            return Ok(());
        }
    };
    let workout_id = std::env::args().nth(1).unwrap_or_else(|| "w1".to_string());

    let store = ReqwestHealthStore::new(&cfg.base_url, cfg.api_key);
    let workout = store.query_workout(&workout_id).await?;
    let export = build_export(&store, &workout).await?;
    let (bytes, filename) = serialize(&export)?;

    std::fs::write(&filename, &bytes)?;
    println!("wrote {} ({} bytes)", filename, bytes.len());
    Ok(())
}

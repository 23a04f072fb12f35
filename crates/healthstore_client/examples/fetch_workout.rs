use healthstore_client::{HealthStore, config::Config, http_client::ReqwestHealthStore};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Example: expects HEALTHSTORE_API_KEY in env
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
    println!(
        "Workout {}: {} from {} ({} .. {})",
        workout.id, workout.activity_kind, workout.source_app, workout.start_date, workout.end_date
    );
    Ok(())
}

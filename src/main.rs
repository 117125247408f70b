use fitness_coach::api::routes::create_routes;
use fitness_coach::config::AppConfig;
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let config = AppConfig::from_env()?;

    // Create the application routes
    let app = create_routes();

    // Start the server
    let listener = TcpListener::bind(config.server_address()).await?;
    info!(
        "Fitness Coach server starting on http://{}",
        config.server_address()
    );
    info!(
        "Plan endpoint available at http://{}/api/generate-plan",
        config.server_address()
    );

    axum::serve(listener, app).await?;

    Ok(())
}

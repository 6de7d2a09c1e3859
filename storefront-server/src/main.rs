use storefront_server::{
    Config, Server, ServerState, init_logger_with_file, print_banner, setup_environment,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Environment (.env)
    setup_environment()?;

    // 2. Load configuration
    let config = Config::from_env();

    // 3. Logging, configured from the environment
    init_logger_with_file(
        Some(&config.log_level),
        Some(config.log_json),
        config.log_dir.as_deref(),
    );

    print_banner();
    tracing::info!("Trailer storefront server starting...");

    // 4. Initialize server state (loads and validates the catalog)
    let state = match ServerState::initialize(&config) {
        Ok(state) => state,
        Err(e) => {
            tracing::error!("Failed to initialize server state: {}", e);
            return Err(e.into());
        }
    };

    // 5. Run the HTTP server until shutdown
    let server = Server::with_state(config, state);
    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        return Err(e.into());
    }

    Ok(())
}

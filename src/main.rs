use dotenvy::dotenv;
use pulsegate::logging::init_tracing;
use pulsegate::router::init_router;
use pulsegate::state::init_app_state;
use pulsegate_config::ServerConfig;

#[tokio::main]
async fn main() {
    dotenv().ok();

    init_tracing();

    // Fail fast: in production mode a default secret or credential pair is a
    // fatal configuration error, not something to limp along with.
    let state = match init_app_state() {
        Ok(state) => state,
        Err(e) => {
            eprintln!("❌ Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    let server_config = ServerConfig::from_env();
    let app = init_router(state);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", server_config.port))
        .await
        .unwrap();
    println!(
        "🚀 Server running on http://localhost:{}",
        server_config.port
    );
    println!(
        "📚 Swagger UI available at http://localhost:{}/swagger-ui",
        server_config.port
    );
    axum::serve(listener, app).await.unwrap();
}

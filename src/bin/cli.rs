use clap::{Parser, Subcommand};
use dialoguer::{Input, Password};
use dotenvy::dotenv;

use pulsegate_client::{ApiClient, SessionError, SessionManager, SessionState, TokenStore};

#[derive(Parser)]
#[command(name = "pulsegate-cli")]
#[command(about = "Pulsegate CLI - session tools for the Pulsegate API", long_about = None)]
struct Cli {
    /// Base URL of the Pulsegate API
    #[arg(long, default_value = "http://localhost:3001")]
    api_url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Log in and store the session token
    Login {
        /// Username
        #[arg(short = 'u', long)]
        username: Option<String>,

        /// Password (will be prompted securely if not provided)
        #[arg(short = 'p', long)]
        password: Option<String>,
    },
    /// Log out and discard the stored session token
    Logout,
    /// Show the current session state
    Status,
    /// Call the protected health endpoint
    Health,
}

#[tokio::main]
async fn main() {
    dotenv().ok();

    let cli = Cli::parse();

    let api = ApiClient::new(cli.api_url);
    let store = TokenStore::from_env();
    let mut session = match SessionManager::load(api, store).await {
        Ok(session) => session,
        Err(e) => {
            eprintln!("❌ Failed to load session: {}", e);
            std::process::exit(1);
        }
    };

    match cli.command {
        Commands::Login { username, password } => {
            handle_login(&mut session, username, password).await
        }
        Commands::Logout => handle_logout(&mut session).await,
        Commands::Status => handle_status(&session),
        Commands::Health => handle_health(&mut session).await,
    }
}

async fn handle_login(
    session: &mut SessionManager,
    username: Option<String>,
    password: Option<String>,
) {
    let username = username.unwrap_or_else(|| {
        Input::new()
            .with_prompt("Username")
            .interact_text()
            .expect("Failed to read username")
    });

    let password = password.unwrap_or_else(|| {
        Password::new()
            .with_prompt("Password")
            .interact()
            .expect("Failed to read password")
    });

    match session.login(&username, password).await {
        Ok(()) => {
            println!("✅ Login successful");
            println!("   Logged in as: {}", username);
        }
        Err(SessionError::InvalidCredentials) => {
            eprintln!("❌ Invalid credentials. Check your username and password.");
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("❌ Login failed: {}", e);
            std::process::exit(1);
        }
    }
}

async fn handle_logout(session: &mut SessionManager) {
    match session.logout().await {
        Ok(()) => {
            println!("✅ Logged out");
        }
        Err(e) => {
            eprintln!("❌ Error logging out: {}", e);
            std::process::exit(1);
        }
    }
}

fn handle_status(session: &SessionManager) {
    match session.state() {
        SessionState::LoggedIn => println!("Logged in"),
        SessionState::LoggedOut => println!("Logged out"),
        SessionState::LoggingIn => println!("Login in progress"),
    }
}

async fn handle_health(session: &mut SessionManager) {
    match session.fetch_health().await {
        Ok(health) => {
            println!("✅ API is healthy");
            println!("   Status: {}", health.status);
            println!("   Timestamp: {}", health.timestamp);
        }
        Err(SessionError::Unauthenticated) => {
            eprintln!("❌ Authentication failed. You have been logged out; run `pulsegate-cli login` and try again.");
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("❌ Health check failed: {}", e);
            std::process::exit(1);
        }
    }
}

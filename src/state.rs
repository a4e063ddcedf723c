use pulsegate_config::{AuthConfig, ConfigError, CorsConfig, Environment, JwtConfig};

#[derive(Clone, Debug)]
pub struct AppState {
    pub jwt_config: JwtConfig,
    pub auth_config: AuthConfig,
    pub cors_config: CorsConfig,
}

/// Load and validate all configuration.
///
/// The signing secret and credential pair are read once here and shared
/// read-only by the issuer and the guard for the process lifetime.
pub fn init_app_state() -> Result<AppState, ConfigError> {
    let environment = Environment::from_env();

    let jwt_config = JwtConfig::from_env();
    jwt_config.validate(&environment)?;

    let auth_config = AuthConfig::from_env();
    auth_config.validate(&environment)?;

    Ok(AppState {
        jwt_config,
        auth_config,
        cors_config: CorsConfig::from_env(),
    })
}

use std::fmt;

/// Fatal configuration error raised during startup validation.
///
/// The server must refuse to serve traffic when one of these is returned;
/// there is no recovery path at runtime.
#[derive(Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// The JWT signing secret is unset or still the development default.
    InsecureJwtSecret,

    /// The admin credential pair is unset or still the development default.
    DefaultCredentials,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InsecureJwtSecret => {
                write!(f, "JWT_SECRET must be set in production environment")
            }
            Self::DefaultCredentials => {
                write!(
                    f,
                    "AUTH_USERNAME and AUTH_PASSWORD must be set in production environment"
                )
            }
        }
    }
}

impl std::error::Error for ConfigError {}

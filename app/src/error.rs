use std::fmt;

#[derive(Debug)]
pub enum DashboardError {
    Config(String),
    #[cfg(feature = "ssr")]
    Database(sea_orm::DbErr),
    /// A region reported zero registered vehicles, so its penetration ratio
    /// is undefined.
    ZeroVehicles {
        region: String,
    },
}

impl fmt::Display for DashboardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(msg) => write!(f, "Configuration error: {msg}"),
            #[cfg(feature = "ssr")]
            Self::Database(e) => write!(f, "Database error: {e}"),
            Self::ZeroVehicles { region } => write!(
                f,
                "Division by zero: region '{region}' has no registered vehicles"
            ),
        }
    }
}

impl std::error::Error for DashboardError {}

#[cfg(feature = "ssr")]
impl From<sea_orm::DbErr> for DashboardError {
    fn from(e: sea_orm::DbErr) -> Self {
        Self::Database(e)
    }
}

pub type Result<T> = std::result::Result<T, DashboardError>;

use app::cascade::{FilterError, Level};
use app::error::DashboardError;

#[test]
fn test_config_error_display() {
    let err = DashboardError::Config("Invalid TARGET_YEAR".to_string());
    assert_eq!(err.to_string(), "Configuration error: Invalid TARGET_YEAR");
}

#[test]
fn test_zero_vehicles_display_names_region() {
    let err = DashboardError::ZeroVehicles {
        region: "Sejong".to_string(),
    };
    assert_eq!(
        err.to_string(),
        "Division by zero: region 'Sejong' has no registered vehicles"
    );
}

#[test]
fn test_dashboard_error_is_std_error() {
    let err: Box<dyn std::error::Error> = Box::new(DashboardError::Config("x".to_string()));
    assert!(err.to_string().contains('x'));
}

#[test]
fn test_filter_error_display() {
    let err = FilterError::LevelNotReached(Level::Neighborhood);
    assert!(err.to_string().contains("Neighborhood"));

    let err = FilterError::UnknownChoice {
        level: Level::Top,
        value: "Atlantis".to_string(),
    };
    assert!(err.to_string().contains("Atlantis"));
}

#[cfg(feature = "ssr")]
mod ssr_tests {
    use super::*;
    use sea_orm::DbErr;

    #[test]
    fn test_database_error_from_db_err() {
        let err: DashboardError = DbErr::Custom("connection failed".to_string()).into();
        assert!(matches!(err, DashboardError::Database(_)));
        assert!(err.to_string().starts_with("Database error:"));
        assert!(err.to_string().contains("connection failed"));
    }
}

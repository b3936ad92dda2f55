use sea_orm::DatabaseConnection;
use tracing::debug;

use crate::common::DatabaseError;

/// Check database health by pinging a pooled connection
///
/// Used by the `/ready` probe.
pub async fn check_health(db: &DatabaseConnection) -> Result<(), DatabaseError> {
    debug!("Running database health check");

    db.ping()
        .await
        .map_err(|e| DatabaseError::HealthCheckFailed(e.to_string()))?;

    debug!("Database health check passed");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sql::{SqlConfig, connect_from_config};

    #[tokio::test]
    async fn test_check_health_on_live_connection() {
        let db = connect_from_config(SqlConfig::with_pool_size("sqlite::memory:", 1, 1))
            .await
            .unwrap();

        assert!(check_health(&db).await.is_ok());
    }

    #[tokio::test]
    async fn test_check_health_after_close_fails() {
        let db = connect_from_config(SqlConfig::with_pool_size("sqlite::memory:", 1, 1))
            .await
            .unwrap();
        let probe = db.clone();
        db.close().await.unwrap();

        let err = check_health(&probe).await.unwrap_err();
        assert!(matches!(err, DatabaseError::HealthCheckFailed(_)));
    }
}

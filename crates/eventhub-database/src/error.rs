//! Mapping of driver failures into [`AppError`].
//!
//! Driver messages are logged here and never copied into the returned
//! error message, so they cannot reach a client.

use std::future::Future;
use std::time::Duration;

use tracing::{error, warn};

use eventhub_core::error::{AppError, ErrorKind};
use eventhub_core::result::AppResult;

/// Convert a sqlx error into an application error.
pub fn map_sqlx_error(context: &'static str, err: sqlx::Error) -> AppError {
    let kind = match &err {
        sqlx::Error::PoolTimedOut => ErrorKind::StoreTimeout,
        sqlx::Error::Io(_)
        | sqlx::Error::Tls(_)
        | sqlx::Error::PoolClosed
        | sqlx::Error::WorkerCrashed => ErrorKind::StoreUnavailable,
        _ => ErrorKind::Internal,
    };
    error!(error = %err, %kind, "{context}");
    AppError::with_source(kind, context, err)
}

/// Whether the error is a unique-constraint violation.
pub fn is_unique_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db) if db.is_unique_violation())
}

/// Run a store operation under a deadline.
pub async fn timed<T, F>(limit: Duration, context: &'static str, op: F) -> AppResult<T>
where
    F: Future<Output = Result<T, sqlx::Error>>,
{
    match tokio::time::timeout(limit, op).await {
        Ok(result) => result.map_err(|e| map_sqlx_error(context, e)),
        Err(_) => {
            warn!(timeout_ms = limit.as_millis() as u64, "{context}: timed out");
            Err(AppError::store_timeout(context))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pool_timeout_maps_to_store_timeout() {
        let err = map_sqlx_error("Failed to find account", sqlx::Error::PoolTimedOut);
        assert_eq!(err.kind, ErrorKind::StoreTimeout);
        assert_eq!(err.message, "Failed to find account");
    }

    #[test]
    fn test_closed_pool_maps_to_unavailable() {
        let err = map_sqlx_error("Failed to insert event", sqlx::Error::PoolClosed);
        assert_eq!(err.kind, ErrorKind::StoreUnavailable);
    }

    #[tokio::test(start_paused = true)]
    async fn test_timed_expires() {
        let slow = async {
            tokio::time::sleep(Duration::from_secs(30)).await;
            Ok::<_, sqlx::Error>(())
        };
        let err = timed(Duration::from_secs(5), "Failed to list events", slow)
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::StoreTimeout);
    }

    #[tokio::test]
    async fn test_timed_passes_through() {
        let value = timed(Duration::from_secs(5), "noop", async { Ok::<_, sqlx::Error>(7) })
            .await
            .unwrap();
        assert_eq!(value, 7);
    }
}

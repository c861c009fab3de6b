use crate::{ClientError, Result};
use std::future::Future;
use tokio_util::sync::CancellationToken;

/// Run a client operation until it completes or `token` is cancelled.
///
/// On cancellation the operation future is dropped, which aborts the
/// in-flight HTTP exchange, and `ClientError::Cancelled` is returned.
///
/// ```rust,no_run
/// # async fn example(client: swis_rs::Client) -> swis_rs::Result<()> {
/// let token = swis_rs::CancellationToken::new();
/// let _uris = swis_rs::cancellable(
///     &token,
///     client.query_column("SELECT Uri FROM Orion.Nodes", &serde_json::json!({})),
/// )
/// .await?;
/// # Ok(())
/// # }
/// ```
pub async fn cancellable<T, F>(token: &CancellationToken, operation: F) -> Result<T>
where
    F: Future<Output = Result<T>>,
{
    tokio::select! {
        biased;
        _ = token.cancelled() => {
            tracing::debug!("SWIS request cancelled");
            Err(ClientError::Cancelled)
        }
        result = operation => result,
    }
}

//! Command execution helpers
//!
//! Every CLI command runs through [`execute_timed`] so its outcome is logged
//! with the same structured fields.

use std::future::Future;
use std::time::Instant;

use projboard_domain::Result as DomainResult;

use crate::utils::logging::log_command_execution;

/// Run a command, timing it and logging its outcome.
///
/// # Example
///
/// ```rust,ignore
/// execute_timed("projects::delete", || async {
///     ctx.projects.delete_project(&name).await
/// })
/// .await
/// ```
pub async fn execute_timed<F, Fut, T>(command_name: &str, command_fn: F) -> DomainResult<T>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = DomainResult<T>>,
{
    let start = Instant::now();

    let result = command_fn().await;

    log_command_execution(command_name, start.elapsed(), result.as_ref().err());
    result
}

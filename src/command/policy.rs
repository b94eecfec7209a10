//! On-error policy

use crate::config::OnError;
use crate::error::RunError;

/// Error to report for a run classified as failed, if the policy asks for one.
pub(crate) fn enforce(policy: OnError) -> Result<(), RunError> {
    match policy {
        OnError::Nothing => Ok(()),
        OnError::RaiseError => Err(RunError::Failed),
        OnError::ThrowError => Err(RunError::Thrown),
    }
}

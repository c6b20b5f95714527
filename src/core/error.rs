use thiserror::Error;

use crate::models::JobId;
use crate::services::StoreError;

/// Why a score or recommendation could not be computed
///
/// Callers at the API boundary collapse these into the neutral score or an
/// empty list; none of them is meant to reach an end user.
#[derive(Debug, Error)]
pub enum MatchError {
    #[error("job seeker profile not found")]
    ProfileMissing,

    #[error("job {0} not found")]
    JobNotFound(JobId),

    #[error("invalid scoring weight: {0}")]
    InvalidWeights(&'static str),

    #[error("store error: {0}")]
    Store(#[from] StoreError),
}

// robotex_core/src/errors.rs

use thiserror::Error;

/// Everything that can go wrong while configuring or running a camera.
///
/// Per-tick processing has no recoverable error path: inactive or
/// out-of-view objects are simply left out of the snapshot.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum VisionError {
    /// A geometry parameter was rejected. The previous configuration stays in effect.
    #[error("invalid parameter `{name}` = {value}: {reason}")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },

    /// A collaborator the camera cannot operate without is absent.
    #[error("missing collaborator: {0}")]
    MissingCollaborator(&'static str),
}

//! Error type for the image container.

use std;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors returned by the image façade and its access tokens.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An access was requested on an image that has not been `create`-d.
    #[error("image has not been initialized; call create2D/create3D first")]
    Uninitialized,

    /// `create2D`/`create3D` was called on an already-initialized image.
    #[error("image has already been initialized")]
    AlreadyInitialized,

    /// Geometry or type arguments were out of range.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A 2D access was requested on a 3D image or vice versa.
    #[error("dimension mismatch: image has {actual} dimensions, {requested} were requested")]
    DimensionMismatch { requested: u32, actual: u32 },

    /// An access was requested while an incompatible access was outstanding.
    #[error("access conflict: an incompatible access is already outstanding")]
    AccessConflict,

    /// A transfer primitive reported failure.
    #[error("device failure: {0}")]
    DeviceFailure(#[from] ocl::Error),
}

impl Error {
    pub(crate) fn invalid_argument<S: Into<String>>(desc: S) -> Error {
        Error::InvalidArgument(desc.into())
    }
}

//! A multi-backend, coherence-tracking N-dimensional image container for
//! OpenCL pipelines.
//!
//! An [`Image`] may simultaneously possess representations on several
//! physical backends: a host (CPU) linear buffer, and, for any number of
//! accelerator devices, a device buffer and a device-native 2D or 3D image
//! object. Callers never address a representation directly; instead they
//! acquire a scoped [`access`] token for the representation they need, and
//! the [`materializer`] lazily allocates it and brings it up to date with
//! whichever representation was last written, performing the minimum
//! transfer necessary.
//!
//! This crate does not enumerate accelerators or own a command queue; the
//! caller supplies a [`device::DeviceHandle`] wrapping its own [`ocl::Queue`]
//! for every device-side access.
//!
//! [`ocl::Queue`]: ocl::Queue

mod alloc;
mod bytes;
mod coherence;
mod geometry;
mod materializer;
#[cfg(test)]
mod tests;
mod transfer;

pub mod access;
pub mod device;
pub mod dtype;
pub mod error;
pub mod image;
pub mod padding;
pub mod representation;

pub use crate::device::DeviceHandle;
pub use crate::dtype::DataType;
pub use crate::error::{Error, Result};
pub use crate::image::{Image, Target};
pub use crate::materializer::AccessMode;

pub use crate::access::{DeviceBufferAccess, DeviceImage2DAccess, DeviceImage3DAccess, HostAccess};

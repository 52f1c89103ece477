//! Scoped access tokens (§4.6).
//!
//! Each token borrows the image for its lifetime (`&'img Image`), which
//! encodes "the token must not outlive the image" at compile time rather
//! than at runtime. `release()` is idempotent and also runs on `Drop`, so a
//! token left to go out of scope without an explicit `release()` call still
//! clears the image's outstanding-access bookkeeping.

use std::cell::{Cell, Ref, RefMut};

use ocl::Buffer;

use crate::device::DeviceHandle;
use crate::image::Image;
use crate::materializer::AccessMode;
use crate::representation::{DeviceImageStore, RepresentationKey};

/// `HostAccess`, `DeviceBufferAccess`, `DeviceImage2DAccess`, and
/// `DeviceImage3DAccess` all share this state-machine shape; this trait
/// gives `Image::release_access` one signature to call through on drop.
pub(crate) trait Token {
    fn release(&self);
}

macro_rules! release_on_drop {
    ($ty:ident) => {
        impl<'img> Drop for $ty<'img> {
            fn drop(&mut self) {
                self.release();
            }
        }
    };
}

/// A read or read-write access to an image's `HostBuffer` representation.
pub struct HostAccess<'img> {
    image: &'img Image,
    mode: AccessMode,
    released: Cell<bool>,
}

impl<'img> HostAccess<'img> {
    pub(crate) fn new(image: &'img Image, mode: AccessMode) -> HostAccess<'img> {
        HostAccess { image, mode, released: Cell::new(false) }
    }

    /// A read-only view of the host bytes.
    pub fn bytes(&self) -> Ref<'_, [u8]> {
        Ref::map(self.image.store_ref(), |s| {
            s.get(&RepresentationKey::HostBuffer).unwrap().as_host().as_slice()
        })
    }

    /// A mutable view of the host bytes.
    ///
    /// Panics if this token was acquired in `Read` mode; a read-only token
    /// has no business mutating the representation it was granted.
    pub fn bytes_mut(&self) -> RefMut<'_, [u8]> {
        assert_eq!(self.mode, AccessMode::ReadWrite, "HostAccess::bytes_mut: token is read-only");
        RefMut::map(self.image.store_mut(), |s| {
            s.get_mut(&RepresentationKey::HostBuffer).unwrap().as_host_mut().as_mut_slice()
        })
    }

    /// Releases this access early. Idempotent; also runs automatically on drop.
    pub fn release(&self) {
        Token::release(self);
    }
}

impl<'img> Token for HostAccess<'img> {
    fn release(&self) {
        if !self.released.replace(true) {
            self.image.release_access();
        }
    }
}

release_on_drop!(HostAccess);

/// A read or read-write access to an image's `DeviceBuffer(device)` representation.
pub struct DeviceBufferAccess<'img> {
    image: &'img Image,
    device: DeviceHandle,
    released: Cell<bool>,
}

impl<'img> DeviceBufferAccess<'img> {
    pub(crate) fn new(image: &'img Image, device: DeviceHandle) -> DeviceBufferAccess<'img> {
        DeviceBufferAccess { image, device, released: Cell::new(false) }
    }

    /// The underlying device buffer. Reads and writes against it are
    /// enqueued through its own command builder (`.cmd().read(..)` /
    /// `.cmd().write(..)`), which only require `&Buffer`, not `&mut`.
    pub fn buffer(&self) -> Ref<'_, Buffer<u8>> {
        let device = self.device.clone();
        Ref::map(self.image.store_ref(), move |s| {
            s.get(&RepresentationKey::DeviceBuffer(device)).unwrap().as_device_buffer()
        })
    }

    pub fn release(&self) {
        Token::release(self);
    }
}

impl<'img> Token for DeviceBufferAccess<'img> {
    fn release(&self) {
        if !self.released.replace(true) {
            self.image.release_access();
        }
    }
}

release_on_drop!(DeviceBufferAccess);

/// A read or read-write access to an image's `DeviceImage2D(device)` representation.
pub struct DeviceImage2DAccess<'img> {
    image: &'img Image,
    device: DeviceHandle,
    released: Cell<bool>,
}

impl<'img> DeviceImage2DAccess<'img> {
    pub(crate) fn new(image: &'img Image, device: DeviceHandle) -> DeviceImage2DAccess<'img> {
        DeviceImage2DAccess { image, device, released: Cell::new(false) }
    }

    pub fn image(&self) -> Ref<'_, DeviceImageStore> {
        let device = self.device.clone();
        Ref::map(self.image.store_ref(), move |s| {
            s.get(&RepresentationKey::DeviceImage2D(device)).unwrap().as_device_image()
        })
    }

    pub fn release(&self) {
        Token::release(self);
    }
}

impl<'img> Token for DeviceImage2DAccess<'img> {
    fn release(&self) {
        if !self.released.replace(true) {
            self.image.release_access();
        }
    }
}

release_on_drop!(DeviceImage2DAccess);

/// A read or read-write access to an image's `DeviceImage3D(device)` representation.
pub struct DeviceImage3DAccess<'img> {
    image: &'img Image,
    device: DeviceHandle,
    released: Cell<bool>,
}

impl<'img> DeviceImage3DAccess<'img> {
    pub(crate) fn new(image: &'img Image, device: DeviceHandle) -> DeviceImage3DAccess<'img> {
        DeviceImage3DAccess { image, device, released: Cell::new(false) }
    }

    pub fn image(&self) -> Ref<'_, DeviceImageStore> {
        let device = self.device.clone();
        Ref::map(self.image.store_ref(), move |s| {
            s.get(&RepresentationKey::DeviceImage3D(device)).unwrap().as_device_image()
        })
    }

    pub fn release(&self) {
        Token::release(self);
    }
}

impl<'img> Token for DeviceImage3DAccess<'img> {
    fn release(&self) {
        if !self.released.replace(true) {
            self.image.release_access();
        }
    }
}

release_on_drop!(DeviceImage3DAccess);

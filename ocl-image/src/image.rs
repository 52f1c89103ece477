//! The image façade (§4.1): geometry, the representation table, the
//! coherence tracker, and the outstanding-access latch that enforces I3/I4.

use std::cell::{Cell, Ref, RefCell, RefMut};
use std::collections::HashMap;

use log::trace;

use crate::access::{DeviceBufferAccess, DeviceImage2DAccess, DeviceImage3DAccess, HostAccess};
use crate::alloc;
use crate::coherence::CoherenceTracker;
use crate::device::DeviceHandle;
use crate::dtype::DataType;
use crate::error::{Error, Result};
use crate::geometry::{Dimensionality, Geometry};
use crate::materializer::{self, AccessMode};
use crate::representation::{RepresentationKey, RepresentationStore};
use crate::transfer;

/// Where an image's initial representation should be materialized.
#[derive(Clone, Debug)]
pub enum Target {
    Host,
    Device(DeviceHandle),
}

struct Outstanding {
    key: RepresentationKey,
    mode: AccessMode,
    count: u32,
}

/// The multi-backend, coherence-tracking image container.
///
/// An `Image` is constructed empty (`Image::new`) and locked into its final
/// geometry by exactly one `create2D`/`create3D` call. After that, callers
/// acquire scoped access tokens (§4.6) to read or write any backend
/// representation; the image lazily allocates and reconciles representations
/// as tokens are requested.
pub struct Image {
    geometry: Cell<Option<Geometry>>,
    store: RefCell<HashMap<RepresentationKey, RepresentationStore>>,
    tracker: RefCell<CoherenceTracker>,
    outstanding: RefCell<Option<Outstanding>>,
}

impl Image {
    /// An uninitialized image with no geometry and no representations.
    pub fn new() -> Image {
        Image {
            geometry: Cell::new(None),
            store: RefCell::new(HashMap::new()),
            tracker: RefCell::new(CoherenceTracker::new()),
            outstanding: RefCell::new(None),
        }
    }

    pub fn create2d(
        &self,
        width: usize,
        height: usize,
        dtype: DataType,
        components: usize,
        target: Target,
        data: Option<&[u8]>,
    ) -> Result<()> {
        self.create(width, height, 1, Dimensionality::Two, dtype, components, target, data)
    }

    pub fn create3d(
        &self,
        width: usize,
        height: usize,
        depth: usize,
        dtype: DataType,
        components: usize,
        target: Target,
        data: Option<&[u8]>,
    ) -> Result<()> {
        self.create(width, height, depth, Dimensionality::Three, dtype, components, target, data)
    }

    #[allow(clippy::too_many_arguments)]
    fn create(
        &self,
        width: usize,
        height: usize,
        depth: usize,
        dimensionality: Dimensionality,
        dtype: DataType,
        components: usize,
        target: Target,
        data: Option<&[u8]>,
    ) -> Result<()> {
        if self.geometry.get().is_some() {
            return Err(Error::AlreadyInitialized);
        }
        if width == 0 || height == 0 || depth == 0 {
            return Err(Error::invalid_argument("width, height, and depth must all be at least 1"));
        }
        if !(1..=4).contains(&components) {
            return Err(Error::invalid_argument(format!(
                "components must be in 1..=4, got {}",
                components
            )));
        }

        let geometry = Geometry { width, height, depth, components, dtype, dimensionality };
        if let Some(data) = data {
            if data.len() != geometry.host_bytes() {
                return Err(Error::invalid_argument(format!(
                    "data length {} does not match expected {} bytes",
                    data.len(),
                    geometry.host_bytes()
                )));
            }
        }

        let (key, representation) = match target {
            Target::Host => {
                let bytes = match data {
                    Some(data) => data.to_vec(),
                    None => alloc::host_buffer(&geometry),
                };
                (RepresentationKey::HostBuffer, RepresentationStore::Host(bytes))
            }
            Target::Device(device) => {
                let buf = alloc::device_buffer(device.queue(), &geometry)?;
                if let Some(data) = data {
                    transfer::host_to_device_buffer(device.queue(), data, &buf)?;
                }
                (RepresentationKey::DeviceBuffer(device), RepresentationStore::DeviceBuffer(buf))
            }
        };

        trace!("Image::create: initial representation {:?}", key);

        self.store.borrow_mut().insert(key.clone(), representation);
        self.tracker.borrow_mut().mark_present(key.clone());
        self.tracker.borrow_mut().set_up_to_date(&key, true);
        self.geometry.set(Some(geometry));
        Ok(())
    }

    pub fn get_image_access(&self, mode: AccessMode) -> Result<HostAccess<'_>> {
        self.acquire(RepresentationKey::HostBuffer, mode)?;
        Ok(HostAccess::new(self, mode))
    }

    pub fn get_opencl_buffer_access(
        &self,
        mode: AccessMode,
        device: DeviceHandle,
    ) -> Result<DeviceBufferAccess<'_>> {
        self.acquire(RepresentationKey::DeviceBuffer(device.clone()), mode)?;
        Ok(DeviceBufferAccess::new(self, device))
    }

    pub fn get_opencl_image_access_2d(
        &self,
        mode: AccessMode,
        device: DeviceHandle,
    ) -> Result<DeviceImage2DAccess<'_>> {
        self.require_dimensionality(Dimensionality::Two)?;
        self.acquire(RepresentationKey::DeviceImage2D(device.clone()), mode)?;
        Ok(DeviceImage2DAccess::new(self, device))
    }

    pub fn get_opencl_image_access_3d(
        &self,
        mode: AccessMode,
        device: DeviceHandle,
    ) -> Result<DeviceImage3DAccess<'_>> {
        self.require_dimensionality(Dimensionality::Three)?;
        self.acquire(RepresentationKey::DeviceImage3D(device.clone()), mode)?;
        Ok(DeviceImage3DAccess::new(self, device))
    }

    fn require_dimensionality(&self, expected: Dimensionality) -> Result<()> {
        let geometry = self.geometry().ok_or(Error::Uninitialized)?;
        if geometry.dimensionality != expected {
            return Err(Error::DimensionMismatch {
                requested: expected as u32,
                actual: geometry.dimensionality as u32,
            });
        }
        Ok(())
    }

    fn acquire(&self, key: RepresentationKey, mode: AccessMode) -> Result<()> {
        let geometry = self.geometry().ok_or(Error::Uninitialized)?;

        {
            let outstanding = self.outstanding.borrow();
            if let Some(o) = outstanding.as_ref() {
                let compatible = mode == AccessMode::Read && o.mode == AccessMode::Read && o.key == key;
                if !compatible {
                    return Err(Error::AccessConflict);
                }
            }
        }

        materializer::materialize(
            &mut self.store.borrow_mut(),
            &mut self.tracker.borrow_mut(),
            &geometry,
            &key,
            mode,
        )?;

        let mut outstanding = self.outstanding.borrow_mut();
        match outstanding.as_mut() {
            Some(o) if o.key == key => o.count += 1,
            _ => *outstanding = Some(Outstanding { key, mode, count: 1 }),
        }
        Ok(())
    }

    pub(crate) fn release_access(&self) {
        let mut outstanding = self.outstanding.borrow_mut();
        if let Some(o) = outstanding.as_mut() {
            o.count -= 1;
            if o.count == 0 {
                *outstanding = None;
            }
        }
    }

    pub(crate) fn store_ref(&self) -> Ref<'_, HashMap<RepresentationKey, RepresentationStore>> {
        self.store.borrow()
    }

    pub(crate) fn store_mut(&self) -> RefMut<'_, HashMap<RepresentationKey, RepresentationStore>> {
        self.store.borrow_mut()
    }

    fn geometry(&self) -> Option<Geometry> {
        self.geometry.get()
    }

    pub fn width(&self) -> Option<usize> {
        self.geometry().map(|g| g.width)
    }

    pub fn height(&self) -> Option<usize> {
        self.geometry().map(|g| g.height)
    }

    pub fn depth(&self) -> Option<usize> {
        self.geometry().map(|g| g.depth)
    }

    pub fn components(&self) -> Option<usize> {
        self.geometry().map(|g| g.components)
    }

    pub fn dtype(&self) -> Option<DataType> {
        self.geometry().map(|g| g.dtype)
    }

    /// 2 for a 2D image (`depth == 1`), 3 for a 3D image.
    pub fn dimensions(&self) -> Option<usize> {
        self.geometry().map(|g| match g.dimensionality {
            Dimensionality::Two => 2,
            Dimensionality::Three => 3,
        })
    }
}

impl Default for Image {
    fn default() -> Image {
        Image::new()
    }
}

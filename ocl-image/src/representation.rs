//! Representation keys and the concrete backing stores they address.

use ocl::{Buffer, Image, Queue};

use crate::bytes;
use crate::device::DeviceHandle;
use crate::dtype::DataType;
use crate::error::Result;

/// Identifies one backend-specific representation of an image's data.
///
/// At most one `HostBuffer` and at most one `DeviceBuffer`/`DeviceImage2D`/
/// `DeviceImage3D` per device handle may exist for a given image (enforced
/// by `representations` being keyed on this type).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub(crate) enum RepresentationKey {
    HostBuffer,
    DeviceBuffer(DeviceHandle),
    DeviceImage2D(DeviceHandle),
    DeviceImage3D(DeviceHandle),
}

/// One of the five monomorphized `ocl::Image<T>` instantiations this crate
/// switches on at materialization time, tagged with the padded channel
/// count the image was actually allocated with (4 in place of 3; unchanged
/// otherwise — see `crate::padding`).
pub struct DeviceImageStore {
    pub(crate) channels: usize,
    pub(crate) kind: DeviceImageKind,
}

pub(crate) enum DeviceImageKind {
    F32(Image<f32>),
    I8(Image<i8>),
    U8(Image<u8>),
    I16(Image<i16>),
    U16(Image<u16>),
}

macro_rules! for_each_kind {
    ($self:expr, $img:ident => $body:expr) => {
        match &$self.kind {
            DeviceImageKind::F32($img) => $body,
            DeviceImageKind::I8($img) => $body,
            DeviceImageKind::U8($img) => $body,
            DeviceImageKind::I16($img) => $body,
            DeviceImageKind::U16($img) => $body,
        }
    };
}

impl DeviceImageStore {
    /// The logical channel count this image was allocated with in the
    /// accelerator runtime (4 in place of 3 for `components == 3`; see
    /// `crate::padding`).
    pub fn channels(&self) -> usize {
        self.channels
    }

    pub fn dtype(&self) -> DataType {
        match self.kind {
            DeviceImageKind::F32(_) => DataType::F32,
            DeviceImageKind::I8(_) => DataType::I8,
            DeviceImageKind::U8(_) => DataType::U8,
            DeviceImageKind::I16(_) => DataType::I16,
            DeviceImageKind::U16(_) => DataType::U16,
        }
    }

    fn pixel_count(&self) -> usize {
        for_each_kind!(self, img => img.pixel_count())
    }

    /// Reads back every channel of the image (including the unspecified
    /// padding channel for `components = 3`) as raw bytes.
    ///
    /// Callers that allocated this image for `components == 3` must strip
    /// the padding channel themselves, e.g. via `crate::padding::unpack`.
    pub fn read_padded_bytes(&self, queue: &Queue) -> Result<Vec<u8>> {
        let n = self.pixel_count() * self.channels;

        let out = match &self.kind {
            DeviceImageKind::F32(img) => {
                let mut scalars = vec![0f32; n];
                img.read(&mut scalars).queue(queue).enq()?;
                let mut bytes = vec![0u8; n * std::mem::size_of::<f32>()];
                bytes::write_as_bytes(&scalars, &mut bytes);
                bytes
            }
            DeviceImageKind::I8(img) => {
                let mut scalars = vec![0i8; n];
                img.read(&mut scalars).queue(queue).enq()?;
                let mut bytes = vec![0u8; n];
                bytes::write_as_bytes(&scalars, &mut bytes);
                bytes
            }
            DeviceImageKind::U8(img) => {
                let mut scalars = vec![0u8; n];
                img.read(&mut scalars).queue(queue).enq()?;
                scalars
            }
            DeviceImageKind::I16(img) => {
                let mut scalars = vec![0i16; n];
                img.read(&mut scalars).queue(queue).enq()?;
                let mut bytes = vec![0u8; n * std::mem::size_of::<i16>()];
                bytes::write_as_bytes(&scalars, &mut bytes);
                bytes
            }
            DeviceImageKind::U16(img) => {
                let mut scalars = vec![0u16; n];
                img.read(&mut scalars).queue(queue).enq()?;
                let mut bytes = vec![0u8; n * std::mem::size_of::<u16>()];
                bytes::write_as_bytes(&scalars, &mut bytes);
                bytes
            }
        };

        Ok(out)
    }

    /// Writes `bytes` (already padded to `channels` per voxel) into every
    /// channel of the image.
    pub fn write_padded_bytes(&self, queue: &Queue, padded: &[u8]) -> Result<()> {
        match &self.kind {
            DeviceImageKind::F32(img) => {
                let scalars: Vec<f32> = bytes::cast_slice(padded);
                img.write(&scalars).queue(queue).enq()?;
            }
            DeviceImageKind::I8(img) => {
                let scalars: Vec<i8> = bytes::cast_slice(padded);
                img.write(&scalars).queue(queue).enq()?;
            }
            DeviceImageKind::U8(img) => {
                img.write(padded).queue(queue).enq()?;
            }
            DeviceImageKind::I16(img) => {
                let scalars: Vec<i16> = bytes::cast_slice(padded);
                img.write(&scalars).queue(queue).enq()?;
            }
            DeviceImageKind::U16(img) => {
                let scalars: Vec<u16> = bytes::cast_slice(padded);
                img.write(&scalars).queue(queue).enq()?;
            }
        }
        Ok(())
    }

    /// The underlying `ocl_core::Mem` handle, for enqueueing kernels that
    /// take this representation as an argument directly.
    pub fn as_core(&self) -> &ocl_core::Mem {
        for_each_kind!(self, img => img.as_core())
    }
}

/// The concrete storage backing one materialized representation.
pub(crate) enum RepresentationStore {
    Host(Vec<u8>),
    DeviceBuffer(Buffer<u8>),
    DeviceImage(DeviceImageStore),
}

impl RepresentationStore {
    pub(crate) fn as_host(&self) -> &Vec<u8> {
        match self {
            RepresentationStore::Host(v) => v,
            _ => unreachable!("representation key/store kind mismatch"),
        }
    }

    pub(crate) fn as_host_mut(&mut self) -> &mut Vec<u8> {
        match self {
            RepresentationStore::Host(v) => v,
            _ => unreachable!("representation key/store kind mismatch"),
        }
    }

    pub(crate) fn as_device_buffer(&self) -> &Buffer<u8> {
        match self {
            RepresentationStore::DeviceBuffer(b) => b,
            _ => unreachable!("representation key/store kind mismatch"),
        }
    }

    pub(crate) fn as_device_image(&self) -> &DeviceImageStore {
        match self {
            RepresentationStore::DeviceImage(i) => i,
            _ => unreachable!("representation key/store kind mismatch"),
        }
    }
}

//! First-materialization allocators for each representation kind.
//!
//! Allocation itself carries no data; callers populate the new
//! representation via `crate::transfer` immediately afterward.

use ocl::core::MemObjectType;
use ocl::{Buffer, Image, Queue, SpatialDims};

use crate::dtype::DataType;
use crate::error::Result;
use crate::geometry::{Dimensionality, Geometry};
use crate::padding;
use crate::representation::{DeviceImageKind, DeviceImageStore};

pub(crate) fn host_buffer(geometry: &Geometry) -> Vec<u8> {
    vec![0u8; geometry.host_bytes()]
}

pub(crate) fn device_buffer(queue: &Queue, geometry: &Geometry) -> Result<Buffer<u8>> {
    let buf = Buffer::<u8>::builder()
        .queue(queue.clone())
        .len(geometry.host_bytes())
        .build()?;
    Ok(buf)
}

pub(crate) fn device_image(queue: &Queue, geometry: &Geometry) -> Result<DeviceImageStore> {
    let channels = padding::padded_channels(geometry.components);
    let order = padding::channel_order(geometry.components);
    let image_type = match geometry.dimensionality {
        Dimensionality::Two => MemObjectType::Image2d,
        Dimensionality::Three => MemObjectType::Image3d,
    };
    let dims: SpatialDims = match geometry.dimensionality {
        Dimensionality::Two => SpatialDims::Two(geometry.width, geometry.height),
        Dimensionality::Three => SpatialDims::Three(geometry.width, geometry.height, geometry.depth),
    };

    macro_rules! build {
        ($t:ty, $variant:ident) => {{
            let img = Image::<$t>::builder()
                .queue(queue.clone())
                .image_type(image_type)
                .dims(dims)
                .channel_order(order)
                .channel_data_type(geometry.dtype.channel_data_type())
                .build()?;
            DeviceImageKind::$variant(img)
        }};
    }

    let kind = match geometry.dtype {
        DataType::F32 => build!(f32, F32),
        DataType::I8 => build!(i8, I8),
        DataType::U8 => build!(u8, U8),
        DataType::I16 => build!(i16, I16),
        DataType::U16 => build!(u16, U16),
    };

    Ok(DeviceImageStore { channels, kind })
}

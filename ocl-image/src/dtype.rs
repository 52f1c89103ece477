//! The per-voxel scalar type descriptor and its type-switched helpers.

use ocl::enums::ImageChannelDataType;

/// Per-voxel scalar type.
///
/// `Image` stores this as a plain runtime tag rather than a generic
/// parameter: geometry and type are both fixed at `create` time and the
/// façade itself is never parameterized over `T`. Device-image
/// representations dispatch on this tag to the matching monomorphized
/// `ocl::Image<T>` (see `representation::DeviceImageStore`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DataType {
    F32,
    I8,
    U8,
    I16,
    U16,
}

impl DataType {
    /// Size, in bytes, of one scalar of this type.
    pub fn element_bytes(self) -> usize {
        match self {
            DataType::F32 => 4,
            DataType::I8 => 1,
            DataType::U8 => 1,
            DataType::I16 => 2,
            DataType::U16 => 2,
        }
    }

    /// The `ocl` channel-format tag a device image allocated with this
    /// scalar type must use.
    pub fn channel_data_type(self) -> ImageChannelDataType {
        match self {
            DataType::F32 => ImageChannelDataType::Float,
            DataType::I8 => ImageChannelDataType::SignedInt8,
            DataType::U8 => ImageChannelDataType::UnsignedInt8,
            DataType::I16 => ImageChannelDataType::SignedInt16,
            DataType::U16 => ImageChannelDataType::UnsignedInt16,
        }
    }
}

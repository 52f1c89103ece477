//! Fixed, creation-time geometry (§3).

use crate::dtype::DataType;

/// Whether an image is addressed as a 2D or 3D device image. Derived from
/// `depth`, stored because several operations reject the wrong one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Dimensionality {
    Two = 2,
    Three = 3,
}

/// Geometry attributes fixed at `create` time (I5). Never mutated after
/// `Image::create2D`/`create3D` succeeds.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Geometry {
    pub(crate) width: usize,
    pub(crate) height: usize,
    pub(crate) depth: usize,
    pub(crate) components: usize,
    pub(crate) dtype: DataType,
    pub(crate) dimensionality: Dimensionality,
}

impl Geometry {
    pub(crate) fn voxel_count(&self) -> usize {
        self.width * self.height * self.depth
    }

    pub(crate) fn scalar_count(&self) -> usize {
        self.voxel_count() * self.components
    }

    pub(crate) fn host_bytes(&self) -> usize {
        self.scalar_count() * self.dtype.element_bytes()
    }
}

//! Scalar <-> byte reinterpretation used at the device-image boundary.
//!
//! Buffers and host storage are always `Vec<u8>`/`ocl::Buffer<u8>`; device
//! images require a Rust type matching their channel format. These helpers
//! convert between the two views without an element-by-element copy loop.

/// Reinterprets `bytes` as a slice of `T`.
///
/// `T` is always one of the five plain scalar types named by `DataType`, all
/// of which have trivial (no padding, no drop glue) representations, so a
/// reinterpreting cast is sound as long as the byte length is an exact
/// multiple of `size_of::<T>()`.
pub(crate) fn cast_slice<T: Copy>(bytes: &[u8]) -> Vec<T> {
    let elem = std::mem::size_of::<T>();
    debug_assert_eq!(bytes.len() % elem, 0, "byte slice not a multiple of element size");
    let len = bytes.len() / elem;
    let mut out = Vec::<T>::with_capacity(len);
    unsafe {
        std::ptr::copy_nonoverlapping(bytes.as_ptr(), out.as_mut_ptr() as *mut u8, bytes.len());
        out.set_len(len);
    }
    out
}

/// Reinterprets a slice of `T` as bytes, writing into `dst`.
pub(crate) fn write_as_bytes<T: Copy>(src: &[T], dst: &mut [u8]) {
    let byte_len = src.len() * std::mem::size_of::<T>();
    debug_assert_eq!(byte_len, dst.len());
    unsafe {
        std::ptr::copy_nonoverlapping(src.as_ptr() as *const u8, dst.as_mut_ptr(), byte_len);
    }
}

//! Low-level data movement between two already-allocated representations
//! (§4.3). These functions never allocate and never touch the coherence
//! tracker; `materializer` is the only caller.
//!
//! Buffer<->image transfers route through a transient host byte buffer
//! rather than a direct device-side `clEnqueueCopyBufferToImage`/
//! `clEnqueueCopyImageToBuffer`. The high-level equivalent
//! (`BufferCmd::copy_to_image`) is unimplemented in this build of `ocl`
//! (its `enq()` falls through to `unimplemented!()`), and the lower-level
//! `ocl_core::enqueue_copy_buffer_to_image`/`enqueue_copy_image_to_buffer`
//! functions are bounded by `AsMem`/`MemCmdAll`, which this build's `ocl-core`
//! does not actually define. Going through `Buffer::read`/`write` and
//! `Image::read`/`write` avoids both gaps at the cost of an extra host
//! round trip per same-device buffer<->image transfer.

use ocl::{Buffer, Queue};

use crate::error::Result;
use crate::padding;
use crate::representation::DeviceImageStore;

/// Copies `src` (tightly packed, `components` wide) into `dst` in full.
pub(crate) fn host_to_device_buffer(queue: &Queue, src: &[u8], dst: &Buffer<u8>) -> Result<()> {
    dst.write(src).queue(queue).enq()?;
    Ok(())
}

/// Reads the full contents of `src` back to a tightly packed host buffer.
pub(crate) fn device_buffer_to_host(queue: &Queue, src: &Buffer<u8>, len: usize) -> Result<Vec<u8>> {
    let mut out = vec![0u8; len];
    src.read(&mut out).queue(queue).enq()?;
    Ok(out)
}

/// Copies `src`'s contents into `dst`, padding from `components` to
/// `dst.channels` per voxel as needed.
pub(crate) fn device_buffer_to_device_image(
    queue: &Queue,
    src: &Buffer<u8>,
    src_len: usize,
    components: usize,
    element_bytes: usize,
    dst: &DeviceImageStore,
) -> Result<()> {
    let mut packed = vec![0u8; src_len];
    src.read(&mut packed).queue(queue).enq()?;
    let padded = padding::pack(&packed, components, element_bytes);
    dst.write_padded_bytes(queue, &padded)
}

/// Copies `src`'s contents into `dst`, stripping `src.channels` down to
/// `components` per voxel as needed.
pub(crate) fn device_image_to_device_buffer(
    queue: &Queue,
    src: &DeviceImageStore,
    components: usize,
    element_bytes: usize,
    dst: &Buffer<u8>,
) -> Result<()> {
    let padded = src.read_padded_bytes(queue)?;
    let packed = padding::unpack(&padded, components, element_bytes);
    dst.write(&packed).queue(queue).enq()?;
    Ok(())
}

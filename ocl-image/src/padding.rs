//! 3-to-4 channel padding for device images (§4.5).
//!
//! Accelerator image formats have no native 3-channel layout, so
//! `DeviceImage2D`/`DeviceImage3D` representations with `components == 3`
//! are always allocated with 4 channels. These helpers convert between the
//! tightly-packed 3-channel byte layout buffers use and the padded
//! 4-channel layout images use.

use ocl::enums::ImageChannelOrder;

/// The number of channels a device image is actually allocated with for a
/// given logical component count. Only `components == 3` is widened.
pub(crate) fn padded_channels(components: usize) -> usize {
    if components == 3 {
        4
    } else {
        components
    }
}

/// The channel layout a device image is allocated with for a given logical
/// component count. `components == 3` shares `Rgba` with `components == 4`;
/// the fourth channel is simply left unused.
pub(crate) fn channel_order(components: usize) -> ImageChannelOrder {
    match components {
        1 => ImageChannelOrder::R,
        2 => ImageChannelOrder::Rg,
        3 | 4 => ImageChannelOrder::Rgba,
        n => unreachable!("components out of range: {}", n),
    }
}

/// Packs a tightly-packed `components`-wide byte buffer into a
/// `padded_channels(components)`-wide buffer, per voxel. The padding
/// channel's bytes are left zeroed (the protocol only guarantees them
/// unspecified, so any fixed value is a valid implementation).
pub fn pack(src: &[u8], components: usize, element_bytes: usize) -> Vec<u8> {
    if components != 3 {
        return src.to_vec();
    }

    let voxel_bytes = components * element_bytes;
    let padded_voxel_bytes = 4 * element_bytes;
    debug_assert_eq!(src.len() % voxel_bytes, 0);
    let voxel_count = src.len() / voxel_bytes;

    let mut out = vec![0u8; voxel_count * padded_voxel_bytes];
    for v in 0..voxel_count {
        let src_off = v * voxel_bytes;
        let dst_off = v * padded_voxel_bytes;
        out[dst_off..dst_off + voxel_bytes].copy_from_slice(&src[src_off..src_off + voxel_bytes]);
    }
    out
}

/// Strips the padding channel back out of a 4-channel buffer, yielding a
/// tightly-packed `components`-wide buffer.
pub fn unpack(padded: &[u8], components: usize, element_bytes: usize) -> Vec<u8> {
    if components != 3 {
        return padded.to_vec();
    }

    let voxel_bytes = components * element_bytes;
    let padded_voxel_bytes = 4 * element_bytes;
    debug_assert_eq!(padded.len() % padded_voxel_bytes, 0);
    let voxel_count = padded.len() / padded_voxel_bytes;

    let mut out = vec![0u8; voxel_count * voxel_bytes];
    for v in 0..voxel_count {
        let src_off = v * padded_voxel_bytes;
        let dst_off = v * voxel_bytes;
        out[dst_off..dst_off + voxel_bytes]
            .copy_from_slice(&padded[src_off..src_off + voxel_bytes]);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pack_then_unpack_round_trips_for_three_components() {
        // Two f32 voxels, 3 components each.
        let src: Vec<u8> = (0u8..24).collect();
        let padded = pack(&src, 3, 4);
        assert_eq!(padded.len(), 2 * 4 * 4);
        let back = unpack(&padded, 3, 4);
        assert_eq!(back, src);
    }

    #[test]
    fn non_three_component_counts_pass_through_unchanged() {
        for components in [1usize, 2, 4] {
            let src: Vec<u8> = (0u8..(components as u8 * 4)).collect();
            assert_eq!(pack(&src, components, 1), src);
            assert_eq!(unpack(&src, components, 1), src);
        }
    }

    #[test]
    fn padding_channel_does_not_corrupt_packed_channels() {
        let src = vec![1u8, 2, 3, 4, 5, 6];
        let padded = pack(&src, 3, 1);
        assert_eq!(padded, vec![1, 2, 3, 0, 4, 5, 6, 0]);
    }

    #[test]
    fn three_and_four_components_share_a_channel_order() {
        assert_eq!(channel_order(3), channel_order(4));
        assert_eq!(padded_channels(4), 4);
    }
}

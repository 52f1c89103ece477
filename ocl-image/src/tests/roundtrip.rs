//! Scenarios 3-6 (§8): round-trip laws across host, device-buffer and
//! device-image representations, including the read-write mutate-in-place
//! path that forces the materializer to reconcile a stale representation.

use crate::dtype::DataType;
use crate::image::{Image, Target};
use crate::materializer::AccessMode;
use crate::padding;

const TYPES: [DataType; 5] =
    [DataType::F32, DataType::I8, DataType::U8, DataType::I16, DataType::U16];

fn double_in_place(bytes: &mut [u8], dtype: DataType) {
    match dtype {
        DataType::F32 => {
            for chunk in bytes.chunks_mut(4) {
                let v = f32::from_ne_bytes(chunk.try_into().unwrap());
                chunk.copy_from_slice(&(v * 2.0).to_ne_bytes());
            }
        }
        DataType::I8 => {
            for b in bytes.iter_mut() {
                *b = (*b as i8).wrapping_mul(2) as u8;
            }
        }
        DataType::U8 => {
            for b in bytes.iter_mut() {
                *b = b.wrapping_mul(2);
            }
        }
        DataType::I16 => {
            for chunk in bytes.chunks_mut(2) {
                let v = i16::from_ne_bytes(chunk.try_into().unwrap());
                chunk.copy_from_slice(&v.wrapping_mul(2).to_ne_bytes());
            }
        }
        DataType::U16 => {
            for chunk in bytes.chunks_mut(2) {
                let v = u16::from_ne_bytes(chunk.try_into().unwrap());
                chunk.copy_from_slice(&v.wrapping_mul(2).to_ne_bytes());
            }
        }
    }
}

#[test]
fn host_create_then_device_buffer_read_matches_source_data_2d() {
    let device = super::device_handle();

    for &dtype in TYPES.iter() {
        for components in 1..=4usize {
            let image = Image::new();
            let host_bytes = 256 * 512 * components * dtype.element_bytes();
            let data = super::random_bytes(host_bytes);

            image
                .create2d(256, 512, dtype, components, Target::Host, Some(&data))
                .unwrap();

            let access = image
                .get_opencl_buffer_access(AccessMode::Read, device.clone())
                .unwrap();
            let mut readback = vec![0u8; host_bytes];
            access.buffer().read(&mut readback).queue(device.queue()).enq().unwrap();
            assert_eq!(readback, data, "dtype={:?} components={}", dtype, components);
        }
    }
}

#[test]
fn device_create_then_host_read_matches_source_data_3d() {
    let device = super::device_handle();

    for &dtype in TYPES.iter() {
        for components in 1..=4usize {
            let image = Image::new();
            let host_bytes = 40 * 64 * 64 * components * dtype.element_bytes();
            let data = super::random_bytes(host_bytes);

            image
                .create3d(40, 64, 64, dtype, components, Target::Device(device.clone()), Some(&data))
                .unwrap();

            let access = image.get_image_access(AccessMode::Read).unwrap();
            assert_eq!(&*access.bytes(), data.as_slice(), "dtype={:?} components={}", dtype, components);
        }
    }
}

#[test]
fn device_write_then_device_buffer_and_image_observe_the_write_2d() {
    let device = super::device_handle();

    for &dtype in TYPES.iter() {
        for components in 1..=4usize {
            let image = Image::new();
            let host_bytes = 256 * 512 * components * dtype.element_bytes();
            let data = super::random_bytes(host_bytes);

            image
                .create2d(256, 512, dtype, components, Target::Device(device.clone()), Some(&data))
                .unwrap();

            let mut doubled = data.clone();
            {
                let access = image.get_image_access(AccessMode::ReadWrite).unwrap();
                let mut bytes = access.bytes_mut();
                double_in_place(&mut bytes, dtype);
                doubled.copy_from_slice(&bytes);
            }

            {
                let access = image
                    .get_opencl_buffer_access(AccessMode::Read, device.clone())
                    .unwrap();
                let mut readback = vec![0u8; host_bytes];
                access.buffer().read(&mut readback).queue(device.queue()).enq().unwrap();
                assert_eq!(readback, doubled, "buffer dtype={:?} components={}", dtype, components);
            }

            {
                let access = image
                    .get_opencl_image_access_2d(AccessMode::Read, device.clone())
                    .unwrap();
                let padded = access.image().read_padded_bytes(device.queue()).unwrap();
                let unpadded = padding::unpack(&padded, components, dtype.element_bytes());
                assert_eq!(unpadded, doubled, "image dtype={:?} components={}", dtype, components);
            }
        }
    }
}

#[test]
fn device_write_then_device_buffer_and_image_observe_the_write_3d() {
    let device = super::device_handle();

    for &dtype in TYPES.iter() {
        for components in 1..=4usize {
            let image = Image::new();
            let host_bytes = 40 * 40 * 40 * components * dtype.element_bytes();
            let data = super::random_bytes(host_bytes);

            image
                .create3d(40, 40, 40, dtype, components, Target::Device(device.clone()), Some(&data))
                .unwrap();

            let mut doubled = data.clone();
            {
                let access = image.get_image_access(AccessMode::ReadWrite).unwrap();
                let mut bytes = access.bytes_mut();
                double_in_place(&mut bytes, dtype);
                doubled.copy_from_slice(&bytes);
            }

            let access = image
                .get_opencl_buffer_access(AccessMode::Read, device.clone())
                .unwrap();
            let mut readback = vec![0u8; host_bytes];
            access.buffer().read(&mut readback).queue(device.queue()).enq().unwrap();
            assert_eq!(readback, doubled, "dtype={:?} components={}", dtype, components);
        }
    }
}

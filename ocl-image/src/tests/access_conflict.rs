//! I3/I4 (§3) and the `DimensionMismatch` boundary behaviour (§8).

use crate::dtype::DataType;
use crate::error::Error;
use crate::image::{Image, Target};
use crate::materializer::AccessMode;

#[test]
fn concurrent_read_write_access_is_rejected() {
    let image = Image::new();
    image.create2d(8, 8, DataType::U8, 1, Target::Host, None).unwrap();

    let _read = image.get_image_access(AccessMode::Read).unwrap();
    let conflict = image.get_image_access(AccessMode::ReadWrite);
    assert!(matches!(conflict, Err(Error::AccessConflict)));
}

#[test]
fn two_read_accesses_to_the_same_representation_are_allowed() {
    let image = Image::new();
    image.create2d(8, 8, DataType::U8, 1, Target::Host, None).unwrap();

    let first = image.get_image_access(AccessMode::Read).unwrap();
    let second = image.get_image_access(AccessMode::Read).unwrap();
    drop(first);
    drop(second);

    // Both released; a fresh read-write access should now succeed.
    let _rw = image.get_image_access(AccessMode::ReadWrite).unwrap();
}

#[test]
fn releasing_a_token_allows_the_next_access_to_proceed() {
    let image = Image::new();
    image.create2d(8, 8, DataType::U8, 1, Target::Host, None).unwrap();

    {
        let access = image.get_image_access(AccessMode::ReadWrite).unwrap();
        access.release();
        // Explicit release is idempotent; dropping afterward must not panic.
    }

    let _next = image.get_image_access(AccessMode::Read).unwrap();
}

#[test]
fn two_dimensional_image_access_on_a_three_dimensional_image_fails() {
    let device = super::device_handle();
    let image = Image::new();
    image
        .create3d(8, 8, 8, DataType::U8, 1, Target::Device(device.clone()), None)
        .unwrap();

    let result = image.get_opencl_image_access_2d(AccessMode::Read, device);
    assert!(matches!(result, Err(Error::DimensionMismatch { requested: 2, actual: 3 })));
}

#[test]
fn three_dimensional_image_access_on_a_two_dimensional_image_fails() {
    let device = super::device_handle();
    let image = Image::new();
    image
        .create2d(8, 8, DataType::U8, 1, Target::Device(device.clone()), None)
        .unwrap();

    let result = image.get_opencl_image_access_3d(AccessMode::Read, device);
    assert!(matches!(result, Err(Error::DimensionMismatch { requested: 3, actual: 2 })));
}

//! Scenarios 1-2 (§8): geometry getters, and the boundary behaviours that
//! don't require a real device (`AlreadyInitialized`, `InvalidArgument`).

use crate::dtype::DataType;
use crate::error::Error;
use crate::image::{Image, Target};
use crate::materializer::AccessMode;

#[test]
fn create2d_host_reports_expected_geometry() {
    let image = Image::new();
    image.create2d(256, 512, DataType::F32, 1, Target::Host, None).unwrap();

    assert_eq!(image.width(), Some(256));
    assert_eq!(image.height(), Some(512));
    assert_eq!(image.depth(), Some(1));
    assert_eq!(image.components(), Some(1));
    assert_eq!(image.dtype(), Some(DataType::F32));
    assert_eq!(image.dimensions(), Some(2));
}

#[test]
fn create3d_host_reports_expected_geometry() {
    let image = Image::new();
    image.create3d(256, 512, 45, DataType::I8, 2, Target::Host, None).unwrap();

    assert_eq!(image.width(), Some(256));
    assert_eq!(image.height(), Some(512));
    assert_eq!(image.depth(), Some(45));
    assert_eq!(image.components(), Some(2));
    assert_eq!(image.dtype(), Some(DataType::I8));
    assert_eq!(image.dimensions(), Some(3));
}

#[test]
fn second_create_fails_with_already_initialized() {
    let image = Image::new();
    image.create2d(8, 8, DataType::U8, 1, Target::Host, None).unwrap();

    let second = image.create2d(8, 8, DataType::U8, 1, Target::Host, None);
    assert!(matches!(second, Err(Error::AlreadyInitialized)));
}

#[test]
fn zero_dimension_fails_with_invalid_argument() {
    let image = Image::new();
    let result = image.create2d(0, 8, DataType::U8, 1, Target::Host, None);
    assert!(matches!(result, Err(Error::InvalidArgument(_))));
}

#[test]
fn out_of_range_components_fails_with_invalid_argument() {
    let image = Image::new();
    let result = image.create2d(8, 8, DataType::U8, 5, Target::Host, None);
    assert!(matches!(result, Err(Error::InvalidArgument(_))));
}

#[test]
fn access_on_uninitialized_image_fails() {
    let image = Image::new();
    let result = image.get_image_access(AccessMode::Read);
    assert!(matches!(result, Err(Error::Uninitialized)));
}

#[test]
fn mismatched_data_length_fails_with_invalid_argument() {
    let image = Image::new();
    let data = vec![0u8; 3];
    let result = image.create2d(8, 8, DataType::U8, 1, Target::Host, Some(&data));
    assert!(matches!(result, Err(Error::InvalidArgument(_))));
}

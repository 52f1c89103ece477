//! Lazy materialization and coherence reconciliation (§4.4).

use std::collections::HashMap;

use log::{debug, trace, warn};

use crate::alloc;
use crate::coherence::CoherenceTracker;
use crate::error::Result;
use crate::geometry::Geometry;
use crate::representation::{RepresentationKey, RepresentationStore};
use crate::transfer;

/// Read or read-write intent for an access acquisition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AccessMode {
    Read,
    ReadWrite,
}

/// Ensures `key` is present and up-to-date in `store`, then flips flags in
/// `tracker` per `mode`. This is the only place flag mutation and transfer
/// logic meet; callers (the access-token constructors in `access.rs`) never
/// touch the tracker directly.
pub(crate) fn materialize(
    store: &mut HashMap<RepresentationKey, RepresentationStore>,
    tracker: &mut CoherenceTracker,
    geometry: &Geometry,
    key: &RepresentationKey,
    mode: AccessMode,
) -> Result<()> {
    ensure_present(store, tracker, geometry, key)?;
    ensure_up_to_date(store, tracker, geometry, key)?;

    match mode {
        AccessMode::Read => {
            tracker.set_up_to_date(key, true);
        }
        AccessMode::ReadWrite => {
            tracker.set_up_to_date(key, true);
            tracker.invalidate_others_except(key);
        }
    }

    Ok(())
}

fn ensure_present(
    store: &mut HashMap<RepresentationKey, RepresentationStore>,
    tracker: &mut CoherenceTracker,
    geometry: &Geometry,
    key: &RepresentationKey,
) -> Result<()> {
    if tracker.is_present(key) {
        return Ok(());
    }

    trace!("materializer: allocating {:?}", key);

    let allocated = match key {
        RepresentationKey::HostBuffer => RepresentationStore::Host(alloc::host_buffer(geometry)),
        RepresentationKey::DeviceBuffer(device) => {
            let buf = alloc::device_buffer(device.queue(), geometry).map_err(|e| {
                warn!("materializer: device buffer allocation failed: {:?}", e);
                e
            })?;
            RepresentationStore::DeviceBuffer(buf)
        }
        RepresentationKey::DeviceImage2D(device) | RepresentationKey::DeviceImage3D(device) => {
            let img = alloc::device_image(device.queue(), geometry).map_err(|e| {
                warn!("materializer: device image allocation failed: {:?}", e);
                e
            })?;
            RepresentationStore::DeviceImage(img)
        }
    };

    store.insert(key.clone(), allocated);
    tracker.mark_present(key.clone());
    Ok(())
}

fn ensure_up_to_date(
    store: &mut HashMap<RepresentationKey, RepresentationStore>,
    tracker: &mut CoherenceTracker,
    geometry: &Geometry,
    key: &RepresentationKey,
) -> Result<()> {
    if tracker.is_up_to_date(key) {
        return Ok(());
    }

    let source = tracker
        .any_up_to_date()
        .expect("I2: some representation must be up-to-date once any is present");

    debug!("materializer: reconciling {:?} from source {:?}", key, source);

    run_transfer(store, tracker, geometry, &source, key)?;
    tracker.set_up_to_date(key, true);
    Ok(())
}

/// Runs the minimum composite transfer `source -> target`.
///
/// Two shapes are direct (a single `crate::transfer` call): host<->device
/// buffer, and same-device buffer<->image. Every other pair (host<->device
/// image, or anything spanning two different devices) is reduced to a walk
/// through `HostBuffer`, consistent with `H <-> DI` never being implemented
/// as a direct primitive (§9).
fn run_transfer(
    store: &mut HashMap<RepresentationKey, RepresentationStore>,
    tracker: &mut CoherenceTracker,
    geometry: &Geometry,
    source: &RepresentationKey,
    target: &RepresentationKey,
) -> Result<()> {
    use RepresentationKey::*;

    match (source, target) {
        (HostBuffer, DeviceBuffer(device)) => host_to_buffer(store, device.queue(), target),
        (DeviceBuffer(device), HostBuffer) => buffer_to_host(store, device.queue(), geometry, source),
        (DeviceBuffer(sd), DeviceImage2D(td)) | (DeviceBuffer(sd), DeviceImage3D(td)) if sd == td => {
            buffer_to_image(store, sd.queue(), geometry, source, target)
        }
        (DeviceImage2D(sd), DeviceBuffer(td)) | (DeviceImage3D(sd), DeviceBuffer(td)) if sd == td => {
            image_to_buffer(store, sd.queue(), geometry, source, target)
        }
        _ => {
            trace!("materializer: routing {:?} -> {:?} via HostBuffer", source, target);
            ensure_present(store, tracker, geometry, &HostBuffer)?;

            match source {
                HostBuffer => {}
                DeviceBuffer(device) => {
                    buffer_to_host(store, device.queue(), geometry, source)?;
                }
                DeviceImage2D(device) | DeviceImage3D(device) => {
                    let staging = DeviceBuffer(device.clone());
                    ensure_present(store, tracker, geometry, &staging)?;
                    image_to_buffer(store, device.queue(), geometry, source, &staging)?;
                    buffer_to_host(store, device.queue(), geometry, &staging)?;
                }
            }
            tracker.set_up_to_date(&HostBuffer, true);

            match target {
                HostBuffer => Ok(()),
                DeviceBuffer(device) => host_to_buffer(store, device.queue(), target),
                DeviceImage2D(device) | DeviceImage3D(device) => {
                    let staging = DeviceBuffer(device.clone());
                    ensure_present(store, tracker, geometry, &staging)?;
                    host_to_buffer(store, device.queue(), &staging)?;
                    tracker.set_up_to_date(&staging, true);
                    buffer_to_image(store, device.queue(), geometry, &staging, target)
                }
            }
        }
    }
}

fn host_to_buffer(
    store: &mut HashMap<RepresentationKey, RepresentationStore>,
    queue: &ocl::Queue,
    target: &RepresentationKey,
) -> Result<()> {
    let host_bytes = store.get(&RepresentationKey::HostBuffer).unwrap().as_host().clone();
    let dst = store.get(target).unwrap().as_device_buffer();
    transfer::host_to_device_buffer(queue, &host_bytes, dst)
}

fn buffer_to_host(
    store: &mut HashMap<RepresentationKey, RepresentationStore>,
    queue: &ocl::Queue,
    geometry: &Geometry,
    source: &RepresentationKey,
) -> Result<()> {
    let bytes = {
        let src = store.get(source).unwrap().as_device_buffer();
        transfer::device_buffer_to_host(queue, src, geometry.host_bytes())?
    };
    store.get_mut(&RepresentationKey::HostBuffer).unwrap().as_host_mut().copy_from_slice(&bytes);
    Ok(())
}

fn buffer_to_image(
    store: &mut HashMap<RepresentationKey, RepresentationStore>,
    queue: &ocl::Queue,
    geometry: &Geometry,
    source: &RepresentationKey,
    target: &RepresentationKey,
) -> Result<()> {
    let src = store.get(source).unwrap().as_device_buffer();
    let dst = store.get(target).unwrap().as_device_image();
    transfer::device_buffer_to_device_image(
        queue,
        src,
        geometry.host_bytes(),
        geometry.components,
        geometry.dtype.element_bytes(),
        dst,
    )
}

fn image_to_buffer(
    store: &mut HashMap<RepresentationKey, RepresentationStore>,
    queue: &ocl::Queue,
    geometry: &Geometry,
    source: &RepresentationKey,
    target: &RepresentationKey,
) -> Result<()> {
    let src = store.get(source).unwrap().as_device_image();
    let dst = store.get(target).unwrap().as_device_buffer();
    transfer::device_image_to_device_buffer(
        queue,
        src,
        geometry.components,
        geometry.dtype.element_bytes(),
        dst,
    )
}

//! The device-manager collaborator this crate consumes but does not own.

use std::hash::{Hash, Hasher};

use ocl::{Context, Queue};

/// Opaque, hashable identity of an accelerator plus its command queue.
///
/// `ocl::Device` itself derives `PartialEq`/`Eq` but not `Hash`, and the
/// representation table needs a hashable key per device. Rather than
/// enumerate and own devices itself, this crate takes `DeviceHandle` as an
/// externally injected dependency: the caller already has an `ocl::Context`
/// and `ocl::Queue` from its own device-manager layer and assigns the `id`
/// that distinguishes one accelerator from another.
#[derive(Clone, Debug)]
pub struct DeviceHandle {
    id: u64,
    queue: Queue,
}

impl DeviceHandle {
    /// Wraps `queue` under the caller-assigned identity `id`.
    ///
    /// Two `DeviceHandle`s are considered the same device iff their `id`s
    /// match; the queue itself is not compared.
    pub fn new(id: u64, queue: Queue) -> DeviceHandle {
        DeviceHandle { id, queue }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn queue(&self) -> &Queue {
        &self.queue
    }

    pub fn context(&self) -> Context {
        self.queue.context()
    }
}

impl PartialEq for DeviceHandle {
    fn eq(&self, other: &DeviceHandle) -> bool {
        self.id == other.id
    }
}

impl Eq for DeviceHandle {}

impl Hash for DeviceHandle {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

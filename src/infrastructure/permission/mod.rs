//! Permission adapters

mod device_probe;

pub use device_probe::DeviceProbeAccess;

//! Capture adapters

mod cpal_wav;

pub use cpal_wav::CpalWavCapture;

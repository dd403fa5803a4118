//! Cross-platform capture adapter using cpal
//!
//! Captures interleaved PCM from the default input device and writes a
//! 16-bit WAV file when the session stops. The cpal stream lives on a
//! dedicated thread because `cpal::Stream` is not `Send`; stream errors
//! after startup are reported on the backend event channel.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use std::sync::{Arc, Mutex as StdMutex};

use async_trait::async_trait;
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use cpal::{SampleFormat, SampleRate, StreamConfig};
use tokio::sync::oneshot;
use tokio::time::{sleep, Duration as TokioDuration};

use crate::application::ports::{BackendEvent, BackendEventSender, CaptureBackend, CaptureError};
use crate::domain::recording::CaptureSettings;

/// Capture adapter writing WAV via cpal + hound.
pub struct CpalWavCapture {
    /// Captured interleaved samples at the stream's actual rate/layout
    samples: Arc<StdMutex<Vec<i16>>>,
    /// Actual stream sample rate (may differ from the requested rate)
    stream_rate: Arc<AtomicU32>,
    /// Actual stream channel count
    stream_channels: Arc<AtomicU32>,
    /// Capture session state
    is_active: Arc<AtomicBool>,
    /// Output path of the current session
    output: StdMutex<Option<PathBuf>>,
    events: BackendEventSender,
}

impl CpalWavCapture {
    /// Create a new cpal-based capture adapter
    pub fn new(events: BackendEventSender) -> Self {
        Self {
            samples: Arc::new(StdMutex::new(Vec::new())),
            stream_rate: Arc::new(AtomicU32::new(0)),
            stream_channels: Arc::new(AtomicU32::new(0)),
            is_active: Arc::new(AtomicBool::new(false)),
            output: StdMutex::new(None),
            events,
        }
    }

    /// Get the default input device
    fn input_device() -> Result<cpal::Device, CaptureError> {
        let host = cpal::default_host();
        host.default_input_device()
            .ok_or(CaptureError::NoInputDevice)
    }

    /// Pick an input configuration as close to the requested settings as
    /// the device supports.
    fn input_config(
        device: &cpal::Device,
        settings: CaptureSettings,
    ) -> Result<(StreamConfig, SampleFormat), CaptureError> {
        let supported = device
            .supported_input_configs()
            .map_err(|e| CaptureError::StartFailed(format!("Failed to get configs: {}", e)))?;

        let mut best: Option<cpal::SupportedStreamConfigRange> = None;

        for config in supported {
            if config.sample_format() != SampleFormat::I16
                && config.sample_format() != SampleFormat::F32
            {
                continue;
            }

            let matches_channels = config.channels() == settings.channels();
            let covers_rate = config.min_sample_rate().0 <= settings.sample_rate()
                && config.max_sample_rate().0 >= settings.sample_rate();

            let is_better = match &best {
                None => true,
                Some(current) => {
                    let current_matches = current.channels() == settings.channels();
                    let current_covers = current.min_sample_rate().0 <= settings.sample_rate()
                        && current.max_sample_rate().0 >= settings.sample_rate();
                    (matches_channels && !current_matches)
                        || (matches_channels == current_matches && covers_rate && !current_covers)
                }
            };
            if is_better {
                best = Some(config);
            }
        }

        let range = best.ok_or(CaptureError::StartFailed(
            "No suitable input config found".into(),
        ))?;

        // Clamp the requested rate into the supported range
        let rate = settings
            .sample_rate()
            .clamp(range.min_sample_rate().0, range.max_sample_rate().0);

        let sample_format = range.sample_format();
        let config = StreamConfig {
            channels: range.channels(),
            sample_rate: SampleRate(rate),
            buffer_size: cpal::BufferSize::Default,
        };

        Ok((config, sample_format))
    }

    /// Write captured samples to a WAV file (called from spawn_blocking)
    fn write_wav(
        path: &Path,
        samples: &[i16],
        sample_rate: u32,
        channels: u16,
    ) -> Result<(), CaptureError> {
        if samples.is_empty() {
            return Err(CaptureError::WriteFailed("No audio data captured".into()));
        }

        let spec = hound::WavSpec {
            channels,
            sample_rate,
            bits_per_sample: 16,
            sample_format: hound::SampleFormat::Int,
        };

        let mut writer = hound::WavWriter::create(path, spec)
            .map_err(|e| CaptureError::WriteFailed(e.to_string()))?;

        for &sample in samples {
            writer
                .write_sample(sample)
                .map_err(|e| CaptureError::WriteFailed(e.to_string()))?;
        }

        writer
            .finalize()
            .map_err(|e| CaptureError::WriteFailed(e.to_string()))?;

        Ok(())
    }
}

#[async_trait]
impl CaptureBackend for CpalWavCapture {
    async fn start(&self, output: &Path, settings: CaptureSettings) -> Result<(), CaptureError> {
        if self.is_active.load(Ordering::SeqCst) {
            return Err(CaptureError::StartFailed(
                "Capture already in progress".to_string(),
            ));
        }

        if let Some(parent) = output.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| CaptureError::StartFailed(e.to_string()))?;
        }

        {
            let mut samples = self.samples.lock().unwrap();
            samples.clear();
        }
        *self.output.lock().unwrap() = Some(output.to_path_buf());

        self.is_active.store(true, Ordering::SeqCst);

        let samples = Arc::clone(&self.samples);
        let stream_rate = Arc::clone(&self.stream_rate);
        let stream_channels = Arc::clone(&self.stream_channels);
        let is_active = Arc::clone(&self.is_active);
        let events = self.events.clone();

        let (ready_tx, ready_rx) = oneshot::channel::<Result<(), CaptureError>>();

        // The stream must be built and dropped on one thread
        std::thread::spawn(move || {
            let startup = (|| {
                let device = CpalWavCapture::input_device()?;
                let (config, sample_format) = CpalWavCapture::input_config(&device, settings)?;

                stream_rate.store(config.sample_rate.0, Ordering::SeqCst);
                stream_channels.store(config.channels as u32, Ordering::SeqCst);

                let samples_clone = Arc::clone(&samples);
                let active_clone = Arc::clone(&is_active);
                let err_active = Arc::clone(&is_active);
                let on_error = move |err: cpal::StreamError| {
                    err_active.store(false, Ordering::SeqCst);
                    let _ = events.send(BackendEvent::CaptureFailed(err.to_string()));
                };

                let stream = match sample_format {
                    SampleFormat::I16 => device
                        .build_input_stream(
                            &config,
                            move |data: &[i16], _: &cpal::InputCallbackInfo| {
                                if active_clone.load(Ordering::SeqCst) {
                                    if let Ok(mut buffer) = samples_clone.lock() {
                                        buffer.extend_from_slice(data);
                                    }
                                }
                            },
                            on_error,
                            None,
                        )
                        .map_err(|e| CaptureError::StartFailed(e.to_string()))?,

                    SampleFormat::F32 => {
                        let samples_clone = Arc::clone(&samples);
                        let active_clone = Arc::clone(&is_active);

                        device
                            .build_input_stream(
                                &config,
                                move |data: &[f32], _: &cpal::InputCallbackInfo| {
                                    if active_clone.load(Ordering::SeqCst) {
                                        if let Ok(mut buffer) = samples_clone.lock() {
                                            buffer.extend(
                                                data.iter().map(|&s| (s * 32767.0) as i16),
                                            );
                                        }
                                    }
                                },
                                on_error,
                                None,
                            )
                            .map_err(|e| CaptureError::StartFailed(e.to_string()))?
                    }

                    _ => {
                        return Err(CaptureError::StartFailed(
                            "Unsupported sample format".into(),
                        ))
                    }
                };

                stream
                    .play()
                    .map_err(|e| CaptureError::StartFailed(e.to_string()))?;

                Ok::<cpal::Stream, CaptureError>(stream)
            })();

            let stream = match startup {
                Ok(stream) => {
                    let _ = ready_tx.send(Ok(()));
                    stream
                }
                Err(e) => {
                    is_active.store(false, Ordering::SeqCst);
                    let _ = ready_tx.send(Err(e));
                    return;
                }
            };

            // Keep the stream alive until the session ends
            while is_active.load(Ordering::SeqCst) {
                std::thread::sleep(std::time::Duration::from_millis(100));
            }

            drop(stream);
        });

        match ready_rx.await {
            Ok(result) => result,
            Err(_) => {
                self.is_active.store(false, Ordering::SeqCst);
                Err(CaptureError::StartFailed(
                    "Capture thread exited before startup".into(),
                ))
            }
        }
    }

    async fn stop(&self) -> Result<(), CaptureError> {
        if !self.is_active.load(Ordering::SeqCst) {
            return Err(CaptureError::CaptureFailed(
                "No capture in progress".to_string(),
            ));
        }

        self.is_active.store(false, Ordering::SeqCst);

        // Give the stream thread a moment to drain its callback
        sleep(TokioDuration::from_millis(100)).await;

        let path = self
            .output
            .lock()
            .unwrap()
            .take()
            .ok_or_else(|| CaptureError::WriteFailed("Output path not set".into()))?;

        let sample_rate = self.stream_rate.load(Ordering::SeqCst);
        let channels = self.stream_channels.load(Ordering::SeqCst) as u16;
        if sample_rate == 0 || channels == 0 {
            return Err(CaptureError::WriteFailed("Stream format not set".into()));
        }

        let samples = {
            let mut buffer = self.samples.lock().unwrap();
            std::mem::take(&mut *buffer)
        };

        tokio::task::spawn_blocking(move || {
            Self::write_wav(&path, &samples, sample_rate, channels)
        })
        .await
        .map_err(|e| CaptureError::WriteFailed(format!("Write task error: {}", e)))??;

        Ok(())
    }

    fn is_active(&self) -> bool {
        self.is_active.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::events;

    #[test]
    fn adapter_default_state() {
        let (tx, _rx) = events::channel();
        let capture = CpalWavCapture::new(tx);
        assert!(!capture.is_active());
    }

    #[tokio::test]
    async fn stop_without_start_errors() {
        let (tx, _rx) = events::channel();
        let capture = CpalWavCapture::new(tx);
        assert!(capture.stop().await.is_err());
    }

    #[test]
    fn write_wav_rejects_empty_capture() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("memo.wav");
        let err = CpalWavCapture::write_wav(&path, &[], 44_100, 2).unwrap_err();
        assert!(err.to_string().contains("No audio data"));
    }

    #[test]
    fn write_wav_produces_readable_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("memo.wav");
        let samples: Vec<i16> = (0..4410).map(|i| (i % 100) as i16).collect();

        CpalWavCapture::write_wav(&path, &samples, 44_100, 2).unwrap();

        let reader = hound::WavReader::open(&path).unwrap();
        let spec = reader.spec();
        assert_eq!(spec.sample_rate, 44_100);
        assert_eq!(spec.channels, 2);
        assert_eq!(reader.len() as usize, samples.len());
    }
}

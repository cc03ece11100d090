use thiserror::Error;

/// Errors surfaced by an audio capture device.
#[derive(Debug, Error)]
pub enum CaptureError {
    /// The user denied access to the microphone.
    #[error("Microphone access denied")]
    PermissionDenied,
    /// The device failed to start, buffer, or stop.
    #[error("Capture device error: {0}")]
    Device(String),
}

/// An audio input that can open exclusive recordings.
///
/// One recording is held per interview turn: acquired when the user starts
/// answering, consumed when they stop. Implementations must release the
/// underlying device both in [`Recording::stop`] and on drop, so an
/// abandoned turn never leaves the microphone open.
pub trait AudioCapture: Send + Sync {
    /// Acquire the device and start buffering audio.
    fn open(&self) -> Result<Box<dyn Recording>, CaptureError>;
}

/// One in-progress recording. The device is released by [`Recording::stop`]
/// or by dropping the handle, whichever comes first.
pub trait Recording: Send {
    /// Stop buffering and return the captured audio bytes.
    fn stop(self: Box<Self>) -> Result<Vec<u8>, CaptureError>;
}

/// Capture stub that yields a fixed byte buffer on every recording. Useful
/// for examples and tests where no real microphone is available.
pub struct StaticCapture {
    bytes: Vec<u8>,
}

impl StaticCapture {
    #[must_use]
    pub fn new(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }
}

impl AudioCapture for StaticCapture {
    fn open(&self) -> Result<Box<dyn Recording>, CaptureError> {
        Ok(Box::new(StaticRecording {
            bytes: self.bytes.clone(),
        }))
    }
}

struct StaticRecording {
    bytes: Vec<u8>,
}

impl Recording for StaticRecording {
    fn stop(self: Box<Self>) -> Result<Vec<u8>, CaptureError> {
        Ok(self.bytes)
    }
}

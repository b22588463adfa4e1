//! Injection backend abstraction
//!
//! Defines the capability surface the simulator drives: posting synthetic
//! key/button/move events and querying pointer location and display geometry.

use thiserror::Error;

#[cfg(target_os = "macos")]
mod macos;
mod logging;

#[cfg(test)]
pub(crate) mod recording;

#[cfg(target_os = "macos")]
pub use macos::QuartzBackend;
pub use logging::LoggingBackend;

/// Opaque key code, meaningful only to the injection backend.
pub type KeyCode = u16;

/// Backend-native display identifier.
pub type DisplayId = u32;

/// Pointer button identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum PointerButton {
    Primary = 0,
    Other = 1,
    Secondary = 2,
}

/// An absolute pixel coordinate on the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScreenPoint {
    pub x: i32,
    pub y: i32,
}

impl ScreenPoint {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Origin and size of one display, queried fresh on every call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayBounds {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

/// Errors that can occur while injecting events
///
/// Backend unavailability (typically missing injection permission) is fatal
/// for the session; callers surface the first failure and stop rather than
/// retry, since a single press/move has no partial-success state.
#[derive(Error, Debug)]
pub enum InjectError {
    #[error("permission denied: {0}")]
    PermissionDenied(String),

    #[error("backend rejected event: {0}")]
    EventRejected(String),

    #[error("not supported on this platform: {0}")]
    Unsupported(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type InjectResult<T> = Result<T, InjectError>;

/// A synchronous OS-level input injection facility.
///
/// Every method blocks until the OS has queued the event. Implementations are
/// fully trusted with whatever codes and coordinates they are handed; validity
/// is their concern, not the simulator's.
pub trait InjectionBackend {
    /// Post a key-down event.
    fn key_down(&mut self, code: KeyCode) -> InjectResult<()>;

    /// Post a key-up event.
    fn key_up(&mut self, code: KeyCode) -> InjectResult<()>;

    /// Post a button-down event at the given location.
    fn button_down(&mut self, button: PointerButton, at: ScreenPoint) -> InjectResult<()>;

    /// Post a button-up event at the given location.
    fn button_up(&mut self, button: PointerButton, at: ScreenPoint) -> InjectResult<()>;

    /// Post a pointer move to an absolute location.
    fn pointer_move(&mut self, to: ScreenPoint) -> InjectResult<()>;

    /// Current pointer location as reported by the OS.
    fn pointer_location(&mut self) -> InjectResult<ScreenPoint>;

    /// Geometry of the display at the given index in the active-display list.
    ///
    /// An out-of-range index resolves to the main display rather than failing.
    fn display_bounds(&mut self, index: usize) -> InjectResult<DisplayBounds>;

    /// Identifiers of the currently active displays, in backend order.
    fn active_displays(&mut self) -> InjectResult<Vec<DisplayId>>;
}

/// Get the current platform name
pub fn platform_name() -> &'static str {
    #[cfg(target_os = "macos")]
    return "macOS";

    #[cfg(not(target_os = "macos"))]
    return "unsupported";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = InjectError::PermissionDenied("event tap refused".to_string());
        assert_eq!(err.to_string(), "permission denied: event tap refused");

        let err = InjectError::EventRejected("keyboard event".to_string());
        assert_eq!(err.to_string(), "backend rejected event: keyboard event");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::Other, "pipe closed");
        let err: InjectError = io_err.into();
        assert!(matches!(err, InjectError::Io(_)));
    }
}

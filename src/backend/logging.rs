//! Logging backend
//!
//! Logs every event through `tracing` instead of touching the OS. Serves
//! `--dry-run` mode and platforms without a real injection facility. Keeps a
//! synthetic cursor so relative moves behave sensibly across calls.

use super::{
    DisplayBounds, DisplayId, InjectResult, InjectionBackend, KeyCode, PointerButton, ScreenPoint,
};

/// Backend that logs events instead of injecting them.
pub struct LoggingBackend {
    cursor: ScreenPoint,
    bounds: DisplayBounds,
}

impl LoggingBackend {
    pub fn new() -> Self {
        Self {
            cursor: ScreenPoint::default(),
            bounds: DisplayBounds {
                x: 0,
                y: 0,
                width: 1920,
                height: 1080,
            },
        }
    }
}

impl Default for LoggingBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl InjectionBackend for LoggingBackend {
    fn key_down(&mut self, code: KeyCode) -> InjectResult<()> {
        tracing::info!("key down: {:#x}", code);
        Ok(())
    }

    fn key_up(&mut self, code: KeyCode) -> InjectResult<()> {
        tracing::info!("key up: {:#x}", code);
        Ok(())
    }

    fn button_down(&mut self, button: PointerButton, at: ScreenPoint) -> InjectResult<()> {
        tracing::info!("button down: {:?} at ({}, {})", button, at.x, at.y);
        Ok(())
    }

    fn button_up(&mut self, button: PointerButton, at: ScreenPoint) -> InjectResult<()> {
        tracing::info!("button up: {:?} at ({}, {})", button, at.x, at.y);
        Ok(())
    }

    fn pointer_move(&mut self, to: ScreenPoint) -> InjectResult<()> {
        tracing::info!("pointer move: ({}, {})", to.x, to.y);
        self.cursor = to;
        Ok(())
    }

    fn pointer_location(&mut self) -> InjectResult<ScreenPoint> {
        Ok(self.cursor)
    }

    fn display_bounds(&mut self, _index: usize) -> InjectResult<DisplayBounds> {
        Ok(self.bounds)
    }

    fn active_displays(&mut self) -> InjectResult<Vec<DisplayId>> {
        Ok(vec![0])
    }
}

//! macOS injection backend
//!
//! Posts synthetic events through Quartz Event Services (CGEvent) and reads
//! display geometry through CGDisplay.
//!
//! Requirements:
//! - Accessibility permissions must be granted to the process
//! - System Settings > Privacy & Security > Accessibility

use core_graphics::display::CGDisplay;
use core_graphics::event::{CGEvent, CGEventTapLocation, CGEventType, CGMouseButton};
use core_graphics::event_source::{CGEventSource, CGEventSourceStateID};
use core_graphics::geometry::CGPoint;

use super::{
    DisplayBounds, DisplayId, InjectError, InjectResult, InjectionBackend, KeyCode, PointerButton,
    ScreenPoint,
};

/// Injection backend backed by Quartz Event Services.
pub struct QuartzBackend {
    event_source: CGEventSource,
}

impl QuartzBackend {
    /// Create a backend posting into the HID system event state.
    ///
    /// Fails when the event source cannot be created, which on macOS means
    /// the process lacks injection permission.
    pub fn new() -> InjectResult<Self> {
        let event_source = CGEventSource::new(CGEventSourceStateID::HIDSystemState)
            .map_err(|_| {
                InjectError::PermissionDenied(
                    "failed to create HID event source; check Accessibility permissions"
                        .to_string(),
                )
            })?;

        Ok(Self { event_source })
    }

    fn post_key(&self, code: KeyCode, pressed: bool) -> InjectResult<()> {
        let event = CGEvent::new_keyboard_event(self.event_source.clone(), code, pressed)
            .map_err(|_| InjectError::EventRejected(format!("keyboard event code={code:#x}")))?;
        event.post(CGEventTapLocation::HID);
        Ok(())
    }

    fn post_button(
        &self,
        button: PointerButton,
        pressed: bool,
        at: ScreenPoint,
    ) -> InjectResult<()> {
        let (event_type, mouse_button) = match (button, pressed) {
            (PointerButton::Primary, true) => (CGEventType::LeftMouseDown, CGMouseButton::Left),
            (PointerButton::Primary, false) => (CGEventType::LeftMouseUp, CGMouseButton::Left),
            (PointerButton::Other, true) => (CGEventType::OtherMouseDown, CGMouseButton::Center),
            (PointerButton::Other, false) => (CGEventType::OtherMouseUp, CGMouseButton::Center),
            (PointerButton::Secondary, true) => (CGEventType::RightMouseDown, CGMouseButton::Right),
            (PointerButton::Secondary, false) => (CGEventType::RightMouseUp, CGMouseButton::Right),
        };

        let point = CGPoint::new(at.x as f64, at.y as f64);
        let event =
            CGEvent::new_mouse_event(self.event_source.clone(), event_type, point, mouse_button)
                .map_err(|_| InjectError::EventRejected("mouse button event".to_string()))?;
        event.post(CGEventTapLocation::HID);
        Ok(())
    }
}

impl InjectionBackend for QuartzBackend {
    fn key_down(&mut self, code: KeyCode) -> InjectResult<()> {
        self.post_key(code, true)
    }

    fn key_up(&mut self, code: KeyCode) -> InjectResult<()> {
        self.post_key(code, false)
    }

    fn button_down(&mut self, button: PointerButton, at: ScreenPoint) -> InjectResult<()> {
        self.post_button(button, true, at)
    }

    fn button_up(&mut self, button: PointerButton, at: ScreenPoint) -> InjectResult<()> {
        self.post_button(button, false, at)
    }

    fn pointer_move(&mut self, to: ScreenPoint) -> InjectResult<()> {
        let point = CGPoint::new(to.x as f64, to.y as f64);
        let event = CGEvent::new_mouse_event(
            self.event_source.clone(),
            CGEventType::MouseMoved,
            point,
            CGMouseButton::Left,
        )
        .map_err(|_| InjectError::EventRejected("mouse move event".to_string()))?;
        event.post(CGEventTapLocation::HID);
        Ok(())
    }

    fn pointer_location(&mut self) -> InjectResult<ScreenPoint> {
        let event = CGEvent::new(self.event_source.clone())
            .map_err(|_| InjectError::EventRejected("location query event".to_string()))?;
        let location = event.location();
        Ok(ScreenPoint::new(location.x as i32, location.y as i32))
    }

    fn display_bounds(&mut self, index: usize) -> InjectResult<DisplayBounds> {
        let displays = self.active_displays()?;
        // Out-of-range indexes fall back to the main display.
        let id = displays
            .get(index)
            .copied()
            .unwrap_or_else(|| CGDisplay::main().id);

        let rect = CGDisplay::new(id).bounds();
        Ok(DisplayBounds {
            x: rect.origin.x as i32,
            y: rect.origin.y as i32,
            width: rect.size.width as i32,
            height: rect.size.height as i32,
        })
    }

    fn active_displays(&mut self) -> InjectResult<Vec<DisplayId>> {
        CGDisplay::active_displays()
            .map_err(|err| InjectError::EventRejected(format!("active display list: {err}")))
    }
}

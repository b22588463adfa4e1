//! Recording backend for tests
//!
//! Appends every emitted event to a `Vec` and serves scripted pointer
//! locations and display bounds, so tests can assert on the exact event
//! sequence the simulator produced.

use super::{
    DisplayBounds, DisplayId, InjectResult, InjectionBackend, KeyCode, PointerButton, ScreenPoint,
};

/// One event emitted through the backend, in emission order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Emitted {
    KeyDown(KeyCode),
    KeyUp(KeyCode),
    ButtonDown(PointerButton, ScreenPoint),
    ButtonUp(PointerButton, ScreenPoint),
    PointerMove(ScreenPoint),
}

pub struct RecordingBackend {
    pub events: Vec<Emitted>,
    /// Locations returned by successive `pointer_location` calls; the last
    /// entry repeats once the script runs out.
    pub locations: Vec<ScreenPoint>,
    location_cursor: usize,
    pub bounds: DisplayBounds,
    pub displays: Vec<DisplayId>,
    pub bounds_queries: usize,
}

impl RecordingBackend {
    pub fn new() -> Self {
        Self {
            events: Vec::new(),
            locations: vec![ScreenPoint::default()],
            location_cursor: 0,
            bounds: DisplayBounds {
                x: 0,
                y: 0,
                width: 1920,
                height: 1080,
            },
            displays: vec![1],
            bounds_queries: 0,
        }
    }

    pub fn with_location(mut self, point: ScreenPoint) -> Self {
        self.locations = vec![point];
        self
    }

    pub fn with_locations(mut self, points: Vec<ScreenPoint>) -> Self {
        self.locations = points;
        self
    }

    pub fn with_bounds(mut self, bounds: DisplayBounds) -> Self {
        self.bounds = bounds;
        self
    }

    pub fn moves(&self) -> Vec<ScreenPoint> {
        self.events
            .iter()
            .filter_map(|e| match e {
                Emitted::PointerMove(p) => Some(*p),
                _ => None,
            })
            .collect()
    }
}

impl InjectionBackend for RecordingBackend {
    fn key_down(&mut self, code: KeyCode) -> InjectResult<()> {
        self.events.push(Emitted::KeyDown(code));
        Ok(())
    }

    fn key_up(&mut self, code: KeyCode) -> InjectResult<()> {
        self.events.push(Emitted::KeyUp(code));
        Ok(())
    }

    fn button_down(&mut self, button: PointerButton, at: ScreenPoint) -> InjectResult<()> {
        self.events.push(Emitted::ButtonDown(button, at));
        Ok(())
    }

    fn button_up(&mut self, button: PointerButton, at: ScreenPoint) -> InjectResult<()> {
        self.events.push(Emitted::ButtonUp(button, at));
        Ok(())
    }

    fn pointer_move(&mut self, to: ScreenPoint) -> InjectResult<()> {
        self.events.push(Emitted::PointerMove(to));
        Ok(())
    }

    fn pointer_location(&mut self) -> InjectResult<ScreenPoint> {
        let point = self
            .locations
            .get(self.location_cursor)
            .or_else(|| self.locations.last())
            .copied()
            .unwrap_or_default();
        self.location_cursor += 1;
        Ok(point)
    }

    fn display_bounds(&mut self, _index: usize) -> InjectResult<DisplayBounds> {
        self.bounds_queries += 1;
        Ok(self.bounds)
    }

    fn active_displays(&mut self) -> InjectResult<Vec<DisplayId>> {
        Ok(self.displays.clone())
    }
}

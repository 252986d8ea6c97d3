//! Test doubles: a surface that records draw calls and a widget that records
//! the callbacks it receives

use std::cell::RefCell;
use std::rc::Rc;

use crate::platform::{Bitmap, KeyEvent, RenderQuality, Surface};
use crate::types::{Color, PixelRect};
use crate::widget::Widget;

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCall {
    Quality(RenderQuality),
    Bitmap {
        rect: PixelRect,
        width: u32,
        height: u32,
    },
    Text {
        text: String,
        x: i32,
        baseline: i32,
        size: i32,
        color: Color,
    },
    Fill {
        rect: PixelRect,
        color: Color,
    },
}

#[derive(Default)]
pub struct RecordingSurface {
    pub calls: Vec<DrawCall>,
}

impl Surface for RecordingSurface {
    fn set_quality(&mut self, quality: RenderQuality) {
        self.calls.push(DrawCall::Quality(quality));
    }

    fn draw_bitmap(&mut self, bitmap: &Bitmap, rect: PixelRect) {
        self.calls.push(DrawCall::Bitmap {
            rect,
            width: bitmap.width(),
            height: bitmap.height(),
        });
    }

    fn draw_text(&mut self, text: &str, x: i32, baseline: i32, font_size: i32, color: Color) {
        self.calls.push(DrawCall::Text {
            text: text.to_string(),
            x,
            baseline,
            size: font_size,
            color,
        });
    }

    fn fill_rect(&mut self, rect: PixelRect, color: Color) {
        self.calls.push(DrawCall::Fill { rect, color });
    }
}

/// One callback received by a [`Probe`]
#[derive(Clone, Debug, PartialEq)]
pub enum ProbeEvent {
    Paint(PixelRect),
    Enter(i32, i32),
    Leave,
    Click(i32, i32),
    OffScreen,
    Typed(KeyEvent),
    Pressed(KeyEvent),
    Released(KeyEvent),
    Activate,
}

/// Shared, ordered record of (identifier, event) across several probes
pub type Journal = Rc<RefCell<Vec<(String, ProbeEvent)>>>;

/// A widget that writes every callback into a journal
pub struct Probe {
    identifier: String,
    visible: bool,
    journal: Journal,
}

impl Probe {
    pub fn new(identifier: &str, journal: &Journal) -> Self {
        Self {
            identifier: identifier.to_string(),
            visible: true,
            journal: journal.clone(),
        }
    }

    fn record(&self, event: ProbeEvent) {
        self.journal
            .borrow_mut()
            .push((self.identifier.clone(), event));
    }
}

impl Widget for Probe {
    fn paint(&mut self, _surface: &mut dyn Surface, rect: PixelRect) {
        self.record(ProbeEvent::Paint(rect));
    }

    fn identifier(&self) -> &str {
        &self.identifier
    }

    fn visible(&self) -> bool {
        self.visible
    }

    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    fn pointer_enter(&mut self, x: i32, y: i32) {
        self.record(ProbeEvent::Enter(x, y));
    }

    fn pointer_leave(&mut self) {
        self.record(ProbeEvent::Leave);
    }

    fn pointer_click(&mut self, x: i32, y: i32) {
        self.record(ProbeEvent::Click(x, y));
    }

    fn off_screen(&mut self) {
        self.record(ProbeEvent::OffScreen);
    }

    fn key_typed(&mut self, event: &KeyEvent) {
        self.record(ProbeEvent::Typed(*event));
    }

    fn key_pressed(&mut self, event: &KeyEvent) {
        self.record(ProbeEvent::Pressed(*event));
    }

    fn key_released(&mut self, event: &KeyEvent) {
        self.record(ProbeEvent::Released(*event));
    }

    fn activate(&mut self) {
        self.record(ProbeEvent::Activate);
    }
}

/// Events recorded for one identifier, in order
pub fn events_for(journal: &Journal, identifier: &str) -> Vec<ProbeEvent> {
    journal
        .borrow()
        .iter()
        .filter(|(id, _)| id == identifier)
        .map(|(_, event)| event.clone())
        .collect()
}

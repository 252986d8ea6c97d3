//! Render panel - layered compositing and input routing
//!
//! The panel owns the list of registered widgets and one active layout. Each
//! paint pass resolves every widget's layout entry to pixels and paints the
//! layers bottom to top; pointer input goes to the topmost widget under the
//! cursor and keyboard input to the selected widget.

use std::collections::BTreeMap;
use std::rc::Rc;

use crate::config::PanelConfig;
use crate::layout::{LayoutDescription, LayoutProperties};
use crate::platform::{Event, KeyCode, KeyEvent, RenderQuality, Surface};
use crate::types::PixelRect;
use crate::widget::SharedWidget;

pub const DEFAULT_WIDTH: i32 = 850;
pub const DEFAULT_HEIGHT: i32 = 478;

/// Registration handle, valid until the widget is deregistered
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WidgetHandle(u64);

#[derive(Clone)]
struct Entry {
    handle: WidgetHandle,
    widget: SharedWidget,
}

/// Compositor for a set of shared widgets
pub struct RenderPanel {
    /// Registration order is paint order within a layer and the hit-test
    /// tie-break
    widgets: Vec<Entry>,
    layout: Rc<LayoutDescription>,
    selected: Option<WidgetHandle>,
    /// One past the last layer painted by the previous pass
    highest_layer: i32,
    quality: RenderQuality,
    width: i32,
    height: i32,
    next_handle: u64,
}

impl RenderPanel {
    pub fn new(layout: Rc<LayoutDescription>) -> Self {
        Self::with_size(layout, DEFAULT_WIDTH, DEFAULT_HEIGHT)
    }

    pub fn with_size(layout: Rc<LayoutDescription>, width: i32, height: i32) -> Self {
        Self {
            widgets: Vec::new(),
            layout,
            selected: None,
            highest_layer: 0,
            quality: RenderQuality::default(),
            width,
            height,
            next_handle: 0,
        }
    }

    /// Size and quality from configuration
    pub fn from_config(layout: Rc<LayoutDescription>, config: &PanelConfig) -> Self {
        let mut panel = Self::with_size(layout, config.width, config.height);
        panel.quality = config.quality;
        panel
    }

    // ---------------------------------------------------------------------
    // Registration
    // ---------------------------------------------------------------------

    /// Add a widget after all previously registered ones
    pub fn register(&mut self, widget: SharedWidget) -> WidgetHandle {
        let handle = WidgetHandle(self.next_handle);
        self.next_handle += 1;
        self.widgets.push(Entry { handle, widget });
        handle
    }

    /// Remove a widget and hand it back; clears the selection if it was
    /// selected
    pub fn deregister(&mut self, handle: WidgetHandle) -> Option<SharedWidget> {
        let index = self.index_of(handle)?;
        if self.selected == Some(handle) {
            self.selected = None;
        }
        Some(self.widgets.remove(index).widget)
    }

    pub fn widget(&self, handle: WidgetHandle) -> Option<SharedWidget> {
        self.index_of(handle)
            .map(|index| self.widgets[index].widget.clone())
    }

    /// Registered widgets in registration order
    pub fn widgets(&self) -> impl Iterator<Item = (WidgetHandle, &SharedWidget)> {
        self.widgets.iter().map(|entry| (entry.handle, &entry.widget))
    }

    pub fn len(&self) -> usize {
        self.widgets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.widgets.is_empty()
    }

    fn index_of(&self, handle: WidgetHandle) -> Option<usize> {
        self.widgets.iter().position(|entry| entry.handle == handle)
    }

    // ---------------------------------------------------------------------
    // Layout, size and quality
    // ---------------------------------------------------------------------

    /// Replace the active layout; the selection is cleared
    pub fn set_layout(&mut self, layout: Rc<LayoutDescription>) {
        crate::log_fn!("RenderPanel::set_layout", "{} entries", layout.len());
        self.layout = layout;
        self.selected = None;
    }

    pub fn layout(&self) -> &Rc<LayoutDescription> {
        &self.layout
    }

    pub fn set_quality(&mut self, quality: RenderQuality) {
        self.quality = quality;
    }

    pub fn quality(&self) -> RenderQuality {
        self.quality
    }

    pub fn resize(&mut self, width: i32, height: i32) {
        self.width = width;
        self.height = height;
    }

    pub fn size(&self) -> (i32, i32) {
        (self.width, self.height)
    }

    fn placement(&self, widget: &SharedWidget) -> Option<LayoutProperties> {
        self.layout.properties(widget.borrow().identifier()).copied()
    }

    fn layer_of(&self, widget: &SharedWidget) -> Option<i32> {
        self.placement(widget).map(|props| props.layer())
    }

    // ---------------------------------------------------------------------
    // Selection
    // ---------------------------------------------------------------------

    pub fn selected(&self) -> Option<WidgetHandle> {
        self.selected
    }

    pub fn selected_widget(&self) -> Option<SharedWidget> {
        self.selected.and_then(|handle| self.widget(handle))
    }

    /// Select a registered widget; returns false for unknown handles
    pub fn select(&mut self, handle: WidgetHandle) -> bool {
        if self.index_of(handle).is_none() {
            return false;
        }
        self.selected = Some(handle);
        true
    }

    /// Layer bound used by hit-testing, as left by the last paint pass
    pub fn highest_layer(&self) -> i32 {
        self.highest_layer
    }

    // ---------------------------------------------------------------------
    // Painting
    // ---------------------------------------------------------------------

    /// Paint every placed widget, lowest layer first
    ///
    /// Widgets without a layout entry are told they're off screen instead.
    /// Widgets on negative layers are never painted.
    pub fn paint(&mut self, surface: &mut dyn Surface) {
        surface.set_quality(self.quality);

        let widgets = self.widgets.clone();
        let mut layers: BTreeMap<i32, Vec<(&SharedWidget, PixelRect)>> = BTreeMap::new();

        for entry in &widgets {
            match self.placement(&entry.widget) {
                Some(props) if props.layer() >= 0 => {
                    let rect = props.resolve(self.width, self.height);
                    layers
                        .entry(props.layer())
                        .or_default()
                        .push((&entry.widget, rect));
                }
                Some(_) => {}
                None => entry.widget.borrow_mut().off_screen(),
            }
        }

        let mut layer = 0;
        for (&value, members) in &layers {
            for &(widget, rect) in members {
                widget.borrow_mut().paint(surface, rect);
            }
            layer = value.saturating_add(1);
        }

        self.highest_layer = layer;
    }

    // ---------------------------------------------------------------------
    // Pointer input
    // ---------------------------------------------------------------------

    /// Topmost widget containing the point: highest layer first, then
    /// earliest registration
    fn hit_test(&self, x: i32, y: i32) -> Option<(usize, PixelRect)> {
        let mut best: Option<(i32, usize, PixelRect)> = None;

        for (index, entry) in self.widgets.iter().enumerate() {
            let Some(props) = self.placement(&entry.widget) else {
                continue;
            };
            let layer = props.layer();
            if !(0..=self.highest_layer).contains(&layer) {
                continue;
            }
            let rect = props.resolve(self.width, self.height);
            if !rect.contains(x, y) {
                continue;
            }
            if best.map_or(true, |(top, _, _)| layer > top) {
                best = Some((layer, index, rect));
            }
        }

        best.map(|(_, index, rect)| (index, rect))
    }

    /// Click the topmost widget under the point and select it
    pub fn pointer_pressed(&mut self, x: i32, y: i32) {
        let Some((index, rect)) = self.hit_test(x, y) else {
            return;
        };
        let entry = self.widgets[index].clone();
        let (local_x, local_y) = rect.to_local(x, y);
        entry.widget.borrow_mut().pointer_click(local_x, local_y);
        self.selected = Some(entry.handle);
    }

    /// Enter the topmost widget under the point; every other widget is left
    pub fn pointer_moved(&mut self, x: i32, y: i32) {
        let hit = self.hit_test(x, y);

        for (index, entry) in self.widgets.iter().enumerate() {
            match hit {
                Some((target, rect)) if target == index => {
                    let (local_x, local_y) = rect.to_local(x, y);
                    entry.widget.borrow_mut().pointer_enter(local_x, local_y);
                }
                _ => entry.widget.borrow_mut().pointer_leave(),
            }
        }
    }

    // ---------------------------------------------------------------------
    // Keyboard input
    // ---------------------------------------------------------------------

    pub fn key_typed(&mut self, event: &KeyEvent) {
        if let Some(widget) = self.selected_widget() {
            widget.borrow_mut().key_typed(event);
        }
    }

    /// Tab moves the selection; everything else goes to the selected widget
    ///
    /// Enter also activates the selected widget when its layout entry is
    /// enterable.
    pub fn key_pressed(&mut self, event: &KeyEvent) {
        if event.code == KeyCode::Tab {
            self.select_next_on_layer();
            return;
        }

        let Some(widget) = self.selected_widget() else {
            return;
        };
        widget.borrow_mut().key_pressed(event);

        if event.code == KeyCode::Enter
            && self
                .placement(&widget)
                .is_some_and(|props| props.enterable())
        {
            widget.borrow_mut().activate();
        }
    }

    pub fn key_released(&mut self, event: &KeyEvent) {
        if let Some(widget) = self.selected_widget() {
            widget.borrow_mut().key_released(event);
        }
    }

    /// Select the first registered widget on the selected widget's layer,
    /// skipping the selected one itself
    fn select_next_on_layer(&mut self) {
        let Some(current) = self.selected else {
            return;
        };
        let Some(index) = self.index_of(current) else {
            return;
        };
        let layer = self.layer_of(&self.widgets[index].widget);

        let next = self
            .widgets
            .iter()
            .filter(|entry| entry.handle != current)
            .find(|entry| self.layer_of(&entry.widget) == layer)
            .map(|entry| entry.handle);

        if let Some(handle) = next {
            self.selected = Some(handle);
        }
    }

    // ---------------------------------------------------------------------
    // Event dispatch
    // ---------------------------------------------------------------------

    /// Route a host event to the matching entry point
    pub fn handle_event(&mut self, event: &Event) {
        match *event {
            Event::PointerPress { x, y } => self.pointer_pressed(x, y),
            Event::PointerMove { x, y } => self.pointer_moved(x, y),
            Event::KeyTyped(ref key) => self.key_typed(key),
            Event::KeyPressed(ref key) => self.key_pressed(key),
            Event::KeyReleased(ref key) => self.key_released(key),
            Event::Resize { width, height } => self.resize(width, height),
        }
    }
}

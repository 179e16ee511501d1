//! Browser binding: drives a [`VirtualGrid`] from a scrollable DOM element.
//!
//! The container gets an absolutely positioned spacer sized to the grid's
//! render size so the browser shows native scrollbars. Scroll events are fed
//! through the grid, corrections are written back with one `scrollTo`, and
//! the render callback receives the window to materialize.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use js_sys::{Function, Reflect};
use serde::Serialize;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{HtmlDivElement, HtmlElement};
use web_time::Instant;

use super::activity::ScrollActivity;
use super::scroll::{apply_host_scroll, ScrollHost};
use super::VirtualGrid;
use crate::mapping::ItemOffsetMapping;
use crate::types::{GridWindow, HostScroll, ScrollConfig, ScrollMode, ScrollSnapshot, Span};

/// Scroll position as a float; `scrollTop` is fractional on high-DPI screens.
fn scroll_f64(element: &HtmlElement, property: &str, fallback: i32) -> f64 {
    Reflect::get(element.as_ref(), &JsValue::from_str(property))
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(f64::from(fallback))
}

struct DomHost<'a> {
    element: &'a HtmlElement,
}

impl ScrollHost for DomHost<'_> {
    fn client_size(&self) -> (f64, f64) {
        (
            f64::from(self.element.client_width()),
            f64::from(self.element.client_height()),
        )
    }

    fn scroll_position(&self) -> (f64, f64) {
        (
            scroll_f64(self.element, "scrollLeft", self.element.scroll_left()),
            scroll_f64(self.element, "scrollTop", self.element.scroll_top()),
        )
    }

    fn scroll_to(&mut self, left: f64, top: f64) {
        self.element.scroll_to_with_x_and_y(left, top);
    }
}

struct SharedState {
    grid: VirtualGrid,
    activity: ScrollActivity,
    render_callback: Option<Function>,
    settle_timer: Option<i32>,
    settle_closure: Option<Closure<dyn FnMut()>>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RenderUpdate {
    window: GridWindow,
    snapshot: ScrollSnapshot,
    is_scrolling: bool,
}

/// WASM-exported virtual grid bound to a scroll container element.
#[wasm_bindgen]
pub struct WebVirtualGrid {
    state: Rc<RefCell<SharedState>>,
    container: HtmlElement,
    spacer: Option<HtmlDivElement>,
    scroll_closure: Option<Closure<dyn FnMut(web_sys::Event)>>,
    scroll_end_closure: Option<Closure<dyn FnMut(web_sys::Event)>>,
}

#[wasm_bindgen]
impl WebVirtualGrid {
    /// Bind a grid to `container`.
    ///
    /// `row_mapping` / `column_mapping` use the wire form
    /// `{kind: "fixed", size}` or `{kind: "variable", defaultSize, sizes}`;
    /// `config` may be `undefined` or any subset of the configuration.
    #[wasm_bindgen(constructor)]
    pub fn new(
        container: HtmlElement,
        row_count: usize,
        row_mapping: JsValue,
        column_count: usize,
        column_mapping: JsValue,
        config: JsValue,
    ) -> Result<WebVirtualGrid, JsValue> {
        console_error_panic_hook::set_once();

        let row_mapping: ItemOffsetMapping = serde_wasm_bindgen::from_value(row_mapping)?;
        let column_mapping: ItemOffsetMapping = serde_wasm_bindgen::from_value(column_mapping)?;
        let config: ScrollConfig = if config.is_undefined() || config.is_null() {
            ScrollConfig::default()
        } else {
            serde_wasm_bindgen::from_value(config)?
        };

        let mut grid = VirtualGrid::new(row_count, row_mapping, column_count, column_mapping, config)?;
        grid.set_viewport_size(
            f64::from(container.client_width()),
            f64::from(container.client_height()),
        );

        let has_scroll_end = web_sys::window()
            .map(|window| Reflect::has(window.as_ref(), &JsValue::from_str("onscrollend")).unwrap_or(false))
            .unwrap_or(false);

        let state = Rc::new(RefCell::new(SharedState {
            grid,
            activity: ScrollActivity::new(has_scroll_end),
            render_callback: None,
            settle_timer: None,
            settle_closure: None,
        }));

        let mut view = WebVirtualGrid {
            state,
            container,
            spacer: None,
            scroll_closure: None,
            scroll_end_closure: None,
        };
        view.setup_container(has_scroll_end);
        Ok(view)
    }

    fn setup_container(&mut self, has_scroll_end: bool) {
        let style = self.container.style();
        if style
            .get_property_value("position")
            .unwrap_or_default()
            .is_empty()
        {
            let _ = style.set_property("position", "relative");
        }
        let _ = style.set_property("overflow", "auto");
        let _ = style.set_property("will-change", "transform");

        let spacer = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.create_element("div").ok())
            .and_then(|element| element.dyn_into::<HtmlDivElement>().ok());
        if let Some(spacer) = &spacer {
            let spacer_style = spacer.style();
            let _ = spacer_style.set_property("position", "absolute");
            let _ = spacer_style.set_property("top", "0");
            let _ = spacer_style.set_property("left", "0");
            let _ = spacer_style.set_property("pointer-events", "none");
            let _ = self.container.append_child(spacer);
        }
        self.spacer = spacer;
        self.update_spacer();

        let weak_state = Rc::downgrade(&self.state);
        let container = self.container.clone();
        let scroll_closure = Closure::wrap(Box::new(move |_event: web_sys::Event| {
            if let Some(state) = weak_state.upgrade() {
                Self::handle_scroll(&state, &container);
            }
        }) as Box<dyn FnMut(web_sys::Event)>);
        let _ = self
            .container
            .add_event_listener_with_callback("scroll", scroll_closure.as_ref().unchecked_ref());
        self.scroll_closure = Some(scroll_closure);

        if has_scroll_end {
            let weak_state = Rc::downgrade(&self.state);
            let scroll_end_closure = Closure::wrap(Box::new(move |_event: web_sys::Event| {
                if let Some(state) = weak_state.upgrade() {
                    Self::handle_scroll_end(&state);
                }
            }) as Box<dyn FnMut(web_sys::Event)>);
            let _ = self.container.add_event_listener_with_callback(
                "scrollend",
                scroll_end_closure.as_ref().unchecked_ref(),
            );
            self.scroll_end_closure = Some(scroll_end_closure);
        }
    }

    fn update_spacer(&self) {
        let Some(spacer) = &self.spacer else {
            return;
        };
        let (width, height) = {
            let s = self.state.borrow();
            (s.grid.render_width(), s.grid.render_height())
        };
        let style = spacer.style();
        let _ = style.set_property("width", &format!("{width}px"));
        let _ = style.set_property("height", &format!("{height}px"));
    }

    fn handle_scroll(state: &Rc<RefCell<SharedState>>, container: &HtmlElement) {
        // Keep the borrow short: `scrollTo` below may fire a scroll event
        // synchronously, which re-enters this handler.
        let correction = {
            let mut s = state.borrow_mut();
            let host = DomHost { element: container };
            let (width, height) = host.client_size();
            let (left, top) = host.scroll_position();
            s.activity.on_scroll(Instant::now());
            s.grid.on_host_scroll(width, height, left, top)
        };
        apply_host_scroll(&mut DomHost { element: container }, correction);
        Self::schedule_settle_timeout(state);
        Self::invoke_render_callback(state);
    }

    fn handle_scroll_end(state: &Rc<RefCell<SharedState>>) {
        {
            let mut s = state.borrow_mut();
            s.activity.on_scroll_end();
            Self::cancel_settle_timeout(&mut s);
        }
        Self::invoke_render_callback(state);
    }

    fn cancel_settle_timeout(s: &mut SharedState) {
        if let (Some(timer_id), Some(window)) = (s.settle_timer.take(), web_sys::window()) {
            window.clear_timeout_with_handle(timer_id);
        }
    }

    fn schedule_settle_timeout(state: &Rc<RefCell<SharedState>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let mut s = state.borrow_mut();
        // Restart the quiet period
        Self::cancel_settle_timeout(&mut s);
        if s.settle_closure.is_none() {
            let weak_state: Weak<RefCell<SharedState>> = Rc::downgrade(state);
            let closure = Closure::wrap(Box::new(move || {
                if let Some(state) = weak_state.upgrade() {
                    Self::handle_settle(&state);
                }
            }) as Box<dyn FnMut()>);
            s.settle_closure = Some(closure);
        }
        let Some(callback) = s.settle_closure.as_ref() else {
            return;
        };
        let delay = i32::try_from(s.activity.timeout().as_millis()).unwrap_or(i32::MAX);
        s.settle_timer = window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                callback.as_ref().unchecked_ref(),
                delay,
            )
            .ok();
    }

    fn handle_settle(state: &Rc<RefCell<SharedState>>) {
        let settled = {
            let mut s = state.borrow_mut();
            s.settle_timer = None;
            s.activity.poll(Instant::now())
        };
        if settled {
            Self::invoke_render_callback(state);
        } else {
            // An event slipped in after the timer was armed
            Self::schedule_settle_timeout(state);
        }
    }

    fn render_update(s: &SharedState) -> Result<JsValue, JsValue> {
        let update = RenderUpdate {
            window: s.grid.window(),
            snapshot: s.grid.snapshot(),
            is_scrolling: s.activity.is_scrolling(Instant::now()),
        };
        serde_wasm_bindgen::to_value(&update).map_err(JsValue::from)
    }

    fn invoke_render_callback(state: &Rc<RefCell<SharedState>>) {
        let (callback, update) = {
            let s = state.borrow();
            (s.render_callback.clone(), Self::render_update(&s))
        };
        if let (Some(callback), Ok(update)) = (callback, update) {
            let _ = callback.call1(&JsValue::NULL, &update);
        }
    }

    fn apply(&self, scroll: HostScroll) {
        apply_host_scroll(
            &mut DomHost {
                element: &self.container,
            },
            scroll,
        );
        Self::invoke_render_callback(&self.state);
    }

    /// Register the callback invoked with `{window, snapshot, isScrolling}`
    /// whenever the materialized window may have changed.
    #[wasm_bindgen]
    pub fn set_render_callback(&mut self, callback: Function) {
        self.state.borrow_mut().render_callback = Some(callback);
        Self::invoke_render_callback(&self.state);
    }

    /// Current window as `{window, snapshot, isScrolling}`.
    #[wasm_bindgen]
    pub fn window(&self) -> Result<JsValue, JsValue> {
        Self::render_update(&self.state.borrow())
    }

    /// Whether the user is actively scrolling.
    #[wasm_bindgen]
    pub fn is_scrolling(&self) -> bool {
        self.state.borrow().activity.is_scrolling(Instant::now())
    }

    /// Re-read the container size after a resize.
    #[wasm_bindgen]
    pub fn resize(&mut self) {
        let width = f64::from(self.container.client_width());
        let height = f64::from(self.container.client_height());
        self.state.borrow_mut().grid.set_viewport_size(width, height);
        Self::invoke_render_callback(&self.state);
    }

    /// Scroll to logical offsets; pass `undefined` to leave an axis alone.
    #[wasm_bindgen]
    pub fn scroll_to(&mut self, row_offset: Option<f64>, column_offset: Option<f64>) {
        let scroll = self
            .state
            .borrow_mut()
            .grid
            .scroll_to(row_offset, column_offset);
        self.apply(scroll);
    }

    /// Bring a cell, row or column into view. `mode` is `"visible"` or
    /// anything else for an unconditional scroll.
    #[wasm_bindgen]
    pub fn scroll_to_item(&mut self, row: Option<usize>, column: Option<usize>, mode: Option<String>) {
        let mode = parse_mode(mode.as_deref());
        let scroll = self
            .state
            .borrow_mut()
            .grid
            .scroll_to_item(row, column, mode);
        self.apply(scroll);
    }

    /// Bring a logical area into view; each axis is `(offset, size)` or
    /// `undefined`.
    #[wasm_bindgen]
    pub fn scroll_to_area(
        &mut self,
        row_offset: Option<f64>,
        row_size: Option<f64>,
        column_offset: Option<f64>,
        column_size: Option<f64>,
        mode: Option<String>,
    ) {
        let mode = parse_mode(mode.as_deref());
        let row_span = row_offset.map(|offset| Span::new(offset, row_size.unwrap_or(0.0)));
        let column_span =
            column_offset.map(|offset| Span::new(offset, column_size.unwrap_or(0.0)));
        let scroll = self
            .state
            .borrow_mut()
            .grid
            .scroll_to_area(row_span, column_span, mode);
        self.apply(scroll);
    }

    /// Change row and column counts.
    #[wasm_bindgen]
    pub fn set_item_counts(&mut self, row_count: usize, column_count: usize) -> Result<(), JsValue> {
        let scroll = self
            .state
            .borrow_mut()
            .grid
            .set_item_counts(row_count, column_count)?;
        self.update_spacer();
        self.apply(scroll);
        Ok(())
    }
}

fn parse_mode(mode: Option<&str>) -> ScrollMode {
    match mode {
        Some("visible") => ScrollMode::Visible,
        _ => ScrollMode::Start,
    }
}

impl Drop for WebVirtualGrid {
    fn drop(&mut self) {
        if let Some(closure) = self.scroll_closure.take() {
            let _ = self
                .container
                .remove_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref());
        }
        if let Some(closure) = self.scroll_end_closure.take() {
            let _ = self
                .container
                .remove_event_listener_with_callback("scrollend", closure.as_ref().unchecked_ref());
        }
        if let Ok(mut s) = self.state.try_borrow_mut() {
            Self::cancel_settle_timeout(&mut s);
            s.activity.reset();
            s.settle_closure = None;
        }
        if let Some(spacer) = self.spacer.take() {
            spacer.remove();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    #[wasm_bindgen_test]
    fn test_parse_mode() {
        assert_eq!(parse_mode(Some("visible")), ScrollMode::Visible);
        assert_eq!(parse_mode(Some("start")), ScrollMode::Start);
        assert_eq!(parse_mode(None), ScrollMode::Start);
    }
}

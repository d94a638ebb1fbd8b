//! Browser bindings
//!
//! `WasmDesktop` exposes the engine to JavaScript with JSON payloads. Change
//! notifications are deferred until the engine borrow is released so a JS
//! callback can read the render list straight away.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use tracing::warn;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Event, EventTarget, PointerEvent, Window};

use crate::config::DesktopConfig;
use crate::engine::DesktopEngine;
use crate::error::DesktopError;
use crate::input::PointerCapture;
use crate::keyboard::KeyChord;
use crate::math::{Size, Vec2};
use crate::persistence::LocalStorageStore;
use crate::store::Command;
use crate::tiling::{ResizeEdge, TileLayout};
use crate::window::OpenWindow;

fn to_js(e: DesktopError) -> JsValue {
    JsValue::from_str(&e.to_string())
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value).map_err(|e| to_js(e.into()))
}

fn from_json<T: serde::de::DeserializeOwned>(json: &str) -> Result<T, JsValue> {
    serde_json::from_str(json).map_err(|e| to_js(e.into()))
}

/// Pending change notification for the JS side
#[derive(Default)]
struct Notifier {
    dirty: Cell<bool>,
    callback: RefCell<Option<js_sys::Function>>,
}

impl Notifier {
    fn mark(&self) {
        self.dirty.set(true);
    }

    fn flush(&self) {
        if !self.dirty.replace(false) {
            return;
        }
        let callback = self.callback.borrow().clone();
        if let Some(callback) = callback {
            if let Err(e) = callback.call0(&JsValue::NULL) {
                warn!(error = ?e, "change callback threw");
            }
        }
    }
}

type Shared = Rc<RefCell<DesktopEngine>>;

fn with_engine(engine: &Weak<RefCell<DesktopEngine>>, notifier: &Notifier, f: impl FnOnce(&mut DesktopEngine)) {
    let Some(engine) = engine.upgrade() else {
        return;
    };
    match engine.try_borrow_mut() {
        Ok(mut engine) => f(&mut engine),
        Err(_) => {
            warn!("pointer event during engine call, dropped");
            return;
        }
    }
    notifier.flush();
}

/// Pointer capture over document-level listeners
///
/// Listens for `pointermove`, `pointerup` and `pointercancel` on the
/// document and `blur` on the window while a gesture is active. The
/// callbacks live as long as the capture so detaching from inside one of
/// them is safe.
pub struct DomPointerCapture {
    window: Window,
    document: Document,
    on_move: Closure<dyn FnMut(PointerEvent)>,
    on_up: Closure<dyn FnMut(PointerEvent)>,
    on_cancel: Closure<dyn FnMut(PointerEvent)>,
    on_blur: Closure<dyn FnMut(Event)>,
}

impl DomPointerCapture {
    fn new(engine: Weak<RefCell<DesktopEngine>>, notifier: Rc<Notifier>) -> Option<Self> {
        let window = web_sys::window()?;
        let document = window.document()?;

        let (e, n) = (engine.clone(), Rc::clone(&notifier));
        let on_move = Closure::<dyn FnMut(PointerEvent)>::new(move |event: PointerEvent| {
            let (x, y) = (event.client_x() as f32, event.client_y() as f32);
            with_engine(&e, &n, |engine| {
                engine.pointer_move(x, y);
            });
        });

        let (e, n) = (engine.clone(), Rc::clone(&notifier));
        let on_up = Closure::<dyn FnMut(PointerEvent)>::new(move |_event: PointerEvent| {
            with_engine(&e, &n, |engine| {
                engine.pointer_up();
            });
        });

        let (e, n) = (engine.clone(), Rc::clone(&notifier));
        let on_cancel = Closure::<dyn FnMut(PointerEvent)>::new(move |_event: PointerEvent| {
            with_engine(&e, &n, |engine| {
                engine.pointer_cancel();
            });
        });

        let (e, n) = (engine, notifier);
        let on_blur = Closure::<dyn FnMut(Event)>::new(move |_event: Event| {
            with_engine(&e, &n, |engine| {
                engine.blur();
            });
        });

        Some(Self {
            window,
            document,
            on_move,
            on_up,
            on_cancel,
            on_blur,
        })
    }

    fn listeners(&self) -> [(&EventTarget, &'static str, &js_sys::Function); 4] {
        let document: &EventTarget = self.document.as_ref();
        let window: &EventTarget = self.window.as_ref();
        [
            (document, "pointermove", self.on_move.as_ref().unchecked_ref()),
            (document, "pointerup", self.on_up.as_ref().unchecked_ref()),
            (document, "pointercancel", self.on_cancel.as_ref().unchecked_ref()),
            (window, "blur", self.on_blur.as_ref().unchecked_ref()),
        ]
    }
}

impl PointerCapture for DomPointerCapture {
    fn attach(&self) {
        for (target, event, callback) in self.listeners() {
            if let Err(e) = target.add_event_listener_with_callback(event, callback) {
                warn!(event, error = ?e, "failed to add pointer listener");
            }
        }
    }

    fn detach(&self) {
        for (target, event, callback) in self.listeners() {
            if let Err(e) = target.remove_event_listener_with_callback(event, callback) {
                warn!(event, error = ?e, "failed to remove pointer listener");
            }
        }
    }
}

/// Desktop window manager exported to JavaScript
#[wasm_bindgen]
pub struct WasmDesktop {
    engine: Shared,
    notifier: Rc<Notifier>,
}

#[wasm_bindgen]
impl WasmDesktop {
    /// Create a desktop; `config_json` may be omitted for defaults
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: Option<String>) -> Result<WasmDesktop, JsValue> {
        let config = match config_json {
            Some(json) => DesktopConfig::from_json(&json).map_err(to_js)?,
            None => DesktopConfig::default(),
        };

        let engine = Rc::new(RefCell::new(DesktopEngine::new(
            config,
            Box::new(LocalStorageStore::new()),
        )));
        let notifier = Rc::new(Notifier::default());

        {
            let mut inner = engine.borrow_mut();
            let n = Rc::clone(&notifier);
            inner.subscribe(move |_| n.mark());

            match DomPointerCapture::new(Rc::downgrade(&engine), Rc::clone(&notifier)) {
                Some(capture) => inner.set_pointer_capture(Rc::new(capture)),
                None => warn!("no document, pointer capture disabled"),
            }
        }

        Ok(WasmDesktop { engine, notifier })
    }

    /// Register a callback invoked (with no arguments) after state changes
    pub fn on_change(&self, callback: js_sys::Function) {
        *self.notifier.callback.borrow_mut() = Some(callback);
    }

    /// Boot with a JSON array of open requests
    pub fn boot(&self, initial_json: &str) -> Result<(), JsValue> {
        let initial: Vec<OpenWindow> = from_json(initial_json)?;
        self.engine.borrow_mut().boot(initial);
        self.notifier.flush();
        Ok(())
    }

    /// Dispatch a JSON command, e.g. `{"type":"focus","id":"notes"}`
    pub fn dispatch(&self, command_json: &str) -> Result<bool, JsValue> {
        let command: Command = from_json(command_json)?;
        Ok(self.run(|engine| engine.dispatch(command)))
    }

    pub fn open_window(&self, request_json: &str) -> Result<bool, JsValue> {
        let request: OpenWindow = from_json(request_json)?;
        Ok(self.run(|engine| engine.open_window(request)))
    }

    /// Open a file in the application its extension maps to
    pub fn open_file(&self, id: &str, filename: &str, content_json: Option<String>) -> Result<bool, JsValue> {
        let mut request = OpenWindow::for_file(id, filename);
        if let Some(json) = content_json {
            request = request.with_content(from_json(&json)?);
        }
        Ok(self.run(|engine| engine.open_window(request)))
    }

    pub fn close_window(&self, id: &str) -> bool {
        self.run(|engine| engine.close_window(id))
    }

    pub fn focus_window(&self, id: &str) -> bool {
        self.run(|engine| engine.focus_window(id))
    }

    pub fn minimize_window(&self, id: &str) -> bool {
        self.run(|engine| engine.dispatch(Command::minimize(id)))
    }

    pub fn maximize_window(&self, id: &str) -> bool {
        self.run(|engine| engine.dispatch(Command::maximize(id)))
    }

    pub fn restore_window(&self, id: &str) -> bool {
        self.run(|engine| engine.dispatch(Command::restore(id)))
    }

    /// Select a layout by name ("vertical", "grid", ...) or floating with none
    pub fn set_tile_layout(&self, layout: Option<String>) -> Result<bool, JsValue> {
        let layout = layout
            .as_deref()
            .map(TileLayout::from_id)
            .transpose()
            .map_err(to_js)?;
        Ok(self.run(|engine| engine.dispatch(Command::set_tile_layout(layout))))
    }

    pub fn toggle_tile_manager(&self, enabled: bool) -> bool {
        self.run(|engine| engine.dispatch(Command::toggle_tile_manager(enabled)))
    }

    /// Global keydown; returns whether it was a tiling shortcut
    pub fn handle_key(&self, alt: bool, key: &str) -> bool {
        let chord = KeyChord {
            alt,
            key: key.to_string(),
        };
        self.run(|engine| engine.handle_key(&chord))
    }

    pub fn start_move_drag(&self, id: &str, x: f32, y: f32) -> bool {
        self.run(|engine| engine.start_move_drag(id, x, y).is_handled())
    }

    /// Resize-handle press; `handle` is an edge or compass name ("se", "left")
    pub fn start_resize_drag(&self, id: &str, handle: &str, x: f32, y: f32) -> bool {
        let Some(edge) = ResizeEdge::from_handle(handle) else {
            return false;
        };
        self.run(|engine| engine.start_resize_drag(id, edge, x, y).is_handled())
    }

    pub fn pointer_move(&self, x: f32, y: f32) -> bool {
        self.run(|engine| engine.pointer_move(x, y).is_handled())
    }

    pub fn pointer_up(&self) -> bool {
        self.run(|engine| engine.pointer_up().is_handled())
    }

    pub fn pointer_cancel(&self) -> bool {
        self.run(|engine| engine.pointer_cancel().is_handled())
    }

    pub fn blur(&self) -> bool {
        self.run(|engine| engine.blur().is_handled())
    }

    pub fn resize_start(&self, id: &str, handle: &str) -> bool {
        let Some(edge) = ResizeEdge::from_handle(handle) else {
            return false;
        };
        self.run(|engine| engine.resize_start(id, edge).is_handled())
    }

    pub fn resize_update(&self, id: &str, x: f32, y: f32, width: f32, height: f32) -> bool {
        self.run(|engine| {
            engine
                .resize_update(id, Size::new(width, height), Vec2::new(x, y))
                .is_handled()
        })
    }

    pub fn resize_end(&self, id: &str, x: f32, y: f32, width: f32, height: f32) -> bool {
        self.run(|engine| {
            engine
                .resize_end(id, Size::new(width, height), Vec2::new(x, y))
                .is_handled()
        })
    }

    pub fn set_viewport(&self, width: f32, height: f32) {
        self.run(|engine| engine.set_viewport(width, height));
    }

    /// Visible windows bottom to top as JSON
    pub fn render_list(&self) -> Result<String, JsValue> {
        to_json(&self.engine.borrow().render_list())
    }

    /// Taskbar buttons as JSON
    pub fn taskbar_entries(&self) -> Result<String, JsValue> {
        to_json(&self.engine.borrow().taskbar_entries())
    }

    pub fn activate_from_taskbar(&self, id: &str) {
        self.run(|engine| engine.activate_from_taskbar(id));
    }

    /// Full state snapshot as JSON
    pub fn snapshot(&self) -> Result<String, JsValue> {
        to_json(&*self.engine.borrow().snapshot())
    }

    /// Release listeners and drop any gesture
    pub fn teardown(&self) {
        self.engine.borrow_mut().teardown();
    }
}

impl WasmDesktop {
    fn run<R>(&self, f: impl FnOnce(&mut DesktopEngine) -> R) -> R {
        let result = f(&mut self.engine.borrow_mut());
        self.notifier.flush();
        result
    }
}

//! LoomScape entry point
//!
//! In the browser this finds the loom canvas, sizes it to the viewport and
//! runs the animation-frame loop. Natively it runs the field headless and
//! logs frame statistics.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_loom {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, Window};

    use loomscape::renderer::CanvasSurface;
    use loomscape::{Loom, Settings};

    /// Page attribute holding optional settings JSON
    const SETTINGS_ATTR: &str = "data-loom-settings";

    /// Everything the frame loop and resize listener share
    struct Page {
        loom: Loom,
        surface: CanvasSurface,
        canvas: HtmlCanvasElement,
    }

    impl Page {
        fn frame(&mut self) {
            if let Err(e) = self.loom.frame(&mut self.surface) {
                log::warn!("Frame {} failed: {}", self.loom.field().ticks(), e);
            }
        }

        fn resize(&mut self, width: u32, height: u32) {
            self.canvas.set_width(width);
            self.canvas.set_height(height);
            self.loom.resize(width as f32, height as f32);
        }
    }

    /// Viewport size in CSS pixels
    fn viewport_size(window: &Window) -> (u32, u32) {
        let read = |v: Result<JsValue, JsValue>| v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
        (
            read(window.inner_width()).max(0.0) as u32,
            read(window.inner_height()).max(0.0) as u32,
        )
    }

    /// Settings from the document element, falling back to defaults
    fn load_settings(window: &Window) -> Settings {
        let json = window
            .document()
            .and_then(|d| d.document_element())
            .and_then(|el| el.get_attribute(SETTINGS_ATTR));

        match json {
            Some(json) => match Settings::from_json(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", SETTINGS_ATTR);
                    settings
                }
                Err(e) => {
                    log::warn!("Ignoring {}: {}", SETTINGS_ATTR, e);
                    Settings::default()
                }
            },
            None => Settings::default(),
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        if console_log::init_with_level(log::Level::Info).is_err() {
            web_sys::console::warn_1(&"Logger already initialized".into());
        }

        let Some(window) = web_sys::window() else {
            return;
        };
        let Some(document) = window.document() else {
            return;
        };

        let settings = load_settings(&window);

        // The loom is decoration; a page without the canvas just skips it
        let Some(canvas) = document
            .get_element_by_id(&settings.canvas_id)
            .and_then(|el| el.dyn_into::<HtmlCanvasElement>().ok())
        else {
            log::info!("No #{} canvas, loom disabled", settings.canvas_id);
            return;
        };

        let surface = match CanvasSurface::from_canvas(&canvas) {
            Ok(surface) => surface,
            Err(e) => {
                log::warn!("Loom disabled: {}", e);
                return;
            }
        };

        let (width, height) = viewport_size(&window);
        canvas.set_width(width);
        canvas.set_height(height);

        let seed = js_sys::Date::now() as u64;
        let loom = Loom::new(settings, width as f32, height as f32, seed);
        let page = Rc::new(RefCell::new(Page {
            loom,
            surface,
            canvas,
        }));

        setup_resize_handler(&window, page.clone());

        request_animation_frame(&window, page);

        log::info!("Loom running");
    }

    fn setup_resize_handler(window: &Window, page: Rc<RefCell<Page>>) {
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            let Some(window) = web_sys::window() else {
                return;
            };
            let (width, height) = viewport_size(&window);
            page.borrow_mut().resize(width, height);
        });
        let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    /// Arm exactly one follow-up frame
    fn request_animation_frame(window: &Window, page: Rc<RefCell<Page>>) {
        // The JS function owns the callback and frees it after its one call
        let callback = Closure::once_into_js(move |_time: f64| {
            frame_loop(page);
        });
        if let Err(e) = window.request_animation_frame(callback.unchecked_ref()) {
            log::warn!("requestAnimationFrame failed: {:?}", e);
        }
    }

    fn frame_loop(page: Rc<RefCell<Page>>) {
        page.borrow_mut().frame();

        if let Some(window) = web_sys::window() {
            request_animation_frame(&window, page);
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_loom::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("LoomScape (native) starting...");
    log::info!("Native mode runs the field headless - build for wasm32 to draw on a page");

    run_headless();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Run a few seconds of frames into a recording surface, with one resize
#[cfg(not(target_arch = "wasm32"))]
fn run_headless() {
    use loomscape::renderer::RecordingSurface;
    use loomscape::{Loom, Settings};
    use std::time::{SystemTime, UNIX_EPOCH};

    const FRAMES: u64 = 600;
    const RESIZE_AT: u64 = 300;

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);

    let mut loom = Loom::new(Settings::default(), 1280.0, 720.0, seed);
    let mut surface = RecordingSurface::new();
    let mut total_links = 0usize;

    for n in 1..=FRAMES {
        if n == RESIZE_AT {
            loom.resize(800.0, 600.0);
        }
        match loom.frame(&mut surface) {
            Ok(stats) => {
                total_links += stats.links;
                if stats.frame % 60 == 0 {
                    log::debug!(
                        "Frame {}: {} disks, {} links",
                        stats.frame,
                        stats.disks,
                        stats.links
                    );
                }
            }
            Err(e) => log::warn!("Frame {} failed: {}", n, e),
        }
    }

    let bounds = loom.field().bounds();
    let escaped = loom
        .field()
        .particles()
        .iter()
        .filter(|p| !p.is_inside(bounds))
        .count();
    log::info!(
        "Ran {} frames, {:.1} links/frame on average, {} particles outside bounds",
        FRAMES,
        total_links as f64 / FRAMES as f64,
        escaped
    );
}

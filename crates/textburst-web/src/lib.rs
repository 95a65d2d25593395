pub mod canvas;
pub mod runner;

pub use canvas::{CanvasRenderer, CanvasSampler, LocationNavigator, WebError};
pub use runner::WidgetRunner;

// Re-exported so `export_widget!` expands without extra dependencies in the page crate.
pub use console_error_panic_hook;
pub use console_log;
pub use log;

/// Generate all `#[wasm_bindgen]` exports for a particle-text page.
///
/// Generates:
/// - `thread_local!` storage for the WidgetRunner
/// - `with_runner()` helper function
/// - wasm-bindgen exports for init, per-frame tick, pointer input and resize
///
/// # Usage
///
/// ```ignore
/// use wasm_bindgen::prelude::*;
/// use textburst::WidgetConfig;
///
/// textburst_web::export_widget!(WidgetConfig::from_json(include_str!("../widget.json")), "my-page");
/// ```
///
/// # Arguments
///
/// - `$config`: An expression yielding `Result<WidgetConfig, E>` where `E: Display`
/// - `$name`: A string literal used in the initialization log message
#[macro_export]
macro_rules! export_widget {
    ($config:expr, $name:literal) => {
        use std::cell::RefCell;

        thread_local! {
            static RUNNER: RefCell<Option<$crate::WidgetRunner>> = RefCell::new(None);
        }

        fn with_runner<R>(f: impl FnOnce(&mut $crate::WidgetRunner) -> R) -> Option<R> {
            RUNNER.with(|cell| {
                let mut borrow = cell.borrow_mut();
                match borrow.as_mut() {
                    Some(runner) => Some(f(runner)),
                    None => {
                        $crate::log::warn!("{}: widget not initialized, call widget_init() first", $name);
                        None
                    }
                }
            })
        }

        #[wasm_bindgen]
        pub fn widget_init(canvas_id: &str) -> Result<(), JsValue> {
            $crate::console_error_panic_hook::set_once();
            let _ = $crate::console_log::init_with_level($crate::log::Level::Info);

            let config = ($config)
                .map_err(|e| JsValue::from_str(&format!("{}: invalid widget config: {}", $name, e)))?;
            let mut runner = $crate::WidgetRunner::attach(canvas_id, config)
                .map_err(|e| JsValue::from_str(&format!("{}: {}", $name, e)))?;
            runner.init();

            RUNNER.with(|cell| {
                *cell.borrow_mut() = Some(runner);
            });
            $crate::log::info!("{}: initialized", $name);
            Ok(())
        }

        /// Call from `requestAnimationFrame` with its timestamp.
        #[wasm_bindgen]
        pub fn widget_frame(now: f64) {
            with_runner(|r| r.frame(now));
        }

        #[wasm_bindgen]
        pub fn widget_pointer_move(client_x: f32, client_y: f32) {
            with_runner(|r| r.pointer_move(client_x, client_y));
        }

        #[wasm_bindgen]
        pub fn widget_pointer_leave() {
            with_runner(|r| r.pointer_leave());
        }

        #[wasm_bindgen]
        pub fn widget_tap(client_x: f32, client_y: f32) {
            with_runner(|r| r.tap(client_x, client_y));
        }

        #[wasm_bindgen]
        pub fn widget_resize() {
            with_runner(|r| r.resize());
        }

        // ---- State accessors ----

        #[wasm_bindgen]
        pub fn widget_is_exploding() -> bool {
            with_runner(|r| r.is_exploding()).unwrap_or(false)
        }

        #[wasm_bindgen]
        pub fn widget_particle_count() -> u32 {
            with_runner(|r| r.particle_count()).unwrap_or(0)
        }
    };
}

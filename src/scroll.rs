//! Window scroll subscription.

use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Window;

/// Current vertical scroll offset of the window, or `0.0` when there is no
/// window to ask.
pub fn scroll_offset() -> f64 {
    web_sys::window()
        .and_then(|window| window.scroll_y().ok())
        .unwrap_or(0.0)
}

/// A `scroll` listener registered on the window for as long as this value
/// lives. Dropping it removes the listener and frees the closure.
pub struct ScrollListener {
    window: Window,
    callback: Closure<dyn Fn()>,
}

impl ScrollListener {
    /// Registers `on_scroll` on the window. Returns `None` outside a browser or
    /// when registration is rejected.
    pub fn attach<F>(on_scroll: F) -> Option<Self>
    where
        F: Fn() + 'static,
    {
        let window = match web_sys::window() {
            Some(window) => window,
            None => {
                warn!("No window available, scroll listener not registered");
                return None;
            }
        };
        let callback = Closure::<dyn Fn()>::new(on_scroll);

        if let Err(e) =
            window.add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())
        {
            warn!("Failed to register scroll listener: {:?}", e);
            return None;
        }

        Some(Self { window, callback })
    }
}

impl Drop for ScrollListener {
    fn drop(&mut self) {
        if let Err(e) = self
            .window
            .remove_event_listener_with_callback("scroll", self.callback.as_ref().unchecked_ref())
        {
            warn!("Failed to remove scroll listener: {:?}", e);
        }
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;
    use crate::test_support::fire_scroll;
    use wasm_bindgen_test::wasm_bindgen_test;

    fn counting_listener(hits: &Rc<Cell<u32>>) -> ScrollListener {
        let hits = hits.clone();
        ScrollListener::attach(move || hits.set(hits.get() + 1)).expect("listener attached")
    }

    #[wasm_bindgen_test]
    fn dropped_listener_no_longer_fires() {
        let hits = Rc::new(Cell::new(0));

        let first = counting_listener(&hits);
        drop(first);
        let second = counting_listener(&hits);

        fire_scroll();
        assert_eq!(hits.get(), 1);

        drop(second);
        fire_scroll();
        assert_eq!(hits.get(), 1);
    }

    #[wasm_bindgen_test]
    fn each_live_listener_fires_once_per_event() {
        let hits = Rc::new(Cell::new(0));
        let _a = counting_listener(&hits);
        let _b = counting_listener(&hits);

        fire_scroll();
        assert_eq!(hits.get(), 2);
    }
}

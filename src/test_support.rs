//! Helpers for tests that mount components in a real browser.

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_test::wasm_bindgen_test_configure;
use web_sys::{Element, Event, Window};

wasm_bindgen_test_configure!(run_in_browser);

pub fn window() -> Window {
    web_sys::window().expect("running in a browser")
}

/// Fresh `<div>` appended to the body. Call `.remove()` when done.
pub fn mount_point() -> Element {
    let document = window().document().expect("document");
    let root = document.create_element("div").expect("create div");
    document
        .body()
        .expect("body")
        .append_child(&root)
        .expect("append mount point");
    root
}

/// Lets the scheduler render and native events arrive.
pub async fn settle() {
    TimeoutFuture::new(50).await;
}

pub fn fire_scroll() {
    let event = Event::new("scroll").expect("scroll event");
    window().dispatch_event(&event).expect("dispatch scroll");
}

/// Scrolls the window to `y` and makes sure a scroll event was delivered.
pub async fn scroll_to(y: f64) {
    let window = window();
    let body = window.document().and_then(|d| d.body()).expect("body");
    body.set_attribute("style", "min-height: 5000px")
        .expect("tall body");

    window.scroll_to_with_x_and_y(0.0, y);
    fire_scroll();
    settle().await;
}

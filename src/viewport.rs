//! Viewport Height
//!
//! Mobile browsers report a `100vh` that ignores their toolbars. The real
//! inner height is published as the `--vh` custom property (1% of it) and
//! kept current on resize.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// Installed `--vh` tracker; the resize listener goes away with the guard
pub struct ViewportHeight {
    window: web_sys::Window,
    on_resize: Closure<dyn FnMut(web_sys::Event)>,
}

impl ViewportHeight {
    pub fn install() -> Option<Self> {
        let window = web_sys::window()?;
        apply(&window);

        let target = window.clone();
        let on_resize = Closure::<dyn FnMut(web_sys::Event)>::new(move |_ev: web_sys::Event| {
            apply(&target);
        });
        window
            .add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())
            .ok()?;
        Some(Self { window, on_resize })
    }
}

impl Drop for ViewportHeight {
    fn drop(&mut self) {
        let _ = self
            .window
            .remove_event_listener_with_callback("resize", self.on_resize.as_ref().unchecked_ref());
    }
}

fn apply(window: &web_sys::Window) {
    let Some(height) = window.inner_height().ok().and_then(|h| h.as_f64()) else {
        return;
    };
    let Some(root) = window
        .document()
        .and_then(|doc| doc.document_element())
        .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
    else {
        return;
    };
    if let Err(e) = root.style().set_property("--vh", &vh_value(height)) {
        log::warn!("[VIEWPORT] could not set --vh: {:?}", e);
    }
}

fn vh_value(inner_height: f64) -> String {
    format!("{}px", inner_height * 0.01)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vh_is_one_percent() {
        assert_eq!(vh_value(800.0), "8px");
        assert_eq!(vh_value(0.0), "0px");
    }
}

//! Window scroll tracking.
//!
//! `ScrollSubscription` owns the `scroll` listener: it is registered on
//! construction and removed when the guard drops. `use_scrolled_past` ties
//! that guard to a component scope (mount -> attach, unmount -> drop).

use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;

use super::surface::is_scrolled_past;

#[cfg(target_arch = "wasm32")]
pub use wasm::ScrollSubscription;

#[cfg(not(target_arch = "wasm32"))]
pub use native::ScrollSubscription;

/// Track whether the window has scrolled strictly past `threshold` px.
///
/// Starts `false`; only scroll events move it.
pub fn use_scrolled_past(threshold: f64) -> ReadOnlySignal<bool> {
    let mut scrolled = use_signal(|| false);
    let slot = use_hook(|| Rc::new(RefCell::new(None::<ScrollSubscription>)));

    {
        let slot = slot.clone();
        use_effect(move || {
            if slot.borrow().is_some() {
                return;
            }
            let attached = ScrollSubscription::attach(move |scroll_y| {
                let next = is_scrolled_past(scroll_y, threshold);
                // Skip redundant writes so unrelated scrolling doesn't re-render.
                if *scrolled.peek() != next {
                    tracing::debug!(scroll_y, scrolled = next, "header surface changed");
                    scrolled.set(next);
                }
            });
            match attached {
                Ok(Some(subscription)) => {
                    tracing::debug!("scroll listener attached");
                    slot.borrow_mut().replace(subscription);
                }
                Ok(None) => {}
                Err(err) => tracing::warn!(%err, "navbar will stay transparent"),
            }
        });
    }

    use_drop(move || {
        if slot.borrow_mut().take().is_some() {
            tracing::debug!("scroll listener released");
        }
    });

    scrolled.into()
}

#[cfg(target_arch = "wasm32")]
mod wasm {
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::JsCast;

    use crate::error::{UiError, UiResult};

    const SCROLL_EVENT: &str = "scroll";

    pub struct ScrollSubscription {
        window: web_sys::Window,
        handler: Closure<dyn FnMut()>,
    }

    impl ScrollSubscription {
        /// Register `on_scroll` for window scroll events; it receives `window.scrollY`.
        pub fn attach(mut on_scroll: impl FnMut(f64) + 'static) -> UiResult<Option<Self>> {
            let window = web_sys::window().ok_or(UiError::WindowUnavailable)?;
            let source = window.clone();
            let handler = Closure::wrap(Box::new(move || {
                on_scroll(source.scroll_y().unwrap_or(0.0));
            }) as Box<dyn FnMut()>);

            window
                .add_event_listener_with_callback(SCROLL_EVENT, handler.as_ref().unchecked_ref())
                .map_err(|err| UiError::ScrollListener {
                    action: "add",
                    detail: format!("{err:?}"),
                })?;

            Ok(Some(Self { window, handler }))
        }
    }

    impl Drop for ScrollSubscription {
        fn drop(&mut self) {
            if let Err(err) = self.window.remove_event_listener_with_callback(
                SCROLL_EVENT,
                self.handler.as_ref().unchecked_ref(),
            ) {
                tracing::warn!(?err, "failed to remove scroll listener");
            }
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use crate::error::UiResult;

    /// Off the web there is no window to scroll; nothing is attached.
    pub struct ScrollSubscription;

    impl ScrollSubscription {
        pub fn attach(_on_scroll: impl FnMut(f64) + 'static) -> UiResult<Option<Self>> {
            Ok(None)
        }
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[test]
    fn native_attach_is_a_no_op() {
        let attached = ScrollSubscription::attach(|_| panic!("no scroll events off the web"));
        assert!(matches!(attached, Ok(None)));
    }

    #[component]
    fn ScrolledFlag() -> Element {
        let scrolled = use_scrolled_past(40.0);
        rsx! { span { "data-scrolled": "{scrolled()}" } }
    }

    #[test]
    fn hook_starts_unscrolled() {
        let mut dom = VirtualDom::new(ScrolledFlag);
        dom.rebuild_in_place();
        let html = dioxus_ssr::render(&dom);
        assert!(html.contains(r#"data-scrolled="false""#), "{html}");
    }
}

//! Viewport sentinel for infinite scroll.
//!
//! Wraps an `IntersectionObserver` rooted at the scroll container and reports
//! plain `bool` visibility for one target element. Dropping the observer
//! disconnects it, so no callback fires after the owning view is gone.
//!
//! TRADE-OFFS
//! ==========
//! Browser-only; SSR and native builds only get `root_margin`, which keeps the
//! margin formatting testable.

#[cfg(test)]
#[path = "sentinel_test.rs"]
mod sentinel_test;

/// CSS margin string for the observer's root, extending the viewport by
/// `lookahead_px` on every side.
pub fn root_margin(lookahead_px: u32) -> String {
    format!("{lookahead_px}px")
}

#[cfg(feature = "hydrate")]
pub use browser::SentinelObserver;

#[cfg(feature = "hydrate")]
mod browser {
    use wasm_bindgen::JsCast;
    use wasm_bindgen::JsValue;
    use wasm_bindgen::closure::Closure;
    use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

    type EntriesCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

    /// Live observer plus the JS closure it calls into.
    pub struct SentinelObserver {
        observer: IntersectionObserver,
        target: Element,
        _callback: EntriesCallback,
    }

    impl SentinelObserver {
        /// Observe `target` inside `root`, calling `on_change` with the
        /// intersecting flag of the latest entry batch.
        ///
        /// # Errors
        ///
        /// Returns the JS exception if the observer cannot be constructed.
        pub fn observe<F>(root: &Element, target: &Element, lookahead_px: u32, on_change: F) -> Result<Self, JsValue>
        where
            F: Fn(bool) + 'static,
        {
            let callback: EntriesCallback = Closure::new(move |entries: js_sys::Array, _: IntersectionObserver| {
                let latest = entries
                    .iter()
                    .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                    .last();
                if let Some(entry) = latest {
                    on_change(entry.is_intersecting());
                }
            });

            let init = IntersectionObserverInit::new();
            init.set_root(Some(root));
            init.set_root_margin(&super::root_margin(lookahead_px));

            let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
            observer.observe(target);
            log::debug!("sentinel observer attached (lookahead {lookahead_px}px)");
            Ok(Self { observer, target: target.clone(), _callback: callback })
        }

        /// Re-observe the target so the browser reports its current
        /// intersection state on the next frame, even if it did not change.
        pub fn rearm(&self) {
            self.observer.unobserve(&self.target);
            self.observer.observe(&self.target);
        }

        pub fn disconnect(&self) {
            self.observer.disconnect();
        }
    }

    impl Drop for SentinelObserver {
        fn drop(&mut self) {
            self.observer.disconnect();
            log::debug!("sentinel observer disconnected");
        }
    }
}

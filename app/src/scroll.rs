use leptos::prelude::*;

use crate::state::UiState;

/// Anything that can notify us of the viewport's vertical offset.
///
/// In the browser this is the window's `scroll` event, tests plug in a counting double.
pub trait ScrollSource {
    type Handle;

    fn subscribe(&self, on_scroll: Box<dyn Fn(f64) + Send + Sync>) -> Self::Handle;
    fn unsubscribe(&self, handle: Self::Handle);
}

/// One attached listener. Released exactly once, explicitly or on drop.
pub struct ScrollSubscription<S: ScrollSource> {
    source: S,
    handle: Option<S::Handle>,
}

impl<S: ScrollSource> ScrollSubscription<S> {
    pub fn attach(source: S, on_scroll: impl Fn(f64) + Send + Sync + 'static) -> Self {
        let handle = source.subscribe(Box::new(on_scroll));
        log::info!("scroll listener attached");
        Self {
            source,
            handle: Some(handle),
        }
    }

    pub fn is_attached(&self) -> bool {
        self.handle.is_some()
    }

    pub fn release(mut self) {
        self.detach();
    }

    fn detach(&mut self) {
        if let Some(handle) = self.handle.take() {
            self.source.unsubscribe(handle);
            log::info!("scroll listener released");
        }
    }
}

impl<S: ScrollSource> Drop for ScrollSubscription<S> {
    fn drop(&mut self) {
        self.detach();
    }
}

/// Mirrors the source's offset into `ui` for as long as the current reactive owner lives.
pub fn track_scroll<S>(source: S, ui: RwSignal<UiState>)
where
    S: ScrollSource + Send + Sync + 'static,
    S::Handle: Send + Sync,
{
    let subscription = ScrollSubscription::attach(source, move |offset| {
        ui.update(|state| {
            state.record_scroll(offset);
        });
    });
    on_cleanup(move || subscription.release());
}

cfg_if::cfg_if! {
    if #[cfg(feature = "hydrate")] {
        use leptos::leptos_dom::helpers::{window, window_event_listener, WindowListenerHandle};

        /// The browser window.
        #[derive(Clone, Copy, Debug, Default)]
        pub struct WindowScroll;

        impl ScrollSource for WindowScroll {
            type Handle = WindowListenerHandle;

            fn subscribe(&self, on_scroll: Box<dyn Fn(f64) + Send + Sync>) -> Self::Handle {
                window_event_listener(leptos::ev::scroll, move |_| {
                    on_scroll(window().scroll_y().unwrap_or_default());
                })
            }

            fn unsubscribe(&self, handle: Self::Handle) {
                handle.remove();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[derive(Clone, Default)]
    struct Tally {
        subscribed: Arc<AtomicUsize>,
        unsubscribed: Arc<AtomicUsize>,
    }

    impl ScrollSource for Tally {
        type Handle = ();

        fn subscribe(&self, _on_scroll: Box<dyn Fn(f64) + Send + Sync>) {
            self.subscribed.fetch_add(1, Ordering::SeqCst);
        }

        fn unsubscribe(&self, _handle: ()) {
            self.unsubscribed.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[test]
    fn drop_releases_once() {
        let tally = Tally::default();
        let subscription = ScrollSubscription::attach(tally.clone(), |_| {});
        assert!(subscription.is_attached());
        drop(subscription);
        assert_eq!(1, tally.subscribed.load(Ordering::SeqCst));
        assert_eq!(1, tally.unsubscribed.load(Ordering::SeqCst));
    }

    #[test]
    fn explicit_release_is_not_doubled_by_drop() {
        let tally = Tally::default();
        ScrollSubscription::attach(tally.clone(), |_| {}).release();
        assert_eq!(1, tally.unsubscribed.load(Ordering::SeqCst));
    }
}

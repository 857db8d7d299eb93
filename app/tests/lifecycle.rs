use std::collections::HashMap;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};

use leptos::prelude::*;

use app::scroll::{track_scroll, ScrollSource};
use app::state::{NavbarStyle, UiState};

type Listener = Box<dyn Fn(f64) + Send + Sync>;

/// Stands in for the browser window, remembering who is listening.
#[derive(Clone, Default)]
struct FakeViewport {
    next_id: Arc<AtomicU32>,
    listeners: Arc<Mutex<HashMap<u32, Listener>>>,
}

impl FakeViewport {
    fn listener_count(&self) -> usize {
        self.listeners.lock().unwrap().len()
    }

    fn scroll_to(&self, offset: f64) {
        for listener in self.listeners.lock().unwrap().values() {
            listener(offset);
        }
    }
}

impl ScrollSource for FakeViewport {
    type Handle = u32;

    fn subscribe(&self, on_scroll: Listener) -> u32 {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        self.listeners.lock().unwrap().insert(id, on_scroll);
        id
    }

    fn unsubscribe(&self, handle: u32) {
        let removed = self.listeners.lock().unwrap().remove(&handle);
        assert!(removed.is_some(), "listener {handle} released twice");
    }
}

fn setup() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn mount_attaches_one_listener_and_unmount_removes_it() {
    setup();

    let viewport = FakeViewport::default();
    let root = Owner::new();
    root.with(|| {
        let ui = RwSignal::new(UiState::default());
        let page = Owner::new();
        page.with(|| track_scroll(viewport.clone(), ui));
        assert_eq!(1, viewport.listener_count());

        viewport.scroll_to(51.0);
        assert_eq!(51, ui.get_untracked().scroll_y);
        assert_eq!(NavbarStyle::Opaque, ui.get_untracked().navbar_style());

        page.cleanup();
        assert_eq!(0, viewport.listener_count());

        // Nobody listens anymore, the state keeps its last value.
        viewport.scroll_to(0.0);
        assert_eq!(51, ui.get_untracked().scroll_y);
    });
}

#[test]
fn repeated_mounts_do_not_leak_listeners() {
    setup();

    let viewport = FakeViewport::default();
    let root = Owner::new();
    root.with(|| {
        for _ in 0..5 {
            let ui = RwSignal::new(UiState::default());
            let page = Owner::new();
            page.with(|| track_scroll(viewport.clone(), ui));
            assert_eq!(1, viewport.listener_count());
            page.cleanup();
            assert_eq!(0, viewport.listener_count());
        }
    });
}

//! `PowerliftingTheme` mounted in a headless `VirtualDom`.

#![cfg(feature = "dioxus")]

mod common;

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use common::RecordingHost;
use dioxus::dioxus_core::NoOpMutations;
use dioxus::prelude::*;
use powerlift_frontend::theme::provider::{use_app_theme, PowerliftingTheme, ThemeHost};
use powerlift_frontend::theme::{
    AppTheme, HostMode, StaticPlatform, DARK_COLOR_SCHEME, LIGHT_COLOR_SCHEME,
};

type Seen = Rc<RefCell<Vec<AppTheme>>>;

/// Signals the test flips from outside the dom.
#[derive(Clone, Copy)]
struct Controls {
    dark: Signal<Option<bool>>,
    host: Signal<ThemeHost>,
}

#[derive(Clone)]
struct Harness {
    dark: Option<bool>,
    host: ThemeHost,
    controls: Rc<Cell<Option<Controls>>>,
    seen: Seen,
}

fn root(harness: Harness) -> Element {
    let dark = use_signal(|| harness.dark);
    let host = use_signal(|| harness.host.clone());
    use_hook(|| harness.controls.set(Some(Controls { dark, host })));
    use_context_provider(|| harness.seen.clone());

    rsx! {
        PowerliftingTheme { dark_theme: dark(), host: host(),
            ThemeReader {}
        }
    }
}

#[component]
fn ThemeReader() -> Element {
    let theme = use_app_theme();
    use_context::<Seen>().borrow_mut().push(theme);
    rsx! {
        div {}
    }
}

struct Mounted {
    dom: VirtualDom,
    controls: Controls,
    seen: Seen,
}

impl Mounted {
    fn new(dark: Option<bool>, host: ThemeHost) -> Self {
        let controls = Rc::new(Cell::new(None));
        let seen = Seen::default();
        let mut dom = VirtualDom::new_with_props(
            root,
            Harness {
                dark,
                host,
                controls: controls.clone(),
                seen: seen.clone(),
            },
        );
        dom.rebuild_in_place();
        let controls = controls.get().expect("root registers its signals");
        let mut mounted = Self { dom, controls, seen };
        mounted.settle();
        mounted
    }

    /// Runs effects and re-renders until nothing is left to do.
    fn settle(&mut self) {
        for _ in 0..8 {
            self.dom.process_events();
            self.dom.render_immediate(&mut NoOpMutations);
        }
    }

    fn set_dark(&mut self, dark: Option<bool>) {
        let mut signal = self.controls.dark;
        self.dom.in_runtime(|| signal.set(dark));
        self.settle();
    }

    fn set_host(&mut self, host: ThemeHost) {
        let mut signal = self.controls.host;
        self.dom.in_runtime(|| signal.set(host));
        self.settle();
    }

    fn current(&self) -> AppTheme {
        *self.seen.borrow().last().expect("children rendered")
    }
}

fn host_with(recorder: &Rc<RecordingHost>, system_dark: bool, mode: HostMode) -> ThemeHost {
    ThemeHost::new(
        Rc::new(StaticPlatform::new(28, system_dark)),
        recorder.clone(),
        mode,
    )
}

#[test]
fn children_follow_the_dark_flag() {
    let recorder = Rc::new(RecordingHost::default());
    let mut mounted = Mounted::new(Some(false), host_with(&recorder, false, HostMode::Interactive));
    assert_eq!(mounted.current().scheme, LIGHT_COLOR_SCHEME);

    mounted.set_dark(Some(true));
    assert_eq!(mounted.current().scheme, DARK_COLOR_SCHEME);
    assert!(mounted.current().dark);

    mounted.set_dark(Some(false));
    assert_eq!(mounted.current().scheme, LIGHT_COLOR_SCHEME);
}

#[test]
fn status_bar_is_written_once_per_style() {
    let recorder = Rc::new(RecordingHost::default());
    let mut mounted = Mounted::new(Some(false), host_with(&recorder, false, HostMode::Interactive));
    assert_eq!(recorder.writes(), 1);
    assert!(recorder.last().unwrap().light_appearance);

    mounted.set_dark(Some(false));
    assert_eq!(recorder.writes(), 1);

    mounted.set_dark(Some(true));
    mounted.set_dark(Some(true));
    assert_eq!(recorder.writes(), 2);
    let applied = recorder.last().unwrap();
    assert!(!applied.light_appearance);
    assert_eq!(applied.background, DARK_COLOR_SCHEME.surface);
}

#[test]
fn preview_host_renders_without_writes() {
    let recorder = Rc::new(RecordingHost::default());
    let mut mounted = Mounted::new(Some(false), host_with(&recorder, false, HostMode::Preview));
    mounted.set_dark(Some(true));

    assert_eq!(mounted.current().scheme, DARK_COLOR_SCHEME);
    assert_eq!(recorder.writes(), 0);
}

#[test]
fn system_dark_change_reaches_children_when_unpinned() {
    let recorder = Rc::new(RecordingHost::default());
    let mut mounted = Mounted::new(None, host_with(&recorder, false, HostMode::Interactive));
    assert_eq!(mounted.current().scheme, LIGHT_COLOR_SCHEME);

    mounted.set_host(host_with(&recorder, true, HostMode::Interactive));
    assert_eq!(mounted.current().scheme, DARK_COLOR_SCHEME);
    assert_eq!(recorder.writes(), 2);
    assert!(!recorder.last().unwrap().light_appearance);
}

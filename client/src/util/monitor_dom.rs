//! DOM listener lifecycle for the proctoring monitor.
//!
//! DESIGN
//! ======
//! One `DomMonitor` is created per attempt when the session enters
//! monitoring and dropped when the page unmounts or the session seals, so
//! listeners never leak across attempts. The callbacks do nothing but
//! translate the raw DOM event into a [`MonitorEvent`] and hand it to the
//! supplied sink — no network, no heavy work — keeping the student's typing
//! unaffected. All interpretation (config gating, ledger append, threshold)
//! happens in the `proctor` engine.

#[cfg(test)]
#[path = "monitor_dom_test.rs"]
mod monitor_dom_test;

use proctor::config::ProctorConfig;
use proctor::session::MonitorEvent;

#[cfg(feature = "hydrate")]
use wasm_bindgen::JsCast as _;

/// Owned set of attached DOM listeners. Detaches everything on drop.
pub struct DomMonitor {
    #[cfg(feature = "hydrate")]
    listeners: Vec<(
        web_sys::EventTarget,
        &'static str,
        wasm_bindgen::closure::Closure<dyn FnMut(web_sys::Event)>,
    )>,
}

impl DomMonitor {
    /// Attach the listeners the config calls for. `sink` receives each
    /// translated event; the caller decides what it means.
    ///
    /// The copy listener also prevents the default so blocked content never
    /// reaches the clipboard; the context-menu listener suppresses the menu
    /// whenever monitoring is active.
    pub fn attach<F>(config: &ProctorConfig, sink: F) -> Self
    where
        F: Fn(MonitorEvent) + Clone + 'static,
    {
        #[cfg(feature = "hydrate")]
        {
            let mut monitor = Self { listeners: Vec::new() };
            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return monitor;
            };
            let target = web_sys::EventTarget::from(document.clone());

            if config.enable_tab_detection {
                let doc = document.clone();
                let sink_vis = sink.clone();
                monitor.listen(&target, "visibilitychange", move |_| {
                    if doc.hidden() {
                        sink_vis(MonitorEvent::TabHidden);
                    } else {
                        sink_vis(MonitorEvent::TabVisible);
                    }
                });
            }

            {
                let doc = document.clone();
                let sink_fs = sink.clone();
                monitor.listen(&target, "fullscreenchange", move |_| {
                    if doc.fullscreen_element().is_none() {
                        sink_fs(MonitorEvent::FullscreenExited);
                    }
                });
            }

            if config.enable_copy_block {
                let sink_copy = sink.clone();
                monitor.listen(&target, "copy", move |ev| {
                    ev.prevent_default();
                    sink_copy(MonitorEvent::CopyAttempted);
                });
            }

            let sink_menu = sink;
            monitor.listen(&target, "contextmenu", move |ev| {
                ev.prevent_default();
                sink_menu(MonitorEvent::ContextMenuOpened);
            });

            monitor
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (config, sink);
            Self {}
        }
    }

    /// Number of listeners currently attached.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        #[cfg(feature = "hydrate")]
        {
            self.listeners.len()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            0
        }
    }

    #[cfg(feature = "hydrate")]
    fn listen(
        &mut self,
        target: &web_sys::EventTarget,
        name: &'static str,
        handler: impl FnMut(web_sys::Event) + 'static,
    ) {
        let closure = wasm_bindgen::closure::Closure::<dyn FnMut(web_sys::Event)>::new(handler);
        if target
            .add_event_listener_with_callback(name, closure.as_ref().unchecked_ref())
            .is_err()
        {
            leptos::logging::warn!("proctor monitor: failed to attach {name} listener");
            return;
        }
        self.listeners.push((target.clone(), name, closure));
    }
}

impl Drop for DomMonitor {
    fn drop(&mut self) {
        #[cfg(feature = "hydrate")]
        for (target, name, closure) in self.listeners.drain(..) {
            if target
                .remove_event_listener_with_callback(name, closure.as_ref().unchecked_ref())
                .is_err()
            {
                leptos::logging::warn!("proctor monitor: failed to detach {name} listener");
            }
        }
    }
}

use super::*;

// Outside a browser there is no document to attach to; these lock in that
// the handle is inert natively and that the sink is never called except by
// a real DOM event.

#[test]
fn attach_outside_a_browser_holds_no_listeners() {
    let monitor = DomMonitor::attach(&ProctorConfig::default(), |_event| {});
    assert_eq!(monitor.listener_count(), 0);
    drop(monitor);
}

#[test]
fn sink_is_not_called_without_dom_events() {
    let monitor = DomMonitor::attach(&ProctorConfig::strict(1), |_event| {
        unreachable!("no events fire natively");
    });
    drop(monitor);
}

use super::*;

// Outside a browser the guard has nothing to attach to; these lock in that
// install and drop stay silent no-ops so shared page code can run natively.

#[test]
fn install_outside_a_browser_is_a_noop() {
    let guard = UnloadGuard::install(|| true);
    drop(guard);
}

#[test]
fn guard_never_invokes_the_flag_outside_a_browser() {
    let guard = UnloadGuard::install(|| unreachable!("no events fire natively"));
    drop(guard);
}

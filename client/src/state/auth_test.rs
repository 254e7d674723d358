use super::*;

#[test]
fn auth_state_default_is_signed_out() {
    assert!(!AuthState::default().is_authenticated);
}

#[test]
fn login_leaves_flag_false() {
    // Pins current behavior: login does not authenticate.
    let mut state = AuthState::default();
    state.login();
    assert!(!state.is_authenticated);
}

#[test]
fn logout_clears_flag() {
    let mut state = AuthState { is_authenticated: true };
    state.logout();
    assert!(!state.is_authenticated);
}

#[test]
fn instances_are_isolated() {
    let mut a = AuthState { is_authenticated: true };
    let b = AuthState { is_authenticated: true };
    a.logout();
    assert!(!a.is_authenticated);
    assert!(b.is_authenticated);
}

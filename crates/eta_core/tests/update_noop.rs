use eta_core::{update, AppState, Msg};

#[test]
fn teardown_without_a_ticker_is_noop() {
    let state = AppState::new();
    let (next, effects) = update(state.clone(), Msg::Teardown);

    assert_eq!(state, next);
    assert!(effects.is_empty());
}

#[test]
fn tick_without_a_session_is_noop() {
    let state = AppState::new();
    let (next, effects) = update(
        state.clone(),
        Msg::Tick {
            session: 1,
            now_millis: 0,
        },
    );

    assert_eq!(state, next);
    assert!(effects.is_empty());
}

#[test]
fn output_lost_without_a_session_is_noop() {
    let state = AppState::new();
    let (next, effects) = update(
        state.clone(),
        Msg::OutputLost {
            reason: "broken pipe".to_string(),
        },
    );

    assert_eq!(state, next);
    assert!(effects.is_empty());
}

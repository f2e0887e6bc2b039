use advisor_core::{update, AppState, Msg};

#[test]
fn tick_while_idle_changes_nothing() {
    let state = AppState::new();
    let (mut next, effects) = update(state.clone(), Msg::Tick);

    assert_eq!(state, next);
    assert!(effects.is_empty());
    assert!(!next.consume_dirty());
}

#[test]
fn view_does_not_depend_on_redraw_flag() {
    let (mut state, _) = update(AppState::new(), Msg::PositionChanged("QA".to_string()));
    let before = state.view();

    assert!(state.consume_dirty());
    assert_eq!(state.view(), before);
}

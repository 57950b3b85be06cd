use super::*;

#[test]
fn default_state_uses_initial_weights() {
    let state = TrainingState::default();
    assert_eq!(state.red, INITIAL_RED_WEIGHTS);
    assert_eq!(state.black, INITIAL_BLACK_WEIGHTS);
    assert_eq!(state.simulations, 0);
    assert_eq!(state.trace_errors, 0);
}

#[test]
fn state_round_trips_through_json() {
    let mut state = TrainingState::default();
    state.red[0] = -1.25;
    state.simulations = 300;

    let dir = std::env::temp_dir().join("trainer_store_test");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("state.json");
    let path = path.to_str().unwrap();

    state.save(path).unwrap();
    let loaded = TrainingState::load(path).unwrap();
    assert_eq!(loaded, state);

    std::fs::remove_file(path).ok();
}

#[test]
fn missing_file_falls_back_to_default() {
    let loaded = TrainingState::load_or_default("/nonexistent/trainer_state.json").unwrap();
    assert_eq!(loaded, TrainingState::default());
}

use crate::{AppState, Effect, Msg};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::PositionChanged(text) => {
            state.set_position(text);
            Vec::new()
        }
        Msg::GithubProfileChanged(text) => {
            state.set_github_profile(text);
            Vec::new()
        }
        Msg::FilesDropped { slot, files } => {
            state.drop_files(slot, files);
            Vec::new()
        }
        Msg::SubmitClicked => match state.begin_submission() {
            Some((request_id, submission)) => vec![Effect::SubmitAnalysis {
                request_id,
                submission,
            }],
            None => Vec::new(),
        },
        Msg::AnalysisSucceeded { request_id, result } => {
            state.apply_success(request_id, result);
            Vec::new()
        }
        Msg::AnalysisFailed {
            request_id,
            message,
        } => {
            state.apply_failure(request_id, message);
            Vec::new()
        }
        Msg::Tick => {
            state.advance_spinner();
            Vec::new()
        }
    };

    (state, effects)
}

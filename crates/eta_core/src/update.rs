use eta_engine::{estimate, parse_input, EtaError};

use crate::{AppState, Effect, Msg, SessionState};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::InputSubmitted { raw, now_millis } => {
            let mut effects = Vec::new();
            // At most one ticker per controller: the previous one goes first.
            if state.release_ticker() {
                effects.push(Effect::CancelTicker);
            }
            let session = state.begin_session();

            match parse_input(&raw) {
                Ok(snapshot) => {
                    state.activate(snapshot);
                    evaluate(&mut state, now_millis, &mut effects);
                    if state.session() == SessionState::Active {
                        state.mark_ticker_live();
                        effects.push(Effect::StartTicker { session });
                    }
                }
                Err(err) => fail(&mut state, err, &mut effects),
            }
            effects
        }
        Msg::Tick {
            session,
            now_millis,
        } => {
            if session != state.session_id() || state.session() != SessionState::Active {
                return (state, Vec::new());
            }
            let mut effects = Vec::new();
            evaluate(&mut state, now_millis, &mut effects);
            if state.session() != SessionState::Active && state.release_ticker() {
                effects.push(Effect::CancelTicker);
            }
            effects
        }
        Msg::Teardown => {
            if state.release_ticker() {
                state.stop();
                vec![Effect::CancelTicker]
            } else {
                Vec::new()
            }
        }
        Msg::OutputLost { reason } => {
            let mut effects = Vec::new();
            if state.release_ticker() {
                effects.push(Effect::CancelTicker);
            }
            // Nothing to stop when only an error message was being shown.
            if state.snapshot().is_some() {
                state.fail(format!("Output failed: {reason}"));
            }
            effects
        }
    };

    (state, effects)
}

fn evaluate(state: &mut AppState, now_millis: i64, effects: &mut Vec<Effect>) {
    let Some(snapshot) = state.snapshot() else {
        return;
    };
    let total = snapshot.total;
    match estimate(snapshot, now_millis) {
        Ok(progress) => {
            state.record_estimate(progress);
            if progress.is_complete(total) {
                state.complete();
            }
        }
        Err(err) => fail(state, err, effects),
    }
}

fn fail(state: &mut AppState, err: EtaError, effects: &mut Vec<Effect>) {
    if let Some(detail) = err.detail() {
        effects.push(Effect::ReportDiagnostic {
            detail: detail.to_string(),
        });
    }
    state.fail(err.to_string());
}

use std::io;
use std::sync::mpsc;

use eta_core::{update, AppState, AppViewModel, Msg, SessionId, SessionState};
use eta_logging::{eta_error, eta_info, eta_warn};

use super::clock::Clock;
use super::effects::EffectRunner;
use super::render;
use super::sink::PresentationSink;
use super::ticker::Ticker;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    /// Re-estimate on every tick until the projection reaches the total.
    Poll,
    /// Render the immediate estimate and stop.
    Once,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Completed,
    /// Still running when the controller stopped, e.g. in `RunMode::Once`.
    Stopped,
    Failed(String),
}

/// Drives one submission through the core state machine.
///
/// Ticks arrive over a channel from the injected [`Ticker`] and are stamped
/// with the injected [`Clock`] at dispatch time, so they are handled strictly
/// one after another.
pub struct Controller<C: Clock, T: Ticker, S: PresentationSink> {
    clock: C,
    effects: EffectRunner<T>,
    sink: S,
    state: AppState,
    tick_rx: mpsc::Receiver<SessionId>,
    /// Set once the sink has failed; nothing is presented afterwards.
    output_lost: bool,
}

impl<C: Clock, T: Ticker, S: PresentationSink> Controller<C, T, S> {
    pub fn new(clock: C, ticker: T, sink: S) -> Self {
        let (tick_tx, tick_rx) = mpsc::channel();
        Self {
            clock,
            effects: EffectRunner::new(ticker, tick_tx),
            sink,
            state: AppState::new(),
            tick_rx,
            output_lost: false,
        }
    }

    pub fn run(&mut self, raw: String, mode: RunMode) -> Outcome {
        let now_millis = self.clock.now_millis();
        self.dispatch(Msg::InputSubmitted { raw, now_millis });

        if mode == RunMode::Poll {
            while self.state.session() == SessionState::Active {
                let Ok(session) = self.tick_rx.recv() else {
                    eta_warn!("Tick channel closed while session was active");
                    break;
                };
                let now_millis = self.clock.now_millis();
                self.dispatch(Msg::Tick {
                    session,
                    now_millis,
                });
            }
        }

        let outcome = outcome_of(&self.state.view());
        eta_info!("Session finished: {:?}", outcome);
        self.teardown();
        outcome
    }

    /// Releases the live ticker, if any. Safe to call repeatedly.
    pub fn teardown(&mut self) {
        self.dispatch(Msg::Teardown);
    }

    fn dispatch(&mut self, msg: Msg) {
        eta_logging::set_tick(tick_tag(&msg, &self.state));
        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);
        let was_dirty = state.consume_dirty();
        let view = state.view();
        self.state = state;

        eta_logging::set_tick(view.ticks);
        self.effects.run(effects);
        if was_dirty && !self.output_lost {
            if let Err(err) = self.present(&view) {
                eta_error!("Failed to present estimate, stopping session: {}", err);
                self.output_lost = true;
                self.dispatch(Msg::OutputLost {
                    reason: err.to_string(),
                });
            }
        }
    }

    fn present(&mut self, view: &AppViewModel) -> io::Result<()> {
        match (render::render(view, &chrono::Local), view.error.as_deref()) {
            (Some(frame), _) => {
                self.sink.show_frame(&frame)?;
                self.sink.set_title(&frame.title)
            }
            (None, Some(message)) => self.sink.show_error(message),
            (None, None) => Ok(()),
        }
    }

    #[cfg(test)]
    fn sink(&self) -> &S {
        &self.sink
    }

    #[cfg(test)]
    fn effects(&self) -> &EffectRunner<T> {
        &self.effects
    }
}

impl<C: Clock, T: Ticker, S: PresentationSink> Drop for Controller<C, T, S> {
    fn drop(&mut self) {
        self.teardown();
    }
}

/// Tick number to tag log lines emitted while `msg` is being handled.
fn tick_tag(msg: &Msg, state: &AppState) -> u64 {
    match msg {
        Msg::InputSubmitted { .. } => 0,
        _ => state.ticks(),
    }
}

fn outcome_of(view: &AppViewModel) -> Outcome {
    match (view.session, &view.error) {
        (SessionState::Completed, _) => Outcome::Completed,
        (_, Some(message)) => Outcome::Failed(message.clone()),
        _ => Outcome::Stopped,
    }
}

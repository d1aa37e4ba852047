use std::sync::mpsc;

use eta_core::{Effect, SessionId};
use eta_logging::{eta_debug, eta_error, eta_info};

use super::ticker::{Ticker, TickerHandle};

/// Executes effects emitted by `eta_core::update`.
///
/// Owns the single ticker slot: a new ticker is only ever started after the
/// previous handle has been cancelled and dropped.
pub struct EffectRunner<T: Ticker> {
    ticker: T,
    tick_tx: mpsc::Sender<SessionId>,
    live: Option<TickerHandle>,
}

impl<T: Ticker> EffectRunner<T> {
    pub fn new(ticker: T, tick_tx: mpsc::Sender<SessionId>) -> Self {
        Self {
            ticker,
            tick_tx,
            live: None,
        }
    }

    pub fn run(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::StartTicker { session } => {
                    self.cancel_live();
                    eta_info!("StartTicker session={}", session);
                    self.live = Some(self.ticker.start(session, self.tick_tx.clone()));
                }
                Effect::CancelTicker => {
                    self.cancel_live();
                }
                Effect::ReportDiagnostic { detail } => {
                    eta_error!("Rejected input: {}", detail);
                }
            }
        }
    }

    #[cfg(test)]
    pub fn has_live_ticker(&self) -> bool {
        self.live.is_some()
    }

    fn cancel_live(&mut self) {
        if let Some(handle) = self.live.take() {
            if handle.cancel() {
                eta_debug!("CancelTicker");
            }
        }
    }

    #[cfg(test)]
    pub fn ticker(&self) -> &T {
        &self.ticker
    }
}

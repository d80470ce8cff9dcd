use std::sync::{Arc, Mutex};

use deskai_core::error::ClientFailure;
use serde::Serialize;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::service::AppService;

/// Identifies one accepted submission. Tokens only grow, which is what
/// makes stale-completion detection a comparison instead of bookkeeping.
pub type GenerationToken = u64;

/// Exactly one of these is delivered per accepted submission, through the
/// channel and never on the worker task's own call stack.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Completion {
    Success {
        token: GenerationToken,
        text: String,
    },
    Failure {
        token: GenerationToken,
        failure: ClientFailure,
    },
}

impl Completion {
    pub fn token(&self) -> GenerationToken {
        match self {
            Completion::Success { token, .. } => *token,
            Completion::Failure { token, .. } => *token,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    Started(GenerationToken),
    /// A generation is already running; the submission was not accepted.
    Busy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Acknowledgement {
    Current,
    /// The completion belongs to a generation that was cleared away;
    /// the shell must drop it on the floor.
    Stale,
}

struct DispatchState {
    next_token: GenerationToken,
    in_flight: Option<GenerationToken>,
    // Tokens below this watermark were invalidated by `clear`.
    invalidated_before: GenerationToken,
}

/// Runs one blocking external call per submission on a spawned task and
/// hands the outcome back through a channel the UI-owning thread drains.
///
/// One generation at a time: a second submission while one is running is
/// rejected as `Busy`. There is no cancellation; `clear` only marks the
/// running generation's eventual completion as stale.
#[derive(Clone)]
pub struct GenerationDispatcher {
    tx: UnboundedSender<Completion>,
    state: Arc<Mutex<DispatchState>>,
}

impl GenerationDispatcher {
    pub fn channel() -> (Self, UnboundedReceiver<Completion>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let dispatcher = Self {
            tx,
            state: Arc::new(Mutex::new(DispatchState {
                next_token: 0,
                in_flight: None,
                invalidated_before: 0,
            })),
        };
        (dispatcher, rx)
    }

    pub fn is_busy(&self) -> bool {
        self.lock_state().in_flight.is_some()
    }

    /// Accepts the prompt unless a generation is already in flight, then
    /// performs the call on a background task. The calling thread returns
    /// immediately and stays responsive.
    pub fn dispatch(&self, service: AppService, prompt: String) -> DispatchOutcome {
        let token = {
            let mut state = self.lock_state();
            if state.in_flight.is_some() {
                return DispatchOutcome::Busy;
            }
            let token = state.next_token;
            state.next_token += 1;
            state.in_flight = Some(token);
            token
        };

        let tx = self.tx.clone();
        let state = self.state.clone();
        tokio::spawn(async move {
            let completion = match service.generate(&prompt).await {
                Ok(text) => Completion::Success { token, text },
                Err(failure) => Completion::Failure { token, failure },
            };

            // Release the slot before delivery, so a shell reacting to the
            // completion can dispatch again without hitting Busy.
            {
                let mut state = match state.lock() {
                    Ok(s) => s,
                    Err(poisoned) => poisoned.into_inner(),
                };
                if state.in_flight == Some(token) {
                    state.in_flight = None;
                }
            }

            if tx.send(completion).is_err() {
                log::warn!("completion receiver dropped; generation {token} discarded");
            }
        });

        DispatchOutcome::Started(token)
    }

    /// Invalidates everything dispatched so far. A generation that is
    /// still running keeps the dispatcher busy until it completes, but its
    /// completion will acknowledge as `Stale`.
    pub fn clear(&self) {
        let mut state = self.lock_state();
        state.invalidated_before = state.next_token;
    }

    pub fn acknowledge(&self, completion: &Completion) -> Acknowledgement {
        if completion.token() >= self.lock_state().invalidated_before {
            Acknowledgement::Current
        } else {
            Acknowledgement::Stale
        }
    }

    fn lock_state(&self) -> std::sync::MutexGuard<'_, DispatchState> {
        match self.state.lock() {
            Ok(s) => s,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::endpoint::SentimentEndpoint;
use crate::page::{Page, HAS_RESULT_CLASS};

pub const EMPTY_INPUT_ALERT: &str = "Please enter some text to analyze!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerState {
    Idle,
    Validating,
    Rejected,
    Requesting,
    DisplayingSuccess,
    DisplayingError,
}

/// How one invocation of the trigger ended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Outcome {
    /// Input was empty; nothing was sent.
    Rejected,
    Success { body: String },
    ApplicationError { status: u16, body: String },
    TransportError { reason: String },
    /// A newer invocation started while this one was in flight, so its reply was dropped.
    Superseded,
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success { .. })
    }

    /// State the page was left in, if this invocation touched it last.
    pub fn final_state(&self) -> Option<TriggerState> {
        match self {
            Outcome::Rejected => Some(TriggerState::Rejected),
            Outcome::Success { .. } => Some(TriggerState::DisplayingSuccess),
            Outcome::ApplicationError { .. } | Outcome::TransportError { .. } => {
                Some(TriggerState::DisplayingError)
            }
            Outcome::Superseded => None,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TriggerReport {
    /// Request sequence number; `None` when no request was issued.
    pub sequence: Option<u64>,
    pub outcome: Outcome,
    pub completed_at: DateTime<Utc>,
}

impl TriggerReport {
    fn new(sequence: Option<u64>, outcome: Outcome) -> Self {
        TriggerReport {
            sequence,
            outcome,
            completed_at: Utc::now(),
        }
    }
}

pub fn error_markup(body: &str) -> String {
    format!("<span style=\"color: red;\">❌ Error: {}</span>", body)
}

pub fn network_error_markup(reason: &str) -> String {
    format!("<span style=\"color: red;\">❌ Network error: {}</span>", reason)
}

/// Runs the read → validate → request → display cycle against a [`Page`].
///
/// Invocations are independent and may overlap. Every issued request gets
/// the next sequence number, and only the most recently issued one is
/// allowed to write to the page when its reply lands.
pub struct Analyzer {
    endpoint: Arc<dyn SentimentEndpoint>,
    latest: AtomicU64,
}

impl Analyzer {
    pub fn new(endpoint: Arc<dyn SentimentEndpoint>) -> Self {
        Analyzer {
            endpoint,
            latest: AtomicU64::new(0),
        }
    }

    pub async fn run(&self, page: &Page) -> TriggerReport {
        transition(TriggerState::Idle, TriggerState::Validating);
        let text = page.input.value();

        if text.trim().is_empty() {
            transition(TriggerState::Validating, TriggerState::Rejected);
            log::warn!("Empty input, no request sent");
            page.notifier.alert(EMPTY_INPUT_ALERT);
            return TriggerReport::new(None, Outcome::Rejected);
        }

        let sequence = self.latest.fetch_add(1, Ordering::SeqCst) + 1;
        transition(TriggerState::Validating, TriggerState::Requesting);
        log::info!("Request #{}: analyzing {} chars", sequence, text.chars().count());

        page.set_loading(true);
        page.clear_result();

        let result = self.endpoint.analyze(&text).await;
        if let Err(e) = &result {
            log::error!("Network error: {}", e);
        }

        if self.latest.load(Ordering::SeqCst) != sequence {
            log::info!("Request #{} superseded, reply discarded", sequence);
            return TriggerReport::new(Some(sequence), Outcome::Superseded);
        }

        page.set_loading(false);

        let outcome = match result {
            Ok(response) if response.is_success() => {
                page.display.set_inner_html(&response.body);
                page.display.add_class(HAS_RESULT_CLASS);
                Outcome::Success { body: response.body }
            }
            Ok(response) => {
                log::warn!("Request #{} failed with status {}", sequence, response.status);
                page.display.set_inner_html(&error_markup(&response.body));
                Outcome::ApplicationError {
                    status: response.status,
                    body: response.body,
                }
            }
            Err(e) => {
                let reason = e.to_string();
                page.display.set_inner_html(&network_error_markup(&reason));
                Outcome::TransportError { reason }
            }
        };

        if let Some(state) = outcome.final_state() {
            transition(TriggerState::Requesting, state);
        }

        TriggerReport::new(Some(sequence), outcome)
    }
}

fn transition(from: TriggerState, to: TriggerState) {
    log::debug!("{:?} -> {:?}", from, to);
}

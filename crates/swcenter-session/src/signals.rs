//! Signals delivered to the session by the backend and the app view.
//!
//! Toolkit glue pushes signals into an unbounded channel; the signal loop
//! hands them to the available pane one at a time, in order.

use std::sync::Arc;
use tokio::sync::mpsc;

use swcenter_core::{Application, TransactionKind, TransactionResult};

use crate::available_pane::AvailablePane;

/// Signals consumed by the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionSignal {
    /// `transaction-started` from the package backend.
    TransactionStarted {
        pkgname: String,
        appname: String,
        trans_id: String,
        kind: TransactionKind,
    },

    /// `transaction-finished` from the package backend.
    TransactionFinished(TransactionResult),

    /// `transaction-stopped` from the package backend (cancelled or aborted).
    TransactionStopped(TransactionResult),

    /// `application-activated` from the application list.
    ApplicationActivated(Application),

    /// The search entry changed.
    SearchTermsChanged(String),
}

pub type SignalSender = mpsc::UnboundedSender<SessionSignal>;
pub type SignalReceiver = mpsc::UnboundedReceiver<SessionSignal>;

/// Create the channel signals travel on.
pub fn signal_channel() -> (SignalSender, SignalReceiver) {
    mpsc::unbounded_channel()
}

/// Dispatch signals to `pane` until every sender is dropped.
pub async fn run_signal_loop(pane: Arc<AvailablePane>, mut rx: SignalReceiver) {
    tracing::debug!("Signal loop started");
    while let Some(signal) = rx.recv().await {
        tracing::debug!("Signal: {:?}", signal);
        pane.handle_signal(signal);
    }
    tracing::debug!("Signal loop finished, all senders dropped");
}

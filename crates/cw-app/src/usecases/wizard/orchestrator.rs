//! Wizard orchestrator.
//!
//! This module coordinates the wizard state machine and its side effects.

use std::sync::Arc;

use cw_core::form::FormUpdate;
use cw_core::wizard::{WizardAction, WizardEvent, WizardSnapshot, WizardStateMachine};
use tracing::{debug, info, info_span, Instrument};

use crate::usecases::wizard::context::WizardContext;
use crate::usecases::SubmitPrediction;

/// Orchestrator that drives the wizard snapshot and runs prediction requests.
///
/// It is the only writer of the snapshot; callers get clones.
pub struct WizardOrchestrator {
    context: Arc<WizardContext>,
    submit_prediction: Arc<SubmitPrediction>,
}

impl WizardOrchestrator {
    pub fn new(submit_prediction: Arc<SubmitPrediction>) -> Self {
        Self::with_context(WizardContext::default().arc(), submit_prediction)
    }

    pub fn with_context(
        context: Arc<WizardContext>,
        submit_prediction: Arc<SubmitPrediction>,
    ) -> Self {
        Self {
            context,
            submit_prediction,
        }
    }

    pub async fn snapshot(&self) -> WizardSnapshot {
        self.context.get_snapshot().await
    }

    pub async fn update(&self, update: FormUpdate) -> WizardSnapshot {
        self.dispatch(WizardEvent::Update(update)).await
    }

    pub async fn next(&self) -> WizardSnapshot {
        self.dispatch(WizardEvent::Next).await
    }

    pub async fn previous(&self) -> WizardSnapshot {
        self.dispatch(WizardEvent::Previous).await
    }

    /// Submit from the billing step and wait for the service's answer.
    pub async fn submit(&self) -> WizardSnapshot {
        self.dispatch(WizardEvent::Submit).await
    }

    pub async fn new_prediction(&self) -> WizardSnapshot {
        self.dispatch(WizardEvent::NewPrediction).await
    }

    /// Feed one event through the state machine, then run the resulting
    /// actions and any events they produce.
    pub async fn dispatch(&self, event: WizardEvent) -> WizardSnapshot {
        let _dispatch_guard = self.context.acquire_dispatch_lock().await;

        let span = info_span!("usecase.wizard_orchestrator.dispatch", event = event_name(&event));
        async {
            let mut current = self.context.get_snapshot().await;
            let mut pending_events = vec![event];

            while let Some(event) = pending_events.pop() {
                let from = current.state.clone();
                let name = event_name(&event);
                let (next, actions) = WizardStateMachine::transition(current, event);
                info!(from = ?from, to = ?next.state, event = name, "wizard state transition");

                // Readers must see `Submitting` while the request is in flight.
                self.context.set_snapshot(next.clone()).await;
                current = next;

                pending_events.extend(self.execute_actions(actions).await);
            }

            current
        }
        .instrument(span)
        .await
    }

    async fn execute_actions(&self, actions: Vec<WizardAction>) -> Vec<WizardEvent> {
        let mut follow_up_events = Vec::new();
        for action in actions {
            match action {
                WizardAction::RequestPrediction { record } => {
                    debug!("wizard executing action RequestPrediction");
                    let event = match self.submit_prediction.execute_record(record).await {
                        Ok(result) => WizardEvent::PredictionSucceeded { result },
                        Err(error) => WizardEvent::PredictionFailed { error },
                    };
                    follow_up_events.push(event);
                }
                WizardAction::ResetForm => {
                    debug!("wizard form reset to defaults");
                }
            }
        }
        follow_up_events
    }
}

// Event kind only; update payloads stay out of the logs.
fn event_name(event: &WizardEvent) -> &'static str {
    match event {
        WizardEvent::Update(_) => "Update",
        WizardEvent::Next => "Next",
        WizardEvent::Previous => "Previous",
        WizardEvent::Submit => "Submit",
        WizardEvent::PredictionSucceeded { .. } => "PredictionSucceeded",
        WizardEvent::PredictionFailed { .. } => "PredictionFailed",
        WizardEvent::NewPrediction => "NewPrediction",
    }
}

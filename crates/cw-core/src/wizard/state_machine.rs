//! Wizard state machine.
//!
//! Defines a pure state transition function for the prediction wizard. The
//! form travels with the state in a [`WizardSnapshot`], so navigation never
//! drops data entered on another step.

use crate::encoding::{encode, ModelInputRecord};
use crate::error::{PredictionError, ValidationGap};
use crate::form::{FormField, FormUpdate, FriendlyFormState};
use crate::prediction::PredictionResult;

use super::WizardStep;

/// Wizard flow state.
///
/// 向导流程状态。
#[derive(Debug, Clone, PartialEq)]
pub enum WizardState {
    /// Filling in a step.
    ///
    /// 填写某一步骤。`error` 保存最近一次提交失败的原因。
    Editing {
        step: WizardStep,
        error: Option<PredictionError>,
    },
    /// Waiting for the prediction service.
    ///
    /// 等待预测服务响应。
    Submitting,
    /// Prediction received.
    ///
    /// 已获得预测结果。
    Results { result: PredictionResult },
}

impl Default for WizardState {
    fn default() -> Self {
        Self::Editing {
            step: WizardStep::PersonalInfo,
            error: None,
        }
    }
}

/// State plus the form it is editing.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct WizardSnapshot {
    pub state: WizardState,
    pub form: FriendlyFormState,
}

impl WizardSnapshot {
    /// Step shown while editing; `Submitting` still shows billing.
    pub fn current_step(&self) -> Option<WizardStep> {
        match &self.state {
            WizardState::Editing { step, .. } => Some(*step),
            WizardState::Submitting => Some(WizardStep::Billing),
            WizardState::Results { .. } => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, WizardState::Submitting)
    }

    pub fn error(&self) -> Option<&PredictionError> {
        match &self.state {
            WizardState::Editing { error, .. } => error.as_ref(),
            _ => None,
        }
    }

    pub fn result(&self) -> Option<&PredictionResult> {
        match &self.state {
            WizardState::Results { result } => Some(result),
            _ => None,
        }
    }

    /// First missing or malformed field that keeps `step` from advancing.
    ///
    /// For the last step this is the full presence check of the form.
    pub fn blocking_gap(&self, step: WizardStep) -> Option<ValidationGap> {
        match step {
            WizardStep::PersonalInfo => self.form.gender.is_none().then_some(
                ValidationGap::MissingField {
                    field: FormField::Gender.key(),
                },
            ),
            WizardStep::Services => self.form.internet_service.is_none().then_some(
                ValidationGap::MissingField {
                    field: FormField::InternetService.key(),
                },
            ),
            WizardStep::Billing => self.form.complete().err(),
        }
    }

    pub fn can_advance(&self) -> bool {
        match self.current_step() {
            Some(step) if !self.is_loading() => self.blocking_gap(step).is_none(),
            _ => false,
        }
    }
}

/// Events that drive the wizard.
///
/// 驱动向导的事件。
#[derive(Debug, Clone, PartialEq)]
pub enum WizardEvent {
    /// A field changed.
    ///
    /// 字段变更。
    Update(FormUpdate),
    /// Go to the next step.
    ///
    /// 下一步。
    Next,
    /// Go to the previous step.
    ///
    /// 上一步。
    Previous,
    /// Submit from the last step.
    ///
    /// 在最后一步提交。
    Submit,
    /// Prediction service answered (network).
    ///
    /// 预测成功（网络回调）。
    PredictionSucceeded { result: PredictionResult },
    /// Prediction request failed (network).
    ///
    /// 预测失败（网络回调）。
    PredictionFailed { error: PredictionError },
    /// Start over from the results screen.
    ///
    /// 重新预测。
    NewPrediction,
}

/// Side-effects produced by state transitions.
///
/// 状态迁移产生的副作用。
#[derive(Debug, Clone, PartialEq)]
pub enum WizardAction {
    /// Post the encoded record to the prediction service.
    ///
    /// 向预测服务发送编码后的记录。
    RequestPrediction { record: ModelInputRecord },
    /// Form went back to its defaults.
    ///
    /// 表单已重置。
    ResetForm,
}

/// Pure wizard state machine.
///
/// 纯状态机：不包含副作用。
pub struct WizardStateMachine;

impl WizardStateMachine {
    pub fn transition(
        snapshot: WizardSnapshot,
        event: WizardEvent,
    ) -> (WizardSnapshot, Vec<WizardAction>) {
        let WizardSnapshot { state, form } = snapshot;
        match (state, event) {
            (WizardState::Editing { step, error }, WizardEvent::Update(update)) => (
                WizardSnapshot {
                    state: WizardState::Editing { step, error },
                    form: form.apply(update),
                },
                Vec::new(),
            ),
            (WizardState::Editing { step, error }, WizardEvent::Next) => {
                let snapshot = WizardSnapshot {
                    state: WizardState::Editing { step, error },
                    form,
                };
                match step.next() {
                    Some(next) if snapshot.blocking_gap(step).is_none() => (
                        WizardSnapshot {
                            state: snapshot.state.with_step(next),
                            form: snapshot.form,
                        },
                        Vec::new(),
                    ),
                    _ => (snapshot, Vec::new()),
                }
            }
            (WizardState::Editing { step, error }, WizardEvent::Previous) => {
                let step = step.previous().unwrap_or(step);
                (
                    WizardSnapshot {
                        state: WizardState::Editing { step, error },
                        form,
                    },
                    Vec::new(),
                )
            }
            (
                WizardState::Editing {
                    step: WizardStep::Billing,
                    error,
                },
                WizardEvent::Submit,
            ) => match form.complete() {
                Ok(completed) => {
                    let record = encode(&completed);
                    (
                        WizardSnapshot {
                            state: WizardState::Submitting,
                            form,
                        },
                        vec![WizardAction::RequestPrediction { record }],
                    )
                }
                Err(_) => (
                    WizardSnapshot {
                        state: WizardState::Editing {
                            step: WizardStep::Billing,
                            error,
                        },
                        form,
                    },
                    Vec::new(),
                ),
            },
            (WizardState::Submitting, WizardEvent::PredictionSucceeded { result }) => (
                WizardSnapshot {
                    state: WizardState::Results { result },
                    form,
                },
                Vec::new(),
            ),
            (WizardState::Submitting, WizardEvent::PredictionFailed { error }) => (
                WizardSnapshot {
                    state: WizardState::Editing {
                        step: WizardStep::Billing,
                        error: Some(error),
                    },
                    form,
                },
                Vec::new(),
            ),
            (WizardState::Results { .. }, WizardEvent::NewPrediction) => {
                (WizardSnapshot::default(), vec![WizardAction::ResetForm])
            }
            (state, _event) => (WizardSnapshot { state, form }, Vec::new()),
        }
    }
}

impl WizardState {
    fn with_step(self, step: WizardStep) -> Self {
        match self {
            Self::Editing { error, .. } => Self::Editing { step, error },
            other => other,
        }
    }
}

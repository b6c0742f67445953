use std::sync::Arc;

use async_trait::async_trait;
use cw_app::{CheckServiceHealth, SubmitLegacyForm, SubmitPrediction};
use cw_core::{
    FriendlyFormState, LegacyFormRecord, PredictionError, PredictionPort, PredictionRequest,
    PredictionResult, ServiceHealth, ValidationGap,
};

mockall::mock! {
    pub Port {}

    #[async_trait]
    impl PredictionPort for Port {
        async fn predict(&self, request: &PredictionRequest) -> Result<PredictionResult, PredictionError>;
        async fn health(&self) -> Result<ServiceHealth, PredictionError>;
    }
}

fn legacy_record() -> LegacyFormRecord {
    LegacyFormRecord {
        gender: "Male".into(),
        senior_citizen: "1".into(),
        partner: "No".into(),
        dependents: "No".into(),
        tenure: "2".into(),
        phone_service: "Yes".into(),
        multiple_lines: "No".into(),
        internet_service: "Fiber optic".into(),
        online_security: "No".into(),
        online_backup: "No".into(),
        device_protection: "No".into(),
        tech_support: "No".into(),
        streaming_tv: "Yes".into(),
        streaming_movies: "No".into(),
        contract: "Month-to-month".into(),
        paperless_billing: "Yes".into(),
        payment_method: "Electronic check".into(),
        monthly_charges: "85.65".into(),
        total_charges: "171.30".into(),
    }
}

#[tokio::test]
async fn submit_prediction_rejects_incomplete_form_without_network() {
    let mut port = MockPort::new();
    port.expect_predict().times(0);
    let usecase = SubmitPrediction::new(Arc::new(port));

    let err = usecase
        .execute(&FriendlyFormState::default())
        .await
        .unwrap_err();

    assert_eq!(
        err,
        PredictionError::ValidationGap(ValidationGap::MissingField { field: "gender" })
    );
}

#[tokio::test]
async fn submit_prediction_passes_parse_failure_through() {
    let mut port = MockPort::new();
    port.expect_predict()
        .times(1)
        .returning(|_| Err(PredictionError::parse("missing field `probability`")));
    let usecase = SubmitPrediction::new(Arc::new(port));

    let form: FriendlyFormState = serde_json::from_str(
        r#"{
            "gender": "Male",
            "internetService": "DSL",
            "contract": "One year",
            "paymentMethod": "Mailed check",
            "monthlyCharges": "50"
        }"#,
    )
    .unwrap();

    let err = usecase.execute(&form).await.unwrap_err();
    assert!(matches!(err, PredictionError::ParseFailure { .. }));
}

#[tokio::test]
async fn submit_legacy_form_posts_record_verbatim() {
    let mut port = MockPort::new();
    port.expect_predict()
        .withf(|request| *request == PredictionRequest::Legacy(legacy_record()))
        .times(1)
        .returning(|_| {
            Ok(PredictionResult {
                prediction: "Leaves".into(),
                probability: 0.81,
            })
        });
    let usecase = SubmitLegacyForm::new(Arc::new(port));

    let result = usecase.execute(legacy_record()).await.unwrap();
    assert_eq!(result.prediction, "Leaves");
}

#[tokio::test]
async fn submit_legacy_form_requires_every_field() {
    let mut port = MockPort::new();
    port.expect_predict().times(0);
    let usecase = SubmitLegacyForm::new(Arc::new(port));

    let mut record = legacy_record();
    record.monthly_charges.clear();

    let err = usecase.execute(record).await.unwrap_err();
    assert_eq!(
        err,
        PredictionError::ValidationGap(ValidationGap::MissingField {
            field: "monthlyCharges"
        })
    );
}

#[tokio::test]
async fn check_service_health_reports_status() {
    let mut port = MockPort::new();
    port.expect_health().times(1).returning(|| {
        Ok(ServiceHealth {
            status: "healthy".into(),
        })
    });
    let usecase = CheckServiceHealth::new(Arc::new(port));

    assert!(usecase.execute().await.unwrap().is_healthy());
}

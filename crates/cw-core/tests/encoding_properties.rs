//! Encoding transform properties over reachable wizard inputs.

use cw_core::encoding::ONE_HOT_GROUPS;
use cw_core::{
    encode, CompletedForm, Contract, FormUpdate, FriendlyFormState, Gender, InternetService,
    MultipleLines, PaymentMethod, Vocabulary, YesNo, COLUMN_COUNT, COLUMN_NAMES,
};
use serde_json::Value;

fn base_form() -> CompletedForm {
    CompletedForm {
        gender: Gender::Male,
        senior_citizen: false,
        partner: false,
        dependents: false,
        tenure: 12,
        phone_service: true,
        multiple_lines: MultipleLines::No,
        internet_service: InternetService::Dsl,
        online_security: false,
        online_backup: false,
        device_protection: false,
        tech_support: false,
        streaming_tv: false,
        streaming_movies: false,
        contract: Contract::MonthToMonth,
        payment_method: PaymentMethod::ElectronicCheck,
        paperless_billing: true,
        monthly_charges: 50.0,
    }
}

fn with_add_ons(mut form: CompletedForm, mask: u8) -> CompletedForm {
    form.online_security = mask & 0b000001 != 0;
    form.online_backup = mask & 0b000010 != 0;
    form.device_protection = mask & 0b000100 != 0;
    form.tech_support = mask & 0b001000 != 0;
    form.streaming_tv = mask & 0b010000 != 0;
    form.streaming_movies = mask & 0b100000 != 0;
    form
}

fn group_sum(json: &Value, group: &str) -> u64 {
    let prefix = format!("{group}_");
    json.as_object()
        .map(|object| {
            object
                .iter()
                .filter(|(key, _)| key.starts_with(&prefix))
                .map(|(_, value)| value.as_u64().unwrap_or(99))
                .sum()
        })
        .unwrap_or(0)
}

fn all_reachable_forms() -> Vec<CompletedForm> {
    let mut forms = Vec::new();
    for phone_service in [true, false] {
        for &multiple_lines in MultipleLines::ALL {
            for &internet_service in InternetService::ALL {
                for mask in 0..64u8 {
                    for &contract in Contract::ALL {
                        for &payment_method in PaymentMethod::ALL {
                            let mut form = with_add_ons(base_form(), mask);
                            form.phone_service = phone_service;
                            form.multiple_lines = multiple_lines;
                            form.internet_service = internet_service;
                            form.contract = contract;
                            form.payment_method = payment_method;
                            forms.push(form);
                        }
                    }
                }
            }
        }
    }
    forms
}

#[test]
fn record_always_has_the_full_column_set_in_order() {
    let json = serde_json::to_string(&encode(&base_form())).unwrap();
    let value: Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value.as_object().unwrap().len(), COLUMN_COUNT);

    // serialization follows struct order
    let mut last = 0;
    for name in COLUMN_NAMES {
        let needle = format!("\"{name}\":");
        let position = json.find(&needle).unwrap_or_else(|| panic!("missing {name}"));
        assert!(position >= last, "{name} out of order");
        last = position;
    }
}

#[test]
fn every_one_hot_group_has_exactly_one_hot_column() {
    for form in all_reachable_forms() {
        let json = serde_json::to_value(encode(&form)).unwrap();
        for group in ONE_HOT_GROUPS {
            assert_eq!(group_sum(&json, group), 1, "{group} for {form:?}");
        }
    }
}

#[test]
fn no_internet_forces_sentinel_on_every_add_on() {
    for mask in 0..64u8 {
        let mut form = with_add_ons(base_form(), mask);
        form.internet_service = InternetService::No;
        let record = encode(&form);

        for group in [
            "OnlineSecurity",
            "OnlineBackup",
            "DeviceProtection",
            "TechSupport",
            "StreamingTV",
            "StreamingMovies",
        ] {
            assert_eq!(record.hot_category(group), Some("No internet service"));
        }
    }
}

#[test]
fn add_ons_follow_flags_when_internet_present() {
    let mut form = with_add_ons(base_form(), 0b010101);
    form.internet_service = InternetService::FiberOptic;
    let record = encode(&form);

    assert_eq!(record.hot_category("OnlineSecurity"), Some("Yes"));
    assert_eq!(record.hot_category("OnlineBackup"), Some("No"));
    assert_eq!(record.hot_category("DeviceProtection"), Some("Yes"));
    assert_eq!(record.hot_category("TechSupport"), Some("No"));
    assert_eq!(record.hot_category("StreamingTV"), Some("Yes"));
    assert_eq!(record.hot_category("StreamingMovies"), Some("No"));
}

#[test]
fn no_phone_service_forces_multiple_lines_sentinel() {
    for &stored in MultipleLines::ALL {
        let mut form = base_form();
        form.phone_service = false;
        form.multiple_lines = stored;
        let record = encode(&form);

        assert_eq!(record.phone_service, YesNo::No);
        assert_eq!(record.multiple_lines_no_phone_service, 1);
        assert_eq!(record.multiple_lines_no, 0);
        assert_eq!(record.multiple_lines_yes, 0);
    }
}

#[test]
fn total_charges_is_monthly_times_tenure() {
    for tenure in [0u32, 1, 72] {
        for monthly in [0.0f64, 29.99, 118.75] {
            let mut form = base_form();
            form.tenure = tenure;
            form.monthly_charges = monthly;
            let record = encode(&form);

            assert_eq!(record.total_charges, monthly * f64::from(tenure));
            assert_eq!(record.monthly_charges, monthly);
            assert_eq!(record.tenure, tenure);
        }
    }
}

#[test]
fn senior_fiber_customer_from_wizard_updates() {
    let form = FriendlyFormState::default()
        .apply_all([
            FormUpdate::Gender(Gender::Female),
            FormUpdate::SeniorCitizen(true),
            FormUpdate::Partner(false),
            FormUpdate::Dependents(false),
            FormUpdate::Tenure(24),
            FormUpdate::PhoneService(true),
            FormUpdate::MultipleLines(MultipleLines::Yes),
            FormUpdate::InternetService(InternetService::FiberOptic),
            FormUpdate::OnlineSecurity(false),
            FormUpdate::OnlineBackup(true),
            FormUpdate::DeviceProtection(false),
            FormUpdate::TechSupport(false),
            FormUpdate::StreamingTv(true),
            FormUpdate::StreamingMovies(true),
            FormUpdate::Contract(Contract::OneYear),
            FormUpdate::PaymentMethod(PaymentMethod::CreditCard),
            FormUpdate::PaperlessBilling(true),
            FormUpdate::MonthlyCharges("89.50".to_string()),
        ])
        .complete()
        .unwrap();

    let json = serde_json::to_value(encode(&form)).unwrap();

    assert_eq!(json["gender"], "Female");
    assert_eq!(json["SeniorCitizen"], 1);
    assert_eq!(json["Partner"], "No");
    assert_eq!(json["Dependents"], "No");
    assert_eq!(json["tenure"], 24);
    assert_eq!(json["PhoneService"], "Yes");
    assert_eq!(json["PaperlessBilling"], "Yes");
    assert_eq!(json["MonthlyCharges"], 89.5);
    assert_eq!(json["TotalCharges"], 2148.0);
    assert_eq!(json["MultipleLines_Yes"], 1);
    assert_eq!(json["InternetService_Fiber optic"], 1);
    assert_eq!(json["OnlineSecurity_No"], 1);
    assert_eq!(json["OnlineBackup_Yes"], 1);
    assert_eq!(json["DeviceProtection_No"], 1);
    assert_eq!(json["TechSupport_No"], 1);
    assert_eq!(json["StreamingTV_Yes"], 1);
    assert_eq!(json["StreamingMovies_Yes"], 1);
    assert_eq!(json["Contract_One year"], 1);
    assert_eq!(json["PaymentMethod_Credit card (automatic)"], 1);
    assert_eq!(json["PaymentMethod_Electronic check"], 0);
}

#[test]
fn senior_fiber_customer_from_saved_form() {
    let form: FriendlyFormState = serde_json::from_value(serde_json::json!({
        "gender": "Female",
        "seniorCitizen": true,
        "partner": false,
        "dependents": false,
        "tenure": 24,
        "phoneService": true,
        "multipleLines": "Yes",
        "internetService": "Fiber optic",
        "onlineSecurity": true,
        "onlineBackup": false,
        "deviceProtection": false,
        "techSupport": true,
        "streamingTV": false,
        "streamingMovies": false,
        "contract": "One year",
        "paymentMethod": "Credit card (automatic)",
        "paperlessBilling": true,
        "monthlyCharges": "89.50"
    }))
    .unwrap();

    let json = serde_json::to_value(encode(&form.complete().unwrap())).unwrap();

    assert_eq!(json.as_object().unwrap().len(), COLUMN_COUNT);
    assert_eq!(json["SeniorCitizen"], 1);
    assert_eq!(json["Partner"], "No");
    assert_eq!(json["MultipleLines_Yes"], 1);
    assert_eq!(json["MultipleLines_No"], 0);
    assert_eq!(json["MultipleLines_No phone service"], 0);
    assert_eq!(json["InternetService_Fiber optic"], 1);
    assert_eq!(json["InternetService_DSL"], 0);
    assert_eq!(json["InternetService_No"], 0);
    assert_eq!(json["OnlineSecurity_Yes"], 1);
    assert_eq!(json["OnlineBackup_No"], 1);
    assert_eq!(json["TechSupport_Yes"], 1);
    assert_eq!(json["Contract_One year"], 1);
    assert_eq!(json["PaymentMethod_Credit card (automatic)"], 1);
    assert_eq!(json["TotalCharges"], 2148.0);
}

#[test]
fn no_internet_customer_with_every_add_on_checked() {
    let form = FriendlyFormState::default()
        .apply_all([
            FormUpdate::Gender(Gender::Male),
            FormUpdate::InternetService(InternetService::No),
            FormUpdate::OnlineSecurity(true),
            FormUpdate::OnlineBackup(true),
            FormUpdate::DeviceProtection(true),
            FormUpdate::TechSupport(true),
            FormUpdate::StreamingTv(true),
            FormUpdate::StreamingMovies(true),
            FormUpdate::Contract(Contract::TwoYear),
            FormUpdate::PaymentMethod(PaymentMethod::MailedCheck),
            FormUpdate::MonthlyCharges("20".to_string()),
        ])
        .complete()
        .unwrap();

    let json = serde_json::to_value(encode(&form)).unwrap();

    assert_eq!(json["InternetService_No"], 1);
    for group in [
        "OnlineSecurity",
        "OnlineBackup",
        "DeviceProtection",
        "TechSupport",
        "StreamingTV",
        "StreamingMovies",
    ] {
        assert_eq!(json[format!("{group}_Yes")], 0, "{group}");
        assert_eq!(json[format!("{group}_No")], 0, "{group}");
        assert_eq!(json[format!("{group}_No internet service")], 1, "{group}");
    }
    assert_eq!(json["TotalCharges"], 240.0);
}

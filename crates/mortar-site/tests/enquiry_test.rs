//! Enquiry form state machine.

#![allow(clippy::unwrap_used)]

mod common;

use std::sync::Arc;

use mortar_core::Error;
use mortar_core::types::{EnquiryField, EnquiryRecord};
use mortar_site::enquiry::{FAILURE_NOTICE, REJECTED_NOTICE, SUCCESS_NOTICE};
use mortar_site::{EnquiryForm, NoticeKind, SubmissionState};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use common::{GatedSink, RecordingSink, client_for, fill};

use SubmissionState::{Failed, Idle, Submitting, Succeeded};

#[tokio::test]
async fn test_blank_field_never_reaches_the_sink() {
    let form = EnquiryForm::new(RecordingSink::accepting());
    fill(&form);
    form.set_field(EnquiryField::Subject, "   ");

    let err = form.submit().await.unwrap_err();
    assert!(matches!(err, Error::Validation { field: Some(ref f), .. } if f == "subject"));
    assert_eq!(form.state(), Idle);
    assert!(form.transitions().is_empty());
    assert!(form.notice().is_none());
}

#[tokio::test]
async fn test_empty_form_is_rejected() {
    let sink = Arc::new(RecordingSink::accepting());
    let form = EnquiryForm::new(Arc::clone(&sink));

    assert!(form.submit().await.is_err());
    assert_eq!(sink.calls(), 0);
}

#[tokio::test]
async fn test_success_clears_form_and_returns_to_idle() {
    let sink = Arc::new(RecordingSink::accepting());
    let form = EnquiryForm::new(Arc::clone(&sink));
    fill(&form);
    let submitted = form.form();

    form.submit().await.unwrap();

    assert_eq!(form.transitions(), vec![Submitting, Succeeded, Idle]);
    assert_eq!(form.state(), Idle);
    assert_eq!(form.form(), EnquiryRecord::default());
    let notice = form.notice().unwrap();
    assert_eq!(notice.kind, NoticeKind::Success);
    assert_eq!(notice.message, SUCCESS_NOTICE);
    assert_eq!(sink.delivered.lock().unwrap().as_slice(), &[submitted]);
}

#[tokio::test]
async fn test_failure_keeps_form_and_allows_resubmit() {
    let sink = Arc::new(RecordingSink::failing(500));
    let form = EnquiryForm::new(Arc::clone(&sink));
    fill(&form);
    let filled = form.form();

    let err = form.submit().await.unwrap_err();
    assert!(err.is_user_facing());
    assert_eq!(form.state(), Failed);
    assert_eq!(form.form(), filled);
    let notice = form.notice().unwrap();
    assert_eq!(notice.kind, NoticeKind::Error);
    assert_eq!(notice.message, FAILURE_NOTICE);

    // resubmission straight from Failed
    assert!(form.submit().await.is_err());
    assert_eq!(sink.calls(), 2);
    assert_eq!(form.transitions(), vec![Submitting, Failed, Submitting, Failed]);
}

#[tokio::test]
async fn test_dismiss_returns_failed_form_to_idle() {
    let form = EnquiryForm::new(RecordingSink::failing(503));
    fill(&form);
    let _ = form.submit().await;

    form.dismiss();
    assert_eq!(form.state(), Idle);
    assert!(form.notice().is_none());
    assert_eq!(form.transitions(), vec![Submitting, Failed, Idle]);

    // dismissing an idle form changes nothing
    form.dismiss();
    assert_eq!(form.transitions().len(), 3);
}

#[tokio::test]
async fn test_second_submit_while_in_flight_is_rejected() {
    let sink = Arc::new(GatedSink::new());
    let form = Arc::new(EnquiryForm::new(Arc::clone(&sink)));
    fill(&form);

    let mut rx = form.subscribe();
    let first = tokio::spawn({
        let form = Arc::clone(&form);
        async move { form.submit().await }
    });
    rx.wait_for(|state| state.is_in_flight()).await.unwrap();

    let err = form.submit().await.unwrap_err();
    assert!(matches!(err, Error::SubmissionInFlight));

    sink.gate.notify_one();
    first.await.unwrap().unwrap();
    assert_eq!(form.state(), Idle);
    assert_eq!(form.transitions(), vec![Submitting, Succeeded, Idle]);
}

#[tokio::test]
async fn test_subscribers_see_final_state() {
    let form = EnquiryForm::new(RecordingSink::failing(502));
    let rx = form.subscribe();
    fill(&form);

    let _ = form.submit().await;
    assert!(rx.has_changed().unwrap());
    assert_eq!(*rx.borrow(), Failed);
}

#[tokio::test]
async fn test_submit_through_http_client() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/enquiry"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "ok": true })))
        .expect(1)
        .mount(&server)
        .await;

    let form = EnquiryForm::new(client_for(&server));
    fill(&form);
    form.submit().await.unwrap();
    assert!(form.form().is_blank());
}

#[tokio::test]
async fn test_http_failure_preserves_form() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/enquiry"))
        .respond_with(ResponseTemplate::new(400))
        .mount(&server)
        .await;

    let form = EnquiryForm::new(client_for(&server));
    fill(&form);
    let err = form.submit().await.unwrap_err();
    assert!(matches!(err, Error::Unreachable { status: Some(400), .. }));
    assert_eq!(form.state(), Failed);
    assert_eq!(form.form().name, "Asha Kulkarni");
    assert_eq!(form.notice().unwrap().message, REJECTED_NOTICE);
}

#[tokio::test]
async fn test_edits_made_while_in_flight_survive_success() {
    let sink = Arc::new(GatedSink::new());
    let form = Arc::new(EnquiryForm::new(Arc::clone(&sink)));
    fill(&form);

    let mut rx = form.subscribe();
    let pending = tokio::spawn({
        let form = Arc::clone(&form);
        async move { form.submit().await }
    });
    rx.wait_for(|state| state.is_in_flight()).await.unwrap();

    form.set_field(EnquiryField::Message, "Also a quote for the boundary wall.");
    sink.gate.notify_one();
    pending.await.unwrap().unwrap();

    let kept = form.form();
    assert_eq!(kept.message, "Also a quote for the boundary wall.");
    assert_eq!(kept.name, "Asha Kulkarni");
    assert_eq!(form.notice().unwrap().kind, NoticeKind::Success);
}

#[tokio::test]
async fn test_subscriber_sees_success_as_idle_with_notice() {
    let form = EnquiryForm::new(RecordingSink::accepting());
    let rx = form.subscribe();
    fill(&form);

    form.submit().await.unwrap();
    assert!(rx.has_changed().unwrap());
    assert_eq!(*rx.borrow(), Idle);
    assert_eq!(form.notice().unwrap().message, SUCCESS_NOTICE);
    assert!(form.transitions().contains(&Succeeded));
}

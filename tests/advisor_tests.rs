use outfit_stylist::{Error, advisor::AdviceRequester};
use pretty_assertions::assert_eq;
use std::sync::Arc;

mod common;

use common::mocks::{MockAdviceBackend, MockFailure, sample_session};

fn requester(backend: &MockAdviceBackend) -> AdviceRequester {
    AdviceRequester::new(Arc::new(backend.clone()))
}

#[tokio::test]
async fn stubbed_backend_text_is_returned_verbatim() {
    let backend =
        MockAdviceBackend::new().with_responses(vec!["Wear blue for a casual sunny look"]);
    let result = requester(&backend)
        .request_advice(&sample_session())
        .await
        .unwrap();

    assert_eq!(result.text, "Wear blue for a casual sunny look");
}

#[tokio::test]
async fn exactly_one_backend_call_per_action() {
    let backend = MockAdviceBackend::new().with_responses(vec!["first", "second"]);
    let requester = requester(&backend);

    requester.request_advice(&sample_session()).await.unwrap();
    requester.request_advice(&sample_session()).await.unwrap();

    assert_eq!(backend.submissions().len(), 2);
}

#[tokio::test]
async fn submitted_prompt_carries_profile_and_context() {
    let backend = MockAdviceBackend::new().with_responses(vec!["ok"]);
    requester(&backend)
        .request_advice(&sample_session())
        .await
        .unwrap();

    let submissions = backend.submissions();
    assert_eq!(submissions.len(), 1);
    let submission = &submissions[0];
    assert!(submission.prompt.contains("Female"));
    assert!(submission.prompt.contains("Fair"));
    assert!(submission.prompt.contains("Pear"));
    assert!(submission.prompt.contains("Casual Day Out"));
    assert!(submission.prompt.contains("Sunny & Hot"));
    assert_eq!(submission.mime_type, "image/png");
    assert_eq!(submission.credential, "test-api-key");
}

#[tokio::test]
async fn missing_credential_is_rejected_before_any_call() {
    let backend = MockAdviceBackend::new().with_responses(vec!["should never be returned"]);
    let mut session = sample_session();
    session.credential = "   ".to_string();

    let err = requester(&backend)
        .request_advice(&session)
        .await
        .unwrap_err();

    assert!(matches!(err, Error::InvalidInput(_)));
    assert!(backend.submissions().is_empty());
}

#[tokio::test]
async fn missing_image_is_rejected_before_any_call() {
    let backend = MockAdviceBackend::new().with_responses(vec!["should never be returned"]);
    let mut session = sample_session();
    session.image = None;

    let err = requester(&backend)
        .request_advice(&session)
        .await
        .unwrap_err();

    assert!(matches!(err, Error::InvalidInput(_)));
    assert!(backend.submissions().is_empty());
}

#[tokio::test]
async fn backend_authentication_failure_is_surfaced() {
    let backend = MockAdviceBackend::new()
        .with_failure(MockFailure::Authentication("key rejected".to_string()));

    let err = requester(&backend)
        .request_advice(&sample_session())
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Authentication(_)));
}

#[tokio::test]
async fn blank_backend_text_maps_to_empty_response() {
    let backend = MockAdviceBackend::new().with_responses(vec!["   \n  "]);

    let err = requester(&backend)
        .request_advice(&sample_session())
        .await
        .unwrap_err();

    assert!(matches!(err, Error::EmptyResponse));
}

#[tokio::test]
async fn failed_request_leaves_requester_usable() {
    let backend = MockAdviceBackend::new()
        .with_failure(MockFailure::Upstream("service unavailable".to_string()));
    let requester = requester(&backend);

    let first = requester.request_advice(&sample_session()).await;
    let second = requester.request_advice(&sample_session()).await;

    assert!(matches!(first.unwrap_err(), Error::Upstream(_)));
    assert!(matches!(second.unwrap_err(), Error::Upstream(_)));
    assert_eq!(backend.submissions().len(), 2);
}

//! End-to-end submission against a local axum ledger stub.

use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::post;
use axum::{Form, Router};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use pb_03_ledger_submitter::{
    FailureClass, HorizonClient, LedgerError, SecretSeed, SubmissionResult, SubmitterApi,
    SubmitterConfig, TransactionSubmitter, TEST_NETWORK_PASSPHRASE,
};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::mpsc;

const TX: [u8; 8] = [0x22; 8];

/// Canned answer for `POST /transactions`.
struct Canned {
    status: StatusCode,
    body: &'static str,
    delay: Duration,
    received: mpsc::UnboundedSender<HashMap<String, String>>,
}

async fn submit_transaction(
    State(canned): State<Arc<Canned>>,
    Form(form): Form<HashMap<String, String>>,
) -> impl IntoResponse {
    let _ = canned.received.send(form);
    tokio::time::sleep(canned.delay).await;
    (
        canned.status,
        [(header::CONTENT_TYPE, "application/json")],
        canned.body,
    )
}

/// Start a ledger stub; submitted forms arrive on the returned channel.
async fn spawn_ledger(
    status: StatusCode,
    body: &'static str,
    delay: Duration,
) -> (String, mpsc::UnboundedReceiver<HashMap<String, String>>) {
    let (received, rx) = mpsc::unbounded_channel();
    let canned = Arc::new(Canned {
        status,
        body,
        delay,
        received,
    });
    let router = Router::new()
        .route("/transactions", post(submit_transaction))
        .with_state(canned);

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let url = format!("http://{}", listener.local_addr().unwrap());
    tokio::spawn(async move {
        let _ = axum::serve(listener, router).await;
    });

    (url, rx)
}

fn submitter(url: String, timeout: Duration) -> TransactionSubmitter<HorizonClient> {
    let config = SubmitterConfig {
        request_timeout: timeout,
        connect_timeout: timeout,
        ..SubmitterConfig::with_url(url)
    };
    TransactionSubmitter::from_config(&config).unwrap()
}

#[tokio::test]
async fn test_success_over_http() {
    let (url, mut rx) = spawn_ledger(
        StatusCode::OK,
        r#"{"hash":"c0ffee","ledger":4242,"envelope_xdr":"E","result_xdr":"AAAAAAAAAGQAAAAAAAAAAAAAAAA=","result_meta_xdr":"M"}"#,
        Duration::ZERO,
    )
    .await;
    let submitter = submitter(url, Duration::from_secs(5));
    assert_eq!(submitter.network_passphrase(), TEST_NETWORK_PASSPHRASE);

    let seed = SecretSeed::new([3u8; 32]).to_strkey();
    let result = submitter
        .submit_classified(submitter.envelope(TX.to_vec()), &[&seed])
        .await
        .unwrap();

    match result {
        SubmissionResult::Success(success) => {
            assert_eq!(success.hash, "c0ffee");
            assert_eq!(success.ledger, 4242);
        }
        other => panic!("expected success, got {:?}", other),
    }

    let form = rx.recv().await.unwrap();
    let envelope = BASE64.decode(&form["tx"]).unwrap();
    assert_eq!(&envelope[..4], &[0, 0, 0, 2]);
    assert_eq!(&envelope[4..12], &TX);
    assert_eq!(&envelope[12..16], &[0, 0, 0, 1]);
}

#[tokio::test]
async fn test_bad_auth_problem_over_http() {
    let (url, _rx) = spawn_ledger(
        StatusCode::BAD_REQUEST,
        r#"{"type":"https://stellar.org/horizon-errors/transaction_failed",
            "title":"Transaction Failed","status":400,
            "detail":"The transaction failed when submitted to the stellar network.",
            "extras":{"envelope_xdr":"E","result_xdr":"AAAAAAAAAGT////6AAAAAA==",
                      "result_codes":{"transaction":"tx_bad_auth"}}}"#,
        Duration::ZERO,
    )
    .await;
    let submitter = submitter(url, Duration::from_secs(5));

    let err = submitter
        .sign_and_submit(submitter.envelope(TX.to_vec()), &[])
        .await
        .unwrap_err();
    let failure = err.submission().unwrap();
    assert_eq!(failure.class(), FailureClass::LedgerRejected);
    assert_eq!(
        failure.diagnostics.result_codes.as_ref().unwrap().transaction_code,
        "tx_bad_auth"
    );
    assert_eq!(
        failure.diagnostics.result_string.as_deref(),
        Some("AAAAAAAAAGT////6AAAAAA==")
    );
    assert_eq!(failure.error.problem().unwrap().status, 400);
}

#[tokio::test]
async fn test_malformed_extras_over_http() {
    let (url, _rx) = spawn_ledger(
        StatusCode::BAD_REQUEST,
        r#"{"title":"Transaction Failed","status":400,"extras":{"result_codes":"?"}}"#,
        Duration::ZERO,
    )
    .await;
    let submitter = submitter(url, Duration::from_secs(5));

    let result = submitter
        .submit_classified(submitter.envelope(TX.to_vec()), &[])
        .await
        .unwrap();
    assert_eq!(
        result,
        SubmissionResult::Indeterminate {
            result_string: None
        }
    );
}

#[tokio::test]
async fn test_timeout_over_http_is_indeterminate() {
    let (url, mut rx) = spawn_ledger(StatusCode::OK, "{}", Duration::from_secs(5)).await;
    let submitter = submitter(url, Duration::from_millis(200));

    let err = submitter
        .sign_and_submit(submitter.envelope(TX.to_vec()), &[])
        .await
        .unwrap_err();
    let failure = err.submission().unwrap();
    assert!(matches!(failure.error, LedgerError::Timeout(_)));
    assert_eq!(failure.class(), FailureClass::Indeterminate);

    // The ledger saw the envelope even though no answer arrived in time.
    assert!(rx.recv().await.unwrap().contains_key("tx"));
}

#[tokio::test]
async fn test_connection_refused_is_indeterminate() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let url = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);
    let submitter = submitter(url, Duration::from_secs(2));

    let err = submitter
        .sign_and_submit(submitter.envelope(TX.to_vec()), &[])
        .await
        .unwrap_err();
    let failure = err.submission().unwrap();
    assert!(matches!(failure.error, LedgerError::Transport(_)));
    assert_eq!(failure.class(), FailureClass::Indeterminate);
}

//! Client behaviour when nothing is listening at the base URL.

use async_trait::async_trait;
use savings_predictor_client::{ClientError, RetryPolicy, SavingsApiClient, Sleeper};
use std::net::TcpListener;
use std::sync::{Arc, Mutex};
use std::time::Duration;

#[derive(Default)]
struct RecordingSleeper {
    delays: Mutex<Vec<Duration>>,
}

#[async_trait]
impl Sleeper for RecordingSleeper {
    async fn sleep(&self, duration: Duration) {
        self.delays.lock().unwrap().push(duration);
    }
}

fn unused_local_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}

#[tokio::test]
async fn connection_refused_is_retried_then_reported_as_unreachable() {
    let sleeper = Arc::new(RecordingSleeper::default());
    let client = SavingsApiClient::new(&unused_local_url())
        .unwrap()
        .with_sleeper(sleeper.clone());

    let result = client.health().await;

    assert!(matches!(result, Err(ClientError::Unreachable(_))));
    assert_eq!(
        *sleeper.delays.lock().unwrap(),
        vec![Duration::from_secs(1), Duration::from_secs(2)]
    );
}

#[tokio::test]
async fn writes_are_resent_when_server_was_never_reached() {
    let sleeper = Arc::new(RecordingSleeper::default());
    let client = SavingsApiClient::new(&unused_local_url())
        .unwrap()
        .with_sleeper(sleeper.clone());

    let result = client.parse_transaction("Samosa 30rs food").await;

    assert!(result.unwrap_err().is_unreachable());
    assert_eq!(sleeper.delays.lock().unwrap().len(), 2);
}

#[tokio::test]
async fn single_attempt_policy_does_not_sleep() {
    let sleeper = Arc::new(RecordingSleeper::default());
    let client = SavingsApiClient::new(&unused_local_url())
        .unwrap()
        .with_retry_policy(RetryPolicy::no_retry())
        .with_sleeper(sleeper.clone());

    let result = client.get_profile("user123").await;

    assert!(result.unwrap_err().is_transient());
    assert!(sleeper.delays.lock().unwrap().is_empty());
}

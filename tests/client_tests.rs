use mockito::Matcher;
use mph::models::*;
use mph::operation::CALLBACK_THREAD_NAME;
use mph::prelude::*;
use mph::{CallbackContext, OperationState, RequestDescriptor, TransportErrorKind};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;


use test_helpers::{completion, delivered, mock_client, StaticTransport, TEST_API_KEY};

#[tokio::test]
async fn test_block_stats_success() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/index.php")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("page".into(), "api".into()),
            Matcher::UrlEncoded("action".into(), "getblockstats".into()),
            Matcher::UrlEncoded("api_key".into(), TEST_API_KEY.into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"getblockstats":{"height":100}}"#)
        .create_async()
        .await;

    let client = mock_client(&server);
    let (callback, rx) = completion::<MphBlockStatsResponse>();
    let operation = client.get_block_stats(callback);

    let delivery = delivered(rx).await;
    let response = delivery.result.expect("block stats should decode");
    assert_eq!(response.stats.height, 100);
    assert_eq!(delivery.thread_name.as_deref(), Some(CALLBACK_THREAD_NAME));
    assert_eq!(operation.state(), OperationState::Succeeded);
    assert_eq!(operation.action(), "getblockstats");

    mock.assert_async().await;
}

#[tokio::test]
async fn test_request_carries_id_and_headers() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/index.php")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("action".into(), "getuserbalance".into()),
            Matcher::UrlEncoded("id".into(), "42".into()),
            Matcher::UrlEncoded("api_key".into(), TEST_API_KEY.into()),
        ]))
        .match_header("content-type", "application/json")
        .match_header("cache-control", "no-cache")
        .with_status(200)
        .with_body(r#"{"getuserbalance":{"version":"1.0.0","runtime":1.2,"data":{"confirmed":"1.5","unconfirmed":0.25}}}"#)
        .create_async()
        .await;

    let client = mock_client(&server);
    let (callback, rx) = completion::<MphUserBalanceResponse>();
    let _operation = client.get_user_balance(Some("42"), callback);

    let balance = delivered(rx).await.result.unwrap().balance.data;
    assert_eq!(balance.confirmed, 1.5);
    assert_eq!(balance.unconfirmed, 0.25);

    mock.assert_async().await;
}

#[tokio::test]
async fn test_missing_required_field_is_decode_error() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/index.php")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(r#"{"getpoolstatus":{"data":{}}}"#)
        .create_async()
        .await;

    let client = mock_client(&server);
    let calls = Arc::new(AtomicUsize::new(0));
    let (callback, rx) = completion::<MphBlockStatsResponse>();
    let counter = calls.clone();
    let operation = client.get_block_stats(move |result| {
        counter.fetch_add(1, Ordering::SeqCst);
        callback(result)
    });

    let error = delivered(rx).await.result.unwrap_err();
    assert!(error.is_decode());
    assert!(error.type_name().unwrap().ends_with("MphBlockStatsResponse"));
    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert_eq!(operation.state(), OperationState::Failed);
}

#[tokio::test]
async fn test_non_success_status_is_transport_error() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/index.php")
        .match_query(Matcher::Any)
        .with_status(401)
        .with_body("Access denied")
        .create_async()
        .await;

    let client = mock_client(&server);
    let (callback, rx) = completion::<MphPoolInfoResponse>();
    client.get_pool_info(callback);

    let error = delivered(rx).await.result.unwrap_err();
    assert!(error.is_transport());
    assert_eq!(error.http_status(), Some(401));
    assert_eq!(error.transport_kind(), Some(TransportErrorKind::Status));
}

#[tokio::test]
async fn test_connection_refused_is_transport_error() {
    // Reserve a port, then free it so nothing listens there
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    let client = MphClient::new(TEST_API_KEY)
        .with_endpoint("http", format!("127.0.0.1:{}/index.php?page=api&", port));
    let (callback, rx) = completion::<MphDifficultyResponse>();
    client.get_difficulty(callback);

    let error = delivered(rx).await.result.unwrap_err();
    assert!(error.is_transport());
    assert_eq!(error.http_status(), Some(500));
    assert_eq!(error.transport_kind(), Some(TransportErrorKind::Connect));
    assert!(!error.to_string().contains(TEST_API_KEY));
}

#[tokio::test]
async fn test_cancel_before_completion_suppresses_callback() {
    let transport = StaticTransport::new(200, r#"{"getpoolhashrate":{"data":1.0}}"#)
        .with_delay(Duration::from_millis(200));
    let client = MphClient::new(TEST_API_KEY).with_transport(transport);

    let calls = Arc::new(AtomicUsize::new(0));
    let counter = calls.clone();
    let operation = client.get_pool_hash_rate(move |_| {
        counter.fetch_add(1, Ordering::SeqCst);
    });

    operation.cancel();
    operation.cancel();
    assert_eq!(operation.state(), OperationState::Cancelled);

    tokio::time::sleep(Duration::from_millis(400)).await;
    assert_eq!(calls.load(Ordering::SeqCst), 0);
    assert!(operation.is_cancelled());
}

#[tokio::test]
async fn test_concurrent_calls_share_callback_thread() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/index.php")
        .match_query(Matcher::UrlEncoded("action".into(), "getdifficulty".into()))
        .with_status(200)
        .with_body(r#"{"getdifficulty":{"data":12.5}}"#)
        .create_async()
        .await;
    server
        .mock("GET", "/index.php")
        .match_query(Matcher::UrlEncoded("action".into(), "getcurrentworkers".into()))
        .with_status(200)
        .with_body(r#"{"getcurrentworkers":{"data":7}}"#)
        .create_async()
        .await;

    let client = mock_client(&server);
    let (difficulty_cb, difficulty_rx) = completion::<MphDifficultyResponse>();
    let (workers_cb, workers_rx) = completion::<MphCurrentWorkersResponse>();
    client.get_difficulty(difficulty_cb);
    client.get_current_workers(workers_cb);

    let (difficulty, workers) = futures::join!(delivered(difficulty_rx), delivered(workers_rx));
    assert_eq!(difficulty.result.unwrap().difficulty.data, 12.5);
    assert_eq!(workers.result.unwrap().workers.data, 7);
    assert_eq!(difficulty.thread_id, workers.thread_id);
    assert_eq!(workers.thread_name.as_deref(), Some(CALLBACK_THREAD_NAME));
}

#[tokio::test]
async fn test_manual_callback_context() {
    let (context, mut queue) = CallbackContext::manual();
    let transport = StaticTransport::new(200, r#"{"gettimesincelastblock":{"data":360}}"#);
    let client = MphClient::new(TEST_API_KEY)
        .with_transport(transport)
        .with_callback_context(context);

    let (callback, mut rx) = completion::<MphTimeSinceLastBlockResponse>();
    client.get_time_since_last_block(callback);

    // Nothing runs until the queue is drained here
    assert!(queue.run_next().await);
    let delivery = rx.try_recv().expect("completion should have run during run_next");
    assert_eq!(delivery.thread_id, std::thread::current().id());
    assert_eq!(delivery.result.unwrap().time_since_last_block.data, 360);
}

#[tokio::test]
async fn test_custom_domain_reaches_transport() {
    let transport = StaticTransport::new(200, r#"{"getpoolinfo":{"data":{"coinname":"Zcash"}}}"#);
    let requests = transport.requests();
    let client = MphClient::new(TEST_API_KEY).with_transport(transport);

    client.set_domain(MphDomain::Ethereum);
    client.set_custom_domain("beta");
    let info: MphPoolInfoResponse = client
        .fetch(RequestDescriptor::get("getpoolinfo"))
        .await
        .unwrap();
    assert_eq!(info.info.data.coinname, "Zcash");

    client.set_domain(MphDomain::Zcash);
    let _: MphPoolInfoResponse = client
        .fetch(RequestDescriptor::get("getpoolinfo"))
        .await
        .unwrap();

    let requests = requests.lock().unwrap();
    assert_eq!(
        requests[0].url,
        "https://beta.miningpoolhub.com/index.php?page=api&action=getpoolinfo&api_key=test-api-key"
    );
    assert_eq!(
        requests[1].url,
        "https://zcash.miningpoolhub.com/index.php?page=api&action=getpoolinfo&api_key=test-api-key"
    );
    assert_eq!(requests[0].timeout, mph::REQUEST_TIMEOUT);
}

#[tokio::test]
async fn test_absent_response_without_error_is_500() {
    let transport = StaticTransport::with_outcome(mph::TransportOutcome {
        response: None,
        error: None,
    });
    let client = MphClient::new(TEST_API_KEY).with_transport(transport);

    let (callback, rx) = completion::<MphPoolShareRateResponse>();
    client.get_pool_share_rate(callback);

    let error = delivered(rx).await.result.unwrap_err();
    assert_eq!(error.http_status(), Some(500));
}

#[test]
fn test_without_runtime_fails_through_callback() {
    let client = MphClient::new(TEST_API_KEY);
    let (tx, rx) = std::sync::mpsc::channel();

    let operation = client.get_pool_status(move |result| {
        tx.send(result).unwrap();
    });

    let error = rx
        .recv_timeout(Duration::from_secs(5))
        .unwrap()
        .unwrap_err();
    assert_eq!(error.transport_kind(), Some(TransportErrorKind::NoRuntime));
    assert_eq!(operation.state(), OperationState::Failed);
}

#[test]
fn test_shut_down_runtime_fails_through_callback() {
    let runtime = tokio::runtime::Runtime::new().unwrap();
    let client = runtime.block_on(async { MphClient::new(TEST_API_KEY) });
    drop(runtime);

    let (tx, rx) = std::sync::mpsc::channel();
    let operation = client.get_difficulty(move |result| {
        tx.send(result).unwrap();
    });

    let error = rx
        .recv_timeout(Duration::from_secs(3))
        .expect("completion must fire when the runtime is gone")
        .unwrap_err();
    assert_eq!(error.transport_kind(), Some(TransportErrorKind::NoRuntime));
    assert_eq!(error.http_status(), Some(500));
    assert_eq!(operation.state(), OperationState::Failed);
}

#[test]
fn test_runtime_shutdown_mid_request_fails_through_callback() {
    let runtime = tokio::runtime::Runtime::new().unwrap();
    let transport = StaticTransport::new(200, r#"{"getdifficulty":{"data":1.0}}"#)
        .with_delay(Duration::from_secs(30));
    let client = MphClient::new(TEST_API_KEY)
        .with_runtime(runtime.handle().clone())
        .with_transport(transport);

    let (tx, rx) = std::sync::mpsc::channel();
    let operation = client.get_difficulty(move |result| {
        tx.send(result).unwrap();
    });
    std::thread::sleep(Duration::from_millis(50));
    runtime.shutdown_timeout(Duration::from_millis(100));

    let error = rx
        .recv_timeout(Duration::from_secs(3))
        .expect("completion must fire when the runtime shuts down")
        .unwrap_err();
    assert_eq!(error.transport_kind(), Some(TransportErrorKind::NoRuntime));
    assert_eq!(operation.state(), OperationState::Failed);
    assert!(rx.recv_timeout(Duration::from_millis(200)).is_err());
}

#[tokio::test]
async fn test_caller_headers_reach_the_wire() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/index.php")
        .match_query(Matcher::UrlEncoded("action".into(), "getpoolinfo".into()))
        .match_header("x-client", "1")
        .match_header("content-type", "application/json")
        .match_header("cache-control", "no-cache")
        .with_status(200)
        .with_body(r#"{"getpoolinfo":{"data":{"coinname":"Monero"}}}"#)
        .expect(2)
        .create_async()
        .await;

    let client = mock_client(&server);
    let request = RequestDescriptor::get("getpoolinfo").with_header("x-client", "1");

    let info: MphPoolInfoResponse = client.fetch(request.clone()).await.unwrap();
    assert_eq!(info.info.data.coinname, "Monero");

    let (callback, rx) = completion::<MphPoolInfoResponse>();
    client.request::<MphPoolInfoResponse, _>(request, callback);
    assert_eq!(delivered(rx).await.result.unwrap().info.data.coinname, "Monero");

    mock.assert_async().await;
}

#[tokio::test]
async fn test_caller_headers_reach_the_transport() {
    let transport = StaticTransport::new(200, r#"{"getpoolinfo":{"data":{}}}"#);
    let requests = transport.requests();
    let client = MphClient::new(TEST_API_KEY).with_transport(transport);

    let (callback, rx) = completion::<MphPoolInfoResponse>();
    client.request::<MphPoolInfoResponse, _>(
        RequestDescriptor::get("getpoolinfo").with_header("x-client", "1"),
        callback,
    );
    delivered(rx).await.result.unwrap();

    let requests = requests.lock().unwrap();
    assert_eq!(
        requests[0].headers,
        vec![("x-client".to_string(), "1".to_string())]
    );
}

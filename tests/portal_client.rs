mod common;

use common::{position, versioned_bundle, StubApi, TEST_API_KEY};
use position_portal::core::portal_client::is_not_found;
use position_portal::{ApiConfig, PortalClient};
use serde_json::{json, Value};

#[tokio::test]
async fn test_list_company_positions_sends_api_key() {
    let api = StubApi::start().await;
    api.respond(
        "GET",
        "/v1/company/7/positions",
        200,
        json!([{ "position": position(1, 1, "Barista") }]),
    );

    let bundles = api.client().list_company_positions(7).await.unwrap();

    assert_eq!(bundles.len(), 1);
    let requests = api.requests_to("GET", "/v1/company/7/positions");
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].api_key.as_deref(), Some(TEST_API_KEY));
}

#[tokio::test]
async fn test_get_position_versions_returns_unreduced_bundle() {
    let api = StubApi::start().await;
    api.respond("GET", "/v1/position/1001/versions", 200, versioned_bundle());

    let bundle = api.client().get_position_versions(1001).await.unwrap();
    assert_eq!(bundle.position_info.len(), 3);
    assert_eq!(bundle.position_faqs.len(), 2);

    let details = bundle.into_latest().unwrap();
    assert_eq!(details.position.position_title, "IT Trainer - Remote");
    assert_eq!(details.position_info.len(), 2);
    assert_eq!(details.position_info[0].answer.as_deref(), Some("Full time"));
    assert_eq!(details.position_faqs.len(), 1);
    assert_eq!(details.position_faqs[0].version, 2);
}

#[tokio::test]
async fn test_update_position_details_puts_full_bundle() {
    let api = StubApi::start().await;
    api.respond("GET", "/v1/position/1001/versions", 200, versioned_bundle());
    api.respond("PUT", "/v1/position/1001/details", 200, Value::Null);

    let client = api.client();
    let details = client
        .get_position_versions(1001)
        .await
        .unwrap()
        .into_latest()
        .unwrap();

    let ack = client.update_position_details(1001, &details).await.unwrap();
    assert!(ack.is_null());

    let puts = api.requests_to("PUT", "/v1/position/1001/details");
    assert_eq!(puts.len(), 1);
    let body = puts[0].body.as_ref().unwrap();
    assert_eq!(body["position"]["positionTitle"], "IT Trainer - Remote");
    assert_eq!(body["positionInfo"].as_array().unwrap().len(), 2);
    assert_eq!(body["positionFAQs"][0]["answeredByHR"], true);
}

#[tokio::test]
async fn test_update_acknowledgement_is_passed_through() {
    let api = StubApi::start().await;
    api.respond("GET", "/v1/position/5/versions", 200, json!({ "position": position(5, 1, "Chef") }));
    api.respond("PUT", "/v1/position/5/details", 200, json!({ "status": "accepted" }));

    let client = api.client();
    let details = client.get_position_versions(5).await.unwrap().into_latest().unwrap();

    let ack = client.update_position_details(5, &details).await.unwrap();
    assert_eq!(ack, json!({ "status": "accepted" }));
}

#[tokio::test]
async fn test_send_chat_request_posts_question_and_position() {
    let api = StubApi::start().await;
    api.respond("POST", "/v1/chatrequest", 200, json!({ "answer": "Yes, fully remote." }));

    let response = api
        .client()
        .send_chat_request("Is it remote?", 1001)
        .await
        .unwrap();

    assert_eq!(response.answer.as_deref(), Some("Yes, fully remote."));
    let posts = api.requests_to("POST", "/v1/chatrequest");
    assert_eq!(
        posts[0].body,
        Some(json!({ "question": "Is it remote?", "positionId": 1001 }))
    );
}

#[tokio::test]
async fn test_error_status_is_surfaced() {
    let api = StubApi::start().await;
    api.respond("GET", "/v1/company/1/positions", 500, json!({ "error": "boom" }));

    let client = api.client();

    let err = client.list_company_positions(1).await.unwrap_err();
    assert!(!is_not_found(&err));
    assert!(format!("{:#}", err).contains("500"));

    let err = client.list_company_jobs(1).await.unwrap_err();
    assert!(is_not_found(&err));

    // One request per call, no retries
    assert_eq!(api.requests_to("GET", "/v1/company/1/positions").len(), 1);
}

#[tokio::test]
async fn test_malformed_body_is_an_error() {
    let api = StubApi::start().await;
    api.respond("GET", "/v1/company/1/jobs", 200, json!({ "not": "a list" }));

    assert!(api.client().list_company_jobs(1).await.is_err());
}

#[tokio::test]
async fn test_transport_failure_is_an_error() {
    let client = PortalClient::new(&ApiConfig::new("http://127.0.0.1:1", "key").with_timeout(2)).unwrap();

    let err = client.get_position_versions(1).await.unwrap_err();
    assert!(!is_not_found(&err));
}

//! Integration tests for the User resource.
//!
//! These tests verify user updates, item listing, and the relation reads
//! that turn specific service errors into absent results.

use std::sync::Arc;

use promisepay::rest::{ErrorKind, ListParams, ResourceError, RestResource};
use promisepay::{ApiToken, Attributes, BaseUrl, PromisePayConfig, RestClient, User, Username};
use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

/// Creates a REST client pointed at the mock server.
fn create_client(server: &MockServer) -> Arc<RestClient> {
    let config = PromisePayConfig::builder()
        .username(Username::new("market@example.com").unwrap())
        .token(ApiToken::new("test-token").unwrap())
        .api_domain(BaseUrl::new(server.uri()).unwrap())
        .build()
        .unwrap();
    Arc::new(RestClient::new(&config))
}

async fn mount_error(server: &MockServer, route: &str, status: u16) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(status).set_body_json(json!({
            "errors": {"user": ["relation unavailable"]}
        })))
        .expect(1)
        .mount(server)
        .await;
}

// ============================================================================
// Update Tests
// ============================================================================

#[tokio::test]
async fn test_update_replaces_user_attributes() {
    let server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .and(path("/users/u1"))
        .and(body_json(json!({"first_name": "Ada"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "users": {"id": "u1", "first_name": "Ada"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let mut user = User::with_attributes(
        create_client(&server),
        Attributes::from_value(json!({"id": "u1", "first_name": "A", "mobile": "0400"})).unwrap(),
    );

    user.update(json!({"first_name": "Ada"})).await.unwrap();

    assert_eq!(user.get("first_name"), Some(&json!("Ada")));
    assert!(user.get("mobile").is_none());
}

// ============================================================================
// Item Listing Tests
// ============================================================================

#[tokio::test]
async fn test_items_returns_item_handles_in_order() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users/u1/items"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [{"id": "i2", "name": "Second"}, {"id": "i1", "name": "First"}]
        })))
        .mount(&server)
        .await;

    let user = User::new(create_client(&server), "u1");
    let items = user.items(None).await.unwrap();

    assert_eq!(items.len(), 2);
    assert_eq!(items[0].id().as_deref(), Some("i2"));
    assert_eq!(items[1].get("name"), Some(&json!("First")));
}

#[tokio::test]
async fn test_items_without_key_is_empty() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users/u1/items"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;

    let user = User::new(create_client(&server), "u1");
    assert!(user.items(None).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_items_pagination_is_passed_through() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users/u1/items"))
        .and(query_param("limit", "5"))
        .and(|request: &Request| !request.url.query().unwrap_or_default().contains("offset"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"items": []})))
        .expect(1)
        .mount(&server)
        .await;

    let user = User::new(create_client(&server), "u1");
    let items = user.items(Some(ListParams::new().limit(5))).await.unwrap();

    assert!(items.is_empty());
}

#[tokio::test]
async fn test_derived_items_share_client() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users/u1/items"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [{"id": "i1"}]
        })))
        .mount(&server)
        .await;
    Mock::given(method("PATCH"))
        .and(path("/items/i1/cancel"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": {"id": "i1", "state": "cancelled"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server);
    let user = User::new(Arc::clone(&client), "u1");
    let mut items = user.items(None).await.unwrap();

    assert!(Arc::ptr_eq(items[0].client(), &client));
    assert!(items[0].cancel(None).await.unwrap());
    assert_eq!(items[0].attributes().get_str("state"), Some("cancelled"));
}

// ============================================================================
// Account Relation Tests
// ============================================================================

#[tokio::test]
async fn test_bank_account_scenario_unprocessable_is_absent() {
    let server = MockServer::start().await;
    mount_error(&server, "/users/u1/bank_accounts", 422).await;

    let user = User::new(create_client(&server), "u1");

    assert!(user.bank_account().await.unwrap().is_none());
}

#[tokio::test]
async fn test_every_account_relation_is_absent_on_unprocessable() {
    let server = MockServer::start().await;
    for route in ["card_accounts", "paypal_accounts", "wallet_accounts"] {
        mount_error(&server, &format!("/users/u1/{route}"), 422).await;
    }

    let user = User::new(create_client(&server), "u1");

    assert!(user.card_account().await.unwrap().is_none());
    assert!(user.paypal_account().await.unwrap().is_none());
    assert!(user.wallet_account().await.unwrap().is_none());
}

#[tokio::test]
async fn test_account_relation_returns_handle_on_success() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users/u1/wallet_accounts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "wallet_accounts": {"id": "wa-1", "balance": 1500}
        })))
        .mount(&server)
        .await;

    let user = User::new(create_client(&server), "u1");
    let wallet = user.wallet_account().await.unwrap().unwrap();

    assert_eq!(wallet.id().as_deref(), Some("wa-1"));
    assert_eq!(wallet.get("balance"), Some(&json!(1500)));
}

#[tokio::test]
async fn test_account_relation_propagates_other_errors() {
    for (status, expected_kind) in [(404, ErrorKind::NotFound), (500, ErrorKind::General)] {
        let server = MockServer::start().await;
        mount_error(&server, "/users/u1/bank_accounts", status).await;

        let user = User::new(create_client(&server), "u1");
        let error = user.bank_account().await.unwrap_err();

        assert_eq!(error.kind(), expected_kind);
    }
}

// ============================================================================
// Company Relation Tests
// ============================================================================

#[tokio::test]
async fn test_company_not_found_is_absent() {
    let server = MockServer::start().await;
    mount_error(&server, "/users/u1/companies", 404).await;

    let user = User::new(create_client(&server), "u1");

    assert!(user.company().await.unwrap().is_none());
}

#[tokio::test]
async fn test_company_unprocessable_propagates() {
    let server = MockServer::start().await;
    mount_error(&server, "/users/u1/companies", 422).await;

    let user = User::new(create_client(&server), "u1");
    let error = user.company().await.unwrap_err();

    assert!(matches!(error, ResourceError::UnprocessableEntity { .. }));
}

#[tokio::test]
async fn test_company_returns_handle() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users/u1/companies"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "companies": {"id": "c1", "name": "Acme Pty Ltd"}
        })))
        .mount(&server)
        .await;

    let user = User::new(create_client(&server), "u1");
    let company = user.company().await.unwrap().unwrap();

    assert_eq!(company.get("name"), Some(&json!("Acme Pty Ltd")));
}

// ============================================================================
// Address Tests
// ============================================================================

#[tokio::test]
async fn test_address_without_related_makes_no_request() {
    let server = MockServer::start().await;
    Mock::given(wiremock::matchers::any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let user = User::new(create_client(&server), "u1");

    assert!(user.address().await.unwrap().is_none());
}

#[tokio::test]
async fn test_address_follows_related_link() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/addresses/addr-9"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "addresses": {"id": "addr-9", "city": "Melbourne", "country": "AUS"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let user = User::with_attributes(
        create_client(&server),
        Attributes::from_value(json!({"id": "u1", "related": {"addresses": "addr-9"}})).unwrap(),
    );
    let address = user.address().await.unwrap().unwrap();

    assert_eq!(address.get_str("city"), Some("Melbourne"));
}

// ============================================================================
// Disbursement Account Tests
// ============================================================================

#[tokio::test]
async fn test_disbursement_account_posts_account_id() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/users/u1/disbursement_account"))
        .and(body_json(json!({"account_id": "ba-1"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "users": {"id": "u1", "disbursement_account": "ba-1"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let user = User::with_attributes(
        create_client(&server),
        Attributes::from_value(json!({"id": "u1", "email": "a@b.co"})).unwrap(),
    );
    let before = user.attributes().clone();

    assert!(user.disbursement_account("ba-1").await.unwrap());
    assert_eq!(user.attributes(), &before);
}

#[tokio::test]
async fn test_disbursement_account_propagates_errors() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/users/u1/disbursement_account"))
        .respond_with(ResponseTemplate::new(422).set_body_json(json!({
            "errors": {"account_id": ["is invalid"]}
        })))
        .mount(&server)
        .await;

    let user = User::new(create_client(&server), "u1");
    let error = user.disbursement_account("nope").await.unwrap_err();

    assert_eq!(error.kind(), ErrorKind::UnprocessableEntity);
}

//! REST client tests against a local mock server.
//!
//! These run offline: every request goes to a `mockito` server and the tests
//! check both what the client sends and how it decodes what comes back.
//!
//! ```bash
//! RUST_LOG=cloudbet_sports=debug cargo test --test mock_rest
//! ```

use std::sync::Arc;

use mockito::{Matcher, Server, ServerGuard};
use serde_json::json;

use cloudbet_sports::types::{AcceptPriceChange, PlaceBetRequest};
use cloudbet_sports::{CloudbetClient, Config, Error};

const API_KEY: &str = "test-api-key";

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Helper to create a client pointed at the mock server
fn create_client(server: &ServerGuard) -> CloudbetClient {
    init_tracing();
    let config = Config::new(API_KEY).with_base_url(server.url());
    CloudbetClient::new(config).expect("client should build")
}

fn today() -> String {
    chrono::Local::now().date_naive().format("%Y-%m-%d").to_string()
}

#[tokio::test]
async fn test_place_bet_echoes_reference_id() {
    let mut server = Server::new_async().await;
    let client = create_client(&server);

    let bet = PlaceBetRequest::new("24055338", "soccer.match_odds/away", "1.50", "1", "PLAY_EUR")
        .with_reference_id("3f2b8c1e-0000-4000-8000-000000000001");

    let mock = server
        .mock("POST", "/pub/v3/bets/place")
        .match_header("x-api-key", API_KEY)
        .match_header("content-type", "application/json")
        .match_header("accept", "application/json")
        .match_body(Matcher::Json(json!({
            "acceptPriceChange": "ALL",
            "currency": "PLAY_EUR",
            "eventId": "24055338",
            "marketUrl": "soccer.match_odds/away",
            "price": "1.50",
            "referenceId": "3f2b8c1e-0000-4000-8000-000000000001",
            "stake": "1"
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "referenceId": "3f2b8c1e-0000-4000-8000-000000000001",
                "price": "1.50",
                "eventId": "24055338",
                "marketUrl": "soccer.match_odds/away",
                "currency": "PLAY_EUR",
                "stake": "1",
                "status": "ACCEPTED",
                "returnAmount": "1.50"
            })
            .to_string(),
        )
        .create_async()
        .await;

    let placed = client.rest().place_bet(&bet).await.expect("bet should be accepted");

    mock.assert_async().await;
    assert_eq!(placed.reference_id, bet.reference_id);
    assert_eq!(placed.status, "ACCEPTED");
    assert!(!placed.is_error());
}

#[tokio::test]
async fn test_place_bet_rejection_keeps_server_error() {
    let mut server = Server::new_async().await;
    let client = create_client(&server);

    let mock = server
        .mock("POST", "/pub/v3/bets/place")
        .with_status(400)
        .with_header("content-type", "application/json")
        .with_body(r#"{"error":"insufficient funds"}"#)
        .create_async()
        .await;

    let bet = PlaceBetRequest::new("1", "soccer.match_odds/home", "2.00", "1000000", "PLAY_EUR")
        .with_accept_price_change(AcceptPriceChange::None);
    let err = client.rest().place_bet(&bet).await.unwrap_err();

    mock.assert_async().await;
    match &err {
        Error::BetRejected { status, response } => {
            assert_eq!(status.as_u16(), 400);
            assert_eq!(response.error.as_deref(), Some("insufficient funds"));
        }
        other => panic!("expected BetRejected, got {:?}", other),
    }
    assert!(err.to_string().contains("400 Bad Request"));
}

#[tokio::test]
async fn test_place_bet_undecodable_body() {
    let mut server = Server::new_async().await;
    let client = create_client(&server);

    let _mock = server
        .mock("POST", "/pub/v3/bets/place")
        .with_status(502)
        .with_body("<html>Bad Gateway</html>")
        .create_async()
        .await;

    let bet = PlaceBetRequest::new("1", "m", "2.00", "1", "EUR");
    let err = client.rest().place_bet(&bet).await.unwrap_err();
    assert!(matches!(err, Error::Json(_)), "got {:?}", err);
}

#[tokio::test]
async fn test_account_balance() {
    let mut server = Server::new_async().await;
    let client = create_client(&server);

    let mock = server
        .mock("GET", "/pub/v1/account/currencies/EUR/balance")
        .match_header("x-api-key", API_KEY)
        .with_status(200)
        .with_body(r#"{"amount":"12.50"}"#)
        .create_async()
        .await;

    let balance = client.rest().account_balance("EUR").await.unwrap();

    mock.assert_async().await;
    assert_eq!(balance, 12.5);
}

#[tokio::test]
async fn test_account_balance_zero() {
    let mut server = Server::new_async().await;
    let client = create_client(&server);

    let _mock = server
        .mock("GET", "/pub/v1/account/currencies/PLAY_EUR/balance")
        .with_status(200)
        .with_body(r#"{"amount":"0"}"#)
        .create_async()
        .await;

    assert_eq!(client.rest().account_balance("PLAY_EUR").await.unwrap(), 0.0);
}

#[tokio::test]
async fn test_account_balance_not_numeric() {
    let mut server = Server::new_async().await;
    let client = create_client(&server);

    let _mock = server
        .mock("GET", "/pub/v1/account/currencies/EUR/balance")
        .with_status(200)
        .with_body(r#"{"amount":"lots"}"#)
        .create_async()
        .await;

    let err = client.rest().account_balance("EUR").await.unwrap_err();
    assert!(matches!(err, Error::ParseAmount { .. }), "got {:?}", err);
}

#[tokio::test]
async fn test_concurrent_balances_do_not_mix() {
    let mut server = Server::new_async().await;
    let client = Arc::new(create_client(&server));

    let _eur = server
        .mock("GET", "/pub/v1/account/currencies/EUR/balance")
        .with_status(200)
        .with_body(r#"{"amount":"100.25"}"#)
        .expect(5)
        .create_async()
        .await;
    let _btc = server
        .mock("GET", "/pub/v1/account/currencies/BTC/balance")
        .with_status(200)
        .with_body(r#"{"amount":"0.0042"}"#)
        .expect(5)
        .create_async()
        .await;

    let mut handles = Vec::new();
    for i in 0..10 {
        let client = Arc::clone(&client);
        let currency = if i % 2 == 0 { "EUR" } else { "BTC" };
        handles.push(tokio::spawn(async move {
            let amount = client.rest().account_balance(currency).await.unwrap();
            (currency, amount)
        }));
    }

    for handle in handles {
        let (currency, amount) = handle.await.unwrap();
        match currency {
            "EUR" => assert_eq!(amount, 100.25),
            _ => assert_eq!(amount, 0.0042),
        }
    }
}

#[tokio::test]
async fn test_today_fixtures() {
    let mut server = Server::new_async().await;
    let client = create_client(&server);

    let body = json!({
        "competitions": [
            {
                "name": "Premier League",
                "key": "soccer-england-premier-league",
                "sport": {"name": "Soccer", "key": "soccer"},
                "category": {"name": "England", "key": "england"},
                "events": [{
                    "id": 1,
                    "home": {"name": "Home FC", "key": "c1", "abbreviation": "HOM", "nationality": "ENG"},
                    "away": {"name": "Away FC", "key": "c2", "abbreviation": "AWY", "nationality": "ENG"},
                    "players": {},
                    "status": "TRADING",
                    "markets": {},
                    "name": "Home FC V Away FC",
                    "key": "home-fc-v-away-fc",
                    "cutoffTime": "2024-05-01T18:30:00Z",
                    "type": "EVENT_TYPE_EVENT"
                }]
            },
            {
                "name": "La Liga",
                "key": "soccer-spain-laliga",
                "sport": {"name": "Soccer", "key": "soccer"},
                "category": {"name": "Spain", "key": "spain"},
                "events": [{
                    "id": 2,
                    "home": {"name": "Local CF", "key": "c3", "abbreviation": "LOC", "nationality": "ESP"},
                    "away": {"name": "Visitante CF", "key": "c4", "abbreviation": "VIS", "nationality": "ESP"},
                    "players": {},
                    "status": "TRADING",
                    "markets": {},
                    "name": "Local CF V Visitante CF",
                    "key": "local-cf-v-visitante-cf",
                    "cutoffTime": "2024-05-01T20:00:00Z",
                    "type": "EVENT_TYPE_EVENT"
                }]
            }
        ]
    });

    let mock = server
        .mock("GET", "/pub/v2/odds/fixtures")
        .match_header("x-api-key", API_KEY)
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("sport".into(), "soccer".into()),
            Matcher::UrlEncoded("date".into(), today()),
            Matcher::UrlEncoded("players".into(), "false".into()),
            Matcher::UrlEncoded("limit".into(), "10".into()),
        ]))
        .with_status(200)
        .with_body(body.to_string())
        .create_async()
        .await;

    let fixtures = client.rest().today_fixtures("soccer", 10).await.unwrap();

    mock.assert_async().await;
    assert_eq!(fixtures.competitions.len(), 2);
    for competition in &fixtures.competitions {
        assert_eq!(competition.events.len(), 1);
    }
    assert_eq!(fixtures.competitions[0].name, "Premier League");
    assert_eq!(fixtures.competitions[1].key, "soccer-spain-laliga");
    assert_eq!(
        fixtures.competitions[1].events[0]
            .cutoff_time
            .unwrap()
            .to_rfc3339_opts(chrono::SecondsFormat::Secs, true),
        "2024-05-01T20:00:00Z"
    );
}

#[tokio::test]
async fn test_today_fixtures_raw_returns_body() {
    let mut server = Server::new_async().await;
    let client = create_client(&server);

    let _mock = server
        .mock("GET", "/pub/v2/odds/fixtures")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(r#"{"competitions":[]}"#)
        .create_async()
        .await;

    let raw = client.rest().today_fixtures_raw("tennis", 5).await.unwrap();
    assert_eq!(raw, r#"{"competitions":[]}"#);
}

#[tokio::test]
async fn test_event_lookup() {
    let mut server = Server::new_async().await;
    let client = create_client(&server);

    let mock = server
        .mock("GET", "/pub/v2/odds/events/24055338")
        .match_header("x-api-key", API_KEY)
        .with_status(200)
        .with_body(
            json!({
                "id": 24055338,
                "name": "Home FC V Away FC",
                "competition": {"category": {"name": "England", "key": "england"}, "key": "soccer-england-premier-league", "name": "Premier League"},
                "markets": {
                    "soccer.match_odds": {
                        "selections": [{"outcome": "home", "price": 2.1, "maxStake": 500.0, "minStake": 0.1, "status": "SELECTION_ENABLED"}],
                        "sequence": 7
                    }
                },
                "settlement": null,
                "status": "TRADING",
                "type": "EVENT_TYPE_EVENT"
            })
            .to_string(),
        )
        .create_async()
        .await;

    let event = client.rest().event("24055338").await.unwrap();

    mock.assert_async().await;
    assert_eq!(event.id, 24055338);
    assert_eq!(event.competition.name, "Premier League");
    let market = event.market("soccer.match_odds").unwrap();
    assert_eq!(market.sequence, 7);
    assert_eq!(market.selections[0].price, 2.1);
    assert!(event.settlement.is_empty());
}

#[tokio::test]
async fn test_unknown_event_is_decode_error() {
    let mut server = Server::new_async().await;
    let client = create_client(&server);

    let _mock = server
        .mock("GET", "/pub/v2/odds/events/does-not-exist")
        .with_status(404)
        .with_body("404 page not found")
        .create_async()
        .await;

    let raw = client.rest().event_raw("does-not-exist").await.unwrap();
    assert_eq!(raw, "404 page not found");

    let err = client.rest().event("does-not-exist").await.unwrap_err();
    assert!(matches!(err, Error::Json(_)), "got {:?}", err);
}

#[tokio::test]
async fn test_unreachable_host_is_http_error() {
    init_tracing();
    // port 9 (discard) on localhost is not served by anything in the test environment
    let config = Config::new(API_KEY)
        .with_base_url("http://127.0.0.1:9")
        .with_timeout(std::time::Duration::from_secs(2));
    let client = CloudbetClient::new(config).unwrap();

    let err = client.rest().account_balance("EUR").await.unwrap_err();
    assert!(matches!(err, Error::Http(_)), "got {:?}", err);
}

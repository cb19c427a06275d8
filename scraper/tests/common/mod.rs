//! In-process mock of the parliament API.
//!
//! Serves `/groups/` and `/memberships/` with the real envelope and honours
//! `offset`/`limit`, so pagination is exercised end to end.

#![allow(dead_code)]

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::extract::{Query, State};
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use faction_scraper::{ClientConfig, ParliamentClient};
use serde_json::{json, Value};

/// One request seen by the mock.
#[derive(Debug, Clone)]
pub struct Recorded {
    pub path: &'static str,
    pub query: HashMap<String, String>,
    pub user_agent: Option<String>,
}

impl Recorded {
    pub fn param(&self, key: &str) -> Option<&str> {
        self.query.get(key).map(String::as_str)
    }
}

/// Upstream data and failure injection.
#[derive(Debug, Default, Clone)]
pub struct Upstream {
    pub groups: Vec<Value>,
    /// Group id → membership records.
    pub memberships: HashMap<i64, Vec<Value>>,
    /// Group id → offset from which memberships answer HTTP 500.
    pub failing_from: HashMap<i64, usize>,
    /// Groups whose memberships answer a malformed body.
    pub malformed: HashSet<i64>,
    /// Answer the groups endpoint with HTTP 500.
    pub groups_fail: bool,
    /// Answer the groups endpoint with a body that is not a page.
    pub groups_malformed: bool,
}

struct MockState {
    upstream: Upstream,
    requests: Mutex<Vec<Recorded>>,
}

impl MockState {
    fn new(upstream: Upstream) -> Arc<Self> {
        Arc::new(Self {
            upstream,
            requests: Mutex::new(Vec::new()),
        })
    }
}

fn serve(listener: tokio::net::TcpListener, state: Arc<MockState>) {
    let app = Router::new()
        .route("/groups/", get(groups))
        .route("/memberships/", get(memberships))
        .with_state(state);

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
}

/// Running mock server.
pub struct MockServer {
    pub base_url: String,
    state: Arc<MockState>,
}

impl MockServer {
    /// Bind on a free loopback port and serve `upstream`.
    pub async fn start(upstream: Upstream) -> Self {
        let state = MockState::new(upstream);
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        serve(listener, Arc::clone(&state));

        Self {
            base_url: format!("http://{addr}"),
            state,
        }
    }

    /// Reserve a loopback port now but only start listening after `delay`.
    ///
    /// Connections made before then are refused.
    pub async fn start_after(upstream: Upstream, delay: Duration) -> Self {
        let state = MockState::new(upstream);
        let addr = std::net::TcpListener::bind("127.0.0.1:0")
            .unwrap()
            .local_addr()
            .unwrap();

        let served = Arc::clone(&state);
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
            serve(listener, served);
        });

        Self {
            base_url: format!("http://{addr}"),
            state,
        }
    }

    /// Client configured for this server.
    pub fn client(&self) -> ParliamentClient {
        ParliamentClient::new(&self.client_config()).unwrap()
    }

    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            base_url: self.base_url.clone(),
            timeout: Duration::from_secs(5),
            max_retries: 0,
        }
    }

    /// Requests received so far, for one path.
    pub fn requests(&self, path: &str) -> Vec<Recorded> {
        self.state
            .requests
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.path == path)
            .cloned()
            .collect()
    }
}

fn record(
    state: &MockState,
    path: &'static str,
    query: &HashMap<String, String>,
    headers: &HeaderMap,
) {
    let user_agent = headers
        .get(header::USER_AGENT)
        .and_then(|v| v.to_str().ok())
        .map(String::from);
    state.requests.lock().unwrap().push(Recorded {
        path,
        query: query.clone(),
        user_agent,
    });
}

fn param(query: &HashMap<String, String>, key: &str, default: usize) -> usize {
    query.get(key).and_then(|v| v.parse().ok()).unwrap_or(default)
}

/// Slice `records` the way the API does.
fn page(records: &[Value], query: &HashMap<String, String>) -> Value {
    let offset = param(query, "offset", 0);
    let limit = param(query, "limit", 1000);
    let end = (offset + limit).min(records.len());
    let data = records.get(offset..end).unwrap_or(&[]).to_vec();

    json!({ "data": data, "meta": { "has_more": end < records.len() } })
}

async fn groups(
    State(state): State<Arc<MockState>>,
    Query(query): Query<HashMap<String, String>>,
    headers: HeaderMap,
) -> Response {
    record(&state, "/groups/", &query, &headers);
    let upstream = &state.upstream;

    if upstream.groups_fail {
        return (StatusCode::INTERNAL_SERVER_ERROR, "boom").into_response();
    }
    if upstream.groups_malformed {
        return axum::Json(json!({ "data": [{ "id": "not-a-number" }] })).into_response();
    }
    axum::Json(page(&upstream.groups, &query)).into_response()
}

async fn memberships(
    State(state): State<Arc<MockState>>,
    Query(query): Query<HashMap<String, String>>,
    headers: HeaderMap,
) -> Response {
    record(&state, "/memberships/", &query, &headers);
    let upstream = &state.upstream;

    let group_id: i64 = query
        .get("group_id")
        .and_then(|v| v.parse().ok())
        .unwrap_or_default();
    let offset = param(&query, "offset", 0);

    if upstream.malformed.contains(&group_id) {
        return (StatusCode::OK, "<html>not json</html>").into_response();
    }
    if upstream
        .failing_from
        .get(&group_id)
        .is_some_and(|from| offset >= *from)
    {
        return (StatusCode::BAD_GATEWAY, "upstream down").into_response();
    }

    let records = upstream
        .memberships
        .get(&group_id)
        .map(Vec::as_slice)
        .unwrap_or(&[]);
    axum::Json(page(records, &query)).into_response()
}

// =============================================================================
// Fixtures
// =============================================================================

pub fn group(
    id: i64,
    external: Option<&str>,
    abbreviation: Value,
    name: Value,
    active: bool,
) -> Value {
    json!({
        "id": id,
        "external_alternative_id": external,
        "abbreviation": abbreviation,
        "name": name,
        "active": active
    })
}

pub fn membership(person: Option<Value>, active: bool, role: Value) -> Value {
    let data: Vec<Value> = person.into_iter().collect();
    json!({
        "person": { "data": data },
        "active": active,
        "role_name": role
    })
}

pub fn person(
    id: i64,
    first: &str,
    last: &str,
    number: &str,
    district: Value,
    sector: &str,
) -> Value {
    json!({
        "id": id,
        "firstname": first,
        "lastname": last,
        "external_alternative_id": number,
        "electoral_district": district,
        "parliament_sector": sector,
        "party": { "de": "SVP", "fr": "UDC" },
        "party_harmonized": { "de": "Schweizerische Volkspartei" },
        "gender": "f"
    })
}

/// `count` minimal memberships with distinct person ids.
pub fn many_memberships(count: usize) -> Vec<Value> {
    (0..count)
        .map(|i| {
            membership(
                Some(json!({ "id": i, "external_alternative_id": i.to_string() })),
                true,
                json!("Mitglied"),
            )
        })
        .collect()
}

use aljude_academy_server::{build_router, AppState};
use tokio::io::{AsyncReadExt, AsyncWriteExt};

async fn send_raw(
    addr: std::net::SocketAddr,
    method: &str,
    path: &str,
    extra_headers: &[(&str, &str)],
    body: Option<&str>,
) -> (u16, String, String) {
    let mut stream = tokio::net::TcpStream::connect(addr)
        .await
        .expect("connect server");
    let mut req = format!("{method} {path} HTTP/1.1\r\nHost: {addr}\r\nConnection: close\r\n");
    for (name, value) in extra_headers {
        req.push_str(&format!("{name}: {value}\r\n"));
    }
    if let Some(body) = body {
        req.push_str(&format!(
            "Content-Type: application/json\r\nContent-Length: {}\r\n\r\n{body}",
            body.len()
        ));
    } else {
        req.push_str("\r\n");
    }
    stream
        .write_all(req.as_bytes())
        .await
        .expect("write request");
    let mut response = String::new();
    stream
        .read_to_string(&mut response)
        .await
        .expect("read response");
    let (head, body) = response
        .split_once("\r\n\r\n")
        .expect("http response separator");
    let status = head
        .lines()
        .next()
        .and_then(|line| line.split_whitespace().nth(1))
        .and_then(|s| s.parse::<u16>().ok())
        .expect("status");
    (status, head.to_string(), body.to_string())
}

async fn get(addr: std::net::SocketAddr, path: &str) -> (u16, String, String) {
    send_raw(addr, "GET", path, &[], None).await
}

fn header_value(head: &str, name: &str) -> Option<String> {
    head.lines().find_map(|line| {
        let (k, v) = line.split_once(':')?;
        if k.eq_ignore_ascii_case(name) {
            Some(v.trim().to_string())
        } else {
            None
        }
    })
}

async fn spawn_server() -> std::net::SocketAddr {
    let state = AppState::new(aljude_academy_catalog::catalog());
    let app = build_router(state);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind listener");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move { axum::serve(listener, app).await.expect("serve app") });
    addr
}

#[tokio::test]
async fn health_version_and_catalog_endpoints_answer() {
    let addr = spawn_server().await;

    let (status, _, body) = get(addr, "/healthz").await;
    assert_eq!(status, 200);
    assert_eq!(body, "ok");

    let (status, _, body) = get(addr, "/readyz").await;
    assert_eq!(status, 200);
    assert_eq!(body, "ready");

    let (status, _, body) = get(addr, "/v1/version").await;
    assert_eq!(status, 200);
    let version: serde_json::Value = serde_json::from_str(&body).expect("version json");
    assert_eq!(version["api_version"], "v1");

    let (status, _, body) = get(addr, "/v1/categories").await;
    assert_eq!(status, 200);
    let categories: serde_json::Value = serde_json::from_str(&body).expect("categories json");
    assert_eq!(
        categories["categories"].as_array().map(Vec::len),
        Some(8)
    );
}

#[tokio::test]
async fn lookup_endpoints_resolve_and_404() {
    let addr = spawn_server().await;

    let (status, _, body) = get(addr, "/v1/categories/financial-management").await;
    assert_eq!(status, 200);
    let category: serde_json::Value = serde_json::from_str(&body).expect("category json");
    assert_eq!(category["name"], "Financial Management");

    let (status, _, body) = get(addr, "/v1/capabilities/financial-management-budgeting").await;
    assert_eq!(status, 200);
    let capability: serde_json::Value = serde_json::from_str(&body).expect("capability json");
    assert_eq!(capability["category"]["slug"], "financial-management");

    let (status, _, body) = get(addr, "/v1/capabilities/financial-management-budgeting/3").await;
    assert_eq!(status, 200);
    let sub: serde_json::Value = serde_json::from_str(&body).expect("sub json");
    assert_eq!(sub["name"], "Map your expenses by programme");
    assert_eq!(sub["navigation"]["position"], 3);

    let (status, _, body) = get(addr, "/v1/categories/not-a-category").await;
    assert_eq!(status, 404);
    let err: serde_json::Value = serde_json::from_str(&body).expect("error json");
    assert_eq!(err["error"]["code"], "not_found");
    assert_eq!(err["error"]["details"]["category_slug"], "not-a-category");

    let (status, _, _) = get(addr, "/v1/capabilities/financial-management-budgeting/9").await;
    assert_eq!(status, 404);
}

#[tokio::test]
async fn search_requires_q_and_returns_encounter_order() {
    let addr = spawn_server().await;

    let (status, _, body) = get(addr, "/v1/search").await;
    assert_eq!(status, 400);
    let err: serde_json::Value = serde_json::from_str(&body).expect("error json");
    assert_eq!(err["error"]["code"], "missing_query_parameter");

    let (status, _, body) = get(addr, "/v1/search?q=budget").await;
    assert_eq!(status, 200);
    let payload: serde_json::Value = serde_json::from_str(&body).expect("search json");
    assert_eq!(payload["query"], "budget");
    let results = payload["results"].as_array().expect("results array");
    assert_eq!(payload["count"], results.len());
    assert!(!results.is_empty());

    let (status, _, body) = get(addr, "/v1/search?q=").await;
    assert_eq!(status, 200);
    let payload: serde_json::Value = serde_json::from_str(&body).expect("empty search json");
    assert_eq!(payload["count"], 0);
}

#[tokio::test]
async fn routes_and_keywords_enumerate_catalog() {
    let addr = spawn_server().await;

    let (status, _, body) = get(addr, "/v1/routes").await;
    assert_eq!(status, 200);
    let routes: serde_json::Value = serde_json::from_str(&body).expect("routes json");
    assert_eq!(routes["categories"].as_array().map(Vec::len), Some(8));
    assert_eq!(routes["sub_capabilities"].as_array().map(Vec::len), Some(185));

    let (status, _, body) = get(addr, "/v1/keywords").await;
    assert_eq!(status, 200);
    let keywords: serde_json::Value = serde_json::from_str(&body).expect("keywords json");
    assert!(keywords["keywords"]
        .as_array()
        .expect("keywords array")
        .iter()
        .any(|k| k == "volunteers"));
}

#[tokio::test]
async fn etag_revalidation_returns_304() {
    let addr = spawn_server().await;

    let (status, head, _) = get(addr, "/v1/routes").await;
    assert_eq!(status, 200);
    let etag = header_value(&head, "etag").expect("etag header");
    let cache_control = header_value(&head, "cache-control").expect("cache-control header");
    assert!(cache_control.contains("max-age=3600"));

    let (status, head, body) =
        send_raw(addr, "GET", "/v1/routes", &[("If-None-Match", &etag)], None).await;
    assert_eq!(status, 304);
    assert!(body.is_empty());
    assert_eq!(header_value(&head, "etag"), Some(etag));
}

#[tokio::test]
async fn request_id_is_echoed_and_generated() {
    let addr = spawn_server().await;

    let (_, head, _) =
        send_raw(addr, "GET", "/healthz", &[("x-request-id", "req-test-7")], None).await;
    // healthz generates its own id; lookup routes propagate the caller's.
    assert!(header_value(&head, "x-request-id").is_some());

    let (_, head, _) = send_raw(
        addr,
        "GET",
        "/v1/categories",
        &[("x-request-id", "req-test-7")],
        None,
    )
    .await;
    assert_eq!(
        header_value(&head, "x-request-id").as_deref(),
        Some("req-test-7")
    );
}

#[tokio::test]
async fn score_endpoint_gates_and_scores() {
    let addr = spawn_server().await;
    let path = "/v1/assessments/financial-management-budgeting/1/score";

    // Budgeting sub "1" has 8 questions; all answered "full" is a clean A.
    let answers: Vec<String> = (1..=8).map(|n| format!("\"q{n}\":\"full\"")).collect();
    let body = format!("{{\"answers\":{{{}}}}}", answers.join(","));
    let (status, _, resp) = send_raw(addr, "POST", path, &[], Some(&body)).await;
    assert_eq!(status, 200);
    let score: serde_json::Value = serde_json::from_str(&resp).expect("score json");
    assert_eq!(score["level"], "A");
    assert_eq!(score["points"], 16);
    assert_eq!(score["max_points"], 16);
    assert_eq!(score["percentage"], 1.0);

    let (status, _, resp) = send_raw(
        addr,
        "POST",
        path,
        &[],
        Some("{\"answers\":{\"q1\":\"full\"}}"),
    )
    .await;
    assert_eq!(status, 400);
    let err: serde_json::Value = serde_json::from_str(&resp).expect("error json");
    assert_eq!(err["error"]["code"], "incomplete_assessment");

    let (status, _, resp) = send_raw(
        addr,
        "POST",
        path,
        &[],
        Some("{\"answers\":{\"q99\":\"full\"}}"),
    )
    .await;
    assert_eq!(status, 400);
    let err: serde_json::Value = serde_json::from_str(&resp).expect("error json");
    assert_eq!(err["error"]["code"], "unknown_question");

    let (status, _, resp) = send_raw(addr, "POST", path, &[], Some("not json")).await;
    assert_eq!(status, 400);
    let err: serde_json::Value = serde_json::from_str(&resp).expect("error json");
    assert_eq!(err["error"]["code"], "invalid_request_body");

    let (status, _, resp) = send_raw(
        addr,
        "POST",
        "/v1/assessments/no-such-capability/1/score",
        &[],
        Some("{\"answers\":{}}"),
    )
    .await;
    assert_eq!(status, 404);
    let err: serde_json::Value = serde_json::from_str(&resp).expect("error json");
    assert_eq!(err["error"]["code"], "not_found");
}

use axum::http::StatusCode;
use std::collections::HashMap;
use tokio::sync::Mutex;

/// Per-process request counters, rendered as plain text on `/metrics`.
#[derive(Default)]
pub(crate) struct RequestMetrics {
    counts: Mutex<HashMap<(String, u16), u64>>,
}

impl RequestMetrics {
    pub(crate) async fn observe_request(&self, route: &str, status: StatusCode) {
        let mut counts = self.counts.lock().await;
        *counts
            .entry((route.to_string(), status.as_u16()))
            .or_insert(0) += 1;
    }

    pub(crate) async fn render(&self) -> String {
        let counts = self.counts.lock().await;
        let mut rows: Vec<(&(String, u16), &u64)> = counts.iter().collect();
        rows.sort();
        let mut out = String::from("# TYPE academy_http_requests_total counter\n");
        for ((route, status), count) in rows {
            out.push_str(&format!(
                "academy_http_requests_total{{route=\"{route}\",status=\"{status}\"}} {count}\n"
            ));
        }
        out
    }
}

use crate::{
    config::rate_limit::RateLimitConfig,
    i18n::{Language, t},
    maud_conveniences::{NotificationKind, notification_response},
    state::CampState,
};
use axum::{
    extract::{ConnectInfo, Request, State},
    http::{HeaderMap, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use std::{collections::HashMap, net::SocketAddr, time::Instant};
use tokio::sync::Mutex;

///past this many tracked clients, full buckets get dropped
const MAX_TRACKED_CLIENTS: usize = 10_000;

#[derive(Debug, Clone)]
struct Bucket {
    tokens: f64,
    last_refill: Instant,
}

/// Per-client token buckets: `capacity` requests up front, refilled evenly over `window`.
#[derive(Debug)]
pub struct RateLimiter {
    buckets: Mutex<HashMap<String, Bucket>>,
    config: RateLimitConfig,
}

impl RateLimiter {
    pub fn new(config: RateLimitConfig) -> Self {
        Self {
            buckets: Mutex::new(HashMap::new()),
            config,
        }
    }

    pub async fn allow(&self, key: &str) -> bool {
        self.allow_at(key, Instant::now()).await
    }

    async fn allow_at(&self, key: &str, now: Instant) -> bool {
        let capacity = f64::from(self.config.capacity);
        let refill_per_sec = self.config.refill_per_sec();

        let mut buckets = self.buckets.lock().await;
        if buckets.len() >= MAX_TRACKED_CLIENTS {
            buckets.retain(|_, bucket| {
                let elapsed = now.saturating_duration_since(bucket.last_refill).as_secs_f64();
                bucket.tokens + elapsed * refill_per_sec < capacity
            });
        }

        let bucket = buckets.entry(key.to_string()).or_insert_with(|| Bucket {
            tokens: capacity,
            last_refill: now,
        });
        let elapsed = now.saturating_duration_since(bucket.last_refill).as_secs_f64();
        bucket.last_refill = now;
        bucket.tokens = (bucket.tokens + elapsed * refill_per_sec).min(capacity);

        if bucket.tokens >= 1.0 {
            bucket.tokens -= 1.0;
            true
        } else {
            false
        }
    }
}

/// The first `X-Forwarded-For` hop when behind a proxy, otherwise the peer address.
pub fn client_key(headers: &HeaderMap, peer: Option<SocketAddr>) -> String {
    headers
        .get("x-forwarded-for")
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(',').next())
        .map(str::trim)
        .filter(|ip| !ip.is_empty())
        .map(ToString::to_string)
        .or_else(|| peer.map(|addr| addr.ip().to_string()))
        .unwrap_or_else(|| "unknown".to_string())
}

pub async fn limit_submissions(
    State(state): State<CampState>,
    language: Language,
    request: Request,
    next: Next,
) -> Response {
    let peer = request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| *addr);
    let key = client_key(request.headers(), peer);

    if state.limiter().allow(&key).await {
        next.run(request).await
    } else {
        warn!(%key, path = %request.uri().path(), "Rate limit exceeded");
        (
            StatusCode::TOO_MANY_REQUESTS,
            notification_response(
                NotificationKind::Error,
                t(language, "submission.error.title"),
                t(language, "error.rate_limited"),
                language,
            ),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;
    use std::time::Duration;

    fn limiter(capacity: u32, window_secs: u64) -> RateLimiter {
        RateLimiter::new(RateLimitConfig {
            capacity,
            window: Duration::from_secs(window_secs),
        })
    }

    #[tokio::test]
    async fn allows_capacity_then_refuses() {
        let limiter = limiter(10, 60);
        let now = Instant::now();
        for _ in 0..10 {
            assert!(limiter.allow_at("10.0.0.1", now).await);
        }
        assert!(!limiter.allow_at("10.0.0.1", now).await);
    }

    #[tokio::test]
    async fn clients_do_not_share_buckets() {
        let limiter = limiter(1, 60);
        let now = Instant::now();
        assert!(limiter.allow_at("10.0.0.1", now).await);
        assert!(!limiter.allow_at("10.0.0.1", now).await);
        assert!(limiter.allow_at("10.0.0.2", now).await);
    }

    #[tokio::test]
    async fn tokens_come_back_over_the_window() {
        let limiter = limiter(10, 60);
        let start = Instant::now();
        for _ in 0..10 {
            assert!(limiter.allow_at("peer", start).await);
        }
        assert!(!limiter.allow_at("peer", start + Duration::from_secs(3)).await);
        assert!(limiter.allow_at("peer", start + Duration::from_secs(7)).await);
    }

    #[test]
    fn forwarded_for_wins_over_peer() {
        let mut headers = HeaderMap::new();
        headers.insert(
            "x-forwarded-for",
            HeaderValue::from_static(" 203.0.113.7 , 10.0.0.1"),
        );
        let peer = Some(SocketAddr::from(([127, 0, 0, 1], 5555)));
        assert_eq!(client_key(&headers, peer), "203.0.113.7");
        assert_eq!(client_key(&HeaderMap::new(), peer), "127.0.0.1");
        assert_eq!(client_key(&HeaderMap::new(), None), "unknown");
    }
}

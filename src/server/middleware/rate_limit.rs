//! Client identification for per-IP rate limiting.

use std::net::IpAddr;

use axum::http::Request;
use tower_governor::{
    key_extractor::{KeyExtractor, PeerIpKeyExtractor, SmartIpKeyExtractor},
    GovernorError,
};

/// Keys rate limit buckets by client IP.
///
/// Uses the socket peer address unless `trust_proxy` is set, in which case the
/// `X-Forwarded-For`, `X-Real-IP` and `Forwarded` headers take precedence. Those headers
/// are client-controlled without a reverse proxy in front of the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClientIpKeyExtractor {
    pub trust_proxy: bool,
}

impl KeyExtractor for ClientIpKeyExtractor {
    type Key = IpAddr;

    fn extract<T>(&self, req: &Request<T>) -> Result<Self::Key, GovernorError> {
        if self.trust_proxy {
            SmartIpKeyExtractor.extract(req)
        } else {
            PeerIpKeyExtractor.extract(req)
        }
    }
}

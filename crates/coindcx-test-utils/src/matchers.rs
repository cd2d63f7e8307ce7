//! Request matchers for mocked CoinDCX endpoints.

use coindcx_crypto::{verify, SecretKey};
use coindcx_types::constants::{HEADER_API_KEY, HEADER_SIGNATURE, HEADER_TIMESTAMP};
use wiremock::{Match, Request};

use crate::helpers::{TEST_API_KEY, TEST_SECRET_KEY};

/// Matches requests signed with the test credentials.
///
/// Checks `X-AUTH-APIKEY`, then recomputes the HMAC over the raw body and
/// `X-AUTH-TIMESTAMP` and compares it with `X-AUTH-SIGNATURE`.
pub struct ValidSignature {
    api_key: String,
    secret: SecretKey,
}

impl ValidSignature {
    pub fn new(api_key: &str, secret_key: &str) -> Self {
        Self {
            api_key: api_key.to_string(),
            secret: SecretKey::new(secret_key),
        }
    }
}

impl Default for ValidSignature {
    fn default() -> Self {
        Self::new(TEST_API_KEY, TEST_SECRET_KEY)
    }
}

impl Match for ValidSignature {
    fn matches(&self, request: &Request) -> bool {
        if header(request, HEADER_API_KEY) != Some(self.api_key.as_str()) {
            return false;
        }

        let timestamp = match header(request, HEADER_TIMESTAMP).and_then(|ts| ts.parse::<i64>().ok()) {
            Some(ts) => ts,
            None => return false,
        };

        match header(request, HEADER_SIGNATURE) {
            Some(signature) => verify(&self.secret, &request.body, timestamp, signature),
            None => false,
        }
    }
}

fn header<'r>(request: &'r Request, name: &str) -> Option<&'r str> {
    request
        .headers
        .get(name)
        .and_then(|value| value.to_str().ok())
}

/// Matches requests whose query string lacks the given parameter.
pub struct NoQueryParam(pub &'static str);

impl Match for NoQueryParam {
    fn matches(&self, request: &Request) -> bool {
        !request.url.query_pairs().any(|(key, _)| key == self.0)
    }
}

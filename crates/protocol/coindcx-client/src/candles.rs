//! Candle time-window policy and fallback response shape.
//!
//! An explicit window is only forwarded when it looks sane: `start_time`
//! within the last 365 days and not in the future, `end_time` not in the
//! future. If a forwarded window returns no candles, the client asks once more
//! without a window and, when that yields data, wraps it in
//! [`CandleFallback`] so callers can tell the data is not from the range they
//! asked for.
//!
//! The fallback changes the response from a bare array to an object. Callers
//! distinguish the two by the presence of a `data` key.

use coindcx_types::constants::{DEFAULT_CANDLE_WINDOW_MS, MAX_CANDLE_LOOKBACK_MS};
use serde::Serialize;
use serde_json::Value;

/// A start/end pair in epoch milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CandleWindow {
    pub start_time: i64,
    pub end_time: i64,
}

impl CandleWindow {
    pub fn new(start_time: i64, end_time: i64) -> Self {
        Self {
            start_time,
            end_time,
        }
    }

    /// The 24 hours ending at `now_ms`.
    pub fn trailing_day(now_ms: i64) -> Self {
        Self::new(now_ms - DEFAULT_CANDLE_WINDOW_MS, now_ms)
    }

    /// Whether this window may be forwarded to the exchange at `now_ms`.
    pub fn is_accepted_at(&self, now_ms: i64) -> bool {
        let oldest = now_ms - MAX_CANDLE_LOOKBACK_MS;
        self.start_time >= oldest && self.start_time <= now_ms && self.end_time <= now_ms
    }

    /// `Some(self)` if accepted at `now_ms`.
    pub fn accepted_at(self, now_ms: i64) -> Option<Self> {
        self.is_accepted_at(now_ms).then_some(self)
    }
}

/// Most-recent candles returned in place of an empty requested range.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CandleFallback {
    pub data: Vec<Value>,
    pub note: String,
    pub requested_start_time: i64,
    pub requested_end_time: i64,
}

impl CandleFallback {
    pub fn new(data: Vec<Value>, requested: CandleWindow) -> Self {
        let note = format!(
            "No data found for specified time range ({} to {}). Returning most recent {} candles instead.",
            requested.start_time,
            requested.end_time,
            data.len()
        );
        Self {
            data,
            note,
            requested_start_time: requested.start_time,
            requested_end_time: requested.end_time,
        }
    }
}

/// Result of a candle request.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CandlesResponse {
    /// Exchange response, unmodified (normally a bare array).
    Raw(Value),
    /// Requested range was empty; most-recent candles wrapped with a note.
    Fallback(CandleFallback),
}

impl CandlesResponse {
    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback(_))
    }

    /// Convert into the JSON value returned to callers.
    pub fn into_value(self) -> Value {
        match self {
            Self::Raw(value) => value,
            Self::Fallback(fallback) => serde_json::json!({
                "data": fallback.data,
                "note": fallback.note,
                "requested_start_time": fallback.requested_start_time,
                "requested_end_time": fallback.requested_end_time,
            }),
        }
    }
}

/// True for a JSON array with no elements.
pub(crate) fn is_empty_array(value: &Value) -> bool {
    value.as_array().map(Vec::is_empty).unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const NOW: i64 = 1_760_000_000_000;
    const DAY_MS: i64 = 24 * 60 * 60 * 1000;

    #[test]
    fn test_recent_window_accepted() {
        let window = CandleWindow::new(NOW - DAY_MS, NOW);
        assert!(window.is_accepted_at(NOW));
    }

    #[test]
    fn test_window_boundaries_inclusive() {
        assert!(CandleWindow::new(NOW - 365 * DAY_MS, NOW).is_accepted_at(NOW));
        assert!(CandleWindow::new(NOW, NOW).is_accepted_at(NOW));
    }

    #[test]
    fn test_start_older_than_a_year_rejected() {
        let window = CandleWindow::new(NOW - 2 * 365 * DAY_MS, NOW - DAY_MS);
        assert!(!window.is_accepted_at(NOW));
        assert_eq!(window.accepted_at(NOW), None);

        let just_over = CandleWindow::new(NOW - 365 * DAY_MS - 1, NOW);
        assert!(!just_over.is_accepted_at(NOW));
    }

    #[test]
    fn test_future_start_rejected() {
        assert!(!CandleWindow::new(NOW + 1, NOW).is_accepted_at(NOW));
    }

    #[test]
    fn test_future_end_rejected() {
        assert!(!CandleWindow::new(NOW - DAY_MS, NOW + 1).is_accepted_at(NOW));
    }

    #[test]
    fn test_trailing_day() {
        let window = CandleWindow::trailing_day(NOW);
        assert_eq!(window.end_time, NOW);
        assert_eq!(window.end_time - window.start_time, DAY_MS);
        assert!(window.is_accepted_at(NOW));
    }

    #[test]
    fn test_fallback_note() {
        let fallback = CandleFallback::new(
            vec![json!({"open": 1}), json!({"open": 2})],
            CandleWindow::new(100, 200),
        );
        assert_eq!(
            fallback.note,
            "No data found for specified time range (100 to 200). Returning most recent 2 candles instead."
        );
    }

    #[test]
    fn test_fallback_shape() {
        let response = CandlesResponse::Fallback(CandleFallback::new(
            vec![json!({"close": 10.5})],
            CandleWindow::new(1, 2),
        ));
        assert!(response.is_fallback());

        let value = response.into_value();
        assert!(value.is_object());
        assert_eq!(value["data"][0]["close"], 10.5);
        assert_eq!(value["requested_start_time"], 1);
        assert_eq!(value["requested_end_time"], 2);
        assert!(value["note"].is_string());
    }

    #[test]
    fn test_raw_shape_is_untouched() {
        let raw = json!([{"open": 1}]);
        let response = CandlesResponse::Raw(raw.clone());
        assert!(!response.is_fallback());
        assert_eq!(serde_json::to_value(&response).unwrap(), raw);
        assert_eq!(response.into_value(), raw);
    }

    #[test]
    fn test_is_empty_array() {
        assert!(is_empty_array(&json!([])));
        assert!(!is_empty_array(&json!([1])));
        assert!(!is_empty_array(&json!({})));
    }
}

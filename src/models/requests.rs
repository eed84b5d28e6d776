//! Request DTOs shared by the proxy and the origin service
//!
//! Defines the query string accepted by both Fibonacci routes.

use serde::Deserialize;

use crate::error::{Result, ServiceError};
use crate::fibonacci::MAX_ORDER;

/// Query string for `GET /fibonacci` and `GET /recursive-fibonacci`
///
/// `order` stays a raw string so that a missing or non-integer value is
/// reported as invalid input instead of an extractor rejection.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OrderQuery {
    pub order: Option<String>,
}

impl OrderQuery {
    /// Validates and returns the requested order.
    pub fn order(&self) -> Result<u64> {
        parse_order(self.order.as_deref())
    }
}

/// Parses a Fibonacci order: a positive integer no larger than [`MAX_ORDER`].
pub fn parse_order(raw: Option<&str>) -> Result<u64> {
    let raw = match raw {
        Some(raw) if !raw.is_empty() => raw,
        _ => {
            return Err(ServiceError::InvalidInput(
                "Missing 'order' query parameter".to_string(),
            ))
        }
    };

    let order: i64 = raw.parse().map_err(|_| {
        ServiceError::InvalidInput(format!("Provided order '{}' is not a positive integer", raw))
    })?;

    if order < 1 {
        return Err(ServiceError::InvalidInput(format!(
            "Provided order '{}' is not a positive integer",
            raw
        )));
    }

    let order = order as u64;
    if order > MAX_ORDER {
        return Err(ServiceError::InvalidInput(format!(
            "Provided order {} exceeds the maximum supported order {}",
            order, MAX_ORDER
        )));
    }

    Ok(order)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_invalid(raw: Option<&str>) {
        assert!(
            matches!(parse_order(raw), Err(ServiceError::InvalidInput(_))),
            "{:?} should be rejected",
            raw
        );
    }

    #[test]
    fn test_parse_valid_orders() {
        assert_eq!(parse_order(Some("1")).unwrap(), 1);
        assert_eq!(parse_order(Some("10")).unwrap(), 10);
        assert_eq!(parse_order(Some("186")).unwrap(), MAX_ORDER);
    }

    #[test]
    fn test_parse_rejects_bad_orders() {
        assert_invalid(None);
        assert_invalid(Some(""));
        assert_invalid(Some("0"));
        assert_invalid(Some("-3"));
        assert_invalid(Some("abc"));
        assert_invalid(Some("1.5"));
        assert_invalid(Some("187"));
        assert_invalid(Some("99999999999999999999999"));
    }

    #[test]
    fn test_order_query_deserialize() {
        let query: OrderQuery = serde_json::from_str(r#"{"order": "12"}"#).unwrap();
        assert_eq!(query.order().unwrap(), 12);

        let missing: OrderQuery = serde_json::from_str("{}").unwrap();
        assert!(missing.order().is_err());
    }
}

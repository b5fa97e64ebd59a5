//! Numeric id path parameter extractor.

use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
    response::{IntoResponse, Response},
};

/// Extractor for a numeric `{id}` path parameter.
///
/// The segment is read as a number the way loose numeric coercion does it:
/// `7`, `7.0`, `7e0`, `+7` and `0x7` all name id 7. Anything that is not a
/// whole, non-negative number in `u64` range yields `IdPath(None)` instead
/// of rejecting the request, so the handler decides what an unparseable id
/// means. Lookups with `None` match nothing.
///
/// # Example
/// ```ignore
/// use axum::Router;
/// use axum::routing::get;
/// use axum_helpers::extractors::IdPath;
///
/// async fn show(IdPath(id): IdPath) -> String {
///     format!("{:?}", id)
/// }
///
/// let app = Router::new().route("/{id}", get(show));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdPath(pub Option<u64>);

impl<S> FromRequestParts<S> for IdPath
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| e.into_response())?;

        let id = parse_numeric_id(&raw);
        if id.is_none() {
            tracing::debug!(raw_id = %raw, "Path id is not numeric");
        }

        Ok(IdPath(id))
    }
}

fn parse_numeric_id(raw: &str) -> Option<u64> {
    let raw = raw.trim();

    if let Ok(id) = raw.parse::<u64>() {
        return Some(id);
    }

    for (prefix, radix) in [("0x", 16), ("0o", 8), ("0b", 2)] {
        if let Some(digits) = raw
            .get(..2)
            .filter(|head| head.eq_ignore_ascii_case(prefix))
            .and(raw.get(2..))
        {
            if digits.starts_with('+') {
                return None;
            }
            return u64::from_str_radix(digits, radix).ok();
        }
    }

    let value = raw.parse::<f64>().ok()?;
    // 2^64 is the first float past u64::MAX
    if value.is_finite() && value.fract() == 0.0 && value >= 0.0 && value < u64::MAX as f64 {
        Some(value as u64)
    } else {
        None
    }
}

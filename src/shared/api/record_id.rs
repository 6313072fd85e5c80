// src/shared/api/record_id.rs
use actix_web::HttpResponse;

use crate::shared::api::ApiResponse;

/// Parses the `{id}` segment of a by-id route.
///
/// Only positive 32-bit integers are accepted. Anything else is answered with
/// `400 INVALID_ID` so the request never reaches a use case or the store.
pub fn parse_record_id(raw: &str) -> Result<i32, HttpResponse> {
    match raw.parse::<i32>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(ApiResponse::bad_request("INVALID_ID", "Invalid ID")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;

    #[test]
    fn test_accepts_positive_integers() {
        assert_eq!(parse_record_id("1").unwrap(), 1);
        assert_eq!(parse_record_id("2147483647").unwrap(), i32::MAX);
    }

    #[test]
    fn test_rejects_non_numeric() {
        for raw in ["abc", "12abc", "1.5", "", " 3", "0x10"] {
            let resp = parse_record_id(raw).unwrap_err();
            assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "input {:?}", raw);
        }
    }

    #[test]
    fn test_rejects_zero_negative_and_overflow() {
        for raw in ["0", "-1", "2147483648"] {
            let resp = parse_record_id(raw).unwrap_err();
            assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "input {:?}", raw);
        }
    }
}

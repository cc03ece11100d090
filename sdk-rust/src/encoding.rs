use base64::Engine as _;

use crate::errors::{BackendError, BackendResult};

/// Encode raw bytes for transport.
#[must_use]
pub fn to_base64(bytes: &[u8]) -> String {
    base64::engine::general_purpose::STANDARD.encode(bytes)
}

/// Decode a base64 payload back into bytes.
pub fn from_base64(b64: &str) -> BackendResult<Vec<u8>> {
    base64::engine::general_purpose::STANDARD
        .decode(b64)
        .map_err(|e| BackendError::InvalidInput(format!("failed to decode base64: {e}")))
}

/// Strip the `data:<mime>;base64,` prefix from a data URL and return the
/// bare payload. Returns `None` when there is no payload after the comma.
#[must_use]
pub fn data_url_payload(data_url: &str) -> Option<&str> {
    let (_, payload) = data_url.split_once(',')?;
    if payload.is_empty() {
        None
    } else {
        Some(payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base64_round_trip() {
        let bytes = b"resume bytes \x00\x01\x02";
        let encoded = to_base64(bytes);
        assert_eq!(from_base64(&encoded).unwrap(), bytes);
    }

    #[test]
    fn data_url_payload_strips_prefix() {
        assert_eq!(
            data_url_payload("data:image/png;base64,aGVsbG8="),
            Some("aGVsbG8=")
        );
    }

    #[test]
    fn data_url_payload_rejects_empty() {
        assert_eq!(data_url_payload("data:image/png;base64,"), None);
        assert_eq!(data_url_payload("no comma here"), None);
    }
}

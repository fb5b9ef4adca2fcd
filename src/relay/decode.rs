use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use base64::Engine;
use tracing::debug;

const LENIENT_CONFIG: GeneralPurposeConfig = GeneralPurposeConfig::new()
    .with_decode_padding_mode(DecodePaddingMode::Indifferent)
    .with_decode_allow_trailing_bits(true);

// hosts send either alphabet, with or without padding
const STANDARD_LENIENT: GeneralPurpose = GeneralPurpose::new(&alphabet::STANDARD, LENIENT_CONFIG);
const URL_SAFE_LENIENT: GeneralPurpose = GeneralPurpose::new(&alphabet::URL_SAFE, LENIENT_CONFIG);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodedBody {
    /// The body was base64 and decoded to valid UTF-8.
    Decoded(String),
    /// The body was used as-is.
    Raw(String),
}

impl DecodedBody {
    pub fn is_fallback(&self) -> bool {
        matches!(self, DecodedBody::Raw(_))
    }

    pub fn into_string(self) -> String {
        match self {
            DecodedBody::Decoded(body) | DecodedBody::Raw(body) => body,
        }
    }
}

/// Tries to read `body` as base64 text, falling back to the raw string.
pub fn decode_body(body: &str) -> DecodedBody {
    // line-wrapped bodies (MIME style) are still base64
    let compact: String = body.chars().filter(|c| !c.is_ascii_whitespace()).collect();
    let bytes = STANDARD_LENIENT
        .decode(&compact)
        .or_else(|_| URL_SAFE_LENIENT.decode(&compact));

    match bytes.map(String::from_utf8) {
        Ok(Ok(decoded)) => DecodedBody::Decoded(decoded),
        Ok(Err(e)) => {
            debug!("Body is base64 but not UTF-8, using raw body: {}", e);
            DecodedBody::Raw(body.to_string())
        }
        Err(e) => {
            debug!("Body is not base64, using raw body: {}", e);
            DecodedBody::Raw(body.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::engine::general_purpose::{STANDARD, URL_SAFE_NO_PAD};

    #[test]
    fn test_decode_standard_base64() {
        let encoded = STANDARD.encode("amount=10.00&name=Jane+Doe");
        let decoded = decode_body(&encoded);
        assert_eq!(decoded, DecodedBody::Decoded("amount=10.00&name=Jane+Doe".to_string()));
    }

    #[test]
    fn test_decode_url_safe_without_padding() {
        let encoded = URL_SAFE_NO_PAD.encode("session=??>>&x=1");
        assert_eq!(decode_body(&encoded).into_string(), "session=??>>&x=1");
    }

    #[test]
    fn test_form_body_falls_back_to_raw() {
        let decoded = decode_body("amount=10.00&name=Jane+Doe");
        assert!(decoded.is_fallback());
        assert_eq!(decoded.into_string(), "amount=10.00&name=Jane+Doe");
    }

    #[test]
    fn test_non_utf8_bytes_fall_back_to_raw() {
        // "abcd" is valid base64 for 0x69 0xb7 0x1d, which is not UTF-8
        let decoded = decode_body("abcd");
        assert_eq!(decoded, DecodedBody::Raw("abcd".to_string()));
    }

    #[test]
    fn test_line_wrapped_base64() {
        let decoded = decode_body("YT0x\r\nJmI9Mg==");
        assert_eq!(decoded, DecodedBody::Decoded("a=1&b=2".to_string()));

        let decoded = decode_body(" YT0x\n JmI9\tMg==\n");
        assert_eq!(decoded.into_string(), "a=1&b=2");
    }

    #[test]
    fn test_fallback_keeps_original_whitespace() {
        let decoded = decode_body("a=1\r\n&b=2");
        assert_eq!(decoded, DecodedBody::Raw("a=1\r\n&b=2".to_string()));
    }

    #[test]
    fn test_leftover_bits_are_ignored() {
        // "YR" carries non-zero bits past the single decoded byte
        assert_eq!(decode_body("YR").into_string(), "a");
    }

    #[test]
    fn test_empty_body() {
        assert_eq!(decode_body("").into_string(), "");
    }
}

use url::form_urlencoded;

use super::types::ParsedPayload;

/// Pairs read past this count are dropped.
pub const MAX_KEYS: usize = 1000;

/// Parses `application/x-www-form-urlencoded` text. Never fails: malformed
/// escapes are kept literally and empty input gives an empty payload.
pub fn parse_form(input: &str) -> ParsedPayload {
    let mut payload = ParsedPayload::new();
    for (key, value) in form_urlencoded::parse(input.as_bytes()).take(MAX_KEYS) {
        payload.insert(key.into_owned(), value.into_owned());
    }
    payload
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::relay::types::FormValue;
    use serde_json::json;

    #[test]
    fn test_parse_simple_pairs() {
        let payload = parse_form("EXT_TRANS_ID=123&pmt_amt=25.00&name_on_acct=Jane+Doe");
        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            json!({
                "EXT_TRANS_ID": "123",
                "pmt_amt": "25.00",
                "name_on_acct": "Jane Doe",
            })
        );
    }

    #[test]
    fn test_repeated_keys_become_arrays() {
        let payload = parse_form("tag=a&x=1&tag=b&tag=c");
        assert_eq!(
            payload.get("tag"),
            Some(&FormValue::Multiple(vec!["a".into(), "b".into(), "c".into()]))
        );
        assert_eq!(payload.get("x"), Some(&FormValue::Single("1".into())));
    }

    #[test]
    fn test_keys_keep_first_seen_order() {
        let payload = parse_form("z=1&a=2&m=3&a=4");
        let json = serde_json::to_string(&payload).unwrap();
        assert_eq!(json, r#"{"z":"1","a":["2","4"],"m":"3"}"#);
    }

    #[test]
    fn test_percent_escapes_and_malformed_escapes() {
        let payload = parse_form("email=jane%40example.com&bad=100%&odd=%zz");
        assert_eq!(payload.get("email"), Some(&FormValue::Single("jane@example.com".into())));
        assert_eq!(payload.get("bad"), Some(&FormValue::Single("100%".into())));
        assert_eq!(payload.get("odd"), Some(&FormValue::Single("%zz".into())));
    }

    #[test]
    fn test_empty_and_degenerate_input() {
        assert!(parse_form("").is_empty());
        assert!(parse_form("&&&").is_empty());

        let payload = parse_form("flag&a=1&&b=");
        assert_eq!(payload.len(), 3);
        assert_eq!(payload.get("flag"), Some(&FormValue::Single(String::new())));
        assert_eq!(payload.get("b"), Some(&FormValue::Single(String::new())));
    }

    #[test]
    fn test_pairs_past_limit_are_dropped() {
        let input = (0..MAX_KEYS + 5)
            .map(|i| format!("k{}=v", i))
            .collect::<Vec<_>>()
            .join("&");
        let payload = parse_form(&input);
        assert_eq!(payload.len(), MAX_KEYS);
        assert!(payload.get("k999").is_some());
        assert!(payload.get("k1000").is_none());
    }
}

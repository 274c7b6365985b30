/// Build an `application/x-www-form-urlencoded` body from ordered fields.
///
/// Keys are plain ASCII identifiers and pass through untouched; every
/// value is percent-encoded (space, `&`, `=`, `%`, `@` and all non-ASCII
/// bytes are escaped). Field order is preserved.
pub fn form_encode(fields: &[(&'static str, String)]) -> String {
    let mut body = String::new();
    for (key, value) in fields {
        if !body.is_empty() {
            body.push('&');
        }
        body.push_str(key);
        body.push('=');
        body.push_str(&urlencoding::encode(value));
    }
    body
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_scenario_body() {
        let fields = vec![
            ("from", "alice@example.com".to_string()),
            ("to", "bob@example.com".to_string()),
            ("type", String::new()),
            ("subject", String::new()),
            ("body", "hi".to_string()),
            ("thread", String::new()),
        ];
        assert_eq!(
            form_encode(&fields),
            "from=alice%40example.com&to=bob%40example.com&type=&subject=&body=hi&thread="
        );
    }

    #[test]
    fn escapes_reserved_and_non_ascii() {
        let fields = vec![("body", "a&b=c %d ü".to_string())];
        let body = form_encode(&fields);
        assert_eq!(body, "body=a%26b%3Dc%20%25d%20%C3%BC");
    }

    #[test]
    fn decoding_recovers_original_values() {
        let values = ["plain", "with space", "a&b=c", "100%", "grüße@home"];
        for value in values {
            let body = form_encode(&[("v", value.to_string())]);
            let encoded = body.strip_prefix("v=").unwrap();
            assert_eq!(urlencoding::decode(encoded).unwrap(), value);
        }
    }

    #[test]
    fn empty_fields_give_empty_body() {
        assert_eq!(form_encode(&[]), "");
    }
}

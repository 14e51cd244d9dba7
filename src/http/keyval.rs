use crate::error::ParseError;

/// Key/value pairs in first-seen key order.
pub type KeyValues = Vec<(String, String)>;

/// Splits `input` into trimmed key/value pairs.
///
/// `outer` separates pairs and `inner` separates a key from its value, so
/// `parse_key_values("a: 1, b : 2", ",", ":")` yields `[("a", "1"), ("b", "2")]`.
/// A repeated key keeps its first position and takes the last value.
///
/// # Errors
///
/// Returns an error when the delimiters are equal, when `input` is empty or
/// when any pair does not split into a non-empty key and value.
pub fn parse_key_values(input: &str, outer: &str, inner: &str) -> Result<KeyValues, ParseError> {
    if outer == inner {
        return Err(ParseError::EqualDelimiters {
            delimiter: outer.to_owned(),
        });
    }
    if input.is_empty() {
        return Err(ParseError::EmptyInput);
    }

    let mut pairs: KeyValues = Vec::new();
    for pair in input.split(outer) {
        let (key, value) = pair
            .split_once(inner)
            .ok_or_else(|| ParseError::MissingDelimiter {
                pair: pair.to_owned(),
            })?;
        let key = key.trim();
        let value = value.trim();
        if key.is_empty() || value.is_empty() {
            return Err(ParseError::EmptyPart {
                pair: pair.to_owned(),
            });
        }
        match pairs.iter_mut().find(|(existing, _)| existing == key) {
            Some(entry) => value.clone_into(&mut entry.1),
            None => pairs.push((key.to_owned(), value.to_owned())),
        }
    }
    Ok(pairs)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owned(pairs: &[(&str, &str)]) -> KeyValues {
        pairs
            .iter()
            .map(|(key, value)| ((*key).to_owned(), (*value).to_owned()))
            .collect()
    }

    #[test]
    fn parses_and_trims_pairs() -> Result<(), String> {
        let parsed = parse_key_values("key1: val2, key3 : val4,key5:val6", ",", ":")
            .map_err(|err| err.to_string())?;
        let expected = owned(&[("key1", "val2"), ("key3", "val4"), ("key5", "val6")]);
        if parsed != expected {
            return Err(format!("Unexpected pairs: {:?}", parsed));
        }
        Ok(())
    }

    #[test]
    fn single_pair_without_outer_delimiter() -> Result<(), String> {
        let parsed = parse_key_values("abc:123", ";", ":").map_err(|err| err.to_string())?;
        if parsed != owned(&[("abc", "123")]) {
            return Err(format!("Unexpected pairs: {:?}", parsed));
        }
        Ok(())
    }

    #[test]
    fn value_may_contain_inner_delimiter() -> Result<(), String> {
        let parsed = parse_key_values("Referer: http://example.com", ",", ":")
            .map_err(|err| err.to_string())?;
        if parsed != owned(&[("Referer", "http://example.com")]) {
            return Err(format!("Unexpected pairs: {:?}", parsed));
        }
        Ok(())
    }

    #[test]
    fn duplicate_key_takes_last_value() -> Result<(), String> {
        let parsed =
            parse_key_values("a=1; b=2; a=3", ";", "=").map_err(|err| err.to_string())?;
        if parsed != owned(&[("a", "3"), ("b", "2")]) {
            return Err(format!("Unexpected pairs: {:?}", parsed));
        }
        Ok(())
    }

    #[test]
    fn malformed_input_is_rejected() -> Result<(), String> {
        let cases = [
            ("", "", ""),
            ("", ":", ";"),
            ("", ":", ":"),
            ("a:b", ":", ":"),
            ("abc:123;", ";", ":"),
            (",,,", ",", ":"),
            ("a:b,c,d", ",", ":"),
            ("user:", ",", ":"),
            (":pass", ",", ":"),
            ("::", ",", ":"),
        ];
        for (input, outer, inner) in cases {
            if let Ok(parsed) = parse_key_values(input, outer, inner) {
                return Err(format!(
                    "Expected ({:?}, {:?}, {:?}) to fail, got {:?}",
                    input, outer, inner, parsed
                ));
            }
        }
        Ok(())
    }

    #[test]
    fn equal_delimiters_error_is_reported_first() -> Result<(), String> {
        match parse_key_values("a:b", ":", ":") {
            Err(ParseError::EqualDelimiters { .. }) => Ok(()),
            other => Err(format!("Expected EqualDelimiters, got {:?}", other)),
        }
    }
}

use std::fmt;

use crate::error::FooStoreError;

use super::FooListOptions;

type FieldParser = fn(&mut FooListOptions, &str) -> Result<(), String>;

/// One recognised query-string key and how its value lands in [`FooListOptions`].
///
/// `id` accumulates across repeats; for the scalar fields the last occurrence wins. A blank
/// value leaves its field untouched.
#[derive(Clone, Copy)]
pub struct FieldSpec {
    /// External key as it appears in the query string.
    pub key: &'static str,
    /// Name of the field it fills.
    pub field: &'static str,
    parse: FieldParser,
}

impl fmt::Debug for FieldSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldSpec")
            .field("key", &self.key)
            .field("field", &self.field)
            .finish_non_exhaustive()
    }
}

/// Keys accepted when decoding a `foo` list request.
pub const FOO_LIST_FIELDS: &[FieldSpec] = &[
    FieldSpec {
        key: "id",
        field: "ids",
        parse: parse_id,
    },
    FieldSpec {
        key: "value",
        field: "value",
        parse: parse_value,
    },
    FieldSpec {
        key: "page_size",
        field: "page.size",
        parse: parse_page_size,
    },
    FieldSpec {
        key: "page",
        field: "page.number",
        parse: parse_page_number,
    },
];

fn parse_id(opts: &mut FooListOptions, raw: &str) -> Result<(), String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(());
    }
    let id = raw.parse::<i64>().map_err(|e| e.to_string())?;
    opts.ids.push(id);
    Ok(())
}

fn parse_value(opts: &mut FooListOptions, raw: &str) -> Result<(), String> {
    opts.value = raw.to_string();
    Ok(())
}

fn parse_page_size(opts: &mut FooListOptions, raw: &str) -> Result<(), String> {
    if let Some(size) = parse_non_negative(raw)? {
        opts.page.size = size;
    }
    Ok(())
}

fn parse_page_number(opts: &mut FooListOptions, raw: &str) -> Result<(), String> {
    if let Some(number) = parse_non_negative(raw)? {
        opts.page.number = number;
    }
    Ok(())
}

fn parse_non_negative(raw: &str) -> Result<Option<i64>, String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    let n = raw.parse::<i64>().map_err(|e| e.to_string())?;
    if n < 0 {
        return Err(format!("must not be negative, got {n}"));
    }
    Ok(Some(n))
}

/// Keys match without regard to ASCII case, so `Value=` and `ID=` are accepted.
fn lookup(key: &str) -> Option<&'static FieldSpec> {
    FOO_LIST_FIELDS
        .iter()
        .find(|spec| spec.key.eq_ignore_ascii_case(key))
}

/// Decode already-split `(key, value)` pairs.
///
/// # Errors
///
/// Returns [`FooStoreError::DecodeError`] naming the first unknown key or unparsable value.
pub fn decode_pairs<I, K, V>(pairs: I) -> Result<FooListOptions, FooStoreError>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut opts = FooListOptions::default();
    for (key, value) in pairs {
        let key = key.as_ref();
        let spec = lookup(key).ok_or_else(|| FooStoreError::decode(key, "unrecognized key"))?;
        (spec.parse)(&mut opts, value.as_ref())
            .map_err(|message| FooStoreError::decode(key, message))?;
    }
    Ok(opts)
}

/// Decode a raw URL query string such as `id=2&id=4&page_size=10`.
///
/// # Errors
///
/// Returns [`FooStoreError::DecodeError`] if the string is not valid form encoding or any pair
/// fails [`decode_pairs`].
pub fn decode_query(query: &str) -> Result<FooListOptions, FooStoreError> {
    let pairs: Vec<(String, String)> = serde_urlencoded::from_str(query)
        .map_err(|e| FooStoreError::decode("query", e.to_string()))?;
    decode_pairs(pairs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query_builder::Page;

    #[test]
    fn decodes_every_known_key() {
        let opts = decode_query("id=2&id=4&value=hello%20world&page_size=10&page=3").unwrap();
        assert_eq!(
            opts,
            FooListOptions {
                ids: vec![2, 4],
                value: "hello world".to_string(),
                page: Page::new(10, 3),
            }
        );
    }

    #[test]
    fn empty_query_is_no_filter() {
        assert_eq!(decode_query("").unwrap(), FooListOptions::default());
    }

    #[test]
    fn scalar_keys_keep_last_occurrence() {
        let opts = decode_pairs([("page_size", "5"), ("page_size", "7")]).unwrap();
        assert_eq!(opts.page.size, 7);
    }

    #[test]
    fn unknown_key_is_rejected() {
        let err = decode_query("colour=red").unwrap_err();
        assert!(err.is_decode_error());
        assert!(err.to_string().contains("`colour`"));
    }

    #[test]
    fn malformed_numbers_are_rejected() {
        assert!(decode_query("id=two").unwrap_err().is_decode_error());
        assert!(decode_query("page=-1").unwrap_err().is_decode_error());
        assert!(decode_query("page_size=ten").unwrap_err().is_decode_error());
    }

    #[test]
    fn blank_values_are_not_provided() {
        let opts = decode_query("value=hello&page_size=").unwrap();
        assert_eq!(opts.value, "hello");
        assert_eq!(opts.page, Page::default());

        let opts = decode_query("id=&id=4&id=%20&value=hello").unwrap();
        assert_eq!(opts.ids, vec![4]);

        let opts = decode_query("page_size=5&page_size=&page=").unwrap();
        assert_eq!(opts.page, Page::new(5, 0));

        assert_eq!(
            decode_query("id=&value=&page_size=&page=").unwrap(),
            FooListOptions::default()
        );
    }

    #[test]
    fn keys_ignore_ascii_case() {
        let opts = decode_query("Value=hello&ID=3&Page_Size=2&PAGE=1").unwrap();
        assert_eq!(
            opts,
            FooListOptions {
                ids: vec![3],
                value: "hello".to_string(),
                page: Page::new(2, 1),
            }
        );
        assert!(decode_query("Colour=red").unwrap_err().is_decode_error());
    }

    #[test]
    fn table_keys_are_unique() {
        for (i, spec) in FOO_LIST_FIELDS.iter().enumerate() {
            assert!(
                FOO_LIST_FIELDS[i + 1..]
                    .iter()
                    .all(|s| !s.key.eq_ignore_ascii_case(spec.key)),
                "duplicate key {}",
                spec.key
            );
        }
    }
}

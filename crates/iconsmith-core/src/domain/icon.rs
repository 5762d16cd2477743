use std::fmt;

use serde::de::{self, IgnoredAny, MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

/// One generated image reference returned by the service.
///
/// Entries are taken verbatim. A missing or `null` field becomes an empty
/// string and a number or boolean becomes its text, so one odd entry never
/// invalidates the rest of a response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedIcon {
    /// Label, also used as the save filename.
    #[serde(default, deserialize_with = "lenient_string")]
    pub item: String,
    /// Absolute URL of the image.
    #[serde(default, deserialize_with = "lenient_string")]
    pub url: String,
}

fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(LenientString)
}

struct LenientString;

impl<'de> Visitor<'de> for LenientString {
    type Value = String;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a string, a scalar or null")
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<String, E> {
        Ok(value.to_string())
    }

    fn visit_string<E: de::Error>(self, value: String) -> Result<String, E> {
        Ok(value)
    }

    fn visit_bool<E: de::Error>(self, value: bool) -> Result<String, E> {
        Ok(value.to_string())
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<String, E> {
        Ok(value.to_string())
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<String, E> {
        Ok(value.to_string())
    }

    fn visit_f64<E: de::Error>(self, value: f64) -> Result<String, E> {
        Ok(value.to_string())
    }

    fn visit_unit<E: de::Error>(self) -> Result<String, E> {
        Ok(String::new())
    }

    fn visit_none<E: de::Error>(self) -> Result<String, E> {
        Ok(String::new())
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<String, D::Error> {
        deserializer.deserialize_any(self)
    }

    // Nested values carry no usable text.
    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<String, A::Error> {
        while seq.next_element::<IgnoredAny>()?.is_some() {}
        Ok(String::new())
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<String, A::Error> {
        while map.next_entry::<IgnoredAny, IgnoredAny>()?.is_some() {}
        Ok(String::new())
    }
}

impl GeneratedIcon {
    pub fn new(item: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            item: item.into(),
            url: url.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_become_empty() {
        let icons: Vec<GeneratedIcon> =
            serde_json::from_str(r#"[{"item":"apple"},{"url":"http://x/y.png"},{}]"#).unwrap();
        assert_eq!(icons[0], GeneratedIcon::new("apple", ""));
        assert_eq!(icons[1], GeneratedIcon::new("", "http://x/y.png"));
        assert_eq!(icons[2], GeneratedIcon::default());
    }

    #[test]
    fn test_null_and_scalar_fields_are_tolerated() {
        let icons: Vec<GeneratedIcon> = serde_json::from_str(
            r#"[{"item":null,"url":"http://x/a.png"},{"item":7,"url":null},{"item":true,"url":{"href":"x"}}]"#,
        )
        .unwrap();
        assert_eq!(icons[0], GeneratedIcon::new("", "http://x/a.png"));
        assert_eq!(icons[1], GeneratedIcon::new("7", ""));
        assert_eq!(icons[2], GeneratedIcon::new("true", ""));
    }

    #[test]
    fn test_extra_fields_are_ignored() {
        let icon: GeneratedIcon =
            serde_json::from_str(r#"{"item":"pear","url":"http://x/p.png","seed":42}"#).unwrap();
        assert_eq!(icon.item, "pear");
    }
}

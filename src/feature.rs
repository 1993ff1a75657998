//! Map features as delivered by the data pipeline.
//!
//! A feature is a GeoJSON `Feature` whose `properties` map is the only
//! part this crate reads. Geometry is carried through untouched.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// Short reference label of a node (regional cycling network ref).
pub const LABEL_KEY: &str = "rcn_ref";

/// Number of distinct tracks that visited a segment.
pub const METRIC_KEY: &str = "count_track";

/// Unique track id used to look up precomputed tooltips.
pub const TOOLTIP_ID_KEY: &str = "track_uid";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub properties: HashMap<String, Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub geometry: Option<Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeatureCollection {
    #[serde(default)]
    pub features: Vec<Feature>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<HashMap<String, Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<HashMap<String, Value>>::deserialize(deserializer)?.unwrap_or_default())
}

impl Feature {
    /// Feature with the given properties and no geometry.
    pub fn from_properties<K, I>(properties: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Value)>,
    {
        Self {
            properties: properties.into_iter().map(|(k, v)| (k.into(), v)).collect(),
            geometry: None,
        }
    }

    /// Raw property lookup; the property name may come from runtime context.
    pub fn property(&self, key: &str) -> Option<&Value> {
        self.properties.get(key)
    }

    /// Numeric property. Non-numbers and non-finite values read as absent.
    pub fn get_f64(&self, key: &str) -> Option<f64> {
        self.property(key)
            .and_then(Value::as_f64)
            .filter(|v| v.is_finite())
    }

    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.property(key).and_then(Value::as_str)
    }

    /// Property rendered as an identifier key.
    ///
    /// Non-empty strings are returned as-is and non-zero numbers in their
    /// decimal form. Empty strings, zero, booleans, null and containers
    /// carry no identity and read as absent.
    pub fn key_string(&self, key: &str) -> Option<String> {
        match self.property(key)? {
            Value::String(s) if !s.is_empty() => Some(s.clone()),
            Value::Number(n) if n.as_f64() != Some(0.0) => Some(n.to_string()),
            _ => None,
        }
    }

    /// Property rendered for display text, `None` when there is nothing to show.
    pub fn display_string(&self, key: &str) -> Option<String> {
        match self.property(key)? {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            _ => None,
        }
    }
}

impl FeatureCollection {
    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}

impl FromIterator<Feature> for FeatureCollection {
    fn from_iter<T: IntoIterator<Item = Feature>>(iter: T) -> Self {
        Self {
            features: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_geojson_feature() {
        let feature: Feature = serde_json::from_value(json!({
            "type": "Feature",
            "geometry": {"type": "Point", "coordinates": [4.45, 50.65]},
            "properties": {"rcn_ref": "42", "count_track": 3}
        }))
        .unwrap();

        assert_eq!(feature.get_str(LABEL_KEY), Some("42"));
        assert_eq!(feature.get_f64(METRIC_KEY), Some(3.0));
        assert!(feature.geometry.is_some());
    }

    #[test]
    fn test_null_properties_read_as_empty() {
        let feature: Feature =
            serde_json::from_value(json!({"type": "Feature", "properties": null})).unwrap();
        assert!(feature.properties.is_empty());

        let feature: Feature = serde_json::from_value(json!({"type": "Feature"})).unwrap();
        assert!(feature.properties.is_empty());
    }

    #[test]
    fn test_get_f64_ignores_non_numbers() {
        let feature = Feature::from_properties([
            ("count_track", json!("12")),
            ("length", json!(null)),
        ]);
        assert_eq!(feature.get_f64("count_track"), None);
        assert_eq!(feature.get_f64("length"), None);
        assert_eq!(feature.get_f64("missing"), None);
    }

    #[test]
    fn test_key_string() {
        let feature = Feature::from_properties([
            ("a", json!("trk-1")),
            ("b", json!(17)),
            ("c", json!("")),
            ("d", json!(0)),
            ("e", json!(true)),
        ]);
        assert_eq!(feature.key_string("a").as_deref(), Some("trk-1"));
        assert_eq!(feature.key_string("b").as_deref(), Some("17"));
        assert_eq!(feature.key_string("c"), None);
        assert_eq!(feature.key_string("d"), None);
        assert_eq!(feature.key_string("e"), None);
        assert_eq!(feature.key_string("missing"), None);
    }

    #[test]
    fn test_display_string() {
        let feature = Feature::from_properties([("n", json!(3.5)), ("s", json!("x"))]);
        assert_eq!(feature.display_string("n").as_deref(), Some("3.5"));
        assert_eq!(feature.display_string("s").as_deref(), Some("x"));
        assert_eq!(feature.display_string("missing"), None);
    }
}

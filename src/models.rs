use serde::{Deserialize, Serialize};

/// One raw observation handed over by the data layer (one row = one point).
///
/// `category` is the x-axis label and does not need to be unique: several
/// points may share a category under different `series_name`s.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DataPoint {
    #[serde(deserialize_with = "de_label_from_string_or_number")]
    pub category: String,
    /// Always finite. Missing or non-numeric input becomes `0.0`.
    #[serde(default, deserialize_with = "de_lenient_f64")]
    pub value: f64,
    #[serde(default, deserialize_with = "de_opt_non_empty")]
    pub color: Option<String>,
    #[serde(default, deserialize_with = "de_opt_non_empty")]
    pub series_name: Option<String>,
    #[serde(default)]
    pub original_order: Option<i64>,
}

impl DataPoint {
    /// Single-series point with only a label and a value.
    pub fn new(category: impl Into<String>, value: f64) -> Self {
        Self {
            category: category.into(),
            value: finite_or_zero(value),
            ..Self::default()
        }
    }

    pub fn with_series(mut self, name: impl Into<String>) -> Self {
        self.series_name = Some(name.into());
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn with_order(mut self, order: i64) -> Self {
        self.original_order = Some(order);
        self
    }
}

/// Coerce any float to a finite number (`NaN`/`±inf` → `0.0`).
#[inline]
pub fn finite_or_zero(v: f64) -> f64 {
    if v.is_finite() { v } else { 0.0 }
}

/// Lenient numeric coercion for string input: trimmed, whole-string parse,
/// anything unparseable or non-finite is `0.0`.
pub fn coerce_numeric_str(s: &str) -> f64 {
    s.trim().parse::<f64>().map(finite_or_zero).unwrap_or(0.0)
}

/// Serde helper: parse `f64` from a JSON number, a numeric string, a bool,
/// or null. Never fails on well-formed JSON; bad values become `0.0`.
fn de_lenient_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::{self, Visitor};
    struct LenientF64;

    impl<'de> Visitor<'de> for LenientF64 {
        type Value = f64;

        fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
            write!(f, "a number, a numeric string, or null")
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> Result<f64, E> {
            Ok(finite_or_zero(v))
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<f64, E> {
            Ok(v as f64)
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<f64, E> {
            Ok(v as f64)
        }

        fn visit_bool<E: de::Error>(self, v: bool) -> Result<f64, E> {
            Ok(if v { 1.0 } else { 0.0 })
        }

        fn visit_str<E: de::Error>(self, s: &str) -> Result<f64, E> {
            Ok(coerce_numeric_str(s))
        }

        fn visit_unit<E: de::Error>(self) -> Result<f64, E> {
            Ok(0.0)
        }

        fn visit_none<E: de::Error>(self) -> Result<f64, E> {
            Ok(0.0)
        }

        fn visit_some<D2>(self, d: D2) -> Result<f64, D2::Error>
        where
            D2: serde::Deserializer<'de>,
        {
            d.deserialize_any(LenientF64)
        }
    }

    deserializer.deserialize_any(LenientF64)
}

/// Serde helper: category labels arrive as strings or bare numbers (years).
fn de_label_from_string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::{self, Visitor};
    struct Label;

    impl<'de> Visitor<'de> for Label {
        type Value = String;

        fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
            write!(f, "a string or number label")
        }

        fn visit_str<E: de::Error>(self, s: &str) -> Result<String, E> {
            Ok(s.to_string())
        }

        fn visit_string<E: de::Error>(self, s: String) -> Result<String, E> {
            Ok(s)
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_bool<E: de::Error>(self, v: bool) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_unit<E: de::Error>(self) -> Result<String, E> {
            Ok(String::new())
        }
    }

    deserializer.deserialize_any(Label)
}

/// Serde helper: CSV cells and sloppy JSON send `""` for "no value".
fn de_opt_non_empty<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.filter(|s| !s.trim().is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_accepts_strings_numbers_and_garbage() {
        let json = r#"[
            {"category": "A", "value": 3},
            {"category": "B", "value": "4.5"},
            {"category": "C", "value": "n/a"},
            {"category": "D", "value": null},
            {"category": "E"}
        ]"#;
        let pts: Vec<DataPoint> = serde_json::from_str(json).unwrap();
        let vals: Vec<f64> = pts.iter().map(|p| p.value).collect();
        assert_eq!(vals, vec![3.0, 4.5, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn numeric_category_and_camel_case_fields() {
        let json = r##"{"category": 2024, "value": 1, "seriesName": "North",
                        "originalOrder": 7, "color": "#ff0000"}"##;
        let p: DataPoint = serde_json::from_str(json).unwrap();
        assert_eq!(p.category, "2024");
        assert_eq!(p.series_name.as_deref(), Some("North"));
        assert_eq!(p.original_order, Some(7));
        assert_eq!(p.color.as_deref(), Some("#ff0000"));
    }

    #[test]
    fn empty_optional_strings_are_none() {
        let p: DataPoint =
            serde_json::from_str(r#"{"category": "x", "color": "", "seriesName": " "}"#).unwrap();
        assert_eq!(p.color, None);
        assert_eq!(p.series_name, None);
    }

    #[test]
    fn constructor_drops_non_finite() {
        assert_eq!(DataPoint::new("a", f64::NAN).value, 0.0);
        assert_eq!(DataPoint::new("a", f64::INFINITY).value, 0.0);
        assert_eq!(coerce_numeric_str(" 12 "), 12.0);
        assert_eq!(coerce_numeric_str("12abc"), 0.0);
    }
}

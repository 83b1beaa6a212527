use serde::de::{self, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;

/// Age assumed when the `age` answer is missing or does not parse.
pub(crate) const DEFAULT_AGE: i32 = 30;

/// A single survey answer. Select questions carry one scalar value; checkbox
/// questions such as `conditions` carry a list of selected items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerValue {
    Scalar(String),
    Multi(Vec<String>),
}

impl AnswerValue {
    /// Returns the scalar value when one is present and non-empty.
    pub fn scalar(&self) -> Option<&str> {
        match self {
            AnswerValue::Scalar(value) if !value.is_empty() => Some(value),
            _ => None,
        }
    }

    /// Returns the selected items of a multi-select answer.
    pub fn items(&self) -> Option<&[String]> {
        match self {
            AnswerValue::Multi(values) => Some(values),
            AnswerValue::Scalar(_) => None,
        }
    }
}

impl From<&str> for AnswerValue {
    fn from(value: &str) -> Self {
        AnswerValue::Scalar(value.to_string())
    }
}

impl From<String> for AnswerValue {
    fn from(value: String) -> Self {
        AnswerValue::Scalar(value)
    }
}

impl From<Vec<String>> for AnswerValue {
    fn from(values: Vec<String>) -> Self {
        AnswerValue::Multi(values)
    }
}

impl From<Vec<&str>> for AnswerValue {
    fn from(values: Vec<&str>) -> Self {
        AnswerValue::Multi(values.into_iter().map(str::to_string).collect())
    }
}

impl Serialize for AnswerValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            AnswerValue::Scalar(value) => serializer.serialize_str(value),
            AnswerValue::Multi(values) => serializer.collect_seq(values),
        }
    }
}

/// Accepts strings, numbers, and booleans as scalar text so survey payloads
/// may send `"age": 42` as well as `"age": "42"`.
struct ScalarText(String);

impl<'de> Deserialize<'de> for ScalarText {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ScalarTextVisitor;

        impl<'de> Visitor<'de> for ScalarTextVisitor {
            type Value = ScalarText;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str("a string, number, or boolean")
            }

            fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
                Ok(ScalarText(value.to_string()))
            }

            fn visit_string<E: de::Error>(self, value: String) -> Result<Self::Value, E> {
                Ok(ScalarText(value))
            }

            fn visit_bool<E: de::Error>(self, value: bool) -> Result<Self::Value, E> {
                Ok(ScalarText(value.to_string()))
            }

            fn visit_i64<E: de::Error>(self, value: i64) -> Result<Self::Value, E> {
                Ok(ScalarText(value.to_string()))
            }

            fn visit_u64<E: de::Error>(self, value: u64) -> Result<Self::Value, E> {
                Ok(ScalarText(value.to_string()))
            }

            fn visit_f64<E: de::Error>(self, value: f64) -> Result<Self::Value, E> {
                Ok(ScalarText(value.to_string()))
            }
        }

        deserializer.deserialize_any(ScalarTextVisitor)
    }
}

impl<'de> Deserialize<'de> for AnswerValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct AnswerValueVisitor;

        impl<'de> Visitor<'de> for AnswerValueVisitor {
            type Value = AnswerValue;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str("a string, number, boolean, null, or list of strings")
            }

            fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
                Ok(AnswerValue::Scalar(value.to_string()))
            }

            fn visit_string<E: de::Error>(self, value: String) -> Result<Self::Value, E> {
                Ok(AnswerValue::Scalar(value))
            }

            fn visit_bool<E: de::Error>(self, value: bool) -> Result<Self::Value, E> {
                Ok(AnswerValue::Scalar(value.to_string()))
            }

            fn visit_i64<E: de::Error>(self, value: i64) -> Result<Self::Value, E> {
                Ok(AnswerValue::Scalar(value.to_string()))
            }

            fn visit_u64<E: de::Error>(self, value: u64) -> Result<Self::Value, E> {
                Ok(AnswerValue::Scalar(value.to_string()))
            }

            fn visit_f64<E: de::Error>(self, value: f64) -> Result<Self::Value, E> {
                Ok(AnswerValue::Scalar(value.to_string()))
            }

            fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
                Ok(AnswerValue::Scalar(String::new()))
            }

            fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
                Ok(AnswerValue::Scalar(String::new()))
            }

            fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Self::Value, D::Error> {
                AnswerValue::deserialize(deserializer)
            }

            fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
                let mut values = Vec::with_capacity(seq.size_hint().unwrap_or(0));
                while let Some(ScalarText(value)) = seq.next_element()? {
                    values.push(value);
                }
                Ok(AnswerValue::Multi(values))
            }
        }

        deserializer.deserialize_any(AnswerValueVisitor)
    }
}

/// The full set of survey answers keyed by question identifier.
///
/// Empty scalar values are kept in the map but treated as unanswered
/// everywhere a value is read, mirroring how an untouched form field submits
/// an empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerSet {
    entries: BTreeMap<String, AnswerValue>,
}

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert used by tests and the demo profile.
    pub fn with(mut self, question: impl Into<String>, value: impl Into<AnswerValue>) -> Self {
        self.insert(question, value);
        self
    }

    pub fn insert(&mut self, question: impl Into<String>, value: impl Into<AnswerValue>) {
        self.entries.insert(question.into(), value.into());
    }

    pub fn get(&self, question: &str) -> Option<&AnswerValue> {
        self.entries.get(question)
    }

    /// The scalar value for `question`, or `None` when the question is
    /// unanswered, empty, or a multi-select.
    pub fn scalar(&self, question: &str) -> Option<&str> {
        self.get(question).and_then(AnswerValue::scalar)
    }

    /// The selected items for a multi-select `question`.
    pub fn items(&self, question: &str) -> Option<&[String]> {
        self.get(question).and_then(AnswerValue::items)
    }

    /// True when `question` equals `value` exactly.
    pub fn matches(&self, question: &str, value: &str) -> bool {
        self.scalar(question) == Some(value)
    }

    /// True when `question` equals any of `values`.
    pub fn matches_any(&self, question: &str, values: &[&str]) -> bool {
        self.scalar(question)
            .map_or(false, |value| values.contains(&value))
    }

    /// True when the question carries anything besides an empty scalar.
    pub fn has_answer(&self, question: &str) -> bool {
        match self.get(question) {
            Some(AnswerValue::Scalar(value)) => !value.is_empty(),
            Some(AnswerValue::Multi(_)) => true,
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &AnswerValue)> {
        self.entries.iter().map(|(question, value)| (question.as_str(), value))
    }

    /// Chronological age for scoring. Unparsable or zero ages fall back to
    /// [`DEFAULT_AGE`] rather than failing; the intake guard rejects such
    /// submissions before they reach service callers.
    pub fn parsed_age(&self) -> i32 {
        self.scalar("age")
            .and_then(parse_leading_int)
            .filter(|age| *age != 0)
            .map(|age| age.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32)
            .unwrap_or(DEFAULT_AGE)
    }
}

impl FromIterator<(String, AnswerValue)> for AnswerSet {
    fn from_iter<I: IntoIterator<Item = (String, AnswerValue)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

/// Parses an optional sign followed by leading decimal digits, ignoring any
/// trailing text, so `"42 years"` reads as 42. Returns `None` when no digits
/// are present.
pub(crate) fn parse_leading_int(raw: &str) -> Option<i64> {
    let mut chars = raw.trim_start().chars().peekable();
    let mut negative = false;
    if let Some(&sign @ ('+' | '-')) = chars.peek() {
        negative = sign == '-';
        chars.next();
    }

    let mut digits_seen = false;
    let mut value: i64 = 0;
    for ch in chars {
        let Some(digit) = ch.to_digit(10) else { break };
        digits_seen = true;
        value = value.saturating_mul(10).saturating_add(i64::from(digit));
    }

    if digits_seen {
        Some(if negative { -value } else { value })
    } else {
        None
    }
}

//! Arguments of the `@dataclass(...)` decorator.
//!
//! Two sources feed the decorator: the legacy `frozen` / `keyword_only`
//! flags and an explicit, ordered mapping of keyword arguments. A non-empty
//! mapping replaces the legacy flags wholesale; the two are never merged.

use crate::error::DataclassGenError;
use crate::python_literal;
use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::Value;

/// Explicit keyword arguments for the `@dataclass` decorator, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct DataclassArguments(IndexMap<String, Value>);

impl DataclassArguments {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace an argument. Replacing keeps the original position.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    /// Parse arguments from a JSON object such as `{"slots": true, "order": true}`.
    ///
    /// Key order is preserved. Values are not validated.
    ///
    /// # Errors
    ///
    /// Returns `DataclassGenError::JsonError` if the input is not valid JSON or
    /// is not a JSON object.
    pub fn from_json_str(json: &str) -> Result<Self, DataclassGenError> {
        Ok(serde_json::from_str(json)?)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    #[must_use]
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, Value> {
        self.0.iter()
    }
}

impl<'a> IntoIterator for &'a DataclassArguments {
    type Item = (&'a String, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for DataclassArguments {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Where the decorator arguments of one model come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecoratorSource<'a> {
    /// The legacy boolean flags.
    Legacy { frozen: bool, keyword_only: bool },
    /// A non-empty explicit mapping; the legacy flags are ignored.
    Explicit(&'a DataclassArguments),
}

impl<'a> DecoratorSource<'a> {
    /// Pick the single source to render from.
    #[must_use]
    pub fn resolve(
        frozen: bool,
        keyword_only: bool,
        explicit: Option<&'a DataclassArguments>,
    ) -> Self {
        match explicit {
            Some(arguments) if !arguments.is_empty() => Self::Explicit(arguments),
            _ => Self::Legacy {
                frozen,
                keyword_only,
            },
        }
    }

    /// The `key=value` items inside the decorator's parentheses.
    ///
    /// Explicit entries with a falsy value are left out, so
    /// `{"repr": false}` contributes nothing.
    #[must_use]
    pub fn argument_list(&self) -> Vec<String> {
        match self {
            Self::Legacy {
                frozen,
                keyword_only,
            } => {
                let mut items: Vec<String> = Vec::with_capacity(2);
                if *keyword_only {
                    items.push("kw_only=True".to_string());
                }
                if *frozen {
                    items.push("frozen=True".to_string());
                }
                items
            }
            Self::Explicit(arguments) => arguments
                .iter()
                .filter(|(_, value)| python_literal::is_truthy(value))
                .map(|(key, value)| format!("{key}={}", python_literal::argument_text(value)))
                .collect(),
        }
    }

    /// The decorator line, `@dataclass` or `@dataclass(a, b)`.
    #[must_use]
    pub fn annotation(&self) -> String {
        let items: Vec<String> = self.argument_list();
        if items.is_empty() {
            "@dataclass".to_string()
        } else {
            format!("@dataclass({})", items.join(", "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn legacy_flags_both_off_render_bare() {
        let source: DecoratorSource<'_> = DecoratorSource::resolve(false, false, None);
        assert_eq!("@dataclass", source.annotation());
    }

    #[test]
    fn legacy_frozen_only() {
        let source: DecoratorSource<'_> = DecoratorSource::resolve(true, false, None);
        assert_eq!("@dataclass(frozen=True)", source.annotation());
    }

    #[test]
    fn legacy_keyword_only_only() {
        let source: DecoratorSource<'_> = DecoratorSource::resolve(false, true, None);
        assert_eq!("@dataclass(kw_only=True)", source.annotation());
    }

    #[test]
    fn legacy_both_render_keyword_only_first() {
        let source: DecoratorSource<'_> = DecoratorSource::resolve(true, true, None);
        assert_eq!("@dataclass(kw_only=True, frozen=True)", source.annotation());
    }

    #[test]
    fn explicit_mapping_overrides_legacy_flags() {
        let arguments: DataclassArguments = DataclassArguments::new()
            .with("frozen", false)
            .with("order", true);
        let source: DecoratorSource<'_> = DecoratorSource::resolve(true, true, Some(&arguments));

        assert_eq!(DecoratorSource::Explicit(&arguments), source);
        assert_eq!("@dataclass(order=True)", source.annotation());
    }

    #[test]
    fn empty_explicit_mapping_falls_back_to_legacy() {
        let arguments: DataclassArguments = DataclassArguments::new();
        let source: DecoratorSource<'_> = DecoratorSource::resolve(true, false, Some(&arguments));
        assert_eq!("@dataclass(frozen=True)", source.annotation());
    }

    #[test]
    fn explicit_falsy_values_are_dropped_in_order() {
        let arguments: DataclassArguments = DataclassArguments::new()
            .with("slots", true)
            .with("repr", false)
            .with("order", true);
        let source: DecoratorSource<'_> = DecoratorSource::resolve(false, false, Some(&arguments));
        assert_eq!("@dataclass(slots=True, order=True)", source.annotation());
    }

    #[test]
    fn explicit_all_falsy_renders_bare_and_ignores_legacy() {
        let arguments: DataclassArguments = DataclassArguments::new().with("eq", false);
        let source: DecoratorSource<'_> = DecoratorSource::resolve(true, true, Some(&arguments));
        assert_eq!("@dataclass", source.annotation());
    }

    #[test]
    fn explicit_non_boolean_values_pass_through() {
        let arguments: DataclassArguments = DataclassArguments::new()
            .with("match_args", json!(1))
            .with("unsafe_hash", "custom_flag")
            .with("weakref_slot", json!(null));
        let source: DecoratorSource<'_> = DecoratorSource::resolve(false, false, Some(&arguments));
        assert_eq!(
            "@dataclass(match_args=1, unsafe_hash=custom_flag)",
            source.annotation()
        );
    }

    #[test]
    fn from_json_str_preserves_key_order() {
        let arguments: DataclassArguments =
            DataclassArguments::from_json_str(r#"{"slots": true, "order": true, "eq": true}"#)
                .expect("valid arguments");
        let keys: Vec<&str> = arguments.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(vec!["slots", "order", "eq"], keys);
        assert_eq!(Some(&json!(true)), arguments.get("order"));
    }

    #[test]
    fn from_json_str_rejects_non_object() {
        let result: Result<DataclassArguments, DataclassGenError> =
            DataclassArguments::from_json_str("[true]");
        assert!(matches!(result, Err(DataclassGenError::JsonError(_))));
    }

    #[test]
    fn from_json_str_rejects_invalid_json() {
        let result: Result<DataclassArguments, DataclassGenError> =
            DataclassArguments::from_json_str("{slots: true");
        assert!(matches!(result, Err(DataclassGenError::JsonError(_))));
    }

    #[test]
    fn collects_from_pairs() {
        let arguments: DataclassArguments =
            [("frozen", true), ("slots", true)].into_iter().collect();
        assert_eq!(
            "@dataclass(frozen=True, slots=True)",
            DecoratorSource::resolve(false, false, Some(&arguments)).annotation()
        );
    }
}

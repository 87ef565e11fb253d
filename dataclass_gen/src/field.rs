//! Field descriptors of a dataclass and how each one is spelled in the class body.

use crate::imports::Import;
use crate::python_literal;
use crate::settings::RenderSettings;
use crate::types::{DataType, optional_hint};
use indexmap::IndexMap;
use serde_json::Value;

/// Keyword arguments of `dataclasses.field()` that are carried from extras.
const FIELD_KEYS: &[&str] = &[
    "default_factory",
    "init",
    "repr",
    "hash",
    "compare",
    "metadata",
    "kw_only",
];

/// A single field of a dataclass.
#[derive(Debug, Clone, PartialEq)]
pub struct DataModelField {
    pub name: String,
    pub data_type: DataType,
    pub required: bool,
    /// Default value; `None` and `Some(Value::Null)` both mean "no explicit default".
    pub default: Option<Value>,
    /// Overrides the optionality otherwise derived from `required`.
    pub nullable: Option<bool>,
    /// Extra schema keywords; only `dataclasses.field()` keywords reach the call.
    pub extras: IndexMap<String, Value>,
    pub description: Option<String>,
}

impl DataModelField {
    #[must_use]
    pub fn new(name: impl Into<String>, data_type: impl Into<DataType>, required: bool) -> Self {
        Self {
            name: name.into(),
            data_type: data_type.into(),
            required,
            default: None,
            nullable: None,
            extras: IndexMap::new(),
            description: None,
        }
    }

    #[must_use]
    pub fn with_default(mut self, default: Value) -> Self {
        self.default = Some(default);
        self
    }

    #[must_use]
    pub const fn with_nullable(mut self, nullable: bool) -> Self {
        self.nullable = Some(nullable);
        self
    }

    /// Add an extra schema keyword.
    ///
    /// A `const` extra pins the field: its value becomes the default and the
    /// field turns optional but not nullable.
    #[must_use]
    pub fn with_extra(mut self, key: impl Into<String>, value: Value) -> Self {
        let key: String = key.into();
        if key == "const" {
            self.default = Some(value.clone());
            self.required = false;
            self.nullable = Some(false);
        }
        self.extras.insert(key, value);
        self
    }

    #[must_use]
    pub fn is_const(&self) -> bool {
        self.extras.contains_key("const")
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    fn has_default_factory(&self) -> bool {
        self.extras.contains_key("default_factory")
    }

    /// Whether the hint must admit `None`.
    fn is_optional(&self) -> bool {
        if self.has_default_factory() || self.data_type.is_null() {
            return false;
        }
        self.nullable.unwrap_or(!self.required)
    }

    /// Whether the body line ends in `= <default>` even without a `field(...)` call.
    fn renders_default(&self) -> bool {
        !self.required || self.nullable == Some(true)
    }

    /// The annotation after `name:`.
    #[must_use]
    pub fn type_hint(&self, settings: &RenderSettings) -> String {
        let hint: String = self.data_type.type_hint(settings);
        if self.is_optional() {
            optional_hint(&hint, settings)
        } else {
            hint
        }
    }

    /// Python repr of the default, `None` when unset.
    #[must_use]
    pub fn represented_default(&self) -> String {
        self.default
            .as_ref()
            .map_or_else(|| "None".to_string(), python_literal::repr)
    }

    /// The right-hand side of `name: hint = ...` when the field carries a
    /// default or `field(...)` keywords, or `None` for a bare annotation.
    ///
    /// A lone scalar default renders as its literal, a lone list/dict default
    /// becomes a `default_factory` lambda, anything else is a `field(...)` call.
    #[must_use]
    pub fn field_call(&self) -> Option<String> {
        let mut data: IndexMap<&str, &Value> = self
            .extras
            .iter()
            .filter(|(k, _)| FIELD_KEYS.contains(&k.as_str()))
            .map(|(k, v)| (k.as_str(), v))
            .collect();

        if let Some(default) = self.default.as_ref()
            && !default.is_null()
        {
            data.insert("default", default);
        }

        if self.required {
            data.retain(|k, _| *k != "default" && *k != "default_factory");
        }

        if data.is_empty() {
            return None;
        }

        if data.len() == 1
            && let Some(default) = data.get("default")
        {
            return Some(if default.is_array() || default.is_object() {
                format!(
                    "field(default_factory=lambda :{})",
                    python_literal::repr(default)
                )
            } else {
                python_literal::repr(default)
            });
        }

        let kwargs: Vec<String> = data
            .iter()
            .map(|(k, v)| {
                if *k == "default_factory" {
                    format!("{k}={}", python_literal::argument_text(v))
                } else {
                    format!("{k}={}", python_literal::repr(v))
                }
            })
            .collect();
        Some(format!("field({})", kwargs.join(", ")))
    }

    /// True when the body line assigns something, which forces the field
    /// after every field that does not.
    #[must_use]
    pub fn has_field_assignment(&self) -> bool {
        self.field_call().is_some() || self.renders_default()
    }

    /// The full body line, indented for a class body.
    #[must_use]
    pub fn body_line(&self, settings: &RenderSettings) -> String {
        let hint: String = self.type_hint(settings);
        match self.field_call() {
            Some(call) => format!("    {}: {hint} = {call}", self.name),
            None if self.renders_default() => {
                format!("    {}: {hint} = {}", self.name, self.represented_default())
            }
            None => format!("    {}: {hint}", self.name),
        }
    }

    /// Docstring text for the field, when descriptions are enabled.
    #[must_use]
    pub fn docstring(&self, settings: &RenderSettings) -> Option<&str> {
        if settings.use_field_description {
            self.description.as_deref()
        } else {
            None
        }
    }

    #[must_use]
    pub fn imports(&self, settings: &RenderSettings) -> Vec<Import> {
        let mut imports: Vec<Import> = self.data_type.imports(settings);
        if self.is_optional() && !settings.use_union_operator {
            imports.push(Import::optional());
        }
        if self
            .field_call()
            .is_some_and(|call| call.starts_with("field("))
        {
            imports.push(Import::field());
        }
        imports
    }
}

//! Semantic field types and their Python type hints.

use crate::imports::Import;
use crate::settings::RenderSettings;

/// Primitive semantic types a schema can declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Types {
    String,
    Integer,
    Number,
    Boolean,
    Bytes,
    Any,
    Null,
    Date,
    DateTime,
    Time,
    TimeDelta,
    Decimal,
    Uuid,
}

impl Types {
    /// The Python spelling of this type.
    #[must_use]
    pub const fn type_hint(self) -> &'static str {
        match self {
            Self::String => "str",
            Self::Integer => "int",
            Self::Number => "float",
            Self::Boolean => "bool",
            Self::Bytes => "bytes",
            Self::Any => "Any",
            Self::Null => "None",
            Self::Date => "date",
            Self::DateTime => "datetime",
            Self::Time => "time",
            Self::TimeDelta => "timedelta",
            Self::Decimal => "Decimal",
            Self::Uuid => "UUID",
        }
    }

    /// The import needed to use the hint, if it is not a builtin.
    #[must_use]
    pub fn import(self) -> Option<Import> {
        let from: &str = match self {
            Self::Any => "typing",
            Self::Date | Self::DateTime | Self::Time | Self::TimeDelta => "datetime",
            Self::Decimal => "decimal",
            Self::Uuid => "uuid",
            Self::String
            | Self::Integer
            | Self::Number
            | Self::Boolean
            | Self::Bytes
            | Self::Null => return None,
        };
        Some(Import::new(from, self.type_hint()))
    }
}

/// The declared type of a field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataType {
    Primitive(Types),
    /// Homogeneous list of another data type.
    List(Box<DataType>),
    /// Another generated model, referenced by class name.
    Model(String),
}

impl DataType {
    #[must_use]
    pub fn list_of(item: Self) -> Self {
        Self::List(Box::new(item))
    }

    #[must_use]
    pub fn type_hint(&self, settings: &RenderSettings) -> String {
        match self {
            Self::Primitive(t) => t.type_hint().to_string(),
            Self::List(item) => {
                let container: &str = if settings.use_standard_collections {
                    "list"
                } else {
                    "List"
                };
                format!("{container}[{}]", item.type_hint(settings))
            }
            Self::Model(name) => name.clone(),
        }
    }

    /// Imports needed by the hint, innermost types included.
    #[must_use]
    pub fn imports(&self, settings: &RenderSettings) -> Vec<Import> {
        match self {
            Self::Primitive(t) => t.import().into_iter().collect(),
            Self::List(item) => {
                let mut imports: Vec<Import> = item.imports(settings);
                if !settings.use_standard_collections {
                    imports.push(Import::new("typing", "List"));
                }
                imports
            }
            Self::Model(_) => Vec::new(),
        }
    }

    /// True for the `None` type, which never needs an `Optional` wrapper.
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Primitive(Types::Null))
    }
}

impl From<Types> for DataType {
    fn from(t: Types) -> Self {
        Self::Primitive(t)
    }
}

/// Wrap a hint so it admits `None`.
#[must_use]
pub fn optional_hint(hint: &str, settings: &RenderSettings) -> String {
    if settings.use_union_operator {
        format!("{hint} | None")
    } else {
        format!("Optional[{hint}]")
    }
}

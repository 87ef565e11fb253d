//! Model identity: the path a model was found at and the name it renders as.

use heck::ToUpperCamelCase;
use std::path::Path;

/// Identity of a generated model.
///
/// `name` may be dotted (`pets.Pet`); the segments before the last dot
/// select a submodule and the last segment is the class name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Reference {
    pub path: String,
    pub name: String,
}

impl Reference {
    #[must_use]
    pub fn new(path: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            name: name.into(),
        }
    }

    /// Build a reference from a schema path, naming it after the last
    /// `/`-separated segment in `UpperCamelCase`.
    ///
    /// `#/components/schemas/pet_store` -> `PetStore`.
    #[must_use]
    pub fn from_path(path: impl Into<String>) -> Self {
        let path: String = path.into();
        let last: &str = path.rsplit('/').next().unwrap_or_default();
        let name: String = last.to_upper_camel_case();
        Self { path, name }
    }

    /// The name without any module prefix.
    #[must_use]
    pub fn class_name(&self) -> &str {
        self.name
            .rsplit_once('.')
            .map_or(self.name.as_str(), |(_, class)| class)
    }

    /// Module segments for this model, optionally rooted at the file it came from.
    #[must_use]
    pub fn module_path(&self, file_path: Option<&Path>, treat_dot_as_module: bool) -> Vec<String> {
        let mut segments: Vec<String> = Vec::new();
        if let Some(file_path) = file_path {
            if let Some(parent) = file_path.parent() {
                segments.extend(
                    parent
                        .iter()
                        .map(|part| part.to_string_lossy().into_owned()),
                );
            }
            let stem: String = file_path
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_default();
            segments.push(sanitize_module_name(&stem, treat_dot_as_module));
        }
        if let Some((prefix, _)) = self.name.rsplit_once('.') {
            segments.extend(prefix.split('.').map(str::to_string));
        }
        segments
    }

    #[must_use]
    pub fn module_name(&self, file_path: Option<&Path>, treat_dot_as_module: bool) -> String {
        self.module_path(file_path, treat_dot_as_module).join(".")
    }
}

/// Replace characters that cannot appear in a Python module name with `_`.
///
/// Dots survive only when `treat_dot_as_module` is set. A leading digit gets
/// a `_` prefix.
#[must_use]
pub fn sanitize_module_name(name: &str, treat_dot_as_module: bool) -> String {
    let sanitized: String = name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' || (treat_dot_as_module && c == '.') {
                c
            } else {
                '_'
            }
        })
        .collect();
    if sanitized.starts_with(|c: char| c.is_ascii_digit()) {
        format!("_{sanitized}")
    } else {
        sanitized
    }
}

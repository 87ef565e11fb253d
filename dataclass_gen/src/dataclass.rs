//! The dataclass model: one generated `@dataclass` class.

use crate::arguments::{DataclassArguments, DecoratorSource};
use crate::codegen;
use crate::field::DataModelField;
use crate::imports::Import;
use crate::reference::Reference;
use crate::settings::RenderSettings;
use std::collections::HashSet;
use std::io::Write;
use std::path::PathBuf;

/// A Python dataclass to be rendered.
///
/// Built once with [`DataClass::new`] and the `with_*` methods, then rendered
/// any number of times. Rendering never mutates the model.
#[derive(Debug, Clone, PartialEq)]
pub struct DataClass {
    reference: Reference,
    fields: Vec<DataModelField>,
    frozen: bool,
    keyword_only: bool,
    dataclass_arguments: Option<DataclassArguments>,
    decorators: Vec<String>,
    methods: Vec<String>,
    base_classes: Vec<Reference>,
    description: Option<String>,
    file_path: Option<PathBuf>,
    treat_dot_as_module: bool,
    settings: RenderSettings,
}

impl DataClass {
    /// Create a model from its identity and fields.
    ///
    /// Fields are stably reordered so that fields without an assignment come
    /// first, which keeps the generated class valid Python. After reordering,
    /// a named field whose name was already seen is dropped with a warning.
    #[must_use]
    pub fn new(reference: Reference, mut fields: Vec<DataModelField>) -> Self {
        fields.sort_by_key(DataModelField::has_field_assignment);

        let mut names: HashSet<String> = HashSet::new();
        let mut unique: Vec<DataModelField> = Vec::with_capacity(fields.len());
        for field in fields {
            if !field.name.is_empty() && !names.insert(field.name.clone()) {
                tracing::warn!(
                    field = %field.name,
                    model = %reference.name,
                    "field name is duplicated; dropping the later definition"
                );
                continue;
            }
            unique.push(field);
        }

        Self {
            reference,
            fields: unique,
            frozen: false,
            keyword_only: false,
            dataclass_arguments: None,
            decorators: Vec::new(),
            methods: Vec::new(),
            base_classes: Vec::new(),
            description: None,
            file_path: None,
            treat_dot_as_module: false,
            settings: RenderSettings::default(),
        }
    }

    /// Legacy flag: render `frozen=True` when no explicit arguments are given.
    #[must_use]
    pub const fn with_frozen(mut self, frozen: bool) -> Self {
        self.frozen = frozen;
        self
    }

    /// Legacy flag: render `kw_only=True` when no explicit arguments are given.
    #[must_use]
    pub const fn with_keyword_only(mut self, keyword_only: bool) -> Self {
        self.keyword_only = keyword_only;
        self
    }

    /// Explicit decorator arguments. When non-empty they replace the legacy flags.
    #[must_use]
    pub fn with_dataclass_arguments(mut self, arguments: DataclassArguments) -> Self {
        self.dataclass_arguments = Some(arguments);
        self
    }

    /// Extra decorator lines rendered above `@dataclass`, verbatim.
    #[must_use]
    pub fn with_decorators(mut self, decorators: Vec<String>) -> Self {
        self.decorators = decorators;
        self
    }

    /// Method source rendered after the fields, each indented into the class body.
    #[must_use]
    pub fn with_methods(mut self, methods: Vec<String>) -> Self {
        self.methods = methods;
        self
    }

    #[must_use]
    pub fn with_base_classes(mut self, base_classes: Vec<Reference>) -> Self {
        self.base_classes = base_classes;
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn with_file_path(mut self, file_path: impl Into<PathBuf>) -> Self {
        self.file_path = Some(file_path.into());
        self
    }

    #[must_use]
    pub const fn with_treat_dot_as_module(mut self, treat_dot_as_module: bool) -> Self {
        self.treat_dot_as_module = treat_dot_as_module;
        self
    }

    #[must_use]
    pub fn with_settings(mut self, settings: RenderSettings) -> Self {
        self.settings = settings;
        self
    }

    #[must_use]
    pub const fn reference(&self) -> &Reference {
        &self.reference
    }

    /// Fields in render order.
    #[must_use]
    pub fn fields(&self) -> &[DataModelField] {
        &self.fields
    }

    #[must_use]
    pub const fn is_frozen(&self) -> bool {
        self.frozen
    }

    #[must_use]
    pub const fn is_keyword_only(&self) -> bool {
        self.keyword_only
    }

    #[must_use]
    pub const fn dataclass_arguments(&self) -> Option<&DataclassArguments> {
        self.dataclass_arguments.as_ref()
    }

    #[must_use]
    pub fn decorators(&self) -> &[String] {
        &self.decorators
    }

    #[must_use]
    pub fn methods(&self) -> &[String] {
        &self.methods
    }

    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    #[must_use]
    pub const fn settings(&self) -> &RenderSettings {
        &self.settings
    }

    #[must_use]
    pub fn class_name(&self) -> &str {
        self.reference.class_name()
    }

    /// Bases joined for the class header, empty when there are none.
    #[must_use]
    pub fn base_class(&self) -> String {
        self.base_classes
            .iter()
            .map(Reference::class_name)
            .collect::<Vec<&str>>()
            .join(", ")
    }

    #[must_use]
    pub fn module_path(&self) -> Vec<String> {
        self.reference
            .module_path(self.file_path.as_deref(), self.treat_dot_as_module)
    }

    #[must_use]
    pub fn module_name(&self) -> String {
        self.reference
            .module_name(self.file_path.as_deref(), self.treat_dot_as_module)
    }

    /// The resolved source of the decorator's arguments.
    #[must_use]
    pub fn decorator_source(&self) -> DecoratorSource<'_> {
        DecoratorSource::resolve(
            self.frozen,
            self.keyword_only,
            self.dataclass_arguments.as_ref(),
        )
    }

    /// The `@dataclass...` line.
    #[must_use]
    pub fn annotation(&self) -> String {
        self.decorator_source().annotation()
    }

    /// Imports the rendered class needs.
    #[must_use]
    pub fn imports(&self) -> Vec<Import> {
        let mut imports: Vec<Import> = vec![Import::dataclass()];
        for field in &self.fields {
            imports.extend(field.imports(&self.settings));
        }
        imports
    }

    /// Render the class to a string.
    ///
    /// Use [`DataClass::render_to_writer`] to stream into a fallible sink.
    #[must_use]
    pub fn render(&self) -> String {
        let mut output: Vec<u8> = Vec::new();
        if let Err(error) = codegen::emit_dataclass(self, &mut output) {
            tracing::error!(
                model = %self.class_name(),
                %error,
                "rendering into memory failed"
            );
            return String::new();
        }
        String::from_utf8(output).unwrap_or_default()
    }

    /// Render the class to `writer`.
    ///
    /// # Errors
    ///
    /// Returns any error raised by `writer`.
    pub fn render_to_writer<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        codegen::emit_dataclass(self, writer)
    }
}

//! Render Python dataclass models to source text.
//!
//! A [`DataClass`] holds a model's identity, its fields and the options of
//! its `@dataclass` decorator. The decorator options come either from the
//! legacy `frozen` / `keyword_only` flags or from an explicit
//! [`DataclassArguments`] mapping; a non-empty mapping always wins.
//!
//! ```
//! use dataclass_gen::{DataClass, DataModelField, Reference, Types};
//!
//! let model = DataClass::new(
//!     Reference::new("Pet", "Pet"),
//!     vec![DataModelField::new("name", Types::String, true)],
//! )
//! .with_frozen(true);
//!
//! assert_eq!(model.render(), "@dataclass(frozen=True)\nclass Pet:\n    name: str\n");
//! ```

mod arguments;
mod codegen;
mod dataclass;
mod error;
mod field;
mod imports;
mod python_literal;
mod reference;
mod settings;
mod types;

pub use arguments::{DataclassArguments, DecoratorSource};
pub use dataclass::DataClass;
pub use error::DataclassGenError;
pub use field::DataModelField;
pub use imports::{Import, Imports};
pub use reference::{Reference, sanitize_module_name};
pub use settings::RenderSettings;
pub use types::{DataType, Types};

use std::io::Write;
use std::path::Path;

/// Generate a Python module containing every model and write it to `writer`.
///
/// The writer can be any type implementing `Write`, such as `File`, `Vec<u8>`, or
/// `Cursor<Vec<u8>>`, enabling easy unit testing without file system interaction.
///
/// # Errors
///
/// Returns `DataclassGenError` if `models` is empty or writing to the writer fails.
pub fn generate_module_to_writer<W: Write>(
    models: &[DataClass],
    writer: &mut W,
) -> Result<(), DataclassGenError> {
    codegen::generate_module_to_writer(models, writer)
}

/// Generate a Python module containing every model and write it to a file.
///
/// # Errors
///
/// Returns `DataclassGenError` if `models` is empty, or creating or writing
/// the output file fails.
pub fn generate_module_file(
    models: &[DataClass],
    output_path: impl AsRef<Path>,
) -> Result<(), DataclassGenError> {
    if models.is_empty() {
        return Err("No models to generate".into());
    }
    let mut output_file: std::fs::File = std::fs::File::create(output_path)?;
    generate_module_to_writer(models, &mut output_file)
}

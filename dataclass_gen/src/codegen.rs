use crate::arguments::DecoratorSource;
use crate::dataclass::DataClass;
use crate::error::DataclassGenError;
use crate::imports::Imports;
use std::io::Write;

/// Header line written at the top of every generated module.
const GENERATED_HEADER: &str = "# Generated by dataclass-gen. Do not edit manually.";

/// Normalize description: trim and treat empty/whitespace as None.
fn normalize_description(s: Option<&str>) -> Option<&str> {
    s.map(str::trim).filter(|t| !t.is_empty())
}

/// Emit a docstring from a description, wrapped in triple quotes.
/// `line_prefix` is prepended to each line (`"    "` for class and field bodies).
fn emit_docstring<W: Write>(
    writer: &mut W,
    description: Option<&str>,
    line_prefix: &str,
) -> std::io::Result<()> {
    let Some(desc) = normalize_description(description) else {
        return Ok(());
    };
    writeln!(writer, "{line_prefix}\"\"\"")?;
    for line in desc.lines() {
        if line.trim().is_empty() {
            writeln!(writer)?;
        } else {
            writeln!(writer, "{line_prefix}{line}")?;
        }
    }
    writeln!(writer, "{line_prefix}\"\"\"")?;
    Ok(())
}

/// Emit a method's source indented into a class body. Blank lines stay empty.
fn emit_method<W: Write>(writer: &mut W, method: &str) -> std::io::Result<()> {
    for line in method.trim_end().lines() {
        if line.trim().is_empty() {
            writeln!(writer)?;
        } else {
            writeln!(writer, "    {line}")?;
        }
    }
    Ok(())
}

/// Emit a single dataclass: extra decorators, the `@dataclass` line, the
/// class header, then the body (docstring, fields, methods).
pub fn emit_dataclass<W: Write>(model: &DataClass, writer: &mut W) -> std::io::Result<()> {
    for decorator in model.decorators() {
        writeln!(writer, "{decorator}")?;
    }

    let source: DecoratorSource<'_> = model.decorator_source();
    tracing::debug!(
        model = %model.class_name(),
        explicit = matches!(source, DecoratorSource::Explicit(_)),
        "resolved dataclass decorator arguments"
    );
    writeln!(writer, "{}", source.annotation())?;

    let base_class: String = model.base_class();
    if base_class.is_empty() {
        writeln!(writer, "class {}:", model.class_name())?;
    } else {
        writeln!(writer, "class {}({base_class}):", model.class_name())?;
    }

    let description: Option<&str> = normalize_description(model.description());
    emit_docstring(writer, description, "    ")?;
    if model.fields().is_empty() && model.methods().is_empty() && description.is_none() {
        writeln!(writer, "    pass")?;
    }

    let settings = model.settings();
    for field in model.fields() {
        writeln!(writer, "{}", field.body_line(settings))?;
        emit_docstring(writer, field.docstring(settings), "    ")?;
    }

    let mut has_body: bool = description.is_some() || !model.fields().is_empty();
    for method in model.methods() {
        if has_body {
            writeln!(writer)?;
        }
        emit_method(writer, method)?;
        has_body = true;
    }
    Ok(())
}

/// Generate a Python module holding every model and write it to `writer`.
pub fn generate_module_to_writer<W: Write>(
    models: &[DataClass],
    writer: &mut W,
) -> Result<(), DataclassGenError> {
    if models.is_empty() {
        return Err("No models to generate".into());
    }

    let mut imports: Imports = Imports::default();
    for model in models {
        imports.extend(model.imports());
    }
    tracing::debug!(models = models.len(), "generating dataclass module");

    writeln!(writer, "{GENERATED_HEADER}")?;
    writeln!(writer)?;
    writeln!(writer, "from __future__ import annotations")?;
    writeln!(writer)?;
    for line in imports.lines() {
        writeln!(writer, "{line}")?;
    }

    for model in models {
        writeln!(writer)?;
        writeln!(writer)?;
        emit_dataclass(model, writer)?;
    }

    Ok(())
}

//! Settings for dataclass rendering.

/// Settings that control how type hints and field bodies are rendered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderSettings {
    /// When true, optional hints render as `T | None` instead of `Optional[T]`.
    ///
    /// **Default: false.** The `Optional` spelling works on every Python 3
    /// version; the union operator needs 3.10+ at runtime.
    pub use_union_operator: bool,

    /// When true, list hints render as `list[T]` instead of `List[T]`.
    ///
    /// **Default: false.**
    pub use_standard_collections: bool,

    /// When true, field descriptions are rendered as a docstring directly
    /// below the field.
    ///
    /// **Default: false.**
    pub use_field_description: bool,
}

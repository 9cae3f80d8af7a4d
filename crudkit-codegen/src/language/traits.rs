//! Language-agnostic code generation traits.

/// Trait for mapping canonical type tokens to language-specific details.
///
/// Type tokens are the canonical names produced by field resolution
/// (`Long`, `String`, `BigDecimal`, an entity name, ...).
pub trait TypeMapper {
    /// The target language name
    fn language(&self) -> &'static str;

    /// Fully qualified import needed to use `ty`, if any.
    fn import_for(&self, ty: &str) -> Option<&'static str>;

    /// Literal used where a value of `ty` is needed but none was given.
    fn default_literal(&self, ty: &str) -> &'static str;

    /// Collection type wrapping `ty` (e.g., `List<Course>`).
    fn collection_of(&self, ty: &str) -> String;

    /// Sample literal for `ty` used in generated tests.
    fn sample_literal(&self, ty: &str) -> String {
        self.default_literal(ty).to_string()
    }
}

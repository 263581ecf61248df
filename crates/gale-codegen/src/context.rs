//! Per-run translation context: the registries the emitter consults.
//!
//! Earlier transpilation passes walk the program and record what they
//! learn here -- which enums carry payloads, which names are protocols,
//! which calls must be renamed. The emitter then reads the registries
//! while it renders. One context belongs to one translation run; separate
//! runs use separate contexts, so nothing needs clearing and concurrent
//! translations cannot observe each other.

use serde::{Deserialize, Serialize};

use gale_ast::FunctionDeclaration;

/// A recorded rename for a function call.
///
/// The frontend records the Swift API name with its argument labels
/// (`index(of:)`); call sites query with the bare name, so lookups match
/// the stored name by prefix and the mangled type string exactly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionTranslation {
    /// Swift API name, argument labels included.
    pub source_api_name: String,
    /// Mangled signature the call site must match exactly.
    pub type_name: String,
    /// Kotlin prefix to emit in place of the Swift name.
    pub prefix: String,
    /// Kotlin parameter names, positionally matched to the call's
    /// labelled arguments.
    pub parameters: Vec<String>,
}

/// The registries for one translation run.
///
/// All lists are append-only while passes run and read-only during
/// emission. Lookups are linear scans; the lists stay small (one entry
/// per user-declared type or recorded translation) and first-match-wins
/// over insertion order is part of the contract.
#[derive(Debug, Clone, Default)]
pub struct TranslationContext {
    sealed_classes: Vec<String>,
    enum_classes: Vec<String>,
    protocols: Vec<String>,
    function_translations: Vec<FunctionTranslation>,
    pure_functions: Vec<FunctionDeclaration>,
}

impl TranslationContext {
    /// Create an empty context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an enum that lowers to a sealed class.
    pub fn add_sealed_class(&mut self, name: impl Into<String>) {
        self.sealed_classes.push(name.into());
    }

    /// Whether `name` is a registered sealed class.
    pub fn is_sealed_class(&self, name: &str) -> bool {
        self.sealed_classes.iter().any(|class| class == name)
    }

    /// Record an enum that lowers to an enum class.
    pub fn add_enum_class(&mut self, name: impl Into<String>) {
        self.enum_classes.push(name.into());
    }

    /// Whether `name` is a registered enum class.
    pub fn is_enum_class(&self, name: &str) -> bool {
        self.enum_classes.iter().any(|class| class == name)
    }

    /// Record a protocol name.
    pub fn add_protocol(&mut self, name: impl Into<String>) {
        self.protocols.push(name.into());
    }

    /// Whether `name` is a registered protocol.
    pub fn is_protocol(&self, name: &str) -> bool {
        self.protocols.iter().any(|protocol| protocol == name)
    }

    /// Record a function rename.
    pub fn add_function_translation(&mut self, translation: FunctionTranslation) {
        self.function_translations.push(translation);
    }

    /// Find the first recorded translation whose stored API name starts
    /// with the queried bare name and whose type string matches exactly.
    pub fn get_function_translation(
        &self,
        name: &str,
        type_name: &str,
    ) -> Option<&FunctionTranslation> {
        self.function_translations.iter().find(|translation| {
            translation.source_api_name.starts_with(name) && translation.type_name == type_name
        })
    }

    /// Record a function known to be free of side effects.
    pub fn add_pure_function(&mut self, function: FunctionDeclaration) {
        self.pure_functions.push(function);
    }

    /// Whether a declaration matches a recorded pure function, by name
    /// prefix and exact type string.
    pub fn is_pure_function(&self, function: &FunctionDeclaration) -> bool {
        self.pure_functions.iter().any(|pure| {
            pure.prefix.starts_with(&function.prefix)
                && pure.function_type == function.function_type
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn translation(api_name: &str, type_name: &str, prefix: &str) -> FunctionTranslation {
        FunctionTranslation {
            source_api_name: api_name.to_string(),
            type_name: type_name.to_string(),
            prefix: prefix.to_string(),
            parameters: Vec::new(),
        }
    }

    #[test]
    fn class_registries_are_exact_match() {
        let mut ctx = TranslationContext::new();
        ctx.add_sealed_class("Shape");
        ctx.add_enum_class("Direction");
        ctx.add_protocol("Drawable");
        assert!(ctx.is_sealed_class("Shape"));
        assert!(!ctx.is_sealed_class("Shap"));
        assert!(ctx.is_enum_class("Direction"));
        assert!(!ctx.is_enum_class("Shape"));
        assert!(ctx.is_protocol("Drawable"));
    }

    #[test]
    fn function_lookup_matches_stored_name_by_prefix() {
        let mut ctx = TranslationContext::new();
        ctx.add_function_translation(translation("index(of:)", "(Int) -> Int?", "indexOf"));
        let found = ctx
            .get_function_translation("index", "(Int) -> Int?")
            .expect("prefix match");
        assert_eq!(found.prefix, "indexOf");
    }

    #[test]
    fn function_lookup_requires_exact_type() {
        let mut ctx = TranslationContext::new();
        ctx.add_function_translation(translation("index(of:)", "(Int) -> Int?", "indexOf"));
        assert!(ctx.get_function_translation("index", "(String) -> Int?").is_none());
    }

    #[test]
    fn function_lookup_is_first_match_wins() {
        let mut ctx = TranslationContext::new();
        ctx.add_function_translation(translation("f(_:)", "(Int) -> Int", "first"));
        ctx.add_function_translation(translation("f(_:_:)", "(Int) -> Int", "second"));
        let found = ctx.get_function_translation("f", "(Int) -> Int").expect("match");
        assert_eq!(found.prefix, "first");
    }
}

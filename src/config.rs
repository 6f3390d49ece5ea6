//! Lexer configuration.
//!
//! Plain data only. Tables that never change between runs (keywords,
//! operator transitions) live next to the scanners as `lazy_static` statics.

/// Options for a single lexing session.
#[derive(Debug, Clone, Default)]
pub struct LexerConfig {
    /// Emit `=` for a bare `*`, `/` or `!`, as older builds of the scanner
    /// did. Off by default: each of them is emitted as itself.
    pub legacy_operator_fallback: bool,
    /// Name used in positions and error reports. `None` means `shell`.
    pub source_name: Option<String>,
}

impl LexerConfig {
    pub fn named(source_name: impl Into<String>) -> Self {
        LexerConfig {
            source_name: Some(source_name.into()),
            ..Default::default()
        }
    }

    pub fn with_legacy_operator_fallback(mut self, enabled: bool) -> Self {
        self.legacy_operator_fallback = enabled;
        self
    }
}

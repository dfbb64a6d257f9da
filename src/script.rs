//! Code-to-script translation hook for button payloads
//!
//! Buttons may carry an inline `code` payload that ends up in their `onclick`
//! attribute. The payload goes through a [`ScriptTranslator`] first, so a real
//! translator can be plugged in without touching the renderer. The default
//! [`PassthroughTranslator`] returns the payload unchanged.

use std::fmt::Debug;

/// Turns a button's code payload into the script text placed in `onclick`.
pub trait ScriptTranslator: Debug + Send + Sync {
    fn translate(&self, code: &str) -> String;
}

/// Identity translation
#[derive(Debug, Clone, Copy, Default)]
pub struct PassthroughTranslator;

impl PassthroughTranslator {
    pub fn new() -> Self {
        PassthroughTranslator
    }
}

impl ScriptTranslator for PassthroughTranslator {
    fn translate(&self, code: &str) -> String {
        code.to_string()
    }
}

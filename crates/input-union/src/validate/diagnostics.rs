use std::fmt;

use super::SchemaError;

/// Warnings and errors produced while building a schema.
#[derive(Default, Debug, Clone)]
pub struct Diagnostics(Vec<Diagnostic>);

#[derive(Debug, Clone)]
struct Diagnostic {
    error: SchemaError,
    /// Does it prevent the schema from being built?
    is_fatal: bool,
}

impl Diagnostics {
    /// Is any of the diagnostics fatal, i.e. a hard error?
    pub fn any_fatal(&self) -> bool {
        self.0.iter().any(|diagnostic| diagnostic.is_fatal)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterate non-fatal diagnostics.
    pub fn iter_warnings(&self) -> impl Iterator<Item = &SchemaError> {
        self.0
            .iter()
            .filter(|diagnostic| !diagnostic.is_fatal)
            .map(|diagnostic| &diagnostic.error)
    }

    /// Iterate fatal diagnostics.
    pub fn iter_errors(&self) -> impl Iterator<Item = &SchemaError> {
        self.0
            .iter()
            .filter(|diagnostic| diagnostic.is_fatal)
            .map(|diagnostic| &diagnostic.error)
    }

    pub fn iter_messages(&self) -> impl Iterator<Item = String> + '_ {
        self.0.iter().map(|diagnostic| diagnostic.error.to_string())
    }

    pub(crate) fn push_fatal(&mut self, error: SchemaError) {
        self.0.push(Diagnostic { error, is_fatal: true });
    }

    pub(crate) fn push_warning(&mut self, error: SchemaError) {
        self.0.push(Diagnostic { error, is_fatal: false });
    }
}

impl fmt::Display for Diagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, diagnostic) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            let level = if diagnostic.is_fatal { "error" } else { "warning" };
            write!(f, "{level}: {}", diagnostic.error)?;
        }
        Ok(())
    }
}

impl std::error::Error for Diagnostics {}

//! Uniqueness check over every name the generator declares.

use std::collections::HashMap;

use crate::error::GenerateError;

/// Names declared so far, with a human-readable origin for each.
#[derive(Debug, Default)]
pub(crate) struct SymbolTable {
    origins: HashMap<String, String>,
}

impl SymbolTable {
    /// Record `name`, failing if an earlier declaration already used it.
    pub(crate) fn register(
        &mut self,
        name: &str,
        origin: impl Into<String>,
    ) -> Result<(), GenerateError> {
        let origin = origin.into();
        if let Some(first) = self.origins.get(name) {
            return Err(GenerateError::DuplicateSymbol {
                name: name.to_string(),
                first: first.clone(),
                second: origin,
            });
        }
        self.origins.insert(name.to_string(), origin);
        Ok(())
    }

    pub(crate) fn len(&self) -> usize {
        self.origins.len()
    }
}

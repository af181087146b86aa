//! YAML specification parsing.

use crate::errors::SpecError;
use crate::types::ReportSpec;

/// Parse a serialized specification document into a [`ReportSpec`].
///
/// Rejects empty documents, documents with a blank id or template
/// reference, and unnamed variables. Variables may legitimately be
/// absent — a specification with none simply renders its template
/// against the seeded context.
pub fn parse_spec(source: &str) -> Result<ReportSpec, SpecError> {
    if source.trim().is_empty() {
        return Err(SpecError::Empty);
    }

    let spec: ReportSpec = serde_yaml::from_str(source)?;

    if spec.id.trim().is_empty() {
        return Err(SpecError::MissingId);
    }
    if spec.template_file.trim().is_empty() {
        return Err(SpecError::MissingTemplate { id: spec.id });
    }
    for (index, variable) in spec.variables.iter().enumerate() {
        if variable.name.trim().is_empty() {
            return Err(SpecError::UnnamedVariable { index });
        }
    }

    Ok(spec)
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

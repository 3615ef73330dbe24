use crate::dialect::Dialect;
use crate::error::TranscodeError;

/// The vault dialect. Every other dialect converts through it, so both directions are the
/// identity.
pub struct HostDialect;

impl Dialect for HostDialect {
    fn name(&self) -> &str {
        "host"
    }

    fn description(&self) -> &str {
        "Vault markdown with tab indentation and [[bracket]] links"
    }

    fn file_extensions(&self) -> &[&str] {
        &["md", "markdown"]
    }

    fn supports_import(&self) -> bool {
        true
    }

    fn supports_export(&self) -> bool {
        true
    }

    fn import(&self, source: &str) -> Result<String, TranscodeError> {
        Ok(source.replace("\r\n", "\n"))
    }

    fn export(&self, host: &str) -> Result<String, TranscodeError> {
        Ok(host.to_string())
    }
}

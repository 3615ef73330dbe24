use crate::dialect::Dialect;
use crate::error::TranscodeError;
use crate::rules::TranscodeRules;
use crate::transcoder::Transcoder;

/// The rich-text editor dialect.
#[derive(Default)]
pub struct RichDialect {
    transcoder: Transcoder,
}

impl RichDialect {
    pub fn new(rules: TranscodeRules) -> Self {
        Self {
            transcoder: Transcoder::new(rules),
        }
    }
}

impl Dialect for RichDialect {
    fn name(&self) -> &str {
        "rich"
    }

    fn description(&self) -> &str {
        "Editor markdown with space indentation, standard links and whitespace entities"
    }

    fn file_extensions(&self) -> &[&str] {
        &["mdx"]
    }

    fn supports_import(&self) -> bool {
        true
    }

    fn supports_export(&self) -> bool {
        true
    }

    fn import(&self, source: &str) -> Result<String, TranscodeError> {
        Ok(self.transcoder.to_host(source))
    }

    fn export(&self, host: &str) -> Result<String, TranscodeError> {
        Ok(self.transcoder.to_rich(host))
    }
}

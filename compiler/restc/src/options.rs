//! Flags shared by the file commands.

use rest_diagnostic::emitter::ColorMode;
use rest_tagger::EngineConfig;

/// Parsed command-line flags.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CliOptions {
    pub color: ColorMode,
    /// Maximum diagnostics reported (0 = unlimited).
    pub error_limit: usize,
    pub validate_urls: bool,
    pub validate_references: bool,
}

impl Default for CliOptions {
    fn default() -> Self {
        CliOptions {
            color: ColorMode::Auto,
            error_limit: 0,
            validate_urls: true,
            validate_references: true,
        }
    }
}

impl CliOptions {
    /// Split `args` into flags and positional arguments.
    ///
    /// Flags may appear anywhere. Unknown flags are an error.
    pub fn parse(args: &[String]) -> Result<(CliOptions, Vec<String>), String> {
        let mut options = CliOptions::default();
        let mut positional = Vec::new();

        for arg in args {
            if let Some(value) = arg.strip_prefix("--color=") {
                options.color = ColorMode::parse(value)
                    .ok_or_else(|| format!("invalid color mode '{value}' (auto, always, never)"))?;
            } else if let Some(value) = arg.strip_prefix("--error-limit=") {
                options.error_limit = value
                    .parse()
                    .map_err(|_| format!("invalid error limit '{value}'"))?;
            } else if arg == "--no-url-check" {
                options.validate_urls = false;
            } else if arg == "--no-reference-check" {
                options.validate_references = false;
            } else if arg.starts_with("--") {
                return Err(format!("unknown option '{arg}'"));
            } else {
                positional.push(arg.clone());
            }
        }

        Ok((options, positional))
    }

    pub fn engine_config(&self) -> EngineConfig {
        EngineConfig::default()
            .with_error_limit(self.error_limit)
            .with_url_validation(self.validate_urls)
            .with_reference_validation(self.validate_references)
    }
}

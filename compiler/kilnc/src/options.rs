//! Flags shared by `run`, `parse`, and `check`.

use kiln_eval::{DuplicatePolicy, EvalConfig};

use crate::CommandError;

/// Parsed command arguments: the payload path plus evaluation settings.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CliOptions {
    pub path: Option<String>,
    pub config: EvalConfig,
}

impl CliOptions {
    /// Parse the arguments following the command name.
    ///
    /// Flags may appear before or after the path.
    pub fn parse(args: &[String]) -> Result<Self, CommandError> {
        let mut options = CliOptions::default();

        for arg in args {
            if let Some(depth) = arg.strip_prefix("--max-depth=") {
                let depth = depth.parse::<usize>().ok().filter(|&d| d > 0).ok_or_else(|| {
                    CommandError::Usage(format!(
                        "invalid --max-depth value '{depth}': expected a positive integer"
                    ))
                })?;
                options.config = options.config.with_max_call_depth(depth);
            } else if arg == "--allow-redefinition" {
                options.config = options.config.with_duplicates(DuplicatePolicy::LastWins);
            } else if arg.starts_with('-') {
                return Err(CommandError::Usage(format!("unknown option '{arg}'")));
            } else if options.path.is_none() {
                options.path = Some(arg.clone());
            } else {
                return Err(CommandError::Usage(format!("unexpected argument '{arg}'")));
            }
        }

        Ok(options)
    }
}

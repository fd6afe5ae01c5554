//! Project configuration for `chart-doc-gen`.
//!
//! Optional defaults that would otherwise have to be repeated on every
//! invocation. Command-line flags always take precedence.

pub(crate) mod loader;

pub(crate) use loader::load_cli_config;

use std::path::{Path, PathBuf};

use serde::Deserialize;

use loader::expand_path;

#[derive(Debug, Deserialize, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub(crate) struct CliConfig {
    /// Template used when `--template` is not given.
    pub template: Option<String>,

    /// Defaults skipped when deriving the `--set` example, on top of the
    /// built-in list (`""`, `{}`, `[]`, `true`, `false`, ...).
    #[serde(default)]
    pub example_skip_defaults: Vec<String>,

    /// Directory of the file these settings were read from.
    #[serde(skip)]
    pub source_dir: Option<PathBuf>,
}

impl CliConfig {
    fn located_in(self, dir: Option<&Path>) -> Self {
        Self {
            source_dir: dir.map(Path::to_path_buf),
            ..self
        }
    }

    /// Configured template, with a relative path taken from the config
    /// file's own directory.
    pub(crate) fn template_path(&self) -> Option<PathBuf> {
        let template = expand_path(self.template.as_deref()?);
        match &self.source_dir {
            Some(dir) if template.is_relative() => Some(dir.join(template)),
            _ => Some(template),
        }
    }
}

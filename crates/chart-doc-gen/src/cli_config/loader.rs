//! Locating and reading `.chart-doc-gen.toml`.
//!
//! A chart can carry its own settings next to its values file, so the chart
//! directory is searched before the working directory. The user-wide file at
//! `~/.config/chart-doc-gen.toml` is the last resort. Only the first file
//! found is read; settings are never merged across files.

use std::path::{Path, PathBuf};

use super::CliConfig;

const CONFIG_FILENAME: &str = ".chart-doc-gen.toml";
const GLOBAL_CONFIG_DIR: &str = ".config";
const GLOBAL_CONFIG_FILENAME: &str = "chart-doc-gen.toml";

/// Settings for a chart living in `chart_dir`, or defaults when no config
/// file applies.
pub(crate) fn load_cli_config(chart_dir: &Path) -> CliConfig {
    config_candidates(chart_dir, home_dir().as_deref())
        .into_iter()
        .find(|candidate| candidate.is_file())
        .map(|path| read_config(&path))
        .unwrap_or_default()
}

/// Config file locations for a chart, highest precedence first.
fn config_candidates(chart_dir: &Path, home: Option<&Path>) -> Vec<PathBuf> {
    let mut candidates = Vec::with_capacity(3);
    // An empty chart dir means the values file sits in the working directory.
    if !chart_dir.as_os_str().is_empty() {
        candidates.push(chart_dir.join(CONFIG_FILENAME));
    }
    candidates.push(PathBuf::from(CONFIG_FILENAME));
    if let Some(home) = home {
        candidates.push(home.join(GLOBAL_CONFIG_DIR).join(GLOBAL_CONFIG_FILENAME));
    }
    candidates
}

/// Read one config file. A broken file is reported and ignored so that the
/// README can still be produced from flags alone.
fn read_config(path: &Path) -> CliConfig {
    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) => {
            tracing::warn!(?path, error = %e, "Ignoring unreadable chart-doc-gen config");
            return CliConfig::default();
        }
    };

    match toml::from_str::<CliConfig>(&contents) {
        Ok(config) => {
            tracing::debug!(?path, "Using chart-doc-gen config");
            config.located_in(path.parent())
        }
        Err(e) => {
            tracing::warn!(?path, error = %e, "Ignoring malformed chart-doc-gen config");
            CliConfig::default()
        }
    }
}

/// Expand a configured path, resolving `~` to the home directory.
pub(crate) fn expand_path(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = home_dir() {
            return home.join(rest);
        }
    }
    PathBuf::from(path)
}

fn home_dir() -> Option<PathBuf> {
    std::env::var("HOME").ok().map(PathBuf::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_path_tilde() {
        let expanded = expand_path("~/charts/readme.tera");
        assert!(expanded.to_str().unwrap().ends_with("charts/readme.tera"));
        assert!(!expanded.to_str().unwrap().starts_with('~'));
    }

    #[test]
    fn test_expand_path_absolute() {
        assert_eq!(
            expand_path("/usr/share/chart-doc-gen/readme.tera"),
            PathBuf::from("/usr/share/chart-doc-gen/readme.tera")
        );
    }

    #[test]
    fn test_chart_dir_is_searched_first() {
        let candidates = config_candidates(Path::new("charts/kubedb"), Some(Path::new("/home/dev")));
        assert_eq!(
            candidates,
            vec![
                PathBuf::from("charts/kubedb/.chart-doc-gen.toml"),
                PathBuf::from(".chart-doc-gen.toml"),
                PathBuf::from("/home/dev/.config/chart-doc-gen.toml"),
            ]
        );
    }

    #[test]
    fn test_values_in_working_dir_has_no_chart_candidate() {
        let candidates = config_candidates(Path::new(""), None);
        assert_eq!(candidates, vec![PathBuf::from(".chart-doc-gen.toml")]);
    }

    #[test]
    fn test_chart_config_wins_over_global() {
        let home = tempfile::tempdir().unwrap();
        let chart = tempfile::tempdir().unwrap();
        let global = home.path().join(GLOBAL_CONFIG_DIR);
        std::fs::create_dir_all(&global).unwrap();
        std::fs::write(global.join(GLOBAL_CONFIG_FILENAME), "template = \"global.tera\"\n").unwrap();
        std::fs::write(chart.path().join(CONFIG_FILENAME), "template = \"chart.tera\"\n").unwrap();

        let found = config_candidates(chart.path(), Some(home.path()))
            .into_iter()
            .find(|candidate| candidate.is_file())
            .unwrap();
        assert_eq!(found, chart.path().join(CONFIG_FILENAME));
    }

    #[test]
    fn test_parse_config_toml() {
        let toml_str = r#"
template = "hack/readme.tera"
example-skip-defaults = ["IfNotPresent", "ClusterIP"]
"#;
        let config: CliConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.template.as_deref(), Some("hack/readme.tera"));
        assert_eq!(config.example_skip_defaults, vec!["IfNotPresent", "ClusterIP"]);
        assert!(config.source_dir.is_none());
    }

    #[test]
    fn test_read_config_records_its_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        std::fs::write(&path, "template = \"custom.tera\"\n").unwrap();

        let config = read_config(&path);
        assert_eq!(config.template.as_deref(), Some("custom.tera"));
        assert_eq!(config.template_path(), Some(dir.path().join("custom.tera")));
    }

    #[test]
    fn test_malformed_config_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        std::fs::write(&path, "template = [unterminated\n").unwrap();

        assert_eq!(read_config(&path), CliConfig::default());
    }

    #[test]
    fn test_missing_config_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(read_config(&dir.path().join("absent.toml")), CliConfig::default());
    }
}

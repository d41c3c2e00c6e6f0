//! Configuration file loader with multi-source merging

use super::file_config::{ConfigError, FileConfig};
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};

/// Prefix for environment overrides.
pub const ENV_PREFIX: &str = "BEDROCK_ASK_";

const PROJECT_FILES: [&str; 2] = ["bedrock-ask.toml", ".bedrock-ask.toml"];

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (lowest to highest):
    /// 1. Default values
    /// 2. Global: `$XDG_CONFIG_HOME/bedrock-ask/config.toml`
    /// 3. Project root: `./bedrock-ask.toml` or `./.bedrock-ask.toml`
    /// 4. Explicit config path (if provided)
    /// 5. Environment: `BEDROCK_ASK_MODEL_ID`, `BEDROCK_ASK_REGION`,
    ///    `BEDROCK_ASK_<SECTION>__<KEY>`
    pub fn load(config_path: Option<&Path>) -> Result<FileConfig, ConfigError> {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(&global_path));
            }
        }

        if let Some(project_path) = Self::project_config_path() {
            figment = figment.merge(Toml::file(&project_path));
        }

        if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::Invalid(format!(
                    "config file not found: {}",
                    path.display()
                )));
            }
            figment = figment.merge(Toml::file(path));
        }

        figment
            .merge(Self::env_provider())
            .extract()
            .map_err(|e| ConfigError::Load(Box::new(e)))
    }

    /// Defaults plus environment overrides, skipping every file (for --no-config)
    pub fn load_without_files() -> Result<FileConfig, ConfigError> {
        Figment::new()
            .merge(Serialized::defaults(FileConfig::default()))
            .merge(Self::env_provider())
            .extract()
            .map_err(|e| ConfigError::Load(Box::new(e)))
    }

    /// `BEDROCK_ASK_MODEL_ID` and `BEDROCK_ASK_REGION` are shorthands for the
    /// `[bedrock]` keys; everything else uses `__` as the section separator.
    fn env_provider() -> Env {
        Env::prefixed(ENV_PREFIX)
            .map(|key| {
                if key.as_str().eq_ignore_ascii_case("model_id") {
                    "bedrock.model_id".into()
                } else if key.as_str().eq_ignore_ascii_case("region") {
                    "bedrock.region".into()
                } else {
                    key.as_str().to_string().into()
                }
            })
            .split("__")
    }

    /// Get the global config file path
    ///
    /// Returns XDG_CONFIG_HOME/bedrock-ask/config.toml if set,
    /// otherwise falls back to ~/.config/bedrock-ask/config.toml
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("bedrock-ask").join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        PROJECT_FILES
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }

    /// Describe the sources merged for this invocation (for `show-config`)
    ///
    /// Mirrors [`load`](Self::load) / [`load_without_files`](Self::load_without_files):
    /// files are reported as skipped under `--no-config`, and the explicit
    /// path is listed when one was given.
    pub fn describe_config_sources(config_path: Option<&Path>, no_config: bool) -> String {
        let mut lines = vec!["Configuration sources (in priority order):".to_string()];

        let env_keys = Self::env_keys_set();
        if env_keys.is_empty() {
            lines.push(format!("  [     ] Environment: {ENV_PREFIX}*"));
        } else {
            lines.push(format!("  [FOUND] Environment: {}", env_keys.join(", ")));
        }

        if no_config {
            lines.push("  [SKIP ] Files: disabled by --no-config".to_string());
        } else {
            if let Some(path) = config_path {
                let marker = if path.exists() { "FOUND" } else { "MISS " };
                lines.push(format!("  [{marker}] Explicit: {}", path.display()));
            }

            match Self::project_config_path() {
                Some(path) => lines.push(format!("  [FOUND] Project: {}", path.display())),
                None => lines.push(
                    "  [     ] Project: ./bedrock-ask.toml or ./.bedrock-ask.toml".to_string(),
                ),
            }

            if let Some(path) = Self::global_config_path() {
                let marker = if path.exists() { "FOUND" } else { "     " };
                lines.push(format!("  [{marker}] Global:  {}", path.display()));
            }
        }

        lines.push("  [FOUND] Default: built-in defaults".to_string());
        lines.join("\n")
    }

    /// Names of the `BEDROCK_ASK_*` variables currently set, sorted.
    fn env_keys_set() -> Vec<String> {
        let mut keys: Vec<String> = std::env::vars_os()
            .filter_map(|(key, _)| key.into_string().ok())
            .filter(|key| key.len() > ENV_PREFIX.len() && key.starts_with(ENV_PREFIX))
            .collect();
        keys.sort();
        keys
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    /// Point the global config lookup into the jail.
    fn isolate_global_config(jail: &mut Jail) {
        let xdg = jail.directory().join("xdg");
        jail.set_env("XDG_CONFIG_HOME", xdg.display());
    }

    #[test]
    fn test_defaults_without_files() {
        Jail::expect_with(|jail| {
            isolate_global_config(jail);
            let config = ConfigLoader::load(None).unwrap();
            assert_eq!(config, FileConfig::default());
            Ok(())
        });
    }

    #[test]
    fn test_project_file_overrides_defaults() {
        Jail::expect_with(|jail| {
            isolate_global_config(jail);
            jail.create_file(
                "bedrock-ask.toml",
                r#"
                [bedrock]
                region = "eu-central-1"
                "#,
            )?;

            let config = ConfigLoader::load(None).unwrap();
            assert_eq!(config.bedrock.region, "eu-central-1");
            assert_eq!(config.bedrock.model_id, "amazon.titan-text-express-v1");
            Ok(())
        });
    }

    #[test]
    fn test_explicit_file_overrides_global_and_project() {
        Jail::expect_with(|jail| {
            isolate_global_config(jail);
            std::fs::create_dir_all(jail.directory().join("xdg/bedrock-ask")).unwrap();
            jail.create_file(
                "xdg/bedrock-ask/config.toml",
                r#"
                [bedrock]
                max_tokens = 100
                region = "ap-south-1"
                "#,
            )?;
            jail.create_file(
                ".bedrock-ask.toml",
                r#"
                [bedrock]
                region = "us-west-2"
                "#,
            )?;
            jail.create_file(
                "custom.toml",
                r#"
                [bedrock]
                model_id = "amazon.titan-text-premier-v1:0"
                "#,
            )?;

            let config = ConfigLoader::load(Some(Path::new("custom.toml"))).unwrap();
            assert_eq!(config.bedrock.max_tokens, 100);
            assert_eq!(config.bedrock.region, "us-west-2");
            assert_eq!(config.bedrock.model_id, "amazon.titan-text-premier-v1:0");
            Ok(())
        });
    }

    #[test]
    fn test_env_shorthands_win_over_files() {
        Jail::expect_with(|jail| {
            isolate_global_config(jail);
            jail.create_file(
                "bedrock-ask.toml",
                r#"
                [bedrock]
                model_id = "from-file"
                "#,
            )?;
            jail.set_env("BEDROCK_ASK_MODEL_ID", "amazon.titan-text-lite-v1");
            jail.set_env("BEDROCK_ASK_REGION", "eu-west-1");
            jail.set_env("BEDROCK_ASK_SERVER__BIND", "0.0.0.0:8080");

            let config = ConfigLoader::load(None).unwrap();
            assert_eq!(config.bedrock.model_id, "amazon.titan-text-lite-v1");
            assert_eq!(config.bedrock.region, "eu-west-1");
            assert_eq!(config.server.bind, "0.0.0.0:8080");
            Ok(())
        });
    }

    #[test]
    fn test_load_without_files_still_reads_env() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "bedrock-ask.toml",
                r#"
                [bedrock]
                region = "ignored"
                "#,
            )?;
            jail.set_env("BEDROCK_ASK_BEDROCK__MAX_TOKENS", "64");

            let config = ConfigLoader::load_without_files().unwrap();
            assert_eq!(config.bedrock.region, "us-east-1");
            assert_eq!(config.bedrock.max_tokens, 64);
            Ok(())
        });
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        Jail::expect_with(|jail| {
            isolate_global_config(jail);
            let err = ConfigLoader::load(Some(Path::new("nope.toml"))).unwrap_err();
            assert!(matches!(err, ConfigError::Invalid(_)));
            Ok(())
        });
    }

    #[test]
    fn test_global_config_path_names_app() {
        let path = ConfigLoader::global_config_path();
        if let Some(path) = path {
            assert!(path.to_string_lossy().contains("bedrock-ask"));
        }
    }

    #[test]
    fn test_describe_sources_lists_explicit_path_and_env() {
        Jail::expect_with(|jail| {
            isolate_global_config(jail);
            jail.create_file("custom.toml", "[bedrock]\nregion = \"eu-west-1\"\n")?;
            jail.create_file("bedrock-ask.toml", "")?;
            jail.set_env("BEDROCK_ASK_REGION", "ap-south-1");

            let text = ConfigLoader::describe_config_sources(Some(Path::new("custom.toml")), false);

            assert!(text.contains("[FOUND] Environment: BEDROCK_ASK_REGION"));
            assert!(text.contains("[FOUND] Explicit: custom.toml"));
            assert!(text.contains("[FOUND] Project: bedrock-ask.toml"));
            Ok(())
        });
    }

    #[test]
    fn test_describe_sources_skips_files_without_config() {
        Jail::expect_with(|jail| {
            isolate_global_config(jail);
            jail.create_file("bedrock-ask.toml", "")?;

            let text = ConfigLoader::describe_config_sources(Some(Path::new("custom.toml")), true);

            assert!(text.contains("[SKIP ] Files: disabled by --no-config"));
            assert!(!text.contains("Project:"));
            assert!(!text.contains("Explicit:"));
            assert!(!text.contains("Global:"));
            Ok(())
        });
    }

    #[test]
    fn test_describe_sources_marks_missing_explicit_path() {
        Jail::expect_with(|jail| {
            isolate_global_config(jail);
            let text = ConfigLoader::describe_config_sources(Some(Path::new("nope.toml")), false);
            assert!(text.contains("[MISS ] Explicit: nope.toml"));
            assert!(text.contains("[     ] Environment: BEDROCK_ASK_*"));
            Ok(())
        });
    }
}

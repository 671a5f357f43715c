use anyhow::Context;
use limud_config::LimudConfig;

use crate::cli::GlobalFlags;

/// Load layered configuration, then apply command-line overrides.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<LimudConfig> {
    let config = LimudConfig::load_with_dotenv().context("failed to load limud configuration")?;
    apply_overrides(config, flags)
}

fn apply_overrides(mut config: LimudConfig, flags: &GlobalFlags) -> anyhow::Result<LimudConfig> {
    if let Some(data_dir) = &flags.data_dir {
        if data_dir.trim().is_empty() {
            anyhow::bail!("invalid --data-dir: must not be empty");
        }
        config.storage.data_dir.clone_from(data_dir);
    }
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::apply_overrides;
    use crate::cli::{GlobalFlags, OutputFormat};
    use limud_config::LimudConfig;

    fn flags(data_dir: Option<&str>) -> GlobalFlags {
        GlobalFlags {
            format: OutputFormat::Json,
            quiet: false,
            verbose: false,
            data_dir: data_dir.map(str::to_string),
        }
    }

    #[test]
    fn data_dir_flag_wins() {
        let config = apply_overrides(LimudConfig::default(), &flags(Some("/tmp/words"))).unwrap();
        assert_eq!(config.storage.data_dir, "/tmp/words");
    }

    #[test]
    fn no_flag_keeps_config() {
        let config = apply_overrides(LimudConfig::default(), &flags(None)).unwrap();
        assert_eq!(config.storage.data_dir, ".limud");
    }

    #[test]
    fn blank_flag_is_rejected() {
        assert!(apply_overrides(LimudConfig::default(), &flags(Some(" "))).is_err());
    }
}

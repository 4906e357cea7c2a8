use crate::config::Config;
use crate::errors::{AppError, AppResult};
use std::path::Path;
use std::process::Command;

pub struct ConfigLogic;

impl ConfigLogic {
    /// Print the effective configuration (file values plus defaults and
    /// command-line overrides) as YAML.
    pub fn print(cfg: &Config, path: &Path) -> AppResult<()> {
        println!("# {}", path.display());
        print!("{}", serde_yaml::to_string(cfg)?);
        Ok(())
    }

    pub fn edit(path: &Path, editor: &Option<String>) -> AppResult<()> {
        let ed = editor
            .clone()
            .or_else(|| std::env::var("EDITOR").ok())
            .unwrap_or_else(|| "nano".into());

        Command::new(ed)
            .arg(path)
            .status()
            .map_err(|e| AppError::Config(e.to_string()))?;

        Ok(())
    }
}

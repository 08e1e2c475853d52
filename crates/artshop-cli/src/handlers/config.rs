use crate::args::ConfigCommand;
use crate::config::Config;
use anyhow::Result;
use std::path::Path;

pub fn handle(command: ConfigCommand, config_path: &Path) -> Result<()> {
    match command {
        ConfigCommand::Show => {
            let config = Config::load_from(config_path)?;
            println!("config: {}", config_path.display());
            println!("api_url = {}", config.api_url);
            Ok(())
        }
        ConfigCommand::SetUrl { url } => {
            let mut config = Config::load_from(config_path)?;
            config.api_url = url;
            config.save_to(config_path)?;
            println!("Сохранено: {}", config_path.display());
            Ok(())
        }
    }
}

//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, ConfigCommand, DatasetCommand, JobCommand, OutputFormat};
use crate::client::ZosmfClient;
use crate::config::ConnectionProfile;
use crate::datasets::DatasetInfo;
use crate::error::Result;
use serde::Serialize;
use serde_json::json;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        let profile = self.load_profile()?;

        match &self.cli.command {
            Commands::Config(ConfigCommand::Show) => {
                self.output(&profile.redacted());
                Ok(())
            }
            Commands::Datasets(command) => {
                let client = ZosmfClient::new(profile)?;
                self.datasets(&client, command).await
            }
            Commands::Jobs(JobCommand::List) => {
                let client = ZosmfClient::new(profile)?;
                let jobs = client.jobs().list().await?;
                self.output(&jobs);
                Ok(())
            }
        }
    }

    /// An explicit config file wins; otherwise use the full precedence chain
    fn load_profile(&self) -> Result<ConnectionProfile> {
        match &self.cli.config {
            Some(path) => ConnectionProfile::from_file(path),
            None => ConnectionProfile::load(),
        }
    }

    async fn datasets(&self, client: &ZosmfClient, command: &DatasetCommand) -> Result<()> {
        let datasets = client.datasets();
        match command {
            DatasetCommand::List => {
                let list = datasets.list().await?;
                self.output(&list);
            }
            DatasetCommand::Get { name } => {
                let info = datasets.get(name).await?;
                self.output(&info);
            }
            DatasetCommand::Create { name, dataset_type } => {
                let info = DatasetInfo::new(name.as_str(), dataset_type.as_str());
                datasets.create(&info).await?;
                self.output(&json!({ "created": info }));
            }
            DatasetCommand::Delete { name } => {
                datasets.delete(name).await?;
                self.output(&json!({ "deleted": name }));
            }
        }
        Ok(())
    }

    fn output<T: Serialize + ?Sized>(&self, value: &T) {
        let rendered = match self.cli.format {
            OutputFormat::Json => serde_json::to_string(value),
            OutputFormat::Pretty => serde_json::to_string_pretty(value),
        };
        println!("{}", rendered.unwrap_or_default());
    }
}

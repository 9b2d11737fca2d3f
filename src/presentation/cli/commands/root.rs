use anyhow::Result;

use crate::domain::entities::get_config::GetConfig;

/// Handler for the root command: prints the primary root, or every root
pub struct RootCommand {
    pub all: bool,
}

impl RootCommand {
    pub fn new(all: bool) -> Self {
        Self { all }
    }

    pub fn execute(&self, config: &GetConfig) -> Result<()> {
        for root in self.roots(config) {
            println!("{root}");
        }
        Ok(())
    }

    fn roots(&self, config: &GetConfig) -> Vec<String> {
        let roots = config.roots.iter().map(|root| root.display().to_string());
        if self.all {
            roots.collect()
        } else {
            roots.take(1).collect()
        }
    }
}

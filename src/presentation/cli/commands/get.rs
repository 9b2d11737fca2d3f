use anyhow::Result;
use colored::Colorize;
use std::env;
use std::sync::Arc;

use crate::application::use_cases::get_repository::{
    GetOptions, GetOutcome, GetRepositoryUseCase,
};
use crate::common::error::GetError;
use crate::domain::entities::get_config::GetConfig;
use crate::domain::value_objects::vcs_type::VcsType;
use crate::infrastructure::process::ProcessCommandRunner;
use crate::infrastructure::vcs::VcsFactory;

/// Handler for the get command
pub struct GetCommand {
    pub references: Vec<String>,
    pub update: bool,
    pub private: bool,
    pub shallow: bool,
    pub branch: Option<String>,
    pub vcs: Option<String>,
    pub silent: bool,
    pub parallel: bool,
    pub jobs: Option<usize>,
}

impl GetCommand {
    fn options(&self) -> Result<GetOptions, GetError> {
        let vcs = self
            .vcs
            .as_deref()
            .map(str::parse::<VcsType>)
            .transpose()?;

        Ok(GetOptions {
            update: self.update,
            shallow: self.shallow,
            branch: self.branch.clone().filter(|branch| !branch.is_empty()),
            private: self.private,
            // Interleaved output of concurrent clones is unreadable
            silent: self.silent || self.parallel,
            vcs,
        })
    }

    pub async fn execute(&self, config: Arc<GetConfig>) -> Result<()> {
        let options = self.options()?;
        let cwd = env::current_dir()?;

        let factory = VcsFactory::new(Arc::new(ProcessCommandRunner::new()));
        let use_case = GetRepositoryUseCase::new(config, Arc::new(factory));

        if let [reference] = self.references.as_slice() {
            let outcome = use_case.execute(reference, &options, &cwd).await?;
            Self::print_outcome(&outcome);
            return Ok(());
        }

        let jobs = if self.parallel {
            self.jobs.unwrap_or_else(num_cpus::get)
        } else {
            1
        };
        let reports = use_case
            .execute_many(&self.references, &options, &cwd, jobs)
            .await;

        let total = reports.len();
        let mut failed = 0;
        for report in reports {
            match report.result {
                Ok(outcome) => Self::print_outcome(&outcome),
                Err(error) => {
                    failed += 1;
                    eprintln!("{} {}: {}", "✗".red().bold(), report.reference.bold(), error);
                }
            }
        }

        if failed > 0 {
            return Err(anyhow::anyhow!(
                "{} of {} repositories failed",
                failed,
                total
            ));
        }
        Ok(())
    }

    fn print_outcome(outcome: &GetOutcome) {
        let path = outcome.path().display();
        match outcome {
            GetOutcome::Cloned { vcs, .. } => {
                eprintln!("{} {} ({})", "   clone".green().bold(), path, vcs)
            }
            GetOutcome::Updated { vcs, .. } => {
                eprintln!("{} {} ({})", "  update".blue().bold(), path, vcs)
            }
            GetOutcome::Skipped { .. } => {
                eprintln!("{} {}", "  exists".yellow().bold(), path)
            }
        }
    }
}

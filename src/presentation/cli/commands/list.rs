use anyhow::Result;
use std::io::Write;

use crate::application::use_cases::list_repositories::{ListOptions, ListRepositoriesUseCase};
use crate::domain::entities::get_config::GetConfig;
use crate::domain::entities::local_repository::LocalRepository;
use crate::domain::value_objects::vcs_type::VcsType;
use crate::presentation::cli::OutputFormat;

/// Handler for the list command
pub struct ListCommand {
    pub query: Option<String>,
    pub exact: bool,
    pub full_path: bool,
    pub vcs: Option<String>,
    pub output: OutputFormat,
}

impl ListCommand {
    pub fn execute(&self, config: &GetConfig) -> Result<()> {
        let mut options = ListOptions::new().with_exact(self.exact);
        if let Some(query) = &self.query {
            options = options.with_query(query.clone());
        }
        if let Some(vcs) = &self.vcs {
            let vcs: VcsType = vcs
                .parse()
                .map_err(crate::common::error::GetError::from)?;
            options = options.with_vcs(vcs);
        }

        let repositories = ListRepositoriesUseCase::new(config.roots.clone()).execute(&options);

        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        self.render(&repositories, &mut out)
    }

    fn render(&self, repositories: &[LocalRepository], out: &mut impl Write) -> Result<()> {
        match self.output {
            OutputFormat::Json => {
                writeln!(out, "{}", serde_json::to_string_pretty(repositories)?)?;
            }
            OutputFormat::Yaml => {
                write!(out, "{}", serde_yaml::to_string(repositories)?)?;
            }
            OutputFormat::Text => {
                for repository in repositories {
                    if self.full_path {
                        writeln!(out, "{}", repository.path.display())?;
                    } else {
                        writeln!(out, "{}", repository.relative)?;
                    }
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn repositories() -> Vec<LocalRepository> {
        vec![LocalRepository::new(
            Path::new("/src"),
            Path::new("/src/github.com/motemen/ghq"),
            VcsType::Git,
        )
        .unwrap()]
    }

    fn render(command: &ListCommand) -> String {
        let mut buffer = Vec::new();
        command.render(&repositories(), &mut buffer).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    fn command(output: OutputFormat, full_path: bool) -> ListCommand {
        ListCommand {
            query: None,
            exact: false,
            full_path,
            vcs: None,
            output,
        }
    }

    #[test]
    fn test_text_output() {
        assert_eq!(render(&command(OutputFormat::Text, false)), "github.com/motemen/ghq\n");
        assert_eq!(
            render(&command(OutputFormat::Text, true)),
            "/src/github.com/motemen/ghq\n"
        );
    }

    #[test]
    fn test_structured_output() {
        let json: serde_json::Value =
            serde_json::from_str(&render(&command(OutputFormat::Json, false))).unwrap();
        assert_eq!(json[0]["relative"], "github.com/motemen/ghq");
        assert_eq!(json[0]["vcs"], "git");

        let yaml = render(&command(OutputFormat::Yaml, false));
        assert!(yaml.contains("relative: github.com/motemen/ghq"));
    }
}

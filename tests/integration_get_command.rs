//! End-to-end tests of the get use case against a recording runner

mod common;

use common::test_helpers::TestEnvironment;
use pretty_assertions::assert_eq;
use vcs_get::application::use_cases::get_repository::{GetOptions, GetOutcome};
use vcs_get::common::error::GetError;
use vcs_get::domain::value_objects::vcs_type::VcsType;

#[tokio::test]
async fn test_get_shorthand_clones_into_root() {
    let env = TestEnvironment::new();
    let dir = env.path("github.com/motemen/ghq-test-repo");

    let outcome = env
        .use_case
        .execute("motemen/ghq-test-repo", &GetOptions::new(), &env.root)
        .await
        .unwrap();

    assert_eq!(
        outcome,
        GetOutcome::Cloned {
            path: dir.clone(),
            vcs: VcsType::Git,
        }
    );
    assert_eq!(
        env.runner.command_lines(),
        vec![format!(
            "git clone https://github.com/motemen/ghq-test-repo {}",
            dir.display()
        )]
    );
}

#[tokio::test]
async fn test_get_private_shallow_branch() {
    let env = TestEnvironment::new();
    let dir = env.path("github.com/motemen/ghq-test-repo");

    env.use_case
        .execute(
            "motemen/ghq-test-repo",
            &GetOptions::new()
                .with_private(true)
                .with_shallow(true)
                .with_branch("hello"),
            &env.root,
        )
        .await
        .unwrap();

    assert_eq!(
        env.runner.command_lines(),
        vec![format!(
            "git clone --branch hello --single-branch ssh://git@github.com/motemen/ghq-test-repo {}",
            dir.display()
        )]
    );
}

#[tokio::test]
async fn test_get_existing_git_copy_updates_in_place() {
    let env = TestEnvironment::new();
    let dir = env.create_working_copy("github.com/motemen/ghq", ".git");

    let outcome = env
        .use_case
        .execute(
            "https://github.com/motemen/ghq.git",
            &GetOptions::new().with_update(true),
            &env.root,
        )
        .await
        .unwrap();

    assert_eq!(
        outcome,
        GetOutcome::Updated {
            path: dir.clone(),
            vcs: VcsType::Git,
        }
    );
    let commands = env.runner.commands();
    assert_eq!(commands.len(), 1);
    assert_eq!(commands[0].to_string(), "git pull --ff-only");
    assert_eq!(commands[0].working_dir, Some(dir));
}

#[tokio::test]
async fn test_get_existing_copy_is_a_noop_without_update() {
    let env = TestEnvironment::new();
    env.create_working_copy("github.com/motemen/ghq", ".git");

    for _ in 0..2 {
        let outcome = env
            .use_case
            .execute("motemen/ghq", &GetOptions::new(), &env.root)
            .await
            .unwrap();
        assert!(matches!(outcome, GetOutcome::Skipped { .. }));
    }
    assert!(env.runner.commands().is_empty());
}

#[tokio::test]
async fn test_get_partial_directory_is_cloned_again() {
    let env = TestEnvironment::new();
    let dir = env.path("github.com/motemen/ghq");
    std::fs::create_dir_all(&dir).unwrap();

    let outcome = env
        .use_case
        .execute("motemen/ghq", &GetOptions::new(), &env.root)
        .await
        .unwrap();

    assert!(matches!(outcome, GetOutcome::Cloned { .. }));
}

#[tokio::test]
async fn test_get_selects_backend_from_url() {
    let env = TestEnvironment::new();
    let cases = [
        ("https://hub.darcs.net/owner/repo", "darcs get"),
        ("https://launchpad.net/project", "bzr branch"),
        ("svn+ssh://svn.example.org/repo", "svn checkout"),
        ("git+svn://svn.example.org/bridge", "git svn clone svn://svn.example.org/bridge"),
    ];

    for (reference, expected_prefix) in cases {
        env.use_case
            .execute(reference, &GetOptions::new(), &env.root)
            .await
            .unwrap();
        let last = env.runner.command_lines().pop().unwrap();
        assert!(
            last.starts_with(expected_prefix),
            "{reference}: unexpected command {last}"
        );
    }
}

#[tokio::test]
async fn test_get_fossil_clones_then_opens() {
    let env = TestEnvironment::new();
    let dir = env.path("chiselapp.com/user/a/repository/b");

    env.use_case
        .execute(
            "https://chiselapp.com/user/a/repository/b",
            &GetOptions::new(),
            &env.root,
        )
        .await
        .unwrap();

    let commands = env.runner.commands();
    assert_eq!(commands.len(), 2);
    assert_eq!(
        commands[0].to_string(),
        format!(
            "fossil clone https://chiselapp.com/user/a/repository/b {}",
            dir.join(".fossil").display()
        )
    );
    assert_eq!(commands[1].to_string(), "fossil open .fossil");
    assert_eq!(commands[1].working_dir, Some(dir));
}

#[tokio::test]
async fn test_get_branch_on_darcs_fails_loudly() {
    let env = TestEnvironment::new();

    let result = env
        .use_case
        .execute(
            "https://hub.darcs.net/owner/repo",
            &GetOptions::new().with_branch("topic"),
            &env.root,
        )
        .await;

    assert!(matches!(result, Err(GetError::UnsupportedVcs { .. })));
    assert!(env.runner.commands().is_empty());
    assert!(!env.path("hub.darcs.net").exists());
}

#[tokio::test]
async fn test_get_mixed_case_host_and_encoded_path() {
    let env = TestEnvironment::new();
    let dir = env.path("Example.com/Team/my repo");

    let outcome = env
        .use_case
        .execute(
            "https://Example.com/Team/my%20repo.git",
            &GetOptions::new(),
            &env.root,
        )
        .await
        .unwrap();

    assert_eq!(outcome.path(), dir);
    assert_eq!(
        env.runner.command_lines(),
        vec![format!(
            "git clone https://example.com/Team/my%20repo.git {}",
            dir.display()
        )]
    );
}

#[tokio::test]
async fn test_get_command_failure_is_reported() {
    let env = TestEnvironment::new();
    env.runner.fail("git");

    let error = env
        .use_case
        .execute("motemen/ghq", &GetOptions::new(), &env.root)
        .await
        .unwrap_err();

    match error {
        GetError::ExternalCommandFailed {
            command, exit_code, ..
        } => {
            assert!(command.starts_with("git clone https://github.com/motemen/ghq"));
            assert_eq!(exit_code, Some(1));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_get_relative_reference_reuses_root() {
    let env = TestEnvironment::new();
    let existing = env.create_working_copy("github.com/motemen/existing", ".git");

    let outcome = env
        .use_case
        .execute("../sibling", &GetOptions::new(), &existing)
        .await
        .unwrap();

    assert_eq!(outcome.path(), env.path("github.com/motemen/sibling"));
    assert_eq!(
        env.runner.command_lines(),
        vec![format!(
            "git clone https://github.com/motemen/sibling {}",
            env.path("github.com/motemen/sibling").display()
        )]
    );
}

#[tokio::test]
async fn test_get_many_in_parallel() {
    let env = TestEnvironment::new();
    let references: Vec<String> = ["a/one", "b/two", "c/three", "d/four"]
        .iter()
        .map(|reference| reference.to_string())
        .collect();

    let reports = env
        .use_case
        .execute_many(&references, &GetOptions::new(), &env.root, 3)
        .await;

    assert_eq!(reports.len(), 4);
    for (report, reference) in reports.iter().zip(&references) {
        assert_eq!(&report.reference, reference);
        assert!(report.result.is_ok());
    }
    assert_eq!(env.runner.commands().len(), 4);
}

//! Scenario: Rotate deployment secrets
//!
//! Journey: an operator removes the old secrets and submits new values,
//! including one whose creation fails because it still exists.
//!
//! Success Criteria:
//! - No secret value is left on disk, whatever the engine answered
//! - Every removal is reported

use berth::application::DockerManager;
use berth::{Config, RecordingRunner};

#[test]
fn scenario_rotation_leaves_no_secret_files() {
    let tmp = tempfile::tempdir().unwrap();
    let mut config = Config::default();
    config.secrets.temp_dir = Some(tmp.path().join("secrets"));
    let runner = RecordingRunner::new()
        .respond(&["secret", "ls", "--quiet", "--filter", "name=db_password"], "s1\n")
        .fail(&["secret", "create", "api_token"], 1);
    let docker = DockerManager::new(runner, config);

    let report = docker.remove_secrets(&["db_password", "api_token"]).unwrap();
    assert_eq!(report.removed, vec!["db_password"]);
    assert_eq!(report.not_found, vec!["api_token"]);

    let created = docker.submit_secret("hunter2", "db_password").unwrap();
    let rejected = docker.submit_secret("t0k3n", "api_token").unwrap();

    assert!(created.is_success());
    assert!(!rejected.is_success());
    assert!(rejected.into_checked().is_err());
    let leftovers: Vec<_> = std::fs::read_dir(tmp.path().join("secrets"))
        .unwrap()
        .collect();
    assert!(leftovers.is_empty());
}

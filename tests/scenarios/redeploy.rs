//! Scenario: Redeploy a stack on a native host
//!
//! Journey: an operator tears down the running stack, wipes the volume data
//! that is only valid for one run, recreates the volume layout, seeds it
//! from the host, and checks the images before deploying again.
//!
//! Success Criteria:
//! - Every step succeeds on the first run and on a repeated run
//! - Per-run data is gone, seeded configuration is present

use std::path::Path;
use std::time::Duration;

use berth::application::DockerManager;
use berth::domain::ports::NoopTeardownSink;
use berth::{Config, ContainerStatus, RecordingRunner, SwarmStatus, VolumeAccess};

fn manager(root: &Path) -> DockerManager<RecordingRunner> {
    let mut config = Config::default();
    config.volumes.root = root.to_path_buf();
    config.volumes.access = Some(VolumeAccess::Native);
    let runner = RecordingRunner::new()
        .respond(&["node", "ls", "--filter"], "mgr01\n")
        .respond(&["images", "--format"], "4f2a9c\n");
    DockerManager::new(runner, config)
}

fn redeploy(docker: &DockerManager<RecordingRunner>, host_config: &Path) {
    assert_eq!(docker.ensure_swarm_initialized().unwrap(), SwarmStatus::AlreadyActive);

    let report = docker
        .teardown()
        .budget(5)
        .tick(Duration::ZERO)
        .run("done", &NoopTeardownSink)
        .unwrap();
    assert_eq!(report.stack, "mgr01");
    assert!(report.converged);

    docker.purge_volume_dirs("mgr01", &["_cache"]).unwrap();
    docker
        .ensure_volume_dirs("mgr01", &["_cache/_data", "_conf/_data"])
        .unwrap();
    let conf = docker.volume_dir_path("mgr01", "_conf/_data");
    docker.copy_host_to_volume(host_config, &conf).unwrap();

    assert!(docker.all_images_present(&["api", "worker"]).unwrap());
    docker
        .remove_containers(&["api_migrate"], ContainerStatus::Exited)
        .unwrap();
}

/// SCENARIO: a redeploy cycle can be run again without failing
#[test]
fn scenario_redeploy_is_repeatable() {
    let root = tempfile::tempdir().unwrap();
    let host = tempfile::tempdir().unwrap();
    std::fs::write(host.path().join("app.ini"), "threads=4").unwrap();
    let docker = manager(root.path());

    redeploy(&docker, host.path());
    std::fs::write(root.path().join("mgr01_cache/_data/run.pid"), "123").unwrap();
    redeploy(&docker, host.path());

    assert!(root.path().join("mgr01_cache/_data").is_dir());
    assert!(!root.path().join("mgr01_cache/_data/run.pid").exists());
    assert_eq!(
        std::fs::read_to_string(root.path().join("mgr01_conf/_data/app.ini")).unwrap(),
        "threads=4"
    );
}

/// SCENARIO: the engine sees the same command sequence on every cycle
#[test]
fn scenario_redeploy_command_sequence() {
    let root = tempfile::tempdir().unwrap();
    let host = tempfile::tempdir().unwrap();
    let docker = manager(root.path());

    redeploy(&docker, host.path());

    assert_eq!(
        docker.shell().runner().command_lines(),
        vec![
            "docker node ls",
            "docker node ls --filter role=manager --format {{.Hostname}}",
            "docker stack rm mgr01",
            "docker ps --all --quiet --filter label=com.docker.stack.namespace=mgr01",
            "docker service ls --quiet --filter label=com.docker.stack.namespace=mgr01",
            "docker network ls --quiet --filter label=com.docker.stack.namespace=mgr01",
            "docker images --format {{.ID}} api",
            "docker images --format {{.ID}} worker",
            "docker ps --all --quiet --filter status=exited --filter name=api_migrate",
        ]
    );
}

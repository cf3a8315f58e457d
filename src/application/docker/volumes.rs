//! Volume directory operations
//!
//! Each operation dispatches once on [`VolumeAccess`]: native hosts touch
//! the volume's backing directory directly, other hosts go through
//! `exec`/`cp` against the helper container that mounts the engine host's
//! root filesystem.

use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::domain::entities::Command;
use crate::domain::ports::CommandRunner;
use crate::domain::value_objects::{EntityKind, VolumeAccess};
use crate::error::BerthResult;

use super::manager::DockerManager;

/// Suffix of the scratch directory used while pushing into a helper volume
const STAGING_SUFFIX: &str = ".berth-staging";

impl<R: CommandRunner> DockerManager<R> {
    pub fn volume_access(&self) -> VolumeAccess {
        self.config.volumes.effective_access()
    }

    /// Backing directory of `dir` under the stack's volumes, on the host
    pub fn volume_dir_path(&self, stack: &str, dir: &str) -> PathBuf {
        let name = format!("{}{}", stack, dir);
        self.config.volumes.root.join(name.trim_start_matches('/'))
    }

    /// Create each volume directory of `stack` that does not exist yet
    pub fn ensure_volume_dirs<S: AsRef<str>>(&self, stack: &str, dirs: &[S]) -> BerthResult<()> {
        for dir in dirs {
            let dir = dir.as_ref();
            match self.volume_access() {
                VolumeAccess::Native => self
                    .fs
                    .ensure_exists(&self.volume_dir_path(stack, dir), EntityKind::Directory)?,
                VolumeAccess::HelperContainer => {
                    let target = self.helper_volume_dir(stack, dir);
                    self.shell.run(&self.helper_exec().args(["mkdir", "-p"]).arg(target))?;
                }
            }
        }
        Ok(())
    }

    /// Delete each volume directory of `stack`; absent ones are skipped
    pub fn purge_volume_dirs<S: AsRef<str>>(&self, stack: &str, dirs: &[S]) -> BerthResult<()> {
        for dir in dirs {
            let dir = dir.as_ref();
            match self.volume_access() {
                VolumeAccess::Native => self.fs.remove_tree(&self.volume_dir_path(stack, dir))?,
                VolumeAccess::HelperContainer => {
                    let target = self.helper_volume_dir(stack, dir);
                    self.shell.run(&self.helper_exec().args(["rm", "-rf"]).arg(target))?;
                }
            }
        }
        Ok(())
    }

    /// Merge the contents of `host_dir` into `volume_dir`
    ///
    /// In helper mode `docker cp` copies a directory as a whole, so the
    /// tree is copied to a fresh staging directory next to the target,
    /// merged into the target, and the staging directory removed.
    pub fn copy_host_to_volume(&self, host_dir: &Path, volume_dir: &Path) -> BerthResult<()> {
        if self.volume_access().is_native() {
            self.fs.copy_tree(host_dir, volume_dir)?;
            return Ok(());
        }

        if !host_dir.exists() {
            warn!(source = %host_dir.display(), "source directory does not exist; nothing to copy");
            return Ok(());
        }

        let target = self.helper_path(volume_dir);
        let staging = format!("{}{}", target.trim_end_matches('/'), STAGING_SUFFIX);
        let container = self.config.volumes.helper_container.as_str();

        self.shell.run(&self.helper_exec().args(["mkdir", "-p", target.as_str()]))?;
        self.shell.run(&self.helper_exec().args(["rm", "-rf", staging.as_str()]))?;
        self.shell.run(
            &self
                .docker()
                .arg("cp")
                .arg(host_dir.display().to_string())
                .arg(format!("{}:{}", container, staging)),
        )?;

        let staged = self.shell.run(&self.helper_exec().args(["test", "-d", staging.as_str()]))?;
        if staged.is_success() {
            self.shell.run(
                &self
                    .helper_exec()
                    .args(["cp", "-a"])
                    .arg(format!("{}/.", staging))
                    .arg(target.as_str()),
            )?;
            info!(target = %target, "merged host tree into volume");
        } else {
            warn!(staging = %staging, "copy into helper container did not produce a directory; skipping merge");
        }

        self.shell.run(&self.helper_exec().args(["rm", "-rf", staging.as_str()]))?;
        Ok(())
    }

    /// Merge the contents of `volume_dir` into `host_dir`
    pub fn copy_volume_to_host(&self, volume_dir: &Path, host_dir: &Path) -> BerthResult<()> {
        if self.volume_access().is_native() {
            self.fs.copy_tree(volume_dir, host_dir)?;
            return Ok(());
        }

        self.fs.ensure_exists(host_dir, EntityKind::Directory)?;
        let source = format!(
            "{}:{}/.",
            self.config.volumes.helper_container,
            self.helper_path(volume_dir).trim_end_matches('/')
        );
        self.shell.run(
            &self
                .docker()
                .arg("cp")
                .arg(source)
                .arg(host_dir.display().to_string()),
        )?;
        Ok(())
    }

    /// Backing directory of `dir` as seen from inside the helper container
    ///
    /// The container is Linux whatever the host is, so the path is joined
    /// with `/` rather than the host separator.
    fn helper_volume_dir(&self, stack: &str, dir: &str) -> String {
        let root = to_unix(&self.config.volumes.root.display().to_string());
        let name = format!("{}{}", stack, dir);
        let joined = format!(
            "{}/{}",
            root.trim_end_matches('/'),
            to_unix(&name).trim_start_matches('/')
        );
        self.under_mount(&joined)
    }

    /// `path` as seen from inside the helper container
    fn helper_path(&self, path: &Path) -> String {
        self.under_mount(&to_unix(&path.display().to_string()))
    }

    fn under_mount(&self, path: &str) -> String {
        let mount = self.config.volumes.helper_mount.trim_end_matches('/');
        if path.starts_with('/') {
            format!("{}{}", mount, path)
        } else {
            format!("{}/{}", mount, path)
        }
    }

    fn helper_exec(&self) -> Command {
        self.docker()
            .arg("exec")
            .arg(self.config.volumes.helper_container.as_str())
    }
}

fn to_unix(path: &str) -> String {
    path.replace('\\', "/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::infrastructure::shell::RecordingRunner;

    fn manager_with(access: VolumeAccess, root: &Path, runner: RecordingRunner) -> DockerManager<RecordingRunner> {
        let mut config = Config::default();
        config.volumes.access = Some(access);
        config.volumes.root = root.to_path_buf();
        DockerManager::new(runner, config)
    }

    #[test]
    fn volume_dir_path_concatenates_stack_and_dir() {
        let docker = manager_with(
            VolumeAccess::Native,
            Path::new("/var/lib/docker/volumes"),
            RecordingRunner::new(),
        );
        assert_eq!(
            docker.volume_dir_path("mgr01", "_pgdata/_data"),
            PathBuf::from("/var/lib/docker/volumes/mgr01_pgdata/_data")
        );
    }

    #[test]
    fn native_ensure_and_purge_touch_local_disk() {
        let root = tempfile::tempdir().unwrap();
        let docker = manager_with(VolumeAccess::Native, root.path(), RecordingRunner::new());

        docker.ensure_volume_dirs("mgr01", &["_data/a", "_logs"]).unwrap();
        assert!(root.path().join("mgr01_data/a").is_dir());
        assert!(root.path().join("mgr01_logs").is_dir());

        docker.ensure_volume_dirs("mgr01", &["_data/a"]).unwrap();

        docker.purge_volume_dirs("mgr01", &["_data", "_missing"]).unwrap();
        assert!(!root.path().join("mgr01_data").exists());
        assert!(root.path().join("mgr01_logs").is_dir());
        assert!(docker.shell().runner().calls().is_empty());
    }

    #[test]
    fn helper_ensure_and_purge_exec_into_container() {
        let docker = manager_with(
            VolumeAccess::HelperContainer,
            Path::new("/var/lib/docker/volumes"),
            RecordingRunner::new(),
        );

        docker.ensure_volume_dirs("mgr01", &["_data"]).unwrap();
        docker.purge_volume_dirs("mgr01", &["_data"]).unwrap();

        assert_eq!(
            docker.shell().runner().command_lines(),
            vec![
                "docker exec volume-holder mkdir -p /vm-root/var/lib/docker/volumes/mgr01_data",
                "docker exec volume-holder rm -rf /vm-root/var/lib/docker/volumes/mgr01_data",
            ]
        );
    }

    #[test]
    fn helper_paths_use_forward_slashes_whatever_the_root_spelling() {
        for root in [
            "/var/lib/docker/volumes",
            "/var/lib/docker/volumes/",
            "\\var\\lib\\docker\\volumes\\",
        ] {
            let docker = manager_with(
                VolumeAccess::HelperContainer,
                Path::new(root),
                RecordingRunner::new(),
            );

            docker.ensure_volume_dirs("mgr01", &["_pgdata/_data"]).unwrap();

            assert_eq!(
                docker.shell().runner().command_lines(),
                vec!["docker exec volume-holder mkdir -p /vm-root/var/lib/docker/volumes/mgr01_pgdata/_data"],
                "root {:?}",
                root
            );
        }
    }

    #[test]
    fn helper_copy_target_from_windows_style_path_uses_forward_slashes() {
        let tmp = tempfile::tempdir().unwrap();
        let docker = manager_with(
            VolumeAccess::HelperContainer,
            Path::new("/var/lib/docker/volumes"),
            RecordingRunner::new(),
        );

        docker
            .copy_volume_to_host(Path::new("\\srv\\mgr01_data"), &tmp.path().join("out"))
            .unwrap();

        let lines = docker.shell().runner().command_lines();
        assert!(lines[0].starts_with("docker cp volume-holder:/vm-root/srv/mgr01_data/. "));
    }

    #[test]
    fn native_copy_merges_trees_both_ways() {
        let tmp = tempfile::tempdir().unwrap();
        let host = tmp.path().join("host");
        let volume = tmp.path().join("volume");
        std::fs::create_dir_all(host.join("conf")).unwrap();
        std::fs::write(host.join("conf/app.ini"), "a=1").unwrap();
        std::fs::create_dir_all(&volume).unwrap();
        std::fs::write(volume.join("keep.txt"), "kept").unwrap();
        let docker = manager_with(VolumeAccess::Native, tmp.path(), RecordingRunner::new());

        docker.copy_host_to_volume(&host, &volume).unwrap();
        assert_eq!(std::fs::read_to_string(volume.join("conf/app.ini")).unwrap(), "a=1");
        assert!(volume.join("keep.txt").exists());

        let back = tmp.path().join("back");
        docker.copy_volume_to_host(&volume, &back).unwrap();
        assert!(back.join("keep.txt").exists());
        assert!(back.join("conf/app.ini").exists());
    }

    #[test]
    fn helper_copy_to_volume_stages_merges_and_cleans_up() {
        let host = tempfile::tempdir().unwrap();
        let docker = manager_with(
            VolumeAccess::HelperContainer,
            Path::new("/var/lib/docker/volumes"),
            RecordingRunner::new(),
        );

        docker
            .copy_host_to_volume(host.path(), Path::new("/var/lib/docker/volumes/mgr01_data/_data/"))
            .unwrap();

        let target = "/vm-root/var/lib/docker/volumes/mgr01_data/_data/";
        let staging = "/vm-root/var/lib/docker/volumes/mgr01_data/_data.berth-staging";
        assert_eq!(
            docker.shell().runner().command_lines(),
            vec![
                format!("docker exec volume-holder mkdir -p {}", target),
                format!("docker exec volume-holder rm -rf {}", staging),
                format!("docker cp {} volume-holder:{}", host.path().display(), staging),
                format!("docker exec volume-holder test -d {}", staging),
                format!("docker exec volume-holder cp -a {}/. {}", staging, target),
                format!("docker exec volume-holder rm -rf {}", staging),
            ]
        );
    }

    #[test]
    fn helper_copy_skips_merge_when_staging_missing() {
        let host = tempfile::tempdir().unwrap();
        let docker = manager_with(
            VolumeAccess::HelperContainer,
            Path::new("/var/lib/docker/volumes"),
            RecordingRunner::new().fail(&["exec", "volume-holder", "test"], 1),
        );

        docker
            .copy_host_to_volume(host.path(), Path::new("/data"))
            .unwrap();

        let lines = docker.shell().runner().command_lines();
        assert!(!lines.iter().any(|l| l.contains("cp -a")));
        assert_eq!(
            lines.last().unwrap(),
            "docker exec volume-holder rm -rf /vm-root/data.berth-staging"
        );
    }

    #[test]
    fn helper_copy_from_missing_host_dir_is_a_no_op() {
        let tmp = tempfile::tempdir().unwrap();
        let docker = manager_with(
            VolumeAccess::HelperContainer,
            Path::new("/var/lib/docker/volumes"),
            RecordingRunner::new(),
        );

        docker
            .copy_host_to_volume(&tmp.path().join("missing"), Path::new("/data"))
            .unwrap();

        assert!(docker.shell().runner().calls().is_empty());
    }

    #[test]
    fn helper_copy_to_host_copies_directory_contents() {
        let tmp = tempfile::tempdir().unwrap();
        let host = tmp.path().join("restore");
        let docker = manager_with(
            VolumeAccess::HelperContainer,
            Path::new("/var/lib/docker/volumes"),
            RecordingRunner::new(),
        );

        docker
            .copy_volume_to_host(Path::new("/var/lib/docker/volumes/mgr01_data/_data"), &host)
            .unwrap();

        assert!(host.is_dir());
        assert_eq!(
            docker.shell().runner().command_lines(),
            vec![format!(
                "docker cp volume-holder:/vm-root/var/lib/docker/volumes/mgr01_data/_data/. {}",
                host.display()
            )]
        );
    }
}

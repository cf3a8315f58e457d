//! Docker Resource Manager
//!
//! Idempotent, best-effort operations over swarm, secrets, images,
//! containers and volumes. Every lookup re-queries the engine; nothing is
//! cached between calls. Bulk operations process names one at a time and
//! never stop early because one of them failed.

use std::collections::HashSet;
use std::io::Write;

use tracing::{info, warn};

use crate::config::Config;
use crate::domain::entities::{Command, ExecOutcome};
use crate::domain::ports::CommandRunner;
use crate::domain::value_objects::{ContainerStatus, EntityKind};
use crate::error::{BerthError, BerthResult};
use crate::infrastructure::fs::LocalFs;
use crate::infrastructure::shell::{Shell, Trim};

use super::result::{RemovalReport, SwarmStatus};

/// Docker operations bound to one runner and one configuration
pub struct DockerManager<R> {
    pub(super) shell: Shell<R>,
    pub(super) fs: LocalFs,
    pub(super) config: Config,
}

impl<R: CommandRunner> DockerManager<R> {
    pub fn new(runner: R, config: Config) -> Self {
        Self {
            shell: Shell::new(runner),
            fs: LocalFs::new(),
            config,
        }
    }

    pub fn shell(&self) -> &Shell<R> {
        &self.shell
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// A fresh engine CLI command
    pub(super) fn docker(&self) -> Command {
        Command::new(self.config.docker.binary.as_str())
    }

    /// Create a single-node swarm unless this node already belongs to one
    pub fn ensure_swarm_initialized(&self) -> BerthResult<SwarmStatus> {
        if self.shell.status(&self.docker().args(["node", "ls"]))? == 0 {
            return Ok(SwarmStatus::AlreadyActive);
        }

        info!("no swarm found; initializing");
        let outcome = self.shell.run(&self.docker().args(["swarm", "init"]))?;
        Ok(if outcome.is_success() {
            SwarmStatus::Initialized
        } else {
            SwarmStatus::InitFailed
        })
    }

    /// Hostname of the swarm manager node, used as the stack name.
    /// Empty when it cannot be determined.
    pub fn manager_hostname(&self) -> BerthResult<String> {
        let output = self.shell.capture(
            &self.docker().args([
                "node",
                "ls",
                "--filter",
                "role=manager",
                "--format",
                "{{.Hostname}}",
            ]),
            Trim::Surrounding,
        )?;
        Ok(output.lines().next().unwrap_or_default().trim().to_string())
    }

    /// Register `value` as secret `name` through a short-lived file.
    ///
    /// The file is deleted afterwards whether or not registration worked.
    pub fn submit_secret(&self, value: &str, name: &str) -> BerthResult<ExecOutcome> {
        require_name("secret name", name)?;

        let dir = self.config.secrets.effective_temp_dir();
        self.fs.ensure_exists(&dir, EntityKind::Directory)?;

        let mut file = tempfile::Builder::new()
            .prefix("berth-secret-")
            .tempfile_in(&dir)?;
        file.write_all(value.as_bytes())?;
        file.flush()?;
        let path = file.into_temp_path();

        let outcome = self.shell.run(
            &self
                .docker()
                .args(["secret", "create", name])
                .arg(path.display().to_string()),
        );

        if let Err(e) = path.close() {
            warn!(error = %e, "could not delete temporary secret file");
        }

        let outcome = outcome?;
        if outcome.is_success() {
            info!(secret = name, "secret created");
        }
        Ok(outcome)
    }

    /// ID of the newest local image of `name` (registry prefix applied)
    pub fn resolve_image_id(&self, name: &str) -> BerthResult<Option<String>> {
        let reference = format!("{}{}", self.config.docker.registry_prefix, name);
        let outcome = self
            .shell
            .run(&self.docker().args(["images", "--format", "{{.ID}}"]).arg(reference))?;
        Ok(outcome.lines().into_iter().next())
    }

    /// Running containers created from image `image_name`
    pub fn resolve_container_ids(&self, image_name: &str) -> BerthResult<Vec<String>> {
        let Some(image_id) = self.resolve_image_id(image_name)? else {
            return Ok(Vec::new());
        };
        let outcome = self.shell.run(
            &self
                .docker()
                .args(["ps", "--all", "--quiet"])
                .arg("--filter")
                .arg(format!("ancestor={}", image_id))
                .args(["--filter", "status=running"]),
        )?;
        Ok(outcome.lines())
    }

    /// True when every image resolves locally; stops at the first miss
    pub fn all_images_present<S: AsRef<str>>(&self, names: &[S]) -> BerthResult<bool> {
        for name in names {
            if self.resolve_image_id(name.as_ref())?.is_none() {
                info!(image = name.as_ref(), "image not present");
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Remove unused images, containers and networks (and volumes when
    /// asked). Irreversible; confirmation is the caller's job.
    pub fn prune_system(&self, include_volumes: bool) -> BerthResult<ExecOutcome> {
        let mut cmd = self.docker().args(["system", "prune", "--force"]);
        if include_volumes {
            cmd = cmd.arg("--volumes");
        }
        self.shell.run(&cmd)
    }

    /// Force-remove containers by name, optionally only those in `status`
    pub fn remove_containers<S: AsRef<str>>(
        &self,
        names: &[S],
        status: ContainerStatus,
    ) -> BerthResult<RemovalReport> {
        require_names("container name", names)?;
        let mut report = RemovalReport::new();

        for name in names {
            let name = name.as_ref();
            match status.as_filter() {
                None => {
                    let outcome = self.shell.run(&self.docker().args(["rm", "-f", name]))?;
                    if outcome.is_success() {
                        report.removed.push(name.to_string());
                    } else {
                        report.failed.push(name.to_string());
                    }
                }
                Some(state) => {
                    let list = self
                        .docker()
                        .args(["ps", "--all", "--quiet"])
                        .arg("--filter")
                        .arg(format!("status={}", state))
                        .arg("--filter")
                        .arg(format!("name={}", name));
                    let remove = self.docker().args(["rm", "-f"]);
                    self.remove_matching("container", name, list, remove, &mut report)?;
                }
            }
        }
        Ok(report)
    }

    /// Force-remove volumes whose name matches each entry
    pub fn remove_volumes<S: AsRef<str>>(&self, names: &[S]) -> BerthResult<RemovalReport> {
        require_names("volume name", names)?;
        let mut report = RemovalReport::new();
        for name in names {
            let name = name.as_ref();
            let list = self
                .docker()
                .args(["volume", "ls", "--quiet", "--filter"])
                .arg(format!("name={}", name));
            let remove = self.docker().args(["volume", "rm", "-f"]);
            self.remove_matching("volume", name, list, remove, &mut report)?;
        }
        Ok(report)
    }

    /// Force-remove every local image of each repository name
    pub fn remove_images<S: AsRef<str>>(&self, names: &[S]) -> BerthResult<RemovalReport> {
        require_names("image name", names)?;
        let mut report = RemovalReport::new();
        for name in names {
            let name = name.as_ref();
            let list = self.docker().args(["images", "--quiet", name]);
            let remove = self.docker().args(["rmi", "-f"]);
            self.remove_matching("image", name, list, remove, &mut report)?;
        }
        Ok(report)
    }

    /// Remove secrets whose name matches each entry
    pub fn remove_secrets<S: AsRef<str>>(&self, names: &[S]) -> BerthResult<RemovalReport> {
        require_names("secret name", names)?;
        let mut report = RemovalReport::new();
        for name in names {
            let name = name.as_ref();
            let list = self
                .docker()
                .args(["secret", "ls", "--quiet", "--filter"])
                .arg(format!("name={}", name));
            let remove = self.docker().args(["secret", "rm"]);
            self.remove_matching("secret", name, list, remove, &mut report)?;
        }
        Ok(report)
    }

    /// List matching IDs with `list`, then pass them all to `remove`
    fn remove_matching(
        &self,
        kind: &str,
        name: &str,
        list: Command,
        remove: Command,
        report: &mut RemovalReport,
    ) -> BerthResult<()> {
        let mut ids = self.shell.run(&list)?.lines();
        let mut seen = HashSet::new();
        ids.retain(|id| seen.insert(id.clone()));

        if ids.is_empty() {
            info!(kind, name, "nothing to remove");
            report.not_found.push(name.to_string());
            return Ok(());
        }

        let outcome = self.shell.run(&remove.args(ids))?;
        if outcome.is_success() {
            report.removed.push(name.to_string());
        } else {
            report.failed.push(name.to_string());
        }
        Ok(())
    }
}

fn require_name(what: &str, name: &str) -> BerthResult<()> {
    if name.trim().is_empty() {
        return Err(BerthError::invalid_argument(format!("{} must not be empty", what)));
    }
    Ok(())
}

fn require_names<S: AsRef<str>>(what: &str, names: &[S]) -> BerthResult<()> {
    names.iter().try_for_each(|n| require_name(what, n.as_ref()))
}

//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::{BerthError, BerthResult};
use crate::infrastructure::fs::user_config_path;

use super::types::Config;

/// Project configuration file name, looked up in the working directory
pub const PROJECT_CONFIG_FILE: &str = "berth.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> BerthResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| BerthError::Config {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Load from project config, user config, or defaults
pub fn load_or_default(project_root: Option<&Path>) -> Config {
    // Try project config first
    if let Some(root) = project_root {
        let project_config = root.join(PROJECT_CONFIG_FILE);
        if project_config.exists() {
            match Config::load(&project_config) {
                Ok(config) => return with_env_overrides(config),
                Err(e) => warn!(file = %project_config.display(), error = %e, "ignoring config"),
            }
        }
    }

    // Try user config
    if let Some(user_config) = user_config_path() {
        if user_config.exists() {
            match Config::load(&user_config) {
                Ok(config) => return with_env_overrides(config),
                Err(e) => warn!(file = %user_config.display(), error = %e, "ignoring config"),
            }
        }
    }

    debug!("no config file found; using defaults");
    with_env_overrides(Config::default())
}

/// Apply environment variable overrides (BERTH_* prefix)
pub fn with_env_overrides(mut config: Config) -> Config {
    if let Ok(binary) = std::env::var("BERTH_DOCKER") {
        if !binary.trim().is_empty() {
            config.docker.binary = binary;
        }
    }

    if let Ok(prefix) = std::env::var("BERTH_REGISTRY_PREFIX") {
        config.docker.registry_prefix = prefix;
    }

    if let Ok(root) = std::env::var("BERTH_VOLUMES_ROOT") {
        if !root.trim().is_empty() {
            config.volumes.root = PathBuf::from(root);
        }
    }

    if let Ok(access) = std::env::var("BERTH_VOLUME_ACCESS") {
        match access.parse() {
            Ok(access) => config.volumes.access = Some(access),
            Err(e) => warn!(error = %e, "ignoring BERTH_VOLUME_ACCESS"),
        }
    }

    if let Ok(name) = std::env::var("BERTH_HELPER_CONTAINER") {
        if !name.trim().is_empty() {
            config.volumes.helper_container = name;
        }
    }

    if let Ok(wait) = std::env::var("BERTH_TEARDOWN_WAIT") {
        match wait.trim().parse::<u64>() {
            Ok(seconds) => config.teardown.wait_seconds = seconds,
            Err(_) => warn!(value = %wait, "ignoring BERTH_TEARDOWN_WAIT"),
        }
    }

    config
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "docker",
        "binary",
        "registry_prefix",
        "volumes",
        "root",
        "access",
        "helper_container",
        "helper_mount",
        "teardown",
        "wait_seconds",
        "poll",
        "secrets",
        "temp_dir",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = usize::from(ac != bc);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}

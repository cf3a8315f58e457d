//! Property tests for command building and recorded execution.

use proptest::prelude::*;

use berth::application::DockerManager;
use berth::{Config, RecordingRunner};

fn name() -> impl Strategy<Value = String> {
    // Printable names including shell metacharacters.
    proptest::string::string_regex("[A-Za-z0-9_.;$`'\" |-]{1,16}")
        .unwrap()
        .prop_filter("non-blank", |s| !s.trim().is_empty())
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: names reach the engine as one argv element, unmodified.
    #[test]
    fn property_secret_names_pass_through_verbatim(secret in name()) {
        let docker = DockerManager::new(RecordingRunner::new().respond(&["secret", "ls"], "id1\n"), Config::default());

        docker.remove_secrets(&[secret.as_str()]).unwrap();

        let calls = docker.shell().runner().calls();
        prop_assert_eq!(calls.len(), 2);
        prop_assert_eq!(calls[0].argv().last().cloned(), Some(format!("name={}", secret)));
        prop_assert_eq!(calls[1].argv(), &["secret".to_string(), "rm".to_string(), "id1".to_string()][..]);
    }

    /// PROPERTY: bulk removal handles every name exactly once.
    #[test]
    fn property_bulk_removal_reports_every_name(
        names in proptest::collection::vec(name(), 0..=6),
        present in any::<bool>(),
    ) {
        let runner = if present {
            RecordingRunner::new().respond(&["volume", "ls"], "vol\n")
        } else {
            RecordingRunner::new()
        };
        let docker = DockerManager::new(runner, Config::default());

        let report = docker.remove_volumes(&names).unwrap();

        prop_assert_eq!(report.total(), names.len());
        if present {
            prop_assert_eq!(report.removed.len(), names.len());
        } else {
            prop_assert_eq!(report.not_found.len(), names.len());
        }
    }
}

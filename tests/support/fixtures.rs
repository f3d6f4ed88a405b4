//! Test fixtures and constants.

use super::Test;

/// Standard passwords used across multiple tests.
pub const STANDARD_PASSWORDS: &[(&str, &str)] = &[
    ("dev", "correct-horse-battery"),
    ("prod", "Tr0ub4dor&3"),
];

/// A password with characters that must survive storage untouched.
pub const AWKWARD_PASSWORD: &str = "p@ssw0rd!#$% with spaces\"'";

/// Project file with several services: `api` (aurora) and `worker`
/// (postgres) have databases, `frontend` has none.
pub const MULTI_SERVICE_CONFIG: &str = r#"default_service = "api"
environments = ["dev", "prod"]

[gantry]
version = "0.1.0"
namespace = "acme"

[services.api.database]
engine = "aurora"

[services.frontend]

[services.worker.database]
engine = "postgres"
"#;

/// Replace the project file with the multi-service fixture.
pub fn write_multi_service_config(t: &Test) {
    std::fs::write(t.dir.path().join(".gantry.toml"), MULTI_SERVICE_CONFIG)
        .expect("failed to write project file");
}

//! Command helper methods for Test.

use super::Test;
use assert_cmd::Command;
use std::process::Output;

impl Test {
    /// Create a gantry command with correct environment variables.
    ///
    /// Returns a Command configured with:
    /// - HOME set to the temporary home directory
    /// - Current directory set to the test project directory
    pub fn cmd(&self) -> Command {
        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin("gantry").expect("failed to find gantry binary");
        cmd.env("HOME", self.home.path());
        // Windows uses USERPROFILE instead of HOME for home directory
        cmd.env("USERPROFILE", self.home.path());
        // Keep the caller's shell settings from leaking into assertions
        cmd.env_remove("GANTRY_LOG");
        cmd.env_remove("GANTRY_ENVIRONMENT");
        cmd.current_dir(self.dir.path());
        cmd
    }

    /// Shortcut for `gantry init` command.
    pub fn init_cmd(&self, namespace: &str, service: &str, environments: &str) -> Output {
        self.cmd()
            .args([
                "init",
                "--namespace",
                namespace,
                "--service",
                service,
                "--environments",
                environments,
            ])
            .output()
            .expect("failed to run gantry init")
    }

    /// Shortcut for `gantry db set-password` with an inline value.
    pub fn db_set(&self, environment: &str, password: &str) -> Output {
        self.cmd()
            .args(["db", "set-password", "-e", environment, password])
            .output()
            .expect("failed to run gantry db set-password")
    }

    /// Shortcut for `gantry db set-password -s <service>` with an inline value.
    pub fn db_set_for(&self, environment: &str, service: &str, password: &str) -> Output {
        self.cmd()
            .args(["db", "set-password", "-e", environment, "-s", service, password])
            .output()
            .expect("failed to run gantry db set-password")
    }

    /// Shortcut for `gantry db set-password` reading the value from stdin.
    pub fn db_set_stdin(&self, environment: &str, password: &str) -> Output {
        self.cmd()
            .args(["db", "set-password", "-e", environment])
            .write_stdin(format!("{}\n", password))
            .output()
            .expect("failed to run gantry db set-password")
    }

    /// Shortcut for `gantry db get-password` command.
    pub fn db_get(&self, environment: &str) -> Output {
        self.cmd()
            .args(["db", "get-password", "-e", environment])
            .output()
            .expect("failed to run gantry db get-password")
    }

    /// Shortcut for `gantry db get-password -s <service>` command.
    pub fn db_get_for(&self, environment: &str, service: &str) -> Output {
        self.cmd()
            .args(["db", "get-password", "-e", environment, "-s", service])
            .output()
            .expect("failed to run gantry db get-password")
    }

    /// Shortcut for `gantry status` command.
    pub fn status(&self) -> Output {
        self.cmd()
            .arg("status")
            .output()
            .expect("failed to run gantry status")
    }

    /// Shortcut for `gantry status --json` command.
    pub fn status_json(&self) -> Output {
        self.cmd()
            .args(["status", "--json"])
            .output()
            .expect("failed to run gantry status --json")
    }
}

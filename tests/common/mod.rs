#![allow(dead_code)]

use std::fs;
use std::process::{Command, Output};
use tempfile::TempDir;

/// Path to the compiled ticketdesk binary
pub fn ticketdesk_binary() -> &'static str {
    env!("CARGO_BIN_EXE_ticketdesk")
}

/// Helper struct to run ticketdesk commands in an isolated temp directory
pub struct DeskTest {
    pub temp_dir: TempDir,
    backend_url: Option<String>,
}

impl DeskTest {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        DeskTest {
            temp_dir,
            backend_url: None,
        }
    }

    /// Point every command at the given backend through the environment override
    pub fn with_backend(mut self, url: &str) -> Self {
        self.backend_url = Some(url.to_string());
        self
    }

    pub fn run(&self, args: &[&str]) -> Output {
        let mut cmd = Command::new(ticketdesk_binary());
        cmd.args(args)
            .current_dir(self.temp_dir.path())
            .env_remove("TICKETDESK_ROOT")
            .env_remove("TICKETDESK_BACKEND_URL")
            .env_remove("TICKETDESK_LOG")
            .env("NO_COLOR", "1");
        if let Some(url) = &self.backend_url {
            cmd.env("TICKETDESK_BACKEND_URL", url);
        }
        cmd.output().expect("Failed to execute ticketdesk command")
    }

    pub fn run_success(&self, args: &[&str]) -> String {
        let output = self.run(args);
        if !output.status.success() {
            panic!(
                "Command {:?} failed with status {:?}\nstdout: {}\nstderr: {}",
                args,
                output.status,
                String::from_utf8_lossy(&output.stdout),
                String::from_utf8_lossy(&output.stderr)
            );
        }
        String::from_utf8_lossy(&output.stdout).to_string()
    }

    pub fn run_failure(&self, args: &[&str]) -> String {
        let output = self.run(args);
        assert!(
            !output.status.success(),
            "Expected command {:?} to fail, but it succeeded",
            args
        );
        String::from_utf8_lossy(&output.stderr).to_string()
    }

    /// Run a command with `--json` and parse its stdout
    pub fn run_json(&self, args: &[&str]) -> serde_json::Value {
        let mut full: Vec<&str> = args.to_vec();
        full.push("--json");
        let stdout = self.run_success(&full);
        serde_json::from_str(&stdout).expect("Failed to parse JSON output")
    }

    pub fn write_config(&self, content: &str) {
        let dir = self.temp_dir.path().join(".ticketdesk");
        fs::create_dir_all(&dir).expect("Failed to create .ticketdesk directory");
        fs::write(dir.join("config.yaml"), content).expect("Failed to write config file");
    }

    pub fn read_config(&self) -> String {
        let path = self.temp_dir.path().join(".ticketdesk").join("config.yaml");
        fs::read_to_string(path).expect("Failed to read config file")
    }
}

impl Default for DeskTest {
    fn default() -> Self {
        Self::new()
    }
}

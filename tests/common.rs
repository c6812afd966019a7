#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated sandbox: a fake HOME (so no real config is read) plus a DB path.
pub struct Sandbox {
    pub dir: TempDir,
    pub db: String,
}

impl Sandbox {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("tempdir");
        let db = dir
            .path()
            .join("ridelog_test.sqlite")
            .to_string_lossy()
            .to_string();
        Self { dir, db }
    }

    /// `ridelog --db <sandbox db> <args...>` with HOME pointing into the sandbox
    pub fn rl(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("ridelog");
        cmd.env("HOME", self.dir.path())
            .env_remove("RUST_LOG")
            .args(["--db", &self.db]);
        cmd
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }
}

/// Fresh sandbox with an initialized database
pub fn setup_test_db() -> Sandbox {
    let sb = Sandbox::new();
    sb.rl().args(["--test", "init"]).assert().success();
    sb
}

/// Initialized sandbox holding two June 2024 work days and one in May
pub fn init_db_with_data() -> Sandbox {
    let sb = setup_test_db();

    sb.rl()
        .args([
            "add",
            "2024-06-01",
            "--earnings",
            "100",
            "--expenses",
            "20",
            "--distance",
            "50",
            "--hours",
            "5",
            "--uber",
            "3",
            "--ninety-nine",
            "2",
        ])
        .assert()
        .success();

    sb.rl()
        .args([
            "add",
            "2024-06-03",
            "--earnings",
            "200",
            "--expenses",
            "50",
            "--distance",
            "100",
            "--hours",
            "8",
            "--indriver",
            "4",
        ])
        .assert()
        .success();

    sb.rl()
        .args([
            "add",
            "2024-05-20",
            "--earnings",
            "80",
            "--distance",
            "40",
        ])
        .assert()
        .success();

    sb
}

#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};

pub const SAMPLE_LOG: &str = "\
* Week 1
** [2024-01-06 Sat]
| 12.50 | note | Groceries |
| 3.00 | note | Coffee |
** [2024-01-07 Sun]
| 20.00 | note | Groceries |
";

pub fn spendlog_cmd() -> Command {
    let mut cmd = Command::cargo_bin("spendlog").unwrap();
    cmd.env_remove("SPENDLOG_FILE");
    cmd.env_remove("SPENDLOG_LOG");
    cmd
}

pub fn write_log(dir: &Path, content: &str) -> PathBuf {
    let path = dir.join("SavingLog.org");
    fs::write(&path, content).unwrap();
    path
}

//! Process environment isolation for binary tests.

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use tempfile::TempDir;

/// Variables the binary reads; cleared so the host environment cannot leak in.
pub const ENV_KEYS: [&str; 5] = [
    "LEDGERLENS_TERMINAL_URL",
    "LEDGERLENS_TERMINAL_PASSWORD",
    "SUPABASE_URL",
    "SUPABASE_KEY",
    "RUST_LOG",
];

/// A `ledgerlens` command running in an empty working directory.
pub fn ledgerlens(workdir: &TempDir) -> Command {
    let mut cmd = cargo_bin_cmd!("ledgerlens");
    cmd.current_dir(workdir.path());
    for key in ENV_KEYS {
        cmd.env_remove(key);
    }
    cmd
}

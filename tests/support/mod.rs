//! Shared helpers for integration tests.

use camino::Utf8PathBuf;
use eyre::{Result, eyre};
use std::os::unix::fs::PermissionsExt;
use tempfile::TempDir;

/// Shell script answering the `pm2` invocations the relay issues.
///
/// `stop` of any process other than `web` fails the way `pm2` does for an
/// unknown process.
const FAKE_PM2: &str = r#"#!/bin/sh
case "$1" in
  restart)
    echo "Use --update-env to update environment variables"
    echo "[PM2] Applying action restartProcessId on app [$2](ids: [ 0 ])"
    echo "[PM2] [$2](0) ✓"
    ;;
  stop)
    if [ "$2" != "web" ]; then
      echo "[PM2][ERROR] Process or Namespace $2 not found" >&2
      exit 1
    fi
    echo "[PM2] Applying action stopProcessId on app [$2](ids: [ 0 ])"
    ;;
  jlist)
    echo '[{"name":"web","pm_id":0,"pm2_env":{"status":"online"},"monit":{"memory":52428800}},{"name":"worker","pm_id":1,"pm2_env":{"status":"stopped"},"monit":{"memory":0}}]'
    ;;
  logs)
    echo "[TAILING] Tailing last $7 lines for [$2] process (change the value with --lines option)"
    echo "/root/.pm2/logs/$2-out.log last $7 lines:"
    echo "GET /health 200"
    echo "GET /ready 200"
    echo "line with $5 for $2" >&2
    ;;
  *)
    echo "unexpected: $*" >&2
    exit 2
    ;;
esac
"#;

/// Writes an executable fake `pm2` into a fresh temporary directory.
///
/// The directory must outlive every use of the returned path.
pub fn install_fake_pm2() -> Result<(TempDir, Utf8PathBuf)> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("pm2");
    std::fs::write(&path, FAKE_PM2)?;
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755))?;
    let utf8 = Utf8PathBuf::from_path_buf(path)
        .map_err(|path| eyre!("temp path is not UTF-8: {}", path.display()))?;
    Ok((dir, utf8))
}

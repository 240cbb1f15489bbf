//! Behavioural tests for the `procurator` binary.

#[cfg(unix)]
mod support;

#[cfg(unix)]
mod unix_tests {
    //! End-to-end runs of the relay over standard input.

    use eyre::{Result, ensure, eyre};
    use std::io::Write;
    use std::path::PathBuf;
    use std::process::{Command, Output, Stdio};

    use super::support::install_fake_pm2;

    fn relay_path() -> Result<PathBuf> {
        std::env::var_os("CARGO_BIN_EXE_procurator")
            .map(PathBuf::from)
            .ok_or_else(|| {
                eyre!("CARGO_BIN_EXE_procurator is not set; ensure the binary is built")
            })
    }

    fn run_relay(pm2: &str, extra_args: &[&str], input: &str) -> Result<Output> {
        let mut child = Command::new(relay_path()?)
            .args(extra_args)
            .env("PROCURATOR_PM2_BINARY", pm2)
            .env_remove("PROCURATOR_CONFIG")
            .env_remove("PROCURATOR_PREFIX")
            .env("RUST_LOG", "warn")
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()?;
        let mut stdin = child
            .stdin
            .take()
            .ok_or_else(|| eyre!("child stdin should be piped"))?;
        stdin.write_all(input.as_bytes())?;
        drop(stdin);
        Ok(child.wait_with_output()?)
    }

    #[test]
    fn relays_commands_and_ignores_chatter() -> Result<()> {
        let (_dir, pm2) = install_fake_pm2()?;
        let input = "alice: ;restart web\n\
                     bob: hello everyone\n\
                     carol: ;deploy web\n\
                     dave: ;stop web-api\n\
                     erin: ;logs 10 out web\n\
                     frank: ;help s\n";

        let output = run_relay(pm2.as_str(), &[], input)?;
        let stdout = String::from_utf8_lossy(&output.stdout);

        ensure!(output.status.success(), "relay exited with {}", output.status);
        ensure!(
            stdout.contains("Restart successful!"),
            "missing restart reply:\n{stdout}"
        );
        ensure!(
            stdout.contains("Process or Namespace web-api not found"),
            "missing stop failure:\n{stdout}"
        );
        ensure!(
            stdout.contains("Invalid number of lines!"),
            "missing logs validation reply:\n{stdout}"
        );
        ensure!(
            stdout.contains("-- Requested by: frank"),
            "missing help footer:\n{stdout}"
        );
        ensure!(!stdout.contains("deploy"), "unknown command was answered:\n{stdout}");
        let replies = stdout
            .lines()
            .filter(|line| matches!(*line, "[info]" | "[ok]" | "[error]"))
            .count();
        ensure!(replies == 4, "expected four replies:\n{stdout}");
        Ok(())
    }

    #[test]
    fn prefix_flag_overrides_default() -> Result<()> {
        let (_dir, pm2) = install_fake_pm2()?;

        let output = run_relay(pm2.as_str(), &["--prefix", "pm2!"], ";p\npm2!p\n")?;
        let stdout = String::from_utf8_lossy(&output.stdout);

        ensure!(output.status.success(), "relay exited with {}", output.status);
        ensure!(
            stdout.contains("All PM2 Processes"),
            "missing process list:\n{stdout}"
        );
        ensure!(
            stdout.matches("All PM2 Processes").count() == 1,
            "default prefix should be ignored:\n{stdout}"
        );
        Ok(())
    }

    #[test]
    fn rejects_prefix_with_whitespace() -> Result<()> {
        let (_dir, pm2) = install_fake_pm2()?;

        let output = run_relay(pm2.as_str(), &["--prefix", "a b"], "")?;

        ensure!(!output.status.success(), "expected failure status");
        let stderr = String::from_utf8_lossy(&output.stderr);
        ensure!(
            stderr.contains("command prefix must be non-empty"),
            "unexpected stderr:\n{stderr}"
        );
        Ok(())
    }
}

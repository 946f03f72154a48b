use std::io;
use std::process::{Command, ExitStatus, Stdio};

use thiserror::Error;

#[cfg(unix)]
use std::os::unix::process::CommandExt;

const MPV_BIN: &str = "mpv";

#[derive(Debug, Error)]
pub enum PlayerError {
    #[error("mpv not found. Please install it: https://mpv.io")]
    MpvMissing,
    #[error("failed to launch mpv")]
    Launch(#[source] io::Error),
    #[error("mpv exited with status {0}")]
    Exited(ExitStatus),
}

/// Eager availability probe, run before every playback attempt.
pub fn ensure_available() -> Result<(), PlayerError> {
    let probe = Command::new(MPV_BIN)
        .arg("--version")
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status();
    match probe {
        Ok(_) => Ok(()),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Err(PlayerError::MpvMissing),
        Err(err) => Err(PlayerError::Launch(err)),
    }
}

/// Run mpv on `url`, blocking until it exits (indefinitely for live
/// streams). The child inherits our terminal, and SIGINT is left to the
/// player while it runs: Ctrl-C quits mpv, not the wrapper.
pub fn play(url: &str, video_mode: bool) -> Result<(), PlayerError> {
    ensure_available()?;

    let mut cmd = Command::new(MPV_BIN);
    if !video_mode {
        cmd.arg("--no-video");
    }
    cmd.arg(url)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit());

    let status = with_sigint_ignored(|| run_player_cmd(cmd))?;
    if !status.success() {
        return Err(PlayerError::Exited(status));
    }
    Ok(())
}

#[cfg(unix)]
fn with_sigint_ignored<F>(f: F) -> Result<ExitStatus, PlayerError>
where
    F: FnOnce() -> Result<ExitStatus, PlayerError>,
{
    unsafe {
        let previous = libc::signal(libc::SIGINT, libc::SIG_IGN);
        if previous == libc::SIG_ERR {
            return Err(PlayerError::Launch(io::Error::last_os_error()));
        }
        let result = f();
        libc::signal(libc::SIGINT, previous);
        result
    }
}

#[cfg(not(unix))]
fn with_sigint_ignored<F>(f: F) -> Result<ExitStatus, PlayerError>
where
    F: FnOnce() -> Result<ExitStatus, PlayerError>,
{
    f()
}

#[cfg(unix)]
fn run_player_cmd(mut cmd: Command) -> Result<ExitStatus, PlayerError> {
    // The child must not inherit the ignored disposition.
    unsafe {
        cmd.pre_exec(|| {
            libc::signal(libc::SIGINT, libc::SIG_DFL);
            libc::signal(libc::SIGQUIT, libc::SIG_DFL);
            Ok(())
        });
    }
    cmd.status().map_err(PlayerError::Launch)
}

#[cfg(not(unix))]
fn run_player_cmd(mut cmd: Command) -> Result<ExitStatus, PlayerError> {
    cmd.status().map_err(PlayerError::Launch)
}

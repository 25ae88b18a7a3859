use anyhow::{Context, Result, bail};
use std::path::Path;
use tokio::process::Command;
use tracing::info;

struct Opener {
    program: &'static str,
    /// `explorer.exe` exits with 1 even after opening the window.
    exit_status_reliable: bool,
}

fn file_manager() -> Option<Opener> {
    let (program, exit_status_reliable) = match std::env::consts::OS {
        "windows" => ("explorer", false),
        "macos" => ("open", true),
        "linux" | "freebsd" | "openbsd" | "netbsd" => ("xdg-open", true),
        _ => return None,
    };
    Some(Opener {
        program,
        exit_status_reliable,
    })
}

/// Open `path` in the platform file manager.
pub async fn open_in_file_manager(path: &Path) -> Result<()> {
    let Some(opener) = file_manager() else {
        bail!(
            "Running on an unsupported operating system: {}",
            std::env::consts::OS
        );
    };
    info!(path = %path.display(), program = opener.program, "Opening folder in file manager");
    launch(&opener, path).await
}

async fn launch(opener: &Opener, path: &Path) -> Result<()> {
    let status = Command::new(opener.program)
        .arg(path)
        .status()
        .await
        .with_context(|| format!("launching {}", opener.program))?;
    if opener.exit_status_reliable && !status.success() {
        bail!(
            "{} could not open {} ({status})",
            opener.program,
            path.display()
        );
    }
    Ok(())
}

use std::process::ExitCode;

use anyhow::{Context, Result};

use delve_engine::logging::{LoggingConfig, init_logging};
use delve_ui::{Application, ScreenId};

/// Exit status for window or GPU initialization failure (`-1` as a byte).
const INIT_FAILURE: u8 = 255;

fn main() -> ExitCode {
    init_logging(LoggingConfig::default());

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("delve failed: {e:#}");
            ExitCode::from(INIT_FAILURE)
        }
    }
}

fn run() -> Result<()> {
    let start = start_screen(std::env::args().nth(1))?;

    Application::new()
        .title("Delve")
        .start(start)
        .run()
}

/// Optional first argument: `menu` (default) or `planner`.
fn start_screen(arg: Option<String>) -> Result<ScreenId> {
    match arg {
        None => Ok(ScreenId::MainMenu),
        Some(name) => name
            .parse()
            .with_context(|| format!("invalid start screen argument `{name}`")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_screen_defaults_to_menu() {
        assert_eq!(start_screen(None).ok(), Some(ScreenId::MainMenu));
        assert_eq!(start_screen(Some("planner".into())).ok(), Some(ScreenId::Planner));
        assert!(start_screen(Some("boss".into())).is_err());
    }
}

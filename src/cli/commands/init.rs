use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, info_lines, success};

/// Handle the `init` command
///
/// Creates the config directory, the configuration file and the default
/// reports folder. An existing configuration file is kept as is.
pub fn handle(cli: &Cli) -> AppResult<()> {
    let path = Config::resolve_path(cli.config.as_deref());

    info("Initializing enrollcheck…");
    let created = Config::init_all(cli.config.as_deref())?;

    if created {
        success(format!("Config file created: {}", path.display()));
    } else {
        info(format!("Config file already exists: {}", path.display()));
    }

    let cfg = Config::load(cli.config.as_deref())?;
    info_lines(&[
        format!("Reports folder: {}", cfg.output_dir().display()),
        format!("Date format   : {}", cfg.date_format),
        format!("ADP sheet     : {}", cfg.adp_sheet),
    ]);
    Ok(())
}

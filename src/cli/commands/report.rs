use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::report::{ReportRequest, generate_report};
use crate::errors::AppResult;
use crate::export::notify_export_success;

/// Handle the `report` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Report {
        provider,
        plan,
        adp,
        insurance,
        id_file,
        output,
        no_overwrite,
        csv,
    } = cmd
    {
        let mut request = ReportRequest::new(*provider, *plan, adp.clone()).with_csv(*csv);
        request.insurance = insurance.clone();
        request.id_file = id_file.clone();
        request.output_dir = output.clone();
        if *no_overwrite {
            request = request.with_overwrite(false);
        }

        let path = generate_report(&request, cfg)?;
        notify_export_success("Status report", &path);
        println!("{}", path.display());
    }
    Ok(())
}

use crate::core::strategy::strategy_for;
use crate::errors::AppResult;
use crate::models::ProviderFormat;
use crate::ui::messages::header;
use clap::ValueEnum;

/// Handle the `formats` subcommand
pub fn handle() -> AppResult<()> {
    header("Supported provider formats");

    for format in ProviderFormat::ALL {
        let strategy = strategy_for(format);
        let plans: Vec<&str> = strategy
            .supported_plans()
            .iter()
            .map(|p| p.as_str())
            .collect();

        let flag = format
            .to_possible_value()
            .map(|v| v.get_name().to_string())
            .unwrap_or_default();

        println!("{} (--provider {})", format, flag);
        println!("  direction : {}", strategy.direction().as_str());
        println!("  plans     : {}", plans.join(", "));
        println!("  match key : {}", strategy.match_key());
        println!("  columns   : {}", strategy.required_columns().join(", "));
        if format.needs_id_file() {
            println!("  id file   : Customer Number, SSN");
        }
        println!();
    }
    Ok(())
}

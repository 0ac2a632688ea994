use clap::Parser;
use parcel_rater::utils::logger;
use parcel_rater::{
    CliConfig, Cost, Measurable, Parcel, ParcelCategory, ParcelTag, ParcelValidator, Validator,
    Volume,
};
use std::io::{self, Write};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting parcel-rater CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    let (weight, height, width, depth) = match config.measurements() {
        Some(values) => values,
        None => prompt_measurements()?,
    };

    match rate_parcel(weight, height, width, depth) {
        Ok(tag) => {
            if config.json {
                println!("{}", serde_json::to_string_pretty(&tag)?);
            } else {
                println!("Category: {}", category_label(tag.category));
                println!("Cost: {}", format_cost(&tag.delivery_cost));
            }
        }
        Err(e) => {
            tracing::error!("Rating failed: {}", e);
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}

fn rate_parcel(weight: f64, height: f64, width: f64, depth: f64) -> parcel_rater::Result<ParcelTag> {
    let weight = Measurable::kilograms(weight)?;
    let volume = Volume::from_dimensions(height, width, depth)?;
    let parcel = Parcel::new(weight, volume)?;

    let validator = ParcelValidator::standard()?;
    validator.validate(&parcel)
}

fn prompt_measurements() -> anyhow::Result<(f64, f64, f64, f64)> {
    let weight = prompt("Please enter the weight of the parcel (kg): ")?;
    let height = prompt("Please enter the height of the parcel (cm): ")?;
    let width = prompt("Please enter the width of the parcel (cm): ")?;
    let depth = prompt("Please enter the depth of the parcel (cm): ")?;

    Ok((weight, height, width, depth))
}

fn prompt(message: &str) -> anyhow::Result<f64> {
    print!("{}", message);
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().read_line(&mut line)?;

    // Unparseable input falls through as zero and is rejected by the
    // parcel constructor with a proper message.
    Ok(line.trim().parse().unwrap_or(0.0))
}

fn category_label(category: ParcelCategory) -> &'static str {
    match category {
        ParcelCategory::Rejected => "Rejected Parcel",
        ParcelCategory::Heavy => "Heavy Parcel",
        ParcelCategory::Small => "Small Parcel",
        ParcelCategory::Medium => "Medium Parcel",
        ParcelCategory::Large => "Large Parcel",
    }
}

fn format_cost(cost: &Cost) -> String {
    match cost {
        Cost::NotApplicable => "N/A".to_string(),
        Cost::Amount(money) => format!("${}", money.value().round_dp(2)),
    }
}

use std::{fs, path::PathBuf};

use anyhow::Context;
use clap::Parser;
use itertools::Itertools;
use plates_rs::{
    logging, plate::Plate, plate_config::PlateConfig, settings::Settings, solver::PlateSolver,
    target::Target, weight::Weight, weight_unit::WeightUnit,
};

#[derive(Parser)]
#[command(about = "Works out which plates to load on each side of a barbell")]
struct Args {
    /// Total weights including the bar, e.g. 225, 100kg or 135lb
    #[arg(value_parser = clap::value_parser!(Target), allow_negative_numbers = true)]
    targets: Vec<Target>,

    /// Settings JSON file
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long, value_parser = clap::value_parser!(WeightUnit))]
    unit: Option<WeightUnit>,

    /// Bar weight
    #[arg(long)]
    bar: Option<f64>,

    /// Only use plates that are owned
    #[arg(long)]
    limited: bool,

    /// Plates owned across both sides, e.g. 45x4; implies --limited
    #[arg(long, value_parser = clap::value_parser!(Plate))]
    owned: Vec<Plate>,

    /// Plate sizes to use when supply is unlimited, replacing the saved selection
    #[arg(long, value_delimiter = ',')]
    select: Vec<f64>,
}

fn main() -> anyhow::Result<()> {
    logging::init();
    let args = Args::parse();

    let config = configure(&args)?;
    let unit = config.conversion_type();

    if args.targets.is_empty() {
        print_config(&config);
        return Ok(());
    }

    let solver = PlateSolver::new(&config);
    for target in &args.targets {
        let weight = target.in_unit(unit);
        let solution = solver.solve(weight);

        println!("{weight} {unit}");
        if solution.is_invalid() {
            println!("  invalid target");
            continue;
        }

        println!("  {:<18}Total", "Plates per side");
        for plate in solution.iter() {
            println!("  {:<18}{}", plate.to_string(), plate.total());
        }
        if !solution.is_exact() {
            println!("  Leftover: {} {unit}", solution.leftover());
        }

        let loaded = solver.loaded_weight(&solution);
        let other = unit.toggled();
        println!(
            "  Loaded: {loaded} {unit} ({} {other})",
            unit.convert(loaded, other)
        );
    }

    Ok(())
}

fn configure(args: &Args) -> anyhow::Result<PlateConfig> {
    let settings = match &args.config {
        Some(path) => {
            let json = fs::read_to_string(path)
                .with_context(|| format!("Could not read {}", path.display()))?;
            Settings::from_json(&json)
                .with_context(|| format!("Could not load {}", path.display()))?
        }
        None => Settings::default(),
    };

    let settings = match args.unit {
        Some(unit) => settings.with_current_unit(unit),
        None => settings,
    };

    let mut config = settings.current_config().clone();

    if let Some(bar) = args.bar {
        config = config.with_barbell_weight(Weight::from_units(bar))?;
    }

    if !args.owned.is_empty() {
        config = config.with_plates_owned(args.owned.iter().copied())?;
    }
    if args.limited || !args.owned.is_empty() {
        config = config.with_limited_plates(true);
    }

    if !args.select.is_empty() {
        let previous = config.selected_plates().clone();
        config = previous
            .into_iter()
            .fold(config, |config, weight| config.with_plate_selected(weight, false));
        config = args.select.iter().fold(config, |config, weight| {
            config.with_plate_selected(Weight::from_units(*weight), true)
        });
    }

    Ok(config)
}

fn print_config(config: &PlateConfig) {
    let unit = config.conversion_type();

    println!("Unit: {}", unit.abbreviation());
    println!("Bar weight: {}", config.barbell_weight());
    println!(
        "Limited number of plates: {}",
        if config.use_limited_plates() { "on" } else { "off" }
    );
    println!("Plates:");
    for plate in config
        .available_plates()
        .iter()
        .sorted_by(|a, b| b.weight().cmp(&a.weight()))
    {
        let mark = if config.is_selected(plate.weight()) { "x" } else { " " };
        println!("  [{mark}] {} {unit} (owned: {})", plate.weight(), plate.amount());
    }
}

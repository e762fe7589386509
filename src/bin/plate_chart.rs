use anyhow::ensure;
use clap::Parser;
use plates_rs::{
    logging, plate_config::PlateConfig, solver::PlateSolver, weight::Weight,
    weight_unit::WeightUnit,
};

/// Prints the plates per side for every target in a range.
#[derive(Parser)]
struct Args {
    #[arg(long, default_value = "lb", value_parser = clap::value_parser!(WeightUnit))]
    unit: WeightUnit,

    /// First target, defaults to the bar weight
    #[arg(long)]
    from: Option<f64>,

    /// Last target, defaults to 100 above the first
    #[arg(long)]
    to: Option<f64>,

    /// Defaults to twice the lightest enabled plate
    #[arg(long)]
    step: Option<f64>,
}

fn main() -> anyhow::Result<()> {
    logging::init();
    let args = Args::parse();

    let config = PlateConfig::standard(args.unit);
    let solver = PlateSolver::new(&config);

    let from = args
        .from
        .map_or(config.barbell_weight(), Weight::from_units);
    let to = args
        .to
        .map_or(from + Weight::from_units(100.0), Weight::from_units);
    let step = match args.step {
        Some(step) => Weight::from_units(step),
        None => config
            .selected_plates()
            .first()
            .map_or(config.conversion_type().bar_increment(), |lightest| {
                *lightest * 2
            }),
    };

    ensure!(step.is_positive(), "Step must be positive, got {step}");
    ensure!(from <= to, "Range is empty: {from} to {to}");

    let step = usize::try_from(step.thousandths())?;
    for thousandths in (from.thousandths()..=to.thousandths()).step_by(step) {
        let target = Weight::from_thousandths(thousandths);
        println!("{target:>8} {}: {}", args.unit, solver.solve_weight(target));
    }

    Ok(())
}

use clap::Parser;
use rocket_burn::constants::{DEFAULT_PLOT_POINTS, DEFAULT_STEPS, DEFAULT_TERMS};
use rocket_burn::report::{render_report, write_trajectory_csv};
use rocket_burn::{
    AussieInvader5R, IntegrationMethod, RocketParameters, SimulationParams, SimulationRunner,
};
use std::error::Error;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Burn-phase velocity of a rocket car, integrated numerically and checked against the analytical series."
)]
struct Cli {
    /// Integration steps over the burn
    #[arg(long, default_value_t = DEFAULT_STEPS)]
    steps: usize,

    /// Series terms for the analytical curve
    #[arg(long, default_value_t = DEFAULT_TERMS)]
    terms: usize,

    #[arg(long, value_enum, ignore_case = true, default_value_t = IntegrationMethod::RungeKutta4)]
    method: IntegrationMethod,

    /// Samples of the analytical curve
    #[arg(long, default_value_t = DEFAULT_PLOT_POINTS)]
    plot_points: usize,

    /// Skip the analytical solve
    #[arg(long)]
    no_analytical: bool,

    #[arg(long, default_value = "output")]
    output_dir: PathBuf,
}

impl Cli {
    fn params(&self) -> SimulationParams {
        SimulationParams {
            steps: self.steps,
            terms: self.terms,
            method: self.method,
            show_analytical: !self.no_analytical,
            plot_points: self.plot_points,
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    let params = cli.params();
    let parameters = RocketParameters::from_properties(&AussieInvader5R)?;

    // Keep the solve off the main thread
    let runner = SimulationRunner::new(parameters);
    let outcome = runner.spawn(params.clone())?.join()?;

    println!();
    println!("{}", render_report(&params, &outcome));

    write_trajectory_csv(&outcome.numerical, &cli.output_dir.join("numerical.csv"))?;
    if let Some(analytical) = &outcome.analytical {
        write_trajectory_csv(analytical, &cli.output_dir.join("analytical.csv"))?;
    }

    Ok(())
}

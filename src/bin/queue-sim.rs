use queue_sim::config::{self, Command, FormatArg};
use queue_sim::engine;
use queue_sim::error::Result;
use queue_sim::mmc;
use queue_sim::output::{
    format_mmc, format_params, Formatter, HumanFormatter, JsonFormatter, SummaryFormatter,
};

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = config::parse_args()?;
    match cli.command {
        Command::Run(args) => {
            let params = config::build_params(&args)?;
            let result = engine::run_simulation(&params)?;
            let formatter = formatter_for(&args.format);
            print!("{}", formatter.write(&result));
        }
        Command::Mmc(args) => {
            let metrics = mmc::calculate_mmc(args.lambda, args.mu, args.servers)?;
            print!("{}", format_mmc(&metrics));
        }
        Command::ShowConfig(args) => {
            let params = config::build_params(&args)?;
            params.validate()?;
            print!("{}", format_params(&params));
        }
    }
    Ok(())
}

fn formatter_for(format: &FormatArg) -> Box<dyn Formatter> {
    match format {
        FormatArg::Human => Box::new(HumanFormatter),
        FormatArg::Summary => Box::new(SummaryFormatter),
        FormatArg::Json => Box::new(JsonFormatter),
    }
}

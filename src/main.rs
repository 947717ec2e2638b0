//! Command line interface to the greedy job dispatcher.

use anyhow::{anyhow, Context, Result};
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use std::fs::File;
use std::io::{stdin, stdout, BufReader, BufWriter, Read, Write};
use std::sync::Arc;
use std::time::Duration;
use u_dispatch::config::{AssignmentConfig, AssignmentStrategy, InfoLogger, RouteKey};
use u_dispatch::constructive::greedy_assignment;
use u_dispatch::evaluation::check_solution;
use u_dispatch::format::{read_problem, write_solution};

fn cli() -> Command {
    let solve = Command::new("solve")
        .about("Assigns jobs of a problem file to vehicles")
        .arg(
            Arg::new("PROBLEM")
                .help("Problem json file, or '-' for stdin")
                .required(true)
                .value_parser(value_parser!(String)),
        )
        .arg(
            Arg::new("out-result")
                .help("File to write the solution to, stdout if omitted")
                .short('o')
                .long("out-result")
                .value_parser(value_parser!(String)),
        )
        .arg(
            Arg::new("check")
                .help("Checks the solution invariants before writing it")
                .long("check")
                .action(ArgAction::SetTrue),
        );

    let mut app = Command::new("u-dispatch")
        .about("Greedy capacity-aware job dispatcher")
        .arg_required_else_help(true)
        .subcommand(with_config_args(solve));

    if cfg!(feature = "server") {
        app = app.subcommand(with_config_args(
            Command::new("serve")
                .about("Serves POST /create-routes-service over HTTP")
                .arg(
                    Arg::new("port")
                        .help("Port to listen on")
                        .long("port")
                        .default_value("8080")
                        .value_parser(value_parser!(u16)),
                ),
        ));
    }

    app
}

fn with_config_args(command: Command) -> Command {
    command
        .arg(
            Arg::new("strategy")
                .help("Which location a selected vehicle is sent to")
                .long("strategy")
                .default_value("job-order")
                .value_parser(["job-order", "nearest-location"]),
        )
        .arg(
            Arg::new("route-key")
                .help("Key routes by declared vehicle id or by 1-based position")
                .long("route-key")
                .default_value("id")
                .value_parser(["id", "position"]),
        )
        .arg(
            Arg::new("max-time")
                .help("Time limit in seconds")
                .long("max-time")
                .value_parser(value_parser!(f64)),
        )
        .arg(
            Arg::new("log")
                .help("Writes progress to stderr")
                .long("log")
                .action(ArgAction::SetTrue),
        )
}

fn create_config(matches: &ArgMatches) -> Result<AssignmentConfig> {
    let strategy = matches
        .get_one::<String>("strategy")
        .map(|s| s.parse::<AssignmentStrategy>())
        .transpose()
        .map_err(|err| anyhow!(err))?
        .unwrap_or_default();
    let route_key = matches
        .get_one::<String>("route-key")
        .map(|s| s.parse::<RouteKey>())
        .transpose()
        .map_err(|err| anyhow!(err))?
        .unwrap_or_default();

    let mut config = AssignmentConfig::new()
        .with_strategy(strategy)
        .with_route_key(route_key);

    if let Some(&seconds) = matches.get_one::<f64>("max-time") {
        let limit = Duration::try_from_secs_f64(seconds)
            .map_err(|err| anyhow!("invalid max-time '{seconds}': {err}"))?;
        config = config.with_max_time(limit);
    }
    if matches.get_flag("log") {
        let logger: InfoLogger = Arc::new(|msg: &str| eprintln!("[u-dispatch] {msg}"));
        config = config.with_logger(logger);
    }

    Ok(config)
}

fn open_problem(path: &str) -> Result<BufReader<Box<dyn Read>>> {
    let reader: Box<dyn Read> = if path == "-" {
        Box::new(stdin())
    } else {
        Box::new(File::open(path).with_context(|| format!("cannot open problem file '{path}'"))?)
    };
    Ok(BufReader::new(reader))
}

fn create_write_buffer(path: Option<&String>) -> Result<BufWriter<Box<dyn Write>>> {
    let writer: Box<dyn Write> = match path {
        Some(path) => Box::new(
            File::create(path).with_context(|| format!("cannot create result file '{path}'"))?,
        ),
        None => Box::new(stdout()),
    };
    Ok(BufWriter::new(writer))
}

fn run_solve(matches: &ArgMatches) -> Result<()> {
    let config = create_config(matches)?;
    let path = matches
        .get_one::<String>("PROBLEM")
        .ok_or_else(|| anyhow!("problem file is required"))?;

    let problem = read_problem(open_problem(path)?)?;
    let solution = greedy_assignment(&problem, &config)?;

    if matches.get_flag("check") {
        let violations = check_solution(&problem, &solution);
        if !violations.is_empty() {
            let details = violations
                .iter()
                .map(|v| format!("{:?}", v.kind))
                .collect::<Vec<_>>()
                .join("\n");
            return Err(anyhow!("checker found {} violations:\n{details}", violations.len()));
        }
        config.log("solution check passed");
    }

    let writer = create_write_buffer(matches.get_one::<String>("out-result"))?;
    write_solution(writer, &solution, config.route_key()).context("cannot write solution")?;
    if matches.get_one::<String>("out-result").is_none() {
        println!();
    }

    Ok(())
}

#[cfg(feature = "server")]
fn run_serve(matches: &ArgMatches) -> Result<()> {
    let config = create_config(matches)?;
    let port = matches.get_one::<u16>("port").copied().unwrap_or(8080);
    let runtime = tokio::runtime::Runtime::new().context("cannot start runtime")?;
    runtime.block_on(u_dispatch::server::serve(port, config));
    Ok(())
}

#[cfg(not(feature = "server"))]
fn run_serve(_matches: &ArgMatches) -> Result<()> {
    Err(anyhow!("built without the 'server' feature"))
}

fn main() {
    let matches = cli().get_matches();

    if let Err(e) = match matches.subcommand() {
        Some(("solve", sub_m)) => run_solve(sub_m),
        Some(("serve", sub_m)) => run_serve(sub_m),
        _ => Err(anyhow!("Invalid subcommand")),
    } {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

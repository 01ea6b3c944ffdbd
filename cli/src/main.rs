#[macro_use]
extern crate log;

mod params;

use tract_core::internal::*;

use crate::params::Parameters;

fn main() {
    let matches = app().get_matches();

    let level = match matches.occurrences_of("verbosity") {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env = env_logger::Env::default().filter_or(env_logger::DEFAULT_FILTER_ENV, level);
    env_logger::Builder::from_env(env).format_timestamp_nanos().init();

    if let Err(e) = handle(&matches) {
        error!("{e:?}");
        std::process::exit(1)
    }
}

fn app() -> clap::App<'static> {
    use clap::*;
    App::new("nnef-freeze")
        .version(crate_version!())
        .about("Freezes an ONNX checkpoint into a self-contained NNEF archive")
        .arg(Arg::new("checkpoint").required(true).help("ONNX model to convert"))
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .takes_value(true)
                .default_value(nnef_freeze::DEFAULT_OUTPUT)
                .help("Archive to write, silently replaced if it exists"),
        )
        .arg(
            Arg::new("input")
                .short('i')
                .long("input")
                .takes_value(true)
                .multiple_occurrences(true)
                .number_of_values(1)
                .help("Override input fact, in input order (1x3x224x224xf32)"),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .takes_value(true)
                .possible_values(["tgz", "tar.gz", "tar"])
                .help("Archive format [default: guessed from output name]"),
        )
        .arg(
            Arg::new("nnef-extended-identifier")
                .long("nnef-extended-identifier")
                .help("Allow extended identifier syntax in graph.nnef"),
        )
        .arg(
            Arg::new("verify")
                .long("verify")
                .help("Reload the archive and compare it with the converted graph"),
        )
        .arg(
            Arg::new("seed")
                .long("seed")
                .takes_value(true)
                .default_value("0")
                .help("Seed of the verification input"),
        )
        .arg(Arg::new("quiet").short('q').long("quiet").help("Do not print the summary"))
        .arg(
            Arg::new("verbosity")
                .short('v')
                .multiple_occurrences(true)
                .help("Sets the level of verbosity."),
        )
}

fn handle(matches: &clap::ArgMatches) -> TractResult<()> {
    let params = Parameters::from_clap(matches)?;
    info!("Freezing {:?} into {:?}", params.freeze.checkpoint, params.freeze.output);
    let report = params.freeze.run()?;
    if !params.quiet {
        println!("{report}");
    }
    Ok(())
}

use nnef_freeze::{ArchiveFormat, Freeze, InputSpec};
use tract_core::internal::*;

/// Structure holding the parsed parameters.
#[derive(Debug)]
pub struct Parameters {
    pub freeze: Freeze,
    pub quiet: bool,
}

impl Parameters {
    pub fn from_clap(matches: &clap::ArgMatches) -> TractResult<Parameters> {
        let checkpoint = matches.value_of("checkpoint").context("Checkpoint argument required")?;
        let output = matches.value_of("output").unwrap_or(nnef_freeze::DEFAULT_OUTPUT);
        let mut freeze = Freeze::new(checkpoint, output)
            .with_extended_identifiers(matches.is_present("nnef-extended-identifier"));

        if let Some(format) = matches.value_of("format") {
            freeze = freeze.with_format(format.parse::<ArchiveFormat>()?);
        }

        if let Some(inputs) = matches.values_of("input") {
            for input in inputs {
                freeze = freeze.with_input(input.parse::<InputSpec>()?);
            }
        }

        if matches.is_present("verify") {
            let seed: u64 = matches.value_of_t("seed")?;
            freeze = freeze.with_verification(seed);
        }

        Ok(Parameters { freeze, quiet: matches.is_present("quiet") })
    }
}

#[macro_use]
extern crate log;

pub mod convert;
pub mod input;
pub mod load;
pub mod stage;
pub mod verify;
pub mod write;

use std::path::{Path, PathBuf};

use tract_core::internal::*;

pub use self::convert::{convert, parameter_count};
pub use self::input::InputSpec;
pub use self::load::load;
pub use self::stage::{Stage, StageContext};
pub use self::verify::{verify, Verification};
pub use self::write::{nnef, write, ArchiveFormat};

/// Default archive name, written in the current working directory.
pub const DEFAULT_OUTPUT: &str = "model.nnef.tgz";

/// One load, convert, write run (plus optional verification).
#[derive(Clone, Debug, PartialEq)]
pub struct Freeze {
    pub checkpoint: PathBuf,
    pub output: PathBuf,
    pub format: ArchiveFormat,
    pub inputs: Vec<InputSpec>,
    pub extended_identifiers: bool,
    /// Seed of the verification input. `None` skips verification.
    pub verify: Option<u64>,
}

impl Freeze {
    pub fn new(checkpoint: impl AsRef<Path>, output: impl AsRef<Path>) -> Freeze {
        let output = output.as_ref().to_path_buf();
        Freeze {
            checkpoint: checkpoint.as_ref().to_path_buf(),
            format: ArchiveFormat::for_path(&output),
            output,
            inputs: vec![],
            extended_identifiers: false,
            verify: None,
        }
    }

    pub fn with_format(self, format: ArchiveFormat) -> Freeze {
        Freeze { format, ..self }
    }

    pub fn with_input(mut self, spec: InputSpec) -> Freeze {
        self.inputs.push(spec);
        self
    }

    pub fn with_extended_identifiers(self, extended_identifiers: bool) -> Freeze {
        Freeze { extended_identifiers, ..self }
    }

    pub fn with_verification(self, seed: u64) -> Freeze {
        Freeze { verify: Some(seed), ..self }
    }

    pub fn run(&self) -> TractResult<Report> {
        let model = load(&self.checkpoint, &self.inputs).stage(Stage::Load)?;
        let typed = convert(model).stage(Stage::Convert)?;

        let nnef = nnef(self.extended_identifiers);
        write(&nnef, &typed, &self.output, self.format).stage(Stage::Write)?;

        let verification = if let Some(seed) = self.verify {
            Some(verify(&nnef, &typed, &self.output, seed).stage(Stage::Verify)?)
        } else {
            None
        };

        Ok(Report {
            output: self.output.clone(),
            format: self.format,
            nodes: typed.nodes().len(),
            parameters: parameter_count(&typed),
            verification,
        })
    }
}

/// Summary of a successful run.
#[derive(Clone, Debug, PartialEq)]
pub struct Report {
    pub output: PathBuf,
    pub format: ArchiveFormat,
    pub nodes: usize,
    pub parameters: usize,
    pub verification: Option<Verification>,
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Wrote {:?} ({}, {} nodes, {} parameters)",
            self.output, self.format, self.nodes, self.parameters
        )?;
        if let Some(v) = &self.verification {
            write!(f, ", verified {} output(s)", v.outputs)?;
        }
        Ok(())
    }
}

use std::path::Path;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use tract_nnef::internal::*;

use crate::convert::parameter_count;

/// Outcome of a successful archive verification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Verification {
    pub parameters: usize,
    pub outputs: usize,
}

/// Reloads the archive at `path` and checks it against `model`.
///
/// Both graphs must hold the same number of parameters and produce close
/// outputs for the same pseudo-random input, generated from `seed`.
pub fn verify(
    nnef: &Nnef,
    model: &TypedModel,
    path: impl AsRef<Path>,
    seed: u64,
) -> TractResult<Verification> {
    let path = path.as_ref();
    let reloaded = nnef
        .model_for_path(path)
        .with_context(|| format!("Reloading {path:?}"))?
        .into_decluttered()
        .context("Decluttering reloaded model")?;

    let parameters = parameter_count(model);
    let found = parameter_count(&reloaded);
    if parameters != found {
        bail!("Parameter count mismatch: converted model has {parameters}, archive has {found}")
    }

    let inputs = random_inputs(model, seed)?;
    let expected = run(model, inputs.clone()).context("Running converted model")?;
    let got = run(&reloaded, inputs).context("Running reloaded model")?;
    if expected.len() != got.len() {
        bail!("Number of outputs differ: converted:{}, reloaded:{}", expected.len(), got.len())
    }
    for (ix, (got, expected)) in got.iter().zip(expected.iter()).enumerate() {
        got.close_enough(expected, true).with_context(|| format!("Checking output #{ix}"))?;
        debug!("Output #{ix} checked: {:?}", got.shape());
    }

    info!("Verified {path:?}: {parameters} parameters, {} outputs", got.len());
    Ok(Verification { parameters, outputs: got.len() })
}

/// One deterministic input per model input, uniform in `[-1, 1)` before the
/// cast to the input datum type. Input shapes must be concrete.
pub fn random_inputs(model: &TypedModel, seed: u64) -> TractResult<TVec<TValue>> {
    let mut rng = SmallRng::seed_from_u64(seed);
    model
        .input_outlets()?
        .iter()
        .enumerate()
        .map(|(ix, outlet)| -> TractResult<TValue> {
            let fact = model.outlet_fact(*outlet)?;
            let shape = fact.shape.as_concrete().with_context(|| {
                format!("Input #{ix} has symbolic shape {:?}, set it explicitly to verify", fact.shape)
            })?;
            let values = tract_ndarray::ArrayD::<f32>::from_shape_fn(shape, |_| {
                rng.gen_range(-1.0f32..1.0)
            });
            let tensor = values.into_tensor().cast_to_dt(fact.datum_type)?.into_owned();
            Ok(tensor.into_tvalue())
        })
        .collect()
}

fn run(model: &TypedModel, inputs: TVec<TValue>) -> TractResult<TVec<TValue>> {
    model.clone().into_optimized()?.into_runnable()?.run(inputs)
}

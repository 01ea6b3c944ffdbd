use std::path::Path;

use tract_hir::internal::*;

use crate::input::InputSpec;

/// Loads an ONNX checkpoint, overriding its leading input facts with `inputs`.
pub fn load(path: impl AsRef<Path>, inputs: &[InputSpec]) -> TractResult<InferenceModel> {
    let path = path.as_ref();
    if !path.exists() {
        bail!("model not found: {:?}", path)
    } else if !path.is_file() {
        bail!("model is not a file: {:?}", path)
    }

    let onnx = tract_onnx::onnx();
    let proto = onnx
        .proto_model_for_path(path)
        .with_context(|| format!("Reading ONNX protobuf from {path:?}"))?;
    let mut model = onnx
        .model_for_proto_model(&proto)
        .with_context(|| format!("Building model from {path:?}"))?;
    info!("Model {:?} loaded ({} nodes)", path, model.nodes().len());

    let input_count = model.input_outlets()?.len();
    if inputs.len() > input_count {
        bail!("{} input facts given, but model only has {} inputs", inputs.len(), input_count)
    }
    for (ix, spec) in inputs.iter().enumerate() {
        debug!("Setting input #{ix} to {spec}");
        model
            .set_input_fact(ix, spec.to_fact())
            .with_context(|| format!("Setting input #{ix} to {spec}"))?;
    }
    // declared output shapes may name symbols the overrides just made concrete
    if !inputs.is_empty() {
        for ix in 0..model.output_outlets()?.len() {
            model.set_output_fact(ix, InferenceFact::default())?;
        }
    }

    Ok(model)
}

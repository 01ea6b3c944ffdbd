use tract_core::internal::*;
use tract_core::ops::konst::Const;
use tract_hir::prelude::{InferenceModel, InferenceModelExt};

/// Types every node of the model and declutters the result.
///
/// The whole graph goes through shape and type inference: symbolic dimensions
/// stay symbolic and no concrete execution is recorded. Any operator the
/// analysis can not type fails the conversion; there is no partial graph.
pub fn convert(model: InferenceModel) -> TractResult<TypedModel> {
    let nodes = model.nodes().len();
    let typed = model.into_typed().context("Analysing model into a typed graph")?;
    debug!("Typed model: {} nodes (from {})", typed.nodes().len(), nodes);
    let decluttered = typed.into_decluttered().context("Decluttering typed graph")?;
    info!(
        "Converted {} nodes into {} nodes, {} parameters",
        nodes,
        decluttered.nodes().len(),
        parameter_count(&decluttered)
    );
    Ok(decluttered)
}

/// Number of scalar elements held by the constant nodes of `model`.
pub fn parameter_count(model: &TypedModel) -> usize {
    model.nodes().iter().filter_map(|n| n.op_as::<Const>()).map(|k| k.val().len()).sum()
}

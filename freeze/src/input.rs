use std::str::FromStr;

use tract_core::internal::*;
use tract_hir::infer::InferenceFact;

/// Input fact override, written like `1x3x224x224xf32`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InputSpec {
    pub shape: TVec<usize>,
    pub datum_type: DatumType,
}

impl InputSpec {
    pub fn new(datum_type: DatumType, shape: &[usize]) -> InputSpec {
        InputSpec { shape: shape.into(), datum_type }
    }

    pub fn to_fact(&self) -> InferenceFact {
        TypedFact::dt_shape(self.datum_type, self.shape.clone()).into()
    }
}

impl FromStr for InputSpec {
    type Err = TractError;

    fn from_str(s: &str) -> TractResult<InputSpec> {
        let mut tokens: Vec<&str> = s.split('x').collect();
        let dt = tokens
            .pop()
            .filter(|t| !t.is_empty())
            .with_context(|| format!("Missing datum type in input spec {s:?}"))?;
        let datum_type = DatumType::from_str(dt)
            .with_context(|| format!("Unknown datum type {dt:?} in input spec {s:?}"))?;
        let shape = tokens
            .iter()
            .map(|d| {
                d.parse::<usize>()
                    .with_context(|| format!("Can not parse dimension {d:?} in input spec {s:?}"))
            })
            .collect::<TractResult<TVec<usize>>>()?;
        Ok(InputSpec { shape, datum_type })
    }
}

impl std::fmt::Display for InputSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for d in &self.shape {
            write!(f, "{d}x")?;
        }
        write!(f, "{}", format!("{:?}", self.datum_type).to_lowercase())
    }
}

use tract_core::internal::*;

/// Pipeline stage a failure belongs to.
///
/// Attached to errors as context: recover it with [`Stage::of`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Stage {
    Load,
    Convert,
    Write,
    Verify,
}

impl Stage {
    pub fn of(error: &TractError) -> Option<Stage> {
        error.downcast_ref::<Stage>().copied()
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Stage::Load => "Loading checkpoint",
            Stage::Convert => "Converting to a static graph",
            Stage::Write => "Writing NNEF archive",
            Stage::Verify => "Verifying NNEF archive",
        };
        write!(f, "{s} failed")
    }
}

pub trait StageContext<T> {
    fn stage(self, stage: Stage) -> TractResult<T>;
}

impl<T> StageContext<T> for TractResult<T> {
    fn stage(self, stage: Stage) -> TractResult<T> {
        self.context(stage)
    }
}

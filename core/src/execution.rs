//! Execution policy for materialization.

/// How a materialization walks its source.
///
/// `Parallel` is a hint: it takes effect only for random-access views and only
/// when the crate is built with the `parallel` feature. Otherwise the
/// sequential path runs. Both produce the same output in source order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Execution {
    #[default]
    Sequential,
    Parallel,
}

impl Execution {
    pub fn is_parallel(self) -> bool {
        matches!(self, Execution::Parallel)
    }
}

/// Default bond type for a molecular graph edge.
///
/// Topological descriptors treat every bond as a single unweighted edge, so
/// the default edge weight carries no data. [`Mol`](crate::Mol) stays generic
/// over its edge type for callers that attach richer bond information.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Bond;

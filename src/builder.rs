use petgraph::graph::NodeIndex;

use crate::atom::Atom;
use crate::bond::Bond;
use crate::mol::Mol;

/// Errors produced when constructing a molecular graph from atom/bond lists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// A bond references an out-of-range atom index or joins an atom to itself.
    InvalidTopology {
        a: usize,
        b: usize,
        atom_count: usize,
    },
    /// The atom index set is not a dense 0-based range: an index is repeated
    /// or falls outside `0..atom_count`.
    InvalidAtomIndexing { index: usize, atom_count: usize },
}

impl std::fmt::Display for GraphError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidTopology { a, b, atom_count } => {
                write!(f, "bond ({a}, {b}) is invalid for {atom_count} atoms")
            }
            Self::InvalidAtomIndexing { index, atom_count } => {
                write!(
                    f,
                    "atom index {index} is duplicated or outside the dense range 0..{atom_count}"
                )
            }
        }
    }
}

impl std::error::Error for GraphError {}

/// Build a molecular graph from an externally supplied atom and bond list.
///
/// Atom indices must form a dense 0-based range with each index appearing
/// exactly once; the list itself may be in any order. Bonds must join two
/// distinct in-range atoms. Repeated bonds between the same pair (in either
/// orientation) are deduplicated, keeping the graph simple.
///
/// This is a validating constructor: malformed input fails here, before any
/// distance or descriptor computation can see the graph. Non-dense indexing
/// is rejected rather than silently re-indexed, so the caller's atom indices
/// and the graph's node indices always agree.
///
/// # Errors
///
/// [`GraphError::InvalidAtomIndexing`] for a duplicate or out-of-range atom
/// index, [`GraphError::InvalidTopology`] for a bond whose endpoints are out
/// of range or equal.
///
/// # Examples
///
/// ```
/// use molrac::build_mol;
///
/// // water: O bonded to two H
/// let mol = build_mol(&[(0, "O"), (1, "H"), (2, "H")], &[(0, 1), (0, 2)]).unwrap();
/// assert_eq!(mol.atom_count(), 3);
/// assert_eq!(mol.bond_count(), 2);
/// ```
pub fn build_mol(
    atoms: &[(usize, &str)],
    bonds: &[(usize, usize)],
) -> Result<Mol<Atom, Bond>, GraphError> {
    let n = atoms.len();
    let mut symbols: Vec<Option<&str>> = vec![None; n];
    for &(index, symbol) in atoms {
        let slot = symbols
            .get_mut(index)
            .ok_or(GraphError::InvalidAtomIndexing {
                index,
                atom_count: n,
            })?;
        if slot.is_some() {
            return Err(GraphError::InvalidAtomIndexing {
                index,
                atom_count: n,
            });
        }
        *slot = Some(symbol);
    }

    let mut mol = Mol::new();
    for symbol in symbols {
        // every slot is filled: n entries, all distinct, all in range
        mol.add_atom(Atom::new(symbol.unwrap_or_default()));
    }

    for &(a, b) in bonds {
        if a == b || a >= n || b >= n {
            return Err(GraphError::InvalidTopology {
                a,
                b,
                atom_count: n,
            });
        }
        let (na, nb) = (NodeIndex::new(a), NodeIndex::new(b));
        if mol.bond_between(na, nb).is_none() {
            mol.add_bond(na, nb, Bond);
        }
    }

    Ok(mol)
}

/// Build a molecular graph from a positional symbol list.
///
/// Convenience over [`build_mol`] for the common case where atom `i` is
/// simply the `i`-th entry of `symbols`.
pub fn mol_from_symbols(
    symbols: &[&str],
    bonds: &[(usize, usize)],
) -> Result<Mol<Atom, Bond>, GraphError> {
    let atoms: Vec<(usize, &str)> = symbols.iter().copied().enumerate().collect();
    build_mol(&atoms, bonds)
}

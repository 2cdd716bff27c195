//! Revised autocorrelation function (RAC) descriptors.
//!
//! For each requested topological distance, sums the pairwise product and the
//! pairwise absolute difference of a per-atom property over every unordered
//! atom pair at exactly that bond-count distance.

use std::collections::BTreeMap;

use crate::graph_ops::{distance_matrix, UNREACHABLE};
use crate::mol::Mol;
use crate::property::PropertyTable;
use crate::traits::HasSymbol;

/// The two RAC aggregates for one topological distance.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RacValue {
    /// Σ p(i)·p(j) over unordered pairs {i, j} at the distance.
    pub product_sum: f64,
    /// Σ |p(i) − p(j)| over the same pairs.
    pub difference_sum: f64,
}

/// Compute RAC descriptors for each distance in `distances`.
///
/// Atom properties are resolved through `table` (unknown symbols contribute
/// the 0.0 fallback value). Each unordered pair is counted exactly once, in
/// increasing `(i, j)` order, so results are deterministic for a fixed graph
/// and table. A distance with no qualifying pairs (zero, beyond the graph
/// diameter, or in a graph too disconnected to realize it) yields
/// `RacValue::default()`; unreachable pairs never qualify.
///
/// # Examples
///
/// ```
/// use molrac::{mol_from_symbols, rac_descriptors, PropertyTable};
///
/// let mol = mol_from_symbols(&["C", "C", "O"], &[(0, 1), (1, 2)]).unwrap();
/// let en = PropertyTable::pauling_electronegativity();
/// let racs = rac_descriptors(&mol, &en, &[1, 2]);
/// assert!((racs[&2].product_sum - 2.55 * 3.44).abs() < 1e-12);
/// ```
pub fn rac_descriptors<A: HasSymbol, B>(
    mol: &Mol<A, B>,
    table: &PropertyTable,
    distances: &[usize],
) -> BTreeMap<usize, RacValue> {
    let dist = distance_matrix(mol);
    let props: Vec<f64> = mol
        .atoms()
        .map(|idx| table.value(mol.atom(idx).symbol()))
        .collect();

    let mut result = BTreeMap::new();
    for &d in distances {
        result.insert(d, rac_at_distance(&dist, &props, d));
    }
    result
}

fn rac_at_distance(dist: &[Vec<usize>], props: &[f64], d: usize) -> RacValue {
    let mut rac = RacValue::default();
    // the sentinel can never be a realized bond count; matching it would
    // sweep unreachable pairs into the sums
    if d == UNREACHABLE {
        return rac;
    }
    let n = props.len();
    for i in 0..n {
        for j in (i + 1)..n {
            if dist[i][j] == d {
                rac.product_sum += props[i] * props[j];
                rac.difference_sum += (props[i] - props[j]).abs();
            }
        }
    }
    rac
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::mol_from_symbols;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-12
    }

    #[test]
    fn three_atom_chain() {
        // p(A)=3.0, p(B)=3.0, p(C)=3.16 on A-B-C
        let mol = mol_from_symbols(&["A", "B", "C"], &[(0, 1), (1, 2)]).unwrap();
        let table = PropertyTable::from_pairs([("A", 3.0), ("B", 3.0), ("C", 3.16)]);
        let racs = rac_descriptors(&mol, &table, &[1, 2]);

        assert!(approx_eq(racs[&1].product_sum, 3.0 * 3.0 + 3.0 * 3.16));
        assert!(approx_eq(racs[&1].difference_sum, 0.16));
        assert!(approx_eq(racs[&2].product_sum, 3.0 * 3.16));
        assert!(approx_eq(racs[&2].difference_sum, 0.16));
    }

    #[test]
    fn disconnected_pairs_excluded() {
        // two isolated atoms: no qualifying pairs at any distance
        let mol = mol_from_symbols(&["Na", "Cl"], &[]).unwrap();
        let table = PropertyTable::pauling_electronegativity();
        let racs = rac_descriptors(&mol, &table, &[1, 2, 3]);
        for rac in racs.values() {
            assert_eq!(rac.product_sum, 0.0);
            assert_eq!(rac.difference_sum, 0.0);
        }
    }

    #[test]
    fn partially_disconnected_graph() {
        // C-C fragment plus an isolated O: only the bonded pair contributes
        let mol = mol_from_symbols(&["C", "C", "O"], &[(0, 1)]).unwrap();
        let table = PropertyTable::pauling_electronegativity();
        let racs = rac_descriptors(&mol, &table, &[1]);
        assert!(approx_eq(racs[&1].product_sum, 2.55 * 2.55));
        assert_eq!(racs[&1].difference_sum, 0.0);
    }

    #[test]
    fn distance_beyond_diameter_is_zero() {
        let mol = mol_from_symbols(&["C", "C", "O"], &[(0, 1), (1, 2)]).unwrap();
        let table = PropertyTable::pauling_electronegativity();
        let racs = rac_descriptors(&mol, &table, &[7]);
        assert_eq!(racs[&7], RacValue::default());
    }

    #[test]
    fn distance_zero_is_degenerate() {
        let mol = mol_from_symbols(&["C", "O"], &[(0, 1)]).unwrap();
        let table = PropertyTable::pauling_electronegativity();
        let racs = rac_descriptors(&mol, &table, &[0]);
        assert_eq!(racs[&0], RacValue::default());
    }

    #[test]
    fn sentinel_distance_matches_nothing() {
        let mol = mol_from_symbols(&["C", "O"], &[]).unwrap();
        let table = PropertyTable::pauling_electronegativity();
        let racs = rac_descriptors(&mol, &table, &[UNREACHABLE]);
        assert_eq!(racs[&UNREACHABLE], RacValue::default());
    }

    #[test]
    fn unknown_symbol_contributes_zero() {
        // Xx is not in the table: products with it vanish, differences see 0.0
        let mol = mol_from_symbols(&["Xx", "H"], &[(0, 1)]).unwrap();
        let table = PropertyTable::pauling_electronegativity();
        let racs = rac_descriptors(&mol, &table, &[1]);
        assert_eq!(racs[&1].product_sum, 0.0);
        assert!(approx_eq(racs[&1].difference_sum, 2.20));
    }

    #[test]
    fn ring_pair_counts() {
        // benzene skeleton: 6 pairs at d=1 and d=2, 3 pairs at d=3
        let mol = mol_from_symbols(
            &["C"; 6],
            &[(0, 1), (1, 2), (2, 3), (3, 4), (4, 5), (5, 0)],
        )
        .unwrap();
        let table = PropertyTable::from_pairs([("C", 1.0)]);
        let racs = rac_descriptors(&mol, &table, &[1, 2, 3]);
        assert!(approx_eq(racs[&1].product_sum, 6.0));
        assert!(approx_eq(racs[&2].product_sum, 6.0));
        assert!(approx_eq(racs[&3].product_sum, 3.0));
    }

    #[test]
    fn difference_sum_non_negative() {
        let mol = mol_from_symbols(&["F", "C", "Li"], &[(0, 1), (1, 2)]).unwrap();
        let table = PropertyTable::pauling_electronegativity();
        let racs = rac_descriptors(&mol, &table, &[1, 2]);
        for rac in racs.values() {
            assert!(rac.difference_sum >= 0.0);
            assert!(rac.product_sum.is_finite());
            assert!(rac.difference_sum.is_finite());
        }
    }

    #[test]
    fn deterministic_across_invocations() {
        let mol = mol_from_symbols(
            &["C", "N", "O", "S", "F"],
            &[(0, 1), (1, 2), (1, 3), (3, 4)],
        )
        .unwrap();
        let table = PropertyTable::pauling_electronegativity();
        let first = rac_descriptors(&mol, &table, &[1, 2, 3]);
        let second = rac_descriptors(&mol, &table, &[1, 2, 3]);
        assert_eq!(first, second);
    }

    #[test]
    fn empty_molecule() {
        let mol = mol_from_symbols(&[], &[]).unwrap();
        let table = PropertyTable::pauling_electronegativity();
        let racs = rac_descriptors(&mol, &table, &[1]);
        assert_eq!(racs[&1], RacValue::default());
    }
}

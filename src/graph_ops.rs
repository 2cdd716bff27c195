use std::collections::VecDeque;

use petgraph::graph::NodeIndex;

use crate::mol::Mol;

/// Sentinel distance for atom pairs in different connected components.
pub const UNREACHABLE: usize = usize::MAX;

pub fn adjacency_matrix<A, B>(mol: &Mol<A, B>) -> Vec<Vec<bool>> {
    let n = mol.atom_count();
    let mut matrix = vec![vec![false; n]; n];
    for edge in mol.bonds() {
        if let Some((a, b)) = mol.bond_endpoints(edge) {
            matrix[a.index()][b.index()] = true;
            matrix[b.index()][a.index()] = true;
        }
    }
    matrix
}

/// Per-atom sorted neighbor index lists, for diagnostic display.
pub fn neighbor_lists<A, B>(mol: &Mol<A, B>) -> Vec<Vec<usize>> {
    mol.atoms()
        .map(|idx| {
            let mut adjacent: Vec<usize> = mol.neighbors(idx).map(|nb| nb.index()).collect();
            adjacent.sort_unstable();
            adjacent
        })
        .collect()
}

/// All-pairs shortest-path distances in bond count.
///
/// One BFS per source atom; the graph is unweighted, so BFS distances are
/// exact. `dist[i][i]` is 0 and pairs in different connected components hold
/// [`UNREACHABLE`]. The matrix is symmetric.
pub fn distance_matrix<A, B>(mol: &Mol<A, B>) -> Vec<Vec<usize>> {
    let n = mol.atom_count();
    let mut dist = vec![vec![UNREACHABLE; n]; n];
    for start in mol.atoms() {
        let si = start.index();
        dist[si][si] = 0;
        let mut queue = VecDeque::new();
        queue.push_back(start);
        while let Some(current) = queue.pop_front() {
            let d = dist[si][current.index()];
            for neighbor in mol.neighbors(current) {
                if dist[si][neighbor.index()] == UNREACHABLE {
                    dist[si][neighbor.index()] = d + 1;
                    queue.push_back(neighbor);
                }
            }
        }
    }
    dist
}

pub fn connected_components<A, B>(mol: &Mol<A, B>) -> Vec<Vec<NodeIndex>> {
    let n = mol.atom_count();
    let mut visited = vec![false; n];
    let mut components = Vec::new();
    for node in mol.atoms() {
        if visited[node.index()] {
            continue;
        }
        let mut component = Vec::new();
        let mut stack = vec![node];
        while let Some(current) = stack.pop() {
            if visited[current.index()] {
                continue;
            }
            visited[current.index()] = true;
            component.push(current);
            for neighbor in mol.neighbors(current) {
                if !visited[neighbor.index()] {
                    stack.push(neighbor);
                }
            }
        }
        component.sort();
        components.push(component);
    }
    components
}

pub fn num_components<A, B>(mol: &Mol<A, B>) -> usize {
    connected_components(mol).len()
}

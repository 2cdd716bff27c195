pub mod atom;
pub mod bond;
pub mod builder;
pub mod graph_ops;
pub mod mol;
pub mod property;
pub mod rac;
pub mod traits;

pub use atom::Atom;
pub use bond::Bond;
pub use builder::{build_mol, mol_from_symbols, GraphError};
pub use graph_ops::{
    adjacency_matrix, connected_components, distance_matrix, neighbor_lists, num_components,
    UNREACHABLE,
};
pub use mol::Mol;
pub use property::PropertyTable;
pub use rac::{rac_descriptors, RacValue};
pub use traits::HasSymbol;

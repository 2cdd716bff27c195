/// Default atom type for a molecular graph node.
///
/// `Atom` stores the one intrinsic property the descriptor pipeline reads:
/// the element symbol used to resolve per-atom property values. Everything
/// else about an atom (charge, isotope, geometry) is irrelevant to
/// topological autocorrelation and deliberately omitted.
///
/// # Examples
///
/// ```
/// use molrac::Atom;
///
/// let carbon = Atom::new("C");
/// assert_eq!(carbon.symbol, "C");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Atom {
    /// Element symbol (`"C"`, `"Fe"`, …). Not validated against the periodic
    /// table: a symbol absent from the property table simply resolves to the
    /// fallback value during aggregation.
    pub symbol: String,
}

impl Atom {
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
        }
    }
}

impl crate::traits::HasSymbol for Atom {
    fn symbol(&self) -> &str {
        &self.symbol
    }
}

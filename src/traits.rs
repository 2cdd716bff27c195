pub trait HasSymbol {
    fn symbol(&self) -> &str;
}

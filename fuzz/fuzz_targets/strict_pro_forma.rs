//! Fuzz target for parsing ProForma definitions with glycan only labile modifications
use afl::*;
use mzproforma::sequence::CompoundPeptidoformIon;

fn main() {
    fuzz!(|data: &[u8]| {
        if let Ok(s) = std::str::from_utf8(data)
            && let Ok(compound) = CompoundPeptidoformIon::pro_forma_strict(s)
        {
            CompoundPeptidoformIon::pro_forma_strict(&compound.to_string()).unwrap();
        }
    });
}

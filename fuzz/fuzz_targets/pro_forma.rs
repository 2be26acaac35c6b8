//! Fuzz target for parsing ProForma definitions
use afl::*;
use mzproforma::sequence::CompoundPeptidoformIon;

fn main() {
    fuzz!(|data: &[u8]| {
        if let Ok(s) = std::str::from_utf8(data)
            && let Ok(compound) = CompoundPeptidoformIon::pro_forma(s)
        {
            // Everything that is written has to be parsed back into the same model
            let written = compound.to_string();
            let reparsed = CompoundPeptidoformIon::pro_forma(&written).unwrap();
            assert_eq!(reparsed.to_string(), written);
        }
    });
}

#![allow(clippy::missing_panics_doc)]
mod parse;
mod pro_forma_positive;

/// Create a parse test based on a given case and its name. By default the case is parsed,
/// written back out, and parsed again, and both parse results have to be identical. With
/// `just_parse` the case only has to parse, with `ne` the case has to be rejected.
#[macro_export]
macro_rules! parse_test {
    ($case:literal, $name:ident) => {
        paste::paste! {
            #[test]
            fn [<proforma_ $name>]() {
                let res = $crate::sequence::CompoundPeptidoformIon::pro_forma($case);
                println!("{}", $case);
                assert!(res.is_ok(), "{:?}", res.err());
                let back = res.as_ref().unwrap().to_string();
                let res_back = $crate::sequence::CompoundPeptidoformIon::pro_forma(&back);
                assert!(res_back.is_ok(), "{back}\n{:?}", res_back.err());
                assert_eq!(res.unwrap(), res_back.as_ref().unwrap().clone(), "{} != {back}", $case);
                assert_eq!(res_back.unwrap().to_string(), back);
            }
        }
    };
    (just_parse $case:literal, $name:ident) => {
        paste::paste! {
            #[test]
            fn [<proforma_ $name>]() {
                let res = $crate::sequence::CompoundPeptidoformIon::pro_forma($case);
                println!("{}", $case);
                assert!(res.is_ok(), "{:?}", res.err());
            }
        }
    };
    (ne $case:literal, $name:ident) => {
        paste::paste! {
            #[test]
            fn [<proforma_ $name>]() {
                let res = $crate::sequence::CompoundPeptidoformIon::pro_forma($case);
                assert!(res.is_err(), "{}\n{}", $case, res.unwrap());
            }
        }
    };
}

use context_error::{Context, FullErrorContent};

use crate::{
    error::ProFormaErrorKind,
    sequence::{
        CompoundPeptidoformIon, GlobalModificationKind, GlobalTarget, Modification,
        ModificationContext, ModificationKind, Peptidoform, PeptidoformIon, PipeValueType,
        SequencePosition,
    },
};

#[test]
fn plain_sequence() {
    let peptidoform = Peptidoform::pro_forma("PEPTIDE").unwrap();
    assert_eq!(peptidoform.stripped_sequence(), "PEPTIDE");
    assert_eq!(peptidoform.len(), 7);
    assert_eq!(peptidoform.all_modifications().count(), 0);
    assert!(peptidoform.global_modifications().is_empty());
    assert!(peptidoform.sequence_ambiguities().is_empty());
    assert_eq!(peptidoform.charge(), None);
    assert_eq!(peptidoform.to_string(), "PEPTIDE");
}

#[test]
fn terminal_modifications() {
    let peptidoform = Peptidoform::pro_forma("[Acetyl]-PEPTIDE-[Amidated]").unwrap();
    assert_eq!(peptidoform.stripped_sequence(), "PEPTIDE");
    assert_eq!(peptidoform.n_term().len(), 1);
    assert_eq!(peptidoform.n_term()[0].value(), "Acetyl");
    assert_eq!(peptidoform.n_term()[0].kind(), ModificationKind::Terminal);
    assert_eq!(peptidoform.c_term().len(), 1);
    assert_eq!(peptidoform.c_term()[0].value(), "Amidated");
    assert!(
        peptidoform
            .residues()
            .iter()
            .all(|residue| residue.modifications().is_empty())
    );
    let peptidoform = Peptidoform::pro_forma("[+42][Formula:H2]-PEP-[Methyl][+1]").unwrap();
    assert_eq!(peptidoform.n_term().len(), 2);
    assert_eq!(peptidoform.c_term().len(), 2);
    assert_eq!(peptidoform.to_string(), "[+42][Formula:H2]-PEP-[Methyl][+1]");
}

#[test]
fn global_modifications() {
    let peptidoform = Peptidoform::pro_forma("<[Carbamidomethyl]@C>PEPTCDE").unwrap();
    assert_eq!(peptidoform.global_modifications().len(), 1);
    let global = &peptidoform.global_modifications()[0];
    assert_eq!(global.kind(), GlobalModificationKind::Fixed);
    assert_eq!(global.targets(), [GlobalTarget::Residue('C')]);
    assert_eq!(global.modification().kind(), ModificationKind::Global);
    assert_eq!(peptidoform.stripped_sequence(), "PEPTCDE");

    let peptidoform = Peptidoform::pro_forma("<15N>PEPTIDE").unwrap();
    assert_eq!(peptidoform.global_modifications().len(), 1);
    let global = &peptidoform.global_modifications()[0];
    assert_eq!(global.kind(), GlobalModificationKind::Isotope);
    assert!(global.targets().is_empty());
    assert_eq!(global.modification().value(), "15N");

    let peptidoform =
        Peptidoform::pro_forma("<[Gln->pyro-Glu]@N-term:Q,c-term>QATPEILTCNSIGCLK").unwrap();
    let global = &peptidoform.global_modifications()[0];
    assert_eq!(
        global.targets(),
        [GlobalTarget::NTerm(Some('Q')), GlobalTarget::CTerm(None)]
    );
    assert_eq!(global.modification().value(), "Gln->pyro-Glu");
    assert_eq!(
        peptidoform.to_string(),
        "<[Gln->pyro-Glu]@N-term:Q,C-term>QATPEILTCNSIGCLK"
    );
}

#[test]
fn placement_controls() {
    let peptidoform = Peptidoform::pro_forma(
        "<[Phospho|Position:S|ColocaliseModificationsOfKnownPosition|Limit:1]@S,T>PEPTS",
    )
    .unwrap();
    let placement = peptidoform.global_modifications()[0]
        .modification()
        .placement();
    assert_eq!(placement.position, ["S"]);
    assert_eq!(placement.limit, Some(1));
    assert!(placement.colocalise_known);
    assert!(!placement.colocalise_unknown);
    assert_eq!(
        peptidoform.to_string(),
        "<[Phospho|Position:S|Limit:1|CoMKP]@S,T>PEPTS"
    );
}

#[test]
fn charge_and_species() {
    let peptidoform = Peptidoform::pro_forma("PEPTIDE/2[+Na+]").unwrap();
    assert_eq!(peptidoform.charge(), Some(2));
    assert_eq!(peptidoform.ionic_species(), Some("+Na+"));
    assert_eq!(peptidoform.stripped_sequence(), "PEPTIDE");
    let peptidoform = Peptidoform::pro_forma("PEPTIDE/+3").unwrap();
    assert_eq!(peptidoform.charge(), Some(3));
    assert_eq!(peptidoform.to_string(), "PEPTIDE/3");
    let peptidoform = Peptidoform::pro_forma("PEPTIDE-[Amidated]/-1").unwrap();
    assert_eq!(peptidoform.charge(), Some(-1));
    assert_eq!(peptidoform.c_term()[0].value(), "Amidated");
}

#[test]
fn gap() {
    let peptidoform = Peptidoform::pro_forma("RTAAX[+367.0537]WT").unwrap();
    let residue = &peptidoform.residues()[4];
    assert_eq!(residue.symbol(), 'X');
    assert_eq!(residue.modifications().len(), 1);
    let modification = &residue.modifications()[0];
    assert_eq!(modification.kind(), ModificationKind::Gap);
    assert!((modification.mass().unwrap() - 367.0537).abs() < 1e-9);
    assert_eq!(
        modification.modification_value().pipe_values()[0].kind(),
        PipeValueType::Gap
    );
    let peptidoform = Peptidoform::pro_forma("RTAAX[+1][+2]WT").unwrap();
    let residue = &peptidoform.residues()[4];
    assert_eq!(residue.modifications()[0].kind(), ModificationKind::Gap);
    assert_eq!(residue.modifications()[1].kind(), ModificationKind::Static);
}

#[test]
fn unknown_position() {
    let peptidoform = Peptidoform::pro_forma("[Phospho]^2[Acetyl]?EMEVTSESPEK").unwrap();
    let unknown = peptidoform.unknown_position();
    assert_eq!(unknown.len(), 3);
    assert_eq!(unknown[0].value(), "Phospho");
    assert_eq!(unknown[1].value(), "Phospho");
    assert_eq!(unknown[2].value(), "Acetyl");
    assert!(
        unknown
            .iter()
            .all(|m| m.kind() == ModificationKind::UnknownPosition)
    );
    assert_eq!(
        peptidoform.to_string(),
        "[Phospho]^2[Acetyl]?EMEVTSESPEK"
    );
    let peptidoform = Peptidoform::pro_forma("[Phospho][Phospho]?[Acetyl]-PEP").unwrap();
    assert_eq!(peptidoform.unknown_position().len(), 2);
    assert_eq!(peptidoform.n_term().len(), 1);
    assert_eq!(peptidoform.to_string(), "[Phospho]^2?[Acetyl]-PEP");
}

#[test]
fn labile() {
    let peptidoform = Peptidoform::pro_forma("{Glycan:Hex}{Glycan:NeuAc}EMEVNESPEK").unwrap();
    assert_eq!(peptidoform.labile().len(), 2);
    assert_eq!(peptidoform.labile()[0].kind(), ModificationKind::Labile);
    assert_eq!(peptidoform.labile()[1].value(), "NeuAc");
    assert_eq!(peptidoform.labile()[1].source(), Some("Glycan"));
    assert!(peptidoform.residues()[0].modifications().is_empty());
}

#[test]
fn strict_labile() {
    assert!(Peptidoform::pro_forma("{Phospho}PEPTIDE").is_ok());
    assert!(Peptidoform::pro_forma_strict("{glycan:Hex}PEPTIDE").is_ok());
    assert_eq!(
        Peptidoform::pro_forma_strict("{Phospho}PEPTIDE")
            .unwrap_err()
            .get_kind(),
        ProFormaErrorKind::InvalidLabileModification
    );
    assert_eq!(
        CompoundPeptidoformIon::pro_forma_strict("PEP+{Phospho}PEPTIDE")
            .unwrap_err()
            .get_kind(),
        ProFormaErrorKind::InvalidLabileModification
    );
    assert!(CompoundPeptidoformIon::pro_forma_strict("{Glycan:Hex}PEP+PEPTIDE").is_ok());
}

#[test]
fn ranges() {
    let peptidoform = Peptidoform::pro_forma("PRT(EC[Carbamidomethyl]FRMS)[+19.0523]ISK").unwrap();
    assert_eq!(peptidoform.stripped_sequence(), "PRTECFRMSISK");
    for index in 3..=8 {
        let ranged: Vec<&Modification> = peptidoform.residues()[index]
            .modifications()
            .iter()
            .filter(|m| m.range().is_some())
            .collect();
        assert_eq!(ranged.len(), 1, "{index}");
        assert_eq!(ranged[0].range(), Some((3, 8)));
        assert_eq!(ranged[0].kind(), ModificationKind::Ambiguous);
    }
    assert!(peptidoform.residues()[2].modifications().is_empty());
    assert!(peptidoform.residues()[9].modifications().is_empty());
    assert_eq!(peptidoform.residues()[4].modifications().len(), 2);
    assert_eq!(
        peptidoform.to_string(),
        "PRT(EC[Carbamidomethyl]FRMS)[+19.0523]ISK"
    );
}

#[test]
fn ambiguity() {
    let peptidoform =
        Peptidoform::pro_forma("EM[Oxidation]EVT[#g1(0.01)]S[#g1(0.09)]ES[Phospho#g1(0.90)]PEK")
            .unwrap();
    let modification = &peptidoform.residues()[4].modifications()[0];
    assert_eq!(modification.kind(), ModificationKind::Ambiguous);
    assert_eq!(modification.ambiguity_group(), Some("g1"));
    assert_eq!(modification.localisation_score(), Some(0.01));
    let modification = &peptidoform.residues()[7].modifications()[0];
    assert_eq!(modification.value(), "Phospho");
    assert_eq!(modification.localisation_score(), Some(0.9));

    let peptidoform = Peptidoform::pro_forma("EMEVTS{Phospho}ESPEK").unwrap();
    let modification = &peptidoform.residues()[5].modifications()[0];
    assert_eq!(modification.kind(), ModificationKind::Ambiguous);
    assert_eq!(modification.ambiguity_group(), None);
    assert_eq!(peptidoform.to_string(), "EMEVTS{Phospho}ESPEK");

    let peptidoform = Peptidoform::pro_forma("PEPT(?DQ)IDE").unwrap();
    assert_eq!(peptidoform.stripped_sequence(), "PEPTIDE");
    assert_eq!(peptidoform.sequence_ambiguities().len(), 1);
    assert_eq!(peptidoform.sequence_ambiguities()[0].value, "DQ");
    assert_eq!(peptidoform.sequence_ambiguities()[0].position, 0);
    assert_eq!(peptidoform.to_string(), "(?DQ)PEPTIDE");
}

#[test]
fn crosslinks_and_branches() {
    let ion = PeptidoformIon::pro_forma("EMEVTK[XL:DSS#XL1]SESPEK//EMEVTK[#XL1]SESPEK").unwrap();
    assert_eq!(ion.peptidoforms().len(), 2);
    let definition = &ion.peptidoforms()[0].residues()[5].modifications()[0];
    assert_eq!(definition.kind(), ModificationKind::Crosslink);
    assert_eq!(definition.crosslink_id(), Some("XL1"));
    assert!(!definition.is_crosslink_reference());
    let reference = &ion.peptidoforms()[1].residues()[5].modifications()[0];
    assert_eq!(reference.kind(), ModificationKind::Crosslink);
    assert!(reference.is_crosslink_reference());

    let peptidoform = Peptidoform::pro_forma("NK[Glycan:Hex#BRANCH]AAS[#BRANCH]").unwrap();
    let branch = &peptidoform.residues()[1].modifications()[0];
    assert_eq!(branch.kind(), ModificationKind::Branch);
    assert!(branch.is_branch());
    let reference = &peptidoform.residues()[4].modifications()[0];
    assert!(reference.is_branch_reference());
}

#[test]
fn ion_types() {
    let peptidoform = Peptidoform::pro_forma("PEPTIDE-[b-type-ion]").unwrap();
    assert!(peptidoform.c_term()[0].is_ion_type());
    let peptidoform = Peptidoform::pro_forma("[UNIMOD:140]-PEPTIDE").unwrap();
    assert!(peptidoform.n_term()[0].is_ion_type());
    let peptidoform = Peptidoform::pro_forma("PEPT[Phospho]IDE").unwrap();
    assert!(!peptidoform.residues()[3].modifications()[0].is_ion_type());
}

#[test]
fn charged_formula() {
    let peptidoform = Peptidoform::pro_forma("PEPT[Formula:Zn1:z+2]IDE").unwrap();
    let value = &peptidoform.residues()[3].modifications()[0]
        .modification_value()
        .pipe_values()[0];
    assert_eq!(value.kind(), PipeValueType::Formula);
    assert_eq!(value.charge(), Some(2));
    assert!(value.is_valid_formula());
    assert_eq!(peptidoform.to_string(), "PEPT[Formula:Zn1:z+2]IDE");
}

#[test]
fn names() {
    let compound = CompoundPeptidoformIon::pro_forma(
        "(>>>Trastuzumab)(>>Fab)(>light chain (kappa))DIQMTQSPK//(>heavy chain)EVQLVESGGGLVQPGGSLR",
    )
    .unwrap();
    assert_eq!(compound.name(), Some("Trastuzumab"));
    let ion = &compound.peptidoform_ions()[0];
    assert_eq!(ion.name(), Some("Fab"));
    assert_eq!(
        ion.peptidoforms()[0].peptidoform_name(),
        Some("light chain (kappa)")
    );
    assert_eq!(
        ion.peptidoforms()[1].peptidoform_name(),
        Some("heavy chain")
    );
    assert_eq!(ion.peptidoforms()[1].compound_ion_name(), None);
}

#[test]
fn composition() {
    let compound =
        CompoundPeptidoformIon::pro_forma("EMEVEESPEK/2+ELVISLIVER/3+AK//PK[+1]").unwrap();
    assert_eq!(compound.peptidoform_ions().len(), 3);
    assert_eq!(compound.peptidoforms().count(), 4);
    let charges: Vec<_> = compound.peptidoforms().map(Peptidoform::charge).collect();
    assert_eq!(charges, [Some(2), Some(3), None, None]);
    assert_eq!(
        compound.to_string(),
        "EMEVEESPEK/2+ELVISLIVER/3+AK//PK[+1]"
    );
    let compound = CompoundPeptidoformIon::pro_forma("PEPTIDE/+2+PEP").unwrap();
    assert_eq!(compound.peptidoform_ions().len(), 2);
    assert_eq!(
        compound.peptidoform_ions()[0].peptidoforms()[0].charge(),
        Some(2)
    );

    assert_eq!(
        Peptidoform::pro_forma("PEP//PEP").unwrap_err().get_kind(),
        ProFormaErrorKind::UnexpectedComposition
    );
    assert_eq!(
        Peptidoform::pro_forma("PEP+PEP").unwrap_err().get_kind(),
        ProFormaErrorKind::UnexpectedComposition
    );
    assert_eq!(
        PeptidoformIon::pro_forma("PEP+PEP").unwrap_err().get_kind(),
        ProFormaErrorKind::UnexpectedComposition
    );
    assert_eq!(
        CompoundPeptidoformIon::pro_forma("PEP//").unwrap_err().get_kind(),
        ProFormaErrorKind::EmptySequence
    );
}

#[test]
fn error_kinds() {
    let kind = |text: &str| Peptidoform::pro_forma(text).unwrap_err().get_kind();
    assert_eq!(kind("PEP[Phospho"), ProFormaErrorKind::UnterminatedBlock);
    assert_eq!(kind("PEP]"), ProFormaErrorKind::UnterminatedBlock);
    assert_eq!(kind("PEP)"), ProFormaErrorKind::UnbalancedRange);
    assert_eq!(kind("(PEP"), ProFormaErrorKind::UnbalancedRange);
    assert_eq!(
        kind("<[Phospho]S>PEP"),
        ProFormaErrorKind::MalformedGlobalModification
    );
    assert_eq!(kind("PEPB"), ProFormaErrorKind::UnknownResidueSymbol);
    assert_eq!(kind("PEP/x"), ProFormaErrorKind::InvalidNumber);
    assert_eq!(kind("[Phospho]^0?PEP"), ProFormaErrorKind::InvalidNumber);
    assert_eq!(kind("[Phospho]PEP"), ProFormaErrorKind::MisplacedModification);
    assert_eq!(kind("PEP/2PEP"), ProFormaErrorKind::MisplacedModification);
    assert_eq!(kind(""), ProFormaErrorKind::EmptySequence);
}

#[test]
fn inner_range() {
    let line = "ignored PEPT[Phospho]IDE ignored";
    let peptidoform =
        Peptidoform::pro_forma_inner(&Context::none().lines(0, line), line, 8..24).unwrap();
    assert_eq!(peptidoform.stripped_sequence(), "PEPTIDE");
    let error = Peptidoform::pro_forma_inner(&Context::none().lines(0, line), line, 0..24)
        .unwrap_err();
    assert_eq!(error.get_kind(), ProFormaErrorKind::UnknownResidueSymbol);
}

#[test]
fn mutation() {
    let mut peptidoform = Peptidoform::pro_forma("PEPTIDE").unwrap();
    assert!(peptidoform.add_modification(
        SequencePosition::Index(3),
        Modification::build("Phospho", ModificationContext::Static),
    ));
    assert!(!peptidoform.add_modification(
        SequencePosition::Index(7),
        Modification::build("Phospho", ModificationContext::Static),
    ));
    assert!(peptidoform.add_modification(
        SequencePosition::NTerm,
        Modification::build("Acetyl", ModificationContext::Terminal),
    ));
    assert_eq!(peptidoform.to_string(), "[Acetyl]-PEPT[Phospho]IDE");
    assert_eq!(peptidoform.stripped_sequence(), "PEPTIDE");
    assert!(peptidoform.has_modification(SequencePosition::Index(3), "Phospho"));
    assert!(!peptidoform.has_modification(SequencePosition::Index(2), "Phospho"));
    assert!(peptidoform.remove_modification(SequencePosition::NTerm, "Acetyl"));
    assert!(!peptidoform.remove_modification(SequencePosition::NTerm, "Acetyl"));
    assert!(peptidoform.n_term().is_empty());
    assert_eq!(peptidoform, Peptidoform::pro_forma("PEPT[Phospho]IDE").unwrap());
    peptidoform.set_charge(Some(2));
    peptidoform.set_ionic_species(Some("+H+".to_string()));
    assert_eq!(peptidoform.to_string(), "PEPT[Phospho]IDE/2[+H+]");
    peptidoform.add_residue('K', None).unwrap();
    assert_eq!(peptidoform.residues()[7].position(), 7);
    assert!(peptidoform.add_residue('Z', None).is_err());
    peptidoform.add_residue('Z', Some(128.0)).unwrap();
    assert_eq!(peptidoform.stripped_sequence(), "PEPTIDEKZ");
    assert!((peptidoform.residues()[8].total_mass() - 128.0).abs() < 1e-9);
    assert!((peptidoform.residues()[3].total_mass() - 101.047679).abs() < 1e-9);
    let peptidoform = Peptidoform::pro_forma("PEPT[+79.966][Phospho]IDE").unwrap();
    assert!((peptidoform.residues()[3].total_mass() - (101.047679 + 79.966)).abs() < 1e-9);
}

#[test]
fn modification_order() {
    let a = Peptidoform::pro_forma("PEPS[Phospho][+1]IDE").unwrap();
    let b = Peptidoform::pro_forma("PEPS[+1][Phospho]IDE").unwrap();
    assert_eq!(a.stripped_sequence(), b.stripped_sequence());
    assert_ne!(a, b);
}

#[test]
fn virtual_positions_isolated() {
    let peptidoform = Peptidoform::pro_forma(
        "[Phospho]?{Glycan:Hex}[Acetyl]-PEPT[Oxidation]IDE-[Amidated]",
    )
    .unwrap();
    for (position, modification) in peptidoform.all_modifications() {
        match position {
            SequencePosition::Index(index) => {
                assert_eq!(index, 3);
                assert_eq!(modification.value(), "Oxidation");
            }
            SequencePosition::NTerm => assert_eq!(modification.value(), "Acetyl"),
            SequencePosition::CTerm => assert_eq!(modification.value(), "Amidated"),
            SequencePosition::Labile => assert_eq!(modification.value(), "Hex"),
            SequencePosition::UnknownPosition => assert_eq!(modification.value(), "Phospho"),
        }
    }
    assert_eq!(peptidoform.all_modifications().count(), 5);
    assert_eq!(
        peptidoform
            .residues()
            .iter()
            .map(|r| r.modifications().len())
            .sum::<usize>(),
        1
    );
}

#[test]
fn idempotent_serialisation() {
    for text in [
        "EM[Oxidation]EVT[#g1(0.010)]S[#g1(0.09)]ES[Phospho#g1(0.90)]PEK",
        "[Phospho][Phospho]?PEP",
        "PEPT(?DQ)IDE/+2",
        "ELVIS[+79.966331|U:Phospho|Info:x]K",
        "<[Phospho|ColocaliseModificationsOfUnknownPosition]@S>PEPS",
    ] {
        let first = CompoundPeptidoformIon::pro_forma(text).unwrap().to_string();
        let second = CompoundPeptidoformIon::pro_forma(&first)
            .unwrap()
            .to_string();
        assert_eq!(first, second, "{text}");
    }
}

#[test]
fn serde_round_trip() {
    let compound = CompoundPeptidoformIon::pro_forma(
        "(>>>c)<[Carbamidomethyl]@C>[Phospho]^2?{Glycan:Hex}[Acetyl]-PEPT[Phospho#g1(0.5)]C(IDE)[+1]K-[Amidated]/2[+Na+]//AK[XL:DSS#XL1]+PEP",
    )
    .unwrap();
    let json = serde_json::to_string(&compound).unwrap();
    let back: CompoundPeptidoformIon = serde_json::from_str(&json).unwrap();
    assert_eq!(compound, back);
}

#[test]
fn ambiguity_group_outside_residues() {
    let peptidoform = Peptidoform::pro_forma("[Phospho#s1]?PEPS[#s1]").unwrap();
    let unknown = &peptidoform.unknown_position()[0];
    assert_eq!(unknown.kind(), ModificationKind::Ambiguous);
    assert_eq!(unknown.ambiguity_group(), Some("s1"));
    let reference = &peptidoform.residues()[3].modifications()[0];
    assert_eq!(reference.kind(), ModificationKind::Ambiguous);
    assert_eq!(peptidoform.to_string(), "[Phospho#s1]?PEPS[#s1]");

    let peptidoform = Peptidoform::pro_forma("[Acetyl#g1]-PEP[#g1]").unwrap();
    assert_eq!(peptidoform.n_term()[0].kind(), ModificationKind::Ambiguous);
    assert_eq!(peptidoform.n_term()[0].ambiguity_group(), Some("g1"));
    assert_eq!(peptidoform.to_string(), "[Acetyl#g1]-PEP[#g1]");

    let peptidoform = Peptidoform::pro_forma("{Glycan:Hex#g1}PEPS[#g1]").unwrap();
    assert_eq!(peptidoform.labile()[0].kind(), ModificationKind::Ambiguous);
}

#[test]
fn mass_prefix_only_for_bare_mass() {
    let peptidoform = Peptidoform::pro_forma("PEP[+1]").unwrap();
    assert_eq!(peptidoform.residues()[2].modifications()[0].value(), "Mass:+1");
    let peptidoform = Peptidoform::pro_forma("PEP[+1|Phospho]").unwrap();
    let modification = &peptidoform.residues()[2].modifications()[0];
    assert_eq!(modification.value(), "+1");
    assert_eq!(modification.mass(), Some(1.0));
    assert_eq!(peptidoform.to_string(), "PEP[+1|Phospho]");
}

#[test]
fn unknown_position_copy_limit() {
    let peptidoform = Peptidoform::pro_forma("[Phospho]^1000?PEP").unwrap();
    assert_eq!(peptidoform.unknown_position().len(), 1000);
    assert_eq!(peptidoform.to_string(), "[Phospho]^1000?PEP");
    for text in ["[Phospho]^1001?PEP", "[Phospho]^99999999999?PEP"] {
        assert_eq!(
            Peptidoform::pro_forma(text).unwrap_err().get_kind(),
            ProFormaErrorKind::InvalidNumber,
            "{text}"
        );
    }
}

#[test]
fn name_with_angle_bracket() {
    let compound = CompoundPeptidoformIon::pro_forma("(>a<b)PEP+PEP").unwrap();
    assert_eq!(compound.peptidoform_ions().len(), 2);
    assert_eq!(
        compound.peptidoforms().next().unwrap().peptidoform_name(),
        Some("a<b")
    );
    let compound = CompoundPeptidoformIon::pro_forma("(>a<b)PEP//(>c)PEP").unwrap();
    assert_eq!(compound.peptidoforms().count(), 2);
}

#[test]
fn conversions() {
    let peptidoform = Peptidoform::pro_forma("PEPT[Phospho]IDE/2").unwrap();
    let compound = CompoundPeptidoformIon::from(peptidoform.clone());
    assert_eq!(compound.singular_peptidoform_ref(), Some(&peptidoform));
    assert_eq!(compound.to_string(), "PEPT[Phospho]IDE/2");
    let ion = PeptidoformIon::from(peptidoform.clone());
    assert_eq!(CompoundPeptidoformIon::from(ion), compound);
}

#[test]
fn residue_modification_lookup() {
    let mut peptidoform = Peptidoform::pro_forma("PEPS[Phospho][+1]IDE").unwrap();
    let residue = &peptidoform.residues()[3];
    assert!(residue.has_modification("Phospho"));
    assert!(residue.has_modification("+1"));
    assert!(!residue.has_modification("Oxidation"));
    let phospho = residue.modifications()[0].clone();
    assert!(peptidoform.has_modification(SequencePosition::Index(3), &phospho));
    assert!(peptidoform.remove_modification(SequencePosition::Index(3), &phospho));
    assert!(!peptidoform.has_modification(SequencePosition::Index(3), &phospho));
    assert_eq!(peptidoform.to_string(), "PEPS[+1]IDE");
}

use crate::parse_test;

parse_test!("AA", positive_example_1);
parse_test!("A[+1]", positive_example_2);
parse_test!("AA[+1]", positive_example_3);
parse_test!("A(AAAA)[+1][+2]", positive_example_4);
parse_test!("[+1]-A[+1]-[+1]", positive_example_5);
parse_test!("AA+AA", positive_example_6);
parse_test!(
    "EMK[XLMOD:02000#XL1]EVTKSE[XLMOD:02010#XL2]SK[#XL1]PEK[#XL2]AR",
    positive_example_7
);
parse_test!(
    "SEK[XLMOD:02001#XL1]UENCE//EMEVTK[XLMOD:02001#XL1]SESPEK",
    positive_example_8
);
parse_test!("EM[Oxidation]EVEES[Phospho]PEK", positive_example_9);
parse_test!(
    "EM[R:L-methionine sulfone]EVEES[O-phospho-L-serine]PEK",
    positive_example_10
);
parse_test!("EMEVTK[X:DSS#XL1]SESPEK", positive_example_11);
parse_test!("EM[U:Oxidation]EVEES[U:Phospho]PEK", positive_example_12);
parse_test!("EM[+15.9949]EVEES[+79.9663]PEK", positive_example_13);
parse_test!("EM[U:+15.995]EVEES[U:+79.966]PEK", positive_example_14);
parse_test!("EM[U:+15.995]EVEES[Obs:+79.978]PEK", positive_example_15);
parse_test!("RTAAX[+367.0537]WT", positive_example_16);
parse_test!(
    "{Glycan:Hex}EM[Oxidation]EVNES[Phospho]PEK[iTRAQ4plex]",
    positive_example_17
);
parse_test!(
    "[iTRAQ4plex]-EM[Oxidation]EVNES[Phospho]PEK[iTRAQ4plex]-[Methyl]",
    positive_example_18
);
parse_test!(
    "<[S-carboxamidomethyl-L-cysteine]@C>ATPEILTCNSIGCLK",
    positive_example_19
);
parse_test!("<[MOD:01090]@C>ATPEILTCNSIGCLK", positive_example_20);
parse_test!("<[Oxidation]@C,M>MTPEILTCNSIGCLK", positive_example_21);
parse_test!("<13C>ATPEILTCNSIGCLK", positive_example_22);
parse_test!("<15N><[Carbamidomethyl]@C>PEPTCDE", positive_example_23);
parse_test!("[Phospho]?EM[Oxidation]EVTSESPEK", positive_example_24);
parse_test!(
    "[Phospho][Phospho]?[Acetyl]-EM[Oxidation]EVTSESPEK",
    positive_example_25
);
parse_test!(
    "[Phospho]^2?[Acetyl]-EM[Oxidation]EVTSESPEK",
    positive_example_26
);
parse_test!(
    "[Phospho][Acetyl][Phospho]?EM[Oxidation]EVTSESPEK",
    positive_example_27
);
parse_test!(
    "EM[Oxidation]EVT[#g1]S[#g1]ES[Phospho#g1]PEK",
    positive_example_28
);
parse_test!("PRT(ESFRMS)[+19.0523]ISK", positive_example_29);
parse_test!("PRT(EC[Carbamidomethyl]FRMS)[+19.0523]ISK", positive_example_30);
parse_test!(
    "EM[Oxidation]EVT[#g1(0.01)]S[#g1(0.09)]ES[Phospho#g1(0.90)]PEK",
    positive_example_31
);
parse_test!(
    "[Phospho#s1]?EM[Oxidation]EVT[#s1(0.01)]S[#s1(0.09)]ES[#s1(0.90)]PEK",
    positive_example_32
);
parse_test!(
    "MPGLVDSNPAPPESQEKKPLK(PCCACPETKKARDACIIEKGEEHCGHLIEAHKECMRALGFKI)[Oxidation][Oxidation][half cystine][half cystine]",
    positive_example_33
);
parse_test!("ELVIS[Phospho|+79.966331]K", positive_example_34);
parse_test!("ELVIS[Phospho|Obs:+79.978]K", positive_example_35);
parse_test!("ELVIS[U:Phospho|+79.966331]K", positive_example_36);
parse_test!("ELVIS[+79.966331|U:Phospho]K", positive_example_37);
parse_test!("ELVIS[Phospho|Info:confirmed]K", positive_example_38);
parse_test!("SEQUEN[Formula:C12H20O2]CE", positive_example_39);
parse_test!("SEQUEN[Formula:[13C2]C10H20O2]CE", positive_example_40);
parse_test!("SEQUEN[Formula:HN-1O2]CE", positive_example_41);
parse_test!("SEQUEN[Glycan:HexNAc1Hex2]CE", positive_example_42);
parse_test!("SEQUEN[Glycan:{C8H13N1O5}1Hex2]CE", positive_example_43);
parse_test!(
    "(>Trastuzumab Fab light chain)DIQMTQSPSSLSASVGDRVTITC[#XL1]RASQDVNTAVAWYQQKPGKAPKLLIYSASFLYSGVPSRFSGSRSGTDFTLTISSLQPEDFATYYCQQHYTTPPTFGQGTKVEIK",
    positive_example_44
);
parse_test!(
    "(>>>Trastuzumab)(>>Fab)(>light chain)DIQMTQSPK//(>heavy chain)EVQLVESGGGLVQPGGSLR",
    positive_example_45
);
parse_test!("EMEVEESPEK/2", positive_example_46);
parse_test!("EMEVEESPEK/-2", positive_example_47);
parse_test!("EMEVEESPEK/2[+2Na+,+H+]", positive_example_48);
parse_test!("EMEVEESPEK/2+ELVISLIVER/3", positive_example_49);
parse_test!("{Glycan:Hex}{Glycan:NeuAc}EMEVNESPEK", positive_example_50);
parse_test!("{Glycan:{C8H13N1O5}1Hex2}PEPTIDE", positive_example_51);
parse_test!("[Formula:Zn1:z+2]-PEPTIDE", positive_example_52);
parse_test!(
    "<[Phospho|Position:S,T|Limit:2|CoMUP]@S,T,Y>PEPTSYDE",
    positive_example_53
);
parse_test!(
    "<[Oxidation|ColocaliseModificationsOfKnownPosition]@M>PEPM[Oxidation]K",
    positive_example_54
);
parse_test!("<[Gln->pyro-Glu]@N-term:Q>QATPEILTCNSIGCLK", positive_example_55);
parse_test!("<+15.995@M>PEPTMIDE", positive_example_56);
parse_test!("PEPT(?DQ)IDE", positive_example_57);
parse_test!("NK[Glycan:Hex#BRANCH]AAS[#BRANCH]", positive_example_58);
parse_test!(
    "EMEVTK[XL:DSS#XL1|+138.068]SESPEK//EMEVTK[#XL1]SESPEK",
    positive_example_59
);
parse_test!("PEPTIDE-[b-type-ion]", positive_example_60);
parse_test!("PEPT[-18.01]IDE", positive_example_61);
parse_test!("EMEVTS{Phospho}ESPEK", positive_example_62);
parse_test!("{Phospho}PEPTIDE", positive_example_63);
parse_test!(just_parse "ELVIS[Phospho|Phospho]K", positive_example_64);
parse_test!(just_parse "ELVIS[Phospho||Info:x]K", positive_example_65);

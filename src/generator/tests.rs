use super::*;
use crate::catalog::Ordinal;
use pretty_assertions::assert_eq;

fn scenario() -> ScaffoldArtifact {
    generate(&["Expecting_an_identifier", "Missing_open_bracket"], 2).unwrap()
}

fn trial_lines(slot: &str) -> Vec<&str> {
    slot.lines()
        .filter(|line| line.trim_start().starts_with("spt::IF<w.m =="))
        .collect()
}

/// Split the dispatch section into one chunk per guarded slot
fn slots(dispatch: &str) -> Vec<&str> {
    dispatch
        .split("if (")
        .filter(|chunk| !chunk.is_empty())
        .collect()
}

#[test]
fn test_ordinal_section_lists_sentinel_first() {
    let artifact = scenario();
    assert_eq!(
        artifact.section(Section::Ordinals),
        "enum Messages\n{\n  Error_None,\n  Error_Expecting_an_identifier,\n  Error_Missing_open_bracket\n};\n"
    );
}

#[test]
fn test_marker_section_declares_every_ordinal() {
    let artifact = scenario();
    assert_eq!(
        artifact.section(Section::Markers),
        "struct None;\nstruct Expecting_an_identifier;\nstruct Missing_open_bracket;\n"
    );
}

#[test]
fn test_mapping_is_total() {
    let artifact = scenario();
    let mapping = artifact.section(Section::Mapping);
    let specializations: Vec<&str> = mapping
        .lines()
        .filter(|l| l.starts_with("template<> struct MsgToType<"))
        .collect();
    assert_eq!(specializations.len(), 3);
    assert!(mapping.contains("MsgToType<Error_None>{using type = None;};"));
    assert!(mapping
        .contains("MsgToType<Error_Missing_open_bracket>{using type = Missing_open_bracket;};"));
}

#[test]
fn test_dispatch_shape() {
    let artifact = scenario();
    assert_eq!(artifact.slot_count(), 2);
    assert_eq!(artifact.trial_count(), 2);

    let dispatch = artifact.section(Section::Dispatch);
    let blocks = slots(dispatch);
    assert_eq!(blocks.len(), 2);
    for (i, block) in blocks.iter().enumerate() {
        assert!(block.starts_with(&format!("{} < n)", i)));
        assert!(block.contains(&format!("parser.m_arrWarns[{}]", i)));
        let trials = trial_lines(block);
        assert_eq!(trials.len(), 2);
        assert!(trials[0].contains("spt::Error_Expecting_an_identifier,"));
        assert!(trials[1].contains("spt::Error_Missing_open_bracket,"));
    }
}

#[test]
fn test_every_dispatch_line_is_continued() {
    let artifact = generate(&["A", "B", "C"], 4).unwrap();
    for line in artifact.section(Section::Dispatch).lines() {
        assert!(line.ends_with(" \\"), "unterminated macro line: {}", line);
    }
}

#[test]
fn test_report_checks_both_coordinates() {
    let artifact = scenario();
    let report = artifact.section(Section::Report);
    assert!(report.contains("#define REPORT_ERRORS(parser) \\\n"));
    assert!(report.contains("constexpr int n = parser.m_arrWarns.size(); \\\n"));
    assert!(report
        .contains("constexpr bool hasErr = parser.m_iErrRow >= 0 && parser.m_iErrCol >= 0;"));
    assert!(report.contains(
        "spt::IF<hasErr, spt::Error<parser.m_iErrRow, parser.m_iErrCol, spt::MsgToType<parser.m_arrErrs>::type>> {};"
    ));
    assert!(report.contains(artifact.section(Section::Dispatch)));
    assert!(report.ends_with("#else\n\n#define REPORT_ERRORS(parser)\n\n#endif\n"));
}

#[test]
fn test_sections_appear_in_order() {
    let artifact = scenario();
    let text = artifact.as_str();
    let mut last = 0;
    for section in [
        Section::Ordinals,
        Section::Markers,
        Section::Mapping,
        Section::Report,
    ] {
        let at = text.find(artifact.section(section)).unwrap();
        assert!(at >= last);
        last = at;
    }
    assert!(text.starts_with("// Generated by sptgen"));
    assert!(text.ends_with("#endif\n"));
}

#[test]
fn test_generation_is_deterministic() {
    let catalog = Catalog::seephit();
    let generator = Generator::default();
    let first = generator.generate(&catalog, SlotBudget::default()).unwrap();
    let second = generator.generate(&catalog, SlotBudget::default()).unwrap();
    assert_eq!(first.as_str(), second.as_str());
}

#[test]
fn test_reordering_changes_ordinals() {
    let ab = generate(&["A", "B"], 1).unwrap();
    let ba = generate(&["B", "A"], 1).unwrap();
    assert_ne!(ab.section(Section::Ordinals), ba.section(Section::Ordinals));
    assert!(ba
        .section(Section::Ordinals)
        .contains("Error_None,\n  Error_B,\n  Error_A\n"));
}

#[test]
fn test_duplicate_rejected_before_emission() {
    let err = generate(&["Foo", "Foo"], 2).unwrap_err();
    assert!(matches!(err, CatalogError::DuplicateName { ref name, .. } if name == "Foo"));
}

#[test]
fn test_zero_budget_rejected() {
    let err = generate(&["Foo"], 0).unwrap_err();
    assert_eq!(err, CatalogError::InvalidBudget { slots: 0 });
}

#[test]
fn test_empty_catalog_emits_empty_guards() {
    let artifact = generate::<&str>(&[], 2).unwrap();
    assert_eq!(
        artifact.section(Section::Ordinals),
        "enum Messages\n{\n  Error_None\n};\n"
    );
    assert_eq!(artifact.section(Section::Markers), "struct None;\n");
    assert_eq!(
        artifact.section(Section::Dispatch),
        "if (0 < n) \\\n{ \\\n} \\\nif (1 < n) \\\n{ \\\n} \\\n"
    );
    assert_eq!(artifact.trial_count(), 0);
}

#[test]
fn test_single_slot() {
    let artifact = generate(&["A"], 1).unwrap();
    assert_eq!(slots(artifact.section(Section::Dispatch)).len(), 1);
    assert!(!artifact.section(Section::Dispatch).contains("1 < n"));
}

#[test]
fn test_kind_clashing_with_schema_rejected() {
    for name in ["None", "MsgToType", "Messages", "REPORT_ERRORS"] {
        let err = generate(&["A", name], 1).unwrap_err();
        assert_eq!(
            err,
            CatalogError::InvalidName {
                name: name.to_string(),
                position: 1,
                reason: NameIssue::SchemaClash,
            }
        );
    }
}

#[test]
fn test_kind_clashing_with_an_enumerator_rejected() {
    // The enumerator would hide the marker struct of the same name
    let err = generate(&["Error_None"], 1).unwrap_err();
    assert_eq!(
        err,
        CatalogError::InvalidName {
            name: "Error_None".to_string(),
            position: 0,
            reason: NameIssue::SchemaClash,
        }
    );

    for kinds in [["Foo", "Error_Foo"], ["Error_Foo", "Foo"]] {
        let err = generate(&kinds, 1).unwrap_err();
        assert_eq!(
            err,
            CatalogError::InvalidName {
                name: "Error_Foo".to_string(),
                position: kinds.iter().position(|k| *k == "Error_Foo").unwrap(),
                reason: NameIssue::SchemaClash,
            }
        );
    }
}

#[test]
fn test_enumerator_clashing_with_schema_rejected() {
    // M + essages would redeclare the enum's own name
    let schema = Schema {
        ordinal_prefix: "M".to_string(),
        ..Schema::default()
    };
    let generator = Generator::new(schema).unwrap();
    let catalog = Catalog::new(["A", "essages"]).unwrap();
    let err = generator.generate(&catalog, SlotBudget::default()).unwrap_err();
    assert_eq!(
        err,
        CatalogError::InvalidName {
            name: "essages".to_string(),
            position: 1,
            reason: NameIssue::SchemaClash,
        }
    );
}

#[test]
fn test_banner_counts() {
    let single = generate(&["A"], 1).unwrap();
    assert!(single
        .as_str()
        .starts_with("// Generated by sptgen from 1 error kind and 1 warning slot. Do not edit.\n"));
    assert!(scenario()
        .as_str()
        .starts_with("// Generated by sptgen from 2 error kinds and 2 warning slots. Do not edit.\n"));
    assert_eq!(counted(0, "error kind"), "0 error kinds");
}

#[test]
fn test_prefixed_name_must_stay_unreserved() {
    // Error_ + _x would contain a double underscore
    let err = generate(&["_x"], 1).unwrap_err();
    assert!(matches!(
        err,
        CatalogError::InvalidName {
            reason: NameIssue::Reserved,
            ..
        }
    ));
}

#[test]
fn test_custom_schema() {
    let schema = Schema {
        namespace: "html".to_string(),
        sentinel: "NoError".to_string(),
        warnings_field: "warnings".to_string(),
        error_row_field: "err_row".to_string(),
        error_col_field: "err_col".to_string(),
        ..Schema::default()
    };
    let generator = Generator::new(schema).unwrap();
    let catalog = Catalog::new(["Unknown_tag_name"]).unwrap();
    let artifact = generator
        .generate(&catalog, SlotBudget::new(1).unwrap())
        .unwrap();
    let text = artifact.as_str();
    assert!(text.contains("struct NoError;\n"));
    assert!(text.contains("Error_NoError"));
    assert!(text.contains("constexpr auto w = parser.warnings[0];"));
    assert!(text.contains("html::IF<w.m == html::Error_Unknown_tag_name"));
    assert!(text.contains("parser.err_row >= 0 && parser.err_col >= 0"));
    assert!(!text.contains("spt::"));

    // The sentinel is still resolved through the mapping
    assert_eq!(
        catalog.marker(Ordinal::SENTINEL).map(|m| m.name("NoError")),
        Some("NoError")
    );
}

#[test]
fn test_invalid_schema_rejected() {
    let schema = Schema {
        enum_name: "enum".to_string(),
        ..Schema::default()
    };
    let err = Generator::new(schema).unwrap_err();
    assert_eq!(
        err,
        CatalogError::InvalidSchema {
            field: "enum_name",
            value: "enum".to_string(),
            reason: NameIssue::Keyword,
        }
    );

    let schema = Schema {
        ordinal_prefix: String::new(),
        ..Schema::default()
    };
    assert!(matches!(
        Generator::new(schema),
        Err(CatalogError::InvalidSchema {
            field: "ordinal_prefix",
            ..
        })
    ));
}

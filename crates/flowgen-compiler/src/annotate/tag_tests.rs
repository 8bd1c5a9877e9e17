use flowgen_core::Directive;

use super::tag::{JsonTag, flow_directives, lookup};

#[test]
fn lookup_finds_keys() {
    let tag = r#"gorm:"column:first_name;index:fl_idx" json:"has_lots_of_tags""#;
    assert_eq!(lookup(tag, "json").as_deref(), Some("has_lots_of_tags"));
    assert_eq!(
        lookup(tag, "gorm").as_deref(),
        Some("column:first_name;index:fl_idx")
    );
    assert_eq!(lookup(tag, "flow"), None);
}

#[test]
fn lookup_unquotes_values() {
    assert_eq!(lookup(r#"json:"a\"b""#, "json").as_deref(), Some("a\"b"));
    assert_eq!(lookup(r#"json:"""#, "json").as_deref(), Some(""));
}

#[test]
fn lookup_stops_at_malformed_pairs() {
    assert_eq!(lookup(r#"json: "name""#, "json"), None);
    assert_eq!(lookup(r#"bad json:"name""#, "json"), None);
    assert_eq!(lookup(r#"json:"open"#, "json"), None);
}

#[test]
fn json_tag_options() {
    assert_eq!(
        JsonTag::parse("name,omitempty"),
        JsonTag {
            name: Some("name".to_owned()),
            omit_empty: true,
            skip: false,
        }
    );
    assert_eq!(
        JsonTag::parse(",omitempty,string"),
        JsonTag {
            name: None,
            omit_empty: true,
            skip: false,
        }
    );
    assert!(JsonTag::parse("-").skip);
    assert_eq!(JsonTag::parse("-,").name.as_deref(), Some("-"));
}

#[test]
fn flow_tag_forms() {
    assert_eq!(
        flow_directives("override_name_d.OverrideTypeB"),
        vec![
            Directive::Rename("override_name_d".to_owned()),
            Directive::Retype("OverrideTypeB".to_owned()),
        ]
    );
    assert_eq!(
        flow_directives(".OverrideTypeA"),
        vec![Directive::Retype("OverrideTypeA".to_owned())]
    );
    assert_eq!(
        flow_directives("override_name_f."),
        vec![Directive::Rename("override_name_f".to_owned())]
    );
    assert_eq!(
        flow_directives("override_name_b"),
        vec![Directive::Rename("override_name_b".to_owned())]
    );
    assert_eq!(flow_directives("-"), vec![Directive::Ignore]);
    assert_eq!(flow_directives(""), vec![]);
}

use indoc::indoc;

use crate::annotate::{ModelOptions, UntaggedFields, build_model};
use crate::error::{Location, StructuralError};
use crate::flatten::flatten;
use crate::test_utils::decls;

fn flat(source: &str, decl: &str) -> Vec<String> {
    let options = ModelOptions::new().untagged(UntaggedFields::UseIdent);
    let model = build_model(&decls(source), &options).unwrap();
    let flattened = flatten(&model).unwrap();
    let (_, fields) = flattened.iter().find(|(name, _)| *name == decl).unwrap();
    fields
        .iter()
        .map(|f| format!("{}({})", f.field.name, f.origin))
        .collect()
}

fn flatten_error(source: &str) -> StructuralError {
    let options = ModelOptions::new().untagged(UntaggedFields::UseIdent);
    let model = build_model(&decls(source), &options).unwrap();
    flatten(&model).unwrap_err()
}

#[test]
fn outer_field_shadows_embedded_field() {
    let source = indoc! {"
        type Outer struct {
        	X int
        	Inner
        }

        type Inner struct {
        	X int
        	Y int
        }
    "};
    assert_eq!(flat(source, "Outer"), vec!["X(Outer)", "Y(Inner)"]);
}

#[test]
fn shadowing_ignores_position() {
    let source = indoc! {"
        type Outer struct {
        	Inner
        	X string
        }

        type Inner struct {
        	X int
        	Y int
        }
    "};
    assert_eq!(flat(source, "Outer"), vec!["Y(Inner)", "X(Outer)"]);
}

#[test]
fn embedded_fields_take_the_embedding_position() {
    let source = indoc! {"
        type Outer struct {
        	A int
        	Inner
        	B int
        }

        type Inner struct {
        	C int
        	D int
        }
    "};
    assert_eq!(
        flat(source, "Outer"),
        vec!["A(Outer)", "C(Inner)", "D(Inner)", "B(Outer)"]
    );
}

#[test]
fn multi_level_embedding() {
    let source = indoc! {"
        type Outer struct {
        	X int
        	Mid
        }

        type Mid struct {
        	Y int
        	*Inner
        }

        type Inner struct {
        	X int
        	Y int
        	Z int
        }
    "};
    assert_eq!(flat(source, "Mid"), vec!["Y(Mid)", "X(Inner)", "Z(Inner)"]);
    assert_eq!(
        flat(source, "Outer"),
        vec!["X(Outer)", "Y(Mid)", "Z(Inner)"]
    );
}

#[test]
fn first_embedding_wins_between_siblings() {
    let source = indoc! {"
        type Outer struct {
        	A
        	B
        }

        type A struct {
        	N int
        }

        type B struct {
        	N string
        	M string
        }
    "};
    assert_eq!(flat(source, "Outer"), vec!["N(A)", "M(B)"]);
}

#[test]
fn shared_embedding_is_flattened_once_per_struct() {
    let source = indoc! {"
        type D struct {
        	B
        	C
        }

        type B struct{ A }

        type C struct{ A }

        type A struct {
        	X int
        }
    "};
    assert_eq!(flat(source, "D"), vec!["X(A)"]);
    assert_eq!(flat(source, "B"), vec!["X(A)"]);
}

#[test]
fn embedding_cycle() {
    let source = indoc! {"
        type A struct {
        	B
        }

        type B struct {
        	A
        }
    "};
    let err = flatten_error(source);
    assert_eq!(
        err,
        StructuralError::EmbeddingCycle {
            path: vec!["A".to_owned(), "B".to_owned(), "A".to_owned()]
        }
    );
    assert_eq!(err.to_string(), "embedding cycle: A -> B -> A");
}

#[test]
fn self_embedding_is_a_cycle() {
    let err = flatten_error("type Node struct {\n\t*Node\n}\n");
    assert_eq!(err.to_string(), "embedding cycle: Node -> Node");
}

#[test]
fn embedding_something_other_than_a_struct() {
    let err = flatten_error("type A struct {\n\tMissing\n}\n");
    assert_eq!(
        err,
        StructuralError::UnknownEmbed {
            location: Location::field("A", "Missing"),
            name: "Missing".to_owned(),
        }
    );

    let err = flatten_error("type ID int\n\ntype A struct {\n\tID\n}\n");
    assert_eq!(
        err.to_string(),
        "A.ID: embedded type `ID` is not a struct declaration"
    );
}

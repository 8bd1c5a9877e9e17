use indoc::indoc;

use crate::annotate::UntaggedFields;
use crate::emit::BlockBody;
use crate::source_map::SourceMap;
use crate::test_utils::{decls, flow, flow_error, flow_with};
use crate::typegen::flow::Config;
use crate::{Error, Translator};

#[test]
fn struct_fields_in_declaration_order() {
    let source = indoc! {r#"
        package models

        import "time"

        type Person struct {
        	Name        string    `json:"name"` // This is a name comment
        	Age         int       `json:"age"`
        	Nullable    *string   `json:"nullable"`
        	Animals     []Animal  `json:"animals_array"`
        	AnimalsPtr  *[]Animal `json:"animals_array_ptr"`
        	AnimalsPtr2 []*Animal `json:"animals_array_ptr_2"`
        	Born        time.Time `json:"born"`
        	Nick        string    `json:"nick,omitempty"`
        	Ignore      string    `json:"-"`
        	Override    string    `json:"string_override" flow:"StringOverride.String"`
        	Fn          func() string
        	somedata    string
        }

        // Animal is anything, but should probably have a master
        // @strict
        type Animal struct {
        	Breed string `json:"breed"`
        	Name  string `json:"name"`
        	NoTag string
        }
    "#};
    insta::assert_snapshot!(flow(source), @r"
    // Animal is anything, but should probably have a master
    export type Animal = {|
    	breed: string,
    	name: string,
    |}

    export type Person = {
    	name: string,	// This is a name comment
    	age: number,
    	nullable: ?string,
    	animals_array: Array<Animal>,
    	animals_array_ptr: ?Array<Animal>,
    	animals_array_ptr_2: Array<?Animal>,
    	born: string,
    	nick?: string,
    	StringOverride: String,
    }
    ");
}

#[test]
fn named_types() {
    let source = indoc! {"
        package models

        // Payrate should be a number
        type Payrate int

        // Errors should be an array of strings
        type Errors []error

        type People []Person

        // MapKeyValPtr is a string pointer key
        type MapKeyValPtr map[*string]*Animal

        type Stat C.struct_stat

        type Handle *C.HANDLE

        type Raw json.RawMessage

        type Timeout time.Duration
    "};
    insta::assert_snapshot!(flow(source), @r"
    // Errors should be an array of strings
    export type Errors = Array<string>

    export type Handle = ?mixed

    // MapKeyValPtr is a string pointer key
    export type MapKeyValPtr = { [key: ?string]: ?Animal }

    // Payrate should be a number
    export type Payrate = number

    export type People = Array<Person>

    export type Raw = Object

    export opaque type Stat = mixed

    export type Timeout = number
    ");
}

#[test]
fn directives() {
    let source = indoc! {r#"
        package models

        // IgnoredComment should be ignored due to the comment line
        // @flowignore
        type IgnoredComment struct {
        	Something string `json:"something"`
        }

        // NoIgnoredComment should NOT be ignored since flowignore is not the only
        // thing there
        // flowignore will not ignore here
        type NoIgnoredComment struct {
        	Something string `json:"something"`
        }

        // @rename Pet
        type Animal struct {
        	Name string `json:"name"`
        }

        type Zoo struct {
        	Animals []*Animal        `json:"animals"`
        	Keeper  map[string]Animal `json:"keeper"`
        	// @comment Replaced trailing.
        	Size int `json:"size"` // original trailing
        	// Original doc.
        	// @comment Replaced doc.
        	Open bool `json:"open"`
        	// @retype ?Date
        	When int64 `json:"when"`
        	// @ignore
        	Secret string `json:"secret"`
        }

        // @strict
        type Blank struct{}

        // @retype string
        type Custom struct {
        	Fn func() `json:"fn"`
        }
    "#};
    insta::assert_snapshot!(flow(source), @r"
    export type Blank = {||}

    export type Custom = string

    // NoIgnoredComment should NOT be ignored since flowignore is not the only
    // thing there
    // flowignore will not ignore here
    export type NoIgnoredComment = {
    	something: string,
    }

    export type Pet = {
    	name: string,
    }

    export type Zoo = {
    	animals: Array<?Pet>,
    	keeper: { [key: string]: Pet },
    	size: number,	// Replaced trailing.
    	// Replaced doc.
    	open: boolean,
    	when: ?Date,
    }
    ");
}

#[test]
fn ignored_field_keeps_relative_order() {
    let source = indoc! {r#"
        type T struct {
        	A int `json:"a"`
        	B int `json:"b" flow:"-"`
        	C int `json:"c"`
        }
    "#};
    insta::assert_snapshot!(flow(source), @r"
    export type T = {
    	a: number,
    	c: number,
    }
    ");
}

#[test]
fn embedded_structs() {
    let source = indoc! {r#"
        type EmbeddedAnimal struct {
        	Animal
        	Horse
        }

        type Animal struct {
        	Breed string `json:"breed"`
        	Name  string `json:"name"`
        }

        type Horse struct {
        	Attrib     string `json:"some_horse_attrib"`
        	Doohickey2 string `json:"doohickey2"` // doohickey two
        	Name       string `json:"name"`
        }
    "#};
    insta::assert_snapshot!(flow(source), @r"
    export type Animal = {
    	breed: string,
    	name: string,
    }

    export type EmbeddedAnimal = {
    	breed: string,
    	name: string,
    	some_horse_attrib: string,
    	doohickey2: string,	// doohickey two
    }

    export type Horse = {
    	some_horse_attrib: string,
    	doohickey2: string,	// doohickey two
    	name: string,
    }
    ");
}

#[test]
fn property_keys_and_untagged_fields() {
    let source = indoc! {r#"
        type Form struct {
        	First string `json:"first-name"`
        	Count int    `json:"count,omitempty"`
        	Plain bool
        }
    "#};
    insta::assert_snapshot!(flow(source), @r"
    export type Form = {
    	'first-name': string,
    	count?: number,
    }
    ");

    let translator = Translator::new().untagged(UntaggedFields::UseIdent);
    insta::assert_snapshot!(flow_with(translator, source), @r"
    export type Form = {
    	'first-name': string,
    	count?: number,
    	Plain: boolean,
    }
    ");
}

#[test]
fn exported_only() {
    let source = indoc! {r#"
        type base struct {
        	ID int `json:"id"`
        }

        type Item struct {
        	base
        	Title string `json:"title"`
        }
    "#};
    insta::assert_snapshot!(flow_with(Translator::new().exported_only(true), source), @r"
    export type Item = {
    	id: number,
    	title: string,
    }
    ");
}

#[test]
fn alphabetical_order_with_header() {
    let source = "type Zebra struct{}\ntype apple struct{}\ntype Banana struct{}\n";
    let output = Translator::new().translate(&decls(source)).unwrap();
    insta::assert_snapshot!(output, @r"
    // @flow

    // DO NOT EDIT -- automatically generated by flowgen

    export type Banana = {}

    export type Zebra = {}

    export type apple = {}
    ");

    let output = Translator::new()
        .flow_config(Config::new().header(false).export(false))
        .translate(&decls(source))
        .unwrap();
    insta::assert_snapshot!(output, @r"
    type Banana = {}

    type Zebra = {}

    type apple = {}
    ");
}

#[test]
fn catalogue_blocks() {
    let source = indoc! {r#"
        // @strict
        type B struct {
        	X *int `json:"x,omitempty"` // maybe
        }

        type A []B
    "#};
    let catalogue = Translator::new().catalogue(&decls(source)).unwrap();
    let names: Vec<_> = catalogue.blocks.iter().map(|b| b.name.as_str()).collect();
    assert_eq!(names, ["A", "B"]);
    assert_eq!(
        catalogue.blocks[0].body,
        BlockBody::Alias {
            target: "Array<B>".to_owned(),
            opaque: false,
        }
    );

    let b = &catalogue.blocks[1];
    assert!(matches!(b.body, BlockBody::Object { exact: true, .. }));
    let field = &b.fields()[0];
    assert_eq!(field.name, "x");
    assert!(field.optional);
    assert_eq!(field.ty, "?number");
    assert_eq!(field.comment.as_deref(), Some("maybe"));
}

#[test]
fn flow_tag_forms_and_byte_sequences() {
    let source = indoc! {r#"
        type Blob struct {
        	Both    int      `json:"both" flow:"renamed.Date"`
        	Retyped int      `json:"retyped" flow:".Date"`
        	Renamed int      `json:"old" flow:"new."`
        	Dropped int      `json:"dropped" flow:"-"`
        	Data    []byte   `json:"data"`
        	Digest  [4]byte  `json:"digest"`
        	Refs    []*Blob  `json:"refs"`
        	Deep    **string `json:"deep"`
        }
    "#};
    insta::assert_snapshot!(flow(source), @r"
    export type Blob = {
    	renamed: Date,
    	retyped: Date,
    	new: number,
    	data: string,
    	digest: Array<number>,
    	refs: Array<?Blob>,
    	deep: ?string,
    }
    ");
}

#[test]
fn retype_bypasses_mapping() {
    let source = indoc! {r#"
        type A struct {
        	Fn func() string `json:"fn" flow:".Function"`
        }
    "#};
    insta::assert_snapshot!(flow(source), @r"
    export type A = {
    	fn: Function,
    }
    ");
}

#[test]
fn mapping_errors_name_the_field() {
    let err = flow_error("type A struct {\n\tFn func() string `json:\"fn\"`\n}\n");
    assert!(matches!(err, Error::Mapping(_)));
    assert_eq!(err.to_string(), "A.Fn: no Flow type for `func`");

    let source = indoc! {r#"
        type Outer struct {
        	Base
        }

        type Base struct {
        	Events chan int `json:"events"`
        }
    "#};
    assert_eq!(
        flow_error(source).to_string(),
        "Base.Events: no Flow type for `chan`"
    );
}

#[test]
fn structural_errors() {
    let err = flow_error("type A struct {\n\tB\n}\n\ntype B struct {\n\tA\n}\n");
    assert!(matches!(err, Error::Structural(_)));
    assert_eq!(err.to_string(), "embedding cycle: A -> B -> A");

    let err = flow_error("// @rename B\ntype A struct{}\n\ntype B struct{}\n");
    assert_eq!(err.to_string(), "duplicate declaration `B`");
}

#[test]
fn duplicate_field_names() {
    let err = flow_error("type T struct {\n\tA, B int `json:\"x\"`\n}\n");
    assert!(matches!(err, Error::Structural(_)));
    assert_eq!(err.to_string(), "T.B: duplicate field `x`");

    let source = indoc! {r#"
        type T struct {
        	X int `json:"x"`
        	Y int `json:"y" flow:"x."`
        }
    "#};
    assert_eq!(flow_error(source).to_string(), "T.Y: duplicate field `x`");

    // An ignored field frees its name.
    let source = indoc! {r#"
        type T struct {
        	X int `json:"x" flow:"-"`
        	Y int `json:"x"`
        }
    "#};
    insta::assert_snapshot!(flow(source), @r"
    export type T = {
    	x: number,
    }
    ");
}

#[test]
fn untagged_foreign_embed_is_an_error() {
    let source = indoc! {r#"
        type Stamp struct {
        	time.Time
        	ID int `json:"id"`
        }
    "#};
    let err = flow_error(source);
    assert!(matches!(err, Error::Structural(_)));
    assert_eq!(
        err.to_string(),
        "Stamp.Time: embedded type `time.Time` is not a struct declaration"
    );
}

#[test]
fn generic_declarations_stay_referable() {
    let source = indoc! {r#"
        type List[T any] struct {
        	Items []T `json:"items"`
        }

        type Pair[K comparable, V any] map[K]V

        type Holder struct {
        	L List[int]         `json:"l"`
        	P *Pair[string, int] `json:"p"`
        }
    "#};
    insta::assert_snapshot!(flow(source), @r"
    export type Holder = {
    	l: List,
    	p: ?Pair,
    }

    export opaque type List = mixed

    export opaque type Pair = mixed
    ");
}

#[test]
fn translate_sources() {
    let mut sources = SourceMap::new();
    sources.add_file("a.go", "package m\n\ntype B struct {\n\tA A `json:\"a\"`\n}\n");
    sources.add_file("b.go", "package m\n\ntype A int\n");
    let output = Translator::new()
        .flow_config(Config::new().header(false))
        .translate_sources(&sources)
        .unwrap();
    insta::assert_snapshot!(output, @r"
    export type A = number

    export type B = {
    	a: A,
    }
    ");

    let mut sources = SourceMap::new();
    sources.add_file("bad.go", "type A struct {\n\tX @\n}\n");
    let err = Translator::new().translate_sources(&sources).unwrap_err();
    assert!(matches!(err, Error::Syntax(_)));
    assert_eq!(err.to_string(), "syntax error: expected type, found `@`");
}

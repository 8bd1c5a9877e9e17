use flowgen_core::{DescType, Model, TypeRef};

use crate::emit::type_text;
use crate::error::{Location, MappingError};
use crate::mapper::Mapper;

fn map(ty: TypeRef) -> String {
    let model = Model::new();
    let mapped = Mapper::new(&model)
        .map(&ty, &Location::field("Decl", "Field"))
        .unwrap();
    type_text(&mapped)
}

fn map_error(ty: TypeRef) -> MappingError {
    let model = Model::new();
    Mapper::new(&model)
        .map(&ty, &Location::field("Decl", "Field"))
        .unwrap_err()
}

#[test]
fn primitives() {
    for name in [
        "int", "int8", "int16", "int32", "int64", "uint", "uint8", "uint16", "uint32", "uint64",
        "uintptr", "byte", "rune", "float32", "float64", "complex64", "complex128",
    ] {
        assert_eq!(map(TypeRef::primitive(name)), "number", "{name}");
    }
    assert_eq!(map(TypeRef::primitive("string")), "string");
    assert_eq!(map(TypeRef::primitive("error")), "string");
    assert_eq!(map(TypeRef::primitive("bool")), "boolean");
    assert_eq!(map(TypeRef::primitive("interface")), "Object");
    assert_eq!(map(TypeRef::primitive("struct")), "Object");
}

#[test]
fn target_names_are_a_fixed_point() {
    assert_eq!(map(TypeRef::named("number")), "number");
    assert_eq!(map(TypeRef::named("boolean")), "boolean");
    assert_eq!(map(TypeRef::named("Object")), "Object");
    assert_eq!(map(TypeRef::primitive("number")), "number");

    let model = Model::new();
    let mapper = Mapper::new(&model);
    let location = Location::decl("Decl");
    let ty = TypeRef::map(TypeRef::primitive("string"), TypeRef::primitive("int64"));
    assert_eq!(
        mapper.map(&ty, &location).unwrap(),
        mapper.map(&ty, &location).unwrap()
    );
}

#[test]
fn pointers_are_nullable_once() {
    let animal = || TypeRef::named("Animal");
    assert_eq!(map(TypeRef::pointer(animal())), "?Animal");
    assert_eq!(map(TypeRef::pointer(TypeRef::pointer(animal()))), "?Animal");
    assert_eq!(map(TypeRef::pointer(TypeRef::slice(animal()))), "?Array<Animal>");
    assert_eq!(map(TypeRef::slice(TypeRef::pointer(animal()))), "Array<?Animal>");

    let model = Model::new();
    let doubled = Mapper::new(&model)
        .map(
            &TypeRef::pointer(TypeRef::pointer(TypeRef::primitive("string"))),
            &Location::decl("Decl"),
        )
        .unwrap();
    assert_eq!(doubled, DescType::string().nullable());
}

#[test]
fn map_nullability_shapes() {
    let string = || TypeRef::primitive("string");
    let int = || TypeRef::primitive("int");
    assert_eq!(
        map(TypeRef::map(string(), int())),
        "{ [key: string]: number }"
    );
    assert_eq!(
        map(TypeRef::map(TypeRef::pointer(string()), int())),
        "{ [key: ?string]: number }"
    );
    assert_eq!(
        map(TypeRef::map(string(), TypeRef::pointer(int()))),
        "{ [key: string]: ?number }"
    );
    assert_eq!(
        map(TypeRef::map(TypeRef::pointer(string()), TypeRef::pointer(int()))),
        "{ [key: ?string]: ?number }"
    );
}

#[test]
fn sequences() {
    assert_eq!(map(TypeRef::slice(TypeRef::primitive("string"))), "Array<string>");
    assert_eq!(
        map(TypeRef::array(Some("16"), TypeRef::named("Person"))),
        "Array<Person>"
    );
    assert_eq!(map(TypeRef::slice(TypeRef::primitive("byte"))), "string");
    assert_eq!(map(TypeRef::slice(TypeRef::primitive("uint8"))), "string");
    assert_eq!(
        map(TypeRef::array(Some("4"), TypeRef::primitive("byte"))),
        "Array<number>"
    );
    assert_eq!(
        map(TypeRef::slice(TypeRef::map(
            TypeRef::primitive("string"),
            TypeRef::slice(TypeRef::named("Person"))
        ))),
        "Array<{ [key: string]: Array<Person> }>"
    );
}

#[test]
fn external_types() {
    assert_eq!(map(TypeRef::opaque("time", "Time")), "string");
    assert_eq!(map(TypeRef::opaque("time", "Duration")), "number");
    assert_eq!(map(TypeRef::opaque("json", "RawMessage")), "Object");
    assert_eq!(map(TypeRef::opaque("C", "struct_stat")), "mixed");

    let model = Model::new();
    let mapped = Mapper::new(&model)
        .map(&TypeRef::opaque("C", "struct_stat"), &Location::decl("Stat"))
        .unwrap();
    assert_eq!(mapped, DescType::opaque("C.struct_stat"));
}

#[test]
fn generic_bodies_are_opaque() {
    assert_eq!(map(TypeRef::primitive("generic")), "mixed");

    let model = Model::new();
    let mapped = Mapper::new(&model)
        .map(&TypeRef::primitive("generic"), &Location::decl("List"))
        .unwrap();
    assert_eq!(mapped, DescType::opaque("generic"));
}

#[test]
fn unmapped_primitives() {
    assert_eq!(
        map_error(TypeRef::primitive("func")),
        MappingError::UnmappedPrimitive {
            location: Location::field("Decl", "Field"),
            ty: "func".to_owned(),
        }
    );
    assert_eq!(
        map_error(TypeRef::slice(TypeRef::primitive("chan"))).to_string(),
        "Decl.Field: no Flow type for `chan`"
    );
    assert_eq!(
        map_error(TypeRef::map(
            TypeRef::primitive("string"),
            TypeRef::primitive("comparable")
        ))
        .to_string(),
        "Decl.Field: no Flow type for `comparable`"
    );
}

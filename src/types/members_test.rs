use bumpalo::Bump;
use pretty_assertions::assert_eq;

use crate::symbols::DocJoiner;
use crate::types::error::ResolveError;
use crate::types::factory_test::{fixture, session};
use crate::Vec;

#[test]
fn test_members_are_canonical_on_their_declaring_type() {
    let arena = Bump::new();
    let fx = fixture();
    let extractor = DocJoiner::default();
    let factory = session(&arena, &fx, &extractor);

    let animal = factory.declared(fx.animal);
    let dog = factory.declared(fx.dog);
    let string = factory.declared(fx.string);

    // inherited lookup through the subtype yields the declaring type's
    // handle, not a copy
    let through_dog = dog.method("eat", &[string]).unwrap().unwrap();
    let through_animal = animal.method("eat", &[string]).unwrap().unwrap();
    assert!(core::ptr::eq(through_dog, through_animal));
    assert!(core::ptr::eq(through_dog.declaring_class(), animal));

    let declared = animal.declared_methods();
    assert!(
        declared
            .iter()
            .any(|&method| core::ptr::eq(method, through_dog))
    );
}

#[test]
fn test_strict_overload_lookup() {
    let arena = Bump::new();
    let fx = fixture();
    let extractor = DocJoiner::default();
    let factory = session(&arena, &fx, &extractor);

    let animal = factory.declared(fx.animal);
    let string = factory.declared(fx.string);
    let integer = factory.declared(fx.integer);
    let int_type = factory.from_name("int").unwrap();

    let unary = animal.method("eat", &[string]).unwrap().unwrap();
    assert_eq!(unary.parameter_count(), 1);

    let binary = animal.method("eat", &[string, int_type]).unwrap().unwrap();
    assert_eq!(binary.parameter_count(), 2);
    assert!(!core::ptr::eq(unary, binary));

    // exact identity only: no boxing, widening or subtype variance
    assert!(animal.method("eat", &[integer]).unwrap().is_none());
    assert!(animal.method("eat", &[]).unwrap().is_none());
    assert!(animal.method("bark", &[string]).unwrap().is_none());
}

#[test]
fn test_constructor_lookup_is_not_inherited() {
    let arena = Bump::new();
    let fx = fixture();
    let extractor = DocJoiner::default();
    let factory = session(&arena, &fx, &extractor);

    let animal = factory.declared(fx.animal);
    let dog = factory.declared(fx.dog);
    let string = factory.declared(fx.string);

    let ctor = dog.constructor(&[string]).unwrap().unwrap();
    assert!(core::ptr::eq(ctor.declaring_class(), dog));
    assert_eq!(ctor.name(), "<init>");
    assert_eq!(ctor.parameter_names(), ["name"]);

    // Animal's no-arg constructor is not visible through Dog
    assert!(dog.constructor(&[]).unwrap().is_none());
    assert!(animal.constructor(&[]).unwrap().is_some());

    assert_eq!(dog.declared_constructors().len(), 1);
    assert!(core::ptr::eq(dog.declared_constructors()[0], ctor));
}

#[test]
fn test_optional_unwrap() {
    let arena = Bump::new();
    let fx = fixture();
    let extractor = DocJoiner::default();
    let factory = session(&arena, &fx, &extractor);

    let dog = factory.declared(fx.dog);
    let string = factory.declared(fx.string);
    let optional = factory.declared(fx.optional);

    let nickname = dog.method("nickname", &[]).unwrap().unwrap();
    assert!(core::ptr::eq(nickname.return_type().unwrap(), optional));
    assert!(core::ptr::eq(nickname.optional_return_type().unwrap(), string));

    // identity on anything that is not the optional wrapper
    let chip = find_field(dog, "chip");
    assert!(core::ptr::eq(chip.optional_type().unwrap(), string));
    let name = find_field(dog, "name");
    assert!(core::ptr::eq(name.optional_type().unwrap(), string));
    assert!(core::ptr::eq(
        name.optional_type().unwrap(),
        name.field_type().unwrap()
    ));
}

#[test]
fn test_repeated_element_shapes() {
    let arena = Bump::new();
    let fx = fixture();
    let extractor = DocJoiner::default();
    let factory = session(&arena, &fx, &extractor);

    let dog = factory.declared(fx.dog);
    let string = factory.declared(fx.string);
    let int_type = factory.from_name("int").unwrap();

    // a List<String> field repeats String through the collection marker
    let toys = find_field(dog, "toys");
    assert!(core::ptr::eq(toys.repeated_element_type().unwrap(), string));

    // an array field repeats its component
    let scores = find_field(dog, "scores");
    assert!(core::ptr::eq(
        scores.repeated_element_type().unwrap(),
        int_type
    ));

    // optional wrapping is transparent
    let aliases = find_field(dog, "aliases");
    assert!(core::ptr::eq(
        aliases.repeated_element_type().unwrap(),
        string
    ));

    // a plain field is not a repeatable shape
    let name = find_field(dog, "name");
    assert!(matches!(
        name.repeated_element_type(),
        Err(ResolveError::NotRepeatable { .. })
    ));
}

#[test]
fn test_enum_constants_surface_as_fields() {
    let arena = Bump::new();
    let fx = fixture();
    let extractor = DocJoiner::default();
    let factory = session(&arena, &fx, &extractor);

    let color = factory.declared(fx.color);
    let fields = color.declared_fields();
    assert_eq!(fields.len(), 3);

    let constants = color.enum_constants().unwrap();
    for (field, &constant) in fields.iter().zip(constants) {
        assert!(field.is_enum_constant());
        assert!(core::ptr::eq(field.as_enum_constant().unwrap(), constant));
        assert!(core::ptr::eq(field.field_type().unwrap(), color));
        assert_eq!(field.name(), constant.name());
    }

    let dog = factory.declared(fx.dog);
    let name = find_field(dog, "name");
    assert!(!name.is_enum_constant());
    assert!(matches!(
        name.as_enum_constant(),
        Err(ResolveError::NotAnEnumConstant { .. })
    ));
}

#[test]
fn test_member_documentation() {
    let arena = Bump::new();
    let fx = fixture();
    let extractor = DocJoiner::default();
    let factory = session(&arena, &fx, &extractor);

    let animal = factory.declared(fx.animal);
    let dog = factory.declared(fx.dog);
    let string = factory.declared(fx.string);

    let speak = animal.method("speak", &[]).unwrap().unwrap();
    assert_eq!(speak.documentation().as_deref(), Some("Makes a sound"));
    assert!(speak.annotation("Doc").is_some());

    let eat = animal.method("eat", &[string]).unwrap().unwrap();
    assert_eq!(eat.documentation(), None);

    // constructors carry the annotation but never surface documentation
    let ctor = dog.constructor(&[string]).unwrap().unwrap();
    assert!(ctor.annotation("Doc").is_some());
    assert_eq!(ctor.documentation(), None);
}

#[test]
fn test_parameter_accessors() {
    let arena = Bump::new();
    let fx = fixture();
    let extractor = DocJoiner::default();
    let factory = session(&arena, &fx, &extractor);

    let animal = factory.declared(fx.animal);
    let string = factory.declared(fx.string);
    let int_type = factory.from_name("int").unwrap();

    let eat = animal.method("eat", &[string, int_type]).unwrap().unwrap();
    assert_eq!(eat.parameter_count(), 2);
    assert_eq!(eat.parameter_names(), ["food", "count"]);

    let types = eat.parameter_types().unwrap();
    assert!(core::ptr::eq(types[0], string));
    assert!(core::ptr::eq(types[1], int_type));

    let void_type = factory.void_type();
    assert!(core::ptr::eq(eat.return_type().unwrap(), void_type));
}

fn find_field<'a>(
    handle: &'a crate::types::handle::TypeHandle<'a>,
    name: &str,
) -> &'a crate::types::members::Field<'a> {
    let fields: Vec<_> = handle
        .declared_fields()
        .into_iter()
        .filter(|field| field.name() == name)
        .collect();
    assert_eq!(fields.len(), 1, "field {name} not unique or missing");
    fields[0]
}

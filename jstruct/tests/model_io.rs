//! File round-trip tests for `Model` persistence.
//!
//! Writes models into a scratch directory and reads them back, covering the
//! boolean write contract and the typed read errors.

use std::fs;

use jstruct::example::ExampleUser;
use jstruct::test_support::{Household, Scratch, household, member};
use jstruct::{JstructConfig, Model, ModelError, PathError};

/// Arthur is written with indent 4, read back, and still validates.
#[test]
fn example_user_round_trips_through_file() {
    let scratch = Scratch::new().expect("scratch");
    let path = scratch.path("user.json");

    let user = ExampleUser::new("Arthur", 1863, "Bear").expect("valid user");
    assert!(user.write_json(&path, 4));

    let contents = scratch.read("user.json").expect("read");
    assert!(contents.starts_with("{\n    \""));
    for key in ["\"name\"", "\"birthyear\"", "\"favoriteFood\"", "\"generatedTime\""] {
        assert!(contents.contains(key), "missing {key} in {contents}");
    }
    assert!(!contents.ends_with('\n'));

    let loaded = ExampleUser::read_json(&path).expect("read user");
    assert_eq!(loaded, user);
    assert!(loaded.validate().is_ok());
}

/// Nested models, sequences, and sub-second timestamps survive a round trip.
#[test]
fn nested_household_round_trips() {
    let scratch = Scratch::new().expect("scratch");
    let path = scratch.path("camp.json");
    let camp = household("Horseshoe Overlook");

    assert!(camp.write_json(&path, 2));
    let loaded = Household::read_json(&path).expect("read household");
    assert_eq!(loaded, camp);
    assert_eq!(loaded.founded.timestamp_subsec_nanos(), 123_456_789);
}

#[test]
fn compact_write_has_no_whitespace() {
    let scratch = Scratch::new().expect("scratch");
    let path = scratch.path("member.json");

    assert!(member("Hosea", 55).write_json(&path, 0));
    assert_eq!(
        scratch.read("member.json").expect("read"),
        r#"{"name":"Hosea","age":55}"#
    );
}

#[test]
fn write_overwrites_existing_file() {
    let scratch = Scratch::new().expect("scratch");
    let path = scratch.path("member.json");
    fs::write(&path, "stale contents that are longer than the new ones").expect("seed");

    assert!(member("Lenny", 20).write_json(&path, -3));
    let loaded = jstruct::test_support::Member::read_json(&path).expect("read");
    assert_eq!(loaded, member("Lenny", 20));
}

/// Missing parent directories make the write fail without panicking.
#[test]
fn write_into_missing_directory_returns_false() {
    let scratch = Scratch::new().expect("scratch");
    let path = scratch.path("missing/dir/member.json");

    assert!(!member("Bill", 40).write_json(&path, 4));
    assert!(!path.exists());
    assert!(!scratch.path("missing").exists());
}

#[test]
fn write_to_directory_returns_false() {
    let scratch = Scratch::new().expect("scratch");
    assert!(!member("Javier", 30).write_json(scratch.root(), 4));
}

#[test]
fn non_json_extension_still_writes() {
    let scratch = Scratch::new().expect("scratch");
    let path = scratch.path("member.txt");

    assert!(member("Kieran", 22).write_json(&path, 4));
    assert!(path.is_file());
}

#[test]
fn trailing_newline_is_configurable() {
    let scratch = Scratch::new().expect("scratch");
    let path = scratch.path("member.json");
    let config = JstructConfig {
        trailing_newline: true,
        ..JstructConfig::default()
    };

    assert!(member("Charles", 30).write_json_with(&path, 4, &config));
    let contents = scratch.read("member.json").expect("read");
    assert!(contents.ends_with("}\n"));

    let loaded = jstruct::test_support::Member::read_json_with(&path, &config).expect("read");
    assert_eq!(loaded.name, "Charles");
}

#[test]
fn reading_missing_file_is_a_path_error() {
    let scratch = Scratch::new().expect("scratch");
    let err = ExampleUser::read_json(scratch.path("absent.json")).expect_err("missing");
    assert!(matches!(
        err,
        ModelError::Path(PathError::Canonicalize { .. })
    ));
}

#[test]
fn reading_directory_is_a_path_error() {
    let scratch = Scratch::new().expect("scratch");
    let err = ExampleUser::read_json(scratch.root()).expect_err("directory");
    assert!(matches!(err, ModelError::Path(PathError::NotAFile { .. })));
}

#[test]
fn malformed_json_is_a_decode_error() {
    let scratch = Scratch::new().expect("scratch");
    let path = scratch.path("user.json");
    fs::write(&path, "{\"name\": \"Arthur\",").expect("write");

    let err = ExampleUser::read_json(&path).expect_err("malformed");
    assert!(matches!(
        err,
        ModelError::Decode {
            type_name: "ExampleUser",
            ..
        }
    ));
}

#[test]
fn mismatched_shape_is_a_decode_error() {
    let scratch = Scratch::new().expect("scratch");
    let path = scratch.path("user.json");
    fs::write(
        &path,
        r#"{"name":"Arthur","birthyear":"1863","favoriteFood":"Bear","generatedTime":"1899-01-01T00:00:00Z"}"#,
    )
    .expect("write");

    let err = ExampleUser::read_json(&path).expect_err("wrong type");
    assert!(matches!(err, ModelError::Decode { .. }));
}

/// A stored value that breaks the rules loads only through the unchecked reader.
#[test]
fn invalid_file_fails_validation_on_read() {
    let scratch = Scratch::new().expect("scratch");
    let path = scratch.path("micah.json");
    fs::write(
        &path,
        r#"{"name":"Micah","birthyear":1860,"favoriteFood":"Revenge","generatedTime":"1899-01-01T00:00:00.5Z"}"#,
    )
    .expect("write");

    let err = ExampleUser::read_json(&path).expect_err("invalid");
    let violations = err.violations().expect("validation error");
    assert_eq!(violations.len(), 1);
    assert!(violations.contains_path("favoriteFood"));

    let micah = ExampleUser::read_json_unchecked(&path).expect("unchecked read");
    assert_eq!(micah.favorite_food(), "Revenge");
    assert!(micah.validate().is_err());
}

/// Two independently violating fields are both reported.
#[test]
fn validation_reports_every_violating_field() {
    let scratch = Scratch::new().expect("scratch");
    let path = scratch.path("camp.json");
    let mut camp = household("");
    camp.leader.age = 130;
    fs::write(&path, camp.to_json(4).expect("encode")).expect("write");

    let err = Household::read_json(&path).expect_err("invalid");
    let violations = err.violations().expect("validation error");
    assert_eq!(violations.len(), 2);
    assert!(violations.contains_path("name"));
    assert!(violations.contains_path("leader.age"));
}

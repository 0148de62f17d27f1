//! Tests for reading schema files

use loreline_foundation::{FieldType, ParseError};
use loreline_loader::{LoadError, Loader, LoaderConfig};
use loreline_runtime::Schema;

use crate::{data_dir, schema};

#[test]
fn object_schema() {
    let schema = schema("object");
    assert_eq!(schema.name(), "object");
    assert_eq!(schema.record(), Some("name"));
    assert_eq!(schema.directives().len(), 8);

    let attack = &schema.directives()[4];
    assert_eq!(attack.directive(), "attack");
    let types: Vec<FieldType> = attack.fields().iter().map(|f| f.ty).collect();
    assert_eq!(types, [FieldType::Rand, FieldType::Int, FieldType::Int]);
    assert!(attack.fields()[1].optional);
}

#[test]
fn schema_without_records() {
    let schema = schema("constants");
    assert_eq!(schema.record(), None);
    assert_eq!(schema.keywords(), ["carry-cap:", "store:"]);
}

#[test]
fn data_file_is_not_a_schema() {
    // Object data uses directives the schema reader does not know.
    let loader = Loader::new(LoaderConfig::new(data_dir("gamedata")));
    let err = Schema::load(&loader, "object").unwrap_err();
    assert!(matches!(err, LoadError::Parse(_)));
    assert_eq!(err.code(), ParseError::UndefinedDirective);
}

#[test]
fn missing_schema() {
    let loader = Loader::new(LoaderConfig::new(data_dir("schema")));
    let err = Schema::load(&loader, "monster").unwrap_err();
    assert_eq!(err.to_string(), "Cannot open 'monster.txt'");
}

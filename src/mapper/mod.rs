//! Generic JSON-to-record construction.
//!
//! The service speaks camelCase JSON; the crate's records use snake_case
//! fields. [`keycase`] normalizes the keys, then [`materialize`] builds a
//! record under the guidance of its static [`Schema`] descriptor: unknown
//! keys are dropped, nested records and lists recurse, and required fields
//! that never arrive fail construction with a named error.

/// Key-casing conversion between the service and crate conventions
pub mod keycase;
/// Record shape descriptors
pub mod schema;

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::errors::{Error, Result};
use crate::mapper::schema::{Kind, Schema};

/// A record type that can be materialized from a key-normalized payload.
pub trait Record: DeserializeOwned {
    /// Descriptor driving this record's materialization.
    fn schema() -> &'static Schema;
}

/// Builds one record from a key-normalized JSON payload.
///
/// The payload root must be an object. Keys the descriptor does not declare
/// are ignored, which keeps the client forward compatible with service
/// additions. A nested field whose value has the wrong shape is left unset
/// rather than failing; if that field is required, the omission surfaces as
/// [`Error::MissingField`].
pub fn materialize<T: Record>(data: &Value) -> Result<T> {
    let shaped = shape(T::schema(), data)?;
    Ok(serde_json::from_value(shaped)?)
}

/// Builds a list of records from a payload whose root is a JSON array.
pub fn materialize_list<T: Record>(data: &Value) -> Result<Vec<T>> {
    let items = data.as_array().ok_or(Error::Shape {
        schema: T::schema().name,
        expected: "an array",
    })?;
    items.iter().map(|item| materialize(item)).collect()
}

fn shape(schema: &'static Schema, data: &Value) -> Result<Value> {
    let source = data.as_object().ok_or(Error::Shape {
        schema: schema.name,
        expected: "an object",
    })?;

    let mut target = Map::new();
    for field in schema.fields {
        match (field.kind, source.get(field.name)) {
            (Kind::Scalar, Some(value)) => {
                target.insert(field.name.to_owned(), value.clone());
            }
            (Kind::Nested(record), Some(value)) if value.is_object() => {
                target.insert(field.name.to_owned(), shape(record, value)?);
            }
            (Kind::NestedList(element), Some(Value::Array(items))) => {
                let shaped = items
                    .iter()
                    .map(|item| shape(element, item))
                    .collect::<Result<Vec<_>>>()?;
                target.insert(field.name.to_owned(), Value::Array(shaped));
            }
            // Absent, or present with a shape the kind cannot use: the
            // field stays unset and the required check below decides.
            _ => {}
        }
        if field.required && !target.contains_key(field.name) {
            return Err(Error::MissingField {
                schema: schema.name,
                field: field.name,
            });
        }
    }
    Ok(Value::Object(target))
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;
    use serde_json::json;

    use super::schema::{scalar, Field, Kind, Schema};
    use super::*;
    use crate::entities::{Artist, BeatInfo, Revision, Song};

    fn song_payload() -> Value {
        json!({
            "id": 1,
            "title": "Tell Your World",
            "url": "www.example.com/watch?v=abc",
            "permalink": "https://songle.jp/songs/1",
            "artist": {"id": 2, "name": "livetune"},
            "duration": 254.0,
            "code": "xyz",
            "rms_amplitude": 0.42,
            "created_at": "2012-01-01T00:00:00Z",
            "updated_at": "2012-01-02T00:00:00Z",
            "recognized_at": "2012-01-03T00:00:00Z",
            "unused_future_field": 1,
        })
    }

    #[test]
    fn materializes_song_with_nested_artist() {
        let song: Song = materialize(&song_payload()).unwrap();
        assert_eq!(song.id, 1);
        assert_eq!(song.title, "Tell Your World");
        assert_eq!(
            song.artist,
            Artist {
                id: 2,
                name: "livetune".to_owned(),
            }
        );
        assert_eq!(song.duration, 254.0);
    }

    #[test]
    fn unknown_keys_are_dropped() {
        // "unused_future_field" is not in the Song descriptor; construction
        // succeeds without it.
        let song: Song = materialize(&song_payload()).unwrap();
        assert_eq!(song.rms_amplitude, 0.42);
    }

    #[test]
    fn list_fields_preserve_order_and_length() {
        let payload = json!({
            "beats": [
                {"index": 0, "start": 0, "count": 4, "position": 1, "bpm": 120.0},
                {"index": 1, "start": 500, "count": 4, "position": 2, "bpm": 120.0},
                {"index": 2, "start": 1000, "count": 4, "position": 3, "bpm": 119.5},
            ],
        });
        let info: BeatInfo = materialize(&payload).unwrap();
        assert_eq!(info.beats.len(), 3);
        let indices: Vec<u32> = info.beats.iter().map(|beat| beat.index).collect();
        assert_eq!(indices, vec![0, 1, 2]);
        assert_eq!(info.beats[2].bpm, 119.5);
    }

    #[test]
    fn missing_required_field_names_field_and_schema() {
        let mut payload = song_payload();
        payload.as_object_mut().unwrap().remove("title");
        let err = materialize::<Song>(&payload).unwrap_err();
        match err {
            Error::MissingField { schema, field } => {
                assert_eq!(schema, "Song");
                assert_eq!(field, "title");
            }
            other => panic!("expected MissingField, got {other:?}"),
        }
    }

    #[test]
    fn required_nested_field_with_wrong_shape_is_missing() {
        let mut payload = song_payload();
        payload
            .as_object_mut()
            .unwrap()
            .insert("artist".to_owned(), json!(5));
        let err = materialize::<Song>(&payload).unwrap_err();
        match err {
            Error::MissingField { schema, field } => {
                assert_eq!(schema, "Song");
                assert_eq!(field, "artist");
            }
            other => panic!("expected MissingField, got {other:?}"),
        }
    }

    #[test]
    fn non_object_root_is_a_shape_error() {
        let err = materialize::<Song>(&json!([1, 2, 3])).unwrap_err();
        match err {
            Error::Shape { schema, .. } => assert_eq!(schema, "Song"),
            other => panic!("expected Shape, got {other:?}"),
        }
    }

    #[test]
    fn list_root_must_be_an_array() {
        let err = materialize_list::<Revision>(&json!({"id": 1})).unwrap_err();
        match err {
            Error::Shape { schema, .. } => assert_eq!(schema, "Revision"),
            other => panic!("expected Shape, got {other:?}"),
        }
    }

    #[derive(Debug, PartialEq, Deserialize)]
    struct Sketch {
        id: u64,
        #[serde(default)]
        label: String,
    }

    static SKETCH: Schema = Schema {
        name: "Sketch",
        fields: &[
            scalar("id"),
            Field {
                name: "label",
                kind: Kind::Scalar,
                required: false,
            },
        ],
    };

    impl Record for Sketch {
        fn schema() -> &'static Schema {
            &SKETCH
        }
    }

    #[test]
    fn absent_non_required_field_takes_its_default() {
        let sketch: Sketch = materialize(&json!({"id": 7})).unwrap();
        assert_eq!(
            sketch,
            Sketch {
                id: 7,
                label: String::new(),
            }
        );
    }
}

use serde::ser::{SerializeMap, SerializeTuple};
use serde::{Deserialize, Serialize, Serializer};
use serde_json::value::RawValue;
use uuid::Uuid;

/// QueryRequest is the body posted to the `Query` endpoint
#[derive(Debug, Serialize)]
pub struct QueryRequest<'a, P: ?Sized> {
    pub query: &'a str,
    /// Named `@param` values. Sequences expand `IN @param` clauses.
    pub parameters: &'a P,
}

/// ResultEnvelope wraps every query response: `{"results": ...}`
///
/// `results` is kept as undecoded JSON so callers choose the target shape.
#[derive(Debug, Deserialize)]
pub struct ResultEnvelope {
    pub results: Box<RawValue>,
}

/// BulkDeleteRequest is the body posted to `BulkDelete`
#[derive(Debug, Serialize)]
pub struct BulkDeleteRequest<'a> {
    pub uris: Vec<&'a str>,
}

/// PropertyUpdate serializes as a single-entry object `{name: value}`
#[derive(Debug)]
pub struct PropertyUpdate<'a, V: ?Sized> {
    pub name: &'a str,
    pub value: &'a V,
}

impl<V: Serialize + ?Sized> Serialize for PropertyUpdate<'_, V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(self.name, self.value)?;
        map.end()
    }
}

/// BulkUpdateRequest is the body posted to `BulkUpdate`
#[derive(Debug, Serialize)]
pub struct BulkUpdateRequest<'a, V: ?Sized> {
    pub uris: Vec<String>,
    pub properties: PropertyUpdate<'a, V>,
}

/// Number of positional arguments `CreateCustomProperty` expects
pub const CUSTOM_PROPERTY_ARG_COUNT: usize = 13;

/// Size declared for `string` custom properties
pub const STRING_PROPERTY_SIZE: u32 = 400;

/// CustomPropertyDefinition is the positional argument list of the
/// `CreateCustomProperty` verb.
///
/// The verb takes its arguments by position, so this serializes as a
/// 13-element JSON array of strings, in this exact order:
///
/// | # | argument      | value                                   |
/// |---|---------------|-----------------------------------------|
/// | 0 | property name | `name`                                  |
/// | 1 | description   | `description`                           |
/// | 2 | value type    | `value_type`                            |
/// | 3 | size          | `"400"` for `string`, otherwise `"0"`   |
/// | 4 | valid range   | `""`                                    |
/// | 5 | parser        | `""`                                    |
/// | 6 | header        | `""`                                    |
/// | 7 | alignment     | `""`                                    |
/// | 8 | format        | `""`                                    |
/// | 9 | units         | `""`                                    |
/// | 10| usages        | `""`                                    |
/// | 11| mandatory     | `"false"` / `"true"`                    |
/// | 12| default value | `""`                                    |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomPropertyDefinition {
    pub name: String,
    pub description: String,
    pub value_type: String,
    pub mandatory: bool,
}

impl CustomPropertyDefinition {
    /// A non-mandatory property definition
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        value_type: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            value_type: value_type.into(),
            mandatory: false,
        }
    }

    /// Column size: 400 for strings, 0 otherwise
    pub fn size(&self) -> u32 {
        if self.value_type == "string" {
            STRING_PROPERTY_SIZE
        } else {
            0
        }
    }

    /// The argument list in wire order
    pub fn to_args(&self) -> [String; CUSTOM_PROPERTY_ARG_COUNT] {
        [
            self.name.clone(),
            self.description.clone(),
            self.value_type.clone(),
            self.size().to_string(),
            String::new(), // valid range
            String::new(), // parser
            String::new(), // header
            String::new(), // alignment
            String::new(), // format
            String::new(), // units
            String::new(), // usages
            self.mandatory.to_string(),
            String::new(), // default value
        ]
    }
}

impl Serialize for CustomPropertyDefinition {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let args = self.to_args();
        let mut tuple = serializer.serialize_tuple(CUSTOM_PROPERTY_ARG_COUNT)?;
        for arg in &args {
            tuple.serialize_element(arg)?;
        }
        tuple.end()
    }
}

/// RemoveNcmNodesRequest is the argument list of `Cirrus.Nodes/RemoveNodes`:
/// a single positional argument holding every node GUID, `[[id, ...]]`
#[derive(Debug)]
pub struct RemoveNcmNodesRequest<'a> {
    pub node_ids: &'a [Uuid],
}

impl Serialize for RemoveNcmNodesRequest<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut tuple = serializer.serialize_tuple(1)?;
        tuple.serialize_element(self.node_ids)?;
        tuple.end()
    }
}

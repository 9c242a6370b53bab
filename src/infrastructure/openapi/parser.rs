//! OpenAPI document parser
//!
//! Builds an [`OpenApiDocument`] from the raw JSON value of an OpenAPI 3.x or
//! Swagger 2.0 document. It handles:
//! - Path-level and operation-level parameters
//! - Parameter `$ref` resolution against the same document
//! - OpenAPI 3 `schema` objects and Swagger 2 inline `type`/`format`/`items`
//!
//! Every parameter is tagged with the node path of its entry in the
//! `parameters` array it was declared in.

use serde_json::Value as JsonValue;

use super::document::{HttpMethod, OpenApiDocument, Operation, PathItem};
use crate::core::{Error, Result};
use crate::model::{DocumentId, NodePath, Parameter, ParameterLocation, Schema};

/// Longest `$ref` chain followed before giving up; also ends reference cycles
const MAX_REF_DEPTH: usize = 16;

/// Parse document text as JSON or YAML.
///
/// The format is picked from the extension of `source` (`.json`, `.yaml`,
/// `.yml`), then from `content_type`; otherwise JSON is tried before YAML.
pub fn parse_document_text(
    content: &str,
    source: &str,
    content_type: Option<&str>,
) -> Result<JsonValue> {
    let content_type = content_type.unwrap_or("");
    let value: JsonValue = if source.ends_with(".json") {
        serde_json::from_str(content)?
    } else if source.ends_with(".yaml") || source.ends_with(".yml") {
        serde_yaml::from_str(content)?
    } else if content_type.contains("json") {
        serde_json::from_str(content)?
    } else if content_type.contains("yaml") {
        serde_yaml::from_str(content)?
    } else {
        serde_json::from_str(content)
            .or_else(|_| serde_yaml::from_str(content))
            .map_err(|e| Error::load(format!("Failed to parse OpenAPI document: {e}")))?
    };
    Ok(value)
}

/// OpenAPI document parser
pub struct OpenApiParser {
    /// The raw JSON value of the OpenAPI document
    pub json: JsonValue,
}

impl OpenApiParser {
    /// Create a new parser from JSON content
    pub fn new(json: JsonValue) -> Self {
        Self { json }
    }

    /// Parse the document, assigning it a random id
    pub fn parse(&self) -> Result<OpenApiDocument> {
        let version = self
            .json
            .get("openapi")
            .or_else(|| self.json.get("swagger"))
            .and_then(JsonValue::as_str)
            .ok_or_else(|| Error::openapi("Missing OpenAPI version"))?
            .to_string();

        let title = self.title().map(String::from);
        let paths = self.parse_paths()?;
        tracing::debug!(
            "OpenAPI parser found {} path items in {version} document",
            paths.len()
        );

        Ok(OpenApiDocument {
            id: DocumentId::random(),
            version,
            title,
            paths,
        })
    }

    /// Get the title of the API
    pub fn title(&self) -> Option<&str> {
        self.json.get("info")?.get("title")?.as_str()
    }

    fn parse_paths(&self) -> Result<Vec<PathItem>> {
        let paths = self
            .json
            .get("paths")
            .and_then(JsonValue::as_object)
            .ok_or_else(|| Error::openapi("Missing 'paths' object"))?;

        let items = paths
            .iter()
            .map(|(path, path_item)| {
                let node_path = NodePath::root().indexed("paths", path);
                let operations = HttpMethod::all()
                    .iter()
                    .filter_map(|method| {
                        path_item
                            .get(method.as_str())
                            .filter(|op| op.is_object())
                            .map(|op| self.build_operation(*method, op, &node_path))
                    })
                    .collect();

                PathItem {
                    path: path.clone(),
                    parameters: self.extract_parameters(path_item, &node_path),
                    operations,
                    node_path,
                }
            })
            .collect();

        Ok(items)
    }

    fn build_operation(
        &self,
        method: HttpMethod,
        method_item: &JsonValue,
        item_path: &NodePath,
    ) -> Operation {
        let node_path = item_path.child(method.as_str());
        Operation {
            method,
            operation_id: method_item
                .get("operationId")
                .and_then(JsonValue::as_str)
                .map(String::from),
            summary: method_item
                .get("summary")
                .and_then(JsonValue::as_str)
                .map(String::from),
            parameters: self.extract_parameters(method_item, &node_path),
            node_path,
        }
    }

    /// Extracts the parameters of a path item or operation, resolving any
    /// local `$ref`. Entries that cannot be parsed are skipped.
    fn extract_parameters(&self, container: &JsonValue, base: &NodePath) -> Vec<Parameter> {
        let Some(entries) = container.get("parameters").and_then(JsonValue::as_array) else {
            return Vec::new();
        };

        entries
            .iter()
            .enumerate()
            .filter_map(|(index, entry)| {
                let resolved = self.follow_refs(entry)?;
                match self.parse_parameter(resolved) {
                    Ok(mut param) => {
                        param.node_path = Some(base.indexed("parameters", index));
                        Some(param)
                    }
                    Err(e) => {
                        tracing::warn!("Skipping parameter {index} of {base}: {e}");
                        None
                    }
                }
            })
            .collect()
    }

    /// Follows a chain of local `$ref`s to the object it ends at
    fn follow_refs<'a>(&'a self, mut value: &'a JsonValue) -> Option<&'a JsonValue> {
        for _ in 0..MAX_REF_DEPTH {
            match value.get("$ref").and_then(JsonValue::as_str) {
                Some(reference) => value = self.resolve_ref(reference)?,
                None => return Some(value),
            }
        }
        tracing::warn!("Parameter reference chain longer than {MAX_REF_DEPTH} links");
        None
    }

    fn resolve_ref(&self, reference: &str) -> Option<&JsonValue> {
        let resolved = reference
            .strip_prefix('#')
            .and_then(|pointer| self.json.pointer(pointer));
        if resolved.is_none() {
            tracing::warn!("Unresolvable parameter reference: {reference}");
        }
        resolved
    }

    /// Parse a single parameter object
    fn parse_parameter(&self, param: &JsonValue) -> Result<Parameter> {
        let name = param
            .get("name")
            .and_then(JsonValue::as_str)
            .ok_or_else(|| Error::openapi("Parameter missing name"))?
            .to_string();

        let location: ParameterLocation = param
            .get("in")
            .and_then(JsonValue::as_str)
            .ok_or_else(|| Error::openapi(format!("Parameter '{name}' missing location")))?
            .parse()?;

        let required = param
            .get("required")
            .and_then(JsonValue::as_bool)
            .unwrap_or(false);
        let description = param
            .get("description")
            .and_then(JsonValue::as_str)
            .map(String::from);

        Ok(Parameter {
            name,
            location,
            required,
            description,
            schema: self.parse_schema(param),
            node_path: None,
        })
    }

    /// OpenAPI 3 (and Swagger 2 body) parameters carry a `schema`; Swagger 2
    /// non-body parameters describe their type inline.
    fn parse_schema(&self, param: &JsonValue) -> Option<Schema> {
        let source = match param.get("schema") {
            Some(schema) => schema,
            None if param.get("type").is_some() => param,
            None => return None,
        };
        serde_json::from_value(source.clone())
            .map_err(|e| tracing::debug!("Ignoring unsupported parameter schema: {e}"))
            .ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::openapi::SpecVersion;
    use crate::model::ParameterParent;
    use serde_json::json;

    fn petstore_v3() -> JsonValue {
        json!({
            "openapi": "3.0.3",
            "info": { "title": "Petstore", "version": "1.0.0" },
            "paths": {
                "/pets/{petId}": {
                    "parameters": [
                        { "$ref": "#/components/parameters/PetId" }
                    ],
                    "get": {
                        "operationId": "getPet",
                        "parameters": [
                            { "name": "verbose", "in": "query", "schema": { "type": "boolean" } }
                        ]
                    },
                    "delete": {
                        "operationId": "deletePet"
                    }
                },
                "/pets": {
                    "get": { "operationId": "listPets" }
                }
            },
            "components": {
                "parameters": {
                    "PetId": {
                        "name": "petId",
                        "in": "path",
                        "required": true,
                        "description": "ID of pet",
                        "schema": { "type": "integer", "format": "int64" }
                    }
                }
            }
        })
    }

    #[test]
    fn test_parse_openapi3_document() {
        let doc = OpenApiParser::new(petstore_v3()).parse().unwrap();

        assert_eq!(doc.version, "3.0.3");
        assert_eq!(doc.title.as_deref(), Some("Petstore"));
        assert_eq!(doc.spec_version(), SpecVersion::OpenApi3);
        assert_eq!(doc.paths.len(), 2);

        let item = doc.path_item("/pets/{petId}").unwrap();
        let methods: Vec<HttpMethod> = item.operations().map(|op| op.method()).collect();
        assert_eq!(methods, vec![HttpMethod::Get, HttpMethod::Delete]);
    }

    #[test]
    fn test_ref_parameters_resolved_with_entry_path() {
        let doc = OpenApiParser::new(petstore_v3()).parse().unwrap();
        let item = doc.path_item("/pets/{petId}").unwrap();

        let pet_id = item.parameter(ParameterLocation::Path, "petId").unwrap();
        assert!(pet_id.required);
        assert_eq!(pet_id.description.as_deref(), Some("ID of pet"));
        assert_eq!(
            pet_id.schema.as_ref().unwrap().format.as_deref(),
            Some("int64")
        );
        assert_eq!(
            pet_id.node_path.as_ref().unwrap().to_string(),
            "/paths[/pets/{petId}]/parameters[0]"
        );
    }

    #[test]
    fn test_chained_refs_are_followed() {
        let mut json = petstore_v3();
        json["components"]["parameters"]["Alias"] =
            json!({ "$ref": "#/components/parameters/PetId" });
        json["paths"]["/pets/{petId}"]["parameters"][0] =
            json!({ "$ref": "#/components/parameters/Alias" });

        let doc = OpenApiParser::new(json).parse().unwrap();
        let item = doc.path_item("/pets/{petId}").unwrap();
        let pet_id = item.parameter(ParameterLocation::Path, "petId").unwrap();
        assert!(pet_id.required);
        assert_eq!(
            pet_id.node_path.as_ref().unwrap().to_string(),
            "/paths[/pets/{petId}]/parameters[0]"
        );
    }

    #[test]
    fn test_cyclic_refs_are_skipped() {
        let mut json = petstore_v3();
        json["components"]["parameters"]["Loop"] =
            json!({ "$ref": "#/components/parameters/Loop" });
        json["paths"]["/pets/{petId}"]["parameters"] = json!([
            { "$ref": "#/components/parameters/Loop" },
            { "$ref": "#/components/parameters/PetId" }
        ]);

        let doc = OpenApiParser::new(json).parse().unwrap();
        let item = doc.path_item("/pets/{petId}").unwrap();
        assert_eq!(item.parameters().len(), 1);
        assert_eq!(
            item.parameters()[0].node_path.as_ref().unwrap().to_string(),
            "/paths[/pets/{petId}]/parameters[1]"
        );
    }

    #[test]
    fn test_operation_parameters_have_operation_paths() {
        let doc = OpenApiParser::new(petstore_v3()).parse().unwrap();
        let op = doc
            .path_item("/pets/{petId}")
            .unwrap()
            .operation(HttpMethod::Get)
            .unwrap();

        let verbose = op.parameter(ParameterLocation::Query, "verbose").unwrap();
        assert_eq!(
            verbose.node_path.as_ref().unwrap().to_string(),
            "/paths[/pets/{petId}]/get/parameters[0]"
        );
    }

    #[test]
    fn test_parse_swagger2_inline_types() {
        let doc = OpenApiParser::new(json!({
            "swagger": "2.0",
            "info": { "title": "Legacy", "version": "1" },
            "paths": {
                "/files/{name}": {
                    "put": {
                        "parameters": [
                            { "name": "name", "in": "path", "required": true, "type": "string" },
                            {
                                "name": "tags",
                                "in": "query",
                                "type": "array",
                                "items": { "type": "string" }
                            },
                            {
                                "name": "body",
                                "in": "body",
                                "schema": { "$ref": "#/definitions/File" }
                            },
                            { "name": "upload", "in": "formData", "type": "file" }
                        ]
                    }
                }
            }
        }))
        .parse()
        .unwrap();

        assert_eq!(doc.spec_version(), SpecVersion::Swagger2);
        let op = doc
            .path_item("/files/{name}")
            .unwrap()
            .operation(HttpMethod::Put)
            .unwrap();
        assert_eq!(op.parameters().len(), 4);

        let tags = op.parameter(ParameterLocation::Query, "tags").unwrap();
        let schema = tags.schema.as_ref().unwrap();
        assert_eq!(schema.schema_type.as_deref(), Some("array"));
        assert_eq!(
            schema.items.as_ref().unwrap().schema_type.as_deref(),
            Some("string")
        );

        let body = op.parameter(ParameterLocation::Body, "body").unwrap();
        assert_eq!(
            body.schema.as_ref().unwrap().reference.as_deref(),
            Some("#/definitions/File")
        );
    }

    #[test]
    fn test_invalid_parameters_skipped_but_indices_kept() {
        let doc = OpenApiParser::new(json!({
            "openapi": "3.1.0",
            "paths": {
                "/a/{x}": {
                    "parameters": [
                        { "in": "path" },
                        { "$ref": "#/components/parameters/Missing" },
                        { "name": "x", "in": "matrix" },
                        { "name": "x", "in": "path", "required": true }
                    ]
                }
            }
        }))
        .parse()
        .unwrap();

        let item = doc.path_item("/a/{x}").unwrap();
        assert_eq!(item.parameters().len(), 1);
        assert_eq!(
            item.parameters()[0].node_path.as_ref().unwrap().to_string(),
            "/paths[/a/{x}]/parameters[3]"
        );
        assert!(doc.title.is_none());
    }

    #[test]
    fn test_missing_version_or_paths() {
        let missing_version = OpenApiParser::new(json!({ "paths": {} })).parse();
        assert!(matches!(missing_version, Err(Error::OpenApi(msg)) if msg.contains("version")));

        let missing_paths = OpenApiParser::new(json!({ "openapi": "3.0.0" })).parse();
        assert!(matches!(missing_paths, Err(Error::OpenApi(msg)) if msg.contains("paths")));
    }

    #[test]
    fn test_parse_document_text_formats() {
        let json_doc = parse_document_text(r#"{"openapi":"3.0.0"}"#, "spec.json", None).unwrap();
        assert_eq!(json_doc["openapi"], "3.0.0");

        let yaml_doc = parse_document_text("openapi: 3.0.0\n", "spec.yml", None).unwrap();
        assert_eq!(yaml_doc["openapi"], "3.0.0");

        let by_type =
            parse_document_text("openapi: 3.0.0\n", "/spec", Some("application/x-yaml")).unwrap();
        assert_eq!(by_type["openapi"], "3.0.0");

        let sniffed = parse_document_text("openapi: 3.0.0\npaths: {}\n", "spec", None).unwrap();
        assert!(sniffed["paths"].is_object());

        assert!(matches!(
            parse_document_text("{ not json", "spec.json", None),
            Err(Error::Json(_))
        ));
    }
}

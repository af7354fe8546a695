use crate::error::CatalogError;
use crate::types::LocationCatalog;

/// Decode the backend's location response into a [`LocationCatalog`].
///
/// The response wraps the directory in a `data` envelope:
///
/// ```text
/// { "data": { "<country>": { "states": { "<state>": { "cities": [..] } } } } }
/// ```
///
/// Key order of the document becomes catalog order.
pub fn parse_catalog(input: &str) -> Result<LocationCatalog, CatalogError> {
    if input.trim().is_empty() {
        return Err(CatalogError::Decode("empty input".to_string()));
    }

    // Go through Value first so envelope problems get their own messages
    let value: serde_json::Value =
        serde_json::from_str(input).map_err(|e| CatalogError::Decode(e.to_string()))?;

    let Some(root) = value.as_object() else {
        return Err(CatalogError::Decode(
            "response root must be an object".to_string(),
        ));
    };

    let Some(data) = root.get("data") else {
        return Err(CatalogError::Decode(
            "response is missing the 'data' field".to_string(),
        ));
    };

    if !data.is_object() {
        return Err(CatalogError::Decode(
            "'data' must map country names to countries".to_string(),
        ));
    }

    serde_json::from_value(data.clone()).map_err(|e| CatalogError::Decode(e.to_string()))
}

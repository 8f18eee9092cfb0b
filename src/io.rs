use std::io::Write;
use std::path::Path;

use serde::{Serialize, de::DeserializeOwned};

use crate::error::Result;

/// Serializes an object to a pretty-printed JSON file.
pub fn object_to_json<T: Serialize>(output_path: impl AsRef<Path>, object: &T) -> Result<()> {
    let j = serde_json::to_string_pretty(object)?;
    let mut file = std::fs::File::create(output_path)?;
    file.write_all(j.as_bytes())?;
    Ok(())
}

/// Deserializes an object from a JSON file.
pub fn object_from_json<T: DeserializeOwned>(file_path: impl AsRef<Path>) -> Result<T> {
    let contents = std::fs::read_to_string(file_path)?;
    Ok(serde_json::from_str(&contents)?)
}

/// Reads an optional JSON document.
///
/// A path that does not exist or lacks a `.json` extension yields an empty map.
/// Read or syntax errors on an existing `.json` file are still returned.
pub fn load_json(path: impl AsRef<Path>) -> Result<serde_json::Map<String, serde_json::Value>> {
    let path = path.as_ref();
    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    if !path.exists() || !is_json {
        log::debug!(
            "File at path {} did not exist or was not a json file. Returning empty map",
            path.display()
        );
        return Ok(serde_json::Map::new());
    }
    object_from_json(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_json_missing_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let map = load_json(dir.path().join("anchors.json")).unwrap();
        assert!(map.is_empty());
    }

    #[test]
    fn load_json_wrong_extension_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mesh.obj");
        std::fs::write(&path, "{\"a\": 1}").unwrap();
        assert!(load_json(&path).unwrap().is_empty());
    }

    #[test]
    fn json_round_trip_through_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mesh_info.json");
        let value = serde_json::json!({"vertices": 12, "faces": [1, 2, 3]});
        object_to_json(&path, &value).unwrap();
        let map = load_json(&path).unwrap();
        assert_eq!(map["vertices"], 12);
    }

    #[test]
    fn load_json_non_object_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("anchors.json");
        std::fs::write(&path, "[1, 2]").unwrap();
        assert!(load_json(&path).is_err());
    }
}

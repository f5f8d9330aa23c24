use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::Deserialize;
use serde_json::Value;

use super::{Product, PurchaseRecord, Seller};
use crate::error::{AnalysisError, Result};

/// Top-level collections that must be present as arrays
const REQUIRED_COLLECTIONS: [&str; 4] = ["sellers", "products", "purchase_records", "customers"];

/// Full input dataset
#[derive(Debug, Clone, Deserialize)]
pub struct Dataset {
    pub sellers: Vec<Seller>,
    pub products: Vec<Product>,
    pub purchase_records: Vec<PurchaseRecord>,
    /// Not used by the computation, only required to be present
    pub customers: Vec<Value>,
}

impl Dataset {
    /// Build a dataset from an already parsed JSON document
    ///
    /// The shape is checked before any typed deserialization: the document
    /// must be an object and each of the four collections must be an array.
    /// Shape violations are reported as [`AnalysisError::InvalidInput`],
    /// malformed entries inside a collection as [`AnalysisError::Json`].
    pub fn from_json_value(value: Value) -> Result<Self> {
        let object = match &value {
            Value::Null => {
                return Err(AnalysisError::InvalidInput("dataset is missing".into()));
            }
            Value::Object(object) => object,
            _ => {
                return Err(AnalysisError::InvalidInput(
                    "dataset must be a JSON object".into(),
                ));
            }
        };

        for field in REQUIRED_COLLECTIONS {
            if !object.get(field).is_some_and(Value::is_array) {
                return Err(AnalysisError::InvalidInput(format!(
                    "'{}' must be an array",
                    field
                )));
            }
        }

        Ok(serde_json::from_value(value)?)
    }

    /// Parse a dataset from a JSON reader
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let value: Value = serde_json::from_reader(reader)?;
        Self::from_json_value(value)
    }
}

/// Load a dataset from a JSON file on disk
pub fn load_dataset(path: impl AsRef<Path>) -> Result<Dataset> {
    let file = File::open(path)?;
    Dataset::from_reader(BufReader::new(file))
}

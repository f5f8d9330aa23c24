use serde::Deserialize;

/// Seller card from the input dataset
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Seller {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
}

impl Seller {
    /// Display name used in reports: "first last"
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

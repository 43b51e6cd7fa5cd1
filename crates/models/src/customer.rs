use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: i32,
    pub name: String,
    pub address: String,
}

impl Customer {
    pub fn new(id: i32, name: &str, address: &str) -> Self {
        Self { id, name: name.to_string(), address: address.to_string() }
    }
}

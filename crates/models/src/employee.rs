use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: i32,
    pub name: String,
    pub specialty: String,
}

impl Employee {
    pub fn new(id: i32, name: &str, specialty: &str) -> Self {
        Self { id, name: name.to_string(), specialty: specialty.to_string() }
    }
}

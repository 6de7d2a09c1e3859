//! Accessory Option Model

use serde::{Deserialize, Serialize};

/// Accessory offered for a product
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessoryOption {
    pub accessory_id: String,
    pub name: String,
    /// Price in whole rubles, added on top of the base price when selected
    pub price: i64,
    #[serde(default = "default_true")]
    pub is_available: bool,
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessory_deserialize() {
        let json = r#"{"accessory_id":"a1","name":"Лебёдка","price":3500}"#;
        let acc: AccessoryOption = serde_json::from_str(json).unwrap();
        assert_eq!(acc.accessory_id, "a1");
        assert_eq!(acc.price, 3500);
        assert!(acc.is_available);
    }

    #[test]
    fn test_accessory_unavailable() {
        let json = r#"{"accessory_id":"a2","name":"Опора","price":1200,"is_available":false}"#;
        let acc: AccessoryOption = serde_json::from_str(json).unwrap();
        assert!(!acc.is_available);
    }
}

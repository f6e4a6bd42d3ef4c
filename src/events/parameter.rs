use serde::{Deserialize, Serialize};
use serde_json::Value;

/// An immutable named value carried by an event.
///
/// The value is opaque to the bus; producers and consumers agree on the
/// shape by convention per channel. A parameter may carry no value at all.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventParameter {
    name: String,
    value: Option<Value>,
}

impl EventParameter {
    /// Creates a parameter carrying a value.
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            name: name.into(),
            value: Some(value.into()),
        }
    }

    /// Creates a parameter with no value.
    #[must_use]
    pub fn absent(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: None,
        }
    }

    /// The name of this parameter.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The value of this parameter, if present.
    #[must_use]
    pub fn value(&self) -> Option<&Value> {
        self.value.as_ref()
    }

    /// The value as a string slice, if present and a string.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        self.value.as_ref().and_then(Value::as_str)
    }

    /// The value as an unsigned integer, if present and numeric.
    #[must_use]
    pub fn as_u64(&self) -> Option<u64> {
        self.value.as_ref().and_then(Value::as_u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parameter_with_value() {
        let param = EventParameter::new("user", "alice");
        assert_eq!(param.name(), "user");
        assert_eq!(param.as_str(), Some("alice"));
    }

    #[test]
    fn test_parameter_absent_value() {
        let param = EventParameter::absent("placeholder");
        assert_eq!(param.name(), "placeholder");
        assert_eq!(param.value(), None);
        assert_eq!(param.as_str(), None);
    }

    #[test]
    fn test_numeric_parameter() {
        let param = EventParameter::new("attempts", 3);
        assert_eq!(param.as_u64(), Some(3));
        assert_eq!(param.as_str(), None);
    }

    #[test]
    fn test_clone_is_equal() {
        let param = EventParameter::new("role", "zookeeper");
        assert_eq!(param, param.clone());
    }
}

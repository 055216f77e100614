//! Interpolation parameters.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Named values substituted into translation text.
///
/// `count`, when numeric, also selects the plural form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Params(Map<String, Value>);

impl Params {
    /// Create an empty parameter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a parameter, builder style.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(name, value);
        self
    }

    /// Add or replace a parameter.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(name.into(), value.into());
    }

    /// Look up a parameter.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    /// The `count` parameter, if present and numeric.
    pub fn count(&self) -> Option<f64> {
        self.0.get("count").and_then(Value::as_f64)
    }

    /// Render a parameter for substitution.
    ///
    /// Returns `None` for missing and `null` values. Whole floats drop
    /// their fraction, so `2.0` renders as `2`.
    pub fn render(&self, name: &str) -> Option<String> {
        match self.0.get(name)? {
            Value::Null => None,
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => match n.as_f64() {
                Some(f) if n.is_f64() => Some(f.to_string()),
                _ => Some(n.to_string()),
            },
            other => Some(other.to_string()),
        }
    }

    /// Number of parameters.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no parameters are set.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Map<String, Value>> for Params {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Params {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Self::new();
        for (name, value) in iter {
            params.insert(name, value);
        }
        params
    }
}

/// Build [`Params`] from `name = value` pairs.
#[macro_export]
macro_rules! params {
    () => {
        $crate::Params::new()
    };
    ($($name:ident = $value:expr),+ $(,)?) => {
        $crate::Params::new()$(.with(stringify!($name), $value))+
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_count_must_be_numeric() {
        assert_eq!(Params::new().with("count", 3).count(), Some(3.0));
        assert_eq!(Params::new().with("count", 2.5).count(), Some(2.5));
        assert_eq!(Params::new().with("count", "3").count(), None);
        assert_eq!(Params::new().count(), None);
    }

    #[test]
    fn test_render() {
        let params = Params::new()
            .with("name", "Jean")
            .with("n", 0)
            .with("ok", false)
            .with("none", Value::Null);

        assert_eq!(params.render("name").as_deref(), Some("Jean"));
        assert_eq!(params.render("n").as_deref(), Some("0"));
        assert_eq!(params.render("ok").as_deref(), Some("false"));
        assert_eq!(params.render("none"), None);
        assert_eq!(params.render("missing"), None);
    }

    #[test]
    fn test_render_floats() {
        let params = Params::new()
            .with("whole", 2.0)
            .with("half", 2.5)
            .with("negative", -3.0)
            .with("big", 1e15);

        assert_eq!(params.render("whole").as_deref(), Some("2"));
        assert_eq!(params.render("half").as_deref(), Some("2.5"));
        assert_eq!(params.render("negative").as_deref(), Some("-3"));
        assert_eq!(params.render("big").as_deref(), Some("1000000000000000"));
    }

    #[test]
    fn test_macro_and_collect() {
        let from_macro = crate::params!(name = "Ana", count = 2);
        let collected: Params = [("name", json!("Ana")), ("count", json!(2))]
            .into_iter()
            .collect();
        assert_eq!(from_macro, collected);
        assert_eq!(from_macro.len(), 2);
        assert!(crate::params!().is_empty());
    }
}

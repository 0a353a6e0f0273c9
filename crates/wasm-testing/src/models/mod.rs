pub mod context;
pub mod error;
pub mod suite;

use address::Address;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use self::{
    context::TestContext,
    error::{DecodingError, EncodingError, ParamError},
};
use crate::{
    codec,
    param::{parse_expected, parse_params, Param},
    utils::json::{
        as_array, as_object, as_str, field_path, optional_bool, optional_string, required,
        required_string,
    },
};

/// The environment a test case is invoked in.
///
/// Serializes as `{"witness":[...]}`. An empty witness list is written as `[]`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Value")]
pub struct TestEnv {
    /// Addresses that signed the invocation, in order.
    pub witness: Vec<Address>,
}

/// A single contract invocation and its expected outcome.
///
/// Fields are declared in their serialized order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Value")]
pub struct TestCase {
    pub env: TestEnv,
    /// Whether the runner must pass the [`TestContext`] to the contract.
    #[serde(rename = "needcontext")]
    pub need_context: bool,
    pub method: String,
    /// Parameters in `type:value` notation, e.g. `int:100, bool:true`.
    pub param: String,
    /// The expected result in `type:value` notation.
    #[serde(rename = "expected")]
    pub expect: String,
    /// The expected notification, empty if none.
    pub notify: String,
}

impl TestEnv {
    pub const fn new(witness: Vec<Address>) -> Self {
        Self { witness }
    }

    pub fn to_json(&self) -> Result<String, EncodingError> {
        codec::encode(self)
    }

    pub fn from_json(text: &str) -> Result<Self, DecodingError> {
        codec::decode(text)
    }

    /// Decodes the environment held at `path` in the enclosing document.
    pub(crate) fn from_value(value: &Value, path: &str) -> Result<Self, DecodingError> {
        let object = as_object(value, path)?;
        let witness_path = field_path(path, "witness");
        let witness = as_array(required(object, path, "witness")?, &witness_path)?
            .iter()
            .enumerate()
            .map(|(i, value)| {
                let field = format!("{witness_path}[{i}]");
                let text = as_str(value, &field)?;
                text.parse::<Address>()
                    .map_err(|source| DecodingError::InvalidAddress { field, source })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { witness })
    }
}

impl TryFrom<Value> for TestEnv {
    type Error = DecodingError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Self::from_value(&value, "")
    }
}

impl TestCase {
    pub fn to_json(&self) -> Result<String, EncodingError> {
        codec::encode(self)
    }

    pub fn from_json(text: &str) -> Result<Self, DecodingError> {
        codec::decode(text)
    }

    /// Parses [`TestCase::param`] into typed parameters.
    pub fn params(&self, ctx: &TestContext) -> Result<Vec<Param>, ParamError> {
        parse_params(&self.param, ctx)
    }

    /// Parses [`TestCase::expect`]. Returns `None` when no result is expected.
    pub fn expected_result(&self, ctx: &TestContext) -> Result<Option<Param>, ParamError> {
        parse_expected(&self.expect, ctx)
    }
}

impl TryFrom<Value> for TestCase {
    type Error = DecodingError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        let object = as_object(&value, "")?;
        Ok(Self {
            env: TestEnv::from_value(required(object, "", "env")?, "env")?,
            need_context: optional_bool(object, "", "needcontext")?,
            method: required_string(object, "", "method")?,
            param: required_string(object, "", "param")?,
            expect: required_string(object, "", "expected")?,
            notify: optional_string(object, "", "notify")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use address::ADDRESS_EMPTY;

    const EMPTY: &str = "AFmseVrdL9f9oyCzZefL9tG6UbvhPbdYzM";

    #[test]
    fn test_env() {
        // Given
        let env = TestEnv::new(vec![ADDRESS_EMPTY]);

        // When
        let encoded = env.to_json().unwrap();

        // Then
        assert_eq!(encoded, format!(r#"{{"witness":["{EMPTY}"]}}"#));
        assert_eq!(TestEnv::from_json(&encoded).unwrap(), env);
    }

    #[test]
    fn test_case() {
        // Given
        let case = TestCase {
            env: TestEnv::new(vec![ADDRESS_EMPTY]),
            method: "func1".to_string(),
            param: "int:100, bool:true".to_string(),
            expect: "int:10".to_string(),
            ..Default::default()
        };

        // When
        let encoded = case.to_json().unwrap();

        // Then
        assert_eq!(
            encoded,
            format!(
                r#"{{"env":{{"witness":["{EMPTY}"]}},"needcontext":false,"method":"func1","param":"int:100, bool:true","expected":"int:10","notify":""}}"#
            )
        );
        assert_eq!(TestCase::from_json(&encoded).unwrap(), case);
    }

    #[test]
    fn test_empty_witness() {
        let env = TestEnv::default();
        let encoded = env.to_json().unwrap();
        assert_eq!(encoded, r#"{"witness":[]}"#);
        assert!(TestEnv::from_json(&encoded).unwrap().witness.is_empty());
    }

    #[test]
    fn test_defaults_on_decode() {
        // Given
        let text = r#"{"env":{"witness":[]},"method":"m","param":"","expected":""}"#;

        // When
        let case = TestCase::from_json(text).unwrap();

        // Then
        assert!(!case.need_context);
        assert_eq!(case.notify, "");
        assert_eq!(case.method, "m");
    }

    #[test]
    fn test_wrong_witness_type() {
        let err = TestEnv::from_json(r#"{"witness":5}"#).unwrap_err();
        assert!(matches!(
            err,
            DecodingError::InvalidType { ref field, expected: "array", found: "number" } if field == "witness"
        ));
    }

    #[test]
    fn test_witness_elements_must_be_strings() {
        let err = TestEnv::from_json(r#"{"witness":[1]}"#).unwrap_err();
        assert!(matches!(
            err,
            DecodingError::InvalidType { ref field, expected: "string", found: "number" } if field == "witness[0]"
        ));

        let text = format!(r#"{{"witness":["{EMPTY}",null]}}"#);
        let err = TestEnv::from_json(&text).unwrap_err();
        assert!(matches!(
            err,
            DecodingError::InvalidType { ref field, expected: "string", found: "null" } if field == "witness[1]"
        ));
    }

    #[test]
    fn test_nested_field_names() {
        let text = r#"{"env":{"witness":["AFmseVrdL9f9oyCzZefL9tG6UbvhPbdYzX"]},"method":"m","param":"","expected":""}"#;
        let err = TestCase::from_json(text).unwrap_err();
        assert!(matches!(
            err,
            DecodingError::InvalidAddress { ref field, .. } if field == "env.witness[0]"
        ));

        let text = r#"{"env":{},"method":"m","param":"","expected":""}"#;
        let err = TestCase::from_json(text).unwrap_err();
        assert_eq!(err.to_string(), "missing field `env.witness`");
    }

    #[test]
    fn test_explicit_null_rejected() {
        let text = r#"{"env":{"witness":[]},"needcontext":null,"method":"m","param":"","expected":""}"#;
        assert!(matches!(
            TestCase::from_json(text),
            Err(DecodingError::InvalidType { found: "null", .. })
        ));

        let text = r#"{"env":{"witness":[]},"method":"m","param":"","expected":"","notify":null}"#;
        assert!(matches!(
            TestCase::from_json(text),
            Err(DecodingError::InvalidType { found: "null", .. })
        ));
    }

    #[test]
    fn test_deserialize_nested() {
        // Given
        let text = format!(
            r#"[{{"env":{{"witness":["{EMPTY}"]}},"needcontext":true,"method":"get","param":"","expected":"int:1","notify":"event"}}]"#
        );

        // When
        let cases: Vec<TestCase> = serde_json::from_str(&text).unwrap();

        // Then
        assert_eq!(cases.len(), 1);
        assert!(cases[0].need_context);
        assert_eq!(cases[0].notify, "event");
        assert_eq!(cases[0].env.witness, vec![ADDRESS_EMPTY]);
    }

    #[test]
    fn test_deserialize_nested_error() {
        let text = r#"[{"env":{"witness":[]},"method":1,"param":"","expected":""}]"#;
        let err = serde_json::from_str::<Vec<TestCase>>(text).unwrap_err();
        assert!(err
            .to_string()
            .contains("invalid type for `method`: expected string, found number"));
    }
}

//! Field picking over heterogeneous provider responses.
//!
//! Providers name the same field differently. Each field is read from a
//! priority list of JSON pointers; the first present, non-null scalar wins.
//! Missing fields yield an empty string rather than an error.

use serde_json::Value;

/// Scalar value as text. Objects, arrays and null have none.
pub(crate) fn text(v: &Value) -> Option<String> {
    match v {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// First pointer in `pointers` that resolves to a scalar.
pub(crate) fn pick_opt(data: &Value, pointers: &[&str]) -> Option<String> {
    pointers
        .iter()
        .find_map(|p| data.pointer(p).and_then(text))
}

/// Like [`pick_opt`], defaulting to an empty string.
pub(crate) fn pick(data: &Value, pointers: &[&str]) -> String {
    pick_opt(data, pointers).unwrap_or_default()
}

/// Loose truthiness, for flags like ViaCEP's `"erro": true` / `"erro": "true"`.
pub(crate) fn truthy(v: Option<&Value>) -> bool {
    match v {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0),
        Some(Value::Array(a)) => !a.is_empty(),
        Some(Value::Object(o)) => !o.is_empty(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn specific_name_wins_over_fallback() {
        let data = json!({"nome": "ACME LTDA", "razao_social": "OTHER"});
        assert_eq!(pick(&data, &["/nome", "/razao_social"]), "ACME LTDA");
    }

    #[test]
    fn falls_back_when_missing_or_null() {
        let data = json!({"nome": null, "razao_social": "ACME LTDA"});
        assert_eq!(pick(&data, &["/nome", "/razao_social"]), "ACME LTDA");
    }

    #[test]
    fn nested_pointer() {
        let data = json!({"estabelecimento": {"cidade": {"nome": "São Paulo"}}});
        assert_eq!(pick(&data, &["/municipio", "/estabelecimento/cidade/nome"]), "São Paulo");
    }

    #[test]
    fn numbers_are_stringified() {
        let data = json!({"ddd": 11});
        assert_eq!(pick(&data, &["/ddd"]), "11");
    }

    #[test]
    fn absent_is_empty() {
        assert_eq!(pick(&json!({}), &["/x"]), "");
        assert!(pick_opt(&json!({"x": {"y": 1}}), &["/x"]).is_none());
    }

    #[test]
    fn truthiness() {
        assert!(truthy(Some(&json!(true))));
        assert!(truthy(Some(&json!("true"))));
        assert!(!truthy(Some(&json!(false))));
        assert!(!truthy(None));
        assert!(!truthy(Some(&Value::Null)));
    }
}

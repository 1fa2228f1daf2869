use crate::error::{CarParkError, Result};
use crate::graphql::{CarParkSchema, GraphQLBody, execute};

/// Parse `--variables`, which must be a JSON object when given.
pub fn parse_variables(variables: Option<String>) -> Result<Option<serde_json::Value>> {
    let Some(raw) = variables else {
        return Ok(None);
    };
    let value: serde_json::Value = serde_json::from_str(&raw)?;
    if !value.is_object() {
        return Err(CarParkError::Variables(format!(
            "expected a JSON object, got {}",
            raw.trim()
        )));
    }
    Ok(Some(value))
}

/// Run one document on a throwaway runtime and pretty-print the reply.
/// Engine errors are printed only when `expose_errors` is set, as over HTTP.
pub fn run_and_print(
    schema: &CarParkSchema,
    document: String,
    variables: Option<String>,
    expose_errors: bool,
) -> anyhow::Result<()> {
    let mut body = GraphQLBody::new(document);
    if let Some(vars) = parse_variables(variables)? {
        body = body.with_variables(vars);
    }

    let reply = tokio::runtime::Runtime::new()?.block_on(execute(schema, body, expose_errors));
    println!("{}", serde_json::to_string_pretty(&reply)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_variables_absent() {
        assert!(parse_variables(None).unwrap().is_none());
    }

    #[test]
    fn test_parse_variables_object() {
        let vars = parse_variables(Some(r#"{"name": "audi a4"}"#.to_string()))
            .unwrap()
            .unwrap();
        assert_eq!(vars["name"], "audi a4");
    }

    #[test]
    fn test_parse_variables_rejects_non_object() {
        let result = parse_variables(Some("[1, 2]".to_string()));
        assert!(matches!(result, Err(CarParkError::Variables(_))));
    }

    #[test]
    fn test_parse_variables_rejects_bad_json() {
        let result = parse_variables(Some("{name:".to_string()));
        assert!(matches!(result, Err(CarParkError::Json(_))));
    }
}

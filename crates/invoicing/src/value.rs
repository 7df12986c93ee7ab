//! Building invoices from untyped JSON input.
//!
//! Typed callers use [`Invoice::new`], where the integer requirement on the
//! amount is enforced by the compiler. JSON arrives without that guarantee,
//! so the component type check happens here, before any amount rule.

use chrono::{Local, NaiveDate};
use serde_json::{Map, Value};

use invoicestats_core::{Amount, DomainError, DomainResult};

use crate::invoice::Invoice;

/// Name of a JSON value's type, as used in error messages.
pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

impl Invoice {
    /// Build an invoice from a JSON object:
    ///
    /// ```json
    /// { "supplier": "Company-A", "recipient": "Company-B", "pounds": 19, "pennies": 84 }
    /// ```
    ///
    /// An optional `"issue_date"` (`YYYY-MM-DD`) replaces today's date. Both
    /// amount components must be integral JSON numbers; `1000.5` or `"12"`
    /// fail before the sign, range and maximum checks run.
    pub fn from_value(value: &Value) -> DomainResult<Self> {
        let fields = value.as_object().ok_or_else(|| {
            DomainError::validation(format!(
                "invoice must be a JSON object, not {}",
                json_type_name(value)
            ))
        })?;

        let supplier = string_field(fields, "supplier")?;
        let recipient = string_field(fields, "recipient")?;

        let pounds = integer_field(fields, "pounds")?;
        let pennies = integer_field(fields, "pennies")?;

        let issue_date = match fields.get("issue_date") {
            None | Some(Value::Null) => Local::now().date_naive(),
            Some(Value::String(raw)) => NaiveDate::parse_from_str(raw, Invoice::DATE_FORMAT)
                .map_err(|e| DomainError::validation(format!("issue_date {raw:?}: {e}")))?,
            Some(other) => {
                return Err(DomainError::validation(format!(
                    "issue_date cannot be of type {}",
                    json_type_name(other)
                )));
            }
        };

        let amount = Amount::from_components(pounds, pennies)?;
        Ok(Invoice::with_amount(issue_date, supplier, recipient, amount))
    }
}

fn string_field<'a>(fields: &'a Map<String, Value>, key: &str) -> DomainResult<&'a str> {
    match fields.get(key) {
        Some(Value::String(s)) => Ok(s),
        Some(other) => Err(DomainError::validation(format!(
            "{key} cannot be of type {}; it must be a string",
            json_type_name(other)
        ))),
        None => Err(DomainError::validation(format!("missing field `{key}`"))),
    }
}

fn integer_field(fields: &Map<String, Value>, key: &str) -> DomainResult<i128> {
    let value = fields
        .get(key)
        .ok_or_else(|| DomainError::validation(format!("missing field `{key}`")))?;

    let found = match value {
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                return Ok(i128::from(i));
            }
            if let Some(u) = n.as_u64() {
                return Ok(i128::from(u));
            }
            "float"
        }
        other => json_type_name(other),
    };

    Err(DomainError::validation(format!(
        "{key} cannot be of type {found}; for a valid invoice, {key} must be an integer value"
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn validation_message(value: Value) -> String {
        match Invoice::from_value(&value) {
            Err(DomainError::Validation(msg)) => msg,
            other => panic!("Expected Validation error, got {other:?}"),
        }
    }

    fn invoice_json(pounds: Value, pennies: Value) -> Value {
        json!({
            "supplier": "Company-A",
            "recipient": "Company-B",
            "pounds": pounds,
            "pennies": pennies,
        })
    }

    #[test]
    fn builds_invoice_from_object() {
        let invoice = Invoice::from_value(&invoice_json(json!(19), json!(84))).unwrap();
        assert_eq!(invoice.supplier(), "Company-A");
        assert_eq!(invoice.recipient(), "Company-B");
        assert_eq!(invoice.total_pennies(), 1984);
        assert_eq!(invoice.issue_date(), Local::now().date_naive());
    }

    #[test]
    fn honours_explicit_issue_date() {
        let mut value = invoice_json(json!(1), json!(0));
        value["issue_date"] = json!("2023-12-31");
        let invoice = Invoice::from_value(&value).unwrap();
        assert_eq!(invoice.issue_date_display(), "2023-12-31");
    }

    #[test]
    fn rejects_malformed_issue_date() {
        let mut value = invoice_json(json!(1), json!(0));
        value["issue_date"] = json!("31/12/2023");
        assert!(validation_message(value).contains("issue_date"));
    }

    #[test]
    fn non_integer_pounds_fail_type_check() {
        let msg = validation_message(invoice_json(json!(1000.5), json!(12)));
        assert!(msg.contains("pounds cannot be of type float"), "{msg}");
    }

    #[test]
    fn exponent_notation_is_a_float() {
        let msg = validation_message(invoice_json(json!(2.1e10), json!(0)));
        assert!(msg.contains("float"), "{msg}");
    }

    #[test]
    fn string_pennies_fail_type_check() {
        let msg = validation_message(invoice_json(json!(10), json!("12")));
        assert!(msg.contains("pennies cannot be of type string"), "{msg}");
    }

    #[test]
    fn type_check_runs_before_negativity_check() {
        let msg = validation_message(invoice_json(json!(-1000.5), json!(12)));
        assert!(msg.contains("float"), "{msg}");
        assert!(!msg.contains("negative"), "{msg}");
    }

    #[test]
    fn amount_rules_apply_after_type_check() {
        assert!(validation_message(invoice_json(json!(1000), json!(-99))).contains("negative"));
        assert!(validation_message(invoice_json(json!(1000), json!(121))).contains("99"));
        assert!(
            validation_message(invoice_json(json!(21_000_000_000i64), json!(0)))
                .contains("£200,000,000.00")
        );
    }

    #[test]
    fn integers_beyond_i64_fail_maximum_check() {
        let msg = validation_message(invoice_json(json!(u64::MAX), json!(0)));
        assert!(msg.contains("£200,000,000.00"), "{msg}");
        assert!(msg.contains(&format!("£{}.00", u64::MAX)), "{msg}");
        assert!(!msg.contains(&i64::MAX.to_string()), "{msg}");
    }

    #[test]
    fn integers_beyond_i64_still_check_pennies_first() {
        let msg = validation_message(invoice_json(json!(u64::MAX), json!(-1)));
        assert!(msg.contains("negative"), "{msg}");
    }

    #[test]
    fn missing_or_mistyped_names_are_rejected() {
        assert!(
            validation_message(json!({ "recipient": "B", "pounds": 1, "pennies": 0 }))
                .contains("missing field `supplier`")
        );
        assert!(
            validation_message(json!({ "supplier": "A", "recipient": 7, "pounds": 1, "pennies": 0 }))
                .contains("recipient cannot be of type number")
        );
    }

    #[test]
    fn non_object_input_is_rejected() {
        assert!(validation_message(json!("invoice")).contains("not string"));
    }

    #[test]
    fn json_type_names() {
        assert_eq!(json_type_name(&json!(null)), "null");
        assert_eq!(json_type_name(&json!(true)), "bool");
        assert_eq!(json_type_name(&json!(1)), "number");
        assert_eq!(json_type_name(&json!("x")), "string");
        assert_eq!(json_type_name(&json!([])), "array");
        assert_eq!(json_type_name(&json!({})), "object");
    }
}

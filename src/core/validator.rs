use std::collections::BTreeMap;
use std::sync::OnceLock;

use regex::Regex;
use serde_json::Value;

use crate::core::catalog::Catalog;
use crate::domain::EnrollmentRequest;

/// Field name → user-facing message, for every rule the submission broke.
pub type FieldErrors = BTreeMap<String, String>;

pub const MSG_INVALID_PAYLOAD: &str = "Payload inválido";
pub const MSG_INVALID_NAME: &str = "Informe um nome válido (mín. 3 caracteres).";
pub const MSG_INVALID_EMAIL: &str = "E-mail inválido.";
pub const MSG_MISSING_COURSE: &str = "Selecione um curso.";
pub const MSG_COURSE_NOT_FOUND: &str = "Curso não encontrado.";

/// Permissive shape check: non-whitespace, one `@`, then a dot somewhere
/// after it. Deliberately not RFC validation.
fn email_regex() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"))
}

pub fn is_email(value: &str) -> bool {
    email_regex().is_match(value)
}

fn string_field<'a>(body: &'a Value, field: &str) -> Option<&'a str> {
    body.get(field).and_then(Value::as_str)
}

/// Checks an untrusted submission against the catalog.
///
/// All field rules are independent and all failures are reported
/// together; the only short-circuit is a body that is not a JSON object,
/// which yields the single `geral` entry. On success the typed request
/// is handed back, so downstream code never touches the raw value.
pub fn validate(body: &Value, catalog: &Catalog) -> Result<EnrollmentRequest, FieldErrors> {
    let mut errors = FieldErrors::new();

    if !body.is_object() {
        errors.insert("geral".to_string(), MSG_INVALID_PAYLOAD.to_string());
        return Err(errors);
    }

    let full_name = string_field(body, "nomeCompleto");
    if !full_name.is_some_and(|name| name.trim().chars().count() >= 3) {
        errors.insert("nomeCompleto".to_string(), MSG_INVALID_NAME.to_string());
    }

    let email = string_field(body, "email");
    if !email.is_some_and(is_email) {
        errors.insert("email".to_string(), MSG_INVALID_EMAIL.to_string());
    }

    match string_field(body, "cursoId") {
        None => {
            errors.insert("cursoId".to_string(), MSG_MISSING_COURSE.to_string());
        }
        Some(course_id) if !catalog.contains(course_id) => {
            errors.insert("cursoId".to_string(), MSG_COURSE_NOT_FOUND.to_string());
        }
        Some(_) => {}
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(EnrollmentRequest {
        full_name: full_name.unwrap_or_default().to_string(),
        email: email.unwrap_or_default().to_string(),
        course_id: string_field(body, "cursoId").unwrap_or_default().to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn catalog() -> Catalog {
        Catalog::builtin()
    }

    fn valid_body() -> Value {
        json!({
            "nomeCompleto": "Ana Silva",
            "email": "ana@ex.com",
            "cursoId": "vue-artesao"
        })
    }

    #[test]
    fn accepts_a_well_formed_submission() {
        let request = validate(&valid_body(), &catalog()).unwrap();
        assert_eq!(request.full_name, "Ana Silva");
        assert_eq!(request.email, "ana@ex.com");
        assert_eq!(request.course_id, "vue-artesao");
    }

    #[test]
    fn non_object_payload_short_circuits_to_geral() {
        for body in [json!(null), json!("texto"), json!([1, 2]), json!(42)] {
            let errors = validate(&body, &catalog()).unwrap_err();
            assert_eq!(errors.len(), 1, "body: {body}");
            assert_eq!(errors["geral"], MSG_INVALID_PAYLOAD);
        }
    }

    #[test]
    fn short_name_is_rejected_even_when_other_fields_are_fine() {
        let mut body = valid_body();
        body["nomeCompleto"] = json!("  ab  ");
        let errors = validate(&body, &catalog()).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors["nomeCompleto"], MSG_INVALID_NAME);
    }

    #[test]
    fn missing_or_non_string_name_is_rejected() {
        let mut body = valid_body();
        body.as_object_mut().unwrap().remove("nomeCompleto");
        assert!(validate(&body, &catalog()).unwrap_err().contains_key("nomeCompleto"));

        let mut body = valid_body();
        body["nomeCompleto"] = json!(123);
        assert!(validate(&body, &catalog()).unwrap_err().contains_key("nomeCompleto"));
    }

    #[test]
    fn name_with_exactly_three_chars_after_trim_passes() {
        let mut body = valid_body();
        body["nomeCompleto"] = json!("  Ana  ");
        assert!(validate(&body, &catalog()).is_ok());
    }

    #[test]
    fn bad_email_shapes_are_rejected() {
        for email in ["bad", "a@b", "a b@c.d", "@x.com", "a@.", "a@x.", "sem-arroba.com"] {
            let mut body = valid_body();
            body["email"] = json!(email);
            let errors = validate(&body, &catalog()).unwrap_err();
            assert_eq!(errors["email"], MSG_INVALID_EMAIL, "email: {email}");
        }
    }

    #[test]
    fn permissive_email_shapes_pass() {
        for email in ["ana@ex.com", "a@b.c", "a.b+c@sub.dominio.br"] {
            let mut body = valid_body();
            body["email"] = json!(email);
            assert!(validate(&body, &catalog()).is_ok(), "email: {email}");
        }
    }

    #[test]
    fn missing_course_and_unknown_course_report_different_messages() {
        let mut body = valid_body();
        body.as_object_mut().unwrap().remove("cursoId");
        let errors = validate(&body, &catalog()).unwrap_err();
        assert_eq!(errors["cursoId"], MSG_MISSING_COURSE);

        let mut body = valid_body();
        body["cursoId"] = json!(7);
        let errors = validate(&body, &catalog()).unwrap_err();
        assert_eq!(errors["cursoId"], MSG_MISSING_COURSE);

        let mut body = valid_body();
        body["cursoId"] = json!("curso-fantasma");
        let errors = validate(&body, &catalog()).unwrap_err();
        assert_eq!(errors["cursoId"], MSG_COURSE_NOT_FOUND);
    }

    #[test]
    fn all_failing_fields_are_reported_together() {
        let body = json!({
            "nomeCompleto": "ab",
            "email": "bad",
            "cursoId": "nope"
        });
        let errors = validate(&body, &catalog()).unwrap_err();
        assert_eq!(errors.len(), 3);
        assert!(errors.contains_key("nomeCompleto"));
        assert!(errors.contains_key("email"));
        assert!(errors.contains_key("cursoId"));
    }

    #[test]
    fn validation_is_pure() {
        let body = valid_body();
        let catalog = catalog();
        let first = validate(&body, &catalog);
        let second = validate(&body, &catalog);
        assert_eq!(first, second);
    }
}

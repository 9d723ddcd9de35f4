use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A contact record as exchanged with the `/contactos` endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "telefono")]
    pub phone: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(rename = "direccion", default)]
    pub address: Option<String>,
    #[serde(rename = "ciudad", default)]
    pub city: Option<String>,
    #[serde(rename = "pais", default)]
    pub country: Option<String>,
    #[serde(rename = "fecha_nacimiento", default)]
    pub birth_date: Option<String>,
}

impl Contact {
    /// Label shown for the contact in the list.
    pub fn summary(&self) -> String {
        format!("{} - {}", self.name, self.phone)
    }
}

#[derive(Debug, Serialize)]
pub struct ChatRequest<'a> {
    pub prompt: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct ServerInfo {
    #[serde(default)]
    pub message: String,
}

/// Text to display for an assistant payload.
///
/// A truthy `content` field wins; anything else shows the whole payload.
pub fn reply_text(payload: &Value) -> String {
    match payload.get("content") {
        Some(Value::String(s)) if !s.is_empty() => s.clone(),
        Some(Value::Bool(true)) => "true".to_string(),
        // Shown as JSON text, not in their JavaScript string form.
        Some(v @ (Value::Array(_) | Value::Object(_))) => v.to_string(),
        Some(Value::Number(n)) => match n.as_f64() {
            Some(f) if f != 0.0 && !f.is_nan() => number_text(n, f),
            _ => payload.to_string(),
        },
        _ => payload.to_string(),
    }
}

/// Integral values print without a fraction, so `1.0` shows as `1`.
fn number_text(n: &serde_json::Number, f: f64) -> String {
    if let Some(i) = n.as_i64() {
        i.to_string()
    } else if let Some(u) = n.as_u64() {
        u.to_string()
    } else if f.fract() == 0.0 && f.abs() < 1e15 {
        format!("{}", f as i64)
    } else {
        f.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn contact_without_optional_fields_deserializes() {
        let c: Contact = serde_json::from_value(json!({
            "id": 4,
            "nombre": "Ana",
            "telefono": "555-0101"
        }))
        .unwrap();
        assert_eq!(c.id, Some(4));
        assert_eq!(c.name, "Ana");
        assert!(c.email.is_none());
        assert!(c.birth_date.is_none());
        assert_eq!(c.summary(), "Ana - 555-0101");
    }

    #[test]
    fn new_contact_omits_id() {
        let c = Contact {
            id: None,
            name: "Luis".into(),
            phone: "1".into(),
            email: Some(String::new()),
            address: None,
            city: Some("Lima".into()),
            country: None,
            birth_date: None,
        };
        let v = serde_json::to_value(&c).unwrap();
        assert!(v.get("id").is_none());
        assert_eq!(v["nombre"], "Luis");
        assert_eq!(v["ciudad"], "Lima");
        assert_eq!(v["email"], "");
    }

    #[test]
    fn reply_prefers_content() {
        let payload = json!({"role": "assistant", "content": "Hola"});
        assert_eq!(reply_text(&payload), "Hola");
    }

    #[test]
    fn reply_falls_back_to_payload() {
        let payload = json!({"error": "Función 'x' no encontrada"});
        assert_eq!(reply_text(&payload), payload.to_string());

        let empty = json!({"content": "", "refusal": null});
        assert_eq!(reply_text(&empty), empty.to_string());

        let null = json!({"content": null});
        assert_eq!(reply_text(&null), null.to_string());
    }

    #[test]
    fn numeric_content_prints_like_a_browser() {
        assert_eq!(reply_text(&json!({"content": 1.0})), "1");
        assert_eq!(reply_text(&json!({"content": 42})), "42");
        assert_eq!(reply_text(&json!({"content": 2.5})), "2.5");

        let zero = json!({"content": 0});
        assert_eq!(reply_text(&zero), zero.to_string());
        assert_eq!(reply_text(&json!({"content": true})), "true");
    }
}

//! Support request for the iOS app.

use mappets_core::{is_valid_email, Payload, ValidationError};
use mappets_relay::Encoding;

use crate::policy::{required, ValidationPolicy};
use crate::surface::FieldSource;

pub const NAME_FIELD: &str = "nombre";
pub const EMAIL_FIELD: &str = "email";
pub const REASON_FIELD: &str = "motivo";
pub const IOS_FIELD: &str = "ios";
pub const APP_FIELD: &str = "app";
pub const DEVICE_FIELD: &str = "dispositivo";
pub const MESSAGE_FIELD: &str = "mensaje";

pub const SUBJECT: &str = "Consulta de soporte - Mappets (iOS)";
pub const DEFAULT_REASON: &str = "Consulta general";

const EMAIL_INVALID: &str = "Ingresa un correo valido para continuar.";
const MESSAGE_MISSING: &str = "Cuentanos brevemente tu consulta.";
const SUCCESS: &str = "Consulta enviada. Te responderemos por correo.";

#[derive(Debug, Clone, Copy, Default)]
pub struct SupportPolicy;

impl ValidationPolicy for SupportPolicy {
    fn name(&self) -> &'static str {
        "support"
    }

    fn encoding(&self) -> Encoding {
        Encoding::Json
    }

    fn validate(&self, fields: &dyn FieldSource) -> Result<Payload, ValidationError> {
        // Blank and malformed addresses share one message on this form.
        let email = fields.value(EMAIL_FIELD).trim().to_string();
        if !is_valid_email(&email) {
            return Err(ValidationError::new(EMAIL_FIELD, EMAIL_INVALID));
        }

        let message = required(fields, MESSAGE_FIELD, MESSAGE_MISSING)?;

        // Optional details are forwarded as typed.
        let reason = match fields.value(REASON_FIELD) {
            r if r.is_empty() => DEFAULT_REASON.to_string(),
            r => r,
        };

        Ok(Payload::new()
            .with("_subject", SUBJECT)
            .with("nombre", fields.value(NAME_FIELD))
            .with("email", email)
            .with("motivo", reason)
            .with("ios_version", fields.value(IOS_FIELD))
            .with("app_version", fields.value(APP_FIELD))
            .with("device", fields.value(DEVICE_FIELD))
            .with("message", message))
    }

    fn success_message(&self) -> &'static str {
        SUCCESS
    }

    fn failure_message(&self, support_email: &str) -> String {
        format!("No pudimos enviar el formulario. Escribenos a {support_email}.")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryForm;

    fn filled() -> MemoryForm {
        MemoryForm::new()
            .with_value("nombre", "Ana")
            .with_value("email", "ana@example.com")
            .with_value("motivo", "Problema con mapas")
            .with_value("ios", "17.4")
            .with_value("app", "2.3.1")
            .with_value("dispositivo", "iPhone 13")
            .with_value("mensaje", "  El mapa no carga.  ")
    }

    #[test]
    fn payload_maps_form_fields_to_relay_keys() {
        let payload = SupportPolicy.validate(&filled()).expect("valid submission");

        assert_eq!(
            payload.keys(),
            vec![
                "_subject",
                "nombre",
                "email",
                "motivo",
                "ios_version",
                "app_version",
                "device",
                "message"
            ]
        );
        assert_eq!(payload.get("_subject"), Some(SUBJECT));
        assert_eq!(payload.get("ios_version"), Some("17.4"));
        assert_eq!(payload.get("app_version"), Some("2.3.1"));
        assert_eq!(payload.get("device"), Some("iPhone 13"));
        assert_eq!(payload.get("message"), Some("El mapa no carga."));
    }

    #[test]
    fn missing_reason_defaults_to_general_inquiry() {
        let mut form = filled();
        form.set_value("motivo", "");
        let payload = SupportPolicy.validate(&form).expect("valid submission");
        assert_eq!(payload.get("motivo"), Some(DEFAULT_REASON));
    }

    #[test]
    fn absent_optional_fields_are_sent_blank() {
        let form = MemoryForm::new()
            .with_value("email", "ana@example.com")
            .with_value("mensaje", "Hola");
        let payload = SupportPolicy.validate(&form).expect("valid submission");
        assert_eq!(payload.get("nombre"), Some(""));
        assert_eq!(payload.get("device"), Some(""));
    }

    #[test]
    fn email_is_checked_before_message() {
        let form = MemoryForm::new();
        let err = SupportPolicy.validate(&form).unwrap_err();
        assert_eq!(err, ValidationError::new("email", EMAIL_INVALID));
    }

    #[test]
    fn malformed_email_is_rejected() {
        let mut form = filled();
        form.set_value("email", "not-an-email");
        let err = SupportPolicy.validate(&form).unwrap_err();
        assert_eq!(err, ValidationError::new("email", EMAIL_INVALID));
    }

    #[test]
    fn blank_message_is_rejected() {
        let mut form = filled();
        form.set_value("mensaje", "   ");
        let err = SupportPolicy.validate(&form).unwrap_err();
        assert_eq!(err, ValidationError::new("mensaje", MESSAGE_MISSING));
    }
}

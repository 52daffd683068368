//! Personal-data deletion request.

use mappets_core::{Payload, ValidationError};
use mappets_relay::Encoding;

use crate::policy::{required_email, ValidationPolicy};
use crate::surface::FieldSource;

pub const EMAIL_FIELD: &str = "email";

pub const SUBJECT: &str = "Solicitud de eliminacion de datos personales";

const EMAIL_MISSING: &str = "Ingresa tu correo electronico para continuar.";
const EMAIL_MALFORMED: &str = "Revisa el formato del correo ingresado.";
const SUCCESS: &str = "Solicitud enviada. Te responderemos a la brevedad.";

#[derive(Debug, Clone, Copy, Default)]
pub struct DeletionPolicy;

impl ValidationPolicy for DeletionPolicy {
    fn name(&self) -> &'static str {
        "deletion"
    }

    fn encoding(&self) -> Encoding {
        Encoding::Json
    }

    fn validate(&self, fields: &dyn FieldSource) -> Result<Payload, ValidationError> {
        let email = required_email(fields, EMAIL_FIELD, EMAIL_MISSING, EMAIL_MALFORMED)?;
        let message = deletion_letter(&email);

        Ok(Payload::new()
            .with("_subject", SUBJECT)
            .with("email", email)
            .with("message", message))
    }

    fn success_message(&self) -> &'static str {
        SUCCESS
    }

    fn failure_message(&self, support_email: &str) -> String {
        format!("No pudimos enviar la solicitud. Escribenos a {support_email}.")
    }
}

/// The fixed request letter sent on the requester's behalf.
fn deletion_letter(email: &str) -> String {
    [
        "Hola equipo Mappets,",
        "",
        "Solicito la eliminacion definitiva de mis datos personales asociados a este correo.",
        "",
        "Por favor, confirmen cuando el proceso este completo.",
        "",
        "Gracias.",
        &format!("Correo: {email}"),
    ]
    .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryForm;

    #[test]
    fn valid_email_builds_payload_with_fixed_subject() {
        let form = MemoryForm::new().with_value("email", "user@example.com");
        let payload = DeletionPolicy.validate(&form).expect("valid submission");

        assert_eq!(payload.get("email"), Some("user@example.com"));
        assert_eq!(payload.get("_subject"), Some(SUBJECT));
        assert_eq!(payload.keys(), vec!["_subject", "email", "message"]);
    }

    #[test]
    fn letter_names_the_requesting_email() {
        let form = MemoryForm::new().with_value("email", " user@example.com ");
        let payload = DeletionPolicy.validate(&form).expect("valid submission");
        let message = payload.get("message").expect("message present");

        assert!(message.starts_with("Hola equipo Mappets,\n\n"));
        assert!(message.ends_with("\n\nGracias.\nCorreo: user@example.com"));
        assert_eq!(message.lines().count(), 8);
    }

    #[test]
    fn blank_email_is_rejected_with_presence_message() {
        let err = DeletionPolicy
            .validate(&MemoryForm::new().with_value("email", "   "))
            .unwrap_err();
        assert_eq!(err.field, "email");
        assert_eq!(err.message, EMAIL_MISSING);
    }

    #[test]
    fn malformed_email_is_rejected_with_format_message() {
        let err = DeletionPolicy
            .validate(&MemoryForm::new().with_value("email", "not-an-email"))
            .unwrap_err();
        assert_eq!(err.field, "email");
        assert_eq!(err.message, EMAIL_MALFORMED);
    }

    #[test]
    fn failure_message_names_the_support_address() {
        assert_eq!(
            DeletionPolicy.failure_message("equipo@mappets.com.ar"),
            "No pudimos enviar la solicitud. Escribenos a equipo@mappets.com.ar."
        );
    }
}

//! Commerce signup request.
//!
//! The largest form on the site: business details, contact channels, a
//! location picked on the map and an explicit consent checkbox. It is posted
//! as multipart because the relay route it uses does not parse JSON.

use mappets_core::{Coordinate, Payload, ValidationError};
use mappets_relay::Encoding;

use crate::policy::{optional, required, required_email, ValidationPolicy};
use crate::surface::FieldSource;

pub const NAME_FIELD: &str = "commerce_name";
pub const TYPE_FIELD: &str = "commerce_type";
pub const CONTACT_FIELD: &str = "contact_name";
pub const EMAIL_FIELD: &str = "email";
pub const PHONE_FIELD: &str = "phone";
pub const WHATSAPP_FIELD: &str = "whatsapp";
pub const WEBSITE_FIELD: &str = "website";
pub const INSTAGRAM_FIELD: &str = "instagram";
pub const FACEBOOK_FIELD: &str = "facebook";
pub const ADDRESS_FIELD: &str = "address";
pub const LOCATION_LINK_FIELD: &str = "location_google";
pub const LATITUDE_FIELD: &str = "latitude";
pub const LONGITUDE_FIELD: &str = "longitude";
pub const HOURS_FIELD: &str = "opening_hours";
pub const DESCRIPTION_FIELD: &str = "description";
pub const CONSENT_FIELD: &str = "accept_policy";

pub const SUBJECT: &str = "Alta de comercio - Mappets";
pub const FORM_TYPE: &str = "commerce_signup";

const NAME_MISSING: &str = "Ingresa el nombre del comercio.";
const TYPE_MISSING: &str = "Selecciona el tipo de comercio.";
const CONTACT_MISSING: &str = "Ingresa el nombre de la persona de contacto.";
const EMAIL_MISSING: &str = "Ingresa un correo de contacto.";
const EMAIL_MALFORMED: &str = "Revisa el formato del correo ingresado.";
const PHONE_MISSING: &str = "Ingresa un telefono de contacto.";
const ADDRESS_MISSING: &str = "Ingresa la direccion del comercio.";
const DESCRIPTION_MISSING: &str = "Contanos brevemente que ofrece el comercio.";
const LOCATION_MISSING: &str = "Selecciona la ubicacion del comercio en el mapa.";
const CONSENT_MISSING: &str = "Debes aceptar la politica de validacion para continuar.";
const SUCCESS: &str =
    "Solicitud recibida. Revisaremos los datos del comercio y te contactaremos.";

#[derive(Debug, Clone, Copy, Default)]
pub struct CommercePolicy;

/// Validated commerce submission, before flattening into a [`Payload`].
struct CommerceSignup {
    name: String,
    kind: String,
    contact: String,
    email: String,
    phone: String,
    whatsapp: String,
    website: String,
    instagram: String,
    facebook: String,
    address: String,
    location_link: String,
    location: Coordinate,
    opening_hours: String,
    description: String,
}

impl ValidationPolicy for CommercePolicy {
    fn name(&self) -> &'static str {
        "commerce"
    }

    fn encoding(&self) -> Encoding {
        Encoding::Multipart
    }

    fn validate(&self, fields: &dyn FieldSource) -> Result<Payload, ValidationError> {
        let name = required(fields, NAME_FIELD, NAME_MISSING)?;
        let kind = required(fields, TYPE_FIELD, TYPE_MISSING)?;
        let contact = required(fields, CONTACT_FIELD, CONTACT_MISSING)?;
        let email = required_email(fields, EMAIL_FIELD, EMAIL_MISSING, EMAIL_MALFORMED)?;
        let phone = required(fields, PHONE_FIELD, PHONE_MISSING)?;
        let address = required(fields, ADDRESS_FIELD, ADDRESS_MISSING)?;
        let description = required(fields, DESCRIPTION_FIELD, DESCRIPTION_MISSING)?;

        let latitude = fields.value(LATITUDE_FIELD);
        let location = Coordinate::from_fields(&latitude, &fields.value(LONGITUDE_FIELD))
            .ok_or_else(|| {
                let field = if is_coordinate_part(&latitude) {
                    LONGITUDE_FIELD
                } else {
                    LATITUDE_FIELD
                };
                ValidationError::new(field, LOCATION_MISSING)
            })?;

        if !fields.is_checked(CONSENT_FIELD) {
            return Err(ValidationError::new(CONSENT_FIELD, CONSENT_MISSING));
        }

        let signup = CommerceSignup {
            name,
            kind,
            contact,
            email,
            phone,
            whatsapp: optional(fields, WHATSAPP_FIELD),
            website: optional(fields, WEBSITE_FIELD),
            instagram: optional(fields, INSTAGRAM_FIELD),
            facebook: optional(fields, FACEBOOK_FIELD),
            address,
            location_link: optional(fields, LOCATION_LINK_FIELD),
            location,
            opening_hours: optional(fields, HOURS_FIELD),
            description,
        };

        Ok(signup.into_payload())
    }

    fn success_message(&self) -> &'static str {
        SUCCESS
    }

    fn failure_message(&self, support_email: &str) -> String {
        format!("No pudimos enviar la solicitud. Escribenos a {support_email}.")
    }
}

impl CommerceSignup {
    fn into_payload(self) -> Payload {
        let summary = self.summary();
        Payload::new()
            .with("_subject", SUBJECT)
            .with("form_type", FORM_TYPE)
            .with("commerce_name", self.name)
            .with("commerce_type", self.kind)
            .with("contact_name", self.contact)
            .with("email", self.email)
            .with("phone", self.phone)
            .with("whatsapp", self.whatsapp)
            .with("website", self.website)
            .with("instagram", self.instagram)
            .with("facebook", self.facebook)
            .with("address", self.address)
            .with("location_google", self.location_link)
            .with("latitude", self.location.latitude_text())
            .with("longitude", self.location.longitude_text())
            .with("opening_hours", self.opening_hours)
            .with("description", self.description)
            .with("message", summary)
    }

    /// Human-readable digest of the whole submission for the relay's email.
    fn summary(&self) -> String {
        let or_dash = |s: &str| if s.is_empty() { "-".to_string() } else { s.to_string() };

        [
            "Nueva solicitud de alta de comercio".to_string(),
            String::new(),
            format!("Comercio: {}", self.name),
            format!("Tipo: {}", self.kind),
            format!("Contacto: {}", self.contact),
            format!("Email: {}", self.email),
            format!("Telefono: {}", self.phone),
            format!("WhatsApp: {}", or_dash(&self.whatsapp)),
            format!("Sitio web: {}", or_dash(&self.website)),
            format!("Instagram: {}", or_dash(&self.instagram)),
            format!("Facebook: {}", or_dash(&self.facebook)),
            format!("Direccion: {}", self.address),
            format!("Ubicacion (Google Maps): {}", or_dash(&self.location_link)),
            format!("Coordenadas: {}", self.location),
            format!("Horarios: {}", or_dash(&self.opening_hours)),
            String::new(),
            "Descripcion:".to_string(),
            self.description.clone(),
        ]
        .join("\n")
    }
}

/// Whether a single coordinate input holds a usable number.
fn is_coordinate_part(raw: &str) -> bool {
    raw.trim().parse::<f64>().is_ok_and(f64::is_finite)
}

#[cfg(test)]
#[path = "commerce_test.rs"]
mod tests;

//! Form subcommand handlers.
//!
//! Each handler fills an in-memory form from the flags, runs it through the
//! same controller the site uses and prints the resulting feedback. A
//! submission that is not delivered exits non-zero.

use mappets_core::SiteConfig;
use mappets_forms::{
    commerce, support, CommercePolicy, DeletionPolicy, FormController, MemoryFeedback,
    MemoryForm, SubmitReport, SupportPolicy, ValidationPolicy,
};
use mappets_map::picker::MAP_CONTAINER;
use mappets_map::{CoordinatePicker, HeadlessMap, HeadlessProvider, PickerSettings};
use mappets_relay::RelayClient;
use mappets_ui::Modal;

use crate::host::{ConsoleModal, FormPickerSurface};
use crate::{CommerceArgs, SupportArgs};

const THANKS_TITLE: &str = "Gracias por escribirnos";

pub(crate) async fn run_deletion(config: &SiteConfig, email: &str) -> anyhow::Result<()> {
    let mut form = MemoryForm::new().with_value(mappets_forms::deletion::EMAIL_FIELD, email);
    let controller = FormController::new(DeletionPolicy, RelayClient::from_config(config)?)
        .with_support_email(&config.support_email);

    submit(controller, &mut form, "Solicitar eliminacion").await
}

pub(crate) async fn run_support(config: &SiteConfig, args: &SupportArgs) -> anyhow::Result<()> {
    let mut form = support_form(args);
    let modal = Modal::new(Some(ConsoleModal::new(
        THANKS_TITLE,
        "Recibimos tu consulta y te responderemos por correo.",
    )));
    let controller = FormController::new(SupportPolicy, RelayClient::from_config(config)?)
        .with_support_email(&config.support_email)
        .with_modal(Box::new(modal));

    submit(controller, &mut form, "Enviar consulta").await
}

pub(crate) async fn run_commerce(config: &SiteConfig, args: &CommerceArgs) -> anyhow::Result<()> {
    let mut form = commerce_form(args);

    // Coordinates go through the picker so they are stored the way a map
    // click would store them.
    let mut picker: CoordinatePicker<HeadlessMap> =
        CoordinatePicker::new(PickerSettings::from_config(config));
    let mut surface = FormPickerSurface::new(&mut form);
    picker.mount(&HeadlessProvider::default(), MAP_CONTAINER, &mut surface);
    println!("{}", surface.status);

    let modal = Modal::new(Some(ConsoleModal::new(
        THANKS_TITLE,
        "Vamos a revisar el comercio antes de publicarlo en el mapa.",
    )));
    let controller = FormController::new(CommercePolicy, RelayClient::from_config(config)?)
        .with_support_email(&config.support_email)
        .with_modal(Box::new(modal));

    submit(controller, &mut form, "Enviar solicitud").await
}

async fn submit<P: ValidationPolicy>(
    mut controller: FormController<P, RelayClient>,
    form: &mut MemoryForm,
    submit_label: &str,
) -> anyhow::Result<()> {
    let mut feedback = MemoryFeedback::new(submit_label);
    let report = controller.on_submit(form, &mut feedback).await;

    println!("{}", feedback.message());

    match report {
        SubmitReport::Delivered => Ok(()),
        SubmitReport::Invalid(err) => {
            anyhow::bail!("invalid {} form: {err}", controller.policy().name())
        }
        SubmitReport::Failed(reason) => {
            anyhow::bail!("{} form not delivered: {reason}", controller.policy().name())
        }
        SubmitReport::Ignored => anyhow::bail!("submission ignored"),
    }
}

fn support_form(args: &SupportArgs) -> MemoryForm {
    MemoryForm::new()
        .with_value(support::NAME_FIELD, &args.name)
        .with_value(support::EMAIL_FIELD, &args.email)
        .with_value(support::REASON_FIELD, &args.reason)
        .with_value(support::IOS_FIELD, &args.ios)
        .with_value(support::APP_FIELD, &args.app)
        .with_value(support::DEVICE_FIELD, &args.device)
        .with_value(support::MESSAGE_FIELD, &args.message)
}

fn commerce_form(args: &CommerceArgs) -> MemoryForm {
    let mut form = MemoryForm::new()
        .with_value(commerce::NAME_FIELD, &args.name)
        .with_value(commerce::TYPE_FIELD, &args.kind)
        .with_value(commerce::CONTACT_FIELD, &args.contact)
        .with_value(commerce::EMAIL_FIELD, &args.email)
        .with_value(commerce::PHONE_FIELD, &args.phone)
        .with_value(commerce::WHATSAPP_FIELD, &args.whatsapp)
        .with_value(commerce::WEBSITE_FIELD, &args.website)
        .with_value(commerce::INSTAGRAM_FIELD, &args.instagram)
        .with_value(commerce::FACEBOOK_FIELD, &args.facebook)
        .with_value(commerce::ADDRESS_FIELD, &args.address)
        .with_value(commerce::LOCATION_LINK_FIELD, &args.location_link)
        .with_value(commerce::LATITUDE_FIELD, &args.lat)
        .with_value(commerce::LONGITUDE_FIELD, &args.lng)
        .with_value(commerce::HOURS_FIELD, &args.hours)
        .with_value(commerce::DESCRIPTION_FIELD, &args.description);
    form.set_checked(commerce::CONSENT_FIELD, args.accept_policy);
    form
}

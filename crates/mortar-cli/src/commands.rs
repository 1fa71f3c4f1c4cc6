//! Handlers for the content subcommands. Each prints one JSON document.

use anyhow::{Context, Result};
use serde::Serialize;

use mortar_client::ContentClient;
use mortar_core::config::SiteConfig;
use mortar_core::types::{CategoryFilter, EnquiryField};
use mortar_site::{
    AboutPage, ContactSection, EnquiryForm, ProjectsPage, SiteContext, load_stats,
};

use crate::cli::Command;

/// Run a non-config command against the configured content service.
pub async fn run(config: &SiteConfig, command: Command) -> Result<()> {
    let ctx = SiteContext::from_config(config);

    match command {
        Command::About => {
            let client = ContentClient::from_config(config)?;
            print_json(&AboutPage::load(&client, &ctx).await)
        }
        Command::Contact => {
            let client = ContentClient::from_config(config)?;
            print_json(&ContactSection::load(&client, &ctx).await)
        }
        Command::Stats => {
            let client = ContentClient::from_config(config)?;
            let home = load_stats(&client, ctx.defaults.profile.stats).await;
            print_json(&StatsOutput {
                labels: home.labels(),
                home,
            })
        }
        Command::Projects { category } => {
            let selection: CategoryFilter = category
                .parse()
                .with_context(|| format!("Unknown category {category:?}"))?;
            let client = ContentClient::from_config(config)?;
            let mut page = ProjectsPage::load(&client, &ctx).await;
            page.select(selection);
            print_json(&page.view())
        }
        Command::Asset { reference } => print_json(&ctx.assets.resolve(reference.as_deref())),
        Command::Resolve => print_json(&config.endpoint()),
        Command::Enquire {
            name,
            email,
            phone,
            subject,
            message,
        } => {
            let client = ContentClient::from_config(config)?;
            let form = EnquiryForm::new(client);
            for (field, value) in [
                (EnquiryField::Name, name),
                (EnquiryField::Email, email),
                (EnquiryField::Phone, phone),
                (EnquiryField::Subject, subject),
                (EnquiryField::Message, message),
            ] {
                form.set_field(field, value);
            }

            let outcome = form.submit().await;
            print_json(&EnquiryOutput {
                state: form.state().to_string(),
                notice: form.notice(),
            })?;
            outcome.context("Enquiry was not delivered")
        }
        Command::Config { .. } => anyhow::bail!("config commands do not talk to the content service"),
    }
}

#[derive(Serialize)]
struct StatsOutput {
    #[serde(flatten)]
    home: mortar_site::HomeStats,
    labels: Vec<mortar_site::StatLabel>,
}

#[derive(Serialize)]
struct EnquiryOutput {
    state: String,
    notice: Option<mortar_site::Notice>,
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

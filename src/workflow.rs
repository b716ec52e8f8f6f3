//! User-facing zone creation flow.
use std::io::Write;

use tracing::info;

use crate::error::HelperError;
use crate::idns::ZoneApi;
use crate::idns::types::{ZoneCreate, ZoneResult};
use crate::prompt::Answers;

pub const WELCOME: &str = "Hey, there! Welcome to iDNS helper";
const SEPARATOR: &str = "--------------------------------------------------";

pub fn welcome(out: &mut impl Write) -> std::io::Result<()> {
    writeln!(out, "{WELCOME}")
}

/// Build the zone request from the collected answers; new zones are always active.
pub fn zone_request(answers: &Answers) -> ZoneCreate {
    ZoneCreate {
        name: answers.domain_name.clone(),
        domain: answers.dns_zone.clone(),
        is_active: true,
    }
}

/// Create the zone and report the outcome on `out`.
///
/// API and transport failures echo the raw response body before the error is returned.
pub async fn create_zone(
    api: &dyn ZoneApi,
    answers: &Answers,
    out: &mut impl Write,
) -> anyhow::Result<ZoneResult> {
    writeln!(out, "\n{SEPARATOR}\n")?;
    writeln!(out, "Creating iDNS zone...")?;

    let request = zone_request(answers);
    match api.create_zone(&request).await {
        Ok(zone) => {
            info!(id = zone.id, name = %zone.name, "zone created");
            writeln!(out, "Zone created")?;
            writeln!(out, "Zone ID: {}", zone.id)?;
            writeln!(out, "Zone name: {}", zone.name)?;
            Ok(zone)
        }
        Err(err @ (HelperError::Api { .. } | HelperError::Transport { .. })) => {
            writeln!(out, "\nError")?;
            if let Some(body) = err.raw_body() {
                writeln!(out, "{body}")?;
            }
            Err(err.into())
        }
        Err(err) => Err(err.into()),
    }
}

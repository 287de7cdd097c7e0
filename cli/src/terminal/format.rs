use colored::*;
use dchound_common::directory::inventory::DomainControllerRecord;

use crate::terminal::colors;

pub type Detail = (String, ColoredString);

/// Key/value rows for one controller's tree, in display order.
pub fn dc_to_details(dc: &DomainControllerRecord) -> Vec<Detail> {
    let mut details: Vec<Detail> = vec![("IP".to_string(), dc.address.color(colors::ADDRESS))];

    if let Some(hostname) = &dc.hostname {
        details.push(("Host".to_string(), hostname.color(colors::TEXT_DEFAULT)));
    }

    let domain: ColoredString = match &dc.domain {
        Some(domain) => domain.color(colors::DOMAIN),
        None => "needs manual domain".red().italic(),
    };
    details.push(("Domain".to_string(), domain));

    if let Some(netbios) = &dc.netbios {
        details.push(("NetBIOS".to_string(), netbios.color(colors::DOMAIN)));
    }

    if !dc.services.is_empty() {
        let services: String = dc
            .services
            .iter()
            .map(|signal| signal.label())
            .collect::<Vec<&str>>()
            .join(", ");
        details.push(("Services".to_string(), services.normal()));
    }

    if !dc.ports.is_empty() {
        let ports: String = dc
            .ports
            .iter()
            .map(|port| port.to_string())
            .collect::<Vec<String>>()
            .join(", ");
        details.push(("Ports".to_string(), ports.color(colors::ACCENT)));
    }

    details
}

//! # Collection Command Generation
//!
//! Renders the inventory into ready-to-run `bloodhound-python` invocations,
//! one per domain controller, grouped by reconciled domain. A controller
//! whose domain never resolved is flagged for manual input, never guessed
//! and never silently dropped.

use dchound_common::directory::inventory::{DomainControllerRecord, Inventory};

/// Operator-supplied knobs for command generation.
#[derive(Clone, Debug)]
pub struct CollectorOptions {
    pub username: String,
    pub password: String,
    /// Collection scope passed as `-c`.
    pub scope: String,
    /// Render the user as `'NETBIOS\user'` when a NetBIOS domain is known.
    pub netbios_prefix: bool,
    /// Domain to use for controllers with no resolved domain.
    pub fallback_domain: Option<String>,
}

impl Default for CollectorOptions {
    fn default() -> Self {
        Self {
            username: String::new(),
            password: String::new(),
            scope: String::from("All"),
            netbios_prefix: false,
            fallback_domain: None,
        }
    }
}

/// One rendered collection-tool invocation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CollectionCommand {
    pub address: String,
    /// Hostname when known, address otherwise.
    pub target: String,
    pub domain: String,
    pub netbios: Option<String>,
    pub script: String,
}

/// The full plan: runnable commands plus the controllers that still need a
/// manually supplied domain.
#[derive(Clone, Debug, Default)]
pub struct CollectionPlan {
    pub commands: Vec<CollectionCommand>,
    pub unresolved: Vec<DomainControllerRecord>,
}

/// Groups controllers by domain and renders one command each.
///
/// A group's NetBIOS value comes from the first controller in the group
/// carrying one, falling back to the first NetBIOS domain seen anywhere in
/// the inventory.
pub fn build_plan(inventory: &Inventory, options: &CollectorOptions) -> CollectionPlan {
    let mut groups: Vec<(String, Vec<&DomainControllerRecord>)> = Vec::new();
    let mut unresolved: Vec<DomainControllerRecord> = Vec::new();

    for dc in &inventory.domain_controllers {
        let domain = dc
            .domain
            .clone()
            .or_else(|| options.fallback_domain.clone());
        let Some(domain) = domain else {
            unresolved.push(dc.clone());
            continue;
        };

        match groups
            .iter_mut()
            .find(|(group, _)| group.eq_ignore_ascii_case(&domain))
        {
            Some((_, members)) => members.push(dc),
            None => groups.push((domain, vec![dc])),
        }
    }

    let mut commands: Vec<CollectionCommand> = Vec::new();
    for (domain, members) in &groups {
        let netbios = members
            .iter()
            .find_map(|dc| dc.netbios.clone())
            .or_else(|| inventory.netbios_domains.first().cloned());

        for dc in members {
            commands.push(CollectionCommand {
                address: dc.address.clone(),
                target: dc.target().to_string(),
                domain: domain.clone(),
                netbios: netbios.clone(),
                script: render(dc.target(), domain, netbios.as_deref(), options),
            });
        }
    }

    CollectionPlan {
        commands,
        unresolved,
    }
}

fn render(target: &str, domain: &str, netbios: Option<&str>, options: &CollectorOptions) -> String {
    let user = match (options.netbios_prefix, netbios) {
        (true, Some(netbios)) => format!("'{}\\{}'", netbios, options.username),
        _ => options.username.clone(),
    };

    format!(
        "bloodhound-python \\\n  -u {user} \\\n  -p '{password}' \\\n  -d {domain} \\\n  -dc {target} \\\n  -c {scope} \\\n  --zip",
        password = options.password,
        scope = options.scope,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn dc(address: &str, hostname: Option<&str>, domain: Option<&str>, netbios: Option<&str>) -> DomainControllerRecord {
        DomainControllerRecord {
            address: address.to_string(),
            hostname: hostname.map(str::to_string),
            domain: domain.map(str::to_string),
            netbios: netbios.map(str::to_string),
            ports: BTreeSet::new(),
            services: BTreeSet::new(),
        }
    }

    fn inventory(domain_controllers: Vec<DomainControllerRecord>) -> Inventory {
        Inventory {
            total_hosts: domain_controllers.len(),
            netbios_domains: domain_controllers
                .iter()
                .filter_map(|dc| dc.netbios.clone())
                .collect(),
            domains: Vec::new(),
            domain_controllers,
        }
    }

    fn operator() -> CollectorOptions {
        CollectorOptions {
            username: String::from("auditor"),
            password: String::from("Spring2026!"),
            ..CollectorOptions::default()
        }
    }

    #[test]
    fn template_renders_all_flags_in_order() {
        let inv = inventory(vec![dc(
            "10.0.0.1",
            Some("DC01.CORP.LOCAL"),
            Some("CORP.LOCAL"),
            None,
        )]);
        let plan = build_plan(&inv, &operator());

        assert_eq!(plan.commands.len(), 1);
        assert_eq!(
            plan.commands[0].script,
            "bloodhound-python \\\n  -u auditor \\\n  -p 'Spring2026!' \\\n  -d CORP.LOCAL \\\n  -dc DC01.CORP.LOCAL \\\n  -c All \\\n  --zip"
        );
    }

    #[test]
    fn target_falls_back_to_the_address_without_a_hostname() {
        let inv = inventory(vec![dc("10.0.0.1", None, Some("CORP.LOCAL"), None)]);
        let plan = build_plan(&inv, &operator());
        assert_eq!(plan.commands[0].target, "10.0.0.1");
        assert!(plan.commands[0].script.contains("-dc 10.0.0.1"));
    }

    #[test]
    fn netbios_prefix_quotes_the_user() {
        let inv = inventory(vec![dc(
            "10.0.0.1",
            None,
            Some("CORP.LOCAL"),
            Some("CORP"),
        )]);
        let options = CollectorOptions {
            netbios_prefix: true,
            ..operator()
        };
        let plan = build_plan(&inv, &options);
        assert!(plan.commands[0].script.contains("-u 'CORP\\auditor'"));
    }

    #[test]
    fn group_borrows_a_netbios_value_from_the_inventory() {
        let inv = inventory(vec![
            dc("10.0.0.1", None, Some("A.LOCAL"), Some("ALPHA")),
            dc("10.0.0.2", None, Some("B.LOCAL"), None),
        ]);
        let plan = build_plan(&inv, &operator());
        assert_eq!(plan.commands[1].netbios.as_deref(), Some("ALPHA"));
    }

    #[test]
    fn unresolved_controllers_are_flagged_not_guessed() {
        let inv = inventory(vec![
            dc("10.0.0.1", None, Some("CORP.LOCAL"), None),
            dc("10.0.0.2", None, None, None),
        ]);
        let plan = build_plan(&inv, &operator());
        assert_eq!(plan.commands.len(), 1);
        assert_eq!(plan.unresolved.len(), 1);
        assert_eq!(plan.unresolved[0].address, "10.0.0.2");
    }

    #[test]
    fn fallback_domain_rescues_unresolved_controllers() {
        let inv = inventory(vec![dc("10.0.0.2", None, None, None)]);
        let options = CollectorOptions {
            fallback_domain: Some(String::from("corp.local")),
            ..operator()
        };
        let plan = build_plan(&inv, &options);
        assert!(plan.unresolved.is_empty());
        assert_eq!(plan.commands[0].domain, "corp.local");
    }
}

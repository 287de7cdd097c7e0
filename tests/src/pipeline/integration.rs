#![cfg(test)]
use dchound_common::directory::inventory::Inventory;
use dchound_core::commands::{self, CollectorOptions};
use dchound_core::export::ExportRecord;
use dchound_core::pipeline::{self, ParseOptions};
use serde_json::Value;

/// Realistic multi-pass scan: one fully annotated DC (seen twice), a file
/// server, a second DC in another domain identified through NTLM info, and
/// a bare DC with no domain leak at all.
const SCAN: &str = "\
Starting Nmap 7.94 ( https://nmap.org ) at 2026-08-25 09:30 UTC
Nmap scan report for dc01.corp.local (10.10.10.10)
Host is up (0.00042s latency).
PORT     STATE SERVICE
53/tcp   open  domain
88/tcp   open  kerberos-sec
135/tcp  open  msrpc
389/tcp  open  ldap
445/tcp  open  microsoft-ds
636/tcp  open  ldapssl
| smb-os-discovery:
|   OS: Windows Server 2019 Datacenter
|   Domain name: corp.local
|   Forest name: corp.local
|   NetBIOS domain name: CORP
|_  FQDN: DC01.corp.local
Nmap scan report for 10.10.10.20
Host is up (0.0011s latency).
445/tcp  open  microsoft-ds
Nmap scan report for 10.10.20.5
Host is up.
88/tcp   open  kerberos-sec
636/tcp  open  ldapssl
| ms-sql-ntlm-info:
|   DNS_Domain_Name: dev.example.io
|   DNS_Computer_Name: sqldc.dev.example.io
|_  NetBIOS_Domain_Name: DEV
Nmap scan report for 10.10.30.7
Host is up.
88/tcp   open  kerberos-sec
389/tcp  open  ldap
Nmap scan report for dc01.corp.local (10.10.10.10)
3268/tcp open|filtered globalcatLDAP
";

#[test]
fn full_scan_yields_the_expected_inventory() {
    let inventory = pipeline::parse(SCAN);

    assert_eq!(inventory.total_hosts, 4);
    assert_eq!(inventory.domain_controllers.len(), 3);
    assert_eq!(inventory.domains, vec!["corp.local", "dev.example.io"]);
    assert_eq!(inventory.netbios_domains, vec!["CORP", "DEV"]);

    let corp = &inventory.domain_controllers[0];
    assert_eq!(corp.address, "10.10.10.10");
    assert_eq!(corp.hostname.as_deref(), Some("dc01.corp.local"));
    assert_eq!(corp.domain.as_deref(), Some("corp.local"));
    assert_eq!(corp.netbios.as_deref(), Some("CORP"));
    // The repeated block contributed the ambiguous global-catalog port.
    assert!(corp.ports.contains(&3268));
    assert_eq!(
        corp.ports.iter().copied().collect::<Vec<u16>>(),
        vec![53, 88, 135, 389, 445, 636, 3268]
    );

    let dev = &inventory.domain_controllers[1];
    assert_eq!(dev.address, "10.10.20.5");
    assert_eq!(dev.hostname.as_deref(), Some("sqldc.dev.example.io"));
    assert_eq!(dev.domain.as_deref(), Some("dev.example.io"));
    assert_eq!(dev.netbios.as_deref(), Some("DEV"));

    let bare = &inventory.domain_controllers[2];
    assert_eq!(bare.address, "10.10.30.7");
    assert_eq!(bare.domain, None);
    assert_eq!(bare.netbios, None);
}

#[test]
fn the_file_server_is_not_in_the_inventory() {
    let inventory = pipeline::parse(SCAN);
    assert!(
        inventory
            .domain_controllers
            .iter()
            .all(|dc| dc.address != "10.10.10.20")
    );
}

#[test]
fn strict_open_drops_the_ambiguous_port_but_not_the_controller() {
    let options = ParseOptions {
        ambiguous_is_open: false,
    };
    let inventory = pipeline::parse_with(SCAN, &options);

    let corp = &inventory.domain_controllers[0];
    assert!(!corp.ports.contains(&3268));
    assert_eq!(inventory.domain_controllers.len(), 3);
}

#[test]
fn parsing_the_scan_twice_is_deterministic_and_idempotent() {
    assert_eq!(pipeline::parse(SCAN), pipeline::parse(SCAN));

    let doubled = format!("{SCAN}{SCAN}");
    assert_eq!(pipeline::parse(SCAN), pipeline::parse(&doubled));
}

#[test]
fn export_record_matches_the_artifact_contract() {
    let inventory = pipeline::parse(SCAN);
    let record = ExportRecord::new(&inventory, "20260825_093000");
    let value: Value = serde_json::from_str(&record.to_json().unwrap()).unwrap();

    assert_eq!(value["timestamp"], "20260825_093000");
    assert_eq!(value["total_hosts"], 4);
    assert_eq!(value["total_dcs"], 3);
    assert_eq!(value["domains"][0], "corp.local");
    assert_eq!(value["netbios_domains"][1], "DEV");

    let corp = &value["domain_controllers"][0];
    assert_eq!(corp["ip"], "10.10.10.10");
    assert_eq!(corp["hostname"], "dc01.corp.local");
    assert_eq!(corp["domain"], "corp.local");
    assert_eq!(corp["netbios"], "CORP");
    assert!(corp["services"]
        .as_array()
        .unwrap()
        .iter()
        .any(|s| s == "Global Catalog"));

    // The bare controller exports explicit nulls, never placeholders.
    let bare = &value["domain_controllers"][2];
    assert_eq!(bare["hostname"], "10.10.30.7");
    assert_eq!(bare["domain"], Value::Null);
}

#[test]
fn collection_plan_covers_resolved_controllers_and_flags_the_rest() {
    let inventory = pipeline::parse(SCAN);
    let options = CollectorOptions {
        username: String::from("auditor"),
        password: String::from("Spring2026!"),
        netbios_prefix: true,
        ..CollectorOptions::default()
    };

    let plan = commands::build_plan(&inventory, &options);

    assert_eq!(plan.commands.len(), 2);
    assert_eq!(plan.unresolved.len(), 1);
    assert_eq!(plan.unresolved[0].address, "10.10.30.7");

    let corp = &plan.commands[0];
    assert_eq!(corp.target, "dc01.corp.local");
    assert!(corp.script.contains("-u 'CORP\\auditor'"));
    assert!(corp.script.contains("-d corp.local"));
    assert!(corp.script.contains("-dc dc01.corp.local"));
    assert!(corp.script.ends_with("--zip"));

    let dev = &plan.commands[1];
    assert!(dev.script.contains("-u 'DEV\\auditor'"));
}

#[test]
fn empty_and_headerless_input_parse_to_empty_inventories() {
    assert_eq!(pipeline::parse(""), Inventory::default());
    assert_eq!(
        pipeline::parse("no scan headers anywhere in this text\n"),
        Inventory::default()
    );
}

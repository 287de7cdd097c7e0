//! The full run: read the scan, parse it, report, export and (unless
//! `--json-only`) walk the operator through command generation.

use std::fs;
use std::path::Path;

use colored::*;
use dchound_common::config::Config;
use dchound_common::directory::inventory::Inventory;
use dchound_common::error::Error;
use dchound_common::{info, warn};
use dchound_core::commands::{self, CollectionPlan, CollectorOptions};
use dchound_core::pipeline::{self, ParseOptions};
use dchound_core::segmenter;

use crate::terminal::{format, print, progress, prompt};
use crate::{artifacts, dprint};

pub fn run(scan_file: &Path, cfg: &Config) -> anyhow::Result<()> {
    let text = fs::read_to_string(scan_file).map_err(|source| Error::InputUnavailable {
        path: scan_file.to_path_buf(),
        source,
    })?;

    info!("Parsing scan output: {}", scan_file.display());
    let inventory = parse(&text, cfg);

    print_summary(&inventory);

    if inventory.total_hosts == 0 {
        warn!("No host blocks recognized in the input");
        print::no_results();
        return Ok(());
    }

    if inventory.domain_controllers.is_empty() {
        warn!("No domain controllers found in the scan");
        info!("Make sure the scan covered the AD ports: 88, 389, 636, 445");
        export_inventory(&inventory, cfg, &artifacts::timestamp())?;
        return Ok(());
    }

    print_controllers(&inventory);

    let ts = artifacts::timestamp();

    if cfg.json_only {
        export_inventory(&inventory, cfg, &ts)?;
        print_footer(&inventory);
        return Ok(());
    }

    let options = configure(&inventory)?;
    let plan = commands::build_plan(&inventory, &options);
    print_plan(&plan);

    if prompt::confirm("Save results to files?", true)? {
        export_inventory(&inventory, cfg, &ts)?;
        let script_path = artifacts::save_commands(&plan, &cfg.output_dir, &ts)?;
        info!("Commands saved to: {}", script_path.display());
        info!("Make executable: chmod +x {}", script_path.display());
    }

    print_footer(&inventory);
    Ok(())
}

fn print_footer(inventory: &Inventory) {
    let dcs: ColoredString = format!(
        "{} domain controllers",
        inventory.domain_controllers.len()
    )
    .bold()
    .green();
    let output: String = format!("Analysis complete: {dcs} identified");

    print::fat_separator();
    print::centerln(&output);
    print::end_of_program();
}

fn parse(text: &str, cfg: &Config) -> Inventory {
    let options = ParseOptions {
        ambiguous_is_open: !cfg.strict_open,
    };

    let total = segmenter::blocks(text).count();
    if total <= progress::BAR_THRESHOLD {
        return pipeline::parse_with(text, &options);
    }

    let bar = progress::parse_bar(total);
    let handle = bar.clone();
    let inventory = pipeline::parse_with_progress(
        text,
        &options,
        Some(Box::new(move |done, _total| {
            handle.set_position(done as u64);
        })),
    );
    bar.finish_and_clear();
    inventory
}

fn print_summary(inventory: &Inventory) {
    dprint!();
    print::header("scan summary");
    print::set_key_width(&[
        "Hosts parsed",
        "Domain controllers",
        "Domains",
        "NetBIOS domains",
    ]);
    print::aligned_line(
        "Hosts parsed",
        inventory.total_hosts.to_string().bold().green(),
    );
    print::aligned_line(
        "Domain controllers",
        inventory.domain_controllers.len().to_string().bold().green(),
    );
    print::aligned_line("Domains", join_or_dash(&inventory.domains));
    print::aligned_line("NetBIOS domains", join_or_dash(&inventory.netbios_domains));
}

fn join_or_dash(values: &[String]) -> String {
    if values.is_empty() {
        String::from("-")
    } else {
        values.join(", ")
    }
}

fn print_controllers(inventory: &Inventory) {
    dprint!();
    print::header("domain controllers");
    for (idx, dc) in inventory.domain_controllers.iter().enumerate() {
        print::tree_head(idx + 1, dc.target());
        print::as_tree_one_level(format::dc_to_details(dc));
        if idx + 1 != inventory.domain_controllers.len() {
            dprint!();
        }
    }
}

fn configure(inventory: &Inventory) -> anyhow::Result<CollectorOptions> {
    dprint!();
    print::header("collection setup");

    let username = prompt::line("Username (without domain)")?;
    let password = prompt::secret("Password")?;
    let netbios_prefix = prompt::confirm("Prefix the user with the NetBIOS domain?", false)?;

    let unresolved = inventory
        .domain_controllers
        .iter()
        .filter(|dc| dc.domain.is_none())
        .count();
    let fallback_domain = if unresolved > 0 {
        warn!("{unresolved} controller(s) have no resolved domain");
        let answer = prompt::line("Fallback domain for them (empty to leave unresolved)")?;
        (!answer.is_empty()).then_some(answer)
    } else {
        None
    };

    Ok(CollectorOptions {
        username,
        password,
        netbios_prefix,
        fallback_domain,
        ..CollectorOptions::default()
    })
}

fn print_plan(plan: &CollectionPlan) {
    dprint!();
    print::header("generated commands");

    for (idx, command) in plan.commands.iter().enumerate() {
        print::tree_head(idx + 1, &format!("{} ({})", command.address, command.domain));
        for line in command.script.lines() {
            print::print(&format!("  {}", line.green()));
        }
        dprint!();
    }

    for dc in &plan.unresolved {
        warn!(
            "{}: needs manual domain, excluded from the script body",
            dc.address
        );
    }
}

fn export_inventory(inventory: &Inventory, cfg: &Config, ts: &str) -> anyhow::Result<()> {
    let path = artifacts::save_inventory(inventory, &cfg.output_dir, ts)?;
    info!("DC information saved to: {}", path.display());
    Ok(())
}

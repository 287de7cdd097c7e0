//! Exported artifacts: the JSON inventory and the generated shell script.
//! Both land in the output directory stamped with the same timestamp.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Local;
use dchound_common::directory::inventory::Inventory;
use dchound_common::error::Error;
use dchound_core::commands::CollectionPlan;
use dchound_core::export::ExportRecord;

pub fn timestamp() -> String {
    Local::now().format("%Y%m%d_%H%M%S").to_string()
}

pub fn save_inventory(inventory: &Inventory, dir: &Path, ts: &str) -> Result<PathBuf, Error> {
    let path: PathBuf = dir.join(format!("domain_controllers_{ts}.json"));

    let record = ExportRecord::new(inventory, ts);
    let json = record.to_json().map_err(|error| Error::ArtifactWrite {
        path: path.clone(),
        source: std::io::Error::other(error),
    })?;

    write_artifact(&path, dir, &json)?;
    Ok(path)
}

pub fn save_commands(plan: &CollectionPlan, dir: &Path, ts: &str) -> Result<PathBuf, Error> {
    let path: PathBuf = dir.join(format!("bloodhound_commands_{ts}.sh"));

    let mut script = String::from("#!/bin/bash\n");
    script.push_str(&format!("# BloodHound Commands - Generated {ts}\n"));
    script.push_str(&format!("# Total DCs: {}\n\n", plan.commands.len()));

    for (idx, command) in plan.commands.iter().enumerate() {
        script.push_str(&format!(
            "# DC {}: {} - {}\n",
            idx + 1,
            command.address,
            command.target
        ));
        script.push_str(&format!("# Domain: {}\n", command.domain));
        script.push_str(&command.script);
        script.push_str("\n\n");
    }

    // Unresolved controllers stay visible as annotations, never guessed.
    for dc in &plan.unresolved {
        script.push_str(&format!(
            "# DC {}: no domain resolved, supply -d manually\n",
            dc.address
        ));
    }

    write_artifact(&path, dir, &script)?;
    Ok(path)
}

fn write_artifact(path: &Path, dir: &Path, contents: &str) -> Result<(), Error> {
    fs::create_dir_all(dir).map_err(|source| Error::ArtifactWrite {
        path: path.to_path_buf(),
        source,
    })?;
    fs::write(path, contents).map_err(|source| Error::ArtifactWrite {
        path: path.to_path_buf(),
        source,
    })
}

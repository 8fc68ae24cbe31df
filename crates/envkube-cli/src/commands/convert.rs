//! Convert command - render the three artifacts from a .env file

use clap::ValueEnum;
use console::style;
use envkube_core::{parse, render_config_map, render_external_secret, render_vault_json};
use miette::{IntoDiagnostic, Result, WrapErr};
use std::fs;
use std::path::Path;

use super::{apply_overrides, read_env_file};

/// Artifact selector for `--show-only`
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Artifact {
    Configmap,
    ExternalSecret,
    Vault,
}

pub fn run(
    env_file: &Path,
    app_name: &str,
    namespace: &str,
    vault_path: &str,
    secret_keys: &[String],
    plain_keys: &[String],
    output_dir: Option<&Path>,
    show_only: Option<Artifact>,
    debug: bool,
) -> Result<()> {
    let content = read_env_file(env_file)?;

    let mut entries = parse(&content);
    apply_overrides(&mut entries, secret_keys, plain_keys)?;

    if debug {
        eprintln!(
            "{} Parsed {} entries ({} secret) from {}",
            style("DEBUG").dim(),
            entries.len(),
            entries.iter().filter(|e| e.is_secret).count(),
            env_file.display()
        );
    }

    // Derived artifact names follow the app name
    let configmap_name = format!("{app_name}-configmap");
    let secret_name = format!("{app_name}-secret");

    let configmap = render_config_map(&entries, &configmap_name, namespace);
    let external_secret = render_external_secret(&entries, &secret_name, namespace, vault_path);
    let vault_json = render_vault_json(&entries);

    let wanted = |artifact: Artifact| show_only.is_none() || show_only == Some(artifact);

    if let Some(dir) = output_dir {
        fs::create_dir_all(dir)
            .into_diagnostic()
            .wrap_err_with(|| format!("Failed to create output directory: {}", dir.display()))?;

        if wanted(Artifact::Configmap) {
            write_artifact(dir, "configmap.yaml", &configmap)?;
        }
        if wanted(Artifact::ExternalSecret) {
            write_artifact(dir, "external-secret.yaml", &external_secret)?;
        }
        if wanted(Artifact::Vault) {
            write_artifact(dir, "secrets.json", &vault_json)?;
        }
    } else if let Some(artifact) = show_only {
        // Single artifact goes out raw so it can be piped
        match artifact {
            Artifact::Configmap => print!("{configmap}"),
            Artifact::ExternalSecret => print!("{external_secret}"),
            Artifact::Vault => println!("{vault_json}"),
        }
    } else {
        print_section("ConfigMap", &configmap_name, &configmap);
        print_section("ExternalSecret", &secret_name, &external_secret);
        print_section("Vault secrets", vault_path, &vault_json);
    }

    Ok(())
}

fn write_artifact(dir: &Path, file_name: &str, content: &str) -> Result<()> {
    let path = dir.join(file_name);
    fs::write(&path, content)
        .into_diagnostic()
        .wrap_err_with(|| format!("Failed to write {}", path.display()))?;

    println!("{} {}", style("✓").green().bold(), path.display());
    Ok(())
}

fn print_section(title: &str, name: &str, body: &str) {
    println!(
        "{} {}",
        style(title).bold().cyan(),
        style(format!("({name})")).dim()
    );
    println!("{}", style("---").dim());
    println!("{}", body.trim_end());
    println!();
}

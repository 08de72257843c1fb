use std::path::PathBuf;
use std::process;

use anyhow::Result;
use clap::error::ErrorKind;
use clap::Parser;

use bump_version::rewrite::RewriteOptions;
use bump_version::version::BumpLevel;
use bump_version::{config, descriptor, rewrite, ui};

#[derive(clap::Parser)]
#[command(
    name = "bump-version",
    version,
    about = "Recursively bumps the project version in all pom.xml, feature.xml and META-INF/MANIFEST.MF files"
)]
struct Args {
    #[arg(
        value_name = "LEVEL",
        help = "Version upgrade level: major, minor or micro/patch"
    )]
    level: String,

    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(
        short = 'C',
        long,
        default_value = ".",
        help = "Root directory holding the authoritative pom.xml"
    )]
    root: PathBuf,

    #[arg(long, help = "Preview what would happen without making changes")]
    dry_run: bool,
}

fn main() -> Result<()> {
    // Usage problems exit 1; --help and --version still exit 0.
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = e.print();
            return Ok(());
        }
        Err(e) => {
            let _ = e.print();
            process::exit(1);
        }
    };

    let level: BumpLevel = match args.level.parse() {
        Ok(level) => level,
        Err(e) => {
            ui::display_error(&e.to_string());
            process::exit(1);
        }
    };

    let config = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            ui::display_error(&format!("Error loading config: {}", e));
            process::exit(1);
        }
    };

    ui::display_status("Determining current version...");
    let descriptor = match descriptor::read_root_descriptor(&args.root) {
        Ok(descriptor) => descriptor,
        Err(e) => {
            ui::display_error(&e.to_string());
            process::exit(1);
        }
    };

    let old_version = descriptor.version;
    let new_version = old_version.bump(level);
    println!("Current version: {}", old_version);
    println!("New version: {}", new_version);

    let bundle_prefix = match config.bundle_prefix.or(descriptor.group_id) {
        Some(prefix) => prefix,
        None => {
            ui::display_error(
                "Cannot determine bundle namespace prefix: root pom.xml has no <groupId> \
                 and no bundle_prefix is configured",
            );
            process::exit(1);
        }
    };

    let options = RewriteOptions {
        bundle_prefix,
        exclude_dirs: config.exclude_dirs,
        dry_run: args.dry_run,
    };

    let updated =
        match rewrite::apply_version_bump(&args.root, &old_version, &new_version, &options) {
            Ok(updated) => updated,
            Err(e) => {
                ui::display_error(&e.to_string());
                process::exit(1);
            }
        };

    let verb = if args.dry_run { "Would update" } else { "Updated" };
    for path in &updated {
        ui::display_status(&format!("{} [{}]", verb, path.display()));
    }
    ui::display_success(&format!(
        "{} {} file(s): {} -> {}",
        verb,
        updated.len(),
        old_version,
        new_version
    ));

    Ok(())
}

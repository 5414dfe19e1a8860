use clap::{crate_authors, crate_description, crate_name, crate_version, Arg, ArgAction, Command};
use std::path::PathBuf;

// The CLI layer should only parse inputs and forward them to library code.
fn main() -> miette::Result<()> {
    let matches = Command::new(crate_name!())
        .about(crate_description!())
        .author(crate_authors!())
        .version(crate_version!())
        .arg(
            Arg::new("root")
                .help(
                    "Directory the lib/ tree is created in. Defaults to the directory holding \
                     the executable, which under `cargo run` is target/debug/",
                )
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose output")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("preview")
                .short('p')
                .long("preview")
                .help("Print the tree that would be created without writing anything")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    let default_level = if matches.get_flag("verbose") {
        "debug"
    } else {
        "warn"
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let root = match matches.get_one::<PathBuf>("root") {
        Some(root) => root.clone(),
        None => busease_scaffold::default_root()?,
    };

    if matches.get_flag("preview") {
        busease_scaffold::preview_file_structure(Some(&root));
    } else {
        busease_scaffold::create_file_structure(Some(&root));
    }

    Ok(())
}

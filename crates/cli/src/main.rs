use std::io::{stdin, stdout, Write};
use std::process::ExitCode;

use clap::Parser;
use dbshift_cli::cli_args::Args;
use dbshift_cli::connection_choice::{
    enter_new_connection_from, preset_endpoints, preset_options, NewConnectionOptions,
    PresetChoice,
};
use dbshift_core::config;
use dbshift_core::endpoints::Endpoints;
use dbshift_core::error::Result;
use dbshift_core::presets::PresetStore;
use dbshift_core::select::ui::clear_screen;
use dbshift_core::select::{self, Outcome};
use log::{debug, info};

/// Prompt for a new connection on the process stdin/stdout
fn enter_new_connection(args: &Args, store: &mut PresetStore) -> Result<Endpoints> {
    let options = NewConnectionOptions {
        default_source: args.source.as_deref(),
        default_target: args.target.as_deref(),
        skip_save: args.skip_save,
    };

    enter_new_connection_from(&mut stdin().lock(), &mut stdout(), store, &options)
}

/// Determine the endpoints from arguments, a saved preset, or prompts.
/// `None` means the user cancelled.
fn choose_endpoints(args: &Args, store: &mut PresetStore) -> Result<Option<Endpoints>> {
    if let (Some(source), Some(target)) = (&args.source, &args.target) {
        debug!("Using endpoints given on the command line");
        return Endpoints::new(source, target).map(Some);
    }

    if store.list().is_empty() {
        info!("No saved connections in `{}`", store.path());
        return enter_new_connection(args, store).map(Some);
    }

    let options = preset_options(store.list())?;

    let mut stdout = stdout();
    clear_screen(&mut stdout)?;
    stdout.flush()?;
    println!("Choose a connection (Up/Down to move, Enter to select, Ctrl+C to cancel):");

    match select::select(&options)? {
        Outcome::Cancelled => Ok(None),
        Outcome::Selected(option) => match option.value {
            PresetChoice::Existing(id) => preset_endpoints(store, id).map(Some),
            PresetChoice::CreateNew => enter_new_connection(args, store).map(Some),
        },
    }
}

fn execute() -> Result<()> {
    let args = Args::parse();

    let presets_path = config::get_presets_path(&args.presets_path);
    debug!("Presets path: `{presets_path}`");

    let mut store = PresetStore::open(&presets_path)?;

    let Some(endpoints) = choose_endpoints(&args, &mut store)? else {
        println!("Selection cancelled.");
        return Ok(());
    };

    info!(
        "Chosen endpoints: {} -> {}",
        endpoints.source_url, endpoints.target_url
    );
    println!("Source: {}", endpoints.source_url);
    println!("Target: {}", endpoints.target_url);

    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    match execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

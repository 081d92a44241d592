use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use vk2dik::config::OverrideConfig;
use vk2dik::{set1, KeyboardLayout, OverrideTable, Result, Translator, VirtualKeyCode};

/// Print the DirectInput scan code of each virtual key
#[derive(Parser, Debug)]
#[clap(version, long_about = None)]
struct Options {
    /// JSON file with extra override pairs
    #[clap(long, value_parser)]
    overrides: Option<PathBuf>,

    /// Virtual keys: `VK_UP`, `UP`, `0x26` or `38`
    #[clap(required = true)]
    keys: Vec<VirtualKeyCode>,
}

#[cfg(windows)]
fn layout() -> impl KeyboardLayout {
    vk2dik::SystemLayout
}

#[cfg(not(windows))]
fn layout() -> impl KeyboardLayout {
    log::warn!("no system keyboard layout on this platform, only overrides apply");
    vk2dik::Unmapped
}

fn run(options: Options) -> Result<()> {
    let table = match &options.overrides {
        Some(path) => OverrideConfig::load(path)?.into_table()?,
        None => OverrideTable::builtin().clone(),
    };
    let translator = Translator::with_overrides(layout(), table);

    for vk in options.keys {
        let scan = translator.translate(vk);
        match set1::describe(scan) {
            Some(key) => println!("{vk} ({:#04x}) -> {scan} ({:#04x}) [{key:?}]", vk.0, scan.0),
            None => println!("{vk} ({:#04x}) -> {scan} ({:#04x})", vk.0, scan.0),
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    match run(Options::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err}");
            ExitCode::FAILURE
        }
    }
}

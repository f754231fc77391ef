use anyhow::{Context, Result};
use nexus_site::catalog::{self, CATALOG_NAMES};
use nexus_site::config::Config;
use nexus_site::constants::{ERROR_LOCALES_INCOMPLETE, LOCALES_OK};
use nexus_site::i18n::Translator;
use nexus_site::logger::Logger;
use nexus_site::preferences::Language;
use nexus_site::ui;

const USAGE: &str = "Usage: nexus [--generate-config [PATH]] [--check-locales] [--export CATALOG] [--help]";

#[tokio::main]
async fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();

    match args.first().map(String::as_str) {
        Some("--help" | "-h") => {
            println!("{USAGE}");
            println!("Catalogs: {}", CATALOG_NAMES.join(", "));
            Ok(())
        }
        Some("--generate-config") => {
            let path = match args.get(1) {
                Some(path) => path.into(),
                None => Config::get_default_config_path()?,
            };
            Config::generate_default_config(path)
        }
        Some("--check-locales") => check_locales(),
        Some("--export") => {
            let name = args.get(1).context("--export needs a catalog name")?;
            println!("{}", catalog::export_json(name)?);
            Ok(())
        }
        Some(other) => {
            eprintln!("❌ Unknown argument: {other}");
            eprintln!("{USAGE}");
            std::process::exit(2);
        }
        None => {
            let config = Config::load()?;
            Logger::init(&config.logging)?;
            ui::run_app(config).await
        }
    }
}

fn check_locales() -> Result<()> {
    match Translator::builtin() {
        Ok(translator) => {
            println!("{LOCALES_OK}");
            for language in Language::ALL {
                println!("  {}: {} keys", language.native_name(), translator.key_count(language));
            }
            Ok(())
        }
        Err(e) => {
            eprintln!("{ERROR_LOCALES_INCOMPLETE}: {e}");
            std::process::exit(1);
        }
    }
}

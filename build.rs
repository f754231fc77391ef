//! Build-time completeness check for the embedded translation dictionaries.
//!
//! Every file under `locales/` must define exactly the same set of dotted keys
//! as `locales/en.toml`. A mismatch fails the build and lists the offending keys.

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

const LOCALES_DIR: &str = "locales";
const REFERENCE_LOCALE: &str = "en";
const LOCALES: [&str; 3] = ["en", "fr", "es"];

fn main() {
    println!("cargo:rerun-if-changed={LOCALES_DIR}");

    let reference = load_keys(REFERENCE_LOCALE);
    let mut problems = Vec::new();

    for code in LOCALES.iter().filter(|code| **code != REFERENCE_LOCALE) {
        println!("cargo:rerun-if-changed={LOCALES_DIR}/{code}.toml");
        let keys = load_keys(code);

        for missing in reference.difference(&keys) {
            problems.push(format!("{code}: missing key '{missing}'"));
        }
        for extra in keys.difference(&reference) {
            problems.push(format!("{code}: unexpected key '{extra}' (not in {REFERENCE_LOCALE})"));
        }
    }

    if !problems.is_empty() {
        panic!("translation dictionaries are incomplete:\n  {}", problems.join("\n  "));
    }
}

fn load_keys(code: &str) -> BTreeSet<String> {
    let path = Path::new(LOCALES_DIR).join(format!("{code}.toml"));
    let content = fs::read_to_string(&path).unwrap_or_else(|e| panic!("failed to read {}: {e}", path.display()));
    let table: toml::Table = content
        .parse()
        .unwrap_or_else(|e| panic!("failed to parse {}: {e}", path.display()));

    let mut keys = BTreeSet::new();
    collect_keys("", &table, &mut keys);
    keys
}

fn collect_keys(prefix: &str, table: &toml::Table, keys: &mut BTreeSet<String>) {
    for (name, value) in table {
        let path = if prefix.is_empty() {
            name.clone()
        } else {
            format!("{prefix}.{name}")
        };
        match value {
            toml::Value::Table(nested) => collect_keys(&path, nested, keys),
            _ => {
                keys.insert(path);
            }
        }
    }
}

//! Generate the Markdown selector reference from `nextname_core::registry`.
//!
//! ## Notes
//! - The output (`docs/reference/schemes.md`) is a derived artifact; update the registry, not the Markdown.
//!
//! ## Examples
//! Run from the workspace root:
//! ```bash
//! cargo run -p nextname_core --bin generate_scheme_reference
//! ```
//!
//! ## Panics
//! - If the workspace root cannot be resolved.
//! - If the output file cannot be written.

use std::fs;
use std::path::{Path, PathBuf};

use nextname_core::registry::SELECTORS;
use nextname_core::scheme::words::{GREEK_LETTER_NAMES, LEGACY_ICAO_PHONETIC, NATO_PHONETIC, WordList};

fn main() {
    let root = workspace_root();

    let out_dir = root.join("docs/reference");
    fs::create_dir_all(&out_dir).expect("create docs/reference/");

    write_scheme_reference(&out_dir.join("schemes.md"));
}

fn write_scheme_reference(path: &Path) {
    let mut out = String::new();
    out.push_str("# Numbering scheme reference\n\n");
    out.push_str("> Generated file. Do not edit by hand; regenerate with\n");
    out.push_str("> `cargo run -p nextname_core --bin generate_scheme_reference`.\n\n");

    render_selectors_section(&mut out);
    render_word_list_section(&mut out, "Greek letter names (`%w`, `%W`)", &GREEK_LETTER_NAMES);
    render_word_list_section(&mut out, "NATO phonetic alphabet (`%p`, `%P`)", &NATO_PHONETIC);
    render_word_list_section(&mut out, "Legacy phonetic alphabet (`%l`, `%L`)", &LEGACY_ICAO_PHONETIC);

    fs::write(path, out).expect("write schemes.md");
}

fn render_selectors_section(out: &mut String) {
    out.push_str("## Selectors\n\n");
    out.push_str("| Selector | Scheme | Width form | Description | Sample |\n");
    out.push_str("|---|---|---|---|---|\n");

    for info in SELECTORS {
        let width = if info.scheme.is_width_capable() {
            format!("`%05{}`", info.selector)
        } else {
            String::new()
        };
        out.push_str(&format!(
            "| `%{}` | {} | {} | {} | {} |\n",
            info.selector,
            info.scheme,
            width,
            escape_cell(info.summary),
            escape_cell(info.sample),
        ));
    }
    out.push('\n');
}

fn render_word_list_section(out: &mut String, heading: &str, list: &WordList) {
    out.push_str(&format!("## {heading}\n\n"));
    out.push_str("| Ordinal | Word |\n");
    out.push_str("|---|---|\n");

    for (idx, word) in list.words.iter().enumerate() {
        out.push_str(&format!("| {} | `{}` |\n", idx + 1, word));
    }
    out.push('\n');
}

fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|")
}

fn workspace_root() -> PathBuf {
    // crates/nextname_core -> crates -> workspace root
    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    manifest_dir
        .parent()
        .and_then(|p| p.parent())
        .map(|p| p.to_path_buf())
        .expect("workspace root (two levels above crates/nextname_core)")
}

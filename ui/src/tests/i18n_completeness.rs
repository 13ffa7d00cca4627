use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the canonical FTL file per language.
const FTL_FILENAME: &str = "portfolio-ui.ftl";

/// Root (relative to crate) for i18n assets.
const I18N_DIR: &str = "i18n";

const LANGUAGES: [&str; 2] = ["ar", "en"];

/// Call sites whose first string literal is a message id.
const CALL_NEEDLES: [&str; 2] = [".t(\"", ".t_with(\""];

/// Message id namespaces. Inside `core/` and `components/` every literal in
/// one of these namespaces is a message id (label keys, nav tables, fallback
/// lookups). Views also use these prefixes for element ids and classes, so
/// there only the call needles count.
const KEY_PREFIXES: [&str; 7] = [
    "nav-",
    "hero-",
    "projects-",
    "achievements-",
    "contact-",
    "mail-",
    "status-",
];
const LITERAL_DIRS: [&str; 2] = ["core", "components"];

fn parse_ftl_keys(content: &str) -> BTreeSet<String> {
    content
        .lines()
        .filter(|line| !line.starts_with([' ', '\t', '#', '-', '.']))
        .filter_map(|line| line.split_once('='))
        .map(|(id, _)| id.trim())
        .filter(|id| !id.is_empty() && id.chars().all(valid_key_char))
        .map(str::to_string)
        .collect()
}

fn valid_key_char(c: char) -> bool {
    matches!(c, 'a'..='z' | '0'..='9' | '-')
}

/// Every `"..."` literal in `content`, in order. Escapes are skipped, raw
/// strings are not special-cased (none of our ids need them).
fn string_literals(content: &str) -> Vec<(usize, &str)> {
    let bytes = content.as_bytes();
    let mut out = Vec::new();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] != b'"' {
            i += 1;
            continue;
        }
        let start = i + 1;
        let mut j = start;
        while j < bytes.len() && bytes[j] != b'"' {
            j += if bytes[j] == b'\\' { 2 } else { 1 };
        }
        if j >= bytes.len() {
            break;
        }
        out.push((i, &content[start..j]));
        i = j + 1;
    }
    out
}

fn rust_files(root: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();
    let mut stack = vec![root.to_path_buf()];
    while let Some(path) = stack.pop() {
        if path.is_dir() {
            // Our own fixtures would otherwise count as references.
            if path.file_name().and_then(|s| s.to_str()) == Some("tests") {
                continue;
            }
            if let Ok(read_dir) = fs::read_dir(&path) {
                stack.extend(read_dir.flatten().map(|entry| entry.path()));
            }
        } else if path.extension().and_then(|s| s.to_str()) == Some("rs") {
            files.push(path);
        }
    }
    files.sort();
    files
}

/// Message ids referenced from the crate sources.
fn referenced_keys(src_root: &Path) -> BTreeSet<String> {
    let mut found = BTreeSet::new();

    for path in rust_files(src_root) {
        let Ok(content) = fs::read_to_string(&path) else {
            continue;
        };
        // `#[cfg(test)]` modules sit at the end of each file and use
        // deliberately unknown ids.
        let content = match content.find("#[cfg(test)]") {
            Some(pos) => &content[..pos],
            None => content.as_str(),
        };
        let literal_scan = path
            .strip_prefix(src_root)
            .ok()
            .and_then(|rel| rel.components().next())
            .and_then(|first| first.as_os_str().to_str())
            .is_some_and(|first| LITERAL_DIRS.contains(&first));

        for (quote, literal) in string_literals(content) {
            if !literal.chars().all(valid_key_char) {
                continue;
            }
            let via_call = CALL_NEEDLES
                .iter()
                .any(|needle| content[..=quote].ends_with(needle));
            let via_prefix = literal_scan && KEY_PREFIXES.iter().any(|p| literal.starts_with(p));
            if via_call || via_prefix {
                found.insert(literal.to_string());
            }
        }
    }

    found
}

fn load_keys(i18n_root: &Path, lang: &str) -> BTreeSet<String> {
    let path = i18n_root.join(lang).join(FTL_FILENAME);
    let content = fs::read_to_string(&path)
        .unwrap_or_else(|err| panic!("Failed to read {}: {err}", path.display()));
    let keys = parse_ftl_keys(&content);
    assert!(!keys.is_empty(), "No message keys parsed from {}", path.display());
    keys
}

#[test]
fn i18n_completeness() {
    let crate_root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let i18n_root = crate_root.join(I18N_DIR);
    let referenced = referenced_keys(&crate_root.join("src"));
    assert!(
        referenced.contains("nav-home") && referenced.contains("mail-subject"),
        "source scan found too little: {referenced:?}"
    );

    let mut report = String::new();
    for lang in LANGUAGES {
        let keys = load_keys(&i18n_root, lang);
        let missing: Vec<_> = referenced.iter().filter(|k| !keys.contains(*k)).collect();
        if !missing.is_empty() {
            report.push_str(&format!("  {lang} ({} missing)\n", missing.len()));
            for key in missing {
                report.push_str(&format!("    {key}\n"));
            }
        }
    }
    if !report.is_empty() {
        panic!("Referenced message ids missing from dictionaries:\n{report}");
    }

    let ar = load_keys(&i18n_root, "ar");
    let unused: Vec<_> = ar.iter().filter(|k| !referenced.contains(*k)).collect();
    if !unused.is_empty() {
        eprintln!(
            "[i18n] NOTE: {} keys not referenced from Rust sources: {}",
            unused.len(),
            unused
                .iter()
                .map(|k| k.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        );
    }
}

#[test]
fn literal_scanner_handles_escapes() {
    let literals: Vec<_> = string_literals(r#"a("x\"y", "nav-home")"#)
        .into_iter()
        .map(|(_, s)| s)
        .collect();
    assert_eq!(literals, [r#"x\"y"#, "nav-home"]);
}

//! Fill untranslated locale entries from sibling addon projects.
//!
//! Addon locale files are Lua scripts named after their language
//! (`deDE.lua`, `zhCN.lua`, ...) with one entry per line:
//!
//! ```lua
//! L["Enable"] = "Aktivieren"
//! L["Minimap"] = true
//! ```
//!
//! `= true` marks an untranslated string. Synchronization collects real
//! translations from the target project and from other projects, then
//! rewrites each placeholder whose key has one.

use crate::error::LocaleError;
use indexmap::IndexMap;
use regex::Regex;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

/// Key → translated text, in file order
pub type Translations = IndexMap<String, String>;

/// `L["key"] = true`, anywhere on the line
fn placeholder_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"L\[\s*["']([\s\S]*?)["']\s*\] = true"#).expect("valid placeholder regex")
    })
}

/// `L["key"] = "value"` at the start of a line, either quote style on
/// either side. Escapes inside the strings are kept verbatim.
fn translation_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(concat!(
            r#"^\s*L\[\s*(?:"((?:[^"\\]|\\.)*)"|'((?:[^'\\]|\\.)*)')\s*\]"#,
            r#"\s*=\s*(?:"((?:[^"\\]|\\.)*)"|'((?:[^'\\]|\\.)*)')"#,
        ))
        .expect("valid translation regex")
    })
}

/// Rewrite the body of a single-quoted Lua string for use between double quotes.
fn requote_single(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(c) = chars.next() {
        match c {
            '\\' => match chars.next() {
                Some('\'') => out.push('\''),
                Some(next) => {
                    out.push('\\');
                    out.push(next);
                }
                None => out.push('\\'),
            },
            '"' => out.push_str("\\\""),
            _ => out.push(c),
        }
    }
    out
}

/// Extract the translated entries of a locale file. Placeholders are skipped.
pub fn read_translations(text: &str) -> Translations {
    let mut translations = Translations::new();
    for line in text.lines() {
        let Some(caps) = translation_re().captures(line) else {
            continue;
        };
        let key = match (caps.get(1), caps.get(2)) {
            (Some(k), _) => k.as_str().to_string(),
            (None, Some(k)) => k.as_str().to_string(),
            (None, None) => continue,
        };
        let value = match (caps.get(3), caps.get(4)) {
            (Some(v), _) => v.as_str().to_string(),
            (None, Some(v)) => requote_single(v.as_str()),
            (None, None) => continue,
        };
        translations.insert(key, value);
    }
    translations
}

/// Replace every placeholder line whose key has a translation.
///
/// Other lines, including their line endings, are kept byte-for-byte.
/// Returns the new text and the number of lines replaced.
pub fn patch_locale_text(text: &str, translations: &Translations) -> (String, usize) {
    let mut out = String::with_capacity(text.len());
    let mut patched = 0usize;

    for line in text.split_inclusive('\n') {
        let replacement = placeholder_re()
            .captures(line)
            .and_then(|caps| {
                let key = caps.get(1)?.as_str();
                translations.get(key).map(|value| (key, value))
            });

        match replacement {
            Some((key, value)) => {
                let ending = if line.ends_with("\r\n") {
                    "\r\n"
                } else if line.ends_with('\n') {
                    "\n"
                } else {
                    ""
                };
                out.push_str(&format!("L[\"{key}\"] = \"{value}\"{ending}"));
                patched += 1;
            }
            None => out.push_str(line),
        }
    }

    (out, patched)
}

/// All `*.lua` files directly inside `dir`, keyed by language code (file stem).
pub fn list_locale_files(dir: &Path) -> Result<BTreeMap<String, PathBuf>, LocaleError> {
    let read_dir_err = |source: std::io::Error| LocaleError::ReadDir {
        path: dir.to_path_buf(),
        source,
    };

    let mut files = BTreeMap::new();
    for entry in std::fs::read_dir(dir).map_err(read_dir_err)? {
        let path = entry.map_err(read_dir_err)?.path();
        if !path.is_file() || path.extension().and_then(|e| e.to_str()) != Some("lua") {
            continue;
        }
        if let Some(lang) = path.file_stem().and_then(|s| s.to_str()) {
            files.insert(lang.to_string(), path.clone());
        }
    }
    Ok(files)
}

fn read_file(path: &Path) -> Result<String, LocaleError> {
    std::fs::read_to_string(path).map_err(|source| LocaleError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Known translations for every language of the target project
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LocaleDatabase {
    locales: BTreeMap<String, Translations>,
}

impl LocaleDatabase {
    /// Load the translations already present in the given locale files.
    pub fn from_files(files: &BTreeMap<String, PathBuf>) -> Result<Self, LocaleError> {
        let mut locales = BTreeMap::new();
        for (lang, path) in files {
            let translations = read_translations(&read_file(path)?);
            tracing::debug!(%lang, entries = translations.len(), "Loaded target locale");
            locales.insert(lang.clone(), translations);
        }
        Ok(Self { locales })
    }

    /// Add translations from `<dir>/<lang>.lua` for each known language.
    ///
    /// Keys that already have a translation keep it. Languages without a
    /// file in `dir` are skipped. Returns the number of entries added.
    pub fn merge_dir(&mut self, dir: &Path) -> Result<usize, LocaleError> {
        let mut added = 0usize;
        for (lang, known) in &mut self.locales {
            let path = dir.join(format!("{lang}.lua"));
            if !path.is_file() {
                tracing::debug!(%lang, dir = %dir.display(), "No source locale file");
                continue;
            }
            for (key, value) in read_translations(&read_file(&path)?) {
                if !known.contains_key(&key) {
                    known.insert(key, value);
                    added += 1;
                }
            }
        }
        tracing::info!(dir = %dir.display(), added, "Merged translations");
        Ok(added)
    }

    pub fn get(&self, lang: &str) -> Option<&Translations> {
        self.locales.get(lang)
    }

    pub fn languages(&self) -> impl Iterator<Item = &str> {
        self.locales.keys().map(String::as_str)
    }
}

/// Outcome of [`sync_locales`]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SyncReport {
    /// Patched placeholder count per language
    pub patched: BTreeMap<String, usize>,
}

impl SyncReport {
    pub fn total(&self) -> usize {
        self.patched.values().sum()
    }
}

/// Patch every locale file in `target_dir` with translations found in the
/// target itself and in `source_dirs` (earlier sources take priority).
pub fn sync_locales(target_dir: &Path, source_dirs: &[PathBuf]) -> Result<SyncReport, LocaleError> {
    let files = list_locale_files(target_dir)?;
    let mut database = LocaleDatabase::from_files(&files)?;
    for dir in source_dirs {
        database.merge_dir(dir)?;
    }

    let mut report = SyncReport::default();
    for (lang, path) in &files {
        let Some(translations) = database.get(lang) else {
            continue;
        };
        let text = read_file(path)?;
        let (patched_text, patched) = patch_locale_text(&text, translations);
        if patched > 0 {
            std::fs::write(path, patched_text).map_err(|source| LocaleError::Write {
                path: path.clone(),
                source,
            })?;
        }
        tracing::info!(%lang, patched, "Synchronized locale");
        report.patched.insert(lang.clone(), patched);
    }
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn translations(pairs: &[(&str, &str)]) -> Translations {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_read_translations() {
        let text = r#"local L = ElvUI[1].Libs.ACL:NewLocale("ElvUI", "deDE")

L["Enable"] = "Aktivieren"
L[ 'Minimap' ] = true
  L['Size'] = 'Größe'
L["Quote"] = "Say \"hi\""
-- L["Commented"] = "Nope"
"#;
        let result = read_translations(text);

        assert_eq!(
            result,
            translations(&[
                ("Enable", "Aktivieren"),
                ("Size", "Größe"),
                ("Quote", r#"Say \"hi\""#),
            ])
        );
    }

    #[test]
    fn test_read_translations_single_quoted_value_requoted() {
        let result = read_translations(r#"L['Title'] = 'It\'s "on"'"#);
        assert_eq!(result.get("Title").map(String::as_str), Some(r#"It's \"on\""#));
    }

    #[test]
    fn test_patch_locale_text() {
        let text = "\
local L = ...
L[\"Enable\"] = true
L[\"Unknown\"] = true
L[\"Size\"] = \"Taille\"
";
        let known = translations(&[("Enable", "Activer"), ("Size", "Größe")]);

        let (patched, count) = patch_locale_text(text, &known);

        assert_eq!(count, 1);
        assert_eq!(
            patched,
            "\
local L = ...
L[\"Enable\"] = \"Activer\"
L[\"Unknown\"] = true
L[\"Size\"] = \"Taille\"
"
        );
    }

    #[test]
    fn test_patch_normalizes_placeholder_quoting() {
        let text = "L[ 'Enable' ] = true\r\nL['Other'] = true";
        let known = translations(&[("Enable", "Activer"), ("Other", "Autre")]);

        let (patched, count) = patch_locale_text(text, &known);

        assert_eq!(count, 2);
        assert_eq!(patched, "L[\"Enable\"] = \"Activer\"\r\nL[\"Other\"] = \"Autre\"");
    }

    #[test]
    fn test_patch_without_translations_is_identity() {
        let text = "L[\"A\"] = true\n\n-- comment\r\nL[\"B\"] = \"b\"";
        let (patched, count) = patch_locale_text(text, &Translations::new());
        assert_eq!(count, 0);
        assert_eq!(patched, text);
    }

    #[test]
    fn test_requote_single() {
        assert_eq!(requote_single(r"plain"), "plain");
        assert_eq!(requote_single(r"it\'s"), "it's");
        assert_eq!(requote_single(r#"a "b""#), r#"a \"b\""#);
        assert_eq!(requote_single(r"line\nbreak"), r"line\nbreak");
        assert_eq!(requote_single("trailing\\"), "trailing\\");
    }

    #[test]
    fn test_list_locale_files() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("deDE.lua"), "").unwrap();
        std::fs::write(dir.path().join("zhCN.lua"), "").unwrap();
        std::fs::write(dir.path().join("Locales.xml"), "").unwrap();
        std::fs::create_dir(dir.path().join("nested.lua")).unwrap();

        let files = list_locale_files(dir.path()).unwrap();

        assert_eq!(files.keys().collect::<Vec<_>>(), vec!["deDE", "zhCN"]);
        assert_eq!(files["deDE"], dir.path().join("deDE.lua"));
    }

    #[test]
    fn test_list_locale_files_missing_dir() {
        let dir = tempfile::tempdir().unwrap();
        let result = list_locale_files(&dir.path().join("missing"));
        assert!(matches!(result, Err(LocaleError::ReadDir { .. })));
    }

    #[test]
    fn test_report_total() {
        let mut report = SyncReport::default();
        report.patched.insert("deDE".to_string(), 2);
        report.patched.insert("frFR".to_string(), 3);
        assert_eq!(report.total(), 5);
    }
}

//! Test fixtures and constants.

use std::path::{Path, PathBuf};

/// Stylesheet excerpts in the shape Tailwind ships its palette
pub mod css {
    /// Two names sharing the override color
    pub const TWO_PALE_REDS: &str = "\
--color-red-50: oklch(97.1% 0.013 17.38);
--color-blue-50: oklch(97.1% 0.013 17.38);
";

    /// A theme block with colors mixed among other declarations
    pub const THEME_BLOCK: &str = "\
@theme {
  --font-sans: ui-sans-serif, system-ui, sans-serif;

  --color-red-50: oklch(97.1% 0.013 17.38);
  --color-red-500: oklch(63.7% 0.237 25.331);
  --color-green-500: oklch(72.3% 0.219 149.579);
  --color-blue-500: oklch(62.3% 0.214 259.815);
  --color-bad: notacolor;
  --color-black: #000;
  --color-white: #fff;
  --color-neutral-50: oklch(98.5% 0 0);

  --spacing: 0.25rem;
}
";

    /// Same name declared twice with different values
    pub const DUPLICATE_NAME: &str = "\
--color-accent: oklch(63.7% 0.237 25.331);
--color-ink: oklch(0% 0 0);
--color-accent: oklch(62.3% 0.214 259.815);
";
}

/// Locale file contents for a target addon and a sibling project
pub mod locales {
    pub const TARGET_DE: &str = "\
local L = LibStub(\"AceLocale-3.0\"):NewLocale(\"MyAddon\", \"deDE\")
if not L then return end

L[\"Enable\"] = \"Einschalten\"
L[\"Minimap\"] = true
L[\"Size\"] = true
L[\"Unknown Option\"] = true
";

    pub const TARGET_FR: &str = "\
local L = LibStub(\"AceLocale-3.0\"):NewLocale(\"MyAddon\", \"frFR\")
L[\"Minimap\"] = true
";

    pub const SOURCE_DE: &str = "\
L[\"Enable\"] = \"Aktivieren\"
L[\"Minimap\"] = \"Minikarte\"
L[\"Size\"] = true
";

    pub const SECOND_SOURCE_DE: &str = "\
L[\"Minimap\"] = \"Karte\"
L[\"Size\"] = \"Größe\"
";
}

/// Write `contents` to `dir/name`, creating `dir` first.
pub fn write_file(dir: &Path, name: &str, contents: &str) -> PathBuf {
    std::fs::create_dir_all(dir).unwrap();
    let path = dir.join(name);
    std::fs::write(&path, contents).unwrap();
    path
}

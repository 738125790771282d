pub mod color_table;
pub mod css_parser;
pub mod locale_sync;
pub mod mask_generator;

pub use color_table::{convert_file, ColorTable, ConversionReport};
pub use css_parser::{convert_css_line, parse_css_line, parse_oklch};
pub use locale_sync::{sync_locales, LocaleDatabase, SyncReport, Translations};
pub use mask_generator::{generate_masks, render_mask, MaskOptions};

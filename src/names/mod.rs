//! Name records and the parser that produces them.

mod kana;
mod parser;
mod record;

pub use kana::{is_katakana_letter, kata_to_hira};
pub use parser::{NameParser, NotAName};
pub use record::{NameList, NameRecord};

mod en;
mod ro;

use std::collections::HashMap;
use std::sync::OnceLock;

pub type Table = HashMap<&'static str, &'static str>;

static EN: OnceLock<Table> = OnceLock::new();
static RO: OnceLock<Table> = OnceLock::new();

pub fn english() -> &'static Table {
    EN.get_or_init(|| en::ENTRIES.iter().copied().collect())
}

pub fn romanian() -> &'static Table {
    RO.get_or_init(|| ro::ENTRIES.iter().copied().collect())
}

use std::sync::OnceLock;

use regex::Regex;

use super::models::WithId;
use super::ops::find_index;
use crate::{Error, Result};

/// Leading bullet such as `- `, `* `, `  - [ ] ` or `* [x] `
fn list_marker() -> &'static Regex {
    static MARKER: OnceLock<Regex> = OnceLock::new();
    MARKER.get_or_init(|| Regex::new(r"^\W*(-|\*) (\[( |x)\] )?").expect("list marker regex is valid"))
}

/// Split pasted text into list item texts.
///
/// Bullets and checkboxes are stripped, lines are trimmed and blank lines dropped.
pub fn parse_clipboard(text: &str) -> Vec<String> {
    text.split('\n')
        .map(|line| list_marker().replace(line, ""))
        .map(|line| line.trim().to_string())
        .filter(|line| !line.is_empty())
        .collect()
}

/// Paste multi-line text into the item with `id`.
///
/// The first line replaces the item's text through `update`; every further
/// line becomes a new item built by `new(item, text)` and placed after it, in
/// the pasted order.
pub fn paste<T, U, N>(collection: &mut Vec<T>, id: &str, clipboard: &str, update: U, mut new: N) -> Result<()>
where
    T: WithId,
    U: FnOnce(&mut T, &str),
    N: FnMut(&T, &str) -> T,
{
    let idx = find_index(collection, id).ok_or_else(|| Error::ItemNotFound(id.to_string()))?;

    let lines = parse_clipboard(clipboard);
    let Some((first, rest)) = lines.split_first() else {
        return Ok(());
    };

    let created: Vec<T> = rest.iter().map(|text| new(&collection[idx], text.as_str())).collect();
    update(&mut collection[idx], first.as_str());
    collection.splice(idx + 1..idx + 1, created);

    tracing::debug!("Pasted {} line(s) into {}", lines.len(), id);
    Ok(())
}

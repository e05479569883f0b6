use std::io::Read;

use anyhow::Result;

use noteboard_core::list::{self, parse_clipboard, Bookmark, Todo};

pub fn run(bookmarks: bool) -> Result<()> {
    let mut clipboard = String::new();
    std::io::stdin().read_to_string(&mut clipboard)?;

    let json = if bookmarks {
        let records: Vec<Bookmark> = parse_clipboard(&clipboard).into_iter().map(Bookmark::new).collect();
        serde_json::to_string_pretty(&records)?
    } else {
        serde_json::to_string_pretty(&paste_into_new_todo(&clipboard)?)?
    };

    println!("{}", json);
    Ok(())
}

/// Paste into a fresh empty todo, the way pasting into a new list line works
fn paste_into_new_todo(clipboard: &str) -> Result<Vec<Todo>> {
    let target = Todo::new(None, "");
    let id = target.id.clone();
    let mut todos = vec![target];

    list::paste(
        &mut todos,
        &id,
        clipboard,
        |todo, text| todo.text = text.to_string(),
        |after, text| Todo::new(Some(after), text),
    )?;

    tracing::debug!("Parsed {} todos from stdin", todos.len());
    Ok(todos)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paste_into_new_todo() {
        let todos = paste_into_new_todo("- [ ] one\n- [x] two\n").unwrap();
        let texts: Vec<&str> = todos.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["one", "two"]);
        assert!(todos.iter().all(|t| !t.is_completed));
    }

    #[test]
    fn test_empty_input_keeps_blank_todo() {
        let todos = paste_into_new_todo("").unwrap();
        assert_eq!(todos.len(), 1);
        assert_eq!(todos[0].text, "");
    }
}

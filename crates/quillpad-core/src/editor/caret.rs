//! Splicing text into a draft at a character-offset selection.

use crate::ports::Selection;

/// Byte index of the `char_offset`-th character, or `s.len()` past the end.
fn byte_index(s: &str, char_offset: usize) -> usize {
    s.char_indices()
        .nth(char_offset)
        .map(|(i, _)| i)
        .unwrap_or(s.len())
}

/// Replace `selection` in `content` with `text`.
///
/// Returns the new content and the caret offset just past the inserted text.
/// Offsets beyond the end of `content` are clamped to it.
pub fn splice(content: &str, selection: Selection, text: &str) -> (String, usize) {
    let len = content.chars().count();
    let selection = selection.clamp(len);
    let start = byte_index(content, selection.start());
    let end = byte_index(content, selection.end());

    let mut next = String::with_capacity(content.len() - (end - start) + text.len());
    next.push_str(&content[..start]);
    next.push_str(text);
    next.push_str(&content[end..]);

    (next, selection.start() + text.chars().count())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_at_end() {
        let text = "\n![image](http://x/y.png)\n";
        let (next, caret) = splice("hello", Selection::collapsed(5), text);
        assert_eq!(next, "hello\n![image](http://x/y.png)\n");
        assert_eq!(caret, 5 + text.chars().count());
        assert_eq!(caret, next.chars().count());
    }

    #[test]
    fn test_replaces_selected_range() {
        let (next, caret) = splice("hello world", Selection::new(6, 11), "there");
        assert_eq!(next, "hello there");
        assert_eq!(caret, 11);
    }

    #[test]
    fn test_backwards_selection_is_ordered() {
        let (next, caret) = splice("abcdef", Selection::new(4, 2), "X");
        assert_eq!(next, "abXef");
        assert_eq!(caret, 3);
    }

    #[test]
    fn test_multibyte_offsets_are_characters() {
        let (next, caret) = splice("日本語", Selection::collapsed(1), "-");
        assert_eq!(next, "日-本語");
        assert_eq!(caret, 2);
    }

    #[test]
    fn test_out_of_range_selection_clamped() {
        let (next, caret) = splice("ab", Selection::new(10, 20), "c");
        assert_eq!(next, "abc");
        assert_eq!(caret, 3);
    }
}

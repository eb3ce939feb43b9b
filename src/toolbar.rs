use crate::input::TextInput;

/// Markdown shortcuts offered above the content field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Bold,
    Italic,
    Link,
    BulletList,
    NumberedList,
    Image,
    Code,
}

impl Format {
    pub const ALL: [Format; 7] = [
        Format::Bold,
        Format::Italic,
        Format::Link,
        Format::BulletList,
        Format::NumberedList,
        Format::Image,
        Format::Code,
    ];

    /// Alt+<key> binding.
    pub fn from_key(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'b' => Some(Format::Bold),
            'i' => Some(Format::Italic),
            'k' => Some(Format::Link),
            'l' => Some(Format::BulletList),
            'n' => Some(Format::NumberedList),
            'g' => Some(Format::Image),
            'c' => Some(Format::Code),
            _ => None,
        }
    }

    pub fn key(self) -> char {
        match self {
            Format::Bold => 'B',
            Format::Italic => 'I',
            Format::Link => 'K',
            Format::BulletList => 'L',
            Format::NumberedList => 'N',
            Format::Image => 'G',
            Format::Code => 'C',
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Format::Bold => "bold",
            Format::Italic => "italic",
            Format::Link => "link",
            Format::BulletList => "list",
            Format::NumberedList => "numbered",
            Format::Image => "image",
            Format::Code => "code",
        }
    }

    /// Text placed before and after the cursor.
    fn snippet(self) -> (&'static str, &'static str) {
        match self {
            Format::Bold => ("**", "**"),
            Format::Italic => ("*", "*"),
            Format::Link => ("[", "](https://)"),
            Format::BulletList => ("- ", ""),
            Format::NumberedList => ("1. ", ""),
            Format::Image => ("![", "](https://)"),
            Format::Code => ("```\n", "\n```"),
        }
    }

    fn starts_line(self) -> bool {
        matches!(
            self,
            Format::BulletList | Format::NumberedList | Format::Code
        )
    }
}

/// Inserts the snippet at the cursor, leaving the cursor where the user
/// types next.
pub fn apply(input: &mut TextInput, format: Format) {
    if format.starts_line() {
        let (_, col) = input.cursor_row_col();
        if col > 0 {
            input.insert_char('\n');
        }
    }
    let (before, after) = format.snippet();
    input.insert_str(before);
    input.insert_str(after);
    input.move_left_by(after.chars().count());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bold_wraps_cursor() {
        let mut input = TextInput::with_value("see ");
        apply(&mut input, Format::Bold);
        input.insert_str("this");
        assert_eq!(input.value(), "see **this**");
    }

    #[test]
    fn list_item_starts_a_new_line() {
        let mut input = TextInput::with_value("Steps:");
        apply(&mut input, Format::BulletList);
        input.insert_str("cargo build");
        assert_eq!(input.value(), "Steps:\n- cargo build");
    }

    #[test]
    fn code_block_on_empty_line() {
        let mut input = TextInput::new();
        apply(&mut input, Format::Code);
        input.insert_str("fn main() {}");
        assert_eq!(input.value(), "```\nfn main() {}\n```");
    }

    #[test]
    fn link_puts_cursor_in_text() {
        let mut input = TextInput::new();
        apply(&mut input, Format::Link);
        input.insert_str("docs");
        assert_eq!(input.value(), "[docs](https://)");
    }

    #[test]
    fn every_format_has_a_key() {
        for f in Format::ALL {
            assert_eq!(Format::from_key(f.key()), Some(f));
        }
    }
}

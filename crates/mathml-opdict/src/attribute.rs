//! Tokenizer for the space-delimited attribute list that follows a key.
//!
//! The list is made of `name` and `name:value` tokens and may end in a `#` comment:
//!
//! ```text
//! lspace:5 rspace:5 symmetric #PLUS SIGN
//! ```

const SEPARATOR: u8 = b':';
const TERMINATOR: u8 = b'#';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Attribute<'source> {
    /// A property that is set by naming it, e.g. `fence`.
    Boolean(&'source str),
    /// A `name:value` property.
    Valued {
        name: &'source str,
        value: &'source str,
        /// Byte offset of `value` within the attribute string.
        value_offset: usize,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AttributeList<'source> {
    pub attributes: Vec<Attribute<'source>>,
    /// Everything after the `#`, verbatim.
    pub comment: &'source str,
}

struct Scanner<'source> {
    input: &'source str,
    pos: usize,
}

impl<'source> Scanner<'source> {
    #[inline]
    fn peek(&self) -> Option<u8> {
        self.input.as_bytes().get(self.pos).copied()
    }

    fn skip_spaces(&mut self) {
        while self.peek() == Some(b' ') {
            self.pos += 1;
        }
    }

    /// Advance up to the next byte matching `stop` and return what was passed over.
    ///
    /// All stop bytes are ASCII, so the returned slice always lies on character boundaries.
    fn take_until(&mut self, stop: impl Fn(u8) -> bool) -> &'source str {
        let input = self.input;
        let start = self.pos;
        while let Some(b) = self.peek()
            && !stop(b)
        {
            self.pos += 1;
        }
        &input[start..self.pos]
    }
}

/// Split an attribute string into its tokens and trailing comment.
///
/// Tokens with an empty name or an empty value are dropped. Names are not interpreted here.
pub fn parse_attributes(input: &str) -> AttributeList<'_> {
    let mut scanner = Scanner { input, pos: 0 };
    let mut attributes = Vec::new();
    loop {
        scanner.skip_spaces();
        match scanner.peek() {
            None => {
                return AttributeList {
                    attributes,
                    comment: "",
                };
            }
            Some(TERMINATOR) => {
                return AttributeList {
                    attributes,
                    comment: &input[scanner.pos + 1..],
                };
            }
            Some(_) => {}
        }
        let name = scanner.take_until(|b| matches!(b, b' ' | SEPARATOR | TERMINATOR));
        if scanner.peek() == Some(SEPARATOR) {
            scanner.pos += 1;
            let value_offset = scanner.pos;
            let value = scanner.take_until(|b| matches!(b, b' ' | TERMINATOR));
            if !name.is_empty() && !value.is_empty() {
                attributes.push(Attribute::Valued {
                    name,
                    value,
                    value_offset,
                });
            }
        } else if !name.is_empty() {
            attributes.push(Attribute::Boolean(name));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mixed_tokens() {
        let list = parse_attributes("lspace:5 rspace:5 symmetric #PLUS SIGN");
        assert_eq!(
            list.attributes,
            [
                Attribute::Valued {
                    name: "lspace",
                    value: "5",
                    value_offset: 7
                },
                Attribute::Valued {
                    name: "rspace",
                    value: "5",
                    value_offset: 16
                },
                Attribute::Boolean("symmetric"),
            ]
        );
        assert_eq!(list.comment, "PLUS SIGN");
    }

    #[test]
    fn no_comment() {
        let list = parse_attributes("fence stretchy");
        assert_eq!(
            list.attributes,
            [Attribute::Boolean("fence"), Attribute::Boolean("stretchy")]
        );
        assert_eq!(list.comment, "");
    }

    #[test]
    fn empty_input() {
        assert_eq!(parse_attributes(""), AttributeList::default());
        assert_eq!(parse_attributes("    "), AttributeList::default());
    }

    #[test]
    fn only_comment() {
        let list = parse_attributes("#  LEFT PARENTHESIS # ");
        assert!(list.attributes.is_empty());
        assert_eq!(list.comment, "  LEFT PARENTHESIS # ");
    }

    #[test]
    fn comment_directly_after_token() {
        let list = parse_attributes("fence#LEFT CURLY BRACKET");
        assert_eq!(list.attributes, [Attribute::Boolean("fence")]);
        assert_eq!(list.comment, "LEFT CURLY BRACKET");

        let list = parse_attributes("lspace:3#X");
        assert!(matches!(
            list.attributes[..],
            [Attribute::Valued { value: "3", .. }]
        ));
        assert_eq!(list.comment, "X");
    }

    #[test]
    fn repeated_spaces() {
        let list = parse_attributes("   fence    accent   ");
        assert_eq!(
            list.attributes,
            [Attribute::Boolean("fence"), Attribute::Boolean("accent")]
        );
    }

    #[test]
    fn empty_name_or_value() {
        let list = parse_attributes(":5 lspace: fence");
        assert_eq!(list.attributes, [Attribute::Boolean("fence")]);
        let list = parse_attributes(": :");
        assert!(list.attributes.is_empty());
    }

    #[test]
    fn value_keeps_colons() {
        let list = parse_attributes("direction::vertical");
        assert_eq!(
            list.attributes,
            [Attribute::Valued {
                name: "direction",
                value: ":vertical",
                value_offset: 10
            }]
        );
    }

    #[test]
    fn non_ascii_names() {
        let list = parse_attributes("größe:4 fence #ÄÖÜ");
        assert_eq!(list.attributes.len(), 2);
        assert_eq!(list.comment, "ÄÖÜ");
    }
}

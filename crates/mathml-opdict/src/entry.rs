use crate::attribute::{Attribute, parse_attributes};
use crate::codepoint;
use crate::error::AttributeError;
use crate::key::parse_key;
use crate::property::{Direction, Form, OpFlags, Properties};

/// Which of the two output tables an entry belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableKind {
    /// Operators made of a single codepoint.
    Simple,
    /// Operators made of several codepoints.
    Compound,
}

/// One row of the operator dictionary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperatorEntry {
    /// The codepoint groups as spelled in the properties file.
    escaped: Box<str>,
    codepoints: Box<[u16]>,
    form: Form,
    props: Properties,
    comment: Box<str>,
}

impl OperatorEntry {
    /// Build an entry from one line of the properties file.
    ///
    /// Returns `None` for lines that do not describe an operator. Attributes with unusable
    /// values are left out of the entry and appended to `diagnostics`.
    pub fn from_line(
        line: &str,
        line_number: usize,
        diagnostics: &mut Vec<AttributeError>,
    ) -> Option<Self> {
        let key = match parse_key(line) {
            Ok(key) => key,
            Err(reason) => {
                log::debug!("line {line_number}: skipped, {}", <&str>::from(reason));
                return None;
            }
        };
        let codepoints = match codepoint::decode(key.escaped) {
            Ok(codepoints) if codepoints.is_empty() => {
                log::debug!("line {line_number}: skipped, operator has no codepoints");
                return None;
            }
            Ok(codepoints) => codepoints,
            Err(err) => {
                log::debug!("line {line_number}: skipped, {err}");
                return None;
            }
        };

        let list = parse_attributes(key.attributes);
        let mut props = Properties::default();
        for attribute in list.attributes {
            match attribute {
                Attribute::Boolean(name) => props.apply_boolean(name, codepoints.len()),
                Attribute::Valued {
                    name,
                    value,
                    value_offset,
                } => {
                    if let Err(kind) = props.apply_valued(name, value) {
                        let start = key.attributes_offset + value_offset;
                        let err = AttributeError {
                            line: line_number,
                            span: start..start + value.len(),
                            name: name.into(),
                            value: value.into(),
                            kind,
                        };
                        log::warn!("{err}");
                        diagnostics.push(err);
                    }
                }
            }
        }

        Some(OperatorEntry {
            escaped: key.escaped.into(),
            codepoints: codepoints.into_boxed_slice(),
            form: key.form,
            props,
            comment: list.comment.into(),
        })
    }

    /// The codepoint groups as spelled in the properties file, e.g. `\u0028\u0029`.
    #[inline]
    pub fn escaped(&self) -> &str {
        &self.escaped
    }

    /// The operator's UTF-16 code units. Never empty.
    #[inline]
    pub fn codepoints(&self) -> &[u16] {
        &self.codepoints
    }

    #[inline]
    pub fn form(&self) -> Form {
        self.form
    }

    #[inline]
    pub fn flags(&self) -> OpFlags {
        self.props.flags
    }

    #[inline]
    pub fn direction(&self) -> Option<Direction> {
        self.props.direction
    }

    #[inline]
    pub fn leading_space(&self) -> u8 {
        self.props.leading_space
    }

    #[inline]
    pub fn trailing_space(&self) -> u8 {
        self.props.trailing_space
    }

    #[inline]
    pub fn comment(&self) -> &str {
        &self.comment
    }

    #[inline]
    pub fn kind(&self) -> TableKind {
        if self.codepoints.len() > 1 {
            TableKind::Compound
        } else {
            TableKind::Simple
        }
    }

    /// Form, direction and flags packed the way the host table stores them.
    pub fn host_bits(&self) -> u32 {
        self.form.bits() | self.direction().map_or(0, Direction::bits) | self.flags().bits()
    }
}

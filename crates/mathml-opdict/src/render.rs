//! Rendering sorted entries as the body of the host's operator tables.
//!
//! A record looks like this:
//!
//! ```text
//! 0x002B, 5, 5, NS_MATHML_OPERATOR_FORM_INFIX | NS_MATHML_OPERATOR_SYMMETRIC}, //PLUS SIGN
//! ```
//!
//! The fields are the operator, the trailing space, the leading space and the flags. The opening
//! brace is left to the host unless [`RenderConfig::wrap_records`] is set.
use std::fmt::{self, Write};

#[cfg(feature = "serde")]
use serde::Deserialize;

use crate::entry::OperatorEntry;

pub const DEFAULT_CONSTANT_PREFIX: &str = "NS_MATHML_OPERATOR_";

/// How an operator is identified in its record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum IdentityStyle {
    /// The first codepoint as a hex literal (`0x002B`).
    #[default]
    Hex,
    /// The codepoint groups from the properties file as a UTF-16 string literal
    /// (`u"\u0028\u0029"`).
    Escaped,
}

/// How form and flags are written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum FlagStyle {
    /// Named constants joined with `|`. The direction is not written.
    #[default]
    Named,
    /// The host bit pattern as a hex literal, including the direction.
    Bits,
}

/// Which table is emitted first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum TableOrder {
    #[default]
    SimpleFirst,
    CompoundFirst,
}

/// Options for the generated code.
///
/// # Example usage
///
/// ```rust
/// use mathml_opdict::{FlagStyle, RenderConfig};
///
/// let config = RenderConfig {
///     flags: FlagStyle::Bits,
///     simple_header: Some("static const OperatorData gOperatorTable[] = {".to_string()),
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "kebab-case"))]
pub struct RenderConfig {
    pub identity: IdentityStyle,
    pub flags: FlagStyle,
    pub table_order: TableOrder,
    /// Prepended to the form and flag names, e.g. `NS_MATHML_OPERATOR_` + `FENCE`.
    pub constant_prefix: String,
    /// A line written before the body of the simple table.
    pub simple_header: Option<String>,
    /// A line written before the body of the compound table.
    pub compound_header: Option<String>,
    /// Start every record with `{`, making it a complete brace initialiser.
    pub wrap_records: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        RenderConfig {
            identity: IdentityStyle::default(),
            flags: FlagStyle::default(),
            table_order: TableOrder::default(),
            constant_prefix: DEFAULT_CONSTANT_PREFIX.to_string(),
            simple_header: None,
            compound_header: None,
            wrap_records: false,
        }
    }
}

fn write_identity(
    out: &mut impl Write,
    entry: &OperatorEntry,
    style: IdentityStyle,
) -> fmt::Result {
    match style {
        IdentityStyle::Hex => write!(out, "{:#06X}", entry.codepoints()[0]),
        IdentityStyle::Escaped => write!(out, "u\"{}\"", entry.escaped()),
    }
}

fn write_flags(out: &mut impl Write, entry: &OperatorEntry, config: &RenderConfig) -> fmt::Result {
    match config.flags {
        FlagStyle::Named => {
            let prefix = &config.constant_prefix;
            write!(out, "{prefix}{}", <&str>::from(entry.form()))?;
            for (name, _) in entry.flags().iter_names() {
                write!(out, " | {prefix}{name}")?;
            }
            Ok(())
        }
        FlagStyle::Bits => write!(out, "{:#06X}", entry.host_bits()),
    }
}

/// Write a single record. Every record but the last one of a table ends in a comma.
pub fn write_record(
    out: &mut impl Write,
    entry: &OperatorEntry,
    config: &RenderConfig,
    is_last: bool,
) -> fmt::Result {
    if config.wrap_records {
        out.write_char('{')?;
    }
    write_identity(out, entry, config.identity)?;
    write!(
        out,
        ", {}, {}, ",
        entry.trailing_space(),
        entry.leading_space()
    )?;
    write_flags(out, entry, config)?;
    out.write_str(if is_last { "}" } else { "}," })?;
    writeln!(out, " //{}", entry.comment())
}

/// Write one table: the optional header, one record per entry and the closing `};`.
pub fn write_table(
    out: &mut impl Write,
    header: Option<&str>,
    entries: &[OperatorEntry],
    config: &RenderConfig,
) -> fmt::Result {
    if let Some(header) = header {
        writeln!(out, "{header}")?;
    }
    let last = entries.len().saturating_sub(1);
    for (index, entry) in entries.iter().enumerate() {
        write_record(out, entry, config, index == last)?;
    }
    writeln!(out, "}};")
}

/// Write both tables in the configured order.
pub fn write_tables(
    out: &mut impl Write,
    simple: &[OperatorEntry],
    compound: &[OperatorEntry],
    config: &RenderConfig,
) -> fmt::Result {
    let simple_table = (config.simple_header.as_deref(), simple);
    let compound_table = (config.compound_header.as_deref(), compound);
    let tables = match config.table_order {
        TableOrder::SimpleFirst => [simple_table, compound_table],
        TableOrder::CompoundFirst => [compound_table, simple_table],
    };
    for (header, entries) in tables {
        write_table(out, header, entries, config)?;
    }
    Ok(())
}

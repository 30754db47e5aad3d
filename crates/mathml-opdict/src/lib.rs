//! Generate the tables of a MathML operator dictionary from a properties file.
//!
//! The input is a properties file in the format of Mozilla's `mathfont.properties`, where every
//! operator form has its own line:
//!
//! ```text
//! operator.\u002B.infix lspace:4 rspace:4 # +
//! operator.\u0028\u0029.infix fence # ()
//! ```
//!
//! The output is the body of two static tables, one for operators made of a single codepoint
//! and one for compound operators, ready to be pasted after the table declarations of the host.
//! Each record is written without its opening brace, which the host's table macro supplies.
//!
//! # Usage
//!
//! ```rust
//! use mathml_opdict::{OperatorTables, RenderConfig};
//!
//! let source = r"operator.\u002B.infix lspace:4 rspace:4 #PLUS SIGN";
//! let tables = OperatorTables::from_source(source);
//! assert_eq!(tables.simple().len(), 1);
//! let code = tables.render(&RenderConfig::default());
//! assert_eq!(
//!     code,
//!     "0x002B, 4, 4, NS_MATHML_OPERATOR_FORM_INFIX} //PLUS SIGN\n};\n};\n"
//! );
//! ```
//!
//! # Features
//!
//! - `serde`: With this feature, [`RenderConfig`] implements serde's `Deserialize`.
//! - `ariadne`: Adds [`AttributeError::to_report`] for pretty-printing diagnostics.
//!
pub mod attribute;
pub mod codepoint;
mod entry;
mod error;
pub mod key;
mod property;
mod render;
mod sort;

pub use self::entry::{OperatorEntry, TableKind};
pub use self::error::{AttributeErrKind, AttributeError};
pub use self::property::{Direction, Form, OpFlags};
pub use self::render::{
    DEFAULT_CONSTANT_PREFIX, FlagStyle, IdentityStyle, RenderConfig, TableOrder, write_tables,
};
pub use self::sort::{compare, sort_entries};

/// Collects entries line by line into the simple and the compound table.
#[derive(Debug, Default)]
pub struct TableBuilder {
    simple: Vec<OperatorEntry>,
    compound: Vec<OperatorEntry>,
    diagnostics: Vec<AttributeError>,
}

impl TableBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one line of the properties file. `line_number` is 1-based and only used for
    /// diagnostics.
    ///
    /// Returns the table the line's entry went to, or `None` if the line holds no operator.
    pub fn push_line(&mut self, line_number: usize, line: &str) -> Option<TableKind> {
        let entry = OperatorEntry::from_line(line, line_number, &mut self.diagnostics)?;
        let kind = entry.kind();
        match kind {
            TableKind::Simple => self.simple.push(entry),
            TableKind::Compound => self.compound.push(entry),
        }
        Some(kind)
    }

    /// Sort both tables.
    pub fn finish(self) -> OperatorTables {
        let TableBuilder {
            mut simple,
            mut compound,
            diagnostics,
        } = self;
        sort_entries(&mut simple);
        sort_entries(&mut compound);
        OperatorTables {
            simple,
            compound,
            diagnostics,
        }
    }
}

/// The sorted simple and compound tables.
#[derive(Debug)]
pub struct OperatorTables {
    simple: Vec<OperatorEntry>,
    compound: Vec<OperatorEntry>,
    diagnostics: Vec<AttributeError>,
}

impl OperatorTables {
    /// Parse a whole properties file.
    pub fn from_source(source: &str) -> Self {
        let mut builder = TableBuilder::new();
        for (index, line) in source.lines().enumerate() {
            builder.push_line(index + 1, line);
        }
        builder.finish()
    }

    /// Operators made of a single codepoint, in table order.
    #[inline]
    pub fn simple(&self) -> &[OperatorEntry] {
        &self.simple
    }

    /// Operators made of several codepoints, in table order.
    #[inline]
    pub fn compound(&self) -> &[OperatorEntry] {
        &self.compound
    }

    /// Attributes that were dropped because of their value, in input order.
    #[inline]
    pub fn diagnostics(&self) -> &[AttributeError] {
        &self.diagnostics
    }

    /// Render both tables.
    pub fn render(&self, config: &RenderConfig) -> String {
        let mut output = String::new();
        // Writing to a `String` cannot fail.
        let _ = write_tables(&mut output, &self.simple, &self.compound, config);
        output
    }
}

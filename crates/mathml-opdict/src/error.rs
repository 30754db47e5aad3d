use std::fmt;
use std::ops::Range;

use strum_macros::IntoStaticStr;

/// An attribute whose value could not be used.
///
/// The attribute is dropped; the rest of the line still produces an entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeError {
    /// 1-based line number in the properties file.
    pub line: usize,
    /// Byte range of the value within its line.
    pub span: Range<usize>,
    pub name: Box<str>,
    pub value: Box<str>,
    pub kind: AttributeErrKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, IntoStaticStr)]
pub enum AttributeErrKind {
    #[strum(serialize = "expected a number")]
    NotANumber,
    #[strum(serialize = "expected a spacing between 0 and 7")]
    OutOfRange,
}

impl AttributeError {
    pub fn error_message(&self) -> String {
        "Invalid value \"".to_string()
            + &self.value
            + "\" for \""
            + &self.name
            + "\": "
            + <&str>::from(self.kind)
            + "."
    }
}

#[cfg(feature = "ariadne")]
impl AttributeError {
    /// Convert this error into an [`ariadne::Report`] for pretty-printing.
    ///
    /// The report refers to the offending line only, so it has to be printed with that line as
    /// its source.
    pub fn to_report<'name>(
        &self,
        source_name: &'name str,
        with_color: bool,
    ) -> ariadne::Report<'static, (&'name str, Range<usize>)> {
        use ariadne::{Label, Report, ReportKind};

        let mut config = ariadne::Config::default().with_index_type(ariadne::IndexType::Byte);
        if !with_color {
            config = config.with_color(false);
        }
        Report::build(ReportKind::Warning, (source_name, self.span.clone()))
            .with_config(config)
            .with_message(self.error_message())
            .with_label(
                Label::new((source_name, self.span.clone())).with_message(<&str>::from(self.kind)),
            )
            .with_note("the attribute is ignored")
            .finish()
    }
}

impl fmt::Display for AttributeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {}", self.line, self.error_message())
    }
}

impl std::error::Error for AttributeError {}

//! Operator forms and properties, with the bit values of the host operator table.
use bitflags::bitflags;
use phf::phf_map;
use strum_macros::IntoStaticStr;

use crate::error::AttributeErrKind;

/// The syntactic position of an operator.
///
/// The discriminants are the values of the form bits in the host table (`NS_MATHML_OPERATOR_FORM`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IntoStaticStr)]
pub enum Form {
    #[strum(serialize = "FORM_INFIX")]
    Infix = 1,
    #[strum(serialize = "FORM_PREFIX")]
    Prefix = 2,
    #[strum(serialize = "FORM_POSTFIX")]
    Postfix = 3,
}

impl Form {
    /// The order in which key suffixes are looked for.
    pub const SEARCH_ORDER: [Form; 3] = [Form::Infix, Form::Postfix, Form::Prefix];

    #[inline]
    pub const fn bits(self) -> u32 {
        self as u32
    }

    /// The suffix of a properties key naming this form.
    pub const fn suffix(self) -> &'static str {
        match self {
            Form::Infix => ".infix",
            Form::Prefix => ".prefix",
            Form::Postfix => ".postfix",
        }
    }

    /// Tie-break rank for entries with the same codepoints: infix, then postfix, then prefix.
    ///
    /// Not the order of the discriminants, which put prefix before postfix.
    #[inline]
    pub const fn sort_rank(self) -> u8 {
        match self {
            Form::Infix => 0,
            Form::Postfix => 1,
            Form::Prefix => 2,
        }
    }
}

/// Stretch direction (`direction:horizontal` or `direction:vertical`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Horizontal = 1 << 2,
    Vertical = 2 << 2,
}

impl Direction {
    #[inline]
    pub const fn bits(self) -> u32 {
        self as u32
    }
}

bitflags! {
    /// Boolean operator properties.
    ///
    /// The declaration order is the order in which the flags are rendered.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct OpFlags: u32 {
        const STRETCHY = 1 << 4;
        const FENCE = 1 << 5;
        const ACCENT = 1 << 6;
        const LARGEOP = 1 << 7;
        const SEPARATOR = 1 << 8;
        const MOVABLELIMITS = 1 << 9;
        const SYMMETRIC = 1 << 10;
        const INTEGRAL = 1 << 11;
        const MIRRORABLE = 1 << 12;
    }
}

static BOOLEAN_PROPERTIES: phf::Map<&'static str, OpFlags> = phf_map! {
    "stretchy" => OpFlags::STRETCHY,
    "fence" => OpFlags::FENCE,
    "accent" => OpFlags::ACCENT,
    "largeop" => OpFlags::LARGEOP,
    "separator" => OpFlags::SEPARATOR,
    "movablelimits" => OpFlags::MOVABLELIMITS,
    "symmetric" => OpFlags::SYMMETRIC,
    "integral" => OpFlags::INTEGRAL,
    "mirrorable" => OpFlags::MIRRORABLE,
};

/// Spacing is stored in a 4-bit field, but the dictionary only uses 0 through 7.
pub const MAX_SPACE: u8 = 7;

/// The properties collected from the attribute list of one line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Properties {
    pub flags: OpFlags,
    pub direction: Option<Direction>,
    pub leading_space: u8,
    pub trailing_space: u8,
}

impl Properties {
    /// Set the flag for a boolean property. Unknown names are ignored.
    ///
    /// `stretchy` only applies to operators made of a single codepoint.
    pub fn apply_boolean(&mut self, name: &str, codepoint_count: usize) {
        let Some(&flag) = BOOLEAN_PROPERTIES.get(name) else {
            return;
        };
        if flag == OpFlags::STRETCHY && codepoint_count != 1 {
            log::debug!("ignoring `stretchy` on an operator with {codepoint_count} codepoints");
            return;
        }
        self.flags |= flag;
    }

    /// Set the field for a `name:value` property.
    ///
    /// Unknown names and unknown directions are ignored. A later `direction` replaces an earlier
    /// one. A spacing value that is not a number
    /// in `0..=MAX_SPACE` leaves the field unchanged and is reported to the caller.
    pub fn apply_valued(&mut self, name: &str, value: &str) -> Result<(), AttributeErrKind> {
        match name {
            "direction" => {
                self.direction = match value {
                    "vertical" => Some(Direction::Vertical),
                    "horizontal" => Some(Direction::Horizontal),
                    _ => return Ok(()),
                };
            }
            "lspace" => self.leading_space = parse_space(value)?,
            "rspace" => self.trailing_space = parse_space(value)?,
            _ => {}
        }
        Ok(())
    }
}

fn parse_space(value: &str) -> Result<u8, AttributeErrKind> {
    let space: u32 = value.parse().map_err(|_| AttributeErrKind::NotANumber)?;
    match u8::try_from(space) {
        Ok(space) if space <= MAX_SPACE => Ok(space),
        _ => Err(AttributeErrKind::OutOfRange),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boolean_properties() {
        let mut props = Properties::default();
        for name in ["fence", "symmetric", "mirrorable", "largeop"] {
            props.apply_boolean(name, 1);
        }
        assert_eq!(
            props.flags,
            OpFlags::FENCE | OpFlags::SYMMETRIC | OpFlags::MIRRORABLE | OpFlags::LARGEOP
        );
    }

    #[test]
    fn boolean_names_are_case_sensitive() {
        let mut props = Properties::default();
        props.apply_boolean("Fence", 1);
        props.apply_boolean("FENCE", 1);
        props.apply_boolean("unknown", 1);
        assert_eq!(props, Properties::default());
    }

    #[test]
    fn stretchy_needs_single_codepoint() {
        let mut single = Properties::default();
        single.apply_boolean("stretchy", 1);
        assert_eq!(single.flags, OpFlags::STRETCHY);

        let mut compound = Properties::default();
        compound.apply_boolean("stretchy", 2);
        compound.apply_boolean("fence", 2);
        assert_eq!(compound.flags, OpFlags::FENCE);
    }

    #[test]
    fn spacing() {
        let mut props = Properties::default();
        assert_eq!(props.apply_valued("lspace", "5"), Ok(()));
        assert_eq!(props.apply_valued("rspace", "3"), Ok(()));
        assert_eq!(props.leading_space, 5);
        assert_eq!(props.trailing_space, 3);
        assert_eq!(props.apply_valued("rspace", "0"), Ok(()));
        assert_eq!(props.trailing_space, 0);
    }

    #[test]
    fn bad_spacing_leaves_field_alone() {
        let mut props = Properties::default();
        props.apply_valued("lspace", "4").unwrap();
        assert_eq!(
            props.apply_valued("lspace", "thick"),
            Err(AttributeErrKind::NotANumber)
        );
        assert_eq!(
            props.apply_valued("lspace", "8"),
            Err(AttributeErrKind::OutOfRange)
        );
        assert_eq!(
            props.apply_valued("lspace", "100000"),
            Err(AttributeErrKind::OutOfRange)
        );
        assert_eq!(
            props.apply_valued("lspace", "-1"),
            Err(AttributeErrKind::NotANumber)
        );
        assert_eq!(props.leading_space, 4);
    }

    #[test]
    fn direction() {
        let mut props = Properties::default();
        props.apply_valued("direction", "vertical").unwrap();
        assert_eq!(props.direction, Some(Direction::Vertical));
        props.apply_valued("direction", "horizontal").unwrap();
        assert_eq!(props.direction, Some(Direction::Horizontal));
        props.apply_valued("direction", "diagonal").unwrap();
        assert_eq!(props.direction, Some(Direction::Horizontal));
    }

    #[test]
    fn unknown_valued_property() {
        let mut props = Properties::default();
        assert_eq!(props.apply_valued("minsize", "abc"), Ok(()));
        assert_eq!(props, Properties::default());
    }

    #[test]
    fn host_bit_values() {
        assert_eq!(Form::Infix.bits(), 1);
        assert_eq!(Form::Prefix.bits(), 2);
        assert_eq!(Form::Postfix.bits(), 3);
        assert_eq!(Direction::Horizontal.bits(), 0x4);
        assert_eq!(Direction::Vertical.bits(), 0x8);
        assert_eq!(OpFlags::STRETCHY.bits(), 0x10);
        assert_eq!(OpFlags::MIRRORABLE.bits(), 0x1000);
    }

    #[test]
    fn form_rank_differs_from_bits() {
        let mut forms = [Form::Prefix, Form::Infix, Form::Postfix];
        forms.sort_by_key(|form| form.sort_rank());
        assert_eq!(forms, [Form::Infix, Form::Postfix, Form::Prefix]);
        assert!(Form::Prefix.bits() < Form::Postfix.bits());
    }

    #[test]
    fn flag_declaration_order() {
        let names: Vec<&str> = OpFlags::all().iter_names().map(|(name, _)| name).collect();
        assert_eq!(
            names,
            [
                "STRETCHY",
                "FENCE",
                "ACCENT",
                "LARGEOP",
                "SEPARATOR",
                "MOVABLELIMITS",
                "SYMMETRIC",
                "INTEGRAL",
                "MIRRORABLE"
            ]
        );
    }
}

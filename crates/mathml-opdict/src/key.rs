//! Splitting a line into its key and attribute list.
//!
//! A data line looks like `operator.\u002B.infix lspace:5 rspace:5 #PLUS SIGN`.
use memchr::memmem;
use static_assertions::const_assert_eq;
use strum_macros::IntoStaticStr;

use crate::codepoint::GROUP_LEN;
use crate::property::Form;

const KEY_PREFIX: &str = "operator.";
const ESCAPED_KEY_PREFIX: &str = r"operator.\u";

/// `operator.`, one codepoint group and the shortest form suffix.
pub const MIN_KEY_LEN: usize = KEY_PREFIX.len() + GROUP_LEN + Form::Infix.suffix().len();
const_assert_eq!(MIN_KEY_LEN, 21);

/// A line that holds an operator key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyLine<'source> {
    /// The codepoint groups of the key, e.g. `\u0028\u0029`.
    pub escaped: &'source str,
    pub form: Form,
    /// Everything after the key and the space that ends it.
    pub attributes: &'source str,
    /// Byte offset of `attributes` within the line.
    pub attributes_offset: usize,
}

/// Why a line holds no operator key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, IntoStaticStr)]
pub enum SkipReason {
    #[strum(serialize = "comment or indented line")]
    Comment,
    #[strum(serialize = "no key followed by a space")]
    NoKey,
    #[strum(serialize = "key is too short")]
    TooShort,
    #[strum(serialize = r"key does not start with `operator.\u`")]
    BadPrefix,
    #[strum(serialize = "key names no form")]
    NoForm,
    #[strum(serialize = "form is not at the end of the key")]
    MisplacedForm,
}

/// Find the key token: the leftmost `operator` that starts a run of non-whitespace which is
/// followed by a space. Returns the byte range of the run, without the space.
fn find_key_token(line: &str) -> Option<(usize, usize)> {
    for start in memmem::find_iter(line.as_bytes(), b"operator") {
        let rest = &line[start..];
        let len = rest.find(char::is_whitespace).unwrap_or(rest.len());
        if rest[len..].starts_with(' ') {
            return Some((start, start + len));
        }
    }
    None
}

pub fn parse_key(line: &str) -> Result<KeyLine<'_>, SkipReason> {
    if line.starts_with(['#', ' ']) {
        return Err(SkipReason::Comment);
    }
    let (start, end) = find_key_token(line).ok_or(SkipReason::NoKey)?;
    let key = &line[start..end];
    if key.len() < MIN_KEY_LEN {
        return Err(SkipReason::TooShort);
    }
    if !key.starts_with(ESCAPED_KEY_PREFIX) {
        return Err(SkipReason::BadPrefix);
    }
    let name = &key[KEY_PREFIX.len()..];
    let form = Form::SEARCH_ORDER
        .into_iter()
        .find(|form| name.contains(form.suffix()))
        .ok_or(SkipReason::NoForm)?;
    let escaped = name
        .strip_suffix(form.suffix())
        .ok_or(SkipReason::MisplacedForm)?;
    // Skip the single space that ends the key.
    let attributes_offset = end + 1;
    Ok(KeyLine {
        escaped,
        form,
        attributes: &line[attributes_offset..],
        attributes_offset,
    })
}

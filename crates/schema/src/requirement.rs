//! PEP 508 dependency specifiers.
//!
//! Only the structure is validated: names, extras, version clauses and URLs are parsed,
//! environment markers are kept verbatim.

use crate::error::SchemaError;
use nom::{
    Finish, IResult,
    branch::alt,
    bytes::complete::{tag, take_while1},
    character::complete::{char, space0},
    combinator::{all_consuming, map, opt, rest, value, verify},
    error::VerboseError,
    multi::{separated_list0, separated_list1},
    sequence::{delimited, pair, preceded, separated_pair, tuple},
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

type ParseResult<'a, T> = IResult<&'a str, T, VerboseError<&'a str>>;

/// Normalizes a distribution name per PEP 503: lower-case, with every run of `-`, `_` and `.`
/// replaced by a single `-`, including leading and trailing runs.
#[must_use]
pub fn canonicalize_name(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut in_separator_run = false;

    for c in name.chars() {
        if matches!(c, '-' | '_' | '.') {
            if !in_separator_run {
                out.push('-');
            }
            in_separator_run = true;
        } else {
            in_separator_run = false;
            out.extend(c.to_lowercase());
        }
    }

    out
}

/// Version comparison operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// `~=`
    Compatible,
    /// `==`
    Equal,
    /// `!=`
    NotEqual,
    /// `<=`
    LessEqual,
    /// `>=`
    GreaterEqual,
    /// `<`
    Less,
    /// `>`
    Greater,
    /// `===`
    ArbitraryEqual,
}

impl Operator {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Compatible => "~=",
            Self::Equal => "==",
            Self::NotEqual => "!=",
            Self::LessEqual => "<=",
            Self::GreaterEqual => ">=",
            Self::Less => "<",
            Self::Greater => ">",
            Self::ArbitraryEqual => "===",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One version clause, e.g. `>=1.2`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Specifier {
    pub operator: Operator,
    pub version: String,
}

impl fmt::Display for Specifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.operator, self.version)
    }
}

/// A parsed PEP 508 requirement such as `fmt[header-only]>=10.0; platform_system != "Windows"`.
///
/// Two requirements are equal when their canonical names and remaining parts match.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Requirement {
    name: String,
    extras: Vec<String>,
    specifiers: Vec<Specifier>,
    url: Option<String>,
    marker: Option<String>,
}

enum VersionTarget {
    Url(String),
    Specifiers(Vec<Specifier>),
}

impl Requirement {
    /// Parses a requirement string.
    ///
    /// # Errors
    /// [`SchemaError::InvalidRequirement`] when `input` is not a PEP 508 requirement.
    pub fn parse(input: &str) -> Result<Self, SchemaError> {
        all_consuming(requirement)(input).finish().map(|(_, req)| req).map_err(|_| {
            SchemaError::InvalidRequirement {
                message: format!("'{input}' is not a PEP 508 requirement").into(),
                context: None,
            }
        })
    }

    /// The name as written.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn canonical_name(&self) -> String {
        canonicalize_name(&self.name)
    }

    #[must_use]
    pub fn extras(&self) -> &[String] {
        &self.extras
    }

    #[must_use]
    pub fn specifiers(&self) -> &[Specifier] {
        &self.specifiers
    }

    #[must_use]
    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    #[must_use]
    pub fn marker(&self) -> Option<&str> {
        self.marker.as_deref()
    }
}

impl PartialEq for Requirement {
    fn eq(&self, other: &Self) -> bool {
        self.canonical_name() == other.canonical_name()
            && self.extras == other.extras
            && self.specifiers == other.specifiers
            && self.url == other.url
            && self.marker == other.marker
    }
}

impl Eq for Requirement {}

impl Hash for Requirement {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.canonical_name().hash(state);
        self.extras.hash(state);
        self.specifiers.hash(state);
        self.url.hash(state);
        self.marker.hash(state);
    }
}

impl fmt::Display for Requirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)?;
        if !self.extras.is_empty() {
            write!(f, "[{}]", self.extras.join(","))?;
        }

        if let Some(url) = &self.url {
            write!(f, " @ {url}")?;
            if let Some(marker) = &self.marker {
                write!(f, " ; {marker}")?;
            }
            return Ok(());
        }

        let specifiers: Vec<String> = self.specifiers.iter().map(ToString::to_string).collect();
        f.write_str(&specifiers.join(","))?;
        if let Some(marker) = &self.marker {
            write!(f, "; {marker}")?;
        }
        Ok(())
    }
}

impl FromStr for Requirement {
    type Err = SchemaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Requirement {
    type Error = SchemaError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Requirement> for String {
    fn from(value: Requirement) -> Self {
        value.to_string()
    }
}

fn requirement(input: &str) -> ParseResult<'_, Requirement> {
    let (input, _) = space0(input)?;
    let (input, name) = identifier(input)?;
    let (input, _) = space0(input)?;
    let (input, extras) = opt(extras)(input)?;
    let (input, _) = space0(input)?;
    let (input, target) = opt(alt((
        map(url, |u: &str| VersionTarget::Url(u.to_owned())),
        map(version_spec, VersionTarget::Specifiers),
    )))(input)?;
    let (input, marker) = opt(marker)(input)?;
    let (input, _) = space0(input)?;

    let (specifiers, url) = match target {
        Some(VersionTarget::Url(url)) => (Vec::new(), Some(url)),
        Some(VersionTarget::Specifiers(specs)) => (specs, None),
        None => (Vec::new(), None),
    };

    Ok((
        input,
        Requirement {
            name: name.to_owned(),
            extras: extras.unwrap_or_default().into_iter().map(str::to_owned).collect(),
            specifiers,
            url,
            marker: marker.map(|m: &str| m.trim().to_owned()),
        },
    ))
}

/// Letters and digits, with `.`, `-` and `_` allowed only between them.
fn identifier(input: &str) -> ParseResult<'_, &str> {
    verify(
        take_while1(|c: char| c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_')),
        |s: &str| {
            s.starts_with(|c: char| c.is_ascii_alphanumeric())
                && s.ends_with(|c: char| c.is_ascii_alphanumeric())
        },
    )(input)
}

fn list_separator(input: &str) -> ParseResult<'_, char> {
    delimited(space0, char(','), space0)(input)
}

fn extras(input: &str) -> ParseResult<'_, Vec<&str>> {
    delimited(
        pair(char('['), space0),
        separated_list0(list_separator, identifier),
        pair(space0, char(']')),
    )(input)
}

fn operator(input: &str) -> ParseResult<'_, Operator> {
    alt((
        value(Operator::ArbitraryEqual, tag("===")),
        value(Operator::Compatible, tag("~=")),
        value(Operator::Equal, tag("==")),
        value(Operator::NotEqual, tag("!=")),
        value(Operator::LessEqual, tag("<=")),
        value(Operator::GreaterEqual, tag(">=")),
        value(Operator::Less, tag("<")),
        value(Operator::Greater, tag(">")),
    ))(input)
}

fn version(input: &str) -> ParseResult<'_, &str> {
    take_while1(|c: char| c.is_ascii_alphanumeric() || matches!(c, '.' | '*' | '+' | '!' | '-' | '_'))(
        input,
    )
}

fn specifier(input: &str) -> ParseResult<'_, Specifier> {
    map(separated_pair(operator, space0, version), |(operator, version)| Specifier {
        operator,
        version: version.to_owned(),
    })(input)
}

fn version_spec(input: &str) -> ParseResult<'_, Vec<Specifier>> {
    let specifiers = || separated_list1(list_separator, specifier);
    alt((delimited(pair(char('('), space0), specifiers(), pair(space0, char(')'))), specifiers()))(
        input,
    )
}

fn url(input: &str) -> ParseResult<'_, &str> {
    preceded(pair(char('@'), space0), take_while1(|c: char| !c.is_whitespace()))(input)
}

fn marker(input: &str) -> ParseResult<'_, &str> {
    preceded(tuple((space0, char(';'), space0)), verify(rest, |m: &str| !m.trim().is_empty()))(
        input,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_name() {
        let req = Requirement::parse("fmt").expect("valid requirement");
        assert_eq!(req.name(), "fmt");
        assert!(req.extras().is_empty());
        assert!(req.specifiers().is_empty());
        assert_eq!(req.to_string(), "fmt");
    }

    #[test]
    fn extras_specifiers_and_marker() {
        let req = Requirement::parse("spdlog [ header-only , fmt-external ] >= 1.10 , < 2 ; os_name == 'posix'")
            .expect("valid requirement");

        assert_eq!(req.extras(), ["header-only", "fmt-external"]);
        assert_eq!(
            req.specifiers(),
            [
                Specifier { operator: Operator::GreaterEqual, version: "1.10".into() },
                Specifier { operator: Operator::Less, version: "2".into() },
            ]
        );
        assert_eq!(req.marker(), Some("os_name == 'posix'"));
        assert_eq!(req.to_string(), "spdlog[header-only,fmt-external]>=1.10,<2; os_name == 'posix'");
    }

    #[test]
    fn parenthesized_and_wildcard_versions() {
        let req = Requirement::parse("zlib (==1.2.*)").expect("valid requirement");
        assert_eq!(req.specifiers()[0].operator, Operator::Equal);
        assert_eq!(req.specifiers()[0].version, "1.2.*");
    }

    #[test]
    fn longest_operator_wins() {
        let arbitrary = Requirement::parse("boost===1.84.0").expect("valid requirement");
        assert_eq!(arbitrary.specifiers()[0].operator, Operator::ArbitraryEqual);

        let compatible = Requirement::parse("boost~=1.84").expect("valid requirement");
        assert_eq!(compatible.specifiers()[0].operator, Operator::Compatible);
    }

    #[test]
    fn url_requirement() {
        let req = Requirement::parse("catch2 @ https://example.com/catch2.zip ; python_version >= '3.10'")
            .expect("valid requirement");
        assert_eq!(req.url(), Some("https://example.com/catch2.zip"));
        assert!(req.specifiers().is_empty());
        assert_eq!(req.marker(), Some("python_version >= '3.10'"));
    }

    #[test]
    fn invalid_requirements_are_rejected() {
        for input in ["", "-fmt", "fmt-", "fmt 1.0", "fmt >=", "fmt[", "fmt;", "fmt @ "] {
            assert!(
                matches!(Requirement::parse(input), Err(SchemaError::InvalidRequirement { .. })),
                "{input:?} should be rejected"
            );
        }
    }

    #[test]
    fn equality_uses_canonical_names() {
        let a = Requirement::parse("Foo_Bar>=1").expect("valid requirement");
        let b = Requirement::parse("foo-bar>=1").expect("valid requirement");
        assert_eq!(a, b);
        assert_eq!(a.canonical_name(), "foo-bar");
    }

    #[test]
    fn canonicalize_collapses_separators() {
        assert_eq!(canonicalize_name("Friendly-Bard"), "friendly-bard");
        assert_eq!(canonicalize_name("FRIENDLY.._BARD"), "friendly-bard");
        assert_eq!(canonicalize_name("friendly__bard"), "friendly-bard");
    }

    #[test]
    fn canonicalize_keeps_edge_separators() {
        assert_eq!(canonicalize_name("_private"), "-private");
        assert_eq!(canonicalize_name("foo."), "foo-");
        assert_eq!(canonicalize_name("._Mixed.-_Case__"), "-mixed-case-");
        assert_eq!(canonicalize_name("---"), "-");
    }
}

use crate::error::{ReleasesError, Result};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// Annotation git appends to dereferenced tag refs; never kept as a suffix.
const DEREFERENCE_MARKER: &str = "^{}";

/// A released version parsed from a tag name
///
/// Holds the numeric `major.minor.patch` triple along with whatever text
/// surrounded it in the tag (a prefix such as `"v"`, a suffix such as
/// `"-beta"`). The number of numeric components present in the source is
/// remembered so that `"3.2"` renders back as `"3.2"`.
///
/// Equality considers major, minor, patch and suffix. Ordering considers
/// major, minor and patch only, so `1.2.0` and `1.2.0-beta` compare as
/// `Ordering::Equal` while not being `==`. Deduplicate with `==`, sort with
/// `Ord`.
#[derive(Debug, Clone)]
pub struct Version {
    major: u64,
    minor: u64,
    patch: u64,
    prefix: Option<String>,
    suffix: Option<String>,
    component_count: u8,
}

impl Version {
    /// Create a version with all three components present
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Version {
            major,
            minor,
            patch,
            prefix: None,
            suffix: None,
            component_count: 3,
        }
    }

    /// Create a version that only carries a major component (renders as `"2"`)
    pub fn from_major(major: u64) -> Self {
        Version {
            component_count: 1,
            ..Version::new(major, 0, 0)
        }
    }

    /// Create a version with major and minor components (renders as `"1.2"`)
    pub fn from_major_minor(major: u64, minor: u64) -> Self {
        Version {
            component_count: 2,
            ..Version::new(major, minor, 0)
        }
    }

    /// Return a copy of this version carrying the given prefix.
    /// An empty prefix clears it.
    pub fn with_prefix(self, prefix: impl Into<String>) -> Self {
        Version {
            prefix: non_empty(prefix.into()),
            ..self
        }
    }

    /// Return a copy of this version carrying the given suffix.
    /// An empty suffix clears it.
    pub fn with_suffix(self, suffix: impl Into<String>) -> Self {
        Version {
            suffix: non_empty(suffix.into()),
            ..self
        }
    }

    pub fn major(&self) -> u64 {
        self.major
    }

    pub fn minor(&self) -> u64 {
        self.minor
    }

    pub fn patch(&self) -> u64 {
        self.patch
    }

    pub fn prefix(&self) -> Option<&str> {
        self.prefix.as_deref()
    }

    pub fn suffix(&self) -> Option<&str> {
        self.suffix.as_deref()
    }

    /// How many of major/minor/patch were explicitly present (1 to 3)
    pub fn component_count(&self) -> u8 {
        self.component_count
    }

    /// Parse a version from a tag name
    ///
    /// The string is split on `.`; the first three components yield major,
    /// minor and patch. Text glued to the front of the major component
    /// becomes the prefix, and everything after the last parsed number
    /// becomes the suffix (a trailing `^{}` marker is dropped).
    ///
    /// # Examples
    /// ```
    /// use git_releases::domain::Version;
    ///
    /// let v = Version::parse("v3.2.1").unwrap();
    /// assert_eq!(v.prefix(), Some("v"));
    /// assert_eq!((v.major(), v.minor(), v.patch()), (3, 2, 1));
    /// assert_eq!(v.to_string(), "v3.2.1");
    ///
    /// let beta = Version::parse("1.2.5-beta").unwrap();
    /// assert_eq!(beta.suffix(), Some("-beta"));
    /// ```
    ///
    /// # Errors
    /// `ReleasesError::UnrecognizedVersionComponentFormat` carrying the first
    /// component that does not contain an integer.
    pub fn parse(string: &str) -> Result<Self> {
        let mut components = string.split('.');
        let first = components.next().unwrap_or_default();

        let major = parse_component(first)?;
        let mut version = Version::from_major(major)
            .with_prefix(strip_trailing_chars(first, major.to_string().len()));

        if let Some(component) = components.next() {
            version.minor = parse_component(component)?;
            version.component_count = 2;
        }

        if let Some(component) = components.next() {
            version.patch = parse_component(component)?;
            version.component_count = 3;
        }

        let parsed = version.numbered();
        let segments: Vec<&str> = string.split(parsed.as_str()).collect();

        if segments.len() > 1 {
            if let Some(last) = segments.last() {
                if !last.is_empty() && *last != DEREFERENCE_MARKER {
                    version.suffix = Some(last.to_string());
                }
            }
        }

        Ok(version)
    }

    /// Prefix plus the numeric components, without the suffix
    fn numbered(&self) -> String {
        let mut out = String::new();
        if let Some(prefix) = &self.prefix {
            out.push_str(prefix);
        }
        out.push_str(&self.major.to_string());
        if self.component_count >= 2 {
            out.push('.');
            out.push_str(&self.minor.to_string());
        }
        if self.component_count >= 3 {
            out.push('.');
            out.push_str(&self.patch.to_string());
        }
        out
    }
}

fn non_empty(s: String) -> Option<String> {
    if s.is_empty() {
        None
    } else {
        Some(s)
    }
}

/// Drop `count` characters from the end of `s`
fn strip_trailing_chars(s: &str, count: usize) -> String {
    let keep = s.chars().count().saturating_sub(count);
    s.chars().take(keep).collect()
}

#[derive(Debug, Clone, Copy)]
enum ParsingDirection {
    Leading,
    Trailing,
}

fn parse_component(component: &str) -> Result<u64> {
    extract_integer(component, ParsingDirection::Leading)
        .or_else(|| extract_integer(component, ParsingDirection::Trailing))
        .ok_or_else(|| ReleasesError::component(component))
}

/// Peel characters off one end of `component` until the rest is an integer
fn extract_integer(component: &str, direction: ParsingDirection) -> Option<u64> {
    let mut remaining = component;

    loop {
        if let Some(number) = parse_integer(remaining) {
            return Some(number);
        }

        let mut chars = remaining.chars();
        match direction {
            ParsingDirection::Leading => chars.next()?,
            ParsingDirection::Trailing => chars.next_back()?,
        };
        remaining = chars.as_str();
    }
}

/// Digits only: signs are rejected so components stay non-negative
fn parse_integer(s: &str) -> Option<u64> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

impl FromStr for Version {
    type Err = ReleasesError;

    fn from_str(s: &str) -> Result<Self> {
        Version::parse(s)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.numbered())?;
        if let Some(suffix) = &self.suffix {
            f.write_str(suffix)?;
        }
        Ok(())
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.major == other.major
            && self.minor == other.minor
            && self.patch == other.patch
            && self.suffix == other.suffix
    }
}

impl Eq for Version {}

impl Hash for Version {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.major.hash(state);
        self.minor.hash(state);
        self.patch.hash(state);
        self.suffix.hash(state);
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        self.major
            .cmp(&other.major)
            .then(self.minor.cmp(&other.minor))
            .then(self.patch.cmp(&other.patch))
    }
}

impl Serialize for Version {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Version {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Version::parse(&s).map_err(serde::de::Error::custom)
    }
}

//! Kernel version keys and rpm version ordering
//!
//! A [`KernelVersion`] is the epoch/version/release triple shared by every
//! sub-package of one kernel build. Equality is structural; ordering follows
//! rpm's segment comparison and is exposed as [`KernelVersion::compare`]
//! rather than `Ord`, because two structurally different keys (`1.0` and
//! `1.00`) may compare equal.

use std::cmp::Ordering;
use std::fmt;

use serde::{Serialize, Serializer};

/// Architecture suffixes rpm appends to package and release strings
const ARCH_SUFFIXES: &[&str] = &[
    "x86_64", "aarch64", "i686", "i386", "noarch", "ppc64le", "s390x", "armv7hl", "riscv64",
];

/// Normalized identifier of one kernel build (e.g. `5.14.0-427.31.1.el9`)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KernelVersion {
    epoch: u32,
    version: String,
    release: String,
}

impl KernelVersion {
    pub fn new(epoch: u32, version: impl Into<String>, release: impl Into<String>) -> Self {
        Self {
            epoch,
            version: version.into(),
            release: release.into(),
        }
    }

    /// Parse an `[epoch:]version-release` token.
    ///
    /// Returns `None` unless the version starts with a digit and both the
    /// version and release are non-empty.
    pub fn parse(evr: &str) -> Option<Self> {
        let evr = evr.trim();
        if evr.is_empty() || evr.chars().any(char::is_whitespace) {
            return None;
        }

        let (version, release) = evr.rsplit_once('-')?;
        let (epoch, version) = match version.split_once(':') {
            Some((epoch, version)) => (epoch.parse::<u32>().ok()?, version),
            None => (0, version),
        };

        if release.is_empty() || !version.starts_with(|c: char| c.is_ascii_digit()) {
            return None;
        }

        Some(Self::new(epoch, version, release))
    }

    /// Parse a running kernel release as reported by `uname -r`.
    ///
    /// Drops a `+variant` suffix (`+debug`, `+rt`) and the arch suffix, so
    /// `5.14.0-427.31.1.el9_4.x86_64+debug` yields `5.14.0-427.31.1.el9_4`.
    pub fn from_kernel_release(release: &str) -> Option<Self> {
        let release = release.trim();
        let release = release.split_once('+').map_or(release, |(base, _)| base);
        Self::parse(strip_arch(release))
    }

    #[allow(dead_code)] // used in tests
    pub fn epoch(&self) -> u32 {
        self.epoch
    }

    #[allow(dead_code)] // used in tests
    pub fn version(&self) -> &str {
        &self.version
    }

    #[allow(dead_code)] // used in tests
    pub fn release(&self) -> &str {
        &self.release
    }

    /// Compare by epoch, then version, then release using rpm ordering
    pub fn compare(&self, other: &Self) -> Ordering {
        self.epoch
            .cmp(&other.epoch)
            .then_with(|| rpmvercmp(&self.version, &other.version))
            .then_with(|| rpmvercmp(&self.release, &other.release))
    }
}

impl fmt::Display for KernelVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.epoch != 0 {
            write!(f, "{}:", self.epoch)?;
        }
        write!(f, "{}-{}", self.version, self.release)
    }
}

impl Serialize for KernelVersion {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Strip a trailing `.arch` suffix if it names a known rpm architecture
pub fn strip_arch(name: &str) -> &str {
    match name.rsplit_once('.') {
        Some((base, arch)) if ARCH_SUFFIXES.contains(&arch) => base,
        _ => name,
    }
}

/// rpm's version segment comparison
///
/// Alphanumeric runs are compared segment by segment: numeric segments
/// numerically, alpha segments lexically, and a numeric segment is newer than
/// an alpha one. `~` sorts before anything (including the end of the string)
/// and `^` sorts after the end of the string but before any other segment.
pub fn rpmvercmp(a: &str, b: &str) -> Ordering {
    if a == b {
        return Ordering::Equal;
    }

    let mut one = a.as_bytes();
    let mut two = b.as_bytes();

    loop {
        one = trim_separators(one);
        two = trim_separators(two);

        match (one.first().copied(), two.first().copied()) {
            (Some(b'~'), Some(b'~')) => {
                one = &one[1..];
                two = &two[1..];
                continue;
            }
            (Some(b'~'), _) => return Ordering::Less,
            (_, Some(b'~')) => return Ordering::Greater,
            _ => {}
        }

        match (one.first().copied(), two.first().copied()) {
            (Some(b'^'), Some(b'^')) => {
                one = &one[1..];
                two = &two[1..];
                continue;
            }
            (Some(b'^'), None) => return Ordering::Greater,
            (None, Some(b'^')) | (Some(b'^'), _) => return Ordering::Less,
            (_, Some(b'^')) => return Ordering::Greater,
            _ => {}
        }

        if one.is_empty() || two.is_empty() {
            break;
        }

        let numeric = one[0].is_ascii_digit();
        let (seg1, rest1) = split_segment(one, numeric);
        let (seg2, rest2) = split_segment(two, numeric);

        // Segments of different types: numeric is newer
        if seg2.is_empty() {
            return if numeric {
                Ordering::Greater
            } else {
                Ordering::Less
            };
        }

        let ord = if numeric {
            compare_numeric(seg1, seg2)
        } else {
            seg1.cmp(seg2)
        };
        if ord != Ordering::Equal {
            return ord;
        }

        one = rest1;
        two = rest2;
    }

    match (one.is_empty(), two.is_empty()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Less,
        (false, _) => Ordering::Greater,
    }
}

fn trim_separators(s: &[u8]) -> &[u8] {
    let start = s
        .iter()
        .position(|&c| c.is_ascii_alphanumeric() || c == b'~' || c == b'^')
        .unwrap_or(s.len());
    &s[start..]
}

fn split_segment(s: &[u8], numeric: bool) -> (&[u8], &[u8]) {
    let end = s
        .iter()
        .position(|c| {
            if numeric {
                !c.is_ascii_digit()
            } else {
                !c.is_ascii_alphabetic()
            }
        })
        .unwrap_or(s.len());
    s.split_at(end)
}

fn compare_numeric(a: &[u8], b: &[u8]) -> Ordering {
    let a = strip_leading_zeros(a);
    let b = strip_leading_zeros(b);
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

fn strip_leading_zeros(s: &[u8]) -> &[u8] {
    let start = s.iter().position(|&c| c != b'0').unwrap_or(s.len());
    &s[start..]
}

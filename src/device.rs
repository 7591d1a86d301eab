// CLASSIFICATION: COMMUNITY
// Filename: device.rs v0.1
// Author: Lukas Bower
// Date Modified: 2026-10-19

//! Block device identifiers and specifier resolution.
//!
//! The resume code only needs `resolve(spec) -> DeviceId`; [`SysfsResolver`]
//! is the default used by `cohresume` when the root filesystem is not yet
//! mounted and only `/sys` and `/dev` are available.

use std::fmt;
use std::fs;
use std::os::unix::fs::{FileTypeExt, MetadataExt};
use std::path::PathBuf;

use log::debug;

/// Kernel device number split into major and minor.
///
/// A major of `0` means the specifier could not be resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DeviceId {
    pub major: u32,
    pub minor: u32,
}

impl DeviceId {
    /// Sentinel returned by resolvers on failure.
    pub const UNRESOLVED: DeviceId = DeviceId { major: 0, minor: 0 };

    pub const fn new(major: u32, minor: u32) -> Self {
        Self { major, minor }
    }

    /// `false` for the unresolved sentinel and any other major-0 id.
    pub const fn is_valid(&self) -> bool {
        self.major != 0
    }

    /// Decode the kernel's 32-bit `new_encode_dev` layout.
    pub const fn from_encoded(dev: u32) -> Self {
        Self {
            major: (dev & 0xfff00) >> 8,
            minor: (dev & 0xff) | ((dev >> 12) & 0xfff00),
        }
    }

    /// Parse `"<major>:<minor>"` in decimal, surrounding whitespace ignored.
    pub fn parse_pair(s: &str) -> Option<Self> {
        let (maj, min) = s.trim().split_once(':')?;
        Some(Self::new(maj.parse().ok()?, min.parse().ok()?))
    }
}

impl fmt::Display for DeviceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.major, self.minor)
    }
}

/// Maps a device specifier to a [`DeviceId`].
pub trait DeviceResolver {
    /// Resolve `spec`; return a major-0 id when it cannot be resolved.
    fn resolve(&self, spec: &str) -> DeviceId;
}

impl<F> DeviceResolver for F
where
    F: Fn(&str) -> DeviceId,
{
    fn resolve(&self, spec: &str) -> DeviceId {
        self(spec)
    }
}

/// Resolver backed by sysfs block class entries and device nodes.
///
/// Accepted forms, tried in order:
/// * `8:3` – explicit major:minor
/// * `0803` – hexadecimal encoded device number
/// * `/dev/sda3` – looked up through `<sys>/class/block/sda3/dev`
/// * any path to a block special file – `stat` of the node
#[derive(Debug, Clone)]
pub struct SysfsResolver {
    sys_root: PathBuf,
}

impl SysfsResolver {
    pub fn new(sys_root: impl Into<PathBuf>) -> Self {
        Self {
            sys_root: sys_root.into(),
        }
    }

    fn from_sysfs(&self, name: &str) -> Option<DeviceId> {
        // sysfs spells '/' in device names as '!' (e.g. cciss!c0d0p1)
        let entry = name.replace('/', "!");
        let path = self.sys_root.join("class/block").join(entry).join("dev");
        let text = fs::read_to_string(&path).ok()?;
        DeviceId::parse_pair(&text)
    }

    fn from_node(spec: &str) -> Option<DeviceId> {
        let meta = fs::metadata(spec).ok()?;
        if !meta.file_type().is_block_device() {
            return None;
        }
        let rdev = meta.rdev() as libc::dev_t;
        Some(DeviceId::new(libc::major(rdev), libc::minor(rdev)))
    }
}

impl DeviceResolver for SysfsResolver {
    fn resolve(&self, spec: &str) -> DeviceId {
        if let Some(id) = DeviceId::parse_pair(spec) {
            return id;
        }
        if !spec.is_empty() && spec.bytes().all(|b| b.is_ascii_hexdigit()) {
            return match u32::from_str_radix(spec, 16) {
                Ok(dev) => DeviceId::from_encoded(dev),
                Err(_) => DeviceId::UNRESOLVED,
            };
        }
        if let Some(name) = spec.strip_prefix("/dev/") {
            if let Some(id) = self.from_sysfs(name) {
                return id;
            }
        }
        match Self::from_node(spec) {
            Some(id) => id,
            None => {
                debug!("resume: cannot resolve device {:?}", spec);
                DeviceId::UNRESOLVED
            }
        }
    }
}

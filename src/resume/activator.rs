// CLASSIFICATION: COMMUNITY
// Filename: activator.rs v0.1
// Author: Lukas Bower
// Date Modified: 2026-10-19

//! Resume activation.
//!
//! Two writes, in order:
//!
//!  1. `resume_offset` ← offset of the image inside the swap device
//!  2. `resume`        ← `major:minor` of the swap device
//!
//! The kernel treats (2) as the resume request and reads the offset at that
//! point, so (1) must be settled first. If an image is found the kernel
//! never returns from (2).

use std::io;

use log::{debug, error, info};

use super::control::{write_attr, ControlSurface, Endpoint};
use super::default_offset::{DefaultOffset, DefaultOffsetSource};
use super::error::{ActivationResult, ResumeError, StepFailure};
use crate::device::{DeviceId, DeviceResolver};
use crate::utils::format::{AttrBuf, ATTR_VALUE_MAX};

/// Programs the hibernation attributes for one resume attempt.
#[derive(Debug, Clone)]
pub struct Activator<S, R, D> {
    surface: S,
    resolver: R,
    defaults: D,
}

impl<S, R, D> Activator<S, R, D>
where
    S: ControlSurface,
    R: DeviceResolver,
    D: DefaultOffsetSource,
{
    pub fn new(surface: S, resolver: R, defaults: D) -> Self {
        Self {
            surface,
            resolver,
            defaults,
        }
    }

    /// Attempt the resume and report the outcome.
    ///
    /// Never fails: errors are logged here and collapsed into an
    /// [`ActivationResult`] so the caller can carry on booting.
    pub fn activate(&self, spec: &str, offset: u64) -> ActivationResult {
        let result = match self.try_activate(spec, offset) {
            Ok(_) => ActivationResult::NoImage,
            Err(err) => {
                error!("{err}");
                err.kind()
            }
        };
        info!("No resume image, doing normal boot...");
        result
    }

    /// Run the activation steps, stopping at the first failure.
    ///
    /// `Ok` carries the device written to `resume`; getting it back at all
    /// means the kernel found no image.
    pub fn try_activate(&self, spec: &str, offset: u64) -> Result<DeviceId, ResumeError> {
        let dev = self.resolver.resolve(spec);
        if !dev.is_valid() {
            return Err(ResumeError::InvalidDevice(spec.to_owned()));
        }

        self.settle_offset(offset).map_err(ResumeError::Offset)?;

        debug!("resume: trying to resume from {spec} ({dev})");
        self.trigger(dev).map_err(ResumeError::Trigger)?;
        Ok(dev)
    }

    fn settle_offset(&self, offset: u64) -> Result<(), StepFailure> {
        let mut handle = match self.surface.open(Endpoint::ResumeOffset) {
            Ok(h) => h,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                // Older kernel: the offset can't be set, but the one from
                // its own command line may already be right.
                let default = self.defaults.read_default();
                if default == DefaultOffset::Explicit(offset) {
                    debug!("resume: kernel default offset {offset} already in effect");
                    return Ok(());
                }
                return Err(StepFailure::DefaultMismatch {
                    default,
                    requested: offset,
                });
            }
            Err(e) => return Err(StepFailure::Open(e)),
        };

        let value = AttrBuf::<ATTR_VALUE_MAX>::format(format_args!("{offset}"))?;
        write_attr(&mut handle, &value)
    }

    fn trigger(&self, dev: DeviceId) -> Result<(), StepFailure> {
        let mut handle = self
            .surface
            .open(Endpoint::Resume)
            .map_err(StepFailure::Open)?;
        let value = AttrBuf::<ATTR_VALUE_MAX>::format(format_args!("{}:{}", dev.major, dev.minor))?;
        write_attr(&mut handle, &value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};
    use std::io::Write;

    #[derive(Default)]
    struct Recorder {
        opened: RefCell<Vec<Endpoint>>,
        missing: Vec<Endpoint>,
        denied: Vec<Endpoint>,
    }

    /// Fixed default offset that counts how often it was asked.
    struct CountingDefaults {
        value: DefaultOffset,
        reads: Cell<usize>,
    }

    impl DefaultOffsetSource for CountingDefaults {
        fn read_default(&self) -> DefaultOffset {
            self.reads.set(self.reads.get() + 1);
            self.value
        }
    }

    struct Sink;

    impl Write for Sink {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            Ok(buf.len())
        }
        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl ControlSurface for Recorder {
        type Handle = Sink;

        fn open(&self, endpoint: Endpoint) -> io::Result<Sink> {
            self.opened.borrow_mut().push(endpoint);
            if self.missing.contains(&endpoint) {
                return Err(io::ErrorKind::NotFound.into());
            }
            if self.denied.contains(&endpoint) {
                return Err(io::ErrorKind::PermissionDenied.into());
            }
            Ok(Sink)
        }
    }

    fn resolve_sda2(spec: &str) -> DeviceId {
        if spec == "/dev/sda2" {
            DeviceId::new(8, 2)
        } else {
            DeviceId::UNRESOLVED
        }
    }

    #[test]
    fn offset_settled_before_trigger() {
        let act = Activator::new(Recorder::default(), resolve_sda2, DefaultOffset::Unknown);
        assert_eq!(act.activate("/dev/sda2", 0), ActivationResult::NoImage);
        assert_eq!(
            *act.surface.opened.borrow(),
            vec![Endpoint::ResumeOffset, Endpoint::Resume]
        );
    }

    #[test]
    fn invalid_device_touches_nothing() {
        let act = Activator::new(Recorder::default(), resolve_sda2, DefaultOffset::Unknown);
        assert_eq!(act.activate("/dev/nope", 0), ActivationResult::InvalidDevice);
        assert!(act.surface.opened.borrow().is_empty());
    }

    #[test]
    fn legacy_kernel_with_matching_default_proceeds() {
        let surface = Recorder {
            missing: vec![Endpoint::ResumeOffset],
            ..Default::default()
        };
        let act = Activator::new(surface, resolve_sda2, DefaultOffset::Explicit(0x800));
        assert_eq!(act.try_activate("/dev/sda2", 0x800).unwrap(), DeviceId::new(8, 2));
        assert_eq!(act.surface.opened.borrow().last(), Some(&Endpoint::Resume));
    }

    #[test]
    fn legacy_kernel_with_mismatch_stops() {
        let surface = Recorder {
            missing: vec![Endpoint::ResumeOffset],
            ..Default::default()
        };
        let act = Activator::new(surface, resolve_sda2, DefaultOffset::Explicit(1));
        assert_eq!(act.activate("/dev/sda2", 2), ActivationResult::OffsetFailed);
        assert_eq!(*act.surface.opened.borrow(), vec![Endpoint::ResumeOffset]);
    }

    #[test]
    fn missing_trigger_endpoint() {
        let surface = Recorder {
            missing: vec![Endpoint::Resume],
            ..Default::default()
        };
        let act = Activator::new(surface, resolve_sda2, DefaultOffset::Unknown);
        assert_eq!(act.activate("/dev/sda2", 0), ActivationResult::ResumeTriggerFailed);
    }

    #[test]
    fn unopenable_offset_attribute_skips_fallback() {
        let surface = Recorder {
            denied: vec![Endpoint::ResumeOffset],
            ..Default::default()
        };
        let defaults = CountingDefaults {
            value: DefaultOffset::Explicit(4096),
            reads: Cell::new(0),
        };
        let act = Activator::new(surface, resolve_sda2, defaults);
        assert!(matches!(
            act.try_activate("/dev/sda2", 4096),
            Err(ResumeError::Offset(StepFailure::Open(_)))
        ));
        assert_eq!(act.activate("/dev/sda2", 4096), ActivationResult::OffsetFailed);
        assert_eq!(act.defaults.reads.get(), 0);
        assert_eq!(
            *act.surface.opened.borrow(),
            vec![Endpoint::ResumeOffset, Endpoint::ResumeOffset]
        );
    }
}

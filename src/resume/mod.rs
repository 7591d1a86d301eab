// CLASSIFICATION: COMMUNITY
// Filename: mod.rs v0.1
// Author: Lukas Bower
// Date Modified: 2026-10-19
//
// ─────────────────────────────────────────────────────────────
// Cohesix · Resume From Hibernation
//
// Runs once in early userspace, before the root filesystem is
// mounted. Decides whether the kernel should resume from a
// suspend-to-disk image and pokes /sys/power if so.
//
//  1. `resume=` (or the configured default) names the device
//  2. `resume_offset=` locates the image within it
//  3. `noresume` vetoes the attempt
//
// Nothing here may stop the boot: every failure ends up as a
// logged [`ActivationResult`] and the caller carries on.
// ─────────────────────────────────────────────────────────────

pub mod activator;
pub mod control;
pub mod default_offset;
pub mod error;

use log::debug;

pub use activator::Activator;
pub use control::{ControlSurface, Endpoint, SysPower};
pub use default_offset::{DefaultOffset, DefaultOffsetSource, KernelCmdline};
pub use error::{ActivationResult, ResumeError, StepFailure};

use crate::bootloader::args::BootParams;
use crate::config::ResumeConfig;
use crate::device::{DeviceResolver, SysfsResolver};
use crate::utils::num::parse_auto_base;

/// What the resume decision did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// No device configured or `noresume` given; nothing was touched.
    NoAction,
    Attempted(ActivationResult),
}

/// Resume parameters gathered from the boot arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResumeRequest {
    pub device_spec: String,
    pub offset: u64,
    pub noresume: bool,
}

impl ResumeRequest {
    /// Collect the request, falling back to `default_device` when `resume=`
    /// is absent.
    ///
    /// Returns `None` when no device is named at all; the remaining
    /// parameters are not looked at in that case.
    pub fn from_params<P: BootParams + ?Sized>(params: &P, default_device: &str) -> Option<Self> {
        let device_spec = params.get_arg("resume=").unwrap_or(default_device);
        if device_spec.is_empty() {
            return None;
        }
        let offset = params.get_arg("resume_offset=").map_or(0, parse_auto_base);
        Some(Self {
            device_spec: device_spec.to_owned(),
            offset,
            noresume: params.get_flag("noresume"),
        })
    }
}

/// Resume decision bound to a configured [`Activator`].
#[derive(Debug, Clone)]
pub struct Resumer<S, R, D> {
    default_device: String,
    activator: Activator<S, R, D>,
}

impl Resumer<SysPower, SysfsResolver, KernelCmdline> {
    /// Wire the resumer to the live kernel interfaces named in `cfg`.
    pub fn from_config(cfg: &ResumeConfig) -> Self {
        Resumer::new(
            cfg.default_device.clone(),
            Activator::new(
                SysPower::new(&cfg.power_dir),
                SysfsResolver::new(&cfg.sys_root),
                KernelCmdline::new(&cfg.cmdline_path),
            ),
        )
    }
}

impl<S, R, D> Resumer<S, R, D>
where
    S: ControlSurface,
    R: DeviceResolver,
    D: DefaultOffsetSource,
{
    pub fn new(default_device: impl Into<String>, activator: Activator<S, R, D>) -> Self {
        Self {
            default_device: default_device.into(),
            activator,
        }
    }

    pub fn activator(&self) -> &Activator<S, R, D> {
        &self.activator
    }

    /// Decide whether to resume and, if so, try it.
    pub fn attempt_resume<P: BootParams + ?Sized>(&self, params: &P) -> Outcome {
        let Some(req) = ResumeRequest::from_params(params, &self.default_device) else {
            debug!("resume: no resume device specified");
            return Outcome::NoAction;
        };
        // TODO: hand the device back to swapon when noresume skips a valid image
        if req.noresume {
            debug!("resume: noresume requested, skipping {}", req.device_spec);
            return Outcome::NoAction;
        }
        Outcome::Attempted(self.activator.activate(&req.device_spec, req.offset))
    }
}

/// One-shot resume attempt against the live system described by `cfg`.
pub fn attempt_resume<P: BootParams + ?Sized>(params: &P, cfg: &ResumeConfig) -> Outcome {
    Resumer::from_config(cfg).attempt_resume(params)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bootloader::args::parse_cmdline;

    #[test]
    fn request_uses_default_device() {
        let req = ResumeRequest::from_params(&parse_cmdline("quiet"), "/dev/sda2").unwrap();
        assert_eq!(req.device_spec, "/dev/sda2");
        assert_eq!(req.offset, 0);
        assert!(!req.noresume);
    }

    #[test]
    fn request_offset_auto_base() {
        let params = parse_cmdline("resume=8:2 resume_offset=0x1A");
        assert_eq!(ResumeRequest::from_params(&params, "").unwrap().offset, 26);
        let params = parse_cmdline("resume=8:2 resume_offset=");
        assert_eq!(ResumeRequest::from_params(&params, "").unwrap().offset, 0);
        let params = parse_cmdline("resume=8:2 resume_offset=swap");
        assert_eq!(ResumeRequest::from_params(&params, "").unwrap().offset, 0);
    }

    #[test]
    fn no_device_no_request() {
        assert_eq!(ResumeRequest::from_params(&parse_cmdline("noresume"), ""), None);
    }
}

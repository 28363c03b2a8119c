//! Monitor geometry
//!
//! Fullscreen layout needs the usable pixel box of the primary monitor. The
//! production implementation queries winit; headless environments fall back
//! to a common desktop resolution.

use crate::utils::error::{IntoPlayerError, Result};
use log::{debug, warn};
use winit::event_loop::EventLoop;

/// Usable pixel dimensions of a monitor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonitorBox {
    pub width: u32,
    pub height: u32,
}

impl MonitorBox {
    /// Fallback when no monitor can be discovered.
    pub const FALLBACK: MonitorBox = MonitorBox {
        width: 1920,
        height: 1080,
    };
}

/// Monitor geometry trait.
pub trait DisplayGeometry {
    /// Pixel box of the primary monitor
    fn primary_monitor_box(&self) -> Result<MonitorBox>;
}

/// Monitor geometry backed by a winit event loop.
///
/// The event loop is only ever used for monitor enumeration; it is never
/// run.
pub struct WinitGeometry {
    event_loop: EventLoop<()>,
}

impl WinitGeometry {
    pub fn new() -> Result<Self> {
        let event_loop = EventLoop::new().geometry_err("creating event loop")?;
        Ok(Self { event_loop })
    }
}

impl DisplayGeometry for WinitGeometry {
    // Querying monitors without running the loop only exists through the
    // deprecated pre-ActiveEventLoop accessors.
    #[allow(deprecated)]
    fn primary_monitor_box(&self) -> Result<MonitorBox> {
        let monitor = self
            .event_loop
            .primary_monitor()
            .or_else(|| self.event_loop.available_monitors().next());

        match monitor {
            Some(monitor) => {
                let size = monitor.size();
                debug!("primary monitor is {} x {}", size.width, size.height);
                Ok(MonitorBox {
                    width: size.width,
                    height: size.height,
                })
            }
            None => {
                warn!(
                    "no monitor found, assuming {} x {}",
                    MonitorBox::FALLBACK.width,
                    MonitorBox::FALLBACK.height
                );
                Ok(MonitorBox::FALLBACK)
            }
        }
    }
}

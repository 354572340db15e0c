//! Bus clock masks (PM) and SERCOM core clocks (GCLK)

use atsamd_hal::clock::{ClockGenId, GenericClockController};
use sercom_hal::{ClockControl, ClockGenerator, SercomId};

use crate::pac;

/// First SERCOM bit in PM.APBCMASK
const APBCMASK_SERCOM0: u32 = 1 << 2;

/// APBCMASK bit of `sercom`
pub fn apbc_mask(sercom: SercomId) -> u32 {
    APBCMASK_SERCOM0 << sercom.index()
}

/// Generator id of a clock generator
pub fn clock_gen_id(generator: ClockGenerator) -> ClockGenId {
    match generator {
        ClockGenerator::Gclk0 => ClockGenId::GCLK0,
        ClockGenerator::Gclk1 => ClockGenId::GCLK1,
        ClockGenerator::Gclk2 => ClockGenId::GCLK2,
        ClockGenerator::Gclk3 => ClockGenId::GCLK3,
    }
}

/// PM bus clock gating plus generic clock routing through the HAL's
/// clock controller
///
/// Generator setup (sources, dividers) stays with whoever built the
/// controller; this only routes an already running generator.
pub struct PowerClocks {
    pm: pac::PM,
    clocks: GenericClockController,
}

impl PowerClocks {
    /// Take PM and the configured clock controller
    pub fn new(pm: pac::PM, clocks: GenericClockController) -> Self {
        Self { pm, clocks }
    }
}

impl ClockControl for PowerClocks {
    fn enable_bus_clock(&mut self, sercom: SercomId) {
        let mask = apbc_mask(sercom);
        self.pm
            .apbcmask
            .modify(|r, w| unsafe { w.bits(r.bits() | mask) });
    }

    fn enable_core_clock(&mut self, sercom: SercomId, generator: ClockGenerator) {
        let Some(gclk) = self.clocks.get_gclk(clock_gen_id(generator)) else {
            #[cfg(feature = "defmt")]
            defmt::warn!("{}: generator {} not running", sercom, generator);
            return;
        };

        // The returned handle only carries the frequency; the channel stays
        // enabled after it is dropped
        let routed = match sercom {
            SercomId::Sercom0 => self.clocks.sercom0_core(&gclk).is_some(),
            SercomId::Sercom1 => self.clocks.sercom1_core(&gclk).is_some(),
            SercomId::Sercom2 => self.clocks.sercom2_core(&gclk).is_some(),
            SercomId::Sercom3 => self.clocks.sercom3_core(&gclk).is_some(),
            SercomId::Sercom4 => self.clocks.sercom4_core(&gclk).is_some(),
            SercomId::Sercom5 => self.clocks.sercom5_core(&gclk).is_some(),
        };
        if !routed {
            #[cfg(feature = "defmt")]
            defmt::warn!("{}: core clock already claimed", sercom);
        }
    }
}

//! The register-driven activation state machine.
//!
//! [`BuzzerController`] is evaluated once per firmware loop iteration. Each
//! poll it takes a point-in-time reading of the shared
//! [`RegisterMap`](crate::registers::RegisterMap), decides whether the
//! physical state must change, and when so drives the outputs it owns: the
//! tone source, the four volume-select lines, and the status indicator.
//!
//! The machine has two states, idle and buzzing, and runs forever cycling
//! between them. A buzz starts on an activation edge: the host setting the
//! `active` register to 1, or rewriting any configuration register while it
//! is already 1 (a retrigger, which restarts the buzz with the new
//! parameters and re-arms the duration timer). A buzz ends either when the
//! host clears `active`, or, for a nonzero duration, when the duration
//! watchdog finds the configured time elapsed; in both cases the same
//! [`reset`](BuzzerController::reset) path deasserts every output and
//! clears the `active` register so the host can observe completion.

use embedded_hal::digital::OutputPin;

use crate::registers::RegisterMap;
use crate::volume::VolumeLevel;
use crate::ToneSource;

/// Errors from the outputs the controller drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error<PinE, ToneE> {
    /// An output pin could not be driven.
    Pin(PinE),
    /// The tone source failed to start or stop.
    Tone(ToneE),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Idle,
    Buzzing,
}

/// The buzzer activation state machine.
///
/// `P` is the (type-erased) output pin type used for the four volume-select
/// lines and the status indicator; `T` is the tone source. The controller
/// exclusively owns these outputs, so no locking is needed anywhere: there
/// is exactly one writer of the physical state.
///
/// The pins are expected to be configured as outputs and driven low before
/// the controller is built; the controller starts out idle and touches them
/// only on state transitions.
pub struct BuzzerController<P, T> {
    volume_lines: [P; 4],
    status: P,
    tone: T,
    // Shadow of the host configuration, adopted on change so the next
    // activation always uses fresh parameters.
    volume: u8,
    tone_frequency: u16,
    duration: u16,
    // Only meaningful while buzzing with a nonzero duration.
    start_time: u32,
    state: State,
}

impl<P, T> BuzzerController<P, T>
where
    P: OutputPin,
    T: ToneSource,
{
    /// Creates an idle controller around the outputs it will drive.
    ///
    /// `volume_lines` are ordered from the quietest gain path (index 0,
    /// volume setting 1) to the loudest (index 3, volume setting 4).
    pub fn new(volume_lines: [P; 4], status: P, tone: T) -> Self {
        BuzzerController {
            volume_lines,
            status,
            tone,
            volume: 0,
            tone_frequency: 0,
            duration: 0,
            start_time: 0,
            state: State::Idle,
        }
    }

    /// Runs one whole poll cycle: [`update`](Self::update) followed by the
    /// duration watchdog.
    ///
    /// This is what the firmware main loop calls, with `now_ms` taken from
    /// a monotonic millisecond counter.
    pub fn poll(&mut self, regs: &RegisterMap, now_ms: u32) -> Result<(), Error<P::Error, T::Error>> {
        self.update(regs, now_ms)?;
        if self.duration_expired(now_ms) {
            self.reset(regs)?;
        }
        Ok(())
    }

    /// Applies one register snapshot to the machine.
    ///
    /// Adopts any changed configuration into the shadow state, then fires
    /// at most one transition:
    ///
    /// * idle, or any configuration change, with `active == 1` starts (or
    ///   restarts) a buzz;
    /// * `active == 0` while buzzing cancels it via [`reset`](Self::reset).
    ///
    /// Anything else is a no-op: an idle machine with `active == 0`, or a
    /// sustained buzz with unchanged parameters.
    pub fn update(&mut self, regs: &RegisterMap, now_ms: u32) -> Result<(), Error<P::Error, T::Error>> {
        let volume = regs.volume();
        let tone_frequency = regs.tone_frequency();
        let duration = regs.duration();
        let changed = volume != self.volume
            || tone_frequency != self.tone_frequency
            || duration != self.duration;
        if changed {
            self.volume = volume;
            self.tone_frequency = tone_frequency;
            self.duration = duration;
        }

        match regs.active() {
            0x01 if self.state == State::Idle || changed => self.start(now_ms),
            0x00 if self.state == State::Buzzing => self.reset(regs),
            _ => Ok(()),
        }
    }

    /// Starts (or restarts) a buzz from the shadow configuration.
    fn start(&mut self, now_ms: u32) -> Result<(), Error<P::Error, T::Error>> {
        if self.duration > 0 {
            self.start_time = now_ms;
        }

        if self.tone_frequency != 0 {
            self.tone.start_tone(self.tone_frequency).map_err(Error::Tone)?;
            self.select_volume_line(VolumeLevel::from_register(self.volume))?;
        } else {
            // A rest note: keep the output silent rather than asserting a
            // gain path with no tone behind it, which clicks audibly.
            self.tone.stop_tone().map_err(Error::Tone)?;
            self.select_volume_line(VolumeLevel::Muted)?;
        }

        self.status.set_high().map_err(Error::Pin)?;
        self.state = State::Buzzing;
        Ok(())
    }

    /// Deasserts all four volume-select lines, then asserts the one `level`
    /// selects, if any.
    ///
    /// The lines share the tone signal and must never be asserted together,
    /// so the deassert pass always runs first.
    fn select_volume_line(&mut self, level: VolumeLevel) -> Result<(), Error<P::Error, T::Error>> {
        for line in self.volume_lines.iter_mut() {
            line.set_low().map_err(Error::Pin)?;
        }
        if let Some(index) = level.select_index() {
            self.volume_lines[index].set_high().map_err(Error::Pin)?;
        }
        Ok(())
    }

    /// True when a timed buzz has run for its configured duration.
    ///
    /// Never true while idle or when the duration is zero (a sustained
    /// buzz only ends when the host clears the `active` register). Uses
    /// wrapping arithmetic so a millisecond-counter rollover between the
    /// start of a buzz and a poll cannot wedge it.
    pub fn duration_expired(&self, now_ms: u32) -> bool {
        self.state == State::Buzzing
            && self.duration > 0
            && now_ms.wrapping_sub(self.start_time) >= u32::from(self.duration)
    }

    /// Returns everything to the off state: tone stopped, all volume-select
    /// lines and the status indicator deasserted, the `active` register
    /// cleared, machine idle.
    ///
    /// Used for both a host cancel and a duration expiry. Safe to call when
    /// already idle; it only re-writes values that are already in place.
    pub fn reset(&mut self, regs: &RegisterMap) -> Result<(), Error<P::Error, T::Error>> {
        self.tone.stop_tone().map_err(Error::Tone)?;
        self.select_volume_line(VolumeLevel::Muted)?;
        regs.clear_active();
        self.status.set_low().map_err(Error::Pin)?;
        self.state = State::Idle;
        Ok(())
    }

    /// True while a buzz (audible or rest) is in progress.
    pub fn is_active(&self) -> bool {
        self.state == State::Buzzing
    }

    /// Releases the owned outputs.
    pub fn release(self) -> ([P; 4], P, T) {
        (self.volume_lines, self.status, self.tone)
    }
}

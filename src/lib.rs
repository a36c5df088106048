//! Control logic for an I2C-addressable buzzer peripheral.
//!
//! A host writes configuration values (volume, tone frequency, duration, an
//! active flag) into a byte-addressable register map
//! ([`RegisterMap`](registers::RegisterMap)). The firmware polls a
//! [`BuzzerController`](controller::BuzzerController) once per main loop
//! iteration; the controller diffs the map against its cached configuration
//! and drives the physical outputs to match: a tone generator, four mutually
//! exclusive volume-select lines, and a status indicator. A buzz with a
//! nonzero duration times itself out against a monotonic millisecond clock
//! and clears the `active` register on completion so the host can observe
//! that the buzz finished.
//!
//! This library is normally used through a MCU HAL. The HAL provides the
//! five output pins as [`embedded_hal::digital::OutputPin`] implementations
//! and the tone generator as an implementation of [`ToneSource`]. The I2C
//! transport that exposes the register bytes to the host, the persistence of
//! default settings, and pin direction setup all live outside this crate.
//!
//! # For HAL implementers
//!
//! To drive a buzzer board with this library, implement [`ToneSource`] on
//! whatever produces the square wave on the buzzer pin (a PWM timer channel,
//! an Arduino-style `tone()` wrapper). The controller manages the buzz
//! timeout itself, so `start_tone` must keep the tone running until
//! `stop_tone` is called.
//!
//! # Usage
//!
//! ```ignore
//! let regs = RegisterMap::new();
//! let mut controller = BuzzerController::new(volume_lines, status_led, pwm_tone);
//!
//! loop {
//!     i2c_transport.service(&regs);
//!     controller.poll(&regs, millis())?;
//! }
//! ```
//!
//! # Concurrency
//!
//! The model is single-threaded, cooperative polling: the controller never
//! blocks and never sleeps. The register map is the one structure shared
//! with an external actor (the transport may mutate it from an interrupt
//! relative to the polling loop); see the [`registers`] module for how torn
//! multi-byte updates are tolerated.

#![cfg_attr(not(test), no_std)]

pub mod controller;
pub mod nvm;
pub mod registers;
pub mod volume;

/// A source of a single square-wave tone on the buzzer pin.
///
/// This trait is meant to be implemented by the HAL on whatever drives the
/// buzzer element, typically a PWM timer channel routed to the buzzer pin.
pub trait ToneSource {
    /// Error type of the underlying tone hardware.
    type Error;

    /// Start generating a tone at `frequency_hz` and keep it running until
    /// [`stop_tone`](ToneSource::stop_tone) is called.
    ///
    /// Calling this while a tone is already running retunes the output to
    /// the new frequency.
    fn start_tone(&mut self, frequency_hz: u16) -> Result<(), Self::Error>;

    /// Stop generating the tone, leaving the buzzer pin deasserted.
    ///
    /// Must be safe to call when no tone is running.
    fn stop_tone(&mut self) -> Result<(), Self::Error>;
}

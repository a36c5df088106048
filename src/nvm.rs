//! EEPROM layout for configuration kept between power cycles.
//!
//! Persistence itself is handled outside this crate: on a save request
//! (see [`save_requested`](crate::registers::RegisterMap::save_requested))
//! the firmware writes the current configuration to these offsets, and at
//! startup it rebuilds the register map from them with
//! [`RegisterMap::with_config`](crate::registers::RegisterMap::with_config).

/// The device's I2C address (u8).
pub const EEPROM_I2C_ADDRESS: u8 = 0x00;
/// Default tone frequency in Hz (u16).
pub const EEPROM_TONE_FREQUENCY: u8 = 0x01;
/// Default volume setting (u8).
pub const EEPROM_VOLUME: u8 = 0x03;
/// Default buzz duration in milliseconds (u16).
pub const EEPROM_DURATION: u8 = 0x04;

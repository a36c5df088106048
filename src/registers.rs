//! The host-visible register map.
//!
//! During I2C transactions the map is addressed as a run of bytes: the host
//! selects a register with a pointer byte and then reads or writes at that
//! offset. Setting the pointer to [`TONE_FREQUENCY_MSB`] and writing two
//! bytes, for example, loads a new tone frequency. The 16-bit values
//! (frequency in Hz, duration in milliseconds) are split big-endian across
//! adjacent registers and are only meaningful as the combined
//! `(msb << 8) | lsb` reading.
//!
//! The map itself is a passive data holder: it performs no validation and
//! has no side effects. Out-of-domain bytes (for example a volume above 4)
//! are stored as written and given a defined interpretation downstream by
//! the [`controller`](crate::controller).
//!
//! Each register is a [`VolatileCell`], so the transport may read and write
//! the map through a shared reference, from an interrupt if need be. A host
//! update of a 16-bit pair can land between the two byte writes relative to
//! the polling loop; the controller may then observe a torn value for one
//! cycle. Because every cycle re-reads the map and only acts on a changed
//! combined reading, a torn read delays a transition by one poll instead of
//! corrupting state.

use vcell::VolatileCell;

/// Device identity, reads [`DEVICE_ID`]. Read-only.
pub const ID: u8 = 0x00;
/// Firmware minor version. Read-only.
pub const FIRMWARE_MINOR: u8 = 0x01;
/// Firmware major version. Read-only.
pub const FIRMWARE_MAJOR: u8 = 0x02;
/// High byte of the 16-bit tone frequency in Hz. Zero frequency is a rest
/// note (silence).
pub const TONE_FREQUENCY_MSB: u8 = 0x03;
/// Low byte of the 16-bit tone frequency.
pub const TONE_FREQUENCY_LSB: u8 = 0x04;
/// Volume setting, 0 = muted, 1..=4 = increasing loudness.
pub const VOLUME: u8 = 0x05;
/// High byte of the 16-bit buzz duration in milliseconds. Zero duration
/// sustains until the host clears [`ACTIVE`].
pub const DURATION_MSB: u8 = 0x06;
/// Low byte of the 16-bit buzz duration.
pub const DURATION_LSB: u8 = 0x07;
/// Buzz request flag: write 1 to start (or retrigger), 0 to stop. Cleared
/// by the firmware when a timed buzz completes on its own.
pub const ACTIVE: u8 = 0x08;
/// Write 1 to request that the current configuration be persisted.
pub const SAVE_SETTINGS: u8 = 0x09;
/// The device's I2C address.
pub const I2C_ADDRESS: u8 = 0x0A;

/// Value of the [`ID`] register.
pub const DEVICE_ID: u8 = 0x5E;
/// Firmware version reported in [`FIRMWARE_MAJOR`] / [`FIRMWARE_MINOR`].
pub const FIRMWARE_VERSION: (u8, u8) = (1, 0);
/// Factory default I2C address.
pub const DEFAULT_I2C_ADDRESS: u8 = 0x34;

/// The shared register map, one byte-sized register per field.
///
/// Constructed once at startup and alive for the whole process: either with
/// factory defaults ([`RegisterMap::new`]) or with configuration restored
/// from persistent storage ([`RegisterMap::with_config`]).
///
/// The transport owns this structure and addresses it with
/// [`read`](RegisterMap::read) and [`write`](RegisterMap::write). The
/// controller reads it through the typed getters and holds exactly one
/// write-back right: [`clear_active`](RegisterMap::clear_active).
pub struct RegisterMap {
    id: VolatileCell<u8>,
    firmware_minor: VolatileCell<u8>,
    firmware_major: VolatileCell<u8>,
    tone_frequency_msb: VolatileCell<u8>,
    tone_frequency_lsb: VolatileCell<u8>,
    volume: VolatileCell<u8>,
    duration_msb: VolatileCell<u8>,
    duration_lsb: VolatileCell<u8>,
    active: VolatileCell<u8>,
    save_settings: VolatileCell<u8>,
    i2c_address: VolatileCell<u8>,
}

impl RegisterMap {
    /// Creates a map with factory default configuration: everything off,
    /// the address set to [`DEFAULT_I2C_ADDRESS`].
    pub fn new() -> Self {
        Self::with_config(0, 0, 0, DEFAULT_I2C_ADDRESS)
    }

    /// Creates a map with configuration restored from persistence.
    pub fn with_config(tone_frequency: u16, volume: u8, duration: u16, i2c_address: u8) -> Self {
        RegisterMap {
            id: VolatileCell::new(DEVICE_ID),
            firmware_minor: VolatileCell::new(FIRMWARE_VERSION.1),
            firmware_major: VolatileCell::new(FIRMWARE_VERSION.0),
            tone_frequency_msb: VolatileCell::new((tone_frequency >> 8) as u8),
            tone_frequency_lsb: VolatileCell::new(tone_frequency as u8),
            volume: VolatileCell::new(volume),
            duration_msb: VolatileCell::new((duration >> 8) as u8),
            duration_lsb: VolatileCell::new(duration as u8),
            active: VolatileCell::new(0),
            save_settings: VolatileCell::new(0),
            i2c_address: VolatileCell::new(i2c_address),
        }
    }

    /// Reads the register at `offset`, as seen by the host.
    ///
    /// Offsets past the end of the map read as zero.
    pub fn read(&self, offset: u8) -> u8 {
        match offset {
            ID => self.id.get(),
            FIRMWARE_MINOR => self.firmware_minor.get(),
            FIRMWARE_MAJOR => self.firmware_major.get(),
            TONE_FREQUENCY_MSB => self.tone_frequency_msb.get(),
            TONE_FREQUENCY_LSB => self.tone_frequency_lsb.get(),
            VOLUME => self.volume.get(),
            DURATION_MSB => self.duration_msb.get(),
            DURATION_LSB => self.duration_lsb.get(),
            ACTIVE => self.active.get(),
            SAVE_SETTINGS => self.save_settings.get(),
            I2C_ADDRESS => self.i2c_address.get(),
            _ => 0,
        }
    }

    /// Writes the register at `offset`, as requested by the host.
    ///
    /// The identity registers (`0x00..=0x02`) are read-only; writes to them
    /// and to offsets past the end of the map are ignored.
    pub fn write(&self, offset: u8, value: u8) {
        match offset {
            TONE_FREQUENCY_MSB => self.tone_frequency_msb.set(value),
            TONE_FREQUENCY_LSB => self.tone_frequency_lsb.set(value),
            VOLUME => self.volume.set(value),
            DURATION_MSB => self.duration_msb.set(value),
            DURATION_LSB => self.duration_lsb.set(value),
            ACTIVE => self.active.set(value),
            SAVE_SETTINGS => self.save_settings.set(value),
            I2C_ADDRESS => self.i2c_address.set(value),
            _ => {}
        }
    }

    /// The configured tone frequency in Hz. Zero is a rest note.
    pub fn tone_frequency(&self) -> u16 {
        u16::from(self.tone_frequency_msb.get()) << 8 | u16::from(self.tone_frequency_lsb.get())
    }

    /// The configured volume byte, 0 = muted, 1..=4 = increasing loudness.
    pub fn volume(&self) -> u8 {
        self.volume.get()
    }

    /// The configured buzz duration in milliseconds. Zero sustains forever.
    pub fn duration(&self) -> u16 {
        u16::from(self.duration_msb.get()) << 8 | u16::from(self.duration_lsb.get())
    }

    /// The raw buzz request byte: 1 requests a buzz, 0 requests silence.
    pub fn active(&self) -> u8 {
        self.active.get()
    }

    /// Clears the buzz request flag. The controller calls this when a timed
    /// buzz expires (or a cancel completes) so the host reads back 0.
    pub fn clear_active(&self) {
        self.active.set(0);
    }

    /// True when the host has requested that configuration be persisted.
    pub fn save_requested(&self) -> bool {
        self.save_settings.get() != 0
    }

    /// Acknowledges a save request after the settings have been persisted.
    pub fn clear_save_request(&self) {
        self.save_settings.set(0);
    }

    /// The configured I2C address.
    pub fn i2c_address(&self) -> u8 {
        self.i2c_address.get()
    }
}

impl Default for RegisterMap {
    fn default() -> Self {
        Self::new()
    }
}

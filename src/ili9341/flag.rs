/// Parameter byte values for the ILI9341 commands this driver issues.
///
/// All constants are documented inline with their respective values.
pub struct Flag;
#[allow(missing_docs)]
impl Flag {
    // Pixel Format Set (0x3A) flags
    pub const PIXEL_FORMAT_16BPP: u8 = 0x55; // 16 bits/pixel on both RGB and MCU interface
    pub const PIXEL_FORMAT_18BPP: u8 = 0x66; // 18 bits/pixel (unused, for reference)

    // Memory Access Control (0x36) bits
    pub const MADCTL_MY: u8 = 0x80; // Row address order
    pub const MADCTL_MX: u8 = 0x40; // Column address order
    pub const MADCTL_MV: u8 = 0x20; // Row/column exchange
    pub const MADCTL_ML: u8 = 0x10; // Vertical refresh order
    pub const MADCTL_BGR: u8 = 0x08; // BGR subpixel order (these panels are BGR)

    // Orientation bytes (combinations of the above)
    pub const MADCTL_PORTRAIT: u8 = Self::MADCTL_MX | Self::MADCTL_BGR; // 0x48
    pub const MADCTL_PORTRAIT_FLIPPED: u8 = Self::MADCTL_MY | Self::MADCTL_BGR; // 0x88
    pub const MADCTL_LANDSCAPE: u8 = Self::MADCTL_MV | Self::MADCTL_BGR; // 0x28
    pub const MADCTL_LANDSCAPE_FLIPPED: u8 =
        Self::MADCTL_MV | Self::MADCTL_MX | Self::MADCTL_MY | Self::MADCTL_BGR; // 0xE8

    // 3-Gamma Control (0xF2)
    pub const GAMMA3_DEFAULT: u8 = 0x0F;
}

//! ILI9341 command opcodes used by this driver

/// ILI9341 command set
pub struct Cmd;
impl Cmd {
    // Init
    /// Software reset
    pub const SW_RESET: u8 = 0x01;
    /// Exit sleep mode; the panel needs a long settle afterwards
    pub const SLEEP_OUT: u8 = 0x11;
    /// Display on
    pub const DISPLAY_ON: u8 = 0x29;
    /// Memory access control (scan direction / orientation)
    pub const MEMORY_ACCESS_CONTROL: u8 = 0x36;
    /// Interface pixel format
    pub const PIXEL_FORMAT_SET: u8 = 0x3A;
    /// 3-gamma control
    pub const GAMMA3_CONTROL: u8 = 0xF2;

    // Drawing
    /// Column address set (window X start/end)
    pub const COLUMN_ADDR_SET: u8 = 0x2A;
    /// Page address set (window Y start/end)
    pub const PAGE_ADDR_SET: u8 = 0x2B;
    /// Memory write; subsequent data bytes fill the address window
    pub const RAM_WRITE: u8 = 0x2C;
}

/*
Datasheet names for the opcodes above:
0x01 - SWRESET  Software Reset
0x11 - SLPOUT   Sleep Out
0x29 - DISPON   Display ON
0x2A - CASET    Column Address Set
0x2B - PASET    Page Address Set
0x2C - RAMWR    Memory Write
0x36 - MADCTL   Memory Access Control
0x3A - COLMOD   Pixel Format Set
0xF2 - 3GAMMA   Enable 3G (gamma control)
*/

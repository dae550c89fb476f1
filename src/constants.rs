pub const WINDOW_WIDTH: i32 = 1280;            // Default window width
pub const WINDOW_HEIGHT: i32 = 800;            // Default window height
pub const FPS: u32 = 60;                       // Frames per second

pub const CONTROL_HEIGHT: i32 = 28;            // Height of every control in the bottom bar
pub const BUTTON_WIDTH: i32 = 80;              // Prev / next / jump buttons
pub const JUMP_INPUT_WIDTH: i32 = 150;         // Jump-to-index text field
pub const CONTROL_SPACING: i32 = 6;            // Horizontal gap between controls
pub const BAR_PADDING: i32 = 8;                // Padding around the bottom bar
pub const FONT_SIZE: i32 = 20;                 // Status label and control text
pub const STATUS_WIDTH: i32 = 170;             // Space reserved for the status label

pub const AXIS_MARGIN: i32 = 36;               // Room for tick labels when axes are kept
pub const TICK_LENGTH: i32 = 5;                // Tick mark length in pixels
pub const TICK_TARGET_COUNT: u32 = 6;          // Approximate number of ticks per axis

pub const JUMP_INPUT_MAX_CHARS: usize = 20;    // Longest accepted jump text

pub const PREVIOUS_TOOLTIP: &str = "Previous";
pub const NEXT_TOOLTIP: &str = "Next";
pub const JUMP_TOOLTIP: &str = "Skip to image.";
pub const JUMP_PLACEHOLDER: &str = "Type in image index";

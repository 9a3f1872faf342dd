use ratatui::style::Color;

pub struct Theme {
    pub fg: Color,
    pub primary: Color,   // Blue
    pub comment: Color,   // Grey
    pub success: Color,   // Green
    pub error: Color,     // Red
    pub string: Color,
    pub number: Color,
    pub float: Color,
    pub border_focused: Color,
    pub border_normal: Color,
    pub status_bg: Color,
    pub type_name: Color, // Cyan for type tags
}

pub const DEFAULT_THEME: Theme = Theme {
    fg: Color::Rgb(205, 214, 244),
    primary: Color::Rgb(137, 180, 250),   // Blue
    comment: Color::Rgb(108, 112, 134),
    success: Color::Rgb(166, 227, 161),
    error: Color::Rgb(243, 139, 168),
    string: Color::Rgb(166, 227, 161),         // Green for text values
    number: Color::Rgb(250, 179, 135),         // Orange for integers
    float: Color::Rgb(245, 194, 231),          // Pink for floats
    border_focused: Color::Rgb(249, 226, 175), // Yellow border for the input line
    border_normal: Color::Rgb(108, 112, 134),  // Grey border for normal
    status_bg: Color::Rgb(50, 50, 70),
    type_name: Color::Rgb(148, 226, 213), // Cyan/teal for type tags
};

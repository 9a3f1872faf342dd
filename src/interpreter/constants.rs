// Constants for the stack calculator

/// Maximum number of levels held by the stack
pub const MAX_LEVELS: usize = 5;

/// Maximum characters in a text value
pub const MAX_TEXT_LEN: usize = 32;

/// Maximum characters accepted on one input line (terminator excluded)
pub const MAX_INPUT_LEN: usize = 32;

/// Significant digits used when rendering floats (`%.10g`)
pub const FLOAT_PRECISION: usize = 10;

/// Prompt printed before each input line and prefixed to echoed input in the log
pub const PROMPT: &str = "# ";

/// Rendering of a stack with no levels
pub const EMPTY_STACK: &str = "Empty Stack";

/// Lines kept in memory for the log pane; the log file keeps everything
pub const TRANSCRIPT_CAPACITY: usize = 1000;

/// Interaction log written when no path is configured
pub const DEFAULT_LOG_PATH: &str = "./stackcalc_log.txt";

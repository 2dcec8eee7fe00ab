//! Character constants the scanner dispatches on.

// Whitespace and line terminators
pub const LINE_FEED: char = '\n';
pub const CARRIAGE_RETURN: char = '\r';
pub const TAB: char = '\t';
pub const SPACE: char = ' ';

// Punctuation
pub const OPEN_PAREN: char = '(';
pub const CLOSE_PAREN: char = ')';
pub const OPEN_BRACE: char = '{';
pub const CLOSE_BRACE: char = '}';
pub const COMMA: char = ',';
pub const DOT: char = '.';
pub const MINUS: char = '-';
pub const PLUS: char = '+';
pub const SEMICOLON: char = ';';
pub const ASTERISK: char = '*';
pub const SLASH: char = '/';

// Operator starts
pub const EXCLAMATION: char = '!';
pub const EQUALS: char = '=';
pub const LESS_THAN: char = '<';
pub const GREATER_THAN: char = '>';

pub const DOUBLE_QUOTE: char = '"';

/// Byte forms of the ASCII terminators, for `memchr` searches.
pub const LINE_FEED_BYTE: u8 = LINE_FEED as u8;
pub const DOUBLE_QUOTE_BYTE: u8 = DOUBLE_QUOTE as u8;


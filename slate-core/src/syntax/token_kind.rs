//! Slate Token kinds
//!
//! Only the display mapping lives here; tokens themselves are produced by the
//! front end. Diagnostics use [`TokenKind::display_string`] to render the
//! operator that caused them.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Ord, PartialOrd, Hash)]
pub enum TokenKind {
    // Keywords
    If,
    Then,
    Else,
    ElseIf,
    EndIf,
    For,
    To,
    Step,
    EndFor,
    Goto,
    While,
    EndWhile,
    Sub,
    EndSub,
    And,
    Or,

    // Punctuation
    Dot,
    RightBracket,
    LeftBracket,
    LeftParen,
    RightParen,
    Comma,
    Colon,

    // Operators
    Equal,
    NotEqual,
    Plus,
    Minus,
    Multiply,
    Divide,
    LessThan,
    GreaterThan,
    LessThanOrEqual,
    GreaterThanOrEqual,
}

impl TokenKind {
    /// Printable form used inside diagnostic arguments
    pub const fn display_string(self) -> &'static str {
        match self {
            TokenKind::If => "If",
            TokenKind::Then => "Then",
            TokenKind::Else => "Else",
            TokenKind::ElseIf => "ElseIf",
            TokenKind::EndIf => "EndIf",
            TokenKind::For => "For",
            TokenKind::To => "To",
            TokenKind::Step => "Step",
            TokenKind::EndFor => "EndFor",
            TokenKind::Goto => "Goto",
            TokenKind::While => "While",
            TokenKind::EndWhile => "EndWhile",
            TokenKind::Sub => "Sub",
            TokenKind::EndSub => "EndSub",
            TokenKind::And => "And",
            TokenKind::Or => "Or",

            TokenKind::Dot => ".",
            TokenKind::RightBracket => "]",
            TokenKind::LeftBracket => "[",
            TokenKind::LeftParen => "(",
            TokenKind::RightParen => ")",
            TokenKind::Comma => ",",
            TokenKind::Colon => ":",

            TokenKind::Equal => "=",
            TokenKind::NotEqual => "<>",
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Multiply => "*",
            TokenKind::Divide => "/",
            TokenKind::LessThan => "<",
            TokenKind::GreaterThan => ">",
            TokenKind::LessThanOrEqual => "<=",
            TokenKind::GreaterThanOrEqual => ">=",
        }
    }
}

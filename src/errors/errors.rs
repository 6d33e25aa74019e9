use std::fmt::Display;

use thiserror::Error;

use crate::Position;

/// A syntactic diagnostic collected while parsing.
///
/// Renders as `Error: <message>. <line>:<col>`.
#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::ExpectedIdentifier => "ExpectedIdentifier",
            ErrorImpl::ExpectedTypeOrWalrus => "ExpectedTypeOrWalrus",
            ErrorImpl::ExpectedExpressionAfterWalrus => "ExpectedExpressionAfterWalrus",
            ErrorImpl::ExpectedExpressionAfterType => "ExpectedExpressionAfterType",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::ExpectedIdentifier => ErrorTip::Suggestion(String::from(
                "Constant names must be identifiers",
            )),
            ErrorImpl::ExpectedTypeOrWalrus => ErrorTip::Suggestion(String::from(
                "Write `const name := value` or `const name type = value`",
            )),
            ErrorImpl::ExpectedExpressionAfterWalrus | ErrorImpl::ExpectedExpressionAfterType => {
                ErrorTip::Suggestion(String::from(
                    "A constant value must be a number or an identifier",
                ))
            }
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error: {}. {}", self.internal_error, self.position)
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.internal_error)
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorImpl {
    #[error("expected an identifier after constant declaration")]
    ExpectedIdentifier,
    #[error("expected a type or a walrus (:=) after identifier in constant declaration")]
    ExpectedTypeOrWalrus,
    #[error("expected an expression after walrus in constant declaration")]
    ExpectedExpressionAfterWalrus,
    #[error("expected an expression after type in constant declaration")]
    ExpectedExpressionAfterType,
}

use std::fmt;


#[derive(Clone, PartialEq, Eq, Debug)]
pub enum SquareParseError {
    WrongLength(String),
    InvalidFile(char),
    InvalidRank(char),
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub enum MoveParseError {
    WrongLength(String),
    InvalidSquare(SquareParseError),
    InvalidPromotion(char),
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub enum ConfigError {
    Malformed(String),
    EmptyField(&'static str),
}

impl fmt::Display for SquareParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareParseError::WrongLength(s) => {
                write!(f, "square \"{s}\" must be a file letter followed by a rank digit")
            }
            SquareParseError::InvalidFile(ch) => write!(f, "invalid file '{ch}', expected a-h"),
            SquareParseError::InvalidRank(ch) => write!(f, "invalid rank '{ch}', expected 1-8"),
        }
    }
}

impl fmt::Display for MoveParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveParseError::WrongLength(s) => {
                write!(f, "move \"{s}\" must look like \"e2e4\" or \"e7e8q\"")
            }
            MoveParseError::InvalidSquare(err) => write!(f, "{err}"),
            MoveParseError::InvalidPromotion(ch) => {
                write!(f, "invalid promotion piece '{ch}', expected one of n, b, r, q")
            }
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Malformed(message) => write!(f, "malformed highlight config: {message}"),
            ConfigError::EmptyField(field) => write!(f, "highlight config field `{field}` is empty"),
        }
    }
}

impl std::error::Error for SquareParseError {}
impl std::error::Error for MoveParseError {}
impl std::error::Error for ConfigError {}

impl From<SquareParseError> for MoveParseError {
    fn from(err: SquareParseError) -> Self { MoveParseError::InvalidSquare(err) }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self { ConfigError::Malformed(err.to_string()) }
}

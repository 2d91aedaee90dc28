//! Parsed scenario command events.
//!
//! A script line such as `PriceOracleProxy Deploy (Unitroller Address) 0xCETH`
//! is parsed into a token tree: whitespace separates atoms, parentheses group
//! nested sequences, and double quotes keep an atom together across spaces.

use std::fmt;

/// An error that occurs while parsing a script line into an [`Event`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EventParseError {
    #[error("empty command")]
    Empty,
    #[error("unbalanced parenthesis")]
    UnbalancedParenthesis,
    #[error("unterminated string literal")]
    UnterminatedString,
}

/// A parsed scenario command: a single token, or a sequence of nested events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Atom(String),
    Seq(Vec<Event>),
}

impl Event {
    /// Parses one script line into an event sequence.
    pub fn parse(input: &str) -> Result<Self, EventParseError> {
        let mut chars = input.chars().peekable();
        let elements = parse_elements(&mut chars, false)?;

        if elements.is_empty() {
            return Err(EventParseError::Empty);
        }

        Ok(Event::Seq(elements))
    }

    /// Builds a flat event sequence from plain tokens.
    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Event::Seq(tokens.into_iter().map(|t| Event::Atom(t.as_ref().to_string())).collect())
    }

    pub fn as_atom(&self) -> Option<&str> {
        match self {
            Event::Atom(s) => Some(s),
            Event::Seq(_) => None,
        }
    }

    pub fn as_seq(&self) -> Option<&[Event]> {
        match self {
            Event::Atom(_) => None,
            Event::Seq(elements) => Some(elements),
        }
    }
}

fn parse_elements(
    chars: &mut std::iter::Peekable<std::str::Chars<'_>>,
    nested: bool,
) -> Result<Vec<Event>, EventParseError> {
    let mut elements = vec![];

    while let Some(&c) = chars.peek() {
        match c {
            c if c.is_whitespace() => {
                chars.next();
            }
            '(' => {
                chars.next();
                elements.push(Event::Seq(parse_elements(chars, true)?));
            }
            ')' => {
                if !nested {
                    return Err(EventParseError::UnbalancedParenthesis);
                }
                chars.next();
                return Ok(elements);
            }
            '"' => {
                chars.next();
                let mut atom = String::new();
                loop {
                    match chars.next() {
                        Some('"') => break,
                        Some(c) => atom.push(c),
                        None => return Err(EventParseError::UnterminatedString),
                    }
                }
                elements.push(Event::Atom(atom));
            }
            _ => {
                let mut atom = String::new();
                while let Some(&c) = chars.peek() {
                    if c.is_whitespace() || c == '(' || c == ')' {
                        break;
                    }
                    atom.push(c);
                    chars.next();
                }
                elements.push(Event::Atom(atom));
            }
        }
    }

    // End of input inside a parenthesized group.
    if nested {
        return Err(EventParseError::UnbalancedParenthesis);
    }

    Ok(elements)
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Event::Atom(s) if s.chars().any(char::is_whitespace) => write!(f, "\"{}\"", s),
            Event::Atom(s) => write!(f, "{}", s),
            Event::Seq(elements) => {
                write!(f, "(")?;
                for (i, element) in elements.iter().enumerate() {
                    if i > 0 {
                        write!(f, " ")?;
                    }
                    write!(f, "{}", element)?;
                }
                write!(f, ")")
            }
        }
    }
}

//! Whitespace-token input for points and shapes.
//!
//! Tokens may be spread over any number of lines; the reader pulls lines from
//! the underlying `BufRead` on demand and never reads past what a caller asks
//! for beyond the current line.

use std::collections::VecDeque;
use std::io::BufRead;

use crate::error::{Result, ShapeError};
use crate::point::Point;
use crate::scalar::Coord;

/// Pulls whitespace-separated tokens from a buffered reader.
#[derive(Debug)]
pub struct TokenReader<R> {
    inner: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> TokenReader<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            pending: VecDeque::new(),
        }
    }

    /// Next raw token, or `None` at end of input.
    pub fn next_token(&mut self) -> Result<Option<String>> {
        loop {
            if let Some(tok) = self.pending.pop_front() {
                return Ok(Some(tok));
            }
            let mut line = String::new();
            if self.inner.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_owned));
        }
    }

    /// Next token parsed as `N`, or `None` at end of input.
    pub fn next_value<N: Coord>(&mut self) -> Result<Option<N>> {
        match self.next_token()? {
            Some(token) => token
                .parse::<N>()
                .map(Some)
                .map_err(|_| ShapeError::Parse { token }),
            None => Ok(None),
        }
    }

    /// Read exactly `K` points as `2K` coordinates in `x y` order.
    pub fn read_points<N: Coord, const K: usize>(&mut self) -> Result<[Point<N>; K]> {
        let expected = 2 * K;
        let mut points = [Point::<N>::default(); K];
        for (i, slot) in points.iter_mut().enumerate() {
            let x = self.require(expected, 2 * i)?;
            let y = self.require(expected, 2 * i + 1)?;
            *slot = Point::new(x, y);
        }
        Ok(points)
    }

    /// True once every line has been consumed and no token is pending.
    pub fn is_exhausted(&mut self) -> Result<bool> {
        match self.next_token()? {
            Some(tok) => {
                self.pending.push_front(tok);
                Ok(false)
            }
            None => Ok(true),
        }
    }

    fn require<N: Coord>(&mut self, expected: usize, got: usize) -> Result<N> {
        self.next_value()?
            .ok_or(ShapeError::UnexpectedEof { expected, got })
    }
}

impl<'a> TokenReader<&'a [u8]> {
    /// Reader over an in-memory string.
    pub fn from_text(text: &'a str) -> Self {
        Self::new(text.as_bytes())
    }
}

/// Run `read` over the whole of `text`; leftover tokens are a parse error.
pub(crate) fn parse_exact<'a, T>(
    text: &'a str,
    read: impl FnOnce(&mut TokenReader<&'a [u8]>) -> Result<T>,
) -> Result<T> {
    let mut reader = TokenReader::from_text(text);
    let value = read(&mut reader)?;
    match reader.next_token()? {
        None => Ok(value),
        Some(token) => Err(ShapeError::Parse { token }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_span_lines() {
        let mut r = TokenReader::from_text("1 2\n\n  3\t4\n");
        let pts: [Point<i32>; 2] = r.read_points().unwrap();
        assert_eq!(pts, [Point::new(1, 2), Point::new(3, 4)]);
        assert!(r.is_exhausted().unwrap());
    }

    #[test]
    fn short_input_reports_counts() {
        let mut r = TokenReader::from_text("0 0 1");
        let err = r.read_points::<f64, 2>().unwrap_err();
        assert!(matches!(
            err,
            ShapeError::UnexpectedEof {
                expected: 4,
                got: 3
            }
        ));
    }

    #[test]
    fn bad_token_is_parse_error() {
        let mut r = TokenReader::from_text("0 zero");
        let err = r.read_points::<i64, 1>().unwrap_err();
        match err {
            ShapeError::Parse { token } => assert_eq!(token, "zero"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn integer_reader_rejects_fractions() {
        let mut r = TokenReader::from_text("1.5");
        assert!(matches!(
            r.next_value::<i32>(),
            Err(ShapeError::Parse { .. })
        ));
    }

    #[test]
    fn pending_tokens_survive_exhaustion_probe() {
        let mut r = TokenReader::from_text("5 6");
        assert!(!r.is_exhausted().unwrap());
        assert_eq!(r.next_value::<u32>().unwrap(), Some(5));
        assert_eq!(r.next_value::<u32>().unwrap(), Some(6));
        assert_eq!(r.next_value::<u32>().unwrap(), None);
    }
}

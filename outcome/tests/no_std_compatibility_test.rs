//! Test `no_std` compatibility for outcome
//!
//! Everything here uses only the parts of the crate that exist without the
//! `std` feature.

// For testing in a no_std environment
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use outcome::prelude::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum ParseFailure {
        Empty,
        NotADigit(u8),
    }

    fn parse_digit(input: &[u8]) -> Outcome<u8, ParseFailure> {
        match input.first() {
            None => err(ParseFailure::Empty),
            Some(b) if b.is_ascii_digit() => ok(b - b'0'),
            Some(b) => err(ParseFailure::NotADigit(*b)),
        }
    }

    #[test]
    fn test_constructors() {
        let success: Outcome<u8> = ok(1);
        let failure: Outcome<u8> = err(Absent);
        assert!(success.is_ok());
        assert!(failure.is_err());
    }

    #[test]
    fn test_when_with_enum_error() {
        let digit = matching(parse_digit(b"7")).when(Cases::on_error(|_| 0));
        assert_eq!(digit, 7);

        let code = matching(parse_digit(b"x")).when(
            Cases::on_error(|e: ParseFailure| match e {
                ParseFailure::Empty => 0,
                ParseFailure::NotADigit(b) => u32::from(b),
            })
            .on_ok(|v: u8| u32::from(v)),
        );
        assert_eq!(code, u32::from(b'x'));
    }

    #[test]
    fn test_when_ok_chain() {
        let next = matching(parse_digit(b"")).when_ok(|| 10_u8);
        assert_eq!(next, err(ParseFailure::Empty));
    }

    #[test]
    fn test_result_round_trip() {
        let result: Result<u8, ParseFailure> = parse_digit(b"3").into_result();
        assert_eq!(result, Ok(3));
        assert_eq!(matching(result).when(Cases::on_error(|_| 0)), 3);
    }
}

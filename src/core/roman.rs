use crate::domain::model::{ConversionRequest, ConversionResult};
use crate::utils::error::{ConverterError, Result};

pub const MIN_VALUE: u32 = 1;
pub const MAX_VALUE: u32 = 3999;

const NUMERALS: [(u32, &str); 13] = [
    (1000, "M"),
    (900, "CM"),
    (500, "D"),
    (400, "CD"),
    (100, "C"),
    (90, "XC"),
    (50, "L"),
    (40, "XL"),
    (10, "X"),
    (9, "IX"),
    (5, "V"),
    (4, "IV"),
    (1, "I"),
];

fn symbol_value(c: char) -> Option<u32> {
    match c {
        'I' => Some(1),
        'V' => Some(5),
        'X' => Some(10),
        'L' => Some(50),
        'C' => Some(100),
        'D' => Some(500),
        'M' => Some(1000),
        _ => None,
    }
}

pub fn to_roman(value: u32) -> Result<String> {
    if !(MIN_VALUE..=MAX_VALUE).contains(&value) {
        return Err(ConverterError::IntegerOutOfRange {
            value: value.into(),
        });
    }

    let mut remaining = value;
    let mut out = String::new();
    for (step, symbol) in NUMERALS {
        while remaining >= step {
            out.push_str(symbol);
            remaining -= step;
        }
    }
    Ok(out)
}

/// Parses a canonical numeral. Lowercase is accepted; forms such as `IIII`
/// or `IC` are rejected.
pub fn from_roman(input: &str) -> Result<u32> {
    let invalid = || ConverterError::InvalidRomanNumeral {
        input: input.to_string(),
    };

    let normalized = input.trim().to_ascii_uppercase();
    if normalized.is_empty() {
        return Err(invalid());
    }

    let values = normalized
        .chars()
        .map(symbol_value)
        .collect::<Option<Vec<u32>>>()
        .ok_or_else(invalid)?;

    let mut total: i64 = 0;
    for (i, value) in values.iter().enumerate() {
        match values.get(i + 1) {
            Some(next) if next > value => total -= i64::from(*value),
            _ => total += i64::from(*value),
        }
    }

    // 只接受標準寫法
    let total = u32::try_from(total).map_err(|_| invalid())?;
    match to_roman(total) {
        Ok(canonical) if canonical == normalized => Ok(total),
        _ => Err(invalid()),
    }
}

pub fn parse_integer(input: &str) -> Result<u32> {
    let trimmed = input.trim();
    let value: u64 = trimmed
        .parse()
        .map_err(|_| ConverterError::InvalidInteger {
            input: input.to_string(),
        })?;

    if value < u64::from(MIN_VALUE) || value > u64::from(MAX_VALUE) {
        return Err(ConverterError::IntegerOutOfRange { value });
    }
    // Range checked above.
    Ok(value as u32)
}

/// Runs a request through the local rules, producing both representations.
pub fn convert(request: &ConversionRequest) -> Result<ConversionResult> {
    match request {
        ConversionRequest::RomanToInteger { roman } => {
            let value = from_roman(roman)?;
            Ok(ConversionResult::new(to_roman(value)?, value.to_string()))
        }
        ConversionRequest::IntegerToRoman { integer } => {
            let value = parse_integer(integer)?;
            Ok(ConversionResult::new(to_roman(value)?, value.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_roman_subtractive_pairs() {
        assert_eq!(to_roman(1).unwrap(), "I");
        assert_eq!(to_roman(4).unwrap(), "IV");
        assert_eq!(to_roman(9).unwrap(), "IX");
        assert_eq!(to_roman(14).unwrap(), "XIV");
        assert_eq!(to_roman(40).unwrap(), "XL");
        assert_eq!(to_roman(90).unwrap(), "XC");
        assert_eq!(to_roman(400).unwrap(), "CD");
        assert_eq!(to_roman(1994).unwrap(), "MCMXCIV");
        assert_eq!(to_roman(3999).unwrap(), "MMMCMXCIX");
    }

    #[test]
    fn test_to_roman_rejects_out_of_range() {
        assert!(matches!(
            to_roman(0),
            Err(ConverterError::IntegerOutOfRange { value: 0 })
        ));
        assert!(to_roman(4000).is_err());
    }

    #[test]
    fn test_from_roman() {
        assert_eq!(from_roman("I").unwrap(), 1);
        assert_eq!(from_roman("II").unwrap(), 2);
        assert_eq!(from_roman("XLII").unwrap(), 42);
        assert_eq!(from_roman("MCMXCIV").unwrap(), 1994);
        assert_eq!(from_roman(" mmxxvi ").unwrap(), 2026);
    }

    #[test]
    fn test_from_roman_rejects_non_canonical() {
        for input in ["", "   ", "IIII", "IC", "VX", "IL", "MMMM", "ABC", "X1"] {
            assert!(
                matches!(from_roman(input), Err(ConverterError::InvalidRomanNumeral { .. })),
                "expected '{}' to be rejected",
                input
            );
        }
    }

    #[test]
    fn test_parse_integer() {
        assert_eq!(parse_integer(" 12 ").unwrap(), 12);
        assert!(matches!(
            parse_integer("twelve"),
            Err(ConverterError::InvalidInteger { .. })
        ));
        assert!(matches!(
            parse_integer("-3"),
            Err(ConverterError::InvalidInteger { .. })
        ));
        assert!(matches!(
            parse_integer("4000"),
            Err(ConverterError::IntegerOutOfRange { value: 4000 })
        ));
        assert!(parse_integer("0").is_err());
    }

    #[test]
    fn test_convert_fills_both_representations() {
        let result = convert(&ConversionRequest::RomanToInteger {
            roman: "xiv".to_string(),
        })
        .unwrap();
        assert_eq!(result, ConversionResult::new("XIV", "14"));

        let result = convert(&ConversionRequest::IntegerToRoman {
            integer: "2".to_string(),
        })
        .unwrap();
        assert_eq!(result, ConversionResult::new("II", "2"));
    }
}

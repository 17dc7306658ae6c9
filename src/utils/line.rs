use crate::error::{ErrorKind, ParseError, Result};

/// Parse a spread or total line. Lines move in half points.
pub fn parse_line(text: &str) -> Result<f64> {
    let text = text.trim();
    let value = text.parse::<f64>().map_err(|_| {
        ParseError::new(ErrorKind::InvalidLineFormat, format!("line {:?} is not a number", text))
            .with_detail(text)
    })?;
    validate_line(value).map_err(|e| e.with_detail(text))
}

pub fn validate_line(value: f64) -> Result<f64> {
    if !value.is_finite() || (value * 2.0).fract() != 0.0 {
        return Err(ParseError::new(
            ErrorKind::InvalidLineFormat,
            format!("line {} is not a multiple of 0.5", value),
        ));
    }
    Ok(value)
}

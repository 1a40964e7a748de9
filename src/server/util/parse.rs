use crate::server::error::{internal::InternalError, AppError};

/// Parses a u64 value from a string slice
///
/// Discord transmits every snowflake as a decimal string inside JSON payloads.
///
/// # Arguments
/// - `value` - The string to attempt to parse into `u64`
///
/// # Returns
/// - `Ok(u64)` - Successfully parsed string to `u64`
/// - `Err(AppError::InternalErr(ParseStringId))` - Failed to parse
///   the string as a u64
pub fn parse_u64_from_str(value: &str) -> Result<u64, AppError> {
    let result = value
        .parse::<u64>()
        .map_err(|e| InternalError::ParseStringId {
            value: value.to_string(),
            source: e,
        })?;

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_snowflake() {
        assert_eq!(parse_u64_from_str("1316506358211805244").unwrap(), 1316506358211805244);
    }

    #[test]
    fn rejects_non_numeric() {
        let result = parse_u64_from_str("abc");

        assert!(matches!(
            result,
            Err(AppError::InternalErr(InternalError::ParseStringId { ref value, .. })) if value == "abc"
        ));
    }
}

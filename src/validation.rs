// Registration form validation
// Mercosul plate format: 3 letters, digit, alphanumeric, 2 digits

use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

use crate::patio;

lazy_static! {
    static ref PLACA_RE: Regex = Regex::new(r"^[A-Z]{3}[0-9][0-9A-Z][0-9]{2}$").unwrap();
}

#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("Placa é obrigatória")]
    PlacaObrigatoria,
    #[error("Formato inválido (ex: ABC1D23)")]
    PlacaInvalida,
    #[error("Zona é obrigatória")]
    ZonaObrigatoria,
    #[error("Zona desconhecida: {0}")]
    ZonaDesconhecida(String),
}

pub fn validate_placa(placa: &str) -> Result<(), ValidationError> {
    if placa.is_empty() {
        return Err(ValidationError::PlacaObrigatoria);
    }
    if !PLACA_RE.is_match(placa) {
        return Err(ValidationError::PlacaInvalida);
    }
    Ok(())
}

pub fn validate_zona(zona: &str) -> Result<(), ValidationError> {
    if zona.is_empty() {
        return Err(ValidationError::ZonaObrigatoria);
    }
    if !patio::is_valid_zona(zona) {
        return Err(ValidationError::ZonaDesconhecida(zona.to_string()));
    }
    Ok(())
}

/// Full check run before a register or edit submission touches the store.
pub fn validate_registration(placa: &str, zona: &str) -> Result<(), ValidationError> {
    validate_placa(placa)?;
    validate_zona(zona)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_placas() {
        assert!(validate_placa("ABC1D23").is_ok());
        assert!(validate_placa("XYZ9F87").is_ok());
        // Second alphanumeric slot also accepts a digit
        assert!(validate_placa("ABC1223").is_ok());
    }

    #[test]
    fn test_placa_required() {
        assert_eq!(validate_placa(""), Err(ValidationError::PlacaObrigatoria));
    }

    #[test]
    fn test_malformed_placas() {
        for placa in ["abc1d23", "AB1D23", "ABCD123", "ABC1D2", "ABC1D234", "1231D23"] {
            assert_eq!(
                validate_placa(placa),
                Err(ValidationError::PlacaInvalida),
                "{placa} should be rejected"
            );
        }
    }

    #[test]
    fn test_zona_checks() {
        assert!(validate_zona("A1").is_ok());
        assert_eq!(validate_zona(""), Err(ValidationError::ZonaObrigatoria));
        assert_eq!(
            validate_zona("Z9"),
            Err(ValidationError::ZonaDesconhecida("Z9".to_string()))
        );
    }

    #[test]
    fn test_registration_reports_first_failure() {
        assert_eq!(
            validate_registration("", "A1"),
            Err(ValidationError::PlacaObrigatoria)
        );
        assert_eq!(
            validate_registration("ABC1D23", ""),
            Err(ValidationError::ZonaObrigatoria)
        );
        assert!(validate_registration("ABC1D23", "B2").is_ok());
    }
}

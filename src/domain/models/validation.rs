use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::Regex;
use validator::ValidationError;

static NON_DIGIT: Lazy<Regex> = Lazy::new(|| Regex::new("[^0-9]+").unwrap());

/// Keeps only the numeric-digit characters of `value`, in their original order.
/// Used to normalize identifiers (CPF, phone numbers) before display or
/// submission.
pub fn only_digits(value: &str) -> String {
    NON_DIGIT.replace_all(value, "").into_owned()
}

pub fn is_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().len() < 3 {
        return Err(ValidationError::new("0")
            .with_message(Cow::from("O nome deve ter pelo menos 3 caracteres")));
    }

    Ok(())
}

pub fn is_phone(phone: &str) -> Result<(), ValidationError> {
    let digits = only_digits(phone);

    if digits.len() < 10 || digits.len() > 11 {
        return Err(ValidationError::new("0")
            .with_message(Cow::from("O telefone deve conter 10 ou 11 dígitos")));
    }

    Ok(())
}

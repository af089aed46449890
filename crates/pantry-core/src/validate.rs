//! Pure validation predicates for user-supplied meal data.
//!
//! No I/O, no state: these are the rules every name, ingredient, and
//! category string must pass before the catalog will accept it.

use thiserror::Error;

use pantry_db::models::Category;

/// Errors for malformed or conflicting meal input.
///
/// All of these are recoverable: the interactive flows report the message
/// and re-prompt, the non-interactive flows reject the operation. The
/// catalog is never left half-modified.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("wrong meal category: {0:?} (choose from: breakfast, lunch, dinner)")]
    InvalidCategory(String),

    #[error("wrong meal name format: use letters only")]
    InvalidName(String),

    #[error("wrong ingredient format: use letters only")]
    InvalidIngredient(String),

    #[error("a meal named {0:?} already exists")]
    DuplicateName(String),

    #[error("a meal needs at least one ingredient")]
    EmptyIngredients,
}

/// True iff `s` names one of the three meal categories.
pub fn is_valid_category(s: &str) -> bool {
    s.parse::<Category>().is_ok()
}

/// True iff `s` is a well-formed name or ingredient token: letters and
/// spaces only, at least one letter.
///
/// A string of only spaces is rejected even though it is letters-and-spaces
/// shaped; a blank token is never a usable name.
pub fn is_valid_token(s: &str) -> bool {
    !s.is_empty()
        && s.chars().all(|c| c.is_ascii_alphabetic() || c == ' ')
        && s.chars().any(|c| c.is_ascii_alphabetic())
}

/// True iff every comma-separated token in `s` passes [`is_valid_token`].
///
/// Commas may be followed by whitespace ("eggs, milk" and "eggs,milk" both
/// split the same way).
pub fn is_valid_ingredient_list(s: &str) -> bool {
    split_ingredients(s).all(|token| is_valid_token(token))
}

/// Split and validate an ingredient list, dropping duplicate tokens while
/// preserving first-occurrence order.
pub fn parse_ingredient_list(s: &str) -> Result<Vec<String>, ValidationError> {
    let mut ingredients: Vec<String> = Vec::new();
    for token in split_ingredients(s) {
        if !is_valid_token(token) {
            return Err(ValidationError::InvalidIngredient(token.to_owned()));
        }
        if !ingredients.iter().any(|seen| seen == token) {
            ingredients.push(token.to_owned());
        }
    }
    if ingredients.is_empty() {
        return Err(ValidationError::EmptyIngredients);
    }
    Ok(ingredients)
}

fn split_ingredients(s: &str) -> impl Iterator<Item = &str> {
    s.split(',').map(|token| token.trim_start())
}

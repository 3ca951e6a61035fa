use super::entity::Movie;
use crate::domain::{DomainError, DomainResult};

/// Validates all Movie invariants
/// These are the rules that must hold for a Movie to be well-formed
pub fn validate_movie(movie: &Movie) -> DomainResult<()> {
    validate_title(&movie.title)?;
    validate_genre(movie)?;
    Ok(())
}

/// Title cannot be empty
fn validate_title(title: &str) -> DomainResult<()> {
    if title.trim().is_empty() {
        return Err(DomainError::InvariantViolation(
            "Movie title cannot be empty".to_string(),
        ));
    }
    Ok(())
}

/// A well-formed movie carries at least one genre label.
/// The loader keeps violating records (the upstream store is not guaranteed
/// well-formed), it only reports them.
fn validate_genre(movie: &Movie) -> DomainResult<()> {
    if movie.genre_labels().is_empty() {
        return Err(DomainError::InvariantViolation(format!(
            "Movie {} ({}) has no genre labels",
            movie.id, movie.title
        )));
    }
    Ok(())
}

/// Invariants that must hold true for the Movie domain:
///
/// 1. Identity (MovieID) is immutable and is the equality key everywhere
/// 2. Titles are not unique; never deduplicate by title
/// 3. Title cannot be empty
/// 4. At least one genre label after split + trim
/// 5. Cast order reflects billing order from the association table

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_movie() {
        let movie = Movie::new(1, "Heat", 1995, "Action, Drama");
        assert!(validate_movie(&movie).is_ok());
    }

    #[test]
    fn test_empty_title_fails() {
        let movie = Movie::new(1, "   ", 1995, "Action");
        assert!(validate_movie(&movie).is_err());
    }

    #[test]
    fn test_malformed_genre_fails() {
        let movie = Movie::new(1, "Heat", 1995, " , ,");
        assert!(validate_movie(&movie).is_err());
    }
}

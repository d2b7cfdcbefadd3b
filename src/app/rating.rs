//! Rating form state and client-side validation.

use crate::domain::{ApiError, NewRating, MAX_SCORE, MIN_SCORE};

const DEFAULT_SCORE: i64 = 5;

/// Longest accepted name, in characters.
pub const MAX_NAME_CHARS: usize = 100;

/// Longest accepted comment, in characters.
pub const MAX_COMMENT_CHARS: usize = 2000;

fn capped(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}

/// Raw contents of the "add your rating" form.
///
/// `score` is kept as typed so that out-of-range input can be reported
/// instead of silently clamped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RatingForm {
    pub user_name: String,
    pub score: i64,
    pub comment: String,
}

impl Default for RatingForm {
    fn default() -> Self {
        Self {
            user_name: String::new(),
            score: DEFAULT_SCORE,
            comment: String::new(),
        }
    }
}

impl RatingForm {
    /// Sets the name, keeping at most [`MAX_NAME_CHARS`] characters.
    pub fn set_user_name(&mut self, name: &str) {
        self.user_name = capped(name, MAX_NAME_CHARS);
    }

    /// Sets the comment, keeping at most [`MAX_COMMENT_CHARS`] characters.
    pub fn set_comment(&mut self, comment: &str) {
        self.comment = capped(comment, MAX_COMMENT_CHARS);
    }

    /// Validates the form into a request body.
    ///
    /// The name and comment are trimmed; a blank comment is sent as absent.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] when the name is blank, the score is
    /// outside `1..=5`, or the name or comment is over its length limit. No
    /// request is made in any of these cases.
    pub fn validate(&self) -> Result<NewRating, ApiError> {
        let user_name = self.user_name.trim();
        if user_name.is_empty() {
            return Err(ApiError::Validation("Please enter your name.".to_string()));
        }
        if user_name.chars().count() > MAX_NAME_CHARS {
            return Err(ApiError::Validation(format!(
                "Name must be at most {MAX_NAME_CHARS} characters."
            )));
        }

        let score = u8::try_from(self.score)
            .ok()
            .filter(|score| (MIN_SCORE..=MAX_SCORE).contains(score))
            .ok_or_else(|| ApiError::Validation("Score must be between 1 and 5.".to_string()))?;

        let comment = self.comment.trim();
        if comment.chars().count() > MAX_COMMENT_CHARS {
            return Err(ApiError::Validation(format!(
                "Comment must be at most {MAX_COMMENT_CHARS} characters."
            )));
        }
        Ok(NewRating {
            user_name: user_name.to_string(),
            score,
            comment: (!comment.is_empty()).then(|| comment.to_string()),
        })
    }

    /// Restores the defaults (`""`, 5, `""`).
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(user_name: &str, score: i64, comment: &str) -> RatingForm {
        RatingForm {
            user_name: user_name.to_string(),
            score,
            comment: comment.to_string(),
        }
    }

    #[test]
    fn blank_name_is_rejected() {
        let err = form(" ", 4, "").validate().unwrap_err();
        assert_eq!(err, ApiError::Validation("Please enter your name.".to_string()));
    }

    #[test]
    fn out_of_range_score_is_rejected() {
        for score in [0, 6, -1, 300] {
            let err = form("Ada", score, "").validate().unwrap_err();
            assert_eq!(err.message(), "Score must be between 1 and 5.");
        }
    }

    #[test]
    fn name_is_checked_before_score() {
        let err = form("", 9, "").validate().unwrap_err();
        assert_eq!(err.message(), "Please enter your name.");
    }

    #[test]
    fn valid_form_trims_and_drops_blank_comment() {
        let rating = form("  Ada ", 3, "   ").validate().unwrap();
        assert_eq!(
            rating,
            NewRating {
                user_name: "Ada".to_string(),
                score: 3,
                comment: None,
            }
        );

        let rating = form("Ada", 5, " Lovely ").validate().unwrap();
        assert_eq!(rating.comment.as_deref(), Some("Lovely"));
    }

    #[test]
    fn overlong_fields_are_rejected() {
        let err = form(&"a".repeat(101), 4, "").validate().unwrap_err();
        assert_eq!(err.message(), "Name must be at most 100 characters.");

        let err = form("Ada", 4, &"é".repeat(2001)).validate().unwrap_err();
        assert_eq!(err.message(), "Comment must be at most 2000 characters.");

        assert!(form(&"a".repeat(100), 4, &"é".repeat(2000)).validate().is_ok());
    }

    #[test]
    fn setters_cap_input_length() {
        let mut f = RatingForm::default();
        f.set_user_name(&"ñ".repeat(150));
        f.set_comment(&"x".repeat(2500));
        assert_eq!(f.user_name.chars().count(), MAX_NAME_CHARS);
        assert_eq!(f.comment.chars().count(), MAX_COMMENT_CHARS);
        assert!(f.validate().is_ok());
    }

    #[test]
    fn reset_restores_defaults() {
        let mut f = form("Ada", 2, "meh");
        f.reset();
        assert_eq!(f, RatingForm::default());
        assert_eq!(f.score, 5);
    }
}

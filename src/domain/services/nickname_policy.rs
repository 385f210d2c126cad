//! Nickname validation domain service.

use validator::ValidateLength;

/// Default inclusive lower bound on nickname length, in characters.
pub const DEFAULT_MIN_NICKNAME_LENGTH: usize = 3;

/// Default inclusive upper bound on nickname length, in characters.
pub const DEFAULT_MAX_NICKNAME_LENGTH: usize = 20;

/// A nickname rule that a requested nickname broke.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NicknameRuleViolation {
    #[error("nickname must be at least {min} characters (got {actual})")]
    TooShort { min: usize, actual: usize },

    #[error("nickname must be at most {max} characters (got {actual})")]
    TooLong { max: usize, actual: usize },

    #[error("nickname may only contain letters and digits")]
    NotAlphanumeric,
}

/// Length bounds that cannot form a policy.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("nickname length bounds must satisfy 1 <= min_length <= max_length (got {min}..={max})")]
pub struct InvalidNicknameBounds {
    pub min: usize,
    pub max: usize,
}

/// Length and character rules a nickname must satisfy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NicknamePolicy {
    min_length: usize,
    max_length: usize,
}

impl NicknamePolicy {
    /// Create a policy with inclusive length bounds.
    pub fn new(min_length: usize, max_length: usize) -> Result<Self, InvalidNicknameBounds> {
        if min_length == 0 || min_length > max_length {
            return Err(InvalidNicknameBounds {
                min: min_length,
                max: max_length,
            });
        }

        Ok(Self {
            min_length,
            max_length,
        })
    }

    pub fn min_length(&self) -> usize {
        self.min_length
    }

    pub fn max_length(&self) -> usize {
        self.max_length
    }

    /// Check a nickname against the policy.
    ///
    /// Length is checked before the character set, so `"a."` reports
    /// `TooShort` rather than `NotAlphanumeric`.
    pub fn validate(&self, nickname: &str) -> Result<(), NicknameRuleViolation> {
        let within_bounds = nickname.validate_length(
            Some(self.min_length as u64),
            Some(self.max_length as u64),
            None,
        );

        if !within_bounds {
            let actual = nickname.chars().count();
            return Err(if actual < self.min_length {
                NicknameRuleViolation::TooShort {
                    min: self.min_length,
                    actual,
                }
            } else {
                NicknameRuleViolation::TooLong {
                    max: self.max_length,
                    actual,
                }
            });
        }

        if !nickname.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(NicknameRuleViolation::NotAlphanumeric);
        }

        Ok(())
    }
}

impl Default for NicknamePolicy {
    fn default() -> Self {
        Self {
            min_length: DEFAULT_MIN_NICKNAME_LENGTH,
            max_length: DEFAULT_MAX_NICKNAME_LENGTH,
        }
    }
}

//! Validation rules applied to a candidate tag before it is committed.
//!
//! A rule is any `Fn(&str) -> Result<(), ValidationError>`.  [`Validators`]
//! runs its rules in order; a candidate is valid only when every rule passes.
//! The candidate is the text *after* the widget's transform has been applied.

/// Why a candidate failed a rule.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("a value is required")]
    Required,
    #[error("must be at least {min} characters (got {actual})")]
    MinLength { min: usize, actual: usize },
    #[error("must be at most {max} characters (got {actual})")]
    MaxLength { max: usize, actual: usize },
    #[error("{0}")]
    Custom(String),
}

/// A single validation rule.
pub type Rule = Box<dyn Fn(&str) -> Result<(), ValidationError> + Send>;

/// Fails on empty text.
pub fn required() -> Rule {
    Box::new(|value| {
        if value.is_empty() {
            Err(ValidationError::Required)
        } else {
            Ok(())
        }
    })
}

/// Fails when the text has fewer than `min` characters.
pub fn min_length(min: usize) -> Rule {
    Box::new(move |value| {
        let actual = value.chars().count();
        if actual < min {
            Err(ValidationError::MinLength { min, actual })
        } else {
            Ok(())
        }
    })
}

/// Fails when the text has more than `max` characters.
pub fn max_length(max: usize) -> Rule {
    Box::new(move |value| {
        let actual = value.chars().count();
        if actual > max {
            Err(ValidationError::MaxLength { max, actual })
        } else {
            Ok(())
        }
    })
}

/// Wrap a predicate; `message` becomes the [`ValidationError::Custom`] text.
pub fn predicate(
    message: impl Into<String>,
    f: impl Fn(&str) -> bool + Send + 'static,
) -> Rule {
    let message = message.into();
    Box::new(move |value| {
        if f(value) {
            Ok(())
        } else {
            Err(ValidationError::Custom(message.clone()))
        }
    })
}

/// An ordered list of rules.
///
/// Every list starts with an implicit [`required`] rule, so an empty
/// candidate is never valid.
pub struct Validators {
    rules: Vec<Rule>,
}

impl Validators {
    pub fn new() -> Self {
        Self {
            rules: vec![required()],
        }
    }

    /// Append a rule (builder variant).
    pub fn with(mut self, rule: Rule) -> Self {
        self.rules.push(rule);
        self
    }

    /// Append a rule.
    pub fn push(&mut self, rule: Rule) {
        self.rules.push(rule);
    }

    /// Number of rules, including the implicit `required`.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Run rules in order and return the first failure.
    pub fn validate(&self, value: &str) -> Result<(), ValidationError> {
        self.rules.iter().try_for_each(|rule| rule(value))
    }

    /// Run every rule and collect all failures.
    pub fn errors(&self, value: &str) -> Vec<ValidationError> {
        self.rules.iter().filter_map(|rule| rule(value).err()).collect()
    }

    pub fn is_valid(&self, value: &str) -> bool {
        self.validate(value).is_ok()
    }
}

impl Default for Validators {
    fn default() -> Self {
        Self::new()
    }
}

impl FromIterator<Rule> for Validators {
    fn from_iter<I: IntoIterator<Item = Rule>>(iter: I) -> Self {
        let mut validators = Validators::new();
        validators.rules.extend(iter);
        validators
    }
}

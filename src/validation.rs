/// A value submitted for validation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value<'a> {
    Text(&'a str),
    Number(i64),
}

impl Value<'_> {
    fn is_blank(&self) -> bool {
        match self {
            Value::Text(s) => s.trim().is_empty(),
            // Numbers always have a non-empty string form
            Value::Number(_) => false,
        }
    }
}

/// Declarative constraints checked against a single value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Validatable<'a> {
    pub value: Value<'a>,
    pub required: bool,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub min: Option<i64>,
    pub max: Option<i64>,
}

impl<'a> Validatable<'a> {
    #[must_use]
    pub fn text(value: &'a str) -> Self {
        Self::new(Value::Text(value))
    }

    #[must_use]
    pub fn number(value: i64) -> Self {
        Self::new(Value::Number(value))
    }

    fn new(value: Value<'a>) -> Self {
        Self {
            value,
            required: false,
            min_length: None,
            max_length: None,
            min: None,
            max: None,
        }
    }

    #[must_use]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    #[must_use]
    pub fn min_length(mut self, len: usize) -> Self {
        self.min_length = Some(len);
        self
    }

    #[must_use]
    pub fn max_length(mut self, len: usize) -> Self {
        self.max_length = Some(len);
        self
    }

    #[must_use]
    pub fn min(mut self, min: i64) -> Self {
        self.min = Some(min);
        self
    }

    #[must_use]
    pub fn max(mut self, max: i64) -> Self {
        self.max = Some(max);
        self
    }
}

/// Checks a value against its constraints. Length bounds only apply to text,
/// range bounds only to numbers.
#[must_use]
pub fn validate(input: &Validatable<'_>) -> bool {
    if input.required && input.value.is_blank() {
        return false;
    }

    match input.value {
        Value::Text(s) => {
            let len = s.trim().chars().count();
            if input.min_length.is_some_and(|min| len < min) {
                return false;
            }
            if input.max_length.is_some_and(|max| len > max) {
                return false;
            }
        }
        Value::Number(n) => {
            if input.min.is_some_and(|min| n < min) {
                return false;
            }
            if input.max.is_some_and(|max| n > max) {
                return false;
            }
        }
    }

    true
}

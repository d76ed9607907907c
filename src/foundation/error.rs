pub type ElevateResult<T> = Result<T, ElevateError>;

#[derive(thiserror::Error, Debug)]
pub enum ElevateError {
    #[error("validation error: {0}")]
    Validation(String),

    #[error("animation error: {0}")]
    Animation(String),

    #[error("routing error: no route matches '{0}'")]
    Routing(String),

    #[error("form error: {field}: {reason}")]
    Form { field: &'static str, reason: String },

    #[error("script error: {0}")]
    Script(String),

    #[error("serialization error: {0}")]
    Serde(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ElevateError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn animation(msg: impl Into<String>) -> Self {
        Self::Animation(msg.into())
    }

    pub fn routing(path: impl Into<String>) -> Self {
        Self::Routing(path.into())
    }

    pub fn form(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Form {
            field,
            reason: reason.into(),
        }
    }

    pub fn script(msg: impl Into<String>) -> Self {
        Self::Script(msg.into())
    }

    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for ElevateError {
    fn from(err: serde_json::Error) -> Self {
        Self::serde(err.to_string())
    }
}

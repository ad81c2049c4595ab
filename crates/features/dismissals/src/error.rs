use std::borrow::Cow;

#[skit_derive::skit_error]
pub enum DismissalError {
    #[error("Validation error{}: {message}", format_context(.context))]
    Validation { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// The remote store rejected or failed a request.
    #[error("Remote dismissal store error{}: {message}", format_context(.context))]
    Remote { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Runtime error{}: {source}", format_context(.context))]
    Runtime { source: tokio::runtime::TryCurrentError, context: Option<Cow<'static, str>> },

    #[error("Task error{}: {source}", format_context(.context))]
    Join { source: tokio::task::JoinError, context: Option<Cow<'static, str>> },

    #[error("Internal dismissal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

impl DismissalError {
    pub fn remote(message: impl Into<Cow<'static, str>>) -> Self {
        Self::Remote { message: message.into(), context: None }
    }

    pub(crate) fn validation(message: impl Into<Cow<'static, str>>) -> Self {
        Self::Validation { message: message.into(), context: None }
    }
}

use skit_dismissals::DismissalError;
use skit_kernel::config::ConfigError;
use skit_modules::ModuleError;
use skit_notifications::NotificationError;
use skit_widgets::WidgetError;
use std::borrow::Cow;

/// Errors surfaced by the [`Dashboard`](crate::Dashboard) facade.
#[skit_derive::skit_error]
pub enum SitekitError {
    #[error("{source}{}", format_context(.context))]
    Config { source: ConfigError, context: Option<Cow<'static, str>> },

    #[error("{source}{}", format_context(.context))]
    Notification { source: NotificationError, context: Option<Cow<'static, str>> },

    #[error("{source}{}", format_context(.context))]
    Widget { source: WidgetError, context: Option<Cow<'static, str>> },

    #[error("{source}{}", format_context(.context))]
    Dismissal { source: DismissalError, context: Option<Cow<'static, str>> },

    #[error("{source}{}", format_context(.context))]
    Module { source: ModuleError, context: Option<Cow<'static, str>> },

    #[cfg(feature = "logging")]
    #[error("{source}{}", format_context(.context))]
    Logger { source: skit_logger::LoggerError, context: Option<Cow<'static, str>> },

    #[error("Internal dashboard error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

use skit_derive::skit_error;
use std::borrow::Cow;

#[skit_error]
pub enum RemoteError {
    #[error("Transport error{}: {source}", format_context(.context))]
    Transport {
        #[source]
        source: std::io::Error,
        context: Option<Cow<'static, str>>,
    },

    #[error("Rejected{}: {message}", format_context(.context))]
    Rejected { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn persist(ok: bool) -> Result<u8, RemoteError> {
    if ok {
        return Ok(1);
    }
    let io: Result<u8, std::io::Error> = Err(std::io::Error::other("offline"));
    io.context("posting dismiss-item")
}

fn main() {
    let err = persist(false).unwrap_err();
    assert!(err.to_string().contains("(posting dismiss-item)"));

    let internal: RemoteError = "boom".into();
    assert_eq!(internal.to_string(), "Internal error: boom");

    let tagged: Result<(), RemoteError> =
        Err(RemoteError::Rejected { message: "403".into(), context: None });
    let tagged = tagged.context("dismissed-items").unwrap_err();
    assert_eq!(tagged.to_string(), "Rejected (dismissed-items): 403");
    assert_eq!(persist(true).unwrap(), 1);
}

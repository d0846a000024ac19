use serde::Serialize;

#[derive(Serialize, Debug)]
pub struct CommonResponse<T> {
    pub status: ResponseStatus,
    pub data: T,
    pub error: Option<String>,
}

impl<T> CommonResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            status: ResponseStatus::Ok,
            data,
            error: None,
        }
    }
}

impl CommonResponse<()> {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: ResponseStatus::Error,
            data: (),
            error: Some(message.into()),
        }
    }
}

#[derive(Serialize, Debug, PartialEq, Eq)]
pub enum ResponseStatus {
    Ok,
    Error,
}

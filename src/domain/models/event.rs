use tui_textarea::Input;

use super::ServiceError;
use super::ServiceHealth;

pub enum Event {
    AskResponse(Result<String, ServiceError>),
    UploadResponse(Result<(), ServiceError>),
    ServiceHealth(ServiceHealth),
    KeyboardCharInput(Input),
    KeyboardCTRLC(),
    KeyboardEnter(),
    KeyboardPaste(String),
    UIResize(),
    UIScrollDown(),
    UIScrollUp(),
    UIScrollPageDown(),
    UIScrollPageUp(),
    UITick(),
}

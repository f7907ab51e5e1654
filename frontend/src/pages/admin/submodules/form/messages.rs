use common::model::level::Level;
use common::model::module::Module;
use common::model::submodule::SubModule;

use super::state::{Tab, UploadSlot};
use crate::services::error::ServiceError;

pub enum Msg {
    Parents(Vec<Module>),
    ParentsFailed(ServiceError),
    Loaded(Box<SubModule>),
    LoadFailed(ServiceError),
    SelectParent(String),
    SetTitle(String),
    SetLevel(Level),
    SetContent(String),
    SetVideoUrl(String),
    SetTab(Tab),
    AutoResize,
    PickFile(UploadSlot),
    FileChosen(UploadSlot, web_sys::File),
    Progress(UploadSlot, f64),
    Uploaded(UploadSlot, Result<String, ServiceError>),
    Submit,
    Saved,
    SaveFailed(ServiceError),
    DismissBanner,
}

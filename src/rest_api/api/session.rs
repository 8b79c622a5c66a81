use std::sync::Arc;

use poem_openapi::{
    payload::{Json, PlainText},
    Object,
};
use rdkit::ROMol;
use tokio::sync::{mpsc::UnboundedReceiver, Mutex};

use crate::conversion::RdkitSmilesEncoder;
use crate::presenter::{ConversionEvent, InteractivePresenter, PresenterError, PresenterView};
use crate::rest_api::api::{
    GetClipboardResponse, GetResultsResponse, GetSessionResponse, SelectFileResponse,
    StartConversionResponse,
};
use crate::rest_api::models::ErrorMessage;
use crate::sdf::{ParseOptions, SdfSource};

pub type RdkitPresenter = InteractivePresenter<SdfSource, RdkitSmilesEncoder>;

/// The one presenter behind the session endpoints.
pub type SharedPresenter = Arc<Mutex<RdkitPresenter>>;

pub fn shared_presenter(options: ParseOptions) -> SharedPresenter {
    Arc::new(Mutex::new(InteractivePresenter::new(
        SdfSource::new(options),
        RdkitSmilesEncoder,
    )))
}

#[derive(Object, Debug)]
pub struct SelectedFile {
    pub path: String,
    pub molecule_count: usize,
}

#[derive(Object, Debug, Clone, PartialEq, Eq)]
pub struct SessionView {
    #[oai(skip_serializing_if_is_none)]
    pub file: Option<String>,
    pub molecule_count: usize,
    pub converting: bool,
    pub percent: u8,
    pub convert_enabled: bool,
    pub copy_enabled: bool,
    pub result_count: usize,
    #[oai(skip_serializing_if_is_none)]
    pub last_error: Option<String>,
}

impl From<PresenterView> for SessionView {
    fn from(view: PresenterView) -> Self {
        Self {
            file: view.file.map(|f| f.display().to_string()),
            molecule_count: view.molecule_count,
            converting: view.converting,
            percent: view.percent,
            convert_enabled: view.convert_enabled,
            copy_enabled: view.copy_enabled,
            result_count: view.result_count,
            last_error: view.last_error,
        }
    }
}

#[derive(Object, Debug)]
pub struct SessionResults {
    pub smiles: Vec<String>,
}

pub async fn v1_select_file(presenter: &SharedPresenter, path: String) -> SelectFileResponse {
    let mut presenter = presenter.lock().await;

    match presenter.select_file(&path) {
        Ok(molecule_count) => SelectFileResponse::Ok(Json(SelectedFile {
            path,
            molecule_count,
        })),
        Err(e @ PresenterError::ConversionInFlight) => SelectFileResponse::Busy(Json(e.into())),
        Err(e) => SelectFileResponse::Err(Json(ErrorMessage::new(format!(
            "Error reading SDF file: {}",
            e
        )))),
    }
}

pub async fn v1_start_conversion(presenter: &SharedPresenter) -> StartConversionResponse {
    let mut guard = presenter.lock().await;

    match guard.start_conversion() {
        Ok(events) => {
            tokio::spawn(apply_events(presenter.clone(), events));
            StartConversionResponse::Started(Json(guard.view().into()))
        }
        Err(e @ PresenterError::ConversionInFlight) => {
            StartConversionResponse::Busy(Json(e.into()))
        }
        Err(e) => StartConversionResponse::Err(Json(e.into())),
    }
}

/// Feeds conversion events back into the presenter until the run ends.
async fn apply_events(
    presenter: SharedPresenter,
    mut events: UnboundedReceiver<ConversionEvent<ROMol>>,
) {
    while let Some(event) = events.recv().await {
        presenter.lock().await.apply(event);
    }
}

pub async fn v1_get_session(presenter: &SharedPresenter) -> GetSessionResponse {
    let presenter = presenter.lock().await;
    GetSessionResponse::Ok(Json(presenter.view().into()))
}

pub async fn v1_get_results(presenter: &SharedPresenter) -> GetResultsResponse {
    let presenter = presenter.lock().await;
    GetResultsResponse::Ok(Json(SessionResults {
        smiles: presenter.results().to_vec(),
    }))
}

pub async fn v1_get_clipboard(presenter: &SharedPresenter) -> GetClipboardResponse {
    let presenter = presenter.lock().await;

    match presenter.clipboard_text() {
        Ok(text) => GetClipboardResponse::Ok(PlainText(text)),
        Err(e) => GetClipboardResponse::Empty(Json(e.into())),
    }
}

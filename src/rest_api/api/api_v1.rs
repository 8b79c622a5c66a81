use poem::web::Data;
use poem_openapi::{param::Query, payload::Json, OpenApi};

use crate::rest_api::api::{
    v1_convert_mol_block_to_smiles, v1_get_clipboard, v1_get_results, v1_get_session,
    v1_select_file, v1_start_conversion, ConvertedSmilesResponse, GetClipboardResponse,
    GetResultsResponse, GetSessionResponse, SelectFileResponse, SharedPresenter,
    StartConversionResponse,
};
use crate::rest_api::models::MolBlock;

#[derive(Default)]
pub struct ApiV1 {}

#[OpenApi]
impl ApiV1 {
    #[oai(path = "/v1/convert/mol_block_to_smiles", method = "post")]
    /// Convert a list of molblocks to SMILES
    pub async fn v1_convert_mol_block_to_smiles(
        &self,
        sanitize: Query<Option<String>>,
        mol_blocks: Json<Vec<MolBlock>>,
    ) -> ConvertedSmilesResponse {
        let sanitize = sanitize.0.unwrap_or_else(|| "true".to_string());
        v1_convert_mol_block_to_smiles(sanitize, mol_blocks).await
    }

    // v1/session/file?path=/data/library.sdf
    #[oai(path = "/v1/session/file", method = "post")]
    /// Select the SDF file to convert and read its molecules
    pub async fn v1_select_file(
        &self,
        path: Query<String>,
        presenter: Data<&SharedPresenter>,
    ) -> SelectFileResponse {
        v1_select_file(presenter.0, path.0).await
    }

    #[oai(path = "/v1/session/convert", method = "post")]
    /// Start converting the selected file; poll the session for progress
    pub async fn v1_start_conversion(
        &self,
        presenter: Data<&SharedPresenter>,
    ) -> StartConversionResponse {
        v1_start_conversion(presenter.0).await
    }

    #[oai(path = "/v1/session", method = "get")]
    /// Selected file, molecule count, progress and control state
    pub async fn v1_get_session(&self, presenter: Data<&SharedPresenter>) -> GetSessionResponse {
        v1_get_session(presenter.0).await
    }

    #[oai(path = "/v1/session/results", method = "get")]
    /// SMILES of the last finished conversion, in file order
    pub async fn v1_get_results(&self, presenter: Data<&SharedPresenter>) -> GetResultsResponse {
        v1_get_results(presenter.0).await
    }

    #[oai(path = "/v1/session/clipboard", method = "get")]
    /// All SMILES of the last conversion, newline-joined
    pub async fn v1_get_clipboard(
        &self,
        presenter: Data<&SharedPresenter>,
    ) -> GetClipboardResponse {
        v1_get_clipboard(presenter.0).await
    }
}

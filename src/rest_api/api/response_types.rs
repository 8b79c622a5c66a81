use poem_openapi::{
    payload::{Json, PlainText},
    ApiResponse,
};

use crate::rest_api::api::{ConvertedSmiles, SelectedFile, SessionResults, SessionView};
use crate::rest_api::models::ErrorMessage;

#[derive(ApiResponse, Debug)]
pub enum ConvertedSmilesResponse {
    #[oai(status = "200", content_type = "application/json")]
    Ok(Json<Vec<ConvertedSmiles>>),
}

#[derive(ApiResponse, Debug)]
pub enum SelectFileResponse {
    #[oai(status = "200", content_type = "application/json")]
    Ok(Json<SelectedFile>),
    #[oai(status = "400", content_type = "application/json")]
    Err(Json<ErrorMessage>),
    #[oai(status = "409", content_type = "application/json")]
    Busy(Json<ErrorMessage>),
}

#[derive(ApiResponse, Debug)]
pub enum StartConversionResponse {
    #[oai(status = "202", content_type = "application/json")]
    Started(Json<SessionView>),
    #[oai(status = "400", content_type = "application/json")]
    Err(Json<ErrorMessage>),
    #[oai(status = "409", content_type = "application/json")]
    Busy(Json<ErrorMessage>),
}

#[derive(ApiResponse, Debug)]
pub enum GetSessionResponse {
    #[oai(status = "200", content_type = "application/json")]
    Ok(Json<SessionView>),
}

#[derive(ApiResponse, Debug)]
pub enum GetResultsResponse {
    #[oai(status = "200", content_type = "application/json")]
    Ok(Json<SessionResults>),
}

#[derive(ApiResponse)]
pub enum GetClipboardResponse {
    #[oai(status = "200")]
    Ok(PlainText<String>),
    #[oai(status = "404", content_type = "application/json")]
    Empty(Json<ErrorMessage>),
}

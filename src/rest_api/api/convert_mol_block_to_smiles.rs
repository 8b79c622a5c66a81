use poem_openapi::payload::Json;
use poem_openapi_derive::Object;

use crate::conversion::{RdkitSmilesEncoder, RecordError, SmilesEncoder};
use crate::rest_api::api::ConvertedSmilesResponse;
use crate::rest_api::models::MolBlock;
use crate::sdf::{parse_mol_block, ParseOptions};

#[derive(Object, Debug)]
pub struct ConvertedSmiles {
    #[oai(skip_serializing_if_is_none)]
    pub smiles: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub error: Option<String>,
}

/// Each block is handled on its own; a bad block gets an `error` entry in
/// its position and the rest still convert.
pub async fn v1_convert_mol_block_to_smiles(
    sanitize: String,
    mol_blocks: Json<Vec<MolBlock>>,
) -> ConvertedSmilesResponse {
    let options = ParseOptions::from_sanitize_flag(&sanitize);

    let converted = mol_blocks
        .0
        .into_iter()
        .map(|mb| {
            let smiles = parse_mol_block(&mb.mol_block, &options).and_then(|mol| {
                match RdkitSmilesEncoder.encode(&mol)? {
                    smiles if smiles.is_empty() => Err(RecordError::EmptySmiles),
                    smiles => Ok(smiles),
                }
            });

            match smiles {
                Ok(smiles) => ConvertedSmiles {
                    smiles: Some(smiles),
                    error: None,
                },
                Err(e) => ConvertedSmiles {
                    smiles: None,
                    error: Some(e.to_string()),
                },
            }
        })
        .collect::<Vec<_>>();

    ConvertedSmilesResponse::Ok(Json(converted))
}

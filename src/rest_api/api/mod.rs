mod api_v1;
pub use api_v1::ApiV1;

mod convert_mol_block_to_smiles;
pub use convert_mol_block_to_smiles::*;

mod session;
pub use session::*;

mod response_types;
pub use response_types::*;

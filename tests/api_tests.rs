mod common;

use std::time::Duration;

use common::{tempdir, write_file, MOL_BLOCK};
use poem::test::TestClient;
use poem::{Endpoint, EndpointExt, Route};
use sdf2smiles::rest_api::api::shared_presenter;
use sdf2smiles::rest_api::openapi_server::{api_service, API_PREFIX};
use sdf2smiles::sdf::ParseOptions;

const ACETYLCARNITINE: &str = "CC(=O)OC(CC(=O)[O-])C[N+](C)(C)C";

fn build_test_client() -> eyre::Result<TestClient<impl Endpoint>> {
    let test_api = api_service("https://does-not-matter.com", API_PREFIX)?;
    let route = Route::new()
        .nest(API_PREFIX, test_api)
        .data(shared_presenter(ParseOptions::default()));

    Ok(TestClient::new(route))
}

async fn wait_until_idle(test_client: &TestClient<impl Endpoint>) -> eyre::Result<()> {
    for _ in 0..200 {
        let response = test_client.get("/api/v1/session").send().await;
        response.assert_status_is_ok();
        let json = response.json().await;
        if !json.value().object().get("converting").bool() {
            return Ok(());
        }
        tokio::time::sleep(Duration::from_millis(25)).await;
    }

    Err(eyre::eyre!("conversion did not finish"))
}

#[tokio::test]
async fn test_session_round_trip() -> eyre::Result<()> {
    let dir = tempdir("api-tests-");
    let sdf = write_file(
        dir.path(),
        "carnitine.sdf",
        &format!("{}$$$$\n{}$$$$\n", MOL_BLOCK, MOL_BLOCK),
    );
    let sdf_path = sdf.display().to_string();
    let test_client = build_test_client()?;

    let response = test_client
        .post("/api/v1/session/file")
        .query("path", &sdf_path)
        .send()
        .await;
    response.assert_status_is_ok();
    response
        .assert_json(&serde_json::json!({"path": sdf_path, "molecule_count": 2}))
        .await;

    let response = test_client.post("/api/v1/session/convert").send().await;
    response.assert_status("202".parse()?);

    wait_until_idle(&test_client).await?;

    let response = test_client.get("/api/v1/session").send().await;
    response.assert_status_is_ok();
    response
        .assert_json(&serde_json::json!({
            "file": sdf_path,
            "molecule_count": 2,
            "converting": false,
            "percent": 100,
            "convert_enabled": true,
            "copy_enabled": true,
            "result_count": 2,
        }))
        .await;

    let response = test_client.get("/api/v1/session/results").send().await;
    response.assert_status_is_ok();
    response
        .assert_json(&serde_json::json!({"smiles": [ACETYLCARNITINE, ACETYLCARNITINE]}))
        .await;

    let response = test_client.get("/api/v1/session/clipboard").send().await;
    response.assert_status_is_ok();
    response
        .assert_text(format!("{}\n{}", ACETYLCARNITINE, ACETYLCARNITINE))
        .await;

    Ok(())
}

#[tokio::test]
async fn test_convert_without_file() -> eyre::Result<()> {
    let test_client = build_test_client()?;

    let response = test_client.post("/api/v1/session/convert").send().await;
    response.assert_status("400".parse()?);
    response
        .assert_json(&serde_json::json!({"error": "No molecules to convert."}))
        .await;

    let response = test_client.get("/api/v1/session/clipboard").send().await;
    response.assert_status("404".parse()?);

    Ok(())
}

#[tokio::test]
async fn test_select_missing_file() -> eyre::Result<()> {
    let dir = tempdir("api-tests-");
    let missing = dir.path().join("missing.sdf").display().to_string();
    let test_client = build_test_client()?;

    let response = test_client
        .post("/api/v1/session/file")
        .query("path", &missing)
        .send()
        .await;
    response.assert_status("400".parse()?);

    let response = test_client.get("/api/v1/session").send().await;
    response.assert_status_is_ok();
    let json = response.json().await;
    let session = json.value().object();
    session.get("molecule_count").assert_i64(0);
    session.get("convert_enabled").assert_bool(false);
    assert!(session
        .get("last_error")
        .string()
        .starts_with("Error reading SDF file:"));

    Ok(())
}

#[tokio::test]
async fn test_mol_block_to_smiles_with_sanitize() -> eyre::Result<()> {
    let test_client = build_test_client()?;

    let response = test_client
        .post("/api/v1/convert/mol_block_to_smiles")
        .body_json(&serde_json::json!([{"mol_block": MOL_BLOCK}]))
        .query("sanitize", &"true")
        .send()
        .await;
    response.assert_status_is_ok();
    response
        .assert_json(&serde_json::json!([{"smiles": ACETYLCARNITINE}]))
        .await;

    Ok(())
}

#[tokio::test]
async fn test_mol_block_to_smiles_without_sanitize() -> eyre::Result<()> {
    let test_client = build_test_client()?;

    let response = test_client
        .post("/api/v1/convert/mol_block_to_smiles")
        .body_json(&serde_json::json!([{"mol_block": MOL_BLOCK}]))
        .query("sanitize", &"false")
        .send()
        .await;
    response.assert_status_is_ok();
    response
        .assert_json(&serde_json::json!([{"smiles": "[H]C([H])([H])C(=O)OC([H])(C([H])([H])C(=O)[O-])C([H])([H])[N+](C([H])([H])[H])(C([H])([H])[H])C([H])([H])[H]"}]))
        .await;

    Ok(())
}

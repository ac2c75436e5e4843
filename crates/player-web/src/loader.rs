use player_core::model::{parse_glb, MeshData};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

async fn fetch_bytes(path: &str) -> anyhow::Result<Vec<u8>> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let resp = JsFuture::from(window.fetch_with_str(path))
        .await
        .map_err(|e| anyhow::anyhow!("fetch {}: {:?}", path, e))?;
    let resp: web::Response = resp
        .dyn_into()
        .map_err(|e| anyhow::anyhow!("not a Response: {:?}", e))?;
    if !resp.ok() {
        anyhow::bail!("fetch {}: HTTP {}", path, resp.status());
    }
    let buf = JsFuture::from(
        resp.array_buffer()
            .map_err(|e| anyhow::anyhow!("{:?}", e))?,
    )
    .await
    .map_err(|e| anyhow::anyhow!("read {}: {:?}", path, e))?;
    Ok(js_sys::Uint8Array::new(&buf).to_vec())
}

/// Fetch and flatten a `.glb` model.
pub async fn load_model(path: &str) -> anyhow::Result<MeshData> {
    let bytes = fetch_bytes(path).await?;
    log::info!("[model] fetched {} ({} bytes)", path, bytes.len());
    Ok(parse_glb(&bytes)?)
}

use showcase_core::ModelMesh;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

async fn fetch_bytes(url: &str) -> anyhow::Result<Vec<u8>> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let resp_value = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|e| anyhow::anyhow!("fetch {}: {:?}", url, e))?;
    let resp: web::Response = resp_value
        .dyn_into()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    if !resp.ok() {
        anyhow::bail!("fetch {}: HTTP {}", url, resp.status());
    }
    let buf = JsFuture::from(
        resp.array_buffer()
            .map_err(|e| anyhow::anyhow!("{:?}", e))?,
    )
    .await
    .map_err(|e| anyhow::anyhow!("read {}: {:?}", url, e))?;
    Ok(js_sys::Uint8Array::new(&buf).to_vec())
}

/// Fetch and parse the showcase model.
pub async fn load_model(url: &str) -> anyhow::Result<ModelMesh> {
    let bytes = fetch_bytes(url).await?;
    log::info!("[asset] fetched {} ({} bytes)", url, bytes.len());
    let mesh = ModelMesh::from_gltf_slice(&bytes)?;
    if let Some((lo, hi)) = mesh.bounds() {
        log::info!(
            "[asset] {} triangles, bounds=({:.2},{:.2},{:.2})..({:.2},{:.2},{:.2})",
            mesh.triangle_count(),
            lo.x, lo.y, lo.z,
            hi.x, hi.y, hi.z
        );
    }
    Ok(mesh)
}

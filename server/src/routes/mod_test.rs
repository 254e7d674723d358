use super::*;

#[test]
fn pkg_dir_is_under_site_root() {
    assert_eq!(pkg_dir(std::path::Path::new("target/site")), PathBuf::from("target/site/pkg"));
}

#[tokio::test]
async fn healthz_reports_ok_and_api_base() {
    let Json(health) = healthz().await;
    let body = serde_json::to_value(&health).unwrap();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["api_base"], client::config::api_base());
}

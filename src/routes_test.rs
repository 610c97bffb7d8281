use super::*;

#[test]
fn pkg_dir_joins_site_root_and_pkg() {
    assert_eq!(pkg_dir("target/site", "pkg"), PathBuf::from("target/site/pkg"));
}

#[tokio::test]
async fn healthz_returns_ok() {
    assert_eq!(healthz().await, StatusCode::OK);
}

#[test]
fn leptos_config_error_is_prefixed() {
    let err = RouteError::LeptosConfig("missing output-name".into());
    assert_eq!(err.to_string(), "leptos configuration: missing output-name");
}

#[cfg(test)]
mod tests {
    use std::{fs, path::PathBuf, process, time::Duration};

    use crate::{
        test_support::{local_client, serve_once},
        *,
    };

    fn temp_path(name: &str) -> PathBuf {
        let mut p = std::env::temp_dir();
        p.push(format!("hero-config-{}-{}", process::id(), name));
        p
    }

    #[tokio::test]
    async fn http_source_loads_document() {
        let url = serve_once(200, r#"{"slides":[{"src":"a.jpg"}],"autoplay":true}"#)
            .await
            .unwrap();
        let source = HttpSource::with_client(url.clone(), local_client());
        assert_eq!(source.location(), url);
        let cfg = load(&source).await.unwrap();
        assert_eq!(cfg.slide_count(), 1);
        assert!(cfg.autoplay);
    }

    #[tokio::test]
    async fn http_error_status_is_reported() {
        let url = serve_once(500, "oops").await.unwrap();
        let err = HttpSource::with_client(url.clone(), local_client()).load().await.unwrap_err();
        assert_eq!(
            err,
            Error::Status {
                location: url,
                status: 500
            }
        );
    }

    #[tokio::test]
    async fn http_malformed_body_is_a_parse_error() {
        let url = serve_once(200, "<html>not json</html>").await.unwrap();
        let err = HttpSource::with_client(url, local_client()).load().await.unwrap_err();
        assert!(matches!(err, Error::Parse { .. }), "got {err:?}");
    }

    #[tokio::test]
    async fn unreachable_host_is_a_fetch_error() {
        // Bind then drop a listener so the port is very likely closed.
        let addr = {
            let l = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            l.local_addr().unwrap()
        };
        let client = reqwest::Client::builder()
            .no_proxy()
            .timeout(Duration::from_secs(2))
            .build()
            .unwrap();
        let source = HttpSource::with_client(format!("http://{addr}/config.json"), client);
        let err = source.load().await.unwrap_err();
        assert!(matches!(err, Error::Fetch { .. }), "got {err:?}");
    }

    #[tokio::test]
    async fn file_source_reads_and_parses() {
        let path = temp_path("ok.json");
        fs::write(&path, r#"{"ariaLabel": "Deals", "slides": []}"#).unwrap();
        let cfg = FileSource::new(&path).load().await.unwrap();
        assert_eq!(cfg.aria_label_or_default(), "Deals");
        let _ = fs::remove_file(&path);
    }

    #[tokio::test]
    async fn missing_file_is_a_fetch_error() {
        let path = temp_path("missing.json");
        let err = FileSource::new(&path).load().await.unwrap_err();
        assert_eq!(err.location(), path.display().to_string());
        assert!(matches!(err, Error::Fetch { .. }));
    }

    #[tokio::test]
    async fn static_source_uses_its_name() {
        let err = StaticSource::new("nope").named("embedded").load().await.unwrap_err();
        assert_eq!(err.location(), "embedded");
    }

    #[test]
    fn source_for_picks_by_scheme() {
        assert_eq!(source_for("https://cdn.test/hero.json").location(), "https://cdn.test/hero.json");
        assert_eq!(source_for("hero/config.json").location(), "hero/config.json");
    }
}

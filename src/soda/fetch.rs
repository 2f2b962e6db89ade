use anyhow::Context;
use reqwest::header::{ACCEPT, ACCEPT_LANGUAGE, HeaderMap, HeaderValue};
use std::time::Duration;

use crate::config::HttpConfig;

/// Final response after redirects.
#[derive(Debug, Clone)]
pub struct Page {
    pub url: String,
    pub body: String,
}

#[derive(Debug, Clone)]
pub struct SodaClient {
    http: reqwest::Client,
}

impl SodaClient {
    pub fn new(cfg: &HttpConfig) -> anyhow::Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("text/html,application/xhtml+xml,*/*;q=0.8"),
        );
        headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("zh-CN,zh;q=0.9,en;q=0.8"));

        let mut builder = reqwest::Client::builder()
            .default_headers(headers)
            .user_agent(cfg.user_agent.as_str())
            .redirect(reqwest::redirect::Policy::limited(cfg.max_redirects));
        if cfg.timeout_secs > 0 {
            builder = builder.timeout(Duration::from_secs(cfg.timeout_secs));
        }
        if !cfg.use_system_proxy {
            builder = builder.no_proxy();
        }

        let http = builder.build().context("build reqwest client")?;
        Ok(Self { http })
    }

    /// GET `url`, following redirects, and return the final page text.
    pub async fn fetch_page(&self, url: &str) -> anyhow::Result<Page> {
        let resp = self
            .http
            .get(url)
            .send()
            .await
            .with_context(|| format!("fetch {url}"))?
            .error_for_status()
            .context("share page http status")?;

        let final_url = resp.url().to_string();
        if final_url != url {
            tracing::debug!("redirected to {final_url}");
        }

        let body = resp.text().await.context("read share page body")?;
        tracing::debug!("fetched {} bytes", body.len());
        Ok(Page {
            url: final_url,
            body,
        })
    }
}


/// One-shot HTTP/1.1 responder for client tests.
#[cfg(test)]
pub(crate) mod test_server {
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Serves `responses` in order, one per connection, then stops.
    /// `{base}` in a response is replaced with the server's own base URL.
    pub async fn serve(responses: Vec<String>) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base = format!("http://{}", listener.local_addr().unwrap());
        let base_for_task = base.clone();
        tokio::spawn(async move {
            for raw in responses {
                let Ok((mut stream, _)) = listener.accept().await else {
                    return;
                };
                let mut buf = [0u8; 4096];
                let _ = stream.read(&mut buf).await;
                let raw = raw.replace("{base}", &base_for_task);
                let _ = stream.write_all(raw.as_bytes()).await;
                let _ = stream.shutdown().await;
            }
        });
        base
    }

    pub fn ok(body: &str) -> String {
        format!(
            "HTTP/1.1 200 OK\r\n\
             Content-Type: text/html; charset=utf-8\r\n\
             Content-Length: {}\r\n\
             Connection: close\r\n\r\n{}",
            body.len(),
            body
        )
    }

    /// A 302 pointing at `{base}{path}`.
    pub fn redirect(path: &str) -> String {
        format!(
            "HTTP/1.1 302 Found\r\nLocation: {{base}}{path}\r\n\
             Content-Length: 0\r\nConnection: close\r\n\r\n"
        )
    }
}

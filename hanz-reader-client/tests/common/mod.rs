//! 共享测试工具：一次性 HTTP 桩服务与断言宏

#![allow(dead_code)]

use std::time::Duration;

use hanz_reader_client::{ClientConfig, HttpAnalysisBackend};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// 跳过测试的宏（当环境变量缺失时）
#[macro_export]
macro_rules! skip_if_no_service {
    ($var:expr) => {
        if std::env::var($var).is_err() {
            eprintln!("跳过测试: 缺少环境变量 {}", $var);
            return;
        }
    };
}

/// 断言 `Option` 为 `Some`，并解包返回内部值（失败则直接让测试失败）。
#[macro_export]
macro_rules! require_some {
    ($expr:expr $(,)?) => {{
        let opt = $expr;
        assert!(opt.is_some(), "expected Some(..), got None");
        let Some(val) = opt else {
            return;
        };
        val
    }};
}

/// 断言 `Result` 为 `Ok`，并解包返回内部值（失败则直接让测试失败）。
#[macro_export]
macro_rules! require_ok {
    ($expr:expr $(,)?) => {{
        let res = $expr;
        assert!(res.is_ok(), "expected Ok(..), got {res:?}");
        let Ok(val) = res else {
            return;
        };
        val
    }};
    ($expr:expr, $($msg:tt)+) => {{
        let res = $expr;
        assert!(
            res.is_ok(),
            "{}: {res:?}",
            format_args!($($msg)+)
        );
        let Ok(val) = res else {
            return;
        };
        val
    }};
}

/// 桩服务收到的请求
#[derive(Debug, Default)]
pub struct CapturedRequest {
    /// 请求行，如 `POST /api/v1/analyze HTTP/1.1`
    pub request_line: String,
    /// 小写的头部
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl CapturedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn json_body(&self) -> serde_json::Value {
        serde_json::from_str(&self.body).unwrap_or_default()
    }
}

/// 桩服务的应答方式
pub enum Reply {
    /// 以给定状态码和 JSON 正文应答
    Json(u16, &'static str),
    /// 读完请求后不应答，直到客户端放弃
    Hang,
}

/// 启动只处理一个连接的桩服务，返回 base URL 与捕获到的请求
pub async fn serve_once(reply: Reply) -> Option<(String, JoinHandle<CapturedRequest>)> {
    let listener = TcpListener::bind("127.0.0.1:0").await.ok()?;
    let addr = listener.local_addr().ok()?;

    let handle = tokio::spawn(async move {
        let Ok((mut stream, _)) = listener.accept().await else {
            return CapturedRequest::default();
        };
        let captured = read_request(&mut stream).await;

        match reply {
            Reply::Json(status, body) => {
                let response = format!(
                    "HTTP/1.1 {status} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                    reason(status),
                    body.len()
                );
                let _ = stream.write_all(response.as_bytes()).await;
                let _ = stream.shutdown().await;
            }
            Reply::Hang => {
                tokio::time::sleep(Duration::from_secs(5)).await;
            }
        }
        captured
    });

    Some((format!("http://{addr}"), handle))
}

/// 未被占用的本地地址（绑定后立即释放）
pub async fn closed_port_url() -> Option<String> {
    let listener = TcpListener::bind("127.0.0.1:0").await.ok()?;
    let addr = listener.local_addr().ok()?;
    drop(listener);
    Some(format!("http://{addr}"))
}

/// 指向 `base_url` 的后端；绕过环境中的代理设置
pub fn backend_for(base_url: &str, timeout_secs: u64) -> Option<HttpAnalysisBackend> {
    let config = ClientConfig {
        base_url: base_url.to_string(),
        timeout_secs,
    };
    let client = reqwest::Client::builder()
        .no_proxy()
        .timeout(config.timeout())
        .build()
        .ok()?;
    Some(HttpAnalysisBackend::with_client(client, config))
}

async fn read_request(stream: &mut tokio::net::TcpStream) -> CapturedRequest {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];

    // 先读到头部结束
    let header_end = loop {
        if let Some(pos) = find_header_end(&buf) {
            break pos;
        }
        match stream.read(&mut chunk).await {
            Ok(0) | Err(_) => return CapturedRequest::default(),
            Ok(n) => buf.extend_from_slice(&chunk[..n]),
        }
    };

    let head = String::from_utf8_lossy(&buf[..header_end]).to_string();
    let mut lines = head.split("\r\n");
    let request_line = lines.next().unwrap_or_default().to_string();
    let headers: Vec<(String, String)> = lines
        .filter_map(|line| line.split_once(':'))
        .map(|(k, v)| (k.trim().to_ascii_lowercase(), v.trim().to_string()))
        .collect();

    let content_length = headers
        .iter()
        .find(|(k, _)| k == "content-length")
        .and_then(|(_, v)| v.parse::<usize>().ok())
        .unwrap_or(0);

    let body_start = header_end + 4;
    while buf.len() < body_start + content_length {
        match stream.read(&mut chunk).await {
            Ok(0) | Err(_) => break,
            Ok(n) => buf.extend_from_slice(&chunk[..n]),
        }
    }

    let body_end = buf.len().min(body_start + content_length);
    let body = String::from_utf8_lossy(&buf[body_start.min(body_end)..body_end]).to_string();

    CapturedRequest {
        request_line,
        headers,
        body,
    }
}

fn find_header_end(buf: &[u8]) -> Option<usize> {
    buf.windows(4).position(|w| w == b"\r\n\r\n")
}

fn reason(status: u16) -> &'static str {
    match status {
        200 => "OK",
        400 => "Bad Request",
        422 => "Unprocessable Entity",
        429 => "Too Many Requests",
        _ => "Internal Server Error",
    }
}

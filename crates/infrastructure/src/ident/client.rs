use async_trait::async_trait;
use identflow_application::ports::IdentClient;
use identflow_domain::DomainError;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::TcpStream;
use tokio::time::timeout;
use tracing::debug;

/// RFC 1413 client. Connects to the remote host's ident service, sends
/// `"<remotePort>,<localPort>\n"` and reads one response line. One timeout
/// covers the whole exchange (connect, write, read).
pub struct TcpIdentClient {
    port: u16,
    timeout: Duration,
}

impl TcpIdentClient {
    pub fn new(port: u16, timeout_secs: u64) -> Self {
        Self {
            port,
            timeout: Duration::from_secs(timeout_secs),
        }
    }
}

#[async_trait]
impl IdentClient for TcpIdentClient {
    async fn query_user(
        &self,
        address: &str,
        remote_port: u16,
        local_port: u16,
    ) -> Result<Option<String>, DomainError> {
        let exchange = async {
            let mut stream = TcpStream::connect((address, self.port)).await?;
            stream
                .write_all(format!("{remote_port},{local_port}\n").as_bytes())
                .await?;

            let mut response = String::new();
            BufReader::new(stream).read_line(&mut response).await?;
            Ok::<String, std::io::Error>(response)
        };

        let response = timeout(self.timeout, exchange)
            .await
            .map_err(|_| {
                DomainError::IdentQueryFailure(format!("ident query to {address} timed out"))
            })?
            .map_err(|e| DomainError::IdentQueryFailure(e.to_string()))?;

        debug!(address, response = response.trim_end(), "ident response received");
        Ok(parse_ident_response(&response))
    }
}

/// Parses an ident response line:
/// `<port-pair> : <status> : <additional-info> : <user-id>`.
/// Returns the user id only when the status is exactly `USERID` and the id
/// is non-empty. Everything after the third colon belongs to the user id,
/// as in the reference resolver, so ids containing colons survive.
fn parse_ident_response(response: &str) -> Option<String> {
    let mut fields = response.splitn(4, ':');
    let _port_pair = fields.next()?;
    if fields.next()?.trim() != "USERID" {
        return None;
    }
    let _additional_info = fields.next()?;
    let user_id = fields.next()?.trim();
    if user_id.is_empty() {
        return None;
    }
    Some(user_id.to_string())
}

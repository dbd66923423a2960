//! TCP backend for networked radios (e.g. the TS-890S LAN port).

use std::io::{Read, Write};
use std::net::{TcpStream, ToSocketAddrs};
use std::time::Duration;

use crate::cat;
use crate::domain::{Response, RigError, RigResult};

use super::reported;

/// Size of the buffer for the single reply read
pub const REPLY_BUF_SIZE: usize = 1024;

/// Sends one CAT line per connection and reads one reply.
///
/// The connection is dropped, and therefore closed, on every return path.
#[derive(Debug, Default, Clone)]
pub struct TcpSender {
    timeout: Option<Duration>,
}

impl TcpSender {
    /// Sender that relies on the OS connect/read timeouts
    pub fn new() -> Self {
        Self { timeout: None }
    }

    /// Sender that gives up on connect, write or read after `timeout`
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            timeout: Some(timeout),
        }
    }

    pub fn send(&self, host: &str, port: &str, command: &str) -> RigResult<Response> {
        let mut stream = self.connect(host, port).map_err(reported)?;
        log::debug!("TCP TX {host}:{port}: {command}");

        stream.write_all(&cat::line(command)).map_err(|e| {
            reported(RigError::Io(format!("Error sending command to {host}:{port}: {e}")))
        })?;

        let mut buf = [0u8; REPLY_BUF_SIZE];
        let n = stream.read(&mut buf).map_err(|e| {
            reported(RigError::Io(format!("Error reading response from {host}:{port}: {e}")))
        })?;
        if n == 0 {
            return Err(reported(RigError::Io(format!(
                "Error reading response from {host}:{port}: connection closed without a reply"
            ))));
        }

        let reply = String::from_utf8_lossy(&buf[..n]).into_owned();
        log::debug!("TCP RX {host}:{port}: {reply:?}");
        Ok(Response::Reply(reply))
    }

    fn connect(&self, host: &str, port: &str) -> RigResult<TcpStream> {
        let port_num: u16 = port
            .trim()
            .parse()
            .map_err(|e| connect_error(host, port, e))?;

        let stream = match self.timeout {
            None => TcpStream::connect((host, port_num)).map_err(|e| connect_error(host, port, e))?,
            Some(timeout) => {
                let addrs = (host, port_num)
                    .to_socket_addrs()
                    .map_err(|e| connect_error(host, port, e))?;
                let mut last_err = None;
                let mut connected = None;
                for addr in addrs {
                    match TcpStream::connect_timeout(&addr, timeout) {
                        Ok(stream) => {
                            connected = Some(stream);
                            break;
                        }
                        Err(e) => last_err = Some(e),
                    }
                }
                match (connected, last_err) {
                    (Some(stream), _) => stream,
                    (None, Some(e)) => return Err(connect_error(host, port, e)),
                    (None, None) => return Err(connect_error(host, port, "no addresses resolved")),
                }
            }
        };

        if self.timeout.is_some() {
            stream
                .set_read_timeout(self.timeout)
                .and_then(|()| stream.set_write_timeout(self.timeout))
                .map_err(|e| connect_error(host, port, e))?;
        }
        Ok(stream)
    }
}

fn connect_error(host: &str, port: &str, e: impl std::fmt::Display) -> RigError {
    RigError::Connection(format!("Error connecting to radio at {host}:{port}: {e}"))
}

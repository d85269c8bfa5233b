use std::net::TcpStream;
use std::thread::sleep;
use std::time::{Duration, Instant};

use log::{debug, trace};
use protobuf::Message;
use sc2_proto::sc2api::{
    Request, RequestStartReplay, Response, ResponseObservation, ResponseReplayInfo, Status,
};
use thiserror::Error;
use tungstenite::stream::MaybeTlsStream;
use tungstenite::{connect, Message as WsMessage, WebSocket};

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("could not reach SC2 at {addr} within {timeout:?}")]
    ConnectTimeout { addr: String, timeout: Duration },
    #[error("websocket transport: {0}")]
    Socket(#[from] tungstenite::Error),
    #[error("protobuf: {0}")]
    Proto(#[from] protobuf::ProtobufError),
    #[error("game rejected request: {0}")]
    Game(String),
    #[error("connection closed by the game")]
    Closed,
    #[error("response missing expected {0} payload")]
    MissingPayload(&'static str),
}

type Result<T> = std::result::Result<T, ClientError>;

/// Blocking request/response controller over the SC2 websocket API.
///
/// One request in flight at a time; the game answers every request with
/// exactly one response, so this never needs correlation ids.
pub struct Controller {
    socket: WebSocket<MaybeTlsStream<TcpStream>>,
    status: Status,
}

impl Controller {
    /// Connect to a (possibly still booting) game client, retrying until
    /// `timeout` elapses.
    pub fn connect(addr: &str, port: u16, timeout: Duration) -> Result<Self> {
        let url = format!("ws://{addr}:{port}/sc2api");
        let deadline = Instant::now() + timeout;
        loop {
            match connect(url.as_str()) {
                Ok((socket, _)) => {
                    debug!("connected to {url}");
                    return Ok(Controller { socket, status: Status::launched });
                }
                Err(e) if Instant::now() < deadline => {
                    trace!("connect to {url} failed ({e}), retrying");
                    sleep(Duration::from_secs(1));
                }
                Err(_) => {
                    return Err(ClientError::ConnectTimeout {
                        addr: format!("{addr}:{port}"),
                        timeout,
                    })
                }
            }
        }
    }

    /// Status reported by the last response.
    pub fn status(&self) -> Status {
        self.status
    }

    pub fn request(&mut self, req: Request) -> Result<Response> {
        self.socket.send(WsMessage::Binary(req.write_to_bytes()?))?;
        loop {
            match self.socket.read()? {
                WsMessage::Binary(buf) => {
                    let res = Response::parse_from_bytes(&buf)?;
                    if res.has_status() {
                        self.status = res.get_status();
                    }
                    if !res.get_error().is_empty() {
                        return Err(ClientError::Game(res.get_error().join("; ")));
                    }
                    return Ok(res);
                }
                WsMessage::Close(_) => return Err(ClientError::Closed),
                // The game only talks binary; ignore control frames.
                _ => continue,
            }
        }
    }

    pub fn ping(&mut self) -> Result<()> {
        let mut req = Request::new();
        req.mut_ping();
        self.request(req).map(|_| ())
    }

    pub fn replay_info(&mut self, replay_data: Vec<u8>) -> Result<ResponseReplayInfo> {
        let mut req = Request::new();
        req.mut_replay_info().set_replay_data(replay_data);
        let mut res = self.request(req)?;
        if !res.has_replay_info() {
            return Err(ClientError::MissingPayload("replay_info"));
        }
        let info = res.take_replay_info();
        if info.has_error() {
            return Err(ClientError::Game(format!(
                "{:?}: {}",
                info.get_error(),
                info.get_error_details()
            )));
        }
        Ok(info)
    }

    pub fn start_replay(&mut self, start: RequestStartReplay) -> Result<()> {
        let mut req = Request::new();
        req.set_start_replay(start);
        let res = self.request(req)?;
        let payload = res.get_start_replay();
        if payload.has_error() {
            return Err(ClientError::Game(format!(
                "{:?}: {}",
                payload.get_error(),
                payload.get_error_details()
            )));
        }
        Ok(())
    }

    pub fn step(&mut self, count: u32) -> Result<()> {
        let mut req = Request::new();
        req.mut_step().set_count(count);
        self.request(req).map(|_| ())
    }

    pub fn observe(&mut self) -> Result<ResponseObservation> {
        let mut req = Request::new();
        req.mut_observation();
        let mut res = self.request(req)?;
        if !res.has_observation() {
            return Err(ClientError::MissingPayload("observation"));
        }
        Ok(res.take_observation())
    }

    /// Ask the game to shut down. Errors are expected here since the
    /// process may close the socket before answering.
    pub fn quit(&mut self) {
        let mut req = Request::new();
        req.mut_quit();
        let _ = self.request(req);
    }
}

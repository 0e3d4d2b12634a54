//! Test utilities for routing providers.
//!
//! [`CannedOsrmServer`] is a one-shot HTTP server on the loopback interface
//! that answers the first request with a fixed status and body, letting tests
//! drive [`super::HttpRouteProvider`] end to end without an OSRM instance.
//! [`route_response_json`] and [`error_response_json`] build the bodies.

use std::io::{self, BufRead, BufReader, Write};
use std::net::{TcpListener, TcpStream};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use serde_json::json;

/// One candidate route in a canned response: `[lon, lat]` vertices, metres
/// and seconds.
pub type CannedRoute = (Vec<[f64; 2]>, f64, f64);

/// Successful OSRM Route API body listing `routes` in order.
///
/// # Example
///
/// ```
/// use saferoute_data::routing::test_support::route_response_json;
///
/// let body = route_response_json(&[(vec![[77.2, 28.6]], 1_000.0, 90.0)]);
/// assert!(body.contains("\"code\":\"Ok\""));
/// ```
#[must_use]
pub fn route_response_json(routes: &[CannedRoute]) -> String {
    let routes: Vec<serde_json::Value> = routes
        .iter()
        .map(|(coordinates, distance, duration)| {
            json!({
                "geometry": {"type": "LineString", "coordinates": coordinates},
                "legs": [],
                "distance": distance,
                "duration": duration,
                "weight": duration,
                "weight_name": "routability",
            })
        })
        .collect();
    json!({"code": "Ok", "routes": routes, "waypoints": []}).to_string()
}

/// OSRM failure body with the given `code` and `message`.
#[must_use]
pub fn error_response_json(code: &str, message: &str) -> String {
    json!({"code": code, "message": message}).to_string()
}

/// How the server treats the single connection it accepts.
#[derive(Debug, Clone)]
enum Reply {
    Respond { status: u16, body: String },
    Stall(Duration),
}

/// One-shot loopback HTTP server.
#[derive(Debug)]
pub struct CannedOsrmServer {
    base_url: String,
    handle: JoinHandle<io::Result<String>>,
}

impl CannedOsrmServer {
    /// Serve `body` with HTTP `status` to the first request.
    ///
    /// # Errors
    ///
    /// Returns an error if no loopback port can be bound.
    pub fn respond(status: u16, body: impl Into<String>) -> io::Result<Self> {
        Self::start(Reply::Respond {
            status,
            body: body.into(),
        })
    }

    /// Accept the first request and send nothing for `delay`.
    ///
    /// # Errors
    ///
    /// Returns an error if no loopback port can be bound.
    pub fn stall(delay: Duration) -> io::Result<Self> {
        Self::start(Reply::Stall(delay))
    }

    fn start(reply: Reply) -> io::Result<Self> {
        let listener = TcpListener::bind("127.0.0.1:0")?;
        let address = listener.local_addr()?;
        let handle = thread::spawn(move || serve_once(&listener, &reply));
        Ok(Self {
            base_url: format!("http://{address}"),
            handle,
        })
    }

    /// Base URL to configure the provider with.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Wait for the exchange to finish and return the request target.
    ///
    /// # Errors
    ///
    /// Returns the server's I/O error, or an error if its thread panicked.
    pub fn request_target(self) -> io::Result<String> {
        self.handle
            .join()
            .map_err(|_| io::Error::other("canned OSRM server panicked"))?
    }
}

fn serve_once(listener: &TcpListener, reply: &Reply) -> io::Result<String> {
    let (mut stream, _) = listener.accept()?;
    let target = read_request_target(&stream)?;
    match reply {
        Reply::Respond { status, body } => write_response(&mut stream, *status, body)?,
        Reply::Stall(delay) => thread::sleep(*delay),
    }
    Ok(target)
}

fn read_request_target(stream: &TcpStream) -> io::Result<String> {
    let mut reader = BufReader::new(stream.try_clone()?);
    let mut request_line = String::new();
    reader.read_line(&mut request_line)?;
    loop {
        let mut header = String::new();
        let read = reader.read_line(&mut header)?;
        if read == 0 || header == "\r\n" {
            break;
        }
    }
    Ok(request_line
        .split_whitespace()
        .nth(1)
        .unwrap_or_default()
        .to_owned())
}

fn write_response(stream: &mut TcpStream, status: u16, body: &str) -> io::Result<()> {
    let reason = if status == 200 { "OK" } else { "Error" };
    write!(
        stream,
        "HTTP/1.1 {status} {reason}\r\nContent-Type: application/json\r\n\
         Content-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    )?;
    stream.flush()
}
